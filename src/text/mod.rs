// Content preparation — turn raw memento content into something a measure
// can compare: raw text, or a list of normalized tokens.

pub mod prepare;
pub mod stemmer;
pub mod stopwords;
pub mod tokenize;
