// Scoring pipeline — iterate TimeMaps, score mementos, collect results.

pub mod drivers;
pub mod sheet;
pub mod timemap;
