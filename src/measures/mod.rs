// Measures — interchangeable score functions comparing a memento against
// the first memento of its TimeMap.

pub mod cosine;
pub mod count;
pub mod distance;
pub mod measure;
pub mod traits;
