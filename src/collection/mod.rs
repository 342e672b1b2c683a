// Collection model — read-only access to TimeMaps and memento content.
//
// The Collection trait is the only way the scoring pipeline touches
// archived content. Fetching, caching and archive-format parsing all
// live behind it.

pub mod boilerplate;
pub mod directory;
pub mod memory;
pub mod traits;
