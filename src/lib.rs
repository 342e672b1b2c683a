// timemap-drift: content drift scoring across archived web TimeMaps.
//
// This is the library root. Each module corresponds to a stage of the
// scoring pipeline: the collection supplies content, text prepares it,
// measures compare it, and pipeline ties them together per TimeMap.

pub mod collection;
pub mod config;
pub mod measures;
pub mod output;
pub mod pipeline;
pub mod text;
