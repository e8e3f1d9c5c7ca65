mod cue;
mod engine;
mod ticker;

pub use cue::*;
pub use engine::*;
pub use ticker::*;
