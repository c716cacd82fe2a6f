pub mod outcome;
pub mod pipeline;
pub mod traits;
pub mod trigger;
