pub mod advance_input;
pub mod cli;
pub mod config;
pub mod day_cycle;
pub mod day_segment;
pub mod diagnostic_log;

pub use advance_input::*;
pub use cli::*;
pub use config::*;
pub use day_cycle::*;
pub use day_segment::*;
pub use diagnostic_log::*;
