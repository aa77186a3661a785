pub mod core;
pub mod input;
pub mod day_cycle;
pub mod diagnostics;
pub mod debug_ui;
