pub mod diagnostics;
pub mod frame;

pub use diagnostics::*;
pub use frame::*;
