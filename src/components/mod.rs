pub mod segment_label;

pub use segment_label::*;
