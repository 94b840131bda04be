//! Block range selection

mod window;

pub use window::{BlockRange, LookbackWindow};
