mod blocks;
pub mod bootstrap;
mod calls;
pub mod config;
pub mod errors;
mod events;
mod scan;
mod source;
mod spans;
mod types;

pub use blocks::*;
pub use calls::*;
pub use config::{ScanConfig, ScanConfigBuilder, WatchedContract};
pub use errors::*;
pub use events::*;
pub use scan::*;
pub use source::*;
pub use types::*;
