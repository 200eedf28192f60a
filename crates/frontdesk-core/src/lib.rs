pub mod config;
pub mod error;

pub use config::{ChatConfig, FrontdeskConfig, GeneralConfig};
pub use error::{FrontdeskError, Result};
