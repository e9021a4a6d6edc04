pub mod activation;
pub mod config;
pub mod encoder;
pub mod error;
mod generator;
pub mod router;
pub mod template;

pub use config::CodegenConfig;
pub use error::{CodegenError, Result};
pub use generator::{CodeGenerator, DISABLED_SENTINEL, UNKNOWN_SENTINEL};
pub use representation;
