pub mod config;
pub mod converter;
pub mod dates;
pub mod errors;
pub mod extract;
pub mod index;
pub mod paths;
pub mod render;

pub use config::{Config, DuplicatePolicy};
pub use converter::{ConvertSummary, Converter};
pub use errors::{ConvertError, ConvertResult};
