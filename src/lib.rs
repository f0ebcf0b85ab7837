pub mod config;
pub mod core;
pub mod mapping;
pub mod sink;
pub mod validator;

pub use crate::config::ValidatorConfig;
pub use crate::core::*;
pub use crate::mapping::{ELASTICSEARCH, TypeDictionary, TypeRegistry, map_schema};
pub use crate::sink::{LogSink, MemorySink};
pub use crate::validator::{SchemaValidator, validate};
