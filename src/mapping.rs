pub mod dictionary;
pub mod mapper;

pub use self::dictionary::{ELASTICSEARCH, TypeDictionary, TypeRegistry};
pub use self::mapper::map_schema;
