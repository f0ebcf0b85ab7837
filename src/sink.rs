pub mod log;
pub mod memory;

pub use self::log::LogSink;
pub use self::memory::MemorySink;
