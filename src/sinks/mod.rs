pub mod channel;
pub mod json_lines;
pub mod log;
pub mod memory;
pub mod sink;

pub use channel::ChannelSink;
pub use json_lines::JsonLinesSink;
pub use self::log::LogSink;
pub use memory::MemorySink;
pub use sink::EventSink;
