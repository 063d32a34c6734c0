//! Store infrastructure - feed store backends and the serialization wrapper

mod fs;
mod in_memory;
mod serial;

pub use fs::FsFeedStore;
pub use in_memory::InMemoryFeedStore;
pub use serial::SerialFeedStore;
