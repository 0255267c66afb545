// Adapters layer: concrete implementations of the domain ports.

pub mod navigation;
pub mod storage;

pub use navigation::{NavigationEvent, RecordingNavigator};
pub use storage::{FileStore, MemoryStore};
