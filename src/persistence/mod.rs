pub mod files;
pub mod state;
pub mod store;

pub use files::{ensure_data_dir, init_local_data_dir};
pub use state::{clear_snapshot, load_dark_mode, load_snapshot, save_dark_mode, save_snapshot};
pub use store::{FileStore, KeyValueStore};

#[cfg(test)]
pub use store::MemoryStore;
