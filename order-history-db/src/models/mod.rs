pub mod history_entry;
pub mod order;
pub mod settings;

// Re-exports
pub use history_entry::*;
pub use order::*;
pub use settings::*;
