pub mod order_filter;
pub mod search_orders;
pub mod load_order;
pub mod create_order;
pub mod config_params;
pub mod replace_history;
pub mod load_history;
pub mod update_selection;
pub mod delete_history;

// Re-exports
pub use order_filter::*;
pub use search_orders::*;
pub use load_order::*;
pub use create_order::*;
pub use config_params::*;
pub use replace_history::*;
pub use load_history::*;
pub use update_selection::*;
pub use delete_history::*;
