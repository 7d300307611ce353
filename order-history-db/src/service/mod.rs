pub mod history_builder;
pub mod order_history_service;
pub mod reorder_assembler;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use history_builder::HistoryBuilder;
pub use order_history_service::{OrderHistoryService, OrderHistoryServiceImpl};
pub use reorder_assembler::ReorderAssembler;
