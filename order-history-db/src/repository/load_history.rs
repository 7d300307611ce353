use async_trait::async_trait;
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;

/// Repository trait for reading history entries
#[async_trait]
pub trait LoadHistory: Send + Sync {
    /// Load the entries owned by `order_id` in display order
    async fn load_history(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<HistoryEntryModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Load a single entry by id
    async fn load_history_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
