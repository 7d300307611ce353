use async_trait::async_trait;
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;

/// Repository trait for replacing the history set of an order
///
/// The existing entries are removed and the new ones inserted within one
/// transaction, so readers see either the old set or the new one.
#[async_trait]
pub trait ReplaceHistory: Send + Sync {
    /// Replace all history entries owned by `order_id`
    ///
    /// # Arguments
    /// * `order_id` - The owning order
    /// * `entries` - The new entries in display order; may be empty
    async fn replace_history(
        &self,
        order_id: Uuid,
        entries: &[HistoryEntryModel],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
