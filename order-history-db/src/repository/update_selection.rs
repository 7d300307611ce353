use async_trait::async_trait;
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;

/// Repository trait for toggling the `selected` flag of a history entry
#[async_trait]
pub trait UpdateSelection: Send + Sync {
    /// Persist `selected` for the entry `id`
    ///
    /// # Returns
    /// * `Ok(Some(HistoryEntryModel))` - The updated entry
    /// * `Ok(None)` - If no entry has this id
    /// * `Err` - An error if the update could not be executed
    async fn set_selected(
        &self,
        id: Uuid,
        selected: bool,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
