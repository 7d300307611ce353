use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for dropping the history of an order, e.g. when the
/// owning order is deleted
#[async_trait]
pub trait DeleteHistory: Send + Sync {
    /// Delete every entry owned by `order_id`
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of deleted entries
    async fn delete_history(
        &self,
        order_id: Uuid,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
