use async_trait::async_trait;
use uuid::Uuid;

use crate::models::order::OrderModel;

/// Repository trait for loading a single order with its lines
#[async_trait]
pub trait LoadOrder: Send + Sync {
    /// Load an order by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(OrderModel))` - The order if it exists
    /// * `Ok(None)` - If no order has this id
    /// * `Err` - An error if the query could not be executed
    async fn load_order(
        &self,
        id: Uuid,
    ) -> Result<Option<OrderModel>, Box<dyn std::error::Error + Send + Sync>>;
}
