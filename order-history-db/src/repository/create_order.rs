use async_trait::async_trait;
use order_history_api::OrderRef;
use uuid::Uuid;

use crate::models::order::NewOrderLine;

/// Repository trait for creating an order together with its lines
///
/// The order and all of its lines are persisted in a single transaction;
/// readers never observe an order with a partial line set.
#[async_trait]
pub trait CreateOrder: Send + Sync {
    /// Create a new draft order for `customer_id`
    ///
    /// # Arguments
    /// * `customer_id` - The customer owning the new order
    /// * `lines` - Lines in the order they should be stored
    ///
    /// # Returns
    /// * `Ok(OrderRef)` - Id and display name of the created order
    /// * `Err` - An error if the transaction could not be executed
    async fn create_order(
        &self,
        customer_id: Uuid,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderRef, Box<dyn std::error::Error + Send + Sync>>;
}
