use async_trait::async_trait;

use crate::models::order::OrderModel;
use crate::repository::order_filter::{OrderFilter, OrderSort};

/// Repository trait for querying orders with a filter, a sort key and a limit
///
/// Returned orders carry their lines in stored order.
///
/// # Example
/// ```ignore
/// impl SearchOrders for OrderRepositoryImpl {
///     async fn search_orders(&self, filter: &OrderFilter, sort: OrderSort, limit: usize) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait SearchOrders: Send + Sync {
    /// Search orders matching `filter`
    ///
    /// # Arguments
    /// * `filter` - Customer, stage and date constraints
    /// * `sort` - Sort key and direction
    /// * `limit` - Maximum number of orders to return; `0` returns no orders
    ///
    /// # Returns
    /// * `Ok(Vec<OrderModel>)` - At most `limit` orders in `sort` order
    /// * `Err` - An error if the query could not be executed
    async fn search_orders(
        &self,
        filter: &OrderFilter,
        sort: OrderSort,
        limit: usize,
    ) -> Result<Vec<OrderModel>, Box<dyn std::error::Error + Send + Sync>>;
}
