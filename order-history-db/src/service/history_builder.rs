use chrono::NaiveDate;
use std::error::Error;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;
use crate::models::order::OrderModel;
use crate::models::settings::ReorderSettings;
use crate::repository::order_filter::{OrderFilter, OrderSort};
use crate::repository::search_orders::SearchOrders;

/// Derives the line-level order history of a customer.
pub struct HistoryBuilder<S: ?Sized> {
    orders: Arc<S>,
}

impl<S: SearchOrders + ?Sized> HistoryBuilder<S> {
    pub fn new(orders: Arc<S>) -> Self {
        Self { orders }
    }

    /// Build the history entries of `customer_id` for the owning order
    /// `order_id`.
    ///
    /// The owning order itself is never part of its history. Other orders
    /// are read most recent first and flattened line by line. At
    /// most `last_no_of_orders` entries are produced; the limit counts lines,
    /// so the last order included may be cut off.
    pub async fn build(
        &self,
        order_id: Uuid,
        customer_id: Uuid,
        settings: &ReorderSettings,
        today: NaiveDate,
    ) -> Result<Vec<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        let limit = settings.last_no_of_orders as usize;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let filter = OrderFilter::from_settings(customer_id, settings, today).excluding(order_id);
        let orders = self
            .orders
            .search_orders(&filter, OrderSort::DateOrderDesc, limit)
            .await?;

        let entries = flatten_orders(order_id, &orders, limit);
        debug!(
            %order_id,
            %customer_id,
            orders = orders.len(),
            entries = entries.len(),
            "built order history"
        );
        Ok(entries)
    }
}

/// Emit one entry per line, stopping as soon as `limit` entries exist.
pub fn flatten_orders(order_id: Uuid, orders: &[OrderModel], limit: usize) -> Vec<HistoryEntryModel> {
    let mut entries = Vec::new();
    'orders: for order in orders {
        for line in &order.lines {
            if entries.len() >= limit {
                break 'orders;
            }
            entries.push(HistoryEntryModel::from_order_line(order_id, order, line));
        }
    }
    entries
}
