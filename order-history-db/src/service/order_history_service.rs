use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use order_history_api::{OrderHistoryError, OrderHistoryResult, ReorderOutcome};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;
use crate::models::settings::ReorderSettings;
use crate::repository::{
    ConfigParams, CreateOrder, DeleteHistory, LoadHistory, LoadOrder, ReplaceHistory,
    SearchOrders, UpdateSelection,
};
use crate::service::history_builder::HistoryBuilder;
use crate::service::reorder_assembler::ReorderAssembler;

/// Event entry points of the order history feature.
#[async_trait]
pub trait OrderHistoryService: Send + Sync {
    /// Rebuild the history of `order_id` after its customer changed.
    ///
    /// The previous history is always replaced, also when the same customer
    /// is selected again. `None` clears the history.
    async fn on_customer_changed(
        &self,
        order_id: Uuid,
        customer_id: Option<Uuid>,
    ) -> OrderHistoryResult<Vec<HistoryEntryModel>>;

    /// Create a new order for the customer of `order_id` from the selected
    /// history entries of `order_id`.
    async fn reorder(&self, order_id: Uuid) -> OrderHistoryResult<ReorderOutcome>;

    /// Select the entry `entry_id`, then reorder its owning order.
    ///
    /// The selection is persisted even when reorder turns out to be disabled.
    async fn reorder_single(&self, entry_id: Uuid) -> OrderHistoryResult<ReorderOutcome>;

    /// Toggle the `selected` flag of a history entry.
    async fn set_selected(
        &self,
        entry_id: Uuid,
        selected: bool,
    ) -> OrderHistoryResult<HistoryEntryModel>;

    /// Drop the history owned by a deleted order.
    async fn on_order_deleted(&self, order_id: Uuid) -> OrderHistoryResult<u64>;
}

pub struct OrderHistoryServiceImpl<O: ?Sized, H: ?Sized, C: ?Sized> {
    orders: Arc<O>,
    history: Arc<H>,
    config: Arc<C>,
    builder: HistoryBuilder<O>,
    assembler: ReorderAssembler<O>,
    today: fn() -> NaiveDate,
}

impl<O, H, C> OrderHistoryServiceImpl<O, H, C>
where
    O: SearchOrders + LoadOrder + CreateOrder + ?Sized,
    H: ReplaceHistory + LoadHistory + UpdateSelection + DeleteHistory + ?Sized,
    C: ConfigParams + ?Sized,
{
    pub fn new(orders: Arc<O>, history: Arc<H>, config: Arc<C>) -> Self {
        Self {
            builder: HistoryBuilder::new(orders.clone()),
            assembler: ReorderAssembler::new(orders.clone()),
            orders,
            history,
            config,
            today: || Utc::now().date_naive(),
        }
    }

    /// Replace the clock used for the recency filter.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl<O, H, C> OrderHistoryService for OrderHistoryServiceImpl<O, H, C>
where
    O: SearchOrders + LoadOrder + CreateOrder + ?Sized,
    H: ReplaceHistory + LoadHistory + UpdateSelection + DeleteHistory + ?Sized,
    C: ConfigParams + ?Sized,
{
    async fn on_customer_changed(
        &self,
        order_id: Uuid,
        customer_id: Option<Uuid>,
    ) -> OrderHistoryResult<Vec<HistoryEntryModel>> {
        let entries = match customer_id {
            Some(customer_id) => {
                let settings = ReorderSettings::load(&*self.config).await?;
                self.builder
                    .build(order_id, customer_id, &settings, (self.today)())
                    .await?
            }
            None => Vec::new(),
        };

        self.history.replace_history(order_id, &entries).await?;
        debug!(%order_id, entries = entries.len(), "replaced order history");
        Ok(entries)
    }

    async fn reorder(&self, order_id: Uuid) -> OrderHistoryResult<ReorderOutcome> {
        let order = self
            .orders
            .load_order(order_id)
            .await?
            .ok_or_else(|| OrderHistoryError::NotFound(format!("order {order_id}")))?;
        let settings = ReorderSettings::load(&*self.config).await?;
        let entries = self.history.load_history(order_id).await?;

        let outcome = self
            .assembler
            .reorder(order.customer_id, &entries, &settings)
            .await?;
        Ok(outcome)
    }

    async fn reorder_single(&self, entry_id: Uuid) -> OrderHistoryResult<ReorderOutcome> {
        let entry = self.set_selected(entry_id, true).await?;
        self.reorder(entry.order_id).await
    }

    async fn set_selected(
        &self,
        entry_id: Uuid,
        selected: bool,
    ) -> OrderHistoryResult<HistoryEntryModel> {
        self.history
            .set_selected(entry_id, selected)
            .await?
            .ok_or_else(|| OrderHistoryError::NotFound(format!("history entry {entry_id}")))
    }

    async fn on_order_deleted(&self, order_id: Uuid) -> OrderHistoryResult<u64> {
        let deleted = self.history.delete_history(order_id).await?;
        debug!(%order_id, deleted, "dropped order history");
        Ok(deleted)
    }
}
