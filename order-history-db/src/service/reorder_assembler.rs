use order_history_api::{ReorderOutcome, SettingsPrompt};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;
use crate::models::order::NewOrderLine;
use crate::models::settings::{ReorderSettings, ENABLE_REORDER_KEY};
use crate::repository::create_order::CreateOrder;

pub const REORDER_DISABLED_TITLE: &str = "Reorder Disabled";

/// Creates a new order from selected history entries.
pub struct ReorderAssembler<O: ?Sized> {
    orders: Arc<O>,
}

impl<O: CreateOrder + ?Sized> ReorderAssembler<O> {
    pub fn new(orders: Arc<O>) -> Self {
        Self { orders }
    }

    /// Create an order for `customer_id` with one line per selected entry.
    ///
    /// Product, quantity, unit price and discount are copied as they were
    /// recorded in the history. Unselected entries are skipped. When the
    /// feature is switched off nothing is written and a settings prompt is
    /// returned instead.
    pub async fn reorder(
        &self,
        customer_id: Uuid,
        entries: &[HistoryEntryModel],
        settings: &ReorderSettings,
    ) -> Result<ReorderOutcome, Box<dyn Error + Send + Sync>> {
        if !settings.enable_reorder {
            debug!(%customer_id, "reorder requested while disabled");
            return Ok(ReorderOutcome::Disabled(disabled_prompt()));
        }

        let lines: Vec<NewOrderLine> = entries
            .iter()
            .filter(|entry| entry.selected)
            .map(NewOrderLine::from)
            .collect();
        let line_count = lines.len();

        let order = self.orders.create_order(customer_id, lines).await?;
        info!(
            %customer_id,
            order_id = %order.id,
            order_name = %order.name,
            lines = line_count,
            "created order from history"
        );
        Ok(ReorderOutcome::Created(order))
    }
}

pub fn disabled_prompt() -> SettingsPrompt {
    SettingsPrompt::new(REORDER_DISABLED_TITLE, ENABLE_REORDER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderLineModel, OrderModel};
    use crate::repository::LoadOrder;
    use crate::service::test_utils::{create_test_order, days_ago, FailingOrders, InMemoryStore};
    use order_history_api::OrderStage;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tokio_test::assert_err;

    fn enabled() -> ReorderSettings {
        ReorderSettings {
            enable_reorder: true,
            ..ReorderSettings::default()
        }
    }

    fn entry(
        order: &OrderModel,
        product_id: Uuid,
        quantity: Decimal,
        price_unit: Decimal,
        discount: Decimal,
        selected: bool,
    ) -> HistoryEntryModel {
        let line = OrderLineModel {
            id: Uuid::new_v4(),
            order_id: order.id,
            sequence: 10,
            product_id,
            quantity,
            price_unit,
            discount,
        };
        let mut entry = HistoryEntryModel::from_order_line(Uuid::new_v4(), order, &line);
        entry.selected = selected;
        entry
    }

    #[tokio::test]
    async fn test_disabled_creates_no_order() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::new());
        let assembler = ReorderAssembler::new(store.clone());
        let source = create_test_order(Uuid::new_v4(), OrderStage::Sale, days_ago(InMemoryStore::today(), 1), 0);
        let entries = vec![entry(&source, Uuid::new_v4(), dec!(1), dec!(3), dec!(0), true)];

        let outcome = assembler
            .reorder(Uuid::new_v4(), &entries, &ReorderSettings::default())
            .await?;

        assert_eq!(outcome, ReorderOutcome::Disabled(disabled_prompt()));
        match outcome {
            ReorderOutcome::Disabled(prompt) => {
                assert_eq!(prompt.title, REORDER_DISABLED_TITLE);
                assert_eq!(prompt.setting_key, ENABLE_REORDER_KEY);
                assert!(!prompt.default_enabled);
            }
            ReorderOutcome::Created(order) => panic!("unexpected order {order:?}"),
        }
        assert_eq!(store.order_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_copies_selected_lines_verbatim() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::new());
        let assembler = ReorderAssembler::new(store.clone());
        let customer = Uuid::new_v4();
        let source = create_test_order(customer, OrderStage::Done, days_ago(InMemoryStore::today(), 3), 0);
        let (p1, p2, p3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let entries = vec![
            entry(&source, p1, dec!(2), dec!(10), dec!(1), true),
            entry(&source, p3, dec!(7), dec!(99), dec!(0), false),
            entry(&source, p2, dec!(1), dec!(5), dec!(0), true),
        ];

        let outcome = assembler.reorder(customer, &entries, &enabled()).await?;

        let order_ref = outcome.order().cloned().ok_or("expected a created order")?;
        let order = store
            .load_order(order_ref.id)
            .await?
            .ok_or("created order not found")?;
        assert_eq!(order.customer_id, customer);
        assert_eq!(order.name, order_ref.name);
        assert_eq!(order.lines.len(), 2);

        assert_eq!(order.lines[0].product_id, p1);
        assert_eq!(order.lines[0].quantity, dec!(2));
        assert_eq!(order.lines[0].price_unit, dec!(10));
        assert_eq!(order.lines[0].discount, dec!(1));

        assert_eq!(order.lines[1].product_id, p2);
        assert_eq!(order.lines[1].quantity, dec!(1));
        assert_eq!(order.lines[1].price_unit, dec!(5));
        assert_eq!(order.lines[1].discount, dec!(0));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_selection_creates_empty_order() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = Arc::new(InMemoryStore::new());
        let assembler = ReorderAssembler::new(store.clone());

        let outcome = assembler.reorder(Uuid::new_v4(), &[], &enabled()).await?;

        let order_ref = outcome.order().cloned().ok_or("expected a created order")?;
        let order = store.load_order(order_ref.id).await?.ok_or("created order not found")?;
        assert!(order.lines.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_failure_propagates() {
        let assembler = ReorderAssembler::new(Arc::new(FailingOrders));

        let error = assert_err!(assembler.reorder(Uuid::new_v4(), &[], &enabled()).await);

        assert_eq!(error.to_string(), FailingOrders::MESSAGE);
    }
}
