use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use order_history_api::OrderStage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::order::{line_subtotal, NewOrderLine, OrderLineModel, OrderModel};

/// Snapshot of one historical order line, offered for re-selection on
/// the owning order.
///
/// Price, quantity and discount are private so that `line_subtotal` is
/// recomputed on every change and always equals
/// `price * quantity - discount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HistoryEntryRecord", into = "HistoryEntryRecord")]
pub struct HistoryEntryModel {
    pub id: Uuid,
    /// Order being edited; it exclusively owns this entry
    pub order_id: Uuid,
    /// Historical order the line was copied from
    pub source_order_id: Uuid,
    pub source_line_id: Uuid,
    pub name: HeaplessString<64>,
    pub date_order: DateTime<Utc>,
    pub product_id: Uuid,
    pub state: OrderStage,
    pub selected: bool,
    price: Decimal,
    quantity: Decimal,
    discount: Decimal,
    line_subtotal: Decimal,
}

impl HistoryEntryModel {
    /// Copies order-level and line-level fields of `line` into a new,
    /// unselected entry owned by `owner_order_id`.
    pub fn from_order_line(owner_order_id: Uuid, order: &OrderModel, line: &OrderLineModel) -> Self {
        HistoryEntryRecord {
            id: Uuid::new_v4(),
            order_id: owner_order_id,
            source_order_id: order.id,
            source_line_id: line.id,
            name: order.name.clone(),
            date_order: order.date_order,
            product_id: line.product_id,
            state: order.state,
            selected: false,
            price: line.price_unit,
            quantity: line.quantity,
            discount: line.discount,
            line_subtotal: Decimal::ZERO,
        }
        .into()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn line_subtotal(&self) -> Decimal {
        self.line_subtotal
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
        self.recompute_subtotal();
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.recompute_subtotal();
    }

    pub fn set_discount(&mut self, discount: Decimal) {
        self.discount = discount;
        self.recompute_subtotal();
    }

    fn recompute_subtotal(&mut self) {
        self.line_subtotal = line_subtotal(self.price, self.quantity, self.discount);
    }
}

impl From<&HistoryEntryModel> for NewOrderLine {
    fn from(entry: &HistoryEntryModel) -> Self {
        NewOrderLine {
            product_id: entry.product_id,
            quantity: entry.quantity,
            price_unit: entry.price,
            discount: entry.discount,
        }
    }
}

/// Storage shape of a history entry.
///
/// `line_subtotal` is carried for persistence only; converting a record
/// into a [`HistoryEntryModel`] recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntryRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub source_order_id: Uuid,
    pub source_line_id: Uuid,
    pub name: HeaplessString<64>,
    pub date_order: DateTime<Utc>,
    pub product_id: Uuid,
    pub state: OrderStage,
    pub selected: bool,
    pub price: Decimal,
    pub quantity: Decimal,
    pub discount: Decimal,
    pub line_subtotal: Decimal,
}

impl From<HistoryEntryRecord> for HistoryEntryModel {
    fn from(record: HistoryEntryRecord) -> Self {
        let mut entry = HistoryEntryModel {
            id: record.id,
            order_id: record.order_id,
            source_order_id: record.source_order_id,
            source_line_id: record.source_line_id,
            name: record.name,
            date_order: record.date_order,
            product_id: record.product_id,
            state: record.state,
            selected: record.selected,
            price: record.price,
            quantity: record.quantity,
            discount: record.discount,
            line_subtotal: Decimal::ZERO,
        };
        entry.recompute_subtotal();
        entry
    }
}

impl From<HistoryEntryModel> for HistoryEntryRecord {
    fn from(entry: HistoryEntryModel) -> Self {
        HistoryEntryRecord {
            id: entry.id,
            order_id: entry.order_id,
            source_order_id: entry.source_order_id,
            source_line_id: entry.source_line_id,
            name: entry.name,
            date_order: entry.date_order,
            product_id: entry.product_id,
            state: entry.state,
            selected: entry.selected,
            price: entry.price,
            quantity: entry.quantity,
            discount: entry.discount,
            line_subtotal: entry.line_subtotal,
        }
    }
}
