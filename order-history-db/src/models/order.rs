use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use order_history_api::OrderStage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subtotal of a line: `price_unit * quantity - discount`.
///
/// The discount is an absolute amount, not a percentage.
pub fn line_subtotal(price_unit: Decimal, quantity: Decimal, discount: Decimal) -> Decimal {
    price_unit * quantity - discount
}

/// A sales order as exposed by the order store.
///
/// Lines are kept in their stored order (by `sequence`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderModel {
    pub id: Uuid,
    pub name: HeaplessString<64>,
    pub customer_id: Uuid,
    pub state: OrderStage,
    pub date_order: DateTime<Utc>,
    pub lines: Vec<OrderLineModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineModel {
    pub id: Uuid,
    pub order_id: Uuid,
    pub sequence: i32,
    pub product_id: Uuid,
    pub quantity: Decimal,
    pub price_unit: Decimal,
    pub discount: Decimal,
}

impl OrderLineModel {
    pub fn price_subtotal(&self) -> Decimal {
        line_subtotal(self.price_unit, self.quantity, self.discount)
    }
}

/// Line of an order that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: Uuid,
    pub quantity: Decimal,
    pub price_unit: Decimal,
    pub discount: Decimal,
}
