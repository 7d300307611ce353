use order_history_db::models::history_entry::{HistoryEntryModel, HistoryEntryRecord};
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub(super) const HISTORY_COLUMNS: &str = "id, order_id, source_order_id, source_line_id, name, date_order, \
     product_id, price, quantity, discount, line_subtotal, state, selected";

pub struct HistoryRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl HistoryRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// The stored `line_subtotal` is read back but recomputed by the model.
impl TryFromRow<PgRow> for HistoryEntryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let record = HistoryEntryRecord {
            id: row.try_get("id")?,
            order_id: row.try_get("order_id")?,
            source_order_id: row.try_get("source_order_id")?,
            source_line_id: row.try_get("source_line_id")?,
            name: get_heapless_string(row, "name")?,
            date_order: row.try_get("date_order")?,
            product_id: row.try_get("product_id")?,
            state: row.try_get("state")?,
            selected: row.try_get("selected")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
            discount: row.try_get("discount")?,
            line_subtotal: row.try_get("line_subtotal")?,
        };
        Ok(record.into())
    }
}
