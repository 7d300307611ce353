use order_history_db::models::order::{OrderLineModel, OrderModel};
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

pub struct OrderRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl OrderRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Load the lines of `order_ids`, grouped by order and sorted by sequence.
    pub(super) async fn load_lines(
        pool: &PgPool,
        order_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<OrderLineModel>>, Box<dyn Error + Send + Sync>> {
        let mut lines: HashMap<Uuid, Vec<OrderLineModel>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(lines);
        }

        let rows = sqlx::query(
            r#"
            SELECT id, order_id, sequence, product_id, quantity, price_unit, discount
            FROM sale_order_line
            WHERE order_id = ANY($1)
            ORDER BY order_id, sequence, id
            "#,
        )
        .bind(order_ids)
        .fetch_all(pool)
        .await?;

        for row in rows {
            let line = OrderLineModel::try_from_row(&row)?;
            lines.entry(line.order_id).or_default().push(line);
        }
        Ok(lines)
    }

    /// Attach loaded lines to header rows, keeping the row order.
    pub(super) async fn orders_from_rows(
        pool: &PgPool,
        rows: &[PgRow],
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        let mut orders = rows
            .iter()
            .map(OrderModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let ids: Vec<Uuid> = orders.iter().map(|order| order.id).collect();
        let mut lines = Self::load_lines(pool, &ids).await?;
        for order in &mut orders {
            order.lines = lines.remove(&order.id).unwrap_or_default();
        }
        Ok(orders)
    }
}

/// Header columns only; lines are loaded separately.
impl TryFromRow<PgRow> for OrderModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(OrderModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            customer_id: row.try_get("customer_id")?,
            state: row.try_get("state")?,
            date_order: row.try_get("date_order")?,
            lines: Vec::new(),
        })
    }
}

impl TryFromRow<PgRow> for OrderLineModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(OrderLineModel {
            id: row.try_get("id")?,
            order_id: row.try_get("order_id")?,
            sequence: row.try_get("sequence")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
            price_unit: row.try_get("price_unit")?,
            discount: row.try_get("discount")?,
        })
    }
}
