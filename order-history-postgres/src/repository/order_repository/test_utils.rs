use chrono::{DateTime, Utc};
use order_history_api::OrderStage;
use order_history_db::models::order::OrderModel;
use sqlx::PgPool;
use uuid::Uuid;

pub use order_history_db::service::test_utils::{create_test_order, days_ago};

/// Insert an order with `line_count` lines and return it as stored.
pub async fn insert_test_order(
    pool: &PgPool,
    customer_id: Uuid,
    state: OrderStage,
    date_order: DateTime<Utc>,
    line_count: usize,
) -> Result<OrderModel, Box<dyn std::error::Error + Send + Sync>> {
    let order = create_test_order(customer_id, state, date_order, line_count);

    sqlx::query(
        "INSERT INTO sale_order (id, name, customer_id, state, date_order) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(order.id)
    .bind(order.name.as_str())
    .bind(order.customer_id)
    .bind(order.state)
    .bind(order.date_order)
    .execute(pool)
    .await?;

    for line in &order.lines {
        sqlx::query(
            r#"
            INSERT INTO sale_order_line
            (id, order_id, sequence, product_id, quantity, price_unit, discount)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(line.id)
        .bind(line.order_id)
        .bind(line.sequence)
        .bind(line.product_id)
        .bind(line.quantity)
        .bind(line.price_unit)
        .bind(line.discount)
        .execute(pool)
        .await?;
    }

    Ok(order)
}
