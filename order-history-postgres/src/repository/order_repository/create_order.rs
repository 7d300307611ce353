use async_trait::async_trait;
use order_history_api::{OrderRef, OrderStage};
use order_history_db::models::order::NewOrderLine;
use order_history_db::repository::create_order::CreateOrder;
use crate::utils::get_heapless_string;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn create_order_impl(
        repo: &OrderRepositoryImpl,
        customer_id: Uuid,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderRef, Box<dyn Error + Send + Sync>> {
        let id = Uuid::new_v4();
        let mut transaction = repo.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO sale_order (id, name, customer_id, state, date_order)
            VALUES ($1, 'S' || LPAD(nextval('sale_order_name_seq')::text, 5, '0'), $2, $3, NOW())
            RETURNING name
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .bind(OrderStage::Draft)
        .fetch_one(&mut *transaction)
        .await?;
        let name = get_heapless_string(&row, "name")?;

        for (index, line) in lines.iter().enumerate() {
            let sequence = (i32::try_from(index)? + 1) * 10;
            sqlx::query(
                r#"
                INSERT INTO sale_order_line
                (id, order_id, sequence, product_id, quantity, price_unit, discount)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(id)
            .bind(sequence)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price_unit)
            .bind(line.discount)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;
        debug!(order_id = %id, order_name = %name, lines = lines.len(), "inserted sale order");
        Ok(OrderRef { id, name })
    }
}

#[async_trait]
impl CreateOrder for OrderRepositoryImpl {
    async fn create_order(
        &self,
        customer_id: Uuid,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderRef, Box<dyn Error + Send + Sync>> {
        Self::create_order_impl(self, customer_id, lines).await
    }
}
