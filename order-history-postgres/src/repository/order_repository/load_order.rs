use async_trait::async_trait;
use order_history_db::models::order::OrderModel;
use order_history_db::repository::load_order::LoadOrder;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn load_order_impl(
        repo: &OrderRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<OrderModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            "SELECT id, name, customer_id, state, date_order FROM sale_order WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&*repo.pool)
        .await?;

        match row {
            Some(row) => Ok(Self::orders_from_rows(&repo.pool, &[row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl LoadOrder for OrderRepositoryImpl {
    async fn load_order(&self, id: Uuid) -> Result<Option<OrderModel>, Box<dyn Error + Send + Sync>> {
        Self::load_order_impl(self, id).await
    }
}
