use async_trait::async_trait;
use order_history_db::repository::delete_history::DeleteHistory;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::HistoryRepositoryImpl;

impl HistoryRepositoryImpl {
    pub(super) async fn delete_history_impl(
        repo: &HistoryRepositoryImpl,
        order_id: Uuid,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM order_history WHERE order_id = $1")
            .bind(order_id)
            .execute(&*repo.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl DeleteHistory for HistoryRepositoryImpl {
    async fn delete_history(&self, order_id: Uuid) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Self::delete_history_impl(self, order_id).await
    }
}
