use async_trait::async_trait;
use order_history_db::models::history_entry::HistoryEntryModel;
use order_history_db::repository::load_history::LoadHistory;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{HistoryRepositoryImpl, HISTORY_COLUMNS};

impl HistoryRepositoryImpl {
    pub(super) async fn load_history_impl(
        repo: &HistoryRepositoryImpl,
        order_id: Uuid,
    ) -> Result<Vec<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {HISTORY_COLUMNS} FROM order_history WHERE order_id = $1 ORDER BY position"
        );
        let rows = sqlx::query(&query)
            .bind(order_id)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(HistoryEntryModel::try_from_row).collect()
    }

    pub(super) async fn load_history_entry_impl(
        repo: &HistoryRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {HISTORY_COLUMNS} FROM order_history WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(HistoryEntryModel::try_from_row).transpose()
    }
}

#[async_trait]
impl LoadHistory for HistoryRepositoryImpl {
    async fn load_history(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_history_impl(self, order_id).await
    }

    async fn load_history_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_history_entry_impl(self, id).await
    }
}
