use async_trait::async_trait;
use order_history_db::models::history_entry::HistoryEntryModel;
use order_history_db::repository::replace_history::ReplaceHistory;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::HistoryRepositoryImpl;

impl HistoryRepositoryImpl {
    pub(super) async fn replace_history_impl(
        repo: &HistoryRepositoryImpl,
        order_id: Uuid,
        entries: &[HistoryEntryModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut transaction = repo.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM order_history WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *transaction)
            .await?
            .rows_affected();

        for (position, entry) in entries.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_history
                (id, order_id, position, source_order_id, source_line_id, name, date_order,
                 product_id, price, quantity, discount, line_subtotal, state, selected)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                "#,
            )
            .bind(entry.id)
            .bind(order_id)
            .bind(i32::try_from(position)?)
            .bind(entry.source_order_id)
            .bind(entry.source_line_id)
            .bind(entry.name.as_str())
            .bind(entry.date_order)
            .bind(entry.product_id)
            .bind(entry.price())
            .bind(entry.quantity())
            .bind(entry.discount())
            .bind(entry.line_subtotal())
            .bind(entry.state)
            .bind(entry.selected)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;
        debug!(%order_id, removed, inserted = entries.len(), "replaced order history");
        Ok(())
    }
}

#[async_trait]
impl ReplaceHistory for HistoryRepositoryImpl {
    async fn replace_history(
        &self,
        order_id: Uuid,
        entries: &[HistoryEntryModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::replace_history_impl(self, order_id, entries).await
    }
}
