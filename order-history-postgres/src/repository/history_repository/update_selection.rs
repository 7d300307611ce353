use async_trait::async_trait;
use order_history_db::models::history_entry::HistoryEntryModel;
use order_history_db::repository::update_selection::UpdateSelection;
use crate::utils::TryFromRow;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::{HistoryRepositoryImpl, HISTORY_COLUMNS};

impl HistoryRepositoryImpl {
    pub(super) async fn set_selected_impl(
        repo: &HistoryRepositoryImpl,
        id: Uuid,
        selected: bool,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "UPDATE order_history SET selected = $2 WHERE id = $1 RETURNING {HISTORY_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(selected)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(HistoryEntryModel::try_from_row).transpose()
    }
}

#[async_trait]
impl UpdateSelection for HistoryRepositoryImpl {
    async fn set_selected(
        &self,
        id: Uuid,
        selected: bool,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::set_selected_impl(self, id, selected).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::history_repository::test_utils::history_for;
    use crate::repository::order_repository::test_utils::{days_ago, insert_test_order};
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use order_history_api::OrderStage;
    use order_history_db::repository::load_history::LoadHistory;
    use order_history_db::repository::replace_history::ReplaceHistory;
    use order_history_db::repository::update_selection::UpdateSelection;
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
    async fn test_set_selected_toggles_one_entry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.repos().history_repository;
        let today = Utc::now().date_naive();
        let customer = Uuid::new_v4();
        let owner = insert_test_order(&ctx.pool, customer, OrderStage::Draft, days_ago(today, 0), 0).await?;
        let source = insert_test_order(&ctx.pool, customer, OrderStage::Sale, days_ago(today, 1), 2).await?;
        let entries = history_for(owner.id, &source);
        repo.replace_history(owner.id, &entries).await?;

        let updated = repo.set_selected(entries[1].id, true).await?.ok_or("entry not found")?;
        assert!(updated.selected);
        assert_eq!(updated.id, entries[1].id);

        let stored = repo.load_history(owner.id).await?;
        assert!(!stored[0].selected);
        assert!(stored[1].selected);

        repo.set_selected(entries[1].id, false).await?;
        assert!(repo.load_history(owner.id).await?.iter().all(|entry| !entry.selected));

        assert!(repo.set_selected(Uuid::new_v4(), true).await?.is_none());
        Ok(())
    }
}
