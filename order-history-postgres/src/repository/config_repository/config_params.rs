use async_trait::async_trait;
use order_history_db::repository::config_params::ConfigParams;
use sqlx::Row;
use std::error::Error;

use super::repo_impl::ConfigRepositoryImpl;

impl ConfigRepositoryImpl {
    pub(super) async fn get_param_impl(
        repo: &ConfigRepositoryImpl,
        key: &str,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query("SELECT value FROM config_parameter WHERE key = $1")
            .bind(key)
            .fetch_optional(&*repo.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    pub(super) async fn set_param_impl(
        repo: &ConfigRepositoryImpl,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        match value {
            Some(value) => {
                sqlx::query(
                    r#"
                    INSERT INTO config_parameter (key, value) VALUES ($1, $2)
                    ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
                    "#,
                )
                .bind(key)
                .bind(value)
                .execute(&*repo.pool)
                .await?;
            }
            None => {
                sqlx::query("DELETE FROM config_parameter WHERE key = $1")
                    .bind(key)
                    .execute(&*repo.pool)
                    .await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ConfigParams for ConfigRepositoryImpl {
    async fn get_param(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        Self::get_param_impl(self, key).await
    }

    async fn set_param(
        &self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::set_param_impl(self, key, value).await
    }
}
