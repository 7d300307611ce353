use async_trait::async_trait;

/// Key-value configuration store
///
/// Values are stored as strings; typed parsing and defaults are handled by
/// the caller (see `ReorderSettings`).
#[async_trait]
pub trait ConfigParams: Send + Sync {
    /// Get the raw value stored under `key`, `None` if unset
    async fn get_param(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Set `key` to `value`; `None` removes the key
    async fn set_param(
        &self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
