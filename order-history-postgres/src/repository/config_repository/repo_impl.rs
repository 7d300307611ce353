use sqlx::PgPool;
use std::sync::Arc;

/// Key/value parameters stored in `config_parameter`.
pub struct ConfigRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl ConfigRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}
