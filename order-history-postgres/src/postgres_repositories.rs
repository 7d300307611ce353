use order_history_db::service::OrderHistoryServiceImpl;
use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::config_repository::ConfigRepositoryImpl;
use crate::repository::history_repository::HistoryRepositoryImpl;
use crate::repository::order_repository::OrderRepositoryImpl;

/// Order history service wired to the PostgreSQL repositories.
pub type PgOrderHistoryService =
    OrderHistoryServiceImpl<OrderRepositoryImpl, HistoryRepositoryImpl, ConfigRepositoryImpl>;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create the order, history and configuration repositories on the shared pool
    pub fn create_order_history_repositories(&self) -> OrderHistoryRepositories {
        OrderHistoryRepositories {
            order_repository: Arc::new(OrderRepositoryImpl::new(self.pool.clone())),
            history_repository: Arc::new(HistoryRepositoryImpl::new(self.pool.clone())),
            config_repository: Arc::new(ConfigRepositoryImpl::new(self.pool.clone())),
        }
    }

    pub fn create_order_history_service(&self) -> PgOrderHistoryService {
        let repos = self.create_order_history_repositories();
        OrderHistoryServiceImpl::new(
            repos.order_repository,
            repos.history_repository,
            repos.config_repository,
        )
    }
}

pub struct OrderHistoryRepositories {
    pub order_repository: Arc<OrderRepositoryImpl>,
    pub history_repository: Arc<HistoryRepositoryImpl>,
    pub config_repository: Arc<ConfigRepositoryImpl>,
}
