pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{OrderHistoryRepositories, PgOrderHistoryService, PostgresRepositories};
pub use repository::config_repository::ConfigRepositoryImpl;
pub use repository::history_repository::HistoryRepositoryImpl;
pub use repository::order_repository::OrderRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
