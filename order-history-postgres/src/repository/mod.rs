pub mod config_repository;
pub mod db_init;
pub mod history_repository;
pub mod order_repository;
