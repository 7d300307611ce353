pub mod repo_impl;
pub mod config_params;

pub use repo_impl::ConfigRepositoryImpl;
