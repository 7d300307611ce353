pub mod repo_impl;
pub mod search_orders;
pub mod load_order;
pub mod create_order;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::OrderRepositoryImpl;
