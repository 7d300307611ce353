pub mod repo_impl;
pub mod replace_history;
pub mod load_history;
pub mod update_selection;
pub mod delete_history;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::HistoryRepositoryImpl;
