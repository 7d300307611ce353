use order_history_db::models::history_entry::HistoryEntryModel;
use order_history_db::models::order::OrderModel;
use uuid::Uuid;

/// One unselected entry per line of `source`, owned by `owner_order_id`.
pub fn history_for(owner_order_id: Uuid, source: &OrderModel) -> Vec<HistoryEntryModel> {
    source
        .lines
        .iter()
        .map(|line| HistoryEntryModel::from_order_line(owner_order_id, source, line))
        .collect()
}
