use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use heapless::String as HeaplessString;
use order_history_api::{OrderRef, OrderStage};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::error::Error;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::history_entry::HistoryEntryModel;
use crate::models::order::{NewOrderLine, OrderLineModel, OrderModel};
use crate::repository::{
    ConfigParams, CreateOrder, DeleteHistory, LoadHistory, LoadOrder, OrderFilter, OrderSort,
    ReplaceHistory, SearchOrders, UpdateSelection,
};

/// Order, history and configuration store kept in memory.
#[derive(Default)]
pub struct InMemoryStore {
    orders: RwLock<Vec<OrderModel>>,
    history: RwLock<HashMap<Uuid, Vec<HistoryEntryModel>>>,
    params: RwLock<HashMap<String, String>>,
    next_order_number: RwLock<u32>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed "today" used by the tests.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    pub fn with_order(mut self, order: OrderModel) -> Self {
        self.orders.get_mut().push(order);
        self
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.get_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().len()
    }
}

#[async_trait]
impl SearchOrders for InMemoryStore {
    async fn search_orders(
        &self,
        filter: &OrderFilter,
        sort: OrderSort,
        limit: usize,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        let mut found: Vec<OrderModel> = self
            .orders
            .read()
            .iter()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect();
        found.sort_by(|a, b| sort.compare(a, b));
        found.truncate(limit);
        Ok(found)
    }
}

#[async_trait]
impl LoadOrder for InMemoryStore {
    async fn load_order(&self, id: Uuid) -> Result<Option<OrderModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.orders.read().iter().find(|order| order.id == id).cloned())
    }
}

#[async_trait]
impl CreateOrder for InMemoryStore {
    async fn create_order(
        &self,
        customer_id: Uuid,
        lines: Vec<NewOrderLine>,
    ) -> Result<OrderRef, Box<dyn Error + Send + Sync>> {
        let number = {
            let mut next = self.next_order_number.write();
            *next += 1;
            *next
        };
        let id = Uuid::new_v4();
        let name = HeaplessString::from_str(&format!("S{number:05}"))
            .map_err(|_| "order name too long")?;
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| OrderLineModel {
                id: Uuid::new_v4(),
                order_id: id,
                sequence: (index as i32 + 1) * 10,
                product_id: line.product_id,
                quantity: line.quantity,
                price_unit: line.price_unit,
                discount: line.discount,
            })
            .collect();

        self.orders.write().push(OrderModel {
            id,
            name: name.clone(),
            customer_id,
            state: OrderStage::Draft,
            date_order: Utc::now(),
            lines,
        });
        Ok(OrderRef { id, name })
    }
}

#[async_trait]
impl ConfigParams for InMemoryStore {
    async fn get_param(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        Ok(self.params.read().get(key).cloned())
    }

    async fn set_param(
        &self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut params = self.params.write();
        match value {
            Some(value) => {
                params.insert(key.to_string(), value.to_string());
            }
            None => {
                params.remove(key);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ReplaceHistory for InMemoryStore {
    async fn replace_history(
        &self,
        order_id: Uuid,
        entries: &[HistoryEntryModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.history.write().insert(order_id, entries.to_vec());
        Ok(())
    }
}

#[async_trait]
impl LoadHistory for InMemoryStore {
    async fn load_history(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.history.read().get(&order_id).cloned().unwrap_or_default())
    }

    async fn load_history_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .history
            .read()
            .values()
            .flatten()
            .find(|entry| entry.id == id)
            .cloned())
    }
}

#[async_trait]
impl UpdateSelection for InMemoryStore {
    async fn set_selected(
        &self,
        id: Uuid,
        selected: bool,
    ) -> Result<Option<HistoryEntryModel>, Box<dyn Error + Send + Sync>> {
        let mut history = self.history.write();
        let entry = history
            .values_mut()
            .flatten()
            .find(|entry| entry.id == id)
            .map(|entry| {
                entry.selected = selected;
                entry.clone()
            });
        Ok(entry)
    }
}

#[async_trait]
impl DeleteHistory for InMemoryStore {
    async fn delete_history(&self, order_id: Uuid) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let removed = self.history.write().remove(&order_id);
        Ok(removed.map_or(0, |entries| entries.len() as u64))
    }
}

/// Order store whose every call fails.
pub struct FailingOrders;

impl FailingOrders {
    pub const MESSAGE: &'static str = "order store unavailable";
}

#[async_trait]
impl SearchOrders for FailingOrders {
    async fn search_orders(
        &self,
        _filter: &OrderFilter,
        _sort: OrderSort,
        _limit: usize,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        Err(Self::MESSAGE.into())
    }
}

#[async_trait]
impl CreateOrder for FailingOrders {
    async fn create_order(
        &self,
        _customer_id: Uuid,
        _lines: Vec<NewOrderLine>,
    ) -> Result<OrderRef, Box<dyn Error + Send + Sync>> {
        Err(Self::MESSAGE.into())
    }
}

/// Noon, `days` days before `today`.
pub fn days_ago(today: NaiveDate, days: u64) -> DateTime<Utc> {
    today
        .checked_sub_days(Days::new(days))
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        .and_utc()
}

/// Order with `line_count` lines priced 10, 20, 30... with quantity 1 and
/// no discount.
pub fn create_test_order(
    customer_id: Uuid,
    state: OrderStage,
    date_order: DateTime<Utc>,
    line_count: usize,
) -> OrderModel {
    let id = Uuid::new_v4();
    let name = format!("S{}", &id.simple().to_string()[..8]);
    OrderModel {
        id,
        name: HeaplessString::from_str(&name).unwrap(),
        customer_id,
        state,
        date_order,
        lines: (1..=line_count)
            .map(|n| OrderLineModel {
                id: Uuid::new_v4(),
                order_id: id,
                sequence: n as i32 * 10,
                product_id: Uuid::new_v4(),
                quantity: Decimal::ONE,
                price_unit: Decimal::from(n as i64 * 10),
                discount: Decimal::ZERO,
            })
            .collect(),
    }
}

/// Owning order in draft state without lines.
pub fn create_test_owner(customer_id: Uuid) -> OrderModel {
    create_test_order(customer_id, OrderStage::Draft, Utc::now(), 0)
}
