use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use order_history_api::OrderStage;
use std::cmp::Ordering;
use uuid::Uuid;

use crate::models::order::OrderModel;
use crate::models::settings::{ReorderSettings, StageFilter};

/// Constraints for an order search
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use order_history_db::repository::order_filter::OrderFilter;
/// use order_history_db::models::settings::StageFilter;
/// use uuid::Uuid;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
/// let filter = OrderFilter::for_customer(Uuid::new_v4())
///     .with_stages(StageFilter::All)
///     .within_days(30, today);
///
/// assert_eq!(filter.states.len(), 5);
/// assert_eq!(
///     filter.date_from.map(|d| d.date_naive()),
///     NaiveDate::from_ymd_opt(2024, 5, 1)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub customer_id: Uuid,
    /// Accepted order states
    pub states: Vec<OrderStage>,
    /// Earliest accepted order date (inclusive), `None` for no lower bound
    pub date_from: Option<DateTime<Utc>>,
    /// Order left out of the result, typically the one being edited
    pub exclude_order_id: Option<Uuid>,
}

impl OrderFilter {
    /// Orders of `customer_id` in any state and at any date
    pub fn for_customer(customer_id: Uuid) -> Self {
        Self {
            customer_id,
            states: OrderStage::ALL.to_vec(),
            date_from: None,
            exclude_order_id: None,
        }
    }

    /// Build the history filter for `customer_id` from a settings snapshot
    pub fn from_settings(customer_id: Uuid, settings: &ReorderSettings, today: NaiveDate) -> Self {
        Self::for_customer(customer_id)
            .with_stages(settings.order_stages)
            .within_days(settings.last_no_of_days, today)
    }

    pub fn with_stages(mut self, stages: StageFilter) -> Self {
        self.states = stages.stages();
        self
    }

    /// Restrict to orders dated on or after midnight of `today - days`.
    /// `days == 0` leaves the date unconstrained.
    pub fn within_days(mut self, days: u32, today: NaiveDate) -> Self {
        self.date_from = if days == 0 {
            None
        } else {
            let start = today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN);
            Some(start.and_time(NaiveTime::MIN).and_utc())
        };
        self
    }

    pub fn excluding(mut self, order_id: Uuid) -> Self {
        self.exclude_order_id = Some(order_id);
        self
    }

    pub fn matches(&self, order: &OrderModel) -> bool {
        order.customer_id == self.customer_id
            && self.exclude_order_id != Some(order.id)
            && self.states.contains(&order.state)
            && self.date_from.map_or(true, |from| order.date_order >= from)
    }
}

/// Sort key and direction for an order search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    DateOrderDesc,
}

impl OrderSort {
    pub fn compare(&self, a: &OrderModel, b: &OrderModel) -> Ordering {
        match self {
            OrderSort::DateOrderDesc => b.date_order.cmp(&a.date_order),
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            OrderSort::DateOrderDesc => "date_order DESC",
        }
    }
}
