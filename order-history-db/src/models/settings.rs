use order_history_api::OrderStage;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::repository::config_params::ConfigParams;

pub const LAST_NO_OF_ORDERS_KEY: &str = "sale.last_no_of_orders";
pub const LAST_NO_OF_DAYS_KEY: &str = "sale.last_no_of_days";
pub const ORDER_STAGES_KEY: &str = "sale.order_stages";
pub const ENABLE_REORDER_KEY: &str = "sale.enable_reorder";

/// Which order stages contribute to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageFilter {
    /// Every stage (`draft`, `sent`, `sale`, `done`, `cancel`)
    #[default]
    All,
    Only(OrderStage),
}

impl StageFilter {
    pub fn stages(&self) -> Vec<OrderStage> {
        match self {
            StageFilter::All => OrderStage::ALL.to_vec(),
            StageFilter::Only(stage) => vec![*stage],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageFilter::All => "all",
            StageFilter::Only(stage) => stage.as_str(),
        }
    }
}

impl fmt::Display for StageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StageFilter::All),
            other => other.parse::<OrderStage>().map(StageFilter::Only),
        }
    }
}

/// Snapshot of the reorder settings, loaded once per operation.
///
/// Missing or malformed values fall back to the zero value of their type:
/// no history, no recency filter, all stages, reorder disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReorderSettings {
    /// Maximum number of history lines; 0 disables the history
    pub last_no_of_orders: u32,
    /// Recency window in days; 0 disables the date filter
    pub last_no_of_days: u32,
    pub order_stages: StageFilter,
    pub enable_reorder: bool,
}

impl ReorderSettings {
    pub async fn load<C: ConfigParams + ?Sized>(
        config: &C,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ReorderSettings {
            last_no_of_orders: parse_count(
                LAST_NO_OF_ORDERS_KEY,
                config.get_param(LAST_NO_OF_ORDERS_KEY).await?,
            ),
            last_no_of_days: parse_count(
                LAST_NO_OF_DAYS_KEY,
                config.get_param(LAST_NO_OF_DAYS_KEY).await?,
            ),
            order_stages: parse_stage_filter(config.get_param(ORDER_STAGES_KEY).await?),
            enable_reorder: parse_flag(
                ENABLE_REORDER_KEY,
                config.get_param(ENABLE_REORDER_KEY).await?,
            ),
        })
    }

    /// Writes all four settings back to the store.
    pub async fn save<C: ConfigParams + ?Sized>(
        &self,
        config: &C,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        config
            .set_param(LAST_NO_OF_ORDERS_KEY, Some(&self.last_no_of_orders.to_string()))
            .await?;
        config
            .set_param(LAST_NO_OF_DAYS_KEY, Some(&self.last_no_of_days.to_string()))
            .await?;
        config
            .set_param(ORDER_STAGES_KEY, Some(self.order_stages.as_str()))
            .await?;
        // An unset flag reads as false, so disabling removes the key
        let flag = self.enable_reorder.then_some("True");
        config.set_param(ENABLE_REORDER_KEY, flag).await?;
        Ok(())
    }
}

fn parse_count(key: &str, raw: Option<String>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "ignoring malformed count setting");
            0
        }
    }
}

fn parse_stage_filter(raw: Option<String>) -> StageFilter {
    let Some(raw) = raw else {
        return StageFilter::All;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(key = ORDER_STAGES_KEY, value = %raw, "ignoring unknown order stage setting");
        StageFilter::All
    })
}

fn parse_flag(key: &str, raw: Option<String>) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    match raw.trim() {
        "True" | "true" | "1" => true,
        "False" | "false" | "0" | "" => false,
        _ => {
            warn!(key, value = %raw, "ignoring malformed boolean setting");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_utils::InMemoryStore;

    #[test]
    fn test_stage_filter_all_expands_to_every_stage() {
        assert_eq!(
            StageFilter::All.stages(),
            vec![
                OrderStage::Draft,
                OrderStage::Sent,
                OrderStage::Sale,
                OrderStage::Done,
                OrderStage::Cancel,
            ]
        );
        assert_eq!(
            StageFilter::Only(OrderStage::Done).stages(),
            vec![OrderStage::Done]
        );
    }

    #[test]
    fn test_stage_filter_parsing() {
        assert_eq!("all".parse::<StageFilter>(), Ok(StageFilter::All));
        assert_eq!(
            "cancel".parse::<StageFilter>(),
            Ok(StageFilter::Only(OrderStage::Cancel))
        );
        assert!("shipped".parse::<StageFilter>().is_err());
    }

    #[tokio::test]
    async fn test_load_defaults_when_unset() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryStore::new();

        let settings = ReorderSettings::load(&store).await?;

        assert_eq!(settings, ReorderSettings::default());
        assert_eq!(settings.last_no_of_orders, 0);
        assert_eq!(settings.last_no_of_days, 0);
        assert_eq!(settings.order_stages, StageFilter::All);
        assert!(!settings.enable_reorder);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_parses_values() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryStore::new()
            .with_param(LAST_NO_OF_ORDERS_KEY, "12")
            .with_param(LAST_NO_OF_DAYS_KEY, " 30 ")
            .with_param(ORDER_STAGES_KEY, "sale")
            .with_param(ENABLE_REORDER_KEY, "True");

        let settings = ReorderSettings::load(&store).await?;

        assert_eq!(settings.last_no_of_orders, 12);
        assert_eq!(settings.last_no_of_days, 30);
        assert_eq!(settings.order_stages, StageFilter::Only(OrderStage::Sale));
        assert!(settings.enable_reorder);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_falls_back_on_malformed_values() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryStore::new()
            .with_param(LAST_NO_OF_ORDERS_KEY, "ten")
            .with_param(LAST_NO_OF_DAYS_KEY, "-5")
            .with_param(ORDER_STAGES_KEY, "shipped")
            .with_param(ENABLE_REORDER_KEY, "maybe");

        let settings = ReorderSettings::load(&store).await?;

        assert_eq!(settings, ReorderSettings::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_then_load() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryStore::new().with_param(ENABLE_REORDER_KEY, "True");
        let settings = ReorderSettings {
            last_no_of_orders: 8,
            last_no_of_days: 90,
            order_stages: StageFilter::Only(OrderStage::Done),
            enable_reorder: false,
        };

        settings.save(&store).await?;

        assert_eq!(store.get_param(ENABLE_REORDER_KEY).await?, None);
        assert_eq!(ReorderSettings::load(&store).await?, settings);
        Ok(())
    }
}
