use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state of a sales order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "order_stage", rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStage {
    /// Quotation
    Draft,
    /// Quotation sent to the customer
    Sent,
    /// Confirmed sale order
    Sale,
    /// Locked / done
    Done,
    /// Cancelled
    Cancel,
}

impl OrderStage {
    /// Every stage, in lifecycle order.
    pub const ALL: [OrderStage; 5] = [
        OrderStage::Draft,
        OrderStage::Sent,
        OrderStage::Sale,
        OrderStage::Done,
        OrderStage::Cancel,
    ];

    /// Key used in configuration values and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStage::Draft => "draft",
            OrderStage::Sent => "sent",
            OrderStage::Sale => "sale",
            OrderStage::Done => "done",
            OrderStage::Cancel => "cancel",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStage::Draft => "Quotation",
            OrderStage::Sent => "Quotation Sent",
            OrderStage::Sale => "Sale Order",
            OrderStage::Done => "Done",
            OrderStage::Cancel => "Cancelled",
        }
    }
}

/// Displays the human readable label; use [`OrderStage::as_str`] for the
/// stored key.
impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(OrderStage::Draft),
            "sent" => Ok(OrderStage::Sent),
            "sale" => Ok(OrderStage::Sale),
            "done" => Ok(OrderStage::Done),
            "cancel" => Ok(OrderStage::Cancel),
            _ => Err(()),
        }
    }
}

/// Reference to a persisted order, returned for display after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: Uuid,
    pub name: HeaplessString<64>,
}

/// Information the caller needs to open the settings screen when an
/// action is switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPrompt {
    pub title: String,
    /// Configuration key of the flag that gates the action
    pub setting_key: String,
    /// Value the settings screen should show for the flag
    pub default_enabled: bool,
}

impl SettingsPrompt {
    pub fn new(title: impl Into<String>, setting_key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            setting_key: setting_key.into(),
            default_enabled: false,
        }
    }
}

/// Result of a reorder request.
///
/// A disabled feature is a regular outcome, not an error: the caller
/// renders the prompt instead of the new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum ReorderOutcome {
    Created(OrderRef),
    Disabled(SettingsPrompt),
}

impl ReorderOutcome {
    pub fn order(&self) -> Option<&OrderRef> {
        match self {
            ReorderOutcome::Created(order) => Some(order),
            ReorderOutcome::Disabled(_) => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ReorderOutcome::Disabled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_stage_round_trips_through_str() {
        for stage in OrderStage::ALL {
            assert_eq!(stage.as_str().parse::<OrderStage>(), Ok(stage));
        }
        assert!("all".parse::<OrderStage>().is_err());
        assert!("Draft".parse::<OrderStage>().is_err());
    }

    #[test]
    fn test_order_stage_labels() {
        assert_eq!(OrderStage::Draft.label(), "Quotation");
        assert_eq!(OrderStage::Sent.label(), "Quotation Sent");
        assert_eq!(OrderStage::Sale.label(), "Sale Order");
        assert_eq!(OrderStage::Done.label(), "Done");
        assert_eq!(OrderStage::Cancel.label(), "Cancelled");
        assert_eq!(OrderStage::Sent.to_string(), "Quotation Sent");
        assert_eq!(format!("{}", OrderStage::Sale), "Sale Order");
    }

    #[test]
    fn test_order_stage_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStage::Sale).unwrap();
        assert_eq!(json, "\"sale\"");
    }

    #[test]
    fn test_disabled_outcome_serialization() {
        let outcome = ReorderOutcome::Disabled(SettingsPrompt::new(
            "Reorder Disabled",
            "sale.enable_reorder",
        ));
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["outcome"], "disabled");
        assert_eq!(json["data"]["setting_key"], "sale.enable_reorder");
        assert_eq!(json["data"]["default_enabled"], false);
        assert!(outcome.is_disabled());
        assert!(outcome.order().is_none());
    }
}
