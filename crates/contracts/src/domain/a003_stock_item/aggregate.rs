use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::enums::StockStatus;

// ============================================================================
// Record
// ============================================================================

/// Row of `GET /api/stock/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub pk: i64,
    pub part: i64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub location: Option<i64>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub purchase_price: Option<String>,
    #[serde(default)]
    pub purchase_price_currency: Option<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl StockItem {
    pub fn status(&self) -> Option<StockStatus> {
        StockStatus::from_code(self.status)
    }

    /// Status label, or the raw code when it is not a known status
    pub fn status_label(&self) -> String {
        self.status()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| self.status.to_string())
    }

    pub fn is_serialized(&self) -> bool {
        self.serial.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|d| d < today)
    }
}

/// Expiry date of new stock given the part's `default_expiry` in days.
/// Zero or negative means the part does not expire.
pub fn expiry_from_default_days(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days <= 0 {
        return None;
    }
    today.checked_add_signed(Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expiry_offsets() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        assert_eq!(
            expiry_from_default_days(today, 10),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(expiry_from_default_days(today, 0), None);
        assert_eq!(expiry_from_default_days(today, -5), None);
    }

    #[test]
    fn parses_list_row() {
        let item: StockItem = serde_json::from_value(json!({
            "pk": 7,
            "part": 3,
            "quantity": 12.5,
            "serial": null,
            "batch": "B-01",
            "status": 55,
            "expiry_date": "2024-01-31"
        }))
        .unwrap();

        assert_eq!(item.status(), Some(StockStatus::Damaged));
        assert_eq!(item.status_label(), "Damaged");
        assert!(!item.is_serialized());
        assert!(item.is_expired(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!item.is_expired(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
    }

    #[test]
    fn unknown_status_code_is_shown_raw() {
        let item: StockItem = serde_json::from_value(json!({"pk": 1, "part": 1, "status": 999})).unwrap();
        assert_eq!(item.status_label(), "999");
    }
}
