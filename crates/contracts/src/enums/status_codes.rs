use serde::{Deserialize, Serialize};

use crate::shared::choices::Choice;

/// Declares a status-code enum with its numeric code and display label.
macro_rules! status_codes {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $code:literal => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Numeric code used by the REST API
            pub fn code(&self) -> u16 {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Human readable label
            pub fn display_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            pub fn all() -> Vec<$name> {
                vec![$(Self::$variant),+]
            }

            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// All codes as filter choices, in declaration order
            pub fn choices() -> Vec<Choice> {
                Self::all()
                    .into_iter()
                    .map(|s| Choice::new(s.code().to_string(), s.display_name()))
                    .collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display_name())
            }
        }
    };
}

status_codes! {
    /// Stock item status
    StockStatus {
        Ok = 10 => "OK",
        Attention = 50 => "Attention needed",
        Damaged = 55 => "Damaged",
        Destroyed = 60 => "Destroyed",
        Rejected = 65 => "Rejected",
        Lost = 70 => "Lost",
        Quarantined = 75 => "Quarantined",
        Returned = 85 => "Returned",
    }
}

status_codes! {
    PurchaseOrderStatus {
        Pending = 10 => "Pending",
        Placed = 20 => "Placed",
        OnHold = 25 => "On Hold",
        Complete = 30 => "Complete",
        Cancelled = 40 => "Cancelled",
        Lost = 50 => "Lost",
        Returned = 60 => "Returned",
    }
}

status_codes! {
    SalesOrderStatus {
        Pending = 10 => "Pending",
        InProgress = 15 => "In Progress",
        Shipped = 20 => "Shipped",
        OnHold = 25 => "On Hold",
        Complete = 30 => "Complete",
        Cancelled = 40 => "Cancelled",
        Lost = 50 => "Lost",
        Returned = 60 => "Returned",
    }
}

status_codes! {
    ReturnOrderStatus {
        Pending = 10 => "Pending",
        InProgress = 20 => "In Progress",
        OnHold = 25 => "On Hold",
        Complete = 30 => "Complete",
        Cancelled = 40 => "Cancelled",
    }
}

status_codes! {
    TransferOrderStatus {
        Pending = 10 => "Pending",
        Issued = 20 => "Issued",
        OnHold = 25 => "On Hold",
        Complete = 30 => "Complete",
        Cancelled = 40 => "Cancelled",
    }
}

status_codes! {
    /// Build order status
    BuildStatus {
        Pending = 10 => "Pending",
        Production = 20 => "Production",
        OnHold = 25 => "On Hold",
        Cancelled = 30 => "Cancelled",
        Complete = 40 => "Complete",
    }
}

status_codes! {
    /// Result of a stock item test
    TestResult {
        Fail = 0 => "Fail",
        Pass = 1 => "Pass",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for status in StockStatus::all() {
            assert_eq!(StockStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(StockStatus::from_code(11), None);
    }

    #[test]
    fn choices_use_numeric_codes() {
        let choices = BuildStatus::choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0].value, "10");
        assert_eq!(choices[0].label, "Pending");
        assert_eq!(choices[4].value, "40");
    }
}
