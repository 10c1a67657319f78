//! Server lookups requested by form reactions

use contracts::domain::a003_stock_item::expiry_from_default_days;
use contracts::shared::choices::scalar_to_string;
use contracts::shared::form_fields::FollowUpKind;
use serde_json::{json, Value};

use crate::shared::api::{get_value, post_json};
use crate::shared::date_utils::today;

/// Compute the new target value for a follow-up.
///
/// `Ok(None)` means there is nothing to fill in (no part selected, no default).
pub async fn resolve_follow_up(kind: FollowUpKind, source_value: &Value) -> Result<Option<Value>, String> {
    let Some(part) = scalar_to_string(source_value) else {
        return Ok(None);
    };

    match kind {
        FollowUpKind::NextSerialNumber => {
            let body = get_value(&format!("/api/part/{}/serial-numbers/", part), &[]).await?;
            Ok(body
                .get("next")
                .and_then(scalar_to_string)
                .map(Value::String))
        }
        FollowUpKind::NextBatchCode => {
            let body = post_json("/api/generate/batch-code/", &json!({ "part": part })).await?;
            Ok(body
                .get("batch_code")
                .and_then(scalar_to_string)
                .filter(|code| !code.is_empty())
                .map(Value::String))
        }
        FollowUpKind::ExpiryFromPart => {
            let body = get_value(&format!("/api/part/{}/", part), &[]).await?;
            let days = body.get("default_expiry").and_then(Value::as_i64).unwrap_or(0);
            Ok(today()
                .and_then(|today| expiry_from_default_days(today, days))
                .map(|date| Value::String(date.format("%Y-%m-%d").to_string())))
        }
    }
}
