use contracts::domain::a001_part::Part;

use crate::shared::api::get_json;

pub async fn fetch_part(pk: i64) -> Result<Part, String> {
    get_json::<Part>(&format!("/api/part/{}/", pk), &[]).await
}
