use serde::{Deserialize, Serialize};

/// Row of `GET /api/part/` (and the detail endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub pk: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "IPN", default)]
    pub ipn: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub units: Option<String>,
    /// Days until new stock of this part expires; 0 = never
    #[serde(default)]
    pub default_expiry: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub assembly: bool,
    #[serde(default)]
    pub trackable: bool,
    #[serde(default)]
    pub purchaseable: bool,
    #[serde(default)]
    pub salable: bool,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub in_stock: Option<f64>,
}

impl Part {
    /// "IPN | name | revision", skipping empty parts
    pub fn full_name(&self) -> String {
        [self.ipn.as_deref(), Some(self.name.as_str()), self.revision.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_name_skips_missing_parts() {
        let part: Part = serde_json::from_value(json!({
            "pk": 1,
            "name": "Resistor",
            "IPN": "R-10K",
            "revision": "",
            "default_expiry": 30
        }))
        .unwrap();
        assert_eq!(part.full_name(), "R-10K | Resistor");
        assert_eq!(part.default_expiry, 30);
    }
}
