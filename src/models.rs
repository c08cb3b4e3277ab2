//! Frontend Models
//!
//! Records exchanged with the portal backend. The backend is loose about
//! types (ids arrive as numbers or strings, flags as `0`/`1` or booleans),
//! so the deserializers here accept either form.

use serde::{Deserialize, Deserializer, Serialize};

use leptos_infinite::Keyed;

/// Operator (pest control officer) as returned by `search_user` / `save_user`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operator {
    #[serde(default, deserialize_with = "de_text")]
    pub cpo_no: String,
    #[serde(default, deserialize_with = "de_text")]
    pub username: String,
    #[serde(default, deserialize_with = "de_text")]
    pub user_cell: String,
}

/// Client match from `search_client`, used to prefill Client Info
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientMatch {
    #[serde(default, deserialize_with = "de_text")]
    pub client_name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_cell: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_address: String,
}

/// Client row from `get_clients`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(deserialize_with = "de_text")]
    pub client_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_email: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_cell: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_address: String,
    #[serde(default, deserialize_with = "de_text")]
    pub created: String,
}

impl Keyed for Client {
    type Key = String;

    fn key(&self) -> String {
        self.client_id.clone()
    }
}

/// Report row from `get_reports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(deserialize_with = "de_text")]
    pub report_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub user_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub client_name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub report_status: String,
    #[serde(default, deserialize_with = "de_text")]
    pub report_date: String,
}

impl Keyed for ReportSummary {
    type Key = String;

    fn key(&self) -> String {
        self.report_id.clone()
    }
}

/// Station row from `get_stations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(deserialize_with = "de_text")]
    pub id: String,
    #[serde(default, deserialize_with = "de_text")]
    pub station_no: String,
    #[serde(default = "default_true", deserialize_with = "de_flag")]
    pub is_accessible: bool,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub accessible_reason: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub station_activity: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_outside: bool,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub station_remark: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub station_poison_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub other: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub poison: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub poison_qty: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub qty_unit: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub station_l_no: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub station_batch_no: Option<String>,
}

impl Station {
    /// Product label: catalog product, or the free-text entry for "other"
    pub fn product(&self) -> Option<&str> {
        self.poison
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.other.as_deref().filter(|p| !p.is_empty()))
    }

    /// "2 Block" style quantity, when both parts are present and non-zero
    pub fn quantity_label(&self) -> Option<String> {
        let qty = self.poison_qty.as_deref().filter(|q| !q.is_empty() && *q != "0")?;
        let unit = self.qty_unit.as_deref().filter(|u| !u.is_empty())?;
        Some(format!("{} {}", qty, unit))
    }
}

fn default_true() -> bool {
    true
}

// ========================
// Lenient Deserializers
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Loose {
    fn into_text(self) -> String {
        match self {
            Loose::Bool(b) => b.to_string(),
            Loose::Int(i) => i.to_string(),
            Loose::Float(f) => f.to_string(),
            Loose::Text(s) => s,
        }
    }
}

/// Number or string as text; `null` becomes empty
pub fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<Loose>::deserialize(d)?.map(Loose::into_text).unwrap_or_default())
}

/// Number or string as text, keeping `null` as `None`
pub fn de_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Loose>::deserialize(d)?.map(Loose::into_text))
}

/// `true`/`false`, `1`/`0`, or `"1"`/`"0"`/`"true"`; `null` is false
pub fn de_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Option::<Loose>::deserialize(d)? {
        None => false,
        Some(Loose::Bool(b)) => b,
        Some(Loose::Int(i)) => i != 0,
        Some(Loose::Float(f)) => f != 0.0,
        Some(Loose::Text(s)) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_station_with_php_style_values() {
        let station: Station = serde_json::from_value(json!({
            "id": 12,
            "station_no": "4",
            "is_accessible": "1",
            "accessible_reason": null,
            "station_activity": 0,
            "is_outside": 1,
            "station_remark": "eaten",
            "station_poison_type": "poison",
            "poison": "Rodenthor Block",
            "poison_qty": 2,
            "qty_unit": "Block",
            "station_l_no": "L9396",
            "station_batch_no": "B-77"
        }))
        .unwrap();

        assert_eq!(station.id, "12");
        assert_eq!(station.station_no, "4");
        assert!(station.is_accessible);
        assert!(!station.station_activity);
        assert!(station.is_outside);
        assert_eq!(station.product(), Some("Rodenthor Block"));
        assert_eq!(station.quantity_label().as_deref(), Some("2 Block"));
    }

    #[test]
    fn test_inaccessible_station_has_no_quantity() {
        let station: Station = serde_json::from_value(json!({
            "id": "3",
            "station_no": 9,
            "is_accessible": false,
            "accessible_reason": "Locked gate",
            "is_outside": false,
            "poison_qty": null,
            "qty_unit": null
        }))
        .unwrap();

        assert!(!station.is_accessible);
        assert_eq!(station.accessible_reason.as_deref(), Some("Locked gate"));
        assert_eq!(station.quantity_label(), None);
        assert_eq!(station.product(), None);
    }

    #[test]
    fn test_other_station_shows_free_text_product() {
        let station: Station = serde_json::from_value(json!({
            "id": "5",
            "station_poison_type": "other",
            "other": "Glue board",
            "poison": ""
        }))
        .unwrap();
        assert_eq!(station.product(), Some("Glue board"));
    }

    #[test]
    fn test_report_id_number_or_string_share_a_key() {
        let a: ReportSummary = serde_json::from_value(json!({"report_id": 41})).unwrap();
        let b: ReportSummary = serde_json::from_value(json!({"report_id": "41"})).unwrap();
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_client_missing_optional_fields() {
        let client: Client = serde_json::from_value(json!({
            "client_id": 7,
            "client_name": "Spar Main Road"
        }))
        .unwrap();
        assert_eq!(client.client_id, "7");
        assert_eq!(client.client_email, "");
    }
}
