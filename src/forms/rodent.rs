//! Rodent Control Form

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::RODENT_BATCH_PRODUCTS;

/// Rodent Control fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RodentDraft {
    pub replaced_rodentbox: bool,
    pub replaced_warning_sign: bool,
    pub replaced_insect: bool,
    pub attention: String,
    /// Legacy batch numbers keyed by the field names in `RODENT_BATCH_PRODUCTS`
    pub batches: BTreeMap<&'static str, String>,
}

/// Payload for `save_rodent`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RodentRecord {
    pub report_id: String,
    pub replaced_rodentbox: bool,
    pub replaced_warning_sign: bool,
    pub replaced_insect: bool,
    pub attention: String,
    #[serde(flatten)]
    pub batches: BTreeMap<&'static str, String>,
}

impl RodentDraft {
    pub fn batch(&self, field: &str) -> String {
        self.batches.get(field).cloned().unwrap_or_default()
    }

    pub fn set_batch(&mut self, field: &'static str, value: String) {
        self.batches.insert(field, value);
    }

    /// Nothing here is mandatory. Legacy batch numbers are only sent when at
    /// least one was filled in, and then all of them are.
    pub fn record(&self, report_id: &str) -> RodentRecord {
        let any_batch = self.batches.values().any(|v| !v.trim().is_empty());
        let batches = if any_batch {
            RODENT_BATCH_PRODUCTS
                .iter()
                .map(|(field, _)| (*field, self.batch(field).trim().to_string()))
                .collect()
        } else {
            BTreeMap::new()
        };

        RodentRecord {
            report_id: report_id.to_string(),
            replaced_rodentbox: self.replaced_rodentbox,
            replaced_warning_sign: self.replaced_warning_sign,
            replaced_insect: self.replaced_insect,
            attention: self.attention.trim().to_string(),
            batches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_shape_omits_batches() {
        let draft = RodentDraft {
            replaced_rodentbox: true,
            attention: "Seal gap behind fridge".into(),
            ..RodentDraft::default()
        };
        let value = serde_json::to_value(draft.record("41")).unwrap();
        assert_eq!(
            value,
            json!({
                "report_id": "41",
                "replaced_rodentbox": true,
                "replaced_warning_sign": false,
                "replaced_insect": false,
                "attention": "Seal gap behind fridge"
            })
        );
    }

    #[test]
    fn test_legacy_shape_sends_every_batch_field() {
        let mut draft = RodentDraft::default();
        draft.set_batch("bayer", " B-12 ".into());
        let value = serde_json::to_value(draft.record("41")).unwrap();

        assert_eq!(value["bayer"], "B-12");
        assert_eq!(value["rodenthor"], "");
        for (field, _) in RODENT_BATCH_PRODUCTS {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_blank_batches_count_as_empty() {
        let mut draft = RodentDraft::default();
        draft.set_batch("rodenthor", "   ".into());
        assert!(draft.record("41").batches.is_empty());
    }
}
