//! Fumigation Service Form
//!
//! Treated areas and target pests with the chemical applied.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{self, TARGET_PESTS, TREATED_AREAS, OTHER};
use crate::error::ValidationError;

use super::filled;

/// Fumigation Service fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDraft {
    /// Checked `area_*` fields
    pub areas: BTreeSet<&'static str>,
    pub area_other: String,
    /// Checked `for_*` fields
    pub pests: BTreeSet<&'static str>,
    pub for_other: String,
    pub chemical_selection: String,
    pub other_chemical: String,
    pub l_number: String,
    pub batch_number: String,
    pub remarks: String,
}

impl ServiceDraft {
    pub fn toggle_area(&mut self, field: &'static str, checked: bool) {
        toggle(&mut self.areas, field, checked);
    }

    pub fn toggle_pest(&mut self, field: &'static str, checked: bool) {
        toggle(&mut self.pests, field, checked);
    }

    /// Pick a chemical; the L number follows the catalog and "other" clears it
    pub fn select_chemical(&mut self, value: &str) {
        self.chemical_selection = value.to_string();
        self.other_chemical.clear();
        self.l_number = catalog::chemical_l_number(value).to_string();
    }

    pub fn validate(&self, report_id: &str) -> Result<ServiceRecord, ValidationError> {
        let chemical = filled(&self.chemical_selection).ok_or(ValidationError::Required("Chemical"))?;
        let other_chemical = filled(&self.other_chemical).unwrap_or_default();
        if chemical == OTHER && other_chemical.is_empty() {
            return Err(ValidationError::Required("Other chemical"));
        }

        Ok(ServiceRecord {
            report_id: report_id.to_string(),
            areas: TREATED_AREAS
                .iter()
                .map(|(field, _)| (*field, self.areas.contains(field)))
                .collect(),
            area_other: self.area_other.trim().to_string(),
            pests: TARGET_PESTS
                .iter()
                .map(|(field, _)| (*field, self.pests.contains(field)))
                .collect(),
            for_other: self.for_other.trim().to_string(),
            chemical_selection: chemical,
            other_chemical,
            l_number: self.l_number.trim().to_string(),
            batch_number: self.batch_number.trim().to_string(),
            remarks: self.remarks.trim().to_string(),
        })
    }
}

fn toggle(set: &mut BTreeSet<&'static str>, field: &'static str, checked: bool) {
    if checked {
        set.insert(field);
    } else {
        set.remove(field);
    }
}

/// Payload for `save_service`; checklist flags go out as `0`/`1`
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    pub report_id: String,
    pub areas: Vec<(&'static str, bool)>,
    pub area_other: String,
    pub pests: Vec<(&'static str, bool)>,
    pub for_other: String,
    pub chemical_selection: String,
    pub other_chemical: String,
    pub l_number: String,
    pub batch_number: String,
    pub remarks: String,
}

impl Serialize for ServiceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("report_id", &self.report_id)?;
        for (field, checked) in self.areas.iter().chain(&self.pests) {
            map.serialize_entry(field, &u8::from(*checked))?;
        }
        map.serialize_entry("area_other", &self.area_other)?;
        map.serialize_entry("for_other", &self.for_other)?;
        map.serialize_entry("chemical_selection", &self.chemical_selection)?;
        map.serialize_entry("other_chemical", &self.other_chemical)?;
        map.serialize_entry("l_number", &self.l_number)?;
        map.serialize_entry("batch_number", &self.batch_number)?;
        map.serialize_entry("remarks", &self.remarks)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chemical_required() {
        let draft = ServiceDraft::default();
        assert_eq!(draft.validate("41"), Err(ValidationError::Required("Chemical")));
    }

    #[test]
    fn test_other_chemical_required_for_other() {
        let mut draft = ServiceDraft::default();
        draft.select_chemical("Roach Force");
        assert_eq!(draft.l_number, "L8652");

        draft.select_chemical(OTHER);
        assert_eq!(draft.l_number, "");
        assert_eq!(draft.validate("41"), Err(ValidationError::Required("Other chemical")));

        draft.other_chemical = "Diatomaceous earth".into();
        assert!(draft.validate("41").is_ok());
    }

    #[test]
    fn test_payload_flags_are_numeric() {
        let mut draft = ServiceDraft::default();
        draft.select_chemical("Fly Bait");
        draft.toggle_area("area_kitchen", true);
        draft.toggle_area("area_deli", true);
        draft.toggle_area("area_deli", false);
        draft.toggle_pest("for_flies", true);
        draft.for_other = "Wasps".into();

        let value = serde_json::to_value(draft.validate("41").unwrap()).unwrap();
        assert_eq!(value["report_id"], "41");
        assert_eq!(value["area_kitchen"], 1);
        assert_eq!(value["area_deli"], 0);
        assert_eq!(value["area_rubish"], 0);
        assert_eq!(value["for_flies"], 1);
        assert_eq!(value["for_other"], "Wasps");
        assert_eq!(value["chemical_selection"], "Fly Bait");
        assert_eq!(value["l_number"], "L7579");

        let keys = value.as_object().unwrap().len();
        assert_eq!(keys, 1 + TREATED_AREAS.len() + TARGET_PESTS.len() + 7);
    }
}
