//! Client Info Form
//!
//! Client contact fields and the report sections chosen for the visit.

use chrono::NaiveDate;

use crate::api::SaveClientArgs;
use crate::error::ValidationError;
use crate::models::ClientMatch;
use crate::wizard::{sequence_for, Sections};

use super::filled;

/// Client Info fields
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    pub email: String,
    pub name: String,
    pub cell: String,
    pub address: String,
    /// Value of the date input, `YYYY-MM-DD`
    pub date: String,
    pub inspection: bool,
    pub fumigation: bool,
}

impl Default for ClientDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            cell: String::new(),
            address: String::new(),
            date: String::new(),
            inspection: true,
            fumigation: false,
        }
    }
}

impl ClientDraft {
    pub fn sections(&self) -> Sections {
        Sections {
            inspection: self.inspection,
            fumigation: self.fumigation,
        }
    }

    /// Fill name, cell and address from a lookup; `None` clears them
    pub fn apply_match(&mut self, found: Option<ClientMatch>) {
        let found = found.unwrap_or_default();
        self.name = found.client_name;
        self.cell = found.client_cell;
        self.address = found.client_address;
    }

    /// Build the `save_client` payload.
    ///
    /// Section choice is checked first so an empty selection never reaches
    /// the backend. The report date may not be after `today`.
    pub fn validate(&self, operator_cpo: &str, today: NaiveDate) -> Result<SaveClientArgs, ValidationError> {
        sequence_for(self.sections())?;

        let (Some(name), Some(email), Some(cell), Some(address)) = (
            filled(&self.name),
            filled(&self.email),
            filled(&self.cell),
            filled(&self.address),
        ) else {
            return Err(ValidationError::Incomplete);
        };
        let user_id = filled(operator_cpo).ok_or(ValidationError::NoOperator)?;

        let date = filled(&self.date).ok_or(ValidationError::Required("Date"))?;
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.clone()))?;
        if date > today {
            return Err(ValidationError::FutureDate);
        }

        Ok(SaveClientArgs {
            client_name: name,
            client_email: email,
            client_cell: cell,
            client_address: address,
            user_id,
            report_date: date.format("%Y-%m-%d").to_string(),
            form_inspection: self.inspection,
            form_fumigation: self.fumigation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn complete() -> ClientDraft {
        ClientDraft {
            email: "manager@spar.co.za".into(),
            name: "Spar Main Road".into(),
            cell: "0215550101".into(),
            address: "12 Main Road".into(),
            date: "2025-03-14".into(),
            ..ClientDraft::default()
        }
    }

    #[test]
    fn test_defaults_to_inspection_only() {
        let draft = ClientDraft::default();
        assert_eq!(draft.sections(), Sections { inspection: true, fumigation: false });
    }

    #[test]
    fn test_no_sections_rejected_before_anything_else() {
        let draft = ClientDraft {
            inspection: false,
            fumigation: false,
            ..complete()
        };
        assert_eq!(draft.validate("1042", today()), Err(ValidationError::NoSections));

        // Even with every other field missing
        let empty = ClientDraft {
            inspection: false,
            ..ClientDraft::default()
        };
        assert_eq!(empty.validate("", today()), Err(ValidationError::NoSections));
    }

    #[test]
    fn test_missing_field() {
        let draft = ClientDraft {
            address: String::new(),
            ..complete()
        };
        assert_eq!(draft.validate("1042", today()), Err(ValidationError::Incomplete));
    }

    #[test]
    fn test_operator_required() {
        assert_eq!(complete().validate(" ", today()), Err(ValidationError::NoOperator));
    }

    #[test]
    fn test_future_date_rejected() {
        let draft = ClientDraft {
            date: "2025-03-15".into(),
            ..complete()
        };
        assert_eq!(draft.validate("1042", today()), Err(ValidationError::FutureDate));
    }

    #[test]
    fn test_garbage_date_rejected() {
        let draft = ClientDraft {
            date: "14/03/2025".into(),
            ..complete()
        };
        assert!(matches!(draft.validate("1042", today()), Err(ValidationError::InvalidDate(_))));
    }

    #[test]
    fn test_payload() {
        let draft = ClientDraft {
            fumigation: true,
            ..complete()
        };
        let args = draft.validate("1042", today()).unwrap();
        assert_eq!(args.user_id, "1042");
        assert_eq!(args.report_date, "2025-03-14");
        assert!(args.form_inspection);
        assert!(args.form_fumigation);
    }

    #[test]
    fn test_lookup_fills_and_clears() {
        let mut draft = ClientDraft::default();
        draft.apply_match(Some(ClientMatch {
            client_name: "Spar".into(),
            client_cell: "021".into(),
            client_address: "Main Rd".into(),
        }));
        assert_eq!(draft.address, "Main Rd");
        draft.apply_match(None);
        assert_eq!(draft.name, "");
        assert_eq!(draft.address, "");
    }
}
