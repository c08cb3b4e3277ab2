//! Operator Form

use crate::api::SaveUserArgs;
use crate::error::ValidationError;
use crate::models::Operator;

use super::filled;

/// Operator Info fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorDraft {
    pub cpo: String,
    pub name: String,
    pub cell: String,
}

impl OperatorDraft {
    /// Fill name and cell from a lookup; `None` clears them
    pub fn apply_match(&mut self, found: Option<Operator>) {
        let found = found.unwrap_or_default();
        self.name = found.username;
        self.cell = found.user_cell;
    }

    pub fn validate(&self) -> Result<SaveUserArgs, ValidationError> {
        Ok(SaveUserArgs {
            user_cpo: filled(&self.cpo).ok_or(ValidationError::Required("PCO number"))?,
            user_name: filled(&self.name).ok_or(ValidationError::Required("Name"))?,
            user_cell: filled(&self.cell).ok_or(ValidationError::Required("Contact number"))?,
        })
    }
}
