//! Station Form
//!
//! One bait station as entered in the Add Station dialog. Choosing "other"
//! swaps the product picker for a free-text field.

use crate::api::SaveStationArgs;
use crate::catalog::{self, PoisonType, DEFAULT_QTY_UNIT};
use crate::error::ValidationError;

use super::filled;

/// Add Station dialog fields
#[derive(Debug, Clone, PartialEq)]
pub struct StationDraft {
    pub station_no: String,
    pub is_outside: bool,
    pub is_accessible: bool,
    pub accessible_reason: String,
    pub activity: bool,
    pub remark: String,
    pub poison_type: Option<PoisonType>,
    /// Catalog product title
    pub product: String,
    /// Free-text product when the type is "other"
    pub other: String,
    pub qty: String,
    pub qty_unit: String,
    pub l_number: String,
    pub batch_no: String,
}

impl Default for StationDraft {
    fn default() -> Self {
        Self {
            station_no: String::new(),
            is_outside: false,
            is_accessible: true,
            accessible_reason: String::new(),
            activity: false,
            remark: String::new(),
            poison_type: None,
            product: String::new(),
            other: String::new(),
            qty: String::new(),
            qty_unit: DEFAULT_QTY_UNIT.to_string(),
            l_number: String::new(),
            batch_no: String::new(),
        }
    }
}

impl StationDraft {
    /// Changing the category invalidates the product and its L number
    pub fn select_poison_type(&mut self, poison_type: Option<PoisonType>) {
        if self.poison_type == poison_type {
            return;
        }
        self.poison_type = poison_type;
        self.product.clear();
        self.other.clear();
        self.l_number.clear();
    }

    pub fn select_product(&mut self, title: &str) {
        self.product = title.to_string();
        self.l_number = catalog::station_l_number(title).to_string();
    }

    /// Build the `save_station` payload.
    ///
    /// An inaccessible station only needs a reason; every accessible-only
    /// field is sent as `null`.
    pub fn validate(&self, report_id: &str) -> Result<SaveStationArgs, ValidationError> {
        let station_no = self.station_no.trim().parse::<u32>().unwrap_or(0);

        if !self.is_accessible {
            let reason = filled(&self.accessible_reason).ok_or(ValidationError::Required("Reason"))?;
            return Ok(SaveStationArgs {
                report_id: report_id.to_string(),
                station_no,
                is_accessible: false,
                accessible_reason: Some(reason),
                station_activity: None,
                is_outside: self.is_outside,
                station_remark: None,
                station_poison_type: None,
                other: None,
                poison_selection: None,
                poison_qty: None,
                qty_unit: None,
                station_l_no: None,
                station_batch_no: None,
            });
        }

        if station_no == 0 {
            return Err(ValidationError::Required("Station number"));
        }
        let remark = filled(&self.remark).ok_or(ValidationError::Required("Remark"))?;
        let poison_type = self.poison_type.ok_or(ValidationError::Required("Poison type"))?;
        let product = filled(&self.product);
        if poison_type != PoisonType::Other && product.is_none() {
            return Err(ValidationError::Required("Product"));
        }
        let qty = match filled(&self.qty) {
            Some(q) => Some(q.parse::<f64>().map_err(|_| ValidationError::Required("A numeric quantity"))?),
            None => Some(0.0),
        };

        Ok(SaveStationArgs {
            report_id: report_id.to_string(),
            station_no,
            is_accessible: true,
            accessible_reason: None,
            station_activity: Some(u8::from(self.activity)),
            is_outside: self.is_outside,
            station_remark: Some(remark),
            station_poison_type: Some(poison_type.as_str().to_string()),
            other: (poison_type == PoisonType::Other).then(|| self.other.trim().to_string()),
            poison_selection: Some(product.unwrap_or_default()),
            poison_qty: qty,
            qty_unit: Some(self.qty_unit.clone()),
            station_l_no: Some(self.l_number.trim().to_string()),
            station_batch_no: Some(self.batch_no.trim().to_string()),
        })
    }
}
