//! UI Components
//!
//! Wizard step views, list pages, and navigation chrome.

mod delete_confirm_button;
mod loading_indicator;
mod back_button;
mod operator_step;
mod client_info_step;
mod stations_step;
mod add_station_form;
mod rodent_step;
mod service_step;
mod signature_step;
mod success_step;
mod report_form;
mod clients_page;
mod reports_page;
mod top_nav;
mod bottom_nav;
mod sidebar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use loading_indicator::LoadingIndicator;
pub use back_button::BackButton;
pub use operator_step::OperatorStep;
pub use client_info_step::ClientInfoStep;
pub use stations_step::StationsStep;
pub use add_station_form::AddStationForm;
pub use rodent_step::RodentStep;
pub use service_step::ServiceStep;
pub use signature_step::SignatureStep;
pub use success_step::SuccessStep;
pub use report_form::ReportForm;
pub use clients_page::ClientsPage;
pub use reports_page::ReportsPage;
pub use top_nav::TopNav;
pub use bottom_nav::BottomNav;
pub use sidebar::Sidebar;
