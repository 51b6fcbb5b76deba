pub mod enums;
pub mod payload;
pub mod profile;

pub use enums::{Intent, Severity, Urgency};
pub use payload::{
    ConversationalData, EmergencyContact, EmergencyData, MatchResult, MedicationInfo, ReportData,
    ResponseData, ResponsePayload, SymptomReportData, TreatmentData,
};
pub use profile::PatientProfile;

/// Errors from model parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
