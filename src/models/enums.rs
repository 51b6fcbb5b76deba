use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(Urgency {
    Low => "low",
    Medium => "medium",
    High => "high",
});

// Emergency is checked before every other rule; Error is the degraded-path
// tag produced only at the process boundary, never by classification.
str_enum!(Intent {
    Emergency => "emergency",
    SymptomReport => "symptom_report",
    TreatmentInquiry => "treatment_inquiry",
    ReportRequest => "report_request",
    Gratitude => "gratitude",
    Greeting => "greeting",
    PersonalGreeting => "personal_greeting",
    Goodbye => "goodbye",
    Pain => "pain",
    Generic => "generic",
    Error => "error",
});
