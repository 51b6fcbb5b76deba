use serde::{Deserialize, Serialize};

/// Patient identity as supplied by the host application.
///
/// Every field is optional: a missing or malformed profile is tolerated with
/// display placeholders, never treated as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl PatientProfile {
    pub fn new(name: &str, age: u32, gender: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            age: Some(age),
            gender: Some(gender.to_string()),
        }
    }

    /// Display name, falling back to "Patient".
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "Patient",
        }
    }

    /// Age as prose, empty string when unknown.
    pub fn age_display(&self) -> String {
        self.age.map(|a| a.to_string()).unwrap_or_default()
    }

    /// Lowercased gender label, empty string when unknown.
    pub fn gender_display(&self) -> String {
        self.gender
            .as_deref()
            .map(|g| g.to_lowercase())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let profile = PatientProfile::default();
        assert_eq!(profile.display_name(), "Patient");
        assert_eq!(profile.age_display(), "");
        assert_eq!(profile.gender_display(), "");
    }

    #[test]
    fn blank_name_is_treated_as_missing() {
        let profile = PatientProfile {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "Patient");
    }

    #[test]
    fn populated_profile_displays_as_given() {
        let profile = PatientProfile::new("Amina", 34, "Female");
        assert_eq!(profile.display_name(), "Amina");
        assert_eq!(profile.age_display(), "34");
        assert_eq!(profile.gender_display(), "female");
    }

    #[test]
    fn deserializes_with_absent_fields() {
        let profile: PatientProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.display_name(), "Patient");
    }
}
