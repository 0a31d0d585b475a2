//! User profile records.

use serde::{Deserialize, Serialize};

/// Birth date as delivered by the directory service. Only the raw unix
/// timestamp matters to this app; the pre-formatted date strings in the
/// extended response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    /// Unix seconds.
    pub raw: i64,
}

/// One user profile entry on the dashboard.
///
/// Deserialized from the directory service's extended response; unknown
/// fields are dropped. The persisted cache stores the same shape.
/// Identity is structural - two records are the same user iff every field
/// matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(rename = "photo")]
    pub photo_url: String,
    pub region: String,
    pub birthday: Birthday,
    /// Display-ready age string, derived from `birthday` once per load and
    /// cached on the record. Not part of the wire contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_age: Option<String>,
}

impl UserRecord {
    /// Whether a display age still needs to be computed for this record.
    pub fn needs_display_age(&self) -> bool {
        self.display_age.as_deref().map_or(true, str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        // Trimmed-down extended response from the directory service; the
        // surname/email/credit_card noise must deserialize away cleanly.
        r#"{
            "name": "Ada",
            "surname": "Lovelace",
            "gender": "female",
            "region": "United Kingdom",
            "birthday": { "dmy": "10/12/1815", "mdy": "12/10/1815", "raw": 551062610 },
            "email": "ada@example.com",
            "photo": "https://example.com/ada.jpg"
        }"#
    }

    #[test]
    fn test_deserialize_extended_response() {
        let user: UserRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.photo_url, "https://example.com/ada.jpg");
        assert_eq!(user.region, "United Kingdom");
        assert_eq!(user.birthday.raw, 551062610);
        assert_eq!(user.display_age, None);
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a: UserRecord = serde_json::from_str(sample_json()).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.display_age = Some("31 years".to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn test_needs_display_age() {
        let mut user: UserRecord = serde_json::from_str(sample_json()).unwrap();
        assert!(user.needs_display_age());
        user.display_age = Some(String::new());
        assert!(user.needs_display_age());
        user.display_age = Some("31 years".to_string());
        assert!(!user.needs_display_age());
    }

    #[test]
    fn test_display_age_round_trips_through_cache_serialization() {
        let mut user: UserRecord = serde_json::from_str(sample_json()).unwrap();
        user.display_age = Some("31 years".to_string());
        let json = serde_json::to_string(&user).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
