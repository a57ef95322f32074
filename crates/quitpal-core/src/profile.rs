use serde::{Deserialize, Serialize};

/// Default smoking frequency when the initialize payload omits it.
const DEFAULT_SMOKING_FREQUENCY: u32 = 10;
/// Default craving level when the initialize payload omits it.
const DEFAULT_CRAVING_LEVEL: u8 = 5;
/// Default mood when the initialize payload omits it.
const DEFAULT_MOOD: &str = "neutral";
/// Default reason to quit when the initialize payload omits it.
const DEFAULT_REASON: &str = "health";

/// Raw profile payload as received by the initialize endpoint.
///
/// Every field is optional; integer fields accept any JSON integer and are
/// clamped into their valid range during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePayload {
    /// Cigarettes per day, any integer.
    pub smoking_frequency: Option<i64>,
    /// Self-reported craving intensity, any integer.
    pub craving_level: Option<i64>,
    /// Free-text mood label.
    pub mood: Option<String>,
    /// Free-text reason for quitting.
    pub reason_to_quit: Option<String>,
}

/// A normalized user profile held by the session.
///
/// Replaced wholesale on every initialize call; there are no merge
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Cigarettes per day, clamped to be non-negative.
    pub smoking_frequency: u32,
    /// Craving intensity on a 1–10 scale.
    pub craving_level: u8,
    /// Mood label, lowercase comparisons are done by consumers.
    pub mood: String,
    /// The user's reason for quitting, echoed verbatim in motivation
    /// replies.
    pub reason_to_quit: String,
}

impl UserProfile {
    /// Normalize a raw payload into a profile.
    ///
    /// Smoking frequency is clamped to ≥ 0, craving level to [1, 10].
    /// Missing fields take the documented defaults.
    pub fn from_payload(payload: ProfilePayload) -> Self {
        let smoking_frequency = payload
            .smoking_frequency
            .map(|v| v.max(0) as u32)
            .unwrap_or(DEFAULT_SMOKING_FREQUENCY);
        let craving_level = payload
            .craving_level
            .map(|v| v.clamp(1, 10) as u8)
            .unwrap_or(DEFAULT_CRAVING_LEVEL);

        Self {
            smoking_frequency,
            craving_level,
            mood: payload.mood.unwrap_or_else(|| DEFAULT_MOOD.to_string()),
            reason_to_quit: payload
                .reason_to_quit
                .unwrap_or_else(|| DEFAULT_REASON.to_string()),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::from_payload(ProfilePayload::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_for_missing_fields() {
        let profile = UserProfile::from_payload(ProfilePayload::default());
        assert_eq!(profile.smoking_frequency, 10);
        assert_eq!(profile.craving_level, 5);
        assert_eq!(profile.mood, "neutral");
        assert_eq!(profile.reason_to_quit, "health");
    }

    #[test]
    fn test_craving_level_clamped_into_range() {
        let high = UserProfile::from_payload(ProfilePayload {
            craving_level: Some(42),
            ..ProfilePayload::default()
        });
        assert_eq!(high.craving_level, 10);

        let low = UserProfile::from_payload(ProfilePayload {
            craving_level: Some(-3),
            ..ProfilePayload::default()
        });
        assert_eq!(low.craving_level, 1);
    }

    #[test]
    fn test_smoking_frequency_clamped_non_negative() {
        let profile = UserProfile::from_payload(ProfilePayload {
            smoking_frequency: Some(-20),
            ..ProfilePayload::default()
        });
        assert_eq!(profile.smoking_frequency, 0);
    }

    #[test]
    fn test_explicit_fields_preserved() {
        let profile = UserProfile::from_payload(ProfilePayload {
            smoking_frequency: Some(4),
            craving_level: Some(9),
            mood: Some("stressed".to_string()),
            reason_to_quit: Some("family".to_string()),
        });
        assert_eq!(profile.smoking_frequency, 4);
        assert_eq!(profile.craving_level, 9);
        assert_eq!(profile.mood, "stressed");
        assert_eq!(profile.reason_to_quit, "family");
    }

    #[test]
    fn test_payload_deserializes_with_missing_fields() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"craving_level": 7}"#).unwrap();
        let profile = UserProfile::from_payload(payload);
        assert_eq!(profile.craving_level, 7);
        assert_eq!(profile.mood, "neutral");
    }
}
