//! Participant attendance records as returned by the Zoom reporting API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One continuous attendance span of a participant.
///
/// A person who leaves and rejoins shows up as several records sharing the
/// same `id`. Fields the report does not use (`attentiveness_score`,
/// `user_id`, `status`, ...) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Participant identity, stable across spans. Empty for some guests.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name in the meeting.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Email address, empty when the participant was not signed in.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_email: String,
    /// When this span started.
    pub join_time: DateTime<Utc>,
    /// When this span ended.
    pub leave_time: DateTime<Utc>,
    /// Span length in seconds.
    #[serde(default)]
    pub duration: u64,
}

impl ParticipantRecord {
    /// Creates a record; mostly useful in tests.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        user_email: impl Into<String>,
        join_time: DateTime<Utc>,
        leave_time: DateTime<Utc>,
        duration: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user_email: user_email.into(),
            join_time,
            leave_time,
            duration,
        }
    }

    /// The key records are grouped by.
    pub fn group_key(&self) -> (&str, &str, &str) {
        (&self.id, &self.name, &self.user_email)
    }
}

/// Zoom documents `id` as a string, but older accounts return numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(s)) => s,
        Some(Id::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Guests come back with `null` instead of an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_zoom_payload() {
        let json = r#"{
            "id": "30R7kT7bTIKSNUFEuH_Qlg",
            "user_id": "16778240",
            "name": "Jill Chill",
            "user_email": "jchill@example.com",
            "join_time": "2024-03-15T09:00:00Z",
            "leave_time": "2024-03-15T09:10:00Z",
            "duration": 600,
            "attentiveness_score": "",
            "failover": false,
            "status": "in_meeting"
        }"#;

        let record: ParticipantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "30R7kT7bTIKSNUFEuH_Qlg");
        assert_eq!(record.name, "Jill Chill");
        assert_eq!(record.user_email, "jchill@example.com");
        assert_eq!(record.duration, 600);
        assert_eq!(record.join_time.to_rfc3339(), "2024-03-15T09:00:00+00:00");
        assert!(record.join_time <= record.leave_time);
    }

    #[test]
    fn numeric_id_becomes_string() {
        let json = r#"{
            "id": 1,
            "name": "A",
            "user_email": "a@x",
            "join_time": "2024-03-15T09:00:00Z",
            "leave_time": "2024-03-15T09:10:00Z",
            "duration": 600
        }"#;

        let record: ParticipantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "1");
    }

    #[test]
    fn guest_without_id_or_email() {
        let json = r#"{
            "name": "Guest",
            "join_time": "2024-03-15T09:00:00Z",
            "leave_time": "2024-03-15T09:01:00Z",
            "duration": 60
        }"#;

        let record: ParticipantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.group_key(), ("", "Guest", ""));
    }

    #[test]
    fn null_email_is_empty() {
        let json = r#"{
            "id": "",
            "name": "Guest",
            "user_email": null,
            "join_time": "2024-03-15T09:00:00Z",
            "leave_time": "2024-03-15T09:01:00Z",
            "duration": 60
        }"#;

        let record: ParticipantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.group_key(), ("", "Guest", ""));
    }

    #[test]
    fn null_name_and_id_are_empty() {
        let json = r#"{
            "id": null,
            "name": null,
            "user_email": "dial-in@example.com",
            "join_time": "2024-03-15T09:00:00Z",
            "leave_time": "2024-03-15T09:01:00Z",
            "duration": 60
        }"#;

        let record: ParticipantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.group_key(), ("", "", "dial-in@example.com"));
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let json = r#"{
            "id": "x",
            "name": "B",
            "user_email": "",
            "join_time": "2024-03-15T20:00:00+11:00",
            "leave_time": "2024-03-15T20:30:00+11:00",
            "duration": 1800
        }"#;

        let record: ParticipantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.join_time.to_rfc3339(), "2024-03-15T09:00:00+00:00");
    }
}
