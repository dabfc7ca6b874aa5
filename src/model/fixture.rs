use serde::{Deserialize, Serialize};

/// Lifecycle state code of a fixture that has concluded with a final score.
pub const FINISHED_STATE_ID: i64 = 5;

/// Which end of the pitch a participant occupies in a fixture.
///
/// Mirrors the wire values `"home"` and `"away"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// A single scheduled or completed match as returned by the fixtures API.
///
/// `starting_at` keeps the raw `"%Y-%m-%d %H:%M:%S"` UTC string the API
/// sends; it sorts chronologically as-is, with absent timestamps last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u64,
    pub state_id: i64,
    pub starting_at: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub scores: Vec<ScoreEntry>,
}

impl Fixture {
    /// Whether this fixture has concluded with a final score.
    pub fn is_finished(&self) -> bool {
        self.state_id == FINISHED_STATE_ID
    }

    /// The participant occupying `side`, if that role resolved.
    pub fn participant(&self, side: Side) -> Option<&Participant> {
        self.participants.iter().find(|p| p.side() == Some(side))
    }
}

/// A team taking part in a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub meta: ParticipantMeta,
}

impl Participant {
    /// The side this participant plays on, derived from its location tag.
    /// `None` marks an unresolved role; such fixtures are incomplete.
    pub fn side(&self) -> Option<Side> {
        self.meta.location.as_deref().and_then(|l| l.parse().ok())
    }
}

/// Participant metadata; only the location tag matters here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantMeta {
    pub location: Option<String>,
}

/// One score entry attached to a fixture (half-time, current, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub score: ScoreValue,
}

/// The goal count one score entry assigns to one side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreValue {
    pub goals: Option<u32>,
    pub participant: Option<String>,
}

impl ScoreValue {
    /// The side this goal count belongs to.
    pub fn side(&self) -> Option<Side> {
        self.participant.as_deref().and_then(|p| p.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_deserializes_from_wire_shape() {
        let raw = r#"{
            "id": 19135,
            "state_id": 5,
            "starting_at": "2026-08-06 18:30:00",
            "participants": [
                {"id": 62, "name": "Rangers", "meta": {"location": "home"}},
                {"id": 53, "name": "Celtic", "meta": {"location": "away"}}
            ],
            "scores": [
                {"description": "CURRENT", "score": {"goals": 2, "participant": "home"}}
            ]
        }"#;
        let fixture: Fixture = serde_json::from_str(raw).unwrap();

        assert!(fixture.is_finished());
        assert_eq!(fixture.participant(Side::Home).unwrap().name, "Rangers");
        assert_eq!(fixture.participant(Side::Away).unwrap().name, "Celtic");
        assert_eq!(fixture.scores[0].score.side(), Some(Side::Home));
        assert_eq!(fixture.scores[0].score.goals, Some(2));
    }

    #[test]
    fn test_fixture_tolerates_missing_optional_fields() {
        let raw = r#"{"id": 1, "state_id": 1, "starting_at": null}"#;
        let fixture: Fixture = serde_json::from_str(raw).unwrap();

        assert!(!fixture.is_finished());
        assert!(fixture.participants.is_empty());
        assert!(fixture.scores.is_empty());
    }

    #[test]
    fn test_unresolved_location_has_no_side() {
        let raw = r#"{"id": 7, "name": "Hearts", "meta": {}}"#;
        let participant: Participant = serde_json::from_str(raw).unwrap();
        assert_eq!(participant.side(), None);

        let raw = r#"{"id": 7, "name": "Hearts", "meta": {"location": "bench"}}"#;
        let participant: Participant = serde_json::from_str(raw).unwrap();
        assert_eq!(participant.side(), None);
    }
}
