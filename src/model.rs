//! Activity Data Model
//!
//! Wire types returned by the activities backend and the render model the
//! panel derives from them on every load.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// A single activity as served by `GET /activities`.
///
/// The backend keys activities by name, so `name` is filled in from the map
/// key rather than from the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: i64,
    #[serde(default)]
    participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Not clamped: an overbooked activity goes negative.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Decoded `/activities` payload, in the order the server sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityBoard {
    activities: Vec<Activity>,
}

impl ActivityBoard {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activity names, used to rebuild the select control
    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }

    /// Build the cards shown in the activity list
    pub fn cards(&self) -> Vec<ActivityCard> {
        self.activities.iter().map(ActivityCard::from).collect()
    }
}

impl<'de> Deserialize<'de> for ActivityBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = ActivityBoard;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities: Vec<Activity> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    let activity = Activity {
                        name,
                        description: details.description,
                        schedule: details.schedule,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    };
                    // A repeated name keeps its first position and its last value
                    match activities.iter_mut().find(|a| a.name == activity.name) {
                        Some(existing) => *existing = activity,
                        None => activities.push(activity),
                    }
                }
                Ok(ActivityBoard { activities })
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

/// Success body of the signup endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignupReceipt {
    pub message: String,
}

/// Data attached to a participant's remove button
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// One roster entry. `email` is raw text; renderers must never treat it as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    pub removal: RemovalTarget,
}

/// Render model for one activity card
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn roster_heading(&self) -> String {
        format!("Participants ({}):", self.participants.len())
    }
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        let participants = activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
                removal: RemovalTarget {
                    activity: activity.name.clone(),
                    email: email.clone(),
                },
            })
            .collect();

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(json: &str) -> ActivityBoard {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_chess_club_card() {
        let board = board(
            r#"{"Chess Club": {"description": "d", "schedule": "Mon",
                "max_participants": 5, "participants": ["a@x.com", "b@x.com"]}}"#,
        );

        let cards = board.cards();
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.availability_label(), "3 spots left");
        assert_eq!(card.roster_heading(), "Participants (2):");

        let targets: Vec<_> = card.participants.iter().map(|p| &p.removal).collect();
        assert_eq!(
            targets,
            vec![
                &RemovalTarget { activity: "Chess Club".into(), email: "a@x.com".into() },
                &RemovalTarget { activity: "Chess Club".into(), email: "b@x.com".into() },
            ]
        );
    }

    #[test]
    fn test_spots_left_is_not_clamped() {
        let board = board(
            r#"{"Tiny": {"description": "", "schedule": "",
                "max_participants": 1, "participants": ["a@x.com", "b@x.com", "c@x.com"]}}"#,
        );
        assert_eq!(board.activities()[0].spots_left(), -2);
        assert_eq!(board.cards()[0].availability_label(), "-2 spots left");
    }

    #[test]
    fn test_server_order_is_kept() {
        let board = board(
            r#"{
                "Zumba": {"description": "", "schedule": "", "max_participants": 3, "participants": []},
                "Art": {"description": "", "schedule": "", "max_participants": 3,
                        "participants": ["z@x.com", "a@x.com", "z@x.com"]}
            }"#,
        );

        assert_eq!(board.names(), vec!["Zumba", "Art"]);
        let cards = board.cards();
        let emails: Vec<_> = cards[1]
            .participants
            .iter()
            .map(|p| p.email.as_str())
            .collect();
        assert_eq!(emails, vec!["z@x.com", "a@x.com", "z@x.com"]);
    }

    #[test]
    fn test_repeated_name_keeps_one_entry() {
        let board = board(
            r#"{
                "Chess": {"description": "old", "schedule": "", "max_participants": 3, "participants": []},
                "Art": {"description": "", "schedule": "", "max_participants": 3, "participants": []},
                "Chess": {"description": "new", "schedule": "", "max_participants": 3, "participants": ["a@x.com"]}
            }"#,
        );

        assert_eq!(board.names(), vec!["Chess", "Art"]);
        let cards = board.cards();
        assert_eq!(cards[0].description, "new");
        assert_eq!(cards[0].spots_left, 2);
    }

    #[test]
    fn test_markup_email_stays_raw_text() {
        let board = board(
            r#"{"Drama": {"description": "", "schedule": "", "max_participants": 2,
                "participants": ["<script>x</script>@y.com"]}}"#,
        );
        let cards = board.cards();
        let row = &cards[0].participants[0];
        assert_eq!(row.email, "<script>x</script>@y.com");
        assert_eq!(row.removal.email, "<script>x</script>@y.com");
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let board = board(r#"{"Chess": {"description": "", "schedule": "", "max_participants": 4}}"#);
        assert!(board.cards()[0].participants.is_empty());
        assert_eq!(board.cards()[0].spots_left, 4);
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(serde_json::from_str::<ActivityBoard>("[]").is_err());
    }
}
