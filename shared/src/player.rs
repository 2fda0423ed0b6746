//! Player status tags for the Cambio replay viewer.

use serde::{Deserialize, Serialize};

/// Timer config key used for statuses without a dedicated entry
pub const TIMER_DEFAULT_KEY: &str = "default";

/// A player's turn-phase tag as captured in a snapshot.
///
/// The tag set is open: servers may emit phases this viewer does not know
/// about, so unrecognized tags survive round-trips via [`PlayerStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerStatus {
    InitialPeek,
    DrawingCard,
    PlayingCard,
    Waiting,
    Other(String),
}

impl PlayerStatus {
    /// Parse a raw tag. Never fails; unknown tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "initial_peek" => PlayerStatus::InitialPeek,
            "drawing_card" => PlayerStatus::DrawingCard,
            "playing_card" => PlayerStatus::PlayingCard,
            "waiting" => PlayerStatus::Waiting,
            other => PlayerStatus::Other(other.to_string()),
        }
    }

    /// The raw tag as it appears in snapshots.
    pub fn as_tag(&self) -> &str {
        match self {
            PlayerStatus::InitialPeek => "initial_peek",
            PlayerStatus::DrawingCard => "drawing_card",
            PlayerStatus::PlayingCard => "playing_card",
            PlayerStatus::Waiting => "waiting",
            PlayerStatus::Other(tag) => tag,
        }
    }

    /// Key used to look up this status in a snapshot's timer config.
    /// Only the three timed phases have dedicated entries; everything
    /// else falls back to [`TIMER_DEFAULT_KEY`].
    pub fn timer_key(&self) -> &str {
        match self {
            PlayerStatus::InitialPeek | PlayerStatus::DrawingCard | PlayerStatus::PlayingCard => {
                self.as_tag()
            }
            _ => TIMER_DEFAULT_KEY,
        }
    }

    /// The turn timer is hidden for players sitting out the turn.
    pub fn shows_timer(&self) -> bool {
        !matches!(self, PlayerStatus::Waiting)
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl From<String> for PlayerStatus {
    fn from(tag: String) -> Self {
        PlayerStatus::from_tag(&tag)
    }
}

impl From<PlayerStatus> for String {
    fn from(status: PlayerStatus) -> Self {
        status.as_tag().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for tag in ["initial_peek", "drawing_card", "playing_card", "waiting"] {
            assert_eq!(PlayerStatus::from_tag(tag).as_tag(), tag);
        }
    }

    #[test]
    fn unknown_tags_survive() {
        let status = PlayerStatus::from_tag("peeking");
        assert_eq!(status, PlayerStatus::Other("peeking".to_string()));
        assert_eq!(status.as_tag(), "peeking");
    }

    #[test]
    fn timer_keys() {
        assert_eq!(PlayerStatus::DrawingCard.timer_key(), "drawing_card");
        assert_eq!(PlayerStatus::InitialPeek.timer_key(), "initial_peek");
        assert_eq!(PlayerStatus::PlayingCard.timer_key(), "playing_card");
        assert_eq!(PlayerStatus::Waiting.timer_key(), "default");
        assert_eq!(PlayerStatus::from_tag("peeking").timer_key(), "default");
    }

    #[test]
    fn waiting_hides_the_timer() {
        assert!(!PlayerStatus::Waiting.shows_timer());
        assert!(PlayerStatus::DrawingCard.shows_timer());
        assert!(PlayerStatus::from_tag("peeking").shows_timer());
    }
}
