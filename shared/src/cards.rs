//! Card-related types and constants for the Cambio replay viewer.

use egui::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Natural size for card display in the UI
pub const CARD_NATURAL_SIZE: Vec2 = Vec2::new(140.0, 190.0);

/// Pixel step between consecutive cards in a pile's cascading stack
pub const PILE_STACK_STEP: f32 = 2.0;

/// Maximum number of cards shown in a pile's visual stack
pub const PILE_STACK_DEPTH: usize = 5;

/// Rank/suit text used when a raw card entry cannot be resolved
pub const UNKNOWN_FACE: &str = "?";

/// A card as captured in a snapshot, normalized for display.
///
/// Snapshots carry cards as loose key/value maps; a missing or malformed
/// entry normalizes to a placeholder instead of failing (see
/// [`Card::from_value`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub rank: String,
    pub suit: String,
    pub points: i64,
}

impl Card {
    /// Placeholder card for a slot whose raw entry could not be resolved.
    /// The synthetic id is deterministic in the owner and slot position.
    pub fn placeholder(owner: &str, slot: usize) -> Self {
        Card {
            id: format!("{owner}#{slot}"),
            rank: UNKNOWN_FACE.to_string(),
            suit: UNKNOWN_FACE.to_string(),
            points: 0,
        }
    }

    /// Normalize a raw snapshot entry into a `Card`.
    ///
    /// Anything that is not a map becomes a full placeholder; a map with
    /// missing or mistyped fields gets the same defaults per field. The
    /// `cardId` may be a string or a number; when absent the synthetic
    /// placeholder id is used.
    pub fn from_value(raw: &Value, owner: &str, slot: usize) -> Self {
        let Some(map) = raw.as_object() else {
            return Card::placeholder(owner, slot);
        };
        let id = map
            .get("cardId")
            .and_then(id_text)
            .unwrap_or_else(|| format!("{owner}#{slot}"));
        let rank = map
            .get("rank")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_FACE)
            .to_string();
        let suit = map
            .get("suit")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_FACE)
            .to_string();
        let points = map.get("points").and_then(Value::as_i64).unwrap_or(0);
        Card {
            id,
            rank,
            suit,
            points,
        }
    }

    /// True when this card is the unresolved placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.rank == UNKNOWN_FACE && self.suit == UNKNOWN_FACE
    }

    /// Get the suit as a character (♣, ♦, ♥, ♠); '?' when unknown
    pub fn suit_char(&self) -> char {
        match self.suit.as_str() {
            "clubs" => '♣',
            "diamonds" => '♦',
            "hearts" => '♥',
            "spades" => '♠',
            _ => '?',
        }
    }

    /// Get the card as a string like "A♣", "10♦", "??" etc.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank, self.suit_char())
    }

    /// Check if this is a red suit (hearts or diamonds)
    pub fn is_red(&self) -> bool {
        matches!(self.suit.as_str(), "hearts" | "diamonds")
    }

    /// Check if this is a black suit (clubs or spades)
    pub fn is_black(&self) -> bool {
        matches!(self.suit.as_str(), "clubs" | "spades")
    }
}

fn id_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_a_complete_entry() {
        let raw = json!({"cardId": "c-17", "rank": "Q", "suit": "hearts", "points": 10});
        let card = Card::from_value(&raw, "p1", 3);
        assert_eq!(card.id, "c-17");
        assert_eq!(card.label(), "Q♥");
        assert_eq!(card.points, 10);
        assert!(card.is_red());
        assert!(!card.is_placeholder());
    }

    #[test]
    fn numeric_card_id_is_stringified() {
        let raw = json!({"cardId": 42, "rank": "A", "suit": "spades"});
        let card = Card::from_value(&raw, "p1", 0);
        assert_eq!(card.id, "42");
        assert!(card.is_black());
    }

    #[test]
    fn non_map_entry_becomes_placeholder() {
        for raw in [json!(null), json!("ace"), json!(7), json!([1, 2])] {
            let card = Card::from_value(&raw, "p2", 1);
            assert_eq!(card.rank, "?");
            assert_eq!(card.suit, "?");
            assert_eq!(card.points, 0);
            assert_eq!(card.id, "p2#1");
            assert!(card.is_placeholder());
        }
    }

    #[test]
    fn missing_fields_default_individually() {
        let raw = json!({"rank": "K"});
        let card = Card::from_value(&raw, "draw", 4);
        assert_eq!(card.rank, "K");
        assert_eq!(card.suit, "?");
        assert_eq!(card.points, 0);
        assert_eq!(card.id, "draw#4");
    }
}
