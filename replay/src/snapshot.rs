//! Read-only wrapper around a captured game-state document.

use serde_json::Value;

use cambio_shared::PlayerStatus;

use crate::doc;

/// Turn timer fallback when the snapshot carries no usable config entry
pub const DEFAULT_TURN_SECONDS: i64 = 30;

/// A state snapshot captured just before the live store applied an update.
///
/// The document is treated as immutable for the lifetime of one render and
/// is never written back. Every accessor is total: any missing or
/// malformed path segment resolves to an empty or absent value.
#[derive(Clone, Debug)]
pub struct Snapshot(Value);

impl Snapshot {
    pub fn new(doc: Value) -> Self {
        Snapshot(doc)
    }

    /// The id of the game this snapshot was captured from, when present
    /// and non-empty.
    pub fn current_game_id(&self) -> Option<&str> {
        doc::get(&self.0, "currentGameId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// The nested `game_state` document of the current game.
    fn game_state(&self) -> Option<&Value> {
        let id = self.current_game_id()?;
        doc::get_path(&self.0, &["games", id, "gameData", "game_state"])
    }

    /// All seated players, in snapshot order. Empty when any path segment
    /// up to the player list is missing.
    pub fn players(&self) -> &[Value] {
        doc::seq(self.game_state().and_then(|state| doc::get(state, "players")))
    }

    /// Stringified id of the player whose turn it was, absent when the
    /// snapshot has no `currentPlayer` or its id is missing or empty.
    pub fn current_player_id(&self) -> Option<String> {
        let current = self
            .game_state()
            .and_then(|state| doc::get(state, "currentPlayer"))?;
        doc::id_str(doc::get(current, "id")).filter(|id| !id.is_empty())
    }

    /// The face-down draw pile, oldest first.
    pub fn draw_pile(&self) -> &[Value] {
        doc::seq(self.game_state().and_then(|state| doc::get(state, "drawPile")))
    }

    /// The face-up discard pile, oldest first.
    pub fn discard_pile(&self) -> &[Value] {
        doc::seq(
            self.game_state()
                .and_then(|state| doc::get(state, "discardPile")),
        )
    }

    /// Chips in the match pot, 0 when absent or not an integer.
    pub fn match_pot(&self) -> i64 {
        doc::int_or(self.game_state().and_then(|state| doc::get(state, "match_pot")), 0)
    }

    /// Raw entries of the viewer's own hand.
    pub fn hand_cards(&self) -> &[Value] {
        doc::seq(doc::get_path(&self.0, &["myHand", "cards"]))
    }

    /// Index of the selected hand card; -1 when nothing is selected.
    pub fn selected_index(&self) -> i64 {
        doc::int_or(doc::get_path(&self.0, &["myHand", "selectedIndex"]), -1)
    }

    /// Turn timer duration for `status`, resolved against the snapshot's
    /// timer config via the status's lookup key. Falls back to
    /// [`DEFAULT_TURN_SECONDS`] when the entry is absent or non-numeric.
    pub fn turn_seconds(&self, status: &PlayerStatus) -> i64 {
        let config = self
            .game_state()
            .and_then(|state| doc::get(state, "timerConfig"));
        doc::int_or(
            config.and_then(|c| doc::get(c, status.timer_key())),
            DEFAULT_TURN_SECONDS,
        )
    }
}
