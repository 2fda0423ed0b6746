//! Data-only view models derived from a snapshot.
//!
//! These carry everything a rendering layer needs to draw the board as it
//! looked when the snapshot was captured; drawing itself is a separate
//! concern (terminal formatting lives in [`crate::pretty`]).

use egui::Vec2;
use serde::{Deserialize, Serialize};

use cambio_shared::{Card, PlayerStatus};

/// One opponent row: identity, counters and a card strip.
///
/// The strip holds one resolved-or-placeholder entry per hand slot and is
/// always rendered face-down; opponents' cards are never revealed here
/// even when the snapshot happens to carry their identities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpponentView {
    pub id: String,
    pub name: String,
    pub status: PlayerStatus,
    pub score: i64,
    pub points: i64,
    pub hand: Vec<Card>,
    /// Whose turn it was when the snapshot was taken.
    pub is_current_turn: bool,
}

impl OpponentView {
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

/// One card inside a pile's visual stack, offset from the pile anchor to
/// create the cascading illusion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StackedCard {
    pub card: Card,
    pub offset: Vec2,
}

/// A draw or discard pile as rendered: the top few cards plus layout data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PileView {
    /// Top of the pile, at most [`cambio_shared::PILE_STACK_DEPTH`]
    /// entries, oldest of the shown cards first.
    pub cards: Vec<StackedCard>,
    /// Full pile length, for count badges.
    pub total: usize,
    pub face_up: bool,
    /// Layout space reserved even when the pile is empty.
    pub footprint: Vec2,
}

impl PileView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Center-of-table projection: both piles and the match pot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardPilesView {
    pub draw_pile: PileView,
    pub discard_pile: PileView,
    pub match_pot: i64,
}

/// One slot of the viewer's own hand. Always face-up to the owner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandSlot {
    pub card: Card,
    pub selected: bool,
}

/// The viewer's hand, status and (optional) turn timer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MyHandView {
    pub slots: Vec<HandSlot>,
    /// Raw selection index from the snapshot; -1 means no selection.
    pub selected_index: i64,
    pub status: Option<PlayerStatus>,
    /// Seconds for the turn timer. `None` hides the timer entirely
    /// (status absent or `waiting`).
    pub turn_timer: Option<i64>,
}

/// Everything the board renderer consumes, derived once per render.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardProjection {
    pub opponents: Vec<OpponentView>,
    pub piles: BoardPilesView,
    pub my_hand: MyHandView,
}
