//! Projection of a captured snapshot into board view models.
//!
//! Pure functions from the loose snapshot document to fully-resolved view
//! values. Nothing here mutates the snapshot or raises errors; a degraded
//! document degrades the output (placeholder cards, hidden timer, empty
//! opponent list) and nothing else.

use egui::Vec2;
use serde_json::Value;

use cambio_shared::{Card, PlayerStatus, CARD_NATURAL_SIZE, PILE_STACK_DEPTH, PILE_STACK_STEP};

use crate::doc;
use crate::snapshot::Snapshot;
use crate::view::{
    BoardPilesView, BoardProjection, HandSlot, MyHandView, OpponentView, PileView, StackedCard,
};

/// Derive the full board projection for one render pass.
pub fn project(snapshot: &Snapshot, user_id: &str) -> BoardProjection {
    let projection = BoardProjection {
        opponents: derive_opponents(snapshot, user_id),
        piles: derive_board_piles(snapshot),
        my_hand: derive_my_hand(snapshot, user_id),
    };
    tracing::debug!(
        opponents = projection.opponents.len(),
        draw = projection.piles.draw_pile.total,
        discard = projection.piles.discard_pile.total,
        hand = projection.my_hand.slots.len(),
        "projected board snapshot"
    );
    projection
}

/// Every seated player except the viewer, in snapshot order.
///
/// Missing path segments anywhere up to the player list yield an empty
/// list. `is_current_turn` is set on the single opponent whose stringified
/// id equals the snapshot's `currentPlayer` id.
pub fn derive_opponents(snapshot: &Snapshot, user_id: &str) -> Vec<OpponentView> {
    let current_turn = snapshot.current_player_id();
    snapshot
        .players()
        .iter()
        .filter_map(|raw| {
            let id = doc::id_str(doc::get(raw, "id")).unwrap_or_default();
            if id == user_id {
                return None;
            }
            let hand = doc::seq(doc::get(raw, "hand"))
                .iter()
                .enumerate()
                .map(|(slot, entry)| Card::from_value(entry, &id, slot))
                .collect();
            Some(OpponentView {
                name: doc::str_or(doc::get(raw, "name"), "Unknown"),
                status: PlayerStatus::from_tag(&doc::str_or(doc::get(raw, "status"), "unknown")),
                score: doc::int_or(doc::get(raw, "score"), 0),
                points: doc::int_or(doc::get(raw, "points"), 0),
                hand,
                is_current_turn: current_turn.as_deref() == Some(id.as_str()),
                id,
            })
        })
        .collect()
}

/// Draw pile (face-down), discard pile (face-up) and the match pot.
pub fn derive_board_piles(snapshot: &Snapshot) -> BoardPilesView {
    BoardPilesView {
        draw_pile: stack_top(snapshot.draw_pile(), "draw", false),
        discard_pile: stack_top(snapshot.discard_pile(), "discard", true),
        match_pot: snapshot.match_pot(),
    }
}

/// The last `PILE_STACK_DEPTH` entries of a pile in original order, each
/// shifted one step further than the card beneath it. An empty pile still
/// reserves one card's footprint.
fn stack_top(pile: &[Value], owner: &str, face_up: bool) -> PileView {
    let start = pile.len().saturating_sub(PILE_STACK_DEPTH);
    let cards = pile[start..]
        .iter()
        .enumerate()
        .map(|(i, raw)| StackedCard {
            card: Card::from_value(raw, owner, start + i),
            offset: Vec2::splat(i as f32 * PILE_STACK_STEP),
        })
        .collect();
    PileView {
        cards,
        total: pile.len(),
        face_up,
        footprint: CARD_NATURAL_SIZE,
    }
}

/// The viewer's own hand: resolved slots, selection, status and timer.
pub fn derive_my_hand(snapshot: &Snapshot, user_id: &str) -> MyHandView {
    let selected_index = snapshot.selected_index();
    let slots = snapshot
        .hand_cards()
        .iter()
        .enumerate()
        .map(|(slot, raw)| HandSlot {
            card: Card::from_value(raw, user_id, slot),
            selected: selected_index == slot as i64,
        })
        .collect();
    let status = current_user_status(snapshot, user_id);
    let turn_timer = status
        .as_ref()
        .filter(|s| s.shows_timer())
        .map(|s| snapshot.turn_seconds(s));
    MyHandView {
        slots,
        selected_index,
        status,
        turn_timer,
    }
}

/// Status of the first player whose stringified id equals `user_id`.
///
/// Ids are assumed unique but not enforced; the scan deliberately takes
/// the first match in sequence order. Absent when the snapshot points at
/// no known game, the viewer is unauthenticated, no player matches, or
/// the matched player carries no usable status tag.
pub fn current_user_status(snapshot: &Snapshot, user_id: &str) -> Option<PlayerStatus> {
    if user_id.is_empty() {
        return None;
    }
    snapshot
        .players()
        .iter()
        .find(|raw| doc::id_str(doc::get(raw, "id")).as_deref() == Some(user_id))
        .and_then(|raw| doc::get(raw, "status"))
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())
        .map(PlayerStatus::from_tag)
}
