//! The projection must be total over arbitrary partial documents:
//! snapshots are best-effort captures of evolving live state, so every
//! degraded shape renders as a degraded board, never as an error.

use serde_json::{json, Value};

use cambio_replay::{project, Snapshot};

fn degraded_documents() -> Vec<Value> {
    vec![
        json!({}),
        json!(null),
        json!([1, 2, 3]),
        json!("not a board"),
        json!({"currentGameId": 7}),
        json!({"currentGameId": "g1"}),
        json!({"currentGameId": "g1", "games": "nope"}),
        json!({"currentGameId": "g1", "games": {"g1": null}}),
        json!({"currentGameId": "g1", "games": {"g1": {"gameData": []}}}),
        json!({"currentGameId": "g1", "games": {"g1": {"gameData": {"game_state": 9}}}}),
        json!({"currentGameId": "g1", "games": {"g1": {"gameData": {"game_state": {
            "players": {"p1": {}},
            "drawPile": "stack",
            "discardPile": 4,
            "match_pot": [],
            "timerConfig": [15],
            "currentPlayer": "p1"
        }}}}}),
        json!({"myHand": "cards"}),
        json!({"myHand": {"cards": {"0": {}}, "selectedIndex": "one"}}),
    ]
}

#[test]
fn degraded_documents_project_to_the_empty_board() {
    for doc in degraded_documents() {
        let snap = Snapshot::new(doc.clone());
        let projection = project(&snap, "p1");
        assert!(
            projection.opponents.is_empty(),
            "expected no opponents for {doc}"
        );
        assert_eq!(projection.piles.draw_pile.total, 0);
        assert_eq!(projection.piles.discard_pile.total, 0);
        assert_eq!(projection.piles.match_pot, 0);
        assert!(projection.my_hand.slots.is_empty());
        assert_eq!(projection.my_hand.selected_index, -1);
        assert_eq!(projection.my_hand.status, None);
        assert_eq!(projection.my_hand.turn_timer, None);
    }
}

#[test]
fn unknown_game_id_projects_like_a_missing_one() {
    let snap = Snapshot::new(json!({
        "currentGameId": "g2",
        "games": {"g1": {"gameData": {"game_state": {
            "players": [{"id": "p2", "name": "Bea"}]
        }}}}
    }));
    let projection = project(&snap, "p1");
    assert!(projection.opponents.is_empty());
    assert_eq!(projection.my_hand.status, None);
}

#[test]
fn hand_survives_without_any_game() {
    // myHand sits beside the games map, so a hand can render even when
    // the game lookup fails entirely.
    let snap = Snapshot::new(json!({
        "myHand": {"cards": [null, {"rank": "Q", "suit": "hearts"}], "selectedIndex": 0}
    }));
    let projection = project(&snap, "p1");
    assert_eq!(projection.my_hand.slots.len(), 2);
    assert!(projection.my_hand.slots[0].card.is_placeholder());
    assert!(projection.my_hand.slots[0].selected);
    assert_eq!(projection.my_hand.slots[1].card.label(), "Q♥");
    // No status without a game, so no timer either.
    assert_eq!(projection.my_hand.turn_timer, None);
}

#[test]
fn spectators_see_every_player_as_an_opponent() {
    let snap = Snapshot::new(json!({
        "currentGameId": "g1",
        "games": {"g1": {"gameData": {"game_state": {
            "players": [{"id": "p1", "name": "Ana"}, {"id": "p2", "name": "Bea"}]
        }}}}
    }));
    // Unauthenticated viewer: empty user id matches nobody.
    let projection = project(&snap, "");
    assert_eq!(projection.opponents.len(), 2);
    assert_eq!(projection.my_hand.status, None);
}
