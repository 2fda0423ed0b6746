//! Human-readable rendering of a board projection.

use owo_colors::OwoColorize;

use cambio_shared::{Card, PlayerStatus};

use crate::view::{BoardProjection, MyHandView, OpponentView, PileView};

/// Marker printed in place of a face-down card
const FACE_DOWN: &str = "##";

pub fn format_card(card: &Card, color: bool) -> String {
    let text = card.label();
    if color && card.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

pub fn format_status_tag(status: &PlayerStatus, color: bool) -> String {
    let tag = format!("[{}]", status.as_tag());
    if !color {
        return tag;
    }
    match status {
        PlayerStatus::InitialPeek => tag.cyan().to_string(),
        PlayerStatus::DrawingCard => tag.yellow().to_string(),
        PlayerStatus::PlayingCard => tag.green().to_string(),
        PlayerStatus::Waiting => tag.blue().to_string(),
        PlayerStatus::Other(_) => tag.magenta().to_string(),
    }
}

pub fn format_pile(label: &str, pile: &PileView, color: bool) -> String {
    let stack = if pile.cards.is_empty() {
        "(empty)".to_string()
    } else if pile.face_up {
        pile.cards
            .iter()
            .map(|s| format_card(&s.card, color))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        vec![FACE_DOWN; pile.cards.len()].join(" ")
    };
    format!("{} ({}): {}", label, pile.total, stack)
}

pub fn format_opponent(opponent: &OpponentView, color: bool) -> String {
    let strip = if opponent.hand.is_empty() {
        "(no cards)".to_string()
    } else {
        vec![FACE_DOWN; opponent.hand_size()].join(" ")
    };
    let turn_icon = if opponent.is_current_turn {
        if color {
            " ●".green().to_string()
        } else {
            " *".to_string()
        }
    } else {
        String::new()
    };
    let turn_text = if opponent.is_current_turn {
        " (to play)"
    } else {
        ""
    };
    let name = if color {
        opponent.name.bold().to_string()
    } else {
        opponent.name.clone()
    };
    format!(
        "  #{} {} {}  score={} points={} cards={}  [{}]{}{}",
        opponent.id,
        name,
        format_status_tag(&opponent.status, color),
        opponent.score,
        opponent.points,
        opponent.hand_size(),
        strip,
        turn_icon,
        turn_text
    )
}

pub fn format_hand(hand: &MyHandView, color: bool) -> String {
    let mut out = String::new();
    let cards = if hand.slots.is_empty() {
        "(no cards)".to_string()
    } else {
        hand.slots
            .iter()
            .map(|slot| {
                let text = format_card(&slot.card, color);
                if slot.selected {
                    if color {
                        format!("[{}]", text).bold().to_string()
                    } else {
                        format!("[{}]", text)
                    }
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    };
    out.push_str(&format!("Your hand: {}\n", cards));
    if let Some(status) = &hand.status {
        out.push_str(&format!(
            "Status: {}\n",
            format_status_tag(status, color)
        ));
    }
    if let Some(seconds) = hand.turn_timer {
        let line = if color {
            format!("{} {}s", "Turn timer:".bold().yellow(), seconds)
        } else {
            format!("Turn timer: {}s", seconds)
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Render the whole projection the way the CLI prints it.
pub fn format_board(projection: &BoardProjection, color: bool) -> String {
    let mut out = String::new();
    let title = if color {
        "=== Board (snapshot) ===".bold().blue().to_string()
    } else {
        "=== Board (snapshot) ===".to_string()
    };
    out.push_str(&format!("{}\n", title));

    out.push_str(&format!(
        "{}\n",
        format_pile("Draw", &projection.piles.draw_pile, color)
    ));
    out.push_str(&format!(
        "{}\n",
        format_pile("Discard", &projection.piles.discard_pile, color)
    ));
    let pot = if color {
        format!("{} {}", "Match pot:".bold().yellow(), projection.piles.match_pot)
    } else {
        format!("Match pot: {}", projection.piles.match_pot)
    };
    out.push_str(&format!("{}\n", pot));

    out.push_str("Opponents:\n");
    if projection.opponents.is_empty() {
        out.push_str("  (none)\n");
    }
    for opponent in &projection.opponents {
        out.push_str(&format!("{}\n", format_opponent(opponent, color)));
    }

    out.push_str(&format_hand(&projection.my_hand, color));
    out
}
