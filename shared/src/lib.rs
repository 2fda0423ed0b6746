//! Shared domain types for the Cambio replay viewer.

pub mod cards;
pub mod player;

pub use cards::{Card, CARD_NATURAL_SIZE, PILE_STACK_DEPTH, PILE_STACK_STEP};
pub use player::PlayerStatus;
