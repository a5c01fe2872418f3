//! Domain layer: the pure game engine.
//!
//! Every transition takes `&GameState` and returns a fresh snapshot, so a
//! rejected command can never leave a room half-updated.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_config;
pub mod player_view;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod state;
pub mod teams;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{is_valid_bid, legal_bids, place_bid, Bid};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{create_deck, deal_cards, deal_cards_with, shuffle_deck, shuffle_deck_with};
pub use game_config::{GameConfig, PartialGameConfig, TeamMode};
pub use player_view::{public_view, PublicGameState};
pub use round_lifecycle::{start_game, start_next_round};
pub use rules::hand_size_for_round;
pub use scoring::calculate_round_score;
pub use state::{create_initial_state, GameState, Phase, Player, PlayerId, TeamScore};
pub use teams::{assign_teams, team_count};
pub use tricks::{is_valid_play, play_card, playable_cards};
