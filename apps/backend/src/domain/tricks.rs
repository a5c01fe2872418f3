use crate::domain::cards_logic::{hand_is_all_spades, TRUMP};
use crate::domain::scoring::calculate_round_score;
use crate::domain::state::{next_seat, require_phase, require_turn, GameState, Phase, Trick, TrickCard};
use crate::domain::{card_beats, hand_has_suit, Card};
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards the player may legally play, independent of turn enforcement.
///
/// Leading: anything but spades, unless spades are broken or the hand is all
/// spades. Following: the led suit if held, otherwise the whole hand.
pub fn playable_cards(state: &GameState, player_id: &str) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let hand = state.hand(player_id);
    if hand.is_empty() {
        return Vec::new();
    }

    let mut cards: Vec<Card> = match state.lead_suit() {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        Some(_) => hand.to_vec(),
        None if state.spades_broken || hand_is_all_spades(hand) => hand.to_vec(),
        None => hand.iter().copied().filter(|c| c.suit != TRUMP).collect(),
    };
    cards.sort();
    cards
}

/// Full legality check for a play: phase, turn, card ownership, follow/lead rules.
pub fn check_play(state: &GameState, player_id: &str, card_id: &str) -> Result<Card, DomainError> {
    require_phase(state, Phase::Playing, "play_card")?;
    require_turn(state, player_id)?;

    let card: Card = card_id.parse()?;
    if !state.hand(player_id).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card_id} not in hand"),
        ));
    }
    if !playable_cards(state, player_id).contains(&card) {
        return Err(match state.lead_suit() {
            Some(lead) => DomainError::validation(
                ValidationKind::MustFollowSuit,
                format!("Must follow {}", lead.name()),
            ),
            None => DomainError::validation(
                ValidationKind::SpadesNotBroken,
                "Spades have not been broken",
            ),
        });
    }
    Ok(card)
}

pub fn is_valid_play(state: &GameState, player_id: &str, card_id: &str) -> bool {
    check_play(state, player_id, card_id).is_ok()
}

/// The winning play of a trick: highest spade if any spade was played,
/// otherwise highest card of the led suit.
pub fn trick_winner(cards: &[TrickCard]) -> Option<&TrickCard> {
    let lead = cards.first()?.card.suit;
    cards.iter().reduce(|best, candidate| {
        if card_beats(candidate.card, best.card, lead) {
            candidate
        } else {
            best
        }
    })
}

/// Play a card into the current trick.
///
/// A full trick is resolved and its winner leads next; when every hand is
/// empty the round is scored.
pub fn play_card(state: &GameState, player_id: &str, card_id: &str) -> Result<GameState, DomainError> {
    let card = check_play(state, player_id, card_id)?;
    let n = state.player_count();

    let mut next = state.clone();
    if let Some(hand) = next.hands.get_mut(player_id) {
        hand.retain(|c| *c != card);
    }
    next.current_trick.push(TrickCard {
        player_id: player_id.to_string(),
        card,
    });
    next.spades_broken |= card.suit == TRUMP;

    if next.current_trick.len() < n {
        next.current_player_index = next_seat(next.current_player_index, n);
        return Ok(next);
    }

    let cards = std::mem::take(&mut next.current_trick);
    let Some(winner) = trick_winner(&cards) else {
        return Err(DomainError::validation_other("Trick resolved with no cards"));
    };
    let winner_id = winner.player_id.clone();
    let lead_suit = cards[0].card.suit;
    let winner_seat = next
        .seat_of(&winner_id)
        .ok_or_else(|| DomainError::validation(ValidationKind::NotSeated, "Trick winner is not seated"))?;

    next.completed_tricks.push(Trick {
        cards,
        winner_id,
        lead_suit,
    });
    next.current_player_index = winner_seat;

    if next.hands.values().all(Vec::is_empty) {
        return Ok(calculate_round_score(&next));
    }
    Ok(next)
}
