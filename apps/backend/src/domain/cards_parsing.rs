//! Card parsing from id strings (e.g., "AS", "10H", "2C")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|r| r.symbol() == s)
            .ok_or_else(|| parse_error(s))
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    /// Accepts the full lowercase name ("spades") or the id letter ("S").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s || (s.len() == 1 && s.starts_with(suit.letter())))
            .ok_or_else(|| parse_error(s))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(parse_error(s));
        }
        let (rank_part, suit_part) = s.split_at(s.len() - 1);
        let rank = rank_part.parse::<Rank>().map_err(|_| parse_error(s))?;
        let suit = suit_part.parse::<Suit>().map_err(|_| parse_error(s))?;
        Ok(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

/// Non-panicking helper to parse card ids into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
