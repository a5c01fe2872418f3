//! Serialization and deserialization for card types
//!
//! Wire shape: `{ "suit": "spades", "rank": "10", "id": "10S" }`.
//! Deserialization also accepts a bare id string (`"10S"`).

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

// Rank serde
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Rank>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid rank: {s}")))
    }
}

// Card serde
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = serializer.serialize_struct("Card", 3)?;
        st.serialize_field("suit", &self.suit)?;
        st.serialize_field("rank", &self.rank)?;
        st.serialize_field("id", &self.id())?;
        st.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CardRepr {
    Id(String),
    Parts {
        suit: Suit,
        rank: Rank,
        #[serde(default)]
        id: Option<String>,
    },
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match CardRepr::deserialize(deserializer)? {
            CardRepr::Id(id) => id
                .parse::<Card>()
                .map_err(|e| serde::de::Error::custom(e.to_string())),
            CardRepr::Parts { suit, rank, id } => {
                let card = Card { suit, rank };
                match id {
                    Some(id) if id != card.id() => Err(serde::de::Error::custom(format!(
                        "Card id {id} does not match {}",
                        card.id()
                    ))),
                    _ => Ok(card),
                }
            }
        }
    }
}
