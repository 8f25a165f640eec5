use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};

use super::errors::GameError;

/// A ball number. Pools never exceed 90, so a byte is plenty.
pub type Ball = u8;

/// Numbers drawn per Keno round.
pub const KENO_ROUND_SIZE: usize = 20;

/// How many recent traditional draws are kept for display.
pub const RECENT_CAPACITY: usize = 3;

/// Supported bingo variants
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    /// 75 balls, lettered B-I-N-G-O
    American,
    /// 90 balls, unlettered
    British,
    /// 80 balls, drawn in rounds of 20
    Keno,
}

impl GameVariant {
    pub const ALL: [GameVariant; 3] = [Self::American, Self::British, Self::Keno];

    /// Number of balls in this variant's pool.
    pub fn pool_size(self) -> usize {
        match self {
            Self::American => 75,
            Self::British => 90,
            Self::Keno => 80,
        }
    }

    /// The full pool, ascending from 1.
    pub fn pool(self) -> RangeInclusive<Ball> {
        // Pool sizes are constants well below Ball::MAX.
        1..=self.pool_size() as Ball
    }

    pub fn is_lettered(self) -> bool {
        matches!(self, Self::American)
    }

    pub fn is_keno(self) -> bool {
        matches!(self, Self::Keno)
    }

    /// Letter carried by `number` in this variant, if the variant uses letters.
    pub fn letter_for(self, number: Ball) -> Option<Letter> {
        if self.is_lettered() {
            Letter::for_number(number)
        } else {
            None
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::American => write!(f, "american"),
            Self::British => write!(f, "british"),
            Self::Keno => write!(f, "keno"),
        }
    }
}

impl FromStr for GameVariant {
    type Err = GameError;

    /// Case-insensitive. Accepts the Spanish names clients send
    /// (`americano`, `britanico`) as well as the English ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "americano" | "american" => Ok(Self::American),
            "britanico" | "británico" | "british" => Ok(Self::British),
            "keno" => Ok(Self::Keno),
            _ => Err(GameError::InvalidVariant(s.to_string())),
        }
    }
}

/// Column letters of an American bingo card
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

impl Letter {
    /// Band lookup: B 1-15, I 16-30, N 31-45, G 46-60, O 61-75.
    pub fn for_number(number: Ball) -> Option<Self> {
        match number {
            1..=15 => Some(Self::B),
            16..=30 => Some(Self::I),
            31..=45 => Some(Self::N),
            46..=60 => Some(Self::G),
            61..=75 => Some(Self::O),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::B => 'B',
            Self::I => 'I',
            Self::N => 'N',
            Self::G => 'G',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One ball of the pool and whether it has been drawn
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NumberEntry {
    pub number: Ball,
    pub drawn: bool,
    pub letter: Option<Letter>,
}

impl NumberEntry {
    pub fn new(variant: GameVariant, number: Ball) -> Self {
        Self {
            number,
            drawn: false,
            letter: variant.letter_for(number),
        }
    }
}

/// The last single number called in a traditional game
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CurrentNumber {
    pub number: Ball,
    pub letter: Option<Letter>,
}

impl fmt::Display for CurrentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(letter) => write!(f, "{letter}-{}", self.number),
            None => write!(f, "{}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(GameVariant::American.pool().count(), 75);
        assert_eq!(GameVariant::British.pool().count(), 90);
        assert_eq!(GameVariant::Keno.pool().count(), 80);
        assert_eq!(GameVariant::British.pool().last(), Some(90));
    }

    #[test]
    fn test_parse_spanish_and_english_names() {
        assert_eq!("americano".parse(), Ok(GameVariant::American));
        assert_eq!("AMERICAN".parse(), Ok(GameVariant::American));
        assert_eq!("Britanico".parse(), Ok(GameVariant::British));
        assert_eq!("BRITÁNICO".parse(), Ok(GameVariant::British));
        assert_eq!("british".parse(), Ok(GameVariant::British));
        assert_eq!(" Keno ".parse(), Ok(GameVariant::Keno));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!(
            "bingo".parse::<GameVariant>(),
            Err(GameError::InvalidVariant("bingo".to_string()))
        );
        assert!(matches!(
            "".parse::<GameVariant>(),
            Err(GameError::InvalidVariant(_))
        ));
    }

    #[test]
    fn test_letter_band_edges() {
        assert_eq!(Letter::for_number(1), Some(Letter::B));
        assert_eq!(Letter::for_number(15), Some(Letter::B));
        assert_eq!(Letter::for_number(16), Some(Letter::I));
        assert_eq!(Letter::for_number(30), Some(Letter::I));
        assert_eq!(Letter::for_number(31), Some(Letter::N));
        assert_eq!(Letter::for_number(45), Some(Letter::N));
        assert_eq!(Letter::for_number(46), Some(Letter::G));
        assert_eq!(Letter::for_number(60), Some(Letter::G));
        assert_eq!(Letter::for_number(61), Some(Letter::O));
        assert_eq!(Letter::for_number(75), Some(Letter::O));
        assert_eq!(Letter::for_number(0), None);
        assert_eq!(Letter::for_number(76), None);
    }

    #[test]
    fn test_only_american_entries_are_lettered() {
        assert_eq!(
            NumberEntry::new(GameVariant::American, 33).letter,
            Some(Letter::N)
        );
        assert_eq!(NumberEntry::new(GameVariant::British, 33).letter, None);
        assert_eq!(NumberEntry::new(GameVariant::Keno, 33).letter, None);
    }

    #[test]
    fn test_letter_serializes_as_single_character() {
        let json = serde_json::to_string(&NumberEntry::new(GameVariant::American, 70)).unwrap();
        assert_eq!(json, r#"{"number":70,"drawn":false,"letter":"O"}"#);

        let json = serde_json::to_string(&NumberEntry::new(GameVariant::Keno, 70)).unwrap();
        assert_eq!(json, r#"{"number":70,"drawn":false,"letter":null}"#);
    }

    #[test]
    fn test_current_number_display() {
        let lettered = CurrentNumber {
            number: 7,
            letter: Some(Letter::B),
        };
        let plain = CurrentNumber {
            number: 88,
            letter: None,
        };
        assert_eq!(lettered.to_string(), "B-7");
        assert_eq!(plain.to_string(), "88");
    }
}
