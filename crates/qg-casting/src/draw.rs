//! Three-coin draws.
//!
//! A draw is three decimal digits, one per coin. An odd digit shows the
//! back (背) of the coin and an even digit the front (正). Only the number
//! of odd digits matters for the resulting line.

use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};

/// Face of a single coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// 正, from an even digit.
    Front,
    /// 背, from an odd digit.
    Back,
}

impl CoinFace {
    /// Face shown by a digit.
    pub fn of_digit(digit: u8) -> Self {
        if digit % 2 == 1 { Self::Back } else { Self::Front }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => write!(f, "正"),
            Self::Back => write!(f, "背"),
        }
    }
}

/// A three-digit draw, 000 through 999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Draw([u8; 3]);

impl Draw {
    /// Build from three digits, each 0-9.
    pub fn from_digits(digits: [u8; 3]) -> CastResult<Self> {
        if digits.iter().all(|&d| d <= 9) {
            Ok(Self(digits))
        } else {
            Err(CastError::InvalidDraw(format!("{digits:?}")))
        }
    }

    /// Build from a value 0-999.
    pub fn from_value(value: u16) -> CastResult<Self> {
        if value > 999 {
            return Err(CastError::InvalidDraw(value.to_string()));
        }
        Ok(Self([
            (value / 100) as u8,
            (value / 10 % 10) as u8,
            (value % 10) as u8,
        ]))
    }

    /// The three digits, first coin first.
    pub fn digits(self) -> [u8; 3] {
        self.0
    }

    /// Numeric value 0-999.
    pub fn value(self) -> u16 {
        self.0.iter().fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    /// Number of odd digits, 0-3.
    pub fn odd_count(self) -> u8 {
        self.0.iter().filter(|&&d| d % 2 == 1).count() as u8
    }

    /// The coin faces.
    pub fn faces(self) -> [CoinFace; 3] {
        self.0.map(CoinFace::of_digit)
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl std::str::FromStr for Draw {
    type Err = CastError;

    /// Parse exactly three ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        match bytes {
            [a, b, c] if bytes.iter().all(u8::is_ascii_digit) => {
                Ok(Self([a - b'0', b - b'0', c - b'0']))
            }
            _ => Err(CastError::InvalidDraw(s.trim().to_string())),
        }
    }
}

impl From<Draw> for String {
    fn from(d: Draw) -> Self {
        d.to_string()
    }
}

impl TryFrom<String> for Draw {
    type Error = CastError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_and_display() {
        let d: Draw = "035".parse().unwrap();
        assert_eq!(d.digits(), [0, 3, 5]);
        assert_eq!(d.value(), 35);
        assert_eq!(d.to_string(), "035");
        assert!("12".parse::<Draw>().is_err());
        assert!("1a3".parse::<Draw>().is_err());
        assert!("1234".parse::<Draw>().is_err());
    }

    #[test]
    fn odd_counts() {
        assert_eq!("135".parse::<Draw>().unwrap().odd_count(), 3);
        assert_eq!("246".parse::<Draw>().unwrap().odd_count(), 0);
        assert_eq!("100".parse::<Draw>().unwrap().odd_count(), 1);
        assert_eq!("110".parse::<Draw>().unwrap().odd_count(), 2);
    }

    #[test]
    fn faces_follow_parity() {
        let d: Draw = "214".parse().unwrap();
        assert_eq!(d.faces(), [CoinFace::Front, CoinFace::Back, CoinFace::Front]);
        assert_eq!(CoinFace::Back.to_string(), "背");
    }

    #[test]
    fn value_bounds() {
        assert_eq!(Draw::from_value(7).unwrap().to_string(), "007");
        assert!(Draw::from_value(1000).is_err());
        assert!(Draw::from_digits([1, 10, 0]).is_err());
    }

    #[test]
    fn serde_as_string() {
        let d: Draw = "908".parse().unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"908\"");
    }

    proptest! {
        #[test]
        fn odd_count_in_range(value in 0u16..1000) {
            let d = Draw::from_value(value).unwrap();
            prop_assert!(d.odd_count() <= 3);
            prop_assert_eq!(d.value(), value);
        }
    }
}
