//! The six face colors and their antipodal pairing.

use std::fmt;

/// A sticker color. The discriminant is the color code used in grid ids.
///
/// Opposite pairs are `(1, 4)`, `(2, 5)`, `(3, 6)`: red/orange,
/// green/blue, white/yellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    /// Code 1, home of the front face.
    Red = 1,
    /// Code 2, home of the left face.
    Green = 2,
    /// Code 3, home of the top face.
    White = 3,
    /// Code 4, home of the back face.
    Orange = 4,
    /// Code 5, home of the right face.
    Blue = 5,
    /// Code 6, home of the bottom face.
    Yellow = 6,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::White,
        Color::Orange,
        Color::Blue,
        Color::Yellow,
    ];

    /// Numeric code, `1..=6`.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse a numeric code.
    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::White),
            4 => Some(Color::Orange),
            5 => Some(Color::Blue),
            6 => Some(Color::Yellow),
            _ => None,
        }
    }

    /// The antipodal color. An involution: `c.opposite().opposite() == c`.
    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
            Color::Green => Color::Blue,
            Color::Blue => Color::Green,
            Color::White => Color::Yellow,
            Color::Yellow => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for c in Color::ALL {
            assert_eq!(c.opposite().opposite(), c);
            assert_ne!(c.opposite(), c);
        }
    }

    #[test]
    fn opposite_pairs_match_codes() {
        assert_eq!(Color::Red.opposite().code(), 4);
        assert_eq!(Color::Green.opposite().code(), 5);
        assert_eq!(Color::White.opposite().code(), 6);
    }

    #[test]
    fn code_round_trip() {
        for c in Color::ALL {
            assert_eq!(Color::from_code(c.code()), Some(c));
        }
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Color::from_code(7), None);
    }
}
