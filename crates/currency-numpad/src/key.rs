//! Keypad alphabet and button-grid legend.

/// Labels for the digit keys, indexed by digit value.
const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single key on the currency keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// The delete (backspace) key.
    Delete,
}

/// The keypad legend in button-grid order: three keys per row, with the
/// decimal point, zero and delete along the bottom.
pub const LAYOUT: [[Key; 3]; 4] = [
    [Key::Digit(1), Key::Digit(2), Key::Digit(3)],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6)],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9)],
    [Key::Decimal, Key::Digit(0), Key::Delete],
];

impl Key {
    /// Parse a key from its character form: `'0'..='9'`, `'.'`, or the
    /// delete sentinel `'X'`. Any other character yields `None`, which
    /// callers treat as a no-op.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Decimal),
            'X' => Some(Self::Delete),
            _ => None,
        }
    }

    /// The text a keypad button renders for this key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS[usize::from(d) % 10],
            Self::Decimal => ".",
            Self::Delete => "\u{232b}",
        }
    }
}
