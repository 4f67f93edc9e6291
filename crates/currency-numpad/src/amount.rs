//! The masked amount buffer: display string, caret, and decimal-entry state.

use crate::format::{group_thousands, strip_separators};
use crate::key::Key;

/// The value an empty input displays.
const EMPTY_VALUE: &str = "0.00";

/// A masked currency amount with a tracked caret.
///
/// The stored string always has the shape `W.FF` or `W,WWW.FF`: a
/// comma-grouped whole part, one decimal point, and two fraction characters
/// with `0` standing in for digits not yet typed. All edits flow through
/// [`AmountBuf::apply`], one keypress at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountBuf {
    /// Current display string.
    value: String,
    /// Whether entry is past the decimal point.
    after_decimal: bool,
    /// Fraction digits typed since entering decimal mode, at most 2.
    decimal_count: u8,
    /// Caret position within `value`.
    caret: usize,
}

/// Whether a string is a well-formed amount: correctly grouped whole part
/// with no superfluous leading zero, one decimal point, two fraction digits.
pub(crate) fn is_well_formed(s: &str) -> bool {
    let Some((whole, fraction)) = s.split_once('.') else {
        return false;
    };
    if fraction.len() != 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let unformatted = strip_separators(whole);
    if unformatted.is_empty() || !unformatted.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if unformatted.len() > 1 && unformatted.starts_with('0') {
        return false;
    }
    whole == group_thousands(&unformatted)
}

impl AmountBuf {
    /// Construct a buffer from a well-formed amount string, with the caret
    /// at index 1.
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_owned(),
            after_decimal: false,
            decimal_count: 0,
            caret: 1,
        }
    }

    /// The current display string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The caret position within the display string.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Whether entry is past the decimal point.
    pub fn after_decimal(&self) -> bool {
        self.after_decimal
    }

    /// How many fraction digits have been typed since entering decimal mode.
    pub fn decimal_count(&self) -> u8 {
        self.decimal_count
    }

    /// Split the value into whole and fraction parts.
    fn parts(&self) -> (&str, &str) {
        self.value.split_once('.').unwrap_or((&self.value, ""))
    }

    /// Apply a single keypress, capping the unformatted whole part at
    /// `max_whole_digits`. Returns whether the state changed; rejected keys
    /// leave the buffer untouched.
    pub fn apply(&mut self, key: Key, max_whole_digits: usize) -> bool {
        let changed = match key {
            Key::Digit(d) if self.after_decimal => self.fraction_digit(d),
            Key::Digit(d) => self.whole_digit(d, max_whole_digits),
            Key::Decimal => self.decimal_point(),
            Key::Delete => self.backspace(),
        };
        if changed {
            tracing::trace!(value = %self.value, caret = self.caret, "applied key");
        } else {
            tracing::trace!(?key, "rejected key");
        }
        changed
    }

    /// Type a digit into the whole part.
    fn whole_digit(&mut self, d: u8, max_whole_digits: usize) -> bool {
        let digit = char::from(b'0' + d);
        if self.value == EMPTY_VALUE {
            // The placeholder zero is overwritten, not appended to.
            self.value = format!("{digit}.00");
            self.caret = 1;
            return true;
        }
        let (whole, fraction) = self.parts();
        let unformatted = strip_separators(whole);
        if unformatted.len() >= max_whole_digits {
            return false;
        }
        let fraction = fraction.to_owned();
        if unformatted.len() >= 3 {
            // Appending the fourth digit onward shifts grouping, so rebuild
            // the whole part and place the caret after it.
            let regrouped = group_thousands(&format!("{unformatted}{digit}"));
            self.caret = regrouped.len();
            self.value = format!("{regrouped}.{fraction}");
        } else {
            let appended = format!("{whole}{digit}");
            self.value = format!("{appended}.{fraction}");
            self.caret += 1;
        }
        true
    }

    /// Type a digit into the fraction part.
    fn fraction_digit(&mut self, d: u8) -> bool {
        let digit = char::from(b'0' + d);
        match self.decimal_count {
            0 => {
                // First fraction digit replaces both placeholders.
                let whole = self.parts().0.to_owned();
                self.value = format!("{whole}.{digit}0");
                self.decimal_count = 1;
                self.caret += 1;
                true
            }
            1 => {
                // A second `0` would duplicate the placeholder already shown.
                if d == 0 {
                    return false;
                }
                let (whole, fraction) = self.parts();
                let first = fraction.chars().next().unwrap_or('0');
                let whole = whole.to_owned();
                self.value = format!("{whole}.{first}{digit}");
                self.decimal_count = 2;
                self.caret += 1;
                true
            }
            _ => false,
        }
    }

    /// Enter decimal mode. Only one decimal point ever.
    fn decimal_point(&mut self) -> bool {
        if self.after_decimal {
            return false;
        }
        self.after_decimal = true;
        self.caret += 1;
        true
    }

    /// Delete one step: fraction digits first, then the decimal point, then
    /// whole digits, bottoming out at the empty value.
    fn backspace(&mut self) -> bool {
        if self.after_decimal {
            match self.decimal_count {
                2 => {
                    let (whole, fraction) = self.parts();
                    let first = fraction.chars().next().unwrap_or('0');
                    let whole = whole.to_owned();
                    self.value = format!("{whole}.{first}0");
                    self.decimal_count = 1;
                    self.caret = self.caret.saturating_sub(1);
                }
                1 => {
                    let whole = self.parts().0.to_owned();
                    self.value = format!("{whole}.00");
                    self.decimal_count = 0;
                    self.caret = self.caret.saturating_sub(1);
                }
                _ => {
                    // Deleting the decimal point itself: leave decimal mode
                    // and park the caret at the end of the whole part.
                    self.after_decimal = false;
                    self.caret = self.parts().0.len();
                }
            }
            true
        } else {
            let whole = self.parts().0.to_owned();
            if whole.len() > 1 {
                let mut unformatted = strip_separators(&whole);
                unformatted.pop();
                let regrouped = group_thousands(&unformatted);
                self.caret = regrouped.len();
                self.value = format!("{regrouped}.00");
                true
            } else {
                let changed = self.value != EMPTY_VALUE || self.caret != 1;
                self.value = EMPTY_VALUE.to_owned();
                self.decimal_count = 0;
                self.caret = 1;
                changed
            }
        }
    }
}
