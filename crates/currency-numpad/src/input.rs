//! The composed currency input: amount buffer plus validation and observers.

use std::fmt;

use crate::amount::{AmountBuf, is_well_formed};
use crate::error::{Error, Result};
use crate::format::to_numeric;
use crate::key::Key;
use crate::validate::Limits;

/// Default cap on unformatted whole-part digits.
pub const DEFAULT_MAX_WHOLE_DIGITS: usize = 6;

/// Observer for value changes, called with the display string and its
/// numeric value.
type ValueObserver = Box<dyn FnMut(&str, f64)>;

/// Observer for validation errors; an empty message means the error cleared.
type ErrorObserver = Box<dyn FnMut(&str)>;

/// Builder-style configuration for a [`CurrencyInput`].
pub struct Config {
    /// Starting display string.
    initial_value: String,
    /// Cap on unformatted whole-part digits.
    max_whole_digits: usize,
    /// Bounds, message overrides, and the custom validation hook.
    limits: Limits,
    /// Value-change observer.
    on_value_change: Option<ValueObserver>,
    /// Error observer.
    on_error: Option<ErrorObserver>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: "0.00".to_owned(),
            max_whole_digits: DEFAULT_MAX_WHOLE_DIGITS,
            limits: Limits::default(),
            on_value_change: None,
            on_error: None,
        }
    }
}

impl Config {
    /// Start from the defaults: initial value `"0.00"`, six whole digits,
    /// no bounds, no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build with a starting display string. It must be a well-formed
    /// amount (`W.FF` or `W,WWW.FF`); [`Config::build`] rejects anything
    /// else.
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Build with a maximum permitted amount.
    pub fn with_max_amount(mut self, max: f64) -> Self {
        self.limits.max_amount = Some(max);
        self
    }

    /// Build with a minimum permitted amount. A value of exactly zero is
    /// never flagged against the minimum.
    pub fn with_min_amount(mut self, min: f64) -> Self {
        self.limits.min_amount = Some(min);
        self
    }

    /// Build with a cap on unformatted whole-part digits.
    pub fn with_max_whole_digits(mut self, digits: usize) -> Self {
        self.max_whole_digits = digits;
        self
    }

    /// Override the maximum-exceeded error message.
    pub fn with_max_message(mut self, message: impl Into<String>) -> Self {
        self.limits.max_message = Some(message.into());
        self
    }

    /// Override the below-minimum error message.
    pub fn with_min_message(mut self, message: impl Into<String>) -> Self {
        self.limits.min_message = Some(message.into());
        self
    }

    /// Build with a custom validation hook, checked after the bounds. The
    /// hook returns an error message for a value, or `None` to accept it.
    pub fn with_validator(mut self, validator: impl Fn(f64) -> Option<String> + 'static) -> Self {
        self.limits.validator = Some(Box::new(validator));
        self
    }

    /// Observe value changes. Fired on construction and on every keypress
    /// with the display string and its numeric value.
    pub fn on_value_change(mut self, observer: impl FnMut(&str, f64) + 'static) -> Self {
        self.on_value_change = Some(Box::new(observer));
        self
    }

    /// Observe validation errors. Fired alongside the value observer; an
    /// empty message signals that a previous error cleared.
    pub fn on_error(mut self, observer: impl FnMut(&str) + 'static) -> Self {
        self.on_error = Some(Box::new(observer));
        self
    }

    /// Construct the input, validate the initial value, and notify the
    /// observers of the starting state.
    pub fn build(self) -> Result<CurrencyInput> {
        if !is_well_formed(&self.initial_value) {
            return Err(Error::InvalidInitialValue(self.initial_value));
        }
        let mut input = CurrencyInput {
            buf: AmountBuf::new(&self.initial_value),
            initial_value: self.initial_value,
            max_whole_digits: self.max_whole_digits,
            limits: self.limits,
            error: String::new(),
            on_value_change: self.on_value_change,
            on_error: self.on_error,
        };
        input.refresh();
        Ok(input)
    }
}

/// A numeric-keypad currency input.
///
/// Owns the masked amount buffer, the validation configuration, and the
/// observer callbacks. [`CurrencyInput::key`] is the sole mutating entry
/// point: each call applies one keypress atomically, recomputes validation,
/// and notifies both observers before returning. Validation never blocks
/// input; an out-of-range value is still accepted and merely reported
/// through the error observer.
pub struct CurrencyInput {
    /// The masked amount and caret state.
    buf: AmountBuf,
    /// Initial display string, restored by [`CurrencyInput::reset`].
    initial_value: String,
    /// Cap on unformatted whole-part digits.
    max_whole_digits: usize,
    /// Bounds, message overrides, and the custom validation hook.
    limits: Limits,
    /// Current validation error, empty when the value is acceptable.
    error: String,
    /// Value-change observer.
    on_value_change: Option<ValueObserver>,
    /// Error observer.
    on_error: Option<ErrorObserver>,
}

impl CurrencyInput {
    /// The current display string.
    pub fn value(&self) -> &str {
        self.buf.value()
    }

    /// The caret position within the display string.
    pub fn caret(&self) -> usize {
        self.buf.caret()
    }

    /// Whether entry is past the decimal point.
    pub fn after_decimal(&self) -> bool {
        self.buf.after_decimal()
    }

    /// The numeric value of the current display string.
    pub fn numeric_value(&self) -> f64 {
        to_numeric(self.buf.value())
    }

    /// The current validation error; empty when the value is acceptable.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether the current value fails validation.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Apply a keypress given as a character: `'0'..='9'`, `'.'`, or the
    /// delete sentinel `'X'`. Unrecognized characters are ignored. The
    /// observers are notified in every case.
    pub fn key(&mut self, c: char) {
        match Key::from_char(c) {
            Some(key) => self.press(key),
            None => {
                tracing::trace!(%c, "ignoring unrecognized key");
                self.refresh();
            }
        }
    }

    /// Apply a keypress, recompute validation, and notify the observers.
    pub fn press(&mut self, key: Key) {
        let changed = self.buf.apply(key, self.max_whole_digits);
        if changed {
            tracing::debug!(value = self.buf.value(), caret = self.buf.caret(), "key applied");
        }
        self.refresh();
    }

    /// Restore the initial state (value, mode, caret, error) without
    /// touching the configured bounds, then revalidate and notify.
    pub fn reset(&mut self) {
        self.buf = AmountBuf::new(&self.initial_value);
        self.error.clear();
        self.refresh();
    }

    /// Recompute the validation error and notify both observers.
    fn refresh(&mut self) {
        let numeric = to_numeric(self.buf.value());
        self.error = self.limits.check(numeric);
        if let Some(observer) = self.on_value_change.as_mut() {
            observer(self.buf.value(), numeric);
        }
        if let Some(observer) = self.on_error.as_mut() {
            observer(&self.error);
        }
    }
}

impl fmt::Debug for CurrencyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyInput")
            .field("value", &self.buf.value())
            .field("caret", &self.buf.caret())
            .field("after_decimal", &self.buf.after_decimal())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
