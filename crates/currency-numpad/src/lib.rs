//! Core state machine for a numeric-keypad currency input widget.
//!
//! The crate owns the non-visual half of the widget: a masked amount string
//! (`"1,234.50"`), a tracked caret, the per-keypress transition logic, and
//! range/custom validation over the resulting value. Rendering (button grid,
//! blinking caret, styling) is the embedding application's job; it feeds
//! keypresses in through [`CurrencyInput::key`] and draws whatever
//! [`CurrencyInput::value`] and [`CurrencyInput::caret`] report.

mod amount;
pub mod error;
mod format;
mod input;
mod key;
mod validate;

pub use amount::AmountBuf;
pub use error::{Error, Result};
pub use format::{fixed_decimals, group_thousands, to_numeric};
pub use input::{Config, CurrencyInput, DEFAULT_MAX_WHOLE_DIGITS};
pub use key::{Key, LAYOUT};
