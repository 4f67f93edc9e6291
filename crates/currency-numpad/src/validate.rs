//! Range and custom validation over the numeric value.

/// A custom validation hook: returns an error message for a value, or `None`
/// to accept it.
pub(crate) type Validator = Box<dyn Fn(f64) -> Option<String>>;

/// Validation configuration: optional bounds, message overrides, and a
/// custom hook checked after the bounds.
#[derive(Default)]
pub(crate) struct Limits {
    /// Maximum permitted amount.
    pub(crate) max_amount: Option<f64>,
    /// Minimum permitted amount.
    pub(crate) min_amount: Option<f64>,
    /// Override for the maximum-exceeded message.
    pub(crate) max_message: Option<String>,
    /// Override for the below-minimum message.
    pub(crate) min_message: Option<String>,
    /// Custom validation hook.
    pub(crate) validator: Option<Validator>,
}

impl Limits {
    /// Compute the error message for a numeric value; empty means the value
    /// is acceptable. A value of exactly zero never trips the minimum, so
    /// an entry still in progress is not flagged.
    pub(crate) fn check(&self, numeric: f64) -> String {
        if let Some(max) = self.max_amount
            && numeric > max
        {
            return self
                .max_message
                .clone()
                .unwrap_or_else(|| format!("Maximum amount is {max}"));
        }
        if let Some(min) = self.min_amount
            && numeric < min
            && numeric > 0.0
        {
            return self
                .min_message
                .clone()
                .unwrap_or_else(|| format!("Minimum amount is {min}"));
        }
        if let Some(validator) = &self.validator
            && let Some(message) = validator(numeric)
        {
            return message;
        }
        String::new()
    }
}
