//! Pure form computations and the field-sink seam
//!
//! Every routine in this module takes its inputs as explicit values and
//! delivers its result through a [`FieldSink`], never by reaching into a
//! page by element id. That keeps the logic testable and leaves the page
//! layout to whatever frontend hosts these services.
//!
//! ```text
//! form field value ──► update_*()
//!                          │
//!                          ├─ parse / classify / count
//!                          │
//!                          ▼
//!                     FieldSink::set_text()   (exactly one write)
//! ```
//!
//! Invalid input never raises toward the user here: an unparsable score or
//! date clears the target field and nothing else happens.

pub mod rating;
pub mod vacation;

pub use rating::{classify_evaluation, update_rating, Rating};
pub use vacation::{
    annual_accrual, days_taken, evaluate_vacation_request, update_accumulated_days,
    update_days_taken, VacationGrant, LONG_SERVICE_ACCRUAL_DAYS, STANDARD_ACCRUAL_DAYS,
};

/// Write capability for a single output field.
///
/// The portal page hands one of these per output slot; tests hand a
/// [`TextSlot`]. Each form routine performs exactly one write per
/// invocation, either a value or a clear.
pub trait FieldSink {
    /// Replace the field's text with `value`.
    fn set_text(&mut self, value: &str);

    /// Clear the field. Equivalent to writing the empty string.
    fn clear(&mut self) {
        self.set_text("");
    }
}

/// In-memory sink backed by a `String`.
///
/// Stands in for a DOM text slot in tests and in the demo binary.
#[derive(Debug, Default, Clone)]
pub struct TextSlot {
    value: String,
}

impl TextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rendered text of the slot.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FieldSink for TextSlot {
    fn set_text(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_slot_records_last_write() {
        let mut slot = TextSlot::new();
        slot.set_text("hello");
        slot.set_text("world");
        assert_eq!(slot.value(), "world");
    }

    #[test]
    fn clear_writes_empty_string() {
        let mut slot = TextSlot::new();
        slot.set_text("something");
        slot.clear();
        assert_eq!(slot.value(), "");
    }
}
