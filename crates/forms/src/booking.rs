use serde::{Deserialize, Serialize};

use crate::encode::encode_pairs;
use crate::fields::{Field, FieldErrors};

/// Book-a-demo input. Only name, phone and budget are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoBooking {
    pub full_name: String,
    pub phone: String,
    /// "How did you hear about us?" (free text)
    pub source: String,
    pub experience: String,
    pub budget: String,
    /// `HH:MM` from a time input, or empty.
    pub meeting_time: String,
    pub notes: String,
}

/// A booking that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission(DemoBooking);

impl DemoBooking {
    pub fn validate(&self) -> Result<BookingSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.full_name.trim().is_empty() {
            errors.insert(Field::FullName, "Full name is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert(Field::Phone, "Phone number is required");
        }
        if self.budget.is_empty() {
            errors.insert(Field::Budget, "Please select a budget range");
        }
        errors.into_result(BookingSubmission(self.clone()))
    }
}

impl BookingSubmission {
    pub fn booking(&self) -> &DemoBooking {
        &self.0
    }

    /// Query parameters in wire order.
    pub fn query_pairs(&self) -> [(&'static str, &str); 7] {
        let b = &self.0;
        [
            ("fullName", b.full_name.as_str()),
            ("phone", b.phone.as_str()),
            ("source", b.source.as_str()),
            ("experience", b.experience.as_str()),
            ("budget", b.budget.as_str()),
            ("meetingTime", b.meeting_time.as_str()),
            ("notes", b.notes.as_str()),
        ]
    }

    pub fn to_query(&self) -> String {
        encode_pairs(self.query_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::DemoBooking;
    use crate::fields::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn required_fields() {
        let errors = DemoBooking::default().validate().expect_err("invalid");
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::FullName, Field::Phone, Field::Budget]);
        assert_eq!(errors.get(Field::Budget), Some("Please select a budget range"));
    }

    #[test]
    fn query_keeps_fixed_order_and_empty_fields() {
        let booking = DemoBooking {
            full_name: "Jan Kowalski".into(),
            phone: "+48 600".into(),
            budget: "10K-50K".into(),
            meeting_time: "14:30".into(),
            ..DemoBooking::default()
        };
        let q = booking.validate().expect("valid").to_query();
        assert_eq!(
            q,
            "fullName=Jan+Kowalski&phone=%2B48+600&source=&experience=&budget=10K-50K&meetingTime=14%3A30&notes="
        );
    }
}
