use serde::{Deserialize, Serialize};

use crate::fields::{Field, FieldErrors};

/// Raw contact form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub average_sales_volume: String,
    pub market_experience: String,
    pub message: String,
}

/// Validated contact request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub average_sales_volume: String,
    pub market_experience: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::AverageSalesVolume => &mut self.average_sales_volume,
            Field::MarketExperience => &mut self.market_experience,
            Field::Message => &mut self.message,
            Field::Budget => return false,
        };
        *slot = value.into();
        true
    }

    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.full_name.trim().is_empty() {
            errors.insert(Field::FullName, "Full name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email");
        }
        if self.phone.trim().is_empty() {
            errors.insert(Field::Phone, "Phone number is required");
        }
        if self.average_sales_volume.is_empty() {
            errors.insert(Field::AverageSalesVolume, "Please select a sales volume");
        }
        if self.market_experience.is_empty() {
            errors.insert(Field::MarketExperience, "Please select your market experience");
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required");
        }

        errors.into_result(ContactSubmission {
            full_name: self.full_name.trim().to_string(),
            email: self.email.clone(),
            phone: self.phone.trim().to_string(),
            average_sales_volume: self.average_sales_volume.clone(),
            market_experience: self.market_experience.clone(),
            message: self.message.trim().to_string(),
        })
    }
}

/// `local@domain.tld` shape: no whitespace, one `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i < last)
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, is_valid_email};
    use crate::fields::Field;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            full_name: " Ana Novak ".into(),
            email: "ana@example.com".into(),
            phone: "+386 1 234".into(),
            average_sales_volume: "$1,000 - $5,000".into(),
            market_experience: "Europe".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().expect_err("invalid");
        let got: Vec<_> = errors.iter().collect();
        assert_eq!(
            got,
            vec![
                (Field::FullName, "Full name is required"),
                (Field::Email, "Email is required"),
                (Field::Phone, "Phone number is required"),
                (Field::AverageSalesVolume, "Please select a sales volume"),
                (Field::MarketExperience, "Please select your market experience"),
                (Field::Message, "Message is required"),
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.message = "   ".into();
        let errors = form.validate().expect_err("invalid");
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_is_flagged() {
        let mut form = filled();
        form.email = "ana@example".into();
        let errors = form.validate().expect_err("invalid");
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn valid_form_encodes_camel_case_json() {
        let submission = filled().validate().expect("valid");
        assert_eq!(submission.full_name, "Ana Novak");
        let json: serde_json::Value = serde_json::from_str(&submission.to_json().expect("json")).expect("parse");
        assert_eq!(json["fullName"], "Ana Novak");
        assert_eq!(json["averageSalesVolume"], "$1,000 - $5,000");
        assert_eq!(json["marketExperience"], "Europe");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn set_updates_named_fields() {
        let mut form = ContactForm::default();
        assert!(form.set(Field::Email, "x@y.z"));
        assert!(!form.set(Field::Budget, "<10K"));
        assert_eq!(form.email, "x@y.z");
    }
}
