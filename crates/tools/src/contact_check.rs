use forms::{ContactForm, FieldErrors};

/// Parses a contact form JSON document and validates it.
///
/// Ok carries the request body that would be posted.
pub fn check_contact(json: &str) -> Result<Result<String, FieldErrors>, String> {
    let form: ContactForm = serde_json::from_str(json).map_err(|e| format!("invalid contact JSON: {e}"))?;
    Ok(match form.validate() {
        Ok(submission) => Ok(submission.to_json().map_err(|e| e.to_string())?),
        Err(errors) => Err(errors),
    })
}

#[cfg(test)]
mod tests {
    use super::check_contact;
    use forms::Field;

    #[test]
    fn reports_field_errors() {
        let result = check_contact(r#"{"fullName":"Ana","email":"nope"}"#).expect("parsed");
        let errors = result.expect_err("invalid");
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
        assert_eq!(errors.get(Field::FullName), None);
    }

    #[test]
    fn valid_form_yields_body() {
        let json = r#"{"fullName":"Ana","email":"a@b.co","phone":"1","averageSalesVolume":"$50,000+","marketExperience":"Asia","message":"Hi"}"#;
        let body = check_contact(json).expect("parsed").expect("valid");
        assert!(body.contains(r#""marketExperience":"Asia""#));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(check_contact("[").is_err());
    }
}
