use validator::ValidationErrors;

/// Flattens validator output into `"field: message"` lines, sorted by field.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut result = Vec::new();

    for (field, field_errors) in fields {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "email" => "invalid email format".to_string(),
                    "url" => "invalid URL format".to_string(),
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "regex" => "invalid format".to_string(),
                    "required" => "required".to_string(),
                    _ => "invalid value".to_string(),
                });

            result.push(format!("{field}: {message}"));
        }
    }

    if result.is_empty() {
        result.push("Validation failed".to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(email)]
        email: String,
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn formats_custom_and_default_messages() {
        let signup = Signup {
            email: "nope".into(),
            name: "x".into(),
        };
        let errors = signup.validate().unwrap_err();
        let lines = format_validation_errors(&errors);
        assert_eq!(
            lines,
            vec![
                "email: invalid email format".to_string(),
                "name: too short".to_string()
            ]
        );
    }
}
