use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use super::{ContactSubmission, Field};

pub type FieldErrors = BTreeMap<Field, String>;

pub const NAME_LEN: (usize, usize) = (2, 50);
pub const SUBJECT_LEN: (usize, usize) = (3, 100);
pub const MESSAGE_LEN: (usize, usize) = (10, 5000);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern should compile")
});

fn within(value: &str, (min, max): (usize, usize)) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field of `submission` and returns one message per failing
/// field. An empty map means the submission may be sent.
pub fn validate(submission: &ContactSubmission) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !within(&submission.name, NAME_LEN) {
        errors.insert(
            Field::Name,
            format!(
                "Name must be between {} and {} characters",
                NAME_LEN.0, NAME_LEN.1
            ),
        );
    }

    if submission.email.is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !is_valid_email(&submission.email) {
        errors.insert(Field::Email, "Email address is invalid".to_string());
    }

    if !within(&submission.subject, SUBJECT_LEN) {
        errors.insert(
            Field::Subject,
            format!(
                "Subject must be between {} and {} characters",
                SUBJECT_LEN.0, SUBJECT_LEN.1
            ),
        );
    }

    if !within(&submission.message, MESSAGE_LEN) {
        errors.insert(
            Field::Message,
            format!(
                "Message must be between {} and {} characters",
                MESSAGE_LEN.0, MESSAGE_LEN.1
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ContactSubmission {
        ContactSubmission {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hi there".to_string(),
            message: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_minimum_lengths_are_valid() {
        assert!(validate(&minimal()).is_empty());
    }

    #[test]
    fn test_short_name_only_flags_name() {
        let submission = ContactSubmission {
            name: "A".to_string(),
            ..minimal()
        };
        let errors = validate(&submission);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::Name).map(String::as_str),
            Some("Name must be between 2 and 50 characters")
        );
    }

    #[test]
    fn test_length_bounds() {
        let cases = [
            (Field::Name, NAME_LEN),
            (Field::Subject, SUBJECT_LEN),
            (Field::Message, MESSAGE_LEN),
        ];
        for (field, (min, max)) in cases {
            for (len, ok) in [
                (min - 1, false),
                (min, true),
                (max, true),
                (max + 1, false),
            ] {
                let mut submission = minimal();
                *submission.field_mut(field) = "x".repeat(len);
                let errors = validate(&submission);
                assert_eq!(
                    !errors.contains_key(&field),
                    ok,
                    "{field:?} with length {len}"
                );
                assert!(errors.keys().all(|f| *f == field));
            }
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let submission = ContactSubmission {
            name: "Zoë".to_string(),
            subject: "äöü".to_string(),
            ..minimal()
        };
        assert!(validate(&submission).is_empty());

        let submission = ContactSubmission {
            name: "é".repeat(50),
            ..minimal()
        };
        assert!(validate(&submission).is_empty());
    }

    #[test]
    fn test_email_messages() {
        let empty = ContactSubmission {
            email: String::new(),
            ..minimal()
        };
        assert_eq!(
            validate(&empty).get(&Field::Email).map(String::as_str),
            Some("Email is required")
        );

        for bad in ["plain", "a@b", "a@b.c", "@b.co", "a b@c.co", "a@b.co "] {
            let submission = ContactSubmission {
                email: bad.to_string(),
                ..minimal()
            };
            assert_eq!(
                validate(&submission).get(&Field::Email).map(String::as_str),
                Some("Email address is invalid"),
                "{bad}"
            );
        }

        for good in ["first.last+tag@mail.example.org", "x_y%z@sub-domain.io"] {
            assert!(is_valid_email(good), "{good}");
        }
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate(&ContactSubmission::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), Field::ALL);
    }
}
