//! Input validation for every user-submitted form.
//!
//! Each form is a plain struct of raw strings as they arrived from the
//! browser. `validate` either yields typed domain values or a [`FormErrors`]
//! carrying per-field messages, which the HTML layer renders next to the
//! offending inputs.

pub mod article;
pub mod auth;
pub mod recipe;

use crate::domain::errors::{DomainError, DomainResult};
use std::{collections::BTreeMap, fmt};
use unicode_general_category::{GeneralCategory, get_general_category};

pub const REQUIRED: &str = "This field is required.";
pub const TITLE_NOT_ALPHANUMERIC: &str = "Title must be alpha numeric";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
    non_field: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field.push(message.into());
    }

    pub fn with_non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_non_field(message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.non_field.is_empty()
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn non_field(&self) -> &[String] {
        &self.non_field
    }

    /// Collects the outcome of a single field check.
    pub fn check<T, E: fmt::Display>(
        &mut self,
        field: &'static str,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.add(field, err.to_string());
                None
            }
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.non_field.clone();
        for (field, messages) in &self.fields {
            for message in messages {
                parts.push(format!("{field}: {message}"));
            }
        }
        f.write_str(&parts.join("; "))
    }
}

/// Whitespace-trimmed value, or the "required" error when nothing is left.
pub fn required(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        Err(REQUIRED)
    } else {
        Ok(value.to_owned())
    }
}

/// Letters (`L*`) and numbers (`N*`) only. Combining marks are excluded even
/// where Unicode counts them as alphabetic.
fn is_title_char(c: char) -> bool {
    use GeneralCategory::{
        DecimalNumber, LetterNumber, LowercaseLetter, ModifierLetter, OtherLetter, OtherNumber,
        TitlecaseLetter, UppercaseLetter,
    };

    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// A title is acceptable when, with spaces removed, it is a non-empty run of
/// letters and numbers.
pub fn is_alphanumeric_title(title: &str) -> bool {
    let mut compact = title.chars().filter(|c| *c != ' ').peekable();
    compact.peek().is_some() && compact.all(is_title_char)
}

/// Required, trimmed and alphanumeric-after-space-removal.
pub fn clean_title(raw: &str) -> Result<String, &'static str> {
    let title = required(raw)?;
    if is_alphanumeric_title(&title) {
        Ok(title)
    } else {
        Err(TITLE_NOT_ALPHANUMERIC)
    }
}

/// Domain validation messages without the error-kind prefix.
pub fn domain_rule<T>(result: DomainResult<T>) -> Result<T, String> {
    result.map_err(|err| match err {
        DomainError::Validation(message) => message,
        other => other.to_string(),
    })
}

/// Treats blank input as absent.
pub fn optional(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_titles_are_accepted() {
        for title in ["Pancakes", "Grandma s Soup 2", "Borş", "Plov 1999", "中中", "Ⅻ ²"] {
            assert!(is_alphanumeric_title(title), "{title}");
            assert!(clean_title(title).is_ok(), "{title}");
        }
    }

    #[test]
    fn punctuation_and_empty_titles_are_rejected() {
        for title in ["Mac & Cheese", "hello!", "tab\tseparated", "   ", "का", "Ⓐ"] {
            assert!(!is_alphanumeric_title(title), "{title}");
        }
        assert_eq!(clean_title("Mac & Cheese"), Err(TITLE_NOT_ALPHANUMERIC));
        assert_eq!(clean_title("   "), Err(REQUIRED));
    }

    #[test]
    fn title_is_trimmed_before_checking() {
        assert_eq!(clean_title("  Soup  ").unwrap(), "Soup");
    }

    #[test]
    fn errors_collect_per_field() {
        let mut errors = FormErrors::new();
        assert!(errors.check::<(), _>("title", Err("bad")).is_none());
        assert_eq!(errors.check::<_, &str>("content", Ok(3)), Some(3));
        errors.add_non_field("nope");

        assert_eq!(errors.field("title"), ["bad".to_string()]);
        assert!(errors.field("content").is_empty());
        assert_eq!(errors.non_field(), ["nope".to_string()]);
        assert_eq!(errors.to_string(), "nope; title: bad");
        assert!(errors.into_result().is_err());
    }
}
