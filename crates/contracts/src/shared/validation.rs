//! Field-level validation shared by all record drafts

use std::collections::BTreeMap;

use super::dates::parse_date_prefix;

/// Ошибки формы: поле → сообщение
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message reported for a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
    }
}

/// Only checks non-empty values; emptiness is `require`'s job
pub fn check_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        errors.add(field, "Enter a valid email address");
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn check_phone(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    let digits = digits_only(value).len();
    if !(10..=15).contains(&digits) {
        errors.add(field, "Phone number must contain 10 to 15 digits");
    }
}

pub fn is_valid_pincode(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

pub fn check_pincode(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !is_valid_pincode(value) {
        errors.add(field, "Pincode must be 6 digits");
    }
}

/// `to` must not be earlier than `from`; skipped while either side is missing
pub fn check_date_order(
    errors: &mut FieldErrors,
    field: &'static str,
    from: &str,
    to: &str,
    message: &str,
) {
    if let (Some(from), Some(to)) = (parse_date_prefix(from), parse_date_prefix(to)) {
        if to < from {
            errors.add(field, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", "   ", "Title");
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email() {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", "");
        check_email(&mut errors, "email", "ops@example.in");
        assert!(errors.is_empty());
        check_email(&mut errors, "email", "ops@example");
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_phone_and_pincode() {
        let mut errors = FieldErrors::new();
        check_phone(&mut errors, "phone", "+91 98765-43210");
        check_pincode(&mut errors, "pincode", "560001");
        assert!(errors.is_empty());
        check_phone(&mut errors, "phone", "12345");
        check_pincode(&mut errors, "pincode", "56001");
        assert!(errors.contains("phone"));
        assert!(errors.contains("pincode"));
    }

    #[test]
    fn test_date_order() {
        let mut errors = FieldErrors::new();
        check_date_order(&mut errors, "to", "2024-05-01", "", "bad");
        check_date_order(&mut errors, "to", "2024-05-01", "2024-05-01", "bad");
        assert!(errors.is_empty());
        check_date_order(&mut errors, "to", "2024-05-02", "2024-05-01", "bad");
        assert_eq!(errors.get("to"), Some("bad"));
    }
}
