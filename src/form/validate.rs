//! Validation predicates for the registration form.
//!
//! These are free functions so the reducer stays a thin dispatch layer and
//! each rule can be tested on its own.

use super::state::PasswordChecklist;

/// Minimum password length accepted by the checklist.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Apply the leading-zero prefix exactly once.
///
/// Idempotent: a value that already starts with `0` is returned unchanged,
/// so replaying input events never double-prefixes the stored number.
pub fn normalize_mobile_number(raw: &str) -> String {
    if raw.starts_with('0') {
        raw.to_string()
    } else {
        format!("0{raw}")
    }
}

/// Validity contract for a normalized mobile number: exactly 10 digits.
///
/// No locale-aware formatting; the fixed length is the whole rule.
pub fn is_valid_mobile_number(normalized: &str) -> bool {
    normalized.len() == 10 && normalized.chars().all(|c| c.is_ascii_digit())
}

/// Title-case each space-separated word: first letter upper, rest lower.
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Any character that is neither a letter nor a digit counts as special.
pub fn has_special_character(input: &str) -> bool {
    input.chars().any(|c| !c.is_alphanumeric())
}

/// Evaluate all five password rules independently.
///
/// Every predicate is computed even when others fail so the view can show
/// a live per-rule checklist.
pub fn password_checklist(password: &str) -> PasswordChecklist {
    PasswordChecklist {
        min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        has_uppercase: password.chars().any(char::is_uppercase),
        has_lowercase: password.chars().any(char::is_lowercase),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_special: has_special_character(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefixes_once() {
        assert_eq!(normalize_mobile_number("912345678"), "0912345678");
        assert_eq!(normalize_mobile_number("0912345678"), "0912345678");
    }

    #[test]
    fn mobile_number_requires_ten_digits() {
        assert!(is_valid_mobile_number("0912345678"));
        assert!(!is_valid_mobile_number("091234567"));
        assert!(!is_valid_mobile_number("09123456789"));
        assert!(!is_valid_mobile_number("091234567a"));
        assert!(!is_valid_mobile_number(""));
    }

    #[test]
    fn title_case_per_word() {
        assert_eq!(title_case("ana"), "Ana");
        assert_eq!(title_case("ana maria"), "Ana Maria");
        assert_eq!(title_case("McDONALD"), "Mcdonald");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn checklist_passes_strong_password() {
        let checklist = password_checklist("Abc123!");
        assert!(checklist.min_length);
        assert!(checklist.has_uppercase);
        assert!(checklist.has_lowercase);
        assert!(checklist.has_digit);
        assert!(checklist.has_special);
        assert!(checklist.all_passed());
    }

    #[test]
    fn checklist_rules_are_independent() {
        let checklist = password_checklist("abc");
        assert!(!checklist.min_length);
        assert!(!checklist.has_uppercase);
        assert!(checklist.has_lowercase);
        assert!(!checklist.has_digit);
        assert!(!checklist.has_special);
        assert!(!checklist.all_passed());
    }

    #[test]
    fn empty_password_fails_every_rule() {
        assert_eq!(password_checklist(""), PasswordChecklist::default());
    }
}
