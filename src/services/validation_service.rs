use std::sync::OnceLock;

use regex::Regex;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Minimal syntactic check of the form `local@domain.tld`. Not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(email)
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Whether the booking form may be submitted.
///
/// The date clause accepts every night count, including zero from a missing
/// or inverted range. That permissiveness is kept as-is pending a product
/// decision; see `test_submit_gate_ignores_dates`.
pub fn is_submittable(full_name: &str, email: &str, nights: u32, package_selected: bool) -> bool {
    let dates_valid = nights > 0 || nights == 0;
    is_valid_name(full_name) && is_valid_email(email) && dates_valid && package_selected
}
