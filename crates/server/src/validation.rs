//! Request form validation.
//!
//! Checks run before any store call and collect every violated field's
//! message, not just the first. Presence of typed fields (dates, ids,
//! amounts) is already enforced by deserialization; a body that does not
//! parse is a malformed request, not a validation failure.

use std::sync::LazyLock;

use api_types::customer::CustomerForm;
use api_types::debt::DebtForm;
use regex::Regex;
use rust_decimal::Decimal;

use crate::ServerError;

// OWASP email validation pattern.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("invalid email pattern")
});

pub(crate) fn customer_form(form: &CustomerForm) -> Result<(), ServerError> {
    let mut violations = Vec::new();

    if form.name.trim().is_empty() {
        violations.push("Name cannot be empty".to_string());
    }
    if form.surname.trim().is_empty() {
        violations.push("Surname cannot be empty".to_string());
    }
    if form.country.trim().is_empty() {
        violations.push("Country cannot be empty".to_string());
    }
    if form.email.trim().is_empty() {
        violations.push("Email cannot be empty".to_string());
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        violations.push("Email is not valid".to_string());
    }
    if form.password.trim().is_empty() {
        violations.push("Password cannot be empty".to_string());
    }

    reject_if_any(violations)
}

pub(crate) fn debt_form(form: &DebtForm) -> Result<(), ServerError> {
    let mut violations = Vec::new();

    if form.amount < Decimal::ZERO {
        violations.push("Amount cannot be negative".to_string());
    }
    if form.currency.chars().count() != 3 {
        violations.push("Currency code should be exactly 3 symbols".to_string());
    }

    reject_if_any(violations)
}

fn reject_if_any(violations: Vec<String>) -> Result<(), ServerError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ServerError::Validation(violations))
    }
}
