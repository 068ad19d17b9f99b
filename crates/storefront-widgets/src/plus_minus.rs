//! Generic plus/minus steppers next to `.form-control` inputs.

use web_sys::Element;

use crate::dom;
use crate::numeric::parse_leading_int;

pub const MINUS_SELECTOR: &str = ".js-btn-minus";
pub const PLUS_SELECTOR: &str = ".js-btn-plus";

pub fn increment(current: i64) -> i64 {
    current.saturating_add(1)
}

/// One step down, never below zero.
pub fn decrement(current: i64) -> i64 {
    current.saturating_sub(1).max(0)
}

pub fn bind() {
    dom::on_each(MINUS_SELECTOR, "click", |button, ev| {
        ev.prevent_default();
        step_field(button, decrement);
    });
    dom::on_each(PLUS_SELECTOR, "click", |button, ev| {
        ev.prevent_default();
        step_field(button, increment);
    });
}

/// Apply `step` to the `.form-control` sharing an `.input-group` with `button`.
fn step_field(button: &Element, step: fn(i64) -> i64) {
    let field = button
        .closest(".input-group")
        .ok()
        .flatten()
        .and_then(|group| group.query_selector(".form-control").ok().flatten());
    let Some(field) = field else {
        return;
    };
    let raw = dom::input_value(&field);
    dom::set_input_value(&field, &step_value(raw.as_deref(), step));
}

/// New text for a stepped field. Empty or non-numeric content counts as zero.
pub fn step_value(raw: Option<&str>, step: fn(i64) -> i64) -> String {
    let current = raw.and_then(parse_leading_int).unwrap_or(0);
    step(current).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_stops_at_zero() {
        assert_eq!(decrement(3), 2);
        assert_eq!(decrement(1), 0);
        assert_eq!(decrement(0), 0);
        assert_eq!(decrement(-4), 0);
    }

    #[test]
    fn test_step_value_reads_field_text() {
        assert_eq!(step_value(Some("4"), increment), "5");
        assert_eq!(step_value(Some("4"), decrement), "3");
        assert_eq!(step_value(Some(" 2 kg"), decrement), "1");
    }

    #[test]
    fn test_step_value_empty_or_non_numeric_field() {
        assert_eq!(step_value(Some(""), increment), "1");
        assert_eq!(step_value(Some(""), decrement), "0");
        assert_eq!(step_value(Some("abc"), increment), "1");
        assert_eq!(step_value(Some("abc"), decrement), "0");
        assert_eq!(step_value(None, increment), "1");
    }

    #[test]
    fn test_increment() {
        assert_eq!(increment(0), 1);
        assert_eq!(increment(41), 42);
        assert_eq!(increment(i64::MAX), i64::MAX);
    }
}
