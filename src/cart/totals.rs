//! Cart Totals
//!
//! Recomputes every row subtotal and the grand total from what the page
//! currently shows. Nothing is cached; the page is read fresh on each run.

use std::str::FromStr;

use rust_decimal::Decimal;
use storefront_widgets::numeric::parse_leading_int;

use super::page::CartPage;

/// Shown where an amount could not be computed.
pub const NOT_A_NUMBER: &str = "NaN";

/// Outcome of one recomputation. `None` amounts rendered as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    pub subtotals: Vec<Option<Decimal>>,
    pub total: Option<Decimal>,
}

/// Read the leading decimal number of `raw`, the way a browser `parseFloat` does.
pub fn parse_leading_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let frac = rest[int_len..]
        .strip_prefix('.')
        .map(|tail| &tail[..tail.bytes().take_while(u8::is_ascii_digit).count()])
        .unwrap_or("");
    let int_part = &rest[..int_len];
    if int_part.is_empty() && frac.is_empty() {
        return None;
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let number = if frac.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac)
    };
    Decimal::from_str(&number).ok()
}

/// `quantity × unit price`, or `None` if either side is not a number.
pub fn row_subtotal(quantity: &str, unit_price: &str) -> Option<Decimal> {
    let quantity = Decimal::from(parse_leading_int(quantity)?);
    quantity.checked_mul(parse_leading_decimal(unit_price)?)
}

/// Display text for an amount: trailing zeros dropped, `NaN` when missing.
pub fn format_amount(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) => value.normalize().to_string(),
        None => NOT_A_NUMBER.to_string(),
    }
}

/// Rewrite every row subtotal and the cart total on `page`.
pub fn recompute_totals<P: CartPage>(page: &P) -> CartTotals {
    let mut total = Some(Decimal::ZERO);
    let mut subtotals = Vec::new();
    for row in page.rows() {
        let subtotal = row_subtotal(&row.quantity, &row.unit_price);
        if subtotal.is_none() {
            log::warn!(
                "[cart] row {} has a non-numeric quantity {:?} or price {:?}",
                row.product_id,
                row.quantity,
                row.unit_price
            );
        }
        page.set_row_subtotal(row.index, &format_amount(subtotal));
        total = match (total, subtotal) {
            (Some(sum), Some(value)) => sum.checked_add(value),
            _ => None,
        };
        subtotals.push(subtotal);
    }
    page.set_cart_total(&format_amount(total));
    CartTotals { subtotals, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::fake::FakePage;
    use rust_decimal::Decimal;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn test_parse_leading_decimal() {
        assert_eq!(parse_leading_decimal("12.50"), Some(dec("12.50")));
        assert_eq!(parse_leading_decimal("  7"), Some(dec("7")));
        assert_eq!(parse_leading_decimal(".5"), Some(dec("0.5")));
        assert_eq!(parse_leading_decimal("3. lv"), Some(dec("3")));
        assert_eq!(parse_leading_decimal("-1.25x"), Some(dec("-1.25")));
        assert_eq!(parse_leading_decimal("lv 3"), None);
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("."), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(dec("25.00"))), "25");
        assert_eq!(format_amount(Some(dec("7.50"))), "7.5");
        assert_eq!(format_amount(Some(Decimal::ZERO)), "0");
        assert_eq!(format_amount(None), "NaN");
    }

    #[test]
    fn test_subtotals_and_total() {
        let cases = [
            ("2", "12.50", "25"),
            ("3", "0.10", "0.3"),
            ("0", "99.99", "0"),
            ("10", "1.99", "19.9"),
        ];
        let mut page = FakePage::new();
        for (i, (quantity, price, _)) in cases.iter().enumerate() {
            page = page.with_row(&i.to_string(), quantity, price);
        }

        let totals = recompute_totals(&page);

        for (i, (_, _, expected)) in cases.iter().enumerate() {
            assert_eq!(page.subtotal(i).as_deref(), Some(*expected));
        }
        let sum: Decimal = totals.subtotals.iter().map(|s| s.unwrap()).sum();
        assert_eq!(totals.total, Some(sum));
        assert_eq!(page.cart_total().as_deref(), Some("45.2"));
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let page = FakePage::new();
        let totals = recompute_totals(&page);
        assert_eq!(totals.total, Some(Decimal::ZERO));
        assert_eq!(page.cart_total().as_deref(), Some("0"));
    }

    #[test]
    fn test_non_numeric_row_propagates_nan() {
        let page = FakePage::new()
            .with_row("1", "2", "5.00")
            .with_row("2", "two", "5.00");

        let totals = recompute_totals(&page);

        assert_eq!(page.subtotal(0).as_deref(), Some("10"));
        assert_eq!(page.subtotal(1).as_deref(), Some("NaN"));
        assert_eq!(totals.total, None);
        assert_eq!(page.cart_total().as_deref(), Some("NaN"));
    }
}
