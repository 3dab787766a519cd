use rust_decimal::Decimal;

/// Round to the nearest integer, with exact halves going toward positive infinity
///
/// `2.5 -> 3`, `2.4 -> 2`, `-0.5 -> 0`, `-2.5 -> -2`. Never rounds half to even.
/// The result always has scale zero and is never negative zero.
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor().normalize()
}

/// Render a total as an integer literal when it has no fractional part
///
/// `150.00 -> 150`, `150.50 -> 150.5`
pub fn collapse_total(total: Decimal) -> Decimal {
    total.normalize()
}
