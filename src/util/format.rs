/// Number of digits printed after the decimal point unless configured
/// otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// Renders `value` with exactly `precision` digits after the decimal point.
///
/// Rounding follows `std::fmt`. Non-finite values are spelled `+Inf`, `-Inf`
/// and `NaN` whatever the precision.
///
/// ## Parameters
/// - `value`: The scalar to render.
/// - `precision`: Digits after the decimal point.
///
/// ## Example
/// ```
/// use calcium::util::format::format_value;
///
/// assert_eq!(format_value(7.0, 2), "7.00");
/// assert_eq!(format_value(2.0 / 3.0, 2), "0.67");
/// assert_eq!(format_value(-1.5, 0), "-2");
/// assert_eq!(format_value(f64::INFINITY, 2), "+Inf");
/// assert_eq!(format_value(f64::NEG_INFINITY, 0), "-Inf");
/// assert_eq!(format_value(f64::NAN, 2), "NaN");
/// ```
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value:.precision$}")
    }
}
