use num_bigint::BigUint;
use std::str::FromStr;

pub const WEI_DECIMALS: u32 = 18;
pub const DISPLAY_FRACTION_DIGITS: usize = 5;

/// Formats an integer amount of smallest units as a decimal with exactly
/// `fraction_digits` digits after the point. The fraction is floored.
///
/// Anything that is not a plain run of ASCII digits formats as zero.
pub fn to_fixed_fraction(raw: &str, unit_exponent: u32, fraction_digits: usize) -> String {
    let value = if is_digits(raw) {
        BigUint::from_str(raw).ok()
    } else {
        None
    };
    let Some(value) = value else {
        let zero = BigUint::default();
        return format_parts(&zero, &zero, fraction_digits);
    };

    let base = BigUint::from(10u32).pow(unit_exponent);
    let whole = &value / &base;
    let remainder = &value % &base;
    let scale = BigUint::from(10u32).pow(fraction_digits as u32);
    let scaled_fraction = (remainder * scale) / &base;

    format_parts(&whole, &scaled_fraction, fraction_digits)
}

/// Wei to ether with five fractional digits.
pub fn format_ether(raw: &str) -> String {
    to_fixed_fraction(raw, WEI_DECIMALS, DISPLAY_FRACTION_DIGITS)
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

fn format_parts(whole: &BigUint, fraction: &BigUint, fraction_digits: usize) -> String {
    if fraction_digits == 0 {
        return whole.to_string();
    }
    format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = fraction_digits
    )
}
