use primitive_types::U256;

use crate::error::AmountError;

/// Decimal places of the chain's native unit.
pub const NATIVE_DECIMALS: u32 = 18;

fn wei_per_token() -> U256 {
    U256::from(10u64).pow(U256::from(NATIVE_DECIMALS))
}

/// Parse a non-negative decimal string (e.g. `"2.05"`) into wei.
///
/// Accepts at most 18 fractional digits. A lone integer part (`"2"`) and a
/// bare fraction (`".5"`) are both valid; signs, exponents, and grouping
/// separators are not.
pub fn parse_native(s: &str) -> Result<U256, AmountError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::Empty);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::InvalidCharacter);
    }
    if frac_part.len() > NATIVE_DECIMALS as usize {
        return Err(AmountError::TooManyDecimals(frac_part.len()));
    }

    let int_value = if int_part.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(int_part).map_err(|_| AmountError::Overflow)?
    };
    let frac_scale = U256::from(10u64).pow(U256::from(NATIVE_DECIMALS as usize - frac_part.len()));
    let frac_value = if frac_part.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(frac_part).map_err(|_| AmountError::Overflow)?
    };

    int_value
        .checked_mul(wei_per_token())
        .and_then(|scaled| scaled.checked_add(frac_value * frac_scale))
        .ok_or(AmountError::Overflow)
}

/// Render wei as a trimmed decimal string (`"2.05"`, `"3"`).
pub fn format_native(wei: U256) -> String {
    let base = wei_per_token();
    let int = wei / base;
    let frac = wei % base;
    if frac.is_zero() {
        return int.to_string();
    }
    let mut digits = format!("{:0>18}", frac.to_string());
    while digits.ends_with('0') {
        digits.pop();
    }
    format!("{int}.{digits}")
}
