use bigdecimal::num_bigint::Sign;
use bigdecimal::{BigDecimal, ToPrimitive};

/// Integer part of `value`, rounded toward zero.
///
/// Values that do not fit an `i64` keep the low-order 64 bits of their
/// integer part, two's complement, like a narrowing primitive conversion.
pub fn long_value(value: &BigDecimal) -> i64 {
    match value.to_i64() {
        Some(n) => n,
        None => wrapping_long_value(value)
    }
}

fn wrapping_long_value(value: &BigDecimal) -> i64 {
    let (int_val, _) = value.with_scale(0).into_bigint_and_exponent();
    let (sign, digits) = int_val.to_u64_digits();
    let low = digits.first().cloned().unwrap_or(0) as i64;

    match sign {
        Sign::Minus => low.wrapping_neg(),
        _ => low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(long_value(&dec("1.9")), 1);
        assert_eq!(long_value(&dec("1.0")), 1);
        assert_eq!(long_value(&dec("0.99")), 0);
        assert_eq!(long_value(&dec("-1.9")), -1);
        assert_eq!(long_value(&dec("-0.5")), 0);
    }

    #[test]
    fn keeps_whole_values() {
        assert_eq!(long_value(&BigDecimal::from(99_999i64)), 99_999);
        assert_eq!(long_value(&dec("1E+3")), 1000);
        assert_eq!(long_value(&BigDecimal::from(i64::MIN)), i64::MIN);
    }

    #[test]
    fn wraps_values_outside_i64() {
        // 2^64 + 5
        assert_eq!(long_value(&dec("18446744073709551621")), 5);
        // 2^63
        assert_eq!(long_value(&dec("9223372036854775808")), i64::MIN);
        // -(2^64 + 5)
        assert_eq!(long_value(&dec("-18446744073709551621")), -5);
        assert_eq!(long_value(&dec("18446744073709551621.75")), 5);
    }
}
