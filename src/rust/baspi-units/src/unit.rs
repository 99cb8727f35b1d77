// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

pub(crate) fn round_to_significant_digits(x: f64, n: u32) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        let order = x.abs().log10().floor();
        let scale = 10f64.powf((n as f64) - 1.0 - order);
        (x * scale).round() / scale
    }
}

/// Digits kept when rescaling by an SI prefix, enough to hide representation error.
const SI_SIGNIFICANT_DIGITS: u32 = 12;

const SI_PREFIXES: [(f64, &str); 7] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
];

/// Split `value` into a mantissa and the largest SI prefix that keeps the mantissa >= 1.
///
/// # Examples
/// ```rust
/// use baspi_units::unit::si_prefixed;
///
/// assert_eq!(si_prefixed(30e3), (30.0, "k"));
/// assert_eq!(si_prefixed(300.0), (300.0, ""));
/// ```
pub fn si_prefixed(value: f64) -> (f64, &'static str) {
    let magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return (value, "");
    }
    let &(scale, prefix) = SI_PREFIXES
        .iter()
        .find(|(scale, _)| magnitude >= *scale)
        .unwrap_or(&SI_PREFIXES[SI_PREFIXES.len() - 1]);
    (
        round_to_significant_digits(value / scale, SI_SIGNIFICANT_DIGITS),
        prefix,
    )
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse '{input}' as a value in {unit}")]
pub struct ParseQuantityError {
    input: String,
    unit: &'static str,
}

fn strip_unit<'a>(input: &'a str, unit: &str) -> &'a str {
    let split = input.len().saturating_sub(unit.len());
    if input.len() >= unit.len()
        && input.is_char_boundary(split)
        && input[split..].eq_ignore_ascii_case(unit)
    {
        &input[..split]
    } else {
        input
    }
}

/// Parse a number with an optional SI prefix and an optional trailing unit.
///
/// Accepts plain and scientific notation (`"300"`, `"1e6"`, `"1E6"`) as well as
/// prefixed forms (`"100k"`, `"30 kHz"`, `"1M"`). Upper-case `K` is accepted as kilo.
/// The unit suffix is matched case-insensitively.
pub fn parse_si_prefixed(input: &str, unit: &'static str) -> Result<f64, ParseQuantityError> {
    let error = || ParseQuantityError {
        input: input.to_string(),
        unit,
    };
    let number = strip_unit(input.trim(), unit).trim_end();
    let value = match number.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            let mut chars = number.chars();
            let scale = match chars.next_back() {
                Some('G') => 1e9,
                Some('M') => 1e6,
                Some('k' | 'K') => 1e3,
                Some('m') => 1e-3,
                Some('u' | 'µ') => 1e-6,
                Some('n') => 1e-9,
                _ => return Err(error()),
            };
            let mantissa = chars
                .as_str()
                .trim_end()
                .parse::<f64>()
                .map_err(|_| error())?;
            round_to_significant_digits(mantissa * scale, SI_SIGNIFICANT_DIGITS)
        }
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(error())
    }
}

#[macro_export]
macro_rules! quantity {
    ($ident:ident) => {
        /// A quantity represented with unit type.
        ///
        /// # Type Parameter
        /// - `U`: The unit of the value. Typically, it is a zero-sized type.
        /// - `T`: The underlying value (typically a floating point number)
        #[derive(std::clone::Clone, std::marker::Copy, std::default::Default, core::fmt::Debug)]
        pub struct $ident<U, T = f64> {
            pub(crate) value: T,
            pub(crate) unit: U,
        }

        impl<U, T> $ident<U, T> {
            pub fn value(self) -> T {
                self.value
            }
        }

        impl<U, T: std::cmp::PartialEq> std::cmp::PartialEq for $ident<U, T> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<U, T: std::cmp::PartialOrd> std::cmp::PartialOrd for $ident<U, T> {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.value.partial_cmp(&other.value)
            }
        }

        impl<U, T> std::ops::Mul<T> for $ident<U, T>
        where
            T: std::ops::Mul<T, Output = T> + std::marker::Copy,
            U: std::marker::Copy,
        {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                $ident {
                    value: self.value * rhs,
                    unit: self.unit,
                }
            }
        }

        impl<U, T> std::ops::Div<T> for $ident<U, T>
        where
            T: std::ops::Div<T, Output = T> + std::marker::Copy,
            U: std::marker::Copy,
        {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                $ident {
                    value: self.value / rhs,
                    unit: self.unit,
                }
            }
        }

        impl<T, U> From<T> for $ident<U, T>
        where
            T: num_traits::Num,
            U: std::default::Default,
        {
            fn from(value: T) -> Self {
                $ident {
                    value,
                    unit: U::default(),
                }
            }
        }

        impl<U> From<$ident<U, f64>> for f64 {
            fn from(value: $ident<U, f64>) -> Self {
                value.value
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_si_prefixed() {
        assert_eq!(si_prefixed(1e6), (1.0, "M"));
        assert_eq!(si_prefixed(100e3), (100.0, "k"));
        assert_eq!(si_prefixed(3e3), (3.0, "k"));
        assert_eq!(si_prefixed(30.0), (30.0, ""));
        assert_eq!(si_prefixed(0.0), (0.0, ""));
        assert_eq!(si_prefixed(2.5e-3), (2.5, "m"));
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_si_prefixed("300", "Hz"), Ok(300.0));
        assert_eq!(parse_si_prefixed("1e6", "Hz"), Ok(1e6));
        assert_eq!(parse_si_prefixed("1E9", ""), Ok(1e9));
        assert_eq!(parse_si_prefixed(" 30Hz ", "Hz"), Ok(30.0));
    }

    #[test]
    fn test_parse_prefixed() {
        assert_eq!(parse_si_prefixed("100k", "Hz"), Ok(100e3));
        assert_eq!(parse_si_prefixed("100K", "Hz"), Ok(100e3));
        assert_eq!(parse_si_prefixed("30 kHz", "Hz"), Ok(30e3));
        assert_eq!(parse_si_prefixed("1M", "Hz"), Ok(1e6));
        assert_eq!(parse_si_prefixed("1 MHZ", "Hz"), Ok(1e6));
        assert_eq!(parse_si_prefixed("0.3k", "Hz"), Ok(300.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_si_prefixed("", "Hz").is_err());
        assert!(parse_si_prefixed("k", "Hz").is_err());
        assert!(parse_si_prefixed("12x", "Hz").is_err());
        assert!(parse_si_prefixed("inf", "Hz").is_err());
        let err = parse_si_prefixed("fast", "Hz").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse 'fast' as a value in Hz");
    }
}
