// Copyright 2019-2025 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT
//! This module defines a [short pretty-printer](TokenAmountShort::short) for
//! `TokenAmount`, matching the `FIL.Short()` rendering operators know from lotus.
//!
//! See the `si` module source for supported prefixes.

pub use print::TokenAmountShort;

/// SI prefix definitions
mod si {
    /// Use a struct as a table row instead of an enum
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Prefix {
        /// `"micro"`
        pub name: &'static str,
        /// `"μ"`
        pub symbol: &'static str,
        /// `-6`
        pub exponent: i8,
    }

    /// Smallest first
    macro_rules! define_prefixes {
        ($($name:ident $symbol:literal $base_10:literal),* $(,)?) => {
            $(
                #[allow(non_upper_case_globals)]
                pub const $name: Prefix = Prefix {
                    name: stringify!($name),
                    symbol: $symbol,
                    exponent: $base_10,
                };
            )*

            /// Smallest first
            pub const SHORT_PREFIXES: &[Prefix] = &[$($name,)*];
        };
    }

    define_prefixes! {
        atto    "a"   -18,
        femto   "f"   -15,
        pico    "p"   -12,
        nano    "n"   -9,
        micro   "μ"   -6,
        milli   "m"   -3,
        whole   ""    0,
    }

    #[test]
    fn sorted() {
        assert!(
            SHORT_PREFIXES
                .windows(2)
                .all(|pair| pair[1].exponent - pair[0].exponent == 3)
        );
    }
}

mod print {
    use std::fmt;

    use bigdecimal::{BigDecimal, RoundingMode};
    use num::{BigInt, Signed as _, Zero as _};

    use super::si;
    use crate::shim::econ::TokenAmount;

    /// Decimal places kept in the short form.
    const SHORT_SCALE: i64 = 3;

    /// The first prefix under which the magnitude of `attos` is below 1000 units.
    /// Amounts of 1000 FIL or more are printed in whole FIL.
    fn prefix_for(attos: &BigInt) -> si::Prefix {
        let magnitude = attos.abs();
        let mut unit = BigInt::from(1);
        for prefix in si::SHORT_PREFIXES {
            if magnitude < &unit * 1000 {
                return *prefix;
            }
            unit *= 1000;
        }
        si::whole
    }

    pub struct Short {
        attos: BigInt,
    }

    impl From<&TokenAmount> for Short {
        fn from(value: &TokenAmount) -> Self {
            Self {
                attos: value.atto().clone(),
            }
        }
    }

    pub trait TokenAmountShort {
        fn short(&self) -> Short;
    }

    impl TokenAmountShort for TokenAmount {
        /// ```text
        /// 0           -> 0
        /// 1500        -> 1.5 fFIL
        /// 10^18       -> 1 FIL
        /// 12345 * 10^18 -> 12345 FIL
        /// ```
        ///
        /// # Formatting
        /// - The prefix is the smallest one that keeps the magnitude under 1000.
        /// - Three decimal places, rounded half away from zero, trailing zeros trimmed.
        fn short(&self) -> Short {
            Short::from(self)
        }
    }

    impl fmt::Display for Short {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if self.attos.is_zero() {
                return f.write_str("0");
            }
            let prefix = prefix_for(&self.attos);
            let scaled = BigDecimal::new(self.attos.clone(), i64::from(prefix.exponent) + 18)
                .with_scale_round(SHORT_SCALE, RoundingMode::HalfUp)
                .to_string();
            let trimmed = if scaled.contains('.') {
                scaled.trim_end_matches('0').trim_end_matches('.')
            } else {
                scaled.as_str()
            };
            write!(f, "{trimmed} {}FIL", prefix.symbol)
        }
    }

    #[cfg(test)]
    mod tests {
        use std::str::FromStr as _;

        use pretty_assertions::assert_eq;

        use super::*;

        fn attos(input: &str) -> TokenAmount {
            TokenAmount::from_atto(BigInt::from_str(input).unwrap())
        }

        #[track_caller]
        fn test_short(input: &str, expected: &str) {
            assert_eq!(attos(input).short().to_string(), expected);
        }

        #[test]
        fn zero() {
            test_short("0", "0");
        }

        #[test]
        fn prefixes() {
            test_short("1", "1 aFIL");
            test_short("999", "999 aFIL");
            test_short("1000", "1 fFIL");
            test_short("1500", "1.5 fFIL");
            test_short("2000000", "2 pFIL");
            test_short("3000000000", "3 nFIL");
            test_short("4000000000000", "4 μFIL");
            test_short("5000000000000000", "5 mFIL");
            test_short("1000000000000000000", "1 FIL");
        }

        #[test]
        fn whole_fil_is_not_scaled_up() {
            test_short("1000000000000000000000", "1000 FIL");
            test_short("12345678000000000000000000", "12345678 FIL");
        }

        #[test]
        fn three_decimals() {
            test_short("1234567", "1.235 pFIL");
            test_short("1234499", "1.234 pFIL");
            test_short("1230000", "1.23 pFIL");
            test_short("1200000000000000000", "1.2 FIL");
        }

        #[test]
        fn negative() {
            test_short("-1500", "-1.5 fFIL");
            test_short("-25000000000000000000", "-25 FIL");
            test_short("-1234567", "-1.235 pFIL");
        }

        #[test]
        fn rounds_up_into_the_next_unit() {
            test_short("999999500", "1000 pFIL");
        }
    }
}
