use std::fmt;

use serde::{Deserialize, Serialize};

/// An amount of money in whole Kenyan shillings.
///
/// Every rate in the catalog is a round shilling figure, so amounts are
/// stored as plain integers with no fractional scaling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const fn new(value: i64) -> Self {
        Amount(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// The deposit required against this total: 50%, rounded up to the
    /// next multiple of 50.
    ///
    /// The rounding direction is contractual. A deposit may never fall
    /// below half of the invoice, so `ceil((total * 0.5) / 50) * 50`.
    pub fn deposit(self) -> Amount {
        // Equivalent to `self.0.div_ceil(100)`, which is unstable for signed
        // integers; with a positive divisor, round up iff there is a
        // positive remainder.
        let q = self.0 / 100;
        let half_units = if self.0 % 100 > 0 { q + 1 } else { q };
        Amount(half_units * 50)
    }
}

impl fmt::Display for Amount {
    /// Formats as `KSh 3,600`, grouping thousands.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "KSh {sign}{grouped}")
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Mul<i64> for Amount {
    type Output = Self;

    /// A nightly rate times a number of nights.
    fn mul(self, rhs: i64) -> Self::Output {
        Amount(self.0 * rhs)
    }
}
