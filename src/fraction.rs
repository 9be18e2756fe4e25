use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A rational number stored as numerator/denominator in lowest terms.
/// The denominator is always positive; the sign lives on the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
  ZeroDenominator,
}

impl fmt::Display for FractionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FractionError::ZeroDenominator => write!(f, "Denominator cannot be zero"),
    }
  }
}

impl std::error::Error for FractionError {}

impl Fraction {
  /// Build a reduced fraction, rejecting a zero denominator.
  pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
    if denominator == 0 {
      return Err(FractionError::ZeroDenominator);
    }
    Ok(Self::normalized(numerator, denominator))
  }

  // Callers guarantee denominator != 0.
  fn normalized(mut numerator: i64, mut denominator: i64) -> Self {
    debug_assert!(denominator != 0);
    if denominator < 0 {
      numerator = -numerator;
      denominator = -denominator;
    }
    // gcd(0, d) = d, so 0/d collapses to 0/1 here.
    let c = gcd(numerator.abs(), denominator);
    Self {
      numerator: numerator / c,
      denominator: denominator / c,
    }
  }

  pub fn numerator(&self) -> i64 {
    self.numerator
  }

  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  /// Mixed-number form: `"3 1/2"` for 7/2, `"0"` for zero, `to_string()`
  /// for proper fractions. The integer part carries the sign; the
  /// fractional part always prints its absolute value, so -7/2 renders
  /// as `"-3 1/2"`.
  pub fn to_mixed(&self) -> String {
    if self.numerator.abs() >= self.denominator {
      let whole = self.numerator / self.denominator;
      let rest = self.numerator % self.denominator;
      if rest == 0 {
        format!("{whole}")
      } else {
        format!("{whole} {}/{}", rest.abs(), self.denominator)
      }
    } else if self.numerator == 0 {
      "0".to_string()
    } else {
      self.to_string()
    }
  }

  /// Division by a fraction with a zero numerator is division by zero.
  pub fn checked_div(self, rhs: Self) -> Result<Self, FractionError> {
    Fraction::new(
      self.numerator * rhs.denominator,
      self.denominator * rhs.numerator,
    )
  }

  // Shared alignment step for + and -: bring both operands onto
  // lcm(ad, bd), then sum the scaled numerators.
  fn add_by_value(self, bn: i64, bd: i64) -> Self {
    let nd = lcm(self.denominator, bd);
    let ax = nd / self.denominator;
    let bx = nd / bd;
    Self::normalized(self.numerator * ax + bn * bx, nd)
  }
}

impl Default for Fraction {
  fn default() -> Self {
    Self {
      numerator: 0,
      denominator: 1,
    }
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}

impl Add for Fraction {
  type Output = Fraction;

  fn add(self, rhs: Self) -> Self::Output {
    self.add_by_value(rhs.numerator, rhs.denominator)
  }
}

impl Sub for Fraction {
  type Output = Fraction;

  fn sub(self, rhs: Self) -> Self::Output {
    self.add_by_value(-rhs.numerator, rhs.denominator)
  }
}

impl Mul for Fraction {
  type Output = Fraction;

  fn mul(self, rhs: Self) -> Self::Output {
    Self::normalized(
      self.numerator * rhs.numerator,
      self.denominator * rhs.denominator,
    )
  }
}

/// Euclidean algorithm over non-negative inputs; gcd(0, b) = b.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
  while b != 0 {
    let r = a % b;
    a = b;
    b = r;
  }
  a
}

/// Least common multiple. Not defined when both arguments are zero;
/// every call site passes at least one nonzero denominator.
pub fn lcm(a: i64, b: i64) -> i64 {
  (a * b).abs() / gcd(a.abs(), b.abs())
}
