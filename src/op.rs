use crate::fraction::{Fraction, FractionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Op {
  pub fn from_char(c: char) -> Option<Op> {
    match c {
      '+' => Some(Op::Add),
      '-' => Some(Op::Subtract),
      '*' => Some(Op::Multiply),
      '/' => Some(Op::Divide),
      _ => None,
    }
  }

  pub fn apply(self, a: Fraction, b: Fraction) -> Result<Fraction, FractionError> {
    Ok(match self {
      Op::Add => a + b,
      Op::Subtract => a - b,
      Op::Multiply => a * b,
      Op::Divide => a.checked_div(b)?,
    })
  }
}

impl std::fmt::Display for Op {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Op::Add => write!(f, "+"),
      Op::Subtract => write!(f, "-"),
      Op::Multiply => write!(f, "*"),
      Op::Divide => write!(f, "/"),
    }
  }
}
