use std::collections::VecDeque;
use std::io::Write;

use colored::Colorize;

use crate::fraction::Fraction;
use crate::op::Op;

mod fraction;
mod op;

fn main() {
  env_logger::init();
  if let Err(err) = repl() {
    println!("{err}");
    std::process::exit(1);
  }
}

fn repl() -> Result<(), Box<dyn std::error::Error>> {
  println!("Welcome to the frac-calc calculator!");
  println!("Enter each fraction as two integers: numerator, then denominator.");
  println!("Supported operations: + - * /\n");
  let mut input = TokenReader::new();
  loop {
    println!("Type in two fractions:");
    let a = read_fraction(&mut input)?;
    print_both(&a);
    let b = read_fraction(&mut input)?;
    print_both(&b);

    print!("Operation to perform (+-*/): ");
    std::io::stdout().flush()?;
    let result = match Op::from_char(input.next_char()?) {
      Some(op) => {
        let result = op.apply(a, b)?;
        log::debug!("{a} {op} {b} = {result}");
        result
      }
      None => {
        println!("Unknown operation!");
        Fraction::default()
      }
    };
    print_both(&result);
    println!("\n---");
  }
}

fn read_fraction(input: &mut TokenReader) -> Result<Fraction, Box<dyn std::error::Error>> {
  let numerator = input.next_int()?;
  let denominator = input.next_int()?;
  Ok(Fraction::new(numerator, denominator)?)
}

fn print_both(fraction: &Fraction) {
  let shown = format!("{} == {}", fraction, fraction.to_mixed()).bold();
  println!("{shown}");
}

// Whitespace-separated tokens from stdin, refilled a line at a time, so
// the two integers of a fraction may share a line or arrive one per line.
struct TokenReader {
  pending: VecDeque<String>,
}

impl TokenReader {
  fn new() -> Self {
    Self {
      pending: VecDeque::new(),
    }
  }

  fn next_token(&mut self) -> Result<String, Box<dyn std::error::Error>> {
    loop {
      if let Some(token) = self.pending.pop_front() {
        return Ok(token);
      }
      let mut line = String::new();
      let read = std::io::stdin().read_line(&mut line)?;
      if read == 0 {
        return Err("Input exhausted".into());
      }
      self
        .pending
        .extend(line.split_whitespace().map(str::to_owned));
    }
  }

  fn next_int(&mut self) -> Result<i64, Box<dyn std::error::Error>> {
    Ok(self.next_token()?.parse()?)
  }

  fn next_char(&mut self) -> Result<char, Box<dyn std::error::Error>> {
    let token = self.next_token()?;
    let first = token.chars().next().expect("tokens are never empty");
    Ok(first)
  }
}
