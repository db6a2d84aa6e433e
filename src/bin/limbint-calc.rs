use std::io::{self, Write};

use anyhow::{ensure, Result};
use limbint::io::TokenReader;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let mut out = io::stdout().lock();

    writeln!(out, "Enter two large numbers:")?;
    out.flush()?;
    let a = input.read_big_integer()?;
    let b = input.read_big_integer()?;

    writeln!(out, "Sum = {}", &a + &b)?;
    writeln!(out, "Difference = {}", &a - &b)?;
    writeln!(out, "Product = {}", &a * &b)?;

    write!(out, "Enter an integer to divide first number by: ")?;
    out.flush()?;
    let divisor = input.read_i64()?;
    ensure!(divisor != 0, "cannot divide by zero");
    writeln!(out, "Quotient = {}", &a / divisor)?;

    Ok(())
}
