//! Whitespace-delimited token input.

use std::collections::VecDeque;
use std::io::BufRead;

use anyhow::{anyhow, Context, Result};

use crate::big_integer::BigInteger;

/// Splits a buffered text stream into whitespace-delimited tokens, reading
/// one line at a time as tokens are requested.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            let n = self
                .reader
                .read_line(&mut line)
                .context("failed to read input")?;
            if n == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn expect_token(&mut self, what: &str) -> Result<String> {
        self.next_token()?
            .ok_or_else(|| anyhow!("unexpected end of input, expected {}", what))
    }

    /// Reads the next token as a decimal [`BigInteger`].
    pub fn read_big_integer(&mut self) -> Result<BigInteger> {
        let token = self.expect_token("an integer")?;
        token.parse()
    }

    /// Reads the next token as a machine integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        let token = self.expect_token("a machine integer")?;
        token
            .parse()
            .with_context(|| format!("invalid machine integer {:?}", token))
    }
}
