use anyhow::{anyhow, Context, Result};
use std::collections::VecDeque;
use std::io::BufRead;

use crate::circle::{Circle, TestCase};

const FIELDS: [&str; 6] = ["x1", "y1", "r1", "x2", "y2", "r2"];

/// Whitespace separated tokens, read one line at a time
pub struct Tokens<R> {
    reader: R,
    buffer: String,
    line_number: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
            pending: VecDeque::new(),
        }
    }

    /// Line of the most recently returned token
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            self.buffer.clear();
            let read = self
                .reader
                .read_line(&mut self.buffer)
                .with_context(|| format!("failed to read line {}", self.line_number + 1))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.pending
                .extend(self.buffer.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }

    pub fn next_int(&mut self, what: &str) -> Result<i32> {
        let token = self.next_token()?.ok_or_else(|| {
            anyhow!(
                "line {}: unexpected end of input while reading {what}",
                self.line_number.max(1)
            )
        })?;
        token.parse::<i32>().with_context(|| {
            format!(
                "line {}: expected an integer for {what}, found {token:?}",
                self.line_number
            )
        })
    }

    /// Everything left in the input, for diagnostics
    pub fn drain(&mut self) -> Result<Vec<String>> {
        let mut rest = Vec::new();
        while let Some(token) = self.next_token()? {
            rest.push(token);
        }
        Ok(rest)
    }
}

/// Reads the case count, then yields one [`TestCase`] per group of six integers.
pub struct CaseReader<R> {
    tokens: Tokens<R>,
    declared: usize,
    read: usize,
    failed: bool,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(reader: R) -> Result<Self> {
        let mut tokens = Tokens::new(reader);
        let count = tokens.next_int("the case count")?;
        if count < 0 {
            log::warn!(
                "line {}: negative case count {count}, reading no cases",
                tokens.line_number()
            );
        }
        let declared = usize::try_from(count).unwrap_or_default();
        log::debug!("expecting {declared} case(s)");
        Ok(Self {
            tokens,
            declared,
            read: 0,
            failed: false,
        })
    }

    pub fn declared(&self) -> usize {
        self.declared
    }

    fn read_case(&mut self) -> Result<TestCase> {
        let ordinal = self.read + 1;
        let mut values = [0i32; 6];
        for (value, field) in values.iter_mut().zip(FIELDS) {
            *value = self
                .tokens
                .next_int(&format!("{field} of case {ordinal}"))?;
        }
        let [x1, y1, r1, x2, y2, r2] = values;
        Ok(TestCase::new(
            ordinal,
            Circle::new(x1, y1, r1),
            Circle::new(x2, y2, r2),
        ))
    }

    /// Consumes the reader once every declared case has been read, warning
    /// about anything left over.
    pub fn finish(mut self) -> Result<()> {
        let rest = self.tokens.drain()?;
        if !rest.is_empty() {
            log::warn!(
                "ignoring {} token(s) after the last case, starting with {:?}",
                rest.len(),
                rest[0]
            );
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<TestCase>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.read >= self.declared {
            return None;
        }
        let case = self.read_case();
        match &case {
            Ok(_) => self.read += 1,
            Err(_) => self.failed = true,
        }
        Some(case)
    }
}
