//! Line-oriented, validated input for the interactive menus.
//!
//! Invalid entries are reported and re-prompted; only end of input
//! escapes a prompt, as [`Error::InputClosed`].

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::tasks::parse_due_date;
use crate::ui;
use crate::{Error, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Sink for everything the menus print.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line, possibly empty.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    pub fn non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let value = self.line(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            ui::error(&mut self.output, "Error: Input cannot be empty")?;
        }
    }

    /// Integer input with optional inclusive bounds.
    pub fn integer<T>(&mut self, prompt: &str, min: Option<T>, max: Option<T>) -> Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        self.bounded(prompt, min, max, |s| s.parse().ok())
    }

    /// Finite float input with optional inclusive bounds.
    pub fn float(&mut self, prompt: &str, min: Option<f64>, max: Option<f64>) -> Result<f64> {
        self.bounded(prompt, min, max, |s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    /// Empty input means "no value".
    pub fn optional_integer<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let value = self.line(prompt)?;
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => ui::error(&mut self.output, "Error: Please enter a valid number or leave empty")?,
            }
        }
    }

    pub fn date(&mut self, prompt: &str) -> Result<NaiveDate> {
        loop {
            let value = self.line(prompt)?;
            match parse_due_date(&value) {
                Ok(date) => return Ok(date),
                Err(_) => ui::error(&mut self.output, "Error: Please enter date in YYYY-MM-DD format")?,
            }
        }
    }

    fn bounded<T>(
        &mut self,
        prompt: &str,
        min: Option<T>,
        max: Option<T>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T>
    where
        T: PartialOrd + Display + Copy,
    {
        loop {
            let raw = self.line(prompt)?;
            let Some(value) = parse(&raw) else {
                ui::error(&mut self.output, "Error: Please enter a valid number")?;
                continue;
            };
            if let Some(min) = min.filter(|m| value < *m) {
                ui::error(&mut self.output, &format!("Error: Value must be at least {min}"))?;
                continue;
            }
            if let Some(max) = max.filter(|m| value > *m) {
                ui::error(&mut self.output, &format!("Error: Value must be at most {max}"))?;
                continue;
            }
            return Ok(value);
        }
    }
}
