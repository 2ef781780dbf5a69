use anyhow::Result;
use std::io::{self, Write};

use crate::workflow::Prompter;

/// Reads prompted values from stdin. EOF or an empty line counts as cancelled.
pub(crate) struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, prompt: &str, placeholder: &str) -> Result<Option<String>> {
        print!("{prompt} (e.g. {placeholder}): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            return Ok(None);
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}

pub(crate) fn display_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
