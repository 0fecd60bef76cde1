//! Asking the user things
//!
//! The assistant only needs three question shapes: free text with a
//! default, a Y/n confirmation and a pick from a fixed list.

use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Free-text answer; empty input takes `default`
    fn ask(&self, prompt: &str, default: &str) -> Result<String>;

    /// Y/n question, defaults to yes
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Index into `options`; empty input takes `default`
    fn select(&self, prompt: &str, options: &[&str], default: usize) -> Result<usize>;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn ask(&self, prompt: &str, default: &str) -> Result<String> {
        (**self).ask(prompt, default)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        (**self).confirm(prompt)
    }

    fn select(&self, prompt: &str, options: &[&str], default: usize) -> Result<usize> {
        (**self).select(prompt, options, default)
    }
}

/// Interactive prompts on stdin/stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(&self) -> Result<String> {
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            bail!("stdin closed while waiting for an answer");
        }
        Ok(input.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str, default: &str) -> Result<String> {
        print!("{prompt}");
        let answer = self.read_line()?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{prompt} [Y/n]: ");
        Ok(parse_confirmation(&self.read_line()?))
    }

    fn select(&self, prompt: &str, options: &[&str], default: usize) -> Result<usize> {
        loop {
            println!("{prompt}");
            for (i, option) in options.iter().enumerate() {
                println!("  [{i}] {option}");
            }
            let default_label = options.get(default).copied().unwrap_or_default();
            print!("> [{default_label}] ");

            match parse_selection(&self.read_line()?, options, default) {
                Some(index) => return Ok(index),
                None => println!("Value is not a valid option"),
            }
        }
    }
}

/// Answers every question with its default. Used for `--yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&self, prompt: &str, default: &str) -> Result<String> {
        println!("{prompt}{default}");
        Ok(default.to_string())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        println!("{prompt} [Y/n]: y");
        Ok(true)
    }

    fn select(&self, prompt: &str, options: &[&str], default: usize) -> Result<usize> {
        println!(
            "{prompt} {}",
            options.get(default).copied().unwrap_or_default()
        );
        Ok(default)
    }
}

fn parse_confirmation(input: &str) -> bool {
    let answer = input.trim().to_lowercase();
    answer.is_empty() || answer == "y" || answer == "yes"
}

/// Accepts an index or an option label (case-insensitive)
fn parse_selection(input: &str, options: &[&str], default: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return (default < options.len()).then_some(default);
    }
    if let Ok(index) = input.parse::<usize>() {
        return (index < options.len()).then_some(index);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(input))
}
