//! Product-prefixed console output

use crate::product::ProductConfig;
use colored::Colorize;
use std::fmt::Display;

/// Prints `<Product> ::` prefixed status lines
#[derive(Debug, Clone)]
pub struct Logger {
    prefix: String,
}

impl Logger {
    pub fn new(display_name: &str) -> Self {
        Self {
            prefix: format!("{} ::", display_name),
        }
    }

    pub fn for_product<C: ProductConfig>(config: &C) -> Self {
        Self::new(config.display_name())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Warnings go to stderr so they survive piping stdout
    pub fn warn(&self, message: impl Display) {
        eprintln!(
            "{} {}",
            self.prefix.magenta().bold(),
            message.to_string().red().bold()
        );
    }

    pub fn info(&self, message: impl Display) {
        println!(
            "{} {}",
            self.prefix.magenta().bold(),
            message.to_string().blue()
        );
    }

    pub fn success(&self, message: impl Display) {
        println!(
            "{} {}",
            self.prefix.magenta().bold(),
            message.to_string().green().bold()
        );
    }
}
