// SPDX-License-Identifier: MIT
//! Terminal rendering for syntax errors.
//!
//! Produces a color-coded caret diagnostic:
//!
//! ```text
//! error: Expected ';' after statement, found end of file
//!   --> main.vsl:1:13
//!    |
//!  1 | number x = 1
//!    |             ^
//!    = help: end statements with ';'
//! ```

use colored::Colorize;

use vessel_ast::LineMap;
use vessel_parser::SyntaxError;

/// Formats syntax errors against their source for terminal output.
pub struct ErrorFormatter<'a> {
    source: &'a str,
    file_name: Option<&'a str>,
    line_map: LineMap,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_map = LineMap::new(source);
        Self { source, file_name: None, line_map }
    }

    pub fn with_file_name(mut self, name: &'a str) -> Self {
        self.file_name = Some(name);
        self
    }

    pub fn format(&self, error: &SyntaxError) -> String {
        let mut out = String::new();
        let span = error.span();
        let (line, col) = self.line_map.offset_to_line_col(span.start);

        // Line 1: error: message
        out.push_str(&format!("{}: {}\n", "error".red().bold(), error.message().bold()));

        // Line 2: --> file:line:col
        let file = self.file_name.unwrap_or("<source>");
        out.push_str(&format!("  {} {}:{}:{}\n", "-->".blue(), file, line, col));

        if let Some(text) = self.line_map.line_text(self.source, line) {
            let gutter_width = line.to_string().len().max(2);

            // Empty pipe line, then NN | code, then the caret line.
            out.push_str(&format!("{} {}\n", " ".repeat(gutter_width + 1), "|".blue()));
            out.push_str(&format!(
                "{:>width$} {} {}\n",
                line.to_string().blue().bold(),
                "|".blue(),
                text,
                width = gutter_width + 1,
            ));

            let col = col as usize;
            let line_rest = text.len().saturating_sub(col - 1);
            let carets = span.len().clamp(1, line_rest.max(1));
            out.push_str(&format!(
                "{} {} {}{}\n",
                " ".repeat(gutter_width + 1),
                "|".blue(),
                " ".repeat(col - 1),
                "^".repeat(carets).red().bold(),
            ));
        }

        if let Some(hint) = error.hint() {
            out.push_str(&format!("   {} {}: {}\n", "=".blue(), "help".bold(), hint));
        }

        out
    }
}
