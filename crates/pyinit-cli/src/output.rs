//! Everything the commands print to stdout goes through [`OutputManager`].
//!
//! Status lines are dropped under `--quiet` and under `--output-format json`,
//! where stdout carries exactly one JSON document. Errors are printed by
//! `main` on stderr and never pass through here.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
};

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    stdout: Term,
}

/// Leading symbol and colour of a status line.
#[derive(Clone, Copy)]
enum Status {
    Success,
    Info,
    Warning,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Info => "\u{2139}",
            Self::Warning => "\u{26a0}",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Info => Style::new().blue(),
            Self::Warning => Style::new().yellow(),
        }
    }
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            stdout: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.stdout.write_line(msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        if self.color {
            self.stdout.write_line(&text.cyan().bold().to_string())
        } else {
            self.stdout.write_line(text)
        }
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    /// Pretty-printed JSON. Only `--quiet` suppresses it.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let doc = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.stdout.write_line(&doc)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    fn silent(&self) -> bool {
        self.quiet || self.is_json()
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.stdout.write_line(&self.decorate(status, msg))
    }

    fn decorate(&self, status: Status, msg: &str) -> String {
        if self.color {
            let style = status.style();
            format!("{} {}", status.symbol().style(style.bold()), msg.style(style))
        } else {
            format!("{} {msg}", status.symbol())
        }
    }
}
