//! Coloured one-line feedback for the terminal.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";

/// Severity of a feedback line; decides the colour and the leading icon.
#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn colour(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn painted(tone: Tone, msg: impl fmt::Display) -> String {
    format!("{}{BOLD}{} {RESET}{msg}", tone.colour(), tone.icon())
}

pub fn info(msg: impl fmt::Display) {
    println!("{}", painted(Tone::Info, msg));
}

pub fn success(msg: impl fmt::Display) {
    println!("{}", painted(Tone::Success, msg));
}

pub fn warning(msg: impl fmt::Display) {
    println!("{}", painted(Tone::Warning, msg));
}

/// Errors go to stderr, everything else to stdout.
pub fn error(msg: impl fmt::Display) {
    eprintln!("{}", painted(Tone::Error, msg));
}

/// Aligned "label: value" detail line, for status views.
pub fn detail(label: &str, value: impl fmt::Display) {
    println!("  {CYAN}{:<14}{RESET} {value}", format!("{label}:"));
}
