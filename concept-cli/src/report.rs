use colored::Colorize;
use std::io::{self, Write};

use crate::error::ScaffoldError;

/// Human-readable status output.
///
/// Progress and instructions go to `out`, diagnostics to `err`. Write errors
/// on the terminal are ignored; there is nowhere left to report them.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Reporter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Reporter<Vec<u8>, Vec<u8>> {
    /// Reporter that keeps everything in memory.
    pub fn buffered() -> Self {
        Reporter {
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// `✓ <message>`
    pub fn done(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.out, "{} {}", "✓".green(), message.as_ref());
    }

    /// Blank line, the closing banner, then a numbered list of next steps.
    pub fn finish(&mut self, banner: &str, notes: &[String], steps: &[String]) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "✅ {}", banner.green().bold());
        let _ = writeln!(self.out);
        for note in notes {
            let _ = writeln!(self.out, "{note}");
            let _ = writeln!(self.out);
        }
        let _ = writeln!(self.out, "Next steps:");
        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(self.out, "  {}. {}", i + 1, step);
        }
        let _ = writeln!(self.out);
    }

    /// `✗ <error>`, followed by the error's hint when it has one.
    pub fn failure(&mut self, error: &ScaffoldError) {
        let _ = writeln!(self.err, "{} {}", "✗".red(), error);
        if let Some(hint) = error.hint() {
            let _ = writeln!(self.err, "  {hint}");
        }
    }
}
