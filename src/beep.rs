use std::io::{self, Write};

use anyhow::{Context, Result};

/// Audible cue for alarms and reminders. Implementations must not block.
pub trait Beeper {
    fn beep(&self) -> Result<()>;
}

/// Rings the terminal bell on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Beeper for TerminalBell {
    fn beep(&self) -> Result<()> {
        let mut stderr = io::stderr().lock();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .context("failed to ring terminal bell")
    }
}
