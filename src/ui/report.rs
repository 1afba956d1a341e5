//! Dependency report output.
//!
//! Status lines go to one writer (stdout) and install hints to another
//! (stderr), so the two can be redirected independently.

use std::io::{self, Write};

use crate::requirements::{CheckResult, RequirementKind, RequirementStatus};

use super::theme::DotTheme;

/// Writes one line per check result, plus hints for missing requirements.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    theme: DotTheme,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Report to the process stdout and stderr.
    pub fn stdio(theme: DotTheme) -> Self {
        Self::new(io::stdout(), io::stderr(), theme)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, theme: DotTheme) -> Self {
        Self { out, err, theme }
    }

    /// Report a single result.
    pub fn report(&mut self, result: &CheckResult) -> io::Result<()> {
        match &result.status {
            RequirementStatus::Satisfied { .. } => {
                writeln!(self.out, "{}", self.theme.format_ok(&result.label))
            }
            RequirementStatus::Missing { hint } => {
                let reason = match result.kind {
                    RequirementKind::Command => "not in `PATH`",
                    RequirementKind::Font => "not found",
                };
                writeln!(
                    self.out,
                    "{}",
                    self.theme.format_missing(&result.label, reason)
                )?;
                if let Some(hint) = hint {
                    let msg = format!(
                        "{} can be installed with `{}`",
                        result.label,
                        hint.command()
                    );
                    writeln!(self.err, "{}", self.theme.format_hint(&msg))?;
                }
                Ok(())
            }
            RequirementStatus::Skipped { blocked_by } => {
                let reason = format!("skipped (`{}` not in `PATH`)", blocked_by);
                writeln!(
                    self.out,
                    "{}",
                    self.theme.format_skipped(&result.label, &reason)
                )
            }
        }
    }

    /// Report every result in order.
    pub fn report_all(&mut self, results: &[CheckResult]) -> io::Result<()> {
        for result in results {
            self.report(result)?;
        }
        self.out.flush()?;
        self.err.flush()
    }

    /// Give back the writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
