//! Piping a document into an external OpenAPI linter.

use crate::document::Document;
use crate::output::to_json;
use anyhow::Context;
use std::io::{ErrorKind, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::str::FromStr;
use tracing::{info, warn};

/// Command that reads an OpenAPI document on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLinter {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ExternalLinter {
    /// `npx @redocly/cli lint /dev/stdin`
    fn default() -> Self {
        Self::new("npx", ["@redocly/cli", "lint", "/dev/stdin"])
    }
}

impl ExternalLinter {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for ExternalLinter {
    type Err = String;

    /// Whitespace-separated command line; no shell quoting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| "external linter command is empty".to_string())?;
        Ok(Self::new(program, parts))
    }
}

/// Run `linter` with the JSON rendering of `document` on stdin.
pub fn run_external_linter(
    document: &Document,
    linter: &ExternalLinter,
) -> anyhow::Result<ExitStatus> {
    let json = to_json(document)?;
    run_external_linter_on(json.as_bytes(), linter)
}

/// Run `linter` with `content` written verbatim to its stdin.
///
/// The linter's stdout and stderr are inherited. Returns its exit status;
/// failing to start the process is an error.
pub fn run_external_linter_on(
    content: &[u8],
    linter: &ExternalLinter,
) -> anyhow::Result<ExitStatus> {
    info!(command = %linter.command_line(), bytes = content.len(), "running external linter");

    let mut child = Command::new(&linter.program)
        .args(&linter.args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start external linter: {}", linter.command_line()))?;

    let written = match child.stdin.take() {
        // Dropping stdin at the end of the arm closes the pipe.
        Some(mut stdin) => stdin.write_all(content),
        None => Err(std::io::Error::other("stdin was not captured")),
    };
    match written {
        Ok(()) => {}
        // Linter exited without reading everything; its status says why.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            warn!("external linter closed stdin early");
        }
        Err(e) => {
            abandon(&mut child);
            return Err(e).context("Failed to write document to external linter");
        }
    }

    let status = child
        .wait()
        .context("Failed to wait for external linter")?;
    if !status.success() {
        warn!(status = %status, "external linter reported problems");
    }
    Ok(status)
}

/// Kill and reap a linter we are giving up on.
pub(super) fn abandon(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!(error = %e, "failed to kill external linter");
    }
    if let Err(e) = child.wait() {
        warn!(error = %e, "failed to reap external linter");
    }
}
