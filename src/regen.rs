//! Regeneration of the behavior-definitions fragment.
//!
//! The fragment is produced by an external rake task. This module wraps
//! that invocation behind a small collaborator trait so the patch
//! pipeline can be driven by tests without process execution.

use crate::config::SyncPaths;
use crate::error::SyncError;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

/// Candidate rake invocations, tried in order. Homebrew's ruby ships a
/// rake that is not on PATH by default on macOS.
const RAKE_CANDIDATES: &[&str] = &["/opt/homebrew/opt/ruby/bin/rake", "rake"];

/// Rake target that rewrites keymap.dtsi.
const RAKE_TARGET: &str = "keymap.dtsi";

/// Source of the behavior-definitions fragment text.
pub trait FragmentSource {
    /// Returns the current fragment, regenerating it first if the
    /// implementation does so.
    fn fragment(&self) -> Result<String>;
}

/// Regenerates the fragment by running rake, then reads it back.
pub struct RakeRegenerator<'a> {
    paths: &'a SyncPaths,
    candidates: &'a [&'a str],
}

impl<'a> RakeRegenerator<'a> {
    /// Creates a regenerator using the default rake candidates.
    #[must_use]
    pub fn new(paths: &'a SyncPaths) -> Self {
        Self {
            paths,
            candidates: RAKE_CANDIDATES,
        }
    }

    /// Creates a regenerator with a custom candidate list.
    #[must_use]
    pub fn with_candidates(paths: &'a SyncPaths, candidates: &'a [&'a str]) -> Self {
        Self { paths, candidates }
    }

    /// Runs the first available candidate in the repository root.
    fn regenerate(&self) -> Result<(), SyncError> {
        for candidate in self.candidates {
            let output = match Command::new(candidate)
                .arg(RAKE_TARGET)
                .current_dir(&self.paths.root)
                .output()
            {
                Ok(output) => output,
                Err(error) if error.kind() == io::ErrorKind::NotFound => continue,
                Err(error) => {
                    return Err(SyncError::Execution {
                        output: error.to_string(),
                    })
                }
            };

            if output.status.success() {
                return Ok(());
            }

            return Err(SyncError::Execution {
                output: failure_diagnostics(&output),
            });
        }

        Err(SyncError::ToolNotFound)
    }
}

impl FragmentSource for RakeRegenerator<'_> {
    fn fragment(&self) -> Result<String> {
        self.regenerate()?;
        read_fragment(&self.paths.keymap_dtsi)
    }
}

/// Reads the fragment as it already exists on disk, without regenerating.
pub struct ExistingFragment<'a> {
    paths: &'a SyncPaths,
}

impl<'a> ExistingFragment<'a> {
    /// Creates a source over the configured fragment file.
    #[must_use]
    pub fn new(paths: &'a SyncPaths) -> Self {
        Self { paths }
    }
}

impl FragmentSource for ExistingFragment<'_> {
    fn fragment(&self) -> Result<String> {
        read_fragment(&self.paths.keymap_dtsi)
    }
}

/// Extracts the most useful diagnostic from a failed command.
fn failure_diagnostics(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }

    output.status.to_string()
}

fn read_fragment(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .context(format!("Failed to read fragment: {}", path.display()))
}
