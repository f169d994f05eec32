//! Fingerprint display command implementation
//!
//! This module wires one run together: discover the repositories, read their
//! latest commits, digest the canonical signature and draw it.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::art::randomart;
use crate::core::{compute_signature, digest_hex, find_repo_directories, DisplayOptions, Settings};
use crate::git::{CommitLog, GitCli};
use crate::render::{split, Display};
use crate::utils::{base_name, terminal_width};

/// Everything derived from one set of repositories
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    /// Final component of the working directory
    pub basename: String,
    pub signature: String,
    pub digest: String,
    pub art: String,
}

impl Fingerprint {
    /// Art rows top to bottom
    pub fn art_rows(&self) -> Vec<&str> {
        self.art.split('\n').collect()
    }

    /// Writes this fingerprint using the given display options
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        options: &DisplayOptions,
        terminal_width: impl FnOnce() -> u16,
    ) -> io::Result<()> {
        let display = Display::new(options, terminal_width);
        let chunks = split(&self.digest, options.chunk_size);
        display.render(out, &self.basename, &chunks, &self.art_rows())
    }
}

/// Computes the fingerprint of `repos`, labelled with the basename of `cwd`
pub async fn fingerprint<L>(cwd: &Path, repos: &[PathBuf], log: &L) -> Result<Fingerprint>
where
    L: CommitLog + Sync + ?Sized,
{
    let signature = compute_signature(repos, log).await?;
    let digest = digest_hex(&signature);
    let art = randomart(&signature);
    let basename = base_name(cwd)?;

    Ok(Fingerprint {
        basename,
        signature,
        digest,
        art,
    })
}

/// Discovers and fingerprints the repositories visible from `cwd`, then writes the result
pub async fn show_fingerprint<W: Write>(
    out: &mut W,
    cwd: &Path,
    options: &DisplayOptions,
    settings: &Settings,
    terminal_width: impl FnOnce() -> u16,
) -> Result<()> {
    let repos = find_repo_directories(cwd, settings.manifest_name()).await?;
    let git = GitCli::new(cwd);
    let fp = fingerprint(cwd, &repos, &git).await?;

    fp.render(out, options, terminal_width)
        .context("failed to write fingerprint")
}

/// Main handler for the fingerprint display
pub async fn handle_show_command(options: &DisplayOptions, settings: &Settings) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get working directory")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show_fingerprint(&mut out, &cwd, options, settings, terminal_width).await
}
