//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::Write;

/// Write the completion script for `shell` to `out`.
pub fn handle<C: CommandFactory, W: Write>(shell: CompletionShell, out: &mut W) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "mlt", out);
    Ok(())
}
