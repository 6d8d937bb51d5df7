//! xtask - Build tasks for mlt
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use mlt::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for mlt")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // Neither flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(Man::new(cmd.clone()), &man_dir.join("mlt.1"))?;

    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        let page = man_dir.join(format!("mlt-{}.1", name));
        render_man(Man::new(subcommand.clone()), &page)?;
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn render_man(man: clap_mangen::Man, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

/// `-s, --long`, `--long` or `-s`; None for positionals.
fn flag_label(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    match (long, short) {
        (Some(l), Some(s)) => Some(format!("{}, {}", s, l)),
        (Some(l), None) => Some(l),
        (None, Some(s)) => Some(s),
        _ => None,
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# mlt Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#mlt-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## mlt\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
    push_options(&mut markdown, &cmd);

    for subcommand in visible_subcommands(&cmd) {
        markdown.push_str(&format!("## mlt {}\n\n", subcommand.get_name()));

        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        let positional: Vec<_> = subcommand
            .get_arguments()
            .filter(|a| a.is_positional() && !is_builtin(a))
            .collect();
        if !positional.is_empty() {
            markdown.push_str("### Arguments\n\n");
            for arg in positional {
                markdown.push_str(&format!("- `<{}>`", arg.get_id().as_str().to_uppercase()));
                if let Some(help) = arg.get_help() {
                    markdown.push_str(&format!(": {}", help));
                }
                markdown.push('\n');
            }
            markdown.push('\n');
        }

        push_options(&mut markdown, subcommand);

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str("### Description\n\n");
            markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}

fn push_options(markdown: &mut String, cmd: &Command) {
    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_positional() && !is_builtin(a))
        .filter_map(|a| flag_label(a).map(|label| (label, a)))
        .collect();
    if options.is_empty() {
        return;
    }

    markdown.push_str("### Options\n\n");
    for (label, arg) in options {
        markdown.push_str(&format!("- `{}`", label));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&format!(": {}", help));
        }
        let values: Vec<_> = arg
            .get_possible_values()
            .iter()
            .map(|v| v.get_name().to_string())
            .collect();
        if !values.is_empty() {
            markdown.push_str(&format!(" [{}]", values.join(", ")));
        }
        markdown.push('\n');
    }
    markdown.push('\n');
}
