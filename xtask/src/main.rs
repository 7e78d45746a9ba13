//! xtask - Build tasks for colorexpansi
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md, CONFIGURATION.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use colorexpansi::cli::Cli;
use colorexpansi::config::docs::generate_config_markdown;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for colorexpansi")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI and config definitions
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

        /// Generate CONFIGURATION.md
        #[arg(long)]
        config: bool,

        /// Generate all formats (default if no specific format is specified)
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
            config,
            all,
        } => {
            // If no specific format is specified, generate all
            let gen_all = all || (!man && !markdown && !config);

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
            if gen_all || config {
                generate_config_reference(&output)?;
            }
        }
    }

    Ok(())
}

/// Render one man page into `dir/<file_stem>.1`.
fn write_man_page(dir: &Path, file_stem: &str, cmd: &Command) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    let path = dir.join(format!("{}.1", file_stem));
    fs::write(&path, buffer)?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, "colorexpansi", &cmd)?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        write_man_page(&man_dir, &format!("colorexpansi-{}", name), subcommand)?;

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            let stem = format!("colorexpansi-{}-{}", name, nested.get_name());
            write_man_page(&man_dir, &stem, nested)?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

/// Markdown bullet list of a command's positional arguments and options.
fn arguments_markdown(cmd: &Command) -> (String, String) {
    let mut positional = String::new();
    let mut options = String::new();

    for arg in cmd.get_arguments().filter(|a| !is_builtin(a)) {
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        if arg.is_positional() {
            positional.push_str(&format!(
                "- `<{}>`: {}\n",
                arg.get_id().as_str().to_uppercase(),
                help
            ));
            continue;
        }
        let long = arg.get_long().map(|l| format!("--{}", l));
        let short = arg.get_short().map(|s| format!("-{}", s));
        let flag = match (long, short) {
            (Some(l), Some(s)) => format!("{}, {}", s, l),
            (Some(l), None) => l,
            (None, Some(s)) => s,
            _ => continue,
        };
        options.push_str(&format!("- `{}`: {}\n", flag, help));
    }

    (positional, options)
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# colorexpansi Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#colorexpansi-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## colorexpansi\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## colorexpansi {}\n\n", name));

        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        let (positional, options) = arguments_markdown(subcommand);
        if !positional.is_empty() {
            markdown.push_str(&format!("### Arguments\n\n{}\n", positional));
        }
        if !options.is_empty() {
            markdown.push_str(&format!("### Options\n\n{}\n", options));
        }

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str(&format!("### Description\n\n```\n{}\n```\n\n", long_about));
        }

        let nested: Vec<_> = subcommand
            .get_subcommands()
            .filter(|c| !c.is_hide_set())
            .collect();
        if !nested.is_empty() {
            markdown.push_str("### Subcommands\n\n");
            for nested_cmd in nested {
                markdown.push_str(&format!(
                    "#### colorexpansi {} {}\n\n",
                    name,
                    nested_cmd.get_name()
                ));
                if let Some(about) = nested_cmd.get_about() {
                    markdown.push_str(&format!("{}\n\n", about));
                }
                let (positional, options) = arguments_markdown(nested_cmd);
                for list in [positional, options] {
                    if !list.is_empty() {
                        markdown.push_str(&format!("{}\n", list));
                    }
                }
            }
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}

/// Generate CONFIGURATION.md from the config field documentation
fn generate_config_reference(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let output_path = output.join("CONFIGURATION.md");
    fs::write(&output_path, generate_config_markdown())?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
