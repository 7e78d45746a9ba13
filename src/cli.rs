//! CLI definitions for colorexpansi
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "colorexpansi")]
#[command(about = "Colorize format strings with compact ANSI color specifications")]
#[command(
    long_about = "colorexpansi - Colorize format strings with compact ANSI color specifications.

A color spec is [FG][.BG][+MODES][-MODES]:
    colors  k r g y b m c w  (black red green yellow blue magenta cyan white)
    modes   b f i u k r h s  (bold dim italic underline blink reverse hidden strike)

Inside a template, a field's format spec may end with '$' followed by a color spec.

QUICK START:
    colorexpansi sequence r.g+i-u              Show the sequence for a spec
    colorexpansi render '{0:>6$y+b}' 3.14      Render a template
    colorexpansi render '{lvl:$r+b} {msg}' lvl=ERROR msg=boom
    colorexpansi idents                        List the identifier tables"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Log at debug level or more detailed (logging.level or RUST_LOG may go further)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with colored fields
    #[command(long_about = "Render a template with colored fields.

Fields given as name=value are named, bare values are positional. Values are
typed as integer, then float, then true/false, falling back to a string.

EXAMPLES:
    colorexpansi render '{} and {}' left right
    colorexpansi render '{n:08.3f$g}' n=2.5
    colorexpansi render '{0!r:$c}' hello
    colorexpansi render --separator '@' '{x:>4@b+u}' x=7")]
    Render {
        /// Template with {field[!conversion][:spec[$color]]} replacement fields
        #[arg(help = "Template with {field[!conversion][:spec[$color]]} replacement fields")]
        template: String,
        /// Field values: name=value or positional
        #[arg(help = "Field values: name=value or positional")]
        fields: Vec<String>,
        /// Separator between format spec and color spec (overrides config)
        #[arg(long, short, help = "Separator between format spec and color spec")]
        separator: Option<char>,
    },

    /// Show the control sequence for a color spec
    #[command(long_about = "Show the control sequence for a color spec.

EXAMPLES:
    colorexpansi sequence r                    Red foreground
    colorexpansi sequence .b+u                 Blue background, underlined
    colorexpansi sequence g+b --show raw       Emit the raw escape bytes
    colorexpansi sequence r.g+i-u --show json  Structured form")]
    Sequence {
        /// Color spec, e.g. r.g+i-u
        #[arg(help = "Color spec, e.g. r.g+i-u", allow_hyphen_values = true)]
        spec: String,
        /// Output representation
        #[arg(long, value_enum, default_value_t = ShowFormat::Escaped)]
        show: ShowFormat,
    },

    /// List color and mode identifiers with samples
    Idents,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    colorexpansi completions bash > ~/.local/share/bash-completion/completions/colorexpansi
    colorexpansi completions zsh > ~/.zfunc/_colorexpansi")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration with inline documentation
    Show,
    /// Print the config file path
    Path,
}

/// How `sequence` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Raw bytes, directly interpreted by the terminal
    Raw,
    /// Escape character shown as \x1b
    Escaped,
    /// SGR parameters joined by ';'
    Arguments,
    /// Structured JSON
    Json,
}
