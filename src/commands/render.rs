//! Render command handler

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use colorexpansi::config::FormatConfig;
use colorexpansi::{ColorFormatter, Config, FieldValue, Fields};

/// Render a template with field arguments and print the result.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    template: &str,
    args: &[String],
    separator: Option<char>,
) -> Result<()> {
    let formatter = formatter_for(config, separator)?;
    println!("{}", render(&formatter, template, args)?);
    Ok(())
}

/// Formatter for a `--separator` override, or the configured one.
pub fn formatter_for(config: &Config, separator: Option<char>) -> Result<ColorFormatter> {
    match separator {
        Some(sep) => {
            FormatConfig { separator: sep }
                .validate()
                .map_err(|e| anyhow!("Invalid --separator: {}", e))?;
            Ok(ColorFormatter::new(sep))
        }
        None => Ok(config.formatter()),
    }
}

/// Render a template against `name=value` / positional arguments.
pub fn render(formatter: &ColorFormatter, template: &str, args: &[String]) -> Result<String> {
    let fields = parse_fields(args);
    debug!(
        template,
        positional = fields.positional_len(),
        separator = %formatter.separator(),
        "rendering template"
    );
    formatter
        .format(template, &fields)
        .with_context(|| format!("Failed to render template '{}'", template))
}

/// Split arguments into named (`name=value`) and positional fields.
///
/// A leading `name=` only counts when `name` is an identifier, so values
/// like `a+b=c` or `=x` stay positional.
pub fn parse_fields(args: &[String]) -> Fields {
    let mut fields = Fields::new();
    for arg in args {
        match arg.split_once('=') {
            Some((name, value)) if is_identifier(name) => {
                fields.insert(name, FieldValue::infer(value));
            }
            _ => fields.push(FieldValue::infer(arg)),
        }
    }
    fields
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
