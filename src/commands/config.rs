//! Config subcommands handler

use anyhow::Result;

use colorexpansi::config::docs::{annotate_config, insert_optional_field_templates};
use colorexpansi::Config;

/// Show current configuration as TOML with inline documentation comments.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Serialized config with commented templates for unset optional fields,
/// annotated with field descriptions.
pub fn render_config(config: &Config) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    // Templates first so they also get documentation comments
    let with_templates = insert_optional_field_templates(&toml_str);
    Ok(annotate_config(&with_templates))
}
