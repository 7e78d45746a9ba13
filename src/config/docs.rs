//! Config field documentation, the single source of truth for descriptions.
//!
//! Used by:
//! - `colorexpansi config show` to annotate TOML output with inline comments
//! - `cargo xtask gen-docs` to generate the configuration reference

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "format", "logging")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "format",
        description: "Template formatting",
        fields: &[FieldDoc {
            name: "separator",
            description: "Character separating a field's format spec from its color spec",
            default_display: "$",
        }],
    },
    SectionDoc {
        name: "logging",
        description: "Log record rendering on stderr",
        fields: &[
            FieldDoc {
                name: "template",
                description: "Record template; fields: message, levelname, levelno, name, module, filename, lineno, asctime",
                default_display: "{message}",
            },
            FieldDoc {
                name: "date_format",
                description: "strftime format for {asctime}",
                default_display: "%Y-%m-%d %H:%M:%S,%3f",
            },
            FieldDoc {
                name: "level",
                description: "Level filter when RUST_LOG is unset",
                default_display: "info",
            },
        ],
    },
];

/// Optional fields that are omitted from serialized output when unset.
const OPTIONAL_FIELDS: &[(&str, &str)] = &[("logging", "template"), ("logging", "date_format")];

/// Insert commented-out `# key = default` lines for optional fields that are
/// missing from a section, so users can see what is available.
pub fn insert_optional_field_templates(toml_str: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_section: Option<String> = None;
    let mut present: Vec<String> = Vec::new();

    let flush = |section: &Option<String>, present: &[String], lines: &mut Vec<String>| {
        let Some(section) = section else {
            return;
        };
        for (opt_section, field) in OPTIONAL_FIELDS {
            if opt_section == section && !present.iter().any(|p| p == field) {
                let default = default_display(section, field).unwrap_or("");
                lines.push(format!("# {} = \"{}\"", field, default));
            }
        }
    };

    for line in toml_str.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            // Insert before the blank line separating sections
            let trailing_blank = lines.last().is_some_and(|l| l.trim().is_empty());
            if trailing_blank {
                lines.pop();
            }
            flush(&current_section, &present, &mut lines);
            if trailing_blank {
                lines.push(String::new());
            }
            current_section = Some(section_name(trimmed).to_string());
            present.clear();
        } else if let Some((key, _)) = trimmed.split_once('=') {
            present.push(key.trim().to_string());
        }
        lines.push(line.to_string());
    }
    flush(&current_section, &present, &mut lines);

    let mut result = lines.join("\n");
    if !result.ends_with('\n') {
        result.push('\n');
    }
    result
}

fn section_name(header: &str) -> &str {
    header
        .trim_start_matches('[')
        .split(']')
        .next()
        .unwrap_or("")
        .trim()
}

fn default_display(section: &str, field: &str) -> Option<&'static str> {
    CONFIG_SECTIONS
        .iter()
        .find(|s| s.name == section)
        .and_then(|s| s.fields.iter().find(|f| f.name == field))
        .map(|f| f.default_display)
}

/// Annotate a serialized TOML config string with inline documentation comments.
///
/// Inserts `# description` comments above each known field.
pub fn annotate_config(toml_str: &str) -> String {
    // Build lookup: (section_name, field_name) -> description
    let mut lookup: HashMap<(&str, &str), &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        for field in section.fields {
            lookup.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        // Track section headers
        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            current_section = section_name(trimmed).to_string();
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Also match commented-out template lines like `# key = value`
        if let Some((before_eq, _)) = trimmed.split_once('=') {
            let raw_key = before_eq.trim();
            let key = raw_key.strip_prefix('#').unwrap_or(raw_key).trim();
            if let Some(desc) = lookup.get(&(current_section.as_str(), key)) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}

/// Generate the configuration reference as markdown.
pub fn generate_config_markdown() -> String {
    let mut md = String::new();

    md.push_str(
        "<!-- This file is auto-generated by `cargo xtask gen-docs`. Do not edit manually. -->\n\n",
    );
    md.push_str("# Configuration\n\n");
    md.push_str(
        "colorexpansi reads an optional TOML file at `~/.config/colorexpansi/config.toml`.\n\n",
    );

    for section in CONFIG_SECTIONS {
        md.push_str(&format!("## [{}]\n\n", section.name));
        md.push_str(&format!("{}\n\n", section.description));
        md.push_str("| Option | Default | Description |\n");
        md.push_str("|--------|---------|-------------|\n");
        for field in section.fields {
            md.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                field.name, field.default_display, field.description
            ));
        }
        md.push('\n');
    }

    md.push_str("## Example Configuration\n\n");
    md.push_str("```toml\n");
    md.push_str("[format]\n");
    md.push_str("separator = \"$\"\n\n");
    md.push_str("[logging]\n");
    md.push_str("template = \"{asctime:$k+f} {levelname:<5$r+b} {message}\"\n");
    md.push_str("date_format = \"%H:%M:%S\"\n");
    md.push_str("level = \"debug\"\n");
    md.push_str("```\n");

    md
}
