//! Log record rendering with color templates.
//!
//! [`AnsiLogFormatter`] plugs into `tracing_subscriber` as an event
//! formatter. Each event becomes a set of named fields that the template
//! can reference, colors included:
//!
//! | field       | value                                    |
//! |-------------|------------------------------------------|
//! | `message`   | the event message                        |
//! | `levelname` | `ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE` |
//! | `levelno`   | 40, 30, 20, 10, 5                        |
//! | `name`      | event target                             |
//! | `module`    | module path, if known                    |
//! | `filename`  | source file, if known                    |
//! | `lineno`    | source line, if known                    |
//! | `asctime`   | local timestamp (only when referenced)   |
//!
//! Structured fields recorded on the event are available by their own
//! names.
//!
//! ```no_run
//! use colorexpansi::{AnsiLogFormatter, ColorFormatter};
//!
//! let formatter = AnsiLogFormatter::new(
//!     Some("{asctime:$k+f} {levelname:<5$r+b} {message}"),
//!     None,
//!     ColorFormatter::default(),
//! );
//! tracing_subscriber::fmt().event_format(formatter).init();
//! ```

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use tracing::dispatcher::{self, Dispatch};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::format::{ColorFormatter, FieldValue, Fields, FormatError};

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "{message}";

/// Timestamp format used when none is given.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter that renders each record through a [`ColorFormatter`].
#[derive(Debug, Clone)]
pub struct AnsiLogFormatter {
    template: String,
    date_format: String,
    formatter: ColorFormatter,
}

impl Default for AnsiLogFormatter {
    fn default() -> Self {
        Self::new(None, None, ColorFormatter::default())
    }
}

impl AnsiLogFormatter {
    pub fn new(template: Option<&str>, date_format: Option<&str>, formatter: ColorFormatter) -> Self {
        Self {
            template: template.unwrap_or(DEFAULT_TEMPLATE).to_string(),
            date_format: date_format.unwrap_or(DEFAULT_DATE_FORMAT).to_string(),
            formatter,
        }
    }

    /// Build from the `[logging]` config section.
    pub fn from_config(config: &LoggingConfig, formatter: ColorFormatter) -> Self {
        Self::new(
            config.template.as_deref(),
            config.date_format.as_deref(),
            formatter,
        )
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether the template references the timestamp field.
    pub fn uses_time(&self) -> bool {
        self.template.contains("{asctime")
    }

    /// Render a timestamp with the configured date format.
    pub fn format_time(&self, time: &DateTime<Local>) -> Result<String, FormatError> {
        let mut out = String::new();
        write!(out, "{}", time.format(&self.date_format))
            .map_err(|_| FormatError::invalid_spec(&self.date_format, "invalid date format"))?;
        Ok(out)
    }

    /// Render one record's fields through the template.
    pub fn format_record(&self, record: &Fields) -> Result<String, FormatError> {
        self.formatter.format(&self.template, record)
    }

    fn record_fields(&self, event: &Event<'_>) -> Result<Fields, FormatError> {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        let meta = event.metadata();

        let mut fields = collector.fields;
        fields.insert("message", collector.message.unwrap_or_default());
        fields.insert("levelname", meta.level().as_str());
        fields.insert("levelno", level_number(meta.level()));
        fields.insert("name", meta.target());
        fields.insert("module", meta.module_path().unwrap_or_default());
        fields.insert("filename", meta.file().unwrap_or_default());
        fields.insert("lineno", meta.line().map(i64::from).unwrap_or_default());
        if self.uses_time() {
            fields.insert("asctime", self.format_time(&Local::now())?);
        }
        Ok(fields)
    }
}

impl<S, N> FormatEvent<S, N> for AnsiLogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        // Spec parsing emits its own events; they must not re-enter this formatter
        let line = dispatcher::with_default(&Dispatch::none(), || {
            self.record_fields(event)
                .and_then(|fields| self.format_record(&fields))
        })
        .map_err(|_| fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

/// Numeric severity, higher is more severe.
pub fn level_number(level: &Level) -> i64 {
    match *level {
        Level::ERROR => 40,
        Level::WARN => 30,
        Level::INFO => 20,
        Level::DEBUG => 10,
        Level::TRACE => 5,
    }
}

/// Collects event fields, keeping their native types where possible.
#[derive(Debug, Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Fields,
}

impl FieldCollector {
    fn put(&mut self, field: &Field, value: FieldValue) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(field.name(), value);
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, FieldValue::Str(format!("{:?}", value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, FieldValue::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, FieldValue::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, FieldValue::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, FieldValue::Float(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, FieldValue::Bool(value));
    }
}

/// Install a global subscriber that writes colored records to stderr.
///
/// `RUST_LOG` takes precedence over `config.level`.
pub fn init_logging(config: &LoggingConfig, formatter: ColorFormatter) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    tracing_subscriber::fmt()
        .event_format(AnsiLogFormatter::from_config(config, formatter))
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

/// Level filter for `--verbose`: the configured level, raised to at least
/// `debug`. Directive lists such as `info,colorexpansi=trace` are kept as written.
pub fn verbose_level(level: &str) -> String {
    match level.trim().parse::<LevelFilter>() {
        Ok(filter) if filter >= LevelFilter::DEBUG => level.to_string(),
        Ok(_) => "debug".to_string(),
        Err(_) => level.to_string(),
    }
}
