//! Unit tests for template formatting with color specs

use colorexpansi::format::{format_value, template, DEFAULT_FORMATTER};
use colorexpansi::{format, ColorFormatter, FieldValue, Fields, FormatError, SpecError};

use crate::helpers::sgr;

#[test]
fn plain_template_is_unchanged() {
    assert_eq!(format("no fields {{here}}", &Fields::new()).unwrap(), "no fields {here}");
}

#[test]
fn colored_field_is_wrapped_in_sequence_and_reset() {
    let fields = Fields::new().with("name", "disk");
    assert_eq!(
        format("[{name:$r.g+i-u}]", &fields).unwrap(),
        format!("[{}disk\x1b[0m]", sgr("31;42;3;24"))
    );
}

#[test]
fn value_spec_is_applied_before_coloring() {
    let fields = Fields::new().arg(3.14159).arg(42);
    assert_eq!(
        format("{0:>8.2f$g} {1:+05d$+b}", &fields).unwrap(),
        format!("{}    3.14\x1b[0m {}+0042\x1b[0m", sgr("32"), sgr("1"))
    );
}

#[test]
fn empty_color_spec_leaves_value_alone() {
    let fields = Fields::new().with("x", "plain");
    assert_eq!(format("{x:$}", &fields).unwrap(), "plain");
    assert_eq!(format("{x:>7$}", &fields).unwrap(), "  plain");
}

#[test]
fn empty_spec_after_separator_is_not_a_color() {
    // An empty color spec short-circuits before parsing, so no ESC[m is emitted
    let out = DEFAULT_FORMATTER
        .format_field(&FieldValue::from("v"), "$")
        .unwrap();
    assert_eq!(out, "v");
}

#[test]
fn invalid_color_fails_whole_call() {
    let fields = Fields::new().with("a", 1).with("b", 2);
    let err = format("{a:$r} {b:$rg}", &fields).unwrap_err();
    assert_eq!(
        err,
        FormatError::Spec(SpecError::InvalidColorSpec {
            spec: "rg".to_string()
        })
    );
}

#[test]
fn custom_separator_frees_dollar_for_values() {
    let formatter = ColorFormatter::new('@');
    let fields = Fields::new().with("price", "$5");
    assert_eq!(
        formatter.format("{price:>4@y}", &fields).unwrap(),
        format!("{}  $5\x1b[0m", sgr("33"))
    );
}

#[test]
fn fields_from_iterator() {
    let fields: Fields = [("user", "ada"), ("host", "box")].into_iter().collect();
    assert_eq!(format("{user}@{host:$c}", &fields).unwrap(), format!("ada@{}box\x1b[0m", sgr("36")));
}

#[test]
fn positional_and_named_fields_mix() {
    let fields = Fields::new().arg("first").with("k", "v").arg("second");
    assert_eq!(format("{} {k} {}", &fields).unwrap(), "first v second");
    assert_eq!(format("{1} {k} {0}", &fields).unwrap(), "second v first");
}

#[test]
fn repr_conversion_quotes_strings() {
    let fields = Fields::new().arg("it's").arg(2);
    assert_eq!(format("{0!r} {1!r}", &fields).unwrap(), "\"it's\" 2");
}

#[test]
fn template_errors() {
    let fields = Fields::new().arg(1);
    assert!(matches!(
        format("{", &fields).unwrap_err(),
        FormatError::UnclosedField
    ));
    assert!(matches!(
        format("}", &fields).unwrap_err(),
        FormatError::UnmatchedBrace { brace: '}', .. }
    ));
    assert!(matches!(
        format("{0!x}", &fields).unwrap_err(),
        FormatError::UnknownConversion(_)
    ));
    assert!(matches!(
        format("{0.real}", &fields).unwrap_err(),
        FormatError::UnsupportedFieldName(_)
    ));
}

#[test]
fn template_parse_splits_segments() {
    let segments = template::parse("a{x:>3$r}b").unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], template::Segment::Literal("a".to_string()));
    match &segments[1] {
        template::Segment::Field(field) => {
            assert_eq!(field.name, template::FieldRef::Name("x".to_string()));
            assert_eq!(field.spec, ">3$r");
        }
        other => panic!("expected field, got {other:?}"),
    }
}

#[test]
fn format_value_mini_language() {
    assert_eq!(format_value(&FieldValue::Int(1234567), ",").unwrap(), "1,234,567");
    assert_eq!(format_value(&FieldValue::Int(255), "#x").unwrap(), "0xff");
    assert_eq!(format_value(&FieldValue::Float(0.5), ".1%").unwrap(), "50.0%");
    assert_eq!(format_value(&FieldValue::from("ab"), "*^6").unwrap(), "**ab**");
    assert!(format_value(&FieldValue::from("ab"), "d").is_err());
}

#[test]
fn formatter_is_shareable_across_threads() {
    let formatter = ColorFormatter::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                formatter.format("{0:$b}", &Fields::new().arg(i)).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{}{}\x1b[0m", sgr("34"), i));
    }
}
