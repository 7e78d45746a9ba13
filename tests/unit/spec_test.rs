//! Unit tests for the color specification parser

use std::collections::HashMap;

use colorexpansi::spec::{color_for, mode_for, ParsedSpec, COLOR_IDENTS, MODE_IDENTS};
use colorexpansi::{parse_control, ControlSequence, GraphicsMode, Region, SpecError, StandardColor};

use crate::helpers::sgr;

fn invalid(spec: &str) -> SpecError {
    SpecError::InvalidColorSpec {
        spec: spec.to_string(),
    }
}

#[test]
fn literal_scenarios() {
    let cases = [
        ("r", "31"),
        ("r.g", "31;42"),
        ("r.g+i", "31;42;3"),
        ("r.g-u", "31;42;24"),
        ("r.g+i-u", "31;42;3;24"),
        ("", ""),
    ];
    for (spec, body) in cases {
        let seq = parse_control(spec).unwrap();
        assert_eq!(seq.to_string(), sgr(body), "spec {spec:?}");
    }
}

#[test]
fn every_color_ident_parses_as_plain_foreground() {
    for (ident, color) in COLOR_IDENTS {
        let seq = parse_control(&ident.to_string()).unwrap();
        assert_eq!(
            seq,
            ControlSequence::concat(vec![ControlSequence::Color16 {
                color,
                region: Region::Foreground,
                bright: false,
            }])
        );
    }
}

#[test]
fn every_color_ident_parses_as_background() {
    for (ident, color) in COLOR_IDENTS {
        let seq = parse_control(&format!(".{ident}")).unwrap();
        assert_eq!(seq, ControlSequence::concat(vec![ControlSequence::bg(color)]));
    }
}

#[test]
fn parse_tree_is_assembled_in_fixed_order() {
    let seq = parse_control("y.k+bu-sr").unwrap();
    assert_eq!(
        seq,
        ControlSequence::concat(vec![
            ControlSequence::fg(StandardColor::Yellow),
            ControlSequence::bg(StandardColor::Black),
            ControlSequence::set(GraphicsMode::Bold),
            ControlSequence::set(GraphicsMode::Underline),
            ControlSequence::reset_mode(GraphicsMode::Strike),
            ControlSequence::reset_mode(GraphicsMode::Reverse),
        ])
    );
}

#[test]
fn duplicate_modes_are_preserved() {
    let seq = parse_control("+bb").unwrap();
    assert_eq!(seq.to_string(), sgr("1;1"));
}

#[test]
fn modes_without_colors() {
    assert_eq!(parse_control("+i").unwrap().to_string(), sgr("3"));
    assert_eq!(parse_control("-u").unwrap().to_string(), sgr("24"));
    assert_eq!(parse_control("+fh-k").unwrap().to_string(), sgr("2;8;25"));
}

#[test]
fn ambiguous_looking_specs_follow_group_position() {
    // 'b' is blue as a color and bold as a mode; 'r' is red or reverse
    assert_eq!(parse_control("b+b").unwrap().to_string(), sgr("34;1"));
    assert_eq!(parse_control("r-r").unwrap().to_string(), sgr("31;27"));
}

#[test]
fn unknown_identifier_is_rejected() {
    assert_eq!(parse_control("z").unwrap_err(), invalid("z"));
    assert_eq!(parse_control("r.z").unwrap_err(), invalid("r.z"));
    assert_eq!(parse_control("+x").unwrap_err(), invalid("+x"));
}

#[test]
fn multi_character_color_run_is_rejected() {
    assert_eq!(parse_control("rg").unwrap_err(), invalid("rg"));
    assert_eq!(parse_control("r.gb").unwrap_err(), invalid("r.gb"));
}

#[test]
fn groups_out_of_order_are_rejected() {
    for spec in ["+b.r", "-u+i", ".g r", "r.", "+", "-", "R", " r", "r "] {
        assert_eq!(parse_control(spec).unwrap_err(), invalid(spec), "spec {spec:?}");
    }
}

#[test]
fn error_carries_offending_input() {
    let err = parse_control("r.g+q").unwrap_err();
    assert_eq!(err.spec(), "r.g+q");
    assert_eq!(err.to_string(), "invalid color specification: 'r.g+q'");
}

#[test]
fn parsed_spec_exposes_groups() {
    let parsed = ParsedSpec::parse("r.g+iu-s").unwrap();
    assert_eq!(parsed.foreground, Some("r"));
    assert_eq!(parsed.background, Some("g"));
    assert_eq!(parsed.add_modes, Some("iu"));
    assert_eq!(parsed.remove_modes, Some("s"));

    let empty = ParsedSpec::parse("").unwrap();
    assert_eq!(empty, ParsedSpec::default());
}

#[test]
fn identifier_lookups() {
    assert_eq!(color_for('m'), Some(StandardColor::Magenta));
    assert_eq!(color_for('z'), None);
    assert_eq!(mode_for('k'), Some(GraphicsMode::Blink));
    assert_eq!(mode_for('y'), None);
    assert_eq!(MODE_IDENTS.len(), 8);
}

#[test]
fn bold_and_dim_share_reset_code() {
    assert_eq!(
        parse_control("-b").unwrap(),
        ControlSequence::concat(vec![ControlSequence::reset_mode(GraphicsMode::Bold)])
    );
    assert_eq!(
        parse_control("-b").unwrap().to_string(),
        parse_control("-f").unwrap().to_string()
    );
}

#[test]
fn distinct_specs_serialize_distinctly() {
    // Dim is left out of the reset groups: it shares 22 with bold
    let resettable: Vec<char> = MODE_IDENTS
        .iter()
        .map(|(m, _)| *m)
        .filter(|m| *m != 'f')
        .collect();

    let mut specs = vec![String::new()];
    for (c, _) in COLOR_IDENTS {
        specs.push(c.to_string());
        specs.push(format!(".{c}"));
        for (m, _) in MODE_IDENTS {
            specs.push(format!("{c}+{m}"));
        }
        for m in &resettable {
            specs.push(format!(".{c}-{m}"));
        }
    }
    for (m, _) in MODE_IDENTS {
        specs.push(format!("+{m}"));
    }
    for m in &resettable {
        specs.push(format!("-{m}"));
    }

    let mut seen: HashMap<String, String> = HashMap::new();
    for spec in specs {
        let wire = parse_control(&spec).unwrap().to_string();
        if let Some(previous) = seen.insert(wire.clone(), spec.clone()) {
            panic!("{previous:?} and {spec:?} both serialize to {wire:?}");
        }
    }
}

#[test]
fn grammar_is_usable_from_many_threads() {
    let handles: Vec<_> = ["r", "g.b", "+i", "y-u"]
        .into_iter()
        .map(|spec| std::thread::spawn(move || parse_control(spec).map(|s| s.to_string())))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            Ok(sgr("31")),
            Ok(sgr("32;44")),
            Ok(sgr("3")),
            Ok(sgr("33;24")),
        ]
    );
}
