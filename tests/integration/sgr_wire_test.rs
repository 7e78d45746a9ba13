//! Wire-format tests: emitted bytes are fed through a VT parser and must
//! arrive as CSI `m` dispatches carrying the expected parameters.

use vte::{Params, Parser, Perform};

use colorexpansi::{format, parse_control, ControlSequence, Fields, Region};

#[derive(Debug, Default)]
struct SgrRecorder {
    dispatches: Vec<(Vec<u16>, char)>,
    printed: String,
}

impl Perform for SgrRecorder {
    fn print(&mut self, c: char) {
        self.printed.push(c);
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        self.dispatches.push((params, action));
    }
}

fn feed(bytes: &[u8]) -> SgrRecorder {
    let mut parser = Parser::new();
    let mut recorder = SgrRecorder::default();
    parser.advance(&mut recorder, bytes);
    recorder
}

fn sgr_params(seq: &ControlSequence) -> Vec<u16> {
    let recorder = feed(&seq.as_bytes());
    assert!(recorder.printed.is_empty(), "stray text: {:?}", recorder.printed);
    assert_eq!(recorder.dispatches.len(), 1, "expected a single dispatch");
    let (params, action) = recorder.dispatches.into_iter().next().unwrap();
    assert_eq!(action, 'm');
    params
}

#[test]
fn parsed_specs_are_single_sgr_dispatches() {
    let cases: [(&str, &[u16]); 5] = [
        ("r", &[31]),
        ("r.g", &[31, 42]),
        ("r.g+i", &[31, 42, 3]),
        ("r.g-u", &[31, 42, 24]),
        ("r.g+i-u", &[31, 42, 3, 24]),
    ];
    for (spec, expected) in cases {
        let seq = parse_control(spec).unwrap();
        assert_eq!(sgr_params(&seq), expected, "spec {spec:?}");
    }
}

#[test]
fn arguments_match_what_the_terminal_sees() {
    let sequences = [
        ControlSequence::Reset,
        ControlSequence::indexed(208, Region::Foreground),
        ControlSequence::rgb(10, 20, 30, Region::Background),
        parse_control("w.k+bikhs-rfu").unwrap(),
    ];
    for seq in sequences {
        let expected: Vec<u16> = seq
            .arguments()
            .iter()
            .map(|a| a.parse().unwrap())
            .collect();
        assert_eq!(sgr_params(&seq), expected, "{seq:?}");
    }
}

#[test]
fn formatted_output_wraps_text_in_style_and_reset() {
    let fields = Fields::new().with("msg", "hi").with("n", 5);
    let out = format("<{msg:>4$y.b+u}> {n:$}", &fields).unwrap();
    let recorder = feed(out.as_bytes());
    assert_eq!(recorder.printed, "<  hi> 5");
    assert_eq!(
        recorder.dispatches,
        vec![(vec![33, 44, 4], 'm'), (vec![0], 'm')]
    );
}
