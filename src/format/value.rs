//! Field values and the per-field format mini-language.
//!
//! A format spec has the shape
//! `[[fill]align][sign][#][0][width][grouping][.precision][type]`:
//! - align: `<` left, `>` right, `^` center, `=` pad after the sign
//! - sign: `+`, `-` or a space
//! - grouping: `,` or `_` thousands separator
//! - type: `s` for text, `b c d o x X n` for integers, `e E f F g G %` for floats

use std::collections::HashMap;
use std::fmt;

use super::error::FormatError;

/// A value that can be substituted into a template field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    /// Quoted representation used by the `!r` conversion.
    pub fn repr(&self) -> String {
        match self {
            FieldValue::Str(s) => quote(s),
            other => other.to_string(),
        }
    }

    /// Parse a command-line style literal: integer, then float, then
    /// `true`/`false`, falling back to text.
    pub fn infer(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return FieldValue::Int(n);
        }
        if let Ok(x) = raw.parse::<f64>() {
            return FieldValue::Float(x);
        }
        match raw {
            "true" => FieldValue::Bool(true),
            "false" => FieldValue::Bool(false),
            _ => FieldValue::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(x) => f.write_str(&float_repr(*x)),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Str(value.clone())
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

/// Integers that may not fit an `i64` fall back to their decimal text.
macro_rules! wide_int_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(n) => FieldValue::Int(n),
                        Err(_) => FieldValue::Str(value.to_string()),
                    }
                }
            }
        )*
    };
}

wide_int_field_value!(u64, usize, isize, i128, u128);

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Positional and named values available to a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    positional: Vec<FieldValue>,
    named: HashMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value (builder style).
    pub fn arg(mut self, value: impl Into<FieldValue>) -> Self {
        self.push(value);
        self
    }

    /// Add a named value (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn push(&mut self, value: impl Into<FieldValue>) {
        self.positional.push(value.into());
    }

    /// Insert a named value, replacing any previous value of that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.named.insert(name.into(), value.into());
    }

    pub fn positional(&self, index: usize) -> Option<&FieldValue> {
        self.positional.get(index)
    }

    pub fn named(&self, name: &str) -> Option<&FieldValue> {
        self.named.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    AfterSign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
    Space,
}

/// Parsed form of a field's format spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormatSpec {
    fill: Option<char>,
    align: Option<Align>,
    sign: Option<Sign>,
    alternate: bool,
    zero: bool,
    width: Option<usize>,
    grouping: Option<char>,
    precision: Option<usize>,
    ty: Option<char>,
}

/// Largest width or precision accepted; `std::fmt` rejects larger precisions.
const MAX_WIDTH: usize = u16::MAX as usize;
const MAX_PRECISION: usize = u16::MAX as usize;

fn align_for(ch: char) -> Option<Align> {
    match ch {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}

impl FormatSpec {
    fn parse(raw: &str) -> Result<Self, FormatError> {
        let chars: Vec<char> = raw.chars().collect();
        let mut spec = FormatSpec::default();
        let mut i = 0;

        if let Some(align) = chars.get(1).copied().and_then(align_for) {
            spec.fill = Some(chars[0]);
            spec.align = Some(align);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(align_for) {
            spec.align = Some(align);
            i = 1;
        }

        spec.sign = match chars.get(i) {
            Some('+') => Some(Sign::Plus),
            Some('-') => Some(Sign::Minus),
            Some(' ') => Some(Sign::Space),
            _ => None,
        };
        if spec.sign.is_some() {
            i += 1;
        }

        if chars.get(i) == Some(&'#') {
            spec.alternate = true;
            i += 1;
        }
        if chars.get(i) == Some(&'0') {
            spec.zero = true;
            i += 1;
        }

        let (width, next) = take_number(&chars, i, raw)?;
        if width.is_some_and(|w| w > MAX_WIDTH) {
            return Err(FormatError::invalid_spec(raw, "width too big"));
        }
        spec.width = width;
        i = next;

        if let Some(&sep) = chars.get(i).filter(|c| matches!(c, ',' | '_')) {
            spec.grouping = Some(sep);
            i += 1;
        }

        if chars.get(i) == Some(&'.') {
            let (precision, next) = take_number(&chars, i + 1, raw)?;
            if precision.is_none() {
                return Err(FormatError::invalid_spec(raw, "format specifier missing precision"));
            }
            if precision.is_some_and(|p| p > MAX_PRECISION) {
                return Err(FormatError::invalid_spec(raw, "precision too big"));
            }
            spec.precision = precision;
            i = next;
        }

        match &chars[i..] {
            [] => {}
            [ty] => spec.ty = Some(*ty),
            _ => return Err(FormatError::invalid_spec(raw, "invalid format specifier")),
        }

        Ok(spec)
    }
}

fn take_number(chars: &[char], start: usize, raw: &str) -> Result<(Option<usize>, usize), FormatError> {
    let end = chars[start.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
        + start;
    if end == start {
        return Ok((None, start));
    }
    let digits: String = chars[start..end].iter().collect();
    let value = digits
        .parse::<usize>()
        .map_err(|_| FormatError::invalid_spec(raw, "too many decimal digits in format string"))?;
    Ok((Some(value), end))
}

/// Format `value` according to a format spec. An empty spec gives the
/// plain display form.
pub fn format_value(value: &FieldValue, spec: &str) -> Result<String, FormatError> {
    if spec.is_empty() {
        return Ok(value.to_string());
    }
    let parsed = FormatSpec::parse(spec)?;
    match value {
        FieldValue::Str(s) => format_text(s, &parsed, spec),
        FieldValue::Bool(b) => format_text(if *b { "true" } else { "false" }, &parsed, spec),
        FieldValue::Int(n) => format_int(*n, &parsed, spec),
        FieldValue::Float(x) => format_float(*x, &parsed, spec),
    }
}

fn format_text(text: &str, spec: &FormatSpec, raw: &str) -> Result<String, FormatError> {
    if let Some(ty) = spec.ty.filter(|t| *t != 's') {
        return Err(FormatError::invalid_spec(
            raw,
            format!("unknown format code '{}' for string", ty),
        ));
    }
    if spec.sign.is_some() {
        return Err(FormatError::invalid_spec(raw, "sign not allowed in string format specifier"));
    }
    if spec.alternate {
        return Err(FormatError::invalid_spec(
            raw,
            "alternate form (#) not allowed in string format specifier",
        ));
    }
    if spec.grouping.is_some() {
        return Err(FormatError::invalid_spec(raw, "cannot specify grouping with string"));
    }
    if spec.align == Some(Align::AfterSign) {
        return Err(FormatError::invalid_spec(
            raw,
            "'=' alignment not allowed in string format specifier",
        ));
    }

    let body: String = match spec.precision {
        Some(p) => text.chars().take(p).collect(),
        None => text.to_string(),
    };
    Ok(pad(spec, "", "", &body, Align::Left))
}

fn format_int(n: i64, spec: &FormatSpec, raw: &str) -> Result<String, FormatError> {
    if matches!(spec.ty, Some('e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%')) {
        return format_float(n as f64, spec, raw);
    }
    if spec.precision.is_some() {
        return Err(FormatError::invalid_spec(
            raw,
            "precision not allowed in integer format specifier",
        ));
    }

    let magnitude = n.unsigned_abs();
    let (digits, prefix, group_size) = match spec.ty {
        None | Some('d') | Some('n') => (magnitude.to_string(), "", 3),
        Some('b') => (format!("{:b}", magnitude), "0b", 4),
        Some('o') => (format!("{:o}", magnitude), "0o", 4),
        Some('x') => (format!("{:x}", magnitude), "0x", 4),
        Some('X') => (format!("{:X}", magnitude), "0X", 4),
        Some('c') => {
            if spec.sign.is_some() || spec.alternate {
                return Err(FormatError::invalid_spec(
                    raw,
                    "sign and alternate form not allowed with integer format specifier 'c'",
                ));
            }
            let ch = u32::try_from(n)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| FormatError::invalid_spec(raw, "%c arg not in range"))?;
            return Ok(pad(spec, "", "", &ch.to_string(), Align::Right));
        }
        Some(ty) => {
            return Err(FormatError::invalid_spec(
                raw,
                format!("unknown format code '{}' for integer", ty),
            ))
        }
    };

    let digits = match spec.grouping {
        Some(',') if group_size == 4 => {
            return Err(FormatError::invalid_spec(
                raw,
                "cannot specify ',' with a non-decimal format code",
            ))
        }
        Some(sep) => group_digits(&digits, sep, group_size),
        None => digits,
    };
    let prefix = if spec.alternate { prefix } else { "" };

    Ok(pad(spec, sign_str(n < 0, spec.sign), prefix, &digits, Align::Right))
}

fn format_float(x: f64, spec: &FormatSpec, raw: &str) -> Result<String, FormatError> {
    let upper = matches!(spec.ty, Some('E' | 'F' | 'G'));
    let negative = x.is_sign_negative() && !x.is_nan();
    let magnitude = x.abs();

    let body = if !magnitude.is_finite() {
        if let Some(ty) = spec.ty.filter(|t| !"eEfFgGn%".contains(*t)) {
            return Err(FormatError::invalid_spec(
                raw,
                format!("unknown format code '{}' for float", ty),
            ));
        }
        let text = if magnitude.is_nan() { "nan" } else { "inf" };
        let text = if upper {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        if spec.ty == Some('%') {
            text + "%"
        } else {
            text
        }
    } else {
        let alt = spec.alternate;
        match spec.ty {
            Some('f' | 'F') => fixed(magnitude, spec.precision.unwrap_or(6), alt),
            Some('e' | 'E') => exponent(magnitude, spec.precision.unwrap_or(6), upper, alt),
            Some('g' | 'G' | 'n') => general(magnitude, spec.precision.unwrap_or(6), upper, alt, false),
            Some('%') => fixed(magnitude * 100.0, spec.precision.unwrap_or(6), alt) + "%",
            None => match spec.precision {
                Some(p) => general(magnitude, p, false, alt, true),
                None => float_repr(magnitude),
            },
            Some(ty) => {
                return Err(FormatError::invalid_spec(
                    raw,
                    format!("unknown format code '{}' for float", ty),
                ))
            }
        }
    };

    let body = match spec.grouping {
        Some(sep) => group_leading_digits(&body, sep),
        None => body,
    };
    Ok(pad(spec, sign_str(negative, spec.sign), "", &body, Align::Right))
}

fn fixed(x: f64, precision: usize, alternate: bool) -> String {
    let precision = precision.min(MAX_PRECISION);
    let text = format!("{:.*}", precision, x);
    if alternate && precision == 0 {
        text + "."
    } else {
        text
    }
}

/// Scientific notation with a signed, at least two digit exponent.
fn exponent(x: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let text = format!("{:.*e}", precision, x);
    let (mantissa, exp) = split_exponent(&text);
    let dot = if alternate && precision == 0 { "." } else { "" };
    let e = if upper { 'E' } else { 'e' };
    let exp_sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{}{:02}", mantissa, dot, e, exp_sign, exp.unsigned_abs())
}

fn split_exponent(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

/// General format. `repr_style` is the behavior of a bare precision with no
/// type: switch to scientific one digit earlier and keep a `.0` on
/// fixed-point results.
fn general(x: f64, precision: usize, upper: bool, alternate: bool, repr_style: bool) -> String {
    let precision = precision.max(1);
    let (_, exp) = split_exponent(&format!("{:.*e}", precision - 1, x));
    let p = precision as i32;
    let fixed_limit = if repr_style { p - 1 } else { p };
    let use_fixed = exp >= -4 && exp < fixed_limit;

    let mut text = if use_fixed {
        let decimals = (p - 1 - exp).max(0) as usize;
        fixed(x, decimals, alternate)
    } else {
        exponent(x, precision - 1, upper, alternate)
    };

    if !alternate {
        text = strip_trailing_zeros(&text);
    }
    if repr_style && use_fixed && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn strip_trailing_zeros(text: &str) -> String {
    let (mantissa, suffix) = match text.find(['e', 'E']) {
        Some(pos) => text.split_at(pos),
        None => (text, ""),
    };
    if !mantissa.contains('.') {
        return text.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, suffix)
}

/// Shortest round-trip representation: fixed-point for exponents in
/// `-4..16`, scientific otherwise.
fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sci = format!("{:e}", x);
    let (mantissa, exp) = split_exponent(&sci);
    if (-4..16).contains(&exp) {
        let text = x.to_string();
        if text.contains('.') {
            text
        } else {
            text + ".0"
        }
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, exp_sign, exp.unsigned_abs())
    }
}

fn sign_str(negative: bool, sign: Option<Sign>) -> &'static str {
    match (negative, sign) {
        (true, _) => "-",
        (false, Some(Sign::Plus)) => "+",
        (false, Some(Sign::Space)) => " ",
        _ => "",
    }
}

fn group_digits(digits: &str, sep: char, size: usize) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

fn group_leading_digits(text: &str, sep: char) -> String {
    let split = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (int_part, rest) = text.split_at(split);
    format!("{}{}", group_digits(int_part, sep, 3), rest)
}

fn pad(spec: &FormatSpec, sign: &str, prefix: &str, body: &str, default_align: Align) -> String {
    let (fill, align) = match spec.align {
        Some(align) => (spec.fill.unwrap_or(if spec.zero { '0' } else { ' ' }), align),
        None if spec.zero => {
            let align = if default_align == Align::Left {
                Align::Left
            } else {
                Align::AfterSign
            };
            ('0', align)
        }
        None => (' ', default_align),
    };

    let len = sign.chars().count() + prefix.chars().count() + body.chars().count();
    let width = spec.width.unwrap_or(0);
    if len >= width {
        return format!("{}{}{}", sign, prefix, body);
    }
    let gap = width - len;
    let fill_str = |n: usize| std::iter::repeat(fill).take(n).collect::<String>();

    match align {
        Align::Left => format!("{}{}{}{}", sign, prefix, body, fill_str(gap)),
        Align::Right => format!("{}{}{}{}", fill_str(gap), sign, prefix, body),
        Align::Center => format!(
            "{}{}{}{}{}",
            fill_str(gap / 2),
            sign,
            prefix,
            body,
            fill_str(gap - gap / 2)
        ),
        Align::AfterSign => format!("{}{}{}{}", sign, prefix, fill_str(gap), body),
    }
}

fn quote(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
