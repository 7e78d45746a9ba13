//! Replacement-field template parsing.
//!
//! Templates are literal text with `{field[!conversion][:spec]}` fields.
//! `{{` and `}}` produce literal braces. The spec part may itself
//! contain nested `{...}` fields, which are expanded before use.

use super::error::FormatError;

/// How a field names its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    /// `{}`: next positional value.
    Auto,
    /// `{0}`: positional value by index.
    Index(usize),
    /// `{name}`: named value.
    Name(String),
}

/// Conversion applied before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `!s`: display form.
    Display,
    /// `!r`: quoted representation.
    Repr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldRef,
    pub conversion: Option<Conversion>,
    /// Raw spec text, possibly containing nested fields.
    pub spec: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

/// Split a template into literal and field segments.
pub fn parse(template: &str) -> Result<Vec<Segment>, FormatError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if chars.peek().map(|(_, c)| *c) == Some('{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek().map(|(_, c)| *c) == Some('}') => {
                chars.next();
                literal.push('}');
            }
            '}' => {
                return Err(FormatError::UnmatchedBrace {
                    brace: '}',
                    position: pos,
                })
            }
            '{' => {
                let mut depth = 1;
                let mut body = String::new();
                loop {
                    let Some((_, c)) = chars.next() else {
                        return Err(FormatError::UnclosedField);
                    };
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    body.push(c);
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(parse_field(&body)?));
            }
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_field(body: &str) -> Result<Field, FormatError> {
    let name_end = body.find(['!', ':']).unwrap_or(body.len());
    let (name, rest) = body.split_at(name_end);

    let (conversion, spec) = match rest.strip_prefix('!') {
        Some(after) => {
            let mut it = after.chars();
            let conversion = match it.next() {
                Some('s') => Conversion::Display,
                Some('r') => Conversion::Repr,
                Some(other) => return Err(FormatError::UnknownConversion(other.to_string())),
                None => return Err(FormatError::UnknownConversion(String::new())),
            };
            let remainder = it.as_str();
            let spec = match remainder.strip_prefix(':') {
                Some(spec) => spec,
                None if remainder.is_empty() => "",
                None => return Err(FormatError::UnknownConversion(after.to_string())),
            };
            (Some(conversion), spec)
        }
        None => (None, rest.strip_prefix(':').unwrap_or(rest)),
    };

    Ok(Field {
        name: parse_field_ref(name)?,
        conversion,
        spec: spec.to_string(),
    })
}

fn parse_field_ref(name: &str) -> Result<FieldRef, FormatError> {
    if name.is_empty() {
        return Ok(FieldRef::Auto);
    }
    if name.contains(['.', '[', '{', '}']) {
        return Err(FormatError::UnsupportedFieldName(name.to_string()));
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return name
            .parse()
            .map(FieldRef::Index)
            .map_err(|_| FormatError::UnsupportedFieldName(name.to_string()));
    }
    Ok(FieldRef::Name(name.to_string()))
}
