//! Reference implementation of the delimited wire format
//!
//! `<message-name> '|' field_1 '|' ... '|' field_n` — every written token,
//! including the leading message name, is followed by the delimiter. String
//! fields are written verbatim with no escaping, integers in decimal, and
//! opaque fields write nothing (the decoder still consumes one token slot
//! for them). The generated C routines implement exactly these semantics;
//! this module is the executable reference they are tested against.
//!
//! Absent vs. empty: an absent string field is a *missing* token (input ran
//! out), an empty string field is a *present* empty token. The final empty
//! segment after the trailing delimiter is the encoding's terminator, not a
//! token. An embedded delimiter inside a string field corrupts decoding —
//! a known representational limitation of the format.

use crate::schema::{FieldType, MessageSpec};

/// Token separator of the wire format.
pub const DELIMITER: char = '|';

/// A decoded field slot.
///
/// String ownership is explicit: `Str(None)` is an absent field,
/// `Str(Some(String))` owns its decoded text outright. Dropping the value
/// reclaims exactly that ownership, so the release contract of the wire
/// format is enforced at compile time here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(Option<String>),
    Int(i32),
    /// Placeholder for fields of unrecognized type; carries no data.
    Opaque,
}

impl FieldValue {
    /// The default slot value for a field type: absent string, zero int.
    pub fn default_for(ty: FieldType) -> Self {
        match ty {
            FieldType::String => FieldValue::Str(None),
            FieldType::Int => FieldValue::Int(0),
            FieldType::Opaque => FieldValue::Opaque,
        }
    }
}

/// One message instance, with one slot per declared field in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageValue {
    pub name: String,
    pub values: Vec<FieldValue>,
}

impl MessageValue {
    pub fn new(name: impl Into<String>, values: Vec<FieldValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A message instance with every field at its default value.
    pub fn empty(spec: &MessageSpec) -> Self {
        Self {
            name: spec.name.clone(),
            values: spec
                .fields
                .iter()
                .map(|f| FieldValue::default_for(f.ty))
                .collect(),
        }
    }
}

/// Encode a message instance against its spec.
///
/// Missing or type-mismatched slots encode as the field's default form, so
/// the output shape always matches the spec.
pub fn encode(spec: &MessageSpec, msg: &MessageValue) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(&spec.name);
    out.push(DELIMITER);

    for (idx, field) in spec.fields.iter().enumerate() {
        let value = msg.values.get(idx);
        match (field.ty, value) {
            (FieldType::String, Some(FieldValue::Str(s))) => {
                out.push_str(s.as_deref().unwrap_or(""));
                out.push(DELIMITER);
            }
            (FieldType::String, _) => out.push(DELIMITER),
            (FieldType::Int, Some(FieldValue::Int(i))) => {
                out.push_str(&i.to_string());
                out.push(DELIMITER);
            }
            (FieldType::Int, _) => {
                out.push('0');
                out.push(DELIMITER);
            }
            (FieldType::Opaque, _) => {}
        }
    }

    out
}

/// Decode a wire encoding against a message spec.
///
/// Returns `None` only for empty input or a leading token that is not
/// exactly the spec's message name; nothing is built in that case. Too few
/// tokens never fail — remaining fields take their defaults — and excess
/// tokens are ignored.
pub fn decode(spec: &MessageSpec, data: &str) -> Option<MessageValue> {
    if data.is_empty() {
        return None;
    }

    let mut tokens: Vec<&str> = data.split(DELIMITER).collect();
    // The final empty segment after a trailing delimiter is the terminator,
    // not an empty token.
    if data.ends_with(DELIMITER) {
        tokens.pop();
    }

    let mut iter = tokens.into_iter();
    if iter.next()? != spec.name {
        return None;
    }

    let values = spec
        .fields
        .iter()
        .map(|field| {
            let token = iter.next();
            match field.ty {
                FieldType::String => FieldValue::Str(token.map(str::to_string)),
                FieldType::Int => {
                    FieldValue::Int(token.and_then(|t| t.parse().ok()).unwrap_or(0))
                }
                FieldType::Opaque => FieldValue::Opaque,
            }
        })
        .collect();

    Some(MessageValue {
        name: spec.name.clone(),
        values,
    })
}
