//! In-memory schema types
//!
//! A [`Schema`] is the full parsed set of message definitions from a spec
//! source. It is built once per run, immutable after parsing, and owns no
//! resources beyond its text.

/// Abstract field type tag from the spec source.
///
/// Unrecognized tags degrade to [`FieldType::Opaque`] rather than aborting
/// generation: the field stays present in the structure but is unusable by
/// the codec. This is a compatibility escape hatch for future type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Owned text; `string` in the spec source.
    String,
    /// Fixed-width signed integer; `int` in the spec source.
    Int,
    /// Fallback for any other tag.
    Opaque,
}

impl FieldType {
    /// Map a spec type tag to a field type. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => FieldType::String,
            "int" => FieldType::Int,
            _ => FieldType::Opaque,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Int => write!(f, "int"),
            FieldType::Opaque => write!(f, "opaque"),
        }
    }
}

/// One field declared in a message.
///
/// Field order is significant and preserved from source order. Field-name
/// uniqueness within a message is not enforced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: FieldType,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One message declared in the schema, owning its fields exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl MessageSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Ordered sequence of message definitions, insertion order = declaration
/// order in source. Order determines emission order but has no bearing on
/// the correctness of any individual message's codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    messages: Vec<MessageSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized message, preserving declaration order.
    pub fn push(&mut self, message: MessageSpec) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[MessageSpec] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Look up a message by name (first declaration wins).
    pub fn get(&self, name: &str) -> Option<&MessageSpec> {
        self.messages.iter().find(|m| m.name == name)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a MessageSpec;
    type IntoIter = std::slice::Iter<'a, MessageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
