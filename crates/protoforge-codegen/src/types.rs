//! Type mapping from abstract field types to C representations
//!
//! Consulted by both the structure emitter (declarations) and the codec
//! emitter (format specifiers). Unknown tags were already folded into
//! [`FieldType::Opaque`] by the parser; the opaque representation is an
//! untyped handle the codec neither writes nor reads.

use protoforge_core::FieldType;

/// Type mapping from field type to C
struct TypeMapping {
    field_type: FieldType,
    c_type: &'static str,
    /// `printf` specifier for the encoder, `None` when the type is not
    /// carried on the wire.
    format_spec: Option<&'static str>,
}

const TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        field_type: FieldType::String,
        c_type: "const char*",
        format_spec: Some("%s"),
    },
    TypeMapping {
        field_type: FieldType::Int,
        c_type: "int32_t",
        format_spec: Some("%d"),
    },
    TypeMapping {
        field_type: FieldType::Opaque,
        c_type: "void*",
        format_spec: None,
    },
];

fn mapping(ty: FieldType) -> &'static TypeMapping {
    #[allow(clippy::unwrap_used)] // Safe: the table covers every FieldType variant
    let entry = TYPE_MAPPINGS.iter().find(|m| m.field_type == ty).unwrap();
    entry
}

/// C declaration type for a field.
pub fn c_type(ty: FieldType) -> &'static str {
    mapping(ty).c_type
}

/// Encoder format specifier for a field, `None` for opaque fields.
pub fn format_spec(ty: FieldType) -> Option<&'static str> {
    mapping(ty).format_spec
}
