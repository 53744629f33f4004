//! Structure emitter: the guarded declarations header
//!
//! One `typedef struct` per message (fields in source order) plus the
//! encode/decode/free declaration triad per message, wrapped in the
//! caller-supplied include guard. Pure function, no filesystem access.

use crate::types::c_type;
use protoforge_core::Schema;

/// Generate the declarations header for a schema.
///
/// The guard token comes from the naming strategy; repeated inclusion of
/// the emitted unit is safe.
pub fn generate_header(schema: &Schema, guard: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("#ifndef {guard}\n"));
    output.push_str(&format!("#define {guard}\n\n"));
    output.push_str("#include <stddef.h>\n");
    output.push_str("#include <stdint.h>\n\n");

    for msg in schema {
        output.push_str(&format!("/* {} message structure */\n", msg.name));
        output.push_str("typedef struct {\n");
        for field in &msg.fields {
            output.push_str(&format!("    {} {};\n", c_type(field.ty), field.name));
        }
        output.push_str(&format!("}} {};\n\n", msg.name));
    }

    output.push_str("/* Encode/decode function declarations */\n");
    for msg in schema {
        let name = &msg.name;
        output.push_str(&format!(
            "char* encode_{name}(const {name}* msg, size_t* out_len);\n"
        ));
        output.push_str(&format!(
            "{name}* decode_{name}(const char* data, size_t len);\n"
        ));
        output.push_str(&format!("void free_{name}({name}* msg);\n"));
    }

    output.push_str(&format!("\n#endif /* {guard} */\n"));
    output
}
