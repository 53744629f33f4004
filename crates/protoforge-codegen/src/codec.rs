//! Codec emitter: per-message encode, decode, and free routines
//!
//! Each routine is an independent C compilation unit including only the
//! generated declarations header.
//!
//! The encoder sizes its output with a `snprintf(NULL, 0, ...)` pass and
//! writes into an exactly-sized heap buffer, so encoding never truncates
//! regardless of field contents. The decoder splits on the delimiter with
//! a helper that preserves empty tokens and treats the final empty
//! remainder as the encoding's terminator: an absent field is a missing
//! token, an empty string field is a present empty token. Too few tokens
//! never fail decoding — remaining fields take their defaults.

use crate::types::format_spec;
use protoforge_core::{FieldType, MessageSpec};

/// Emit the encoder unit for one message.
pub fn generate_encoder(message: &MessageSpec, header_name: &str) -> String {
    let name = &message.name;

    // One printf format string covers the whole message: the name token,
    // then %d| / %s| per carried field. Opaque fields write nothing.
    let mut format = format!("{name}|");
    let mut args: Vec<String> = Vec::new();
    for field in &message.fields {
        if let Some(spec) = format_spec(field.ty) {
            format.push_str(spec);
            format.push('|');
            args.push(match field.ty {
                FieldType::String => format!("msg->{0} ? msg->{0} : \"\"", field.name),
                _ => format!("msg->{}", field.name),
            });
        }
    }
    let arg_list = if args.is_empty() {
        String::new()
    } else {
        format!(",\n        {}", args.join(",\n        "))
    };

    let mut code = String::new();
    code.push_str(&format!("#include \"{header_name}\"\n"));
    code.push_str("#include <stdio.h>\n");
    code.push_str("#include <stdlib.h>\n\n");
    code.push_str(&format!(
        "char* encode_{name}(const {name}* msg, size_t* out_len) {{\n"
    ));
    code.push_str("    if (!msg || !out_len) return NULL;\n\n");
    code.push_str("    /* One sizing pass, then one write into an exactly-sized buffer. */\n");
    code.push_str(&format!(
        "    int needed = snprintf(NULL, 0, \"{format}\"{arg_list});\n"
    ));
    code.push_str("    if (needed < 0) return NULL;\n\n");
    code.push_str("    char* result = (char*)malloc((size_t)needed + 1);\n");
    code.push_str("    if (!result) return NULL;\n");
    code.push_str(&format!(
        "    snprintf(result, (size_t)needed + 1, \"{format}\"{arg_list});\n"
    ));
    code.push_str("\n    *out_len = (size_t)needed;\n");
    code.push_str("    return result;\n");
    code.push_str("}\n");
    code
}

/// Emit the decoder unit for one message.
pub fn generate_decoder(message: &MessageSpec, header_name: &str) -> String {
    let name = &message.name;

    let mut code = String::new();
    code.push_str(&format!("#include \"{header_name}\"\n"));
    code.push_str("#include <stdlib.h>\n");
    code.push_str("#include <string.h>\n\n");
    code.push_str(
        "/* Advance past the next '|' and return the token before it. A final\n \
         * empty remainder is the terminator written by the encoder, not a token. */\n",
    );
    code.push_str("static char* split_next(char** cursor) {\n");
    code.push_str("    char* start = *cursor;\n");
    code.push_str("    if (!start) return NULL;\n");
    code.push_str("    char* sep = strchr(start, '|');\n");
    code.push_str("    if (sep) {\n");
    code.push_str("        *sep = '\\0';\n");
    code.push_str("        *cursor = sep + 1;\n");
    code.push_str("        return start;\n");
    code.push_str("    }\n");
    code.push_str("    *cursor = NULL;\n");
    code.push_str("    return *start ? start : NULL;\n");
    code.push_str("}\n\n");
    code.push_str(&format!(
        "{name}* decode_{name}(const char* data, size_t len) {{\n"
    ));
    code.push_str("    if (!data || len == 0) return NULL;\n\n");
    code.push_str("    char* copy = strndup(data, len);\n");
    code.push_str("    if (!copy) return NULL;\n");
    code.push_str("    char* cursor = copy;\n\n");
    code.push_str("    char* token = split_next(&cursor);\n");
    code.push_str(&format!(
        "    if (!token || strcmp(token, \"{name}\") != 0) {{\n"
    ));
    code.push_str("        free(copy);\n");
    code.push_str("        return NULL;\n");
    code.push_str("    }\n\n");
    code.push_str(&format!("    {name}* msg = ({name}*)calloc(1, sizeof({name}));\n"));
    code.push_str("    if (!msg) {\n");
    code.push_str("        free(copy);\n");
    code.push_str("        return NULL;\n");
    code.push_str("    }\n\n");

    for field in &message.fields {
        code.push_str("    token = split_next(&cursor);\n");
        match field.ty {
            FieldType::String => code.push_str(&format!(
                "    msg->{} = token ? strdup(token) : NULL;\n\n",
                field.name
            )),
            FieldType::Int => code.push_str(&format!(
                "    msg->{} = token ? atoi(token) : 0;\n\n",
                field.name
            )),
            FieldType::Opaque => code.push_str(&format!(
                "    msg->{} = NULL; /* opaque: token slot consumed, no data carried */\n\n",
                field.name
            )),
        }
    }

    code.push_str("    free(copy);\n");
    code.push_str("    return msg;\n");
    code.push_str("}\n");
    code
}

/// Emit the free unit for one message.
///
/// Frees exactly the string fields the decoder allocated, then the message
/// itself. Null argument is a no-op; int and opaque fields own nothing.
pub fn generate_free(message: &MessageSpec, header_name: &str) -> String {
    let name = &message.name;

    let mut code = String::new();
    code.push_str(&format!("#include \"{header_name}\"\n"));
    code.push_str("#include <stdlib.h>\n\n");
    code.push_str(&format!("void free_{name}({name}* msg) {{\n"));
    code.push_str("    if (!msg) return;\n\n");
    for field in &message.fields {
        if field.ty == FieldType::String {
            code.push_str(&format!(
                "    if (msg->{0}) free((void*)msg->{0});\n",
                field.name
            ));
        }
    }
    code.push_str("    free(msg);\n");
    code.push_str("}\n");
    code
}

#[cfg(test)]
#[path = "codec/codec_tests.rs"]
mod codec_tests;
