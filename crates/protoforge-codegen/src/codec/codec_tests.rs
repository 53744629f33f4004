#![allow(non_snake_case)]

use super::*;
use protoforge_core::FieldSpec;

const HEADER: &str = "protocol_ab12cd34.h";

fn ping() -> MessageSpec {
    MessageSpec::with_fields(
        "Ping",
        vec![
            FieldSpec::new("id", FieldType::Int),
            FieldSpec::new("note", FieldType::String),
        ],
    )
}

#[test]
fn generate_encoder___ping___emits_expected_unit() {
    let code = generate_encoder(&ping(), HEADER);

    let expected = r#"#include "protocol_ab12cd34.h"
#include <stdio.h>
#include <stdlib.h>

char* encode_Ping(const Ping* msg, size_t* out_len) {
    if (!msg || !out_len) return NULL;

    /* One sizing pass, then one write into an exactly-sized buffer. */
    int needed = snprintf(NULL, 0, "Ping|%d|%s|",
        msg->id,
        msg->note ? msg->note : "");
    if (needed < 0) return NULL;

    char* result = (char*)malloc((size_t)needed + 1);
    if (!result) return NULL;
    snprintf(result, (size_t)needed + 1, "Ping|%d|%s|",
        msg->id,
        msg->note ? msg->note : "");

    *out_len = (size_t)needed;
    return result;
}
"#;
    assert_eq!(code, expected);
}

#[test]
fn generate_encoder___format_string___matches_wire_encoding_shape() {
    // "Ping|7|hi|": name token plus one delimiter-terminated token per
    // carried field.
    let code = generate_encoder(&ping(), HEADER);

    assert!(code.contains(r#""Ping|%d|%s|""#));
}

#[test]
fn generate_encoder___no_carried_fields___calls_snprintf_without_varargs() {
    let msg = MessageSpec::with_fields("M", vec![FieldSpec::new("blob", FieldType::Opaque)]);

    let code = generate_encoder(&msg, HEADER);

    assert!(code.contains(r#"snprintf(NULL, 0, "M|");"#));
}

#[test]
fn generate_encoder___null_guard___checks_both_arguments() {
    let code = generate_encoder(&ping(), HEADER);

    assert!(code.contains("if (!msg || !out_len) return NULL;"));
}

#[test]
fn generate_decoder___name_guard___rejects_before_allocating() {
    let code = generate_decoder(&ping(), HEADER);

    let guard = code
        .find(r#"strcmp(token, "Ping") != 0"#)
        .expect("decoder must compare the leading token");
    let alloc = code
        .find("calloc(1, sizeof(Ping))")
        .expect("decoder must allocate the struct");
    assert!(guard < alloc, "name check must precede allocation");
}

#[test]
fn generate_decoder___field_kinds___take_lenient_defaults() {
    let code = generate_decoder(&ping(), HEADER);

    assert!(code.contains("msg->id = token ? atoi(token) : 0;"));
    assert!(code.contains("msg->note = token ? strdup(token) : NULL;"));
}

#[test]
fn generate_decoder___consumes_one_token_per_field() {
    let code = generate_decoder(&ping(), HEADER);

    // One call for the name plus one per field.
    let calls = code.matches("split_next(&cursor);").count();
    assert_eq!(calls, 1 + ping().fields.len());
}

#[test]
fn generate_decoder___opaque_field___consumes_token_and_stays_null() {
    let msg = MessageSpec::with_fields(
        "M",
        vec![
            FieldSpec::new("blob", FieldType::Opaque),
            FieldSpec::new("id", FieldType::Int),
        ],
    );

    let code = generate_decoder(&msg, HEADER);

    assert!(code.contains("msg->blob = NULL;"));
    assert_eq!(code.matches("split_next(&cursor);").count(), 3);
}

#[test]
fn generate_decoder___includes_generated_header() {
    let code = generate_decoder(&ping(), HEADER);

    assert!(code.starts_with(&format!("#include \"{HEADER}\"\n")));
}

#[test]
fn generate_free___ping___frees_only_string_fields_then_message() {
    let code = generate_free(&ping(), HEADER);

    assert!(code.contains("if (!msg) return;"));
    assert!(code.contains("if (msg->note) free((void*)msg->note);"));
    assert!(!code.contains("msg->id) free"), "int fields own nothing");

    let field_free = code.find("free((void*)msg->note)").unwrap();
    let msg_free = code.rfind("free(msg);").unwrap();
    assert!(field_free < msg_free, "fields are freed before the message");
}

#[test]
fn generate_free___no_string_fields___frees_message_only() {
    let msg = MessageSpec::with_fields("Counter", vec![FieldSpec::new("n", FieldType::Int)]);

    let code = generate_free(&msg, HEADER);

    assert_eq!(code.matches("free(").count(), 1);
    assert!(code.contains("    free(msg);\n"));
}
