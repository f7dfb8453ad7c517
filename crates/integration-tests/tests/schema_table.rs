//! Contract tests for the field schema table consumed by defaulting,
//! validation, and (in a host) storage/form generation.

use domains::error::SchemaError;
use domains::models::RecordKind;
use domains::schema::{self, FieldDefault, FieldKind};

#[test]
fn every_payload_backed_field_is_described() {
    for name in [
        "id", "uuid", "title", "body", "highlight", "source", "location",
        "liveblog", "uid", "status", "created", "changed",
    ] {
        assert!(schema::field(name).is_ok(), "`{name}` missing from the table");
    }
}

#[test]
fn reference_fields_declare_their_target_kind() {
    assert_eq!(
        schema::field("liveblog").unwrap().kind,
        FieldKind::EntityRef(RecordKind::Stream)
    );
    assert_eq!(
        schema::field("uid").unwrap().kind,
        FieldKind::EntityRef(RecordKind::Actor)
    );
}

#[test]
fn creation_defaults_are_declared_as_rules() {
    assert_eq!(schema::field("uid").unwrap().default, Some(FieldDefault::ActingUser));
    assert_eq!(schema::field("status").unwrap().default, Some(FieldDefault::Bool(true)));
    assert_eq!(schema::field("highlight").unwrap().default, Some(FieldDefault::Text("")));
    assert_eq!(schema::field("created").unwrap().default, Some(FieldDefault::Now));
    assert_eq!(schema::field("changed").unwrap().default, Some(FieldDefault::Now));
}

#[test]
fn unknown_fields_fail_fast() {
    assert!(matches!(
        schema::field("attachment"),
        Err(SchemaError::UnknownField(_))
    ));
}

#[test]
fn identity_fields_are_read_only_and_never_required() {
    for name in ["id", "uuid"] {
        let descriptor = schema::field(name).unwrap();
        assert!(descriptor.read_only);
        assert!(!descriptor.required);
        assert!(!descriptor.display_configurable);
    }
}
