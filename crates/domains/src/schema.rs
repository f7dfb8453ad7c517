//! # Field Schema
//!
//! A process-wide, immutable table describing every attribute of the liveblog
//! post entity: semantic kind, required/read-only flags, defaults, and display
//! configurability. Validation and creation-time defaulting consume this table;
//! it carries no UI concern beyond the plain `display_configurable` flag.

use once_cell::sync::Lazy;

use crate::error::SchemaError;
use crate::models::RecordKind;

/// Semantic kinds a post field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Storage-assigned identifier, write-once.
    Id,
    /// Globally unique id, assigned once at creation.
    Uuid,
    /// Short plain text.
    Text,
    /// Long text that may contain formatted content.
    LongText,
    /// One value from an externally supplied vocabulary.
    Select,
    /// URI plus title pair.
    Link,
    /// Reference to exactly one record of the given kind.
    EntityRef(RecordKind),
    Bool,
    /// Creation timestamp, set once.
    Created,
    /// Modification timestamp, touched on every mutation.
    Changed,
}

/// Default-value rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Bool(bool),
    /// Current time at creation.
    Now,
    /// The acting identity passed into the creation operation.
    ActingUser,
}

/// Describes one attribute of the post entity.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub read_only: bool,
    pub max_length: Option<usize>,
    pub default: Option<FieldDefault>,
    pub display_configurable: bool,
}

impl FieldDescriptor {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            read_only: false,
            max_length: None,
            default: None,
            display_configurable: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Write-once: set by the creation path, never reassigned.
    fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn default_value(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    fn display_configurable(mut self) -> Self {
        self.display_configurable = true;
        self
    }
}

static POST_FIELDS: Lazy<Vec<FieldDescriptor>> = Lazy::new(|| {
    vec![
        FieldDescriptor::new("id", FieldKind::Id).read_only(),
        FieldDescriptor::new("uuid", FieldKind::Uuid).read_only(),
        FieldDescriptor::new("title", FieldKind::Text)
            .required()
            .max_length(255)
            .default_value(FieldDefault::Text(""))
            .display_configurable(),
        FieldDescriptor::new("body", FieldKind::LongText)
            .required()
            .display_configurable(),
        FieldDescriptor::new("highlight", FieldKind::Select)
            .default_value(FieldDefault::Text(""))
            .display_configurable(),
        FieldDescriptor::new("source", FieldKind::Link).display_configurable(),
        FieldDescriptor::new("location", FieldKind::Text).display_configurable(),
        FieldDescriptor::new("liveblog", FieldKind::EntityRef(RecordKind::Stream))
            .required()
            .display_configurable(),
        FieldDescriptor::new("uid", FieldKind::EntityRef(RecordKind::Actor))
            .required()
            .default_value(FieldDefault::ActingUser)
            .display_configurable(),
        FieldDescriptor::new("status", FieldKind::Bool)
            .default_value(FieldDefault::Bool(true))
            .display_configurable(),
        FieldDescriptor::new("created", FieldKind::Created)
            .read_only()
            .default_value(FieldDefault::Now)
            .display_configurable(),
        FieldDescriptor::new("changed", FieldKind::Changed)
            .default_value(FieldDefault::Now)
            .display_configurable(),
    ]
});

/// The full field table, in declaration order.
pub fn post_fields() -> &'static [FieldDescriptor] {
    &POST_FIELDS
}

/// Looks up a single descriptor. An unknown name is a programming error and
/// fails fast rather than being papered over.
pub fn field(name: &str) -> Result<&'static FieldDescriptor, SchemaError> {
    POST_FIELDS
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| SchemaError::UnknownField(name.to_string()))
}

/// Fields that must be non-empty before an instance is considered valid.
pub fn required_fields() -> impl Iterator<Item = &'static FieldDescriptor> {
    POST_FIELDS.iter().filter(|f| f.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_descriptor_matches_storage_constraints() {
        let title = field("title").unwrap();
        assert!(title.required);
        assert_eq!(title.max_length, Some(255));
        assert!(title.display_configurable);
        assert!(!title.read_only);
    }

    #[test]
    fn identity_fields_are_write_once() {
        assert!(field("id").unwrap().read_only);
        assert!(field("uuid").unwrap().read_only);
    }

    #[test]
    fn unknown_field_fails_fast() {
        let err = field("tripcode").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField(name) if name == "tripcode"));
    }

    #[test]
    fn required_set_is_exactly_the_persistable_invariant() {
        let names: Vec<_> = required_fields().map(|f| f.name).collect();
        assert_eq!(names, ["title", "body", "liveblog", "uid"]);
    }

    #[test]
    fn defaults_cover_the_creation_rules() {
        assert_eq!(field("status").unwrap().default, Some(FieldDefault::Bool(true)));
        assert_eq!(field("uid").unwrap().default, Some(FieldDefault::ActingUser));
        assert_eq!(field("highlight").unwrap().default, Some(FieldDefault::Text("")));
        assert_eq!(field("created").unwrap().default, Some(FieldDefault::Now));
    }
}
