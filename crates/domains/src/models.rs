//! # Domain Models
//!
//! The liveblog post entity and its reference types. A post always belongs to
//! exactly one parent stream and carries exactly one authorship relation;
//! "owner" and "author" are two accessor names over that single relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::schema;

/// Kinds of records the post can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// The parent liveblog container (a "liveblog" node in the original deployment).
    Stream,
    /// A user account.
    Actor,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Stream => write!(f, "stream"),
            RecordKind::Actor => write!(f, "actor"),
        }
    }
}

/// Reference to the parent stream. Carries the stored identifier only;
/// resolving the full record is the storage collaborator's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRef {
    pub target_id: i64,
}

impl StreamRef {
    pub fn new(target_id: i64) -> Self {
        Self { target_id }
    }
}

/// The single authorship relation. The display name is captured alongside the
/// id so the payload can report it without a second resolution round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: i64,
    pub display_name: Option<String>,
}

impl ActorRef {
    pub fn new(id: i64) -> Self {
        Self { id, display_name: None }
    }

    pub fn named(id: i64, display_name: &str) -> Self {
        Self {
            id,
            display_name: Some(display_name.to_string()),
        }
    }
}

/// Optional external source link: a URI plus a human-readable title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub uri: String,
    pub title: String,
}

/// Partial value set accepted by the creation operation. Anything left `None`
/// is either filled from a schema default rule or rejected as missing.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    pub highlight: Option<String>,
    pub source: Option<SourceLink>,
    pub location: Option<String>,
    pub stream: Option<StreamRef>,
    pub author: Option<ActorRef>,
    pub published: Option<bool>,
}

impl PostDraft {
    /// Checks the required-field invariants without constructing an instance.
    pub fn check_required(&self) -> Result<(), ValidationError> {
        match first_missing(
            self.title.as_deref(),
            self.body.as_deref(),
            self.stream.is_some(),
            self.author.is_some(),
        ) {
            Some(name) => Err(ValidationError::MissingRequired(name)),
            None => Ok(()),
        }
    }
}

/// Full value set for constructing an instance, either at creation (after
/// defaulting and identity assignment) or when rehydrating a stored row.
#[derive(Debug, Clone)]
pub struct PostParts {
    pub id: i64,
    pub uuid: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub highlight: String,
    pub source: Option<SourceLink>,
    pub location: Option<String>,
    pub stream: Option<StreamRef>,
    pub author: Option<ActorRef>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One liveblog post. Fields are private so `id`/`uuid` stay write-once and
/// every mutation goes through a setter that touches `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveblogPost {
    id: i64,
    uuid: Uuid,
    title: String,
    body: String,
    highlight: String,
    source: Option<SourceLink>,
    location: Option<String>,
    stream: StreamRef,
    author: ActorRef,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LiveblogPost {
    /// Validating constructor. Every construction path funnels through here so
    /// the required-field and length invariants hold for every live instance.
    ///
    /// A stored row whose `updated_at` predates `created_at` is clamped rather
    /// than rejected; the next mutation re-establishes a real timestamp.
    pub fn from_parts(parts: PostParts) -> Result<Self, ValidationError> {
        if let Some(name) = first_missing(
            parts.title.as_deref(),
            parts.body.as_deref(),
            parts.stream.is_some(),
            parts.author.is_some(),
        ) {
            return Err(ValidationError::MissingRequired(name));
        }

        let title = parts.title.unwrap_or_default();
        for field in schema::post_fields() {
            let Some(max) = field.max_length else { continue };
            let value = match field.name {
                "title" => Some(title.as_str()),
                "location" => parts.location.as_deref(),
                _ => None,
            };
            if value.is_some_and(|v| v.chars().count() > max) {
                return Err(ValidationError::TooLong { field: field.name, max });
            }
        }

        Ok(Self {
            id: parts.id,
            uuid: parts.uuid,
            title,
            body: parts.body.unwrap_or_default(),
            highlight: parts.highlight,
            source: parts.source,
            location: parts.location,
            stream: parts.stream.unwrap_or(StreamRef::new(0)),
            author: parts.author.unwrap_or(ActorRef::new(0)),
            published: parts.published,
            created_at: parts.created_at,
            updated_at: parts.updated_at.max(parts.created_at),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    pub fn source(&self) -> Option<&SourceLink> {
        self.source.as_ref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn stream(&self) -> StreamRef {
        self.stream
    }

    /// The stored identifier of the parent stream, without resolving the
    /// full record.
    pub fn stream_id(&self) -> i64 {
        self.stream.target_id
    }

    pub fn author(&self) -> &ActorRef {
        &self.author
    }

    /// Same relation as [`author`](Self::author), under its other name.
    pub fn owner(&self) -> &ActorRef {
        &self.author
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_author(&mut self, actor: ActorRef) -> &mut Self {
        self.author = actor;
        self.touch();
        self
    }

    /// Writes the same relation as [`set_author`](Self::set_author).
    pub fn set_owner(&mut self, actor: ActorRef) -> &mut Self {
        self.set_author(actor)
    }

    /// Plain reference write. The kind check against the referenced record
    /// lives in the service operation fronting this setter.
    pub fn set_stream(&mut self, stream: StreamRef) -> &mut Self {
        self.stream = stream;
        self.touch();
        self
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// First required field (per the schema table) that is absent or empty.
fn first_missing(
    title: Option<&str>,
    body: Option<&str>,
    has_stream: bool,
    has_author: bool,
) -> Option<&'static str> {
    for field in schema::required_fields() {
        let missing = match field.name {
            "title" => title.map_or(true, str::is_empty),
            "body" => body.map_or(true, str::is_empty),
            "liveblog" => !has_stream,
            "uid" => !has_author,
            _ => false,
        };
        if missing {
            return Some(field.name);
        }
    }
    None
}
