//! # Post Lifecycle
//!
//! Creation-time defaulting and the reference mutators whose invariants need a
//! storage round-trip. Plain field reads and the author/owner setters live on
//! the entity itself; this service fronts the operations that consult
//! collaborators.

use chrono::Utc;
use uuid::Uuid;

use domains::error::{PostError, ValidationError};
use domains::models::{ActorRef, LiveblogPost, PostDraft, PostParts, RecordKind, StreamRef};
use domains::ports::{HighlightVocabulary, PostStore};
use domains::schema::{self, FieldDefault};

pub struct PostService {
    store: Box<dyn PostStore>,
    vocabulary: Box<dyn HighlightVocabulary>,
}

impl PostService {
    pub fn new(store: Box<dyn PostStore>, vocabulary: Box<dyn HighlightVocabulary>) -> Self {
        Self { store, vocabulary }
    }

    /// Creates a post from a partial value set.
    ///
    /// The acting identity is an explicit parameter: any field with a default
    /// rule that the draft left unset is filled from the schema table (which
    /// is where "absent author becomes the acting user" is written down),
    /// then the required-field, vocabulary, and stream-kind invariants are
    /// checked before an identity is assigned.
    pub async fn create(
        &self,
        mut draft: PostDraft,
        acting: ActorRef,
    ) -> Result<LiveblogPost, PostError> {
        // 1. Schema-driven defaulting.
        for field in schema::post_fields() {
            let Some(default) = field.default else { continue };
            match (field.name, default) {
                ("highlight", FieldDefault::Text(value)) => {
                    draft.highlight.get_or_insert_with(|| value.to_string());
                }
                ("status", FieldDefault::Bool(value)) => {
                    draft.published.get_or_insert(value);
                }
                ("uid", FieldDefault::ActingUser) => {
                    draft.author.get_or_insert_with(|| acting.clone());
                }
                // `created`/`changed` are handled below with one shared `now`;
                // the title storage default is not a creation-time fill.
                _ => {}
            }
        }

        // 2. Required fields must survive defaulting.
        if let Err(err) = draft.check_required() {
            tracing::warn!(%err, "rejected post draft");
            return Err(err.into());
        }

        // 3. A non-empty highlight must come from the configured vocabulary.
        if let Some(term) = draft.highlight.as_deref() {
            if !term.is_empty() && !self.vocabulary.is_valid_highlight(term) {
                return Err(ValidationError::InvalidHighlight(term.to_string()).into());
            }
        }

        // 4. The parent reference must resolve to a stream-kind record.
        if let Some(stream) = draft.stream {
            self.check_stream(stream).await?;
        }

        // 5. Identity and timestamps, then the validating constructor.
        let id = self.store.assign_identity().await.map_err(PostError::Storage)?;
        let now = Utc::now();
        let post = LiveblogPost::from_parts(PostParts {
            id,
            uuid: Uuid::new_v4(),
            title: draft.title,
            body: draft.body,
            highlight: draft.highlight.unwrap_or_default(),
            source: draft.source,
            location: draft.location,
            stream: draft.stream,
            author: draft.author,
            published: draft.published.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })?;

        tracing::debug!(id = post.id(), stream = post.stream_id(), "created liveblog post");
        Ok(post)
    }

    /// Re-parents a post. Fails without touching the instance when the target
    /// does not resolve to a stream-kind record.
    pub async fn set_stream(
        &self,
        post: &mut LiveblogPost,
        stream: StreamRef,
    ) -> Result<(), PostError> {
        self.check_stream(stream).await?;
        post.set_stream(stream);
        tracing::debug!(id = post.id(), stream = stream.target_id, "re-parented post");
        Ok(())
    }

    async fn check_stream(&self, stream: StreamRef) -> Result<(), PostError> {
        let record = self
            .store
            .resolve_reference(RecordKind::Stream, stream.target_id)
            .await
            .map_err(PostError::Storage)?;
        match record {
            Some(stub) if stub.kind == RecordKind::Stream => Ok(()),
            Some(_) => Err(ValidationError::InvalidReferenceKind {
                field: "liveblog",
                expected: RecordKind::Stream,
            }
            .into()),
            None => Err(ValidationError::UnknownReference {
                kind: RecordKind::Stream,
                id: stream.target_id,
            }
            .into()),
        }
    }
}
