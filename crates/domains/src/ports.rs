//! # Collaborator Ports
//!
//! Abstract contracts for the collaborators this core consumes. Hosts plug in
//! their own implementations; tests use the `Mock*` types exposed behind the
//! `testing` feature.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::models::{LiveblogPost, RecordKind};

/// Opaque display-fragment map produced by the rendering collaborator, keyed
/// by field/region name. This core never inspects how it was built.
pub type RenderedOutput = Map<String, Value>;

/// Minimal view of a resolved record: enough to check its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordStub {
    pub id: i64,
    pub kind: RecordKind,
}

/// Persistence contract. Assigns identities on first persist and resolves
/// record references; everything else about storage is out of scope here.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Hands out the storage identifier for a post about to be persisted.
    async fn assign_identity(&self) -> anyhow::Result<i64>;

    /// Resolves a referenced record, or `None` when it does not exist.
    async fn resolve_reference(
        &self,
        kind: RecordKind,
        id: i64,
    ) -> anyhow::Result<Option<RecordStub>>;
}

/// Rendering contract. May fail; the payload projector wraps the failure
/// instead of recovering partially.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, post: &LiveblogPost) -> anyhow::Result<RenderedOutput>;
}

/// Supplies the controlled vocabulary of highlight classifications.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait HighlightVocabulary: Send + Sync {
    fn is_valid_highlight(&self, value: &str) -> bool;
}
