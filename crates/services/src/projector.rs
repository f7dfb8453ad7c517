//! # Payload Projection
//!
//! Assembles the flattened map external consumers read: an explicit list of
//! raw attribute values merged with the renderer's display fragments. Raw
//! values are authoritative and always win on key collision; rendered output
//! only fills the gaps.

use serde_json::{json, Value};

use domains::error::ProjectionError;
use domains::models::LiveblogPost;
use domains::ports::Renderer;

/// The flattened externally consumable representation of a post. Key names
/// are part of the external contract and must remain stable.
pub type Payload = serde_json::Map<String, Value>;

pub struct PayloadProjector {
    renderer: Box<dyn Renderer>,
}

impl PayloadProjector {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self { renderer }
    }

    /// Projects a post into its external payload.
    ///
    /// Read-only: a renderer failure propagates as
    /// [`ProjectionError::Render`] and leaves the instance untouched. Either
    /// the complete merged payload is returned or an error — never a map with
    /// missing raw keys.
    pub async fn project(&self, post: &LiveblogPost) -> Result<Payload, ProjectionError> {
        let rendered = self
            .renderer
            .render(post)
            .await
            .map_err(ProjectionError::Render)?;

        let stream_id = post.stream_id();
        if stream_id <= 0 {
            // Possible only on rehydrated rows whose stored reference id was
            // lost; a dangling-but-present id is still reported below.
            return Err(ProjectionError::ReferenceIntegrity("liveblog"));
        }

        let mut data = Payload::new();
        data.insert("id".into(), json!(post.id()));
        data.insert("uuid".into(), json!(post.uuid()));
        data.insert("title".into(), json!(post.title()));
        data.insert("liveblog".into(), json!(stream_id));
        data.insert("body__value".into(), json!(post.body()));
        data.insert("highlight".into(), json!(post.highlight()));
        data.insert("location".into(), json!(post.location()));
        data.insert(
            "source__uri".into(),
            json!(post.source().map(|link| link.uri.as_str())),
        );
        data.insert("uid".into(), json!(post.author().display_name.as_deref()));
        data.insert("changed".into(), json!(post.updated_at().timestamp()));
        data.insert("created".into(), json!(post.created_at().timestamp()));
        data.insert("status".into(), json!(post.published()));

        // Gap-fill merge: rendered fragments never override a raw key.
        for (key, value) in rendered {
            data.entry(key).or_insert(value);
        }

        tracing::debug!(id = post.id(), keys = data.len(), "projected post payload");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::models::{ActorRef, PostParts, StreamRef};
    use domains::ports::{MockRenderer, RenderedOutput};
    use uuid::Uuid;

    fn parts() -> PostParts {
        let now = Utc::now();
        PostParts {
            id: 11,
            uuid: Uuid::new_v4(),
            title: Some("A".to_string()),
            body: Some("Details...".to_string()),
            highlight: String::new(),
            source: None,
            location: None,
            stream: Some(StreamRef::new(7)),
            author: Some(ActorRef::named(42, "weather-desk")),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn post() -> LiveblogPost {
        LiveblogPost::from_parts(parts()).unwrap()
    }

    fn projector_with(fragments: RenderedOutput) -> PayloadProjector {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().returning(move |_| Ok(fragments.clone()));
        PayloadProjector::new(Box::new(renderer))
    }

    #[tokio::test]
    async fn raw_values_win_on_collision() {
        let mut fragments = RenderedOutput::new();
        fragments.insert("title".into(), json!("B"));
        fragments.insert("extra".into(), json!("C"));

        let payload = projector_with(fragments).project(&post()).await.unwrap();
        assert_eq!(payload["title"], json!("A"));
        assert_eq!(payload["extra"], json!("C"));
    }

    #[tokio::test]
    async fn renderer_failure_propagates_untouched() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .returning(|_| Err(anyhow::anyhow!("template exploded")));
        let projector = PayloadProjector::new(Box::new(renderer));

        let post = post();
        let before = post.updated_at();
        let err = projector.project(&post).await.unwrap_err();
        assert!(matches!(err, ProjectionError::Render(_)));
        assert_eq!(post.updated_at(), before);
    }

    #[tokio::test]
    async fn lost_stream_reference_is_a_projection_error() {
        // Rehydrated row whose stored reference id was zeroed out.
        let orphan = LiveblogPost::from_parts(PostParts {
            stream: Some(StreamRef::new(0)),
            ..parts()
        })
        .unwrap();

        let err = projector_with(RenderedOutput::new())
            .project(&orphan)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectionError::ReferenceIntegrity("liveblog")));
    }
}
