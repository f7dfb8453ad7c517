//! liveblog/crates/domains/src/lib.rs
//!
//! The central domain logic and interface definitions for the liveblog core:
//! the post entity, its field schema, the collaborator ports, and the error
//! taxonomy shared by every other crate.

pub mod error;
pub mod models;
pub mod ports;
pub mod schema;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ports::*;

#[cfg(test)]
mod tests {
    use super::models::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn parts() -> PostParts {
        let now = Utc::now();
        PostParts {
            id: 1,
            uuid: Uuid::new_v4(),
            title: Some("Hello Rust!".to_string()),
            body: Some("First post.".to_string()),
            highlight: String::new(),
            source: None,
            location: None,
            stream: Some(StreamRef::new(7)),
            author: Some(ActorRef::named(42, "reporter")),
            published: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn post_construction_from_parts() {
        let post = LiveblogPost::from_parts(parts()).unwrap();
        assert_eq!(post.id(), 1);
        assert_eq!(post.title(), "Hello Rust!");
        assert_eq!(post.stream_id(), 7);
        assert!(post.published());
        assert_eq!(post.created_at(), post.updated_at());
    }

    #[test]
    fn owner_and_author_are_one_relation() {
        let mut post = LiveblogPost::from_parts(parts()).unwrap();
        post.set_owner(ActorRef::named(99, "editor"));
        assert_eq!(post.author().id, 99);
        assert_eq!(post.owner().id, 99);
    }
}
