//! # services
//!
//! Lifecycle orchestration and payload projection for liveblog posts. The
//! collaborators (storage, renderer, vocabulary) arrive as boxed domain ports
//! so the binary can assemble whichever implementations it ships with.

pub mod lifecycle;
pub mod projector;
pub mod vocabulary;

pub use lifecycle::PostService;
pub use projector::{Payload, PayloadProjector};
pub use vocabulary::StaticVocabulary;
