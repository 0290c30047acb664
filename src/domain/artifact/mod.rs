pub mod error;
pub mod model;
pub mod service;

pub use error::ArtifactServiceError;
pub use model::{ArtifactId, ArtifactKind, StoredArtifact};
pub use service::{ArtifactDownload, ArtifactService, ArtifactServiceApi};
