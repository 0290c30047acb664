pub mod dto;
pub mod error;
pub mod service;

pub use dto::{VideoGenerationRequest, VideoGenerationResponse};
pub use error::VideoServiceError;
pub use service::{render_placeholder, GeneratedVideo, VideoService, VideoServiceApi};
