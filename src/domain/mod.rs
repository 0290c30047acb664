pub mod artifact;
pub mod script;
pub mod shared;
pub mod video;
pub mod voice;
