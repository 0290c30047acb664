pub mod download;
pub mod health;
pub mod page;
pub mod script;
pub mod video;
pub mod voice;
