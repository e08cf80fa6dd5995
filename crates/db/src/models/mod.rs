pub mod status;
pub mod video;
