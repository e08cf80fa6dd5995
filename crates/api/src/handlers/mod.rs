pub mod analysis;
pub mod video;
