pub mod preview;
pub mod upload;
