pub mod detail;
pub mod directory;
