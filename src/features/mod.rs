pub mod error;
pub mod gps;
pub mod payload;
pub mod writer;
