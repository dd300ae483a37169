pub mod holding;
pub mod series;
pub mod summary;
pub mod window;
