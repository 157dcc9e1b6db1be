pub mod scoring;
pub mod validate;
