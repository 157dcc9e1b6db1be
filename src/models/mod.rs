pub mod assignments;
pub mod common;
pub mod courses;
pub mod files;
pub mod grades;
pub mod reports;
pub mod submissions;
pub mod users;

pub use common::pagination::PaginationInfo;
