pub mod assignments;
pub mod grades;
pub mod reports;
pub mod submissions;

pub use assignments::AssignmentService;
pub use grades::GradeService;
pub use reports::ReportService;
pub use submissions::SubmissionService;
