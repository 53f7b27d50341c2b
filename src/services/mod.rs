pub mod admissions;
pub mod assignments;
pub mod auth;
pub mod class_users;
pub mod classes;
pub mod files;
pub mod meetings;
pub mod subjects;
pub mod submissions;
pub mod support;
pub mod users;

pub use admissions::AdmissionService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use class_users::ClassUserService;
pub use classes::ClassService;
pub use files::FileService;
pub use meetings::MeetingService;
pub use subjects::SubjectService;
pub use submissions::SubmissionService;
pub use support::SupportService;
pub use users::UserService;
