pub mod admissions;
pub mod assignments;
pub mod auth;
pub mod class_users;
pub mod classes;
pub mod files;
pub mod frontend;
pub mod meetings;
pub mod subjects;
pub mod submissions;
pub mod support;
pub mod system;
pub mod users;

pub use admissions::configure_admissions_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use class_users::configure_class_users_routes;
pub use classes::configure_classes_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use meetings::configure_meetings_routes;
pub use subjects::configure_subjects_routes;
pub use submissions::configure_submissions_routes;
pub use support::configure_support_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
