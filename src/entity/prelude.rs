pub use super::admissions::Entity as Admissions;
pub use super::assignments::Entity as Assignments;
pub use super::class_users::Entity as ClassUsers;
pub use super::classes::Entity as Classes;
pub use super::files::Entity as Files;
pub use super::meetings::Entity as Meetings;
pub use super::subjects::Entity as Subjects;
pub use super::submissions::Entity as Submissions;
pub use super::support_questions::Entity as SupportQuestions;
pub use super::users::Entity as Users;
