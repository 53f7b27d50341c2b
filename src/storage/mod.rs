use std::sync::Arc;

use crate::models::{
    admissions::{
        entities::{Admission, AdmissionStatus},
        requests::{AdmissionListQuery, CreateAdmissionRequest},
        responses::AdmissionListResponse,
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    class_users::{
        entities::{ClassUser, ClassUserRole},
        requests::ClassUserQuery,
        responses::ClassUserListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    files::entities::File,
    meetings::{
        entities::Meeting,
        requests::MeetingListQuery,
        responses::MeetingListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
    submissions::{
        entities::Submission,
        requests::SubmissionListQuery,
        responses::SubmissionListResponse,
    },
    support::{
        entities::SupportQuestion,
        requests::{CreateSupportQuestionRequest, SupportQuestionListQuery},
        responses::SupportQuestionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 新建会议的本地镜像记录（外部服务创建成功后写入）
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub class_id: i64,
    pub created_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub meet_link: String,
    pub event_id: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
}

/// 新建提交的内容（受理决策由服务层做出）
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub attachments: Vec<String>,
    pub is_late: bool,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段应已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数（用于管理员初始化）
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过邀请码获取班级信息
    async fn get_class_by_code(&self, invite_code: &str) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级成员管理方法
    // 加入班级（邀请码加入或管理员指派）
    async fn join_class(
        &self,
        user_id: i64,
        class_id: i64,
        role: ClassUserRole,
    ) -> Result<ClassUser>;
    // 离开/移出班级
    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool>;
    // 列出班级成员
    async fn list_class_users_with_pagination(
        &self,
        class_id: i64,
        query: ClassUserQuery,
    ) -> Result<ClassUserListResponse>;
    // 列出用户所在的班级
    async fn list_user_classes_with_pagination(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 获取用户在班级中的成员信息
    async fn get_class_user_by_user_id_and_class_id(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassUser>>;
    // 用户所在的全部班级 ID
    async fn list_user_class_ids(&self, user_id: i64) -> Result<Vec<i64>>;
    // 班级学生人数
    async fn count_class_students(&self, class_id: i64) -> Result<i64>;
    // 班级学生邮箱列表（会议参会人解析）
    async fn list_class_student_emails(&self, class_id: i64) -> Result<Vec<String>>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn update_subject(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    /// 作业管理方法
    // 创建作业（材料 token 由服务层先行校验）
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 分页列出作业（附带创建者、当前用户提交摘要和统计）
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse>;
    // 更新作业（补丁语义，缺失字段保持原值）
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业（级联删除其提交）
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取某学生对某作业的有效提交（最多一条）
    async fn get_live_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 新建提交
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission>;
    // 覆盖已有提交（重交）
    async fn overwrite_submission(
        &self,
        submission_id: i64,
        submission: NewSubmission,
    ) -> Result<Option<Submission>>;
    // 列出提交（教师视角，带提交者信息）
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 评分（一次原子写入：状态、分数、评语、评分人、评分时间）
    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;
    // 某作业的提交数（按学生去重后的有效提交数）
    async fn count_assignment_submissions(&self, assignment_id: i64) -> Result<i64>;
    // 某作业已评分的提交数
    async fn count_assignment_graded_submissions(&self, assignment_id: i64) -> Result<i64>;

    /// 会议管理方法
    async fn create_meeting(&self, meeting: NewMeeting) -> Result<Meeting>;
    async fn get_meeting_by_id(&self, meeting_id: i64) -> Result<Option<Meeting>>;
    async fn list_meetings_with_pagination(
        &self,
        query: MeetingListQuery,
    ) -> Result<MeetingListResponse>;
    async fn delete_meeting(&self, meeting_id: i64) -> Result<bool>;

    /// 招生报名方法
    async fn create_admission(&self, admission: CreateAdmissionRequest) -> Result<Admission>;
    async fn get_admission_by_id(&self, admission_id: i64) -> Result<Option<Admission>>;
    async fn list_admissions_with_pagination(
        &self,
        query: AdmissionListQuery,
    ) -> Result<AdmissionListResponse>;
    async fn update_admission_status(
        &self,
        admission_id: i64,
        status: AdmissionStatus,
    ) -> Result<Option<Admission>>;

    /// 咨询问题方法
    async fn create_support_question(
        &self,
        question: CreateSupportQuestionRequest,
    ) -> Result<SupportQuestion>;
    async fn list_support_questions_with_pagination(
        &self,
        query: SupportQuestionListQuery,
    ) -> Result<SupportQuestionListResponse>;

    /// 文件管理方法
    // 登记已写入磁盘的上传文件
    async fn create_file(
        &self,
        download_token: &str,
        file_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
