//! 业务错误码
//!
//! 按模块分段：1xxx 通用，2xxx 认证与用户，3xxx 班级与科目，
//! 4xxx 作业与提交，5xxx 会议/招生/咨询，6xxx 文件。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,
    InvalidParameter = 1006,

    // 认证与用户
    InvalidCredentials = 2000,
    TokenInvalid = 2001,
    UserNotFound = 2100,
    UserAlreadyExists = 2101,
    UserDisabled = 2102,
    PasswordPolicyViolation = 2103,

    // 班级
    ClassNotFound = 3000,
    ClassAlreadyExists = 3001,
    ClassFull = 3002,
    ClassPermissionDenied = 3003,
    NotClassMember = 3004,
    AlreadyClassMember = 3005,
    InviteCodeInvalid = 3006,

    // 科目
    SubjectNotFound = 3100,
    SubjectAlreadyExists = 3101,

    // 作业
    AssignmentNotFound = 4000,
    AssignmentPermissionDenied = 4001,
    MaterialNotFound = 4002,

    // 提交
    SubmissionNotFound = 4100,
    SubmissionAlreadyGraded = 4101,
    GradeOutOfRange = 4102,
    SubmissionPermissionDenied = 4103,

    // 会议
    MeetingNotFound = 5000,
    MeetAuthExpired = 5001,
    MeetProviderUnavailable = 5002,
    MeetingTimeInvalid = 5003,

    // 招生
    AdmissionNotFound = 5100,

    // 文件
    FileNotFound = 6000,
    FileUploadFailed = 6001,
    FileTypeNotAllowed = 6002,
    FileSizeExceeded = 6003,
    MultifileUploadNotAllowed = 6004,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::SubmissionAlreadyGraded as i32, 4101);
        assert_eq!(ErrorCode::GradeOutOfRange as i32, 4102);
        assert_eq!(ErrorCode::MeetAuthExpired as i32, 5001);
    }
}
