use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级内角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub enum ClassUserRole {
    Teacher, // 任课教师
    Student, // 学生
}

impl ClassUserRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl<'de> Deserialize<'de> for ClassUserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            ClassUserRole::TEACHER => Ok(ClassUserRole::Teacher),
            ClassUserRole::STUDENT => Ok(ClassUserRole::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的班级角色: '{s}'. 支持的角色: teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for ClassUserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassUserRole::Teacher => write!(f, "{}", ClassUserRole::TEACHER),
            ClassUserRole::Student => write!(f, "{}", ClassUserRole::STUDENT),
        }
    }
}

impl std::str::FromStr for ClassUserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(ClassUserRole::Teacher),
            "student" => Ok(ClassUserRole::Student),
            _ => Err(format!("Invalid class user role: {s}")),
        }
    }
}

// 班级成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUser {
    pub id: i64,
    pub class_id: i64,
    pub user_id: i64,
    pub role: ClassUserRole,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
