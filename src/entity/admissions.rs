//! 招生报名实体

use sea_orm::entity::prelude::*;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: String,
    pub guardian_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub grade_applied: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_admission(self) -> crate::models::admissions::entities::Admission {
        use crate::models::admissions::entities::{Admission, AdmissionStatus};
        use chrono::{DateTime, Utc};

        Admission {
            id: self.id,
            student_name: self.student_name,
            guardian_name: self.guardian_name,
            email: self.email,
            phone: self.phone,
            grade_applied: self.grade_applied,
            message: self.message,
            status: AdmissionStatus::from_str(&self.status).unwrap_or(AdmissionStatus::New),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
