//! 咨询问题实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "support_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub answered: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_support_question(self) -> crate::models::support::entities::SupportQuestion {
        use crate::models::support::entities::SupportQuestion;
        use chrono::{DateTime, Utc};

        SupportQuestion {
            id: self.id,
            name: self.name,
            email: self.email,
            question: self.question,
            answered: self.answered,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
