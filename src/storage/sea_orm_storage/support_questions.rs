//! 咨询问题存储操作

use super::SeaOrmStorage;
use crate::entity::support_questions::{ActiveModel, Column, Entity as SupportQuestions};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    support::{
        entities::SupportQuestion,
        requests::{CreateSupportQuestionRequest, SupportQuestionListQuery},
        responses::SupportQuestionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建咨询问题（公开表单）
    pub async fn create_support_question_impl(
        &self,
        req: CreateSupportQuestionRequest,
    ) -> Result<SupportQuestion> {
        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            question: Set(req.question),
            answered: Set(false),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建咨询问题失败: {e}")))?;

        Ok(result.into_support_question())
    }

    /// 分页列出咨询问题
    pub async fn list_support_questions_with_pagination_impl(
        &self,
        query: SupportQuestionListQuery,
    ) -> Result<SupportQuestionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = SupportQuestions::find();

        if let Some(answered) = query.answered {
            select = select.filter(Column::Answered.eq(answered));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询咨询总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询咨询页数失败: {e}"))
        })?;

        let items: Vec<SupportQuestion> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询咨询列表失败: {e}"))
            })?
            .into_iter()
            .map(|m| m.into_support_question())
            .collect();

        Ok(SupportQuestionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
