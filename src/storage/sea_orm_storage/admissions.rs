//! 招生报名存储操作

use super::SeaOrmStorage;
use crate::entity::admissions::{ActiveModel, Column, Entity as Admissions};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    admissions::{
        entities::{Admission, AdmissionStatus},
        requests::{AdmissionListQuery, CreateAdmissionRequest},
        responses::AdmissionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建报名记录（公开表单）
    pub async fn create_admission_impl(&self, req: CreateAdmissionRequest) -> Result<Admission> {
        let model = ActiveModel {
            student_name: Set(req.student_name),
            guardian_name: Set(req.guardian_name),
            email: Set(req.email),
            phone: Set(req.phone),
            grade_applied: Set(req.grade_applied),
            message: Set(req.message),
            status: Set(AdmissionStatus::New.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建报名记录失败: {e}")))?;

        Ok(result.into_admission())
    }

    /// 通过 ID 获取报名记录
    pub async fn get_admission_by_id_impl(&self, admission_id: i64) -> Result<Option<Admission>> {
        let result = Admissions::find_by_id(admission_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(result.map(|m| m.into_admission()))
    }

    /// 分页列出报名记录
    pub async fn list_admissions_with_pagination_impl(
        &self,
        query: AdmissionListQuery,
    ) -> Result<AdmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Admissions::find();

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询报名总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询报名页数失败: {e}"))
        })?;

        let items: Vec<Admission> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询报名列表失败: {e}"))
            })?
            .into_iter()
            .map(|m| m.into_admission())
            .collect();

        Ok(AdmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新报名状态
    pub async fn update_admission_status_impl(
        &self,
        admission_id: i64,
        status: AdmissionStatus,
    ) -> Result<Option<Admission>> {
        let existing = self.get_admission_by_id_impl(admission_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(admission_id),
            status: Set(status.to_string()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新报名状态失败: {e}")))?;

        self.get_admission_by_id_impl(admission_id).await
    }
}
