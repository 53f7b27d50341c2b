//! 班级存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_users::{Column as ClassUserColumn, Entity as ClassUsers};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes, Model as ClassModel};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    class_users::entities::ClassUserRole,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::utils::escape_like_pattern;
use crate::utils::random_code::generate_invite_code;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

const INVITE_CODE_LENGTH: usize = 8;
const DEFAULT_CAPACITY: i64 = 50;

impl SeaOrmStorage {
    /// 批量统计班级学生人数
    pub(super) async fn student_counts(&self, class_ids: &[i64]) -> Result<HashMap<i64, i64>> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        if class_ids.is_empty() {
            return Ok(counts);
        }

        let members = ClassUsers::find()
            .filter(ClassUserColumn::ClassId.is_in(class_ids.to_vec()))
            .filter(ClassUserColumn::Role.eq(ClassUserRole::STUDENT))
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("统计班级学生失败: {e}"))
            })?;

        for member in members {
            *counts.entry(member.class_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// 单个班级模型转业务实体（附学生人数）
    async fn class_with_count(&self, model: ClassModel) -> Result<Class> {
        let count = self.count_class_students_impl(model.id).await?;
        Ok(model.into_class(count))
    }

    /// 创建班级（邀请码在这里生成）
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_name: Set(req.class_name),
            description: Set(req.description),
            capacity: Set(req.capacity.unwrap_or(DEFAULT_CAPACITY)),
            invite_code: Set(generate_invite_code(INVITE_CODE_LENGTH)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class(0))
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.class_with_count(model).await?)),
            None => Ok(None),
        }
    }

    /// 通过邀请码获取班级
    pub async fn get_class_by_code_impl(&self, invite_code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::InviteCode.eq(invite_code))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.class_with_count(model).await?)),
            None => Ok(None),
        }
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classes::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::ClassName.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级页数失败: {e}")))?;

        let models = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询班级列表失败: {e}"))
        })?;

        let class_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let counts = self.student_counts(&class_ids).await?;

        let items: Vec<Class> = models
            .into_iter()
            .map(|m| {
                let count = counts.get(&m.id).copied().unwrap_or(0);
                m.into_class(count)
            })
            .collect();

        Ok(ClassListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let existing = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        // 先删除成员关系
        ClassUsers::delete_many()
            .filter(ClassUserColumn::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("删除班级成员关系失败: {e}"))
            })?;

        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
