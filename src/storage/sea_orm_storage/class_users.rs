//! 班级成员存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_users::{ActiveModel, Column, Entity as ClassUsers};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    class_users::{
        entities::{ClassUser, ClassUserRole},
        requests::ClassUserQuery,
        responses::{ClassUserListItem, ClassUserListResponse},
    },
    classes::{requests::ClassListQuery, responses::ClassListResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 加入班级
    pub async fn join_class_impl(
        &self,
        user_id: i64,
        class_id: i64,
        role: ClassUserRole,
    ) -> Result<ClassUser> {
        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            joined_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("加入班级失败: {e}")))?;

        Ok(result.into_class_user())
    }

    /// 离开/移出班级
    pub async fn leave_class_impl(&self, user_id: i64, class_id: i64) -> Result<bool> {
        let result = ClassUsers::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("移出班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出班级成员（带用户信息）
    pub async fn list_class_users_with_pagination_impl(
        &self,
        class_id: i64,
        query: ClassUserQuery,
    ) -> Result<ClassUserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassUsers::find().filter(Column::ClassId.eq(class_id));

        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        select = select.order_by_asc(Column::JoinedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成员总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成员页数失败: {e}")))?;

        let members: Vec<ClassUser> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成员列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_class_user())
            .collect();

        // 批量查询成员的用户信息
        let user_ids: Vec<i64> = members.iter().map(|m| m.user_id).collect();
        let users = if user_ids.is_empty() {
            vec![]
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(user_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询成员用户信息失败: {e}"))
                })?
        };
        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        let items: Vec<ClassUserListItem> = members
            .into_iter()
            .filter_map(|member| {
                user_map.get(&member.user_id).map(|user| ClassUserListItem {
                    id: member.id,
                    user_id: member.user_id,
                    username: user.username.clone(),
                    display_name: user.profile_name.clone(),
                    email: user.email.clone(),
                    role: member.role,
                    joined_at: member.joined_at.to_rfc3339(),
                })
            })
            .collect();

        Ok(ClassUserListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 分页列出用户所在的班级
    pub async fn list_user_classes_with_pagination_impl(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        // 先取成员关系，再按班级 ID 查询班级
        let memberships = ClassUsers::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询用户班级关系失败: {e}"))
            })?;

        let class_ids: Vec<i64> = memberships.iter().map(|m| m.class_id).collect();
        if class_ids.is_empty() {
            return Ok(ClassListResponse {
                items: vec![],
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let paginator = Classes::find()
            .filter(ClassColumn::Id.is_in(class_ids))
            .order_by_desc(ClassColumn::CreatedAt)
            .paginate(&self.db, size);

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

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let counts = self.student_counts(&ids).await?;

        let items = models
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

    /// 获取用户在班级中的成员信息
    pub async fn get_class_user_by_user_id_and_class_id_impl(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassUser>> {
        let result = ClassUsers::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(result.map(|m| m.into_class_user()))
    }

    /// 用户所在的全部班级 ID
    pub async fn list_user_class_ids_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        let class_ids: Vec<i64> = ClassUsers::find()
            .filter(Column::UserId.eq(user_id))
            .select_only()
            .column(Column::ClassId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询用户班级失败: {e}"))
            })?;

        Ok(class_ids)
    }

    /// 班级学生人数
    pub async fn count_class_students_impl(&self, class_id: i64) -> Result<i64> {
        let count = ClassUsers::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Role.eq(ClassUserRole::STUDENT))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("统计班级学生失败: {e}"))
            })?;

        Ok(count as i64)
    }

    /// 班级学生邮箱列表（会议参会人解析）
    pub async fn list_class_student_emails_impl(&self, class_id: i64) -> Result<Vec<String>> {
        let student_ids: Vec<i64> = ClassUsers::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Role.eq(ClassUserRole::STUDENT))
            .select_only()
            .column(Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询班级学生失败: {e}"))
            })?;

        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let emails: Vec<String> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .select_only()
            .column(UserColumn::Email)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询学生邮箱失败: {e}"))
            })?;

        Ok(emails)
    }
}
