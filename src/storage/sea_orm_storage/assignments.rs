//! 作业存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::class_users::{Column as ClassUserColumn, Entity as ClassUsers};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentKind, AssignmentPriority, AssignmentStatus,
            EffectiveStatus},
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{
            AssignmentCreator, AssignmentListItem, AssignmentListResponse, AssignmentStatsSummary,
            MySubmissionSummary,
        },
    },
    class_users::entities::ClassUserRole,
    files::entities::File,
    submissions::entities::SubmissionStatus,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业（状态统一初始化为 pending）
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            created_by: Set(created_by),
            title: Set(req.title),
            subject: Set(req.subject),
            description: Set(req.description),
            points: Set(req.points),
            material: Set(req.material),
            priority: Set(req
                .priority
                .unwrap_or(AssignmentPriority::Medium)
                .to_string()),
            kind: Set(req.kind.unwrap_or(AssignmentKind::Assignment).to_string()),
            status: Set(AssignmentStatus::Pending.to_string()),
            due_date: Set(req.due_date.timestamp()),
            due_time: Set(req.due_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业
    ///
    /// 展示状态只依赖存储状态和截止时间，所以 overdue 过滤可以直接翻译成
    /// `status = pending AND due_date < now`，分页计数保持准确。
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;
        let now = chrono::Utc::now();

        let mut select = Assignments::find();

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 限定到一组班级（学生只能看到自己所在班级的作业）
        if let Some(class_ids) = query.class_ids {
            if class_ids.is_empty() {
                // 不在任何班级，直接返回空结果
                select = select.filter(Column::Id.eq(-1));
            } else {
                select = select.filter(Column::ClassId.is_in(class_ids));
            }
        }

        // 创建者筛选
        if let Some(created_by) = query.created_by {
            select = select.filter(Column::CreatedBy.eq(created_by));
        }

        // 展示状态筛选
        if let Some(status) = query.status {
            select = match status {
                EffectiveStatus::Pending => select
                    .filter(Column::Status.eq(AssignmentStatus::PENDING))
                    .filter(Column::DueDate.gte(now.timestamp())),
                EffectiveStatus::Overdue => select
                    .filter(Column::Status.eq(AssignmentStatus::PENDING))
                    .filter(Column::DueDate.lt(now.timestamp())),
                EffectiveStatus::Submitted => {
                    select.filter(Column::Status.eq(AssignmentStatus::SUBMITTED))
                }
                EffectiveStatus::Graded => {
                    select.filter(Column::Status.eq(AssignmentStatus::GRADED))
                }
            };
        }

        // 搜索条件（按标题或科目搜索）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                sea_orm::Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Subject.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments: Vec<Assignment> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        // 收集所有 created_by ID 并去重
        let creator_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.created_by)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        // 查询创建者信息
        let mut creator_map: HashMap<i64, AssignmentCreator> = HashMap::new();
        for creator_id in creator_ids {
            if let Ok(Some(user)) = self.get_user_by_id_impl(creator_id).await {
                creator_map.insert(
                    creator_id,
                    AssignmentCreator {
                        id: user.id,
                        username: user.username,
                        display_name: Some(user.profile.profile_name),
                    },
                );
            }
        }

        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();

        // 查询当前用户的有效提交（学生视角）
        let mut my_submission_map: HashMap<i64, MySubmissionSummary> = HashMap::new();
        if let Some(user_id) = current_user_id
            && !assignment_ids.is_empty()
        {
            let submissions = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids.clone()))
                .filter(SubmissionColumn::StudentId.eq(user_id))
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询用户提交失败: {e}"))
                })?;

            for sub in submissions {
                let sub = sub.into_submission();
                my_submission_map.insert(
                    sub.assignment_id,
                    MySubmissionSummary {
                        id: sub.id,
                        status: sub.status.to_string(),
                        is_late: sub.is_late,
                        score: sub.score,
                        submitted_at: sub.submitted_at.to_rfc3339(),
                    },
                );
            }
        }

        // 查询统计信息（如果 include_stats=true）
        let mut stats_map: HashMap<i64, AssignmentStatsSummary> = HashMap::new();
        if query.include_stats.unwrap_or(false) && !assignments.is_empty() {
            // 获取每个作业所属班级的学生数
            for assignment in &assignments {
                let total_students = ClassUsers::find()
                    .filter(ClassUserColumn::ClassId.eq(assignment.class_id))
                    .filter(ClassUserColumn::Role.eq(ClassUserRole::STUDENT))
                    .count(&self.db)
                    .await
                    .map_err(|e| {
                        SchoolSystemError::database_operation(format!("查询班级学生数失败: {e}"))
                    })? as i64;

                stats_map.insert(
                    assignment.id,
                    AssignmentStatsSummary {
                        total_students,
                        submitted_count: 0,
                        graded_count: 0,
                    },
                );
            }

            // 每个 (作业, 学生) 至多一条有效提交，直接按作业聚合即可
            let submissions = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询作业提交失败: {e}"))
                })?;

            for sub in &submissions {
                if let Some(stats) = stats_map.get_mut(&sub.assignment_id) {
                    stats.submitted_count += 1;
                    if sub.status == SubmissionStatus::GRADED {
                        stats.graded_count += 1;
                    }
                }
            }
        }

        // 构造带派生状态的作业列表
        let items: Vec<AssignmentListItem> = assignments
            .into_iter()
            .map(|assignment| {
                let effective_status = assignment.effective_status(now);
                let material_url = assignment
                    .material
                    .as_deref()
                    .map(File::download_url);
                let creator = creator_map.get(&assignment.created_by).cloned();
                let my_submission = my_submission_map.get(&assignment.id).cloned();
                let stats_summary = stats_map.get(&assignment.id).cloned();
                AssignmentListItem {
                    assignment,
                    effective_status,
                    material_url,
                    creator,
                    my_submission,
                    stats_summary,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业（补丁语义）
    ///
    /// 不带 material 字段的更新保持已有材料不变，不会被悄悄清掉。
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        // 先检查作业是否存在
        let existing = self.get_assignment_by_id_impl(assignment_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(points) = update.points {
            model.points = Set(Some(points));
        }

        if let Some(material) = update.material {
            model.material = Set(Some(material));
        }

        if let Some(priority) = update.priority {
            model.priority = Set(priority.to_string());
        }

        if let Some(kind) = update.kind {
            model.kind = Set(kind.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }

        if let Some(due_time) = update.due_time {
            model.due_time = Set(Some(due_time));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(assignment_id).await
    }

    /// 删除作业（级联删除其全部提交，不留孤儿记录）
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        Submissions::delete_many()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("删除作业提交失败: {e}"))
            })?;

        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
