//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::SubmissionListQuery,
        responses::{SubmissionListItem, SubmissionListResponse, SubmissionStudent},
    },
};
use crate::storage::NewSubmission;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

fn encode_attachments(attachments: &[String]) -> Result<Option<String>> {
    if attachments.is_empty() {
        return Ok(None);
    }
    let json = serde_json::to_string(attachments)
        .map_err(|e| SchoolSystemError::serialization(format!("附件列表序列化失败: {e}")))?;
    Ok(Some(json))
}

impl SeaOrmStorage {
    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取某学生对某作业的有效提交
    ///
    /// 唯一索引保证每个组合至多一条记录。
    pub async fn get_live_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 新建提交（首次提交）
    pub async fn create_submission_impl(&self, submission: NewSubmission) -> Result<Submission> {
        let model = ActiveModel {
            assignment_id: Set(submission.assignment_id),
            student_id: Set(submission.student_id),
            content: Set(submission.content),
            attachments: Set(encode_attachments(&submission.attachments)?),
            status: Set(SubmissionStatus::Submitted.to_string()),
            is_late: Set(submission.is_late),
            score: Set(None),
            feedback: Set(None),
            graded_by: Set(None),
            graded_at: Set(None),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 覆盖已有提交（重交）
    ///
    /// 同一条记录原地替换内容、附件和时间戳，状态重置为 submitted，
    /// 提交计数不变。
    pub async fn overwrite_submission_impl(
        &self,
        submission_id: i64,
        submission: NewSubmission,
    ) -> Result<Option<Submission>> {
        let existing = self.get_submission_by_id_impl(submission_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            content: Set(submission.content),
            attachments: Set(encode_attachments(&submission.attachments)?),
            status: Set(SubmissionStatus::Submitted.to_string()),
            is_late: Set(submission.is_late),
            score: Set(None),
            feedback: Set(None),
            graded_by: Set(None),
            graded_at: Set(None),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("覆盖提交失败: {e}")))?;

        self.get_submission_by_id_impl(submission_id).await
    }

    /// 分页列出提交（带提交者信息）
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(graded) = query.graded {
            let status = if graded {
                SubmissionStatus::GRADED
            } else {
                SubmissionStatus::SUBMITTED
            };
            select = select.filter(Column::Status.eq(status));
        }

        select = select.order_by_desc(Column::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交页数失败: {e}")))?;

        let submissions: Vec<Submission> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询提交列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_submission())
            .collect();

        // 批量查询提交者信息
        let student_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.student_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let students = if student_ids.is_empty() {
            vec![]
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("查询提交者失败: {e}"))
                })?
        };
        let student_map: HashMap<i64, SubmissionStudent> = students
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    SubmissionStudent {
                        id: u.id,
                        username: u.username,
                        display_name: u.profile_name,
                        avatar_url: u.avatar_url,
                    },
                )
            })
            .collect();

        let items: Vec<SubmissionListItem> = submissions
            .into_iter()
            .map(|submission| {
                let student = student_map.get(&submission.student_id).cloned();
                SubmissionListItem {
                    submission,
                    student,
                }
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 评分：状态、分数、评语、评分人、评分时间一次写入
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        let existing = self.get_submission_by_id_impl(submission_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            status: Set(SubmissionStatus::Graded.to_string()),
            score: Set(Some(score)),
            feedback: Set(feedback),
            graded_by: Set(Some(grader_id)),
            graded_at: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("评分失败: {e}")))?;

        self.get_submission_by_id_impl(submission_id).await
    }

    /// 某作业的有效提交数（每个学生至多一条，即按学生去重后的数量）
    pub async fn count_assignment_submissions_impl(&self, assignment_id: i64) -> Result<i64> {
        let count = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计提交失败: {e}")))?;

        Ok(count as i64)
    }

    /// 某作业已评分的提交数
    pub async fn count_assignment_graded_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<i64> {
        let count = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::Status.eq(SubmissionStatus::GRADED))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("统计已评分提交失败: {e}"))
            })?;

        Ok(count as i64)
    }
}
