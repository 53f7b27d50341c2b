//! 会议存储操作

use super::SeaOrmStorage;
use crate::entity::meetings::{ActiveModel, Column, Entity as Meetings};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginationInfo,
    meetings::{entities::Meeting, requests::MeetingListQuery, responses::MeetingListResponse},
};
use crate::storage::NewMeeting;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建会议镜像记录（外部事件创建成功后才调用）
    pub async fn create_meeting_impl(&self, meeting: NewMeeting) -> Result<Meeting> {
        let model = ActiveModel {
            class_id: Set(meeting.class_id),
            created_by: Set(meeting.created_by),
            title: Set(meeting.title),
            description: Set(meeting.description),
            meet_link: Set(meeting.meet_link),
            event_id: Set(meeting.event_id),
            scheduled_at: Set(meeting.scheduled_at.timestamp()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建会议记录失败: {e}")))?;

        Ok(result.into_meeting())
    }

    /// 通过 ID 获取会议
    pub async fn get_meeting_by_id_impl(&self, meeting_id: i64) -> Result<Option<Meeting>> {
        let result = Meetings::find_by_id(meeting_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询会议失败: {e}")))?;

        Ok(result.map(|m| m.into_meeting()))
    }

    /// 分页列出会议
    pub async fn list_meetings_with_pagination_impl(
        &self,
        query: MeetingListQuery,
    ) -> Result<MeetingListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Meetings::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if query.upcoming.unwrap_or(false) {
            select = select.filter(Column::ScheduledAt.gte(chrono::Utc::now().timestamp()));
        }

        select = select.order_by_asc(Column::ScheduledAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询会议总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询会议页数失败: {e}")))?;

        let items: Vec<Meeting> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询会议列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_meeting())
            .collect();

        Ok(MeetingListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除会议（只删本地镜像，不回调外部服务）
    pub async fn delete_meeting_impl(&self, meeting_id: i64) -> Result<bool> {
        let result = Meetings::delete_by_id(meeting_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除会议失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
