pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::meetings::requests::{CreateMeetingRequest, MeetingListParams};
use crate::storage::Storage;

pub struct MeetingService {
    storage: Option<Arc<dyn Storage>>,
}

impl MeetingService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建会议（即时或预约）
    pub async fn create_meeting(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateMeetingRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_meeting(self, request, created_by, req).await
    }

    /// 列出会议
    pub async fn list_meetings(
        &self,
        request: &HttpRequest,
        params: MeetingListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_meetings(self, request, params).await
    }

    /// 删除会议
    pub async fn delete_meeting(
        &self,
        request: &HttpRequest,
        meeting_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_meeting(self, request, meeting_id, user_id).await
    }
}
