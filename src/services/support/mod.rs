pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::support::requests::{CreateSupportQuestionRequest, SupportQuestionListParams};
use crate::storage::Storage;

pub struct SupportService {
    storage: Option<Arc<dyn Storage>>,
}

impl SupportService {
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

    /// 提交咨询问题（公开）
    pub async fn submit_question(
        &self,
        request: &HttpRequest,
        req: CreateSupportQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_question(self, request, req).await
    }

    /// 列出咨询问题（管理员）
    pub async fn list_questions(
        &self,
        request: &HttpRequest,
        params: SupportQuestionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, request, params).await
    }
}
