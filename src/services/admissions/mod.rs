pub mod list;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::admissions::requests::{
    AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest,
};
use crate::storage::Storage;

pub struct AdmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdmissionService {
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

    /// 提交报名表单（公开）
    pub async fn submit_admission(
        &self,
        request: &HttpRequest,
        req: CreateAdmissionRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_admission(self, request, req).await
    }

    /// 列出报名（管理员）
    pub async fn list_admissions(
        &self,
        request: &HttpRequest,
        params: AdmissionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_admissions(self, request, params).await
    }

    /// 更新报名状态（管理员）
    pub async fn update_admission(
        &self,
        request: &HttpRequest,
        admission_id: i64,
        req: UpdateAdmissionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_admission(self, request, admission_id, req).await
    }
}
