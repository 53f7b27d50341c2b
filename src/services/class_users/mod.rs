pub mod add;
pub mod join;
pub mod list;
pub mod remove;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_users::requests::{
    AddClassUserRequest, ClassUserListParams, JoinClassRequest,
};
use crate::storage::Storage;

pub struct ClassUserService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassUserService {
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

    /// 学生通过邀请码加入班级
    pub async fn join_class(
        &self,
        request: &HttpRequest,
        req: JoinClassRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, request, req).await
    }

    /// 教师/管理员直接添加成员
    pub async fn add_class_user(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: AddClassUserRequest,
    ) -> ActixResult<HttpResponse> {
        add::add_class_user(self, request, class_id, req).await
    }

    /// 移出成员（或学生自己退出）
    pub async fn remove_class_user(
        &self,
        request: &HttpRequest,
        class_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        remove::remove_class_user(self, request, class_id, user_id).await
    }

    /// 列出班级成员
    pub async fn list_class_users(
        &self,
        request: &HttpRequest,
        class_id: i64,
        params: ClassUserListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_class_users(self, request, class_id, params).await
    }
}
