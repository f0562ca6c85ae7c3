use std::sync::Arc;

use super::ServiceResult;
use crate::{dto::users::CreateUserRequest, models::User, store::UserStore};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<User> {
        Ok(self.users.create_user(request).await?)
    }

    pub async fn list_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.users.list_users().await?)
    }
}
