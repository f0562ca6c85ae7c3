use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbErr, FromQueryResult, Set, SqlErr,
    Statement,
};
use uuid::Uuid;

use super::{StoreError, StoreResult, UserStore, collect_decoded};
use crate::{
    db::OrmConn,
    dto::users::CreateUserRequest,
    entity::users::{ActiveModel, Model as UserModel},
    models::User,
};

#[derive(Clone)]
pub struct PgUserStore {
    orm: OrmConn,
}

impl PgUserStore {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }
}

fn map_orm_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            StoreError::DuplicateEntry("user with this email already exists")
        }
        _ => StoreError::Orm(err),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, request: CreateUserRequest) -> StoreResult<User> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            email: Set(request.email),
            country: Set(request.country),
            created_at: NotSet,
            updated_at: NotSet,
        };
        let user = active.insert(&self.orm).await.map_err(|err| {
            tracing::error!(error = %err, "user insert failed");
            map_orm_error(err)
        })?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user_from_entity(user))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let backend = self.orm.get_database_backend();
        let rows = self
            .orm
            .query_all(Statement::from_string(
                backend,
                "SELECT id, name, email, country, created_at, updated_at FROM users",
            ))
            .await?;

        let users = collect_decoded(rows, "users", |row| UserModel::from_query_result(row, ""))
            .into_iter()
            .map(user_from_entity)
            .collect();
        Ok(users)
    }
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        country: model.country,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
