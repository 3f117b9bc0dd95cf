use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
};

use crate::model::user::{CreateUserDto, UpdateUserDto};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with a generated id
    pub async fn create(&self, dto: CreateUserDto) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            username: ActiveValue::Set(dto.username),
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    /// Applies the provided fields to an existing user
    ///
    /// Returns `Ok(None)` when no user with the given id exists.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateUserDto,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(id).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = user.into();
        if let Some(username) = dto.username {
            user.username = ActiveValue::Set(username);
        }

        Ok(Some(user.update(self.db).await?))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await
    }
}
