use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::model::favorite::CreateFavoriteDto;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a favorite, or returns the existing row when the (user, food)
    /// pair is already marked. Favoriting twice is not an error.
    pub async fn create(&self, dto: CreateFavoriteDto) -> Result<entity::favorite::Model, DbErr> {
        if let Some(existing) = self.get(&dto.user, &dto.food).await? {
            return Ok(existing);
        }

        let favorite = entity::favorite::ActiveModel {
            user: ActiveValue::Set(dto.user),
            food: ActiveValue::Set(dto.food),
        };

        favorite.insert(self.db).await
    }

    pub async fn get(
        &self,
        user: &str,
        food: &str,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id((user.to_string(), food.to_string()))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find().all(self.db).await
    }

    pub async fn list_by_user(&self, user: &str) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::User.eq(user))
            .all(self.db)
            .await
    }

    /// Deletes one (user, food) favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user: &str, food: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id((user.to_string(), food.to_string()))
            .exec(self.db)
            .await
    }
}
