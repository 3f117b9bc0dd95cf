use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::capture::{CreateCaptureDto, UpdateCaptureDto};

pub struct CaptureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CaptureRepository<'a> {
    /// Creates a new instance of [`CaptureRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new capture with a generated id
    pub async fn create(&self, dto: CreateCaptureDto) -> Result<entity::capture::Model, DbErr> {
        let capture = entity::capture::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            food: ActiveValue::Set(dto.food),
            date: ActiveValue::Set(dto.date),
            user: ActiveValue::Set(dto.user),
            image_url: ActiveValue::Set(dto.image_url),
        };

        capture.insert(self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<entity::capture::Model>, DbErr> {
        entity::prelude::Capture::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::capture::Model>, DbErr> {
        entity::prelude::Capture::find().all(self.db).await
    }

    pub async fn list_by_user(&self, user: &str) -> Result<Vec<entity::capture::Model>, DbErr> {
        entity::prelude::Capture::find()
            .filter(entity::capture::Column::User.eq(user))
            .all(self.db)
            .await
    }

    /// Counts captures of one food across all users
    pub async fn count_by_food(&self, food: &str) -> Result<u64, DbErr> {
        entity::prelude::Capture::find()
            .filter(entity::capture::Column::Food.eq(food))
            .count(self.db)
            .await
    }

    /// Applies the provided fields to an existing capture
    ///
    /// Returns `Ok(None)` when no capture with the given id exists.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateCaptureDto,
    ) -> Result<Option<entity::capture::Model>, DbErr> {
        let Some(capture) = self.get(id).await? else {
            return Ok(None);
        };

        let mut capture: entity::capture::ActiveModel = capture.into();
        if let Some(food) = dto.food {
            capture.food = ActiveValue::Set(food);
        }
        if let Some(date) = dto.date {
            capture.date = ActiveValue::Set(date);
        }
        if let Some(user) = dto.user {
            capture.user = ActiveValue::Set(user);
        }
        if let Some(image_url) = dto.image_url {
            capture.image_url = ActiveValue::Set(image_url);
        }

        Ok(Some(capture.update(self.db).await?))
    }

    /// Deletes a capture
    ///
    /// Returns OK regardless of the capture existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Capture::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
