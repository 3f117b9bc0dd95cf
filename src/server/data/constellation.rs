use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::model::constellation::{CreateConstellationDto, UpdateConstellationDto};

pub struct ConstellationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConstellationRepository<'a> {
    /// Creates a new instance of [`ConstellationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new constellation with a generated id
    pub async fn create(
        &self,
        dto: CreateConstellationDto,
    ) -> Result<entity::constellation::Model, DbErr> {
        let constellation = entity::constellation::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user: ActiveValue::Set(dto.user),
        };

        constellation.insert(self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<entity::constellation::Model>, DbErr> {
        entity::prelude::Constellation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::constellation::Model>, DbErr> {
        entity::prelude::Constellation::find().all(self.db).await
    }

    pub async fn list_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<entity::constellation::Model>, DbErr> {
        entity::prelude::Constellation::find()
            .filter(entity::constellation::Column::User.eq(user))
            .all(self.db)
            .await
    }

    /// Applies the provided fields to an existing constellation
    ///
    /// Returns `Ok(None)` when no constellation with the given id exists.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateConstellationDto,
    ) -> Result<Option<entity::constellation::Model>, DbErr> {
        let Some(constellation) = self.get(id).await? else {
            return Ok(None);
        };

        let mut constellation: entity::constellation::ActiveModel = constellation.into();
        if let Some(user) = dto.user {
            constellation.user = ActiveValue::Set(user);
        }

        Ok(Some(constellation.update(self.db).await?))
    }

    /// Deletes a constellation
    ///
    /// Returns OK regardless of the constellation existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Constellation::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
