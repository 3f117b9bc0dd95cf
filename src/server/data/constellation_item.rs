use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::model::constellation::CreateConstellationItemDto;

pub struct ConstellationItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConstellationItemRepository<'a> {
    /// Creates a new instance of [`ConstellationItemRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a food to a constellation, or returns the existing membership
    /// when the pair is already present.
    pub async fn create(
        &self,
        dto: CreateConstellationItemDto,
    ) -> Result<entity::constellation_item::Model, DbErr> {
        if let Some(existing) = self.get(&dto.food, &dto.constellation).await? {
            return Ok(existing);
        }

        let item = entity::constellation_item::ActiveModel {
            food: ActiveValue::Set(dto.food),
            constellation: ActiveValue::Set(dto.constellation),
        };

        item.insert(self.db).await
    }

    pub async fn get(
        &self,
        food: &str,
        constellation: &str,
    ) -> Result<Option<entity::constellation_item::Model>, DbErr> {
        entity::prelude::ConstellationItem::find_by_id((food.to_string(), constellation.to_string()))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::constellation_item::Model>, DbErr> {
        entity::prelude::ConstellationItem::find().all(self.db).await
    }

    pub async fn list_by_constellation(
        &self,
        constellation: &str,
    ) -> Result<Vec<entity::constellation_item::Model>, DbErr> {
        entity::prelude::ConstellationItem::find()
            .filter(entity::constellation_item::Column::Constellation.eq(constellation))
            .all(self.db)
            .await
    }

    /// Removes a food from a constellation
    ///
    /// Returns OK regardless of the membership existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, food: &str, constellation: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::ConstellationItem::delete_by_id((
            food.to_string(),
            constellation.to_string(),
        ))
        .exec(self.db)
        .await
    }
}
