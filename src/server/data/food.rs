use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::model::food::{CreateFoodDto, UpdateFoodDto};

pub struct FoodRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FoodRepository<'a> {
    /// Creates a new instance of [`FoodRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new food with a generated id
    pub async fn create(&self, dto: CreateFoodDto) -> Result<entity::food::Model, DbErr> {
        let food = entity::food::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            foodname: ActiveValue::Set(dto.foodname),
            rarity: ActiveValue::Set(dto.rarity),
            origin: ActiveValue::Set(dto.origin),
            description: ActiveValue::Set(dto.description),
        };

        food.insert(self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<entity::food::Model>, DbErr> {
        entity::prelude::Food::find_by_id(id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::food::Model>, DbErr> {
        entity::prelude::Food::find().all(self.db).await
    }

    pub async fn find_by_name(&self, foodname: &str) -> Result<Option<entity::food::Model>, DbErr> {
        entity::prelude::Food::find()
            .filter(entity::food::Column::Foodname.eq(foodname))
            .one(self.db)
            .await
    }

    /// Applies the provided fields to an existing food
    ///
    /// Returns `Ok(None)` when no food with the given id exists.
    pub async fn update(
        &self,
        id: &str,
        dto: UpdateFoodDto,
    ) -> Result<Option<entity::food::Model>, DbErr> {
        let Some(food) = self.get(id).await? else {
            return Ok(None);
        };

        let mut food: entity::food::ActiveModel = food.into();
        if let Some(foodname) = dto.foodname {
            food.foodname = ActiveValue::Set(foodname);
        }
        if let Some(rarity) = dto.rarity {
            food.rarity = ActiveValue::Set(rarity);
        }
        if let Some(origin) = dto.origin {
            food.origin = ActiveValue::Set(origin);
        }
        if let Some(description) = dto.description {
            food.description = ActiveValue::Set(description);
        }

        Ok(Some(food.update(self.db).await?))
    }

    /// Deletes a food
    ///
    /// Returns OK regardless of the food existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Food::delete_by_id(id).exec(self.db).await
    }
}
