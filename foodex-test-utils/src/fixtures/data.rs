//! Database fixture insertion utilities.
//!
//! Methods for inserting rows into the in-memory test database. Parent rows
//! are not created implicitly, so tests that insert captures or favorites are
//! expected to insert the referenced food and user first.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, Set};

use crate::{
    error::TestError,
    model::{
        CaptureModel, ConstellationItemModel, ConstellationModel, FavoriteModel, FoodModel,
        UserModel,
    },
    TestSetup,
};

impl TestSetup {
    pub fn data(&mut self) -> DataFixtures<'_> {
        DataFixtures { setup: self }
    }
}

pub struct DataFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> DataFixtures<'a> {
    /// Insert a mock food with standard rarity, origin, and description.
    pub async fn insert_mock_food(
        &self,
        food_id: &str,
        foodname: &str,
    ) -> Result<FoodModel, TestError> {
        let food = entity::food::ActiveModel {
            id: Set(food_id.to_string()),
            foodname: Set(foodname.to_string()),
            rarity: Set(1),
            origin: Set("Mexico".to_string()),
            description: Set("A mock food for testing".to_string()),
        };

        Ok(food.insert(&self.setup.state.db).await?)
    }

    /// Insert a mock user.
    pub async fn insert_mock_user(
        &self,
        user_id: &str,
        username: &str,
    ) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            id: Set(user_id.to_string()),
            username: Set(username.to_string()),
        };

        Ok(user.insert(&self.setup.state.db).await?)
    }

    /// Insert a mock capture referencing an existing food and user.
    pub async fn insert_mock_capture(
        &self,
        capture_id: &str,
        food_id: &str,
        user_id: &str,
        date: DateTime<Utc>,
    ) -> Result<CaptureModel, TestError> {
        let capture = entity::capture::ActiveModel {
            id: Set(capture_id.to_string()),
            food: Set(food_id.to_string()),
            date: Set(date),
            user: Set(user_id.to_string()),
            image_url: Set(format!("https://bucket.test/captures/{capture_id}")),
        };

        Ok(capture.insert(&self.setup.state.db).await?)
    }

    /// Insert a mock favorite relation for an existing user and food.
    pub async fn insert_mock_favorite(
        &self,
        user_id: &str,
        food_id: &str,
    ) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorite::ActiveModel {
            user: Set(user_id.to_string()),
            food: Set(food_id.to_string()),
        };

        Ok(favorite.insert(&self.setup.state.db).await?)
    }

    /// Insert a mock constellation owned by an existing user.
    pub async fn insert_mock_constellation(
        &self,
        constellation_id: &str,
        user_id: &str,
    ) -> Result<ConstellationModel, TestError> {
        let constellation = entity::constellation::ActiveModel {
            id: Set(constellation_id.to_string()),
            user: Set(user_id.to_string()),
        };

        Ok(constellation.insert(&self.setup.state.db).await?)
    }

    /// Insert a mock constellation item linking an existing food and constellation.
    pub async fn insert_mock_constellation_item(
        &self,
        food_id: &str,
        constellation_id: &str,
    ) -> Result<ConstellationItemModel, TestError> {
        let item = entity::constellation_item::ActiveModel {
            food: Set(food_id.to_string()),
            constellation: Set(constellation_id.to_string()),
        };

        Ok(item.insert(&self.setup.state.db).await?)
    }
}
