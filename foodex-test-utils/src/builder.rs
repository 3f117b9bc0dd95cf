//! Declarative test builder for test environment setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::{DateTime, Utc};
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// row fixtures, and mock HTTP endpoints. Methods can be chained together and
/// finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_logbook_tables: bool,

    // Database fixtures to insert
    foods: Vec<(String, String)>,                     // (food_id, foodname)
    users: Vec<(String, String)>,                     // (user_id, username)
    captures: Vec<(String, String, String, DateTime<Utc>)>, // (capture_id, food_id, user_id, date)
    favorites: Vec<(String, String)>,                 // (user_id, food_id)
    constellations: Vec<(String, String)>,            // (constellation_id, user_id)
    constellation_items: Vec<(String, String)>,       // (food_id, constellation_id)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    detection_endpoints: Vec<(serde_json::Value, usize)>, // (detections, expected_requests)
    failing_detection_endpoints: Vec<(usize, usize)>,     // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_logbook_tables: false,
            foods: Vec::new(),
            users: Vec::new(),
            captures: Vec::new(),
            favorites: Vec::new(),
            constellations: Vec::new(),
            constellation_items: Vec::new(),
            mock_builders: Vec::new(),
            detection_endpoints: Vec::new(),
            failing_detection_endpoints: Vec::new(),
        }
    }

    /// Add the standard logbook tables to the test database.
    ///
    /// Creates all tables the logbook and feed projections read from:
    /// Food, User, Capture, and Favorite.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_logbook_tables(mut self) -> Self {
        self.include_logbook_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use foodex_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), foodex_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Food)
    ///     .with_table(User)
    ///     .with_table(Constellation)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock food into the database.
    ///
    /// Queues a food fixture to be inserted during `build()` with standard
    /// rarity, origin, and description values.
    ///
    /// # Arguments
    /// - `food_id` - The food row id
    /// - `foodname` - The unique display name of the food
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_food(mut self, food_id: &str, foodname: &str) -> Self {
        self.foods.push((food_id.to_string(), foodname.to_string()));
        self
    }

    /// Insert a mock user into the database.
    ///
    /// # Arguments
    /// - `user_id` - The user row id
    /// - `username` - The user's display name
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_user(mut self, user_id: &str, username: &str) -> Self {
        self.users.push((user_id.to_string(), username.to_string()));
        self
    }

    /// Insert a mock capture into the database.
    ///
    /// The referenced food and user must be queued with `with_mock_food` and
    /// `with_mock_user`; fixtures are inserted in that order during `build()`.
    ///
    /// # Arguments
    /// - `capture_id` - The capture row id
    /// - `food_id` - The captured food's row id
    /// - `user_id` - The capturing user's row id
    /// - `date` - The capture timestamp
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_capture(
        mut self,
        capture_id: &str,
        food_id: &str,
        user_id: &str,
        date: DateTime<Utc>,
    ) -> Self {
        self.captures.push((
            capture_id.to_string(),
            food_id.to_string(),
            user_id.to_string(),
            date,
        ));
        self
    }

    /// Insert a mock favorite relation into the database.
    ///
    /// # Arguments
    /// - `user_id` - The favoriting user's row id
    /// - `food_id` - The favorited food's row id
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_favorite(mut self, user_id: &str, food_id: &str) -> Self {
        self.favorites
            .push((user_id.to_string(), food_id.to_string()));
        self
    }

    /// Insert a mock constellation into the database.
    ///
    /// # Arguments
    /// - `constellation_id` - The constellation row id
    /// - `user_id` - The owning user's row id
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_constellation(mut self, constellation_id: &str, user_id: &str) -> Self {
        self.constellations
            .push((constellation_id.to_string(), user_id.to_string()));
        self
    }

    /// Insert a mock constellation item into the database.
    ///
    /// # Arguments
    /// - `food_id` - The linked food's row id
    /// - `constellation_id` - The containing constellation's row id
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_constellation_item(mut self, food_id: &str, constellation_id: &str) -> Self {
        self.constellation_items
            .push((food_id.to_string(), constellation_id.to_string()));
        self
    }

    /// Register a custom mock HTTP endpoint.
    ///
    /// The closure receives the mock server during `build()` and returns the
    /// created mock. Custom endpoints are created before the pre-configured
    /// shortcuts so sequential mockito matching works when a test registers
    /// multiple mocks for the same path.
    ///
    /// # Arguments
    /// - `builder` - Closure creating the mock on the server
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Register a mock vision model endpoint returning the given detections.
    ///
    /// # Arguments
    /// - `detections` - JSON array of raw detections to return from the model
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_detection_endpoint(
        mut self,
        detections: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.detection_endpoints.push((detections, expected_requests));
        self
    }

    /// Register a mock vision model endpoint failing with the given status.
    ///
    /// # Arguments
    /// - `status` - HTTP status code the endpoint answers with
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_failing_detection_endpoint(
        mut self,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_detection_endpoints
            .push((status, expected_requests));
        self
    }

    /// Execute all queued operations and produce a ready test setup.
    ///
    /// Creates tables first, then inserts row fixtures in dependency order
    /// (foods and users before captures, favorites, and constellations), then
    /// registers mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - A setup with database, mock server, and mocks ready
    /// - `Err(TestError)` - If table creation or a fixture insert fails
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_logbook_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Food),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Capture),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures (using existing fixture methods)
        for (food_id, foodname) in self.foods {
            setup.data().insert_mock_food(&food_id, &foodname).await?;
        }

        for (user_id, username) in self.users {
            setup.data().insert_mock_user(&user_id, &username).await?;
        }

        for (capture_id, food_id, user_id, date) in self.captures {
            setup
                .data()
                .insert_mock_capture(&capture_id, &food_id, &user_id, date)
                .await?;
        }

        for (user_id, food_id) in self.favorites {
            setup.data().insert_mock_favorite(&user_id, &food_id).await?;
        }

        for (constellation_id, user_id) in self.constellations {
            setup
                .data()
                .insert_mock_constellation(&constellation_id, &user_id)
                .await?;
        }

        for (food_id, constellation_id) in self.constellation_items {
            setup
                .data()
                .insert_mock_constellation_item(&food_id, &constellation_id)
                .await?;
        }

        // 3. Create mock endpoints
        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (detections, expected) in self.detection_endpoints {
            mocks.push(setup.detection().create_detection_endpoint(detections, expected));
        }

        for (status, expected) in self.failing_detection_endpoints {
            mocks.push(
                setup
                    .detection()
                    .create_failing_detection_endpoint(status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
