use sea_orm::DatabaseConnection;

use crate::model::logbook::{
    FeedEntry, FeedSources, LogbookEntry, LogbookSources, Projection, SourceState,
};
use crate::server::data::{
    capture::CaptureRepository, favorite::FavoriteRepository, food::FoodRepository,
    user::UserRepository,
};

/// Service producing logbook and feed projections.
///
/// Each projection fetches its source tables concurrently and then runs
/// the pure join. A failed fetch does not abort the others; it surfaces
/// as [`Projection::Failed`] with the first failing source's message.
pub struct LogbookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogbookService<'a> {
    /// Creates a new instance of [`LogbookService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Projects one user's logbook from captures, foods, and favorites.
    pub async fn logbook(&self, user_id: &str) -> Projection<Vec<LogbookEntry>> {
        let capture_repository = CaptureRepository::new(self.db);
        let food_repository = FoodRepository::new(self.db);
        let favorite_repository = FavoriteRepository::new(self.db);

        let (captures, foods, favorites) = futures::join!(
            capture_repository.list(),
            food_repository.list(),
            favorite_repository.list(),
        );

        let sources = LogbookSources {
            captures: to_source_state(captures),
            foods: to_source_state(foods),
            favorites: to_source_state(favorites),
        };

        sources.project(user_id)
    }

    /// Projects the shared feed of everyone's captures.
    pub async fn feed(&self) -> Projection<Vec<FeedEntry>> {
        let capture_repository = CaptureRepository::new(self.db);
        let food_repository = FoodRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let (captures, foods, users) = futures::join!(
            capture_repository.list(),
            food_repository.list(),
            user_repository.list(),
        );

        let sources = FeedSources {
            captures: to_source_state(captures),
            foods: to_source_state(foods),
            users: to_source_state(users),
        };

        sources.project()
    }
}

fn to_source_state<T>(result: Result<Vec<T>, sea_orm::DbErr>) -> SourceState<T> {
    match result {
        Ok(rows) => SourceState::Ready(rows),
        Err(err) => SourceState::Failed(err.to_string()),
    }
}
