//! Logbook and feed projections: joining captures against foods,
//! favorites, and users into display-ready rows.
//!
//! Projection is pure over snapshots of the three source tables, so the
//! same inputs always produce the same rows and re-running it after a
//! mutation is just a matter of handing in fresh snapshots.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name used when a capture references a food that no longer
/// exists (or never did).
pub const UNKNOWN_FOOD: &str = "Unknown Food";

/// Display name used in the feed when a capture's user row is missing.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Fetch state of one source table backing a projection.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

/// Outcome of combining source states: the projection is only `Ready`
/// once every source is.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection<T> {
    Loading,
    Failed(String),
    Ready(T),
}

/// One logbook row, already joined and formatted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogbookEntry {
    pub id: String,
    pub food_name: String,
    /// Pre-formatted display date, see [`format_capture_date`].
    pub capture_date: String,
    pub captured_at: DateTime<Utc>,
    pub is_favorite: bool,
    pub image_url: String,
}

/// One feed row: everyone's captures, attributed by username.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeedEntry {
    pub id: String,
    pub username: String,
    pub food_name: String,
    pub capture_date: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogbookResultDto {
    pub logbook: Vec<LogbookEntry>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogbookResponseDto {
    pub success: bool,
    pub result: LogbookResultDto,
}

impl LogbookResponseDto {
    pub fn new(logbook: Vec<LogbookEntry>) -> Self {
        Self {
            success: true,
            result: LogbookResultDto { logbook },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeedResultDto {
    pub feed: Vec<FeedEntry>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeedResponseDto {
    pub success: bool,
    pub result: FeedResultDto,
}

impl FeedResponseDto {
    pub fn new(feed: Vec<FeedEntry>) -> Self {
        Self {
            success: true,
            result: FeedResultDto { feed },
        }
    }
}

/// Formats a capture timestamp for display, e.g. `3/7/2026, 14:05`.
/// Always UTC and always the same shape, regardless of host locale.
pub fn format_capture_date(instant: DateTime<Utc>) -> String {
    instant.format("%-m/%-d/%Y, %H:%M").to_string()
}

/// Joins one user's captures against foods and favorites.
///
/// Captures by other users are dropped. A capture whose food row is
/// missing still appears, named [`UNKNOWN_FOOD`]; its favorite flag is
/// keyed on the food id alone, so a favorite row still marks it. Rows
/// are ordered newest first; captures sharing an instant keep their
/// relative input order.
pub fn project_logbook(
    captures: &[entity::capture::Model],
    foods: &[entity::food::Model],
    favorites: &[entity::favorite::Model],
    user_id: &str,
) -> Vec<LogbookEntry> {
    let food_by_id: HashMap<&str, &entity::food::Model> =
        foods.iter().map(|food| (food.id.as_str(), food)).collect();
    let favorite_food_ids: HashSet<&str> = favorites
        .iter()
        .filter(|favorite| favorite.user == user_id)
        .map(|favorite| favorite.food.as_str())
        .collect();

    let mut entries: Vec<LogbookEntry> = captures
        .iter()
        .filter(|capture| capture.user == user_id)
        .map(|capture| {
            let food_name = food_by_id
                .get(capture.food.as_str())
                .map(|food| food.foodname.clone())
                .unwrap_or_else(|| UNKNOWN_FOOD.to_string());
            // Favorite status is pure (user, food) membership keyed on
            // the food id; it does not depend on the food row existing.
            let is_favorite = favorite_food_ids.contains(capture.food.as_str());

            LogbookEntry {
                id: capture.id.clone(),
                food_name,
                capture_date: format_capture_date(capture.date),
                captured_at: capture.date,
                is_favorite,
                image_url: capture.image_url.clone(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
    entries
}

/// Joins all captures against foods and users for the shared feed.
/// Rows keep store order; missing joins fall back to the unknown
/// placeholders instead of dropping the capture.
pub fn project_feed(
    captures: &[entity::capture::Model],
    foods: &[entity::food::Model],
    users: &[entity::user::Model],
) -> Vec<FeedEntry> {
    let food_by_id: HashMap<&str, &entity::food::Model> =
        foods.iter().map(|food| (food.id.as_str(), food)).collect();
    let user_by_id: HashMap<&str, &entity::user::Model> =
        users.iter().map(|user| (user.id.as_str(), user)).collect();

    captures
        .iter()
        .map(|capture| FeedEntry {
            id: capture.id.clone(),
            username: user_by_id
                .get(capture.user.as_str())
                .map(|user| user.username.clone())
                .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            food_name: food_by_id
                .get(capture.food.as_str())
                .map(|food| food.foodname.clone())
                .unwrap_or_else(|| UNKNOWN_FOOD.to_string()),
            capture_date: format_capture_date(capture.date),
            image_url: capture.image_url.clone(),
        })
        .collect()
}

/// Source snapshot for a logbook projection.
#[derive(Clone, Debug)]
pub struct LogbookSources {
    pub captures: SourceState<entity::capture::Model>,
    pub foods: SourceState<entity::food::Model>,
    pub favorites: SourceState<entity::favorite::Model>,
}

impl LogbookSources {
    /// Combines the three sources. While any source is still loading
    /// the projection is loading; once all have resolved, the first
    /// failed source in fixed order (captures, foods, favorites)
    /// supplies the message.
    pub fn project(&self, user_id: &str) -> Projection<Vec<LogbookEntry>> {
        if matches!(self.captures, SourceState::Loading)
            || matches!(self.foods, SourceState::Loading)
            || matches!(self.favorites, SourceState::Loading)
        {
            return Projection::Loading;
        }
        if let SourceState::Failed(message) = &self.captures {
            return Projection::Failed(message.clone());
        }
        if let SourceState::Failed(message) = &self.foods {
            return Projection::Failed(message.clone());
        }
        if let SourceState::Failed(message) = &self.favorites {
            return Projection::Failed(message.clone());
        }
        match (&self.captures, &self.foods, &self.favorites) {
            (SourceState::Ready(captures), SourceState::Ready(foods), SourceState::Ready(favorites)) => {
                Projection::Ready(project_logbook(captures, foods, favorites, user_id))
            }
            _ => Projection::Loading,
        }
    }
}

/// Source snapshot for a feed projection.
#[derive(Clone, Debug)]
pub struct FeedSources {
    pub captures: SourceState<entity::capture::Model>,
    pub foods: SourceState<entity::food::Model>,
    pub users: SourceState<entity::user::Model>,
}

impl FeedSources {
    pub fn project(&self) -> Projection<Vec<FeedEntry>> {
        if matches!(self.captures, SourceState::Loading)
            || matches!(self.foods, SourceState::Loading)
            || matches!(self.users, SourceState::Loading)
        {
            return Projection::Loading;
        }
        if let SourceState::Failed(message) = &self.captures {
            return Projection::Failed(message.clone());
        }
        if let SourceState::Failed(message) = &self.foods {
            return Projection::Failed(message.clone());
        }
        if let SourceState::Failed(message) = &self.users {
            return Projection::Failed(message.clone());
        }
        match (&self.captures, &self.foods, &self.users) {
            (SourceState::Ready(captures), SourceState::Ready(foods), SourceState::Ready(users)) => {
                Projection::Ready(project_feed(captures, foods, users))
            }
            _ => Projection::Loading,
        }
    }
}

/// Caches the last logbook projection keyed on source data versions.
/// Callers bump a version per table whenever that table changes; as
/// long as the triple matches, the cached rows are handed back without
/// recomputing the join.
#[derive(Debug, Default)]
pub struct ProjectionMemo {
    cached: Option<((u64, u64, u64), Arc<Vec<LogbookEntry>>)>,
}

impl ProjectionMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_project(
        &mut self,
        versions: (u64, u64, u64),
        captures: &[entity::capture::Model],
        foods: &[entity::food::Model],
        favorites: &[entity::favorite::Model],
        user_id: &str,
    ) -> Arc<Vec<LogbookEntry>> {
        if let Some((cached_versions, entries)) = &self.cached {
            if *cached_versions == versions {
                return Arc::clone(entries);
            }
        }
        let entries = Arc::new(project_logbook(captures, foods, favorites, user_id));
        self.cached = Some((versions, Arc::clone(&entries)));
        entries
    }
}
