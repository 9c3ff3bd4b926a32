use serde::Serialize;

use crate::domain::favorite::Favorite;

#[derive(Debug, Serialize)]
pub struct FavoritesPageData {
    pub favorites: Vec<Favorite>,
}
