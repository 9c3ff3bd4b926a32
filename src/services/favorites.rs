use log::error;

use crate::domain::types::NoticeId;
use crate::dto::favorites::FavoritesPageData;
use crate::repository::{FavoriteReader, FavoriteWriter};
use crate::services::{ServiceError, ServiceResult};

pub async fn load_favorites<R>(repo: &R) -> ServiceResult<FavoritesPageData>
where
    R: FavoriteReader + ?Sized,
{
    let favorites = repo.list_favorites().await.map_err(|err| {
        error!("Failed to list favorites: {err}");
        ServiceError::from(err)
    })?;

    Ok(FavoritesPageData { favorites })
}

pub async fn remove_favorite<R>(repo: &R, id: NoticeId) -> ServiceResult<()>
where
    R: FavoriteWriter + ?Sized,
{
    repo.remove_favorite(id).await.map_err(|err| {
        error!("Failed to remove favorite {id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::favorite::Favorite;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn lists_saved_notices() {
        let mut repo = MockRepository::new();
        repo.expect_list_favorites().returning(|| {
            Ok(vec![Favorite {
                id: NoticeId::new(4).unwrap(),
                entity_name: "Prefeitura de Santos".to_string(),
                object: "Uniformes".to_string(),
                municipality: "Santos".to_string(),
                region: "SP".to_string(),
                published_at: "01/02/2024 10:00:00".to_string(),
                status: None,
            }])
        });

        let data = load_favorites(&repo).await.unwrap();

        assert_eq!(data.favorites.len(), 1);
        assert_eq!(data.favorites[0].object, "Uniformes");
    }

    #[actix_web::test]
    async fn removing_unknown_favorite_maps_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_remove_favorite()
            .withf(|id| id.get() == 4)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = remove_favorite(&repo, NoticeId::new(4).unwrap()).await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
