/// In-memory repositories and handler wiring shared by the integration tests
use std::sync::Arc;
use video_catalog::modules::cast_member::application::use_cases::{
    DeleteCastMemberHandler, GetCastMemberHandler, ListAllCastMembersHandler,
    ListCastMembersHandler, SaveCastMemberHandler,
};
use video_catalog::modules::cast_member::infrastructure::CastMemberInMemoryRepository;
use video_catalog::modules::category::application::use_cases::{
    DeleteCategoryHandler, GetCategoryHandler, ListAllCategoriesHandler, ListCategoriesHandler,
    SaveCategoryHandler,
};
use video_catalog::modules::category::infrastructure::CategoryInMemoryRepository;
use video_catalog::modules::genre::application::use_cases::{
    DeleteGenreHandler, GetGenreHandler, ListAllGenresHandler, SaveGenreHandler,
};
use video_catalog::modules::genre::infrastructure::GenreInMemoryRepository;
use video_catalog::modules::video::application::use_cases::{
    DeleteVideoHandler, GetVideoHandler, ListVideosHandler, SaveVideoHandler,
};
use video_catalog::modules::video::infrastructure::VideoInMemoryRepository;

#[derive(Default)]
pub struct TestCatalog {
    pub categories: CategoryInMemoryRepository,
    pub genres: GenreInMemoryRepository,
    pub cast_members: CastMemberInMemoryRepository,
    pub videos: VideoInMemoryRepository,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_category(&self) -> SaveCategoryHandler {
        SaveCategoryHandler::new(Arc::new(self.categories.clone()))
    }

    pub fn delete_category(&self) -> DeleteCategoryHandler {
        DeleteCategoryHandler::new(Arc::new(self.categories.clone()))
    }

    pub fn get_category(&self) -> GetCategoryHandler {
        GetCategoryHandler::new(Arc::new(self.categories.clone()))
    }

    pub fn list_categories(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(Arc::new(self.categories.clone()))
    }

    pub fn list_all_categories(&self) -> ListAllCategoriesHandler {
        ListAllCategoriesHandler::new(Arc::new(self.categories.clone()))
    }

    pub fn save_genre(&self) -> SaveGenreHandler {
        SaveGenreHandler::new(
            Arc::new(self.genres.clone()),
            Arc::new(self.categories.clone()),
        )
    }

    pub fn delete_genre(&self) -> DeleteGenreHandler {
        DeleteGenreHandler::new(Arc::new(self.genres.clone()))
    }

    pub fn get_genre(&self) -> GetGenreHandler {
        GetGenreHandler::new(Arc::new(self.genres.clone()))
    }

    pub fn list_all_genres(&self) -> ListAllGenresHandler {
        ListAllGenresHandler::new(Arc::new(self.genres.clone()))
    }

    pub fn save_cast_member(&self) -> SaveCastMemberHandler {
        SaveCastMemberHandler::new(Arc::new(self.cast_members.clone()))
    }

    pub fn delete_cast_member(&self) -> DeleteCastMemberHandler {
        DeleteCastMemberHandler::new(Arc::new(self.cast_members.clone()))
    }

    pub fn get_cast_member(&self) -> GetCastMemberHandler {
        GetCastMemberHandler::new(Arc::new(self.cast_members.clone()))
    }

    pub fn list_cast_members(&self) -> ListCastMembersHandler {
        ListCastMembersHandler::new(Arc::new(self.cast_members.clone()))
    }

    pub fn list_all_cast_members(&self) -> ListAllCastMembersHandler {
        ListAllCastMembersHandler::new(Arc::new(self.cast_members.clone()))
    }

    pub fn save_video(&self) -> SaveVideoHandler {
        SaveVideoHandler::new(
            Arc::new(self.videos.clone()),
            Arc::new(self.categories.clone()),
            Arc::new(self.genres.clone()),
            Arc::new(self.cast_members.clone()),
        )
    }

    pub fn delete_video(&self) -> DeleteVideoHandler {
        DeleteVideoHandler::new(Arc::new(self.videos.clone()))
    }

    pub fn get_video(&self) -> GetVideoHandler {
        GetVideoHandler::new(Arc::new(self.videos.clone()))
    }

    pub fn list_videos(&self) -> ListVideosHandler {
        ListVideosHandler::new(Arc::new(self.videos.clone()))
    }
}
