use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::cast_member::domain::{
    CastMember, CastMemberId, CastMemberRepository, NestedCastMember,
};
use crate::modules::category::domain::{Category, CategoryId, CategoryRepository, NestedCategory};
use crate::modules::genre::domain::{Genre, GenreId, GenreRepository, NestedGenre};
use crate::modules::video::domain::{Rating, Video, VideoId, VideoProps, VideoRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::{ErrorEntry, Notification};
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{not_found_entry, AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::{command::SaveVideoCommand, result::SaveVideoResult};

/// Snapshots found for the requested ids, plus the error entry for the missing ones
type Resolved<N> = (Vec<N>, Option<ErrorEntry>);

fn parse_ids<I: std::str::FromStr<Err = AppError>>(raw: &[String]) -> AppResult<Vec<I>> {
    raw.iter().map(|id| id.parse::<I>()).collect()
}

pub struct SaveVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    genre_repository: Arc<dyn GenreRepository>,
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl SaveVideoHandler {
    pub fn new(
        video_repository: Arc<dyn VideoRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        genre_repository: Arc<dyn GenreRepository>,
        cast_member_repository: Arc<dyn CastMemberRepository>,
    ) -> Self {
        Self {
            video_repository,
            category_repository,
            genre_repository,
            cast_member_repository,
        }
    }

    async fn resolve_categories(&self, ids: &[CategoryId]) -> AppResult<Resolved<NestedCategory>> {
        let found = self
            .category_repository
            .ignore_soft_deleted()
            .find_by_ids(ids)
            .await?;
        let missing = (!found.not_exists.is_empty()).then(|| {
            not_found_entry("categories_id", Category::ENTITY_NAME, &found.not_exists)
        });
        Ok((found.exists.iter().map(NestedCategory::from).collect(), missing))
    }

    async fn resolve_genres(&self, ids: &[GenreId]) -> AppResult<Resolved<NestedGenre>> {
        let found = self
            .genre_repository
            .ignore_soft_deleted()
            .find_by_ids(ids)
            .await?;
        let missing = (!found.not_exists.is_empty())
            .then(|| not_found_entry("genres_id", Genre::ENTITY_NAME, &found.not_exists));
        Ok((found.exists.iter().map(NestedGenre::from).collect(), missing))
    }

    async fn resolve_cast_members(
        &self,
        ids: &[CastMemberId],
    ) -> AppResult<Resolved<NestedCastMember>> {
        let found = self
            .cast_member_repository
            .ignore_soft_deleted()
            .find_by_ids(ids)
            .await?;
        let missing = (!found.not_exists.is_empty()).then(|| {
            not_found_entry(
                "cast_members_id",
                CastMember::ENTITY_NAME,
                &found.not_exists,
            )
        });
        Ok((
            found.exists.iter().map(NestedCastMember::from).collect(),
            missing,
        ))
    }

    fn parse_rating(rating: &str) -> AppResult<Rating> {
        rating.parse().map_err(|error: AppError| {
            let mut notification = Notification::new();
            notification.add_error("rating", error.to_string());
            AppError::entity_validation(&notification)
        })
    }

    fn apply(
        video: &mut Video,
        command: SaveVideoCommand,
        rating: Rating,
        categories: Vec<NestedCategory>,
        genres: Vec<NestedGenre>,
        cast_members: Vec<NestedCastMember>,
    ) {
        video.change_title(command.title);
        video.change_description(command.description);
        video.change_year_launched(command.year_launched);
        video.change_duration(command.duration);
        video.change_rating(rating);
        if command.is_opened {
            video.mark_as_opened();
        } else {
            video.mark_as_not_opened();
        }
        if command.is_published {
            video.publish();
        } else {
            video.unpublish();
        }
        video.replace_banner_url(command.banner_url);
        video.replace_thumbnail_url(command.thumbnail_url);
        video.replace_thumbnail_half_url(command.thumbnail_half_url);
        video.replace_trailer_url(command.trailer_url);
        video.replace_video_url(command.video_url);
        video.sync_nested_categories(categories);
        video.sync_nested_genres(genres);
        video.sync_nested_cast_members(cast_members);
        video.change_created_at(command.created_at);
    }
}

#[async_trait]
impl UseCase<SaveVideoCommand, SaveVideoResult> for SaveVideoHandler {
    async fn execute(&self, command: SaveVideoCommand) -> AppResult<SaveVideoResult> {
        LogContext::use_case("SaveVideo", &command.video_id);
        let video_id: VideoId = command.video_id.parse()?;
        let rating = Self::parse_rating(&command.rating)?;
        let categories_id: Vec<CategoryId> = parse_ids(&command.categories_id)?;
        let genres_id: Vec<GenreId> = parse_ids(&command.genres_id)?;
        let cast_members_id: Vec<CastMemberId> = parse_ids(&command.cast_members_id)?;

        let (
            (categories, missing_categories),
            (genres, missing_genres),
            (cast_members, missing_cast_members),
        ) = futures::try_join!(
            self.resolve_categories(&categories_id),
            self.resolve_genres(&genres_id),
            self.resolve_cast_members(&cast_members_id),
        )?;
        let missing: Vec<ErrorEntry> = [missing_categories, missing_genres, missing_cast_members]
            .into_iter()
            .flatten()
            .collect();
        if !missing.is_empty() {
            return Err(AppError::EntityValidation(missing));
        }

        let existing = self.video_repository.find_by_id(&video_id).await?;
        let created = existing.is_none();
        let video = match existing {
            Some(mut video) => {
                Self::apply(&mut video, command, rating, categories, genres, cast_members);
                video
            }
            None => Video::create(VideoProps {
                video_id,
                title: command.title,
                description: command.description,
                year_launched: command.year_launched,
                duration: command.duration,
                rating,
                is_opened: command.is_opened,
                is_published: command.is_published,
                banner_url: command.banner_url,
                thumbnail_url: command.thumbnail_url,
                thumbnail_half_url: command.thumbnail_half_url,
                trailer_url: command.trailer_url,
                video_url: command.video_url,
                categories,
                genres,
                cast_members,
                created_at: command.created_at,
                deleted_at: None,
            }),
        };
        if video.notification().has_errors() {
            return Err(AppError::entity_validation(video.notification()));
        }

        if created {
            self.video_repository.insert(&video).await?;
            info!("Video {} created", video_id);
        } else {
            self.video_repository.update(&video).await?;
            info!("Video {} updated", video_id);
        }
        Ok(SaveVideoResult::new(video_id.to_string(), created))
    }
}
