//! Video repository.

use std::cmp::Reverse;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use videovault_core::error::AppError;
use videovault_core::result::AppResult;
use videovault_core::traits::repository::Repository;
use videovault_core::types::id::VideoId;
use videovault_core::types::pagination::{PageRequest, PageResponse};
use videovault_entity::video::Video;

/// Read access to uploaded videos. Share links only ever resolve titles here.
#[async_trait]
pub trait VideoRepository: Repository<Video, VideoId> + std::fmt::Debug {
    /// Title of a video, if it exists.
    async fn find_title(&self, id: &VideoId) -> AppResult<Option<String>> {
        Ok(self.find_by_id(id).await?.map(|video| video.title))
    }
}

/// Video store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryVideoRepository {
    videos: DashMap<VideoId, Video>,
}

impl MemoryVideoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Video, VideoId> for MemoryVideoRepository {
    async fn find_by_id(&self, id: &VideoId) -> AppResult<Option<Video>> {
        Ok(self.videos.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Video>> {
        let mut all: Vec<Video> = self.videos.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|video| (Reverse(video.uploaded_at), video.id.clone()));
        Ok(PageResponse::from_ordered(all, page))
    }

    async fn create(&self, video: &Video) -> AppResult<Video> {
        match self.videos.entry(video.id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Video '{}' already exists",
                video.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(video.clone());
                Ok(video.clone())
            }
        }
    }

    async fn update(&self, video: &Video) -> AppResult<Video> {
        match self.videos.get_mut(&video.id) {
            Some(mut stored) => {
                *stored = video.clone();
                Ok(video.clone())
            }
            None => Err(AppError::not_found(format!(
                "Video '{}' not found",
                video.id
            ))),
        }
    }

    async fn delete(&self, id: &VideoId) -> AppResult<bool> {
        Ok(self.videos.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.videos.len() as u64)
    }
}

#[async_trait]
impl VideoRepository for MemoryVideoRepository {}
