use super::error::*;
use super::models::*;
use super::upload::{Progress, UploadParam};
use super::BinaryContent;

pub use super::upload::{NoProgress, UploadTransport};

pub trait AccountService {
    fn get_account_information(self) -> impl std::future::Future<Output = Result<User>> + Send;

    fn update_account_information(
        self,
        params: &EditUserParams,
    ) -> impl std::future::Future<Output = Result<User>> + Send;

    fn get_user_information(
        self,
        user_id: u64,
    ) -> impl std::future::Future<Output = Result<User>> + Send;
}

pub trait VideoService {
    fn get_videos(
        self,
        param: &GetVideosParam,
    ) -> impl std::future::Future<Output = Result<Paginated<Video>>> + Send;

    fn get_user_videos(
        self,
        user_id: u64,
        param: &GetVideosParam,
    ) -> impl std::future::Future<Output = Result<Paginated<Video>>> + Send;

    /// Lookup by clip id; `None` when the clip does not exist.
    fn get_video(
        self,
        clip_id: u64,
        fields: Option<&[&str]>,
    ) -> impl std::future::Future<Output = Result<Option<Video>>> + Send;

    fn delete_video(self, clip_id: u64) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait AlbumService {
    fn get_album_videos(
        self,
        album_id: u64,
        param: &GetVideosParam,
    ) -> impl std::future::Future<Output = Result<Paginated<Video>>> + Send;

    fn get_album_video(
        self,
        album_id: u64,
        clip_id: u64,
        fields: Option<&[&str]>,
    ) -> impl std::future::Future<Output = Result<Video>> + Send;

    fn get_user_album_videos(
        self,
        user_id: u64,
        album_id: u64,
        param: &GetVideosParam,
    ) -> impl std::future::Future<Output = Result<Paginated<Video>>> + Send;

    fn get_user_album_video(
        self,
        user_id: u64,
        album_id: u64,
        clip_id: u64,
        fields: Option<&[&str]>,
    ) -> impl std::future::Future<Output = Result<Video>> + Send;
}

pub trait PictureService {
    fn get_pictures(
        self,
        clip_id: u64,
    ) -> impl std::future::Future<Output = Result<Paginated<Picture>>> + Send;

    fn get_picture(
        self,
        clip_id: u64,
        picture_id: u64,
    ) -> impl std::future::Future<Output = Result<Picture>> + Send;
}

pub trait UploadService {
    /// Uploads the whole content through the resumable chunk engine with
    /// default chunk size and retry budget.
    fn upload_entire_content(
        self,
        content: &mut BinaryContent,
    ) -> impl std::future::Future<Output = Result<CompletedRequest>> + Send;

    fn upload_entire_content_with<P>(
        self,
        content: &mut BinaryContent,
        param: &UploadParam,
        progress: &P,
    ) -> impl std::future::Future<Output = Result<CompletedRequest>> + Send
    where
        P: Progress + Sync;
}
