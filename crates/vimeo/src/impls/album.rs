use super::*;

impl<'a> prelude::AlbumService for &Service<'a> {
    // GET /me/albums/{album_id}/videos
    async fn get_album_videos(self, album_id: u64, param: &GetVideosParam) -> Result<Paginated<Video>> {
        let resp = self
            .api(reqwest::Method::GET, &format!("/me/albums/{}/videos", album_id))
            .query(&param.get_query())
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /me/albums/{album_id}/videos/{clip_id}
    async fn get_album_video(
        self,
        album_id: u64,
        clip_id: u64,
        fields: Option<&[&str]>,
    ) -> Result<Video> {
        let resp = self
            .api(
                reqwest::Method::GET,
                &format!("/me/albums/{}/videos/{}", album_id, clip_id),
            )
            .query(&fields_query(fields))
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /users/{user_id}/albums/{album_id}/videos
    async fn get_user_album_videos(
        self,
        user_id: u64,
        album_id: u64,
        param: &GetVideosParam,
    ) -> Result<Paginated<Video>> {
        let resp = self
            .api(
                reqwest::Method::GET,
                &format!("/users/{}/albums/{}/videos", user_id, album_id),
            )
            .query(&param.get_query())
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /users/{user_id}/albums/{album_id}/videos/{clip_id}
    async fn get_user_album_video(
        self,
        user_id: u64,
        album_id: u64,
        clip_id: u64,
        fields: Option<&[&str]>,
    ) -> Result<Video> {
        let resp = self
            .api(
                reqwest::Method::GET,
                &format!("/users/{}/albums/{}/videos/{}", user_id, album_id, clip_id),
            )
            .query(&fields_query(fields))
            .send()
            .await?;
        expect_json(resp).await
    }
}
