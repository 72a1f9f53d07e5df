use super::*;

impl<'a> prelude::VideoService for &Service<'a> {
    // GET /me/videos
    async fn get_videos(self, param: &GetVideosParam) -> Result<Paginated<Video>> {
        let resp = self
            .api(reqwest::Method::GET, "/me/videos")
            .query(&param.get_query())
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /users/{user_id}/videos
    async fn get_user_videos(self, user_id: u64, param: &GetVideosParam) -> Result<Paginated<Video>> {
        let resp = self
            .api(reqwest::Method::GET, &format!("/users/{}/videos", user_id))
            .query(&param.get_query())
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /videos/{clip_id}
    async fn get_video(self, clip_id: u64, fields: Option<&[&str]>) -> Result<Option<Video>> {
        let resp = self
            .api(reqwest::Method::GET, &format!("/videos/{}", clip_id))
            .query(&fields_query(fields))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        expect_json(resp).await.map(Some)
    }

    // DELETE /videos/{clip_id}
    async fn delete_video(self, clip_id: u64) -> Result<()> {
        let resp = self
            .api(reqwest::Method::DELETE, &format!("/videos/{}", clip_id))
            .send()
            .await?;
        expect_success(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::*;

    fn service() -> Service<'static> {
        Service::new(std::env::var("VIMEO_ACCESS_TOKEN").unwrap_or_default())
    }

    #[tokio::test]
    #[ignore = "talks to the live api, needs VIMEO_ACCESS_TOKEN"]
    async fn test_get_videos_second_page() -> anyhow::Result<()> {
        let s = service();
        let videos = s
            .get_videos(&GetVideosParam {
                page: Some(2),
                per_page: Some(5),
                fields: None,
            })
            .await?;
        assert!(*videos.per_page() <= 5);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "talks to the live api, needs VIMEO_ACCESS_TOKEN"]
    async fn test_get_video_with_fields() -> anyhow::Result<()> {
        let s = service();
        let videos = s.get_videos(&GetVideosParam::default()).await?;
        let clip_id = videos
            .data()
            .first()
            .and_then(|v| v.clip_id())
            .ok_or(anyhow::anyhow!("account has no videos"))?;

        let video = s
            .get_video(clip_id, Some(&["uri", "name"]))
            .await?
            .ok_or(anyhow::anyhow!("video vanished"))?;
        assert!(video.uri().is_some());
        assert!(video.name().is_some());
        // partial response: unrequested fields stay empty
        assert!(video.pictures().is_none());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "talks to the live api, needs VIMEO_ACCESS_TOKEN"]
    async fn test_get_video_not_found() -> anyhow::Result<()> {
        let s = service();
        assert!(s.get_video(1, None).await?.is_none());
        Ok(())
    }
}
