use super::*;

impl<'a> prelude::PictureService for &Service<'a> {
    // GET /videos/{clip_id}/pictures
    async fn get_pictures(self, clip_id: u64) -> Result<Paginated<Picture>> {
        let resp = self
            .api(reqwest::Method::GET, &format!("/videos/{}/pictures", clip_id))
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /videos/{clip_id}/pictures/{picture_id}
    async fn get_picture(self, clip_id: u64, picture_id: u64) -> Result<Picture> {
        let resp = self
            .api(
                reqwest::Method::GET,
                &format!("/videos/{}/pictures/{}", clip_id, picture_id),
            )
            .send()
            .await?;
        expect_json(resp).await
    }
}
