use super::*;

impl<'a> prelude::AccountService for &Service<'a> {
    // GET /me
    async fn get_account_information(self) -> Result<User> {
        let resp = self.api(reqwest::Method::GET, "/me").send().await?;
        expect_json(resp).await
    }

    // PATCH /me
    async fn update_account_information(self, params: &EditUserParams) -> Result<User> {
        let resp = self
            .api(reqwest::Method::PATCH, "/me")
            .query(&params.get_query())
            .send()
            .await?;
        expect_json(resp).await
    }

    // GET /users/{user_id}
    async fn get_user_information(self, user_id: u64) -> Result<User> {
        let resp = self
            .api(reqwest::Method::GET, &format!("/users/{}", user_id))
            .send()
            .await?;
        expect_json(resp).await
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
    async fn test_get_account_information() -> anyhow::Result<()> {
        let s = service();
        let account = s.get_account_information().await?;
        assert!(account.user_id().is_some());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "talks to the live api, needs VIMEO_ACCESS_TOKEN"]
    async fn test_update_account_information_round_trip() -> anyhow::Result<()> {
        let s = service();
        let original = s.get_account_information().await?;

        let updated = s
            .update_account_information(&EditUserParams {
                name: Some("King Henry VIII".to_owned()),
                bio: Some(String::new()),
                location: Some("England".to_owned()),
            })
            .await?;
        // the api nulls out fields set to an empty string
        assert_eq!(updated.name().as_deref(), Some("King Henry VIII"));
        assert!(updated.bio().is_none());
        assert_eq!(updated.location().as_deref(), Some("England"));

        // restore
        s.update_account_information(&EditUserParams {
            name: original.name().clone().or(Some(String::new())),
            bio: original.bio().clone().or(Some(String::new())),
            location: original.location().clone().or(Some(String::new())),
        })
        .await?;
        Ok(())
    }
}
