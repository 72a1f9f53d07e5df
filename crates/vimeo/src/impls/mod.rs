mod account;
mod album;
mod picture;
mod upload;
mod video;

use serde::de::DeserializeOwned;

use super::*;

#[derive(Debug, Clone)]
pub struct Service<'a> {
    api_host: &'a str,
    protocol: Protocol,
    client: reqwest::Client,
    token: String,
}

impl<'a> Service<'a> {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            api_host: consts::HOST,
            protocol: Protocol::HTTPS,
            client: reqwest::Client::new(),
            token: access_token.into(),
        }
    }

    pub fn with_host(access_token: impl Into<String>, api_host: &'a str, protocol: Protocol) -> Self {
        Self {
            api_host,
            protocol,
            client: reqwest::Client::new(),
            token: access_token.into(),
        }
    }

    pub(crate) fn api(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}{}", self.protocol.get_prefix(), self.api_host, path);
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, consts::ACCEPT)
    }
}

/// Checks the status and either deserializes the body or surfaces the api's
/// error payload.
pub(crate) async fn expect_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        return Err(api_error(resp).await);
    }
    Ok(resp.json::<T>().await?)
}

pub(crate) async fn expect_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    if !resp.status().is_success() {
        return Err(api_error(resp).await);
    }
    Ok(resp)
}

pub(crate) async fn api_error(resp: reqwest::Response) -> Error {
    let status = resp.status().as_u16();
    let message = resp
        .json::<ApiErrorInfo>()
        .await
        .ok()
        .and_then(|info| info.error)
        .unwrap_or_default();
    Error::Api(status, message)
}
