use std::collections::HashMap;

use derive_getters::Getters;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Getters)]
pub struct User {
    uri: String,
    name: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    link: Option<String>,
    account: Option<String>,
}

impl User {
    pub fn user_id(&self) -> Option<u64> {
        parse_id_from_uri(&self.uri)
    }
}

#[derive(Debug, Clone, Deserialize, Getters)]
pub struct Video {
    uri: Option<String>,
    name: Option<String>,
    description: Option<String>,
    link: Option<String>,
    duration: Option<u64>,
    pictures: Option<Picture>,
}

impl Video {
    pub fn clip_id(&self) -> Option<u64> {
        self.uri.as_deref().and_then(parse_id_from_uri)
    }
}

#[derive(Debug, Clone, Deserialize, Getters)]
pub struct Picture {
    uri: Option<String>,
    active: Option<bool>,
    #[serde(default)]
    sizes: Vec<PictureSize>,
}

impl Picture {
    pub fn picture_id(&self) -> Option<u64> {
        self.uri.as_deref().and_then(parse_id_from_uri)
    }
}

#[derive(Debug, Clone, Deserialize, Getters)]
pub struct PictureSize {
    width: u64,
    height: u64,
    link: String,
}

#[derive(Debug, Deserialize, Getters)]
#[serde(bound = "T: serde::de::DeserializeOwned")]
pub struct Paginated<T: serde::de::DeserializeOwned> {
    total: u64,
    page: u64,
    per_page: u64,
    data: Vec<T>,
}

/// Error payload the api attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorInfo {
    pub error: Option<String>,
}

/// Session descriptor issued by the server for one resumable upload.
/// Immutable once issued; discarded after finalize or abandon.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct UploadTicket {
    ticket_id: String,
    upload_link_secure: String,
    complete_uri: String,
    /// Total size the ticket was negotiated for. Filled in locally after
    /// ticket creation, the server payload does not carry it.
    #[serde(default)]
    size: u64,
}

impl UploadTicket {
    pub fn new(
        ticket_id: impl Into<String>,
        upload_link_secure: impl Into<String>,
        complete_uri: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            upload_link_secure: upload_link_secure.into(),
            complete_uri: complete_uri.into(),
            size,
        }
    }

    pub(crate) fn sized(mut self, size: u64) -> Self {
        self.size = size;
        self
    }
}

/// Server-side progress for one ticket. Re-fetched per verification round,
/// never cached beyond one check.
#[derive(Debug, Clone, Copy, Getters)]
pub struct UploadProgress {
    bytes_received: u64,
}

impl UploadProgress {
    pub fn new(bytes_received: u64) -> Self {
        Self { bytes_received }
    }
}

/// Outcome of a finished upload orchestration.
#[derive(Debug, Clone, Getters)]
pub struct CompletedRequest {
    clip_id: Option<u64>,
    clip_uri: Option<String>,
    bytes_written: u64,
    is_verified_complete: bool,
}

impl CompletedRequest {
    pub(crate) fn new(clip_uri: Option<String>, bytes_written: u64, total: u64) -> Self {
        Self {
            clip_id: clip_uri.as_deref().and_then(parse_id_from_uri),
            clip_uri,
            bytes_written,
            is_verified_complete: bytes_written == total,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EditUserParams {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl EditUserParams {
    pub(crate) fn get_query(&self) -> HashMap<&str, String> {
        let mut mp = HashMap::new();
        if let Some(ref name) = self.name {
            mp.insert("name", name.clone());
        }
        if let Some(ref bio) = self.bio {
            mp.insert("bio", bio.clone());
        }
        if let Some(ref location) = self.location {
            mp.insert("location", location.clone());
        }
        mp
    }
}

#[derive(Debug, Default, Clone)]
pub struct GetVideosParam {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub fields: Option<Vec<String>>,
}

impl GetVideosParam {
    pub(crate) fn get_query(&self) -> HashMap<&'static str, String> {
        let mut mp = HashMap::new();
        if let Some(page) = self.page {
            mp.insert("page", page.to_string());
        }
        if let Some(per_page) = self.per_page {
            mp.insert("per_page", per_page.to_string());
        }
        if let Some(ref fields) = self.fields {
            mp.insert("fields", fields.join(","));
        }
        mp
    }
}

/// Builds the `fields` partial-response query for single-object lookups.
pub(crate) fn fields_query(fields: Option<&[&str]>) -> HashMap<&'static str, String> {
    let mut mp = HashMap::new();
    if let Some(fields) = fields {
        mp.insert("fields", fields.join(","));
    }
    mp
}

fn parse_id_from_uri(uri: &str) -> Option<u64> {
    uri.rsplit('/').next()?.parse().ok()
}

#[derive(Debug, Clone)]
pub enum Protocol {
    HTTP,
    HTTPS,
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::HTTPS
    }
}

impl Protocol {
    pub fn get_prefix(&self) -> &str {
        match self {
            Protocol::HTTP => "http://",
            Protocol::HTTPS => "https://",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_from_json() -> anyhow::Result<()> {
        let ticket: UploadTicket = serde_json::from_str(
            r#"{
                "ticket_id": "abcdef123456",
                "uri": "/users/2433258/tickets/abcdef123456",
                "upload_link_secure": "https://1511923767.cloud.vimeo.com/upload?ticket_id=abcdef123456",
                "complete_uri": "/users/2433258/tickets/abcdef123456?video_file_id=1"
            }"#,
        )?;
        assert_eq!(ticket.ticket_id(), "abcdef123456");
        assert!(ticket.upload_link_secure().starts_with("https://"));
        Ok(())
    }

    #[test]
    fn test_video_clip_id() -> anyhow::Result<()> {
        let video: Video = serde_json::from_str(
            r#"{
                "uri": "/videos/531341",
                "name": "test.mp4",
                "duration": 10,
                "pictures": { "uri": "/videos/531341/pictures/209", "active": true }
            }"#,
        )?;
        assert_eq!(video.clip_id(), Some(531341));
        assert_eq!(
            video.pictures().as_ref().and_then(|p| p.picture_id()),
            Some(209)
        );
        Ok(())
    }

    #[test]
    fn test_paginated_videos() -> anyhow::Result<()> {
        let videos: Paginated<Video> = serde_json::from_str(
            r#"{
                "total": 2,
                "page": 1,
                "per_page": 25,
                "data": [{ "uri": "/videos/1" }, { "uri": "/videos/2" }]
            }"#,
        )?;
        assert_eq!(videos.data().len(), 2);
        assert_eq!(*videos.total(), 2);
        Ok(())
    }

    #[test]
    fn test_completed_request_verification() {
        let done = CompletedRequest::new(Some("/videos/42".to_owned()), 100, 100);
        assert_eq!(*done.clip_id(), Some(42));
        assert!(done.is_verified_complete());

        let partial = CompletedRequest::new(None, 50, 100);
        assert!(!partial.is_verified_complete());
    }

    #[test]
    fn test_get_videos_query() {
        let q = GetVideosParam {
            page: Some(2),
            per_page: Some(5),
            fields: Some(vec!["uri".to_owned(), "name".to_owned()]),
        }
        .get_query();
        assert_eq!(q.get("page").map(String::as_str), Some("2"));
        assert_eq!(q.get("fields").map(String::as_str), Some("uri,name"));
    }
}
