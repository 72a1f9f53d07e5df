use bytes::Bytes;

use super::*;
use crate::upload::{self, NoProgress, Progress, UploadParam, UploadTransport};

impl<'a> UploadTransport for Service<'a> {
    // POST /me/videos?type=streaming
    async fn create_ticket(&self, size: u64, content_type: &str) -> Result<UploadTicket> {
        let resp = self
            .api(reqwest::Method::POST, "/me/videos")
            .query(&[
                ("type", "streaming".to_owned()),
                ("size", size.to_string()),
                ("content_type", content_type.to_owned()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            let Error::Api(_, message) = api_error(resp).await else {
                return Err(Error::UnexpectedResp);
            };
            return Err(Error::TicketAcquisition(message));
        }
        let ticket: UploadTicket = expect_json(resp).await?;
        Ok(ticket.sized(size))
    }

    // PUT {upload_link_secure}
    async fn put_range(&self, ticket: &UploadTicket, offset: u64, bytes: Bytes) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let resp = self
            .client
            .put(ticket.upload_link_secure())
            .header(
                reqwest::header::CONTENT_RANGE,
                content_range(offset, bytes.len() as u64, *ticket.size()),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;
        let status = resp.status();
        // 308 acknowledges a partial body, the terminal chunk comes back 2xx
        if !status.is_success() && status != reqwest::StatusCode::PERMANENT_REDIRECT {
            return Err(Error::Transfer(status.as_u16()));
        }
        Ok(())
    }

    // PUT {upload_link_secure} with Content-Range: bytes */*
    async fn bytes_received(&self, ticket: &UploadTicket) -> Result<UploadProgress> {
        let resp = self
            .client
            .put(ticket.upload_link_secure())
            .header(reqwest::header::CONTENT_RANGE, "bytes */*")
            .send()
            .await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            return Err(Error::Verification(format!(
                "ticket {} unknown or expired",
                ticket.ticket_id()
            )));
        }
        if !status.is_success() && status != reqwest::StatusCode::PERMANENT_REDIRECT {
            return Err(api_error(resp).await);
        }
        // the server answers with the range it holds, e.g. Range: bytes=0-999999
        let received = resp
            .headers()
            .get(reqwest::header::RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_received)
            .unwrap_or(0);
        Ok(UploadProgress::new(received))
    }

    // DELETE {complete_uri}
    async fn complete(&self, ticket: &UploadTicket) -> Result<Option<String>> {
        let resp = self
            .api(reqwest::Method::DELETE, ticket.complete_uri())
            .send()
            .await?;
        let resp = expect_success(resp).await?;
        Ok(resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned))
    }
}

/// Parses the inclusive end of a `bytes=0-{last}` header into a byte count.
fn parse_received(range: &str) -> Option<u64> {
    let (_, end) = range.trim().strip_prefix("bytes=")?.split_once('-')?;
    Some(end.parse::<u64>().ok()? + 1)
}

/// Formats the `Content-Range` value for one chunk: `bytes {start}-{end}/{total}`.
/// Callers must not pass an empty range.
fn content_range(offset: u64, len: u64, total: u64) -> String {
    format!("bytes {}-{}/{}", offset, offset + len - 1, total)
}

impl<'a> prelude::UploadService for &Service<'a> {
    async fn upload_entire_content(self, content: &mut BinaryContent) -> Result<CompletedRequest> {
        upload::upload_entire_content(self, content, &UploadParam::default(), &NoProgress).await
    }

    async fn upload_entire_content_with<P>(
        self,
        content: &mut BinaryContent,
        param: &UploadParam,
        progress: &P,
    ) -> Result<CompletedRequest>
    where
        P: Progress + Sync,
    {
        upload::upload_entire_content(self, content, param, progress).await
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::*;

    #[test]
    fn test_parse_received() {
        assert_eq!(super::parse_received("bytes=0-999999"), Some(1_000_000));
        assert_eq!(super::parse_received("bytes=0-0"), Some(1));
        assert_eq!(super::parse_received("garbage"), None);
        assert_eq!(super::parse_received("bytes=0-"), None);
    }

    #[test]
    fn test_content_range_states_total() {
        assert_eq!(
            super::content_range(0, 1_000_000, 10_000_000),
            "bytes 0-999999/10000000"
        );
        assert_eq!(
            super::content_range(3_000_000, 500, 10_000_000),
            "bytes 3000000-3000499/10000000"
        );
    }

    #[tokio::test]
    async fn test_put_range_empty_is_noop() -> anyhow::Result<()> {
        let s = Service::new("token");
        let ticket = UploadTicket::new("t", "https://upload.invalid/none", "/tickets/t", 0);
        // nothing to place, so no request goes out at all
        s.put_range(&ticket, 0, bytes::Bytes::new()).await?;
        Ok(())
    }

    #[tokio::test]
    #[ignore = "talks to the live api, needs VIMEO_ACCESS_TOKEN and TEST_VIDEO_PATH"]
    async fn test_upload_then_delete_round_trip() -> anyhow::Result<()> {
        let s = Service::new(std::env::var("VIMEO_ACCESS_TOKEN").unwrap_or_default());
        let mut content =
            BinaryContent::from_file(std::env::var("TEST_VIDEO_PATH")?, "video/mp4").await?;
        let length = content.length();

        let completed = s.upload_entire_content(&mut content).await?;
        assert!(completed.is_verified_complete());
        assert_eq!(*completed.bytes_written(), length);
        let clip_id = (*completed.clip_id()).ok_or(anyhow::anyhow!("no clip id"))?;

        s.delete_video(clip_id).await?;
        assert!(s.get_video(clip_id, None).await?.is_none());
        Ok(())
    }
}
