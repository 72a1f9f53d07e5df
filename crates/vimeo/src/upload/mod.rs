//! Chunked resumable upload engine.
//!
//! One upload is a sequential loop over a server-issued ticket:
//! acquire ticket -> send chunk -> verify server offset -> advance, rewind
//! or finalize. The send cursor only ever moves to the offset the server
//! reports as durably received, never on a successful send alone, so
//! duplicate or lost chunk deliveries are reconciled automatically.

use bytes::Bytes;
use tracing::{debug, warn};

use super::consts;
use super::{BinaryContent, CompletedRequest, Error, Result, UploadProgress, UploadTicket};

/// Remote side of one resumable upload, as four calls. `Service` implements
/// this over reqwest; tests drive the engine with scripted fakes.
///
/// None of these retry internally. The retry policy lives in
/// [`upload_entire_content`].
pub trait UploadTransport {
    /// POST a new upload ticket sized to the content.
    fn create_ticket(
        &self,
        size: u64,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<UploadTicket>> + Send;

    /// PUT one byte range, tagged with its absolute offset.
    fn put_range(
        &self,
        ticket: &UploadTicket,
        offset: u64,
        bytes: Bytes,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Ask the server how many bytes it has durably received for the ticket.
    fn bytes_received(
        &self,
        ticket: &UploadTicket,
    ) -> impl std::future::Future<Output = Result<UploadProgress>> + Send;

    /// Convert the fully received stream into a clip; returns the clip uri.
    fn complete(
        &self,
        ticket: &UploadTicket,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
}

/// Observer for upload progress. All methods default to no-ops.
pub trait Progress {
    fn started(&self, _total: u64) {}
    /// Called after each verification round with the server-confirmed offset.
    fn verified(&self, _bytes: u64) {}
    fn done(&self) {}
}

/// For callers that do not care about progress.
pub struct NoProgress;

impl Progress for NoProgress {}

#[derive(Debug, Default, Clone)]
pub struct UploadParam {
    pub chunk_size: Option<u64>,
    pub max_retries: Option<u32>,
}

/// Drives one upload from ticket acquisition to finalize.
///
/// Progression: not started -> ticket acquired -> transferring <-> verifying
/// -> completed, or failed. Failures carry the last verified offset so the
/// caller can decide whether to restart with a fresh ticket.
pub async fn upload_entire_content<T, P>(
    transport: &T,
    content: &mut BinaryContent,
    param: &UploadParam,
    progress: &P,
) -> Result<CompletedRequest>
where
    T: UploadTransport,
    P: Progress,
{
    let total = content.length();
    let chunk_size = param.chunk_size.unwrap_or(consts::DEFAULT_CHUNK_SIZE).max(1);
    let max_retries = param.max_retries.unwrap_or(consts::MAX_CHUNK_RETRIES);

    // --- acquire ticket
    let ticket = transport
        .create_ticket(total, content.content_type())
        .await?;
    debug!(ticket_id = %ticket.ticket_id(), total, chunk_size, "upload ticket acquired");
    progress.started(total);

    // Server-confirmed offset. The send cursor is always this value.
    let mut verified: u64 = 0;
    // Consecutive rounds without verified progress on the current chunk.
    let mut retries: u32 = 0;

    while verified < total {
        // --- transfer one chunk
        let chunk = content.read(verified, chunk_size).await?;
        let sent_to = verified + chunk.len() as u64;
        debug!(offset = verified, len = chunk.len(), "sending chunk");
        if let Err(e) = transport.put_range(&ticket, verified, chunk).await {
            if !e.is_transient() {
                return Err(e);
            }
            if retries >= max_retries {
                warn!(bytes_written = verified, "chunk retry budget exhausted");
                return Err(Error::TransferExhausted {
                    bytes_written: verified,
                });
            }
            retries += 1;
            warn!(offset = verified, retries, "transient chunk failure, resending");
            continue;
        }

        // --- verify against the server's offset
        let reported = match transport.bytes_received(&ticket).await {
            Ok(p) => *p.bytes_received(),
            // An unknown or expired ticket is terminal; only transport
            // hiccups are worth re-asking about.
            Err(e) if e.is_transient() => {
                if retries >= max_retries {
                    return Err(Error::TransferExhausted {
                        bytes_written: verified,
                    });
                }
                retries += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        if reported < sent_to {
            // The server lost some of what we believed was sent. Rewind the
            // cursor to its offset; resending an already-held range is a
            // no-op on its side.
            warn!(reported, sent_to, "server behind send cursor, rewinding");
        }
        if reported > verified {
            retries = 0;
        } else if retries >= max_retries {
            return Err(Error::TransferExhausted {
                bytes_written: verified,
            });
        } else {
            retries += 1;
        }
        verified = reported.min(total);
        progress.verified(verified);
    }

    // --- finalize
    let clip_uri = transport.complete(&ticket).await?;
    debug!(clip_uri = clip_uri.as_deref(), bytes_written = verified, "upload finalized");
    progress.done();
    Ok(CompletedRequest::new(clip_uri, verified, total))
}
