use std::path::Path;

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use super::{Error, Result};

/// A readable byte source with a declared length and content type.
///
/// Reads are positioned by absolute offset and may overlap: a retried chunk
/// re-reads the same range and gets the same bytes back. The caller owns the
/// content exclusively for the duration of one upload, so `read` takes
/// `&mut self` and needs no internal locking.
#[derive(Debug)]
pub struct BinaryContent {
    source: Source,
    length: u64,
    content_type: String,
}

#[derive(Debug)]
enum Source {
    File(File),
    Memory(Bytes),
}

impl BinaryContent {
    pub async fn from_file(path: impl AsRef<Path>, content_type: &str) -> Result<Self> {
        let file = File::open(path).await?;
        let length = file.metadata().await?.len();
        Ok(Self {
            source: Source::File(file),
            length,
            content_type: content_type.to_owned(),
        })
    }

    pub fn from_bytes(bytes: impl Into<Bytes>, content_type: &str) -> Self {
        let bytes = bytes.into();
        Self {
            length: bytes.len() as u64,
            source: Source::Memory(bytes),
            content_type: content_type.to_owned(),
        }
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Reads up to `max_len` bytes starting at `offset`.
    pub async fn read(&mut self, offset: u64, max_len: u64) -> Result<Bytes> {
        if offset > self.length {
            return Err(Error::OutOfRange {
                offset,
                length: self.length,
            });
        }
        let len = max_len.min(self.length - offset);
        match self.source {
            Source::Memory(ref bytes) => {
                Ok(bytes.slice(offset as usize..(offset + len) as usize))
            }
            Source::File(ref mut file) => {
                file.seek(std::io::SeekFrom::Start(offset)).await?;
                let mut buf = vec![0u8; len as usize];
                file.read_exact(&mut buf).await?;
                Ok(buf.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_overlapping_reads_are_repeatable() -> anyhow::Result<()> {
        let mut content = BinaryContent::from_bytes(vec![7u8; 100], "video/mp4");
        assert_eq!(content.length(), 100);

        let first = content.read(10, 50).await?;
        let again = content.read(10, 50).await?;
        assert_eq!(first, again);
        assert_eq!(first.len(), 50);

        // tail read is clamped to the declared length
        let tail = content.read(90, 50).await?;
        assert_eq!(tail.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn test_read_past_end() {
        let mut content = BinaryContent::from_bytes(b"abc".to_vec(), "video/mp4");
        let err = content.read(4, 1).await.unwrap_err();
        assert!(matches!(err, Error::OutOfRange { offset: 4, length: 3 }));
    }

    #[tokio::test]
    async fn test_file_source() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("vimeo-content-{}", std::process::id()));
        tokio::fs::write(&path, (0u8..=255).collect::<Vec<_>>()).await?;

        let mut content = BinaryContent::from_file(&path, "video/mp4").await?;
        assert_eq!(content.length(), 256);
        let range = content.read(128, 4).await?;
        assert_eq!(&range[..], &[128, 129, 130, 131]);

        tokio::fs::remove_file(&path).await?;
        Ok(())
    }
}
