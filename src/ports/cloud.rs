/// Cloud storage port trait
///
/// Publishing an object is a two-step protocol: upload, then grant public read.
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for audio upload targets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioStorage: Send + Sync {
    /// Uploads an MP3 and returns the stored object's id
    async fn upload(&self, audio: Vec<u8>, file_name: &str) -> Result<String>;

    /// Makes an uploaded object readable by anyone with the link
    async fn grant_public_read(&self, file_id: &str) -> Result<()>;

    /// Direct-download URL for an object
    fn public_url(&self, file_id: &str) -> String;
}
