//! Google Drive upload adapter
//!
//! Implements the AudioStorage port. API flow:
//! 1. Multipart upload of JSON metadata plus the MP3 body
//! 2. Permission grant making the file readable by anyone with the link
//! 3. Playback through the `uc?export=download` direct link

use crate::adapters::services::http;
use crate::error::{AppError, Result};
use crate::ports::cloud::AudioStorage;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Request};
use serde::{Deserialize, Serialize};

const DRIVE_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";
const DRIVE_DOWNLOAD_URL: &str = "https://drive.google.com/uc?export=download&id=";
const AUDIO_MIME: &str = "audio/mpeg";

/// Google Drive service implementation
pub struct GoogleDriveService {
    client: Client,
    access_token: String,
    upload_base: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileMetadata<'a> {
    name: &'a str,
    mime_type: &'a str,
}

#[derive(Debug, Serialize)]
struct PermissionRequest<'a> {
    role: &'a str,
    #[serde(rename = "type")]
    grantee: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadedFile {
    id: Option<String>,
}

impl GoogleDriveService {
    pub fn new(client: Client, access_token: String) -> Self {
        Self {
            client,
            access_token,
            upload_base: DRIVE_UPLOAD_BASE.to_string(),
            api_base: DRIVE_API_BASE.to_string(),
        }
    }

    /// Point both the upload and metadata endpoints at another host
    pub fn with_base_urls(
        mut self,
        upload_base: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        self.upload_base = upload_base.into();
        self.api_base = api_base.into();
        self
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.access_token.is_empty() {
            return Err(AppError::MissingCredential(
                "Google Drive Access Token이 설정되지 않았습니다.".to_string(),
            ));
        }
        Ok(())
    }

    fn build_upload_request(&self, audio: Vec<u8>, file_name: &str) -> Result<Request> {
        let metadata = serde_json::to_string(&FileMetadata {
            name: file_name,
            mime_type: AUDIO_MIME,
        })?;

        let form = Form::new()
            .part(
                "metadata",
                Part::text(metadata).mime_str("application/json")?,
            )
            .part(
                "file",
                Part::bytes(audio)
                    .file_name(file_name.to_string())
                    .mime_str(AUDIO_MIME)?,
            );

        let request = self
            .client
            .post(format!("{}/files?uploadType=multipart", self.upload_base))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .multipart(form)
            .build()?;
        Ok(request)
    }

    fn build_permission_request(&self, file_id: &str) -> Result<Request> {
        let request = self
            .client
            .post(format!("{}/files/{}/permissions", self.api_base, file_id))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(&PermissionRequest {
                role: "reader",
                grantee: "anyone",
            })
            .build()?;
        Ok(request)
    }

    fn extract_file_id(uploaded: UploadedFile) -> Result<String> {
        uploaded.id.filter(|id| !id.is_empty()).ok_or_else(|| {
            AppError::Upload("Upload response did not include a file id".to_string())
        })
    }
}

#[async_trait]
impl AudioStorage for GoogleDriveService {
    async fn upload(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        self.ensure_configured()?;

        log::info!(
            "Uploading {} ({} bytes) to Google Drive",
            file_name,
            audio.len()
        );

        let request = self.build_upload_request(audio, file_name)?;
        let response =
            http::send(&self.client, request, "Google Drive upload", AppError::Upload).await?;

        let uploaded: UploadedFile = response
            .json()
            .await
            .map_err(|e| AppError::Upload(format!("Failed to parse upload response: {}", e)))?;

        let file_id = Self::extract_file_id(uploaded)?;
        log::info!("File uploaded successfully: {}", file_id);
        Ok(file_id)
    }

    async fn grant_public_read(&self, file_id: &str) -> Result<()> {
        self.ensure_configured()?;

        log::info!("Granting public read access to Drive file {}", file_id);

        let request = self.build_permission_request(file_id)?;
        http::send(
            &self.client,
            request,
            "Google Drive permission",
            AppError::Upload,
        )
        .await?;
        Ok(())
    }

    fn public_url(&self, file_id: &str) -> String {
        format!("{}{}", DRIVE_DOWNLOAD_URL, file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::services::http::testing::{header, json_body};

    fn service() -> GoogleDriveService {
        GoogleDriveService::new(Client::new(), "ya29.test".to_string())
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            service().public_url("abc123"),
            "https://drive.google.com/uc?export=download&id=abc123"
        );
    }

    #[test]
    fn test_upload_request_is_multipart() {
        let request = service()
            .build_upload_request(b"ID3".to_vec(), "Audio Review - Note - 1.mp3")
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart"
        );
        assert_eq!(header(&request, "authorization"), Some("Bearer ya29.test"));
        assert!(header(&request, "content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
    }

    #[test]
    fn test_permission_request_uses_file_id() {
        let request = service().build_permission_request("abc123").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://www.googleapis.com/drive/v3/files/abc123/permissions"
        );
        assert_eq!(
            json_body(&request),
            serde_json::json!({"role": "reader", "type": "anyone"})
        );
    }

    #[test]
    fn test_extract_file_id() {
        let uploaded: UploadedFile = serde_json::from_str(
            r#"{"kind":"drive#file","id":"abc123","name":"a.mp3","mimeType":"audio/mpeg"}"#,
        )
        .unwrap();
        assert_eq!(GoogleDriveService::extract_file_id(uploaded).unwrap(), "abc123");

        let missing: UploadedFile = serde_json::from_str(r#"{"kind":"drive#file"}"#).unwrap();
        assert!(matches!(
            GoogleDriveService::extract_file_id(missing),
            Err(AppError::Upload(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_any_request() {
        let service = GoogleDriveService::new(Client::new(), String::new())
            .with_base_urls("http://invalid.invalid", "http://invalid.invalid");
        let err = service.upload(vec![1, 2, 3], "a.mp3").await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(_)));
    }
}
