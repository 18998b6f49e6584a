use anyhow::Context as _;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::domain::repository::MediaStorage;
use crate::error::FoodServiceError;

/// ImageKit-compatible upload API client.
///
/// Authenticates with HTTP basic auth (private key as the user, empty password)
/// and expects a JSON body with a `url` field.
#[derive(Clone)]
pub struct ImageKitStorage {
    pub client: reqwest::Client,
    pub upload_url: String,
    pub private_key: String,
    pub folder: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

impl MediaStorage for ImageKitStorage {
    async fn upload(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> Result<String, FoodServiceError> {
        let mut part = Part::stream(bytes).file_name(file_name.to_owned());
        if let Some(mime) = content_type {
            part = part.mime_str(mime).context("invalid video content type")?;
        }
        let form = Form::new()
            .part("file", part)
            .text("fileName", file_name.to_owned())
            .text("folder", self.folder.clone())
            .text("useUniqueFileName", "false");

        let resp = self
            .client
            .post(&self.upload_url)
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .context("send video upload")?
            .error_for_status()
            .context("media storage rejected upload")?;
        let body: UploadResponse = resp.json().await.context("decode upload response")?;
        tracing::info!(file_name, url = %body.url, "video uploaded");
        Ok(body.url)
    }
}
