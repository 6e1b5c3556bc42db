//! Native multipart uploader built on reqwest.

use reqwest::multipart::{Form, Part};

use super::Uploader;
use crate::config::{UploaderConfig, FILE_FIELD};
use crate::error::{UploadError, UploadResult};
use crate::models::{SelectedFile, UploadReply};
use crate::response::interpret;

/// Posts files to a fixed upload URL.
#[derive(Clone, Debug)]
pub struct HttpUploader {
    client: reqwest::Client,
    url: String,
}

impl HttpUploader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &UploaderConfig) -> Self {
        Self::new(config.upload_url.clone())
    }
}

impl Uploader for HttpUploader {
    type Blob = Vec<u8>;

    async fn upload(&self, file: &SelectedFile<Vec<u8>>) -> UploadResult<UploadReply> {
        let part = Part::bytes(file.blob.clone()).file_name(file.name.clone());
        let form = Form::new().part(FILE_FIELD, part);

        log::debug!("POST {} ({} bytes)", self.url, file.size_bytes);
        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::NetworkUnreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::NetworkUnreachable(e.to_string()))?;
        log::debug!("Upload response status: {}", status);

        interpret(status, &body)
    }
}
