//! HTTP service for uploading CSV files from the browser.

use csv_uploader::{interpret, SelectedFile, UploadError, UploadReply, UploadResult, Uploader, FILE_FIELD};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Posts the picked `File` to the upload endpoint with `fetch`.
#[derive(Clone, Debug)]
pub struct BrowserUploader {
    url: String,
}

impl BrowserUploader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Uploader for BrowserUploader {
    type Blob = File;

    async fn upload(&self, file: &SelectedFile<File>) -> UploadResult<UploadReply> {
        let form_data = FormData::new().map_err(|e| js_failure("Failed to create FormData", &e))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, &file.blob, &file.name)
            .map_err(|e| js_failure("Failed to append file", &e))?;

        let response = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| UploadError::NetworkUnreachable(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::NetworkUnreachable(e.to_string()))?;
        log::debug!("Upload response status: {}", status);

        interpret(status, &body)
    }
}

fn js_failure(context: &str, err: &JsValue) -> UploadError {
    UploadError::NetworkUnreachable(format!("{}: {:?}", context, err))
}
