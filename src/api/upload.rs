//! Browser File Reading
//!
//! Loads a file picked in an `<input type="file">` into memory so it can
//! go out as a multipart part.

use wasm_bindgen_futures::JsFuture;

use crate::error::ApiError;
use crate::models::ImageUpload;

pub async fn read_image_file(file: &web_sys::File) -> Result<ImageUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    tracing::debug!(name = %file.name(), size = bytes.len(), "image read");

    Ok(ImageUpload { file_name: file.name(), mime: file.type_(), bytes })
}
