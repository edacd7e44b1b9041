//! Structure Endpoints

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ImageUpload, StructureDraft, StructureNode};

const STRUCTURES: &str = "/clients/structures/";

fn structure_path(id: u32, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("{}{}/{}/", STRUCTURES, id, action),
        None => format!("{}{}/", STRUCTURES, id),
    }
}

/// Multipart body carrying the draft's fields plus the picked image
fn structure_form(draft: &StructureDraft, image: &ImageUpload) -> Result<Form, ApiError> {
    let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
    if !image.mime.is_empty() {
        part = part.mime_str(&image.mime).map_err(|e| ApiError::File(e.to_string()))?;
    }

    let form = draft
        .form_fields()
        .into_iter()
        .fold(Form::new(), |form, (key, value)| form.text(key, value));
    Ok(form.part("image", part))
}

impl ApiClient {
    /// Top-level structures, each pre-nested with its children
    pub async fn fetch_structure_tree(&self) -> Result<Vec<StructureNode>, ApiError> {
        self.get_json("/clients/structures/tree/").await
    }

    /// Every descendant of `root_id`, flat, each with its own parent id
    pub async fn fetch_descendants(&self, root_id: u32) -> Result<Vec<StructureNode>, ApiError> {
        self.get_json(&structure_path(root_id, Some("children"))).await
    }

    /// Path from the top-level structure down to `id` (inclusive)
    pub async fn fetch_ancestors(&self, id: u32) -> Result<Vec<StructureNode>, ApiError> {
        self.get_json(&structure_path(id, Some("parent"))).await
    }

    /// All structures, flat
    pub async fn fetch_structures(&self) -> Result<Vec<StructureNode>, ApiError> {
        self.get_json(STRUCTURES).await
    }

    /// Sent as JSON, or as multipart when an image was picked
    pub async fn create_structure(
        &self,
        draft: &StructureDraft,
        image: Option<&ImageUpload>,
    ) -> Result<(), ApiError> {
        self.save_structure(Method::POST, STRUCTURES, draft, image).await
    }

    pub async fn update_structure(
        &self,
        id: u32,
        draft: &StructureDraft,
        image: Option<&ImageUpload>,
    ) -> Result<(), ApiError> {
        self.save_structure(Method::PATCH, &structure_path(id, None), draft, image).await
    }

    async fn save_structure(
        &self,
        method: Method,
        path: &str,
        draft: &StructureDraft,
        image: Option<&ImageUpload>,
    ) -> Result<(), ApiError> {
        match image {
            Some(image) => self.send_multipart(method, path, structure_form(draft, image)?).await,
            None => self.send_json(method, path, draft).await,
        }
    }

    pub async fn delete_structure(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&structure_path(id, None)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use reqwest::header::CONTENT_TYPE;

    fn image(mime: &str) -> ImageUpload {
        ImageUpload { file_name: "hq.png".into(), mime: mime.into(), bytes: vec![0x89, b'P', b'N', b'G'] }
    }

    #[test]
    fn test_image_goes_out_as_multipart() {
        let client = ApiClient::with_token(ConsoleConfig::with_api_url("http://api.test"), None);
        let draft = StructureDraft { name: "HQ".into(), ..Default::default() };
        let form = structure_form(&draft, &image("image/png")).unwrap();

        let request = client
            .request(Method::PATCH, &structure_path(1, None))
            .multipart(form)
            .build()
            .unwrap();

        let content_type = request.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        assert_eq!(request.url().as_str(), "http://api.test/clients/structures/1/");
    }

    #[test]
    fn test_image_without_mime_is_accepted() {
        let draft = StructureDraft::default();
        assert!(structure_form(&draft, &image("")).is_ok());
    }

    #[test]
    fn test_bad_mime_is_a_file_error() {
        let draft = StructureDraft::default();
        let result = structure_form(&draft, &image("not a mime"));
        assert!(matches!(result, Err(ApiError::File(_))));
    }

    #[test]
    fn test_structure_paths() {
        assert_eq!(structure_path(7, None), "/clients/structures/7/");
        assert_eq!(structure_path(7, Some("children")), "/clients/structures/7/children/");
        assert_eq!(structure_path(7, Some("parent")), "/clients/structures/7/parent/");
    }
}
