//! REST API Client
//!
//! Frontend bindings to the structures backend, organized by domain.
//! Every request carries the bearer token the login screen stored.

mod level;
mod structure;
mod upload;

pub use upload::read_image_file;

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ConsoleConfig, TOKEN_STORAGE_KEY};
use crate::error::ApiError;

#[derive(Debug, Clone)]
enum TokenSource {
    /// Read `localStorage` on every request so a fresh login is picked up
    LocalStorage,
    Fixed(Option<String>),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ConsoleConfig,
    token: TokenSource,
}

impl ApiClient {
    /// Client for the browser: configured URL, token from `localStorage`
    pub fn from_browser(config: ConsoleConfig) -> Self {
        Self { http: reqwest::Client::new(), config, token: TokenSource::LocalStorage }
    }

    pub fn with_token(config: ConsoleConfig, token: Option<String>) -> Self {
        Self { http: reqwest::Client::new(), config, token: TokenSource::Fixed(token) }
    }

    fn token(&self) -> Option<String> {
        match &self.token {
            TokenSource::LocalStorage => stored_access_token(),
            TokenSource::Fixed(token) => token.clone(),
        }
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self.request(method, path).json(body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn send_multipart(&self, method: Method, path: &str, form: Form) -> Result<(), ApiError> {
        let response = self.request(method, path).multipart(form).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

/// Access token written by the login screen, if any
pub fn stored_access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?.filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn client(token: Option<&str>) -> ApiClient {
        ApiClient::with_token(
            ConsoleConfig::with_api_url("http://api.test/"),
            token.map(str::to_string),
        )
    }

    #[test]
    fn test_request_carries_bearer_token() {
        let request = client(Some("abc123"))
            .request(Method::GET, "/clients/structures/tree/")
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "http://api.test/clients/structures/tree/");
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_request_without_token() {
        let request = client(None).request(Method::DELETE, "clients/structures/4/").build().unwrap();

        assert_eq!(request.method(), &Method::DELETE);
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
