//! Request plumbing shared by the item endpoints.

use log::{debug, error};
use reqwest::Response;

use super::InventoryApi;
use crate::error::{InventoryError, Result};

impl InventoryApi {
    /// `{base_url}/items`, optionally followed by further path segments.
    ///
    /// Segments are percent-encoded because item names may contain spaces
    /// and slashes (tyre sizes such as `205/55`).
    pub(crate) fn items_url(&self, segments: &[&str]) -> String {
        let mut url = format!("{}/items", self.base_url);
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// Turns a non-success response into [`InventoryError::HttpStatus`].
    pub(crate) async fn check_status(&self, response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        debug!("{action} response status: {status}");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("{action} failed with status {status}: {body}");
        Err(InventoryError::HttpStatus { status, body })
    }
}
