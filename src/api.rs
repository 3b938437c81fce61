//! API client for the BackpackBuddy backend.
//!
//! Thin request/response bindings; no retries, no state. Callers own the
//! loading flags and decide what to do with failures.

use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::types::{ApiError, Itinerary, PackingListResult, TripForm};

/// Fixed client-side file name for the downloaded itinerary PDF.
pub const PDF_FILE_NAME: &str = "BackpackBuddy_Itinerary.pdf";

const GENERATE_ITINERARY: &str = "/generate-itinerary";
const GENERATE_PACKING_LIST: &str = "/generate-packing-list";
const DOWNLOAD_ITINERARY_PDF: &str = "/download-itinerary-pdf";

/// Wrapper for the endpoints that take the whole itinerary.
#[derive(Serialize)]
struct ItineraryBody<'a> {
    itinerary: &'a Itinerary,
}

/// POST a JSON body and decode a JSON response.
async fn post_json<T, R>(url: &str, body: &T) -> Result<R, String>
where
    T: Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(error_message(&resp).await);
    }

    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and read the raw response bytes.
async fn post_binary<T: Serialize>(url: &str, body: &T) -> Result<Vec<u8>, String> {
    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(error_message(&resp).await);
    }

    resp.binary()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}

/// Backend `detail` message when the error body carries one, otherwise a
/// status-code fallback.
async fn error_message(resp: &Response) -> String {
    let status = resp.status();
    match resp.json::<ApiError>().await {
        Ok(err) => err.detail,
        Err(_) => format!("Request failed with status {}", status),
    }
}

/// Generate an itinerary from the planner form.
pub async fn generate_itinerary(base_url: &str, form: &TripForm) -> Result<Itinerary, String> {
    post_json(&format!("{}{}", base_url, GENERATE_ITINERARY), form).await
}

/// Generate a packing list for the given itinerary.
pub async fn generate_packing_list(
    base_url: &str,
    itinerary: &Itinerary,
) -> Result<PackingListResult, String> {
    post_json(
        &format!("{}{}", base_url, GENERATE_PACKING_LIST),
        &ItineraryBody { itinerary },
    )
    .await
}

/// Render the itinerary to a PDF server-side and return the raw bytes.
pub async fn download_itinerary_pdf(
    base_url: &str,
    itinerary: &Itinerary,
) -> Result<Vec<u8>, String> {
    post_binary(
        &format!("{}{}", base_url, DOWNLOAD_ITINERARY_PDF),
        &ItineraryBody { itinerary },
    )
    .await
}
