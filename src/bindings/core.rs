use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiResult;

// ============================================================================
// HTTP JSON helpers
// ============================================================================

/// Bodyless `GET` asking for JSON. Only CORS-safelisted headers, so a
/// cross-origin backend is reached without a preflight.
pub fn get_request(url: &str) -> ApiResult<Request> {
    Ok(Request::get(url).header("Accept", "application/json").build()?)
}

/// `GET` a URL and decode its JSON body.
pub async fn get_json<R: DeserializeOwned>(url: &str) -> ApiResult<R> {
    let response = get_request(url)?.send().await?;
    decode(url, response).await
}

/// `POST` a JSON body and decode the JSON reply.
pub async fn post_json<A: Serialize, R: DeserializeOwned>(url: &str, args: &A) -> ApiResult<R> {
    let response = Request::post(url).json(args)?.send().await?;
    decode(url, response).await
}

/// `POST` an empty JSON object (`{}`) and decode the JSON reply.
pub async fn post_no_args<R: DeserializeOwned>(url: &str) -> ApiResult<R> {
    #[derive(Serialize)]
    struct Empty {}
    post_json(url, &Empty {}).await
}

/// `DELETE` with a JSON body and decode the JSON reply.
pub async fn delete_json<A: Serialize, R: DeserializeOwned>(url: &str, args: &A) -> ApiResult<R> {
    let response = Request::delete(url).json(args)?.send().await?;
    decode(url, response).await
}

/// The backend answers many failures with a JSON body and a non-2xx status,
/// so the body is decoded whatever the status is.
async fn decode<R: DeserializeOwned>(url: &str, response: Response) -> ApiResult<R> {
    let status = response.status();
    if !response.ok() {
        tracing::debug!(url, status, "Backend returned error status");
    }
    response.json::<R>().await.map_err(|e| {
        tracing::warn!(url, status, error = %e, "Failed to decode backend response");
        e.into()
    })
}
