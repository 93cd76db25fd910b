//! Binding Request Tests

use resume_assistant_frontend::bindings::get_request;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_get_request_needs_no_preflight() {
    let request = get_request("http://127.0.0.1:9/list_conversations").expect("request builds");
    let headers = request.headers();

    assert!(headers.get("content-type").is_none());
    assert_eq!(headers.get("accept").as_deref(), Some("application/json"));
    assert_eq!(request.method(), gloo_net::http::Method::GET);
}
