use gallery_shared::{DesignTone, NewThemeImage, ThemeImage, ThemeImageUpdate, WebsiteType};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Get the API base URL from environment or use default
fn api_base() -> String {
    std::option_env!("BACKEND_API_URL")
        .unwrap_or("http://127.0.0.1:8080")
        .to_string()
}

/// Send a request with an optional JSON body and return the raw response.
async fn send_request(method: &str, url: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }

    let window = web_sys::window().ok_or("No window object")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| format!("Response error: {:?}", e))?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    Ok(resp)
}

/// Parse a response body as JSON into `T`.
async fn read_json<T>(resp: Response) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let json = JsFuture::from(resp.json().map_err(|e| format!("JSON error: {:?}", e))?)
        .await
        .map_err(|e| format!("JSON parse error: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Deserialize error: {:?}", e))
}

/// Fetch approved images matching both classification tags
pub async fn fetch_approved_images(
    website_type: WebsiteType,
    design_tone: DesignTone,
) -> Result<Vec<ThemeImage>, String> {
    let url = format!(
        "{}/api/images/get-approved?websiteType={}&designTone={}",
        api_base(),
        js_sys::encode_uri_component(website_type.as_str()),
        js_sys::encode_uri_component(design_tone.as_str()),
    );
    let resp = send_request("GET", &url, None).await?;
    read_json::<Vec<ThemeImage>>(resp).await
}

/// Fetch every image, pending included, for the vendor dashboard
pub async fn fetch_vendor_images() -> Result<Vec<ThemeImage>, String> {
    let url = format!("{}/api/images/vendor-images", api_base());
    let resp = send_request("GET", &url, None).await?;
    read_json::<Vec<ThemeImage>>(resp).await
}

/// Add a new image; the server stores it as Pending
pub async fn add_image(input: &NewThemeImage) -> Result<ThemeImage, String> {
    let url = format!("{}/api/images/add", api_base());
    let body = serde_json::to_string(input).map_err(|e| format!("Serialize error: {}", e))?;
    let resp = send_request("POST", &url, Some(body)).await?;
    read_json::<ThemeImage>(resp).await
}

/// Update fields of an existing image
pub async fn update_image(id: i64, input: &ThemeImageUpdate) -> Result<ThemeImage, String> {
    let url = format!("{}/api/images/update/{}", api_base(), id);
    let body = serde_json::to_string(input).map_err(|e| format!("Serialize error: {}", e))?;
    let resp = send_request("PUT", &url, Some(body)).await?;
    read_json::<ThemeImage>(resp).await
}

/// Delete an image
pub async fn delete_image(id: i64) -> Result<(), String> {
    let url = format!("{}/api/images/delete/{}", api_base(), id);
    send_request("DELETE", &url, None).await?;
    Ok(())
}
