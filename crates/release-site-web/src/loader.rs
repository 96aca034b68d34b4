use release_site_core::{ConfigError, SiteConfig};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no window or document available")]
    NoWindow,
    #[error("failed to load configuration: {status}")]
    Http { status: u16 },
    #[error("configuration response has no text body")]
    Body,
    #[error("browser error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        LoadError::Js(format!("{value:?}"))
    }
}

/// Fetch and parse the site configuration. One request, no retries.
///
/// # Errors
///
/// Fails on a network error, a non-success status, or a body that is not a
/// valid configuration document.
pub async fn fetch_config(path: &str) -> Result<SiteConfig, LoadError> {
    let result = fetch(path).await;
    if let Err(e) = &result {
        log::error!("Error loading configuration: {e}");
    }
    result
}

async fn fetch(path: &str) -> Result<SiteConfig, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(path, &opts)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or(LoadError::Body)?;

    let config = SiteConfig::from_json(&text)?;
    Ok(config)
}
