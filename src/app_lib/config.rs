//! Where the auth API lives.
//!
//! The base URL is fixed at compile time through `TOKENBOARD_API_BASE_URL` and
//! can be replaced per deployment by a `window.TOKENBOARD_CONFIG` object on the
//! hosting page, e.g. `{ api_base_url: "https://auth.example.com/auth" }`.
//! Everything here ends up readable in the browser.

const DEFAULT_API_BASE_URL: &str = "/api/auth";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Compile-time value (or `/api/auth`), then the page's override if it has one.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("TOKENBOARD_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        };

        if let Some(overrides) = page_overrides() {
            overrides.apply_to(&mut config);
        }

        config
    }
}

/// Raw values read off the hosting page, not yet cleaned up.
#[derive(Default)]
struct PageOverrides {
    api_base_url: Option<String>,
}

impl PageOverrides {
    // Blank strings count as unset.
    fn apply_to(self, config: &mut AppConfig) {
        if let Some(url) = self.api_base_url.as_deref().and_then(non_blank) {
            config.api_base_url = url;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_overrides() -> Option<PageOverrides> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let object = Reflect::get(&window, &JsValue::from_str("TOKENBOARD_CONFIG")).ok()?;
    if object.is_null() || object.is_undefined() {
        return None;
    }

    let api_base_url = Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()
        .and_then(|value| value.as_string());

    Some(PageOverrides { api_base_url })
}

#[cfg(not(target_arch = "wasm32"))]
fn page_overrides() -> Option<PageOverrides> {
    None
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
