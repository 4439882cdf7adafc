#![forbid(unsafe_code)]

//! Browser entry points for iconhue.
//!
//! `startGallery` fills a page list with original and recolored icons and
//! wires a color input to retint the copies; `recolorSvg` recolors a single
//! markup string.

#[cfg(target_arch = "wasm32")]
mod web;

use ih_gallery::GalleryConfig;
use ih_svg::{SvgDocument, colorize};
use serde::Deserialize;
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
pub use web::{DomNode, DomSurface, WebFetcher};

fn js_error(message: impl Into<String>) -> JsValue {
    JsValue::from_str(&message.into())
}

fn parse_js_value_or_default<T>(value: Option<JsValue>) -> Result<T, JsValue>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(raw) if raw.is_undefined() || raw.is_null() => Ok(T::default()),
        Some(raw) => {
            #[cfg(target_arch = "wasm32")]
            {
                serde_wasm_bindgen::from_value(raw)
                    .map_err(|err| js_error(format!("invalid config: {err}")))
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = raw;
                Ok(T::default())
            }
        }
    }
}

/// Resolve the gallery configuration from optional JS overrides.
fn gallery_config(config: Option<JsValue>) -> Result<GalleryConfig, JsValue> {
    let config: GalleryConfig = parse_js_value_or_default(config)?;
    config
        .validate()
        .map_err(|err| js_error(err.to_string()))?;
    Ok(config)
}

/// Recolor a standalone SVG document toward `color`.
pub fn recolor_markup(markup: &str, color: &str) -> Result<String, String> {
    let mut document = SvgDocument::parse(markup).map_err(|err| err.to_string())?;
    colorize(document.root_mut(), color).map_err(|err| err.to_string())?;
    Ok(document.to_string())
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = recolorSvg))]
pub fn recolor_svg_js(markup: &str, color: &str) -> Result<String, JsValue> {
    recolor_markup(markup, color).map_err(js_error)
}

/// Load the gallery into the element `container_id` and retint the copies
/// whenever the color input `input_id` changes.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = startGallery)]
pub fn start_gallery_js(
    container_id: &str,
    input_id: &str,
    config: Option<JsValue>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = gallery_config(config)?;
    web::start_gallery(container_id, input_id, config)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start_gallery_js(
    _container_id: &str,
    _input_id: &str,
    config: Option<JsValue>,
) -> Result<(), JsValue> {
    gallery_config(config)?;
    Err(js_error("startGallery is only available on wasm32 targets"))
}

/// Default configuration as JSON, for pages that want to show or tweak it.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = defaultConfig))]
pub fn default_config_js() -> Result<String, JsValue> {
    serde_json::to_string(&GalleryConfig::default())
        .map_err(|err| js_error(format!("failed to serialize config: {err}")))
}
