//! Session configuration passed from JavaScript.

use crate::types::filter_from_u8;
use cropwindow_core::CropConfig;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible crop configuration.
///
/// Every field is optional; missing fields keep the engine defaults. The
/// filter is a number (see `filter_from_u8`) and quality is 1-100.
///
/// # Example (TypeScript)
/// ```typescript
/// const window = new JsCropWindow({ target_width: 368, target_height: 224, jpeg_quality: 70 });
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsCropConfig {
    #[serde(default)]
    pub container_size: Option<u32>,
    #[serde(default)]
    pub target_width: Option<u32>,
    #[serde(default)]
    pub target_height: Option<u32>,
    #[serde(default)]
    pub initial_selection_width: Option<u32>,
    #[serde(default)]
    pub border_width: Option<u32>,
    #[serde(default)]
    pub handle_size: Option<u32>,
    #[serde(default)]
    pub jpeg_quality: Option<u8>,
    #[serde(default)]
    pub filter: Option<u8>,
}

impl From<JsCropConfig> for CropConfig {
    fn from(js: JsCropConfig) -> Self {
        let defaults = CropConfig::default();
        CropConfig {
            container_size: js.container_size.unwrap_or(defaults.container_size),
            target_width: js.target_width.unwrap_or(defaults.target_width),
            target_height: js.target_height.unwrap_or(defaults.target_height),
            initial_selection_width: js
                .initial_selection_width
                .unwrap_or(defaults.initial_selection_width),
            border_width: js.border_width.unwrap_or(defaults.border_width),
            handle_size: js.handle_size.unwrap_or(defaults.handle_size),
            jpeg_quality: js.jpeg_quality.unwrap_or(defaults.jpeg_quality),
            filter: js.filter.map(filter_from_u8).unwrap_or(defaults.filter),
        }
    }
}

/// Parse a configuration object. `undefined` and `null` mean all defaults.
pub(crate) fn parse_config(value: JsValue) -> Result<CropConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(CropConfig::default());
    }
    let js: JsCropConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
    Ok(js.into())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_undefined() {
        assert_eq!(parse_config(JsValue::UNDEFINED).unwrap(), CropConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_parse_rejects_wrong_types() {
        let value = serde_wasm_bindgen::to_value(&"not a config").unwrap();
        assert!(parse_config(value).is_err());
    }
}
