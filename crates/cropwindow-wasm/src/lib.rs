//! Cropwindow WASM - WebAssembly bindings for the Cropwindow crop engine
//!
//! This crate exposes the cropwindow-core session to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `config` - Session configuration parsed from a plain JS object
//! - `session` - The interactive crop session (`JsCropWindow`)
//! - `types` - WASM-compatible wrapper types for image data
//! - `fetch` - Loading source bytes with the browser's `fetch`
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropWindow } from '@cropwindow/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const cropper = new JsCropWindow();
//! cropper.load_bytes(new Uint8Array(await file.arrayBuffer()));
//! const jpeg = cropper.crop_bytes();
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod fetch;
mod session;
mod types;

// Re-export public types
pub use config::JsCropConfig;
pub use session::JsCropWindow;
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("cropwindow panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
