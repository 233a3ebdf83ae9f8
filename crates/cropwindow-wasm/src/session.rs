//! Crop session WASM bindings.
//!
//! [`JsCropWindow`] wraps one core `CropWindow`. The host forwards pointer
//! events in scaled-image coordinates and reads back the selection to draw.
//! Pointer handlers return `true` when the event was consumed and the host
//! should stop propagating it.
//!
//! # Example
//!
//! ```typescript
//! const cropper = new JsCropWindow({ jpeg_quality: 70 });
//! await cropper.load_url('/photos/source.jpg');
//!
//! const scaled = cropper.scaled_image();
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(scaled.rgba_pixels()), scaled.width), 0, 0);
//!
//! surface.onpointerdown = (e) => { if (cropper.pointer_down(e.offsetX, e.offsetY)) e.stopPropagation(); };
//! surface.onpointermove = (e) => { if (cropper.pointer_move(e.offsetX, e.offsetY)) e.stopPropagation(); };
//! surface.onpointerup = () => cropper.pointer_up();
//!
//! cropper.crop((dataUrl) => { preview.src = dataUrl; });
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::parse_config;
use crate::fetch::fetch_bytes;
use crate::types::JsDecodedImage;
use cropwindow_core::{CropError, CropWindow, PointerPosition, PointerTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Log `err` to the browser console and convert it for throwing.
fn report(err: CropError) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// An interactive crop session.
#[wasm_bindgen]
pub struct JsCropWindow {
    inner: Rc<RefCell<CropWindow>>,
}

#[wasm_bindgen]
impl JsCropWindow {
    /// Create a session. `config` may be omitted for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCropWindow, JsValue> {
        let config = parse_config(config)?;
        CropWindow::new(config)
            .map(Self::from_window)
            .map_err(report)
    }

    /// Whether a source image has loaded.
    #[wasm_bindgen(getter)]
    pub fn ready(&self) -> bool {
        self.inner.borrow().is_ready()
    }

    /// Load an encoded source image (JPEG or PNG).
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.borrow_mut().load_bytes(bytes).map_err(report)
    }

    /// Load a raster the host already decoded.
    pub fn load_image(&self, image: &JsDecodedImage) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .on_source_loaded(&image.to_decoded())
            .map_err(report)
    }

    /// Fetch and load a source image. Resolves once the selection exists.
    pub fn load_url(&self, url: String) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        future_to_promise(async move {
            let bytes = fetch_bytes(&url).await.inspect_err(|e| {
                web_sys::console::error_1(e);
            })?;
            inner.borrow_mut().load_bytes(&bytes).map_err(report)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Returns true when the event started a gesture.
    pub fn pointer_down(&self, x: f64, y: f64) -> bool {
        self.inner
            .borrow_mut()
            .pointer_down(PointerPosition::new(x, y))
            .is_stopped()
    }

    /// Returns true while a gesture consumes movement.
    pub fn pointer_move(&self, x: f64, y: f64) -> bool {
        self.inner
            .borrow_mut()
            .pointer_move(PointerPosition::new(x, y))
            .is_stopped()
    }

    /// Returns true when a gesture ended.
    pub fn pointer_up(&self) -> bool {
        self.inner.borrow_mut().pointer_up().is_stopped()
    }

    /// `"handle"`, `"selection"` or `"outside"`, for choosing a cursor.
    pub fn hit_test(&self, x: f64, y: f64) -> String {
        let target = match self.inner.borrow().hit_test(PointerPosition::new(x, y)) {
            PointerTarget::ResizeHandle => "handle",
            PointerTarget::Selection => "selection",
            PointerTarget::Outside => "outside",
        };
        target.to_string()
    }

    /// The selection as `{ left, top, width, height }`, or `null` before load.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        match self.inner.borrow().selection() {
            Some(region) => serde_wasm_bindgen::to_value(&region)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// The scaled image to paint under the selection. This copies.
    pub fn scaled_image(&self) -> Option<JsDecodedImage> {
        self.inner
            .borrow()
            .scaled_image()
            .map(|scaled| JsDecodedImage::from_decoded(scaled.image.clone()))
    }

    /// Factor between source and scaled pixels.
    #[wasm_bindgen(getter)]
    pub fn scale_ratio(&self) -> Option<f64> {
        self.inner.borrow().scaled_image().map(|scaled| scaled.ratio)
    }

    /// Crop the selection and call `return_result` with a JPEG data URL.
    ///
    /// Throws without calling `return_result` before a source has loaded.
    /// The callback may call back into this cropper.
    pub fn crop(&self, return_result: &js_sys::Function) -> Result<(), JsValue> {
        let url = self.crop_data_url().map_err(report)?;
        return_result.call1(&JsValue::NULL, &JsValue::from_str(&url))?;
        Ok(())
    }

    /// Crop the selection and return the raw JPEG bytes.
    pub fn crop_bytes(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .borrow()
            .crop()
            .map(|cropped| cropped.jpeg)
            .map_err(report)
    }
}

impl JsCropWindow {
    pub(crate) fn from_window(window: CropWindow) -> Self {
        Self {
            inner: Rc::new(RefCell::new(window)),
        }
    }

    /// Crop into a data URL. The session borrow ends before this returns.
    fn crop_data_url(&self) -> Result<String, CropError> {
        let cropped = self.inner.borrow().crop()?;
        Ok(cropped.to_data_url())
    }
}
