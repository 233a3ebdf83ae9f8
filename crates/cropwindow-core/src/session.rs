//! One crop session: load, interact, crop.
//!
//! A [`CropWindow`] starts empty. Once a source image has loaded, the scaling
//! engine runs and the initial selection is created; from then on pointer
//! events move or resize the selection and [`CropWindow::crop`] produces
//! output. Until loading succeeds every pointer event is ignored and cropping
//! fails with [`CropError::NotReady`].
//!
//! # Example
//!
//! ```ignore
//! use cropwindow_core::{CropConfig, CropWindow, PointerPosition};
//!
//! let mut window = CropWindow::new(CropConfig::default())?;
//! window.load_bytes(&bytes)?;
//!
//! window.pointer_down(PointerPosition::new(300.0, 150.0));
//! window.pointer_move(PointerPosition::new(250.0, 120.0));
//! window.pointer_up();
//!
//! window.crop_with(|cropped| upload(cropped.to_data_url()))?;
//! ```

use crate::compositor::{composite_crop, CroppedImage};
use crate::config::CropConfig;
use crate::decode::{decode_source, DecodedImage};
use crate::error::CropError;
use crate::geometry::SelectionRegion;
use crate::gesture::{
    hit_test, DragController, GestureState, PointerPosition, PointerTarget, Propagation,
    ResizeController,
};
use crate::scaling::{scale_to_container, ScaledImage};

/// State that only exists once a source image has loaded.
#[derive(Debug, Clone)]
struct Loaded {
    scaled: ScaledImage,
    region: SelectionRegion,
    gesture: GestureState,
}

/// Interactive crop session over one source image.
#[derive(Debug, Clone)]
pub struct CropWindow {
    config: CropConfig,
    loaded: Option<Loaded>,
}

impl CropWindow {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns `CropError::Config` if `config` doesn't validate.
    pub fn new(config: CropConfig) -> Result<Self, CropError> {
        config.validate()?;
        Ok(Self {
            config,
            loaded: None,
        })
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Whether a source image has loaded and a selection exists.
    pub fn is_ready(&self) -> bool {
        self.loaded.is_some()
    }

    /// Decode `bytes` and continue with [`CropWindow::on_source_loaded`].
    ///
    /// On failure the session keeps whatever state it had before.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), CropError> {
        let source = decode_source(bytes).inspect_err(|e| {
            tracing::warn!(error = %e, len = bytes.len(), "source image failed to load");
        })?;
        self.on_source_loaded(&source)
    }

    /// Scale a fully decoded source image and create the initial selection.
    ///
    /// Replaces any previously loaded image and cancels an active gesture.
    /// A source whose pixel buffer doesn't match its dimensions is rejected
    /// and the previous state is kept.
    pub fn on_source_loaded(&mut self, source: &DecodedImage) -> Result<(), CropError> {
        let scaled = scale_to_container(source, self.config.container_size, self.config.filter)?;
        let region = SelectionRegion::create(
            scaled.bounds(),
            self.config.initial_selection_width,
            self.config.aspect_ratio(),
        );

        tracing::debug!(
            source_width = scaled.source_width,
            source_height = scaled.source_height,
            scaled_width = scaled.width(),
            scaled_height = scaled.height(),
            ratio = scaled.ratio,
            "source image scaled"
        );

        self.loaded = Some(Loaded {
            scaled,
            region,
            gesture: GestureState::Idle,
        });
        Ok(())
    }

    /// The scaled raster the host paints under the selection.
    pub fn scaled_image(&self) -> Option<&ScaledImage> {
        self.loaded.as_ref().map(|l| &l.scaled)
    }

    /// The current selection, in scaled-image coordinates.
    pub fn selection(&self) -> Option<SelectionRegion> {
        self.loaded.as_ref().map(|l| l.region)
    }

    /// The active gesture. `Idle` before loading.
    pub fn gesture(&self) -> GestureState {
        self.loaded
            .as_ref()
            .map(|l| l.gesture)
            .unwrap_or_default()
    }

    /// What a pointer at `position` would hit.
    pub fn hit_test(&self, position: PointerPosition) -> PointerTarget {
        match &self.loaded {
            Some(loaded) => hit_test(&loaded.region, position, self.config.handle_size),
            None => PointerTarget::Outside,
        }
    }

    /// Start a gesture if the pointer went down on the handle or selection.
    ///
    /// Ignored while another gesture is active.
    pub fn pointer_down(&mut self, position: PointerPosition) -> Propagation {
        let target = self.hit_test(position);
        let drag = self.drag_controller();
        let resize = self.resize_controller();
        let Some(loaded) = self.loaded.as_mut() else {
            return Propagation::Continue;
        };
        if !loaded.gesture.is_idle() {
            return Propagation::Stop;
        }

        loaded.gesture = match (target, drag, resize) {
            (PointerTarget::ResizeHandle, _, Some(resize)) => {
                GestureState::Resizing(resize.begin(loaded.region, position))
            }
            (PointerTarget::Selection, Some(drag), _) => {
                GestureState::Dragging(drag.begin(loaded.region, position))
            }
            _ => return Propagation::Continue,
        };

        tracing::debug!(?target, region = ?loaded.region, "gesture started");
        Propagation::Stop
    }

    /// Apply pointer movement to the active gesture.
    ///
    /// A resize takes precedence, so one move event never runs both paths.
    /// A rejected resize leaves the selection unchanged.
    pub fn pointer_move(&mut self, position: PointerPosition) -> Propagation {
        let drag = self.drag_controller();
        let resize = self.resize_controller();
        let Some(loaded) = self.loaded.as_mut() else {
            return Propagation::Continue;
        };

        match (loaded.gesture, drag, resize) {
            (GestureState::Resizing(session), _, Some(resize)) => {
                match resize.update(&session, position) {
                    Some(region) => loaded.region = region,
                    None => tracing::trace!(?position, "resize rejected at bounds"),
                }
                Propagation::Stop
            }
            (GestureState::Dragging(session), Some(drag), _) => {
                loaded.region = drag.update(&session, position);
                Propagation::Stop
            }
            _ => Propagation::Continue,
        }
    }

    /// End the active gesture, wherever the pointer is.
    pub fn pointer_up(&mut self) -> Propagation {
        let Some(loaded) = self.loaded.as_mut() else {
            return Propagation::Continue;
        };
        if loaded.gesture.is_idle() {
            return Propagation::Continue;
        }

        loaded.gesture = GestureState::Idle;
        tracing::debug!(region = ?loaded.region, "gesture ended");
        Propagation::Stop
    }

    /// Render and encode the current selection.
    ///
    /// # Errors
    ///
    /// Returns `CropError::NotReady` before a source image has loaded.
    pub fn crop(&self) -> Result<CroppedImage, CropError> {
        let loaded = self.loaded.as_ref().ok_or(CropError::NotReady)?;
        composite_crop(&loaded.scaled.image, &loaded.region, &self.config)
    }

    /// Crop and hand the result to `return_result`, which runs exactly once
    /// on success and not at all on failure.
    pub fn crop_with<F>(&self, return_result: F) -> Result<(), CropError>
    where
        F: FnOnce(CroppedImage),
    {
        let cropped = self.crop()?;
        return_result(cropped);
        Ok(())
    }

    fn drag_controller(&self) -> Option<DragController> {
        self.loaded
            .as_ref()
            .map(|l| DragController::new(l.scaled.bounds()))
    }

    fn resize_controller(&self) -> Option<ResizeController> {
        self.loaded.as_ref().map(|l| {
            ResizeController::new(
                l.scaled.bounds(),
                self.config.aspect_ratio(),
                self.config.border_width,
            )
        })
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
