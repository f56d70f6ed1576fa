//! JS side handle to a [`CameraController`].

use futures::StreamExt as _;
use js_sys::{Array, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{HtmlCanvasElement, HtmlVideoElement, MediaStream};

use crate::{
    api::CameraException,
    camera::CameraController,
    media::{CaptureConstraints, DeviceInfo},
    platform::{self, WebMediaDevices},
};

/// [`CameraController`] bound to the browser platform.
type WebCameraController =
    CameraController<WebMediaDevices, HtmlVideoElement, HtmlCanvasElement>;

/// Handle to a camera bound to the provided `<video>` and `<canvas>`
/// elements.
///
/// All the asynchronous methods return a `Promise` rejected with a
/// [`CameraException`] on failure.
#[wasm_bindgen]
#[derive(Clone)]
pub struct CameraHandle(WebCameraController);

#[wasm_bindgen]
impl CameraHandle {
    /// Creates a new [`CameraHandle`] displaying the capture on the provided
    /// `video` element.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(video: HtmlVideoElement, canvas: HtmlCanvasElement) -> Self {
        platform::set_panic_hook();
        Self(CameraController::new(WebMediaDevices, video, canvas))
    }

    /// Sets custom capture constraints, replacing the default ones.
    ///
    /// Passing an empty object switches back to the default constraints.
    ///
    /// # Errors
    ///
    /// With [`CameraException`] if the provided object is not a valid
    /// constraints object.
    pub fn set_constraints(
        &self,
        constraints: &JsValue,
    ) -> Result<CameraHandle, JsValue> {
        let caps: CaptureConstraints = constraints
            .into_serde()
            .map_err(tracerr::wrap!(=> serde_json::Error))
            .map_err(CameraException::from)?;
        self.0.set_constraints(caps);
        Ok(self.clone())
    }

    /// Returns the constraints the capture is requested with.
    ///
    /// # Errors
    ///
    /// With [`CameraException`] if the constraints couldn't be converted into
    /// a JS object.
    pub fn effective_constraints(&self) -> Result<JsValue, JsValue> {
        to_js(&self.0.effective_constraints())
    }

    /// Requests the camera permission from the user.
    ///
    /// Returns `Promise` resolved with this [`CameraHandle`].
    pub fn request_permission(&self) -> Promise {
        let this = self.0.clone();
        future_to_promise(async move {
            let camera = this
                .request_permission()
                .await
                .map_err(CameraException::from)?;
            Ok(Self(camera).into())
        })
    }

    /// Starts the capture, displaying it on the `<video>` element.
    pub fn start(&self) -> Promise {
        let this = self.0.clone();
        future_to_promise(async move {
            this.start().await.map_err(CameraException::from)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Stops the active capture, if any.
    pub fn stop(&self) {
        self.0.stop();
    }

    /// Mirrors the `<video>` element horizontally.
    pub fn mirror(&self) {
        self.0.mirror();
    }

    /// Removes the mirroring of the `<video>` element.
    pub fn unmirror(&self) {
        self.0.unmirror();
    }

    /// Switches between the front and the back cameras.
    ///
    /// Returns `Promise` resolved with the new facing mode.
    pub fn flip_camera(&self) -> Promise {
        let this = self.0.clone();
        future_to_promise(async move {
            let facing_mode =
                this.flip_camera().await.map_err(CameraException::from)?;
            Ok(JsValue::from_str(facing_mode.as_str()))
        })
    }

    /// Switches the capture to the device with the provided `device_id`.
    pub fn select_device(&self, device_id: String) -> Promise {
        let this = self.0.clone();
        future_to_promise(async move {
            this.select_device(device_id)
                .await
                .map_err(CameraException::from)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Returns `Promise` resolved with an array of the available video input
    /// devices.
    pub fn list_devices(&self) -> Promise {
        let this = self.0.clone();
        future_to_promise(async move {
            let devices =
                this.list_devices().await.map_err(CameraException::from)?;
            devices_to_js(&devices)
        })
    }

    /// Same as [`CameraHandle::list_devices()`], but always queries the
    /// platform.
    pub fn refresh_devices(&self) -> Promise {
        let this = self.0.clone();
        future_to_promise(async move {
            let devices =
                this.refresh_devices().await.map_err(CameraException::from)?;
            devices_to_js(&devices)
        })
    }

    /// Returns the active capture stream.
    #[must_use]
    pub fn active_stream(&self) -> Option<MediaStream> {
        self.0.active_stream()
    }

    /// Returns the name of the current camera state.
    #[must_use]
    pub fn state(&self) -> String {
        self.0.state().to_string()
    }

    /// Calls the provided callback with the name of the camera state each
    /// time it changes.
    pub fn on_state_change(&self, f: js_sys::Function) {
        let mut states = self.0.on_state_change();
        platform::spawn(async move {
            while let Some(state) = states.next().await {
                let state = JsValue::from_str(&state.to_string());
                if let Err(e) = f.call1(&JsValue::NULL, &state) {
                    log::error!(
                        "State change callback failed: {}",
                        platform::Error::from(e),
                    );
                }
            }
        });
    }

    /// Returns the `<video>` element the capture is displayed on.
    #[must_use]
    pub fn video(&self) -> HtmlVideoElement {
        self.0.display_surface().clone()
    }

    /// Returns the off-screen `<canvas>` element.
    #[must_use]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.0.draw_surface().clone()
    }
}

/// Converts the provided value into a plain JS object.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value)
        .map_err(tracerr::wrap!(=> serde_json::Error))
        .map_err(|e| CameraException::js_conversion(e).into())
}

/// Converts the provided [`DeviceInfo`]s into a JS array of plain objects.
fn devices_to_js(devices: &[DeviceInfo]) -> Result<JsValue, JsValue> {
    devices
        .iter()
        .map(to_js)
        .collect::<Result<Array, _>>()
        .map(JsValue::from)
}
