//! JS bindings of this crate, built with [`wasm_bindgen`].

mod camera_handle;

use wasm_bindgen::prelude::*;

use crate::platform;

#[doc(inline)]
pub use self::camera_handle::CameraHandle;

/// Initializes the logger printing into the browser console.
///
/// Should be called once before any other interaction with this library.
#[wasm_bindgen(js_name = initLogger)]
pub fn init_logger() {
    platform::set_panic_hook();
    platform::init_logger();
}
