//! Platform-specific functionality.
//!
//! [`CameraController`] talks to the host platform only through the traits
//! declared here. The browser implementation lives in the [`wasm`] module and
//! is compiled for `wasm32` targets only.
//!
//! [`CameraController`]: crate::CameraController

mod error;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use async_trait::async_trait;
use tracerr::Traced;

use crate::media::{CaptureConstraints, DeviceInfo};

#[doc(inline)]
pub use self::error::Error;

#[cfg(target_arch = "wasm32")]
#[doc(inline)]
pub use self::wasm::{
    init_logger, set_panic_hook, spawn, window, WebMediaDevices,
};

/// CSS transform flipping the display surface horizontally.
pub const MIRROR_TRANSFORM: &str = "scaleX(-1)";

/// Host platform [MediaDevices][1] interface.
///
/// [1]: https://w3.org/TR/mediacapture-streams#mediadevices
#[async_trait(?Send)]
pub trait MediaDevices {
    /// Capture stream produced by [`MediaDevices::get_user_media()`].
    type Stream: CaptureStream;

    /// Collects information about all the media devices available to the
    /// User Agent, without any filtering.
    ///
    /// Adapter for a [MediaDevices.enumerateDevices()][1] function.
    ///
    /// # Errors
    ///
    /// With [`Error`] if the platform rejects the enumeration.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-enumeratedevices
    async fn enumerate_devices(
        &self,
    ) -> Result<Vec<DeviceInfo>, Traced<Error>>;

    /// Prompts a user for a permission to use a media input and returns the
    /// capture stream matching the provided [`CaptureConstraints`].
    ///
    /// Adapter for a [MediaDevices.getUserMedia()][1] function.
    ///
    /// # Errors
    ///
    /// With [`Error`] if the user denies the permission or the platform
    /// cannot satisfy the request.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia
    async fn get_user_media(
        &self,
        caps: &CaptureConstraints,
    ) -> Result<Self::Stream, Traced<Error>>;
}

/// Live capture stream handle ([MediaStream][1]).
///
/// Cloning produces another handle to the same underlying stream.
///
/// [1]: https://w3.org/TR/mediacapture-streams#mediastream
pub trait CaptureStream: Clone {
    /// Stops all the tracks of this stream, releasing the capture devices.
    fn stop(&self);
}

/// Surface the captured video is displayed on (a `<video>` element).
pub trait DisplaySurface {
    /// Capture stream this surface can display.
    type Stream;

    /// Binds the provided stream as the live source of this surface.
    fn attach_stream(&self, stream: &Self::Stream);

    /// Unbinds the current live source of this surface.
    fn detach_stream(&self);

    /// Sets the CSS `transform` of this surface.
    fn set_transform(&self, transform: &str);

    /// Removes the CSS `transform` of this surface.
    fn reset_transform(&self);
}
