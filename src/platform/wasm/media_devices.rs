//! [MediaDevices][1] functionality.
//!
//! [1]: https://w3.org/TR/mediacapture-streams#mediadevices

use async_trait::async_trait;
use tracerr::Traced;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::{
    media::{CaptureConstraints, DeviceInfo},
    platform::{self, Error},
};

use super::{get_property_by_name, window};

/// [`platform::MediaDevices`] backed by the `navigator.mediaDevices` of the
/// current [`Window`].
///
/// [`Window`]: web_sys::Window
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMediaDevices;

impl WebMediaDevices {
    /// Returns [MediaDevices][1] of the current [`Window`].
    ///
    /// [`Window`]: web_sys::Window
    /// [1]: https://w3.org/TR/mediacapture-streams#mediadevices
    fn media_devices() -> Result<web_sys::MediaDevices, Traced<Error>> {
        window()
            .navigator()
            .media_devices()
            .map_err(Error::from)
            .map_err(tracerr::wrap!())
    }
}

#[async_trait(?Send)]
impl platform::MediaDevices for WebMediaDevices {
    type Stream = web_sys::MediaStream;

    async fn enumerate_devices(
        &self,
    ) -> Result<Vec<DeviceInfo>, Traced<Error>> {
        let devices = Self::media_devices()?;
        let infos = JsFuture::from(
            devices
                .enumerate_devices()
                .map_err(Error::from)
                .map_err(tracerr::wrap!())?,
        )
        .await
        .map_err(Error::from)
        .map_err(tracerr::wrap!())?;

        Ok(js_sys::Array::from(&infos)
            .iter()
            .map(|info| device_info(&info))
            .collect())
    }

    async fn get_user_media(
        &self,
        caps: &CaptureConstraints,
    ) -> Result<Self::Stream, Traced<Error>> {
        let devices = Self::media_devices()?;
        let caps = web_sys::MediaStreamConstraints::from(caps);

        JsFuture::from(
            devices
                .get_user_media_with_constraints(&caps)
                .map_err(Error::from)
                .map_err(tracerr::wrap!())?,
        )
        .await
        .map(web_sys::MediaStream::from)
        .map_err(Error::from)
        .map_err(tracerr::wrap!())
    }
}

/// Reads a [`DeviceInfo`] out of the JS [MediaDeviceInfo][1] object.
///
/// Properties are read by their names rather than through typed getters, so
/// the `kind` is kept exactly as the User Agent reported it.
///
/// [1]: https://w3.org/TR/mediacapture-streams#device-info
fn device_info(info: &JsValue) -> DeviceInfo {
    let prop = |name| {
        get_property_by_name(info, name, |v| v.as_string()).unwrap_or_default()
    };

    DeviceInfo {
        device_id: prop("deviceId"),
        kind: prop("kind"),
        label: prop("label"),
        group_id: prop("groupId"),
    }
}
