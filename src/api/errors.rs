//! Exceptions thrown to the API consumers.

use std::borrow::Cow;

use tracerr::{Trace, Traced};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

use crate::{
    camera::{EnumerateDevicesError, GetUserMediaError, StartError},
    platform,
    utils::Caused as _,
};

/// Possible error kinds of a [`CameraException`].
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CameraExceptionKind {
    /// Occurs if the [MediaDevices.enumerateDevices()][1] request failed.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-enumeratedevices
    EnumerateDevicesFailed,

    /// Occurs if the user or the User Agent denied the camera permission.
    PermissionDenied,

    /// Occurs if the [getUserMedia()][1] request failed for any other reason.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia
    GetUserMediaFailed,

    /// Occurs if the provided capture constraints couldn't be parsed.
    InvalidConstraints,

    /// Occurs if a value couldn't be converted into a JS object.
    JsConversionFailed,
}

/// Exception thrown when camera capture operations fail.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug)]
pub struct CameraException {
    /// Concrete error kind of this [`CameraException`].
    kind: CameraExceptionKind,

    /// Error message describing the problem.
    message: Cow<'static, str>,

    /// [`platform::Error`] that caused this [`CameraException`].
    cause: Option<platform::Error>,

    /// Stacktrace of this [`CameraException`].
    trace: Trace,
}

impl CameraException {
    /// Creates a new [`CameraException`] from the provided error `kind`,
    /// `message`, optional `cause` and `trace`.
    #[inline]
    #[must_use]
    pub fn new<M: Into<Cow<'static, str>>>(
        kind: CameraExceptionKind,
        message: M,
        cause: Option<platform::Error>,
        trace: Trace,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause,
            trace,
        }
    }

    /// Creates a new [`CameraException`] for a value that couldn't be
    /// converted into a JS object.
    #[must_use]
    pub fn js_conversion(err: Traced<serde_json::Error>) -> Self {
        let (err, trace) = err.into_parts();

        Self::new(
            CameraExceptionKind::JsConversionFailed,
            format!("Failed to convert value into JS object: {}", err),
            None,
            trace,
        )
    }

    /// Returns [`platform::Error`] that caused this [`CameraException`].
    #[must_use]
    pub fn cause(&self) -> Option<platform::Error> {
        self.cause.clone()
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl CameraException {
    /// Returns concrete error kind of this [`CameraException`].
    #[must_use]
    pub fn kind(&self) -> CameraExceptionKind {
        self.kind
    }

    /// Returns error message describing the problem.
    #[must_use]
    pub fn message(&self) -> String {
        self.message.to_string()
    }

    /// Returns stacktrace of this [`CameraException`].
    #[must_use]
    pub fn trace(&self) -> String {
        self.trace.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl CameraException {
    /// Returns JS side error that caused this [`CameraException`].
    #[wasm_bindgen(js_name = cause)]
    #[must_use]
    pub fn sys_cause(&self) -> Option<js_sys::Error> {
        self.cause.as_ref().and_then(platform::Error::sys_cause)
    }
}

impl From<Traced<EnumerateDevicesError>> for CameraException {
    fn from(err: Traced<EnumerateDevicesError>) -> Self {
        let (err, trace) = err.into_parts();
        let message = err.to_string();

        Self::new(
            CameraExceptionKind::EnumerateDevicesFailed,
            message,
            err.cause(),
            trace,
        )
    }
}

impl From<Traced<GetUserMediaError>> for CameraException {
    fn from(err: Traced<GetUserMediaError>) -> Self {
        let (err, trace) = err.into_parts();
        let message = err.to_string();
        let kind = match err {
            GetUserMediaError::PermissionDenied(_) => {
                CameraExceptionKind::PermissionDenied
            }
            GetUserMediaError::PlatformRequestFailed(_) => {
                CameraExceptionKind::GetUserMediaFailed
            }
        };

        Self::new(kind, message, err.cause(), trace)
    }
}

impl From<Traced<StartError>> for CameraException {
    fn from(err: Traced<StartError>) -> Self {
        let (err, trace) = err.into_parts();

        match err {
            StartError::EnumerateDevices(e) => {
                Traced::from_parts(e, trace).into()
            }
            StartError::GetUserMedia(e) => Traced::from_parts(e, trace).into(),
        }
    }
}

impl From<Traced<serde_json::Error>> for CameraException {
    fn from(err: Traced<serde_json::Error>) -> Self {
        let (err, trace) = err.into_parts();

        Self::new(
            CameraExceptionKind::InvalidConstraints,
            format!("Invalid capture constraints: {}", err),
            None,
            trace,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denial_keeps_its_cause() {
        let cause = platform::Error::new("NotAllowedError", "Denied by user");
        let err = tracerr::new!(StartError::from(GetUserMediaError::from(
            cause.clone()
        )));

        let exception = CameraException::from(err);

        assert_eq!(exception.kind(), CameraExceptionKind::PermissionDenied);
        assert_eq!(exception.cause(), Some(cause));
        assert!(exception.message().contains("Denied by user"));
    }

    #[test]
    fn other_get_user_media_failures_are_distinguished() {
        let cause = platform::Error::new("NotReadableError", "Device busy");
        let err = tracerr::new!(GetUserMediaError::from(cause));

        assert_eq!(
            CameraException::from(err).kind(),
            CameraExceptionKind::GetUserMediaFailed,
        );
    }

    #[test]
    fn enumeration_failure_during_start() {
        let cause = platform::Error::new("UnknownError", "No media devices");
        let err = tracerr::new!(StartError::from(EnumerateDevicesError::from(
            cause.clone()
        )));

        let exception = CameraException::from(err);

        assert_eq!(
            exception.kind(),
            CameraExceptionKind::EnumerateDevicesFailed,
        );
        assert_eq!(exception.cause(), Some(cause));
    }

    #[test]
    fn js_conversion_failure_has_own_kind() {
        let err = serde_json::from_str::<u8>("oops")
            .map_err(tracerr::wrap!(=> serde_json::Error))
            .unwrap_err();

        let exception = CameraException::js_conversion(err);

        assert_eq!(exception.kind(), CameraExceptionKind::JsConversionFailed);
        assert!(exception.message().starts_with("Failed to convert value"));
        assert!(exception.cause().is_none());
    }

    #[test]
    fn invalid_constraints_have_no_cause() {
        let err = crate::media::CaptureConstraints::from_json(r#"{"audio": 1}"#)
            .map_err(tracerr::wrap!(=> serde_json::Error))
            .unwrap_err();

        let exception = CameraException::from(err);

        assert_eq!(exception.kind(), CameraExceptionKind::InvalidConstraints);
        assert!(exception.cause().is_none());
    }
}
