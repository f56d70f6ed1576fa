//! Camera capture lifecycle: constraints resolution, permission request,
//! devices caching and binding of the acquired stream to a display surface.

use std::{cell::RefCell, fmt, rc::Rc};

use derive_more::{Display, From};
use futures::stream::LocalBoxStream;
use medea_reactive::ObservableCell;
use tracerr::Traced;

use crate::{
    media::{CaptureConstraints, DeviceInfo, FacingMode, DEFAULT_CONSTRAINTS},
    platform::{
        self, CaptureStream as _, DisplaySurface, MediaDevices,
        MIRROR_TRANSFORM,
    },
    utils::Caused,
};

/// Errors that may occur when enumerating the available devices.
#[derive(Caused, Clone, Debug, Display, From, PartialEq)]
#[cause(error = "platform::Error")]
#[display(fmt = "MediaDevices.enumerateDevices() failed: {}", _0)]
pub struct EnumerateDevicesError(platform::Error);

/// Errors that may occur when requesting a capture stream from the platform.
#[derive(Caused, Clone, Debug, Display, PartialEq)]
#[cause(error = "platform::Error")]
pub enum GetUserMediaError {
    /// The user or the User Agent denied the camera permission.
    #[display(fmt = "Camera permission denied: {}", _0)]
    PermissionDenied(platform::Error),

    /// The platform failed to provide a stream for any other reason (no such
    /// device, unsatisfiable constraints, hardware error, etc).
    #[display(fmt = "MediaDevices.getUserMedia() failed: {}", _0)]
    PlatformRequestFailed(platform::Error),
}

impl From<platform::Error> for GetUserMediaError {
    fn from(err: platform::Error) -> Self {
        if err.is_permission_denied() {
            Self::PermissionDenied(err)
        } else {
            Self::PlatformRequestFailed(err)
        }
    }
}

/// Errors that may occur when starting the capture.
#[derive(Caused, Clone, Debug, Display, From, PartialEq)]
#[cause(error = "platform::Error")]
pub enum StartError {
    /// Available devices couldn't be enumerated.
    #[display(fmt = "Failed to enumerate devices: {}", _0)]
    EnumerateDevices(#[cause] EnumerateDevicesError),

    /// Capture stream couldn't be acquired.
    #[display(fmt = "Failed to acquire capture stream: {}", _0)]
    GetUserMedia(#[cause] GetUserMediaError),
}

/// Lifecycle state of a [`CameraController`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CameraState {
    /// Nothing was requested from the platform yet.
    Uninitialized,

    /// Capture permission is being requested.
    PermissionRequested,

    /// Capture permission was granted, no stream is active.
    Granted,

    /// Capture permission was denied or the stream couldn't be acquired.
    Denied,

    /// Capture stream is active and bound to the display surface.
    Started,

    /// Active capture stream was released.
    Stopped,
}

/// Actual data of a [`CameraController`].
struct InnerCameraController<M, V, C>
where
    M: MediaDevices,
{
    /// Platform media devices the streams are requested from.
    media_devices: M,

    /// Surface the active stream is displayed on.
    display: V,

    /// Off-screen surface reserved for drawing captured frames.
    draw: C,

    /// Constraints set by the user. Empty or absent ones mean that
    /// [`DEFAULT_CONSTRAINTS`] are used.
    custom_constraints: RefCell<Option<CaptureConstraints>>,

    /// Video input devices found by the first successful enumeration.
    cached_devices: RefCell<Vec<DeviceInfo>>,

    /// Currently active capture stream.
    active_stream: RefCell<Option<M::Stream>>,

    /// Current [`CameraState`].
    state: ObservableCell<CameraState>,
}

impl<M, V, C> Drop for InnerCameraController<M, V, C>
where
    M: MediaDevices,
{
    /// Stops the active capture stream, if any.
    fn drop(&mut self) {
        if let Some(stream) = self.active_stream.get_mut().take() {
            stream.stop();
        }
    }
}

/// Wrapper around the platform camera capture.
///
/// Holds externally owned display (`V`) and drawing (`C`) surfaces, resolves
/// the capture constraints, caches the list of video input devices and binds
/// the acquired capture stream to the display surface.
///
/// [`CameraController`] is a cheaply cloneable handle: all the clones share
/// the same state. The active stream is stopped once the last clone is
/// dropped.
pub struct CameraController<M, V, C>(Rc<InnerCameraController<M, V, C>>)
where
    M: MediaDevices;

impl<M, V, C> Clone for CameraController<M, V, C>
where
    M: MediaDevices,
{
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<M, V, C> CameraController<M, V, C>
where
    M: MediaDevices,
    V: DisplaySurface<Stream = M::Stream>,
{
    /// Creates a new [`CameraController`] bound to the provided surfaces.
    pub fn new(media_devices: M, display: V, draw: C) -> Self {
        Self(Rc::new(InnerCameraController {
            media_devices,
            display,
            draw,
            custom_constraints: RefCell::new(None),
            cached_devices: RefCell::new(Vec::new()),
            active_stream: RefCell::new(None),
            state: ObservableCell::new(CameraState::Uninitialized),
        }))
    }

    /// Sets custom [`CaptureConstraints`] used by all the further requests
    /// instead of [`DEFAULT_CONSTRAINTS`].
    ///
    /// The provided constraints fully replace the default ones, without any
    /// merging. Empty constraints mean that [`DEFAULT_CONSTRAINTS`] are used.
    pub fn set_constraints(&self, caps: CaptureConstraints) -> &Self {
        *self.0.custom_constraints.borrow_mut() = Some(caps);
        self
    }

    /// Returns the [`CaptureConstraints`] the platform will be requested with.
    #[must_use]
    pub fn effective_constraints(&self) -> CaptureConstraints {
        match self.0.custom_constraints.borrow().as_ref() {
            Some(caps) if !caps.is_empty() => caps.clone(),
            _ => DEFAULT_CONSTRAINTS,
        }
    }

    /// Flips the display surface horizontally.
    ///
    /// Repeated calls keep the surface flipped.
    pub fn mirror(&self) {
        self.0.display.set_transform(MIRROR_TRANSFORM);
    }

    /// Removes any transform from the display surface.
    pub fn unmirror(&self) {
        self.0.display.reset_transform();
    }

    /// Returns the available video input devices.
    ///
    /// Devices are enumerated only if the cache is empty, otherwise the cached
    /// ones are returned without querying the platform.
    ///
    /// # Errors
    ///
    /// With [`EnumerateDevicesError`] if the platform rejects the
    /// enumeration.
    pub async fn list_devices(
        &self,
    ) -> Result<Vec<DeviceInfo>, Traced<EnumerateDevicesError>> {
        {
            let cached = self.0.cached_devices.borrow();
            if !cached.is_empty() {
                return Ok(cached.clone());
            }
        }

        let devices = self
            .enumerate_video_inputs()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> EnumerateDevicesError))?;

        let mut cached = self.0.cached_devices.borrow_mut();
        cached.extend(devices);

        Ok(cached.clone())
    }

    /// Enumerates the devices again, replacing the cached ones.
    ///
    /// The cache is left intact if the enumeration fails.
    ///
    /// # Errors
    ///
    /// With [`EnumerateDevicesError`] if the platform rejects the
    /// enumeration.
    pub async fn refresh_devices(
        &self,
    ) -> Result<Vec<DeviceInfo>, Traced<EnumerateDevicesError>> {
        let devices = self
            .enumerate_video_inputs()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> EnumerateDevicesError))?;
        *self.0.cached_devices.borrow_mut() = devices.clone();

        Ok(devices)
    }

    /// Requests a capture stream with the [`effective_constraints()`] only to
    /// trigger the platform permission prompt. The acquired stream is stopped
    /// right away.
    ///
    /// Resolves with the same [`CameraController`] to allow chaining.
    ///
    /// # Errors
    ///
    /// With [`GetUserMediaError::PermissionDenied`] if the user denies the
    /// permission, or with [`GetUserMediaError::PlatformRequestFailed`] if
    /// the platform rejects the request for any other reason.
    ///
    /// [`effective_constraints()`]: Self::effective_constraints
    pub async fn request_permission(
        &self,
    ) -> Result<Self, Traced<GetUserMediaError>> {
        self.0.state.set(CameraState::PermissionRequested);

        let stream = self
            .get_user_media()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> GetUserMediaError))?;
        stream.stop();

        let state = if self.0.active_stream.borrow().is_some() {
            CameraState::Started
        } else {
            CameraState::Granted
        };
        self.0.state.set(state);

        Ok(self.clone())
    }

    /// Enumerates the devices (warming up the cache), acquires a capture
    /// stream with the [`effective_constraints()`] and binds it to the display
    /// surface.
    ///
    /// Resolves only once the stream is bound. The previously active stream,
    /// if any, is stopped.
    ///
    /// # Errors
    ///
    /// With [`StartError::EnumerateDevices`] if the devices enumeration fails,
    /// or with [`StartError::GetUserMedia`] if the capture stream couldn't be
    /// acquired.
    ///
    /// [`effective_constraints()`]: Self::effective_constraints
    pub async fn start(&self) -> Result<(), Traced<StartError>> {
        let _ = self
            .list_devices()
            .await
            .map_err(|e| {
                self.settle_failed_request();
                e
            })
            .map_err(tracerr::map_from_and_wrap!(=> StartError))?;

        let stream = self
            .get_user_media()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> StartError))?;

        self.0.display.attach_stream(&stream);
        if let Some(prev) = self.0.active_stream.replace(Some(stream)) {
            prev.stop();
        }
        self.0.state.set(CameraState::Started);

        Ok(())
    }

    /// Stops the active capture stream and detaches it from the display
    /// surface.
    ///
    /// Does nothing if no stream is active.
    pub fn stop(&self) {
        let stream = self.0.active_stream.borrow_mut().take();
        if let Some(stream) = stream {
            stream.stop();
            self.0.display.detach_stream();
            self.0.state.set(CameraState::Stopped);
        }
    }

    /// Switches the camera between [`FacingMode::User`] and
    /// [`FacingMode::Environment`], restarting the capture if it's active.
    ///
    /// Resolves with the [`FacingMode`] switched to.
    ///
    /// # Errors
    ///
    /// With [`StartError`] if the capture restart fails.
    pub async fn flip_camera(&self) -> Result<FacingMode, Traced<StartError>> {
        let caps = self.effective_constraints();
        let facing_mode = caps
            .facing_mode()
            .and_then(|mode| mode.parse::<FacingMode>().ok())
            .unwrap_or(FacingMode::User)
            .flipped();

        self.set_constraints(caps.with_facing_mode(facing_mode));
        self.restart_if_active()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> StartError))?;

        Ok(facing_mode)
    }

    /// Pins the capture to the device with the provided `device_id`,
    /// restarting the capture if it's active.
    ///
    /// # Errors
    ///
    /// With [`StartError`] if the capture restart fails.
    pub async fn select_device<T>(
        &self,
        device_id: T,
    ) -> Result<(), Traced<StartError>>
    where
        T: Into<String>,
    {
        let caps =
            self.effective_constraints().with_device_id(device_id.into());
        self.set_constraints(caps);

        self.restart_if_active()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> StartError))
    }

    /// Returns the currently active capture stream.
    #[must_use]
    pub fn active_stream(&self) -> Option<M::Stream> {
        self.0.active_stream.borrow().clone()
    }

    /// Returns the cached video input devices, without querying the platform.
    #[must_use]
    pub fn cached_devices(&self) -> Vec<DeviceInfo> {
        self.0.cached_devices.borrow().clone()
    }

    /// Returns the current [`CameraState`].
    #[inline]
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.0.state.get()
    }

    /// Subscribes to the [`CameraState`] changes.
    ///
    /// The current state is emitted first.
    #[inline]
    pub fn on_state_change(&self) -> LocalBoxStream<'static, CameraState> {
        self.0.state.subscribe()
    }

    /// Returns the surface the capture is displayed on.
    #[inline]
    #[must_use]
    pub fn display_surface(&self) -> &V {
        &self.0.display
    }

    /// Returns the off-screen drawing surface.
    #[inline]
    #[must_use]
    pub fn draw_surface(&self) -> &C {
        &self.0.draw
    }

    /// Indicates whether both handles point to the same [`CameraController`].
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Queries the platform for the video input devices, bypassing the cache.
    async fn enumerate_video_inputs(
        &self,
    ) -> Result<Vec<DeviceInfo>, Traced<EnumerateDevicesError>> {
        let devices: Vec<_> = self
            .0
            .media_devices
            .enumerate_devices()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> EnumerateDevicesError))
            .map_err(log_error)?
            .into_iter()
            .filter(DeviceInfo::is_video_input)
            .collect();
        log::debug!("Found {} video input devices", devices.len());

        Ok(devices)
    }

    /// Requests a capture stream with the [`effective_constraints()`],
    /// settling the [`CameraState`] on failure.
    ///
    /// [`effective_constraints()`]: Self::effective_constraints
    async fn get_user_media(
        &self,
    ) -> Result<M::Stream, Traced<GetUserMediaError>> {
        let caps = self.effective_constraints();

        self.0
            .media_devices
            .get_user_media(&caps)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> GetUserMediaError))
            .map_err(|e| {
                self.settle_failed_request();
                log_error(e)
            })
    }

    /// Sets the [`CameraState`] after a failed platform request.
    ///
    /// The still active stream keeps the [`CameraState::Started`] state,
    /// otherwise the [`CameraState::Denied`] is set.
    fn settle_failed_request(&self) {
        let state = if self.0.active_stream.borrow().is_some() {
            CameraState::Started
        } else {
            CameraState::Denied
        };
        self.0.state.set(state);
    }

    /// Restarts the capture with the current [`effective_constraints()`] if a
    /// stream is active.
    ///
    /// [`effective_constraints()`]: Self::effective_constraints
    async fn restart_if_active(&self) -> Result<(), Traced<StartError>> {
        if self.0.active_stream.borrow().is_none() {
            return Ok(());
        }
        self.start()
            .await
            .map_err(tracerr::map_from_and_wrap!(=> StartError))
    }
}

/// Prints the provided error and its trace to the log, returning it back.
fn log_error<E: fmt::Display>(err: Traced<E>) -> Traced<E> {
    let (err, trace) = err.into_parts();
    log::error!("{}\n{}", err, trace);
    Traced::from_parts(err, trace)
}
