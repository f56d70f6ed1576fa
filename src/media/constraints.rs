//! Capture constraints requested from [MediaDevices.getUserMedia()][1].
//!
//! [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia

use std::{borrow::Cow, collections::BTreeMap, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// [`CaptureConstraints`] used when no custom ones were set: a front camera
/// without audio.
pub const DEFAULT_CONSTRAINTS: CaptureConstraints = CaptureConstraints {
    video: Some(VideoConstraints {
        facing_mode: Some(Cow::Borrowed("user")),
        device_id: None,
        width: None,
        height: None,
    }),
    audio: Some(false),
    other: BTreeMap::new(),
};

/// Representation of [MediaStreamConstraints][1] passed to the platform.
///
/// All keys are optional, so an empty JS object (`{}`) is representable.
/// Such an empty value is treated by [`CameraController`] as "no custom
/// constraints set". Keys other than `video` and `audio` are kept in
/// [`CaptureConstraints::other`], so they still count as set.
///
/// No validation is performed: whatever is set here is handed to the platform
/// as is, and malformed values surface only as the platform error.
///
/// [`CameraController`]: crate::CameraController
/// [1]: https://w3.org/TR/mediacapture-streams#dom-mediastreamconstraints
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConstraints {
    /// Constraints of the requested video track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoConstraints>,

    /// Indicator whether an audio track is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<bool>,

    /// Keys unknown to this crate, handed to the platform as is.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl CaptureConstraints {
    /// Creates new [`CaptureConstraints`] with both keys set.
    #[inline]
    #[must_use]
    pub fn new(video: VideoConstraints, audio: bool) -> Self {
        Self {
            video: Some(video),
            audio: Some(audio),
            other: BTreeMap::new(),
        }
    }

    /// Parses [`CaptureConstraints`] from the provided JSON object, using
    /// the same camelCase keys as JS side does.
    ///
    /// # Errors
    ///
    /// If the provided string is not a valid JSON representation of
    /// [`CaptureConstraints`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Indicates whether these [`CaptureConstraints`] have no keys at all,
    /// unknown ones included.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.video.is_none() && self.audio.is_none() && self.other.is_empty()
    }

    /// Returns the requested facing mode of the video track, if any.
    #[must_use]
    pub fn facing_mode(&self) -> Option<&str> {
        self.video.as_ref()?.facing_mode.as_deref()
    }

    /// Returns these [`CaptureConstraints`] with the video facing mode
    /// replaced by the provided one.
    ///
    /// A concrete `deviceId` is dropped, since it would override the facing
    /// mode on the platform side.
    #[must_use]
    pub fn with_facing_mode(mut self, mode: FacingMode) -> Self {
        let video = self.video.get_or_insert_with(VideoConstraints::default);
        video.facing_mode = Some(Cow::Borrowed(mode.as_str()));
        video.device_id = None;
        self
    }

    /// Returns these [`CaptureConstraints`] with the video track pinned to the
    /// device with the provided `device_id`.
    #[must_use]
    pub fn with_device_id<T>(mut self, device_id: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.video
            .get_or_insert_with(VideoConstraints::default)
            .device_id = Some(device_id.into());
        self
    }
}

/// Constraints of a video [MediaStreamTrack][1].
///
/// [1]: https://w3.org/TR/mediacapture-streams#mediastreamtrack
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    /// Requested [facingMode][1] of the camera.
    ///
    /// Kept as a raw string and passed through without validation.
    ///
    /// [1]: https://w3.org/TR/mediacapture-streams#dom-videofacingmodeenum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing_mode: Option<Cow<'static, str>>,

    /// Identifier of the concrete device to capture from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<Cow<'static, str>>,

    /// Requested width of the video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ResolutionRequest>,

    /// Requested height of the video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<ResolutionRequest>,
}

impl VideoConstraints {
    /// Creates new [`VideoConstraints`] requesting the provided facing mode.
    #[must_use]
    pub fn new<T>(facing_mode: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            facing_mode: Some(facing_mode.into()),
            ..Self::default()
        }
    }

    /// Sets the requested width of the video.
    #[inline]
    #[must_use]
    pub fn width(mut self, width: ResolutionRequest) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the requested height of the video.
    #[inline]
    #[must_use]
    pub fn height(mut self, height: ResolutionRequest) -> Self {
        self.height = Some(height);
        self
    }
}

/// Requested bounds of a single video dimension, in pixels.
///
/// Maps onto [ConstrainDoubleRange][1].
///
/// [1]: https://w3.org/TR/mediacapture-streams#dom-constraindoublerange
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ResolutionRequest {
    /// Minimal acceptable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximal acceptable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Value the platform should try to get as close to as possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal: Option<f64>,
}

impl ResolutionRequest {
    /// Creates a [`ResolutionRequest`] with only `ideal` value set.
    #[inline]
    #[must_use]
    pub fn ideal(ideal: f64) -> Self {
        Self {
            ideal: Some(ideal),
            ..Self::default()
        }
    }

    /// Creates a [`ResolutionRequest`] bounded by `min` and `max` values.
    #[inline]
    #[must_use]
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ideal: None,
        }
    }
}

/// Describes the directions that the camera can face, as seen from the user's
/// perspective. Representation of [VideoFacingModeEnum][1].
///
/// [1]: https://w3.org/TR/mediacapture-streams#dom-videofacingmodeenum
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Facing toward the user (a self-view camera).
    User,

    /// Facing away from the user (viewing the environment).
    Environment,

    /// Facing to the left of the user.
    Left,

    /// Facing to the right of the user.
    Right,
}

impl FacingMode {
    /// Returns the string value of this [`FacingMode`] as the platform expects
    /// it.
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Environment => "environment",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Returns the [`FacingMode`] a camera flip switches to.
    ///
    /// Only [`FacingMode::Environment`] flips back to [`FacingMode::User`],
    /// everything else flips to [`FacingMode::Environment`].
    #[inline]
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Environment => Self::User,
            Self::User | Self::Left | Self::Right => Self::Environment,
        }
    }
}

impl AsRef<str> for FacingMode {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Error of parsing a [`FacingMode`] from an unknown string.
#[derive(Clone, Debug, Display, PartialEq)]
#[display(fmt = "Unknown facing mode: {}", _0)]
pub struct UnknownFacingMode(String);

impl FromStr for FacingMode {
    type Err = UnknownFacingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "environment" => Ok(Self::Environment),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(UnknownFacingMode(s.to_owned())),
        }
    }
}
