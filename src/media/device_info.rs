//! [MediaDeviceInfo][1] related objects.
//!
//! [1]: https://w3.org/TR/mediacapture-streams#device-info

use serde::{Deserialize, Serialize};

/// [MediaDeviceInfo.kind][1] value of a video input device.
///
/// [1]: https://w3.org/TR/mediacapture-streams#dom-mediadeviceinfo-kind
pub const VIDEO_INPUT_KIND: &str = "videoinput";

/// Representation of [MediaDeviceInfo][1] reported by the platform.
///
/// All the fields are kept exactly as the platform reported them.
///
/// [1]: https://w3.org/TR/mediacapture-streams#device-info
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Unique identifier of the represented device.
    pub device_id: String,

    /// Kind of the represented device (`videoinput`, `audioinput`,
    /// `audiooutput`).
    pub kind: String,

    /// Label describing the represented device (for example
    /// "External USB Webcam").
    ///
    /// Empty if the device has no associated label or the permission wasn't
    /// granted yet.
    #[serde(default)]
    pub label: String,

    /// Group identifier of the represented device.
    ///
    /// Two devices have the same group identifier if they belong to the same
    /// physical device.
    #[serde(default)]
    pub group_id: String,
}

impl DeviceInfo {
    /// Indicates whether the represented device is a video input.
    ///
    /// The [`DeviceInfo::kind`] is matched case-insensitively.
    #[inline]
    #[must_use]
    pub fn is_video_input(&self) -> bool {
        self.kind.eq_ignore_ascii_case(VIDEO_INPUT_KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::DeviceInfo;

    fn device(kind: &str) -> DeviceInfo {
        DeviceInfo {
            device_id: "id".into(),
            kind: kind.into(),
            label: String::new(),
            group_id: String::new(),
        }
    }

    #[test]
    fn matches_video_input_case_insensitively() {
        for kind in &["videoinput", "VideoInput", "VIDEOINPUT"] {
            assert!(device(kind).is_video_input(), "{}", kind);
        }
        for kind in &["audioinput", "audiooutput", "video", ""] {
            assert!(!device(kind).is_video_input(), "{}", kind);
        }
    }
}
