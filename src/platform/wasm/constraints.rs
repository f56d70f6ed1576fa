//! Conversion of [`CaptureConstraints`] into [MediaStreamConstraints][1].
//!
//! [1]: https://w3.org/TR/mediacapture-streams#dom-mediastreamconstraints

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{
    ConstrainDomStringParameters, ConstrainDoubleRange,
    MediaStreamConstraints, MediaTrackConstraints,
};

use crate::media::{CaptureConstraints, ResolutionRequest, VideoConstraints};

impl From<&CaptureConstraints> for MediaStreamConstraints {
    fn from(caps: &CaptureConstraints) -> Self {
        let mut constraints = Self::new();

        if let Some(video) = &caps.video {
            constraints.video(&MediaTrackConstraints::from(video).into());
        }
        if let Some(audio) = caps.audio {
            constraints.audio(&JsValue::from_bool(audio));
        }
        for (key, value) in &caps.other {
            let value = match JsValue::from_serde(value) {
                Ok(value) => value,
                Err(e) => {
                    log::error!(
                        "Failed to convert `{}` constraint: {}",
                        key,
                        e,
                    );
                    continue;
                }
            };
            if let Err(e) =
                Reflect::set(&constraints, &JsValue::from_str(key), &value)
            {
                log::error!("Failed to set `{}` constraint: {:?}", key, e);
            }
        }

        constraints
    }
}

impl From<&VideoConstraints> for MediaTrackConstraints {
    fn from(video: &VideoConstraints) -> Self {
        let mut constraints = Self::new();

        if let Some(facing_mode) = &video.facing_mode {
            constraints.facing_mode(&JsValue::from_str(facing_mode));
        }
        if let Some(device_id) = &video.device_id {
            let mut exact = ConstrainDomStringParameters::new();
            exact.exact(&JsValue::from_str(device_id));
            constraints.device_id(&exact);
        }
        if let Some(width) = video.width {
            constraints.width(&ConstrainDoubleRange::from(width));
        }
        if let Some(height) = video.height {
            constraints.height(&ConstrainDoubleRange::from(height));
        }

        constraints
    }
}

impl From<ResolutionRequest> for ConstrainDoubleRange {
    fn from(req: ResolutionRequest) -> Self {
        let mut range = Self::new();

        if let Some(min) = req.min {
            range.min(min);
        }
        if let Some(max) = req.max {
            range.max(max);
        }
        if let Some(ideal) = req.ideal {
            range.ideal(ideal);
        }

        range
    }
}
