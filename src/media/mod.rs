//! Media capture data model.

mod constraints;
mod device_info;

#[doc(inline)]
pub use self::{
    constraints::{
        CaptureConstraints, FacingMode, ResolutionRequest, UnknownFacingMode,
        VideoConstraints, DEFAULT_CONSTRAINTS,
    },
    device_info::{DeviceInfo, VIDEO_INPUT_KIND},
};
