//! Browser camera capture wrapper compiled to WebAssembly.
//!
//! [`CameraController`] resolves capture constraints, asks the user for the
//! camera permission, caches the available video inputs and binds the
//! acquired [MediaStream][1] to a display surface. All the actual media work
//! is delegated to the host [`platform`].
//!
//! [1]: https://w3.org/TR/mediacapture-streams#mediastream

#![allow(clippy::module_name_repetitions)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(non_ascii_idents)]
#![warn(missing_docs)]

pub mod api;
pub mod camera;
pub mod media;
pub mod platform;
pub mod utils;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(all(target_arch = "wasm32", feature = "wee_alloc"))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[doc(inline)]
pub use self::{
    camera::{
        CameraController, CameraState, EnumerateDevicesError,
        GetUserMediaError, StartError,
    },
    media::{
        CaptureConstraints, DeviceInfo, FacingMode, ResolutionRequest,
        VideoConstraints, DEFAULT_CONSTRAINTS,
    },
};
