//! [`CaptureStream`] implementation for [MediaStream][1].
//!
//! [1]: https://w3.org/TR/mediacapture-streams#mediastream

use wasm_bindgen::JsCast as _;
use web_sys::{MediaStream, MediaStreamTrack};

use crate::platform::CaptureStream;

impl CaptureStream for MediaStream {
    fn stop(&self) {
        for track in self.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
    }
}
