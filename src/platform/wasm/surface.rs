//! [`DisplaySurface`] implementation for `<video>` element.

use web_sys::{HtmlMediaElement, HtmlVideoElement, MediaStream};

use crate::platform::DisplaySurface;

impl DisplaySurface for HtmlVideoElement {
    type Stream = MediaStream;

    fn attach_stream(&self, stream: &MediaStream) {
        HtmlMediaElement::set_src_object(self, Some(stream));
    }

    fn detach_stream(&self) {
        HtmlMediaElement::set_src_object(self, None);
    }

    fn set_transform(&self, transform: &str) {
        if let Err(e) = self.style().set_property("transform", transform) {
            log::error!("Failed to set display transform: {:?}", e);
        }
    }

    fn reset_transform(&self) {
        if let Err(e) = self.style().remove_property("transform") {
            log::error!("Failed to reset display transform: {:?}", e);
        }
    }
}
