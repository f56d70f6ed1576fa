//! Helpers for application errors.

pub use vx_camera_macro::Caused;

/// Representation of an error which can be caused by an error returned from
/// the host platform.
pub trait Caused {
    /// Type of the wrapper for platform error.
    type Error;

    /// Returns the platform error if it is the cause.
    fn cause(self) -> Option<Self::Error>;
}
