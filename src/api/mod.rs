//! External API of this crate.
//!
//! [`CameraException`] is available on every target, while the JS bindings
//! in the `wasm` module are compiled for `wasm32` targets only.

mod errors;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[doc(inline)]
pub use self::errors::{CameraException, CameraExceptionKind};

#[cfg(target_arch = "wasm32")]
#[doc(inline)]
pub use self::wasm::CameraHandle;
