//! Internal codegen for [`vx-camera`] crate.
//!
//! This crate is intended for inner use only by [`vx-camera`].
//!
//! [`vx-camera`]: https://docs.rs/vx-camera

#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]
#![forbid(non_ascii_idents, unsafe_code)]

mod caused;

use synstructure::decl_derive;

decl_derive!([Caused, attributes(cause)] =>
/// Generates `Caused` trait implementation for an error `enum` or `struct`.
///
/// The platform error type the `cause()` method extracts is declared with a
/// mandatory `#[cause(error = "path::to::Error")]` attribute.
///
/// A variant field whose type is exactly that path is returned as the cause.
/// A variant field marked with `#[cause]` is a nested `Caused` error, and its
/// own `cause()` is returned. Any other variant has no cause.
///
/// # Example
///
/// ```
/// use vx_camera::utils::Caused;
///
/// #[derive(Debug)]
/// struct PlatformError;
///
/// #[derive(Caused)]
/// #[cause(error = "PlatformError")]
/// enum EnumerateError {
///     Unavailable,
///     Rejected(PlatformError),
/// }
///
/// #[derive(Caused)]
/// #[cause(error = "PlatformError")]
/// enum StartError {
///     Enumerate(#[cause] EnumerateError),
///     Detached,
/// }
///
/// assert!(EnumerateError::Unavailable.cause().is_none());
/// assert!(EnumerateError::Rejected(PlatformError).cause().is_some());
///
/// let err = StartError::Enumerate(EnumerateError::Rejected(PlatformError));
/// assert!(err.cause().is_some());
/// assert!(StartError::Detached.cause().is_none());
/// ```
caused::derive);
