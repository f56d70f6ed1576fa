//! Errors returned by the host platform.

use std::borrow::Cow;

use derive_more::Display;

/// Names of the platform errors meaning that the user (or the User Agent)
/// denied the capture permission.
const PERMISSION_DENIED_NAMES: &[&str] =
    &["NotAllowedError", "PermissionDeniedError", "SecurityError"];

/// Error returned by the host platform.
///
/// On `wasm32` targets wraps the thrown JS exception, keeping the original
/// [`js_sys::Error`] when there is one.
#[derive(Clone, Debug, Display)]
#[display(fmt = "{}: {}", name, message)]
pub struct Error {
    /// Name of this [`Error`] (for example `NotAllowedError`).
    name: Cow<'static, str>,

    /// Message describing the problem.
    message: Cow<'static, str>,

    /// Original JS side error.
    #[cfg(target_arch = "wasm32")]
    sys_cause: Option<js_sys::Error>,
}

impl Error {
    /// Creates a new [`Error`] with the provided `name` and `message`.
    #[must_use]
    pub fn new<N, M>(name: N, message: M) -> Self
    where
        N: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            message: message.into(),
            #[cfg(target_arch = "wasm32")]
            sys_cause: None,
        }
    }

    /// Returns name of this [`Error`].
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns message of this [`Error`].
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Indicates whether this [`Error`] reports a denied capture permission.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        PERMISSION_DENIED_NAMES.contains(&self.name())
    }

    /// Returns the JS side error if it is the cause.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn sys_cause(&self) -> Option<js_sys::Error> {
        self.sys_cause.clone()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message == other.message
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast as _;

        match val.dyn_into::<js_sys::Error>() {
            Ok(err) => Self {
                name: String::from(err.name()).into(),
                message: String::from(err.message()).into(),
                sys_cause: Some(err),
            },
            Err(val) => match val.dyn_into::<web_sys::DomException>() {
                Ok(exception) => Self {
                    name: exception.name().into(),
                    message: exception.message().into(),
                    sys_cause: None,
                },
                Err(val) => Self {
                    name: "UnknownError".into(),
                    message: val
                        .as_string()
                        .unwrap_or_else(|| format!("{:?}", val))
                        .into(),
                    sys_cause: None,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn detects_permission_denial() {
        let denials =
            ["NotAllowedError", "PermissionDeniedError", "SecurityError"];
        for name in &denials {
            assert!(Error::new(*name, "").is_permission_denied(), "{}", name);
        }
        for name in &["NotFoundError", "OverconstrainedError", "TypeError"] {
            assert!(!Error::new(*name, "").is_permission_denied(), "{}", name);
        }
    }

    #[test]
    fn displays_name_and_message() {
        let err = Error::new("NotFoundError", "Requested device not found");

        assert_eq!(
            err.to_string(),
            "NotFoundError: Requested device not found",
        );
        assert_eq!(err.name(), "NotFoundError");
        assert_eq!(err.message(), "Requested device not found");
    }
}
