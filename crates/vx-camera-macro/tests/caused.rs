#![forbid(non_ascii_idents, unsafe_code)]

use vx_camera::utils::Caused;

#[derive(Clone, Debug, PartialEq)]
struct PlatformError(&'static str);

#[test]
fn derives_for_structure() {
    #[derive(Caused)]
    #[cause(error = "PlatformError")]
    struct TestError(PlatformError);

    let err = TestError(PlatformError("denied"));
    assert_eq!(err.cause(), Some(PlatformError("denied")));
}

#[test]
fn derives_for_unit_structure() {
    #[derive(Caused)]
    #[cause(error = "PlatformError")]
    struct TestError;

    assert!(TestError.cause().is_none());
}

#[test]
fn derives_for_enum_with_platform_error() {
    #[derive(Caused)]
    #[cause(error = "PlatformError")]
    enum TestError {
        Foo,
        Bar(PlatformError),
    }

    assert!(TestError::Foo.cause().is_none());
    assert_eq!(
        TestError::Bar(PlatformError("bar")).cause(),
        Some(PlatformError("bar")),
    );
}

#[test]
fn derives_for_enum_with_nested_error() {
    #[derive(Caused)]
    #[cause(error = "PlatformError")]
    enum CausedError {
        Baz(PlatformError),
    }

    #[derive(Caused)]
    #[cause(error = "PlatformError")]
    enum TestError {
        Foo,
        Bar(#[cause] CausedError),
    }

    assert!(TestError::Foo.cause().is_none());

    let err = TestError::Bar(CausedError::Baz(PlatformError("baz")));
    assert_eq!(err.cause(), Some(PlatformError("baz")));
}

#[test]
fn ignores_fields_of_other_types() {
    #[derive(Caused)]
    #[cause(error = "PlatformError")]
    enum TestError {
        Message(String),
        Named { code: u16 },
    }

    assert!(TestError::Message("oops".into()).cause().is_none());
    assert!(TestError::Named { code: 1 }.cause().is_none());
}
