#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use vx_camera::{
    api::{CameraException, CameraExceptionKind, CameraHandle},
    platform::{self, window, DisplaySurface as _},
    CaptureConstraints, GetUserMediaError, ResolutionRequest, VideoConstraints,
};
use wasm_bindgen::{prelude::*, JsCast as _};
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlVideoElement, MediaStreamConstraints};

wasm_bindgen_test_configure!(run_in_browser);

fn prop(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

fn element<T: JsCast>(tag: &str) -> T {
    window()
        .document()
        .unwrap()
        .create_element(tag)
        .unwrap()
        .unchecked_into()
}

#[wasm_bindgen_test]
fn converts_constraints_into_js_object() {
    let caps = CaptureConstraints::new(
        VideoConstraints::new("environment")
            .width(ResolutionRequest::range(640.0, 1920.0)),
        false,
    )
    .with_device_id("camera-1");

    let js: JsValue = MediaStreamConstraints::from(&caps).into();

    assert_eq!(prop(&js, "audio"), JsValue::FALSE);
    let video = prop(&js, "video");
    assert_eq!(
        prop(&video, "facingMode").as_string().unwrap(),
        "environment",
    );
    assert_eq!(
        prop(&prop(&video, "deviceId"), "exact").as_string().unwrap(),
        "camera-1",
    );
    let width = prop(&video, "width");
    assert_eq!(prop(&width, "min").as_f64(), Some(640.0));
    assert_eq!(prop(&width, "max").as_f64(), Some(1920.0));
    assert!(prop(&video, "height").is_undefined());
}

#[wasm_bindgen_test]
fn forwards_unknown_constraints() {
    let caps =
        CaptureConstraints::from_json(r#"{"facingMode": "environment"}"#)
            .unwrap();

    let js: JsValue = MediaStreamConstraints::from(&caps).into();

    assert_eq!(prop(&js, "facingMode").as_string().unwrap(), "environment");
    assert!(prop(&js, "video").is_undefined());
}

#[wasm_bindgen_test]
fn mirrors_video_element() {
    let video: HtmlVideoElement = element("video");

    video.set_transform(platform::MIRROR_TRANSFORM);
    assert_eq!(
        video.style().get_property_value("transform").unwrap(),
        "scaleX(-1)",
    );

    video.reset_transform();
    assert_eq!(video.style().get_property_value("transform").unwrap(), "");
}

#[wasm_bindgen_test]
fn reads_js_errors() {
    let err = platform::Error::from(JsValue::from(js_sys::Error::new(
        "Permission denied",
    )));
    assert_eq!(err.message(), "Permission denied");
    assert!(err.sys_cause().is_some());

    let err = platform::Error::from(JsValue::from_str("oops"));
    assert_eq!(err.name(), "UnknownError");
    assert_eq!(err.message(), "oops");
}

#[wasm_bindgen_test]
fn exception_exposes_js_cause() {
    let sys_err = js_sys::Error::new("Denied by user");
    sys_err.set_name("NotAllowedError");
    let cause = platform::Error::from(JsValue::from(sys_err));

    let exception = CameraException::from(tracerr::new!(
        GetUserMediaError::from(cause)
    ));

    assert_eq!(exception.kind(), CameraExceptionKind::PermissionDenied);
    assert_eq!(exception.sys_cause().unwrap().name(), "NotAllowedError");
}

#[wasm_bindgen_test]
fn handle_uses_default_constraints() {
    let handle = CameraHandle::new(
        element::<HtmlVideoElement>("video"),
        element::<HtmlCanvasElement>("canvas"),
    );

    let caps = handle.effective_constraints().unwrap();
    assert_eq!(
        prop(&prop(&caps, "video"), "facingMode").as_string().unwrap(),
        "user",
    );
    assert_eq!(prop(&caps, "audio"), JsValue::FALSE);

    let handle = handle
        .set_constraints(&js_sys::JSON::parse(r#"{"audio": true}"#).unwrap())
        .unwrap();
    let caps = handle.effective_constraints().unwrap();
    assert!(prop(&caps, "video").is_undefined());
    assert_eq!(prop(&caps, "audio"), JsValue::TRUE);
    assert_eq!(handle.state(), "Uninitialized");
}
