use elastic_wasm::{ElasticCursor, StickyMagnet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Appends an absolutely positioned div to the body
fn create_box(left: u32, top: u32, width: u32, height: u32) -> Result<HtmlElement, JsValue> {
    let document = web_sys::window()
        .ok_or("no global window")?
        .document()
        .ok_or("no document")?;

    let node = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()?;
    let style = node.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &format!("{}px", left))?;
    style.set_property("top", &format!("{}px", top))?;
    style.set_property("width", &format!("{}px", width))?;
    style.set_property("height", &format!("{}px", height))?;

    document.body().ok_or("no body")?.append_child(&node)?;
    Ok(node)
}

fn pose_field(cursor: &ElasticCursor, field: &str) -> JsValue {
    let pose = cursor.last_pose().unwrap();
    js_sys::Reflect::get(&pose, &field.into()).unwrap()
}

#[wasm_bindgen_test]
fn test_frame_writes_transform() {
    let node = create_box(0, 0, 20, 20).unwrap();
    let mut cursor = ElasticCursor::new(node.clone()).unwrap();
    assert!(cursor.last_pose().unwrap().is_null());

    cursor.move_to(200.0, 100.0);
    cursor.frame(0.0).unwrap();
    cursor.frame(16.0).unwrap();

    let transform = node.style().get_property_value("transform").unwrap();
    assert!(!transform.is_empty());
    assert_eq!(pose_field(&cursor, "frame").as_f64(), Some(2.0));
    assert_eq!(pose_field(&cursor, "stuck").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn test_hover_locks_cursor_to_area() {
    let node = create_box(0, 0, 20, 20).unwrap();
    let area = create_box(100, 100, 100, 50).unwrap();
    let mut cursor = ElasticCursor::new(node).unwrap();

    cursor.hover_enter(area.into());
    assert!(cursor.is_stuck());
    cursor.move_to(250.0, 125.0);
    cursor.frame(0.0).unwrap();
    assert_eq!(pose_field(&cursor, "stuck").as_bool(), Some(true));

    cursor.hover_exit();
    assert!(!cursor.is_stuck());
}

#[wasm_bindgen_test]
fn test_invalid_settings_are_rejected() {
    let node = create_box(0, 0, 20, 20).unwrap();
    assert!(ElasticCursor::with_settings(node.clone(), r#"{ "position_smoothing": 2.0 }"#).is_err());
    assert!(ElasticCursor::with_settings(node, "not json").is_err());
}

#[wasm_bindgen_test]
fn test_magnet_toggles_class_and_settles() {
    let node = create_box(100, 100, 100, 50).unwrap();
    let mut magnet = StickyMagnet::new(node.clone()).unwrap();

    magnet.set_bubbled(true).unwrap();
    assert!(node.class_list().contains("is-bubbled"));

    magnet.pointer_move(200.0, 125.0);
    magnet.frame(0.0).unwrap();
    magnet.frame(1500.0).unwrap();
    assert!(magnet.is_settled());

    magnet.release();
    magnet.set_bubbled(false).unwrap();
    assert!(!node.class_list().contains("is-bubbled"));
}
