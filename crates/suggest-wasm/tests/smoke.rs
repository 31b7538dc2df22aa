use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

// Import the wasm functions from this crate
use suggest_wasm::{mount_geo_suggest, mount_name_suggest};

wasm_bindgen_test_configure!(run_in_browser);

/// Adds `<input id=input_id>` and `<ul id=list_id>` to the page unless present.
fn ensure_elements(input_id: &str, list_id: &str) {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    if doc.get_element_by_id(input_id).is_none() {
        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        input.set_id(input_id);
        body.append_child(&input).unwrap();
    }
    if doc.get_element_by_id(list_id).is_none() {
        let list = doc.create_element("ul").unwrap();
        list.set_id(list_id);
        body.append_child(&list).unwrap();
    }
}

#[wasm_bindgen_test]
fn can_mount_name_widget_on_default_ids() {
    ensure_elements("autocomplete", "suggestions");
    let handle = mount_name_suggest().expect("name widget should mount");
    assert_eq!(handle.state(), "idle");
    assert_eq!(handle.labels().length(), 0);
}

#[wasm_bindgen_test]
fn can_mount_geo_widget_on_default_ids() {
    ensure_elements("autocompletegeo", "suggestionsloc");
    let handle = mount_geo_suggest().expect("geo widget should mount");
    handle.inject_response(r#"["paris"]"#);
    assert_eq!(handle.labels().length(), 2);
    assert_eq!(handle.labels().get(0).as_string().unwrap(), "Géolocalisation");
}
