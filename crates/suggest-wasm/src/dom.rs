//! DOM lookups and the `<li>` renderer.

use suggest_core::{ClickTarget, ListRenderer, Result, SuggestError, SuggestionList};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlInputElement, Node};

/// Position of the entry inside the list, read back on click.
pub const INDEX_ATTR: &str = "data-index";
/// `suggestion`, `geolocate` or `message`.
pub const KIND_ATTR: &str = "data-kind";

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SuggestError::InvalidConfig("no document available".into()))
}

pub fn element(doc: &Document, id: &str) -> Result<Element> {
    doc.get_element_by_id(id)
        .ok_or_else(|| SuggestError::InvalidConfig(format!("element #{id} not found")))
}

pub fn input(doc: &Document, id: &str) -> Result<HtmlInputElement> {
    element(doc, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| SuggestError::InvalidConfig(format!("#{id} is not an <input>")))
}

/// Renders a [`SuggestionList`] as `<li>` children of one element.
///
/// Labels go in as text content, never as markup.
pub struct DomList {
    doc: Document,
    list: Element,
}

impl DomList {
    pub fn new(doc: Document, list: Element) -> Self {
        Self { doc, list }
    }
}

impl ListRenderer for DomList {
    type Error = JsValue;

    fn render(&mut self, list: &SuggestionList) -> std::result::Result<(), JsValue> {
        self.list.set_text_content(None);
        for (i, entry) in list.entries().iter().enumerate() {
            let li = self.doc.create_element("li")?;
            li.set_text_content(Some(&entry.label));
            li.set_attribute(INDEX_ATTR, &i.to_string())?;
            li.set_attribute(KIND_ATTR, entry.kind.as_str())?;
            self.list.append_child(&li)?;
        }
        Ok(())
    }
}

/// Where a click landed relative to the input and the list.
pub fn click_target(target: Option<EventTarget>, input: &Element, list: &Element) -> ClickTarget {
    let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return ClickTarget::Outside;
    };
    if list.contains(Some(&node)) {
        ClickTarget::List
    } else if input.is_same_node(Some(&node)) {
        ClickTarget::Input
    } else {
        ClickTarget::Outside
    }
}

/// Index of the `<li>` under `target`, if it belongs to `list`.
pub fn clicked_index(target: Option<EventTarget>, list: &Element) -> Option<usize> {
    let el = target?.dyn_into::<Element>().ok()?;
    let li = el.closest("li").ok()??;
    let node: &Node = &li;
    if !list.contains(Some(node)) {
        return None;
    }
    li.get_attribute(INDEX_ATTR)?.parse().ok()
}
