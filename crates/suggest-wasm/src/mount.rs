//! Event wiring between one input/list pair and its [`Widget`].

use crate::dom::{self, DomList};
use crate::geo::current_position;
use crate::net::{describe, fetch_text};
use std::cell::RefCell;
use std::rc::Rc;
use suggest_core::{Applied, Result, Selection, SuggestError, Ticket, Widget, WidgetConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, HtmlInputElement};

/// Widget state plus the elements it renders into.
pub(crate) struct Mounted {
    pub(crate) widget: RefCell<Widget>,
    input: HtmlInputElement,
    list: Element,
    renderer: RefCell<DomList>,
}

impl Mounted {
    pub(crate) fn render(&self) {
        let widget = self.widget.borrow();
        if let Err(e) = widget.render_into(&mut *self.renderer.borrow_mut()) {
            log::error!("Could not render #{}: {e:?}", widget.config().list_id);
        }
    }

    fn render_if(&self, applied: Applied) {
        if applied == Applied::Rendered {
            self.render();
        }
    }

    /// The input changed: send its value and render whatever comes back.
    fn on_input(self: &Rc<Self>) {
        let request = self.widget.borrow_mut().input(&self.input.value());
        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = fetch_text(&request.url).await;
            let applied = this
                .widget
                .borrow_mut()
                .apply_suggestions(request.ticket, outcome);
            this.render_if(applied);
        });
    }

    /// Picks entry `index`, filling the input or starting a position lookup.
    pub(crate) fn select(self: &Rc<Self>, index: usize) {
        let selection = self.widget.borrow_mut().select(index);
        match selection {
            Some(Selection::Fill(text)) => {
                self.input.set_value(&text);
                self.render();
            }
            Some(Selection::Locate(ticket)) => {
                spawn_local(Rc::clone(self).locate(ticket));
            }
            None => {}
        }
    }

    async fn locate(self: Rc<Self>, ticket: Ticket) {
        let request = match current_position().await {
            Ok(at) => self.widget.borrow_mut().located(ticket, at),
            Err(e) => {
                let applied = self.widget.borrow_mut().geolocation_failed(ticket, e);
                self.render_if(applied);
                return;
            }
        };
        let Some(request) = request else {
            return;
        };

        let outcome = fetch_text(&request.url).await;
        let applied = self.widget.borrow_mut().apply_place(request.ticket, outcome);
        self.render_if(applied);
    }

    fn on_list_click(self: &Rc<Self>, event: &Event) {
        if let Some(index) = dom::clicked_index(event.target(), &self.list) {
            self.select(index);
        }
    }

    fn on_document_click(&self, event: &Event) {
        let target = dom::click_target(event.target(), &self.input, &self.list);
        let applied = self.widget.borrow_mut().click(target);
        self.render_if(applied);
    }

    pub(crate) fn inject(&self, body: &str) {
        let applied = self.widget.borrow_mut().inject(body);
        self.render_if(applied);
    }

    pub(crate) fn dismiss(&self) {
        let applied = self.widget.borrow_mut().dismiss();
        self.render_if(applied);
    }
}

/// An attached DOM listener; detaches itself on drop.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> std::result::Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Looks up the configured elements and attaches the three listeners:
/// `input` on the field, `click` on the list, `click` on the document.
pub(crate) fn mount(config: WidgetConfig) -> Result<(Rc<Mounted>, Vec<Listener>)> {
    let doc = dom::document()?;
    let input = dom::input(&doc, &config.input_id)?;
    let list = dom::element(&doc, &config.list_id)?;
    let widget = Widget::new(config)?;

    log::info!(
        "Mounting {:?} suggestions on #{} -> #{}",
        widget.config().kind,
        widget.config().input_id,
        widget.config().list_id
    );

    let mounted = Rc::new(Mounted {
        widget: RefCell::new(widget),
        input: input.clone(),
        list: list.clone(),
        renderer: RefCell::new(DomList::new(doc.clone(), list.clone())),
    });

    let attach = |target: &EventTarget, event: &'static str, handler: Box<dyn FnMut(Event)>| {
        Listener::attach(target, event, handler).map_err(|e| {
            SuggestError::InvalidConfig(format!(
                "could not attach {event} listener: {}",
                describe(&e)
            ))
        })
    };

    let on_input = Rc::clone(&mounted);
    let on_list = Rc::clone(&mounted);
    let on_doc = Rc::clone(&mounted);
    let listeners = vec![
        attach(&input, "input", Box::new(move |_: Event| on_input.on_input()))?,
        attach(&list, "click", Box::new(move |e: Event| on_list.on_list_click(&e)))?,
        attach(&doc, "click", Box::new(move |e: Event| on_doc.on_document_click(&e)))?,
    ];

    Ok((mounted, listeners))
}
