use super::{ClickHandler, Dom};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlCollection, MouseEvent};

/// [`Dom`] backed by the live page.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

impl Dom for WebDom {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_tag(&self, tag: &str, context: Option<&Element>) -> Vec<Element> {
        match context {
            Some(element) => collect(element.get_elements_by_tag_name(tag)),
            None => collect(self.document.get_elements_by_tag_name(tag)),
        }
    }

    fn class_name(&self, element: &Element) -> String {
        element.class_name()
    }

    fn set_class_name(&self, element: &Element, value: &str) {
        element.set_class_name(value);
    }

    fn href(&self, element: &Element) -> Option<String> {
        element.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href)
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn listen_click(&self, element: &Element, handler: ClickHandler<Element>) {
        // Event delegation: one listener on the container, targets filtered by the handler
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(target) = event.target() else { return };
            let Ok(target) = target.dyn_into::<Element>() else {
                return;
            };
            if handler(&target) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Err(err) =
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("failed to attach click listener: {err:?}");
        }
        // Listeners live as long as the page
        closure.forget();
    }
}
