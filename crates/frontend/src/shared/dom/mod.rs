//! Minimal view of the document the widgets need.
//!
//! Everything that touches elements goes through [`Dom`], so the widget code
//! can run against the live page ([`web::WebDom`]) or an in-memory document
//! in tests.

#[cfg(test)]
pub mod memory;
pub mod web;

/// Called with the click target; returns `true` when the default action
/// should be prevented.
pub type ClickHandler<E> = Box<dyn Fn(&E) -> bool>;

pub trait Dom: 'static {
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Descendants of `context` (the whole document when `None`) with the
    /// given tag name, in document order. `"*"` matches every element.
    fn elements_by_tag(&self, tag: &str, context: Option<&Self::Element>) -> Vec<Self::Element>;

    /// Raw class attribute, empty when there is none.
    fn class_name(&self, element: &Self::Element) -> String;

    fn set_class_name(&self, element: &Self::Element, value: &str);

    /// Link destination, `None` for elements that are not hyperlinks.
    /// An `<a>` without an `href` attribute still counts as a hyperlink and
    /// yields `Some("")`, as the `href` property does in the browser.
    fn href(&self, element: &Self::Element) -> Option<String>;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Attach a click listener to `element`. Clicks on descendants bubble to it.
    fn listen_click(&self, element: &Self::Element, handler: ClickHandler<Self::Element>);
}

/// Options for [`by_tag`].
#[derive(Debug, Clone)]
pub struct TagQuery<'a, E> {
    pub tag: &'a str,
    pub context: Option<&'a E>,
    pub first: bool,
}

impl<E> Default for TagQuery<'_, E> {
    fn default() -> Self {
        Self {
            tag: "*",
            context: None,
            first: false,
        }
    }
}

impl<'a, E> TagQuery<'a, E> {
    pub fn tag(tag: &'a str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn within(mut self, context: &'a E) -> Self {
        self.context = Some(context);
        self
    }

    pub fn first(mut self) -> Self {
        self.first = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TagMatch<E> {
    First(Option<E>),
    All(Vec<E>),
}

impl<E> TagMatch<E> {
    pub fn into_vec(self) -> Vec<E> {
        match self {
            TagMatch::First(found) => found.into_iter().collect(),
            TagMatch::All(all) => all,
        }
    }
}

pub fn by_id<D: Dom>(dom: &D, id: &str) -> Option<D::Element> {
    dom.element_by_id(id)
}

pub fn by_tag<D: Dom>(dom: &D, query: &TagQuery<'_, D::Element>) -> TagMatch<D::Element> {
    let found = dom.elements_by_tag(query.tag, query.context);
    if query.first {
        TagMatch::First(found.into_iter().next())
    } else {
        TagMatch::All(found)
    }
}
