//! Class attribute manipulation.
//!
//! The attribute is treated as a list of tokens split on single spaces. No
//! normalisation is done, so repeated separators survive a rewrite.

use super::dom::Dom;

/// Tokens of a raw class attribute. An empty attribute has no tokens.
pub fn split_classes(class_name: &str) -> Vec<&str> {
    if class_name.is_empty() {
        Vec::new()
    } else {
        class_name.split(' ').collect()
    }
}

pub fn class_names<D: Dom>(dom: &D, element: &D::Element) -> Vec<String> {
    split_classes(&dom.class_name(element))
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn has_class<D: Dom>(dom: &D, element: &D::Element, class: &str) -> bool {
    split_classes(&dom.class_name(element)).contains(&class)
}

/// Append `class` unless it is already present.
pub fn add_class<D: Dom>(dom: &D, element: &D::Element, class: &str) {
    let current = dom.class_name(element);
    let mut classes = split_classes(&current);
    if classes.contains(&class) {
        return;
    }
    classes.push(class);
    dom.set_class_name(element, &classes.join(" "));
}

/// Drop every occurrence of `class`. The attribute is rewritten even when
/// nothing matched.
pub fn remove_class<D: Dom>(dom: &D, element: &D::Element, class: &str) {
    let current = dom.class_name(element);
    let remaining: Vec<&str> = split_classes(&current)
        .into_iter()
        .filter(|name| *name != class)
        .collect();
    dom.set_class_name(element, &remaining.join(" "));
}
