//! Canonical type tags for JS values.
//!
//! `null`, `undefined` and the global object get their own tags; everything
//! else is named after the `Xxx` part of `Object.prototype.toString`'s
//! `[object Xxx]`, so arrays, dates and boxed primitives are told apart even
//! when `typeof` says `"object"`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null,
    Undefined,
    Global,
    Array,
    Object,
    String,
    Number,
    Boolean,
    Function,
    Date,
    RegExp,
    Other(String),
}

impl TypeTag {
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Null => "Null",
            TypeTag::Undefined => "Undefined",
            TypeTag::Global => "Global",
            TypeTag::Array => "Array",
            TypeTag::Object => "Object",
            TypeTag::String => "String",
            TypeTag::Number => "Number",
            TypeTag::Boolean => "Boolean",
            TypeTag::Function => "Function",
            TypeTag::Date => "Date",
            TypeTag::RegExp => "RegExp",
            TypeTag::Other(name) => name,
        }
    }

    /// Tag for a class name such as `"Array"`.
    pub fn from_class(class: &str) -> Self {
        match class {
            "Null" => TypeTag::Null,
            "Undefined" => TypeTag::Undefined,
            "Global" => TypeTag::Global,
            "Array" => TypeTag::Array,
            "Object" => TypeTag::Object,
            "String" => TypeTag::String,
            "Number" => TypeTag::Number,
            "Boolean" => TypeTag::Boolean,
            "Function" => TypeTag::Function,
            "Date" => TypeTag::Date,
            "RegExp" => TypeTag::RegExp,
            other => TypeTag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"[object Array]"` → `"Array"`.
pub fn class_of(object_string: &str) -> Option<&str> {
    object_string
        .strip_prefix("[object ")
        .and_then(|rest| rest.strip_suffix(']'))
}

thread_local! {
    static TAG_CACHE: RefCell<HashMap<String, TypeTag>> = RefCell::new(HashMap::new());
}

/// Tag for a full `[object Xxx]` string, memoised per string.
pub fn tag_for_object_string(object_string: &str) -> TypeTag {
    TAG_CACHE.with(|cache| {
        if let Some(tag) = cache.borrow().get(object_string) {
            return tag.clone();
        }
        let tag = class_of(object_string)
            .map(TypeTag::from_class)
            .unwrap_or_else(|| TypeTag::Other(object_string.to_string()));
        cache
            .borrow_mut()
            .insert(object_string.to_string(), tag.clone());
        tag
    })
}

/// Canonical type tag of any JS value.
pub fn type_of(value: &JsValue) -> TypeTag {
    if value.is_null() {
        return TypeTag::Null;
    }
    if value.is_undefined() {
        return TypeTag::Undefined;
    }
    if *value == JsValue::from(js_sys::global()) {
        return TypeTag::Global;
    }

    // Object.prototype.toString, reached through a fresh object
    let to_string = js_sys::Reflect::get(&js_sys::Object::new(), &JsValue::from_str("toString"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let object_string = to_string
        .and_then(|f| f.call0(value).ok())
        .and_then(|s| s.as_string());

    match object_string {
        Some(s) => tag_for_object_string(&s),
        None => TypeTag::Other("Unknown".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_of() {
        assert_eq!(class_of("[object Array]"), Some("Array"));
        assert_eq!(class_of("[object HTMLDivElement]"), Some("HTMLDivElement"));
        assert_eq!(class_of("Array"), None);
    }

    #[test]
    fn test_tag_for_object_string() {
        assert_eq!(tag_for_object_string("[object Array]"), TypeTag::Array);
        assert_eq!(tag_for_object_string("[object Object]"), TypeTag::Object);
        assert_eq!(tag_for_object_string("[object Number]"), TypeTag::Number);
        assert_eq!(tag_for_object_string("[object Date]"), TypeTag::Date);
        assert_eq!(tag_for_object_string("[object String]"), TypeTag::String);
        assert_eq!(
            tag_for_object_string("[object Map]"),
            TypeTag::Other("Map".to_string())
        );
    }

    #[test]
    fn test_cached_tag_is_stable() {
        let first = tag_for_object_string("[object Window]");
        let second = tag_for_object_string("[object Window]");
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "Window");
    }

    #[test]
    fn test_tag_names_round_trip_through_from_class() {
        for tag in [TypeTag::Null, TypeTag::Undefined, TypeTag::Global, TypeTag::Array] {
            assert_eq!(TypeTag::from_class(tag.as_str()), tag);
        }
        assert_eq!(TypeTag::Global.to_string(), "Global");
    }
}
