//! Tabs widget: a list of links inside a container switches which of a set
//! of panels is visible, and highlights the `<li>` of the clicked link.
//!
//! [`Tabs`] is built from a [`TabsConfig`] and a [`Dom`]; every processed
//! group becomes an independent [`TabGroup`] owned by its click listener.

pub mod error;
pub mod group;

pub use error::TabsError;
pub use group::{ClickOutcome, TabGroup};

use crate::shared::dom::Dom;
use crate::shared::type_util::{type_of, TypeTag};
use contracts::shared::tab_config::{FailureMode, TabsConfig};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

/// What to set up: one group name or a list of them. `None` entries are
/// holes and are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Components {
    One(String),
    Many(Vec<Option<String>>),
}

/// One slot of a JS array handed to `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayEntry {
    /// Index that is not an own property of the array.
    Hole,
    Name(String),
    /// Present, but not a string.
    Other(TypeTag),
}

impl Components {
    /// Interpret a JS argument. Arrays are walked over their own indices.
    pub fn from_js(value: &JsValue) -> Self {
        let tag = type_of(value);
        let entries = if tag == TypeTag::Array {
            let array: &js_sys::Array = value.unchecked_ref();
            (0..array.length())
                .map(|i| {
                    if !array.has_own_property(&JsValue::from(i)) {
                        return ArrayEntry::Hole;
                    }
                    let entry = array.get(i);
                    match entry.as_string() {
                        Some(name) => ArrayEntry::Name(name),
                        None => ArrayEntry::Other(type_of(&entry)),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };
        Self::classify(tag, value.as_string(), entries)
    }

    /// Decide what `init` sets up for a value of type `tag`. `name` is the
    /// value itself when it is a string, `entries` its slots when it is an
    /// array. Holes and non-string entries are skipped. A lone non-string
    /// value becomes `[Tag]`, a name no configuration can have.
    pub fn classify(tag: TypeTag, name: Option<String>, entries: Vec<ArrayEntry>) -> Self {
        match tag {
            TypeTag::Array => Components::Many(
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| match entry {
                        ArrayEntry::Name(name) => Some(name),
                        ArrayEntry::Hole => None,
                        ArrayEntry::Other(entry_tag) => {
                            log::debug!("skipping tab entry {i} of type {entry_tag}");
                            None
                        }
                    })
                    .collect(),
            ),
            _ => Components::One(name.unwrap_or_else(|| format!("[{tag}]"))),
        }
    }
}

impl From<&str> for Components {
    fn from(name: &str) -> Self {
        Components::One(name.to_string())
    }
}

impl From<String> for Components {
    fn from(name: String) -> Self {
        Components::One(name)
    }
}

impl From<&[&str]> for Components {
    fn from(names: &[&str]) -> Self {
        Components::Many(names.iter().map(|n| Some(n.to_string())).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Components {
    fn from(names: [&str; N]) -> Self {
        Components::from(&names[..])
    }
}

impl From<Vec<Option<String>>> for Components {
    fn from(names: Vec<Option<String>>) -> Self {
        Components::Many(names)
    }
}

pub struct Tabs<D: Dom> {
    dom: Rc<D>,
    config: TabsConfig,
    groups: Vec<Rc<TabGroup<D>>>,
}

impl<D: Dom> Tabs<D> {
    pub fn new(dom: D, config: TabsConfig) -> Self {
        Self::with_shared_dom(Rc::new(dom), config)
    }

    pub fn with_shared_dom(dom: Rc<D>, config: TabsConfig) -> Self {
        Self {
            dom,
            config,
            groups: Vec::new(),
        }
    }

    /// Set up one group or each group of a list, in order. Stops at the
    /// first error.
    pub fn init(&mut self, components: impl Into<Components>) -> Result<(), TabsError> {
        match components.into() {
            Components::One(name) => {
                self.process(&name)?;
            }
            Components::Many(names) => {
                for name in names.into_iter().flatten() {
                    self.process(&name)?;
                }
            }
        }
        Ok(())
    }

    /// Set up the group configured under `name` and wire its click listener.
    ///
    /// Unknown names leave the page untouched: `Ok(None)` in silent mode,
    /// [`TabsError::UnknownConfiguration`] in loud mode.
    pub fn process(&mut self, name: &str) -> Result<Option<Rc<TabGroup<D>>>, TabsError> {
        let Some(config) = self.config.group(name) else {
            return match self.config.failure_mode {
                FailureMode::Silent => {
                    log::debug!("no tab configuration named `{name}`");
                    Ok(None)
                }
                FailureMode::Loud => {
                    log::warn!("no tab configuration named `{name}`");
                    Err(TabsError::UnknownConfiguration(name.to_string()))
                }
            };
        };

        let group = TabGroup::resolve(
            Rc::clone(&self.dom),
            name,
            config,
            self.config.classes.clone(),
            self.config.failure_mode,
        )?;
        group.apply_initial_state();

        let group = Rc::new(group);
        let listener = Rc::clone(&group);
        self.dom.listen_click(
            group.container(),
            Box::new(move |target: &D::Element| {
                listener.handle_click(target).prevents_default()
            }),
        );

        log::debug!(
            "tab group `{}` ready with {} panels and {} links",
            name,
            group.panel_ids().len(),
            group.links().len()
        );
        self.groups.push(Rc::clone(&group));
        Ok(Some(group))
    }

    /// Most recently processed group with this name.
    pub fn group(&self, name: &str) -> Option<Rc<TabGroup<D>>> {
        self.groups.iter().rev().find(|g| g.name() == name).cloned()
    }

    pub fn groups(&self) -> &[Rc<TabGroup<D>>] {
        &self.groups
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }
}
