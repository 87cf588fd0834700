//! One tab group: its resolved elements and the click transition.

use crate::shared::class_set::{add_class, remove_class};
use crate::shared::dom::{by_id, by_tag, Dom, TagQuery};
use crate::shared::lookup::Lookup;
use contracts::shared::tab_config::{FailureMode, TabClasses, TabConfiguration};
use std::rc::Rc;

use super::error::TabsError;

/// Result of a click inside the group container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Target is not a hyperlink, nothing changed.
    Ignored,
    /// The panel with this id is now the visible one.
    Selected(String),
    /// The link points at no known panel; every panel is hidden now.
    Unresolved(Option<String>),
}

impl ClickOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

/// Text after the first `#` of a link, up to the next `#`.
pub fn fragment(href: &str) -> Option<&str> {
    href.split('#').nth(1)
}

pub struct TabGroup<D: Dom> {
    name: String,
    dom: Rc<D>,
    classes: TabClasses,
    failure_mode: FailureMode,
    container: D::Element,
    panel_ids: Vec<String>,
    panels: Lookup<D::Element>,
    links: Vec<D::Element>,
}

impl<D: Dom> TabGroup<D> {
    /// Resolve every element of `config`. Nothing on the page is touched
    /// until all of them were found.
    pub fn resolve(
        dom: Rc<D>,
        name: &str,
        config: &TabConfiguration,
        classes: TabClasses,
        failure_mode: FailureMode,
    ) -> Result<Self, TabsError> {
        if config.panel_ids.is_empty() {
            return Err(TabsError::InvalidConfiguration(format!(
                "tab group `{name}` has no panels"
            )));
        }

        let missing = |id: &str| TabsError::MissingElement {
            group: name.to_string(),
            id: id.to_string(),
        };

        let container = by_id(dom.as_ref(), &config.container_id)
            .ok_or_else(|| missing(&config.container_id))?;
        let links = by_tag(dom.as_ref(), &TagQuery::tag("li").within(&container)).into_vec();

        let mut panels = Lookup::new();
        for id in &config.panel_ids {
            let panel = by_id(dom.as_ref(), id).ok_or_else(|| missing(id))?;
            panels.store(id.clone(), panel);
        }

        Ok(Self {
            name: name.to_string(),
            dom,
            classes,
            failure_mode,
            container,
            panel_ids: config.panel_ids.clone(),
            panels,
            links,
        })
    }

    /// First panel visible, the rest hidden, tab bar shown.
    pub fn apply_initial_state(&self) {
        let dom = self.dom.as_ref();
        for id in self.panel_ids.iter().skip(1) {
            if let Some(panel) = self.panels.lookup(id) {
                add_class(dom, panel, &self.classes.hide);
            }
        }
        add_class(dom, &self.container, &self.classes.show);
        if let Some(first) = self.panel_ids.first().and_then(|id| self.panels.lookup(id)) {
            add_class(dom, first, &self.classes.show);
        }
    }

    pub fn handle_click(&self, target: &D::Element) -> ClickOutcome {
        let dom = self.dom.as_ref();
        let Some(href) = dom.href(target) else {
            return ClickOutcome::Ignored;
        };

        let wanted = fragment(&href);
        let selected = wanted.and_then(|id| self.panels.lookup(id));

        self.panels
            .for_each(|_, panel| remove_class(dom, panel, &self.classes.show));
        if let Some(panel) = selected {
            add_class(dom, panel, &self.classes.show);
        }

        for link in &self.links {
            remove_class(dom, link, &self.classes.selected);
        }
        if let Some(parent) = dom.parent(target) {
            add_class(dom, &parent, &self.classes.selected);
        }

        match (wanted, selected) {
            (Some(id), Some(_)) => ClickOutcome::Selected(id.to_string()),
            (wanted, _) => {
                match self.failure_mode {
                    FailureMode::Silent => log::debug!(
                        "tab group `{}`: link `{}` matches no panel",
                        self.name,
                        href
                    ),
                    FailureMode::Loud => log::warn!(
                        "tab group `{}`: link `{}` matches no panel",
                        self.name,
                        href
                    ),
                }
                ClickOutcome::Unresolved(wanted.map(str::to_string))
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn container(&self) -> &D::Element {
        &self.container
    }

    pub fn panel(&self, id: &str) -> Option<&D::Element> {
        self.panels.lookup(id)
    }

    pub fn panel_ids(&self) -> &[String] {
        &self.panel_ids
    }

    /// The `<li>` elements captured at setup.
    pub fn links(&self) -> &[D::Element] {
        &self.links
    }
}
