use crate::layout::tabs::Components;
use contracts::shared::tab_config::TabsConfig;
use leptos::prelude::*;

type PanelSpec = (&'static str, &'static str, &'static str);

const HOME_PANELS: [PanelSpec; 2] = [
    ("tab-a", "Overview", "What the site is about."),
    ("tab-b", "News", "Latest updates."),
];

const ABOUT_PANELS: [PanelSpec; 2] = [
    ("tab-c", "Team", "Who builds it."),
    ("tab-d", "Contact", "How to reach us."),
];

#[component]
pub fn App() -> impl IntoView {
    // Runs once the markup below is in the document
    Effect::new(move |_| {
        let config = match TabsConfig::default_config() {
            Ok(config) => config,
            Err(err) => {
                log::error!("default tab configuration is broken: {err:#}");
                return;
            }
        };
        if let Err(err) = crate::init_page_tabs(config, Components::from(["home", "about"])) {
            log::error!("tabs setup failed: {err}");
        }
    });

    view! {
        <main class="tabkit-demo">
            <TabGroupMarkup container_id="my-home-tabs" panels=HOME_PANELS.to_vec() />
            <TabGroupMarkup container_id="my-about-tabs" panels=ABOUT_PANELS.to_vec() />
        </main>
    }
}

#[component]
fn TabGroupMarkup(container_id: &'static str, panels: Vec<PanelSpec>) -> impl IntoView {
    view! {
        <section class="tab-group">
            <ul id=container_id class="tab-links">
                {panels
                    .iter()
                    .map(|&(id, title, _)| {
                        view! {
                            <li>
                                <a href=format!("#{id}")>{title}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {panels
                .iter()
                .map(|&(id, _, body)| {
                    view! {
                        <div id=id class="tab-panel">
                            <p>{body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
