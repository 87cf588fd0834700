pub mod app;
pub mod layout;
pub mod shared;

use contracts::shared::tab_config::TabsConfig;
use layout::tabs::{Components, Tabs, TabsError};
use shared::dom::web::WebDom;
use shared::type_util::type_of;
use wasm_bindgen::prelude::*;

/// Set up tab groups on the current page.
pub fn init_page_tabs(config: TabsConfig, components: Components) -> Result<(), TabsError> {
    let dom = WebDom::from_window().ok_or(TabsError::NoDocument)?;
    let mut tabs = Tabs::new(dom, config);
    tabs.init(components)
}

/// `Tabs.init(nameOrNames)` with the built-in `home` / `about` groups.
#[wasm_bindgen(js_name = initTabs)]
pub fn init_tabs(component: JsValue) -> Result<(), JsValue> {
    let config = TabsConfig::default_config()
        .map_err(|err| TabsError::InvalidConfiguration(format!("{err:#}")))?;
    init_page_tabs(config, Components::from_js(&component))?;
    Ok(())
}

/// Same as `initTabs`, with groups supplied by the page.
#[wasm_bindgen(js_name = initTabsWithConfig)]
pub fn init_tabs_with_config(config: JsValue, component: JsValue) -> Result<(), JsValue> {
    let config: TabsConfig = serde_wasm_bindgen::from_value(config)?;
    config
        .validate()
        .map_err(|err| TabsError::InvalidConfiguration(format!("{err:#}")))?;
    init_page_tabs(config, Components::from_js(&component))?;
    Ok(())
}

#[wasm_bindgen(js_name = getType)]
pub fn get_type(value: &JsValue) -> String {
    type_of(value).to_string()
}

/// Mount the demo page with both built-in tab groups.
#[wasm_bindgen(js_name = mountDemo)]
pub fn mount_demo() {
    leptos::mount::mount_to_body(app::App);
}

/// Runs on module load. Mounts nothing; host pages own their markup.
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
