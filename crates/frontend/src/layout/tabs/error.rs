use thiserror::Error;
use wasm_bindgen::JsValue;

/// Ошибки инициализации табов
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TabsError {
    #[error("unknown tab configuration `{0}`")]
    UnknownConfiguration(String),

    #[error("tab group `{group}` references missing element `#{id}`")]
    MissingElement { group: String, id: String },

    #[error("invalid tab configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no document available")]
    NoDocument,
}

impl From<TabsError> for JsValue {
    fn from(err: TabsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
