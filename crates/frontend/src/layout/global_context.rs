use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Section shown when the URL names none.
pub const HOME_SECTION: &str = "overview";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the section rendered in the center area
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(HOME_SECTION.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// `?section=` в адресной строке: читаем при старте, дальше пишем при каждой смене раздела.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = section_from_query(&search) {
            self.active.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("section".to_string(), key)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
                    }
                }
            }
        });
    }

    pub fn open_section(&self, key: &str) {
        leptos::logging::log!("open_section: key='{}'", key);
        if self.active.with_untracked(|active| active != key) {
            self.active.set(key.to_string());
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context (provide it in app root)")
}

fn section_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("section").map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_query() {
        assert_eq!(section_from_query("?section=a001_customer"), Some("a001_customer".to_string()));
        assert_eq!(section_from_query("section=a004_product_category&x=1"), Some("a004_product_category".to_string()));
        assert_eq!(section_from_query(""), None);
        assert_eq!(section_from_query("?section="), None);
    }
}
