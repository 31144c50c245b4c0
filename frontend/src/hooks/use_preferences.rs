use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gloo::events::EventListener;
use healthwatch_backend::{
    IntakeConfig, LanguageContext, PreferenceRepository, ThemeContext, Translations,
};
use shared::{Language, ThemePreference};
use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::services::local_storage::BrowserStorage;
use crate::services::logging::Logger;

/// Language context handed down from the page root
#[derive(Clone)]
pub struct LanguageHandle {
    context: Rc<RefCell<LanguageContext<BrowserStorage>>>,
    pub current: Language,
    pub set_language: Callback<Language>,
}

impl PartialEq for LanguageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && Rc::ptr_eq(&self.context, &other.context)
    }
}

impl LanguageHandle {
    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.context.borrow().t_or(key, default)
    }
}

/// Theme context handed down from the page root
#[derive(Clone)]
pub struct ThemeHandle {
    context: Rc<RefCell<ThemeContext<BrowserStorage>>>,
    pub current: ThemePreference,
    pub is_dark: bool,
    pub toggle: Callback<()>,
}

impl PartialEq for ThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && self.is_dark == other.is_dark
            && Rc::ptr_eq(&self.context, &other.context)
    }
}

/// Creates the language context. Call once, at the page root.
#[hook]
pub fn use_language_provider(config: &IntakeConfig) -> LanguageHandle {
    let context = {
        let config = config.clone();
        use_mut_ref(move || {
            LanguageContext::initialize(
                PreferenceRepository::new(BrowserStorage, &config),
                Arc::new(Translations::bundled()),
                &config,
            )
        })
    };
    let current = use_state(|| context.borrow().current());

    // Keep <html lang> in step for screen readers and fonts
    use_effect_with(*current, |language| {
        if let Some(root) = gloo::utils::document().document_element() {
            let _ = root.set_attribute("lang", language.code());
        }
        || ()
    });

    let set_language = {
        let context = context.clone();
        let current = current.clone();
        use_callback((), move |language: Language, _| {
            if let Err(e) = context.borrow_mut().set_language(language) {
                Logger::warn_with_component("language", &format!("Language not saved: {}", e));
            }
            current.set(language);
        })
    };

    LanguageHandle {
        context,
        current: *current,
        set_language,
    }
}

fn system_dark_query() -> Option<MediaQueryList> {
    gloo::utils::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

/// Calls `on_change` with the new system preference whenever it flips.
/// The subscription lasts as long as the returned listener.
fn watch_system_dark<F>(on_change: F) -> Option<EventListener>
where
    F: Fn(bool) + 'static,
{
    let query = system_dark_query()?;
    let target = query.clone();
    Some(EventListener::new(&query, "change", move |_| {
        on_change(target.matches())
    }))
}

/// Creates the theme context. Call once, at the page root.
#[hook]
pub fn use_theme_provider(config: &IntakeConfig) -> ThemeHandle {
    let context = {
        let config = config.clone();
        use_mut_ref(move || {
            ThemeContext::initialize(PreferenceRepository::new(BrowserStorage, &config))
        })
    };
    let current = use_state(|| context.borrow().current());
    let system_dark = use_state(|| system_dark_query().map(|query| query.matches()).unwrap_or(false));

    {
        let system_dark = system_dark.clone();
        use_effect_with((), move |_| {
            let listener = watch_system_dark(move |dark| system_dark.set(dark));
            move || drop(listener)
        });
    }

    let is_dark = context.borrow().resolve_dark(*system_dark);

    use_effect_with(is_dark, |&is_dark| {
        if let Some(root) = gloo::utils::document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", is_dark);
        }
        || ()
    });

    let toggle = {
        let context = context.clone();
        let current = current.clone();
        use_callback((), move |_: (), _| {
            let mut theme = context.borrow_mut();
            match theme.toggle() {
                Ok(next) => current.set(next),
                Err(e) => {
                    Logger::warn_with_component("theme", &format!("Theme not saved: {}", e));
                    current.set(theme.current());
                }
            }
        })
    };

    ThemeHandle {
        context,
        current: *current,
        is_dark,
        toggle,
    }
}

/// Translation lookup for components below the language provider.
/// Falls back to the caller's default when rendered outside it.
#[derive(Clone, PartialEq)]
pub struct Translator(Option<LanguageHandle>);

impl Translator {
    pub fn t_or(&self, key: &str, default: &str) -> String {
        match &self.0 {
            Some(language) => language.t_or(key, default),
            None => default.to_string(),
        }
    }
}

#[hook]
pub fn use_translator() -> Translator {
    Translator(use_context::<LanguageHandle>())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_system_theme_change_reaches_subscriber() {
        let seen = Rc::new(Cell::new(None));
        let listener = {
            let seen = seen.clone();
            watch_system_dark(move |dark| seen.set(Some(dark)))
        };
        assert!(listener.is_some());

        let query = system_dark_query().unwrap();
        query.dispatch_event(&Event::new("change").unwrap()).unwrap();
        assert_eq!(seen.get(), Some(query.matches()));
    }

    #[wasm_bindgen_test]
    fn test_dropped_listener_stops_updates() {
        let seen = Rc::new(Cell::new(None));
        let listener = {
            let seen = seen.clone();
            watch_system_dark(move |dark| seen.set(Some(dark)))
        };
        drop(listener);

        let query = system_dark_query().unwrap();
        query.dispatch_event(&Event::new("change").unwrap()).unwrap();
        assert_eq!(seen.get(), None);
    }
}
