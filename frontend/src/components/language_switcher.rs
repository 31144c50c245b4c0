use shared::Language;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_preferences::LanguageHandle;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let Some(language) = use_context::<LanguageHandle>() else {
        return html! {};
    };

    let onchange = {
        let set_language = language.set_language.clone();
        Callback::from(move |e: Event| {
            let select = e.target_unchecked_into::<HtmlSelectElement>();
            if let Some(choice) = Language::from_code(&select.value()) {
                set_language.emit(choice);
            }
        })
    };

    html! {
        <select class="language-switcher" aria-label="Language" {onchange}>
            {for Language::ALL.iter().map(|option| html! {
                <option value={option.code()} selected={*option == language.current}>
                    {format!("{} {}", option.flag(), option.native_name())}
                </option>
            })}
        </select>
    }
}
