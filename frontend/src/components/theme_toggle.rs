use yew::prelude::*;

use crate::hooks::use_preferences::ThemeHandle;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let Some(theme) = use_context::<ThemeHandle>() else {
        return html! {};
    };

    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button class="btn btn-icon theme-toggle" aria-label="Toggle theme" {onclick}>
            {if theme.is_dark { "☀️" } else { "🌙" }}
        </button>
    }
}
