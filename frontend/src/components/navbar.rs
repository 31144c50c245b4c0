use yew::prelude::*;

use super::language_switcher::LanguageSwitcher;
use super::theme_toggle::ThemeToggle;
use crate::hooks::use_preferences::use_translator;

const LINKS: [(&str, &str, &str); 5] = [
    ("nav.home", "Home", "#home"),
    ("nav.symptoms", "Symptoms", "#symptoms"),
    ("nav.aiDetection", "AI Detection", "#ai-detection"),
    ("nav.about", "About", "#about"),
    ("nav.contact", "Contact", "#contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let translator = use_translator();

    html! {
        <nav class="navbar">
            <div class="container">
                <a class="brand" href="#home">{"🩺 HealthWatch"}</a>
                <ul class="nav-links">
                    {for LINKS.iter().map(|(key, default, href)| html! {
                        <li><a href={href.to_string()}>{translator.t_or(key, default)}</a></li>
                    })}
                </ul>
                <div class="nav-controls">
                    <LanguageSwitcher />
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}
