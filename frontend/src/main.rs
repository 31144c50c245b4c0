mod components;
mod hooks;
mod services;

use healthwatch_backend::IntakeConfig;
use yew::prelude::*;

use components::{AiDetectionSection, Footer, Hero, Navbar, SymptomReportSection};
use hooks::use_preferences::{use_language_provider, use_theme_provider, LanguageHandle, ThemeHandle};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| IntakeConfig::default());
    let language = use_language_provider(&config);
    let theme = use_theme_provider(&config);

    html! {
        <ContextProvider<LanguageHandle> context={language}>
            <ContextProvider<ThemeHandle> context={theme}>
                <div class="app">
                    <Navbar />
                    <main>
                        <Hero />
                        <SymptomReportSection config={(*config).clone()} />
                        <AiDetectionSection />
                    </main>
                    <Footer />
                </div>
            </ContextProvider<ThemeHandle>>
        </ContextProvider<LanguageHandle>>
    }
}

fn main() {
    services::logging::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
