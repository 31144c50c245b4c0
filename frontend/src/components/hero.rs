use yew::prelude::*;

use crate::hooks::use_preferences::use_translator;

#[function_component(Hero)]
pub fn hero() -> Html {
    let translator = use_translator();

    html! {
        <section id="home" class="hero">
            <div class="container">
                <h1>{translator.t_or("hero.title", "Smart Health Surveillance & Early Warning")}</h1>
                <p class="hero-subtitle">
                    {translator.t_or(
                        "hero.subtitle",
                        "Empowering communities with AI-driven health monitoring.",
                    )}
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href="#symptoms">
                        {translator.t_or("nav.symptoms", "Symptoms")}
                    </a>
                    <a class="btn btn-outline" href="#ai-detection">
                        {translator.t_or("hero.learnBtn", "Learn More")}
                    </a>
                </div>
            </div>
        </section>
    }
}
