use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="footer">
            <div class="container">
                <span class="brand">{"🩺 HealthWatch"}</span>
                <p id="about">
                    {"Community symptom reporting for early warning of water-borne disease outbreaks."}
                </p>
                <p class="footer-note">
                    {"© 2024 HealthWatch. All rights reserved. | Government of Assam Initiative"}
                </p>
            </div>
        </footer>
    }
}
