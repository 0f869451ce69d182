use leptos::prelude::*;
use super::CONTACT_EMAIL;

#[component]
pub fn Footer() -> impl IntoView {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"H+"</span>
                    <span class="footer-title">"Healthdex"</span>
                </div>
                <div class="footer-links">
                    <a href="#problem" class="footer-link">"Why Healthdex"</a>
                    <a href="#roi" class="footer-link">"ROI Calculator"</a>
                    <a href=mailto class="footer-link">"Contact"</a>
                    <a href="/privacy" class="footer-link">"Privacy"</a>
                </div>
                <p class="footer-note">
                    "ROI figures are illustrative estimates based on the parameters you enter."
                </p>
                <p class="footer-copyright">"Developed by The Healthdex Team (c)2025"</p>
            </div>
        </footer>
    }
}
