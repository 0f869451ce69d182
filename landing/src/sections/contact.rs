use leptos::prelude::*;
use super::CONTACT_EMAIL;

#[component]
pub fn Contact() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_email = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(CONTACT_EMAIL);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    let mailto = format!("mailto:{}?subject=Healthdex%20demo", CONTACT_EMAIL);

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="contact-box">
                    <div class="contact-label">"CONTACT"</div>
                    <h2 class="section-title">"See Healthdex with your own partner list."</h2>
                    <p class="section-description">
                        "A 30-minute walkthrough, using the numbers from your ROI estimate."
                    </p>
                    <div class="contact-command-box">
                        <code class="contact-email">{CONTACT_EMAIL}</code>
                        <button class="copy-btn-small" on:click=copy_email>
                            {move || if copied.get() { "OK" } else { "COPY" }}
                        </button>
                    </div>
                    <a href=mailto class="btn btn-primary">"Book a demo"</a>
                </div>
            </div>
        </section>
    }
}
