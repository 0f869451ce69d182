use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"H+"</span>
                    <span class="nav-title">"Healthdex"</span>
                </a>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    <a href="#problem" class="nav-link" on:click=close_menu>"Why Healthdex"</a>
                    <a href="#use-cases" class="nav-link" on:click=close_menu>"Use Cases"</a>
                    <a href="#roi" class="nav-link" on:click=close_menu>"ROI Calculator"</a>
                    <a href="#partners" class="nav-link" on:click=close_menu>"Partners"</a>
                    <a href="#contact" class="nav-cta" on:click=close_menu>"Book a Demo"</a>
                </div>
            </div>
        </nav>
    }
}
