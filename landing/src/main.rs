// Healthdex Landing Page — Leptos 0.8 Edition
// Developed by The Healthdex Team (c)2025

mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Problem />
            <UseCases />
            <Stats />
            <RoiCalculator />
            <Partners />
            <Certifications />
            <Contact />
        </main>
        <Footer />
    }
}
