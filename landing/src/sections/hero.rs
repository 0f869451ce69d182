use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "HL7 · FHIR R4 · X12 EDI"
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"One connection"</span>
                            <br />
                            "to every trading partner."
                        </h1>
                        <p class="hero-description">
                            "Healthdex replaces point-to-point integrations with a single, compliant exchange. "
                            "Onboard payers, providers and labs in days instead of months."
                        </p>
                        <div class="hero-actions">
                            <a href="#roi" class="btn btn-primary">"Calculate your ROI"</a>
                            <a href="#contact" class="btn btn-secondary">"Talk to sales →"</a>
                        </div>
                    </div>
                    <ExchangeDiagram />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExchangeDiagram() -> impl IntoView {
    let spokes = ["Payers", "Hospitals", "Labs", "Pharmacies", "Clearinghouses", "EHR vendors"];

    view! {
        <div class="hero-diagram">
            <div class="diagram-hub">"Healthdex"</div>
            <ul class="diagram-spokes">
                {spokes
                    .into_iter()
                    .map(|name| view! { <li class="diagram-spoke">{name}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
