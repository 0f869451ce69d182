use leptos::prelude::*;

#[component]
pub fn Partners() -> impl IntoView {
    let partners = [
        "Regional Health Plan",
        "Northside Medical Group",
        "Coastal Labs",
        "CareBridge Pharmacy",
        "Summit Hospital Network",
        "Unity Clearinghouse",
    ];

    view! {
        <section id="partners" class="partners">
            <div class="container">
                <p class="section-eyebrow">"Trusted across the care continuum"</p>
                <div class="partners-row">
                    {partners
                        .into_iter()
                        .map(|name| view! { <span class="partner-name">{name}</span> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
