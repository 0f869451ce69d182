use leptos::prelude::*;

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section id="problem" class="problem">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"The integration tax"</p>
                    <h2 class="section-title">"Every new partner is another custom project."</h2>
                    <p class="section-description">
                        "Healthcare organizations still wire partners together one interface at a time. "
                        "Each link is built, tested, certified and maintained on its own."
                    </p>
                </div>
                <div class="problem-grid">
                    <ProblemCard
                        figure="3-6 months"
                        title="to onboard a partner"
                        description="Interface specs, mapping, testing and sign-off repeat for every connection."
                    />
                    <ProblemCard
                        figure="20%"
                        title="of build cost, every year"
                        description="Point-to-point interfaces break whenever either side upgrades."
                    />
                    <ProblemCard
                        figure="1 in 30"
                        title="transactions fail"
                        description="Rejected claims and malformed messages turn into rework, delays and penalties."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProblemCard(figure: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="problem-card">
            <div class="problem-figure">{figure}</div>
            <h3 class="problem-title">{title}</h3>
            <p class="problem-description">{description}</p>
        </div>
    }
}
