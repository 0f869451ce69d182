use leptos::prelude::*;

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section id="use-cases" class="use-cases">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Use cases"</p>
                    <h2 class="section-title">"Built for the exchanges you run every day."</h2>
                </div>
                <div class="use-cases-grid">
                    <UseCaseCard
                        title="Eligibility & claims"
                        description="Route 270/271 and 837/835 transactions to every payer through one endpoint."
                        tag=Some("X12 EDI")
                    />
                    <UseCaseCard
                        title="Lab orders & results"
                        description="Exchange ORM/ORU messages with reference labs without per-lab interface work."
                        tag=Some("HL7 v2")
                    />
                    <UseCaseCard
                        title="Prior authorization"
                        description="Submit and track authorizations over FHIR APIs aligned with CMS interoperability rules."
                        tag=Some("FHIR R4")
                    />
                    <UseCaseCard
                        title="Care coordination"
                        description="Share admission, discharge and transfer events with every provider in the network."
                        tag=None
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn UseCaseCard(
    title: &'static str,
    description: &'static str,
    tag: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="use-case-card">
            <h3 class="use-case-title">{title}</h3>
            <p class="use-case-description">{description}</p>
            {tag.map(|tag| view! { <span class="use-case-tag">{tag}</span> })}
        </div>
    }
}
