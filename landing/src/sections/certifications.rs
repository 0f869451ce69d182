use leptos::prelude::*;

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section class="certifications">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Security & compliance"</p>
                    <h2 class="section-title">"Compliance is part of the platform, not your backlog."</h2>
                </div>
                <div class="certifications-grid">
                    <CertBadge name="HIPAA" detail="BAA available for every customer" />
                    <CertBadge name="SOC 2 Type II" detail="Audited annually" />
                    <CertBadge name="HITRUST r2" detail="Certified environment" />
                    <CertBadge name="ONC" detail="FHIR R4 API conformance" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertBadge(name: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="cert-badge">
            <span class="cert-name">{name}</span>
            <span class="cert-detail">{detail}</span>
        </div>
    }
}
