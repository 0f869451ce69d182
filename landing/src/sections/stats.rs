use leptos::prelude::*;

#[component]
pub fn Stats() -> impl IntoView {
    let stats = [
        ("1,200+", "connected trading partners"),
        ("45M", "transactions per month"),
        ("99.99%", "platform uptime"),
        ("5 days", "median partner onboarding"),
    ];

    view! {
        <section class="stats">
            <div class="container">
                <div class="stats-grid">
                    {stats
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat">
                                    <div class="stat-value">{value}</div>
                                    <div class="stat-label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
