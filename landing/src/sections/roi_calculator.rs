use healthdex_roi::{
    Action, CalculatorState, Field, MetricExplanation, MetricKey, Scenario, format_currency,
};
use leptos::prelude::*;

/// Interactive ROI calculator.
///
/// All state lives in one `CalculatorState` signal; every control dispatches
/// an `Action` and the signal is replaced with the reducer's output.
#[component]
pub fn RoiCalculator() -> impl IntoView {
    let (state, set_state) = signal(CalculatorState::default());
    let dispatch = move |action: Action| {
        set_state.update(|s| *s = std::mem::take(s).apply(action));
    };

    view! {
        <section id="roi" class="roi">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"ROI Calculator"</p>
                    <h2 class="section-title">"What would Healthdex save you?"</h2>
                    <p class="section-description">
                        "Start from a preset, adjust the numbers to match your network, and calculate."
                    </p>
                </div>

                <div class="roi-scenarios">
                    {Scenario::PRESETS
                        .into_iter()
                        .map(|scenario| {
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|s| s.scenario == scenario) {
                                            "scenario-btn active"
                                        } else {
                                            "scenario-btn"
                                        }
                                    }
                                    on:click=move |_| dispatch(Action::SelectScenario(scenario))
                                >
                                    {scenario.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <Show when=move || state.with(|s| s.scenario == Scenario::Custom)>
                        <span class="scenario-custom">"Custom"</span>
                    </Show>
                </div>

                <div class="roi-form">
                    {Field::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <label class="roi-field">
                                    <span class="roi-field-label">{field.label()}</span>
                                    <input
                                        type="number"
                                        name=field.camel_key()
                                        step=field.step()
                                        prop:value=move || state.with(|s| s.params.get(field).to_string())
                                        on:input=move |ev| {
                                            dispatch(Action::EditField {
                                                field,
                                                raw: event_target_value(&ev),
                                            })
                                        }
                                    />
                                    <span class="roi-field-unit">{field.unit()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="roi-actions">
                    <button class="btn btn-primary" on:click=move |_| dispatch(Action::Calculate)>
                        "Calculate ROI"
                    </button>
                </div>

                // Results only show for a positive total benefit
                <Show when=move || state.with(CalculatorState::show_results)>
                    <div class="roi-results">
                        {MetricKey::ALL
                            .into_iter()
                            .map(|key| {
                                view! {
                                    <button
                                        class=move || {
                                            if state.with(|s| s.selected_metric == Some(key)) {
                                                "roi-metric selected"
                                            } else {
                                                "roi-metric"
                                            }
                                        }
                                        on:click=move |_| dispatch(Action::ToggleMetricDetail(key))
                                    >
                                        <span class="roi-metric-title">{key.title()}</span>
                                        <span class="roi-metric-value">
                                            {move || state.with(|s| format_currency(s.results.get(key)))}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        state
                            .with(CalculatorState::selected_explanation)
                            .map(|explanation| view! { <MetricDetail explanation /> })
                    }}
                </Show>
            </div>
        </section>
    }
}

#[component]
fn MetricDetail(explanation: MetricExplanation) -> impl IntoView {
    let MetricExplanation {
        title,
        summary,
        formula,
        lines,
        amount,
        ..
    } = explanation;

    view! {
        <div class="roi-detail">
            <h3 class="roi-detail-title">{title}" · "{format_currency(amount)}</h3>
            <p class="roi-detail-summary">{summary}</p>
            <code class="roi-detail-formula">{formula}</code>
            <ul class="roi-detail-lines">
                {lines
                    .into_iter()
                    .map(|line| {
                        view! {
                            <li class="roi-detail-line">
                                <span class="roi-detail-label">{line.label}</span>
                                <span class="roi-detail-value">{line.value}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
