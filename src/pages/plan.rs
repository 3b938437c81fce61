//! Trip planner page - form and results swap

use crate::api;
use crate::components::{Header, LoadingSpinner};
use crate::pages::results::ResultsView;
use crate::state::AppState;
use crate::types::{BudgetMode, Itinerary, TripForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

/// Planner page. Shows the trip form until an itinerary arrives, then the
/// results view; reset returns to the form with default field values.
#[component]
pub fn PlanPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Field signals live here so reset can restore them while the results
    // view is showing. Seeded from the shared draft, which the landing
    // hero form may have filled.
    let draft = state.trip_draft.get_untracked();
    let destination = RwSignal::new(draft.destination);
    let travel_dates = RwSignal::new(draft.travel_dates);
    let budget_mode = RwSignal::new(draft.budget_mode);
    let preferences = RwSignal::new(draft.preferences);

    let is_generating = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let itinerary = RwSignal::new(Option::<Itinerary>::None);

    let state_for_reset = state.clone();
    let on_reset = Callback::new(move |_: ()| {
        itinerary.set(None);
        destination.set(String::new());
        travel_dates.set(String::new());
        budget_mode.set(BudgetMode::default());
        preferences.set(String::new());
        error.set(None);
        state_for_reset.trip_draft.set(TripForm::default());
    });

    view! {
        <Title text="Plan Your Trip — BackpackBuddy" />
        <div class="min-h-screen flex flex-col">
            <Header />

            {move || match itinerary.get() {
                Some(it) => view! { <ResultsView itinerary=it on_reset=on_reset /> }.into_any(),
                None => {
                    view! {
                        <PlannerForm
                            destination=destination
                            travel_dates=travel_dates
                            budget_mode=budget_mode
                            preferences=preferences
                            is_generating=is_generating
                            error=error
                            itinerary=itinerary
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// The trip input form. Owns submission; an incomplete form never sends a
/// request.
#[component]
fn PlannerForm(
    destination: RwSignal<String>,
    travel_dates: RwSignal<String>,
    budget_mode: RwSignal<BudgetMode>,
    preferences: RwSignal<String>,
    is_generating: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    itinerary: RwSignal<Option<Itinerary>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = TripForm {
            destination: destination.get().trim().to_string(),
            travel_dates: travel_dates.get().trim().to_string(),
            budget_mode: budget_mode.get(),
            preferences: preferences.get().trim().to_string(),
        };
        if !form.is_complete() || is_generating.get() {
            return;
        }

        is_generating.set(true);
        error.set(None);

        let base_url = state.api_base.get_untracked();
        spawn_local(async move {
            match api::generate_itinerary(&base_url, &form).await {
                Ok(payload) => {
                    let result = payload
                        .with_trip(&form.destination, &form.travel_dates)
                        .normalize();
                    let _ = itinerary.try_set(Some(result));
                }
                Err(e) => {
                    tracing::error!("Failed to generate itinerary: {}", e);
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = is_generating.try_set(false);
        });
    };

    view! {
        <main class="flex-1 flex justify-center items-center px-4 py-12">
            <div class="card w-full max-w-2xl p-8 animate-fade-in">
                <div class="text-center mb-6">
                    <h1 class="text-3xl font-bold">"BackpackBuddy 🎒"</h1>
                    <p class="text-[var(--text-muted)] mt-1">
                        "Your AI companion for epic, budget-friendly adventures."
                    </p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label for="destination" class="block text-sm font-medium mb-1">
                            "Where are you going?"
                        </label>
                        <input
                            id="destination"
                            type="text"
                            class="input"
                            placeholder="e.g., Bangkok, Thailand"
                            prop:value=move || destination.get()
                            on:input=move |ev| destination.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <div>
                        <label for="travel_dates" class="block text-sm font-medium mb-1">
                            "When are you traveling?"
                        </label>
                        <input
                            id="travel_dates"
                            type="text"
                            class="input"
                            placeholder="e.g., November 10-15, 2024"
                            prop:value=move || travel_dates.get()
                            on:input=move |ev| travel_dates.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <div>
                        <label for="budget_mode" class="block text-sm font-medium mb-1">
                            "What's your budget style?"
                        </label>
                        <select
                            id="budget_mode"
                            class="input"
                            on:change=move |ev| budget_mode.set(BudgetMode::from_value(&event_target_value(&ev)))
                        >
                            {BudgetMode::ALL
                                .into_iter()
                                .map(|mode| {
                                    view! {
                                        <option
                                            value=mode.as_str()
                                            selected=move || budget_mode.get() == mode
                                        >
                                            {mode.as_str()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <div>
                        <label for="preferences" class="block text-sm font-medium mb-1">
                            "What are your interests?"
                        </label>
                        <textarea
                            id="preferences"
                            class="input"
                            rows="3"
                            placeholder="e.g., Street food, temples, hiking, local markets..."
                            prop:value=move || preferences.get()
                            on:input=move |ev| preferences.set(event_target_value(&ev))
                            required=true
                        ></textarea>
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="submit"
                            disabled=move || is_generating.get()
                            class="btn btn-primary py-3 px-6"
                        >
                            <Show when=move || is_generating.get()>
                                <LoadingSpinner size="w-4 h-4" />
                            </Show>
                            {move || if is_generating.get() { "Generating..." } else { "Generate Itinerary" }}
                        </button>
                    </div>
                </form>

                // Inline error from the backend, verbatim detail text.
                <Show when=move || error.get().is_some()>
                    <div class="mt-4 p-4 bg-[var(--accent-error)]/10 border border-[var(--accent-error)]/50
                                rounded-lg text-[var(--accent-error)] text-sm text-center animate-fade-in">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
            </div>
        </main>
    }
}
