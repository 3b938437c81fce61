//! Results view - itinerary orchestration

use crate::api;
use crate::components::{ItineraryCard, LoadingSpinner, MapView, PackingListDialog, TripHeader};
use crate::files;
use crate::state::{AppState, ResultsState};
use crate::types::Itinerary;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Itinerary results: map, day cards, packing-list dialog, PDF download,
/// reset. Owns the transient view state for one itinerary.
#[component]
pub fn ResultsView(itinerary: Itinerary, on_reset: Callback<()>) -> impl IntoView {
    let app = expect_context::<AppState>();
    let api_base = app.api_base;

    // The itinerary is fixed for the lifetime of this view; snapshot the
    // render inputs before it moves into the state signal.
    let map_points = itinerary.map_points();
    let destination = itinerary.destination.clone();
    let dates = itinerary.dates.clone();
    let days = itinerary.days.clone();
    let state = RwSignal::new(ResultsState::new(itinerary));

    let downloading = Signal::derive(move || state.get().downloading_pdf);
    let generating = Signal::derive(move || state.get().generating_packing_list);
    let modal_open = Signal::derive(move || state.get().packing_modal_open);
    let packing_list = Signal::derive(move || state.get().packing_list.clone());

    let on_download_pdf = move |_| {
        if state.get_untracked().downloading_pdf {
            return;
        }
        state.update(|s| *s = s.clone().begin_pdf_download());

        let base_url = api_base.get_untracked();
        let itinerary = state.get_untracked().itinerary;
        spawn_local(async move {
            match api::download_itinerary_pdf(&base_url, &itinerary).await {
                Ok(bytes) => {
                    if let Err(e) = files::save_binary_as_file(&bytes, api::PDF_FILE_NAME) {
                        tracing::error!("Failed to save itinerary PDF: {}", e);
                    }
                }
                Err(e) => tracing::error!("Failed to download PDF: {}", e),
            }
            // Cleared on every outcome; dropped silently if the view was
            // reset while the request was in flight.
            let _ = state.try_update(|s| *s = s.clone().pdf_download_finished());
        });
    };

    let on_packing_list = move |_| {
        // A second trigger while one request is pending is a no-op.
        let Some(next) = state.get_untracked().begin_packing_list() else {
            return;
        };
        state.set(next);

        let base_url = api_base.get_untracked();
        let itinerary = state.get_untracked().itinerary;
        spawn_local(async move {
            match api::generate_packing_list(&base_url, &itinerary).await {
                Ok(result) => {
                    let _ = state.try_update(|s| *s = s.clone().packing_list_ready(result));
                }
                Err(e) => {
                    tracing::error!("Failed to generate packing list: {}", e);
                    let _ = state.try_update(|s| *s = s.clone().packing_list_failed());
                }
            }
        });
    };

    let close_modal = move || {
        state.update(|s| *s = s.clone().set_packing_modal(false));
    };

    view! {
        <div class="w-full max-w-4xl mx-auto p-4">
            // Action bar
            <div class="flex justify-between items-center mb-6 gap-4 flex-wrap">
                <h1 class="text-3xl md:text-4xl font-bold">"Your Trip Itinerary"</h1>
                <div class="flex gap-2">
                    <button
                        class="btn btn-secondary"
                        on:click=on_packing_list
                        disabled=move || generating.get()
                    >
                        <Show when=move || generating.get()>
                            <LoadingSpinner size="w-4 h-4" />
                        </Show>
                        {move || if generating.get() { "Generating..." } else { "🧳 Packing List" }}
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click=on_download_pdf
                        disabled=move || downloading.get()
                    >
                        <Show when=move || downloading.get()>
                            <LoadingSpinner size="w-4 h-4" />
                        </Show>
                        {move || if downloading.get() { "Downloading..." } else { "⬇ Download PDF" }}
                    </button>
                    <button class="btn btn-ghost" on:click=move |_| on_reset.run(())>
                        "Reset"
                    </button>
                </div>
            </div>

            {(!destination.is_empty())
                .then(|| view! { <TripHeader destination=destination.clone() dates=dates.clone() /> })}

            <div class="mb-8">
                <MapView points=map_points />
            </div>

            {if days.is_empty() {
                view! {
                    <div class="text-center py-10">
                        <p class="text-[var(--text-muted)]">
                            "The generated itinerary seems to be empty or in an incorrect format."
                        </p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="space-y-6">
                        {days
                            .into_iter()
                            .map(|day_plan| view! { <ItineraryCard day_plan=day_plan /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>

        <PackingListDialog open=modal_open result=packing_list on_close=close_modal />
    }
}
