//! Trip header banner

use leptos::prelude::*;

/// Destination and travel dates shown above the day cards.
#[component]
pub fn TripHeader(destination: String, dates: String) -> impl IntoView {
    view! {
        <div class="p-6 bg-[var(--bg-secondary)] rounded-lg mb-8 animate-fade-in">
            <h1 class="text-3xl font-bold">{destination}</h1>
            <div class="flex items-center gap-2 text-[var(--text-muted)] mt-2">
                <span>"📅"</span>
                <span>{dates}</span>
            </div>
        </div>
    }
}
