//! Day plan card

use crate::types::{Activity, DayPlan};
use leptos::prelude::*;

/// Render one day of the itinerary with its activities in original order.
#[component]
pub fn ItineraryCard(day_plan: DayPlan) -> impl IntoView {
    view! {
        <div class="card overflow-hidden animate-fade-in-up">
            // Day header
            <div class="px-6 py-4 bg-[var(--bg-secondary)] border-b border-[var(--border-default)]">
                <h3 class="text-2xl font-semibold">{format!("Day {}", day_plan.day)}</h3>
                <p class="text-sm text-[var(--text-muted)]">
                    {format!("{} - {}", day_plan.date, day_plan.theme)}
                </p>
            </div>

            // Activities
            <div class="p-6 space-y-4">
                {day_plan
                    .activities
                    .into_iter()
                    .map(|activity| view! { <ActivityRow activity=activity /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One activity line: category icon, description, time, place, budget note.
#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    let category = activity.category();
    let location_name = activity.location.as_ref().and_then(|l| l.name.clone());

    view! {
        <div class="flex items-start gap-4">
            <span class="text-xl shrink-0 pt-0.5" title=category.label()>
                {category.icon()}
            </span>
            <div class="flex-1 min-w-0">
                <p class="font-semibold">{activity.description.clone()}</p>
                <div class="flex flex-wrap items-center gap-x-4 text-sm text-[var(--text-muted)] mt-1">
                    <span>{format!("🕒 {}", activity.time)}</span>
                    {location_name.map(|name| view! { <span>{format!("📍 {}", name)}</span> })}
                </div>
                {activity.budget_notes.clone().map(|notes| {
                    view! {
                        <div class="text-sm text-[var(--accent-success)] mt-1">
                            {format!("💲 {}", notes)}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
