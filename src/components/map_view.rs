//! Itinerary map

use crate::types::{centroid, MapPoint};
use leptos::prelude::*;

/// Map viewport centered on the aggregated activity locations, with an
/// explicit placeholder when the itinerary carries no usable coordinates.
#[component]
pub fn MapView(points: Vec<MapPoint>) -> impl IntoView {
    // Empty input short-circuits before any centroid math happens.
    let Some((lat, lon)) = centroid(&points) else {
        return view! {
            <div class="h-96 bg-[var(--bg-secondary)] flex items-center justify-center rounded-lg">
                <p class="text-[var(--text-muted)]">"No map data available for this itinerary."</p>
            </div>
        }
        .into_any();
    };

    let bbox = format!(
        "{:.6},{:.6},{:.6},{:.6}",
        lon - 0.05,
        lat - 0.04,
        lon + 0.05,
        lat + 0.04
    );
    let src = format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}&layer=mapnik&marker={:.6},{:.6}",
        bbox, lat, lon
    );

    view! {
        <div class="animate-fade-in">
            <iframe src=src class="w-full h-96 border-0 rounded-lg" title="Itinerary map"></iframe>

            // Every aggregated stop, in day-then-activity order.
            <div class="flex flex-wrap gap-2 mt-3">
                {points
                    .into_iter()
                    .map(|point| {
                        let name = point
                            .name
                            .unwrap_or_else(|| "A location in your itinerary".to_string());
                        view! {
                            <span
                                class="px-3 py-1 rounded-full bg-[var(--bg-secondary)] text-sm"
                                title=format!("{:.4}, {:.4}", point.lat, point.lon)
                            >
                                {format!("📍 {}", name)}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}
