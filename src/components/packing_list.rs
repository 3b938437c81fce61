//! Packing list renderer and its dialog

use crate::components::LoadingDots;
use crate::types::PackingListResult;
use leptos::prelude::*;

/// Categorized checklist with an optional leading weather block.
///
/// Categories render in the order the backend emitted them.
#[component]
pub fn PackingListView(result: PackingListResult) -> impl IntoView {
    let Some(categories) = result.packing_list else {
        return view! {
            <p class="text-[var(--text-muted)]">"Could not load packing list."</p>
        }
        .into_any();
    };

    view! {
        <div class="space-y-4 max-h-[70vh] overflow-y-auto p-1">
            {result
                .weather_summary
                .map(|summary| {
                    view! {
                        <div class="card p-4 border-[var(--accent-primary)]/50 bg-[var(--accent-primary)]/10">
                            <h3 class="text-base font-semibold mb-1">"Weather Summary"</h3>
                            <p class="text-sm text-[var(--text-muted)]">{summary}</p>
                        </div>
                    }
                })}

            {categories
                .into_iter()
                .map(|(category, items)| {
                    view! {
                        <div>
                            <h3 class="text-lg font-semibold mb-2">{category}</h3>
                            <ul class="space-y-2">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <li class="flex items-center gap-3">
                                                <span class="text-[var(--accent-primary)] shrink-0">"☑"</span>
                                                <span class="text-sm">{item}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Modal dialog wrapping the packing list.
#[component]
pub fn PackingListDialog(
    /// Whether the dialog is visible
    #[prop(into)]
    open: Signal<bool>,
    /// The fetched list; `None` shows a loading line
    #[prop(into)]
    result: Signal<Option<PackingListResult>>,
    /// Called when the user dismisses the dialog
    on_close: impl Fn() + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let close_overlay = on_close.clone();
    let close_button = on_close.clone();

    view! {
        <Show when=move || open.get()>
            // Overlay
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-40 animate-fade-in"
                on:click={
                    let on_close = close_overlay.clone();
                    move |_| on_close()
                }
            ></div>

            // Dialog panel
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 pointer-events-none">
                <div class="card w-full max-w-md p-6 pointer-events-auto animate-fade-in-up">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">"Your Packing List"</h2>
                        <button
                            class="btn btn-ghost p-2"
                            on:click={
                                let on_close = close_button.clone();
                                move |_| on_close()
                            }
                        >
                            "✕"
                        </button>
                    </div>

                    {move || match result.get() {
                        Some(data) => view! { <PackingListView result=data /> }.into_any(),
                        None => {
                            view! {
                                <div class="flex items-center gap-3 text-[var(--text-muted)]">
                                    <span>"Loading packing list..."</span>
                                    <LoadingDots />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
