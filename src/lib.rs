//! BackpackBuddy Web UI - Leptos frontend
//!
//! Browser client for the BackpackBuddy travel itinerary planner.

pub mod api;
pub mod components;
pub mod files;
pub mod pages;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{home::HomePage, plan::PlanPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-[var(--bg-primary)] text-[var(--text-primary)]">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/plan") view=PlanPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[var(--text-muted)] mb-4">"404"</h1>
                <p class="text-xl text-[var(--text-muted)] mb-8">"Page not found"</p>
                <a href="/" class="btn btn-primary px-6 py-3">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
