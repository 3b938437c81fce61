//! Header component

use leptos::prelude::*;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href="/" class="logo flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <span class="text-3xl">"🎒"</span>
                    <div>
                        <h1 class="text-xl font-bold text-gradient">"BackpackBuddy"</h1>
                        <p class="text-xs text-[var(--text-muted)] -mt-0.5">"Smarter travel, planned by AI"</p>
                    </div>
                </a>

                // Navigation
                <nav class="flex items-center gap-2">
                    <a href="/#features" class="btn btn-ghost hidden md:inline-flex">
                        "Features"
                    </a>
                    <a href="/#testimonials" class="btn btn-ghost hidden md:inline-flex">
                        "Reviews"
                    </a>
                    <a href="/plan" class="btn btn-primary">
                        "Plan a Trip"
                    </a>
                </nav>
            </div>
        </header>
    }
}
