//! Home/landing page

use crate::components::Header;
use crate::state::AppState;
use crate::types::BudgetMode;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

/// Landing page: hero with a quick trip form, features, testimonials.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="BackpackBuddy — Smarter Travel, Planned by AI" />
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1">
                <HeroSection />
                <FeaturesSection />
                <TestimonialsSection />
            </main>

            <SiteFooter />
        </div>
    }
}

/// Hero with the quick planner form. Submitting seeds the shared trip
/// draft and jumps into the planner; no request is sent from here.
#[component]
fn HeroSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let destination = RwSignal::new(String::new());
    let dates = RwSignal::new(String::new());
    let budget = RwSignal::new(BudgetMode::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let destination_val = destination.get().trim().to_string();
        let dates_val = dates.get().trim().to_string();
        if destination_val.is_empty() || dates_val.is_empty() {
            return;
        }

        state.trip_draft.update(|draft| {
            draft.destination = destination_val;
            draft.travel_dates = dates_val;
            draft.budget_mode = budget.get_untracked();
        });
        navigate("/plan", Default::default());
    };

    view! {
        <section class="relative pt-20 pb-16 lg:pt-32 lg:pb-24 px-4">
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="text-4xl md:text-6xl font-extrabold tracking-tight animate-slide-up">
                    "Smarter Travel, Planned by AI."
                </h1>
                <p
                    class="mt-4 max-w-2xl mx-auto text-lg text-[var(--text-muted)] animate-slide-up"
                    style="animation-delay: 0.1s"
                >
                    "Stop planning, start exploring. Get a personalized, budget-aware itinerary in seconds."
                </p>

                <div class="mt-10 max-w-3xl mx-auto animate-slide-up" style="animation-delay: 0.2s">
                    <form
                        on:submit=on_submit
                        class="card p-6 shadow-xl grid grid-cols-1 md:grid-cols-3 gap-4 items-end"
                    >
                        <div class="text-left">
                            <label for="hero-destination" class="block text-sm font-medium mb-1">
                                "Destination"
                            </label>
                            <input
                                id="hero-destination"
                                type="text"
                                class="input"
                                placeholder="e.g., Vietnam"
                                prop:value=move || destination.get()
                                on:input=move |ev| destination.set(event_target_value(&ev))
                                required=true
                            />
                        </div>
                        <div class="text-left">
                            <label for="hero-dates" class="block text-sm font-medium mb-1">
                                "Dates"
                            </label>
                            <input
                                id="hero-dates"
                                type="text"
                                class="input"
                                placeholder="e.g., July 15 - July 30"
                                prop:value=move || dates.get()
                                on:input=move |ev| dates.set(event_target_value(&ev))
                                required=true
                            />
                        </div>
                        <div class="text-left">
                            <label for="hero-budget" class="block text-sm font-medium mb-1">
                                "Budget style"
                            </label>
                            <select
                                id="hero-budget"
                                class="input"
                                on:change=move |ev| budget.set(BudgetMode::from_value(&event_target_value(&ev)))
                            >
                                {BudgetMode::ALL
                                    .into_iter()
                                    .map(|mode| {
                                        view! {
                                            <option
                                                value=mode.as_str()
                                                selected=move || budget.get() == mode
                                            >
                                                {mode.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                        <button type="submit" class="btn btn-primary w-full py-3 md:col-span-3">
                            "Plan My Trip"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 bg-[var(--bg-secondary)]/50">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold">"Everything a Backpacker Needs"</h2>
                    <p class="mt-2 text-lg text-[var(--text-muted)]">
                        "All powered by autonomous AI agents."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon="🗺️"
                        title="Dynamic Itinerary"
                        description="Day-by-day plans that adapt to your style, from hidden gems to popular sights."
                    />
                    <FeatureCard
                        icon="🛡️"
                        title="Offline Survival Pack"
                        description="Download your full itinerary, maps, and safety info as a single PDF."
                    />
                    <FeatureCard
                        icon="👥"
                        title="Backpacker Focused"
                        description="We prioritize hostels, social spots, and authentic, budget-friendly experiences."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let testimonials = [
        (
            "Alex R.",
            "BackpackBuddy planned my 3-week trip through Southeast Asia flawlessly. It felt like having a personal travel agent who actually gets the backpacker vibe.",
            5u8,
        ),
        (
            "Maria S.",
            "The 'Hidden Gems' feature is a game-changer. I discovered so many places I would have never found on my own. The offline PDF was a lifesaver!",
            5u8,
        ),
        (
            "Ben K.",
            "As someone with a full-time job, I need my short trips to be efficient. This tool saved me hours of planning and the itinerary was spot on.",
            4u8,
        ),
    ];

    view! {
        <section id="testimonials" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold">"Trusted by Explorers Worldwide"</h2>
                    <p class="mt-2 text-lg text-[var(--text-muted)]">
                        "Don't just take our word for it."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {testimonials
                        .into_iter()
                        .enumerate()
                        .map(|(i, (name, quote, rating))| {
                            view! {
                                <div class=format!("animate-fade-in-up stagger-{}", (i % 5) + 1)>
                                    <TestimonialCard name=name quote=quote rating=rating />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="card p-6 text-center h-full hover:border-[var(--accent-primary)]/50 transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-[var(--text-muted)]">{description}</p>
        </div>
    }
}

/// Testimonial card with a five-star rating row
#[component]
fn TestimonialCard(name: &'static str, quote: &'static str, rating: u8) -> impl IntoView {
    view! {
        <div class="card p-6 h-full flex flex-col">
            <div class="flex mb-2">
                {(0..5u8)
                    .map(|i| {
                        let class = if i < rating {
                            "text-yellow-400"
                        } else {
                            "text-[var(--text-muted)]/40"
                        };
                        view! { <span class=class>"★"</span> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="text-[var(--text-muted)] flex-grow">{format!("\u{201c}{}\u{201d}", quote)}</p>
            <p class="mt-4 font-semibold">{format!("- {}", name)}</p>
        </div>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-[var(--border-default)] text-center text-[var(--text-muted)]">
            <div class="flex justify-center items-center gap-2 mb-2">
                <span class="text-xl">"🎒"</span>
                <span class="text-lg font-bold">"BackpackBuddy"</span>
            </div>
            <p class="text-sm">"Your AI companion for smarter adventures."</p>
        </footer>
    }
}
