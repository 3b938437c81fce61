//! Global application state and the results view-model.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::types::{Itinerary, PackingListResult, TripForm};

const STORAGE_KEY_API_BASE: &str = "backpackbuddy_api_base";
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Global application state, provided as context at the app root.
#[derive(Clone)]
pub struct AppState {
    /// Backend base URL
    pub api_base: RwSignal<String>,
    /// Trip draft shared between the landing hero form and the planner
    pub trip_draft: RwSignal<TripForm>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_base: RwSignal::new(Self::resolve_api_base()),
            trip_draft: RwSignal::new(TripForm::default()),
        }
    }

    /// Compile-time override, then a persisted local override, then the
    /// default development backend.
    fn resolve_api_base() -> String {
        if let Some(url) = option_env!("BACKPACKBUDDY_API_URL") {
            return url.to_string();
        }
        LocalStorage::get(STORAGE_KEY_API_BASE)
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
    }

    pub fn set_api_base(&self, url: &str) {
        let _ = LocalStorage::set(STORAGE_KEY_API_BASE, url);
        self.api_base.set(url.to_string());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient state for one results view.
///
/// Owned for the lifetime of the view; discarded wholesale on reset or when
/// a new itinerary arrives. Every event is an immutable transition so the
/// orchestration can be tested without any rendering framework.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsState {
    pub itinerary: Itinerary,
    pub downloading_pdf: bool,
    pub generating_packing_list: bool,
    pub packing_modal_open: bool,
    pub packing_list: Option<PackingListResult>,
}

impl ResultsState {
    pub fn new(itinerary: Itinerary) -> Self {
        Self {
            itinerary,
            downloading_pdf: false,
            generating_packing_list: false,
            packing_modal_open: false,
            packing_list: None,
        }
    }

    /// Mark the PDF request in flight.
    pub fn begin_pdf_download(self) -> Self {
        Self {
            downloading_pdf: true,
            ..self
        }
    }

    /// Clear the PDF flag. Called on every outcome, so the download button
    /// can never stay stuck in its busy state.
    pub fn pdf_download_finished(self) -> Self {
        Self {
            downloading_pdf: false,
            ..self
        }
    }

    /// Start a packing-list request, or `None` while one is already in
    /// flight. Callers that get `None` must not send a request.
    pub fn begin_packing_list(self) -> Option<Self> {
        if self.generating_packing_list {
            return None;
        }
        Some(Self {
            generating_packing_list: true,
            ..self
        })
    }

    /// Store the fetched list and open the dialog.
    pub fn packing_list_ready(self, result: PackingListResult) -> Self {
        Self {
            generating_packing_list: false,
            packing_modal_open: true,
            packing_list: Some(result),
            ..self
        }
    }

    /// Failure path: back to idle, dialog stays closed.
    pub fn packing_list_failed(self) -> Self {
        Self {
            generating_packing_list: false,
            ..self
        }
    }

    pub fn set_packing_modal(self, open: bool) -> Self {
        Self {
            packing_modal_open: open,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Activity, DayPlan};

    fn two_day_itinerary() -> Itinerary {
        Itinerary {
            destination: "Bangkok, Thailand".to_string(),
            dates: "Nov 10-15, 2024".to_string(),
            days: vec![
                DayPlan {
                    day: 1,
                    date: "Nov 10".to_string(),
                    theme: "Temples".to_string(),
                    activities: vec![Activity {
                        time: "09:00".to_string(),
                        description: "Visit Wat Pho".to_string(),
                        location: None,
                        budget_notes: None,
                    }],
                },
                DayPlan {
                    day: 2,
                    date: "Nov 11".to_string(),
                    theme: "Markets".to_string(),
                    activities: vec![],
                },
            ],
        }
    }

    fn sample_packing_list() -> PackingListResult {
        serde_json::from_str(
            r#"{
                "weather_summary": "Warm",
                "packing_list": {
                    "Clothing": ["3x T-shirts"],
                    "Documents": ["Passport"]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn pdf_flag_spans_the_request_in_every_outcome() {
        let state = ResultsState::new(two_day_itinerary());
        assert!(!state.downloading_pdf);

        // Success path.
        let pending = state.clone().begin_pdf_download();
        assert!(pending.downloading_pdf);
        let done = pending.pdf_download_finished();
        assert!(!done.downloading_pdf);

        // Failure path uses the same transition, so the flag cannot stick.
        let failed = state.begin_pdf_download().pdf_download_finished();
        assert!(!failed.downloading_pdf);
    }

    #[test]
    fn packing_list_allows_a_single_in_flight_request() {
        let state = ResultsState::new(two_day_itinerary());

        let pending = state.begin_packing_list().expect("first trigger starts");
        assert!(pending.generating_packing_list);

        // A second trigger while pending is a no-op: no new state, and the
        // caller contract means no second request goes out.
        assert!(pending.clone().begin_packing_list().is_none());

        let reopened = pending
            .packing_list_ready(sample_packing_list())
            .set_packing_modal(false)
            .begin_packing_list();
        assert!(reopened.is_some(), "idle again after completion");
    }

    #[test]
    fn packing_list_success_opens_modal_with_categories_in_order() {
        let state = ResultsState::new(two_day_itinerary())
            .begin_packing_list()
            .unwrap()
            .packing_list_ready(sample_packing_list());

        assert!(!state.generating_packing_list);
        assert!(state.packing_modal_open);
        let categories: Vec<&str> = state
            .packing_list
            .as_ref()
            .unwrap()
            .packing_list
            .as_ref()
            .unwrap()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(categories, vec!["Clothing", "Documents"]);
    }

    #[test]
    fn packing_list_failure_stays_closed_and_returns_to_idle() {
        let state = ResultsState::new(two_day_itinerary())
            .begin_packing_list()
            .unwrap()
            .packing_list_failed();

        assert!(!state.generating_packing_list);
        assert!(!state.packing_modal_open);
        assert!(state.packing_list.is_none());
    }

    #[test]
    fn pdf_and_packing_list_flags_are_independent() {
        let state = ResultsState::new(two_day_itinerary())
            .begin_pdf_download()
            .begin_packing_list()
            .unwrap();
        assert!(state.downloading_pdf);
        assert!(state.generating_packing_list);

        let state = state.pdf_download_finished();
        assert!(!state.downloading_pdf);
        assert!(state.generating_packing_list, "unaffected by the PDF path");
    }
}
