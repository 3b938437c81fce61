//! Itinerary payload model and the rendering pipeline built on it.
//!
//! Everything in this module is plain data plus pure functions, so the
//! map aggregation, activity classification, and packing-list decoding
//! can be tested without a browser.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A full trip itinerary as returned by `POST /generate-itinerary`.
///
/// The backend emits the day list under the `"itinerary"` key and may omit
/// the trip header fields, so those default to empty and are backfilled
/// from the submitted form via [`Itinerary::with_trip`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub dates: String,
    #[serde(rename = "itinerary", default)]
    pub days: Vec<DayPlan>,
}

/// One day of the itinerary. `day` is the render key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single scheduled activity. `time` is display-only and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_notes: Option<String>,
}

/// A geocoded place attached to an activity.
///
/// Coordinates are decoded leniently: a missing or non-numeric `lat`/`lon`
/// becomes `None` instead of rejecting the whole payload. Such locations
/// are simply left off the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lon: Option<f64>,
}

impl Location {
    /// Both coordinates, iff the location is usable on a map.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// A map-ready point produced by [`Itinerary::map_points`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl Itinerary {
    /// Attach the trip header the backend left out of the payload.
    pub fn with_trip(mut self, destination: &str, dates: &str) -> Self {
        if self.destination.is_empty() {
            self.destination = destination.to_string();
        }
        if self.dates.is_empty() {
            self.dates = dates.to_string();
        }
        self
    }

    /// Sort days by ascending day number. The backend is prompted to emit
    /// them in order but nothing enforces it on the wire.
    pub fn normalize(mut self) -> Self {
        self.days.sort_by_key(|d| d.day);
        self
    }

    /// Collect every activity location with valid coordinates, in day
    /// ascending then activity order. Locations without both coordinates
    /// are filtered out, not errors. No deduplication of coincident points.
    pub fn map_points(&self) -> Vec<MapPoint> {
        let mut days: Vec<&DayPlan> = self.days.iter().collect();
        days.sort_by_key(|d| d.day);

        days.iter()
            .flat_map(|day| day.activities.iter())
            .filter_map(|activity| {
                let location = activity.location.as_ref()?;
                let (lat, lon) = location.coords()?;
                Some(MapPoint {
                    name: location.name.clone(),
                    lat,
                    lon,
                })
            })
            .collect()
    }
}

/// Arithmetic mean of the points' coordinates, used as the initial map
/// viewport center. `None` for an empty slice so callers short-circuit to
/// the no-data placeholder instead of dividing by zero.
pub fn centroid(points: &[MapPoint]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
    let lon = points.iter().map(|p| p.lon).sum::<f64>() / n;
    Some((lat, lon))
}

/// Display category for an activity, derived from its description.
///
/// Purely cosmetic (icon selection); every activity gets exactly one
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Food,
    Landmark,
    Market,
    PointOfInterest,
}

impl ActivityCategory {
    /// Case-insensitive substring match against the description, first
    /// match wins: food, then landmarks, then markets, then the fallback.
    pub fn classify(description: &str) -> Self {
        let desc = description.to_lowercase();
        let contains_any = |hints: &[&str]| hints.iter().any(|h| desc.contains(h));

        if contains_any(&["eat", "food", "lunch", "dinner", "breakfast"]) {
            Self::Food
        } else if contains_any(&["temple", "palace", "museum", "landmark"]) {
            Self::Landmark
        } else if contains_any(&["market", "shop"]) {
            Self::Market
        } else {
            Self::PointOfInterest
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍜",
            Self::Landmark => "🏛️",
            Self::Market => "🛍️",
            Self::PointOfInterest => "📍",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Landmark => "Landmark",
            Self::Market => "Market",
            Self::PointOfInterest => "Point of interest",
        }
    }
}

impl Activity {
    pub fn category(&self) -> ActivityCategory {
        ActivityCategory::classify(&self.description)
    }
}

/// Budget style offered by the planner form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BudgetMode {
    Strict,
    #[default]
    Chill,
    #[serde(rename = "YOLO")]
    Yolo,
}

impl BudgetMode {
    pub const ALL: [BudgetMode; 3] = [Self::Strict, Self::Chill, Self::Yolo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Chill => "Chill",
            Self::Yolo => "YOLO",
        }
    }

    /// Value coming back from the `<select>`; unknown values fall back to
    /// the default.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .unwrap_or_default()
    }
}

/// The planner form, which is also the canonical request body for
/// `POST /generate-itinerary`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TripForm {
    pub destination: String,
    pub travel_dates: String,
    pub budget_mode: BudgetMode,
    pub preferences: String,
}

impl TripForm {
    /// All text fields filled in. Incomplete forms never reach the network.
    pub fn is_complete(&self) -> bool {
        !self.destination.trim().is_empty()
            && !self.travel_dates.trim().is_empty()
            && !self.preferences.trim().is_empty()
    }
}

/// Response of `POST /generate-packing-list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackingListResult {
    #[serde(default)]
    pub weather_summary: Option<String>,
    /// Category name to items, in the order the backend emitted the keys.
    /// `None` when the payload carries no usable list.
    #[serde(default, deserialize_with = "ordered_categories")]
    pub packing_list: Option<Vec<(String, Vec<String>)>>,
}

/// Error body from the backend (FastAPI-style `detail` field).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub detail: String,
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    // Accept only JSON numbers. Strings and nulls become None, and the
    // location stays off the map.
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_f64))
}

fn ordered_categories<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<(String, Vec<String>)>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoriesVisitor;

    impl<'de> Visitor<'de> for CategoriesVisitor {
        type Value = Option<Vec<(String, Vec<String>)>>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of category names to item lists")
        }

        // Visiting the map directly keeps the backend's key order, which a
        // collected map type would throw away.
        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, items)) = map.next_entry::<String, Vec<String>>()? {
                categories.push((name, items));
            }
            Ok(Some(categories))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(CategoriesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(description: &str, location: Option<Location>) -> Activity {
        Activity {
            time: "09:00 - 11:00".to_string(),
            description: description.to_string(),
            location,
            budget_notes: None,
        }
    }

    fn located(lat: f64, lon: f64) -> Option<Location> {
        Some(Location {
            name: None,
            lat: Some(lat),
            lon: Some(lon),
        })
    }

    fn day(number: u32, activities: Vec<Activity>) -> DayPlan {
        DayPlan {
            day: number,
            date: String::new(),
            theme: String::new(),
            activities,
        }
    }

    #[test]
    fn deserializes_backend_payload_shape() {
        let json = r#"{
            "itinerary": [
                {
                    "day": 1,
                    "date": "Nov 10",
                    "theme": "Old town",
                    "activities": [
                        {
                            "time": "09:00",
                            "description": "Visit the Grand Palace",
                            "location": {"name": "Grand Palace", "lat": 13.75, "lon": 100.49},
                            "budget_notes": "~$15 entry"
                        }
                    ]
                }
            ]
        }"#;

        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.destination, "");
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(
            itinerary.days[0].activities[0]
                .location
                .as_ref()
                .unwrap()
                .coords(),
            Some((13.75, 100.49))
        );

        let backfilled = itinerary.with_trip("Bangkok, Thailand", "Nov 10-15, 2024");
        assert_eq!(backfilled.destination, "Bangkok, Thailand");
        assert_eq!(backfilled.dates, "Nov 10-15, 2024");
    }

    #[test]
    fn non_numeric_coordinates_become_none() {
        let json = r#"{"name": "Somewhere", "lat": "13.75", "lon": 100.49}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.lat, None);
        assert_eq!(location.lon, Some(100.49));
        assert_eq!(location.coords(), None);
    }

    #[test]
    fn map_points_filters_and_preserves_day_then_activity_order() {
        // Days arrive out of order; points must still come out day-ascending.
        let itinerary = Itinerary {
            destination: String::new(),
            dates: String::new(),
            days: vec![
                day(
                    2,
                    vec![
                        activity("c", located(3.0, 30.0)),
                        activity("d", None),
                        activity("e", located(4.0, 40.0)),
                    ],
                ),
                day(
                    1,
                    vec![
                        activity("a", located(1.0, 10.0)),
                        activity(
                            "b",
                            Some(Location {
                                name: None,
                                lat: Some(2.0),
                                lon: None,
                            }),
                        ),
                    ],
                ),
            ],
        };

        let points = itinerary.map_points();
        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.lat, p.lon)).collect();
        assert_eq!(coords, vec![(1.0, 10.0), (3.0, 30.0), (4.0, 40.0)]);
    }

    #[test]
    fn normalize_sorts_days_ascending() {
        let itinerary = Itinerary {
            destination: String::new(),
            dates: String::new(),
            days: vec![day(3, vec![]), day(1, vec![]), day(2, vec![])],
        }
        .normalize();

        let order: Vec<u32> = itinerary.days.iter().map(|d| d.day).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn centroid_is_arithmetic_mean() {
        let points = vec![
            MapPoint {
                name: None,
                lat: 10.0,
                lon: 20.0,
            },
            MapPoint {
                name: None,
                lat: 20.0,
                lon: 40.0,
            },
        ];
        assert_eq!(centroid(&points), Some((15.0, 30.0)));
    }

    #[test]
    fn centroid_of_no_points_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn classification_precedence_food_before_market() {
        assert_eq!(
            ActivityCategory::classify("Lunch at the market"),
            ActivityCategory::Food
        );
    }

    #[test]
    fn classification_precedence_landmark_before_market() {
        assert_eq!(
            ActivityCategory::classify("Visit the temple market"),
            ActivityCategory::Landmark
        );
    }

    #[test]
    fn classification_is_case_insensitive_and_total() {
        assert_eq!(
            ActivityCategory::classify("BREAKFAST at the hostel"),
            ActivityCategory::Food
        );
        assert_eq!(
            ActivityCategory::classify("Souvenir shopping downtown"),
            ActivityCategory::Market
        );
        assert_eq!(
            ActivityCategory::classify("Sunrise hike up the ridge"),
            ActivityCategory::PointOfInterest
        );
    }

    #[test]
    fn packing_list_keeps_backend_key_order() {
        let json = r#"{
            "weather_summary": "Hot and humid, chance of rain.",
            "packing_list": {
                "Clothing": ["3x T-shirts", "1x Rain jacket"],
                "Documents": ["Passport"],
                "Electronics": ["Power bank"]
            }
        }"#;

        let result: PackingListResult = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = result
            .packing_list
            .as_ref()
            .unwrap()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(categories, vec!["Clothing", "Documents", "Electronics"]);
        assert_eq!(
            result.weather_summary.as_deref(),
            Some("Hot and humid, chance of rain.")
        );
    }

    #[test]
    fn packing_list_tolerates_missing_or_null_list() {
        let missing: PackingListResult = serde_json::from_str("{}").unwrap();
        assert!(missing.packing_list.is_none());

        let null: PackingListResult = serde_json::from_str(r#"{"packing_list": null}"#).unwrap();
        assert!(null.packing_list.is_none());
    }

    #[test]
    fn budget_mode_wire_format() {
        assert_eq!(
            serde_json::to_string(&BudgetMode::Yolo).unwrap(),
            "\"YOLO\""
        );
        assert_eq!(BudgetMode::from_value("Strict"), BudgetMode::Strict);
        assert_eq!(BudgetMode::from_value("anything else"), BudgetMode::Chill);
    }

    #[test]
    fn trip_form_default_and_validation() {
        let form = TripForm::default();
        assert_eq!(form.destination, "");
        assert_eq!(form.travel_dates, "");
        assert_eq!(form.budget_mode, BudgetMode::Chill);
        assert_eq!(form.preferences, "");
        assert!(!form.is_complete());

        let filled = TripForm {
            destination: "Bangkok, Thailand".to_string(),
            travel_dates: "Nov 10-15, 2024".to_string(),
            budget_mode: BudgetMode::Chill,
            preferences: "Street food, temples".to_string(),
        };
        assert!(filled.is_complete());

        let request = serde_json::to_value(&filled).unwrap();
        assert_eq!(request["destination"], "Bangkok, Thailand");
        assert_eq!(request["travel_dates"], "Nov 10-15, 2024");
        assert_eq!(request["budget_mode"], "Chill");
        assert_eq!(request["preferences"], "Street food, temples");
    }

    #[test]
    fn itinerary_serializes_days_under_wire_key() {
        let itinerary = Itinerary {
            destination: "Bangkok, Thailand".to_string(),
            dates: "Nov 10-15, 2024".to_string(),
            days: vec![],
        };
        let value = serde_json::to_value(&itinerary).unwrap();
        assert!(value.get("itinerary").is_some());
        assert!(value.get("days").is_none());
    }
}
