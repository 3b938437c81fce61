//! Reusable UI components

pub mod header;
pub mod itinerary_card;
pub mod loading;
pub mod map_view;
pub mod packing_list;
pub mod trip_header;

pub use header::Header;
pub use itinerary_card::ItineraryCard;
pub use loading::{LoadingDots, LoadingSpinner};
pub use map_view::MapView;
pub use packing_list::{PackingListDialog, PackingListView};
pub use trip_header::TripHeader;
