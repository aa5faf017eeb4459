use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    Visa,
    Money,
    Immigration,
    Packing,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealsIncluded {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
}

/// One day of a tour itinerary. Day numbers start at 1 and are assigned
/// when the day is appended to the tour.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub id: Id<ItineraryDay>,
    pub day_number: u32,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub morning_activity: String,
    pub afternoon_activity: String,
    pub evening_activity: String,
    pub lunch_place: String,
    pub dinner_place: String,
    pub meals_included: MealsIncluded,
    pub pickup_time: Option<NaiveTime>,
    pub drop_time: Option<NaiveTime>,
    pub locations_visited: Vec<String>,
}

impl HasId for ItineraryDay {
    type IdType = String;
}

/// Seats blocked on a flight for a departure city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatBlock {
    pub city: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Id<Flight>,
    pub airline: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub seats: Vec<SeatBlock>,
}

impl HasId for Flight {
    type IdType = String;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Id<Hotel>,
    pub name: String,
    pub city: String,
    pub room_type: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl HasId for Hotel {
    type IdType = String;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelNote {
    pub id: Id<TravelNote>,
    pub category: NoteCategory,
    pub content: String,
}

impl HasId for TravelNote {
    type IdType = String;
}

/// A staff member who can be put in charge of a tour.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourManager {
    pub id: Id<TourManager>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_available: bool,
    pub assigned_city: Option<String>,
}

impl HasId for TourManager {
    type IdType = String;
}

/// A multi-day tour: itinerary days plus the flights, hotels and travel
/// notes that belong to it.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: Id<Tour>,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub main_location: String,
    pub cover_image: Option<String>,
    pub manager_id: Option<Id<TourManager>>,
    pub managers: Vec<Id<TourManager>>,
    pub status: TourStatus,
    pub itinerary: Vec<ItineraryDay>,
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub travel_notes: Vec<TravelNote>,
}

impl Tour {
    /// Day number for the next itinerary entry: one past the highest
    /// existing day, starting at 1.
    pub fn next_day_number(&self) -> u32 {
        self.itinerary
            .iter()
            .map(|day| day.day_number)
            .max()
            .map(|highest| highest + 1)
            .unwrap_or(1)
    }
}

impl HasId for Tour {
    type IdType = String;
}
