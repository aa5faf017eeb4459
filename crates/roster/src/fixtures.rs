//! Canned reference data: the bus fleet, destinations, demo tours and tour
//! managers. Everything randomized lives in the crate root.

use chrono::{NaiveDate, NaiveTime};
use model::{
    bus::Bus,
    location::Location,
    tour::{
        Flight, Hotel, ItineraryDay, MealsIncluded, NoteCategory, SeatBlock,
        Tour, TourManager, TourStatus, TravelNote,
    },
};

pub fn buses() -> Vec<Bus> {
    let capacities = [50, 50, 50, 40, 40, 45, 45, 35, 35, 30];
    capacities
        .iter()
        .enumerate()
        .map(|(i, capacity)| Bus {
            id: Bus::numeric_id(i as u32 + 1),
            label: format!("Bus {}", i + 1),
            capacity: *capacity,
            manager_name: None,
        })
        .collect()
}

pub fn locations() -> Vec<Location> {
    let entries = [
        (
            "1",
            "Mountain Viewpoint",
            "Scenic overlook with panoramic mountain views and hiking trails nearby.",
            "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
        ),
        (
            "2",
            "Lakeside Resort",
            "Luxury accommodations by the lake with water activities and relaxation areas.",
            "https://images.unsplash.com/photo-1500375592092-40eb2168fd21",
        ),
        (
            "3",
            "Forest Reserve",
            "Protected forest with rare species and guided nature walks through ancient trees.",
            "https://images.unsplash.com/photo-1426604966848-d7adac402bff",
        ),
        (
            "4",
            "Historical Village",
            "Preserved traditional village showcasing local culture and craftsmanship.",
            "https://images.unsplash.com/photo-1482938289607-e9573fc25ebb",
        ),
        (
            "5",
            "Waterfall Trail",
            "Series of stunning waterfalls with swimming holes and picnic areas.",
            "https://images.unsplash.com/photo-1504893524553-b855bce32c67",
        ),
    ];
    entries
        .iter()
        .map(|(id, name, description, image)| Location {
            id: (*id).into(),
            name: (*name).to_owned(),
            description: (*description).to_owned(),
            image_url: Some((*image).to_owned()),
            address: None,
            coordinates: None,
        })
        .collect()
}

pub fn managers() -> Vec<TourManager> {
    vec![
        TourManager {
            id: "1".into(),
            name: "Sarah Johnson".to_owned(),
            email: "sarah@example.com".to_owned(),
            phone: "+1234567890".to_owned(),
            is_available: true,
            assigned_city: Some("Hyderabad".to_owned()),
        },
        TourManager {
            id: "2".into(),
            name: "Mohammed Ali".to_owned(),
            email: "mohammed@example.com".to_owned(),
            phone: "+1987654321".to_owned(),
            is_available: true,
            assigned_city: Some("Chennai".to_owned()),
        },
        TourManager {
            id: "3".into(),
            name: "David Chen".to_owned(),
            email: "david@example.com".to_owned(),
            phone: "+1567890123".to_owned(),
            is_available: false,
            assigned_city: Some("Bangalore".to_owned()),
        },
    ]
}

pub fn tours() -> Vec<Tour> {
    vec![dubai_tour(), paris_tour()]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn dubai_tour() -> Tour {
    Tour {
        id: "1".into(),
        name: "Dubai Adventure 2025".to_owned(),
        description: "Explore the wonders of Dubai with this comprehensive 5-day tour"
            .to_owned(),
        start_date: date(2025, 4, 1),
        end_date: date(2025, 4, 5),
        main_location: "Dubai, UAE".to_owned(),
        cover_image: None,
        manager_id: Some("1".into()),
        managers: vec!["1".into(), "2".into()],
        status: TourStatus::Upcoming,
        itinerary: vec![
            ItineraryDay {
                id: "day1".into(),
                day_number: 1,
                date: date(2025, 4, 1),
                location: "Burj Khalifa".to_owned(),
                description: "Visit the tallest building in the world".to_owned(),
                morning_activity: "Dubai Mall Tour".to_owned(),
                afternoon_activity: "Burj Khalifa Observatory Deck".to_owned(),
                evening_activity: "Dubai Fountain Show".to_owned(),
                lunch_place: "The Dubai Mall Food Court".to_owned(),
                dinner_place: "Atmosphere Restaurant".to_owned(),
                meals_included: MealsIncluded {
                    breakfast: true,
                    lunch: true,
                    dinner: true,
                },
                pickup_time: time(9, 0),
                drop_time: time(21, 0),
                locations_visited: vec![
                    "Dubai Mall".to_owned(),
                    "Burj Khalifa".to_owned(),
                    "Dubai Fountain".to_owned(),
                ],
            },
            ItineraryDay {
                id: "day2".into(),
                day_number: 2,
                date: date(2025, 4, 2),
                location: "Desert Safari".to_owned(),
                description: "Experience the Arabian desert with dune bashing and camel rides"
                    .to_owned(),
                morning_activity: "Desert Dune Bashing".to_owned(),
                afternoon_activity: "Camel Riding".to_owned(),
                evening_activity: "Bedouin Camp Dinner & Shows".to_owned(),
                lunch_place: "Al Hadheera Desert Restaurant".to_owned(),
                dinner_place: "Bedouin Camp".to_owned(),
                meals_included: MealsIncluded {
                    breakfast: true,
                    lunch: true,
                    dinner: true,
                },
                pickup_time: time(8, 0),
                drop_time: time(22, 0),
                locations_visited: vec![
                    "Desert Conservation Reserve".to_owned(),
                    "Bedouin Camp".to_owned(),
                ],
            },
        ],
        flights: vec![Flight {
            id: "f1".into(),
            airline: "Emirates".to_owned(),
            departure_airport: "JFK".to_owned(),
            arrival_airport: "DXB".to_owned(),
            departure_date: date(2025, 3, 31),
            departure_time: time(21, 0).unwrap_or_default(),
            arrival_date: date(2025, 4, 1),
            arrival_time: time(19, 20).unwrap_or_default(),
            seats: vec![SeatBlock {
                city: "New York".to_owned(),
                count: 45,
            }],
        }],
        hotels: vec![Hotel {
            id: "h1".into(),
            name: "Grand Hyatt Dubai".to_owned(),
            city: "Dubai".to_owned(),
            room_type: "Double Deluxe".to_owned(),
            check_in_date: date(2025, 4, 1),
            check_out_date: date(2025, 4, 5),
        }],
        travel_notes: vec![
            TravelNote {
                id: "n1".into(),
                category: NoteCategory::Visa,
                content: "Tourist visa required for non-GCC nationals. Apply at least 14 days before travel.".to_owned(),
            },
            TravelNote {
                id: "n2".into(),
                category: NoteCategory::Money,
                content: "Bring UAE Dirhams. Major credit cards accepted in most places.".to_owned(),
            },
        ],
    }
}

fn paris_tour() -> Tour {
    Tour {
        id: "2".into(),
        name: "Paris Highlights 2025".to_owned(),
        description: "Experience the romance and culture of Paris in this 4-day tour"
            .to_owned(),
        start_date: date(2025, 5, 10),
        end_date: date(2025, 5, 14),
        main_location: "Paris, France".to_owned(),
        cover_image: None,
        manager_id: Some("3".into()),
        managers: vec!["3".into()],
        status: TourStatus::Upcoming,
        itinerary: vec![ItineraryDay {
            id: "day1-paris".into(),
            day_number: 1,
            date: date(2025, 5, 10),
            location: "Eiffel Tower".to_owned(),
            description: "Visit the iconic landmark of Paris".to_owned(),
            morning_activity: "Check-in at hotel".to_owned(),
            afternoon_activity: "Eiffel Tower visit".to_owned(),
            evening_activity: "Seine River Cruise".to_owned(),
            lunch_place: "Café de l'Homme".to_owned(),
            dinner_place: "Restaurant le Jules Verne".to_owned(),
            meals_included: MealsIncluded {
                breakfast: false,
                lunch: true,
                dinner: true,
            },
            pickup_time: time(12, 30),
            drop_time: time(21, 0),
            locations_visited: vec![
                "Eiffel Tower".to_owned(),
                "Seine River".to_owned(),
            ],
        }],
        flights: vec![Flight {
            id: "f2".into(),
            airline: "Air France".to_owned(),
            departure_airport: "LHR".to_owned(),
            arrival_airport: "CDG".to_owned(),
            departure_date: date(2025, 5, 10),
            departure_time: time(9, 30).unwrap_or_default(),
            arrival_date: date(2025, 5, 10),
            arrival_time: time(11, 45).unwrap_or_default(),
            seats: vec![SeatBlock {
                city: "London".to_owned(),
                count: 32,
            }],
        }],
        hotels: vec![Hotel {
            id: "h2".into(),
            name: "Hotel Le Meurice".to_owned(),
            city: "Paris".to_owned(),
            room_type: "Superior Room".to_owned(),
            check_in_date: date(2025, 5, 10),
            check_out_date: date(2025, 5, 14),
        }],
        travel_notes: vec![TravelNote {
            id: "n3".into(),
            category: NoteCategory::Visa,
            content: "Schengen visa required for non-EU nationals.".to_owned(),
        }],
    }
}
