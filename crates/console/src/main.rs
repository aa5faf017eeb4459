//! Small demo driver: builds a seeded roster, walks through the dashboard
//! operations once and prints a JSON summary of the resulting state.

use chrono::Local;
use operations::{
    auth::Directory,
    notify::{Audience, DEFAULT_TEMPLATE},
    schedule::{leg_in_progress, leg_progress},
    state::{ActiveView, AppState},
};
use roster::RosterConfig;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BusSummary {
    id: String,
    label: String,
    capacity: u32,
    occupancy: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    operator: String,
    buses: Vec<BusSummary>,
    unassigned_participants: usize,
    tours: Vec<String>,
}

fn main() {
    env_logger::init();

    let directory = Directory::demo();
    let operator = match directory.login("admin@tours.com", "admin123") {
        Ok(user) => user,
        Err(why) => {
            eprintln!("login failed: {}", why);
            return;
        }
    };
    log::info!(
        "{} logged in (fleet management: {})",
        operator.name,
        operator.role.can_manage_fleet()
    );

    let config = RosterConfig::from_env();
    let mut state = AppState::from_roster(roster::generate(&config));

    // assignment round trip on the first unassigned participant
    if let Some(id) = state
        .participants
        .iter()
        .find(|p| p.bus_id.is_none())
        .map(|p| p.id.clone())
    {
        state.set_active_view(ActiveView::BusAssignment);
        match state.assign_participant(&id, &"1".into()) {
            Ok(receipt) => println!("{}", receipt),
            Err(why) => println!("{}", why),
        }
    }

    // schedule and ETA for bus 1
    state.set_active_view(ActiveView::EtaTracker);
    let now = Local::now();
    for (index, leg) in state.schedules_for_bus(&"1".into()).iter().enumerate() {
        let eta = state.calculate_eta(&"1".into(), &leg.location.id, 0);
        println!(
            "leg {}: {} ({} km, {} min) eta {} progress {}%{}",
            index,
            leg.location.name,
            leg.schedule.distance_km,
            leg.schedule.duration_min,
            eta.map(|eta| eta.format("%H:%M").to_string())
                .unwrap_or_else(|| "n/a".to_owned()),
            leg_progress(leg.schedule.departure_time, leg.schedule.arrival_time, now),
            if leg_in_progress(
                leg.schedule.departure_time,
                leg.schedule.arrival_time,
                now
            ) {
                " (in progress)"
            } else {
                ""
            },
        );
    }

    // search, as the QR scanner would drive it
    if let Some(hit) = state.search_participant("P1") {
        println!("scan resolved: {} ({})", hit.name, hit.phone);
    }

    // notification dry run for bus 1
    let recipients: Vec<_> = match state
        .notification_audience(&"1".into(), &Audience::Missing)
    {
        Ok(missing) => missing.iter().map(|p| p.id.clone()).collect(),
        Err(_) => vec![],
    };
    if !recipients.is_empty() {
        if let Ok(messages) = state.send_notifications(&recipients, DEFAULT_TEMPLATE) {
            println!("prepared {} notifications", messages.len());
        }
    }

    let summary = Summary {
        operator: operator.name,
        buses: state
            .buses
            .iter()
            .map(|bus| BusSummary {
                id: bus.id.raw(),
                label: bus.label.clone(),
                capacity: bus.capacity,
                occupancy: state.occupancy(&bus.id),
            })
            .collect(),
        unassigned_participants: state
            .participants
            .iter()
            .filter(|p| p.bus_id.is_none())
            .count(),
        tours: state.tours.iter().map(|tour| tour.name.clone()).collect(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(why) => eprintln!("could not serialize summary: {}", why),
    }
}
