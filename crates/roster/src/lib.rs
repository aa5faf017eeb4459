use chrono::{DateTime, Duration, Local};
use itertools::Itertools;
use model::{
    bus::Bus, location::Location, participant::Participant, schedule::Schedule,
    tour::{Tour, TourManager},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use utility::id::Id;

pub mod fixtures;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Sarah", "Michael", "Emma", "David", "Olivia",
    "Daniel", "Sophia",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis",
    "Garcia", "Rodriguez", "Wilson",
];

/// Departures for consecutive locations of one bus are spaced this far apart.
const DEPARTURE_SPACING_MIN: i64 = 120;

/// Parameters of the seed dataset. The seed is explicit so that tests and
/// demos can reproduce the exact same roster.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub seed: u64,
    pub participants: usize,
    /// Chance that a generated participant starts out already assigned to
    /// one of the buses.
    pub preassign_probability: f64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            participants: 250,
            preassign_probability: 0.7,
        }
    }
}

impl RosterConfig {
    /// Reads `ROSTER_SEED` and `ROSTER_SIZE` from the environment, falling
    /// back to the defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(seed) = std::env::var("ROSTER_SEED") {
            match seed.parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => log::warn!("ignoring unparsable ROSTER_SEED: {}", seed),
            }
        }
        if let Ok(size) = std::env::var("ROSTER_SIZE") {
            match size.parse() {
                Ok(size) => config.participants = size,
                Err(_) => log::warn!("ignoring unparsable ROSTER_SIZE: {}", size),
            }
        }
        config
    }
}

/// The complete seed dataset. Feeds the application state at startup;
/// nothing here is persisted anywhere.
#[derive(Debug, Clone)]
pub struct Roster {
    pub buses: Vec<Bus>,
    pub locations: Vec<Location>,
    pub participants: Vec<Participant>,
    pub schedules: Vec<Schedule>,
    pub tours: Vec<Tour>,
    pub managers: Vec<TourManager>,
}

/// Builds the demo roster: fixed buses, locations, tours and managers, plus
/// randomized participants and the full bus × location schedule table.
pub fn generate(config: &RosterConfig) -> Roster {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let buses = fixtures::buses();
    let locations = fixtures::locations();
    let participants = generate_participants(config, &buses, &mut rng);
    let schedules = generate_schedules(&buses, &locations, &mut rng);
    log::info!(
        "generated roster: {} buses, {} locations, {} participants, {} schedule rows (seed {})",
        buses.len(),
        locations.len(),
        participants.len(),
        schedules.len(),
        config.seed,
    );
    Roster {
        buses,
        locations,
        participants,
        schedules,
        tours: fixtures::tours(),
        managers: fixtures::managers(),
    }
}

fn generate_participants(
    config: &RosterConfig,
    buses: &[Bus],
    rng: &mut ChaCha8Rng,
) -> Vec<Participant> {
    (0..config.participants)
        .map(|i| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let bus_id = if rng.gen_bool(config.preassign_probability) {
                let bus = &buses[rng.gen_range(0..buses.len())];
                Some(bus.id.clone())
            } else {
                None
            };
            Participant {
                id: Id::new(format!("P{}", i + 1)),
                name: format!("{} {}", first, last),
                phone: format!(
                    "555-{}-{}",
                    rng.gen_range(100..1000),
                    rng.gen_range(1000..10000)
                ),
                bus_id,
            }
        })
        .collect()
}

fn generate_schedules(
    buses: &[Bus],
    locations: &[Location],
    rng: &mut ChaCha8Rng,
) -> Vec<Schedule> {
    let base = departure_base();
    buses
        .iter()
        .cartesian_product(locations.iter().enumerate())
        .map(|(bus, (index, location))| {
            let departure =
                base + Duration::minutes(index as i64 * DEPARTURE_SPACING_MIN);
            let distance = rng.gen_range(20..100) as f64;
            // roughly 1.5 minutes per kilometer
            let duration_min = distance * 1.5;
            let arrival = departure + Duration::minutes(duration_min.trunc() as i64);
            Schedule {
                bus_id: bus.id.clone(),
                location_id: location.id.clone(),
                departure_time: Some(departure),
                arrival_time: Some(arrival),
                distance_km: distance,
                duration_min,
            }
        })
        .collect()
}

/// 09:00 local time today; every generated departure is offset from here.
fn departure_base() -> DateTime<Local> {
    Local::now()
        .date_naive()
        .and_hms_opt(9, 0, 0)
        .and_then(|nine| nine.and_local_timezone(Local).earliest())
        .unwrap_or_else(Local::now)
}
