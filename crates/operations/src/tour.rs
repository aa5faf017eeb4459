//! Tour planning: multi-day itineraries plus the flights, hotels and
//! travel notes attached to each tour.

use model::tour::{Flight, Hotel, ItineraryDay, SeatBlock, Tour, TourManager, TravelNote};
use utility::id::Id;

use crate::{state::AppState, Error, Result};

impl AppState {
    /// Stores a new tour. The draft's id is ignored; the next free numeric
    /// id is allocated instead.
    pub fn create_tour(&mut self, mut draft: Tour) -> Result<Id<Tour>> {
        if draft.name.trim().is_empty() {
            return Err(Error::EmptyInput("tour name"));
        }
        let next = self
            .tours
            .iter()
            .filter_map(|tour| tour.id.raw_ref::<str>().parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        draft.id = Id::new(next.to_string());
        let id = draft.id.clone();
        log::info!("created tour {} ({})", draft.name, id);
        self.tours.push(draft);
        Ok(id)
    }

    /// Replaces a stored tour wholesale, matched by id.
    pub fn update_tour(&mut self, tour: Tour) -> Result<()> {
        if tour.name.trim().is_empty() {
            return Err(Error::EmptyInput("tour name"));
        }
        let stored = self
            .tours
            .iter_mut()
            .find(|stored| stored.id == tour.id)
            .ok_or(Error::NotFound)?;
        *stored = tour;
        Ok(())
    }

    pub fn delete_tour(&mut self, id: &Id<Tour>) -> Result<Tour> {
        let index = self
            .tours
            .iter()
            .position(|tour| tour.id == *id)
            .ok_or(Error::NotFound)?;
        Ok(self.tours.remove(index))
    }

    /// Appends an itinerary day. Whatever day number the draft carries is
    /// replaced with one past the highest existing day; the assigned
    /// number is returned.
    pub fn add_itinerary_day(
        &mut self,
        tour_id: &Id<Tour>,
        mut day: ItineraryDay,
    ) -> Result<u32> {
        let tour = self.tour_mut(tour_id)?;
        day.day_number = tour.next_day_number();
        let number = day.day_number;
        tour.itinerary.push(day);
        Ok(number)
    }

    pub fn add_flight(&mut self, tour_id: &Id<Tour>, flight: Flight) -> Result<()> {
        self.tour_mut(tour_id)?.flights.push(flight);
        Ok(())
    }

    /// Blocks additional seats on one of the tour's flights.
    pub fn add_flight_seats(
        &mut self,
        tour_id: &Id<Tour>,
        flight_id: &Id<Flight>,
        seats: SeatBlock,
    ) -> Result<()> {
        let flight = self
            .tour_mut(tour_id)?
            .flights
            .iter_mut()
            .find(|flight| flight.id == *flight_id)
            .ok_or(Error::NotFound)?;
        flight.seats.push(seats);
        Ok(())
    }

    pub fn add_hotel(&mut self, tour_id: &Id<Tour>, hotel: Hotel) -> Result<()> {
        self.tour_mut(tour_id)?.hotels.push(hotel);
        Ok(())
    }

    pub fn add_travel_note(
        &mut self,
        tour_id: &Id<Tour>,
        note: TravelNote,
    ) -> Result<()> {
        self.tour_mut(tour_id)?.travel_notes.push(note);
        Ok(())
    }

    /// Puts a manager in charge of a tour. The manager must exist and be
    /// available; they are also added to the tour's manager list when not
    /// already on it.
    pub fn assign_manager(
        &mut self,
        tour_id: &Id<Tour>,
        manager_id: &Id<TourManager>,
    ) -> Result<()> {
        let manager = self.manager(manager_id).ok_or(Error::NotFound)?;
        if !manager.is_available {
            return Err(Error::ManagerUnavailable);
        }
        let manager_id = manager.id.clone();
        let tour = self.tour_mut(tour_id)?;
        if !tour.managers.contains(&manager_id) {
            tour.managers.push(manager_id.clone());
        }
        tour.manager_id = Some(manager_id);
        Ok(())
    }

    fn tour_mut(&mut self, id: &Id<Tour>) -> Result<&mut Tour> {
        self.tours
            .iter_mut()
            .find(|tour| tour.id == *id)
            .ok_or(Error::NotFound)
    }
}
