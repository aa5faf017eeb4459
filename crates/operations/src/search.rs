//! Free-text participant lookup, also fed by the QR scan collaborator.

use model::participant::Participant;
use utility::phone;

use crate::state::AppState;

impl AppState {
    /// Resolves a free-text query to the first matching participant, in
    /// collection order: exact id, case-insensitive name fragment, or
    /// digit-only phone fragment. The phone clause is skipped when the
    /// query contains no digits at all, so a punctuation-only query cannot
    /// match every stored number via the empty string.
    pub fn search_participant(&self, term: &str) -> Option<&Participant> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        let needle = term.to_lowercase();
        let digits = phone::digits(term);
        self.participants.iter().find(|p| {
            p.id.raw_ref::<str>() == term
                || p.name.to_lowercase().contains(&needle)
                || (!digits.is_empty()
                    && phone::digits(&p.phone).contains(&digits))
        })
    }

    /// A scanned QR payload is just a query term.
    pub fn resolve_scan(&self, payload: &str) -> Option<&Participant> {
        self.search_participant(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str, name: &str, phone: &str) -> Participant {
        Participant {
            id: id.into(),
            name: name.to_owned(),
            phone: phone.to_owned(),
            bus_id: None,
        }
    }

    fn state() -> AppState {
        AppState {
            participants: vec![
                participant("P1", "John Smith", "555-123-4567"),
                participant("P2", "Jane Johnson", "555-987-6543"),
                participant("P3", "Alex Garcia", "555-111-2222"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn finds_by_exact_id() {
        let state = state();
        assert_eq!(state.search_participant("P2").unwrap().name, "Jane Johnson");
    }

    #[test]
    fn finds_by_name_fragment_case_insensitively() {
        let state = state();
        assert_eq!(
            state.search_participant("garcia").unwrap().id.raw(),
            "P3"
        );
    }

    #[test]
    fn finds_by_phone_ignoring_punctuation() {
        let state = state();
        let hit = state.search_participant("555-123-4567").unwrap();
        assert_eq!(hit.id.raw(), "P1");
        // partial digits and different punctuation also match
        let hit = state.search_participant("(987) 6543").unwrap();
        assert_eq!(hit.id.raw(), "P2");
    }

    #[test]
    fn first_match_in_collection_order_wins() {
        let state = state();
        // "j" is a fragment of both John and Jane; John is stored first
        assert_eq!(state.search_participant("j").unwrap().id.raw(), "P1");
    }

    #[test]
    fn blank_and_unmatched_terms_yield_none() {
        let state = state();
        assert!(state.search_participant("").is_none());
        assert!(state.search_participant("   ").is_none());
        assert!(state.search_participant("zzz").is_none());
        // punctuation only: no digits, no name fragment, no id
        assert!(state.search_participant("--").is_none());
    }

    #[test]
    fn scan_payload_goes_through_the_same_lookup() {
        let state = state();
        assert_eq!(state.resolve_scan("P1").unwrap().name, "John Smith");
    }
}
