//! Builds notification recipient lists and renders the message template.
//! Delivery itself is the job of an external collaborator; here it ends at
//! the rendered per-recipient messages.

use indexmap::IndexSet;
use model::{bus::Bus, participant::Participant};
use utility::id::Id;

use crate::{state::AppState, Error, Result};

pub const DEFAULT_TEMPLATE: &str =
    "Hi [name], the buses are leaving in 5 minutes. Please return to the pickup area now.";

/// Share of a bus roster treated as "missing". Stands in for real
/// check-in/check-out status, which no collaborator provides yet.
const MISSING_SHARE: f64 = 0.3;

/// Who on a bus should receive the notification.
#[derive(Debug, Clone)]
pub enum Audience {
    /// Everyone currently on the bus.
    All,
    /// The participants assumed not to have returned yet.
    Missing,
    /// An explicit hand-picked set, intersected with the bus roster.
    Custom(Vec<Id<Participant>>),
}

/// One rendered notification, ready for an external delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub participant_id: Id<Participant>,
    pub phone: String,
    pub message: String,
}

/// Substitutes every `[name]` placeholder with the participant's name.
pub fn render_template(template: &str, participant: &Participant) -> String {
    template.replace("[name]", &participant.name)
}

impl AppState {
    /// Resolves an audience selection against a bus roster.
    pub fn notification_audience(
        &self,
        bus_id: &Id<Bus>,
        audience: &Audience,
    ) -> Result<Vec<&Participant>> {
        if self.bus(bus_id).is_none() {
            return Err(Error::NotFound);
        }
        let on_bus = self.participants_by_bus(bus_id);
        let selected = match audience {
            Audience::All => on_bus,
            Audience::Missing => {
                let count = (on_bus.len() as f64 * MISSING_SHARE) as usize;
                on_bus.into_iter().take(count).collect()
            }
            Audience::Custom(ids) => on_bus
                .into_iter()
                .filter(|p| ids.contains(&p.id))
                .collect(),
        };
        Ok(selected)
    }

    /// Renders the template for every recipient. Duplicate ids collapse to
    /// one message; an unknown id fails the whole batch so nothing is sent
    /// to a partial list.
    pub fn send_notifications(
        &self,
        recipients: &[Id<Participant>],
        template: &str,
    ) -> Result<Vec<Notification>> {
        if recipients.is_empty() {
            return Err(Error::EmptyInput("recipients"));
        }
        let unique: IndexSet<&Id<Participant>> = recipients.iter().collect();
        let mut messages = Vec::with_capacity(unique.len());
        for id in unique {
            let participant = self.participant(id).ok_or(Error::NotFound)?;
            messages.push(Notification {
                participant_id: participant.id.clone(),
                phone: participant.phone.clone(),
                message: render_template(template, participant),
            });
        }
        log::info!(
            "notifications prepared for {} participants (delivery simulated)",
            messages.len()
        );
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use model::ExampleData;

    use super::*;

    fn participant(id: &str, name: &str) -> Participant {
        Participant {
            id: id.into(),
            name: name.to_owned(),
            phone: format!("555-000-{:04}", id.len()),
            bus_id: Some("1".into()),
        }
    }

    fn state_with_bus_of(count: usize) -> AppState {
        AppState {
            buses: vec![Bus::example_data()],
            participants: (1..=count)
                .map(|i| participant(&format!("P{}", i), &format!("Person {}", i)))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn template_substitutes_every_placeholder() {
        let p = participant("P1", "Jane Miller");
        assert_eq!(
            render_template("Hi [name], this is for [name].", &p),
            "Hi Jane Miller, this is for Jane Miller."
        );
    }

    #[test]
    fn audience_all_is_the_whole_roster() {
        let state = state_with_bus_of(10);
        let all = state
            .notification_audience(&"1".into(), &Audience::All)
            .unwrap();
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn audience_missing_is_the_first_third_rounded_down() {
        let state = state_with_bus_of(10);
        let missing = state
            .notification_audience(&"1".into(), &Audience::Missing)
            .unwrap();
        assert_eq!(missing.len(), 3);
        assert_eq!(missing[0].id.raw(), "P1");
    }

    #[test]
    fn audience_custom_intersects_with_the_roster() {
        let mut state = state_with_bus_of(3);
        // P3 is not on the bus anymore
        state.remove_participant_from_bus(&"P3".into()).unwrap();
        let picked = state
            .notification_audience(
                &"1".into(),
                &Audience::Custom(vec!["P2".into(), "P3".into()]),
            )
            .unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id.raw(), "P2");
    }

    #[test]
    fn unknown_bus_is_refused() {
        let state = state_with_bus_of(1);
        assert!(state
            .notification_audience(&"9".into(), &Audience::All)
            .is_err());
    }

    #[test]
    fn sending_requires_recipients_and_known_ids() {
        let state = state_with_bus_of(2);
        assert_eq!(
            state.send_notifications(&[], DEFAULT_TEMPLATE),
            Err(Error::EmptyInput("recipients"))
        );
        assert_eq!(
            state.send_notifications(&["P9".into()], DEFAULT_TEMPLATE),
            Err(Error::NotFound)
        );
        let sent = state
            .send_notifications(
                &["P1".into(), "P2".into(), "P1".into()],
                DEFAULT_TEMPLATE,
            )
            .unwrap();
        // the duplicate collapses
        assert_eq!(sent.len(), 2);
        assert!(sent[0].message.starts_with("Hi Person 1,"));
    }
}
