//! Merges pre-parsed bulk-upload rows into the participant collection.
//! CSV parsing happens in an external collaborator; this side starts at the
//! already-parsed `{id, name, phone}` tuples.

use indexmap::IndexSet;
use model::participant::Participant;
use utility::id::Id;

use crate::{state::AppState, Error, Result};

/// One parsed row handed over by the upload collaborator. `id` may be
/// absent, in which case the next free `P{n}` id is allocated.
#[derive(Debug, Clone)]
pub struct UploadRow {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadSummary {
    pub added: usize,
    pub skipped: usize,
}

impl AppState {
    /// Appends the uploaded rows as unassigned participants. Rows whose id
    /// already exists, or whose name is blank, are skipped and counted
    /// rather than failing the batch.
    pub fn merge_participants(
        &mut self,
        rows: Vec<UploadRow>,
    ) -> Result<UploadSummary> {
        if rows.is_empty() {
            return Err(Error::EmptyInput("upload rows"));
        }

        let mut known: IndexSet<String> =
            self.participants.iter().map(|p| p.id.raw()).collect();
        let mut next = self
            .participants
            .iter()
            .filter_map(|p| p.id.raw_ref::<str>().strip_prefix('P'))
            .filter_map(|suffix| suffix.parse::<usize>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let mut summary = UploadSummary::default();
        for row in rows {
            if row.name.trim().is_empty() {
                summary.skipped += 1;
                continue;
            }
            let id = match row.id.filter(|id| !id.trim().is_empty()) {
                Some(id) => id,
                None => {
                    while known.contains(&format!("P{}", next)) {
                        next += 1;
                    }
                    format!("P{}", next)
                }
            };
            if !known.insert(id.clone()) {
                summary.skipped += 1;
                continue;
            }
            self.participants.push(Participant {
                id: Id::new(id),
                name: row.name.trim().to_owned(),
                phone: row.phone.trim().to_owned(),
                bus_id: None,
            });
            summary.added += 1;
        }
        log::info!(
            "bulk upload merged: {} added, {} skipped",
            summary.added,
            summary.skipped
        );
        Ok(summary)
    }
}
