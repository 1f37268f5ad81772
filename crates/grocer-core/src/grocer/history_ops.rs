//! Trip history, reset retries and importing from another store.

use std::collections::HashSet;

use log::{debug, info, warn};

use super::Grocer;
use crate::{
    display::Trips,
    error::{GroceryError, ResetFailure, Result},
    models::TripId,
    params::ClearHistory,
    store::Store,
};

/// What [`Grocer::import_from`] copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub items_imported: usize,
    pub items_skipped: usize,
    pub trips_imported: usize,
    pub trips_skipped: usize,
}

impl Grocer {
    /// All recorded trips, most recent first.
    pub async fn history(&self) -> Result<Trips> {
        Ok(Trips(self.store.list_trips().await?))
    }

    /// Deletes every recorded trip.
    ///
    /// # Errors
    ///
    /// * `GroceryError::Validation` - When `params.confirmed` is false
    pub async fn clear_history(&mut self, params: &ClearHistory) -> Result<()> {
        if !params.confirmed {
            return Err(GroceryError::validation("confirmed")
                .with_reason("Clearing history cannot be undone and must be confirmed"));
        }

        self.store.clear_trips().await?;
        info!("Cleared shopping history");
        Ok(())
    }

    /// Re-applies status resets that failed after `trip_id` was recorded.
    ///
    /// Each item is read again and only its status is written, so edits made
    /// since the trip are kept. Items that were deleted, or whose status is
    /// no longer the one the trip finished with, are skipped. Resets that
    /// fail again are reported as a new [`GroceryError::PartialTrip`] for the
    /// same trip.
    pub async fn retry_resets(
        &mut self,
        trip_id: &TripId,
        failures: &[ResetFailure],
    ) -> Result<()> {
        let mut remaining = Vec::new();
        for failure in failures {
            let id = &failure.item.id;
            let current = match self.store.get_item(id).await {
                Ok(Some(current)) => current,
                Ok(None) => {
                    debug!("Item {id} was deleted since trip {trip_id}, skipping reset");
                    continue;
                }
                Err(e) => {
                    warn!("Re-reading {id} for reset failed: {e}");
                    remaining.push(ResetFailure {
                        reason: e.to_string(),
                        ..failure.clone()
                    });
                    continue;
                }
            };

            if current.status != failure.from {
                debug!(
                    "Item {id} moved from {} to {} since trip {trip_id}, skipping reset",
                    failure.from.as_str(),
                    current.status.as_str()
                );
                continue;
            }

            let reset = current.with_status(failure.item.status);
            if let Err(e) = self.store.update_item(&reset).await {
                warn!("Retrying reset of {id} failed: {e}");
                remaining.push(ResetFailure {
                    item: reset,
                    from: failure.from,
                    reason: e.to_string(),
                });
            }
        }

        if remaining.is_empty() {
            Ok(())
        } else {
            Err(GroceryError::PartialTrip {
                trip_id: trip_id.clone(),
                failures: remaining,
            })
        }
    }

    /// Copies items and trips from `source` into this grocer's store.
    ///
    /// Records whose id already exists here are skipped, never merged.
    pub async fn import_from(&mut self, source: &dyn Store) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        let existing_items: HashSet<_> = self
            .store
            .list_items()
            .await?
            .into_iter()
            .map(|i| i.id)
            .collect();
        for item in source.list_items().await? {
            if existing_items.contains(&item.id) {
                report.items_skipped += 1;
                continue;
            }
            self.store.add_item(&item).await?;
            report.items_imported += 1;
        }

        let existing_trips: HashSet<_> = self
            .store
            .list_trips()
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        // Oldest first, so insertion order matches chronology.
        for trip in source.list_trips().await?.into_iter().rev() {
            if existing_trips.contains(&trip.id) {
                report.trips_skipped += 1;
                continue;
            }
            self.store.append_trip(&trip).await?;
            report.trips_imported += 1;
        }

        info!(
            "Imported {} item(s) and {} trip(s) from {} store into {} store",
            report.items_imported,
            report.trips_imported,
            source.backend(),
            self.backend()
        );
        Ok(report)
    }
}
