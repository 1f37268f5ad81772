//! Trip history queries and the transactional trip commit.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ItemSnapshot, Trip, TripId},
    shopping::StatusReset,
};

const INSERT_TRIP_SQL: &str =
    "INSERT INTO trips (id, date, purchased, missed) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TRIPS_SQL: &str =
    "SELECT id, date, purchased, missed FROM trips ORDER BY date DESC, rowid DESC";
const DELETE_TRIPS_SQL: &str = "DELETE FROM trips";

fn parse_snapshots(row: &Row, index: usize) -> rusqlite::Result<Vec<ItemSnapshot>> {
    let json: String = row.get(index)?;
    serde_json::from_str(&json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Helper function to construct a Trip from a database row
    fn build_trip_from_row(row: &Row) -> rusqlite::Result<Trip> {
        let millis: i64 = row.get(1)?;
        let date = Timestamp::from_millisecond(millis).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, Type::Integer, Box::new(e))
        })?;

        Ok(Trip {
            id: TripId::from(row.get::<_, String>(0)?),
            date,
            purchased: parse_snapshots(row, 2)?,
            missed: parse_snapshots(row, 3)?,
        })
    }

    fn insert_trip_in(conn: &rusqlite::Connection, trip: &Trip) -> Result<()> {
        let purchased = serde_json::to_string(&trip.purchased)?;
        let missed = serde_json::to_string(&trip.missed)?;

        conn.execute(
            INSERT_TRIP_SQL,
            params![
                trip.id.as_str(),
                trip.date.as_millisecond(),
                purchased,
                missed
            ],
        )
        .db_context("Failed to insert trip")?;
        Ok(())
    }

    /// Appends a trip record.
    pub fn append_trip(&mut self, trip: &Trip) -> Result<()> {
        Self::insert_trip_in(&self.connection, trip)
    }

    /// Retrieves every trip, most recent first.
    pub fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIPS_SQL)
            .db_context("Failed to prepare query")?;

        let trips = stmt
            .query_map([], Self::build_trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trips")?;

        Ok(trips)
    }

    /// Deletes every trip record. Returns how many were removed.
    pub fn clear_trips(&mut self) -> Result<usize> {
        self.connection
            .execute(DELETE_TRIPS_SQL, [])
            .db_context("Failed to clear trips")
    }

    /// Records a trip and applies its status resets in one transaction.
    ///
    /// Either the trip and every reset are written, or nothing is.
    pub fn record_trip(&mut self, trip: &Trip, resets: &[StatusReset]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::insert_trip_in(&tx, trip)?;
        for reset in resets {
            Self::replace_item_in(&tx, &reset.item)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
