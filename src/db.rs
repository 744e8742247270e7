//! Database interface.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::consts::PAGE_SIZE;
use crate::prelude::*;

const SCHEMA: &str = "
    -- Tank temperature and washer state snapshots.
    CREATE TABLE IF NOT EXISTS commonsense (
        date INTEGER NOT NULL,
        tank_top_temp REAL,
        tank_bottom_temp REAL,
        ambient_temp REAL,
        washer1_on INTEGER,
        washer2_on INTEGER,
        washer3_on INTEGER
    );
    -- Descending index on `date` is needed to speed up the history page
    -- and the select latest queries.
    CREATE INDEX IF NOT EXISTS commonsense_date ON commonsense (date DESC);

    -- Per-washer on/off events with associated values.
    CREATE TABLE IF NOT EXISTS washers (
        date INTEGER NOT NULL,
        w1 INTEGER,
        w1_val REAL,
        w2 INTEGER,
        w2_val REAL,
        w3 INTEGER,
        w3_val REAL
    );
    CREATE INDEX IF NOT EXISTS washers_date ON washers (date DESC);
";

/// A database connection.
pub struct Db {
    /// Wrapped SQLite connection.
    connection: Connection,
}

impl Db {
    /// Create a new database connection.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Db> {
        let connection = Connection::open(path)?;
        connection.execute_batch(SCHEMA)?;
        Ok(Db { connection })
    }

    /// Insert one sensor reading row. Both tables are append-only,
    /// nothing is ever updated or deleted.
    pub fn insert_sensor_reading(&self, reading: &SensorReading) -> rusqlite::Result<()> {
        self.connection.execute(
            "INSERT INTO commonsense
                (date, tank_top_temp, tank_bottom_temp, ambient_temp, washer1_on, washer2_on, washer3_on)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                reading.timestamp.timestamp_millis(),
                reading.tank_top_temp,
                reading.tank_bottom_temp,
                reading.ambient_temp,
                reading.washer_1_on,
                reading.washer_2_on,
                reading.washer_3_on,
            ],
        )?;
        Ok(())
    }

    /// Insert one washer event row.
    pub fn insert_washer_event(&self, event: &WasherEvent) -> rusqlite::Result<()> {
        self.connection.execute(
            "INSERT INTO washers (date, w1, w1_val, w2, w2_val, w3, w3_val)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                event.timestamp.timestamp_millis(),
                event.w1,
                event.w1_val,
                event.w2,
                event.w2_val,
                event.w3,
                event.w3_val,
            ],
        )?;
        Ok(())
    }

    /// Select one history page: newest first, `PAGE_SIZE` rows at the given offset.
    pub fn select_readings(&self, offset: i64) -> rusqlite::Result<Vec<SensorReading>> {
        self.connection
            .prepare(
                "SELECT date, tank_top_temp, tank_bottom_temp, ambient_temp,
                        washer1_on, washer2_on, washer3_on
                    FROM commonsense ORDER BY date DESC LIMIT ?1 OFFSET ?2",
            )?
            .query_map(params![PAGE_SIZE, offset], reading_from_row)?
            .collect()
    }

    /// Select the most recent sensor reading.
    pub fn select_last_reading(&self) -> rusqlite::Result<Option<SensorReading>> {
        self.connection
            .query_row(
                "SELECT date, tank_top_temp, tank_bottom_temp, ambient_temp,
                        washer1_on, washer2_on, washer3_on
                    FROM commonsense ORDER BY date DESC LIMIT 1",
                [],
                reading_from_row,
            )
            .optional()
    }

    /// Select the timestamp of the most recent reading with washer 3 on.
    pub fn select_washer_3_last_on(&self) -> rusqlite::Result<Option<DateTime<Local>>> {
        Ok(self
            .connection
            .query_row(
                "SELECT date FROM commonsense WHERE washer3_on = 1 ORDER BY date DESC LIMIT 1",
                [],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .map(timestamp_from_millis))
    }
}

#[cfg(test)]
impl Db {
    pub fn count_rows(&self, table: &str) -> rusqlite::Result<i64> {
        self.connection
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
    }

    /// Drops a table so that the next insert into it fails.
    pub fn drop_table(&self, table: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(&format!("DROP TABLE {}", table))
    }
}

fn reading_from_row(row: &Row) -> rusqlite::Result<SensorReading> {
    Ok(SensorReading {
        timestamp: timestamp_from_millis(row.get("date")?),
        tank_top_temp: row.get("tank_top_temp")?,
        tank_bottom_temp: row.get("tank_bottom_temp")?,
        ambient_temp: row.get("ambient_temp")?,
        washer_1_on: row.get("washer1_on")?,
        washer_2_on: row.get("washer2_on")?,
        washer_3_on: row.get("washer3_on")?,
    })
}

fn timestamp_from_millis(millis: i64) -> DateTime<Local> {
    // Every stored value was produced by `timestamp_millis` and is in range.
    Local.timestamp_millis_opt(millis).unwrap()
}
