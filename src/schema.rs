//! Normalized schema for the track database.

use anyhow::Result;
use rusqlite::Connection;

/// Drop and recreate the four tables.
///
/// Every run starts from an empty schema; whatever a previous run loaded
/// is destroyed here. Artist, Genre, and Album are deduplicated by a
/// unique natural key (name/title), Track by its title.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS Artist;
        DROP TABLE IF EXISTS Genre;
        DROP TABLE IF EXISTS Album;
        DROP TABLE IF EXISTS Track;

        CREATE TABLE Artist (
            id     INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT UNIQUE,
            name   TEXT UNIQUE
        );

        CREATE TABLE Genre (
            id     INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT UNIQUE,
            name   TEXT UNIQUE
        );

        CREATE TABLE Album (
            id     INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT UNIQUE,
            title  TEXT UNIQUE,
            artist_id INTEGER
        );

        CREATE TABLE Track (
            id     INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT UNIQUE,
            title  TEXT UNIQUE,
            album_id  INTEGER,
            genre_id  INTEGER,
            len    INTEGER,
            rating INTEGER,
            count  INTEGER
        );",
    )?;
    Ok(())
}
