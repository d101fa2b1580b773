//! Single-pass load of the CSV export into the normalized schema.
//!
//! Reference entities (Artist, Genre, Album) are resolved through an
//! in-memory name->id cache so the database round trip happens once per
//! distinct name rather than once per row. Tracks are upserted by title
//! with replace semantics.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::models::TrackRow;
use crate::progress::create_spinner;

/// Counters for one load pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadStats {
    /// Rows inserted into the Track table (including replacements).
    pub loaded: u64,
    /// Rows dropped by the field-count guard.
    pub skipped: u64,
}

/// Name->id caches for the reference entities, populated during the pass.
#[derive(Default)]
pub struct RefCache {
    artists: FxHashMap<String, i64>,
    genres: FxHashMap<String, i64>,
    albums: FxHashMap<String, i64>,
}

impl RefCache {
    /// Resolve an artist id, inserting the artist on first encounter.
    pub fn artist_id(&mut self, conn: &Connection, name: &str) -> Result<i64> {
        if let Some(&id) = self.artists.get(name) {
            return Ok(id);
        }
        conn.prepare_cached("INSERT OR IGNORE INTO Artist (name) VALUES (?1)")?
            .execute([name])?;
        let id: i64 = conn
            .prepare_cached("SELECT id FROM Artist WHERE name = ?1")?
            .query_row([name], |row| row.get(0))?;
        self.artists.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve a genre id, inserting the genre on first encounter.
    pub fn genre_id(&mut self, conn: &Connection, name: &str) -> Result<i64> {
        if let Some(&id) = self.genres.get(name) {
            return Ok(id);
        }
        conn.prepare_cached("INSERT OR IGNORE INTO Genre (name) VALUES (?1)")?
            .execute([name])?;
        let id: i64 = conn
            .prepare_cached("SELECT id FROM Genre WHERE name = ?1")?
            .query_row([name], |row| row.get(0))?;
        self.genres.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve an album id, inserting the album on first encounter.
    ///
    /// Album uniqueness is on title alone: a title shared across two
    /// artists keeps the artist_id of whichever row got there first, and
    /// the stored artist_id is never updated on a collision.
    pub fn album_id(&mut self, conn: &Connection, title: &str, artist_id: i64) -> Result<i64> {
        if let Some(&id) = self.albums.get(title) {
            return Ok(id);
        }
        conn.prepare_cached("INSERT OR IGNORE INTO Album (title, artist_id) VALUES (?1, ?2)")?
            .execute(params![title, artist_id])?;
        let id: i64 = conn
            .prepare_cached("SELECT id FROM Album WHERE title = ?1")?
            .query_row([title], |row| row.get(0))?;
        self.albums.insert(title.to_string(), id);
        Ok(id)
    }
}

/// Load one row: resolve its reference entities, then upsert the track.
///
/// A track title seen before replaces the prior row wholesale, foreign
/// keys and metrics included, and the replaced row gets a fresh id.
pub fn load_row(conn: &Connection, cache: &mut RefCache, row: &TrackRow) -> Result<()> {
    let artist_id = cache.artist_id(conn, &row.artist)?;
    let genre_id = cache.genre_id(conn, &row.genre)?;
    let album_id = cache.album_id(conn, &row.album, artist_id)?;

    // len/rating/count are bound as the raw CSV strings; the INTEGER
    // column affinity coerces numeric text on write.
    conn.prepare_cached(
        "INSERT OR REPLACE INTO Track (title, album_id, genre_id, len, rating, count)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?
    .execute(params![
        row.name,
        album_id,
        genre_id,
        row.length,
        row.rating,
        row.play_count,
    ])?;
    Ok(())
}

/// Read the CSV export at `path` and load every usable row.
///
/// The first line is discarded as a header. Rows shorter than the
/// expected field count are counted and skipped; everything else is an
/// error that aborts the pass. The file handle is released when the
/// reader drops, on every exit path.
pub fn load_csv(conn: &Connection, path: &Path) -> Result<LoadStats> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open input CSV {}", path.display()))?;

    let pb = create_spinner("Loading rows");
    let mut cache = RefCache::default();
    let mut stats = LoadStats::default();

    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        match TrackRow::from_record(&record) {
            Some(row) => {
                load_row(conn, &mut cache, &row)?;
                stats.loaded += 1;
            }
            None => stats.skipped += 1,
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "Loaded {} rows ({} skipped)",
        stats.loaded, stats.skipped
    ));
    Ok(stats)
}
