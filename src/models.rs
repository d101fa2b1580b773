//! Data model for the flat CSV export.
//!
//! The export is positional: name, artist, album, play count, rating,
//! length, one unused column, genre. All fields are kept as raw strings;
//! the storage layer coerces the numeric ones on write.

use csv::StringRecord;

/// Minimum number of fields a usable row must carry.
pub const MIN_FIELDS: usize = 8;

/// One data row from the track export.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackRow {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub play_count: String,
    pub rating: String,
    pub length: String,
    pub genre: String,
}

impl TrackRow {
    /// Build a row from a CSV record.
    ///
    /// Returns `None` for records with fewer than [`MIN_FIELDS`] fields;
    /// those rows are dropped by the loader rather than treated as errors.
    /// Column 6 of the export is unused and ignored here.
    pub fn from_record(record: &StringRecord) -> Option<TrackRow> {
        if record.len() < MIN_FIELDS {
            return None;
        }
        Some(TrackRow {
            name: record[0].to_string(),
            artist: record[1].to_string(),
            album: record[2].to_string(),
            play_count: record[3].to_string(),
            rating: record[4].to_string(),
            length: record[5].to_string(),
            genre: record[7].to_string(),
        })
    }
}
