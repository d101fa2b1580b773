use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Instant;

use trackdb::load::load_csv;
use trackdb::schema::init_schema;

#[derive(Parser)]
#[command(name = "trackdb")]
#[command(about = "Load a flat music-track CSV export into a normalized SQLite database")]
struct Args {
    /// Input CSV export (name, artist, album, play count, rating, length, unused, genre)
    #[arg(default_value = "tracks.csv")]
    source: PathBuf,

    /// Output database; existing tables are dropped each run, not merged
    #[arg(default_value = "trackdb.sqlite")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();

    println!("Opening track database: {:?}", args.output);
    let mut conn =
        Connection::open(&args.output).context("Failed to open track database")?;

    init_schema(&conn)?;

    // One transaction for the whole pass: an error anywhere rolls back
    // on drop and nothing is committed.
    let tx = conn.transaction()?;
    let stats = load_csv(&tx, &args.source)?;
    tx.commit()?;

    let elapsed = start.elapsed();
    let file_size = std::fs::metadata(&args.output)?.len();

    println!("\n{:=<60}", "");
    println!("Track database created successfully: {:?}", args.output);
    println!("  Rows loaded: {}", stats.loaded);
    println!("  Rows skipped: {}", stats.skipped);
    println!("  Output size: {:.2} MB", file_size as f64 / 1_048_576.0);
    println!("  Elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("{:=<60}", "");

    Ok(())
}
