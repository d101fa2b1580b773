//! Progress reporting for the load pass.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner that counts processed rows.
///
/// The row count is unknown until the file is exhausted, so this is a
/// spinner with a position counter rather than a bar.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{msg} {spinner} {pos} rows [{elapsed_precise}]")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
