use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Appends one human-readable timing line, creating the file on first use.
pub fn append_timing(path: &Path, label: &str, elapsed: Duration) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "{}: {:.2} seconds", label, elapsed.as_secs_f64())
}
