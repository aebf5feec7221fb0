use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// `<output>/run-<YYYY-MM-DD_HH-MM-SS>_<host>-<port>` for the current time.
#[must_use]
pub fn resolve_run_dir(output: &Path, host: &str, port: u16) -> PathBuf {
    output.join(run_dir_name(&Local::now(), host, port))
}

#[must_use]
pub fn run_dir_name<Tz>(now: &DateTime<Tz>, host: &str, port: u16) -> String
where
    Tz: TimeZone,
{
    let stamp = format!(
        "{:04}-{:02}-{:02}_{:02}-{:02}-{:02}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    format!("run-{}_{}", stamp, sanitize_host_port(host, port))
}

fn sanitize_host_port(host: &str, port: u16) -> String {
    let sanitized: String = host
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => ch,
            _ => '-',
        })
        .collect();
    let host = if sanitized.is_empty() {
        "unknown-host".to_owned()
    } else {
        sanitized
    };
    format!("{}-{}", host, port)
}
