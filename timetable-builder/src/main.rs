use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use timetable_builder::domain::{Direction, DirectionalTimes, Timetable};
use timetable_builder::feed::{
    CalendarRow, FeedConfig, StopTimeRow, TripRow, build_schedule, read_rows,
};
use timetable_builder::notice::{ExtractorConfig, ScheduleExtractor};
use timetable_builder::stations::StationRegistry;

/// Line configuration file: the station registry plus an optional
/// direction-indicator map.
#[derive(Debug, Deserialize)]
struct LineConfig {
    #[serde(flatten)]
    registry: StationRegistry,
    #[serde(default)]
    directions: Option<HashMap<String, Direction>>,
}

#[derive(Debug, Serialize)]
struct Output {
    calendar: Timetable,
    #[serde(skip_serializing_if = "Option::is_none")]
    special: Option<DirectionalTimes>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (config_path, feed_dir, notice_path) = match args.as_slice() {
        [_, config, feed] => (config, feed, None),
        [_, config, feed, notice] => (config, feed, Some(notice)),
        _ => {
            eprintln!("usage: timetable-builder <line-config.json> <feed-dir> [notice.txt]");
            return ExitCode::FAILURE;
        }
    };

    let config_file = File::open(config_path).expect("failed to open line config");
    let line: LineConfig =
        serde_json::from_reader(config_file).expect("failed to parse line config");
    let feed_config = line
        .directions
        .map(FeedConfig::new)
        .unwrap_or_default();

    let feed_dir = Path::new(feed_dir);
    let calendar: Vec<CalendarRow> = read_table(feed_dir, "calendar.txt");
    let trips: Vec<TripRow> = read_table(feed_dir, "trips.txt");
    let stop_times: Vec<StopTimeRow> = read_table(feed_dir, "stop_times.txt");
    info!(
        services = calendar.len(),
        trips = trips.len(),
        stop_times = stop_times.len(),
        "feed tables loaded"
    );

    let timetable = build_schedule(&line.registry, &feed_config, &calendar, &trips, &stop_times);
    info!(schedule_keys = timetable.len(), "calendar timetable built");

    let special = notice_path.map(|path| {
        let text = std::fs::read_to_string(path).expect("failed to read notice text");
        let extractor = ScheduleExtractor::new(line.registry.clone(), ExtractorConfig::default())
            .expect("default extractor configuration is valid");
        let result = extractor.extract(&text);
        if result.is_none() {
            info!(path = %path, "no usable schedule extracted from notice");
        }
        result
    });

    let output = Output {
        calendar: timetable,
        special: special.flatten(),
    };
    let json = serde_json::to_string_pretty(&output).expect("timetable serializes to JSON");
    println!("{json}");

    ExitCode::SUCCESS
}

fn read_table<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Vec<T> {
    let path = dir.join(name);
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()));
    read_rows(file).unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}
