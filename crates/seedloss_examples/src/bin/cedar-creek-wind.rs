use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{bail, Context};
use seedloss_examples::init_tracing;

/// Average yearly max wind speed during the week around September 20
/// (9/17 - 9/23) from the Cedar Creek E080 hourly climate file, tab
/// separated with the date in column 0 and wind speed in column 7.
///
/// Only years with all 7*24 = 168 hourly rows and fewer than 100 zero
/// readings count; long zero streaks indicate a sensor problem.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "e080_Hourly climate data.txt".to_string());
    let file = File::open(&path).with_context(|| format!("opening {path}"))?;

    let mut speeds_by_year: HashMap<u32, Vec<f64>> = HashMap::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let entries: Vec<&str> = line.split('\t').collect();
        if entries.len() < 8 {
            continue;
        }
        let date = entries[0];
        let speed = entries[7];
        if date == "Date" || date == "\"Date\"" {
            continue;
        }
        if speed.trim().is_empty() || speed.trim() == "." {
            continue;
        }

        let mut parts = date.split('/');
        let (Some(month), Some(day), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };
        let month: u32 = month.parse().with_context(|| format!("month in {date}"))?;
        let day: u32 = day.parse().with_context(|| format!("day in {date}"))?;
        let year: u32 = year.parse().with_context(|| format!("year in {date}"))?;
        let speed: f64 = speed.trim().parse().with_context(|| format!("speed {speed}"))?;

        if month != 9 || !(17..=23).contains(&day) {
            continue;
        }
        speeds_by_year.entry(year).or_default().push(speed);
    }

    let mut max_speeds = Vec::new();
    for speeds in speeds_by_year.values() {
        let zeros = speeds.iter().filter(|s| **s == 0.0).count();
        if speeds.len() == 168 && zeros < 100 {
            max_speeds.push(speeds.iter().cloned().fold(f64::MIN, f64::max));
        }
    }

    if max_speeds.is_empty() {
        bail!("no years with complete wind data in {path}");
    }

    println!("years with complete data: {}", max_speeds.len());
    println!(
        "average max wind speed: {}",
        max_speeds.iter().sum::<f64>() / max_speeds.len() as f64
    );

    Ok(())
}
