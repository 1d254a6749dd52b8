use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use serde::Serialize;

use disaster_stories::config::DEFAULT_DATA_PATH;

const ROWS: u64 = 5000;

/// `(name, response hours mean, casualty scale, recovery days mean)`
const DISASTERS: [(&str, f64, f64, f64); 7] = [
    ("Earthquake", 10.0, 900.0, 180.0),
    ("Flood", 18.0, 120.0, 60.0),
    ("Hurricane", 14.0, 300.0, 120.0),
    ("Wildfire", 8.0, 40.0, 45.0),
    ("Drought", 48.0, 20.0, 240.0),
    ("Landslide", 12.0, 80.0, 50.0),
    ("Extreme Heat", 24.0, 150.0, 20.0),
];

const COUNTRIES: [&str; 10] = [
    "Indonesia",
    "Philippines",
    "India",
    "Japan",
    "Chile",
    "United States",
    "Brazil",
    "Turkey",
    "Bangladesh",
    "Australia",
];

#[derive(Debug, Serialize)]
struct SampleRow {
    date: String,
    country: &'static str,
    disaster_type: &'static str,
    severity_index: f64,
    casualties: u64,
    economic_loss_usd: f64,
    response_time_hours: f64,
    aid_amount_usd: f64,
    recovery_days: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let start = NaiveDate::from_ymd_opt(2018, 1, 1).context("start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).context("end date")?;
    let span_days = (end - start).num_days() as u64;

    let mut writer = csv::Writer::from_path(DEFAULT_DATA_PATH)
        .with_context(|| format!("creating {DEFAULT_DATA_PATH}"))?;

    for _ in 0..ROWS {
        let offset = rng.next_u64() % (span_days + 1);
        let date = start
            .checked_add_days(Days::new(offset))
            .context("date out of range")?;
        let (disaster_type, response_mean, casualty_scale, recovery_mean) =
            DISASTERS[rng.below(DISASTERS.len())];

        let severity = round2(rng.uniform(1.0, 10.0));
        let share = severity / 10.0;
        let response = round2(response_mean * rng.uniform(0.3, 1.7));
        // Slower responses and harsher events cost more lives and take longer to recover from.
        let casualties = (casualty_scale * share * share * rng.uniform(0.0, 2.0)
            * (1.0 + response / 72.0))
            .round() as u64;
        let recovery = round2(recovery_mean * (0.5 + share) * rng.uniform(0.6, 1.4)
            + response * 0.5);

        writer.serialize(SampleRow {
            date: date.format("%Y-%m-%d").to_string(),
            country: COUNTRIES[rng.below(COUNTRIES.len())],
            disaster_type,
            severity_index: severity,
            casualties,
            economic_loss_usd: round2(share * rng.uniform(1e5, 5e8)),
            response_time_hours: response,
            aid_amount_usd: round2(share * rng.uniform(1e4, 5e7)),
            recovery_days: recovery,
        })?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {ROWS} disaster events ({} types, 2018–2024) to {DEFAULT_DATA_PATH}",
        DISASTERS.len()
    );
    Ok(())
}
