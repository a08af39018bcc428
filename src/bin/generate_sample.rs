use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Weekdays starting at `start`, `count` of them.
fn trading_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start
        .iter_days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .take(count)
        .collect()
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_indexes.csv".to_string());

    let mut rng = SimpleRng::new(42);

    // (name, starting level, daily volatility)
    let indexes: [(&str, f64, f64); 14] = [
        ("NIFTY 50", 21700.0, 0.009),
        ("NIFTY NEXT 50", 55600.0, 0.011),
        ("NIFTY 100", 22100.0, 0.009),
        ("NIFTY 200", 11900.0, 0.010),
        ("NIFTY 500", 19600.0, 0.010),
        ("NIFTY MIDCAP 100", 46800.0, 0.013),
        ("NIFTY SMALLCAP 100", 15400.0, 0.015),
        ("NIFTY BANK", 48100.0, 0.012),
        ("NIFTY IT", 35900.0, 0.014),
        ("NIFTY AUTO", 18900.0, 0.012),
        ("NIFTY PHARMA", 17600.0, 0.011),
        ("NIFTY FMCG", 56400.0, 0.008),
        ("NIFTY METAL", 8000.0, 0.017),
        ("NIFTY REALTY", 800.0, 0.020),
    ];

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;
    let days = trading_days(start, 120);
    // One missing quote per index lands somewhere in the middle of the range.
    let gap_day = days.len() / 2;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["index_name", "index_date", "closing_index_value"])?;

    let mut rows = 0usize;
    // Interleave indexes per day, the way an exchange dump lists them.
    let mut levels: Vec<f64> = indexes.iter().map(|&(_, level, _)| level).collect();
    for (day_no, day) in days.iter().enumerate() {
        let date = day.format("%Y-%m-%d").to_string();
        for (i, &(name, _, volatility)) in indexes.iter().enumerate() {
            levels[i] *= 1.0 + rng.gauss(0.0002, volatility);
            let value = if day_no == gap_day + i {
                "-".to_string()
            } else {
                format!("{:.2}", levels[i])
            };
            writer.write_record([name, date.as_str(), value.as_str()])?;
            rows += 1;
        }
    }
    writer.flush()?;

    let (first, last) = days
        .first()
        .zip(days.last())
        .context("no trading days generated")?;
    println!(
        "Wrote {rows} rows for {} indexes ({first} to {last}) to {output_path}",
        indexes.len()
    );
    Ok(())
}
