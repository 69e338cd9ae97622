use anyhow::{Context, Result};
use serde::Serialize;

/// One output row, column names matching the dashboard's dataset schema.
#[derive(Serialize)]
struct LaunchRow<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Booster generations in flight order: (category, flights, success rate,
/// payload range in kg).
const ERAS: [(&str, u32, f64, (f64, f64)); 5] = [
    ("v1.0", 5, 0.2, (0.0, 700.0)),
    ("v1.1", 15, 0.35, (500.0, 4500.0)),
    ("FT", 24, 0.75, (2000.0, 9600.0)),
    ("B4", 11, 0.55, (2000.0, 7000.0)),
    ("B5", 6, 0.9, (3000.0, 9600.0)),
];

/// Launch sites with their share of flights.
const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.45),
    ("KSC LC-39A", 0.25),
    ("VAFB SLC-4E", 0.18),
    ("CCAFS SLC-40", 0.12),
];

/// Seeded SplitMix64 stream; the same seed always writes the same file.
struct LaunchRng(u64);

impl LaunchRng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        // Top 53 bits give a uniform float in [0, 1).
        (z >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Pick an entry by weight.
    fn weighted<'a>(&mut self, choices: &[(&'a str, f64)]) -> &'a str {
        let mut r = self.next_f64() * choices.iter().map(|(_, w)| w).sum::<f64>();
        for &(name, w) in choices {
            if r < w {
                return name;
            }
            r -= w;
        }
        choices[choices.len() - 1].0
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());

    let mut rng = LaunchRng(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut flight_number = 0u32;
    let mut serial = 1000u32;
    for &(category, flights, success_rate, (lo, hi)) in &ERAS {
        for _ in 0..flights {
            flight_number += 1;
            serial += 1;
            let payload = (rng.uniform(lo, hi) * 10.0).round() / 10.0;
            writer
                .serialize(LaunchRow {
                    flight_number,
                    launch_site: rng.weighted(&SITES),
                    class: u8::from(rng.next_f64() < success_rate),
                    payload_mass_kg: payload,
                    booster_version: format!("F9 {category} B{serial}"),
                    booster_version_category: category,
                })
                .with_context(|| format!("writing flight {flight_number}"))?;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {flight_number} launch records to {output_path}");
    Ok(())
}
