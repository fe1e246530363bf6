//! Write a synthetic fish mercury dataset in the CEDEN column layout.
//!
//! Usage: `generate_sample [OUTPUT.csv]` (default `sample_fish.csv`).

use anyhow::{Context, Result};
use serde::Serialize;

/// SplitMix64: a 64-bit counter pushed through a mixing function. Small,
/// seedable and good enough for reproducible synthetic data.
struct SplitMix64(u64);

impl SplitMix64 {
    const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(Self::GAMMA);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Standard normal draw (Marsaglia polar method).
    fn normal(&mut self) -> f64 {
        loop {
            let u = 2.0 * self.unit() - 1.0;
            let v = 2.0 * self.unit() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                return u * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }
}

/// One output row, named after the CEDEN export columns.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "CompositeCommonName")]
    species: &'a str,
    #[serde(rename = "Result")]
    mercury_ppm: String,
    #[serde(rename = "TLAvgLength(mm)")]
    length_mm: String,
    latitude: String,
    longitude: String,
}

/// Species name, length range (mm), mercury = a · length_in^b, sample count.
const SPECIES: &[(&str, (f64, f64), f64, f64, usize)] = &[
    ("Bass: Largemouth", (200.0, 550.0), 0.004, 1.45, 120),
    ("Bass: Striped", (350.0, 900.0), 0.002, 1.55, 80),
    ("Catfish: Channel", (250.0, 700.0), 0.006, 1.10, 60),
    ("Sunfish: Bluegill", (80.0, 220.0), 0.015, 0.90, 70),
    ("Trout: Rainbow", (180.0, 500.0), 0.003, 1.05, 90),
    ("Carp: Common", (300.0, 750.0), 0.010, 0.80, 40),
];

/// A few sampling sites around California (lat, lon).
const SITES: &[(f64, f64)] = &[
    (38.05, -121.80),
    (37.80, -122.40),
    (39.10, -120.03),
    (36.60, -121.90),
    (34.25, -117.20),
    (40.60, -122.40),
    (33.10, -115.80),
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_fish.csv".to_string());
    let mut rng = SplitMix64(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for &(species, (min_len, max_len), a, b, count) in SPECIES {
        for _ in 0..count {
            let length_mm = rng.uniform(min_len, max_len);
            let noise = (0.25 * rng.normal()).exp();
            let mercury = a * (length_mm / 25.4).powf(b) * noise;
            let &(lat, lon) = rng.pick(SITES);

            writer.serialize(Row {
                species,
                mercury_ppm: format!("{mercury:.3}"),
                length_mm: format!("{length_mm:.0}"),
                latitude: format!("{:.4}", lat + 0.05 * rng.normal()),
                longitude: format!("{:.4}", lon + 0.05 * rng.normal()),
            })?;
            rows += 1;
        }
    }

    // Rows the viewer must reject.
    for (species, result) in [("", "0.2"), ("Perch: Yellow", "ND"), ("Perch: Yellow", "")] {
        writer.serialize(Row {
            species,
            mercury_ppm: result.to_string(),
            length_mm: "150".to_string(),
            latitude: "37.5".to_string(),
            longitude: "-122.0".to_string(),
        })?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} samples ({} species) to {output_path}", SPECIES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SplitMix64(7);
        let mut b = SplitMix64(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_ne!(SplitMix64(7).next_u64(), SplitMix64(8).next_u64());
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = SplitMix64(42);
        for _ in 0..1000 {
            let u = rng.uniform(200.0, 550.0);
            assert!((200.0..=550.0).contains(&u));
            assert!(rng.normal().is_finite());
            assert!(SITES.contains(rng.pick(SITES)));
        }
    }

    #[test]
    fn normal_draws_are_centred() {
        let mut rng = SplitMix64(1);
        let n = 20_000;
        let mean = (0..n).map(|_| rng.normal()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
    }
}
