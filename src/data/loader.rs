use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{FishDataset, RawRecord, Sample};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to obtain the raw CSV text. Malformed content is never an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and validate a sample CSV from disk.
pub fn load_file(path: &Path) -> Result<FishDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FishDataset::from_samples(parse_fish_data(&text)))
}

/// Parse CSV text into validated samples, in row order.
///
/// Expected header columns:
/// `CompositeCommonName,Result,TLAvgLength(mm),latitude,longitude`.
/// Other columns are ignored. Rows that cannot be decoded are logged and
/// skipped; rows with a missing or non-numeric field are dropped silently.
/// Never fails: unusable input yields an empty vector.
pub fn parse_fish_data(csv_text: &str) -> Vec<Sample> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut samples = Vec::new();
    let mut rejected = 0usize;

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("CSV row {row_no}: {e}");
                rejected += 1;
                continue;
            }
        };
        match validate_record(&raw) {
            Some(sample) => samples.push(sample),
            None => rejected += 1,
        }
    }

    if rejected > 0 {
        log::debug!("Dropped {rejected} rows with missing or non-numeric fields");
    }
    samples
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

/// Build a [`Sample`] from a raw row, or `None` if any field is unusable.
fn validate_record(raw: &RawRecord) -> Option<Sample> {
    let species = raw.species.as_deref()?.trim();
    if species.is_empty() {
        return None;
    }
    Some(Sample {
        species: species.to_string(),
        mercury_ppm: numeric_field(raw.mercury.as_deref())?,
        length_mm: numeric_field(raw.length_mm.as_deref())?,
        latitude: numeric_field(raw.latitude.as_deref())?,
        longitude: numeric_field(raw.longitude.as_deref())?,
    })
}

fn numeric_field(field: Option<&str>) -> Option<f64> {
    match field {
        Some(s) if !s.is_empty() => parse_leading_f64(s),
        _ => None,
    }
}

/// Parse the longest numeric prefix of `s` (after leading whitespace).
///
/// `"12.5 mm"` gives 12.5, `"abc"` gives `None`. Non-finite results,
/// including overflowing exponents, are rejected.
pub(crate) fn parse_leading_f64(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if end < b.len() && (b[end] == b'+' || b[end] == b'-') {
        end += 1;
    }
    let int_end = digits_from(end);
    let has_int = int_end > end;
    end = int_end;

    let mut has_frac = false;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(end + 1);
        has_frac = frac_end > end + 1;
        if has_int || has_frac {
            end = frac_end;
        }
    }
    if !has_int && !has_frac {
        return None;
    }

    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut i = end + 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end > i {
            end = exp_end;
        }
    }

    t[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
