use std::fs;
use std::hint::black_box;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::config::Config;
use crate::decoder::Decoder;
use crate::error::{BenchError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SourceResult {
    pub name: String,
    pub min_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub results: Vec<SourceResult>,
    pub geometric_mean: f64,
}

/// Runs `trial` `repetitions` times in a row and returns the wall-clock
/// duration of each run in seconds. The first failing trial aborts.
pub fn time_trials<F>(repetitions: usize, mut trial: F) -> Result<Vec<f64>>
where
    F: FnMut() -> Result<()>,
{
    if repetitions == 0 {
        return Err(BenchError::NoRepetitions);
    }
    let mut samples = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        let t0 = Instant::now();
        trial()?;
        let t1 = Instant::now();
        samples.push((t1 - t0).as_secs_f64());
    }
    Ok(samples)
}

fn minimum(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::min)
}

/// Times reading and decoding `path` and reports the best of `repetitions`
/// trials as `<name> <seconds> seconds`.
pub fn measure_source<D, W>(
    name: &str,
    path: &Path,
    repetitions: usize,
    decoder: &D,
    out: &mut W,
) -> Result<f64>
where
    D: Decoder,
    W: Write,
{
    info!("measuring {} from {}", name, path.display());
    let samples = time_trials(repetitions, || {
        let input = fs::read(path).map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value = decoder.decode(&input).map_err(|source| BenchError::Parse {
            name: name.to_string(),
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        drop(black_box(value));
        Ok(())
    })?;
    for (trial, sample) in samples.iter().enumerate() {
        debug!("{} trial {}: {:.9}s", name, trial, sample);
    }

    let min_time = minimum(&samples).ok_or(BenchError::NoRepetitions)?;
    writeln!(out, "{} {:.6} seconds", name, min_time)?;
    Ok(min_time)
}

/// Geometric mean of the per-source minimum times.
///
/// Fails on an empty slice or on any value that is not a finite positive
/// number, since the root of such a product is meaningless.
pub fn aggregate(min_times: &[f64]) -> Result<f64> {
    if min_times.is_empty() {
        return Err(BenchError::EmptyAggregate);
    }
    if let Some(&bad) = min_times.iter().find(|t| !(t.is_finite() && **t > 0.0)) {
        return Err(BenchError::NonPositiveTime(bad));
    }
    // summed in log space so long runs of small times cannot underflow to 0
    let log_sum: f64 = min_times.iter().map(|t| t.ln()).sum();
    Ok((log_sum / min_times.len() as f64).exp())
}

/// Measures every configured source in order, then prints the geometric mean
/// as the last line. Stops at the first failing source.
pub fn run<D, W>(config: &Config, decoder: &D, out: &mut W) -> Result<Summary>
where
    D: Decoder,
    W: Write,
{
    config.validate()?;

    let mut results = Vec::with_capacity(config.sources.len());
    for name in &config.sources {
        let path = config.path_for(name);
        let min_time = measure_source(name, &path, config.repetitions, decoder, out)?;
        results.push(SourceResult {
            name: name.clone(),
            min_time,
        });
    }

    let min_times: Vec<f64> = results.iter().map(|r| r.min_time).collect();
    let geometric_mean = aggregate(&min_times)?;
    writeln!(out, "Total (G.M): {:.6}", geometric_mean)?;

    Ok(Summary {
        results,
        geometric_mean,
    })
}
