use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{BenchConfig, Fill, SequenceKind};
use crate::cursor::{self, count_steps, ForwardCursor};
use crate::error::HarnessError;
use crate::list::ForwardList;
use crate::reference::rotate_reference;
use crate::rotate::rotate_forward;

pub type Element = i64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Reference,
    ForwardSlice,
    ForwardList,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => write!(f, "slice::rotate_left"),
            Self::ForwardSlice => write!(f, "rotate_forward (slice)"),
            Self::ForwardList => write!(f, "rotate_forward (list)"),
        }
    }
}

/// A single timed rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub size: usize,
    pub split: usize,
    pub algorithm: Algorithm,
    /// Index of the original first element after rotating
    pub position: usize,
    /// Value at `position`
    pub new_mid: Element,
    /// Value at the front after rotating
    pub first: Element,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub measurements: Vec<Measurement>,
}

impl Report {
    /// Total time spent per size and algorithm, in order of first appearance.
    pub fn totals(&self) -> Vec<((usize, Algorithm), Duration)> {
        let mut totals: Vec<((usize, Algorithm), Duration)> = vec![];

        for m in &self.measurements {
            let key = (m.size, m.algorithm);
            match totals.iter_mut().find(|(k, _)| *k == key) {
                Some((_, total)) => *total += m.elapsed,
                None => totals.push((key, m.elapsed)),
            }
        }

        totals
    }
}

pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Result<Self, HarnessError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Rotates every configured size at every split point with both the
    /// reference and the forward rotation.
    #[tracing::instrument(skip(self), fields(sequence = ?self.config.sequence))]
    pub fn run(&self) -> Result<Report, HarnessError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut measurements = vec![];

        for &size in self.config.sizes.iter() {
            let original = populate(self.config.fill, size, &mut rng);

            tracing::info!(size, "Rotating sequence");

            for split in self.config.split_points(size)? {
                let (reference, expected) = measure_reference(&original, split);
                let (forward, actual) = match self.config.sequence {
                    SequenceKind::Slice => measure_slice(&original, split),
                    SequenceKind::List => measure_list(&original, split),
                };

                let agrees = expected == actual
                    && reference.position == forward.position;

                if self.config.verify && !agrees {
                    tracing::error!(size, split, "Rotation mismatch");
                    return Err(HarnessError::Mismatch { size, split });
                }

                tracing::debug!(
                    size,
                    split,
                    reference = ?reference.elapsed,
                    forward = ?forward.elapsed,
                    "Measured split"
                );

                measurements.push(reference);
                measurements.push(forward);
            }
        }

        Ok(Report { measurements })
    }
}

fn populate(fill: Fill, size: usize, rng: &mut impl Rng) -> Vec<Element> {
    match fill {
        Fill::Iota => (0..size as Element).collect(),
        Fill::Random => (0..size).map(|_| rng.gen()).collect(),
    }
}

fn measure_reference(
    original: &[Element],
    split: usize,
) -> (Measurement, Vec<Element>) {
    let mut data = original.to_vec();

    let start = Instant::now();
    let position = rotate_reference(&mut data, split);
    let elapsed = start.elapsed();

    let measurement = Measurement {
        size: data.len(),
        split,
        algorithm: Algorithm::Reference,
        position,
        new_mid: data[position],
        first: data[0],
        elapsed,
    };

    (measurement, data)
}

fn measure_slice(
    original: &[Element],
    split: usize,
) -> (Measurement, Vec<Element>) {
    let mut data = original.to_vec();
    let size = data.len();

    let (first, last) = cursor::bounds(&mut data);
    let measurement = measure_forward(
        Algorithm::ForwardSlice,
        size,
        split,
        first,
        last,
    );

    (measurement, data)
}

fn measure_list(
    original: &[Element],
    split: usize,
) -> (Measurement, Vec<Element>) {
    let mut list: ForwardList<Element> = original.iter().copied().collect();

    let (first, last) = list.bounds();
    let measurement = measure_forward(
        Algorithm::ForwardList,
        original.len(),
        split,
        first,
        last,
    );

    (measurement, list.to_vec())
}

/// Times one forward rotation. Moving to the split point happens before the
/// clock starts.
fn measure_forward<C>(
    algorithm: Algorithm,
    size: usize,
    split: usize,
    first: C,
    last: C,
) -> Measurement
where
    C: ForwardCursor<Item = Element>,
{
    let middle = cursor::advanced(first.clone(), split);

    let start = Instant::now();
    let rotated_first = rotate_forward(first.clone(), middle, last);
    let elapsed = start.elapsed();

    Measurement {
        size,
        split,
        algorithm,
        position: count_steps(first.clone(), &rotated_first),
        new_mid: rotated_first.get(),
        first: first.get(),
        elapsed,
    }
}
