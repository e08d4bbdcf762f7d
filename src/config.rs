use serde::{Deserialize, Serialize};

pub use self::json_wrapper::JsonStrWrapper;
use crate::error::HarnessError;

mod json_wrapper;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bench: BenchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Lengths of the sequences to rotate
    pub sizes: JsonStrWrapper<Vec<usize>>,
    /// Number of split points per size
    pub splits: usize,
    /// Subtracted from every evenly spaced split point
    pub trim: usize,
    pub sequence: SequenceKind,
    pub fill: Fill,
    pub seed: Option<u64>,
    /// Check every forward rotation against the reference
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: JsonStrWrapper(vec![100, 1_000, 10_000, 100_000]),
            splits: 10,
            trim: 2,
            sequence: SequenceKind::Slice,
            fill: Fill::Iota,
            seed: None,
            verify: true,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.sizes.is_empty() {
            return Err(HarnessError::NoSizes);
        }

        if self.splits == 0 {
            return Err(HarnessError::NoSplits);
        }

        for &size in self.sizes.iter() {
            self.split_points(size)?;
        }

        Ok(())
    }

    /// Split points `(size / splits) * i - trim` for `i` in `1..=splits`.
    ///
    /// Every point must leave both blocks non-empty.
    pub fn split_points(
        &self,
        size: usize,
    ) -> Result<Vec<usize>, HarnessError> {
        let stride = size / self.splits.max(1);

        (1..=self.splits)
            .map(|i| {
                let raw = stride * i;
                match raw.checked_sub(self.trim) {
                    Some(split) if split > 0 && split < size => Ok(split),
                    _ => Err(HarnessError::SplitOutOfRange {
                        size,
                        split: raw.saturating_sub(self.trim),
                    }),
                }
            })
            .collect()
    }
}

/// Which sequence the forward rotation runs over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    Slice,
    List,
}

/// How sequences are populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// `0, 1, 2, ...`
    Iota,
    Random,
}
