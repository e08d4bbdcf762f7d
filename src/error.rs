use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("No sequence sizes configured")]
    NoSizes,

    #[error("At least one split point per size is required")]
    NoSplits,

    #[error("Split {split} out of range for {size} elements")]
    SplitOutOfRange { size: usize, split: usize },

    #[error("Mismatch rotating {size} elements at {split}")]
    Mismatch { size: usize, split: usize },
}
