use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("node allocation failed after {allocated} of {capacity} slots")]
    AllocationFailure { allocated: usize, capacity: usize },
}

pub type ChainResult<T> = Result<T, ChainError>;
