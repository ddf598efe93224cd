use rg_core::GenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sampler configuration error: {0}")]
    Config(String),

    #[error("sample {index} failed: {source}")]
    Gen {
        index:  usize,
        #[source]
        source: GenError,
    },
}

pub type SampleResult<T> = Result<T, SampleError>;
