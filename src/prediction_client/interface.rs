use crate::image_file::ImageFile;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Option<Vec<Vec<f64>>>,
}

impl PredictResponse {
    /// Only the first probability vector of a response is ever used.
    pub fn first_prediction(&self) -> Option<&[f64]> {
        self.predictions
            .as_ref()
            .and_then(|predictions| predictions.first())
            .map(Vec::as_slice)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

pub trait PredictionClient {
    fn predict(&self, file: &ImageFile) -> Result<PredictResponse, PredictError>;
}
