use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictError, PredictResponse, PredictionClient};
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use std::time::Duration;

type Responder = dyn Fn(&ImageFile) -> Result<PredictResponse, PredictError> + Send + Sync;

pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    latency: Duration,
    responder: Option<Box<Responder>>,
}

impl PredictionClientFake {
    /// Answers every upload with a random probability vector over the four labels.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
            latency: Duration::from_millis(600),
            responder: None,
        }
    }

    #[cfg(test)]
    pub fn with_responder<F>(logger: Arc<dyn Logger + Send + Sync>, responder: F) -> Self
    where
        F: Fn(&ImageFile) -> Result<PredictResponse, PredictError> + Send + Sync + 'static,
    {
        Self {
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
            latency: Duration::ZERO,
            responder: Some(Box::new(responder)),
        }
    }

    fn random_prediction(&self) -> Result<Vec<f64>, PredictError> {
        let mut rng = rand::rng();
        let weight_dist = Uniform::new(0.0, 1.0).map_err(|e| PredictError::Transport(e.to_string()))?;

        let weights: Vec<f64> = (0..4).map(|_| weight_dist.sample(&mut rng)).collect();
        let total: f64 = weights.iter().sum();

        if total <= f64::EPSILON {
            return Ok(vec![0.25; 4]);
        }

        Ok(weights.iter().map(|w| w / total).collect())
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, file: &ImageFile) -> Result<PredictResponse, PredictError> {
        let _ = self.logger.info(&format!("Predicting {}...", file.name));

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        match &self.responder {
            Some(responder) => responder(file),
            None => Ok(PredictResponse {
                predictions: Some(vec![self.random_prediction()?]),
            }),
        }
    }
}
