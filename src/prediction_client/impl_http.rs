use crate::config::Config;
use crate::image_file::{ImageFile, JPEG_MIME};
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictError, PredictResponse, PredictionClient};
use reqwest::blocking::{multipart, Client};
use std::sync::Arc;

pub struct PredictionClientHttp {
    endpoint: String,
    client: Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, PredictError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(transport)?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
            logger: logger.with_namespace("prediction_client").with_namespace("http"),
        })
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, file: &ImageFile) -> Result<PredictResponse, PredictError> {
        let bytes = std::fs::read(&file.path)?;

        let _ = self.logger.info(&format!(
            "POST {} file={} bytes={}",
            self.endpoint,
            file.name,
            bytes.len()
        ));

        let part = multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.mime.unwrap_or(JPEG_MIME))
            .map_err(transport)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status.as_u16()));
        }

        let body = response.text().map_err(transport)?;
        let parsed = serde_json::from_str::<PredictResponse>(&body)?;

        Ok(parsed)
    }
}

fn transport(error: reqwest::Error) -> PredictError {
    PredictError::Transport(error.to_string())
}
