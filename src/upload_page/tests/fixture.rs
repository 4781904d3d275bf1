use crate::config::Config;
use crate::file_picker::{impl_fake::FilePickerFake, interface::FilePicker};
use crate::image_file::ImageFile;
use crate::library::logger::impl_fake::LoggerFake;
use crate::prediction_client::impl_fake::PredictionClientFake;
use crate::prediction_client::interface::{PredictError, PredictResponse, PredictionClient};
use crate::upload_page::core::{Msg, PreviewCard};
use crate::upload_page::run_effect::RunEffect;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub fn jpeg(name: &str) -> ImageFile {
    ImageFile::from_path(PathBuf::from("/photos").join(name))
}

pub fn jpegs(count: usize) -> Vec<ImageFile> {
    (1..=count).map(|i| jpeg(&format!("eye-{}.jpg", i))).collect()
}

pub fn positions(cards: &[PreviewCard]) -> Vec<usize> {
    cards.iter().map(|card| card.position).collect()
}

pub fn response(predictions: Vec<Vec<f64>>) -> PredictResponse {
    PredictResponse {
        predictions: Some(predictions),
    }
}

pub struct Fixture {
    pub config: Config,
    pub logger: LoggerFake,
    pub repaints: Arc<AtomicUsize>,
    pub run_effect: RunEffect,
    pub msg_receiver: Receiver<Msg>,
}

impl Fixture {
    pub fn new<F>(picked: Vec<PathBuf>, responder: F) -> Self
    where
        F: Fn(&ImageFile) -> Result<PredictResponse, PredictError> + Send + Sync + 'static,
    {
        let config = Config::default();
        let logger = LoggerFake::new();
        let file_picker: Arc<dyn FilePicker + Send + Sync> = Arc::new(FilePickerFake::new(picked));
        let prediction_client: Arc<dyn PredictionClient + Send + Sync> = Arc::new(
            PredictionClientFake::with_responder(Arc::new(logger.clone()), responder),
        );
        let repaints = Arc::new(AtomicUsize::new(0));
        let repaint_counter = repaints.clone();
        let (msg_sender, msg_receiver) = channel();

        let run_effect = RunEffect::new(
            config.clone(),
            Arc::new(logger.clone()),
            file_picker,
            prediction_client,
            msg_sender,
            Arc::new(move || {
                repaint_counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        Self {
            config,
            logger,
            repaints,
            run_effect,
            msg_receiver,
        }
    }

    pub fn repaint_count(&self) -> usize {
        self.repaints.load(Ordering::SeqCst)
    }
}
