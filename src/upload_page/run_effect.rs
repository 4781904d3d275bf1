use crate::config::Config;
use crate::file_picker::interface::FilePicker;
use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::thumbnail::load_thumbnail;
use crate::upload_page::core::{Effect, Msg, ThumbnailImage};
use chrono::Local;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub type Repaint = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    file_picker: Arc<dyn FilePicker + Send + Sync>,
    prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    msg_sender: Sender<Msg>,
    repaint: Repaint,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        msg_sender: Sender<Msg>,
        repaint: Repaint,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            file_picker,
            prediction_client,
            msg_sender,
            repaint,
        }
    }

    /// Blocks until the effect is finished; `SubscribeTick` runs until the page is gone.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeTick => loop {
                if !self.send(Msg::Tick(Local::now())) {
                    let _ = self.logger.info("Page closed, clock stopped");
                    return;
                }
                std::thread::sleep(self.config.clock_interval);
            },
            Effect::PickFiles => {
                let files = self
                    .file_picker
                    .pick_files()
                    .into_iter()
                    .map(ImageFile::from_path)
                    .collect();
                self.send(Msg::FilesSelected(files));
            }
            Effect::LoadThumbnail { card_id, path } => {
                let result = load_thumbnail(&path, self.config.thumbnail_size)
                    .map(ThumbnailImage::new)
                    .map_err(|e| {
                        let _ = self.logger.error(&format!(
                            "Thumbnail for {} failed: {}",
                            path.display(),
                            e
                        ));
                        e.to_string()
                    });
                self.send(Msg::ThumbnailLoaded { card_id, result });
            }
            Effect::SubmitPrediction { card_id, file } => {
                let result = self.prediction_client.predict(&file);
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Prediction for {} failed: {}", file.name, e));
                }
                self.send(Msg::PredictionDone { card_id, result });
            }
        }
    }

    fn send(&self, msg: Msg) -> bool {
        let sent = self.msg_sender.send(msg).is_ok();
        (self.repaint)();
        sent
    }
}
