use crate::config::Config;
use crate::file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::upload_page::core::{init, transition, CardId, Effect, Model, Msg, ResultSlot};
use crate::upload_page::render::{render, TextureCache};
use crate::upload_page::run_effect::{Repaint, RunEffect};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub struct UploadPage {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    model: Model,
    msg_receiver: Receiver<Msg>,
    run_effect: RunEffect,
    textures: TextureCache,
}

impl UploadPage {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        repaint: Repaint,
    ) -> Self {
        let logger = logger.with_namespace("upload_page");
        let (msg_sender, msg_receiver) = channel();

        let run_effect = RunEffect::new(
            config.clone(),
            logger.clone(),
            file_picker,
            prediction_client,
            msg_sender,
            repaint,
        );

        let (model, effects) = init();

        let page = Self {
            config,
            logger,
            model,
            msg_receiver,
            run_effect,
            textures: TextureCache::default(),
        };

        page.execute_effects(effects);

        let _ = page.logger.info("Upload page ready");

        page
    }

    #[cfg(test)]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Applies every message the effect threads have sent so far.
    pub fn drain_messages(&mut self) {
        while let Ok(msg) = self.msg_receiver.try_recv() {
            self.dispatch(msg);
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let is_tick = matches!(msg, Msg::Tick(_));
        let finished_card = match &msg {
            Msg::PredictionDone { card_id, .. } => Some(*card_id),
            _ => None,
        };

        if !is_tick {
            let _ = self.logger.info(&format!("msg: {:?}", msg));
        }

        let model = std::mem::take(&mut self.model);
        let (new_model, effects) = transition(&self.config, model, msg);
        self.model = new_model;

        if !is_tick {
            let _ = self.logger.info(&format!("effects: {:?}", effects));
        }

        if let Some(card_id) = finished_card {
            self.log_top_prediction(card_id);
        }

        self.execute_effects(effects);
    }

    fn log_top_prediction(&self, card_id: CardId) {
        let Some(card) = self.model.card(card_id) else {
            let _ = self
                .logger
                .info(&format!("Dropped result for removed card {}", card_id));
            return;
        };

        if let ResultSlot::Rendered(view) = &card.result {
            if let Some(row) = view.top_row() {
                let _ = self.logger.info(&format!(
                    "{}: top prediction {} {}",
                    card.file.name,
                    row.label.unwrap_or(row.display_name),
                    row.percent_text
                ));
            }
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                // native file dialogs must open on the UI thread on macOS
                Effect::PickFiles => self.run_effect.run_effect(effect),
                effect => {
                    let run_effect = self.run_effect.clone();
                    std::thread::spawn(move || run_effect.run_effect(effect));
                }
            }
        }
    }
}

impl eframe::App for UploadPage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();

        let msgs = render(ctx, &self.model, &mut self.textures);
        for msg in msgs {
            self.dispatch(msg);
        }

        // PickFiles answers synchronously
        self.drain_messages();
    }
}
