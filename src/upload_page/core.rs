use crate::config::Config;
use crate::image_file::ImageFile;
use crate::prediction_client::interface::{PredictError, PredictResponse};
use crate::upload_page::clock::format_clock;
use crate::upload_page::result_view::{render_result, ResultView};
use chrono::{DateTime, Local};
use egui::ColorImage;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded preview pixels. Debug output shows only the size.
#[derive(Clone)]
pub struct ThumbnailImage(pub Arc<ColorImage>);

impl ThumbnailImage {
    pub fn new(image: ColorImage) -> Self {
        Self(Arc::new(image))
    }
}

impl fmt::Debug for ThumbnailImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0.size[0], self.0.size[1])
    }
}

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(ThumbnailImage),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultSlot {
    #[default]
    Empty,
    InProgress,
    Rendered(ResultView),
    NoResult,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct PreviewCard {
    pub id: CardId,
    /// 1-based, in selection order.
    pub position: usize,
    pub file: ImageFile,
    pub thumbnail: Thumbnail,
    pub result: ResultSlot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    TooManyFiles { max_files: usize },
    /// Dismissing this one reloads the page.
    UnsupportedFileType,
    NoFileSelected,
    ConfirmReset,
}

#[derive(Debug, Clone)]
pub struct Model {
    pub cards: Vec<PreviewCard>,
    pub card_container_visible: bool,
    pub predict_button_visible: bool,
    pub again_button_visible: bool,
    pub file_picker_visible: bool,
    pub dialog: Option<Dialog>,
    pub clock: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            cards: vec![],
            card_container_visible: false,
            predict_button_visible: false,
            again_button_visible: false,
            file_picker_visible: true,
            dialog: None,
            clock: String::new(),
        }
    }
}

impl Model {
    pub fn card(&self, card_id: CardId) -> Option<&PreviewCard> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    fn card_mut(&mut self, card_id: CardId) -> Option<&mut PreviewCard> {
        self.cards.iter_mut().find(|card| card.id == card_id)
    }

    /// Leaves the file picker's visibility alone.
    fn clear_selection(&mut self) {
        self.cards.clear();
        self.card_container_visible = false;
        self.predict_button_visible = false;
        self.again_button_visible = false;
    }

    /// Same as reloading the page; only the clock survives.
    fn reloaded(self) -> Self {
        Self {
            clock: self.clock,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    Tick(DateTime<Local>),
    PickFilesClicked,
    FilesSelected(Vec<ImageFile>),
    ThumbnailLoaded {
        card_id: CardId,
        result: Result<ThumbnailImage, String>,
    },
    PredictClicked,
    PredictionDone {
        card_id: CardId,
        result: Result<PredictResponse, PredictError>,
    },
    AgainClicked,
    ResetConfirmed,
    ResetDeclined,
    AlertDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeTick,
    PickFiles,
    LoadThumbnail { card_id: CardId, path: PathBuf },
    SubmitPrediction { card_id: CardId, file: ImageFile },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![Effect::SubscribeTick])
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let mut model = model;

    match msg {
        Msg::Tick(now) => {
            model.clock = format_clock(&now);
            (model, vec![])
        }

        Msg::PickFilesClicked => (model, vec![Effect::PickFiles]),

        Msg::FilesSelected(files) => {
            if files.len() > config.max_files {
                model.clear_selection();
                model.dialog = Some(Dialog::TooManyFiles {
                    max_files: config.max_files,
                });
                return (model, vec![]);
            }

            if files.is_empty() {
                model.clear_selection();
                return (model, vec![]);
            }

            if files.iter().any(|file| !file.is_jpeg()) {
                model.dialog = Some(Dialog::UnsupportedFileType);
                return (model, vec![]);
            }

            model.card_container_visible = true;
            model.predict_button_visible = true;
            model.again_button_visible = false;

            model.cards = files
                .into_iter()
                .enumerate()
                .map(|(index, file)| PreviewCard {
                    id: CardId::new(),
                    position: index + 1,
                    file,
                    thumbnail: Thumbnail::Loading,
                    result: ResultSlot::Empty,
                })
                .collect();

            let effects = model
                .cards
                .iter()
                .map(|card| Effect::LoadThumbnail {
                    card_id: card.id,
                    path: card.file.path.clone(),
                })
                .collect();

            (model, effects)
        }

        Msg::ThumbnailLoaded { card_id, result } => {
            if let Some(card) = model.card_mut(card_id) {
                card.thumbnail = match result {
                    Ok(image) => Thumbnail::Ready(image),
                    Err(message) => Thumbnail::Failed(message),
                };
            }
            (model, vec![])
        }

        Msg::PredictClicked => {
            if model.cards.is_empty() {
                model.dialog = Some(Dialog::NoFileSelected);
                return (model, vec![]);
            }

            model.file_picker_visible = false;

            let effects = model
                .cards
                .iter_mut()
                .map(|card| {
                    card.result = ResultSlot::InProgress;
                    Effect::SubmitPrediction {
                        card_id: card.id,
                        file: card.file.clone(),
                    }
                })
                .collect();

            model.again_button_visible = true;

            (model, effects)
        }

        Msg::PredictionDone { card_id, result } => {
            if let Some(card) = model.card_mut(card_id) {
                card.result = match result {
                    Ok(response) => match response.first_prediction() {
                        Some(prediction) => ResultSlot::Rendered(render_result(prediction)),
                        None => ResultSlot::NoResult,
                    },
                    Err(error) => ResultSlot::Failed(error.to_string()),
                };
            }
            (model, vec![])
        }

        Msg::AgainClicked => {
            model.dialog = Some(Dialog::ConfirmReset);
            (model, vec![])
        }

        Msg::ResetConfirmed => {
            model.clear_selection();
            model.file_picker_visible = true;
            model.dialog = None;
            (model, vec![])
        }

        Msg::ResetDeclined => {
            model.dialog = None;
            (model, vec![])
        }

        Msg::AlertDismissed => match model.dialog.take() {
            Some(Dialog::UnsupportedFileType) => (model.reloaded(), vec![]),
            _ => (model, vec![]),
        },
    }
}
