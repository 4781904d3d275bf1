use crate::upload_page::core::{CardId, Dialog, Model, Msg, PreviewCard, ResultSlot, Thumbnail};
use crate::upload_page::result_view::ResultView;
use crate::upload_page::text;
use egui::load::SizedTexture;
use egui::{Color32, RichText, TextureHandle, TextureOptions};
use std::collections::HashMap;

const CARD_WIDTH: f32 = 260.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 40, 40);

/// GPU textures for card thumbnails, dropped once their card is gone.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<CardId, TextureHandle>,
}

impl TextureCache {
    fn sync(&mut self, ctx: &egui::Context, model: &Model) {
        self.textures
            .retain(|card_id, _| model.cards.iter().any(|card| card.id == *card_id));

        for card in &model.cards {
            if let Thumbnail::Ready(image) = &card.thumbnail {
                self.textures.entry(card.id).or_insert_with(|| {
                    ctx.load_texture(
                        format!("thumbnail-{}", card.id),
                        (*image.0).clone(),
                        TextureOptions::LINEAR,
                    )
                });
            }
        }
    }

    fn get(&self, card_id: CardId) -> Option<&TextureHandle> {
        self.textures.get(&card_id)
    }
}

/// Draws the page and returns the messages produced by user input this frame.
pub fn render(ctx: &egui::Context, model: &Model, textures: &mut TextureCache) -> Vec<Msg> {
    let mut msgs = vec![];

    textures.sync(ctx, model);
    let textures: &TextureCache = textures;

    egui::TopBottomPanel::top("clock_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(text::WINDOW_TITLE);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(&model.clock).monospace().size(18.0));
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(model.dialog.is_none(), |ui| {
            render_controls(ui, model, &mut msgs);

            if model.card_container_visible {
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for card in &model.cards {
                            render_card(ui, card, textures);
                        }
                    });
                });
            }
        });
    });

    if let Some(dialog) = &model.dialog {
        render_dialog(ctx, dialog, &mut msgs);
    }

    msgs
}

fn render_controls(ui: &mut egui::Ui, model: &Model, msgs: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        if model.file_picker_visible && ui.button(text::PICK_FILES_BUTTON).clicked() {
            msgs.push(Msg::PickFilesClicked);
        }
        if model.predict_button_visible && ui.button(text::PREDICT_BUTTON).clicked() {
            msgs.push(Msg::PredictClicked);
        }
        if model.again_button_visible && ui.button(text::AGAIN_BUTTON).clicked() {
            msgs.push(Msg::AgainClicked);
        }
    });
}

fn render_card(ui: &mut egui::Ui, card: &PreviewCard, textures: &TextureCache) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(RichText::new(format!("🖼 {}", text::card_header(card.position))).strong());
            ui.label(RichText::new(&card.file.name).small().weak());

            match (&card.thumbnail, textures.get(card.id)) {
                (Thumbnail::Ready(_), Some(texture)) => {
                    ui.add(
                        egui::Image::new(SizedTexture::from_handle(texture))
                            .max_width(CARD_WIDTH)
                            .maintain_aspect_ratio(true),
                    );
                }
                (Thumbnail::Failed(reason), _) => {
                    ui.label(RichText::new(text::THUMBNAIL_FAILED).color(ERROR_COLOR))
                        .on_hover_text(reason.as_str());
                }
                _ => {
                    ui.spinner();
                }
            }

            ui.add_space(6.0);
            render_result_slot(ui, &card.result);
        });
    });
}

fn render_result_slot(ui: &mut egui::Ui, slot: &ResultSlot) {
    match slot {
        ResultSlot::Empty => {
            ui.label(RichText::new(text::RESULT_TITLE).strong());
        }
        ResultSlot::InProgress => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(text::PREDICTING);
            });
        }
        ResultSlot::Rendered(view) => render_result_view(ui, view),
        ResultSlot::NoResult => {
            ui.label(RichText::new(text::NO_RESULT).color(ERROR_COLOR));
        }
        ResultSlot::Failed(message) => {
            ui.label(RichText::new(text::prediction_failed(message)).color(ERROR_COLOR));
        }
    }
}

fn render_result_view(ui: &mut egui::Ui, view: &ResultView) {
    ui.label(RichText::new(text::RESULT_TITLE).strong());

    for row in &view.rows {
        ui.add_space(4.0);
        ui.label(RichText::new(row.display_name).strong());
        ui.add(
            egui::ProgressBar::new(row.fill())
                .desired_width(CARD_WIDTH)
                .text(row.percent_text.as_str()),
        )
        .on_hover_text(format!(
            "{} ({} - {})",
            row.value_now, row.value_min, row.value_max
        ));
    }
}

fn render_dialog(ctx: &egui::Context, dialog: &Dialog, msgs: &mut Vec<Msg>) {
    let (title, message, confirm) = match dialog {
        Dialog::TooManyFiles { max_files } => {
            (text::ALERT_TITLE, text::too_many_files(*max_files), false)
        }
        Dialog::UnsupportedFileType => (
            text::ALERT_TITLE,
            text::UNSUPPORTED_FILE_TYPE.to_string(),
            false,
        ),
        Dialog::NoFileSelected => (text::ALERT_TITLE, text::NO_FILE_SELECTED.to_string(), false),
        Dialog::ConfirmReset => (text::CONFIRM_TITLE, text::CONFIRM_RESET.to_string(), true),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(text::OK_BUTTON).clicked() {
                    msgs.push(if confirm {
                        Msg::ResetConfirmed
                    } else {
                        Msg::AlertDismissed
                    });
                }
                if confirm && ui.button(text::CANCEL_BUTTON).clicked() {
                    msgs.push(Msg::ResetDeclined);
                }
            });
        });
}
