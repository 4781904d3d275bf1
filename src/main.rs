use clap::Parser;
use config::Cli;
use file_picker::impl_native::FilePickerNative;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use prediction_client::impl_fake::PredictionClientFake;
use prediction_client::impl_http::PredictionClientHttp;
use prediction_client::interface::PredictionClient;
use std::sync::Arc;
use upload_page::main::UploadPage;

mod config;
mod file_picker;
mod fonts;
mod image_file;
mod library;
mod prediction_client;
mod thumbnail;
mod upload_page;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config();

    LoggerTracing::install().map_err(|e| e.to_string())?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerTracing::new());

    let prediction_client: Arc<dyn PredictionClient + Send + Sync> = if config.offline {
        let _ = logger.info("Offline mode, predictions are random");
        Arc::new(PredictionClientFake::new(logger.clone()))
    } else {
        let _ = logger.info(&format!("Prediction endpoint: {}", config.endpoint));
        Arc::new(PredictionClientHttp::new(&config, logger.clone())?)
    };

    let file_picker = Arc::new(FilePickerNative::new(logger.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(upload_page::text::WINDOW_TITLE)
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        upload_page::text::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            fonts::install_thai_font(&cc.egui_ctx, &config.font_candidates, logger.clone());

            let ctx = cc.egui_ctx.clone();
            let repaint = Arc::new(move || ctx.request_repaint());

            Box::new(UploadPage::new(
                config,
                logger,
                file_picker,
                prediction_client,
                repaint,
            ))
        }),
    )?;

    Ok(())
}
