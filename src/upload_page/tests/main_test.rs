use super::fixture::{jpegs, response};
use crate::config::Config;
use crate::file_picker::impl_fake::FilePickerFake;
use crate::library::logger::impl_fake::LoggerFake;
use crate::prediction_client::impl_fake::PredictionClientFake;
use crate::prediction_client::interface::PredictError;
use crate::upload_page::core::{Msg, ResultSlot};
use crate::upload_page::main::UploadPage;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn page(logger: &LoggerFake) -> UploadPage {
    let prediction_client = PredictionClientFake::with_responder(Arc::new(logger.clone()), |file| {
        if file.name == "eye-2.jpg" {
            Err(PredictError::Transport("connection refused".to_string()))
        } else {
            Ok(response(vec![vec![0.1, 0.05, 0.8, 0.05]]))
        }
    });

    UploadPage::new(
        Config::default(),
        Arc::new(logger.clone()),
        Arc::new(FilePickerFake::new(vec![])),
        Arc::new(prediction_client),
        Arc::new(|| {}),
    )
}

fn drain_until<F>(page: &mut UploadPage, done: F)
where
    F: Fn(&UploadPage) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(page) {
        assert!(Instant::now() < deadline, "timed out waiting for page");
        page.drain_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn test_clock_is_filled_on_start() {
    let logger = LoggerFake::new();
    let mut page = page(&logger);

    drain_until(&mut page, |page| !page.model().clock.is_empty());

    assert_eq!(page.model().clock.len(), "00:00:00".len());
}

#[test]
fn test_predict_round_trip_through_effect_threads() {
    let logger = LoggerFake::new();
    let mut page = page(&logger);

    page.dispatch(Msg::FilesSelected(jpegs(3)));
    page.dispatch(Msg::PredictClicked);

    drain_until(&mut page, |page| {
        page.model()
            .cards
            .iter()
            .all(|card| card.result != ResultSlot::InProgress)
    });

    let cards = &page.model().cards;
    assert!(matches!(cards[0].result, ResultSlot::Rendered(_)));
    assert_eq!(
        cards[1].result,
        ResultSlot::Failed("connection refused".to_string())
    );
    assert!(matches!(cards[2].result, ResultSlot::Rendered(_)));

    let messages: Vec<String> = logger.entries().into_iter().map(|e| e.message).collect();
    assert!(messages
        .iter()
        .any(|m| m == "eye-1.jpg: top prediction glaucoma 80.00%"));
    assert!(logger
        .errors()
        .iter()
        .any(|m| m.contains("eye-2.jpg") && m.contains("connection refused")));
}
