use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub max_files: usize,
    pub clock_interval: Duration,
    /// `None` waits for the endpoint indefinitely.
    pub request_timeout: Option<Duration>,
    pub thumbnail_size: u32,
    pub font_candidates: Vec<PathBuf>,
    pub offline: bool,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_files: 10,
            clock_interval: Duration::from_secs(1),
            request_timeout: None,
            thumbnail_size: 240,
            font_candidates: thai_font_candidates(),
            offline: false,
            window_size: [960.0, 720.0],
        }
    }
}

fn thai_font_candidates() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/tlwg/Garuda.ttf",
        "/usr/share/fonts/truetype/tlwg/Loma.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansThai-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
        "/usr/share/fonts/google-noto/NotoSansThai-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Ayuthaya.ttf",
        "/System/Library/Fonts/Thonburi.ttc",
        "C:\\Windows\\Fonts\\tahoma.ttf",
        "C:\\Windows\\Fonts\\LeelawUI.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Upload retinal images and show the model's prediction for each one.
#[derive(Debug, Parser)]
#[command(name = "fundus-predict", version)]
pub struct Cli {
    /// Prediction endpoint receiving one multipart upload per image
    #[arg(long, env = "FUNDUS_PREDICT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Maximum number of images in one selection
    #[arg(long, default_value_t = 10)]
    pub max_files: usize,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Font file tried before the system Thai fonts
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Use random predictions instead of calling the endpoint
    #[arg(long)]
    pub offline: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let mut config = Config {
            endpoint: self.endpoint,
            max_files: self.max_files,
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            offline: self.offline,
            ..Config::default()
        };

        if let Some(font) = self.font {
            config.font_candidates.insert(0, font);
        }

        config
    }
}
