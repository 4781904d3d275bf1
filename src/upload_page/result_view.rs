/// Class order of the model's output vector.
pub const LABELS: [&str; 4] = ["cataract", "diabetic_retinopathy", "glaucoma", "normal"];

pub const UNKNOWN_DISEASE: &str = "ไม่ทราบชื่อโรค";

pub fn display_name(label: &str) -> Option<&'static str> {
    match label {
        "cataract" => Some("ต้อกระจก"),
        "diabetic_retinopathy" => Some("เบาหวานขึ้นจอประสาทตา"),
        "glaucoma" => Some("ต้อหิน"),
        "normal" => Some("ปกติ"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: Option<&'static str>,
    pub display_name: &'static str,
    pub value_now: f64,
    pub value_min: f64,
    pub value_max: f64,
    pub percent_text: String,
}

impl ResultRow {
    /// Bar fill in `0.0..=1.0`; the text keeps the unclamped value.
    pub fn fill(&self) -> f32 {
        let span = self.value_max - self.value_min;
        if span <= 0.0 || !self.value_now.is_finite() {
            return 0.0;
        }
        ((self.value_now - self.value_min) / span).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub rows: Vec<ResultRow>,
    /// First index holding the largest value. Not rendered.
    pub top_index: Option<usize>,
}

impl ResultView {
    pub fn top_row(&self) -> Option<&ResultRow> {
        self.top_index.and_then(|index| self.rows.get(index))
    }
}

/// One row per value, in vector order. Length and range are not checked.
pub fn render_result(predictions: &[f64]) -> ResultView {
    let mut rows = Vec::with_capacity(predictions.len());
    let mut top: Option<(usize, f64)> = predictions.first().map(|first| (0, *first));

    for (index, value) in predictions.iter().copied().enumerate() {
        let label = LABELS.get(index).copied();
        let display_name = label.and_then(display_name).unwrap_or(UNKNOWN_DISEASE);
        let percent = value * 100.0;
        let fixed = to_fixed_2(percent);

        rows.push(ResultRow {
            label,
            display_name,
            value_now: fixed.parse().unwrap_or(percent),
            value_min: 0.0,
            value_max: 100.0,
            percent_text: format!("{}%", fixed),
        });

        if let Some((_, max_value)) = top {
            if value > max_value {
                top = Some((index, value));
            }
        }
    }

    ResultView {
        rows,
        top_index: top.map(|(index, _)| index),
    }
}

/// Two decimals, rounding exact halves away from zero. `-0` prints as `0.00`.
fn to_fixed_2(x: f64) -> String {
    if x == 0.0 {
        return "0.00".to_string();
    }

    let hundredths = x * 100.0;
    let product_is_exact = x.mul_add(100.0, -hundredths) == 0.0;
    let is_half = (hundredths - hundredths.trunc()).abs() == 0.5;

    if !(product_is_exact && is_half && hundredths.abs() < 2f64.powi(52)) {
        return format!("{:.2}", x);
    }

    let cents = (hundredths.abs() + 0.5) as u64;
    let sign = if x < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
