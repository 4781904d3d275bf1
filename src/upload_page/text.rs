pub const WINDOW_TITLE: &str = "ทำนายโรคจากภาพถ่ายจอประสาทตา";

pub const PICK_FILES_BUTTON: &str = "เลือกไฟล์ภาพ";
pub const PREDICT_BUTTON: &str = "ทำนายภาพที่เลือก";
pub const AGAIN_BUTTON: &str = "ทำอีกครั้ง";
pub const OK_BUTTON: &str = "ตกลง";
pub const CANCEL_BUTTON: &str = "ยกเลิก";

pub const ALERT_TITLE: &str = "แจ้งเตือน";
pub const CONFIRM_TITLE: &str = "ยืนยัน";
pub const UNSUPPORTED_FILE_TYPE: &str = "รองรับเฉพาะไฟล์ JPG เท่านั้น";
pub const NO_FILE_SELECTED: &str = "กรุณาเลือกไฟล์ภาพก่อน!";
pub const CONFIRM_RESET: &str = "คุณต้องการออกจากหน้านี้ใช่ไหม?";

pub const RESULT_TITLE: &str = "ผลลัพธ์การทำนาย";
pub const PREDICTING: &str = "กำลังทำนาย...";
pub const NO_RESULT: &str = "ไม่พบผลลัพธ์จากโมเดล";
pub const THUMBNAIL_FAILED: &str = "ไม่สามารถแสดงภาพตัวอย่างได้";

pub fn too_many_files(max_files: usize) -> String {
    format!("ไม่สามารถอัปโหลดเกิน {} ไฟล์ได้", max_files)
}

pub fn card_header(position: usize) -> String {
    format!("ภาพที่ {}", position)
}

pub fn prediction_failed(message: &str) -> String {
    format!("เกิดข้อผิดพลาด: {}", message)
}
