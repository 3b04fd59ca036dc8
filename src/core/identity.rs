use crate::domain::model::{IdentitySignals, DEVICE_PROP, PROJECT_PROP, SKU_PROP};
use crate::domain::ports::PropertyStore;

pub fn read_identity<S: PropertyStore + ?Sized>(store: &S) -> IdentitySignals {
    let device_codename = store.get_or(DEVICE_PROP, "");
    let project_raw = store.get_or(PROJECT_PROP, "0");
    let sku_raw = store.get_or(SKU_PROP, "0");

    let signals = IdentitySignals {
        device_codename,
        project_code: parse_signal(&project_raw),
        hardware_sku: parse_signal(&sku_raw),
    };

    tracing::debug!(
        "Identity: device={:?} prjname={:?}->{} sku={:?}->{}",
        signals.device_codename,
        project_raw,
        signals.project_code,
        sku_raw,
        signals.hardware_sku
    );

    signals
}

/// `stoi` 規則：略過前導空白，可選正負號，取最長的數字前綴。
/// 無數字或超出 i32 範圍時回傳 0，0 不會命中任何規則。
pub fn parse_signal(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{}", digits).parse::<i32>()
    } else {
        digits.parse::<i32>()
    };
    parsed.unwrap_or(0)
}
