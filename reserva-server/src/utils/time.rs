//! 时间工具函数: 预约日期/时间解析与业务时区
//!
//! 预约的日期和时间以文本形式原样存储 (`YYYY-MM-DD` / `HH:MM`)，
//! 这里只负责校验格式和计算业务时区下的"今天"。

use chrono::NaiveDate;
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;

use super::{AppError, AppResult, ErrorCode};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// 解析日期字符串 (YYYY-MM-DD)
///
/// 格式必须严格匹配且必须是真实存在的日期 (`2025-02-30` 无效)。
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// 校验时间字符串 (HH:MM, 24 小时制, 补零)
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// 业务时区下的今天
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// 验证日期不在过去 (按天比较，忽略时分)
pub fn validate_not_past(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if date < today {
        return Err(AppError::new(ErrorCode::DateInPast));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2030-06-15"), Some(date("2030-06-15")));
        assert_eq!(parse_date("2024-02-29"), Some(date("2024-02-29")));
    }

    #[test]
    fn test_parse_date_rejects_bad_format() {
        for input in [
            "2030-6-15",
            "15/06/2030",
            "2030-06-15T00:00:00",
            " 2030-06-15",
            "20300-06-15",
            "",
            "２０３０-06-15",
        ] {
            assert_eq!(parse_date(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("2023-02-29"), None);
    }

    #[test]
    fn test_time_format() {
        for ok in ["00:00", "09:05", "19:30", "23:59"] {
            assert!(is_valid_time(ok), "{ok} should be valid");
        }
        for bad in ["9:05", "24:00", "19:60", "19:30:00", "1930", "", "ab:cd"] {
            assert!(!is_valid_time(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_validate_not_past_uses_day_granularity() {
        let today = date("2030-06-15");
        assert!(validate_not_past(date("2030-06-15"), today).is_ok());
        assert!(validate_not_past(date("2030-06-16"), today).is_ok());

        let err = validate_not_past(date("2030-06-14"), today).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateInPast);
        assert_eq!(err.message, "Data da reserva não pode ser no passado");
    }

    #[test]
    fn test_today_respects_timezone() {
        let utc = today(Tz::UTC);
        let tokyo = today(chrono_tz::Asia::Tokyo);
        let honolulu = today(chrono_tz::Pacific::Honolulu);
        // UTC+9 and UTC-10 are never more than one day away from UTC
        assert!((tokyo - utc).num_days().abs() <= 1);
        assert!((honolulu - utc).num_days().abs() <= 1);
    }
}
