//! 申报年份校验
//!
//! 纯函数：输入为表单中的字符串，当前年份由调用方注入。

use chrono::Datelike;
use thiserror::Error;

pub const MIN_YEAR: i32 = 1900;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("year {year} outside {min}..={max}")]
    OutOfRange { year: i64, min: i32, max: i32 },
}

/// 本地日历的当前年份
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// 校验年份：整数且 `1900 <= year <= current_year`
///
/// 与浏览器数字输入框一致，`"2024.0"` 视为整数 2024。
pub fn parse_year(input: &str, current_year: i32) -> Result<i32, YearError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| YearError::NotANumber(trimmed.to_string()))?;

    if value.fract() != 0.0 {
        return Err(YearError::NotAnInteger(trimmed.to_string()));
    }

    let year = value as i64;
    if year < i64::from(MIN_YEAR) || year > i64::from(current_year) {
        return Err(YearError::OutOfRange {
            year,
            min: MIN_YEAR,
            max: current_year,
        });
    }

    Ok(year as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_years_within_range() {
        assert_eq!(parse_year("2024", 2026), Ok(2024));
        assert_eq!(parse_year(" 1900 ", 2026), Ok(1900));
        assert_eq!(parse_year("2026", 2026), Ok(2026));
        assert_eq!(parse_year("2024.0", 2026), Ok(2024));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            parse_year("1899", 2026),
            Err(YearError::OutOfRange { year: 1899, .. })
        ));
        assert!(matches!(
            parse_year("2027", 2026),
            Err(YearError::OutOfRange { year: 2027, .. })
        ));
    }

    #[test]
    fn rejects_fractions_and_garbage() {
        assert_eq!(
            parse_year("2.5", 2026),
            Err(YearError::NotAnInteger("2.5".into()))
        );
        assert!(matches!(parse_year("", 2026), Err(YearError::NotANumber(_))));
        assert!(matches!(parse_year("abc", 2026), Err(YearError::NotANumber(_))));
        assert!(matches!(parse_year("NaN", 2026), Err(YearError::NotANumber(_))));
        assert!(matches!(parse_year("inf", 2026), Err(YearError::NotANumber(_))));
    }

    #[test]
    fn next_year_is_always_rejected() {
        let now = current_year();
        assert_eq!(parse_year(&now.to_string(), now), Ok(now));
        assert!(parse_year(&(now + 1).to_string(), now).is_err());
    }
}
