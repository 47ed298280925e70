use chrono::{Datelike, Local, NaiveDate};

/// 指定された年・月の実日数を返す
/// ※ month: 1 (1月) 〜 12 (12月)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // 翌月の1日との差分から日数を出す
    let first_day =
        NaiveDate::from_ymd_opt(year, month, 1).expect("Invalid date provided (month should be 1-12)");

    let next_month_date = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };

    next_month_date.signed_duration_since(first_day).num_days() as u32
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod time_tests {
    use super::days_in_month;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);

        // うるう年
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
    }
}
