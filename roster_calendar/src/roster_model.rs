use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::shift_model::MonthIndex;

// ==========================================
// ロスター構成（スタッフ一覧と月ラベル）
// ==========================================

/// 行の並び＝スタッフの並び。起動時に一度だけ構築し、
/// リポジトリとエディタへ明示的に渡す（グローバル定数にはしない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub staff: Vec<String>,
    pub months: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let staff = [
            "NSW-1", "NSW-2", "NSW-3", "NSW-4", "NSW-5", "NSW-6", "QLD-1", "QLD-2", "REM-1",
            "REM-2", "REM-3", "REM-4", "REM-5", "REM-6",
        ];
        let months = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        Self {
            staff: staff.iter().map(|s| s.to_string()).collect(),
            months: months.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RosterConfig {
    /// 構成ファイル（JSON）から読み込む。存在チェックは呼び出し側の責務
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    /// month: 1-12
    pub fn month_name(&self, month: MonthIndex) -> Result<&str, RosterError> {
        if month == 0 {
            return Err(RosterError::MonthOutOfRange(month));
        }
        self.months
            .get((month - 1) as usize)
            .map(String::as_str)
            .ok_or(RosterError::MonthOutOfRange(month))
    }
}
