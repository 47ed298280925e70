use serde::{Deserialize, Serialize};

use crate::error::RosterError;

// 月番号(1-12)・日付(1-31)・スタッフ行番号の型エイリアス
pub type MonthIndex = u32;
pub type DayOfMonth = u32;
pub type StaffIndex = usize;

pub const MONTH_COUNT: u32 = 12;
/// グリッドは月の長さに関わらず常に31列固定
pub const DAYS_IN_GRID: u32 = 31;

/// 1セルのシフト種別
///
/// 永続化フォーマット上は 0-3 の整数。表示色は描画側の都合なので
/// ここから導出するだけで、色からの逆引きは行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ShiftKind {
    Unassigned,
    Day,
    Swing,
    Night,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 4] = [
        ShiftKind::Unassigned,
        ShiftKind::Day,
        ShiftKind::Swing,
        ShiftKind::Night,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, RosterError> {
        match code {
            0 => Ok(ShiftKind::Unassigned),
            1 => Ok(ShiftKind::Day),
            2 => Ok(ShiftKind::Swing),
            3 => Ok(ShiftKind::Night),
            other => Err(RosterError::ShiftCodeOutOfRange(other)),
        }
    }

    /// クリック時の遷移: (code + 1) mod 4
    pub fn next(self) -> Self {
        match self {
            ShiftKind::Unassigned => ShiftKind::Day,
            ShiftKind::Day => ShiftKind::Swing,
            ShiftKind::Swing => ShiftKind::Night,
            ShiftKind::Night => ShiftKind::Unassigned,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Unassigned => "Unassigned",
            ShiftKind::Day => "Day",
            ShiftKind::Swing => "Swing",
            ShiftKind::Night => "Night",
        }
    }

    /// 描画用の色。永続化には使わない
    pub fn color(self) -> &'static str {
        match self {
            ShiftKind::Unassigned => "white",
            ShiftKind::Day => "green",
            ShiftKind::Swing => "orange",
            ShiftKind::Night => "purple",
        }
    }
}

impl From<ShiftKind> for u8 {
    fn from(kind: ShiftKind) -> u8 {
        kind.code()
    }
}

impl TryFrom<u8> for ShiftKind {
    type Error = RosterError;

    fn try_from(code: u8) -> Result<Self, RosterError> {
        ShiftKind::from_code(code)
    }
}
