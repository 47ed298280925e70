use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::roster_model::RosterConfig;
use crate::shift_model::{DayOfMonth, ShiftKind, StaffIndex, DAYS_IN_GRID};

// ==========================================
// 1. 永続化フォーマット
// ==========================================

/// 1ヶ月分の永続化ドキュメント
///
/// ```json
/// { "month": "March", "1": { "NSW-1": 0, ... }, ..., "31": { ... } }
/// ```
///
/// 日付キーは "1".."31" の文字列。flattenで月ラベルと同じ階層に並べる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthDocument {
    pub month: String,
    #[serde(flatten)]
    pub days: BTreeMap<String, BTreeMap<String, ShiftKind>>,
}

impl MonthDocument {
    /// 全セル未割当のドキュメントを作る（初回起動時の自動生成用）
    pub fn blank(month_name: &str, staff: &[String]) -> Self {
        let mut days = BTreeMap::new();
        for day in 1..=DAYS_IN_GRID {
            let entries: BTreeMap<String, ShiftKind> = staff
                .iter()
                .map(|name| (name.clone(), ShiftKind::Unassigned))
                .collect();
            days.insert(day.to_string(), entries);
        }
        Self {
            month: month_name.to_string(),
            days,
        }
    }

    /// 編集用グリッドへ展開する
    ///
    /// 1-31の全日付と構成済みスタッフ全員が揃っていることの検証を兼ねる。
    /// 構成にない余分なキーは無視する（次回保存時に落ちる）。
    pub fn to_grid(&self, config: &RosterConfig) -> Result<MonthGrid, RosterError> {
        let mut cells =
            vec![vec![ShiftKind::Unassigned; DAYS_IN_GRID as usize]; config.staff_count()];

        for day in 1..=DAYS_IN_GRID {
            let entries = self
                .days
                .get(&day.to_string())
                .ok_or_else(|| RosterError::MissingDay {
                    month: self.month.clone(),
                    day,
                })?;

            for (row, name) in config.staff.iter().enumerate() {
                let kind =
                    entries
                        .get(name)
                        .copied()
                        .ok_or_else(|| RosterError::MissingStaff {
                            month: self.month.clone(),
                            day,
                            name: name.clone(),
                        })?;
                cells[row][(day - 1) as usize] = kind;
            }
        }

        Ok(MonthGrid { cells })
    }
}

// ==========================================
// 2. 編集用グリッド（UIの一時状態）
// ==========================================

/// 行＝スタッフ、列＝日付(1-31) の一時状態。
/// 保存されるまでディスクには反映されない。
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    cells: Vec<Vec<ShiftKind>>,
}

impl MonthGrid {
    pub fn blank(staff_count: usize) -> Self {
        Self {
            cells: vec![vec![ShiftKind::Unassigned; DAYS_IN_GRID as usize]; staff_count],
        }
    }

    pub fn staff_count(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<ShiftKind>] {
        &self.cells
    }

    pub fn shift_at(&self, staff: StaffIndex, day: DayOfMonth) -> Result<ShiftKind, RosterError> {
        self.cell(staff, day).copied()
    }

    /// セルを1段階進めて、遷移後の状態を返す
    pub fn cycle_cell(
        &mut self,
        staff: StaffIndex,
        day: DayOfMonth,
    ) -> Result<ShiftKind, RosterError> {
        let cell = self.cell_mut(staff, day)?;
        *cell = cell.next();
        Ok(*cell)
    }

    pub fn set_shift(
        &mut self,
        staff: StaffIndex,
        day: DayOfMonth,
        kind: ShiftKind,
    ) -> Result<(), RosterError> {
        *self.cell_mut(staff, day)? = kind;
        Ok(())
    }

    /// 表示中グリッド全体を日付キーのドキュメントへ詰め直す（保存用）
    pub fn to_document(&self, month_name: &str, config: &RosterConfig) -> MonthDocument {
        let mut days = BTreeMap::new();
        for day in 1..=DAYS_IN_GRID {
            let entries: BTreeMap<String, ShiftKind> = config
                .staff
                .iter()
                .enumerate()
                .map(|(row, name)| (name.clone(), self.cells[row][(day - 1) as usize]))
                .collect();
            days.insert(day.to_string(), entries);
        }
        MonthDocument {
            month: month_name.to_string(),
            days,
        }
    }

    fn cell(&self, staff: StaffIndex, day: DayOfMonth) -> Result<&ShiftKind, RosterError> {
        if day == 0 || day > DAYS_IN_GRID {
            return Err(RosterError::CellOutOfGrid { staff, day });
        }
        self.cells
            .get(staff)
            .and_then(|row| row.get((day - 1) as usize))
            .ok_or(RosterError::CellOutOfGrid { staff, day })
    }

    fn cell_mut(&mut self, staff: StaffIndex, day: DayOfMonth) -> Result<&mut ShiftKind, RosterError> {
        if day == 0 || day > DAYS_IN_GRID {
            return Err(RosterError::CellOutOfGrid { staff, day });
        }
        self.cells
            .get_mut(staff)
            .and_then(|row| row.get_mut((day - 1) as usize))
            .ok_or(RosterError::CellOutOfGrid { staff, day })
    }
}

#[cfg(test)]
mod month_model_tests {
    use super::{MonthDocument, MonthGrid};
    use crate::error::RosterError;
    use crate::roster_model::RosterConfig;
    use crate::shift_model::ShiftKind;

    #[test]
    fn test_blank_document_shape() {
        let config = RosterConfig::default();
        let doc = MonthDocument::blank("July", &config.staff);

        assert_eq!(doc.month, "July");
        // 日付キーは "1".."31" でちょうど31個
        assert_eq!(doc.days.len(), 31);
        for day in 1..=31u32 {
            let entries = doc.days.get(&day.to_string()).expect("day key missing");
            assert_eq!(entries.len(), 14);
            assert!(entries.values().all(|k| *k == ShiftKind::Unassigned));
        }
    }

    #[test]
    fn test_document_grid_round_trip() {
        let config = RosterConfig::default();
        let doc = MonthDocument::blank("March", &config.staff);

        let mut grid = doc.to_grid(&config).unwrap();
        grid.set_shift(0, 15, ShiftKind::Day).unwrap();
        grid.cycle_cell(13, 31).unwrap(); // REM-6 の31日目を1段階

        let saved = grid.to_document("March", &config);
        let reloaded = saved.to_grid(&config).unwrap();

        assert_eq!(reloaded.shift_at(0, 15).unwrap(), ShiftKind::Day);
        assert_eq!(reloaded.shift_at(13, 31).unwrap(), ShiftKind::Day);
        assert_eq!(reloaded.shift_at(1, 15).unwrap(), ShiftKind::Unassigned);
        assert_eq!(saved, grid.to_document("March", &config));
    }

    #[test]
    fn test_missing_day_is_an_error() {
        let config = RosterConfig::default();
        let mut doc = MonthDocument::blank("March", &config.staff);
        doc.days.remove("15");

        let r = doc.to_grid(&config);
        assert!(matches!(r, Err(RosterError::MissingDay { day: 15, .. })));
    }

    #[test]
    fn test_missing_staff_is_an_error() {
        let config = RosterConfig::default();
        let mut doc = MonthDocument::blank("March", &config.staff);
        doc.days.get_mut("3").unwrap().remove("QLD-2");

        let r = doc.to_grid(&config);
        match r {
            Err(RosterError::MissingStaff { day, name, .. }) => {
                assert_eq!(day, 3);
                assert_eq!(name, "QLD-2");
            }
            other => panic!("expected MissingStaff, got {other:?}"),
        }
    }

    #[test]
    fn test_wire_format_matches_layout() {
        let config = RosterConfig::default();
        let doc = MonthDocument::blank("January", &config.staff);
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();

        // "month" と日付キーが同じ階層に並ぶこと
        assert_eq!(value["month"], "January");
        assert_eq!(value["1"]["NSW-1"], 0);
        assert_eq!(value["31"]["REM-6"], 0);
        assert_eq!(value.as_object().unwrap().len(), 32); // month + 31日

        let back: MonthDocument = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_cell_bounds() {
        let mut grid = MonthGrid::blank(14);
        assert!(matches!(
            grid.cycle_cell(0, 0),
            Err(RosterError::CellOutOfGrid { .. })
        ));
        assert!(matches!(
            grid.cycle_cell(0, 32),
            Err(RosterError::CellOutOfGrid { .. })
        ));
        assert!(matches!(
            grid.cycle_cell(14, 1),
            Err(RosterError::CellOutOfGrid { .. })
        ));
        assert!(grid.cycle_cell(13, 31).is_ok());
    }
}
