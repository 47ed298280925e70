use std::collections::HashMap;
use std::path::Path;

use roster_calendar::error::RosterError;
use roster_calendar::month_model::{MonthDocument, MonthGrid};
use roster_calendar::roster_model::RosterConfig;
use roster_calendar::shift_model::{DayOfMonth, MonthIndex, ShiftKind, StaffIndex};

use crate::infrastructure::roster_repo::RosterRepository;

/// グリッドエディタ本体
///
/// 起動時に12ヶ月分のドキュメントをメモリへ読み込み、
/// 選択中の月だけを編集用グリッドに展開して持つ。
/// グリッドへの変更は保存されるまでドキュメントにもディスクにも反映されない。
pub struct RosterEditor {
    repo: RosterRepository,
    month_data: HashMap<MonthIndex, MonthDocument>,
    selected: MonthIndex,
    grid: MonthGrid,
}

impl RosterEditor {
    /// 全月を読み込み（無ければ生成し）、1月を選択した状態で開始する
    pub fn new(repo: RosterRepository) -> Result<Self, RosterError> {
        let month_data = repo.load_or_init_all()?;
        let grid = month_data
            .get(&1)
            .ok_or(RosterError::MonthOutOfRange(1))?
            .to_grid(repo.config())?;
        Ok(Self {
            repo,
            month_data,
            selected: 1,
            grid,
        })
    }

    pub fn config(&self) -> &RosterConfig {
        self.repo.config()
    }

    pub fn data_dir(&self) -> &Path {
        self.repo.dir()
    }

    pub fn selected_month(&self) -> MonthIndex {
        self.selected
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// 月を切り替える
    ///
    /// メモリ上のドキュメントからグリッドを作り直す＝全セル再描画。
    /// 保存していない編集はここで破棄される（元ツールと同じ挙動）。
    pub fn select_month(&mut self, month: MonthIndex) -> Result<(), RosterError> {
        let doc = self
            .month_data
            .get(&month)
            .ok_or(RosterError::MonthOutOfRange(month))?;
        let grid = doc.to_grid(self.repo.config())?;
        self.grid = grid;
        self.selected = month;
        Ok(())
    }

    /// セルを1段階進める。ローカル状態の変更のみで、永続化はしない
    pub fn cycle_cell(
        &mut self,
        staff: StaffIndex,
        day: DayOfMonth,
    ) -> Result<ShiftKind, RosterError> {
        self.grid.cycle_cell(staff, day)
    }

    /// 表示中グリッドを選択月のドキュメントへ丸ごと書き出す
    ///
    /// 保存後にファイルから読み直してメモリを更新する（往復の確認）。
    pub fn save_selected(&mut self) -> Result<(), RosterError> {
        let month_name = self.config().month_name(self.selected)?.to_string();
        let doc = self.grid.to_document(&month_name, self.config());
        self.repo.save_month(self.selected, &doc)?;

        let reloaded = self.repo.load_month(self.selected)?;
        self.month_data.insert(self.selected, reloaded);
        tracing::info!("saved month {} ({})", self.selected, month_name);
        Ok(())
    }
}
