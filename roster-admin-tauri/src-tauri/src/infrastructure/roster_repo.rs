use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use roster_calendar::error::RosterError;
use roster_calendar::month_model::MonthDocument;
use roster_calendar::roster_model::RosterConfig;
use roster_calendar::shift_model::{MonthIndex, MONTH_COUNT};

/// 月別JSONファイルの読み書きを担当するリポジトリ
///
/// 1ファイル＝1ヶ月。`<dir>/<month>.json` (month: 1-12)。
pub struct RosterRepository {
    dir: PathBuf,
    config: RosterConfig,
}

impl RosterRepository {
    pub fn new(dir: impl Into<PathBuf>, config: RosterConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    fn month_path(&self, month: MonthIndex) -> Result<PathBuf, RosterError> {
        if month == 0 || month > MONTH_COUNT {
            return Err(RosterError::MonthOutOfRange(month));
        }
        Ok(self.dir.join(format!("{month}.json")))
    }

    // =================================================================
    // 1. 読み込み
    // =================================================================

    /// 1ヶ月分を読み込み、形の検証までして返す
    ///
    /// 壊れたファイル・範囲外コード・日付やスタッフの欠けは
    /// すべてエラーとして返し、落とさない。
    pub fn load_month(&self, month: MonthIndex) -> Result<MonthDocument, RosterError> {
        let path = self.month_path(month)?;
        let text = fs::read_to_string(&path)?;
        let doc: MonthDocument = serde_json::from_str(&text)?;
        doc.to_grid(&self.config)?; // 全日付・全スタッフが揃っているかの検証
        Ok(doc)
    }

    // =================================================================
    // 2. 保存（全量上書き）
    // =================================================================

    pub fn save_month(&self, month: MonthIndex, doc: &MonthDocument) -> Result<(), RosterError> {
        doc.to_grid(&self.config)?; // 書く前に検証する
        let path = self.month_path(month)?;
        fs::write(&path, serde_json::to_string(doc)?)?;
        Ok(())
    }

    // =================================================================
    // 3. 初期化
    // =================================================================

    /// 無いファイルだけ全ゼロで作成する。作成した月番号を返す
    pub fn init_missing(&self) -> Result<Vec<MonthIndex>, RosterError> {
        let mut created = Vec::new();
        for month in 1..=MONTH_COUNT {
            let path = self.month_path(month)?;
            if !path.exists() {
                let doc = MonthDocument::blank(self.config.month_name(month)?, &self.config.staff);
                fs::write(&path, serde_json::to_string(&doc)?)?;
                created.push(month);
            }
        }
        Ok(created)
    }

    /// 起動時の一括読み込み。欠けている月は先に生成する
    pub fn load_or_init_all(&self) -> Result<HashMap<MonthIndex, MonthDocument>, RosterError> {
        let created = self.init_missing()?;
        if !created.is_empty() {
            tracing::info!("created {} blank month documents", created.len());
        }
        let mut month_data = HashMap::new();
        for month in 1..=MONTH_COUNT {
            month_data.insert(month, self.load_month(month)?);
        }
        Ok(month_data)
    }
}
