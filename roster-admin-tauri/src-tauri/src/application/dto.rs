use serde::Serialize;

/// 1セル分の表示状態 (コード + 描画色)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDto {
    pub code: u8,
    pub color: &'static str,
}

/// 月セレクタの1項目
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOptionDto {
    pub index: u32,
    pub name: String,
}

/// 選択中の月のグリッド全体 (フロントエンド再描画用)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGridDto {
    pub month_index: u32,
    pub month_name: String,
    pub staff: Vec<String>,
    // 今年基準のその月の実日数。29-31列のグレーアウト表示用で、編集は妨げない
    pub nominal_days: u32,
    pub rows: Vec<Vec<CellDto>>,
}

/// シフトパレットの1項目 (凡例とクリック遷移の表示用)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntryDto {
    pub code: u8,
    pub label: &'static str,
    pub color: &'static str,
}
