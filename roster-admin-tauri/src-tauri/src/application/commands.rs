use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

use roster_calendar::shift_model::ShiftKind;

use crate::application::dto::{CellDto, MonthGridDto, MonthOptionDto, PaletteEntryDto};
use crate::application::editor::RosterEditor;
use crate::application::time::{current_year, days_in_month};
use crate::AppServices;

fn month_grid_dto(editor: &RosterEditor) -> MonthGridDto {
    let config = editor.config();
    let month = editor.selected_month();
    let rows = editor
        .grid()
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|kind| CellDto {
                    code: kind.code(),
                    color: kind.color(),
                })
                .collect()
        })
        .collect();

    MonthGridDto {
        month_index: month,
        month_name: config
            .month_name(month)
            .map(str::to_string)
            .unwrap_or_default(),
        staff: config.staff.clone(),
        nominal_days: days_in_month(current_year(), month),
        rows,
    }
}

// --- Selector ---

#[tauri::command]
pub fn list_months(state: State<'_, AppServices>) -> Result<Vec<MonthOptionDto>, String> {
    let editor = state.editor.lock().map_err(|_| "editor state poisoned")?;
    Ok(editor
        .config()
        .months
        .iter()
        .enumerate()
        .map(|(i, name)| MonthOptionDto {
            index: (i + 1) as u32,
            name: name.clone(),
        })
        .collect())
}

#[tauri::command]
pub fn shift_palette() -> Vec<PaletteEntryDto> {
    ShiftKind::ALL
        .iter()
        .map(|kind| PaletteEntryDto {
            code: kind.code(),
            label: kind.label(),
            color: kind.color(),
        })
        .collect()
}

// --- Grid ---

/// 月を選択し、全セルの再描画用データを返す
#[tauri::command]
pub fn get_month_grid(month: u32, state: State<'_, AppServices>) -> Result<MonthGridDto, String> {
    let mut editor = state.editor.lock().map_err(|_| "editor state poisoned")?;
    editor.select_month(month).map_err(|e| e.to_string())?;
    Ok(month_grid_dto(&editor))
}

/// セルを1段階進めて遷移後の表示状態を返す (保存はしない)
#[tauri::command]
pub fn cycle_cell(staff: usize, day: u32, state: State<'_, AppServices>) -> Result<CellDto, String> {
    let mut editor = state.editor.lock().map_err(|_| "editor state poisoned")?;
    let kind = editor.cycle_cell(staff, day).map_err(|e| e.to_string())?;
    Ok(CellDto {
        code: kind.code(),
        color: kind.color(),
    })
}

/// 表示中グリッドを選択月のファイルへ丸ごと上書き保存する
#[tauri::command]
pub fn save_month(state: State<'_, AppServices>) -> Result<(), String> {
    let mut editor = state.editor.lock().map_err(|_| "editor state poisoned")?;
    editor.save_selected().map_err(|e| e.to_string())
}

// --- Misc ---

#[tauri::command]
pub fn open_roster_dir(app: AppHandle, state: State<'_, AppServices>) -> Result<(), String> {
    let dir = {
        let editor = state.editor.lock().map_err(|_| "editor state poisoned")?;
        editor.data_dir().to_string_lossy().to_string()
    };
    app.opener()
        .open_url(dir, Option::<String>::None)
        .map_err(|e| e.to_string())
}
