use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tauri::Manager;

pub mod application;
pub mod infrastructure;

use roster_calendar::error::RosterError;
use roster_calendar::roster_model::RosterConfig;

use application::editor::RosterEditor;
use infrastructure::roster_repo::RosterRepository;

// エディタ状態を保持するコンテナ
// webview側の要求でSyncが必要なためMutexに包むが、操作は常に逐次
pub struct AppServices {
    pub editor: Mutex<RosterEditor>,
}

impl AppServices {
    pub fn new(editor: RosterEditor) -> Self {
        Self {
            editor: Mutex::new(editor),
        }
    }
}

/// 構成ファイルがあれば読み、無ければ既定のロスターを使う
fn load_config(dir: &Path) -> RosterConfig {
    let path = dir.join("roster.config.json");
    match RosterConfig::from_file(&path) {
        Ok(config) => {
            tracing::info!("loaded roster config from {}", path.display());
            config
        }
        Err(RosterError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            RosterConfig::default()
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {} (falling back to defaults)", path.display(), e);
            RosterConfig::default()
        }
    }
}

// =====================
// Tauri エントリポイント
// =====================
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt::init();

    tauri::Builder::default()
        .setup(|app| {
            // --- app_data_dir を取得 ---
            let app_data_dir = app
                .path()
                .app_data_dir()
                .expect("failed to get app data dir");

            // --- ディレクトリ作成（冪等） ---
            let roster_dir = app_data_dir.join("roster");
            fs::create_dir_all(&roster_dir).expect("failed to create roster dir");

            tracing::info!("using roster data at: {}", roster_dir.display());

            // --- 構成 → リポジトリ → エディタ ---
            let config = load_config(&app_data_dir);
            let repo = RosterRepository::new(&roster_dir, config);
            let editor = RosterEditor::new(repo).expect("failed to load roster documents");

            // --- State に登録 ---
            app.manage(AppServices::new(editor));

            Ok(())
        })
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            application::commands::list_months,
            application::commands::shift_palette,
            application::commands::get_month_grid,
            application::commands::cycle_cell,
            application::commands::save_month,
            application::commands::open_roster_dir,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
