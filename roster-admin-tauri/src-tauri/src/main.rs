#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    roster_admin_tauri_lib::run()
}
