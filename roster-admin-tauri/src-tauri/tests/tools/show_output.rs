use roster_admin_tauri_lib::application::dto::MonthGridDto;

pub fn show_month_grid_debug_data(grid: &MonthGridDto) {
    println!("\n=======================================================");
    println!(
        "🗓️ [DEBUG] グリッド表示 ({} / index {}, 実日数 {})",
        grid.month_name, grid.month_index, grid.nominal_days
    );
    println!("=======================================================");

    for (row, name) in grid.staff.iter().enumerate() {
        let line: String = grid.rows[row]
            .iter()
            .map(|cell| char::from_digit(cell.code as u32, 10).unwrap_or('?'))
            .collect();
        println!("   {:<6} : {}", name, line);
    }
    println!("=======================================================\n");
}
