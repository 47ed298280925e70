#[cfg(test)]
mod roster_repo_tests {
    use std::fs;

    use tempfile::TempDir;

    use roster_admin_tauri_lib::infrastructure::roster_repo::RosterRepository;
    use roster_calendar::{
        roster_model::RosterConfig,
        shift_model::ShiftKind,
    };

    // ========================================================================
    // 1. テスト用セットアップ
    // ========================================================================

    fn setup_test_repo() -> (TempDir, RosterRepository) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = RosterRepository::new(dir.path(), RosterConfig::default());
        (dir, repo)
    }

    // ========================================================================
    // 2. テストケース
    // ========================================================================

    #[test]
    fn test_first_run_initializes_all_months() {
        let (dir, repo) = setup_test_repo();

        let month_data = repo.load_or_init_all().expect("Failed to init/load");
        assert_eq!(month_data.len(), 12);

        // 全月・全日・全スタッフが未割当で揃っていること
        for month in 1..=12u32 {
            let path = dir.path().join(format!("{month}.json"));
            assert!(path.exists(), "file for month {month} should exist");

            let doc = month_data.get(&month).expect("month missing from memory");
            let grid = doc.to_grid(repo.config()).expect("document should be valid");
            for staff in 0..repo.config().staff_count() {
                for day in 1..=31u32 {
                    assert_eq!(grid.shift_at(staff, day).unwrap(), ShiftKind::Unassigned);
                }
            }
        }
    }

    #[test]
    fn test_new_july_document_raw_shape() {
        // 生のJSONの形を直接確認する: 31日分のキー × 14人、すべてゼロ
        let (dir, repo) = setup_test_repo();
        repo.init_missing().expect("Failed to init");

        let text = fs::read_to_string(dir.path().join("7.json")).expect("Failed to read");
        let value: serde_json::Value = serde_json::from_str(&text).expect("Failed to parse");
        let object = value.as_object().expect("document should be an object");

        assert_eq!(object["month"], "July");
        assert_eq!(object.len(), 32); // "month" + "1".."31"

        for day in 1..=31u32 {
            let entries = object[&day.to_string()]
                .as_object()
                .expect("day entry should be an object");
            assert_eq!(entries.len(), 14);
            assert!(entries.values().all(|code| code == 0));
        }
    }

    #[test]
    fn test_save_survives_new_repository_instance() {
        let (dir, repo) = setup_test_repo();
        repo.init_missing().expect("Failed to init");

        let doc = repo.load_month(3).expect("Failed to load");
        let mut grid = doc.to_grid(repo.config()).unwrap();
        grid.set_shift(5, 28, ShiftKind::Night).unwrap();
        repo.save_month(3, &grid.to_document("March", repo.config()))
            .expect("Failed to save");

        // プロセス再起動相当: 別インスタンスで読み直す
        let repo2 = RosterRepository::new(dir.path(), RosterConfig::default());
        let reloaded = repo2.load_month(3).expect("Failed to reload");
        let grid2 = reloaded.to_grid(repo2.config()).unwrap();
        assert_eq!(grid2.shift_at(5, 28).unwrap(), ShiftKind::Night);
    }

    #[test]
    fn test_document_missing_a_day_fails_to_load() {
        let (dir, repo) = setup_test_repo();
        repo.init_missing().expect("Failed to init");

        // 11月から20日を欠けさせる
        let path = dir.path().join("11.json");
        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("20");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let r = repo.load_month(11);
        assert!(r.is_err(), "a document without day 20 must not load");
    }
}
