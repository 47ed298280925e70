use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use roster_calendar::month_model::MonthDocument;
use roster_calendar::roster_model::RosterConfig;
use roster_calendar::shift_model::{ShiftKind, MONTH_COUNT};

// 引数を構造体として定義します
#[derive(Parser)]
#[command(name = "roster_tools")]
#[command(version = "0.1.0")]
#[command(about = "roster-adminの月別データファイルを操作します", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 指定ディレクトリに12ヶ月分の空データを作成します（既存ファイルは触りません）
    Init {
        /// データディレクトリ
        dir: PathBuf,
    },
    /// 月別データファイルのスタッフ別シフト集計を表示します
    Summary {
        /// 月別データファイル
        file: PathBuf,
    },
    /// すべてのセルを未割当に戻します
    Clear {
        /// 月別データファイル
        file: PathBuf,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init(dir: PathBuf) {
    let config = RosterConfig::default();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("エラー: ディレクトリ '{}' を作成できませんでした: {}", dir.display(), e);
        return;
    }

    for month in 1..=MONTH_COUNT {
        let path = dir.join(format!("{month}.json"));
        if path.exists() {
            continue;
        }
        let month_name = match config.month_name(month) {
            Ok(name) => name,
            Err(_) => continue,
        };
        let doc = MonthDocument::blank(month_name, &config.staff);
        match serde_json::to_string(&doc) {
            Ok(text) => {
                if let Err(e) = fs::write(&path, text) {
                    eprintln!("エラー: '{}' を書き込めませんでした: {}", path.display(), e);
                } else {
                    println!("created: {}", path.display());
                }
            }
            Err(e) => eprintln!("エラー: シリアライズに失敗しました: {}", e),
        }
    }
}

fn summary(file: PathBuf) {
    match fs::read_to_string(&file) {
        Ok(text) => {
            if let Ok(doc) = serde_json::from_str::<MonthDocument>(&text) {
                println!("month: {}", doc.month);

                // スタッフ名 -> [未割当, 日勤, 準夜, 夜勤] の件数
                let mut staff_names: Vec<&String> = doc
                    .days
                    .values()
                    .flat_map(|entries| entries.keys())
                    .collect();
                staff_names.sort();
                staff_names.dedup();

                for name in staff_names {
                    let mut counts = [0usize; 4];
                    for entries in doc.days.values() {
                        if let Some(kind) = entries.get(name) {
                            counts[kind.code() as usize] += 1;
                        }
                    }
                    println!(
                        "  {:<6} Day: {:>2}  Swing: {:>2}  Night: {:>2}",
                        name, counts[1], counts[2], counts[3]
                    );
                }
            } else {
                eprintln!("ファイルが形式に沿っていません");
            }
        }
        Err(e) => {
            eprintln!("エラー: ファイル '{}' を読めませんでした: {}", file.display(), e);
        }
    }
}

fn clear(file: PathBuf, out: Option<PathBuf>) {
    match fs::read_to_string(&file) {
        Ok(text) => {
            if let Ok(mut doc) = serde_json::from_str::<MonthDocument>(&text) {
                for entries in doc.days.values_mut() {
                    for kind in entries.values_mut() {
                        *kind = ShiftKind::Unassigned;
                    }
                }

                let path = out.unwrap_or(file);
                if let Err(_e) = fs::write(&path, serde_json::to_string(&doc).unwrap()) {
                    eprintln!("ファイルの書き込みに失敗しました");
                } else {
                    println!("cleared: {}", path.display());
                }
            } else {
                eprintln!("ファイルが形式に沿っていません");
            }
        }
        Err(e) => {
            eprintln!("エラー: ファイル '{}' を読めませんでした: {}", file.display(), e);
        }
    }
}

fn main() {
    let args = Cli::parse();

    match args.command {
        Commands::Init { dir } => init(dir),
        Commands::Summary { file } => summary(file),
        Commands::Clear { file, out } => clear(file, out),
    }
}
