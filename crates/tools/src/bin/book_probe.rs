//! 定跡の確認ツール
//!
//! 定跡を読み込んで後退解析を行い、指定局面の定跡手をサンプリングして表示する。
//!
//! 使用例:
//!   book_probe --data-dir data
//!   book_probe --data-dir data --position "W..." --samples 20 --margin 10
//!   book_probe --data-dir data --list --json
//!   book_probe --data-dir data --dump book.txt

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rdraughts_core::{DecisionCore, Position};
use serde::Serialize;
use tools::common::config::CoreArgs;
use tools::common::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "book_probe")]
#[command(about = "定跡を読み込み、局面の定跡手を表示する")]
struct Cli {
    #[command(flatten)]
    core: CoreArgs,

    /// 局面（省略時は初期局面）
    #[arg(long)]
    position: Option<String>,

    /// マージン（省略時は設定の book_margin）
    #[arg(long)]
    margin: Option<i32>,

    /// サンプリング回数
    #[arg(long, default_value_t = 1)]
    samples: usize,

    /// 乱数シード（省略時はランダム）
    #[arg(long)]
    seed: Option<u64>,

    /// 全合法手のスコアを表示
    #[arg(long)]
    list: bool,

    /// 定跡を書き出す
    #[arg(long)]
    dump: Option<PathBuf>,

    /// JSON で出力
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ScoredMove {
    mv: String,
    score: i32,
}

#[derive(Serialize)]
struct Report {
    position: String,
    root_score: i32,
    book_positions: usize,
    margin: i32,
    seed: u64,
    /// 手 -> 選ばれた回数
    picks: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<ScoredMove>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.core.debug);

    let opts = cli.core.resolve()?;
    let margin = cli.margin.unwrap_or(opts.book_margin);
    let mut core = DecisionCore::new(opts);
    let root_score = core.init_book().context("failed to load book")?;

    let pos = match &cli.position {
        Some(text) => text.parse::<Position>().context("invalid position")?,
        None => Position::startpos(),
    };
    let book = core.book().context("book not loaded")?;

    if let Some(path) = &cli.dump {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        book.write(&Position::startpos(), BufWriter::new(file))?;
        log::info!("book written to {}", path.display());
    }

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut picks = BTreeMap::new();
    for _ in 0..cli.samples {
        if let Some(pick) = core.probe_book(&pos, margin, &mut rng) {
            *picks.entry(pick.mv.to_string()).or_insert(0) += 1;
        }
    }

    let moves = if cli.list {
        book.scored_moves(&pos).map(|list| {
            list.iter()
                .map(|m| ScoredMove {
                    mv: m.mv.to_string(),
                    score: m.score.raw(),
                })
                .collect()
        })
    } else {
        None
    };

    let report = Report {
        position: pos.to_text(),
        root_score: root_score.raw(),
        book_positions: book.len(),
        margin,
        seed,
        picks,
        moves,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("book: {} positions, root score {}", report.book_positions, root_score);
    println!("position: {}", report.position);
    if report.picks.is_empty() {
        println!("no book move");
    }
    for (mv, count) in &report.picks {
        println!("{mv:>8} {count}/{}", cli.samples);
    }
    if let Some(moves) = &report.moves {
        println!("---");
        for m in moves {
            println!("{:>8} {:+}", m.mv, m.score);
        }
    }
    Ok(())
}
