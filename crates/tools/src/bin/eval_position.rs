//! 静的評価の確認ツール
//!
//! 局面文字列（引数、または標準入力から 1 行ずつ）を評価して表示する。
//!
//! 使用例:
//!   eval_position --data-dir data
//!   eval_position --eval-mode pst --variant frisian "W..."
//!   cat positions.txt | eval_position --data-dir data --stdin --json

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use rdraughts_core::{DecisionCore, Position};
use serde::Serialize;
use tools::common::config::CoreArgs;
use tools::common::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "eval_position")]
#[command(about = "局面の静的評価値を表示する")]
struct Cli {
    #[command(flatten)]
    core: CoreArgs,

    /// 局面（省略時は初期局面）
    positions: Vec<String>,

    /// 標準入力から局面を読む
    #[arg(long)]
    stdin: bool,

    /// JSON Lines で出力
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct EvalRecord<'a> {
    position: &'a str,
    stage: i32,
    score: i32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.core.debug);

    let opts = cli.core.resolve()?;
    let mut core = DecisionCore::new(opts);
    core.init_evaluator().context("failed to initialise evaluator")?;

    let mut inputs = cli.positions.clone();
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                inputs.push(line.to_string());
            }
        }
    }
    if inputs.is_empty() {
        inputs.push(Position::startpos().to_text());
    }

    for text in &inputs {
        let pos: Position = text
            .parse()
            .with_context(|| format!("invalid position: {text}"))?;
        let score = core.evaluate(&pos).context("evaluator not initialised")?;
        if cli.json {
            let record = EvalRecord {
                position: text,
                stage: pos.stage(),
                score: score.raw(),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{:>6}  {text}", score.raw());
        }
    }
    Ok(())
}
