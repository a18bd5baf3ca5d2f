//! 資産ファイル経由で `DecisionCore` を初期化する

use std::fs::File;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rdraughts_core::eval::WEIGHT_COUNT;
use rdraughts_core::{CoreOptions, DecisionCore, EvalMode, Position, Value, Variant};

const BOOK: &str = "1\n0 -3\n0 12\n0 5\n0 0\n0 7\n0 -1\n0 40\n0 2\n0 9\n";

fn write_gz(path: &std::path::Path, bytes: &[u8]) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_gz_assets() {
    let dir = tempfile::tempdir().unwrap();
    write_gz(&dir.path().join("book_killer.gz"), BOOK.as_bytes());

    let mut weights = vec![0u8; WEIGHT_COUNT * 2];
    // 駒差の重み (mg, eg) = (100, 100)
    weights[0..2].copy_from_slice(&100i16.to_le_bytes());
    weights[2..4].copy_from_slice(&100i16.to_le_bytes());
    write_gz(&dir.path().join("eval_killer.gz"), &weights);

    let mut core = DecisionCore::new(CoreOptions {
        variant: Variant::Killer,
        data_dir: dir.path().to_path_buf(),
        ..CoreOptions::default()
    });

    // 子のスコアの符号反転の最大は 3
    assert_eq!(core.init_book().unwrap(), Value::new(3));
    core.init_evaluator().unwrap();

    let start = Position::startpos();
    assert_eq!(core.evaluate(&start), Some(Value::ZERO));

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let pick = core.probe_book(&start, 0, &mut rng).unwrap();
    assert_eq!(pick.score, Value::new(3));
    assert_eq!(pick.mv.to_string(), "31-27");
}

#[test]
fn test_plain_asset_preferred_over_gz() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("book"), "0 11\n").unwrap();
    write_gz(&dir.path().join("book.gz"), b"0 99\n");

    let mut core = DecisionCore::new(CoreOptions {
        data_dir: dir.path().to_path_buf(),
        eval_mode: EvalMode::Pst,
        ..CoreOptions::default()
    });
    assert_eq!(core.init_book().unwrap(), Value::new(11));
}

#[test]
fn test_truncated_weights() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("eval"), vec![0u8; 1000]).unwrap();

    let mut core = DecisionCore::new(CoreOptions {
        data_dir: dir.path().to_path_buf(),
        ..CoreOptions::default()
    });
    let err = core.init_evaluator().unwrap_err();
    assert!(matches!(err, rdraughts_core::EvalError::Truncated { actual: 500, .. }));
    assert!(core.evaluator().is_none());
}
