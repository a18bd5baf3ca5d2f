//! 静的評価
//!
//! - `EvalMode::Learned`: 学習済み線形特徴量（駒割り、王の位置・機動力、左右の偏り、盤面パターン）
//! - `EvalMode::Pst`: 駒割り + 駒の位置評価のみ（弱いレベル向け）
//!
//! どちらも手番側から見た値を `[-EVAL_INF, EVAL_INF]` で返す。

mod learned;
mod pattern;
mod pst;
mod weights;

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assets::MissingAsset;
use crate::position::Position;
use crate::types::{Value, Variant};

pub use learned::div_round;
pub use pattern::{PATTERN_CENTERS, PATTERN_SIZE, PATTERN_STATES, PatternTables, conv};
pub use weights::{FEATURE_COUNT, WEIGHT_COUNT, Weights};

/// 評価関数のエラー
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// 重みファイルが開けない
    #[error(transparent)]
    Missing(#[from] MissingAsset),

    /// 読み込みの失敗
    #[error(transparent)]
    Io(#[from] io::Error),

    /// 重みの数が足りない
    #[error("weight file truncated: expected {expected} values, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// 評価方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalMode {
    Pst,
    #[default]
    Learned,
}

impl EvalMode {
    pub const fn name(self) -> &'static str {
        match self {
            EvalMode::Pst => "pst",
            EvalMode::Learned => "learned",
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pst" => Ok(EvalMode::Pst),
            "learned" => Ok(EvalMode::Learned),
            _ => Err(format!("unknown eval mode: {s}")),
        }
    }
}

enum Model {
    Pst,
    Learned {
        weights: Weights,
        patterns: PatternTables,
    },
}

/// 評価関数
///
/// 構築後は不変。スレッド間で共有できる。
pub struct Evaluator {
    variant: Variant,
    model: Model,
}

impl Evaluator {
    /// 駒割り + 位置評価
    pub fn pst(variant: Variant) -> Self {
        Self {
            variant,
            model: Model::Pst,
        }
    }

    /// 学習済みの重みで評価
    pub fn learned(variant: Variant, weights: Weights) -> Self {
        Self {
            variant,
            model: Model::Learned {
                weights,
                patterns: PatternTables::new(),
            },
        }
    }

    /// 重みファイルを読み込んで学習済み評価を作成
    pub fn read<R: Read>(variant: Variant, reader: R) -> Result<Self, EvalError> {
        let weights = Weights::read(reader)?;
        log::info!("eval: loaded {} weights for {}", WEIGHT_COUNT, variant.name());
        Ok(Self::learned(variant, weights))
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn mode(&self) -> EvalMode {
        match self.model {
            Model::Pst => EvalMode::Pst,
            Model::Learned { .. } => EvalMode::Learned,
        }
    }

    /// 手番側から見た評価値
    pub fn evaluate(&self, pos: &Position) -> Value {
        match &self.model {
            Model::Pst => pst::evaluate(pos, self.variant),
            Model::Learned { weights, patterns } => {
                learned::evaluate(pos, self.variant, weights, patterns)
            }
        }
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("variant", &self.variant)
            .field("mode", &self.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Square};
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn random_weights(rng: &mut Xoshiro256PlusPlus) -> Weights {
        let mut weights = Weights::zeros();
        for feature in 0..FEATURE_COUNT {
            weights.set(feature, rng.random_range(-200..=200), rng.random_range(-200..=200));
        }
        weights
    }

    fn random_position(rng: &mut Xoshiro256PlusPlus) -> Position {
        let mut pos = Position::new();
        for sq in Square::all() {
            match rng.random_range(0..8) {
                0 => pos.put(Color::White, false, sq),
                1 => pos.put(Color::Black, false, sq),
                2 => pos.put(Color::White, true, sq),
                3 => pos.put(Color::Black, true, sq),
                _ => {}
            }
        }
        if rng.random::<bool>() {
            pos.set_turn(Color::Black);
        }
        pos
    }

    fn material_only(man: i16) -> Weights {
        let mut weights = Weights::zeros();
        weights.set(0, man, man);
        weights
    }

    #[test]
    fn test_assert_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator>();
    }

    #[test]
    fn test_mirror_negates_learned_eval() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
        let weights = random_weights(&mut rng);
        for variant in Variant::ALL {
            let eval = Evaluator::learned(variant, weights.clone());
            for _ in 0..20 {
                let pos = random_position(&mut rng);
                let score = eval.evaluate(&pos);
                assert_eq!(eval.evaluate(&pos.mirrored()), -score, "{variant} {pos:?}");
                assert_eq!(eval.evaluate(&pos.color_flipped()), score, "{variant} {pos:?}");
            }
        }
    }

    #[test]
    fn test_mirror_negates_pst_eval() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for variant in Variant::ALL {
            let eval = Evaluator::pst(variant);
            for _ in 0..50 {
                let pos = random_position(&mut rng);
                assert_eq!(eval.evaluate(&pos.mirrored()), -eval.evaluate(&pos));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let eval = Evaluator::learned(Variant::Normal, random_weights(&mut rng));
        let pos = random_position(&mut rng);
        assert_eq!(eval.evaluate(&pos), eval.evaluate(&pos));
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let eval = Evaluator::learned(Variant::Normal, Weights::zeros());
        assert_eq!(eval.evaluate(&Position::startpos()), Value::ZERO);
        assert_eq!(eval.mode(), EvalMode::Learned);
    }

    #[test]
    fn test_drawish_three_pieces_divides_by_eight() {
        // 白: 駒 3 枚、黒: 王 1 枚。段階 36、駒差 3 -> 30 -> 3
        let mut pos = Position::new();
        for n in [31, 32, 33] {
            pos.put(Color::White, false, Square::from_number(n).unwrap());
        }
        pos.put(Color::Black, true, Square::from_number(5).unwrap());

        let normal = Evaluator::learned(Variant::Normal, material_only(100));
        assert_eq!(normal.evaluate(&pos), Value::new(3));

        let killer = Evaluator::learned(Variant::Killer, material_only(100));
        assert_eq!(killer.evaluate(&pos), Value::new(30));

        pos.set_turn(Color::Black);
        assert_eq!(normal.evaluate(&pos), Value::new(-3));
    }

    #[test]
    fn test_drawish_equal_kings_divides_by_two() {
        // 白: 駒 5 + 王 1、黒: 駒 4 + 王 1。段階 29、駒差 1 -> 10 -> 5
        let mut pos = Position::new();
        for n in [31, 32, 33, 34, 35] {
            pos.put(Color::White, false, Square::from_number(n).unwrap());
        }
        for n in [16, 17, 18, 19] {
            pos.put(Color::Black, false, Square::from_number(n).unwrap());
        }
        pos.put(Color::White, true, Square::from_number(46).unwrap());
        pos.put(Color::Black, true, Square::from_number(5).unwrap());

        let normal = Evaluator::learned(Variant::Normal, material_only(100));
        assert_eq!(normal.evaluate(&pos), Value::new(5));

        let frisian = Evaluator::learned(Variant::Frisian, material_only(100));
        assert_eq!(frisian.evaluate(&pos), Value::new(10));
    }

    #[test]
    fn test_clamped() {
        let mut pos = Position::startpos();
        for sq in pos.men(Color::Black) {
            pos.remove(sq);
        }
        let eval = Evaluator::learned(Variant::Normal, material_only(i16::MAX));
        assert_eq!(eval.evaluate(&pos), Value::EVAL_INF);

        pos.set_turn(Color::Black);
        assert_eq!(eval.evaluate(&pos), -Value::EVAL_INF);
    }

    #[test]
    fn test_eval_mode_parse() {
        assert_eq!("pst".parse::<EvalMode>(), Ok(EvalMode::Pst));
        assert_eq!("Learned".parse::<EvalMode>(), Ok(EvalMode::Learned));
        assert!("nnue".parse::<EvalMode>().is_err());
        assert_eq!(EvalMode::default(), EvalMode::Learned);
    }
}
