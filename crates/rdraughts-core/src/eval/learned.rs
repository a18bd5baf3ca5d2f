//! 学習済み線形評価
//!
//! 特徴量ごとに中盤・終盤の重みを持ち、局面段階で補間する。

use super::pattern::{PATTERN_CENTERS, PATTERN_STATES, PatternTables};
use super::weights::{FEATURE_COUNT, Weights};
use crate::bitboard::{king_moves, man_attacks};
use crate::position::{Position, STAGE_SIZE};
use crate::types::{Color, Value, Variant};

/// 重みの単位（評価値 1 あたり）
const UNIT: i32 = 10;

// 特徴量の先頭インデックス
const MATERIAL: usize = 0;
const KING_SQUARES: usize = MATERIAL + 3;
const KING_MOBILITY: usize = KING_SQUARES + 50;
const BALANCE: usize = KING_MOBILITY + 2;
const PATTERNS: usize = BALANCE + 1;

const _: () = assert!(PATTERNS + PATTERN_STATES * 4 == FEATURE_COUNT);

/// 中盤・終盤の合計
struct Score2<'a> {
    weights: &'a Weights,
    mg: i32,
    eg: i32,
}

impl<'a> Score2<'a> {
    fn new(weights: &'a Weights) -> Self {
        Self {
            weights,
            mg: 0,
            eg: 0,
        }
    }

    #[inline]
    fn add(&mut self, feature: usize, value: i32) {
        let (mg, eg) = self.weights.pair(feature);
        self.mg += mg * value;
        self.eg += eg * value;
    }
}

/// 0 から遠い側へ丸める除算（`b > 0`）
pub fn div_round(a: i32, b: i32) -> i32 {
    debug_assert!(b > 0);
    if a >= 0 {
        (a + b / 2) / b
    } else {
        -((-a + b / 2) / b)
    }
}

/// 白から見た評価値（補間・丸め前の特徴量合計は `Score2`）
pub(super) fn evaluate(
    pos: &Position,
    variant: Variant,
    weights: &Weights,
    patterns: &PatternTables,
) -> Value {
    let mut s2 = Score2::new(weights);

    let nwm = pos.men(Color::White).count();
    let nbm = pos.men(Color::Black).count();
    let nwk = pos.kings(Color::White).count();
    let nbk = pos.kings(Color::Black).count();

    // 駒割り
    s2.add(MATERIAL, nwm - nbm);
    s2.add(MATERIAL + 1, i32::from(nwk >= 1) - i32::from(nbk >= 1));
    s2.add(MATERIAL + 2, (nwk - 1).max(0) - (nbk - 1).max(0));

    // 王の位置
    for sq in pos.kings(Color::White) {
        s2.add(KING_SQUARES + sq.dense(), 1);
    }
    for sq in pos.kings(Color::Black) {
        s2.add(KING_SQUARES + sq.opp().dense(), -1);
    }

    let (safe, contested) = king_mobility(pos, variant);
    s2.add(KING_MOBILITY, safe);
    s2.add(KING_MOBILITY + 1, contested);

    if variant != Variant::Losing {
        s2.add(
            BALANCE,
            pos.skew(Color::White).abs() - pos.skew(Color::Black).abs(),
        );
    }

    let indices = patterns.indices(pos.men(Color::White), pos.men(Color::Black));
    for k in 0..4 {
        s2.add(pattern_feature(PATTERN_CENTERS[k], indices[k]), 1);
        s2.add(pattern_feature(PATTERN_CENTERS[3 - k], -indices[k + 4]), -1);
    }

    let stage = pos.stage();
    let mut sc = div_round(
        s2.mg * (STAGE_SIZE - stage) + s2.eg * stage,
        UNIT * STAGE_SIZE,
    );

    if variant == Variant::Normal {
        sc = damp_drawish(sc, [nwm, nbm], [nwk, nbk]);
    }

    Value::new(sc).clamp_eval().for_side(pos.turn())
}

#[inline]
fn pattern_feature(center: usize, index: i32) -> usize {
    (PATTERNS + center).wrapping_add_signed(index as isize)
}

/// 王の移動先の数を (安全, 相手の駒に取られうる) に分けて白 - 黒
fn king_mobility(pos: &Position, variant: Variant) -> (i32, i32) {
    let empty = pos.empty();
    let frisian = variant == Variant::Frisian;
    let mut safe = 0;
    let mut contested = 0;

    for color in [Color::White, Color::Black] {
        let kings = pos.kings(color);
        if kings.is_empty() {
            continue;
        }
        let attacked = man_attacks(pos.men(color.opponent()), empty, frisian);
        let sign = color.sign();
        for from in kings {
            let moves = king_moves(from, empty);
            safe += sign * (moves & !attacked).count();
            contested += sign * (moves & attacked).count();
        }
    }
    (safe, contested)
}

/// 引き分けになりやすい駒割りでの縮小
///
/// 優勢側の駒が 3 枚以下で相手に王がいれば 1/8、王の数が同じで駒の差が 1 以下なら 1/2。
fn damp_drawish(sc: i32, men: [i32; 2], kings: [i32; 2]) -> i32 {
    let (leader, other) = if sc > 0 {
        (0, 1)
    } else if sc < 0 {
        (1, 0)
    } else {
        return sc;
    };
    if kings[other] == 0 {
        return sc;
    }

    if men[leader] + kings[leader] <= 3 {
        sc / 8
    } else if kings[0] == kings[1] && (men[0] - men[1]).abs() <= 1 {
        sc / 2
    } else {
        sc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(0, 10), 0);
        assert_eq!(div_round(4, 10), 0);
        assert_eq!(div_round(5, 10), 1);
        assert_eq!(div_round(-5, 10), -1);
        assert_eq!(div_round(-14, 10), -1);
        assert_eq!(div_round(-15, 10), -2);
        assert_eq!(div_round(12_000, 400), 30);
    }

    #[test]
    fn test_damp_drawish() {
        // 白優勢、白の駒 3 枚、黒に王
        assert_eq!(damp_drawish(30, [3, 0], [0, 1]), 3);
        // 黒優勢の鏡像
        assert_eq!(damp_drawish(-30, [0, 3], [1, 0]), -3);
        // 王が同数で駒の差 1
        assert_eq!(damp_drawish(10, [5, 4], [1, 1]), 5);
        assert_eq!(damp_drawish(-11, [4, 5], [1, 1]), -5);
        // 相手に王がいない
        assert_eq!(damp_drawish(30, [3, 0], [0, 0]), 30);
        // 駒の差 2
        assert_eq!(damp_drawish(10, [6, 4], [1, 1]), 10);
        assert_eq!(damp_drawish(0, [1, 1], [1, 1]), 0);
    }

    #[test]
    fn test_pattern_feature_bounds() {
        let half = (PATTERN_STATES as i32 - 1) / 2;
        assert_eq!(pattern_feature(PATTERN_CENTERS[0], -half), PATTERNS);
        assert_eq!(pattern_feature(PATTERN_CENTERS[3], half), FEATURE_COUNT - 1);
    }

    #[test]
    fn test_king_mobility_is_antisymmetric() {
        let mut pos = Position::new();
        pos.put(Color::White, true, crate::types::Square::from_number(28).unwrap());
        pos.put(Color::Black, false, crate::types::Square::from_number(17).unwrap());
        let (safe, contested) = king_mobility(&pos, Variant::Normal);

        let (msafe, mcontested) = king_mobility(&pos.mirrored(), Variant::Normal);
        assert_eq!((msafe, mcontested), (-safe, -contested));
        assert!(safe + contested > 0);
    }
}
