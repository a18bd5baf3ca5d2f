//! 駒割り + 駒の位置評価（弱いレベル向け）

use crate::position::Position;
use crate::types::{Color, Square, Value, Variant};

/// 白から見た駒（王以外）の位置評価。通常ルール・キラー
#[rustfmt::skip]
const PST_I: [i32; Square::NUM] = [
       0,   0,   0,   0,   0,
     18,  87,  78,  74, 102,
      43,  21,  22,  30,   4,
     -4,   8,  -3,   0,   0,
     -13, -13,  -7, -13,  -8,
    -11, -16,  -9, -13, -21,
     -20, -15, -10, -18, -17,
    -20, -18, -13, -14, -17,
     -23, -16, -14, -17, -19,
    -23, -15, -12, -15, -17,
];

/// ブレイクスルー
#[rustfmt::skip]
const PST_B: [i32; Square::NUM] = [
       0,   0,   0,   0,   0,
      5,  54,  90,  82, 163,
     128,  57,  73,  84,   7,
    -18,  44,  14,  20,  13,
     -22, -12,  -4,  -6, -15,
    -25, -15,  -5, -14, -29,
     -33, -17, -10, -28, -34,
    -35, -32, -21, -20, -33,
     -43, -28, -26, -33, -42,
    -52, -33, -29, -30, -41,
];

/// ルージング
#[rustfmt::skip]
const PST_L: [i32; Square::NUM] = [
       0,   0,   0,   0,   0,
    -71,  24,  38,  16,  40,
       5,  30,  20,  -6, -70,
    -15,  -6,  13,   8,  -5,
       1,   6,   5,  -7, -23,
    -11,  -5,  10,   2,  -5,
      -8,   7,   8,  -1, -17,
    -23,   4,  17,   8,  -7,
     -11,  17,  24,   7, -22,
    -38,   4,  25,  17,  -3,
];

/// フリジアン
#[rustfmt::skip]
const PST_F: [i32; Square::NUM] = [
       0,   0,   0,   0,   0,
     81, 144, 105, 102, 171,
      93,  42,  22,  61,  33,
    -23,  10, -25, -30,   7,
     -16, -45, -49, -19, -14,
    -23, -40, -60, -52, -32,
     -28, -47, -48, -36, -20,
    -24, -29, -42, -35, -25,
     -17, -17, -25, -12,   0,
      4,  -1,  -1,  -1,  11,
];

/// (駒, 王) の価値
const fn material_weights(variant: Variant) -> (i32, i32) {
    match variant {
        Variant::Breakthrough => (138, 0),
        Variant::Losing => (20, 68),
        Variant::Frisian => (168, 423),
        Variant::Normal => (91, 238),
        Variant::Killer => (100, 300),
    }
}

const fn table(variant: Variant) -> &'static [i32; Square::NUM] {
    match variant {
        Variant::Breakthrough => &PST_B,
        Variant::Losing => &PST_L,
        Variant::Frisian => &PST_F,
        Variant::Normal | Variant::Killer => &PST_I,
    }
}

/// `color` 側の駒割り
pub fn material(pos: &Position, color: Color, variant: Variant) -> i32 {
    let (man, king) = material_weights(variant);
    pos.men(color).count() * man + pos.kings(color).count() * king
}

/// `color` 側の駒の位置評価（黒は盤を回転して白の表を引く）
pub fn placement(pos: &Position, color: Color, variant: Variant) -> i32 {
    let pst = table(variant);
    pos.men(color)
        .iter()
        .map(|sq| {
            let sq = if color == Color::White { sq } else { sq.opp() };
            pst[sq.dense()]
        })
        .sum()
}

/// 手番側から見た評価値
pub fn evaluate(pos: &Position, variant: Variant) -> Value {
    let us = pos.turn();
    let them = us.opponent();
    let sc = material(pos, us, variant) - material(pos, them, variant)
        + placement(pos, us, variant)
        - placement(pos, them, variant);
    Value::new(sc).clamp_eval()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_is_balanced() {
        let pos = Position::startpos();
        for variant in Variant::ALL {
            assert_eq!(evaluate(&pos, variant), Value::ZERO, "{variant}");
        }
    }

    #[test]
    fn test_material_weights() {
        let mut pos = Position::new();
        pos.put(Color::White, true, Square::from_dense(25));
        pos.put(Color::White, false, Square::from_dense(30));
        assert_eq!(material(&pos, Color::White, Variant::Normal), 91 + 238);
        assert_eq!(material(&pos, Color::White, Variant::Breakthrough), 138);
        assert_eq!(material(&pos, Color::Black, Variant::Normal), 0);
    }

    #[test]
    fn test_placement_uses_rotated_table_for_black() {
        let mut pos = Position::new();
        // 白の駒 6 番（dense 5）
        pos.put(Color::White, false, Square::from_dense(5));
        // 黒の駒 45 番（dense 44）は回転すると dense 5
        pos.put(Color::Black, false, Square::from_dense(44));
        assert_eq!(placement(&pos, Color::White, Variant::Normal), 18);
        assert_eq!(placement(&pos, Color::Black, Variant::Normal), 18);
        assert_eq!(evaluate(&pos, Variant::Normal), Value::ZERO);
    }

    #[test]
    fn test_side_to_move_perspective() {
        let mut pos = Position::new();
        pos.put(Color::White, false, Square::from_dense(5));
        let white = evaluate(&pos, Variant::Normal);
        assert_eq!(white, Value::new(91 + 18));

        pos.set_turn(Color::Black);
        assert_eq!(evaluate(&pos, Variant::Normal), -white);
    }
}
