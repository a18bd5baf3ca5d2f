//! 評価値（Value）
//!
//! 定跡スコアと静的評価値を同一の整数スケールで扱う。
//! `Value::INF` は「合法手なし = 負け」を表す番兵として予約している。

use serde::{Deserialize, Serialize};

use super::Color;

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 無限大（勝ち確定）
    pub const INF: Value = Value(10_000);
    /// 静的評価の上限
    pub const EVAL_INF: Value = Value(Self::INF.0 * 8 / 10);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 静的評価の範囲 [-EVAL_INF, EVAL_INF] に丸める
    #[inline]
    pub const fn clamp_eval(self) -> Value {
        if self.0 > Self::EVAL_INF.0 {
            Self::EVAL_INF
        } else if self.0 < -Self::EVAL_INF.0 {
            Value(-Self::EVAL_INF.0)
        } else {
            self
        }
    }

    /// 白視点の値を `side` 視点に変換
    #[inline]
    pub const fn for_side(self, side: Color) -> Value {
        Value(self.0 * side.sign())
    }

    /// 勝ちスコアかどうか
    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 >= Self::INF.0
    }

    /// 負けスコアかどうか
    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 <= -Self::INF.0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_win() {
            write!(f, "+inf")
        } else if self.is_loss() {
            write!(f, "-inf")
        } else {
            write!(f, "{:+}", self.0)
        }
    }
}
