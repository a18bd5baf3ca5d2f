//! 学習済み重み
//!
//! ファイル形式: 特徴量ごとに (中盤, 終盤) の `i16` リトルエンディアンを並べたもの。
//! ヘッダはなく、`2 * FEATURE_COUNT` 個を超える末尾は無視する。

use std::io::Read;

use super::EvalError;

/// 特徴量の総数
pub const FEATURE_COUNT: usize = 2_125_820;

/// 重みの総数（中盤 + 終盤）
pub const WEIGHT_COUNT: usize = FEATURE_COUNT * 2;

/// 特徴量の重み表
#[derive(Clone)]
pub struct Weights {
    values: Box<[i16]>,
}

impl Weights {
    /// 全て 0 の重み
    pub fn zeros() -> Self {
        Self {
            values: vec![0; WEIGHT_COUNT].into_boxed_slice(),
        }
    }

    /// リーダーから読み込む
    pub fn read<R: Read>(reader: R) -> Result<Self, EvalError> {
        let mut bytes = Vec::with_capacity(WEIGHT_COUNT * 2);
        reader.take((WEIGHT_COUNT * 2) as u64).read_to_end(&mut bytes)?;
        if bytes.len() < WEIGHT_COUNT * 2 {
            return Err(EvalError::Truncated {
                expected: WEIGHT_COUNT,
                actual: bytes.len() / 2,
            });
        }

        let values: Box<[i16]> = bytes
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        Ok(Self { values })
    }

    /// 特徴量 `feature` の重みを設定
    pub fn set(&mut self, feature: usize, mg: i16, eg: i16) {
        self.values[feature * 2] = mg;
        self.values[feature * 2 + 1] = eg;
    }

    /// 特徴量 `feature` の (中盤, 終盤) の重み
    #[inline]
    pub fn pair(&self, feature: usize) -> (i32, i32) {
        #[cfg(feature = "checked-features")]
        assert!(feature < FEATURE_COUNT, "feature index out of range: {feature}");
        debug_assert!(feature < FEATURE_COUNT);
        (
            i32::from(self.values[feature * 2]),
            i32::from(self.values[feature * 2 + 1]),
        )
    }
}

impl std::fmt::Debug for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Weights")
            .field("len", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(values: &[i16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_read_sign_extends() {
        let mut raw = vec![0i16; WEIGHT_COUNT];
        raw[0] = -1;
        raw[1] = 300;
        raw[WEIGHT_COUNT - 2] = i16::MIN;
        raw[WEIGHT_COUNT - 1] = i16::MAX;
        let mut bytes = encode(&raw);
        // 末尾のゴミは無視
        bytes.extend_from_slice(&[0xFF, 0xFF, 0x01]);

        let weights = Weights::read(bytes.as_slice()).unwrap();
        assert_eq!(weights.pair(0), (-1, 300));
        assert_eq!(weights.pair(FEATURE_COUNT - 1), (-32768, 32767));
        assert_eq!(weights.pair(1), (0, 0));
    }

    #[test]
    fn test_read_truncated() {
        let bytes = vec![0u8; WEIGHT_COUNT * 2 - 1];
        match Weights::read(bytes.as_slice()) {
            Err(EvalError::Truncated { expected, actual }) => {
                assert_eq!(expected, WEIGHT_COUNT);
                assert_eq!(actual, WEIGHT_COUNT - 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_set() {
        let mut weights = Weights::zeros();
        weights.set(7, 12, -4);
        assert_eq!(weights.pair(7), (12, -4));
        assert_eq!(weights.pair(6), (0, 0));
    }
}
