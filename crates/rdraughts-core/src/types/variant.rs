//! ルールバリアント

use serde::{Deserialize, Serialize};

/// ルールバリアント
///
/// 盤と駒の動きは共通で、評価関数の特徴量と資産ファイル名が変わる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 国際ルール
    #[default]
    Normal,
    /// Killer（取った直後の升に止まる）
    Killer,
    /// Breakthrough（最初に成った側の勝ち）
    #[serde(alias = "bt")]
    Breakthrough,
    /// ルージング（全駒を失うか動けなくなった側の勝ち）
    Losing,
    /// Frisian（縦横の取りあり）
    Frisian,
}

impl Variant {
    /// 全バリアント
    pub const ALL: [Variant; 5] = [
        Variant::Normal,
        Variant::Killer,
        Variant::Breakthrough,
        Variant::Losing,
        Variant::Frisian,
    ];

    /// 資産ファイル名の接尾辞（`book` + 接尾辞、`eval` + 接尾辞）
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Variant::Normal => "",
            Variant::Killer => "_killer",
            Variant::Breakthrough => "_bt",
            Variant::Losing => "_losing",
            Variant::Frisian => "_frisian",
        }
    }

    /// 表示名
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Normal => "normal",
            Variant::Killer => "killer",
            Variant::Breakthrough => "bt",
            Variant::Losing => "losing",
            Variant::Frisian => "frisian",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "international" => Ok(Variant::Normal),
            "killer" => Ok(Variant::Killer),
            "bt" | "breakthrough" => Ok(Variant::Breakthrough),
            "losing" => Ok(Variant::Losing),
            "frisian" => Ok(Variant::Frisian),
            _ => Err(format!("unknown variant: {s}")),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
