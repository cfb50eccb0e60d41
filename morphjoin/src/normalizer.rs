//! MeCab出力の列数の補正
//!
//! MeCabは改行記号など一部の形態素に読みと発音を付けないため、行ごとに
//! 列数が揃わないことがあります。このモジュールは各行を1行10列の形に
//! 整え、後段の[`parser`](crate::parser)が固定長のレコードとして読めるようにします。

use crate::record::NUM_FIELDS;

/// 整形済みの行が素性列に持つカンマの数
pub const WELL_FORMED_COMMAS: usize = NUM_FIELDS - 2;

/// 読みと発音の両方が欠けている行が素性列に持つカンマの数
pub const MISSING_PHONETICS_COMMAS: usize = WELL_FORMED_COMMAS - 2;

/// 1行に対する補正の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRepair {
    /// `EOS` や空行など、素性を持たない行。変更しない。
    Sentinel,
    /// すでに10列ある行。変更しない。
    WellFormed,
    /// 10列を超える行。補正せずにそのまま通す。
    Overlong,
    /// 読みと発音が欠けている行。`,*,*` を付け足す。
    AppendTwo,
    /// それ以外の列が足りない行。`,*` を1つ付け足す。
    AppendOne,
}

impl LineRepair {
    /// 素性列のカンマ数から補正の種類を決めます。
    pub const fn from_comma_count(commas: usize) -> Self {
        match commas {
            0 => Self::Sentinel,
            WELL_FORMED_COMMAS => Self::WellFormed,
            MISSING_PHONETICS_COMMAS => Self::AppendTwo,
            n if n > WELL_FORMED_COMMAS => Self::Overlong,
            _ => Self::AppendOne,
        }
    }

    /// 行を調べて補正の種類を決めます。
    pub fn classify(line: &str) -> Self {
        Self::from_comma_count(feature_comma_count(line))
    }

    /// 行末に付け足す文字列を返します。
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Sentinel | Self::WellFormed | Self::Overlong => "",
            Self::AppendTwo => ",*,*",
            Self::AppendOne => ",*",
        }
    }
}

/// 素性列（最初のタブより後ろ）に含まれるカンマを数えます。
///
/// タブを含まない行は0を返します。表層形そのものがカンマである行を
/// 誤って数えないよう、表層形は対象外です。
pub fn feature_comma_count(line: &str) -> usize {
    line.split_once('\t')
        .map_or(0, |(_, features)| features.matches(',').count())
}

/// 区切り文字（タブとカンマ）の総数を返します。
pub fn delimiter_count(line: &str) -> usize {
    line.matches(|c: char| c == '\t' || c == ',').count()
}

/// 1行を補正します。
pub fn normalize_line(line: &str) -> String {
    let repair = LineRepair::classify(line);
    let mut out = String::with_capacity(line.len() + repair.suffix().len());
    out.push_str(line);
    out.push_str(repair.suffix());
    out
}

/// MeCabで解析したテキスト全体を1行10列になるよう整形します。
///
/// 行は `\n` で分割して補正した後に `\n` で結合し直すため、末尾の改行の
/// 有無はそのまま保たれます。
///
/// # 引数
///
/// * `text` - MeCabの出力テキスト
///
/// # 戻り値
///
/// 整形されたテキスト
///
/// # 例
///
/// ```
/// use morphjoin::normalizer::normalize;
///
/// let text = "。\t記号,句点,*,*,*,*,。\nEOS\n";
/// assert_eq!("。\t記号,句点,*,*,*,*,。,*,*\nEOS\n", normalize(text));
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i != 0 {
            out.push('\n');
        }
        out.push_str(line);
        out.push_str(LineRepair::classify(line).suffix());
    }
    out
}
