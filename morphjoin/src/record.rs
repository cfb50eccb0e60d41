//! 形態素レコードの定義と連結
//!
//! このモジュールは、MeCab形式の解析結果の1行を表す固定長10列の
//! [`MorphemeRecord`]と、連続する複数のレコードを1つの複合語レコードへ
//! まとめる連結処理を提供します。

use std::fmt;
use std::ops::Index;

use crate::errors::{MorphjoinError, Result};

/// 1レコードあたりの列数
pub const NUM_FIELDS: usize = 10;

/// 値が存在しない列に入るプレースホルダ
pub const PLACEHOLDER: &str = "*";

/// レコードの列位置
///
/// MeCab（IPADIC）の出力列の並びに対応します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// 表層形
    Surface = 0,
    /// 品詞
    PartOfSpeech = 1,
    /// 品詞細分類1
    PosSubcategory1 = 2,
    /// 品詞細分類2
    PosSubcategory2 = 3,
    /// 品詞細分類3
    PosSubcategory3 = 4,
    /// 活用型
    ConjugationType = 5,
    /// 活用形
    ConjugationForm = 6,
    /// 原形
    BaseForm = 7,
    /// 読み
    Reading = 8,
    /// 発音
    Pronunciation = 9,
}

impl Field {
    /// すべての列を出力順に並べたもの
    pub const ALL: [Field; NUM_FIELDS] = [
        Field::Surface,
        Field::PartOfSpeech,
        Field::PosSubcategory1,
        Field::PosSubcategory2,
        Field::PosSubcategory3,
        Field::ConjugationType,
        Field::ConjugationForm,
        Field::BaseForm,
        Field::Reading,
        Field::Pronunciation,
    ];

    /// 列の0始まりの位置を返します。
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 複合語の連結時にこの列をどう組み立てるかを返します。
    pub const fn recombination(self) -> Recombination {
        match self {
            Field::Surface => Recombination::Concat,
            Field::BaseForm | Field::Reading | Field::Pronunciation => {
                Recombination::ConcatSkipPlaceholder
            }
            _ => Recombination::CopyLast,
        }
    }
}

/// 連結時の列の組み立て方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recombination {
    /// すべての値をそのまま順に連結する。
    Concat,
    /// `*` を空文字列とみなして順に連結する。
    ConcatSkipPlaceholder,
    /// 最後のレコードの値を写す。
    CopyLast,
}

/// 形態素1つ分の解析結果
///
/// 10列すべてが必ず埋まっていることを型で保証します。値の無い列は
/// [`PLACEHOLDER`]です。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorphemeRecord {
    fields: [String; NUM_FIELDS],
}

impl MorphemeRecord {
    /// 10列の配列からレコードを作成します。
    pub fn new(fields: [String; NUM_FIELDS]) -> Self {
        Self { fields }
    }

    /// 可変長の文字列列からレコードを作成します。
    ///
    /// # エラー
    ///
    /// 要素数が[`NUM_FIELDS`]でない場合、[`MorphjoinError`]が返されます。
    pub fn from_fields<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let len = fields.len();
        let fields: [String; NUM_FIELDS] = fields.try_into().map_err(|_| {
            MorphjoinError::invalid_argument(
                "fields",
                format!("a morpheme record must have {NUM_FIELDS} fields, got {len}"),
            )
        })?;
        Ok(Self { fields })
    }

    /// 指定した列の値を返します。
    #[inline(always)]
    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// 指定した列の値を置き換えます。
    pub fn set<S>(&mut self, field: Field, value: S)
    where
        S: Into<String>,
    {
        self.fields[field.index()] = value.into();
    }

    /// 表層形を返します。
    #[inline(always)]
    pub fn surface(&self) -> &str {
        self.get(Field::Surface)
    }

    /// 原形を返します。
    #[inline(always)]
    pub fn base_form(&self) -> &str {
        self.get(Field::BaseForm)
    }

    /// 読みを返します。
    #[inline(always)]
    pub fn reading(&self) -> &str {
        self.get(Field::Reading)
    }

    /// 発音を返します。
    #[inline(always)]
    pub fn pronunciation(&self) -> &str {
        self.get(Field::Pronunciation)
    }

    /// 表層形を除いた9列（素性）を返します。
    pub fn features(&self) -> &[String] {
        &self.fields[1..]
    }

    /// 10列すべてを返します。
    pub fn fields(&self) -> &[String; NUM_FIELDS] {
        &self.fields
    }

    /// 素性をMeCabと同じカンマ区切りの文字列にします。
    pub fn feature_string(&self) -> String {
        self.features().join(",")
    }

    /// 連続する形態素を1つの複合語レコードにまとめます。
    ///
    /// 表層形・原形・読み・発音は順に連結し、原形・読み・発音については
    /// `*` を空文字列として扱います。それ以外の列は最後のレコードの値を
    /// 写します。要素が1つの場合は元のレコードと等しいものを返します。
    ///
    /// # 引数
    ///
    /// * `run` - 連結する形態素の列
    ///
    /// # エラー
    ///
    /// `run` が空の場合、[`MorphjoinError`]が返されます。
    pub fn merge(run: &[MorphemeRecord]) -> Result<Self> {
        let last = run
            .last()
            .ok_or_else(|| MorphjoinError::invalid_argument("run", "must not be empty"))?;
        if let [only] = run {
            return Ok(only.clone());
        }

        let mut merged = last.clone();
        for field in Field::ALL {
            let value = match field.recombination() {
                Recombination::CopyLast => continue,
                Recombination::Concat => run.iter().map(|r| r.get(field)).collect::<String>(),
                Recombination::ConcatSkipPlaceholder => run
                    .iter()
                    .map(|r| r.get(field))
                    .filter(|v| *v != PLACEHOLDER)
                    .collect::<String>(),
            };
            merged.set(field, value);
        }
        Ok(merged)
    }
}

impl Index<Field> for MorphemeRecord {
    type Output = str;

    fn index(&self, field: Field) -> &str {
        self.get(field)
    }
}

impl fmt::Display for MorphemeRecord {
    /// MeCabの出力と同じ `表層形\t素性` の形式で書き出します。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.surface())?;
        for (i, feature) in self.features().iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            f.write_str(feature)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: [&str; NUM_FIELDS]) -> MorphemeRecord {
        MorphemeRecord::new(fields.map(String::from))
    }

    fn dog() -> MorphemeRecord {
        record(["犬", "A", "*", "*", "*", "*", "*", "犬", "イヌ", "イヌ"])
    }

    fn hut() -> MorphemeRecord {
        record(["小屋", "B", "一般", "*", "*", "*", "*", "小屋", "コヤ", "コヤ"])
    }

    fn roof() -> MorphemeRecord {
        record(["屋根", "C", "接尾", "*", "*", "x", "y", "屋根", "ヤネ", "ヤネ"])
    }

    #[test]
    fn test_merge_two() {
        let merged = MorphemeRecord::merge(&[dog(), hut()]).unwrap();
        assert_eq!("犬小屋", merged.surface());
        assert_eq!("犬小屋", merged.base_form());
        assert_eq!("イヌコヤ", merged.reading());
        assert_eq!("イヌコヤ", merged.pronunciation());
        assert_eq!("B", &merged[Field::PartOfSpeech]);
        assert_eq!("一般", &merged[Field::PosSubcategory1]);
    }

    #[test]
    fn test_merge_single_is_identity() {
        assert_eq!(dog(), MorphemeRecord::merge(&[dog()]).unwrap());
    }

    #[test]
    fn test_merge_empty() {
        assert!(MorphemeRecord::merge(&[]).is_err());
    }

    #[test]
    fn test_merge_skips_placeholder_except_surface() {
        let star = record(["*", "記号", "*", "*", "*", "*", "*", "*", "*", "*"]);
        let merged = MorphemeRecord::merge(&[dog(), star]).unwrap();
        assert_eq!("犬*", merged.surface());
        assert_eq!("犬", merged.base_form());
        assert_eq!("イヌ", merged.reading());
        assert_eq!("記号", &merged[Field::PartOfSpeech]);
    }

    #[test]
    fn test_merge_all_placeholders_is_empty() {
        let a = record(["ア", "A", "*", "*", "*", "*", "*", "*", "*", "*"]);
        let b = record(["イ", "B", "*", "*", "*", "*", "*", "*", "*", "*"]);
        let merged = MorphemeRecord::merge(&[a, b]).unwrap();
        assert_eq!("", merged.reading());
        assert_eq!("", merged.base_form());
    }

    #[test]
    fn test_merge_associative() {
        let direct = MorphemeRecord::merge(&[dog(), hut(), roof()]).unwrap();
        let left = MorphemeRecord::merge(&[
            MorphemeRecord::merge(&[dog(), hut()]).unwrap(),
            roof(),
        ])
        .unwrap();
        let right = MorphemeRecord::merge(&[
            dog(),
            MorphemeRecord::merge(&[hut(), roof()]).unwrap(),
        ])
        .unwrap();
        assert_eq!(direct, left);
        assert_eq!(direct, right);
        for field in Field::ALL {
            if field.recombination() == Recombination::CopyLast {
                assert_eq!(roof().get(field), direct.get(field));
            }
        }
    }

    #[test]
    fn test_from_fields_arity() {
        assert!(MorphemeRecord::from_fields(["a", "b"]).is_err());
        let r = MorphemeRecord::from_fields(dog().fields().clone()).unwrap();
        assert_eq!(dog(), r);
    }

    #[test]
    fn test_display() {
        assert_eq!("犬\tA,*,*,*,*,*,犬,イヌ,イヌ", dog().to_string());
        assert_eq!("A,*,*,*,*,*,犬,イヌ,イヌ", dog().feature_string());
    }
}
