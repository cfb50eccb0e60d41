//! 内部ユーティリティ関数
//!
//! フレーズの分割や表層形の取り出しなど、複数のモジュールで使う小さな
//! 処理をまとめています。

use crate::record::MorphemeRecord;

/// フレーズ中のトークンの区切り文字
pub const PHRASE_DELIMITER: char = ' ';

/// フレーズを表層形トークンの列に分割します。
///
/// # 例
///
/// ```
/// # use morphjoin::utils::split_phrase;
/// assert_eq!(vec!["犬", "小屋"], split_phrase("犬 小屋"));
/// ```
pub fn split_phrase(phrase: &str) -> Vec<&str> {
    phrase.split(PHRASE_DELIMITER).collect()
}

/// 形態素列の表層形だけを取り出します。
pub fn surfaces(records: &[MorphemeRecord]) -> Vec<&str> {
    records.iter().map(MorphemeRecord::surface).collect()
}

#[cfg(test)]
/// HashMapリテラルを簡潔に記述するためのマクロ
///
/// # 例
///
/// ```ignore
/// let map = hashmap! {
///     "key1" => "value1",
///     "key2" => "value2",
/// };
/// ```
macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

#[cfg(test)]
pub(crate) use hashmap;
