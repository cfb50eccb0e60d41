//! # morphjoin
//!
//! morphjoinは、MeCab形式の形態素解析結果に含まれる複合語を、外部の重要語抽出で
//! 得られたフレーズに従って1つの形態素にまとめ直すライブラリです。
//!
//! ## 概要
//!
//! MeCabの出力は形態素ごとに `表層形\t品詞,品詞細分類1,...,発音` の1行で、
//! 文末に `EOS` が付きます。このライブラリは次の処理を提供します。
//!
//! - **列数の補正**: 読みと発音が欠けた行に `*` を補い、1行10列に揃える
//! - **形態素の切り出し**: 整形済みのテキストを固定長のレコード列に変換する
//! - **複合語の連結**: 重要度の高い順にフレーズを当てはめ、一致した範囲を
//!   1つのレコードにまとめる
//! - **書き出し**: 連結後のレコード列をMeCab形式または分かち書きに戻す
//!
//! 重要度の算出そのものは行いません。算出器は[`TermRanker`]トレイトで差し込むか、
//! フレーズの列を直接与えます。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use morphjoin::{Document, FixedRanker};
//!
//! let mecab_text = "\
//! 朱雀\t名詞,固有名詞,地域,一般,*,*,朱雀,スザク,スザク
//! 大路\t名詞,一般,*,*,*,*,大路,オオジ,オージ
//! に\t助詞,格助詞,一般,*,*,*,に,ニ,ニ
//! EOS
//! ";
//!
//! let ranker = FixedRanker::from_scores([("朱雀 大路", 3.5), ("大路", 1.0)]);
//! let mut doc = Document::new(mecab_text);
//!
//! assert_eq!("朱雀大路 に", doc.wakati(&ranker)?);
//!
//! let merged = doc.merged_morphemes(&ranker)?;
//! assert_eq!(2, merged.len());
//! assert_eq!("スザクオオジ", merged[0].reading());
//! assert_eq!("名詞,一般,*,*,*,*,朱雀大路,スザクオオジ,スザクオージ", merged[0].feature_string());
//! # Ok(())
//! # }
//! ```

/// MeCab形式の1文書を扱うファサード
pub mod document;

/// エラー型の定義
pub mod errors;

/// 行ごとの列数の補正
pub mod normalizer;

/// 形態素レコードの切り出し
pub mod parser;

/// 重要語の算出器との接点
pub mod ranker;

/// 形態素レコードと連結規則
pub mod record;

/// 位置を指定した要素の削除
pub mod remover;

/// 複合語フレーズによる連結
pub mod resolver;

/// 内部ユーティリティ関数
pub mod utils;

/// MeCab形式と分かち書きの書き出し
pub mod writer;


// Re-exports
pub use document::Document;
pub use ranker::{FixedRanker, NoRanker, TermRanker};
pub use record::{Field, MorphemeRecord};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
