//! MeCabの解析結果1文書分を扱うファサード
//!
//! [`Document`]はMeCab形式のテキストを保持し、整形・形態素の切り出し・
//! 重要語の順位付け・複合語の連結・書き出しまでを順に呼び出します。
//! 重要語の列と連結後の形態素列は、最初に必要になった時点で一度だけ
//! 計算して保持します。

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::Result;
use crate::normalizer;
use crate::parser;
use crate::ranker::TermRanker;
use crate::record::MorphemeRecord;
use crate::resolver;
use crate::writer;

/// 文書が与えられなかったことを表すテキスト
///
/// 形態素を1つも含まない文書として扱われます。
pub const EMPTY_DOCUMENT: &str = "None";

/// MeCabの解析結果1文書分
///
/// # 例
///
/// ```
/// use morphjoin::{Document, NoRanker};
///
/// let text = "犬\t名詞,一般,*,*,*,*,犬,イヌ,イヌ\n小屋\t名詞,一般,*,*,*,*,小屋,コヤ,コヤ\nEOS\n";
/// let mut doc = Document::new(text).with_ranked_phrases(["犬 小屋"]);
///
/// assert_eq!("犬小屋", doc.wakati(&NoRanker)?);
/// assert_eq!(
///     "犬小屋\t名詞,一般,*,*,*,*,犬小屋,イヌコヤ,イヌコヤ\nEOS\n",
///     doc.to_mecab_string(&NoRanker)?,
/// );
/// # Ok::<(), morphjoin::errors::MorphjoinError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    raw_text: String,
    normalized_text: String,
    phrases: Option<Vec<String>>,
    merged: Option<Vec<MorphemeRecord>>,
}

impl Document {
    /// MeCab形式のテキストから文書を作成します。
    ///
    /// テキストはこの時点で1行10列に整形されます。
    pub fn new<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        let raw_text = text.into();
        let normalized_text = normalizer::normalize(&raw_text);
        Self {
            raw_text,
            normalized_text,
            phrases: None,
            merged: None,
        }
    }

    /// 形態素を含まない文書を作成します。
    pub fn empty() -> Self {
        Self::new(EMPTY_DOCUMENT)
    }

    /// ファイルに保存されたMeCab形式のテキストから文書を作成します。
    ///
    /// # エラー
    ///
    /// ファイルが読めない場合、またはUTF-8でない場合は
    /// [`MorphjoinError`](crate::errors::MorphjoinError)が返されます。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(text))
    }

    /// リーダーからMeCab形式のテキストを読み込んで文書を作成します。
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、または入力がUTF-8でない場合は
    /// [`MorphjoinError`](crate::errors::MorphjoinError)が返されます。
    pub fn from_reader<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut buf = vec![];
        rdr.read_to_end(&mut buf)?;
        let text = std::str::from_utf8(&buf)?;
        Ok(Self::new(text))
    }

    /// 重要度の高い順に並んだフレーズを与えます。
    pub fn with_ranked_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_ranked_phrases(phrases);
        self
    }

    /// 重要度の高い順に並んだフレーズを与えます。
    ///
    /// 算出器による順位付けの代わりにこの列が使われます。すでに連結済みの
    /// 形態素列は破棄され、次に必要になった時点で作り直されます。
    pub fn set_ranked_phrases<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = Some(phrases.into_iter().map(Into::into).collect());
        self.merged = None;
    }

    /// 与えられたままのテキストを返します。
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// 整形済みのテキストを返します。
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// 保持しているフレーズの列を返します。まだ無ければ `None` です。
    pub fn cached_ranked_phrases(&self) -> Option<&[String]> {
        self.phrases.as_deref()
    }

    /// 重要度の高い順に並んだフレーズを返します。
    ///
    /// 初回だけ`ranker`に整形済みテキストを渡して順位付けし、結果を保持します。
    ///
    /// # エラー
    ///
    /// 算出器がエラーを返した場合、そのエラーが返されます。
    pub fn ranked_phrases<R>(&mut self, ranker: &R) -> Result<&[String]>
    where
        R: TermRanker + ?Sized,
    {
        let phrases = match self.phrases.take() {
            Some(phrases) => phrases,
            None => {
                let phrases = ranker.rank(&self.normalized_text)?;
                log::debug!("ranker returned {} phrases", phrases.len());
                phrases
            }
        };
        Ok(self.phrases.insert(phrases).as_slice())
    }

    /// 連結前の形態素列を返します。
    pub fn raw_morphemes(&self) -> Vec<MorphemeRecord> {
        parser::parse(&self.normalized_text)
    }

    /// 複合語を連結した形態素列を返します。
    ///
    /// フレーズが無ければ先に[`Self::ranked_phrases`]で順位付けし、連結前の
    /// 形態素列をフレーズの順に一度だけ連結します。結果は保持されます。
    ///
    /// # エラー
    ///
    /// 順位付けまたは連結が失敗した場合は
    /// [`MorphjoinError`](crate::errors::MorphjoinError)が返されます。
    pub fn merged_morphemes<R>(&mut self, ranker: &R) -> Result<&[MorphemeRecord]>
    where
        R: TermRanker + ?Sized,
    {
        let merged = match self.merged.take() {
            Some(merged) => merged,
            None => {
                let mut records = self.raw_morphemes();
                let phrases = self.ranked_phrases(ranker)?;
                resolver::resolve(&mut records, phrases)?;
                records
            }
        };
        Ok(self.merged.insert(merged).as_slice())
    }

    /// 連結後の形態素列の分かち書きを返します。
    pub fn wakati<R>(&mut self, ranker: &R) -> Result<String>
    where
        R: TermRanker + ?Sized,
    {
        Ok(writer::wakati(self.merged_morphemes(ranker)?))
    }

    /// 連結後の形態素列をMeCab形式の文字列で返します。
    pub fn to_mecab_string<R>(&mut self, ranker: &R) -> Result<String>
    where
        R: TermRanker + ?Sized,
    {
        Ok(writer::to_mecab_string(self.merged_morphemes(ranker)?))
    }

    /// 連結後の形態素列をMeCab形式で書き出します。
    ///
    /// # エラー
    ///
    /// 順位付け・連結・書き込みのいずれかが失敗した場合は
    /// [`MorphjoinError`](crate::errors::MorphjoinError)が返されます。
    pub fn write_mecab<R, W>(&mut self, ranker: &R, wtr: W) -> Result<()>
    where
        R: TermRanker + ?Sized,
        W: Write,
    {
        writer::write_mecab(self.merged_morphemes(ranker)?, wtr)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
