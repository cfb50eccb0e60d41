//! 重要語の順位付けとの接点
//!
//! 複合語の候補とその重要度は外部の算出器が決めます。このモジュールは
//! 算出器を差し込むための[`TermRanker`]トレイトと、重要度付きの候補を
//! 重要度の高い順のフレーズ列に並べ替える補助関数を提供します。
//!
//! フレーズは表層形を半角スペースで区切った文字列です（例: `"犬 小屋"`）。

use std::cmp::Ordering;
use std::io::{BufRead, BufReader, Read};

use crate::errors::{MorphjoinError, Result};

/// 整形済みのMeCab形式テキストから、重要度の高い順にフレーズを返す算出器
pub trait TermRanker {
    /// フレーズを重要度の高い順に返します。
    ///
    /// # 引数
    ///
    /// * `normalized_text` - 1行10列に整形されたMeCab形式テキスト
    fn rank(&self, normalized_text: &str) -> Result<Vec<String>>;
}

impl<F> TermRanker for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn rank(&self, normalized_text: &str) -> Result<Vec<String>> {
        self(normalized_text)
    }
}

/// 事前に用意したフレーズ列をそのまま返す算出器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedRanker {
    phrases: Vec<String>,
}

impl FixedRanker {
    /// 重要度の高い順に並んだフレーズから作成します。
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// 重要度付きの候補から作成します。
    ///
    /// 並び順は[`rank_by_importance`]に従います。
    pub fn from_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            phrases: rank_by_importance(scores),
        }
    }

    /// フレーズ列を返します。
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl TermRanker for FixedRanker {
    fn rank(&self, _normalized_text: &str) -> Result<Vec<String>> {
        Ok(self.phrases.clone())
    }
}

/// 常に空のフレーズ列を返す算出器
///
/// フレーズを[`Document::set_ranked_phrases`](crate::Document::set_ranked_phrases)で
/// 与える場合や、連結せずに使う場合に指定します。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRanker;

impl TermRanker for NoRanker {
    fn rank(&self, _normalized_text: &str) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// 重要度付きの候補を、重要度の高い順のフレーズ列に並べ替えます。
///
/// 同じ重要度の候補は入力順を保ちます。NaNは最後に回します。
///
/// # 例
///
/// ```
/// use morphjoin::ranker::rank_by_importance;
///
/// let ranked = rank_by_importance([("羅生門", 1.0), ("朱雀 大路", 4.2), ("市女 笠", 1.0)]);
/// assert_eq!(vec!["朱雀 大路", "羅生門", "市女 笠"], ranked);
/// ```
pub fn rank_by_importance<I, S>(scores: I) -> Vec<String>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let mut scored: Vec<(String, f64)> = scores.into_iter().map(|(p, s)| (p.into(), s)).collect();
    scored.sort_by(|(_, a), (_, b)| descending(*a, *b));
    scored.into_iter().map(|(p, _)| p).collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// フレーズファイルを読み込みます。
///
/// 1行に1フレーズを重要度の高い順に並べた形式と、`フレーズ\t重要度` の形式の
/// どちらかを受け付けます。後者は[`rank_by_importance`]で並べ替えます。
/// 空行は無視します。
///
/// # エラー
///
/// 重要度の有無が行によって異なる場合や、重要度が数値として読めない場合は
/// [`MorphjoinError`]が返されます。
pub fn read_phrases<R>(rdr: R) -> Result<Vec<String>>
where
    R: Read,
{
    let buf = BufReader::new(rdr);
    let mut plain = vec![];
    let mut scored = vec![];
    for line in buf.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((phrase, score)) => scored.push((phrase.to_string(), score.trim().parse::<f64>()?)),
            None => plain.push(line),
        }
    }
    match (plain.is_empty(), scored.is_empty()) {
        (_, true) => Ok(plain),
        (true, false) => Ok(rank_by_importance(scored)),
        (false, false) => Err(MorphjoinError::invalid_format(
            "rdr",
            "either every line or no line must carry a tab-separated importance",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_importance_stable_ties() {
        let ranked = rank_by_importance([("a", 1.0), ("b", 2.0), ("c", 1.0), ("d", 2.0)]);
        assert_eq!(vec!["b", "d", "a", "c"], ranked);
    }

    #[test]
    fn test_rank_by_importance_nan_last() {
        let ranked = rank_by_importance([("nan", f64::NAN), ("low", -1.0), ("high", 3.0)]);
        assert_eq!(vec!["high", "low", "nan"], ranked);
    }

    #[test]
    fn test_fixed_ranker() {
        let ranker = FixedRanker::new(["犬 小屋", "犬"]);
        assert_eq!(vec!["犬 小屋", "犬"], ranker.rank("").unwrap());
    }

    #[test]
    fn test_closure_ranker() {
        let ranker = |text: &str| -> Result<Vec<String>> {
            Ok(vec![format!("{} lines", text.lines().count())])
        };
        assert_eq!(vec!["2 lines"], ranker.rank("a\nb").unwrap());
    }

    #[test]
    fn test_read_phrases_plain() {
        let data = "朱雀 大路\n\n羅生門\n";
        assert_eq!(vec!["朱雀 大路", "羅生門"], read_phrases(data.as_bytes()).unwrap());
    }

    #[test]
    fn test_read_phrases_scored() {
        let data = "羅生門\t1.5\n朱雀 大路\t6.0\n";
        assert_eq!(vec!["朱雀 大路", "羅生門"], read_phrases(data.as_bytes()).unwrap());
    }

    #[test]
    fn test_read_phrases_mixed() {
        let data = "羅生門\t1.5\n朱雀 大路\n";
        assert!(read_phrases(data.as_bytes()).is_err());
    }

    #[test]
    fn test_read_phrases_bad_score() {
        assert!(read_phrases("羅生門\tmany\n".as_bytes()).is_err());
    }
}
