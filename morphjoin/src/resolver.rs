//! 複合語フレーズによる形態素の連結
//!
//! 重要度の高い順に並んだフレーズを1つずつ取り出し、形態素列の表層形が
//! フレーズのトークンと連続して一致する箇所を探して1つのレコードにまとめます。
//!
//! 1つのフレーズについての処理は次の通りです。
//!
//! 1. トークンが1つだけのフレーズは複合語ではないので読み飛ばす。
//! 2. 処理前の表層形の列から、一致する開始位置を左から順に探す。一致した
//!    範囲の直後から探索を再開するため、同じフレーズの一致どうしは重ならない。
//! 3. 開始位置のレコードを範囲全体を連結したレコードで置き換え、残りの位置を
//!    削除予定にする。
//! 4. 削除予定の位置を[`remover`](crate::remover)でまとめて取り除く。
//!
//! 後に処理されるフレーズは、先のフレーズで連結された後の形態素列を対象にします。

use crate::errors::Result;
use crate::record::MorphemeRecord;
use crate::remover;
use crate::utils;

/// 連結の対象になるフレーズの最小トークン数
pub const MIN_COMPOUND_TOKENS: usize = 2;

/// 1つのフレーズを処理した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseReport {
    /// 処理したフレーズ
    pub phrase: String,

    /// フレーズのトークン数
    pub num_tokens: usize,

    /// 連結した箇所の数
    pub num_matches: usize,
}

/// 表層形の列の中で、トークン列と連続して一致する開始位置を返します。
///
/// 左から探し、一致した範囲とは重ならない位置だけを返します。
/// 例えば `[A, A, A, A]` の中の `[A, A, A]` は位置0の1箇所だけです。
///
/// # 例
///
/// ```
/// use morphjoin::resolver::find_matches;
///
/// let surfaces = ["犬", "小屋", "と", "犬", "小屋"];
/// assert_eq!(vec![0, 3], find_matches(&surfaces, &["犬", "小屋"]));
/// ```
pub fn find_matches<S>(surfaces: &[S], tokens: &[&str]) -> Vec<usize>
where
    S: AsRef<str>,
{
    let n = tokens.len();
    let mut starts = vec![];
    if n == 0 || surfaces.len() < n {
        return starts;
    }
    let mut i = 0;
    while i + n <= surfaces.len() {
        let hit = surfaces[i..i + n]
            .iter()
            .zip(tokens)
            .all(|(s, t)| s.as_ref() == *t);
        if hit {
            starts.push(i);
            i += n;
        } else {
            i += 1;
        }
    }
    starts
}

/// 1つのフレーズについて、形態素列の一致箇所をすべて連結します。
///
/// # 引数
///
/// * `records` - 形態素列。その場で書き換えられます。
/// * `phrase` - 表層形を半角スペースで区切ったフレーズ
///
/// # 戻り値
///
/// 連結した箇所の数。トークンが1つのフレーズや一致が無い場合は0で、
/// 形態素列は変更されません。
///
/// # エラー
///
/// 連結処理が失敗した場合は[`MorphjoinError`](crate::errors::MorphjoinError)が
/// 返されます。その場合も形態素列は変更されません。
pub fn merge_phrase(records: &mut Vec<MorphemeRecord>, phrase: &str) -> Result<usize> {
    let tokens = utils::split_phrase(phrase);
    let n = tokens.len();
    if n < MIN_COMPOUND_TOKENS {
        return Ok(0);
    }

    let starts = find_matches(&utils::surfaces(records), &tokens);
    if starts.is_empty() {
        return Ok(0);
    }

    let mut merged = Vec::with_capacity(starts.len());
    for &start in &starts {
        merged.push(MorphemeRecord::merge(&records[start..start + n])?);
    }

    let mut scheduled = Vec::with_capacity(starts.len() * (n - 1));
    for (&start, record) in starts.iter().zip(merged) {
        log::debug!(
            "merged {n} morphemes at {start} into {:?} for phrase {phrase:?}",
            record.surface()
        );
        records[start] = record;
        scheduled.extend(start + 1..start + n);
    }
    remover::retain_except(records, &scheduled);

    Ok(starts.len())
}

/// 重要度の高い順に並んだフレーズで形態素列を連結します。
///
/// # 引数
///
/// * `records` - 形態素列。その場で書き換えられます。
/// * `phrases` - 重要度の高い順に並んだフレーズ
///
/// # 戻り値
///
/// 複合語として処理したフレーズ（トークンが2つ以上のもの）ごとの結果
///
/// # エラー
///
/// 連結処理が失敗した場合は[`MorphjoinError`](crate::errors::MorphjoinError)が
/// 返されます。それまでに処理したフレーズの連結は残ります。
pub fn resolve<I, S>(records: &mut Vec<MorphemeRecord>, phrases: I) -> Result<Vec<PhraseReport>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reports = vec![];
    for phrase in phrases {
        let phrase = phrase.as_ref();
        let num_tokens = utils::split_phrase(phrase).len();
        if num_tokens < MIN_COMPOUND_TOKENS {
            continue;
        }
        let num_matches = merge_phrase(records, phrase)?;
        reports.push(PhraseReport {
            phrase: phrase.to_string(),
            num_tokens,
            num_matches,
        });
    }
    log::debug!(
        "resolved {} compound phrases, {} records remain",
        reports.len(),
        records.len()
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::parse;
    use crate::record::Field;

    fn letters(surfaces: &[&str]) -> Vec<MorphemeRecord> {
        surfaces
            .iter()
            .map(|s| {
                MorphemeRecord::from_fields([
                    *s, "名詞", "一般", "*", "*", "*", "*", *s, *s, *s,
                ])
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_find_matches_non_overlapping() {
        let surfaces = ["A", "A", "A", "A"];
        assert_eq!(vec![0], find_matches(&surfaces, &["A", "A", "A"]));
        assert_eq!(vec![0, 2], find_matches(&surfaces, &["A", "A"]));
    }

    #[test]
    fn test_find_matches_longer_than_sequence() {
        assert!(find_matches(&["A"], &["A", "B"]).is_empty());
    }

    #[test]
    fn test_merge_phrase_dog_hut() {
        let mut records = parse(
            "犬\tA,*,*,*,*,*,犬,イヌ,イヌ\n小屋\tB,*,*,*,*,*,小屋,コヤ,コヤ\nEOS\n",
        );
        let hut = records[1].clone();
        assert_eq!(1, merge_phrase(&mut records, "犬 小屋").unwrap());
        assert_eq!(1, records.len());
        let r = &records[0];
        assert_eq!("犬小屋", r.surface());
        assert_eq!("犬小屋", r.base_form());
        assert_eq!("イヌコヤ", r.reading());
        for field in [
            Field::PartOfSpeech,
            Field::PosSubcategory1,
            Field::PosSubcategory2,
            Field::PosSubcategory3,
            Field::ConjugationType,
            Field::ConjugationForm,
        ] {
            assert_eq!(hut.get(field), r.get(field));
        }
    }

    #[test]
    fn test_merge_phrase_multiple_matches() {
        let mut records = letters(&["A", "B", "x", "A", "B", "A"]);
        assert_eq!(2, merge_phrase(&mut records, "A B").unwrap());
        assert_eq!(vec!["AB", "x", "AB", "A"], utils::surfaces(&records));
    }

    #[test]
    fn test_merge_phrase_self_overlap() {
        let mut records = letters(&["A", "A", "A", "A"]);
        assert_eq!(1, merge_phrase(&mut records, "A A A").unwrap());
        assert_eq!(vec!["AAA", "A"], utils::surfaces(&records));
    }

    #[test]
    fn test_unmatched_phrase_leaves_sequence_unchanged() {
        let mut records = letters(&["A", "B", "C"]);
        let before = records.clone();
        assert_eq!(0, merge_phrase(&mut records, "B A").unwrap());
        assert_eq!(before, records);
    }

    #[test]
    fn test_single_token_phrase_skipped() {
        let mut records = letters(&["A", "B"]);
        let reports = resolve(&mut records, ["A", "B"]).unwrap();
        assert!(reports.is_empty());
        assert_eq!(vec!["A", "B"], utils::surfaces(&records));
    }

    #[test]
    fn test_resolve_in_rank_order() {
        let mut records = letters(&["A", "B", "C", "D"]);
        let reports = resolve(&mut records, ["B C", "A B", "AB C", "BC D"]).unwrap();
        assert_eq!(vec!["A", "BCD"], utils::surfaces(&records));
        assert_eq!(
            vec![1, 0, 0, 1],
            reports.iter().map(|r| r.num_matches).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_resolve_later_phrase_sees_merged_sequence() {
        let mut records = letters(&["A", "B", "C"]);
        resolve(&mut records, ["A B", "AB C"]).unwrap();
        assert_eq!(vec!["ABC"], utils::surfaces(&records));
    }
}
