//! MeCab形式テキストからの形態素レコードの切り出し
//!
//! 整形済みのテキストを1行ずつ読み、`表層形\t素性1,...,素性9` の形をした行を
//! [`MorphemeRecord`]に変換します。形に合わない行（`EOS` や空行、列の足りない行）は
//! エラーにせず黙って読み飛ばします。

use std::io::{BufRead, BufReader, Read};
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::Result;
use crate::record::{MorphemeRecord, NUM_FIELDS};

// The first eight feature columns stop at the first comma; the last one runs to the end of the
// line, so any surplus commas end up in the pronunciation column.
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([^\t]+)\t",
        r"([^\t,]*),([^\t,]*),([^\t,]*),([^\t,]*),",
        r"([^\t,]*),([^\t,]*),([^\t,]*),([^\t,]*),",
        r"([^\t]*)$",
    ))
    .unwrap()
});

/// 1行を形態素レコードに変換します。
///
/// # 戻り値
///
/// 行が期待する形をしていれば `Some`、そうでなければ `None`
pub fn parse_line(line: &str) -> Option<MorphemeRecord> {
    let cap = RECORD_RE.captures(line)?;
    let fields: [String; NUM_FIELDS] =
        std::array::from_fn(|i| cap.get(i + 1).map_or("", |m| m.as_str()).to_string());
    Some(MorphemeRecord::new(fields))
}

/// 整形済みのMeCab形式テキストを形態素レコードの列に変換します。
///
/// # 引数
///
/// * `text` - [`normalize`](crate::normalizer::normalize)済みのテキスト
///
/// # 戻り値
///
/// 元の行順に並んだ形態素レコード
///
/// # 例
///
/// ```
/// use morphjoin::parser::parse;
///
/// let records = parse("犬\t名詞,一般,*,*,*,*,犬,イヌ,イヌ\nEOS\n");
/// assert_eq!(1, records.len());
/// assert_eq!("犬", records[0].surface());
/// ```
pub fn parse(text: &str) -> Vec<MorphemeRecord> {
    text.split('\n').filter_map(parse_record_or_skip).collect()
}

/// リーダーから読み込みながら形態素レコードの列に変換します。
///
/// 入力はすでに整形済みであることを想定します。
///
/// # エラー
///
/// 読み込みに失敗した場合、または入力がUTF-8でない場合は
/// [`MorphjoinError`](crate::errors::MorphjoinError)が返されます。
pub fn parse_reader<R>(rdr: R) -> Result<Vec<MorphemeRecord>>
where
    R: Read,
{
    let buf = BufReader::new(rdr);
    let mut records = vec![];
    for line in buf.lines() {
        let line = line?;
        if let Some(record) = parse_record_or_skip(&line) {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_record_or_skip(line: &str) -> Option<MorphemeRecord> {
    let record = parse_line(line);
    if record.is_none() && !line.is_empty() {
        log::trace!("skipping line without morpheme fields: {line:?}");
    }
    record
}
