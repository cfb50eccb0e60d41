//! 形態素列の書き出し
//!
//! 形態素列をMeCabと同じテキスト形式に戻す処理と、表層形を半角スペースで
//! 区切った分かち書きへの変換を提供します。

use std::io::{BufWriter, Write};

use crate::errors::Result;
use crate::record::MorphemeRecord;
use crate::utils::PHRASE_DELIMITER;

/// 文末を表す行
pub const EOS: &str = "EOS";

/// 形態素列をMeCab形式で書き出します。
///
/// 各形態素を `表層形\t素性1,...,素性9` の1行とし、行どうしを改行で
/// つないだ後に `\nEOS\n` を付けます。形態素列が空の場合は `\nEOS\n` だけになります。
///
/// # 引数
///
/// * `records` - 書き出す形態素列
/// * `wtr` - 書き込み先
///
/// # エラー
///
/// 書き込みに失敗した場合、I/Oエラーが返されます。
pub fn write_mecab<W>(records: &[MorphemeRecord], wtr: W) -> Result<()>
where
    W: Write,
{
    let mut wtr = BufWriter::new(wtr);
    for (i, record) in records.iter().enumerate() {
        if i != 0 {
            writeln!(&mut wtr)?;
        }
        write!(&mut wtr, "{record}")?;
    }
    writeln!(&mut wtr)?;
    writeln!(&mut wtr, "{EOS}")?;
    wtr.flush()?;
    Ok(())
}

/// 形態素列をMeCab形式の文字列にします。
///
/// # 例
///
/// ```
/// use morphjoin::parser::parse;
/// use morphjoin::writer::to_mecab_string;
///
/// let text = "犬\t名詞,一般,*,*,*,*,犬,イヌ,イヌ\nEOS\n";
/// assert_eq!(text, to_mecab_string(&parse(text)));
/// ```
pub fn to_mecab_string(records: &[MorphemeRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        out.push_str(record.surface());
        out.push('\t');
        out.push_str(&record.feature_string());
    }
    out.push('\n');
    out.push_str(EOS);
    out.push('\n');
    out
}

/// 表層形を半角スペースで区切った分かち書きを返します。
pub fn wakati(records: &[MorphemeRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i != 0 {
            out.push(PHRASE_DELIMITER);
        }
        out.push_str(record.surface());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::parse;
    use crate::resolver::resolve;

    const TEXT: &str = "\
朱雀\t名詞,固有名詞,地域,一般,*,*,朱雀,スザク,スザク
大路\t名詞,一般,*,*,*,*,大路,オオジ,オージ
に\t助詞,格助詞,一般,*,*,*,に,ニ,ニ
EOS
";

    #[test]
    fn test_to_mecab_string_roundtrip() {
        assert_eq!(TEXT, to_mecab_string(&parse(TEXT)));
    }

    #[test]
    fn test_write_mecab_matches_string() {
        let records = parse(TEXT);
        let mut buf = vec![];
        write_mecab(&records, &mut buf).unwrap();
        assert_eq!(to_mecab_string(&records), String::from_utf8(buf).unwrap());
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!("\nEOS\n", to_mecab_string(&[]));
        assert_eq!("", wakati(&[]));
    }

    #[test]
    fn test_wakati() {
        assert_eq!("朱雀 大路 に", wakati(&parse(TEXT)));
    }

    #[test]
    fn test_merged_output_reparses_to_same_surfaces() {
        let mut records = parse(TEXT);
        resolve(&mut records, ["朱雀 大路"]).unwrap();
        let text = to_mecab_string(&records);
        for line in text.lines().filter(|l| *l != EOS) {
            assert_eq!(9, crate::normalizer::delimiter_count(line));
        }
        assert_eq!(wakati(&records), wakati(&parse(&text)));
        assert_eq!("朱雀大路 に", wakati(&records));
        assert!(text.starts_with("朱雀大路\t名詞,一般,*,*,*,*,朱雀大路,スザクオオジ,スザクオージ\n"));
    }
}
