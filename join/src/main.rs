//! 複合語を連結するユーティリティ
//!
//! このバイナリは、MeCab形式の解析結果をファイルまたは標準入力から読み込み、
//! フレーズファイルに並んだ複合語を連結して、指定された出力形式
//! （mecab、wakati、detail、phrases）で結果を出力します。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

use morphjoin::errors::MorphjoinError;
use morphjoin::ranker::{self, FixedRanker};
use morphjoin::{Document, Field, MorphemeRecord};

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Mecab,
    Wakati,
    Detail,
    Phrases,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "mecab" => Ok(Self::Mecab),
            "wakati" => Ok(Self::Wakati),
            "detail" => Ok(Self::Detail),
            "phrases" => Ok(Self::Phrases),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "join", about = "Merges compound terms in MeCab output")]
struct Args {
    /// MeCab output to read. Reads stdin when omitted.
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// Ranked phrases, one per line (most important first), or `phrase<TAB>score` lines.
    #[clap(short = 'p', long)]
    phrases: Option<PathBuf>,

    /// Output mode. Choices are mecab, wakati, detail, and phrases.
    #[clap(short = 'O', long, default_value = "mecab")]
    output_mode: OutputMode,

    /// Prints the parsed morphemes without merging.
    #[clap(long)]
    no_merge: bool,
}

/// 実行中に発生する可能性のあるエラー
#[derive(Debug, Error)]
enum JoinError {
    /// ライブラリのエラー
    #[error(transparent)]
    Morphjoin(#[from] MorphjoinError),

    /// 入出力のエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn write_detail<W>(out: &mut W, records: &[MorphemeRecord]) -> Result<(), JoinError>
where
    W: Write,
{
    for r in records {
        writeln!(
            out,
            "{}\tpos={},{},{},{}\tconjugation={},{}\tbase={}\treading={}\tpronunciation={}",
            r.surface(),
            &r[Field::PartOfSpeech],
            &r[Field::PosSubcategory1],
            &r[Field::PosSubcategory2],
            &r[Field::PosSubcategory3],
            &r[Field::ConjugationType],
            &r[Field::ConjugationForm],
            r.base_form(),
            r.reading(),
            r.pronunciation(),
        )?;
    }
    writeln!(out, "{}", morphjoin::writer::EOS)?;
    Ok(())
}

/// メイン関数
///
/// MeCab形式のテキストとフレーズを読み込み、複合語を連結して
/// 指定された形式で標準出力に出力します。
fn main() -> Result<(), JoinError> {
    env_logger::init();
    let args = Args::parse();

    let phrases = match &args.phrases {
        Some(path) => ranker::read_phrases(File::open(path)?)?,
        None => vec![],
    };
    log::info!("loaded {} ranked phrases", phrases.len());
    let ranker = FixedRanker::new(phrases);

    let mut doc = match &args.input {
        Some(path) => Document::from_path(path)?,
        None => Document::from_reader(std::io::stdin().lock())?,
    };

    let raw;
    let records = if args.no_merge {
        raw = doc.raw_morphemes();
        &raw[..]
    } else {
        doc.merged_morphemes(&ranker)?
    };
    log::info!("{} morphemes after processing", records.len());

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    match args.output_mode {
        OutputMode::Mecab => morphjoin::writer::write_mecab(records, &mut out)?,
        OutputMode::Wakati => writeln!(&mut out, "{}", morphjoin::writer::wakati(records))?,
        OutputMode::Detail => write_detail(&mut out, records)?,
        OutputMode::Phrases => {
            for phrase in ranker.phrases() {
                writeln!(&mut out, "{phrase}")?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
