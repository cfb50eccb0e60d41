//! エラー型の定義
//!
//! このモジュールは、morphjoinライブラリで使用されるすべてのエラー型を定義します。
//! 不正な行や一致しないフレーズはエラーではなく黙って読み飛ばされるため、
//! ここに現れるのは呼び出し側の契約違反と入出力の失敗だけです。

use std::error::Error;
use std::fmt;

/// morphjoin専用のResult型
///
/// エラー型としてデフォルトで[`MorphjoinError`]を使用します。
pub type Result<T, E = MorphjoinError> = std::result::Result<T, E>;

/// morphjoinのエラー型
#[derive(Debug, thiserror::Error)]
pub enum MorphjoinError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 浮動小数点数パースエラー
    ///
    /// 重要度付きフレーズファイルのスコア列の読み込みで発生します。
    #[error(transparent)]
    ParseFloat(std::num::ParseFloatError),

    /// 標準I/Oエラー
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// UTF-8エンコーディングエラー
    #[error(transparent)]
    Utf8(std::str::Utf8Error),

    /// 外部の重要度算出器が返したエラー
    #[error("ranker failed: {0}")]
    Ranker(Box<dyn Error + Send + Sync + 'static>),
}

impl MorphjoinError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// 外部の算出器のエラーをラップします
    pub fn ranker<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        Self::Ranker(error.into())
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// 問題のあった引数の名前を返します。
    pub fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

impl From<std::num::ParseFloatError> for MorphjoinError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(error)
    }
}

impl From<std::str::Utf8Error> for MorphjoinError {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::Utf8(error)
    }
}
