// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kanon_core::{ConfigOptions, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => Self::Csv,
            FormatArg::Tsv => Self::Tsv,
            FormatArg::Json => Self::Json,
            FormatArg::Jsonl => Self::Jsonl,
            FormatArg::Yaml => Self::Yaml,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kanon", version, about = "表データの k-匿名化ツール (Mondrian 分割)")]
pub struct Args {
    /// 入力テーブル
    pub input: PathBuf,

    /// 匿名性パラメータ k (グループの最小サイズ)
    #[arg(short, long)]
    pub k: usize,

    /// 準識別子の列 (カンマ区切り)
    #[arg(long, value_delimiter = ',', required = true)]
    pub quasi: Vec<String>,

    /// センシティブ属性の列
    #[arg(long)]
    pub sensitive: String,

    /// 数値として扱う列 (カンマ区切り)
    #[arg(long, value_delimiter = ',')]
    pub numeric: Vec<String>,

    /// ヘッダー行を持たない入力の列名 (カンマ区切り)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// フィールド区切り文字
    #[arg(long)]
    pub delimiter: Option<char>,

    /// 欠損値トークン (空文字列で抑制を無効化)
    #[arg(long, default_value = "?")]
    pub na: String,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// 出力先ファイル (省略時は標準出力)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 判別可能性指標のみ出力
    #[arg(long)]
    pub metric_only: bool,
}

impl From<Args> for ConfigOptions {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            k: args.k,
            quasi: args.quasi,
            sensitive: args.sensitive,
            numeric: args.numeric,
            columns: args.columns,
            delimiter: args.delimiter,
            na_token: Some(args.na),
            format: args.format.into(),
            output: args.output,
            metric_only: args.metric_only,
        }
    }
}
