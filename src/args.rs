use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use size_guard_domain::UnresolvedSizePolicy;

use crate::parsers::SizeArg;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    #[cfg(feature = "yaml")]
    Yaml,
}

/// サイズが取得できないパスの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum UnresolvedArg {
    /// 0 バイトとして判定する
    #[default]
    AssumeEmpty,
    /// 不合格とする
    Reject,
}

impl From<UnresolvedArg> for UnresolvedSizePolicy {
    fn from(arg: UnresolvedArg) -> Self {
        match arg {
            UnresolvedArg::AssumeEmpty => Self::AssumeEmpty,
            UnresolvedArg::Reject => Self::Reject,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "size_guard", version, about = "ファイルサイズが指定範囲内かを検証するツール")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 検証するパス
    pub paths: Vec<PathBuf>,

    /// 最小サイズ (例: 1kb, 512b, 2048)
    #[arg(long)]
    pub min: Option<SizeArg>,

    /// 最大サイズ (例: 10MB)
    #[arg(long)]
    pub max: Option<SizeArg>,

    /// --min/--max で作るルールの名前
    #[arg(long, default_value = "size")]
    pub name: String,

    /// ルール定義ファイル (.yaml / .yml / .json)
    #[arg(long, conflicts_with_all = ["min", "max"])]
    pub rules: Option<PathBuf>,

    /// サイズが取得できないパスの扱い
    #[arg(long, value_enum, default_value_t = UnresolvedArg::AssumeEmpty)]
    pub on_unresolved: UnresolvedArg,

    /// シンボリックリンクを辿らずリンク自体のサイズを使う
    #[arg(long)]
    pub no_follow_links: bool,

    /// ディレクトリを再帰的に展開する
    #[arg(short, long)]
    pub recursive: bool,

    /// 再帰展開で隠しファイルも含める
    #[arg(long)]
    pub hidden: bool,

    /// 入力値の JSON 配列 (文字列=パス, {"size": N}=リソース)
    #[arg(long)]
    pub inputs_json: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// 不合格の結果のみ表示
    #[arg(long)]
    pub failures_only: bool,

    /// ログ詳細度 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
