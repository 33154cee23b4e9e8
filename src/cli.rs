use clap::{Parser, Subcommand, ValueEnum};
use menu_cards_common::CardMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-cards")]
#[command(about = "メニューカード描画のプレビュー・確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// セクションごとのカード構成を表示
    Inspect {
        /// メニューJSONファイル（省略時は設定の default_menu）
        menu: Option<PathBuf>,

        /// カードの操作方式
        #[arg(short, long)]
        mode: Option<ModeArg>,

        /// ページ上のプレースホルダ（カンマ区切り、省略時は全セクション）
        #[arg(short, long, value_delimiter = ',')]
        sections: Vec<String>,

        /// カードのマークアップを出力
        #[arg(long)]
        html: bool,
    },

    /// スピリッツで絞り込んだ結果を表示
    Filter {
        /// メニューJSONファイル
        menu: Option<PathBuf>,

        /// 選択するスピリッツ（"All" で全件）
        #[arg(short = 'S', long)]
        spirit: String,

        /// ページ上のプレースホルダ（カンマ区切り）
        #[arg(short, long, value_delimiter = ',')]
        sections: Vec<String>,
    },

    /// おまかせボタンを1回押した結果を表示
    Surprise {
        /// メニューJSONファイル
        menu: Option<PathBuf>,

        /// 事前に選択しておくスピリッツ
        #[arg(short = 'S', long)]
        spirit: Option<String>,

        /// 乱数シード（再現用）
        #[arg(long)]
        seed: Option<u64>,

        /// ページ上のプレースホルダ（カンマ区切り）
        #[arg(short, long, value_delimiter = ',')]
        sections: Vec<String>,
    },

    /// 設定の表示・変更
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,

        /// 既定のカード操作方式を保存
        #[arg(long)]
        set_mode: Option<ModeArg>,

        /// 既定のメニューファイルを保存
        #[arg(long)]
        set_menu: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Accordion,
    Stagger,
}

impl From<ModeArg> for CardMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Accordion => CardMode::Accordion,
            ModeArg::Stagger => CardMode::Stagger,
        }
    }
}
