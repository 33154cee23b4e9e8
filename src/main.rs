use clap::Parser;
use menu_cards::{cli, config, error, preview};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use menu_cards_common::{CardMode, RendererConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let config = Config::load()?;
    log::debug!("設定: {:?}", config);

    match cli.command {
        Commands::Inspect { menu, mode, sections, html } => {
            let path = config.resolve_menu(menu)?;
            let items = preview::load_menu(&path)?;
            let renderer = with_mode(&config.renderer, mode.map(CardMode::from));
            let page = preview::render_page(&items, &sections, &renderer);

            if html {
                print!("{}", preview::format_markup(&page));
            } else {
                println!("📋 {}\n", path.display());
                print!("{}", preview::format_page(&page, &preview::options_for(&items, &renderer)));
            }
        }

        Commands::Filter { menu, spirit, sections } => {
            let path = config.resolve_menu(menu)?;
            let items = preview::load_menu(&path)?;
            let mut page = preview::render_page(&items, &sections, &config.renderer);

            let options = preview::options_for(&items, &config.renderer);
            if !options.contains(&spirit) {
                log::warn!("選択肢に無いスピリッツです: {} (選択肢: {})", spirit, options.join(", "));
            }

            let change = page.apply_filter(&spirit);
            print!("{}", preview::format_filter(&page, &change));
        }

        Commands::Surprise { menu, spirit, seed, sections } => {
            let path = config.resolve_menu(menu)?;
            let items = preview::load_menu(&path)?;
            let mut page = preview::render_page(&items, &sections, &config.renderer);

            if let Some(spirit) = spirit {
                page.apply_filter(&spirit);
            }

            let roll: f64 = match seed {
                Some(seed) => StdRng::seed_from_u64(seed).gen(),
                None => rand::thread_rng().gen(),
            };
            let pick = page.surprise(roll, true);
            print!("{}", preview::format_surprise(&page, pick.as_ref()));
        }

        Commands::Config { show, set_mode, set_menu } => {
            let mut config = config;

            if let Some(mode) = set_mode {
                config.set_card_mode(mode.into())?;
                println!("✔ カード操作方式を保存しました: {}", config.renderer.card_mode);
            }

            if let Some(menu) = set_menu {
                config.default_menu = Some(menu);
                config.save()?;
                println!("✔ 既定のメニューファイルを保存しました");
            }

            if show {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn with_mode(renderer: &RendererConfig, mode: Option<CardMode>) -> RendererConfig {
    let mut renderer = renderer.clone();
    if let Some(mode) = mode {
        renderer.card_mode = mode;
    }
    renderer
}
