//! Menu Cards Common Library
//!
//! CLIとWeb(WASM)で共有される型とページロジック

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod grouper;
pub mod escape;
pub mod card;
pub mod filter;
pub mod page;
pub mod reveal;
pub mod parallax;
pub mod motion;
pub mod anchor;

pub use types::{MenuDocument, MenuItem};
pub use error::{Error, Result};
pub use config::{CardMode, RendererConfig};
pub use parser::parse_menu_document;
pub use grouper::{group_by_section, SectionBuckets};
pub use escape::escape_html;
pub use card::{build_card, CardModel};
pub use filter::filter_options;
pub use page::{
    CardState, Expansion, FilterChange, ListSlot, PageLayout, PageModel, SectionSlot,
    SectionState, SurprisePick, Visibility,
};
pub use reveal::{RevealController, RevealSetup, RevealState, RevealTarget, RevealThresholds, VisibilityWatch};
pub use parallax::{drift_offset, DriftOffset, DriftSettings, ParallaxController, SectionRect};
pub use motion::resolve_reduced_motion;
pub use anchor::fragment_id;
