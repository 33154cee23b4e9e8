pub mod menu_card;
pub mod filter_options;
