//! The player view: fetch state, cards, and renderers.
//!
//! - `state`: the loading / error / ready state machine and the mounted view
//! - `card`: per-player display data and stat formatting
//! - `render`: text, JSON, and HTML output
//! - `images`: per-card image-load checks

pub mod card;
pub mod images;
pub mod render;
pub mod state;

pub use card::{build_cards, format_diff, format_woba, ImageSource, PlayerCard, PLACEHOLDER};
pub use images::hide_unavailable_images;
pub use render::{render_html, render_json, render_text, render_view};
pub use state::{FetchState, Page, StatsView};
