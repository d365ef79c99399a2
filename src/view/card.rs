//! Player cards: the per-player block of the view.
//!
//! Building a card is pure. The same [`PlayerStat`], position and
//! [`ImageSource`] always produce an identical card.

use crate::{
    cli::types::HttpUrl,
    stats::{PlayerId, PlayerStat},
};

/// Shown in place of a stat the payload did not provide as a number.
pub const PLACEHOLDER: &str = "N/A";

pub const WOBA_LABEL: &str = "100PA rolling wOBA";
pub const DIFF_LABEL: &str = "diff_rolling_OBA";

/// Three decimals, with exact halves rounded away from zero.
///
/// `{:.3}` rounds exact binary ties to even (`0.0625` to `0.062`); browsers
/// round them up (`0.063`). Ties at the third decimal are odd multiples of
/// 1/16, so only those take the explicit path.
fn fixed3(v: f64) -> String {
    let sixteenths = v * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 != 0.0 && v.abs() < 1e12 {
        let thousandths = (v * 1000.0).round() as i64;
        let sign = if thousandths < 0 { "-" } else { "" };
        let abs = thousandths.unsigned_abs();
        return format!("{}{}.{:03}", sign, abs / 1000, abs % 1000);
    }
    format!("{:.3}", v)
}

/// `rolling_woba` to three decimals, or the placeholder.
pub fn format_woba(value: Option<f64>) -> String {
    match value {
        Some(v) => fixed3(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// `diff_rolling_OBA` to three decimals with a percent sign, or the bare placeholder.
pub fn format_diff(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", fixed3(v)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Where player plot images live: `<base>/plots/player_<id>.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    base: HttpUrl,
}

impl ImageSource {
    pub fn new(base: HttpUrl) -> Self {
        Self { base }
    }

    pub fn url_for(&self, id: &PlayerId) -> String {
        format!("{}/plots/player_{}.png", self.base.trimmed(), id)
    }
}

/// Display-ready data for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    /// 1-based position in the response.
    pub rank: usize,
    pub name: String,
    pub rolling_woba: String,
    pub diff_rolling_oba: String,
    pub image_url: Option<String>,
}

impl PlayerCard {
    /// Build the card for the player at `index` (0-based) in the response.
    pub fn new(index: usize, stat: &PlayerStat, images: &ImageSource) -> Self {
        Self {
            rank: index + 1,
            name: stat.player_name.clone(),
            rolling_woba: format_woba(stat.rolling_woba),
            diff_rolling_oba: format_diff(stat.diff_rolling_oba),
            image_url: stat.image_id().map(|id| images.url_for(id)),
        }
    }

    pub fn heading(&self) -> String {
        format!("{}. Player name: {}", self.rank, self.name)
    }

    /// Drop the image after it failed to load. Nothing else on the card changes.
    pub fn hide_image(&mut self) {
        self.image_url = None;
    }
}

/// Cards for every player, in response order.
pub fn build_cards(players: &[PlayerStat], images: &ImageSource) -> Vec<PlayerCard> {
    players
        .iter()
        .enumerate()
        .map(|(index, stat)| PlayerCard::new(index, stat, images))
        .collect()
}
