//! Image-load checks for player cards.

use tokio::task::JoinSet;

use crate::{stats::StatsClient, view::card::PlayerCard};

/// Probe every card image concurrently and hide the ones that fail to load.
///
/// Failures stay local to their card. Returns how many images were hidden.
pub async fn hide_unavailable_images(client: &StatsClient, cards: &mut [PlayerCard]) -> usize {
    let mut probes = JoinSet::new();
    for (index, card) in cards.iter().enumerate() {
        if let Some(url) = card.image_url.clone() {
            let client = client.clone();
            probes.spawn(async move { (index, client.image_available(&url).await) });
        }
    }

    let mut hidden = 0;
    while let Some(joined) = probes.join_next().await {
        match joined {
            Ok((index, false)) => {
                cards[index].hide_image();
                hidden += 1;
            }
            Ok((_, true)) => {}
            Err(e) => tracing::warn!("Image probe task failed: {}", e),
        }
    }

    if hidden > 0 {
        tracing::debug!("Hid {} unavailable player images", hidden);
    }
    hidden
}
