//! The view's fetch state and its one-way transitions.

use serde::Serialize;

use crate::{
    error::Result,
    stats::{PlayerStat, StatsClient},
    view::card::{build_cards, ImageSource, PlayerCard},
};

/// Exactly one of these holds at a time.
///
/// Serializes as a tagged object, e.g. `{"status": "error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchState {
    Loading,
    Error { message: String },
    Ready { players: Vec<PlayerStat> },
}

impl FetchState {
    /// Apply a fetch outcome. Only `Loading` moves; terminal states stay put.
    pub fn resolve(self, outcome: Result<Vec<PlayerStat>>) -> Self {
        match self {
            FetchState::Loading => match outcome {
                Ok(players) => FetchState::Ready { players },
                Err(e) => FetchState::Error {
                    message: e.to_string(),
                },
            },
            terminal => terminal,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error { .. })
    }
}

/// What the renderers draw, derived from a [`FetchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Loading,
    Error { message: String },
    Empty,
    Cards(Vec<PlayerCard>),
}

impl Page {
    pub fn from_state(state: &FetchState, images: &ImageSource) -> Self {
        match state {
            FetchState::Loading => Page::Loading,
            FetchState::Error { message } => Page::Error {
                message: message.clone(),
            },
            FetchState::Ready { players } if players.is_empty() => Page::Empty,
            FetchState::Ready { players } => Page::Cards(build_cards(players, images)),
        }
    }

    pub fn cards_mut(&mut self) -> &mut [PlayerCard] {
        match self {
            Page::Cards(cards) => cards,
            _ => &mut [],
        }
    }
}

/// One mounted instance of the player view.
///
/// Starts in [`FetchState::Loading`]; [`StatsView::mount`] fetches once and
/// settles the state. Dropping the `mount` future before it completes leaves
/// the view in `Loading` for good: the fetch is not retried, and later
/// `mount` calls do nothing.
#[derive(Debug)]
pub struct StatsView {
    client: StatsClient,
    images: ImageSource,
    state: FetchState,
    mounted: bool,
}

impl StatsView {
    pub fn new(client: StatsClient, images: ImageSource) -> Self {
        Self {
            client,
            images,
            state: FetchState::Loading,
            mounted: false,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn client(&self) -> &StatsClient {
        &self.client
    }

    /// Fetch the stats and settle the state. Later calls do nothing.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let outcome = self.client.fetch_players().await;
        if let Err(e) = &outcome {
            tracing::warn!("Error fetching data: {}", e);
        }
        self.resolve(outcome);
    }

    /// Settle the state from an outcome obtained elsewhere.
    pub fn resolve(&mut self, outcome: Result<Vec<PlayerStat>>) {
        let current = std::mem::replace(&mut self.state, FetchState::Loading);
        self.state = current.resolve(outcome);
    }

    pub fn page(&self) -> Page {
        Page::from_state(&self.state, &self.images)
    }
}
