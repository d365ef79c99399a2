//! `show`: mount the player view once and render its final state.

use std::{future::Future, io, path::PathBuf};

use crate::{
    cli::types::OutputFormat,
    config::Settings,
    stats::StatsClient,
    view::{hide_unavailable_images, render_text, render_view, FetchState, ImageSource, StatsView},
    Result,
};

#[derive(Debug)]
pub struct ShowParams {
    pub format: OutputFormat,
    pub check_images: bool,
    pub output: Option<PathBuf>,
}

/// Fetch, render and emit the view. Returns the state it settled in.
///
/// Ctrl-C while the request is in flight abandons it; the view is left in
/// `Loading` and nothing is rendered.
///
/// # Errors
///
/// Fetch failures are not errors here: they become the `Error` state and are
/// rendered. This only fails when the client cannot be built, the output
/// cannot be encoded, or the output file cannot be written.
pub async fn handle_show(settings: &Settings, params: ShowParams) -> Result<FetchState> {
    let client = StatsClient::new(settings.endpoint.value.clone(), settings.timeout.value)?;
    let images = ImageSource::new(settings.image_base.value.clone());
    let mut view = StatsView::new(client, images);

    if params.format == OutputFormat::Text && params.output.is_none() {
        eprintln!("{}", render_text(&view.page()));
    }

    if mount_or_interrupt(&mut view, tokio::signal::ctrl_c()).await {
        emit(&view, &params).await?;
    }
    Ok(view.state().clone())
}

/// Mount `view` unless `interrupt` resolves first. Returns whether the fetch
/// settled.
///
/// An interrupt that fails (e.g. the Ctrl-C handler cannot be installed) is
/// logged and never fires.
pub async fn mount_or_interrupt<F>(view: &mut StatsView, interrupt: F) -> bool
where
    F: Future<Output = io::Result<()>>,
{
    let interrupt = async {
        if let Err(e) = interrupt.await {
            tracing::warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = view.mount() => true,
        _ = interrupt => {
            tracing::info!("Interrupted before the player stats arrived");
            false
        }
    }
}

/// Render the settled view and write it out.
pub async fn emit(view: &StatsView, params: &ShowParams) -> Result<()> {
    let mut page = view.page();
    if params.check_images {
        hide_unavailable_images(view.client(), page.cards_mut()).await;
    }

    let rendered = render_view(view.state(), &page, params.format)?;
    match &params.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered.trim_end()))?;
            tracing::info!("Wrote {} output to {}", params.format, path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}
