//! Renderers for the three output formats.
//!
//! All of them are pure: the same page (or state) yields byte-identical
//! output.

use std::fmt::Write;

use crate::{
    cli::types::OutputFormat,
    error::Result,
    view::{
        card::{PlayerCard, DIFF_LABEL, WOBA_LABEL},
        state::{FetchState, Page},
    },
};

pub const TITLE: &str = "MLB underestimated players";
pub const SUBTITLE: &str =
    "Hitters whose expected wOBA has outpaced their actual wOBA over the last 100 plate appearances";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No player data available";

/// Render `state` in `format`. Text and HTML draw `page`; JSON encodes `state`.
pub fn render_view(state: &FetchState, page: &Page, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(page)),
        OutputFormat::Html => Ok(render_html(page)),
        OutputFormat::Json => render_json(state),
    }
}

pub fn render_json(state: &FetchState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn render_text(page: &Page) -> String {
    match page {
        Page::Loading => LOADING_TEXT.to_string(),
        Page::Error { message } => format!("Error: {}", message),
        Page::Empty => EMPTY_TEXT.to_string(),
        Page::Cards(cards) => {
            let mut out = format!("{}\n{}\n", TITLE, SUBTITLE);
            for card in cards {
                out.push('\n');
                out.push_str(&text_card(card));
            }
            out
        }
    }
}

fn text_card(card: &PlayerCard) -> String {
    let mut out = format!(
        "{}\n   {}: {}\n   {}: {}\n",
        card.heading(),
        WOBA_LABEL,
        card.rolling_woba,
        DIFF_LABEL,
        card.diff_rolling_oba
    );
    if let Some(url) = &card.image_url {
        let _ = writeln!(out, "   Plot: {}", url);
    }
    out
}

const HTML_STYLE: &str = "body { font-family: sans-serif; max-width: 860px; margin: 0 auto; padding: 1rem; }
.centered { display: flex; justify-content: center; align-items: center; min-height: 60vh; }
.error { color: #b00020; }
.player-card { margin-bottom: 30px; padding: 1rem; border: 1px solid #ddd; border-radius: 8px; }
.player-card img { max-width: 800px; width: 100%; }";

pub fn render_html(page: &Page) -> String {
    let body = match page {
        Page::Loading => format!("<div class=\"centered\">{}</div>\n", LOADING_TEXT),
        Page::Error { message } => format!(
            "<div class=\"centered error\">Error: {}</div>\n",
            escape_html(message)
        ),
        Page::Empty => format!("<div class=\"centered\">{}</div>\n", EMPTY_TEXT),
        Page::Cards(cards) => {
            let mut out = format!(
                "<header>\n<h1>{}</h1>\n<p>{}</p>\n</header>\n",
                TITLE, SUBTITLE
            );
            for card in cards {
                out.push_str(&html_card(card));
            }
            out
        }
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        TITLE, HTML_STYLE, body
    )
}

fn html_card(card: &PlayerCard) -> String {
    let mut out = format!(
        "<div class=\"player-card\">\n<h2>{}</h2>\n<p>{}: {}</p>\n<p>{}: {}</p>\n",
        escape_html(&card.heading()),
        WOBA_LABEL,
        card.rolling_woba,
        DIFF_LABEL,
        card.diff_rolling_oba
    );
    if let Some(url) = &card.image_url {
        let _ = writeln!(
            out,
            "<img src=\"{}\" alt=\"{} plot\" onerror=\"this.style.display='none'\">",
            escape_html(url),
            escape_html(&card.name)
        );
    }
    out.push_str("</div>\n");
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
