use std::{fmt, str::FromStr};

use thiserror::Error;

use super::error::FetchResult;

/// Wraps `message` in the error span the harness stylesheet highlights.
pub fn error_wrap(message: &str) -> String {
    format!("<span class=\"error\">{}</span>", message)
}

/// How text coming from outside the crate (server bodies, form values) is
/// injected into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Inject verbatim. The server pages return markup that relies on this.
    #[default]
    Raw,
    /// HTML-escape before injecting.
    Escaped,
}

impl RenderMode {
    pub fn apply<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            RenderMode::Raw => text.into(),
            RenderMode::Escaped => html_escape::encode_text(text),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown render mode `{0}`, expected `raw` or `escaped`.")]
pub struct UnknownRenderMode(String);

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(RenderMode::Raw),
            "escaped" => Ok(RenderMode::Escaped),
            _ => Err(UnknownRenderMode(s.to_string())),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Raw => f.write_str("raw"),
            RenderMode::Escaped => f.write_str("escaped"),
        }
    }
}

/// Turns a fetch outcome into the text that goes into a container.
pub fn render_outcome(outcome: &FetchResult<String>, mode: RenderMode) -> String {
    match outcome {
        Ok(body) => mode.apply(body).into_owned(),
        Err(err) => err.to_markup(),
    }
}
