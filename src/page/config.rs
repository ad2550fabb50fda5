use web_sys::HtmlElement;

use crate::requests::RenderMode;

/// Endpoints, element ids and render mode used by the bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub selector_endpoint: String,
    pub delay_endpoint: String,

    pub selector_container: String,
    pub results_container: String,
    pub delay_container: String,
    pub delay_input: String,
    pub test_group: String,

    pub run_trigger: String,
    pub delay_trigger: String,

    pub render_mode: RenderMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selector_endpoint: "latency.pl".into(),
            delay_endpoint: "dyndelay.pl".into(),
            selector_container: "testsel".into(),
            results_container: "content".into(),
            delay_container: "target".into(),
            delay_input: "time".into(),
            test_group: "selected_test".into(),
            run_trigger: "runtests".into(),
            delay_trigger: "fetch".into(),
            render_mode: RenderMode::Raw,
        }
    }
}

impl PageConfig {
    /// Defaults, overridden by `data-render-mode`, `data-selector-endpoint`
    /// and `data-delay-endpoint` on `<body>`.
    pub fn from_body(body: &HtmlElement) -> Self {
        Self::default().with_overrides(|key| body.get_attribute(&format!("data-{}", key)))
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(mode) = lookup("render-mode") {
            match mode.parse() {
                Ok(mode) => self.render_mode = mode,
                Err(err) => log::warn!("{} Keeping `{}`.", err, self.render_mode),
            }
        }
        if let Some(endpoint) = lookup("selector-endpoint").filter(|e| !e.is_empty()) {
            self.selector_endpoint = endpoint;
        }
        if let Some(endpoint) = lookup("delay-endpoint").filter(|e| !e.is_empty()) {
            self.delay_endpoint = endpoint;
        }
        self
    }
}
