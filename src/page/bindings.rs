use std::rc::Rc;

use crate::requests::{error_wrap, Fetcher, Spawner, Transport};

use super::{config::PageConfig, context::PageContext};

pub const NO_SELECTION: &str = "Select a test to run.";

/// Page actions: read inputs, fetch, write the result back.
///
/// Overlapping actions on the same container are not ordered, whichever
/// request completes last wins.
pub struct Bindings<C, T, S> {
    page: Rc<C>,
    fetcher: Fetcher<T, S>,
    config: PageConfig,
}

impl<C, T, S> Bindings<C, T, S>
where
    C: PageContext + 'static,
    T: Transport,
    S: Spawner,
{
    pub fn new(page: C, fetcher: Fetcher<T, S>, config: PageConfig) -> Self {
        Self {
            page: Rc::new(page),
            fetcher,
            config,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn page(&self) -> &C {
        &self.page
    }

    pub fn render(&self, id: &str, text: &str) {
        render(self.page.as_ref(), id, text);
    }

    /// Lists the available tests into the selector container. Runs on page
    /// load, so an error here is the first sign the page cannot work.
    pub fn load_test_selector(&self) {
        self.fetch_into(
            &self.config.selector_endpoint,
            &["load=true".to_string()],
            &self.config.selector_container,
        );
    }

    pub fn run_selected_test(&self) {
        let container = &self.config.results_container;
        let test = match self.page.checked_value(&self.config.test_group) {
            Ok(test) => test,
            Err(err) => {
                log::error!("reading `{}`: {}", self.config.test_group, err);
                None
            }
        };

        let Some(test) = test else {
            self.render(container, &error_wrap(NO_SELECTION));
            return;
        };

        let shown = self.config.render_mode.apply(&test);
        self.render(container, &format!("<p>Running test \"{}\"...</p>", shown));
        self.fetch_into(
            &self.config.selector_endpoint,
            &[format!("{}=true", test)],
            container,
        );
    }

    pub fn fetch_delayed(&self) {
        let time = match self.page.input_value(&self.config.delay_input) {
            Ok(time) => time,
            Err(err) => {
                log::error!("reading `{}`: {}", self.config.delay_input, err);
                return;
            }
        };

        self.fetch_into(
            &self.config.delay_endpoint,
            &[format!("time={}", time)],
            &self.config.delay_container,
        );
    }

    fn fetch_into(&self, endpoint: &str, params: &[String], target: &str) {
        let page = self.page.clone();
        let target = target.to_string();
        self.fetcher
            .fetch_text(endpoint, params, self.config.render_mode, move |text| {
                render(page.as_ref(), &target, &text)
            });
    }
}

fn render<C: PageContext + ?Sized>(page: &C, id: &str, text: &str) {
    if let Err(err) = page.set_content(id, text) {
        log::error!("rendering into `{}`: {}", id, err);
    }
}
