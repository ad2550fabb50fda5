//! Host-side fakes for the browser seams.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use futures::{
    channel::oneshot,
    executor::{LocalPool, LocalSpawner},
    future::{FutureExt, LocalBoxFuture},
    task::LocalSpawnExt,
};

use crate::{
    page::{PageContext, PageError, PageResult},
    requests::{Completion, Spawner, Transport, TransportHandle},
};

pub(crate) struct TestPool(RefCell<LocalPool>);

impl TestPool {
    pub(crate) fn new() -> Self {
        Self(RefCell::new(LocalPool::new()))
    }

    pub(crate) fn spawner(&self) -> TestSpawner {
        TestSpawner(self.0.borrow().spawner())
    }

    pub(crate) fn run(&self) {
        self.0.borrow_mut().run_until_stalled();
    }
}

#[derive(Clone)]
pub(crate) struct TestSpawner(LocalSpawner);

impl Spawner for TestSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawn_local(task).expect("test pool is alive");
    }
}

#[derive(Default)]
struct TransportState {
    available: bool,
    opened: usize,
    uris: Vec<String>,
    pending: Vec<Option<oneshot::Sender<Completion>>>,
}

/// Transport whose requests stay in flight until the test completes them.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport(Rc<RefCell<TransportState>>);

impl FakeTransport {
    pub(crate) fn available() -> Self {
        let transport = Self::default();
        transport.0.borrow_mut().available = true;
        transport
    }

    pub(crate) fn unavailable() -> Self {
        Self::default()
    }

    pub(crate) fn opened(&self) -> usize {
        self.0.borrow().opened
    }

    pub(crate) fn uris(&self) -> Vec<String> {
        self.0.borrow().uris.clone()
    }

    /// Finishes the `index`-th issued request.
    pub(crate) fn complete(&self, index: usize, completion: Completion) {
        let sender = self.0.borrow_mut().pending[index]
            .take()
            .expect("request completed twice");
        sender.send(completion).expect("request future dropped");
    }
}

impl Transport for FakeTransport {
    type Handle = FakeHandle;

    fn open(&self) -> Option<FakeHandle> {
        let mut state = self.0.borrow_mut();
        if !state.available {
            return None;
        }
        state.opened += 1;
        Some(FakeHandle(self.0.clone()))
    }
}

pub(crate) struct FakeHandle(Rc<RefCell<TransportState>>);

impl TransportHandle for FakeHandle {
    fn get(self, uri: String) -> LocalBoxFuture<'static, Completion> {
        let (sender, receiver) = oneshot::channel();
        {
            let mut state = self.0.borrow_mut();
            state.uris.push(uri);
            state.pending.push(Some(sender));
        }
        receiver
            .map(|completion| completion.unwrap_or_else(|_| Completion::network_failure()))
            .boxed_local()
    }
}

/// In-memory page: container contents, input values and one radio group.
#[derive(Default)]
pub(crate) struct FakePage {
    pub(crate) contents: RefCell<HashMap<String, String>>,
    pub(crate) inputs: HashMap<String, String>,
    pub(crate) radios: HashMap<String, Vec<(String, bool)>>,
    pub(crate) writes: Cell<usize>,
}

impl FakePage {
    /// A page with the given containers, all empty.
    pub(crate) fn with_containers(ids: &[&str]) -> Self {
        let page = Self::default();
        page.contents
            .borrow_mut()
            .extend(ids.iter().map(|id| (id.to_string(), String::new())));
        page
    }

    pub(crate) fn content(&self, id: &str) -> String {
        self.contents.borrow().get(id).cloned().unwrap_or_default()
    }
}

impl PageContext for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.contents.borrow().contains_key(id) || self.inputs.contains_key(id)
    }

    fn set_content(&self, id: &str, html: &str) -> PageResult<()> {
        let mut contents = self.contents.borrow_mut();
        let slot = contents
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?;
        *slot = html.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn input_value(&self, id: &str) -> PageResult<String> {
        self.inputs
            .get(id)
            .cloned()
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }

    fn checked_value(&self, group: &str) -> PageResult<Option<String>> {
        Ok(self.radios.get(group).and_then(|radios| {
            radios
                .iter()
                .find(|(_, checked)| *checked)
                .map(|(value, _)| value.clone())
        }))
    }
}

/// Fixtures built in the live document.
#[cfg(target_arch = "wasm32")]
pub(crate) mod dom {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlElement, HtmlInputElement};

    pub(crate) fn append(tag: &str, id: &str) -> Result<HtmlElement, JsValue> {
        let element = gloo::utils::document()
            .create_element(tag)?
            .dyn_into::<HtmlElement>()?;
        element.set_id(id);
        gloo::utils::body().append_child(&element)?;
        Ok(element)
    }

    pub(crate) fn append_input(
        kind: &str,
        name: &str,
        value: &str,
        checked: bool,
    ) -> Result<HtmlInputElement, JsValue> {
        let input = gloo::utils::document()
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()?;
        input.set_type(kind);
        input.set_name(name);
        input.set_value(value);
        input.set_checked(checked);
        gloo::utils::body().append_child(&input)?;
        Ok(input)
    }
}
