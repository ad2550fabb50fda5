use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::error::{PageError, PageResult};

/// The parts of the host page the bindings read from and write to.
pub trait PageContext {
    fn has_element(&self, id: &str) -> bool;

    /// Replaces the element's `innerHTML`.
    fn set_content(&self, id: &str, html: &str) -> PageResult<()>;

    fn input_value(&self, id: &str) -> PageResult<String>;

    /// Value of the first checked input named `group`, if any.
    fn checked_value(&self, group: &str) -> PageResult<Option<String>>;
}

/// The live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomPage;

impl DomPage {
    fn document(&self) -> PageResult<Document> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or(PageError::NoDocument)
    }

    fn element(&self, id: &str) -> PageResult<Element> {
        self.document()?
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }
}

impl PageContext for DomPage {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_ok()
    }

    fn set_content(&self, id: &str, html: &str) -> PageResult<()> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn input_value(&self, id: &str) -> PageResult<String> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .map_err(|_| PageError::NotAnInput(id.to_string()))
    }

    fn checked_value(&self, group: &str) -> PageResult<Option<String>> {
        let radios = self.document()?.get_elements_by_name(group);
        let checked = (0..radios.length())
            .filter_map(|k| radios.item(k))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .find(HtmlInputElement::checked)
            .map(|input| input.value());
        Ok(checked)
    }
}
