//! [`Page`] backed by the live `web_sys::Document`.

use ads_ui::{Display, ErrorNotice, Page, PageError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

///
/// DomPage
///

pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn from_window() -> Result<Self, PageError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PageError::Dom("no window.document".to_string()))?;

        Ok(Self { document })
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Dom(format!("#{id} is not an html element")))
    }
}

impl Page for DomPage {
    fn remove_element(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn set_display(&self, id: &str, display: Display) -> Result<(), PageError> {
        self.html_element(id)?
            .style()
            .set_property("display", display.as_css())
            .map_err(dom_error)
    }

    fn append_error_notice(&self, notice: &ErrorNotice) -> Result<(), PageError> {
        let body = self.document.body().ok_or(PageError::MissingBody)?;

        let div = self
            .document
            .create_element("div")
            .map_err(dom_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Dom("div is not an html element".to_string()))?;
        div.set_inner_text(&notice.heading);

        // text, not markup: traces can carry `<` from generic types
        let pre = self.document.create_element("pre").map_err(dom_error)?;
        pre.set_text_content(Some(&notice.trace));

        div.append_child(&pre).map_err(dom_error)?;
        body.append_child(&div).map_err(dom_error)?;

        Ok(())
    }
}

fn dom_error(err: JsValue) -> PageError {
    PageError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

///
/// TESTS
///
