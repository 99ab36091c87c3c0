use crate::constants::{
    CONTAINER_SELECTOR, PRODUCT_CODE_ID, SHADOW_SELECTOR, VARIANT_TEXT_ID,
};
use crate::dom;
use mockup_core::{Layer, PresentationSurface, TextSlot};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Presentation surface backed by inline styles of the mockup's elements.
pub struct CssSurface {
    root: web::HtmlElement,
    container: web::HtmlElement,
    shadow: Option<web::HtmlElement>,
    variant_text: Option<web::Element>,
    product_code: Option<web::Element>,
}

impl CssSurface {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let container = dom::query_html(document, CONTAINER_SELECTOR)
            .ok_or_else(|| anyhow::anyhow!("missing {}", CONTAINER_SELECTOR))?;
        let shadow = dom::query_html(document, SHADOW_SELECTOR);
        if shadow.is_none() {
            log::warn!("[surface] no {} element; shadow disabled", SHADOW_SELECTOR);
        }
        Ok(Self {
            root,
            container,
            shadow,
            variant_text: document.get_element_by_id(VARIANT_TEXT_ID),
            product_code: document.get_element_by_id(PRODUCT_CODE_ID),
        })
    }

    fn layer(&self, layer: Layer) -> Option<&web::HtmlElement> {
        match layer {
            Layer::Root => Some(&self.root),
            Layer::Container => Some(&self.container),
            Layer::Shadow => self.shadow.as_ref(),
        }
    }
}

impl PresentationSurface for CssSurface {
    fn set_property(&mut self, layer: Layer, name: &str, value: &str) {
        if let Some(el) = self.layer(layer) {
            _ = el.style().set_property(name, value);
        }
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let el = match slot {
            TextSlot::VariantName => self.variant_text.as_ref(),
            TextSlot::ProductCode => self.product_code.as_ref(),
        };
        if let Some(el) = el {
            el.set_text_content(Some(text));
        }
    }
}
