//! web-sys adapters: live DOM nodes, `window.fetch`, and the page list.

use std::cell::RefCell;
use std::rc::Rc;

use ih_core::Rgb;
use ih_gallery::{
    FetchError, Fetcher, Gallery, GalleryConfig, GalleryError, IconPair, IconSource, IconSurface,
    copy_id, original_id,
};
use ih_svg::DocumentNode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::js_error;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Text of a JS exception or rejection value.
fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("non-string JS error: {value:?}"))
}

fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// A live DOM element seen through the document-node contract.
#[derive(Debug, Clone)]
pub struct DomNode(pub web_sys::Element);

impl DomNode {
    fn style(&self) -> Option<web_sys::CssStyleDeclaration> {
        if let Some(svg) = self.0.dyn_ref::<web_sys::SvgElement>() {
            return Some(svg.style());
        }
        self.0
            .dyn_ref::<web_sys::HtmlElement>()
            .map(web_sys::HtmlElement::style)
    }
}

impl DocumentNode for DomNode {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn is_graphical(&self) -> bool {
        self.0.dyn_ref::<web_sys::SvgGraphicsElement>().is_some()
    }

    fn for_each_child(&mut self, visit: &mut dyn FnMut(&mut Self)) {
        let children = self.0.children();
        for index in 0..children.length() {
            if let Some(child) = children.item(index) {
                visit(&mut DomNode(child));
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            console_error(&format!("cannot set {name}: {}", describe(&err)));
        }
    }

    fn style_property(&self, property: &str) -> Option<String> {
        let value = self.style()?.get_property_value(property).ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_style_property(&mut self, property: &str, value: &str) {
        let Some(style) = self.style() else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            console_error(&format!("cannot set style {property}: {}", describe(&err)));
        }
    }
}

/// [`Fetcher`] over `window.fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebFetcher;

impl Fetcher for WebFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let transport = |message: String| FetchError::Transport {
            url: url.to_string(),
            message,
        };

        let window = web_sys::window().ok_or_else(|| transport("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|err| transport(describe(&err)))?
            .dyn_into::<web_sys::Response>()
            .map_err(|_| transport("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.text().map_err(|err| transport(describe(&err)))?;
        JsFuture::from(body)
            .await
            .map_err(|err| transport(describe(&err)))?
            .as_string()
            .ok_or_else(|| transport("response body is not text".to_string()))
    }
}

/// Appends one `<li>` per icon to a list container: the original frame, the
/// copy frame, and a caption with the file name.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: web_sys::Document,
    container: web_sys::Element,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: web_sys::Document, container: web_sys::Element) -> Self {
        Self {
            document,
            container,
        }
    }

    fn frame(&self, id: &str, size: u32, markup: &str) -> Result<web_sys::Element, JsValue> {
        let frame = self.document.create_element_ns(Some(SVG_NS), "svg")?;
        let size = size.to_string();
        frame.set_attribute("width", &size)?;
        frame.set_attribute("height", &size)?;
        frame.set_id(id);
        frame.set_inner_html(markup);
        Ok(frame)
    }

    fn build(
        &self,
        source: &IconSource,
        markup: &str,
        size: u32,
    ) -> Result<IconPair<DomNode>, JsValue> {
        let item = self.document.create_element("li")?;
        item.set_class_name("flex items-center gap-4");

        let original = self.frame(&original_id(&source.name), size, markup)?;
        let copy = self.frame(&copy_id(&source.name), size, markup)?;

        let caption = self.document.create_element("span")?;
        caption.set_class_name("text-white");
        caption.set_text_content(Some(&source.name));

        item.append_child(&original)?;
        item.append_child(&copy)?;
        item.append_child(&caption)?;
        self.container.append_child(&item)?;

        Ok(IconPair {
            name: source.name.clone(),
            original: DomNode(original),
            copy: DomNode(copy),
        })
    }
}

impl IconSurface for DomSurface {
    type Node = DomNode;

    fn mount(
        &mut self,
        source: &IconSource,
        markup: &str,
        size: u32,
    ) -> Result<IconPair<DomNode>, GalleryError> {
        self.build(source, markup, size)
            .map_err(|err| GalleryError::Surface {
                name: source.name.clone(),
                message: describe(&err),
            })
    }
}

pub(crate) fn start_gallery(
    container_id: &str,
    input_id: &str,
    config: GalleryConfig,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("window has no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| js_error(format!("no element with id '{container_id}'")))?;
    let input = document
        .get_element_by_id(input_id)
        .ok_or_else(|| js_error(format!("no element with id '{input_id}'")))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| js_error(format!("'{input_id}' is not an input element")))?;

    if let Some(initial) = Rgb::parse_css(&config.initial_color) {
        input.set_value(&initial.to_hex());
    }

    let gallery = Gallery::<DomNode>::new(config).map_err(|err| js_error(err.to_string()))?;
    let gallery = Rc::new(RefCell::new(gallery));

    let on_change = {
        let gallery = Rc::clone(&gallery);
        let input = input.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let color = input.value();
            let result = match gallery.try_borrow_mut() {
                Ok(mut gallery) => gallery.set_target(&color).map_err(|err| err.to_string()),
                Err(_) => Err(String::from("gallery is busy")),
            };
            if let Err(message) = result {
                console_error(&format!("cannot recolor icons: {message}"));
            }
        })
    };
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    let mut surface = DomSurface::new(document, container);
    wasm_bindgen_futures::spawn_local(async move {
        let report = Gallery::load(&*gallery, &WebFetcher, &mut surface).await;
        for skipped in &report.skipped {
            console_error(&format!("skipped {}: {}", skipped.name, skipped.reason));
        }
    });
    Ok(())
}
