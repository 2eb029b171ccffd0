//! `wasm-bindgen` facade for the host page.
//!
//! The page creates one [`MemeCanvas`] per `<canvas>` and forwards DOM
//! events to it. Every call runs the engine handler, applies the resulting
//! actions (redraw, cursor) and, when editor status changed, invokes the
//! host's change callback with the status as JSON. The callback runs after
//! the engine borrow is released, so it may call back into the facade.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{File, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

use crate::background::{SourceKind, validate_upload_mime};
use crate::config::EditorConfig;
use crate::engine::{Action, Engine};
use crate::error::EditorError;
use crate::export::{download_file_name, share_intent_url};
use crate::layer::LayerId;
use crate::templates;
use crate::viewport::Point;

/// Install console logging at `level` ("error" … "trace") and the panic hook.
///
/// Unknown levels fall back to `info`. Calling it twice keeps the first logger.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console_error_panic_hook::set_once();
    let level = level.parse().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("wasm: logger already installed: {e}");
    }
}

/// Built-in templates as a JSON array of `{id, name, url}`.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
#[wasm_bindgen]
pub fn templates_json(show_more: bool) -> Result<String, JsValue> {
    let list: Vec<_> = templates::catalog(show_more).collect();
    Ok(serde_json::to_string(&list).map_err(EditorError::from)?)
}

/// Load callbacks attached to the pending background image.
struct ImageCallbacks {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl ImageCallbacks {
    /// Unhook from the image before the closures are dropped.
    fn detach(&self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

struct Session {
    engine: Engine,
    on_change: Option<js_sys::Function>,
    image_callbacks: Option<ImageCallbacks>,
}

/// Run `f` against the engine, apply its actions, then notify the host.
fn run<F>(session: &RefCell<Session>, f: F) -> Result<(), EditorError>
where
    F: FnOnce(&mut Engine) -> Result<Vec<Action>, EditorError>,
{
    let notify = {
        let mut session = session.borrow_mut();
        let actions = f(&mut session.engine)?;
        if session.engine.apply(&actions)? {
            session.on_change.clone().map(|callback| (callback, session.engine.status()))
        } else {
            None
        }
    };

    if let Some((callback, status)) = notify {
        let json = serde_json::to_string(&status)?;
        callback.call1(&JsValue::NULL, &JsValue::from_str(&json))?;
    }
    Ok(())
}

fn window() -> Result<web_sys::Window, EditorError> {
    web_sys::window().ok_or_else(|| EditorError::Surface("no window".into()))
}

/// One meme editing session bound to a canvas element.
#[wasm_bindgen]
pub struct MemeCanvas {
    session: Rc<RefCell<Session>>,
}

#[wasm_bindgen]
impl MemeCanvas {
    /// Bind to `canvas`. `config_json` may override any [`EditorConfig`] field.
    ///
    /// # Errors
    ///
    /// Returns `Err` for invalid config or a canvas without a 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<MemeCanvas, JsValue> {
        let config = EditorConfig::from_json(config_json.as_deref().unwrap_or_default())?;
        let engine = Engine::new(canvas, config)?;
        log::info!("wasm: meme canvas ready ({}px)", config.surface_size);
        Ok(Self { session: Rc::new(RefCell::new(Session { engine, on_change: None, image_callbacks: None })) })
    }

    /// Register a callback receiving the editor status JSON on every change.
    pub fn set_on_change(&self, callback: js_sys::Function) {
        self.session.borrow_mut().on_change = Some(callback);
    }

    // --- Background ---

    /// Load a built-in template by id.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown id or if the image cannot be created.
    pub fn select_template(&self, id: u32) -> Result<(), JsValue> {
        let template = templates::find(id).ok_or(EditorError::UnknownTemplate { id })?;
        log::info!("wasm: template {} ({})", template.id, template.name);
        Ok(self.load_background(template.url.to_owned(), SourceKind::Template)?)
    }

    /// Load a user-chosen file. Non-image files are rejected without touching
    /// the current background.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a non-image file or if no object URL can be created.
    pub fn load_file(&self, file: File) -> Result<(), JsValue> {
        if let Err(e) = validate_upload_mime(&file.type_()) {
            log::warn!("wasm: rejected upload {:?}: {e}", file.name());
            return Err(e.into());
        }
        let url = web_sys::Url::create_object_url_with_blob(&file)?;
        Ok(self.load_background(url, SourceKind::Upload)?)
    }

    fn load_background(&self, src: String, kind: SourceKind) -> Result<(), EditorError> {
        let image = HtmlImageElement::new()?;
        image.set_cross_origin(Some("anonymous"));

        let mut generation = 0;
        run(&self.session, |engine| {
            let (started, actions) = engine.begin_background(src.clone(), kind, image.clone())?;
            generation = started;
            Ok(actions)
        })?;

        let weak = Rc::downgrade(&self.session);
        let loaded = image.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            let Some(session) = weak.upgrade() else {
                return;
            };
            let (width, height) = (f64::from(loaded.natural_width()), f64::from(loaded.natural_height()));
            if let Err(e) = run(&session, |engine| Ok(engine.image_loaded(generation, width, height))) {
                log::error!("wasm: image load handling failed: {e}");
            }
        });

        let weak = Rc::downgrade(&self.session);
        let onerror = Closure::<dyn FnMut()>::new(move || {
            let Some(session) = weak.upgrade() else {
                return;
            };
            if let Err(e) = run(&session, |engine| Ok(engine.image_failed(generation))) {
                log::error!("wasm: image error handling failed: {e}");
            }
        });

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        let callbacks = ImageCallbacks { image: image.clone(), _onload: onload, _onerror: onerror };
        let previous = self.session.borrow_mut().image_callbacks.replace(callbacks);
        if let Some(previous) = previous {
            previous.detach();
        }

        image.set_src(&src);
        Ok(())
    }

    // --- Text ---

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn set_top_text(&self, text: &str) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.set_text(LayerId::Top, text)))?)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn set_bottom_text(&self, text: &str) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.set_text(LayerId::Bottom, text)))?)
    }

    // --- Pointer ---

    /// # Errors
    ///
    /// Returns `Err` if the redraw or cursor update fails.
    pub fn pointer_down(&self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.on_pointer_down(Point::new(client_x, client_y))))?)
    }

    /// # Errors
    ///
    /// Returns `Err` if the redraw or cursor update fails.
    pub fn pointer_move(&self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.on_pointer_move(Point::new(client_x, client_y))))?)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor update fails.
    pub fn pointer_up(&self) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.on_pointer_up()))?)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor update fails.
    pub fn pointer_leave(&self) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.on_pointer_leave()))?)
    }

    /// Restore both layers to their default placement.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn reset(&self) -> Result<(), JsValue> {
        Ok(run(&self.session, |engine| Ok(engine.reset()))?)
    }

    // --- Export ---

    /// Download the meme as a PNG through a temporary anchor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no background is ready or the browser refuses.
    pub fn download(&self) -> Result<(), JsValue> {
        let data_url = self.session.borrow_mut().engine.export_png_data_url()?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now_ms = js_sys::Date::now() as u64;
        let name = download_file_name(now_ms);

        let document = window()?.document().ok_or_else(|| EditorError::Surface("no document".into()))?;
        let anchor = document.create_element("a")?.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from)?;
        anchor.set_download(&name);
        anchor.set_href(&data_url);
        anchor.click();
        log::info!("wasm: downloaded {name}");
        Ok(())
    }

    /// Open the share intent in a new tab.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no background is ready or the window cannot open.
    pub fn share(&self) -> Result<(), JsValue> {
        if !self.session.borrow().engine.core.can_export() {
            return Err(EditorError::NoBackground.into());
        }
        let url = share_intent_url()?;
        window()?.open_with_url_and_target(url.as_str(), "_blank")?;
        Ok(())
    }

    // --- Queries ---

    /// Current editor status as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn status_json(&self) -> Result<String, JsValue> {
        let status = self.session.borrow().engine.status();
        Ok(serde_json::to_string(&status).map_err(EditorError::from)?)
    }

    pub fn alignment_detected(&self) -> bool {
        self.session.borrow().engine.core.alignment_detected()
    }

    pub fn cursor(&self) -> String {
        self.session.borrow().engine.core.cursor().to_owned()
    }
}
