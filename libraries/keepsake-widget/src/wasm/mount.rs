//! `mountGallery` entry point
//!
//! Builds the widget over the live document, wires every page and media
//! event into it, and registers with `window.elementSdk` when the hosting
//! page builder provides one.

use super::{DocumentSurface, HtmlAudio, WindowScheduler};
use crate::{
    content::{self, Capabilities},
    error::WidgetError,
    logging,
    settings::WidgetSettings,
    widget::GalleryWidget,
};
use js_sys::{Function, Object, Reflect};
use keepsake_core::{ids, ElementId};
use serde::Serialize;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{Event, EventTarget, HtmlInputElement, MouseEvent, Node, Window};

type BrowserWidget = GalleryWidget<DocumentSurface, HtmlAudio, WindowScheduler>;
type SharedWidget = Rc<RefCell<BrowserWidget>>;
type HostCallback = Closure<dyn FnMut(JsValue) -> JsValue>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn detach(&self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
    }
}

/// Run `f` against the widget if it is still mounted and not already busy
fn with_widget(widget: &Weak<RefCell<BrowserWidget>>, f: impl FnOnce(&mut BrowserWidget)) {
    let Some(widget) = widget.upgrade() else {
        return;
    };
    match widget.try_borrow_mut() {
        Ok(mut widget) => f(&mut widget),
        Err(_) => tracing::warn!("gallery busy, event dropped"),
    };
}

fn to_js(err: WidgetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_plain_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Host configuration object as a JSON map (`null`/`undefined` is empty)
fn config_map(value: &JsValue) -> Result<Map<String, Value>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Map::new());
    }
    Ok(serde_wasm_bindgen::from_value(value.clone())?)
}

/// Settings argument as a JSON document: a string is taken as-is, an
/// object is stringified
fn settings_json(value: &JsValue) -> Result<Option<String>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    if let Some(text) = value.as_string() {
        return Ok(Some(text));
    }
    Ok(Some(String::from(js_sys::JSON::stringify(value)?)))
}

fn pointer_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| f64::from(mouse.client_x()))
}

struct Binder {
    widget: Weak<RefCell<BrowserWidget>>,
    listeners: Vec<Listener>,
}

impl Binder {
    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        mut handler: impl FnMut(&mut BrowserWidget, &Event) + 'static,
    ) -> Result<(), JsValue> {
        let widget = self.widget.clone();
        let callback = Closure::wrap(Box::new(move |e: Event| {
            with_widget(&widget, |w| handler(w, &e));
        }) as Box<dyn FnMut(Event)>);

        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    fn listen_on(
        &mut self,
        surface: &DocumentSurface,
        id: &ElementId,
        event: &'static str,
        handler: impl FnMut(&mut BrowserWidget, &Event) + 'static,
    ) -> Result<(), JsValue> {
        match surface.element(id) {
            Some(element) => self.listen(&element, event, handler),
            None => {
                tracing::warn!(id = %id, event, "element missing, listener not bound");
                Ok(())
            }
        }
    }
}

fn bind_page(
    binder: &mut Binder,
    surface: &DocumentSurface,
    audio: &HtmlAudio,
    total_slides: usize,
) -> Result<(), JsValue> {
    binder.listen_on(surface, &ids::THEME_TOGGLE, "click", |w, _| {
        w.toggle_theme();
    })?;

    // Player transport
    binder.listen_on(surface, &ids::PLAY_BUTTON, "click", |w, _| {
        w.player_mut().toggle_play();
    })?;
    binder.listen_on(surface, &ids::NEXT_BUTTON, "click", |w, _| {
        w.player_mut().next_track();
    })?;
    binder.listen_on(surface, &ids::PREV_BUTTON, "click", |w, _| {
        w.player_mut().previous_track();
    })?;
    binder.listen_on(surface, &ids::VOLUME_SLIDER, "input", |w, e| {
        let level = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.value().parse::<u8>().ok());
        if let Some(level) = level {
            w.player_mut().set_volume(level);
        }
    })?;

    // Seek bar: thumb drag seeks on release, bar click seeks at once
    binder.listen_on(surface, &ids::PROGRESS_THUMB, "mousedown", |w, e| {
        e.prevent_default();
        w.player_mut().begin_drag();
    })?;
    let document: EventTarget = surface.document().clone().into();
    binder.listen(&document, "mousedown", |w, _| {
        w.player_mut().on_pointer_down();
    })?;
    binder.listen(&document, "mousemove", |w, e| {
        if let Some(x) = pointer_x(e) {
            w.player_mut().update_drag_position(x);
        }
    })?;
    binder.listen(&document, "mouseup", |w, e| {
        if let Some(x) = pointer_x(e) {
            w.player_mut().end_drag(x);
        }
    })?;
    // A drag released over the bar is followed by a bar click; the
    // controller drops that one
    let thumb = surface.element(&ids::PROGRESS_THUMB);
    binder.listen_on(surface, &ids::PROGRESS_BAR, "click", move |w, e| {
        let on_thumb = match (&thumb, e.target().and_then(|t| t.dyn_into::<Node>().ok())) {
            (Some(thumb), Some(target)) => thumb.contains(Some(&target)),
            _ => false,
        };
        if !on_thumb {
            if let Some(x) = pointer_x(e) {
                w.player_mut().click_bar(x);
            }
        }
    })?;

    // Media element notifications
    let media: &EventTarget = audio.element();
    binder.listen(media, "play", |w, _| w.player_mut().on_playback_started())?;
    binder.listen(media, "pause", |w, _| w.player_mut().on_playback_paused())?;
    binder.listen(media, "timeupdate", |w, _| w.player_mut().on_time_update())?;
    binder.listen(media, "ended", |w, _| w.player_mut().on_playback_ended())?;

    // Slideshow
    binder.listen_on(surface, &ids::NEXT_SLIDE, "click", |w, _| {
        w.slides_mut().user_advance();
    })?;
    binder.listen_on(surface, &ids::PREV_SLIDE, "click", |w, _| {
        w.slides_mut().user_retreat();
    })?;
    binder.listen_on(surface, &ids::AUTOPLAY_TOGGLE, "click", |w, _| {
        w.slides_mut().toggle_autoplay();
    })?;
    for index in 0..total_slides {
        binder.listen_on(surface, &ids::thumbnail(index), "click", move |w, _| {
            if let Err(err) = w.slides_mut().user_go_to(index) {
                tracing::warn!(index, error = %err, "thumbnail jump rejected");
            }
        })?;
    }

    binder.listen_on(surface, &ids::STORY_TEXT, "input", |w, _| {
        w.on_story_input();
    })?;

    Ok(())
}

/// Register with `window.elementSdk` if the host page provides it
///
/// The callbacks only hold a weak reference to the widget and are leaked to
/// JavaScript, so a host calling them after unmount gets a no-op.
fn register_element_sdk(window: &Window, widget: &SharedWidget) -> Result<(), JsValue> {
    let sdk = Reflect::get(window, &JsValue::from_str("elementSdk"))?;
    if sdk.is_undefined() || sdk.is_null() {
        tracing::debug!("no elementSdk on page");
        return Ok(());
    }
    let init: Function = Reflect::get(&sdk, &JsValue::from_str("init"))?.dyn_into()?;

    let weak = Rc::downgrade(widget);
    let on_config_change: HostCallback = Closure::wrap(Box::new(move |config: JsValue| {
        match config_map(&config) {
            Ok(partial) => with_widget(&weak, |w| w.on_config_change(partial)),
            Err(err) => tracing::warn!(error = ?err, "host config is not an object"),
        }
        js_sys::Promise::resolve(&JsValue::UNDEFINED).into()
    }) as Box<dyn FnMut(JsValue) -> JsValue>);

    let map_to_capabilities: HostCallback = Closure::wrap(Box::new(|_config: JsValue| {
        to_plain_js(&Capabilities::default()).unwrap_or(JsValue::UNDEFINED)
    }) as Box<dyn FnMut(JsValue) -> JsValue>);

    let map_to_edit_panel_values: HostCallback = Closure::wrap(Box::new(|config: JsValue| {
        let config = config_map(&config).unwrap_or_default();
        let panel = js_sys::Map::new();
        for (key, value) in content::edit_panel_values(&config) {
            panel.set(&JsValue::from_str(key), &JsValue::from_str(&value));
        }
        panel.into()
    }) as Box<dyn FnMut(JsValue) -> JsValue>);

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("defaultConfig"),
        &to_plain_js(&content::default_config())?,
    )?;
    Reflect::set(&options, &JsValue::from_str("onConfigChange"), on_config_change.as_ref())?;
    Reflect::set(
        &options,
        &JsValue::from_str("mapToCapabilities"),
        map_to_capabilities.as_ref(),
    )?;
    Reflect::set(
        &options,
        &JsValue::from_str("mapToEditPanelValues"),
        map_to_edit_panel_values.as_ref(),
    )?;

    init.call1(&sdk, &options)?;

    on_config_change.forget();
    map_to_capabilities.forget();
    map_to_edit_panel_values.forget();

    tracing::info!("registered with elementSdk");
    Ok(())
}

/// Mount the gallery on the current document
///
/// `settings` is optional: a JSON string or a plain object with any of
/// `slideshow`, `playback` and `tracks`.
#[wasm_bindgen(js_name = mountGallery)]
pub fn mount_gallery(settings: JsValue) -> Result<GalleryHandle, JsValue> {
    // A second mount keeps the first subscriber
    let _ = logging::init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = WidgetSettings::load(settings_json(&settings)?.as_deref()).map_err(to_js)?;
    let surface = DocumentSurface::new(document);
    let audio = HtmlAudio::new()?;
    let scheduler = WindowScheduler::new(window.clone());

    let widget = GalleryWidget::new(settings, surface.clone(), audio.clone(), scheduler.clone())
        .map_err(to_js)?;
    let total_slides = widget.slides().total_slides();
    let widget: SharedWidget = Rc::new(RefCell::new(widget));

    let weak = Rc::downgrade(&widget);
    scheduler.on_fire(move |id| with_widget(&weak, |w| w.on_timer(id)));

    let mut binder = Binder {
        widget: Rc::downgrade(&widget),
        listeners: Vec::new(),
    };
    bind_page(&mut binder, &surface, &audio, total_slides)?;
    register_element_sdk(&window, &widget)?;

    Ok(GalleryHandle {
        widget: Some(widget),
        listeners: binder.listeners,
    })
}

/// Handle to a mounted gallery
#[wasm_bindgen]
pub struct GalleryHandle {
    widget: Option<SharedWidget>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// Push a partial host configuration
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: JsValue) -> Result<(), JsValue> {
        let partial = config_map(&config)?;
        if let Some(widget) = &self.widget {
            with_widget(&Rc::downgrade(widget), |w| w.on_config_change(partial));
        }
        Ok(())
    }

    /// Current player state
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        match &self.widget {
            Some(widget) => to_plain_js(&widget.borrow().player().snapshot()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Player events since the last call
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        let mut events = Vec::new();
        if let Some(widget) = &self.widget {
            with_widget(&Rc::downgrade(widget), |w| events = w.player_mut().drain_events());
        }
        to_plain_js(&events)
    }

    /// Detach every listener and stop autoplay
    pub fn unmount(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        if let Some(widget) = self.widget.take() {
            with_widget(&Rc::downgrade(&widget), BrowserWidget::shutdown);
            tracing::debug!("gallery unmounted");
        }
    }
}

impl Drop for GalleryHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}
