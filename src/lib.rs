use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Document, Element, Event};

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod render;
pub mod surface;
pub mod types;
pub mod view;

use crate::config::ClientConfig;
use crate::dom::DomSurface;
use crate::fetch::FetchApi;
use crate::view::{BoardView, ClickOutcome};

type DomBoardView = BoardView<FetchApi, DomSurface>;

/// JS handle to a running board view.
#[wasm_bindgen]
pub struct BoardApp {
    view: Rc<DomBoardView>,
}

#[wasm_bindgen]
impl BoardApp {
    /// Re-fetches and redraws the board.
    pub fn reload(&self) -> Promise {
        let view = Rc::clone(&self.view);
        future_to_promise(async move {
            view.load_state().await?;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn reset(&self) -> Promise {
        let view = Rc::clone(&self.view);
        future_to_promise(async move {
            view.reset().await?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen(js_name = endGame)]
    pub fn end_game(&self) -> Promise {
        let view = Rc::clone(&self.view);
        future_to_promise(async move {
            view.end_game().await?;
            Ok(JsValue::UNDEFINED)
        })
    }
}

/// Mounts the board view on the page and loads the initial state.
///
/// `config` is a plain object matching `ClientConfig`; `undefined` or `null`
/// selects the defaults.
#[wasm_bindgen]
pub fn run_app(config: JsValue) -> Result<BoardApp, JsValue> {
    console_error_panic_hook::set_once();
    web_logger::init();

    let config: ClientConfig = if config.is_undefined() || config.is_null() {
        ClientConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    log::info!("starting board view against '{}'", config.endpoint(""));

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no browser window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let board = require_element(&document, &config.board_id)?;
    let status = require_element(&document, &config.status_id)?;
    let messages = config
        .messages_id
        .as_deref()
        .and_then(|id| document.get_element_by_id(id));

    let surface = DomSurface::new(window, board, status, messages)?;
    let view = Rc::new(BoardView::new(
        FetchApi::new(config.clone()),
        surface,
        &config,
    ));

    let on_board_click = {
        let view = Rc::clone(&view);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some((row, col)) = dom::cell_from_event(&event) else {
                return;
            };
            let view = Rc::clone(&view);
            spawn_local(async move {
                match view.on_cell_click(row, col).await {
                    Ok(ClickOutcome::Accepted) => log::debug!("move at ({row}, {col}) accepted"),
                    Ok(_) => {}
                    Err(err) => log::error!("move at ({row}, {col}) failed: {err}"),
                }
            });
        })
    };
    view.surface()
        .board_element()
        .add_event_listener_with_callback("click", on_board_click.as_ref().unchecked_ref())?;
    on_board_click.forget();

    if let Some(id) = &config.reset_button_id {
        bind_button(&document, id, &view, |view| async move {
            if let Err(err) = view.reset().await {
                log::error!("reset failed: {err}");
            }
        })?;
    }
    if let Some(id) = &config.end_button_id {
        bind_button(&document, id, &view, |view| async move {
            if let Err(err) = view.end_game().await {
                log::error!("end game failed: {err}");
            }
        })?;
    }

    {
        let view = Rc::clone(&view);
        spawn_local(async move {
            if let Err(err) = view.load_state().await {
                log::error!("initial state load failed: {err}");
            }
        });
    }

    Ok(BoardApp { view })
}

fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))
}

fn bind_button<F, Fut>(
    document: &Document,
    id: &str,
    view: &Rc<DomBoardView>,
    action: F,
) -> Result<(), JsValue>
where
    F: Fn(Rc<DomBoardView>) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let button = require_element(document, id)?;
    let view = Rc::clone(view);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        spawn_local(action(Rc::clone(&view)));
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
