//! DOM rendering surface and delegated click routing.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, Window};

use crate::render::BoardModel;
use crate::surface::Surface;

const ROW_ATTR: &str = "data-row";
const COL_ATTR: &str = "data-col";

/// Draws the board into a `<table>` (or any container) plus a status line.
pub struct DomSurface {
    window: Window,
    document: Document,
    board: Element,
    status: Element,
    messages: Option<Element>,
}

impl DomSurface {
    pub fn new(
        window: Window,
        board: Element,
        status: Element,
        messages: Option<Element>,
    ) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window,
            document,
            board,
            status,
            messages,
        })
    }

    pub fn board_element(&self) -> &Element {
        &self.board
    }

    fn draw(&self, model: &BoardModel) -> Result<(), JsValue> {
        self.board.set_inner_html("");
        for cells in &model.rows {
            let tr = self.document.create_element("tr")?;
            for cell in cells {
                let td = self.document.create_element("td")?;
                td.set_attribute(ROW_ATTR, &cell.row.to_string())?;
                td.set_attribute(COL_ATTR, &cell.col.to_string())?;
                td.set_text_content(Some(cell.glyph));
                tr.append_child(&td)?;
            }
            self.board.append_child(&tr)?;
        }
        self.status.set_text_content(Some(&model.status));

        if let Some(messages) = &self.messages {
            messages.set_inner_html("");
            for text in &model.messages {
                let line = self.document.create_element("p")?;
                line.set_text_content(Some(text));
                messages.append_child(&line)?;
            }
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn show_board(&self, model: &BoardModel) {
        if let Err(err) = self.draw(model) {
            log::error!("failed to draw board: {err:?}");
        }
    }

    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("failed to show alert: {err:?}");
        }
    }
}

/// Resolves the board coordinate of a click delegated to the board element.
/// Returns `None` when the click did not land on a tagged cell.
pub fn cell_from_event(event: &Event) -> Option<(usize, usize)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let cell = target.closest("[data-row][data-col]").ok()??;
    parse_coordinates(
        cell.get_attribute(ROW_ATTR).as_deref(),
        cell.get_attribute(COL_ATTR).as_deref(),
    )
}

fn parse_coordinates(row: Option<&str>, col: Option<&str>) -> Option<(usize, usize)> {
    Some((row?.parse().ok()?, col?.parse().ok()?))
}
