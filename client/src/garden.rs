//! Coloring Garden page: hosts the painting core on a `<canvas>` and wires
//! the palette, shape controls and container resizing around it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement, Window,
};

use garden_shared::garden::{BoardCommand, GardenState};
use garden_shared::{
    BoardConfig, BrushStyle, CanvasSurface, PaintOp, PointerPhase, PointerStrokeController,
    ResizeSynchronizer,
};

use crate::canvas::ContextRaster;
use crate::dom::{data_index, get_element, listen, pointer_input, screen_rect, set_square_size};
use crate::palette::render_palette;
use crate::resize::{page_transition_persisted, releases_observer, ContainerObserver};
use crate::util::random;

const CONFIG_ELEMENT_ID: &str = "board-config";

struct GardenView {
    document: Document,
    board: HtmlElement,
    canvas: HtmlCanvasElement,
    outline: HtmlElement,
    palette: HtmlElement,
    shape_label: HtmlElement,
    toggle: HtmlInputElement,
    reload_button: HtmlButtonElement,
    new_button: HtmlButtonElement,
}

impl GardenView {
    fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            board: get_element(document, "garden-board")?,
            canvas: get_element(document, "garden-canvas")?,
            outline: get_element(document, "garden-outline")?,
            palette: get_element(document, "garden-palette")?,
            shape_label: get_element(document, "garden-shape-label")?,
            toggle: get_element(document, "garden-toggle")?,
            reload_button: get_element(document, "garden-reload")?,
            new_button: get_element(document, "garden-new")?,
        })
    }
}

struct Garden {
    window: Window,
    state: GardenState,
    controller: PointerStrokeController<ContextRaster>,
    sync: ResizeSynchronizer,
    view: GardenView,
}

impl Garden {
    fn reinitialize(&mut self) {
        let size = self.sync.current();
        let metrics = self
            .controller
            .initialize(size, self.window.device_pixel_ratio());
        set_square_size(&self.view.canvas, size);
        set_square_size(&self.view.outline, size);
        log::debug!(
            "garden canvas ready at {size} ({}px backing, ratio {})",
            metrics.physical_size,
            metrics.device_pixel_ratio
        );
    }

    fn pointer(&mut self, event: &Event, phase: PointerPhase) {
        let input = pointer_input(event, phase);
        let rect = screen_rect(&self.view.canvas);
        match self.controller.handle(input, rect) {
            Some(PaintOp::Dot(point)) => log::trace!("dot at {point:?}"),
            Some(PaintOp::Segment { from, to }) => log::trace!("segment {from:?} -> {to:?}"),
            None => {}
        }
    }

    fn apply(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::Clear => {
                self.controller.clear();
                log::debug!("garden board cleared");
            }
            BoardCommand::Reinitialize => self.reinitialize(),
        }
    }

    fn render_controls(&self) {
        let enabled = self.state.controls_enabled();
        self.view.toggle.set_checked(enabled);
        self.view.reload_button.set_disabled(!enabled);
        self.view.new_button.set_disabled(!enabled);
    }

    fn render_shape(&self) {
        let shape = self.state.shape();
        self.view.shape_label.set_text_content(Some(shape.label()));
        self.view
            .board
            .set_class_name(&format!("coloring-board coloring-board--{}", shape.id()));
        self.view.outline.set_inner_html(&format!(
            "<svg viewBox=\"0 0 100 100\" aria-hidden=\"true\">{}</svg>",
            shape.outline_markup()
        ));
    }

    fn render_palette(&self) {
        render_palette(&self.view.document, &self.view.palette, &self.state);
    }
}

/// Reads an optional JSON override from `<script id="board-config">`.
fn read_config(document: &Document) -> BoardConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return BoardConfig::default();
    };
    match serde_json::from_str::<BoardConfig>(&text) {
        Ok(config) => config.sanitized(),
        Err(err) => {
            log::warn!("ignoring invalid board config: {err}");
            BoardConfig::default()
        }
    }
}

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = read_config(document);
    let view = GardenView::from_document(document)?;
    let raster = ContextRaster::new(view.canvas.clone())?;
    let state = GardenState::new(&config);
    let controller = PointerStrokeController::new(
        CanvasSurface::new(raster),
        BrushStyle {
            color: state.color(),
            width: config.brush_size,
        },
    );
    let garden = Rc::new(RefCell::new(Garden {
        window: window.clone(),
        state,
        controller,
        sync: ResizeSynchronizer::new(config.default_board_size, config.resize_epsilon),
        view,
    }));

    {
        let mut garden = garden.borrow_mut();
        garden.render_palette();
        garden.render_shape();
        garden.render_controls();
        garden.reinitialize();
    }

    let canvas = garden.borrow().view.canvas.clone();
    let pointer_events = [
        ("pointerdown", PointerPhase::Press),
        ("pointermove", PointerPhase::Move),
        ("pointerup", PointerPhase::Release),
        ("pointerleave", PointerPhase::Leave),
        ("pointercancel", PointerPhase::Cancel),
    ];
    for (event_name, phase) in pointer_events {
        let garden = garden.clone();
        listen(&canvas, event_name, move |event: Event| {
            if phase == PointerPhase::Press {
                event.prevent_default();
            }
            garden.borrow_mut().pointer(&event, phase);
        })?;
    }

    {
        let palette = garden.borrow().view.palette.clone();
        let garden = garden.clone();
        listen(&palette, "click", move |event: Event| {
            let Some(index) = data_index(&event) else {
                return;
            };
            let mut garden = garden.borrow_mut();
            if let Some(color) = garden.state.select_color(index) {
                garden.controller.set_color(color);
                garden.render_palette();
            }
        })?;
    }

    {
        let toggle = garden.borrow().view.toggle.clone();
        let garden = garden.clone();
        let input = toggle.clone();
        listen(&toggle, "change", move |_| {
            let mut garden = garden.borrow_mut();
            garden.state.set_controls_enabled(input.checked());
            garden.render_controls();
        })?;
    }

    {
        let reload_button = garden.borrow().view.reload_button.clone();
        let garden = garden.clone();
        listen(&reload_button, "click", move |_| {
            let mut garden = garden.borrow_mut();
            match garden.state.reload_shape() {
                Some(command) => garden.apply(command),
                None => log::debug!("reload ignored, controls disabled"),
            }
        })?;
    }

    {
        let new_button = garden.borrow().view.new_button.clone();
        let garden = garden.clone();
        listen(&new_button, "click", move |_| {
            let mut garden = garden.borrow_mut();
            let mut rng = random;
            match garden.state.new_shape(&mut rng) {
                Some(command) => {
                    garden.render_shape();
                    garden.apply(command);
                }
                None => log::debug!("new shape ignored, controls disabled"),
            }
        })?;
    }

    let board = garden.borrow().view.board.clone();
    let observer = {
        let garden = garden.clone();
        ContainerObserver::observe(&board, move |size| {
            let mut garden = garden.borrow_mut();
            if garden.sync.observe(size).is_some() {
                garden.reinitialize();
            }
        })?
    };
    let observer = Rc::new(RefCell::new(Some(observer)));
    listen(window, "pagehide", move |event: Event| {
        let persisted = page_transition_persisted(&event);
        if releases_observer(persisted) {
            observer.borrow_mut().take();
        } else {
            log::debug!("pagehide persisted={persisted:?}, keeping container observer");
        }
    })?;

    Ok(())
}
