//! Shape Counting Quest page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, Window};

use garden_shared::quest::{
    confetti_pieces, option_label, AnswerOutcome, Assignment, QuestRound, CONFETTI_DURATION_MS,
    CONFETTI_PIECES, ERROR_FLASH_MS, NEXT_ROUND_DELAY_MS,
};

use crate::dom::{create_element, data_index, get_element, listen};
use crate::util::{make_assignment_id, random};

struct QuestView {
    document: Document,
    root: HtmlElement,
    round: HtmlElement,
    options: HtmlElement,
    target: HtmlElement,
    board: HtmlElement,
    status: HtmlElement,
    confetti: HtmlElement,
}

impl QuestView {
    fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            root: get_element(document, "quest")?,
            round: get_element(document, "quest-round")?,
            options: get_element(document, "quest-options")?,
            target: get_element(document, "quest-target")?,
            board: get_element(document, "quest-board")?,
            status: get_element(document, "quest-status")?,
            confetti: get_element(document, "quest-confetti")?,
        })
    }
}

#[derive(Default)]
struct Timers {
    next_round: Option<i32>,
    confetti: Option<i32>,
    error_flash: Option<i32>,
}

#[derive(Clone, Copy)]
enum TimerSlot {
    NextRound,
    Confetti,
    ErrorFlash,
}

impl Timers {
    fn slot(&mut self, slot: TimerSlot) -> &mut Option<i32> {
        match slot {
            TimerSlot::NextRound => &mut self.next_round,
            TimerSlot::Confetti => &mut self.confetti,
            TimerSlot::ErrorFlash => &mut self.error_flash,
        }
    }
}

struct Quest {
    window: Window,
    round: QuestRound,
    error_flash: bool,
    timers: Timers,
    view: QuestView,
}

fn new_assignment() -> Assignment {
    let mut rng = random;
    Assignment::generate(make_assignment_id(), &mut rng)
}

impl Quest {
    fn render(&self) {
        let view = &self.view;
        let assignment = &self.round.assignment;

        view.round
            .set_text_content(Some(&format!("Round {}", self.round.round)));
        view.root.set_class_name(if self.error_flash {
            "game game--error"
        } else {
            "game"
        });

        view.options.set_inner_html("");
        for (index, option) in assignment.options.iter().enumerate() {
            let Ok(button) = create_element::<HtmlButtonElement>(&view.document, "button") else {
                continue;
            };
            let class_name = match self.round.option_state(*option) {
                Some(state) => format!("option-button option-button--{state}"),
                None => "option-button".to_string(),
            };
            button.set_class_name(&class_name);
            let _ = button.set_attribute("type", "button");
            let _ = button.set_attribute("data-index", &index.to_string());
            let _ = button.set_attribute("aria-label", &option_label(*option));
            button.set_disabled(self.round.locked);
            button.set_text_content(Some(&option.to_string()));
            let _ = view.options.append_child(&button);
        }

        view.target
            .set_text_content(Some(assignment.target_label()));

        let cards = assignment
            .shapes
            .iter()
            .map(|shape| format!("<div class=\"shape-card\">{}</div>", shape.kind.svg(shape.color)))
            .collect::<String>();
        view.board.set_inner_html(&cards);

        view.status.set_class_name(&format!(
            "game__status game__status--{}",
            self.round.status.class_suffix()
        ));
        view.status
            .set_text_content(Some(self.round.status.message()));
    }

    fn show_confetti(&self) {
        let mut rng = random;
        let pieces = confetti_pieces(CONFETTI_PIECES, &mut rng);
        let confetti = &self.view.confetti;
        confetti.set_inner_html("");
        for piece in pieces {
            let Ok(span) = create_element::<HtmlElement>(&self.view.document, "span") else {
                continue;
            };
            span.set_class_name("confetti__piece");
            let style = span.style();
            let _ = style.set_property("left", &format!("{}%", piece.left));
            let _ = style.set_property("width", &format!("{}px", piece.width));
            let _ = style.set_property("height", &format!("{}px", piece.height));
            let _ = style.set_property("background-color", piece.color);
            let _ = style.set_property("animation-delay", &format!("{}s", piece.delay));
            let _ = style.set_property("animation-duration", &format!("{}s", piece.duration));
            let _ = style.set_property("--confetti-rotation", &format!("{}deg", piece.rotation));
            let _ = style.set_property("--confetti-drift", &format!("{}px", piece.drift));
            let _ = confetti.append_child(&span);
        }
        confetti.set_hidden(false);
    }

    fn hide_confetti(&self) {
        self.view.confetti.set_hidden(true);
        self.view.confetti.set_inner_html("");
    }
}

/// Replaces the timer in `slot`, cancelling the one it held.
fn schedule(
    quest: &Rc<RefCell<Quest>>,
    slot: TimerSlot,
    delay_ms: i32,
    on_fire: impl FnOnce(&mut Quest) + 'static,
) {
    let mut state = quest.borrow_mut();
    let window = state.window.clone();
    if let Some(handle) = state.timers.slot(slot).take() {
        window.clear_timeout_with_handle(handle);
    }
    let fired = quest.clone();
    let callback = Closure::once_into_js(move || {
        let mut quest = fired.borrow_mut();
        quest.timers.slot(slot).take();
        on_fire(&mut quest);
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    ) {
        Ok(handle) => *state.timers.slot(slot) = Some(handle),
        Err(err) => log::warn!("failed to schedule timer: {err:?}"),
    }
}

fn answer(quest: &Rc<RefCell<Quest>>, index: usize) {
    let outcome = {
        let mut state = quest.borrow_mut();
        let Some(value) = state.round.assignment.options.get(index).copied() else {
            return;
        };
        let outcome = state.round.answer(value);
        match outcome {
            AnswerOutcome::Correct => {
                state.error_flash = false;
                state.show_confetti();
            }
            AnswerOutcome::Wrong => state.error_flash = true,
            AnswerOutcome::Ignored => {
                log::debug!("answer ignored while round is locked");
                return;
            }
        }
        state.render();
        outcome
    };

    match outcome {
        AnswerOutcome::Correct => {
            schedule(quest, TimerSlot::Confetti, CONFETTI_DURATION_MS, |quest| {
                quest.hide_confetti();
            });
            schedule(quest, TimerSlot::NextRound, NEXT_ROUND_DELAY_MS, |quest| {
                quest.round.advance(new_assignment());
                log::debug!("quest round {}", quest.round.round);
                quest.render();
            });
        }
        AnswerOutcome::Wrong => {
            schedule(quest, TimerSlot::ErrorFlash, ERROR_FLASH_MS, |quest| {
                quest.error_flash = false;
                quest.render();
            });
        }
        AnswerOutcome::Ignored => {}
    }
}

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let quest = Rc::new(RefCell::new(Quest {
        window: window.clone(),
        round: QuestRound::new(new_assignment()),
        error_flash: false,
        timers: Timers::default(),
        view: QuestView::from_document(document)?,
    }));
    {
        let quest = quest.borrow();
        quest.hide_confetti();
        quest.render();
    }

    let options = quest.borrow().view.options.clone();
    listen(&options, "click", move |event: Event| {
        if let Some(index) = data_index(&event) {
            answer(&quest, index);
        }
    })?;
    Ok(())
}
