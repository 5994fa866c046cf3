//! Shape Counting Quest: count the shapes of one type and pick the matching
//! number from four options.

use std::collections::BTreeSet;

use crate::random::{pick, shuffle, RandomSource};

pub const TOTAL_SHAPES: usize = 6;
pub const OPTION_COUNT: usize = 4;
pub const MAX_OPTION: u32 = TOTAL_SHAPES as u32 + 3;
pub const CONFETTI_PIECES: usize = 90;

pub const NEXT_ROUND_DELAY_MS: i32 = 1200;
pub const CONFETTI_DURATION_MS: i32 = 1200;
pub const ERROR_FLASH_MS: i32 = 1000;

pub const QUEST_PALETTE: [&str; 7] = [
    "#f97316", "#facc15", "#34d399", "#60a5fa", "#a855f7", "#f43f5e", "#22d3ee",
];

const INFO_MESSAGE: &str = "Tap the right number to move on.";
const SUCCESS_MESSAGE: &str = "Fantastic! New challenge coming right up!";
const ERROR_MESSAGE: &str = "Not quite. Try a different number!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
    Diamond,
}

pub const SHAPE_KINDS: [ShapeKind; 4] = [
    ShapeKind::Square,
    ShapeKind::Circle,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
];

impl ShapeKind {
    pub fn singular(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Diamond => "diamond",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ShapeKind::Square => "squares",
            ShapeKind::Circle => "circles",
            ShapeKind::Triangle => "triangles",
            ShapeKind::Diamond => "diamonds",
        }
    }

    pub fn svg(self, color: &str) -> String {
        let (label, body) = match self {
            ShapeKind::Square => (
                "Square",
                format!("<rect x=\"12\" y=\"12\" width=\"72\" height=\"72\" rx=\"14\" fill=\"{color}\"/>"),
            ),
            ShapeKind::Circle => (
                "Circle",
                format!("<circle cx=\"48\" cy=\"48\" r=\"36\" fill=\"{color}\"/>"),
            ),
            ShapeKind::Triangle => (
                "Triangle",
                format!("<polygon points=\"48 12, 88 84, 8 84\" fill=\"{color}\"/>"),
            ),
            ShapeKind::Diamond => (
                "Diamond",
                format!("<polygon points=\"48 8, 88 48, 48 88, 8 48\" fill=\"{color}\"/>"),
            ),
        };
        format!(
            "<svg class=\"shape\" viewBox=\"0 0 96 96\" role=\"img\" aria-label=\"{label}\">{body}</svg>"
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestShape {
    pub id: String,
    pub kind: ShapeKind,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub shapes: Vec<QuestShape>,
    pub target: ShapeKind,
    pub correct_count: u32,
    pub options: Vec<u32>,
}

impl Assignment {
    pub fn generate(id: String, rng: &mut impl RandomSource) -> Self {
        let shapes = (0..TOTAL_SHAPES)
            .map(|index| QuestShape {
                id: format!("{id}-{index}"),
                kind: *pick(rng, &SHAPE_KINDS).unwrap_or(&ShapeKind::Square),
                color: pick(rng, &QUEST_PALETTE).copied().unwrap_or(QUEST_PALETTE[0]),
            })
            .collect::<Vec<_>>();
        let target = pick(rng, &shapes)
            .map(|shape| shape.kind)
            .unwrap_or(ShapeKind::Square);
        let correct_count = shapes.iter().filter(|shape| shape.kind == target).count() as u32;
        let options = create_options(correct_count, rng);
        Self {
            id,
            shapes,
            target,
            correct_count,
            options,
        }
    }

    /// Noun for the question, singular only when exactly one shape matches.
    pub fn target_label(&self) -> &'static str {
        if self.correct_count == 1 {
            self.target.singular()
        } else {
            self.target.plural()
        }
    }
}

/// Four distinct answers in `0..=MAX_OPTION`, one of them correct, shuffled.
pub fn create_options(correct_count: u32, rng: &mut impl RandomSource) -> Vec<u32> {
    let mut choices = BTreeSet::from([correct_count]);
    while choices.len() < OPTION_COUNT {
        let candidate = rng.index(MAX_OPTION as usize + 1) as u32;
        choices.insert(candidate);
    }
    let mut options = choices.into_iter().collect::<Vec<_>>();
    shuffle(rng, &mut options);
    options
}

pub fn option_label(option: u32) -> String {
    let noun = if option == 1 { "shape" } else { "shapes" };
    format!("{option} {noun}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StatusKind::Info => INFO_MESSAGE,
            StatusKind::Success => SUCCESS_MESSAGE,
            StatusKind::Error => ERROR_MESSAGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Round locked; the host schedules confetti and the next round.
    Correct,
    /// Host flashes the error state.
    Wrong,
    Ignored,
}

#[derive(Clone, Debug)]
pub struct QuestRound {
    pub round: u32,
    pub assignment: Assignment,
    pub status: StatusKind,
    pub selected: Option<u32>,
    pub locked: bool,
}

impl QuestRound {
    pub fn new(assignment: Assignment) -> Self {
        Self {
            round: 1,
            assignment,
            status: StatusKind::Info,
            selected: None,
            locked: false,
        }
    }

    pub fn answer(&mut self, value: u32) -> AnswerOutcome {
        if self.locked {
            return AnswerOutcome::Ignored;
        }
        self.selected = Some(value);
        if value == self.assignment.correct_count {
            self.locked = true;
            self.status = StatusKind::Success;
            AnswerOutcome::Correct
        } else {
            self.status = StatusKind::Error;
            AnswerOutcome::Wrong
        }
    }

    pub fn advance(&mut self, assignment: Assignment) {
        self.assignment = assignment;
        self.round += 1;
        self.selected = None;
        self.status = StatusKind::Info;
        self.locked = false;
    }

    /// CSS modifier for an option button: marked only once selected.
    pub fn option_state(&self, option: u32) -> Option<&'static str> {
        if self.selected != Some(option) {
            return None;
        }
        if option == self.assignment.correct_count {
            Some("correct")
        } else {
            Some("wrong")
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left: f64,
    pub delay: f64,
    pub duration: f64,
    pub rotation: i32,
    pub drift: i32,
    pub color: &'static str,
    pub width: f64,
    pub height: f64,
}

pub fn confetti_pieces(count: usize, rng: &mut impl RandomSource) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| {
            let size = rng.range(8.0, 15.0);
            ConfettiPiece {
                left: rng.range(0.0, 100.0),
                delay: rng.range(0.0, 0.25),
                duration: rng.range(1.0, 1.75),
                rotation: rng.index(360) as i32,
                drift: rng.index(140) as i32 - 70,
                color: pick(rng, &QUEST_PALETTE).copied().unwrap_or(QUEST_PALETTE[0]),
                width: size,
                height: size * rng.range(0.9, 1.9),
            }
        })
        .collect()
}
