use crate::random::RandomSource;

/// Outlines offered on the coloring board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoringShape {
    Circle,
    Square,
    Triangle,
    Star,
}

pub const SHAPES: [ColoringShape; 4] = [
    ColoringShape::Circle,
    ColoringShape::Square,
    ColoringShape::Triangle,
    ColoringShape::Star,
];

impl ColoringShape {
    pub fn id(self) -> &'static str {
        match self {
            ColoringShape::Circle => "circle",
            ColoringShape::Square => "square",
            ColoringShape::Triangle => "triangle",
            ColoringShape::Star => "star",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColoringShape::Circle => "Circle",
            ColoringShape::Square => "Square",
            ColoringShape::Triangle => "Triangle",
            ColoringShape::Star => "Star",
        }
    }

    /// SVG elements drawing the outline inside a `0 0 100 100` view box.
    pub fn outline_markup(self) -> String {
        let body = match self {
            ColoringShape::Circle => "<circle cx=\"50\" cy=\"50\" r=\"42\"/>".to_string(),
            ColoringShape::Square => {
                "<rect x=\"10\" y=\"10\" width=\"80\" height=\"80\" rx=\"6\"/>".to_string()
            }
            ColoringShape::Triangle => "<polygon points=\"50,8 92,88 8,88\"/>".to_string(),
            ColoringShape::Star => format!("<polygon points=\"{}\"/>", star_points(5, 46.0, 19.0)),
        };
        format!(
            "<g fill=\"none\" stroke=\"currentColor\" stroke-width=\"1.6\" stroke-dasharray=\"3 2\" stroke-linejoin=\"round\">{body}</g>"
        )
    }
}

/// Index of a shape other than `current`, chosen uniformly.
pub fn random_shape_index(current: usize, rng: &mut impl RandomSource) -> usize {
    random_other_index(current, SHAPES.len(), rng)
}

pub fn random_other_index(current: usize, len: usize, rng: &mut impl RandomSource) -> usize {
    if len <= 1 {
        return 0;
    }
    // Draw from the remaining len - 1 slots and skip over `current`.
    let pick = rng.index(len - 1);
    if pick >= current.min(len - 1) {
        pick + 1
    } else {
        pick
    }
}

fn star_points(tips: usize, outer: f64, inner: f64) -> String {
    let steps = tips * 2;
    (0..steps)
        .map(|step| {
            let radius = if step % 2 == 0 { outer } else { inner };
            let angle = -std::f64::consts::FRAC_PI_2 + step as f64 * std::f64::consts::PI / tips as f64;
            let x = 50.0 + radius * angle.cos();
            let y = 52.0 + radius * angle.sin();
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::sequence;

    #[test]
    fn next_shape_always_differs() {
        let samples = [0.0, 0.3, 0.6, 0.99];
        for current in 0..SHAPES.len() {
            let mut rng = sequence(&samples);
            for _ in 0..samples.len() {
                let next = random_shape_index(current, &mut rng);
                assert_ne!(next, current);
                assert!(next < SHAPES.len());
            }
        }
    }

    #[test]
    fn every_other_shape_is_reachable() {
        let mut seen = [false; 4];
        let mut rng = sequence(&[0.0, 0.4, 0.8]);
        for _ in 0..3 {
            seen[random_shape_index(1, &mut rng)] = true;
        }
        assert_eq!(seen, [true, false, true, true]);
    }

    #[test]
    fn single_shape_list_stays_at_zero() {
        let mut rng = || 0.7;
        assert_eq!(random_other_index(0, 1, &mut rng), 0);
    }

    #[test]
    fn star_outline_has_ten_vertices() {
        let markup = ColoringShape::Star.outline_markup();
        let points = markup
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        assert_eq!(points.split(' ').count(), 10);
    }
}
