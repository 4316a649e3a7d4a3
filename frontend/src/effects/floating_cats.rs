use std::rc::Rc;

use rand::Rng;
use yew::prelude::*;

use crate::effects::frame_loop::FrameLoop;

pub const CAT_COUNT: usize = 12;
/// Glyphs never drift closer than this to a viewport edge.
pub const EDGE_PADDING: f64 = 50.0;
pub const CAT_GLYPHS: [&str; 10] = ["🐱", "🙀", "😻", "😼", "😺", "😽", "😿", "🐈", "🐈‍⬛", "❤️"];

const DRIFT_FREQUENCY: f64 = 0.0003;
const DRIFT_SCALE: f64 = 0.3;
const TILT_FREQUENCY: f64 = 0.002;
const TILT_DEGREES: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let fallback = Self::default();
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.width);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.height);
        Self { width, height }
    }
}

/// Keeps `value` inside `[padding, extent - padding]`; the lower edge wins on tiny extents.
fn clamp_to_edges(value: f64, extent: f64) -> f64 {
    value.min(extent - EDGE_PADDING).max(EDGE_PADDING)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingCat {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub glyph: &'static str,
}

impl FloatingCat {
    pub fn random<R: Rng + ?Sized>(id: usize, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            size: rng.gen_range(40.0..70.0),
            speed: rng.gen_range(0.2..0.7),
            glyph: CAT_GLYPHS[rng.gen_range(0..CAT_GLYPHS.len())],
        }
    }

    pub fn drift(&mut self, now: f64, viewport: Viewport) {
        let phase = now * DRIFT_FREQUENCY + self.id as f64;
        self.x = clamp_to_edges(self.x + phase.sin() * self.speed * DRIFT_SCALE, viewport.width);
        self.y = clamp_to_edges(self.y + phase.cos() * self.speed * DRIFT_SCALE, viewport.height);
    }

    pub fn tilt(&self, now: f64) -> f64 {
        (now * TILT_FREQUENCY + self.id as f64).sin() * TILT_DEGREES
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloatingField {
    cats: Vec<FloatingCat>,
    clock: f64,
}

impl FloatingField {
    pub fn scatter<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            cats: (0..CAT_COUNT)
                .map(|id| FloatingCat::random(id, viewport, rng))
                .collect(),
            clock: 0.0,
        }
    }

    pub fn tick(&mut self, now: f64, viewport: Viewport) {
        for cat in &mut self.cats {
            cat.drift(now, viewport);
        }
        self.clock = now;
    }

    pub fn cats(&self) -> &[FloatingCat] {
        &self.cats
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }
}

pub struct Tick {
    pub now: f64,
    pub viewport: Viewport,
}

impl Reducible for FloatingField {
    type Action = Tick;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.tick(action.now, action.viewport);
        Rc::new(next)
    }
}

/// Slowly drifting cats behind the main page.
#[function_component(FloatingCats)]
pub fn floating_cats() -> Html {
    let field = use_reducer(|| FloatingField::scatter(Viewport::current(), &mut rand::thread_rng()));

    {
        let field = field.clone();
        use_effect_with_deps(
            move |_| {
                let frames = FrameLoop::start(move |_| {
                    field.dispatch(Tick {
                        now: js_sys::Date::now(),
                        viewport: Viewport::current(),
                    });
                });
                if frames.is_none() {
                    log::warn!("Floating background disabled, no animation frames");
                }
                move || drop(frames)
            },
            (),
        );
    }

    let background_css = r#"
        .floating-cats {
            position: fixed;
            inset: 0;
            pointer-events: none;
            overflow: hidden;
            z-index: 0;
        }
        .floating-cats .glow {
            position: absolute;
            inset: 0;
            opacity: 0.3;
            background: linear-gradient(135deg, rgba(168, 85, 247, 0.1), transparent, rgba(236, 72, 153, 0.1));
        }
        .floating-cats .grid {
            position: absolute;
            inset: 0;
            opacity: 0.05;
            background-image:
                linear-gradient(rgba(255, 255, 255, 0.4) 1px, transparent 1px),
                linear-gradient(90deg, rgba(255, 255, 255, 0.4) 1px, transparent 1px);
            background-size: 40px 40px;
        }
        .cat-element {
            position: absolute;
            opacity: 0.4;
            user-select: none;
            line-height: 1;
            will-change: transform;
        }
    "#;

    let now = field.clock();
    html! {
        <div class="floating-cats">
            <style>{background_css}</style>
            <div class="glow"></div>
            {
                field.cats().iter().map(|cat| {
                    let style = format!(
                        "left: {}px; top: {}px; font-size: {}px; transform: translate(-50%, -50%) rotate({}deg);",
                        cat.x,
                        cat.y,
                        cat.size,
                        cat.tilt(now),
                    );
                    html! {
                        <div key={cat.id} class="cat-element" style={style}>{cat.glyph}</div>
                    }
                }).collect::<Html>()
            }
            <div class="grid"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_bounds(cat: &FloatingCat, viewport: Viewport) -> bool {
        cat.x >= EDGE_PADDING
            && cat.x <= viewport.width - EDGE_PADDING
            && cat.y >= EDGE_PADDING
            && cat.y <= viewport.height - EDGE_PADDING
    }

    #[test]
    fn test_scatter_ranges() {
        let viewport = Viewport {
            width: 1440.0,
            height: 900.0,
        };
        let field = FloatingField::scatter(viewport, &mut StdRng::seed_from_u64(42));
        assert_eq!(field.cats().len(), CAT_COUNT);
        for (i, cat) in field.cats().iter().enumerate() {
            assert_eq!(cat.id, i);
            assert!((0.0..viewport.width).contains(&cat.x));
            assert!((0.0..viewport.height).contains(&cat.y));
            assert!((40.0..70.0).contains(&cat.size));
            assert!((0.2..0.7).contains(&cat.speed));
            assert!(CAT_GLYPHS.contains(&cat.glyph));
        }
    }

    #[test]
    fn test_ticks_stay_in_bounds() {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = FloatingField::scatter(viewport, &mut rng);
        let mut now = 1_700_000_000_000.0;
        for _ in 0..5_000 {
            now += 16.0;
            field.tick(now, viewport);
            assert!(field.cats().iter().all(|cat| in_bounds(cat, viewport)));
        }
        assert_eq!(field.clock(), now);
    }

    #[test]
    fn test_edge_cat_is_pulled_inside() {
        let viewport = Viewport::default();
        let mut cat = FloatingCat {
            id: 0,
            x: 1_190.0,
            y: 3.0,
            size: 50.0,
            speed: 0.5,
            glyph: CAT_GLYPHS[0],
        };
        cat.drift(0.0, viewport);
        assert_eq!(cat.x, viewport.width - EDGE_PADDING);
        assert_eq!(cat.y, EDGE_PADDING);
    }

    #[test]
    fn test_drift_follows_phase() {
        let viewport = Viewport::default();
        let mut cat = FloatingCat {
            id: 2,
            x: 600.0,
            y: 400.0,
            size: 50.0,
            speed: 0.5,
            glyph: CAT_GLYPHS[1],
        };
        cat.drift(0.0, viewport);
        assert!((cat.x - (600.0 + 2f64.sin() * 0.15)).abs() < 1e-12);
        assert!((cat.y - (400.0 + 2f64.cos() * 0.15)).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_viewport_pins_to_padding() {
        let viewport = Viewport {
            width: 80.0,
            height: 60.0,
        };
        let mut cat = FloatingCat {
            id: 1,
            x: 40.0,
            y: 30.0,
            size: 45.0,
            speed: 0.3,
            glyph: CAT_GLYPHS[9],
        };
        cat.drift(1_000.0, viewport);
        assert_eq!((cat.x, cat.y), (EDGE_PADDING, EDGE_PADDING));
    }

    #[test]
    fn test_tilt_is_bounded() {
        let cat = FloatingCat::random(5, Viewport::default(), &mut StdRng::seed_from_u64(9));
        for step in 0..1_000 {
            assert!(cat.tilt(step as f64 * 33.0).abs() <= TILT_DEGREES);
        }
    }
}
