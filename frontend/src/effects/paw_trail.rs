use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::Rng;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// A paw print is gone once it is this old.
pub const PAW_LIFETIME_MS: f64 = 15_000.0;
/// Full opacity until this age, then a linear fade to the end of the lifetime.
pub const FADE_START_MS: f64 = 13_000.0;
pub const SWEEP_INTERVAL_MS: u32 = 50;
pub const PAW_VARIANTS: u8 = 4;
const PAW_SIZE_PX: f64 = 48.0;

pub fn opacity_at(age_ms: f64) -> f64 {
    if age_ms < FADE_START_MS {
        1.0
    } else {
        (1.0 - (age_ms - FADE_START_MS) / (PAW_LIFETIME_MS - FADE_START_MS)).clamp(0.0, 1.0)
    }
}

/// Heading in degrees of the move from `from` to `to`.
pub fn heading_degrees(from: (f64, f64), to: (f64, f64)) -> f64 {
    (to.1 - from.1).atan2(to.0 - from.0).to_degrees()
}

pub fn random_variant<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=PAW_VARIANTS)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PawPrint {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub created_at: f64,
    pub variant: u8,
    pub rotation: f64,
}

impl PawPrint {
    pub fn age(&self, now: f64) -> f64 {
        (now - self.created_at).max(0.0)
    }

    pub fn opacity(&self, now: f64) -> f64 {
        opacity_at(self.age(now))
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) >= PAW_LIFETIME_MS
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PawTrail {
    prints: Vec<PawPrint>,
    last_click: Option<(f64, f64)>,
    next_id: u64,
    /// Time of the last sweep; drives the fade between clicks.
    clock: f64,
}

impl PawTrail {
    pub fn click(&mut self, x: f64, y: f64, now: f64, variant: u8) -> &PawPrint {
        let rotation = self
            .last_click
            .map(|from| heading_degrees(from, (x, y)))
            .unwrap_or(0.0);
        self.prints.push(PawPrint {
            id: self.next_id,
            x,
            y,
            created_at: now,
            variant: variant.clamp(1, PAW_VARIANTS),
            rotation,
        });
        self.next_id += 1;
        self.last_click = Some((x, y));
        self.clock = self.clock.max(now);
        &self.prints[self.prints.len() - 1]
    }

    /// Drops expired prints and returns how many went.
    pub fn sweep(&mut self, now: f64) -> usize {
        let before = self.prints.len();
        self.prints.retain(|paw| !paw.is_expired(now));
        self.clock = now;
        before - self.prints.len()
    }

    /// Prints still worth drawing, with their current opacity.
    pub fn visible(&self, now: f64) -> impl Iterator<Item = (&PawPrint, f64)> + '_ {
        self.prints
            .iter()
            .filter(move |paw| !paw.is_expired(now))
            .map(move |paw| (paw, paw.opacity(now)))
    }

    pub fn len(&self) -> usize {
        self.prints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prints.is_empty()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }
}

pub enum TrailAction {
    Click { x: f64, y: f64, now: f64, variant: u8 },
    Sweep { now: f64 },
}

impl Reducible for PawTrail {
    type Action = TrailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TrailAction::Click { x, y, now, variant } => {
                let mut next = (*self).clone();
                next.click(x, y, now, variant);
                Rc::new(next)
            }
            // Nothing on screen, nothing to redraw.
            TrailAction::Sweep { .. } if self.is_empty() => self,
            TrailAction::Sweep { now } => {
                let mut next = (*self).clone();
                let removed = next.sweep(now);
                if removed > 0 {
                    log::trace!("Swept {} paw prints, {} left", removed, next.len());
                }
                Rc::new(next)
            }
        }
    }
}

fn paw_svg(variant: u8) -> Html {
    let (pad, toe) = match variant {
        1 => ("#c084fc", "#a855f7"),
        2 => ("#f472b6", "#ec4899"),
        3 => ("#60a5fa", "#3b82f6"),
        _ => ("#fbbf24", "#f59e0b"),
    };
    html! {
        <svg viewBox="0 0 48 48" width="48" height="48" aria-hidden="true">
            <ellipse cx="24" cy="31" rx="10" ry="8.5" fill={pad} />
            <ellipse cx="12" cy="19" rx="4" ry="5.5" fill={toe} />
            <ellipse cx="20" cy="12" rx="4" ry="5.5" fill={toe} />
            <ellipse cx="28" cy="12" rx="4" ry="5.5" fill={toe} />
            <ellipse cx="36" cy="19" rx="4" ry="5.5" fill={toe} />
        </svg>
    }
}

/// Paw prints left wherever the visitor clicks on the page.
#[function_component(PawTrailOverlay)]
pub fn paw_trail_overlay() -> Html {
    let trail = use_reducer_eq(PawTrail::default);

    {
        let trail = trail.clone();
        use_effect_with_deps(
            move |_| {
                let sweep = {
                    let trail = trail.clone();
                    Interval::new(SWEEP_INTERVAL_MS, move || {
                        trail.dispatch(TrailAction::Sweep {
                            now: js_sys::Date::now(),
                        });
                    })
                };

                let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    trail.dispatch(TrailAction::Click {
                        x: e.page_x() as f64,
                        y: e.page_y() as f64,
                        now: js_sys::Date::now(),
                        variant: random_variant(&mut rand::thread_rng()),
                    });
                });
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not attach paw trail listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                    drop(sweep);
                }
            },
            (),
        );
    }

    let paw_css = r#"
        .paw-trail {
            position: absolute;
            top: 0;
            left: 0;
            width: 0;
            height: 0;
        }
        .paw-print {
            position: absolute;
            width: 48px;
            height: 48px;
            pointer-events: none;
            z-index: 60;
            user-select: none;
        }
        .paw-print svg {
            display: block;
            filter: drop-shadow(0 0 4px rgba(168, 85, 247, 0.45));
        }
    "#;

    let now = trail.clock();
    html! {
        <div class="paw-trail">
            <style>{paw_css}</style>
            {
                trail.visible(now).map(|(paw, opacity)| {
                    let style = format!(
                        "left: {}px; top: {}px; opacity: {}; transform: rotate({}deg);",
                        paw.x - PAW_SIZE_PX / 2.0,
                        paw.y - PAW_SIZE_PX / 2.0,
                        opacity,
                        paw.rotation,
                    );
                    html! {
                        <div key={paw.id} class="paw-print" style={style}>
                            { paw_svg(paw.variant) }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_opacity_curve() {
        assert_eq!(opacity_at(0.0), 1.0);
        assert_eq!(opacity_at(12_999.0), 1.0);
        assert_eq!(opacity_at(13_000.0), 1.0);
        assert!((opacity_at(14_000.0) - 0.5).abs() < 1e-9);
        assert!((opacity_at(14_500.0) - 0.25).abs() < 1e-9);
        assert_eq!(opacity_at(15_000.0), 0.0);
        assert_eq!(opacity_at(60_000.0), 0.0);
    }

    #[test]
    fn test_first_click_has_no_rotation() {
        let mut trail = PawTrail::default();
        let paw = trail.click(100.0, 200.0, 1_000.0, 2);
        assert_eq!(paw.rotation, 0.0);
        assert_eq!(paw.variant, 2);
        assert_eq!((paw.x, paw.y), (100.0, 200.0));
    }

    #[test]
    fn test_rotation_follows_movement() {
        let mut trail = PawTrail::default();
        trail.click(100.0, 100.0, 0.0, 1);
        let down = trail.click(100.0, 150.0, 10.0, 1).rotation;
        assert!((down - 90.0).abs() < 1e-9);
        let left = trail.click(40.0, 150.0, 20.0, 1).rotation;
        assert!((left - 180.0).abs() < 1e-9);
        let up_right = trail.click(50.0, 140.0, 30.0, 1).rotation;
        assert!((up_right + 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_ids_increase() {
        let mut trail = PawTrail::default();
        let a = trail.click(0.0, 0.0, 5.0, 1).id;
        let b = trail.click(1.0, 1.0, 5.0, 1).id;
        let c = trail.click(2.0, 2.0, 5.0, 1).id;
        assert!(a < b && b < c);
    }

    #[test]
    fn test_sweep_removes_expired() {
        let mut trail = PawTrail::default();
        trail.click(0.0, 0.0, 0.0, 1);
        trail.click(10.0, 0.0, 5_000.0, 3);

        assert_eq!(trail.sweep(14_999.0), 0);
        assert_eq!(trail.len(), 2);

        assert_eq!(trail.sweep(15_000.0), 1);
        assert_eq!(trail.len(), 1);

        assert_eq!(trail.sweep(15_000.0 + 5_000.0 + SWEEP_INTERVAL_MS as f64), 1);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_visible_hides_expired_before_sweep() {
        let mut trail = PawTrail::default();
        trail.click(0.0, 0.0, 0.0, 1);
        trail.click(5.0, 5.0, 2_000.0, 4);

        let shown: Vec<_> = trail.visible(15_500.0).collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0.variant, 4);
        assert!((shown[0].1 - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_on_empty_trail_keeps_state() {
        let trail = Rc::new(PawTrail::default());
        let next = trail.clone().reduce(TrailAction::Sweep { now: 1_000.0 });
        assert!(Rc::ptr_eq(&trail, &next));

        let clicked = next.reduce(TrailAction::Click {
            x: 1.0,
            y: 2.0,
            now: 1_000.0,
            variant: 3,
        });
        let swept = clicked.clone().reduce(TrailAction::Sweep { now: 1_050.0 });
        assert_eq!(swept.len(), 1);
        assert_eq!(swept.clock(), 1_050.0);
    }

    #[test]
    fn test_random_variant_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_variant(&mut rng);
            assert!((1..=PAW_VARIANTS).contains(&v));
        }
    }
}
