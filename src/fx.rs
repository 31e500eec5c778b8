//! DOM side of the transient effects: builds elements from the `core::effects`
//! descriptions and owns their lifetimes through an `EffectSchedule`.

use crate::constants::*;
use crate::core::constants::{EXPLOSION_LIFETIME_MS, TRANSITION_KICK_MS};
use crate::core::interact::Dodge;
use crate::core::schedule::{Deferred, EffectSchedule};
use crate::core::{confetti_shower, explosion_burst, ConfettiPiece, FloatingHeart};
use crate::dom;
use crate::panel;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub struct FxContext {
    document: web::Document,
    body: web::HtmlElement,
    hearts_container: web::HtmlElement,
    panel: web::HtmlElement,
    schedule: EffectSchedule<web::HtmlElement>,
    rng: StdRng,
    started: Instant,
}

impl FxContext {
    pub fn new(
        document: web::Document,
        hearts_container: web::HtmlElement,
        panel: web::HtmlElement,
    ) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
        Ok(Self {
            document,
            body,
            hearts_container,
            panel,
            schedule: EffectSchedule::new(0.0),
            rng: StdRng::from_entropy(),
            started: Instant::now(),
        })
    }

    /// Milliseconds since the effect clock started.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Run the ambient cadence and every deferred action that has come due.
    pub fn pump(&mut self) {
        let now = self.now_ms();
        for action in self.schedule.poll(now) {
            self.run(action, now);
        }
    }

    fn run(&mut self, action: Deferred<web::HtmlElement>, now: f64) {
        match action {
            Deferred::Remove(el) => el.remove(),
            Deferred::Restyle(el, props) => {
                for (name, value) in &props {
                    dom::set_style(&el, name, value);
                }
            }
            Deferred::SpawnAmbientHeart => self.spawn_ambient_heart(now),
            Deferred::SpawnConfetti(piece) => self.spawn_confetti_piece(&piece, now),
            Deferred::RevealConfirmation => {
                panel::show_confirmation(&self.panel);
                let pieces = confetti_shower(&mut self.rng);
                self.schedule.queue_confetti(now, pieces);
            }
            Deferred::ClearShake => panel::clear_shake(&self.panel),
            Deferred::RetireTrail => {}
        }
    }

    fn spawn_ambient_heart(&mut self, now: f64) {
        let heart = FloatingHeart::random(&mut self.rng);
        let Some(el) = dom::create_div(&self.document) else {
            return;
        };
        el.set_class_name(AMBIENT_HEART_CLASS);
        el.set_inner_html(heart.glyph);
        dom::set_styles(
            &el,
            &[
                ("left", &*format!("{}vw", heart.left_vw)),
                ("animation-duration", &*format!("{}s", heart.duration_s)),
                ("font-size", &*format!("{}px", heart.font_px)),
            ],
        );
        _ = self.hearts_container.append_child(&el);
        self.schedule
            .after(now, heart.lifetime_ms(), Deferred::Remove(el));
    }

    /// Fifty glyphs radiating from the panel centre.
    fn heart_explosion(&mut self, now: f64) {
        let (cx, cy) = panel::center(&self.panel);
        for piece in explosion_burst(&mut self.rng) {
            let Some(el) = dom::create_div(&self.document) else {
                continue;
            };
            el.set_inner_html("💗");
            dom::set_styles(
                &el,
                &[
                    ("position", "fixed"),
                    ("left", &*format!("{}px", cx)),
                    ("top", &*format!("{}px", cy)),
                    ("font-size", &*format!("{}px", piece.font_px)),
                    ("pointer-events", "none"),
                    ("z-index", OVERLAY_Z),
                    ("transition", &*format!("all 2s {}", BURST_EASING)),
                ],
            );
            _ = self.hearts_container.append_child(&el);
            self.schedule.after(
                now,
                TRANSITION_KICK_MS,
                Deferred::Restyle(
                    el.clone(),
                    vec![
                        ("transform", piece.end_transform()),
                        ("opacity", "0".to_string()),
                    ],
                ),
            );
            self.schedule
                .after(now, EXPLOSION_LIFETIME_MS, Deferred::Remove(el));
        }
    }

    fn spawn_confetti_piece(&mut self, piece: &ConfettiPiece, now: f64) {
        let Some(el) = dom::create_div(&self.document) else {
            return;
        };
        dom::set_styles(
            &el,
            &[
                ("position", "fixed"),
                ("left", &*format!("{}vw", piece.left_vw)),
                ("top", "-10px"),
                ("width", &*format!("{}px", piece.width_px)),
                ("height", &*format!("{}px", piece.height_px)),
                ("background-color", piece.color),
                ("transform", &*piece.start_transform()),
                ("pointer-events", "none"),
                ("z-index", OVERLAY_Z),
                ("border-radius", piece.border_radius()),
            ],
        );
        _ = self.body.append_child(&el);
        let transition = format!(
            "transform {ms}ms {e}, opacity {ms}ms {e}",
            ms = piece.duration_ms.round(),
            e = BURST_EASING
        );
        self.schedule.after(
            now,
            TRANSITION_KICK_MS,
            Deferred::Restyle(
                el.clone(),
                vec![
                    ("transition", transition),
                    ("transform", piece.end_transform()),
                    ("opacity", "0".to_string()),
                ],
            ),
        );
        self.schedule
            .after(now, piece.duration_ms, Deferred::Remove(el));
    }

    /// One fading dot at the pointer; the oldest is dropped past capacity.
    pub fn trail_dot(&mut self, x: i32, y: i32) {
        let now = self.now_ms();
        let Some(el) = dom::create_div(&self.document) else {
            return;
        };
        dom::set_styles(
            &el,
            &[
                ("position", "fixed"),
                ("left", &*format!("{}px", x)),
                ("top", &*format!("{}px", y)),
                ("width", TRAIL_DOT_SIZE),
                ("height", TRAIL_DOT_SIZE),
                ("border-radius", "50%"),
                ("background", TRAIL_DOT_BACKGROUND),
                ("pointer-events", "none"),
                ("z-index", TRAIL_DOT_Z),
                ("transform", "translate(-50%, -50%)"),
            ],
        );
        _ = self.body.append_child(&el);
        self.schedule.after(
            now,
            TRANSITION_KICK_MS,
            Deferred::Restyle(
                el.clone(),
                vec![
                    ("transition", TRAIL_FADE_TRANSITION.to_string()),
                    ("opacity", "0".to_string()),
                    ("transform", "translate(-50%, -50%) scale(2)".to_string()),
                ],
            ),
        );
        if let Some(evicted) = self.schedule.push_trail(now, el) {
            evicted.remove();
        }
    }

    /// Register a dodge and start the panel shake.
    pub fn dodge(&mut self) -> Dodge {
        let now = self.now_ms();
        panel::start_shake(&self.panel);
        self.schedule.dodge(now, &mut self.rng)
    }

    /// Explosion now, confirmation message and confetti shortly after.
    /// Returns `false` if already confirmed.
    pub fn confirm(&mut self) -> bool {
        let now = self.now_ms();
        if !self.schedule.confirm(now) {
            return false;
        }
        self.heart_explosion(now);
        true
    }

    pub fn pending(&self) -> usize {
        self.schedule.pending()
    }

    /// Milliseconds until the next scheduled action, if any.
    pub fn next_due_in(&self) -> Option<f64> {
        let now = self.now_ms();
        self.schedule.next_due().map(|due| (due - now).max(0.0))
    }

    pub fn live_trail(&self) -> usize {
        self.schedule.live_trail()
    }
}
