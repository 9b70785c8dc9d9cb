//! Confetti burst on the FX overlay canvas
//!
//! Particles live outside the cell grid and animate in raw pixels. The host
//! steps the effect once per animation frame until every particle expires.

use rand::Rng;
use rand_pcg::Pcg32;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const COLORS: [&str; 8] = [
    "#F59E0B", "#10B981", "#3B82F6", "#EC4899", "#F43F5E", "#A855F7", "#22C55E", "#EAB308",
];

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    gravity: f64,
    size: f64,
    rotation: f64,
    spin: f64,
    color: &'static str,
    life: f64,
}

pub struct ConfettiFx {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ConfettiFx {
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            particles: Vec::new(),
            rng: Pcg32::new(seed, 0xa02bdbf7bb3c0a7),
        })
    }

    /// Match the FX overlay to the board canvas
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Big centered burst for a new high score
    pub fn celebrate(&mut self) {
        let x = self.canvas.width() as f64 / 2.0;
        let y = self.canvas.height() as f64 / 3.0;
        self.burst(x, y, 120, 6.0, std::f64::consts::PI * 1.5);
    }

    pub fn burst(&mut self, x: f64, y: f64, count: usize, speed: f64, spread: f64) {
        for _ in 0..count {
            let angle = (self.rng.random::<f64>() - 0.5) * spread - std::f64::consts::FRAC_PI_2;
            let v = speed * (0.5 + self.rng.random::<f64>());
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * v,
                vy: angle.sin() * v,
                gravity: 0.18 + self.rng.random::<f64>() * 0.1,
                size: 3.0 + self.rng.random::<f64>() * 3.0,
                rotation: self.rng.random::<f64>() * std::f64::consts::PI,
                spin: (self.rng.random::<f64>() - 0.5) * 0.2,
                color: COLORS[self.rng.random_range(0..COLORS.len())],
                life: 90.0 + self.rng.random::<f64>() * 40.0,
            });
        }
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Advance and paint one frame; returns false once the burst is spent
    pub fn step(&mut self) -> bool {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let ctx = &self.ctx;
        self.particles.retain_mut(|p| {
            p.vy += p.gravity;
            p.x += p.vx;
            p.y += p.vy;
            p.rotation += p.spin;
            p.life -= 1.0;

            ctx.save();
            ctx.translate(p.x, p.y).ok();
            ctx.rotate(p.rotation).ok();
            ctx.set_fill_style_str(p.color);
            ctx.fill_rect(-p.size / 2.0, -p.size / 2.0, p.size, p.size);
            ctx.restore();

            p.life > 0.0 && p.y <= height + 20.0
        });

        if self.particles.is_empty() {
            self.ctx.clear_rect(0.0, 0.0, width, height);
            return false;
        }
        true
    }
}
