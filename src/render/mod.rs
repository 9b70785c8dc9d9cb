//! Canvas 2D presentation layer
//!
//! Paints a [`GameState`](crate::sim::GameState) each animation frame. The
//! renderer owns no game data; it reads the state and the active theme.
//! Positions are raw canvas pixels; each sprite cell paints a
//! `CELL_SIZE`-pixel square, so a 16-row layout covers 32 vertical pixels.

pub mod confetti;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BOARD_ROWS, CELL_SIZE, ROAD_ROW};
use crate::layouts::{self, LayoutFrame};
use crate::sim::physics::Position;
use crate::sim::{GamePhase, GameState};
use crate::theme::Theme;

const SCORE_FONT: &str = "20px 'Press Start 2P', monospace";
const INFO_FONT: &str = "15px 'Press Start 2P', monospace";
const BANNER_FONT: &str = "14px 'Press Start 2P', monospace";
const HIGH_SCORE_COLOR: &str = "#22c55e";

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the current board dimensions
    pub fn resize(&self, view_cols: f32) {
        self.canvas.set_width(view_cols as u32);
        self.canvas.set_height(BOARD_ROWS);
    }

    /// Paint one frame
    pub fn draw(&self, state: &GameState, theme: &Theme, new_high: bool) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        self.ctx.set_fill_style_str(&theme.background);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style_str(&theme.road);
        self.ctx
            .fill_rect(0.0, ROAD_ROW as f64, width, (CELL_SIZE * 0.2) as f64);

        for character in &state.harmless {
            self.paint_layout(character.layout(), character.position(), theme);
        }
        // Player first, obstacles after
        for (i, character) in state.harmful.iter().enumerate() {
            let frame = if i == 0 {
                self.player_frame(state)
            } else {
                character.layout()
            };
            self.paint_layout(frame, character.position(), theme);
        }

        self.draw_score(state, theme, width);

        match state.phase {
            GamePhase::Ready => self.draw_ready(theme, width, height),
            GamePhase::Over => self.draw_over(theme, new_high, width, height),
            GamePhase::Running => {}
        }
    }

    /// Pose substitution for the player sprite
    fn player_frame(&self, state: &GameState) -> LayoutFrame {
        match state.phase {
            GamePhase::Over => layouts::DINO_DEAD,
            GamePhase::Ready => layouts::DINO_STAND,
            // Airborne pose has the legs tucked
            GamePhase::Running if !state.ready_to_jump => layouts::DINO_STAND,
            GamePhase::Running => state.player().layout(),
        }
    }

    fn paint_layout(&self, frame: LayoutFrame, position: &Position, theme: &Theme) {
        let (row, col) = position.get();
        for (i, cells) in frame.iter().enumerate() {
            for (j, cell) in cells.iter().enumerate() {
                if *cell == 0 {
                    continue;
                }
                let Some(color) = theme.color_for(*cell) else {
                    continue;
                };
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(
                    (col + j as f32 * CELL_SIZE) as f64,
                    (row + i as f32 * CELL_SIZE) as f64,
                    CELL_SIZE as f64,
                    CELL_SIZE as f64,
                );
            }
        }
    }

    /// Top-right score line, letter-spaced the retro way
    fn draw_score(&self, state: &GameState, theme: &Theme, width: f64) {
        let raw = format!("HI {:04} {:04}", state.hi_score, state.score);
        let text = spaced(&raw);

        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_fill_style_str(&theme.score_text);
        let x = width - self.text_width(&text) - 20.0;
        self.ctx.fill_text(&text, x, 30.0).ok();
    }

    fn draw_ready(&self, theme: &Theme, width: f64, height: f64) {
        let text = "PRESS SPACE TO START AND JUMP";
        self.ctx.set_font(INFO_FONT);
        self.ctx.set_fill_style_str(&theme.info_text);
        let x = (width - self.text_width(text)) / 2.0;
        self.ctx.fill_text(text, x, height / 2.0 - 50.0).ok();
    }

    fn draw_over(&self, theme: &Theme, new_high: bool, width: f64, height: f64) {
        let text = spaced("GAME OVER");
        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_fill_style_str(&theme.info_text);
        let x = (width - self.text_width(&text)) / 2.0;
        self.ctx.fill_text(&text, x, height / 2.0 - 50.0).ok();

        if new_high {
            let banner = "NEW HIGH SCORE!";
            self.ctx.set_font(BANNER_FONT);
            self.ctx.set_fill_style_str(HIGH_SCORE_COLOR);
            let x = (width - self.text_width(banner)) / 2.0;
            self.ctx.fill_text(banner, x, height / 2.0 - 80.0).ok();
        }

        // Retry glyph just below center
        let retry = layouts::RETRY;
        let retry_pos = Position::new(
            height as f32 / 2.0 - retry.len() as f32,
            (width as f32 - retry[0].len() as f32 * CELL_SIZE) / 2.0,
        );
        self.paint_layout(retry, &retry_pos, theme);
    }

    fn text_width(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }
}

/// Insert a space between every character
fn spaced(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
