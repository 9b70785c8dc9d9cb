//! Per-frame simulation step
//!
//! One discrete step per host animation callback. The tick runs to completion,
//! never panics on reachable state, and reports transitions as `GameEvent`s
//! instead of calling collaborators directly.

use crate::consts::{
    DINO_FLOOR_POSITION, DINO_JUMP_IMPULSE, ENVIRONMENT_GRAVITY, OFFSCREEN_COL,
    RESTART_COOLDOWN_MS, SCORE_STEP, SPEEDUP_INTERVAL, SPEEDUP_STEP,
};
use crate::sim::is_collided;
use crate::sim::physics::apply_velocity_to_position;
use crate::sim::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
///
/// One abstract "primary action" regardless of origin (Space, click, touch).
/// It starts a run in Ready, jumps in Running, and restarts in Over.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub primary_action: bool,
}

/// Advance the game by one tick. `now_ms` is the host's wall clock, used only
/// for the Over-to-Running restart cooldown.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Ready => {
            if input.primary_action {
                state.reset_run();
                events.push(GameEvent::Started);
            }
        }
        GamePhase::Over => {
            let cooled = state
                .over_at
                .is_none_or(|at| now_ms - at > RESTART_COOLDOWN_MS);
            if input.primary_action && cooled {
                state.reset_run();
                events.push(GameEvent::Started);
            }
        }
        GamePhase::Running => run_tick(state, input, now_ms, &mut events),
    }

    events
}

fn run_tick(state: &mut GameState, input: &TickInput, now_ms: f64, events: &mut Vec<GameEvent>) {
    // Jump input, gated by the grounded latch
    if input.primary_action && state.ready_to_jump {
        state.ready_to_jump = false;
        state.thrust = DINO_JUMP_IMPULSE;
        events.push(GameEvent::Jumped);
    }

    // Fractional score accumulation
    state.score_step += SCORE_STEP;
    let mut crossed_boundary = false;
    if state.score_step > 1.0 {
        state.score_step -= 1.0;
        state.score += 1;
        crossed_boundary = state.score % SPEEDUP_INTERVAL == 0;
    }

    // Speed ratchet: once per boundary, grow the cumulative speed-up and push
    // it onto every pooled character except the player. Newcomers pick it up
    // below from the cumulative vector.
    if crossed_boundary {
        state.cumulative_velocity.add(&SPEEDUP_STEP);
        for character in &mut state.harmless {
            character.velocity_mut().add(&SPEEDUP_STEP);
        }
        for character in state.harmful.iter_mut().skip(1) {
            character.velocity_mut().add(&SPEEDUP_STEP);
        }
    }

    // Allocators: same-tick collection; an uncollected spawn would be lost
    for allocator in &mut state.harmless_allocators {
        allocator.tick(&mut state.rng);
        if let Some(mut character) = allocator.take_character() {
            character.velocity_mut().add(&state.cumulative_velocity);
            state.harmless.push(character);
        }
    }
    for allocator in &mut state.harmful_allocators {
        allocator.tick(&mut state.rng);
        if let Some(mut character) = allocator.take_character() {
            character.velocity_mut().add(&state.cumulative_velocity);
            state.harmful.push(character);
        }
    }

    // Motion, animation, and off-screen eviction. The player ticks too (its
    // own velocity is zero; vertical motion goes through the thrust below).
    for character in &mut state.harmless {
        character.tick();
    }
    state
        .harmless
        .retain(|c| c.position().col >= OFFSCREEN_COL);
    for character in &mut state.harmful {
        character.tick();
    }
    let mut i = state.harmful.len();
    while i > 1 {
        i -= 1;
        if state.harmful[i].position().col < OFFSCREEN_COL {
            state.harmful.remove(i);
        }
    }

    // Player kinematics: integrate thrust, clamp to the floor (checked every
    // tick, not just on landing), then apply gravity to the thrust.
    let moved = apply_velocity_to_position(state.player().position(), &state.thrust);
    state.player_mut().set_position(moved);
    if state.player().position().row > DINO_FLOOR_POSITION.row {
        state.player_mut().set_position(DINO_FLOOR_POSITION);
        state.ready_to_jump = true;
    }
    state.thrust.sub(&ENVIRONMENT_GRAVITY);

    // Collision: player against every other harmful entry
    let player = state.player();
    let (p_row, p_col) = player.position().get();
    let (p_h, p_w) = (player.height(), player.width());
    let hit = state.harmful.iter().skip(1).any(|other| {
        let (o_row, o_col) = other.position().get();
        is_collided(
            p_row,
            p_col,
            p_h,
            p_w,
            o_row,
            o_col,
            other.height(),
            other.width(),
        )
    });

    if hit {
        state.phase = GamePhase::Over;
        state.over_at = Some(now_ms);
        events.push(GameEvent::GameOver);
        if state.score > state.hi_score {
            state.hi_score = state.score;
            events.push(GameEvent::NewHighScore(state.score));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::OFFSCREEN_COL;
    use crate::layouts;
    use crate::sim::Character;
    use crate::sim::character::{AllocatorCharacterArray, CharacterAllocator, CharacterMeta};
    use crate::sim::physics::{Position, Velocity};

    const NOW: f64 = 10_000.0;

    fn press() -> TickInput {
        TickInput {
            primary_action: true,
        }
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Running-phase state with the spawner banks emptied, so ticks are fully
    /// under test control.
    fn quiet_running(hi_score: u32) -> GameState {
        let mut state = GameState::new(1, 1000.0, hi_score);
        state.harmless_allocators.clear();
        state.harmful_allocators.clear();
        let events = tick(&mut state, &press(), NOW);
        assert_eq!(events, vec![GameEvent::Started]);
        state
    }

    fn obstacle_at(row: f32, col: f32) -> Character {
        Character::new(&CharacterMeta::new(
            &[layouts::CACTUS_SMALL_S1],
            0,
            Position::new(row, col),
            Velocity::new(0.0, 0.0),
        ))
    }

    #[test]
    fn test_ready_primary_action_starts_run() {
        let mut state = GameState::new(1, 1000.0, 0);
        state.harmless_allocators.clear();
        state.harmful_allocators.clear();

        let events = tick(&mut state, &idle(), NOW);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Ready);

        let events = tick(&mut state, &press(), NOW);
        assert_eq!(events, vec![GameEvent::Started]);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.harmful.len(), 1);
        assert!(state.harmless.is_empty());
        assert_eq!(state.player().position().get(), DINO_FLOOR_POSITION.get());
    }

    #[test]
    fn test_jump_accepted_only_when_grounded() {
        let mut state = quiet_running(0);

        let events = tick(&mut state, &press(), NOW);
        assert!(events.contains(&GameEvent::Jumped));
        assert!(!state.ready_to_jump);
        assert!(state.player().position().row < DINO_FLOOR_POSITION.row);

        // Airborne: a second press is ignored
        let thrust_before = state.thrust;
        let events = tick(&mut state, &press(), NOW);
        assert!(!events.contains(&GameEvent::Jumped));
        // Only gravity acted on the thrust
        let mut expected = thrust_before;
        expected.sub(&ENVIRONMENT_GRAVITY);
        assert_eq!(state.thrust, expected);
    }

    #[test]
    fn test_gravity_returns_player_to_floor() {
        let mut state = quiet_running(0);
        tick(&mut state, &press(), NOW);
        assert!(!state.ready_to_jump);

        for _ in 0..60 {
            tick(&mut state, &idle(), NOW);
        }
        assert_eq!(state.player().position().get(), DINO_FLOOR_POSITION.get());
        assert!(state.ready_to_jump);
    }

    #[test]
    fn test_floor_clamp_holds_every_tick() {
        let mut state = quiet_running(0);
        // Grounded with accumulating downward thrust: the clamp must snap the
        // player back every single tick
        for _ in 0..30 {
            tick(&mut state, &idle(), NOW);
            assert_eq!(state.player().position().row, DINO_FLOOR_POSITION.row);
        }
    }

    #[test]
    fn test_offscreen_eviction_is_strict() {
        let mut state = quiet_running(0);
        state.harmful.push(obstacle_at(300.0, OFFSCREEN_COL));
        state.harmful.push(obstacle_at(300.0, OFFSCREEN_COL - 0.5));
        // Rows far below the player so nothing collides
        tick(&mut state, &idle(), NOW);
        // Exactly at the threshold survives; strictly past it is evicted
        assert_eq!(state.harmful.len(), 2);
        assert_eq!(state.harmful[1].position().col, OFFSCREEN_COL);
    }

    #[test]
    fn test_score_accumulates_fractionally() {
        let mut state = quiet_running(0);
        // 0.15 per tick: the 7th tick crosses 1.0
        for _ in 0..6 {
            tick(&mut state, &idle(), NOW);
        }
        assert_eq!(state.score, 0);
        tick(&mut state, &idle(), NOW);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_speedup_ratchet_fires_once_per_boundary() {
        let mut state = quiet_running(0);
        state.harmless.push(Character::new(&CharacterMeta::new(
            &[layouts::CLOUD],
            0,
            Position::new(100.0, 800.0),
            Velocity::new(0.0, -1.0),
        )));
        state.score = 99;
        state.score_step = 0.9;

        tick(&mut state, &idle(), NOW);
        assert_eq!(state.score, 100);
        assert_eq!(state.cumulative_velocity, SPEEDUP_STEP);
        assert_eq!(state.harmless[0].velocity().get(), (0.0, -1.1));
        // Player velocity is untouched by the ratchet
        assert_eq!(state.player().velocity().get(), (0.0, 0.0));

        // Score holds 100 for several more ticks; the ratchet must not re-fire
        for _ in 0..5 {
            tick(&mut state, &idle(), NOW);
        }
        assert_eq!(state.score, 100);
        assert_eq!(state.cumulative_velocity, SPEEDUP_STEP);
    }

    #[test]
    fn test_spawned_character_inherits_cumulative_speedup() {
        let mut state = quiet_running(0);
        state.cumulative_velocity = Velocity::new(0.0, -0.5);
        // Certain spawner: threshold below any draw, zero cooldown
        state.harmful_allocators.push(CharacterAllocator::new(
            AllocatorCharacterArray::new().with_character(
                CharacterMeta::new(
                    &[layouts::CACTUS_SMALL_S1],
                    0,
                    Position::new(201.0, 1000.0),
                    Velocity::new(0.0, -7.0),
                ),
                -1.0,
            ),
            0,
            0,
        ));
        tick(&mut state, &idle(), NOW);
        assert_eq!(state.harmful.len(), 2);
        assert_eq!(state.harmful[1].velocity().get(), (0.0, -7.5));
    }

    #[test]
    fn test_collision_transitions_to_over() {
        let mut state = quiet_running(0);
        state.score = 50;
        state.harmful.push(obstacle_at(201.0, 21.0));

        let events = tick(&mut state, &idle(), NOW);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.over_at, Some(NOW));
        let over_count = events.iter().filter(|e| **e == GameEvent::GameOver).count();
        assert_eq!(over_count, 1);

        // Frozen: further ticks change nothing
        let score = state.score;
        tick(&mut state, &idle(), NOW + 16.0);
        assert_eq!(state.score, score);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_new_high_score_event() {
        let mut state = quiet_running(100);
        state.score = 120;
        state.harmful.push(obstacle_at(201.0, 21.0));

        let events = tick(&mut state, &idle(), NOW);
        assert!(events.contains(&GameEvent::NewHighScore(120)));
        assert_eq!(state.hi_score, 120);
    }

    #[test]
    fn test_no_high_score_event_below_persisted_best() {
        let mut state = quiet_running(100);
        state.score = 90;
        state.harmful.push(obstacle_at(201.0, 21.0));

        let events = tick(&mut state, &idle(), NOW);
        assert!(events.contains(&GameEvent::GameOver));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::NewHighScore(_)))
        );
        assert_eq!(state.hi_score, 100);
    }

    #[test]
    fn test_restart_gated_by_cooldown() {
        let mut state = quiet_running(0);
        state.harmful.push(obstacle_at(201.0, 21.0));
        tick(&mut state, &idle(), NOW);
        assert_eq!(state.phase, GamePhase::Over);

        // 500ms later: still cooling down
        let events = tick(&mut state, &press(), NOW + 500.0);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Over);

        // 1100ms later: accepted, full reset
        let events = tick(&mut state, &press(), NOW + 1100.0);
        assert_eq!(events, vec![GameEvent::Started]);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.harmful.len(), 1);
        assert_eq!(state.player().position().get(), DINO_FLOOR_POSITION.get());
    }
}
