//! Integration tests for the simulation rules

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use tui_frogger::core::{GameState, Obstacle};
use tui_frogger::input::{EventSource, InputReader};
use tui_frogger::types::{FrogAction, GameConfig, Position};

const FRAME: Duration = Duration::from_micros(16_667);

fn frame(n: u32) -> Duration {
    FRAME * n
}

#[test]
fn test_reaching_finish_line_scores_one_win() {
    let config = GameConfig::default().with_start(Position::new(10, 20));
    assert_eq!(config.finish_line, 5);
    let mut state = GameState::with_obstacles(config, Vec::new());

    let mut wins_seen = 0;
    for i in 1..=15 {
        state.apply_action(FrogAction::MoveUp);
        if state.update(frame(i)).won {
            wins_seen += 1;
        }
    }

    assert_eq!(wins_seen, 1);
    assert_eq!(state.wins(), 1);
    assert_eq!(state.deaths(), 0);
    assert_eq!(state.player(), Position::new(10, 20));
}

#[test]
fn test_stepping_onto_obstacle_scores_one_death() {
    let config = GameConfig::default().with_start(Position::new(4, 11));
    let mut state = GameState::with_obstacles(config, vec![Obstacle::new(4, 10)]);

    state.update(frame(1));
    state.apply_action(FrogAction::MoveUp);
    let outcome = state.update(frame(2));

    assert!(outcome.died);
    assert!(!outcome.stepped);
    assert_eq!(state.deaths(), 1);
    assert_eq!(state.wins(), 0);
    assert_eq!(state.player(), Position::new(4, 11));
    assert_eq!(state.obstacles()[0].lead, Position::new(4, 10));
}

#[test]
fn test_obstacle_at_field_edge_wraps_to_zero() {
    let config = GameConfig::default().with_start(Position::new(0, 0));
    let edge = config.field_length - 1;
    let mut state = GameState::with_obstacles(config, vec![Obstacle::new(edge, 10)]);

    let mut t = Duration::ZERO;
    while !state.update(t).stepped {
        t += FRAME;
    }

    assert_eq!(state.obstacles()[0].lead.column, 0);
}

#[test]
fn test_obstacle_columns_stay_in_field() {
    let mut state = GameState::new(GameConfig::for_terminal(80, 24));
    let field = state.field_length();

    for i in 0..(60 * 30) {
        state.update(frame(i));
        for o in state.obstacles() {
            assert!(
                (0..field).contains(&o.lead.column),
                "column {} out of field at frame {}",
                o.lead.column,
                i
            );
        }
    }
}

#[test]
fn test_default_field_eventually_kills_a_stationary_player() {
    // Band 15 leads sit at columns 15, 1 and 11; column 9 starts out free.
    let start = Position::new(9, 15);
    let config = GameConfig::for_terminal(80, 24).with_start(start);
    let mut state = GameState::new(config);
    assert!(!state.obstacles().iter().any(|o| o.covers(start, 24)));

    let mut steps = 0;
    let mut died = false;
    for i in 0..(60 * 10) {
        let outcome = state.update(frame(i));
        if outcome.stepped {
            steps += 1;
        }
        if outcome.died {
            died = true;
            break;
        }
    }
    assert!(died);
    // The block led from column 1 reaches column 9 on its fifth advance.
    assert_eq!(steps, 5);
    assert_eq!(state.deaths(), 1);
    assert_eq!(state.player(), start);
}

#[derive(Default)]
struct Keys(VecDeque<Event>);

impl EventSource for Keys {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.0.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        Ok(self.0.pop_front().expect("polled before read"))
    }
}

#[test]
fn test_one_key_per_frame_through_reader() {
    let mut keys = Keys::default();
    for _ in 0..3 {
        keys.0.push_back(Event::Key(KeyEvent::from(KeyCode::Char('a'))));
    }
    keys.0.push_back(Event::Key(KeyEvent::from(KeyCode::Char('1'))));
    let mut input = InputReader::with_source(keys);

    let config = GameConfig::default().with_start(Position::new(12, 22));
    let mut state = GameState::with_obstacles(config, Vec::new());

    let mut redraws = 0;
    for i in 1..=2 {
        if let Some(action) = input.poll_action().unwrap() {
            if state.apply_action(action) {
                redraws += 1;
            }
        }
        state.update(frame(i));
    }

    // Two frames consumed two of the three queued moves.
    assert_eq!(state.player(), Position::new(10, 22));
    assert_eq!(state.last_player(), Position::new(11, 22));

    for i in 3..=6 {
        if let Some(action) = input.poll_action().unwrap() {
            if state.apply_action(action) {
                redraws += 1;
            }
        }
        state.update(frame(i));
    }

    assert_eq!(state.player(), Position::new(9, 22));
    assert!(state.debug());
    assert_eq!(redraws, 1);
}
