//! Terminal Pig runner (default binary).
//!
//! Drives the main menu and matches. The game core never touches the terminal:
//! this loop reads key presses, feeds them to a [`Match`], and redraws a
//! screen built by the pure views after every step.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, info, warn};

use tui_pig::core::{Actor, Match, MatchEvent, RollSource, ScoreLedger, TurnEvent, WinRecorder};
use tui_pig::input::{
    difficulty_key, menu_key, should_quit, turn_key, LineEditor, LineEvent, TurnInput,
};
use tui_pig::term::{
    difficulty_screen, event_line, invalid_line, leaderboard_screen, menu_screen,
    name_prompt_screen, rules_screen, turn_screen, Line, Screen, TerminalRenderer, TextStyle,
};
use tui_pig::types::{normalize_name, Difficulty, MenuChoice, COMPUTER_NAME};
use tui_pig::AppConfig;

/// Messages kept above the scoreboard during a match.
const LOG_LINES: usize = 6;

/// Ctrl-C anywhere: unwind to `main` and leave cleanly.
#[derive(Debug, Error)]
#[error("interrupted")]
struct Interrupted;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    tui_pig::logging::init(config.log_path.as_deref())?;

    let mut ledger = ScoreLedger::load(config.ledger_path.clone());
    info!(path = %config.ledger_path.display(), entries = ledger.len(), "ledger loaded");

    let mut term = TerminalRenderer::new();
    term.enter().context("preparing terminal")?;

    let result = run(&config, &mut term, &mut ledger);

    // Always try to restore terminal state.
    let _ = term.exit();
    match result {
        Err(err) if err.is::<Interrupted>() => Ok(()),
        other => other,
    }
}

fn run(config: &AppConfig, term: &mut TerminalRenderer, ledger: &mut ScoreLedger) -> Result<()> {
    let mut matches_played: u64 = 0;
    let mut notice: Option<Line> = None;

    loop {
        let mut screen = Screen::new();
        if let Some(line) = notice.take() {
            screen.push(line).blank();
        }
        screen.extend(menu_screen().lines().iter().cloned());
        term.draw(&screen)?;

        match menu_key(next_key()?) {
            Some(MenuChoice::PlayerVsPlayer) => {
                let Some(first) = prompt_name(term, "What is your name?", &[COMPUTER_NAME])? else {
                    continue;
                };
                let Some(second) =
                    prompt_name(term, "What is your name?", &[COMPUTER_NAME, first.as_str()])?
                else {
                    continue;
                };
                matches_played += 1;
                let mut game = Match::new(
                    Actor::human(&first),
                    Actor::human(&second),
                    config.die(matches_played),
                    config.policy(matches_played),
                    &mut *ledger,
                )?;
                info!(first = %first, second = %second, "player vs player started");
                play_match(term, config.computer_delay, &mut game)?;
            }
            Some(MenuChoice::PlayerVsComputer) => {
                let Some(name) = prompt_name(term, "What is your name?", &[COMPUTER_NAME])? else {
                    continue;
                };
                let Some(difficulty) = prompt_difficulty(term)? else {
                    continue;
                };
                matches_played += 1;
                let mut game = Match::new(
                    Actor::human(&name),
                    Actor::computer(difficulty),
                    config.die(matches_played),
                    config.policy(matches_played),
                    &mut *ledger,
                )?;
                info!(player = %name, difficulty = difficulty.as_str(), "player vs computer started");
                play_match(term, config.computer_delay, &mut game)?;
            }
            Some(MenuChoice::Rules) => {
                term.draw(&rules_screen())?;
                next_key()?;
            }
            Some(MenuChoice::Leaderboard) => {
                term.draw(&leaderboard_screen(ledger))?;
                next_key()?;
            }
            Some(MenuChoice::Quit) => return Ok(()),
            None => notice = Some(Line::styled("Invalid option", TextStyle::BAD)),
        }
    }
}

fn play_match<D: RollSource, R: WinRecorder>(
    term: &mut TerminalRenderer,
    computer_delay: Duration,
    game: &mut Match<D, R>,
) -> Result<()> {
    let mut log: Vec<Line> = Vec::new();

    loop {
        term.draw(&turn_screen(game, &log))?;

        if game.is_over() {
            next_key()?;
            return Ok(());
        }

        if !game.awaiting_human() {
            thread::sleep(computer_delay);
            let ev = game.step_computer()?;
            record_event(&mut log, game, &ev);
            continue;
        }

        let seat = game.active_seat();
        let Some(input) = turn_key(next_key()?, game.has_computer()) else {
            continue;
        };
        let submitted = match input {
            TurnInput::Action(action) => game.submit_action(action),
            TurnInput::Unrecognized(token) => game.submit_token(&token),
            TurnInput::Rename => {
                if let Some(name) = prompt_name(term, "Input new name:", &[])? {
                    let old = game.actor(seat).name().to_string();
                    let line = match game.rename(seat, &name) {
                        Ok(()) => Line::plain(format!(
                            "{old}, your new name is now {}",
                            game.actor(seat).name()
                        )),
                        Err(err) => Line::styled(capitalize_message(&err.to_string()), TextStyle::BAD),
                    };
                    push_log(&mut log, line);
                }
                continue;
            }
            TurnInput::ChangeDifficulty => {
                if let Some(difficulty) = prompt_difficulty(term)? {
                    game.set_computer_difficulty(difficulty);
                    push_log(
                        &mut log,
                        Line::plain(format!("Computer difficulty is now {}", difficulty.as_str())),
                    );
                }
                continue;
            }
        };

        match submitted {
            Ok(ev) => record_event(&mut log, game, &ev),
            Err(err) => {
                debug!(error = %err, "action rejected");
                push_log(&mut log, invalid_line());
            }
        }
    }
}

fn record_event<D: RollSource, R: WinRecorder>(
    log: &mut Vec<Line>,
    game: &mut Match<D, R>,
    ev: &MatchEvent,
) {
    if ev.event.ends_turn() && !matches!(ev.event, TurnEvent::Won { .. }) {
        // Start each turn with a clean slate, keeping how the last one ended.
        log.clear();
    }
    push_log(log, event_line(game, ev));

    if let Some(err) = game.take_ledger_error() {
        warn!(error = %err, "leaderboard not saved");
        push_log(
            log,
            Line::styled(format!("Could not save the leaderboard: {err}"), TextStyle::BAD),
        );
    }
}

fn push_log(log: &mut Vec<Line>, line: Line) {
    log.push(line);
    if log.len() > LOG_LINES {
        log.remove(0);
    }
}

/// Read a name until it is non-empty and not in `taken`. `None` on Esc.
fn prompt_name(
    term: &mut TerminalRenderer,
    label: &str,
    taken: &[&str],
) -> Result<Option<String>> {
    let mut editor = LineEditor::new();
    let mut error: Option<String> = None;

    loop {
        term.draw(&name_prompt_screen(label, editor.text(), error.as_deref()))?;
        match editor.handle_key(next_key()?) {
            LineEvent::Editing => {}
            LineEvent::Cancelled => return Ok(None),
            LineEvent::Submitted(raw) => {
                let name = normalize_name(&raw);
                if name.is_empty() {
                    error = Some("Name must not be empty".to_string());
                } else if taken.contains(&name.as_str()) {
                    error = Some(format!("The name {name} is already taken"));
                } else {
                    return Ok(Some(name));
                }
            }
        }
    }
}

/// Ask for a difficulty until a valid pick. `None` on Esc.
fn prompt_difficulty(term: &mut TerminalRenderer) -> Result<Option<Difficulty>> {
    let mut error = None;
    loop {
        term.draw(&difficulty_screen(error))?;
        let key = next_key()?;
        if key.code == crossterm::event::KeyCode::Esc {
            return Ok(None);
        }
        match difficulty_key(key) {
            Some(difficulty) => return Ok(Some(difficulty)),
            None => error = Some("Invalid option"),
        }
    }
}

/// Block until a key press. Ctrl-C surfaces as [`Interrupted`].
fn next_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Err(Interrupted.into());
            }
            return Ok(key);
        }
    }
}

fn capitalize_message(msg: &str) -> String {
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_is_recognised_after_conversion() {
        let err: anyhow::Error = Interrupted.into();
        assert!(err.is::<Interrupted>());
        assert_eq!(err.to_string(), "interrupted");
    }

    #[test]
    fn messages_are_capitalised() {
        assert_eq!(capitalize_message("name must not be empty"), "Name must not be empty");
        assert_eq!(capitalize_message(""), "");
    }
}
