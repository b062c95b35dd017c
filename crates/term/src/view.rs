//! Views: map game state into a [`Screen`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Match, MatchEvent, RollSource, ScoreLedger, TurnEvent, WinRecorder};
use crate::screen::{Line, Screen, Span, TextStyle};
use crate::types::WIN_SCORE;

/// Width of the longest leaderboard bar, in columns.
pub const BAR_MAX_WIDTH: u32 = 30;

const TITLE: TextStyle = TextStyle::GOLD.bold();

pub fn menu_screen() -> Screen {
    let mut s = Screen::new();
    s.push(Line::styled("PIG", TITLE))
        .blank()
        .push_plain("1. Player vs player")
        .push_plain("2. Player vs computer")
        .push_plain("3. Rules")
        .push_plain("4. Leaderboard")
        .push_plain("5. Quit")
        .blank()
        .push_plain("Choice: ");
    s
}

pub fn rules_screen() -> Screen {
    let mut s = Screen::new();
    s.push(Line::styled("Rules", TITLE))
        .blank()
        .push_plain("Players take turns rolling a single die.")
        .push_plain("Every roll adds its value to the points of the current round.")
        .push_plain("Rolling a 1 loses the round's points and ends the turn.")
        .push_plain("Staying adds the round's points to your total and ends the turn.")
        .push_plain(format!(
            "The first player to reach {WIN_SCORE} points wins, even in the middle of a turn."
        ))
        .push_plain("Surrendering hands the win to your opponent.")
        .blank()
        .push(Line::styled("Press any key to return", TextStyle::PLAIN.dim()));
    s
}

/// Name entry prompt showing what has been typed so far.
pub fn name_prompt_screen(label: &str, typed: &str, error: Option<&str>) -> Screen {
    let mut s = Screen::new();
    if let Some(error) = error {
        s.push(Line::styled(error, TextStyle::BAD)).blank();
    }
    s.push_plain(format!("{label} {typed}_"));
    s
}

pub fn difficulty_screen(error: Option<&str>) -> Screen {
    let mut s = Screen::new();
    if let Some(error) = error {
        s.push(Line::styled(error, TextStyle::BAD)).blank();
    }
    s.push_plain("What difficulty do you want?")
        .push_plain("1. Cautious: banks early")
        .push_plain("2. Balanced: banks at a moderate round total")
        .push_plain("3. Random: no logic at all")
        .push_plain("Choice: ");
    s
}

/// The turn screen: recent messages, the scoreboard, and (for humans) the options.
pub fn turn_screen<D: RollSource, R: WinRecorder>(game: &Match<D, R>, log: &[Line]) -> Screen {
    let mut s = Screen::new();
    if !log.is_empty() {
        s.extend(log.iter().cloned()).blank();
    }

    for (name, score) in game.scoreboard() {
        s.push(Line::new(vec![
            Span::new(format!("{name:<12}"), TextStyle::PLAIN.bold()),
            Span::plain(format!("{score:>3} / {WIN_SCORE}")),
        ]));
    }
    s.blank();

    if game.is_over() {
        s.push(Line::styled("Press any key to return", TextStyle::PLAIN.dim()));
        return s;
    }

    let actor = game.active_actor();
    let state = game.current_state();
    if actor.is_computer() {
        s.push_plain(format!(
            "{} currently have {} point(s)",
            actor.name(),
            state.candidate()
        ));
        return s;
    }

    s.push_plain(format!(
        "{} you currently have {} point(s)",
        actor.name(),
        state.candidate()
    ))
    .push_plain(format!("{} what do you want to do?", actor.name()))
    .blank()
    .push_plain("Press 1 to toss")
    .push_plain("Press 2 to stay")
    .push_plain("Press 3 to change name")
    .push_plain("Press 4 to surrender");
    if game.has_computer() {
        s.push_plain("Press 5 to change difficulty");
    }
    s.push_plain("Choice: ");
    s
}

/// One message describing an accepted action.
pub fn event_line<D: RollSource, R: WinRecorder>(game: &Match<D, R>, ev: &MatchEvent) -> Line {
    let actor = game.actor(ev.seat);
    match ev.event {
        TurnEvent::Rolled { face, .. } => Line::plain(format!("{} rolled a {face}", actor.name())),
        TurnEvent::Busted { face, .. } => Line::new(vec![
            Span::plain(format!("{} rolled a {face}. ", actor.name())),
            Span::new(
                format!("Oh you got a {face} better luck next time"),
                TextStyle::BAD,
            ),
        ]),
        TurnEvent::Banked { total, .. } => Line::plain(format!(
            "{} stayed and now have {total} point(s)",
            actor.name()
        )),
        TurnEvent::Won { turns_taken, .. } => Line::styled(
            format!("{} won in {turns_taken} throws!", actor.win_subject()),
            TextStyle::GOOD.bold(),
        ),
        TurnEvent::Conceded { .. } => outcome_line(game).unwrap_or_default(),
    }
}

/// Closing message for a finished match.
pub fn outcome_line<D: RollSource, R: WinRecorder>(game: &Match<D, R>) -> Option<Line> {
    use crate::core::MatchOutcome;

    let line = match game.outcome()? {
        MatchOutcome::Won {
            winner,
            total,
            turns_taken,
        } => Line::styled(
            format!(
                "{} won with {total} points in {turns_taken} throws!",
                game.actor(winner).name()
            ),
            TextStyle::GOOD.bold(),
        ),
        MatchOutcome::Conceded { conceder, winner } => Line::new(vec![
            Span::new(
                format!("{} surrendered", game.actor(conceder).name()),
                TextStyle::BAD,
            ),
            Span::plain(" and "),
            Span::new(format!("{} won", game.actor(winner).name()), TextStyle::GOOD),
        ]),
    };
    Some(line)
}

/// Ranked bar chart of the ledger; the top three bars are gold, silver and bronze.
pub fn leaderboard_screen(ledger: &ScoreLedger) -> Screen {
    let mut s = Screen::new();
    s.push(Line::styled("Highscores", TITLE)).blank();

    let ranked = ledger.sorted_by_score();
    if ranked.is_empty() {
        s.push_plain("The list is empty");
    } else {
        let max = ranked.first().map(|(_, c)| *c).unwrap_or(1).max(1);
        let name_w = ranked
            .iter()
            .map(|(n, _)| n.chars().count())
            .max()
            .unwrap_or(0);

        for (rank, (name, count)) in ranked.iter().enumerate() {
            let style = match rank {
                0 => TextStyle::GOLD,
                1 => TextStyle::SILVER,
                2 => TextStyle::BRONZE,
                _ => TextStyle::PLAIN,
            };
            let width =
                (u64::from(*count) * u64::from(BAR_MAX_WIDTH) / u64::from(max)).max(1) as usize;
            s.push(Line::new(vec![
                Span::plain(format!("{:>2}. {name:<name_w$} ", rank + 1)),
                Span::new("█".repeat(width), style),
                Span::plain(format!(" {count}")),
            ]));
        }
    }

    s.blank()
        .push(Line::styled("Press any key to return", TextStyle::PLAIN.dim()));
    s
}

/// Message for an action the engine rejected.
pub fn invalid_line() -> Line {
    Line::styled("That's not an option", TextStyle::BAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_all_choices() {
        let s = menu_screen();
        for entry in ["1. Player vs player", "2. Player vs computer", "5. Quit"] {
            assert!(s.contains(entry), "missing {entry}");
        }
    }

    #[test]
    fn empty_leaderboard() {
        let s = leaderboard_screen(&ScoreLedger::in_memory());
        assert!(s.contains("The list is empty"));
    }

    #[test]
    fn leaderboard_bars_scale_to_leader() {
        let ledger = ScoreLedger::parse("Bob : 3\nAlice : 6\n");
        let s = leaderboard_screen(&ledger);
        let rows: Vec<&Line> = s
            .lines()
            .iter()
            .filter(|l| l.text().contains('█'))
            .collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].text().starts_with(" 1. Alice"));
        assert_eq!(rows[0].spans[1].text.chars().count(), BAR_MAX_WIDTH as usize);
        assert_eq!(rows[0].spans[1].style, TextStyle::GOLD);
        assert_eq!(rows[1].spans[1].text.chars().count(), (BAR_MAX_WIDTH / 2) as usize);
        assert_eq!(rows[1].spans[1].style, TextStyle::SILVER);
    }

    #[test]
    fn leaderboard_handles_huge_counts() {
        let text = format!("Bob : 200000000\nAnn : 1\nEve : {}\n", u32::MAX);
        let ledger = ScoreLedger::parse(&text);
        let s = leaderboard_screen(&ledger);
        let bars: Vec<usize> = s
            .lines()
            .iter()
            .filter(|l| l.text().contains('█'))
            .map(|l| l.spans[1].text.chars().count())
            .collect();

        assert_eq!(bars, vec![BAR_MAX_WIDTH as usize, 1, 1]);
    }

    #[test]
    fn name_prompt_shows_error_and_text() {
        let s = name_prompt_screen("What is your name?", "ali", Some("Name must not be empty"));
        assert!(s.contains("Name must not be empty"));
        assert!(s.contains("What is your name? ali_"));
    }
}
