//! Character-grid drawing of a [`Snapshot`]

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::sim::{GameState, Rules, Snapshot};

const BALL_GLYPH: char = 'O';
const PADDLE_GLYPH: char = '█';
const NET_GLYPH: char = '|';

/// Draw one frame, overwriting the previous one in place
pub fn draw<W: Write>(out: &mut W, snap: &Snapshot, rules: &Rules) -> io::Result<()> {
    for (row, line) in lines(snap, rules).iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16),
            Print(line),
            Clear(ClearType::UntilNewLine)
        )?;
    }
    queue!(out, Clear(ClearType::FromCursorDown))?;
    out.flush()
}

/// Text rows for the active screen
pub fn lines(snap: &Snapshot, rules: &Rules) -> Vec<String> {
    let width = rules.width() as usize;
    match snap.state {
        GameState::Menu => [
            "Welcome to Pong!",
            "Use Up and Down arrow keys to move the left paddle",
            "Press Enter to start the game",
            "Press Esc to exit during the game",
            "Press Ctrl-C to quit",
        ]
        .iter()
        .map(|text| centered(text, width))
        .collect(),
        GameState::Playing => {
            let mut rows = Vec::with_capacity(rules.height() as usize + 1);
            rows.push(header(snap, width));
            rows.extend((0..rules.height()).map(|y| board_row(snap, rules, y)));
            rows
        }
        GameState::GameOver => {
            let mut rows = Vec::new();
            if let Some(winner) = snap.winner {
                rows.push(centered(&format!("{} player wins!", winner.as_str()), width));
            }
            rows.extend(
                ["Game Over", "Press Enter to return to menu", "Press Esc to exit"]
                    .iter()
                    .map(|text| centered(text, width)),
            );
            rows
        }
    }
}

fn header(snap: &Snapshot, width: usize) -> String {
    let parts = [
        format!("Left: {}", snap.score.left),
        format!("Right: {}", snap.score.right),
        format!("Ball Speed: {:.1}x", snap.speed),
    ];
    let used: usize = parts.iter().map(|p| p.chars().count()).sum();
    let gap = (width.saturating_sub(used) / 2).max(1);
    parts.join(&" ".repeat(gap))
}

fn board_row(snap: &Snapshot, rules: &Rules, y: u16) -> String {
    let ball_x = snap.ball.x.round() as i32;
    let ball_y = snap.ball.y.round() as i32;
    let in_paddle = |offset: u16| y >= offset && y < offset + rules.paddle_height();

    (0..rules.width())
        .map(|x| {
            if ball_x == x as i32 && ball_y == y as i32 {
                BALL_GLYPH
            } else if x == rules.left_paddle_x() && in_paddle(snap.left_paddle) {
                PADDLE_GLYPH
            } else if x == rules.right_paddle_x() && in_paddle(snap.right_paddle) {
                PADDLE_GLYPH
            } else if x == rules.width() / 2 {
                NET_GLYPH
            } else {
                ' '
            }
        })
        .collect()
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
