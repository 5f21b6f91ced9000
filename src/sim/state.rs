//! Game state and core simulation types
//!
//! Everything the renderer reads and the tick/input handlers mutate lives in
//! [`GameLoop`].

use glam::Vec2;

use crate::consts::*;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active rally; the tick timer runs only here
    Playing,
    /// A side reached the winning score
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human paddle
    Left,
    /// AI paddle
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Direction along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Neg,
    Pos,
}

impl Sign {
    pub fn flip(self) -> Self {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Neg => -1.0,
            Sign::Pos => 1.0,
        }
    }
}

/// Validated board geometry and ball tuning
///
/// Built by [`crate::Settings::rules`]; the defaults match [`crate::consts`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) paddle_height: u16,
    pub(crate) left_paddle_x: u16,
    pub(crate) right_paddle_x: u16,
    pub(crate) initial_speed: f32,
    pub(crate) max_speed: f32,
    pub(crate) speed_increment: f32,
    pub(crate) winning_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            paddle_height: PADDLE_HEIGHT,
            left_paddle_x: PADDLE_INSET,
            right_paddle_x: BOARD_WIDTH - 1 - PADDLE_INSET,
            initial_speed: INITIAL_BALL_SPEED,
            max_speed: MAX_BALL_SPEED,
            speed_increment: BALL_SPEED_INCREMENT,
            winning_score: WINNING_SCORE,
        }
    }
}

impl Rules {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn paddle_height(&self) -> u16 {
        self.paddle_height
    }

    /// Column of the human paddle
    pub fn left_paddle_x(&self) -> u16 {
        self.left_paddle_x
    }

    /// Column of the AI paddle
    pub fn right_paddle_x(&self) -> u16 {
        self.right_paddle_x
    }

    /// Ball speed at the start of every rally
    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }

    /// Cap for the per-hit speed-up
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Points that end the game
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Largest paddle offset (top row) that keeps the whole paddle on the board
    pub fn max_paddle_offset(&self) -> u16 {
        self.height - self.paddle_height
    }

    /// Where every rally starts
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

/// A paddle: its column is fixed by [`Rules`], only the offset moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paddle {
    /// Top row of the paddle
    offset: u16,
}

impl Paddle {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn move_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn move_down(&mut self, rules: &Rules) {
        self.offset = (self.offset + 1).min(rules.max_paddle_offset());
    }

    /// Whether row `y` lies in `[offset, offset + paddle_height)`
    pub fn spans(&self, y: f32, rules: &Rules) -> bool {
        let top = self.offset as f32;
        y >= top && y < top + rules.paddle_height as f32
    }

    pub fn center(&self, rules: &Rules) -> f32 {
        self.offset as f32 + rules.paddle_height as f32 / 2.0
    }

    /// One AI step toward lining the paddle center up with `target_y`
    pub fn track(&mut self, target_y: f32, rules: &Rules) {
        let center = self.center(rules);
        if target_y > center {
            self.move_down(rules);
        } else if target_y < center {
            self.move_up();
        }
    }

    #[cfg(test)]
    pub(crate) fn at(offset: u16) -> Self {
        Self { offset }
    }
}

/// The ball: continuous position, a sign per axis and a scalar speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub dx: Sign,
    pub dy: Sign,
    /// Cells per tick along each axis
    pub speed: f32,
}

impl Ball {
    /// Ball at the start of a rally
    pub fn serve(rules: &Rules) -> Self {
        Self {
            pos: rules.serve_position(),
            dx: Sign::Pos,
            dy: Sign::Pos,
            speed: rules.initial_speed,
        }
    }

    /// Displacement for one tick
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.dx.as_f32(), self.dy.as_f32()) * self.speed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point and return the side's new total
    pub fn add(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }
}

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub ball: Vec2,
    pub speed: f32,
    pub left_paddle: u16,
    pub right_paddle: u16,
    pub score: Score,
    pub winner: Option<Side>,
}

/// Sole owner of all mutable game state
///
/// Mutated only through [`super::tick`] and [`super::handle_input`].
#[derive(Debug, Clone)]
pub struct GameLoop {
    pub(crate) rules: Rules,
    pub(crate) state: GameState,
    /// Human
    pub(crate) left: Paddle,
    /// AI
    pub(crate) right: Paddle,
    pub(crate) ball: Ball,
    pub(crate) score: Score,
    /// Set only together with the transition to GameOver
    pub(crate) winner: Option<Side>,
}

impl GameLoop {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            state: GameState::Menu,
            left: Paddle::default(),
            right: Paddle::default(),
            ball: Ball::serve(&rules),
            score: Score::default(),
            winner: None,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            ball: self.ball.pos,
            speed: self.ball.speed,
            left_paddle: self.left.offset(),
            right_paddle: self.right.offset(),
            score: self.score,
            winner: self.winner,
        }
    }

    /// Put every field except the FSM state back to its initial value
    pub(crate) fn reset(&mut self) {
        self.left = Paddle::default();
        self.right = Paddle::default();
        self.ball = Ball::serve(&self.rules);
        self.score = Score::default();
        self.winner = None;
    }

    pub(crate) fn enter(&mut self, next: GameState) {
        log::info!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
