//! Fixed period simulation tick
//!
//! Advances ball, walls, paddles, AI and scoring by one step.

use super::state::{Ball, GameLoop, GameState, Side, Sign};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PaddleHit(Side),
    WallBounce,
    /// New ball speed
    SpeedUp(f32),
    Scored { side: Side, score: u32 },
    GameOver(Side),
}

/// Advance the game by one tick
///
/// Does nothing outside [`GameState::Playing`].
pub fn tick(game: &mut GameLoop) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match game.state {
        GameState::Playing => {}
        GameState::Menu | GameState::GameOver => return events,
    }

    let rules = game.rules;
    // Paddle checks, AI and speed-up read the ball and paddles as they were
    // before this tick moved anything. The ball can already be a full step
    // further along when they are evaluated.
    let prev = game.ball;
    let left = game.left;
    let right = game.right;

    let mut pos = prev.pos + prev.velocity();

    // Paddles
    let left_face = rules.left_paddle_x as f32 + 1.0;
    let right_face = rules.right_paddle_x as f32 - 1.0;
    if prev.dx == Sign::Neg && pos.x <= left_face && left.spans(prev.pos.y, &rules) {
        game.ball.dx = prev.dx.flip();
        pos.x = left_face + 1.0;
        events.push(GameEvent::PaddleHit(Side::Left));
    } else if prev.dx == Sign::Pos && pos.x >= right_face && right.spans(prev.pos.y, &rules) {
        game.ball.dx = prev.dx.flip();
        pos.x = right_face - 1.0;
        events.push(GameEvent::PaddleHit(Side::Right));
    }

    // Walls
    let bottom = rules.height as f32 - 1.0;
    if pos.y <= 0.0 || pos.y >= bottom {
        game.ball.dy = prev.dy.flip();
        pos.y = if pos.y <= 0.0 { 1.0 } else { bottom - 1.0 };
        events.push(GameEvent::WallBounce);
    }
    game.ball.pos = pos;

    // AI
    game.right.track(prev.pos.y, &rules);

    // Speed-up while in range of a paddle
    let near_left =
        prev.pos.x <= rules.left_paddle_x as f32 + 2.0 && left.spans(prev.pos.y, &rules);
    let near_right =
        prev.pos.x >= rules.right_paddle_x as f32 - 2.0 && right.spans(prev.pos.y, &rules);
    if near_left || near_right {
        let speed = (game.ball.speed + rules.speed_increment).min(rules.max_speed);
        if speed > game.ball.speed {
            game.ball.speed = speed;
            events.push(GameEvent::SpeedUp(speed));
        }
    }

    // Out of bounds
    let scorer = if pos.x < 0.0 {
        Some(Side::Right)
    } else if pos.x > rules.width as f32 - 1.0 {
        Some(Side::Left)
    } else {
        None
    };
    if let Some(side) = scorer {
        game.ball = Ball::serve(&rules);
        let score = game.score.add(side);
        events.push(GameEvent::Scored { side, score });
        log::info!(
            "{} scores ({} - {})",
            side.as_str(),
            game.score.left,
            game.score.right
        );

        if score >= rules.winning_score {
            game.winner = Some(side);
            game.enter(GameState::GameOver);
            events.push(GameEvent::GameOver(side));
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Paddle, Rules};

    fn playing() -> GameLoop {
        let mut game = GameLoop::new(Rules::default());
        game.state = GameState::Playing;
        game
    }

    fn place(game: &mut GameLoop, x: f32, y: f32, dx: Sign, dy: Sign) {
        game.ball.pos = Vec2::new(x, y);
        game.ball.dx = dx;
        game.ball.dy = dy;
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let mut game = GameLoop::new(Rules::default());
        let before = game.snapshot();
        assert!(tick(&mut game).is_empty());
        assert_eq!(game.snapshot(), before);

        game.state = GameState::GameOver;
        let before = game.snapshot();
        assert!(tick(&mut game).is_empty());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_tick_moves_ball_by_speed() {
        let mut game = playing();
        tick(&mut game);
        assert_eq!(game.ball.pos, Vec2::new(31.0, 11.0));
    }

    #[test]
    fn test_tick_left_paddle_reflects() {
        let mut game = playing();
        game.left = Paddle::at(8);
        place(&mut game, 3.0, 10.0, Sign::Neg, Sign::Pos);

        let events = tick(&mut game);
        assert_eq!(game.ball.dx, Sign::Pos);
        assert_eq!(game.ball.pos.x, PADDLE_INSET as f32 + 2.0);
        assert!(game.ball.pos.x > PADDLE_INSET as f32);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Left)));
    }

    #[test]
    fn test_tick_right_paddle_reflects() {
        let mut game = playing();
        let right_x = game.rules.right_paddle_x as f32;
        game.right = Paddle::at(8);
        place(&mut game, right_x - 2.0, 10.0, Sign::Pos, Sign::Neg);

        let events = tick(&mut game);
        assert_eq!(game.ball.dx, Sign::Neg);
        assert_eq!(game.ball.pos.x, right_x - 2.0);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Right)));
    }

    #[test]
    fn test_tick_missed_paddle_keeps_direction() {
        let mut game = playing();
        game.left = Paddle::at(0);
        place(&mut game, 3.0, 10.0, Sign::Neg, Sign::Pos);

        let events = tick(&mut game);
        assert_eq!(game.ball.dx, Sign::Neg);
        assert_eq!(game.ball.pos.x, 2.0);
        assert!(!events.contains(&GameEvent::PaddleHit(Side::Left)));
    }

    #[test]
    fn test_tick_paddle_span_uses_pre_tick_y() {
        let mut game = playing();
        game.left = Paddle::at(8); // spans [8, 12)
        place(&mut game, 3.0, 11.5, Sign::Neg, Sign::Pos);

        let events = tick(&mut game);
        // after the move y is 12.5, below the paddle, but the check saw 11.5
        assert_eq!(game.ball.pos.y, 12.5);
        assert_eq!(game.ball.dx, Sign::Pos);
        assert_eq!(game.ball.pos.x, PADDLE_INSET as f32 + 2.0);
        assert!(events.contains(&GameEvent::PaddleHit(Side::Left)));
    }

    #[test]
    fn test_tick_ball_moving_away_is_not_flipped() {
        let mut game = playing();
        game.left = Paddle::at(8);
        place(&mut game, 1.0, 10.0, Sign::Pos, Sign::Pos);

        let events = tick(&mut game);
        assert_eq!(game.ball.dx, Sign::Pos);
        assert_eq!(game.ball.pos.x, 2.0);
        assert!(!events.contains(&GameEvent::PaddleHit(Side::Left)));
    }

    #[test]
    fn test_tick_top_wall_clamps_to_one() {
        let mut game = playing();
        place(&mut game, 20.0, 1.0, Sign::Pos, Sign::Neg);

        let events = tick(&mut game);
        assert_eq!(game.ball.dy, Sign::Pos);
        assert_eq!(game.ball.pos.y, 1.0);
        assert!(events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_tick_bottom_wall_clamps_inside() {
        let mut game = playing();
        place(&mut game, 20.0, 18.0, Sign::Pos, Sign::Pos);

        tick(&mut game);
        assert_eq!(game.ball.dy, Sign::Neg);
        assert_eq!(game.ball.pos.y, BOARD_HEIGHT as f32 - 2.0);
    }

    #[test]
    fn test_tick_ai_follows_pre_tick_ball() {
        let mut game = playing();
        game.right = Paddle::at(0); // center 2
        place(&mut game, 30.0, 2.5, Sign::Pos, Sign::Neg);

        tick(&mut game);
        // ball is now at y=1.5, above the center, but the AI still saw 2.5
        assert_eq!(game.right.offset(), 1);
    }

    #[test]
    fn test_tick_speed_up_near_paddle_is_capped() {
        let mut game = playing();
        game.left = Paddle::at(8);
        place(&mut game, 4.0, 10.0, Sign::Pos, Sign::Pos);

        let events = tick(&mut game);
        assert!((game.ball.speed - (INITIAL_BALL_SPEED + BALL_SPEED_INCREMENT)).abs() < 1e-6);
        assert!(matches!(events.as_slice(), [GameEvent::SpeedUp(_)]));

        game.ball.speed = MAX_BALL_SPEED;
        place(&mut game, 4.0, 10.0, Sign::Pos, Sign::Pos);
        let events = tick(&mut game);
        assert_eq!(game.ball.speed, MAX_BALL_SPEED);
        assert!(events.is_empty());
    }

    #[test]
    fn test_tick_right_scores_when_ball_leaves_left() {
        let mut game = playing();
        game.left = Paddle::at(0);
        game.ball.speed = 2.0;
        place(&mut game, 1.0, 10.0, Sign::Neg, Sign::Neg);

        let events = tick(&mut game);
        assert_eq!(game.score.right, 1);
        assert_eq!(game.score.left, 0);
        assert_eq!(game.ball, Ball::serve(&game.rules));
        assert_eq!(game.state, GameState::Playing);
        assert!(events.contains(&GameEvent::Scored {
            side: Side::Right,
            score: 1
        }));
    }

    #[test]
    fn test_tick_left_scores_when_ball_leaves_right() {
        let mut game = playing();
        place(&mut game, 59.5, 10.0, Sign::Pos, Sign::Pos);
        game.right = Paddle::at(0);

        tick(&mut game);
        assert_eq!(game.score.left, 1);
        assert_eq!(game.ball, Ball::serve(&game.rules));
    }

    #[test]
    fn test_tick_winning_point_ends_game() {
        let mut game = playing();
        game.score.right = WINNING_SCORE - 1;
        game.left = Paddle::at(0);
        place(&mut game, 0.5, 10.0, Sign::Neg, Sign::Pos);

        let events = tick(&mut game);
        assert_eq!(game.score.right, WINNING_SCORE);
        assert_eq!(game.state, GameState::GameOver);
        assert_eq!(game.winner, Some(Side::Right));
        assert_eq!(events.last(), Some(&GameEvent::GameOver(Side::Right)));

        // frozen until acknowledged
        let before = game.snapshot();
        tick(&mut game);
        assert_eq!(game.snapshot(), before);
    }
}
