//! End-to-end games through the public API.

use gridgame::{Game, GameStatus, Mark, MoveError, Variant};

fn play(game: &mut Game, moves: &[usize]) -> Result<GameStatus, MoveError> {
    let mut status = game.status();
    for &index in moves {
        status = game.apply_move(index)?;
    }
    Ok(status)
}

#[test]
fn test_classic_top_row_win() {
    let mut game = Game::new(Variant::Classic);
    let status = play(&mut game, &[0, 3, 1, 4, 2]).unwrap();

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.highlighted(), &[0, 1, 2]);
}

#[test]
fn test_classic_draw() {
    let mut game = Game::new(Variant::Classic);
    let status = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();

    assert_eq!(status, GameStatus::Draw);
    assert!(game.board().is_full());
    assert!(game.highlighted().is_empty());
}

#[test]
fn test_connect_five_column_win() {
    let mut game = Game::new(Variant::ConnectFive);
    // O plays along the bottom-right, away from column 0
    let status = play(&mut game, &[0, 24, 5, 23, 10, 22, 15, 21, 20]).unwrap();

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(game.highlighted(), &[0, 5, 10, 15, 20]);
}

#[test]
fn test_connect_five_o_wins_diagonal() {
    let mut game = Game::new(Variant::ConnectFive);
    let status = play(&mut game, &[1, 0, 2, 6, 3, 12, 5, 18, 7, 24]).unwrap();

    assert_eq!(status, GameStatus::Won(Mark::O));
    assert_eq!(game.highlighted(), &[0, 6, 12, 18, 24]);
}

#[test]
fn test_three_in_a_row_does_not_win_connect_five() {
    let mut game = Game::new(Variant::ConnectFive);
    let status = play(&mut game, &[0, 20, 1, 21, 2]).unwrap();
    assert_eq!(status, GameStatus::InProgress);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut game = Game::new(Variant::Classic);
    play(&mut game, &[4, 0]).unwrap();
    let before = game.clone();

    assert_eq!(game.apply_move(0), Err(MoveError::Occupied { index: 0 }));
    assert_eq!(game.board(), before.board());
    assert_eq!(game.next_player(), before.next_player());
    assert_eq!(game.winning_line(), before.winning_line());
}

#[test]
fn test_reset_after_win_allows_play() {
    let mut game = Game::new(Variant::Classic);
    play(&mut game, &[0, 3, 1, 4, 2]).unwrap();
    assert_eq!(game.apply_move(5), Err(MoveError::GameOver));

    game.reset();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.next_player(), Mark::X);
    assert_eq!(game.apply_move(5), Ok(GameStatus::InProgress));
}
