use minefield::generator::protected_cell;
use minefield::util::{DIRS_8, valid_neighbors};
use minefield::{
    Error, Game, Grid, Guess, MINE, Mode, WinState, all_mines_flagged, apply_turn,
    create_mine_board, populate_adjacency_counts, reveal_from,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn mine_positions(game: &Game) -> Vec<(u16, u16)> {
    game.mines()
        .iter()
        .filter(|(_, v)| **v == MINE)
        .map(|(p, _)| p)
        .collect()
}

/// One based guess, the way a player types it.
fn typed(mode: char, (x, y): (u16, u16)) -> Guess {
    Guess::new(mode, y + 1, x + 1).unwrap()
}

#[test_log::test]
fn flagging_all_three_mines_wins() {
    for seed in 0..10 {
        let mut game = Game::new(5, 5, 3, &mut StdRng::seed_from_u64(seed)).unwrap();
        let mines = mine_positions(&game);
        assert_eq!(mines.len(), 3);
        assert!(!mines.contains(&(1, 1)), "1-based (2,2) is protected");

        let (last, rest) = mines.split_last().unwrap();
        for pos in rest {
            assert_eq!(game.take_turn(typed('F', *pos)), Ok(WinState::Playing));
        }
        assert_eq!(game.take_turn(typed('F', *last)), Ok(WinState::Won));
        assert_eq!(game.flag_count(), 3);
    }
}

#[test_log::test]
fn destroying_any_mine_loses() {
    let seed = 11;
    let layout = mine_positions(&Game::new(5, 5, 3, &mut StdRng::seed_from_u64(seed)).unwrap());
    for pos in layout {
        let mut game = Game::new(5, 5, 3, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(game.take_turn(typed('D', pos)), Ok(WinState::Lost));
        assert_eq!(game.win_state(), WinState::Lost);
        assert_eq!(game.take_turn(typed('D', (1, 1))), Err(Error::GameOver));
    }
}

#[test]
fn protected_centre_never_explodes() {
    for seed in 0..25 {
        let mut game = Game::new(8, 8, 40, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(game.take_turn(typed('D', (3, 3))), Ok(WinState::Playing));
        assert!(game.mask()[(3, 3)]);
    }
}

#[test]
fn generated_boards_hold_their_invariants() {
    for seed in 0..30 {
        for (w, h, count) in [(2, 2, 1), (5, 5, 3), (7, 3, 19), (30, 16, 99)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = create_mine_board(w, h, count, &mut rng).unwrap();
            populate_adjacency_counts(&mut board);

            assert_eq!(board.count(|v| *v == MINE), count as usize);
            assert_ne!(board[protected_cell(w, h)], MINE);
            for (pos, value) in board.iter() {
                if *value != MINE {
                    let around = valid_neighbors(&DIRS_8, pos, w, h)
                        .filter(|n| board[*n] == MINE)
                        .count();
                    assert_eq!(*value as usize, around);
                }
            }
        }
    }
}

#[test]
fn guess_validation_examples() {
    assert!(Guess::new('X', 1, 1).is_none());
    assert!(Guess::new('F', 0, 1).is_none());
    let g = Guess::new('D', 2, 2).unwrap();
    assert_eq!((g.x, g.y, g.mode), (1, 1, Mode::Destroy));
}

#[test]
fn cascade_never_uncovers_a_mine() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut mines = create_mine_board(12, 9, 15, &mut rng).unwrap();
        populate_adjacency_counts(&mut mines);
        let flags = Grid::new(12, 9);

        for origin in mines.positions().filter(|p| mines[*p] == 0) {
            let mut mask = Grid::new(12, 9);
            reveal_from(&mines, &flags, &mut mask, origin);
            for (pos, shown) in mask.iter() {
                if !*shown {
                    continue;
                }
                assert_ne!(mines[pos], MINE);
                // every shown cell is a zero or borders one that was shown
                let touches_zero = mines[pos] == 0
                    || valid_neighbors(&DIRS_8, pos, 12, 9).any(|n| mask[n] && mines[n] == 0);
                assert!(touches_zero, "{pos:?} revealed past the border");
            }
        }
    }
}

#[test]
fn win_check_against_free_functions() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut mines = create_mine_board(6, 6, 4, &mut rng).unwrap();
    populate_adjacency_counts(&mut mines);
    let mut flags = Grid::new(6, 6);
    let mut mask = Grid::new(6, 6);

    // a flag on a safe cell doesn't help or hurt
    let safe = protected_cell(6, 6);
    apply_turn(&mines, &mut flags, &mut mask, typed('F', safe));
    assert!(!all_mines_flagged(&mines, &flags));

    let positions: Vec<_> = mines.positions().filter(|p| mines[*p] == MINE).collect();
    for pos in positions {
        let r = apply_turn(&mines, &mut flags, &mut mask, typed('F', pos));
        assert!(!r.hit_mine);
    }
    assert!(all_mines_flagged(&mines, &flags));
}
