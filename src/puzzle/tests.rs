use super::{Move, Puzzle, PuzzleError, MAX_DIM};
use rand::{rngs::StdRng, SeedableRng};

fn board(configuration: &str) -> Puzzle {
    configuration.parse().unwrap()
}

#[test]
fn solved_board() {
    let puzzle = Puzzle::solved(3).unwrap();
    assert_eq!(puzzle.serialize(), "123456780");
    assert_eq!(puzzle.heuristic(), 0);
    assert!(puzzle.is_solved());
    assert_eq!(Puzzle::solved(4).unwrap().serialize(), "123456789abcdef0");
}

#[test]
fn unsupported_dimensions() {
    assert_eq!(Puzzle::solved(1), Err(PuzzleError::UnsupportedDimension(1)));
    assert_eq!(
        Puzzle::random(MAX_DIM + 1),
        Err(PuzzleError::UnsupportedDimension(MAX_DIM + 1))
    );
}

#[test]
fn random_board_is_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    for size in 2..=MAX_DIM {
        for _ in 0..20 {
            let puzzle = Puzzle::random_with(size, &mut rng).unwrap();
            let mut tiles = puzzle.tiles().to_vec();
            tiles.sort_unstable();
            assert_eq!(tiles, (0..(size * size) as u32).collect::<Vec<_>>());
            assert_eq!(puzzle.serialize().len(), size * size);
        }
    }
}

#[test]
fn random_solvable_board() {
    let mut rng = StdRng::seed_from_u64(42);
    for size in 2..=4 {
        for _ in 0..10 {
            assert!(Puzzle::random_solvable_with(size, &mut rng)
                .unwrap()
                .is_solvable());
        }
    }
}

#[test]
fn heuristic_counts_inversions() {
    assert_eq!(board("123456708").heuristic(), 1);
    assert_eq!(board("123456780").heuristic(), 0);
    // blank ranks above every tile
    assert_eq!(board("012345678").heuristic(), 8);
    assert_eq!(board("876543210").heuristic(), 28);
    assert_eq!(board("213456780").heuristic(), 1);
    assert!(!board("213456780").is_solved());
}

#[test]
fn heuristic_zero_only_for_goal() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let puzzle = Puzzle::random_with(3, &mut rng).unwrap();
        assert_eq!(puzzle.heuristic() == 0, puzzle.serialize() == "123456780");
    }
}

#[test]
fn configuration_round_trip() {
    for configuration in ["0123", "3012", "123456780", "087654321", "fedcba9876543210", "123456789abcdef0"] {
        assert_eq!(board(configuration).serialize(), configuration);
    }
}

#[test]
fn malformed_configurations() {
    assert_eq!(
        "12345678x".parse::<Puzzle>(),
        Err(PuzzleError::NotADigit { position: 8, found: 'x' })
    );
    assert_eq!(
        "12 3".parse::<Puzzle>(),
        Err(PuzzleError::NotADigit { position: 2, found: ' ' })
    );
    assert_eq!(
        "123456789ABCDEF0".parse::<Puzzle>(),
        Err(PuzzleError::NotADigit { position: 9, found: 'A' })
    );
    assert_eq!("12345".parse::<Puzzle>(), Err(PuzzleError::NotSquare { len: 5 }));
    assert_eq!("0".parse::<Puzzle>(), Err(PuzzleError::NotSquare { len: 1 }));
    assert_eq!("".parse::<Puzzle>(), Err(PuzzleError::NotSquare { len: 0 }));
    assert_eq!(
        "123456788".parse::<Puzzle>(),
        Err(PuzzleError::NotAPermutation { dim: 3 })
    );
    assert_eq!(
        "1233".parse::<Puzzle>(),
        Err(PuzzleError::NotAPermutation { dim: 2 })
    );
}

#[test]
fn tile_characters_limited_by_board_size() {
    assert_eq!(
        "1239".parse::<Puzzle>(),
        Err(PuzzleError::NotADigit { position: 3, found: '9' })
    );
    assert_eq!(
        "12345678a".parse::<Puzzle>(),
        Err(PuzzleError::NotADigit { position: 8, found: 'a' })
    );
    assert_eq!(
        "123456789abcdeg0".parse::<Puzzle>(),
        Err(PuzzleError::NotADigit { position: 14, found: 'g' })
    );
    assert_eq!(board("123456789abcdef0").tiles()[14], 15);
}

#[test]
fn legal_moves_order() {
    assert_eq!(board("123456780").legal_moves(), vec![6, 8]);
    assert_eq!(board("123405678").legal_moves(), vec![2, 7, 4, 5]);
    assert_eq!(board("012345678").legal_moves(), vec![3, 1]);
    assert_eq!(board("120345678").legal_moves(), vec![5, 2]);
}

#[test]
fn illegal_move_leaves_board() {
    let mut puzzle = board("123456780");
    for tile in [0, 1, 5, 7, 9, 42] {
        assert!(!puzzle.apply_move(tile));
        assert_eq!(puzzle.serialize(), "123456780");
    }
}

#[test]
fn legal_move_is_self_inverse() {
    let original = board("123405678");
    for tile in original.legal_moves() {
        let mut puzzle = original.clone();
        assert!(puzzle.apply_move(tile));

        let changed = puzzle
            .tiles()
            .iter()
            .zip(original.tiles())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 2);
        assert_eq!(puzzle.tiles()[4], tile);

        assert!(puzzle.apply_move(tile));
        assert_eq!(puzzle, original);
    }
}

#[test]
fn tile_for_direction() {
    let puzzle = board("123456780");
    assert_eq!(puzzle.tile_for(Move::Up), None);
    assert_eq!(puzzle.tile_for(Move::Left), None);
    assert_eq!(puzzle.tile_for(Move::Down), Some(6));
    assert_eq!(puzzle.tile_for(Move::Right), Some(8));

    let mut puzzle = board("123405678");
    let tile = puzzle.tile_for(Move::Up).unwrap();
    assert_eq!(tile, 7);
    assert!(puzzle.apply_move(tile));
    assert_eq!(puzzle.serialize(), "123475608");
}

#[test]
fn parity() {
    assert!(board("123456780").is_solvable());
    assert!(board("123456708").is_solvable());
    assert!(!board("213456780").is_solvable());
    assert!(board("123456789abcdef0").is_solvable());
    assert!(!board("213456789abcdef0").is_solvable());
    assert!(board("1230").is_solvable());
    assert!(!board("2130").is_solvable());
}

#[test]
fn render_grid() {
    let puzzle = board("1230");
    assert_eq!(puzzle.render(0), " 1  2 \n 3    \n");
    assert_eq!(puzzle.render(2), "   1  2 \n   3    \n");
    assert_eq!(puzzle.to_string(), puzzle.render(0));
}
