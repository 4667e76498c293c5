use super::*;
use crate::types::{sq, Piece, PieceKind, Square};

fn s(row: i8, col: i8) -> Square {
    sq(row, col).unwrap()
}

#[test]
fn test_minimax_depth_zero_is_static_score() {
    let boards = [
        Board::initial(),
        Board::initial().apply(Move::new(s(6, 4), s(4, 4))),
        Board::from_pieces([(s(3, 3), Piece::new(Color::White, PieceKind::Rook))]),
    ];
    for b in &boards {
        for maximizing in [true, false] {
            assert_eq!(
                minimax(b, 0, Score::NEG_INFINITY, Score::INFINITY, maximizing),
                score(b)
            );
        }
    }
}

#[test]
fn test_minimax_side_without_moves() {
    // Black pawn blocked, no other black piece
    let b = Board::from_pieces([
        (s(1, 0), Piece::new(Color::Black, PieceKind::Pawn)),
        (s(2, 0), Piece::new(Color::White, PieceKind::Pawn)),
    ]);
    assert_eq!(
        minimax(&b, 1, Score::NEG_INFINITY, Score::INFINITY, true),
        Score::NEG_INFINITY
    );

    let only_black = Board::from_pieces([(s(0, 0), Piece::new(Color::Black, PieceKind::King))]);
    assert_eq!(
        minimax(&only_black, 1, Score::NEG_INFINITY, Score::INFINITY, false),
        Score::INFINITY
    );
}

#[test]
fn test_pruning_does_not_change_result() {
    let b = Board::initial().apply(Move::new(s(6, 4), s(4, 4)));
    let full = minimax(&b, 2, Score::NEG_INFINITY, Score::INFINITY, true);

    // Brute-force two-ply minimax without pruning
    let mut best = Score::NEG_INFINITY;
    for mv in crate::movegen::all_moves(&b, Color::Black) {
        let after = b.apply(mv);
        let mut worst = Score::INFINITY;
        for reply in crate::movegen::all_moves(&after, Color::White) {
            worst = worst.min(score(&after.apply(reply)));
        }
        best = best.max(worst);
    }
    assert_eq!(full, best);
}

#[test]
fn test_single_legal_move_is_chosen() {
    let b = Board::from_pieces([
        (s(1, 0), Piece::new(Color::Black, PieceKind::Pawn)),
        (s(3, 0), Piece::new(Color::White, PieceKind::Pawn)),
        (s(7, 7), Piece::new(Color::White, PieceKind::King)),
    ]);
    assert_eq!(
        choose_move(&b, Color::Black),
        Decision::Move(Move::new(s(1, 0), s(2, 0)))
    );
}

#[test]
fn test_no_legal_moves_means_human_wins() {
    let b = Board::from_pieces([
        (s(1, 0), Piece::new(Color::Black, PieceKind::Pawn)),
        (s(2, 0), Piece::new(Color::White, PieceKind::Pawn)),
        (s(7, 7), Piece::new(Color::White, PieceKind::King)),
    ]);
    let decision = choose_move(&b, Color::Black);
    assert_eq!(decision, Decision::Terminal(Outcome::HumanWins));
    assert_eq!(decision.best_move(), None);
}

#[test]
fn test_takes_hanging_queen() {
    let b = Board::from_pieces([
        (s(0, 0), Piece::new(Color::Black, PieceKind::Rook)),
        (s(1, 4), Piece::new(Color::Black, PieceKind::King)),
        (s(0, 7), Piece::new(Color::White, PieceKind::Queen)),
        (s(7, 4), Piece::new(Color::White, PieceKind::King)),
    ]);
    assert_eq!(
        choose_move(&b, Color::Black),
        Decision::Move(Move::new(s(0, 0), s(0, 7)))
    );
}

#[test]
fn test_white_side_search_minimizes() {
    let b = Board::from_pieces([
        (s(7, 0), Piece::new(Color::White, PieceKind::Rook)),
        (s(6, 4), Piece::new(Color::White, PieceKind::King)),
        (s(7, 7), Piece::new(Color::Black, PieceKind::Queen)),
        (s(0, 4), Piece::new(Color::Black, PieceKind::King)),
    ]);
    assert_eq!(
        choose_move(&b, Color::White),
        Decision::Move(Move::new(s(7, 0), s(7, 7)))
    );
}

#[test]
fn test_ties_keep_first_move_in_scan_order() {
    let b = Board::from_pieces([
        (s(0, 3), Piece::new(Color::Black, PieceKind::King)),
        (s(7, 7), Piece::new(Color::White, PieceKind::King)),
    ]);
    let mut nodes = 0;
    let (decision, best) = choose_move_with_depth(&b, Color::Black, 0, &mut nodes);
    // (1,4) and (1,3) both score 20; (1,4) is generated first.
    assert_eq!(decision, Decision::Move(Move::new(s(0, 3), s(1, 4))));
    assert_eq!(best, 20.0);
    assert_eq!(nodes, 5);
}

#[test]
fn test_node_counter_grows_with_depth() {
    let b = Board::initial();
    let mut shallow = 0;
    let mut deep = 0;
    choose_move_with_depth(&b, Color::Black, 0, &mut shallow);
    choose_move_with_depth(&b, Color::Black, 2, &mut deep);
    assert_eq!(shallow, 20);
    assert!(deep > shallow);
}

#[test]
fn test_alpha_beta_visits_fewer_nodes_than_full_tree() {
    let b = Board::initial().apply(Move::new(s(6, 4), s(4, 4)));
    let mut nodes = 0;
    let (decision, _) = choose_move_with_depth(&b, Color::Black, 2, &mut nodes);
    assert!(decision.best_move().is_some());

    // Root moves, replies and counter-replies without any cutoff
    let full_tree: u64 = (1..=3).map(|d| crate::perft::perft(&b, Color::Black, d)).sum();
    assert!(
        nodes < full_tree,
        "searched {nodes} nodes, full tree has {full_tree}"
    );
}
