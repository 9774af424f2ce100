use super::*;
use crate::error::BoardError;
use crate::types::Cell;

#[test]
fn test_parse_handshake() {
    let hs = parse_handshake("1,4,0,1,1\n").unwrap();
    assert_eq!(hs.color, Color::Dark);
    assert_eq!(hs.limit, 4);
    assert_eq!(hs.algorithm, Algorithm::AlphaBeta);
    assert!(hs.caching);
    assert!(hs.ordering);

    let config = hs.config();
    assert_eq!(config.depth, DepthLimit::Plies(4));
    assert!(config.orders_moves());
}

#[test]
fn test_parse_handshake_minimax_unbounded() {
    let hs = parse_handshake(" 2, -1, 1, 0, 0 ").unwrap();
    assert_eq!(hs.color, Color::Light);
    assert_eq!(hs.algorithm, Algorithm::Minimax);
    assert_eq!(hs.config().depth, DepthLimit::Unbounded);
    assert!(!hs.caching);
}

#[test]
fn test_parse_handshake_errors() {
    assert!(matches!(
        parse_handshake("1,4,0,1"),
        Err(ProtocolError::HandshakeFieldCount(4))
    ));
    assert!(matches!(
        parse_handshake("1,four,0,1,1"),
        Err(ProtocolError::HandshakeField { field: "limit", .. })
    ));
    assert!(matches!(
        parse_handshake("3,4,0,1,1"),
        Err(ProtocolError::UnknownColor(3))
    ));
}

#[test]
fn test_parse_status() {
    assert_eq!(
        parse_status("SCORE 2 2").unwrap(),
        Status::Score { dark: 2, light: 2 }
    );
    assert_eq!(
        parse_status("FINAL 33 31\n").unwrap(),
        Status::Final {
            dark: 33,
            light: 31
        }
    );
    assert!(parse_status("SCORE 2").is_err());
    assert!(parse_status("DRAW 2 2").is_err());
    assert!(parse_status("SCORE x 2").is_err());
}

#[test]
fn test_parse_board_tuples() {
    let text = "((0, 0, 0, 0), (0, 2, 1, 0), (0, 1, 2, 0), (0, 0, 0, 0))";
    let board = parse_board(text).unwrap();
    assert_eq!(board, Board::initial(4).unwrap());
}

#[test]
fn test_parse_board_lists_and_trailing_commas() {
    let text = "[[0, 1,], [2, 0,],]";
    let board = parse_board(text).unwrap();
    assert_eq!(board.get(0, 1), Some(Cell::Dark));
    assert_eq!(board.get(1, 0), Some(Cell::Light));
}

#[test]
fn test_parse_board_rejects_garbage() {
    assert!(matches!(
        parse_board("__import__('os')"),
        Err(ProtocolError::BoardSyntax(_))
    ));
    assert!(matches!(
        parse_board("((0 1), (0, 0))"),
        Err(ProtocolError::BoardSyntax(_))
    ));
    assert!(matches!(
        parse_board("((0, 0), (0,))"),
        Err(ProtocolError::Board(BoardError::InvalidDimensions { .. }))
    ));
    assert!(matches!(
        parse_board("((0, 5), (0, 0))"),
        Err(ProtocolError::Board(BoardError::InvalidCell { value: 5, .. }))
    ));
}

#[test]
fn test_format_move() {
    assert_eq!(format_move(Move::new(2, 3)), "2 3");
}
