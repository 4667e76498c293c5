use super::*;
use chess_core::{Piece, PieceKind};

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(config.engine_side, Color::Black);
    assert_eq!(config.depth, 2);
    assert!(!config.show_score);
    assert_eq!(config.start_board().unwrap(), Board::initial());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config: PlayConfig = toml::from_str("engine_side = \"white\"\nshow_score = true\n").unwrap();
    assert_eq!(config.engine_side, Color::White);
    assert!(config.show_score);
    assert_eq!(config.depth, 2);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_unknown_keys_rejected() {
    let parsed: Result<PlayConfig, _> = toml::from_str("think_delay_ms = 500\n");
    assert!(parsed.is_err());
}

#[test]
fn test_start_position_diagram() {
    let config: PlayConfig = toml::from_str(
        r#"
start_position = """
....k...
........
........
........
........
........
....P...
....K...
"""
"#,
    )
    .unwrap();
    let board = config.start_board().unwrap();
    assert_eq!(board.pieces().count(), 3);
    assert_eq!(
        board.get(0, 4),
        Some(Piece::new(Color::Black, PieceKind::King))
    );
}

#[test]
fn test_bad_start_position() {
    let config = PlayConfig {
        start_position: Some("kK".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        config.start_board(),
        Err(ConfigError::StartPosition(ParseError::RowCount(1)))
    ));
}

#[test]
fn test_load_missing_file() {
    let err = PlayConfig::load(Path::new("/nonexistent/play.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_round_trip_through_toml() {
    let config = PlayConfig {
        engine_side: Color::White,
        depth: 3,
        ..Default::default()
    };
    let text = toml::to_string(&config).unwrap();
    let back: PlayConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_engine_depth_is_clamped() {
    let shallow = PlayConfig {
        depth: 0,
        ..Default::default()
    };
    assert_eq!(shallow.engine_depth(), 1);

    let deep: PlayConfig = toml::from_str("depth = 9\n").unwrap();
    assert_eq!(deep.engine_depth(), MAX_DEPTH);

    assert_eq!(PlayConfig::default().engine_depth(), 2);
}
