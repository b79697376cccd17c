//! Board layout contract tests.
//!
//! Layouts arrive as `{tile, effect, target?}` JSON records. These tests
//! load them with serde_json and check what validation accepts.

use rust_boardgame::{
    Board, BoardConfigError, BoardLayout, Effect, EffectKind, Error, LinearConfig, PlayerId,
    TileEffectRecord,
};

const BOARD_JSON: &str = r#"{
    "tiles": [
        { "tile": 4,  "effect": "Ladder",   "target": 25 },
        { "tile": 13, "effect": "Ladder",   "target": 46 },
        { "tile": 27, "effect": "Snake",    "target": 5 },
        { "tile": 40, "effect": "Snake",    "target": 3 },
        { "tile": 50, "effect": "LoseTurn" },
        { "tile": 66, "effect": "Back" },
        { "tile": 87, "effect": "Snake",    "target": 57 }
    ]
}"#;

fn load(json: &str) -> Result<Board, Error> {
    let layout: BoardLayout = serde_json::from_str(json).unwrap();
    layout.build(&LinearConfig::default())
}

/// The sample board loads with every effect in place.
#[test]
fn test_load_board_json() {
    let board = load(BOARD_JSON).unwrap();

    assert_eq!(board.len(), 90);
    assert_eq!(board.tile_at(4).unwrap().effect(), Some(&Effect::ladder(4, 25)));
    assert_eq!(board.tile_at(50).unwrap().effect(), Some(&Effect::SkipTurn));
    assert_eq!(board.tile_at(66).unwrap().effect(), Some(&Effect::back_to_start(66)));

    let ladders: Vec<u32> = board.tiles_with_ladders().map(|t| t.number()).collect();
    let snakes: Vec<u32> = board.tiles_with_snakes().map(|t| t.number()).collect();
    assert_eq!(ladders, vec![4, 13]);
    assert_eq!(snakes, vec![27, 40, 87]);

    for target in [25, 46, 5, 3, 57] {
        assert!(board.tile_at(target).unwrap().effect().unwrap().is_placeholder());
    }
}

/// The first and last tiles never carry an effect.
#[test]
fn test_reserved_tiles_stay_empty() {
    let board = load(BOARD_JSON).unwrap();
    assert!(board.tile_at(1).unwrap().effect().is_none());
    assert!(board.tile_at(90).unwrap().effect().is_none());

    let err = load(r#"{"tiles":[{"tile":1,"effect":"LoseTurn"}]}"#).unwrap_err();
    assert_eq!(err, Error::from(BoardConfigError::ReservedTile { tile: 1 }));
}

#[test]
fn test_unknown_effect_string() {
    let err = load(r#"{"tiles":[{"tile":10,"effect":"Teleport","target":30}]}"#).unwrap_err();
    assert_eq!(err, Error::UnknownEffectKind("Teleport".to_string()));
}

#[test]
fn test_target_out_of_range() {
    let err = load(r#"{"tiles":[{"tile":10,"effect":"Ladder","target":91}]}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::BoardConfiguration(BoardConfigError::TargetOutOfRange { target: 91, .. })
    ));
}

/// Records serialize back to the same shape, without `target` when absent.
#[test]
fn test_record_json_shape() {
    let record = TileEffectRecord::new(50, EffectKind::LoseTurn, None);
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"tile":50,"effect":"LoseTurn"}"#
    );

    let layout: BoardLayout = serde_json::from_str(BOARD_JSON).unwrap();
    let json = serde_json::to_string(&layout).unwrap();
    let reloaded: BoardLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(layout, reloaded);
}

/// Occupancy operations follow arrival order.
#[test]
fn test_occupant_order() {
    let mut board = Board::new(10);
    let (a, b, c) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));

    board.add_occupant(3, a).unwrap();
    board.add_occupant(3, b).unwrap();
    board.add_occupant(3, c).unwrap();

    assert_eq!(board.remove_first_occupant(3).unwrap(), a);
    assert_eq!(board.occupants(3).unwrap(), &[b, c]);

    board.remove_occupant(3, c).unwrap();
    assert_eq!(board.remove_first_occupant(3).unwrap(), b);
    assert_eq!(board.remove_first_occupant(3).unwrap_err(), Error::EmptyTile { tile: 3 });
    assert_eq!(
        board.tile_at(11).unwrap_err(),
        Error::IndexOutOfRange { index: 11, length: 10 }
    );
}
