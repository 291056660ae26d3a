//! Tests for board coordinates.

use tictactoe_engine::{Axis, Position, PositionErrorKind};

#[test]
fn test_position_accessors() {
    let position = Position::new(1, 2).unwrap();
    assert_eq!(position.row(), 1);
    assert_eq!(position.column(), 2);
    assert_eq!(position.to_string(), "1,2");
}

#[test]
fn test_invalid_row_rejected() {
    for row in [-1_i64, 3, 100] {
        let err = Position::try_from((row, 0_i64)).unwrap_err();
        assert!(matches!(
            err.kind(),
            PositionErrorKind::InvalidCoordinate { axis: Axis::Row, .. }
        ));
    }
}

#[test]
fn test_invalid_column_rejected() {
    for column in [-1_i64, 3] {
        let err = Position::try_from((0_i64, column)).unwrap_err();
        assert!(matches!(
            err.kind(),
            PositionErrorKind::InvalidCoordinate { axis: Axis::Column, .. }
        ));
    }
}

#[test]
fn test_equality_is_structural() {
    let a = Position::new(1, 1).unwrap();
    let b = Position::new(1, 1).unwrap();
    let c = Position::new(1, 2).unwrap();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_eq!(Position::try_from((1_i64, 1_i64)).unwrap(), a);
    assert_eq!("1,1".parse::<Position>().unwrap(), a);
}

#[test]
fn test_deserialize_validates() {
    let ok: Position = serde_json::from_str(r#"{"row": 2, "column": 0}"#).unwrap();
    assert_eq!(ok, Position::new(2, 0).unwrap());

    assert!(serde_json::from_str::<Position>(r#"{"row": 3, "column": 0}"#).is_err());
    assert!(serde_json::from_str::<Position>(r#"{"row": -1, "column": 0}"#).is_err());
    assert!(serde_json::from_str::<Position>(r#"{"row": 1.5, "column": 0}"#).is_err());
}
