//! Validates the serde document shape and decode-time dimension checks

#![cfg(feature = "serde")]

use cellgrid::Grid;
use serde_json::json;

fn from_rows(rows: Vec<Vec<i32>>) -> Grid<i32> {
    let Ok(grid) = Grid::from_rows(rows) else {
        unreachable!("rows are rectangular");
    };
    grid
}

#[test]
fn test_encoded_document_is_self_describing() {
    let grid = from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let Ok(encoded) = serde_json::to_value(&grid) else {
        unreachable!("i32 cells always encode");
    };
    assert_eq!(
        encoded,
        json!({
            "rows": 2,
            "cols": 3,
            "cells": [1, 2, 3, 4, 5, 6],
        })
    );
}

#[test]
fn test_encode_decode_round_trip() {
    let grid = from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    let Ok(encoded) = serde_json::to_string(&grid) else {
        unreachable!("i32 cells always encode");
    };
    assert_eq!(serde_json::from_str::<Grid<i32>>(&encoded).ok(), Some(grid));
}

#[test]
fn test_empty_grid_round_trips_through_serde() {
    let Ok(grid) = Grid::new(0, 0, 0_i32) else {
        unreachable!("zero extent is valid");
    };
    let Ok(encoded) = serde_json::to_string(&grid) else {
        unreachable!("i32 cells always encode");
    };
    assert_eq!(serde_json::from_str::<Grid<i32>>(&encoded).ok(), Some(grid));
}

#[test]
fn test_encoded_cells_follow_logical_order_on_rotated_grids() {
    let grid = from_rows(vec![vec![1, 2], vec![3, 4]]).rotated_clockwise();
    let Ok(encoded) = serde_json::to_value(&grid) else {
        unreachable!("i32 cells always encode");
    };
    assert_eq!(
        encoded,
        json!({
            "rows": 2,
            "cols": 2,
            "cells": [3, 1, 4, 2],
        })
    );
}

#[test]
fn test_decode_rejects_mismatched_cell_count() {
    let document = json!({
        "rows": 2,
        "cols": 3,
        "cells": [1, 2, 3, 4],
    });
    assert!(serde_json::from_value::<Grid<i32>>(document).is_err());
}

#[test]
fn test_decode_preserves_row_major_placement() {
    let document = json!({
        "rows": 2,
        "cols": 2,
        "cells": [10, 20, 30, 40],
    });
    let Ok(grid) = serde_json::from_value::<Grid<i32>>(document) else {
        unreachable!("document is well formed");
    };
    assert_eq!(grid.get(0, 1), Ok(&20));
    assert_eq!(grid.get(1, 0), Ok(&30));
}
