//! Library-level scenario tests for the seating chart workflow.

use seatplan::config::Config;
use seatplan::models::{Roster, SeatAddress};
use seatplan::parser::parse_roster_csv_str;
use seatplan::services::{assign, clear, AssignError, ChartState, DragPayload};

fn addr(column: &str, row: usize, col: usize) -> SeatAddress {
    SeatAddress::new(column, row, col)
}

#[test]
fn test_import_place_move_export_flow() {
    let config = Config::new();
    let names = parse_roster_csv_str("Alice,3B\nBob,3B\nCarol,3B\n");
    let mut chart = ChartState::new(Roster::from_names(names), &config.layout_config);
    let total = chart.placed_count() + chart.unplaced_count();
    assert_eq!(total, 3);

    // Seat two students
    assign(
        &mut chart,
        DragPayload::Roster {
            name: "Alice".to_string(),
        },
        &addr("column1", 0, 0),
    )
    .unwrap();
    assign(
        &mut chart,
        DragPayload::Roster {
            name: "Bob".to_string(),
        },
        &addr("column2", 3, 1),
    )
    .unwrap();
    assert_eq!(chart.placed_count(), 2);
    assert_eq!(chart.unplaced_count(), 1);

    // Move Alice across columns
    assign(
        &mut chart,
        DragPayload::Seat {
            address: addr("column1", 0, 0),
            name: "Alice".to_string(),
        },
        &addr("column3", 7, 2),
    )
    .unwrap();
    assert!(!chart.grid().get(&addr("column1", 0, 0)).unwrap().is_occupied());
    assert_eq!(
        chart.grid().get(&addr("column3", 7, 2)).unwrap().student_name(),
        Some("Alice")
    );
    assert_eq!(chart.placed_count() + chart.unplaced_count(), total);

    // Both renderers accept the populated chart
    let pdf = seatplan::export::render_document(&chart, &config).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    let png = seatplan::export::render_png(&chart, &config).unwrap();
    assert!(!png.is_empty());
}

#[test]
fn test_occupied_seat_rejection_keeps_both_students() {
    let config = Config::new();
    let mut chart = ChartState::new(Roster::from_names(["A", "B"]), &config.layout_config);

    assign(
        &mut chart,
        DragPayload::Roster { name: "A".to_string() },
        &addr("column1", 0, 0),
    )
    .unwrap();

    let err = assign(
        &mut chart,
        DragPayload::Roster { name: "B".to_string() },
        &addr("column1", 0, 0),
    )
    .unwrap_err();
    assert!(matches!(err, AssignError::SeatOccupied { .. }));

    assert_eq!(
        chart.grid().get(&addr("column1", 0, 0)).unwrap().student_name(),
        Some("A")
    );
    assert!(chart.roster().contains("B"));
    assert_eq!(chart.placed_count() + chart.unplaced_count(), 2);
}

#[test]
fn test_layout_rebuild_preserves_every_student() {
    let mut config = Config::new();
    let mut chart = ChartState::new(
        Roster::from_names(["A", "B", "C", "D"]),
        &config.layout_config,
    );

    for (i, name) in ["A", "B", "C"].iter().enumerate() {
        assign(
            &mut chart,
            DragPayload::Roster {
                name: (*name).to_string(),
            },
            &addr("column1", i, 0),
        )
        .unwrap();
    }
    assert_eq!(chart.placed_count(), 3);

    // Shrink column1 and drop column3 entirely
    config.layout_config.get_mut("column1").unwrap().rows = 2;
    config.layout_config.remove("column3");
    chart.rebuild(&config.layout_config);

    assert_eq!(chart.placed_count(), 0);
    assert_eq!(chart.unplaced_count(), 4);
    for name in ["A", "B", "C", "D"] {
        assert!(chart.roster().contains(name), "{name} lost in rebuild");
    }
}

#[test]
fn test_clear_and_reseat_cycle() {
    let config = Config::new();
    let mut chart = ChartState::new(Roster::from_names(["A"]), &config.layout_config);
    let seat = addr("column2", 0, 0);

    for _ in 0..3 {
        assign(
            &mut chart,
            DragPayload::Roster { name: "A".to_string() },
            &seat,
        )
        .unwrap();
        assert_eq!(chart.unplaced_count(), 0);

        assert_eq!(clear(&mut chart, &seat).unwrap(), Some("A".to_string()));
        assert_eq!(chart.unplaced_count(), 1);
    }
}
