use super::*;
use grid::SortDirection;
use portal::fixtures;
use portal::model::Transaction;

fn columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("id").header("Receipt"),
        Column::new("studentName").header("Student"),
        Column::new("amount").header("Amount"),
    ]
}

fn ledger(copies: usize) -> Vec<Transaction> {
    let base = fixtures::transactions();
    (0..copies)
        .flat_map(|n| {
            base.iter().map(move |tx| Transaction { id: format!("{}-{n}", tx.id), ..tx.clone() })
        })
        .collect()
}

fn searchable_state(size: usize) -> TableState {
    TableState::new(TableOptions {
        searchable: true,
        selectable: true,
        default_rows_per_page: size,
        ..TableOptions::default()
    })
}

#[test]
fn page_model_detaches_first_page() {
    let rows = ledger(3);
    let model = page_model(&searchable_state(10), &rows, &columns());
    assert_eq!(model.rows.len(), 10);
    assert_eq!(model.keys[0], "SVIT25032001-0");
    assert_eq!(model.rows[0].0, model.keys[0]);
    assert_eq!(model.summary.as_deref(), Some("Showing 1 to 10 of 30 entries"));
    assert!(model.shows_pager);
    assert!(!model.all_selected);
}

#[test]
fn empty_data_has_no_summary_or_pager() {
    let model = page_model(&TableState::default(), &Vec::<Transaction>::new(), &columns());
    assert!(model.rows.is_empty());
    assert_eq!(model.summary, None);
    assert!(!model.shows_pager);
}

#[test]
fn select_all_then_search_clears_selection() {
    let rows = ledger(3);
    let cols = columns();
    let mut state = searchable_state(10);
    let keys = page_model(&state, &rows, &cols).keys;

    let changed = settle_after(&mut state, &rows, &cols, |s| s.toggle_all(&keys));
    assert_eq!(changed.map(|k| k.len()), Some(10));
    assert!(page_model(&state, &rows, &cols).all_selected);

    let changed = settle_after(&mut state, &rows, &cols, |s| {
        s.set_search("priya");
    });
    assert_eq!(changed, Some(Vec::new()));
    assert_eq!(state.page(), 1);
}

#[test]
fn replaced_data_renders_first_page_with_nothing_selected() {
    let rows = ledger(3);
    let cols = columns();
    let mut state = searchable_state(10);
    settle_after(&mut state, &rows, &cols, |s| s.set_page(2));
    let keys = page_model(&state, &rows, &cols).keys;
    settle_after(&mut state, &rows, &cols, |s| s.toggle_all(&keys));

    let replaced = ledger(2);
    let stale = current_model(&state, false, &replaced, &cols);
    assert_eq!(stale.keys[0], "SVIT25032001-1");
    assert_eq!(stale.selected.len(), 10);

    let fresh = current_model(&state, true, &replaced, &cols);
    assert_eq!(fresh.keys[0], "SVIT25032001-0");
    assert!(fresh.selected.is_empty());
    assert!(!fresh.all_selected);
    assert_eq!(fresh.summary.as_deref(), Some("Showing 1 to 10 of 20 entries"));
}

#[test]
fn unchanged_selection_reports_none() {
    let rows = ledger(1);
    let cols = columns();
    let mut state = searchable_state(10);
    assert_eq!(settle_after(&mut state, &rows, &cols, |s| s.set_page(1)), None);
}

#[test]
fn paging_prunes_selection_to_rendered_rows() {
    let rows = ledger(2);
    let cols = columns();
    let mut state = searchable_state(10);
    settle_after(&mut state, &rows, &cols, |s| {
        s.toggle_row("SVIT25032001-0");
    });
    let changed = settle_after(&mut state, &rows, &cols, |s| s.set_page(2));
    assert_eq!(changed, Some(Vec::new()));
}

#[test]
fn out_of_range_page_is_clamped() {
    let rows = ledger(3);
    let cols = columns();
    let mut state = searchable_state(10);
    settle_after(&mut state, &rows, &cols, |s| s.set_page(9));
    assert_eq!(state.page(), 3);
}

#[test]
fn sorting_by_amount_descending_puts_hostel_fees_first() {
    let rows = ledger(1);
    let cols = columns();
    let mut state = searchable_state(10);
    let amount = cols[2].clone();
    settle_after(&mut state, &rows, &cols, |s| {
        s.toggle_sort(&amount);
        s.toggle_sort(&amount);
    });
    assert_eq!(state.sort().direction(), SortDirection::Desc);
    let model = page_model(&state, &rows, &cols);
    assert_eq!(model.rows[0].1.amount, 25_000);
    assert_eq!(model.rows[1].1.amount, 25_000);
    assert_eq!(model.rows[9].1.amount, 1_000);
}

#[test]
fn header_class_reflects_indicator() {
    assert_eq!(header_class(SortIndicator::Neutral, false, None), "data-table__header");
    assert_eq!(
        header_class(SortIndicator::Ascending, true, Some("text-end")),
        "data-table__header data-table__header--sortable data-table__header--asc text-end"
    );
}
