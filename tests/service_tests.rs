use expense_core::{
    core::services::{ServiceError, SummaryService, TransactionService},
    domain::TransactionKind,
    errors::{FormatError, LedgerError},
    ledger::Ledger,
};

fn prepared_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    TransactionService::add_from_fields(
        &mut ledger,
        "Income",
        "2024-03-15",
        "Salary",
        "2500.0",
        "March pay",
    )
    .expect("income");
    TransactionService::add_from_fields(
        &mut ledger,
        "Expense",
        "2024-03-20",
        "Food",
        "45.5",
        "Groceries",
    )
    .expect("expense");
    ledger
}

#[test]
fn monthly_summary_matches_expected_totals() {
    let ledger = prepared_ledger();
    let summary = SummaryService::monthly(&ledger, "2024-03");

    assert_eq!(summary.total_income, 2500.0);
    assert_eq!(summary.income_by_category["Salary"], 2500.0);
    assert_eq!(summary.total_expense, 45.5);
    assert_eq!(summary.expense_by_category["Food"], 45.5);
    assert_eq!(summary.net_savings, 2454.5);
}

#[test]
fn empty_month_yields_zeroed_summary() {
    let ledger = prepared_ledger();
    let summary = SummaryService::monthly(&ledger, "2024-04");

    assert_eq!(summary.total_income, 0.0);
    assert_eq!(summary.total_expense, 0.0);
    assert_eq!(summary.net_savings, 0.0);
    assert!(summary.income_by_category.is_empty());
    assert!(summary.expense_by_category.is_empty());
}

#[test]
fn income_kind_is_matched_case_insensitively() {
    let mut ledger = Ledger::new();
    TransactionService::add_from_fields(&mut ledger, "income", "2024-03-01", "Tips", "10.0", "")
        .expect("lowercase income");
    TransactionService::add_from_fields(&mut ledger, "INCOME", "2024-03-02", "Tips", "15.0", "")
        .expect("uppercase income");
    TransactionService::add_from_fields(&mut ledger, "Transfer", "2024-03-03", "Misc", "5.0", "")
        .expect("unknown kind");

    let summary = SummaryService::monthly(&ledger, "2024-03");
    assert_eq!(summary.total_income, 25.0);
    // Any kind other than income counts as an expense.
    assert_eq!(summary.total_expense, 5.0);
}

#[test]
fn category_sums_add_up_to_partition_totals() {
    let mut ledger = Ledger::new();
    for (category, amount) in [("Food", "12.5"), ("Rent", "900.0"), ("Food", "7.5")] {
        TransactionService::add_from_fields(&mut ledger, "Expense", "2024-03-10", category, amount, "")
            .expect("expense");
    }

    let summary = SummaryService::monthly(&ledger, "2024-03");
    let by_category: f64 = summary.expense_by_category.values().sum();
    assert!((by_category - summary.total_expense).abs() < 1e-9);
    assert_eq!(summary.expense_by_category["Food"], 20.0);
    assert_eq!(summary.expense_by_category["Rent"], 900.0);
}

#[test]
fn invalid_fields_surface_format_errors() {
    let mut ledger = Ledger::new();
    let err = TransactionService::add_from_fields(
        &mut ledger,
        "Expense",
        "2024-03-40",
        "Food",
        "45.5",
        "",
    )
    .expect_err("bad date");
    match err {
        ServiceError::Ledger(LedgerError::Format(FormatError::InvalidDate(raw))) => {
            assert_eq!(raw, "2024-03-40");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(ledger.is_empty());

    let err = TransactionService::add_from_fields(
        &mut ledger,
        "Expense",
        "2024-03-20",
        "Food",
        "4 5",
        "",
    )
    .expect_err("bad amount");
    match err {
        ServiceError::Ledger(LedgerError::Format(FormatError::InvalidAmount(raw))) => {
            assert_eq!(raw, "4 5");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(ledger.is_empty());
}

#[test]
fn clear_empties_the_ledger() {
    let mut ledger = prepared_ledger();
    TransactionService::clear(&mut ledger);
    assert!(ledger.is_empty());

    let summary = SummaryService::monthly(&ledger, "2024-03");
    assert_eq!(summary.net_savings, 0.0);
}

#[test]
fn add_from_fields_returns_the_stored_record() {
    let mut ledger = Ledger::new();
    let stored = TransactionService::add_from_fields(
        &mut ledger,
        "Income",
        "2024-03-15",
        "Salary",
        "2500.0",
        "March pay",
    )
    .expect("append");
    assert_eq!(stored.kind(), TransactionKind::Income);
    assert_eq!(stored.amount(), 2500.0);
    assert_eq!(ledger.transactions()[0], stored);
}
