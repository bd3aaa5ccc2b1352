//! End-to-end integration tests
//!
//! These tests drive the interactive session against ledger files on disk.
//! Each test:
//! 1. Copies a fixture ledger from tests/fixtures/ into a temporary directory
//! 2. Opens a store on the copy
//! 3. Runs the menus with a scripted input and a fixed clock
//! 4. Checks the printed output and the file contents
//!
//! Fixtures:
//! - `sample` - The two documented example lines
//! - `malformed` - A ledger whose second line is missing a field

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use ledger_tracker::cli::Session;
    use ledger_tracker::core::{filter_by_kind, filter_by_vendor};
    use ledger_tracker::{LedgerError, LedgerFile, TransactionKind, TransactionStore, VendorMatch};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Copy a fixture ledger into a fresh temporary directory
    fn copy_fixture(fixture_name: &str) -> (TempDir, PathBuf) {
        let source = format!("tests/fixtures/{}/transactions.csv", fixture_name);
        assert!(
            Path::new(&source).exists(),
            "Fixture not found: {}",
            source
        );

        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("transactions.csv");
        fs::copy(&source, &path).expect("Failed to copy fixture");
        (dir, path)
    }

    fn april_20() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 4, 20)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn may_2() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 5, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    /// Run a scripted session on a ledger file and return the printed output
    fn run_session(path: &Path, script: &str, clock: fn() -> NaiveDateTime) -> String {
        let store = TransactionStore::open(LedgerFile::new(path))
            .unwrap_or_else(|e| panic!("Failed to open ledger: {}", e));
        let mut output = Vec::new();
        Session::new(store, Cursor::new(script.as_bytes()), &mut output)
            .with_clock(clock)
            .run()
            .expect("Session failed");
        String::from_utf8(output).expect("Output is not UTF-8")
    }

    #[test]
    fn test_sample_ledger_splits_by_sign() {
        let (_dir, path) = copy_fixture("sample");
        let store = TransactionStore::open(LedgerFile::new(&path)).unwrap();

        let deposits = filter_by_kind(store.transactions(), TransactionKind::Deposit);
        let payments = filter_by_kind(store.transactions(), TransactionKind::Payment);

        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].description, "Invoice 1001 paid");
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].description, "ergonomic keyboard");
    }

    #[test]
    fn test_missing_file_is_created_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");

        let store = TransactionStore::open(LedgerFile::new(&path)).unwrap();

        assert!(store.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_malformed_ledger_aborts_load() {
        let (_dir, path) = copy_fixture("malformed");
        let before = fs::read_to_string(&path).unwrap();

        let error = TransactionStore::open(LedgerFile::new(&path)).unwrap_err();

        assert!(matches!(error, LedgerError::LoadFailed { .. }));
        let message = error.to_string();
        assert!(message.contains(&path.display().to_string()), "{}", message);
        assert!(message.contains("line 2"), "{}", message);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_deposit_is_appended_and_rounded() {
        let (_dir, path) = copy_fixture("sample");
        let script = "D\n2023-04-18 12:00:00\nRefund\nAmazon\n100.006\nX\n";

        let output = run_session(&path, script, april_20);

        assert!(output.contains("Successfully added new deposit:\n2023-04-18|12:00:00|Refund|Amazon|100.01"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("2023-04-18|12:00:00|Refund|Amazon|100.01\n"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_payment_is_negated_and_survives_reload() {
        let (_dir, path) = copy_fixture("sample");
        let script = "P\n\nGroceries\nMarket\n42.5\nX\n";

        run_session(&path, script, april_20);

        let store = TransactionStore::open(LedgerFile::new(&path)).unwrap();
        assert_eq!(store.len(), 3);
        let newest = store.ledger()[0].clone();
        assert_eq!(newest.description, "Groceries");
        assert_eq!(newest.amount, Decimal::new(-4250, 2));
        assert_eq!(newest.date, april_20().date());
    }

    #[test]
    fn test_invalid_date_reprompts_without_writing() {
        let (_dir, path) = copy_fixture("sample");
        let before = fs::read_to_string(&path).unwrap();
        let script = "P\n15/04/2023\nGroceries\nMarket\n42.5\n";

        let output = run_session(&path, script, april_20);

        assert!(output.contains("does not match the format yyyy-MM-dd HH:mm:ss"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_all_view_lists_newest_first() {
        let (_dir, path) = copy_fixture("sample");

        let output = run_session(&path, "L\nA\nH\nX\n", april_20);

        let invoice = output.find("Invoice 1001 paid").unwrap();
        let keyboard = output.find("ergonomic keyboard").unwrap();
        assert!(invoice < keyboard);
        assert!(output.contains("All Transactions:"));
    }

    #[rstest]
    #[case::deposits("D", "Invoice 1001 paid", "ergonomic keyboard")]
    #[case::payments("P", "ergonomic keyboard", "Invoice 1001 paid")]
    fn test_sign_views(#[case] choice: &str, #[case] shown: &str, #[case] hidden: &str) {
        let (_dir, path) = copy_fixture("sample");

        let output = run_session(&path, &format!("L\n{}\nH\nX\n", choice), april_20);

        assert!(output.contains(shown));
        assert!(!output.contains(hidden));
    }

    #[rstest]
    #[case::month_to_date("1", april_20 as fn() -> NaiveDateTime, "Start date: 2023-04-01", "End date: 2023-04-20", true)]
    #[case::previous_month("2", may_2 as fn() -> NaiveDateTime, "Start date: 2023-04-01", "End date: 2023-04-30", true)]
    #[case::year_to_date("3", april_20 as fn() -> NaiveDateTime, "Start date: 2023-01-01", "End date: 2023-04-20", true)]
    #[case::previous_year("4", april_20 as fn() -> NaiveDateTime, "Start date: 2022-01-01", "End date: 2022-12-31", false)]
    fn test_date_reports(
        #[case] choice: &str,
        #[case] clock: fn() -> NaiveDateTime,
        #[case] start: &str,
        #[case] end: &str,
        #[case] has_rows: bool,
    ) {
        let (_dir, path) = copy_fixture("sample");

        let output = run_session(&path, &format!("L\nR\n{}\n0\nH\nX\n", choice), clock);

        assert!(output.contains(start), "{}", output);
        assert!(output.contains(end), "{}", output);
        assert_eq!(output.contains("Invoice 1001 paid"), has_rows);
        assert_eq!(output.contains("No transactions to display."), !has_rows);
    }

    #[rstest]
    #[case::exact_case("Amazon", true)]
    #[case::other_case("aMaZoN", true)]
    #[case::substring("Amaz", false)]
    fn test_vendor_report(#[case] vendor: &str, #[case] found: bool) {
        let (_dir, path) = copy_fixture("sample");

        let output = run_session(&path, &format!("L\nR\n5\n{}\n0\nH\nX\n", vendor), april_20);

        assert_eq!(output.contains("ergonomic keyboard"), found);
        assert_eq!(
            output.contains(&format!(
                "Did not find any transaction under vendor: {} (2 transactions searched)",
                vendor
            )),
            !found
        );
    }

    #[test]
    fn test_vendor_match_is_exact_not_substring() {
        let (_dir, path) = copy_fixture("sample");
        let store = TransactionStore::open(LedgerFile::new(&path)).unwrap();

        assert!(matches!(
            filter_by_vendor(store.transactions(), "amazon"),
            VendorMatch::Found(ref found) if found.len() == 1
        ));
        assert!(matches!(
            filter_by_vendor(store.transactions(), "Amazon Prime"),
            VendorMatch::NotFound { searched: 2, .. }
        ));
    }
}
