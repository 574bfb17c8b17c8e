use fractic_backoffice::{
    entities::{BackofficeConfig, BuildMode, Category, CategoryFilter, CsvDocument},
    repositories::FileExportRepository,
    usecases::{ExportUsecase, APPLICANT_HISTORY_EXPORT_FILENAME, INBOX_EXPORT_FILENAME},
    util::BackofficeUtil,
};

fn parse(s: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(s.as_bytes())
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[tokio::test]
async fn inbox_export_is_written_to_export_dir() {
    let dir = tempfile::tempdir().unwrap();
    let util = BackofficeUtil::new(BackofficeConfig {
        build_mode: BuildMode::Development,
        export_dir: dir.path().join("exports"),
    });
    let mut office = util.demo().unwrap();
    office
        .approvals
        .set_category_filter(CategoryFilter::Only(Category::TransportClaim));

    let exporter = office.exporter();
    let document = exporter.inbox_document(&office.approvals);
    let path = exporter.export(&document).await.unwrap();

    assert_eq!(path, dir.path().join("exports").join(INBOX_EXPORT_FILENAME));
    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(!written.ends_with('\n'));
    assert!(!written.starts_with('\u{feff}'));
    assert_eq!(
        parse(&written),
        vec![
            vec!["ID", "種類", "件名", "金額", "状態"],
            vec!["REQ-24002", "交通費精算", "営業交通費（9/28〜10/2）", "12840", "待ち"],
        ]
    );
}

#[tokio::test]
async fn applicant_history_export_follows_query() {
    let dir = tempfile::tempdir().unwrap();
    let mut office = BackofficeUtil::default().demo().unwrap();
    office.applicant_history.set_query_text("文具");

    let exporter = ExportUsecase::new(FileExportRepository::new(dir.path()));
    let document = exporter.applicant_history_document(&office.applicant_history);
    let path = exporter.export(&document).await.unwrap();

    assert_eq!(path.file_name().unwrap(), APPLICANT_HISTORY_EXPORT_FILENAME);
    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(
        written,
        "\"ID\",\"種類\",\"件名\",\"金額\",\"状態\",\"日付\"\n\
         \"H-103\",\"経費精算\",\"文具購入\",\"2980\",\"承認→登録済\",\"2025-10-22\""
    );
}

#[tokio::test]
async fn arbitrary_document_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = ExportUsecase::new(FileExportRepository::new(dir.path()));
    let mut document = CsvDocument::with_header("custom.csv", ["name", "note"]);
    document.push_row(["a\"b", "multi\nline, with comma"]);

    let path = exporter.export(&document).await.unwrap();
    let written = tokio::fs::read_to_string(&path).await.unwrap();

    assert!(written.contains("\"a\"\"b\""));
    assert_eq!(parse(&written), document.rows);
}

#[tokio::test]
async fn filenames_cannot_leave_export_dir() {
    let root = tempfile::tempdir().unwrap();
    let exports = root.path().join("exports");
    let exporter = ExportUsecase::new(FileExportRepository::new(&exports));
    let absolute = root.path().join("abs").join("x.csv");

    for filename in [
        "../x.csv",
        "sub/x.csv",
        "./x.csv",
        "..",
        "",
        absolute.to_str().unwrap(),
    ] {
        let document = CsvDocument::with_header(filename, ["a"]);
        assert!(exporter.export(&document).await.is_err(), "{filename}");
    }
    assert!(!root.path().join("x.csv").exists());
    assert!(!absolute.exists());
    assert!(!exports.exists());
}
