use std::path::PathBuf;

use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    domain::{
        repositories::export_repository::ExportRepository,
        usecases::{approval_usecase::ApprovalDesk, history_usecase::HistoryBrowser},
    },
    entities::{ApplicantHistoryEntry, ApproverHistoryEntry, CsvDocument},
    presentation::{amount_fmt::PLACEHOLDER, csv_encoder::CsvEncoder},
};

pub const INBOX_EXPORT_FILENAME: &str = "approver_inbox.csv";
pub const APPLICANT_HISTORY_EXPORT_FILENAME: &str = "applicant_history.csv";
pub const APPROVER_HISTORY_EXPORT_FILENAME: &str = "approver_history.csv";

fn amount_cell(amount: Option<i64>) -> String {
    amount.map_or_else(|| PLACEHOLDER.to_string(), |a| a.to_string())
}

/// Builds CSV documents from what is currently visible and hands them to an
/// `ExportRepository`. Every document starts with a header row.
pub struct ExportUsecase<R: ExportRepository> {
    repository: R,
    encoder: CsvEncoder,
}

impl<R: ExportRepository> ExportUsecase<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            encoder: CsvEncoder::new(),
        }
    }

    /// Currently filtered inbox.
    pub fn inbox_document(&self, desk: &ApprovalDesk) -> CsvDocument {
        let mut document =
            CsvDocument::with_header(INBOX_EXPORT_FILENAME, ["ID", "種類", "件名", "金額", "状態"]);
        for r in desk.inbox() {
            document.push_row([
                r.id.to_string(),
                r.category.label().to_string(),
                r.title.clone(),
                r.amount.to_string(),
                r.status.label().to_string(),
            ]);
        }
        document
    }

    /// Currently filtered applicant history.
    pub fn applicant_history_document(
        &self,
        history: &HistoryBrowser<ApplicantHistoryEntry>,
    ) -> CsvDocument {
        let mut document = CsvDocument::with_header(
            APPLICANT_HISTORY_EXPORT_FILENAME,
            ["ID", "種類", "件名", "金額", "状態", "日付"],
        );
        for h in history.visible() {
            document.push_row([
                h.id.clone(),
                h.category.label().to_string(),
                h.title.clone(),
                amount_cell(h.amount),
                h.status.clone(),
                h.date.to_string(),
            ]);
        }
        document
    }

    /// Currently filtered approver history.
    pub fn approver_history_document(
        &self,
        history: &HistoryBrowser<ApproverHistoryEntry>,
    ) -> CsvDocument {
        let mut document = CsvDocument::with_header(
            APPROVER_HISTORY_EXPORT_FILENAME,
            ["ID", "種類", "件名", "金額", "操作", "日付"],
        );
        for h in history.visible() {
            document.push_row([
                h.id.clone(),
                h.category.label().to_string(),
                h.title.clone(),
                amount_cell(h.amount),
                h.action.label().to_string(),
                h.date.to_string(),
            ]);
        }
        document
    }

    pub fn encode(&self, document: &CsvDocument) -> Result<String, ServerError> {
        self.encoder.encode(document)
    }

    pub async fn export(&self, document: &CsvDocument) -> Result<PathBuf, ServerError> {
        let contents = self.encode(document)?;
        let path = self.repository.save(&document.filename, &contents).await?;
        info!(
            filename = %document.filename,
            rows = document.rows.len(),
            "exported CSV"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        entities::{ApprovalAction, Category, CategoryFilter},
        test_support::{date, request},
    };

    #[derive(Default)]
    struct MemoryExportRepository {
        saved: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ExportRepository for MemoryExportRepository {
        async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, ServerError> {
            self.saved
                .lock()
                .unwrap()
                .push((filename.to_string(), contents.to_string()));
            Ok(PathBuf::from(filename))
        }
    }

    #[test]
    fn inbox_export_has_header_and_follows_filter() {
        let mut desk = ApprovalDesk::new(vec![
            request("REQ-1", Category::Invoice, "請求書 \"至急\""),
            request("REQ-2", Category::TransportClaim, "交通費"),
        ]);
        desk.set_category_filter(CategoryFilter::Only(Category::Invoice));

        let usecase = ExportUsecase::new(MemoryExportRepository::default());
        let document = usecase.inbox_document(&desk);
        assert_eq!(document.filename, "approver_inbox.csv");
        assert_eq!(document.rows.len(), 2);
        assert_eq!(
            usecase.encode(&document).unwrap(),
            "\"ID\",\"種類\",\"件名\",\"金額\",\"状態\"\n\
             \"REQ-1\",\"請求書\",\"請求書 \"\"至急\"\"\",\"1000\",\"待ち\""
        );
    }

    #[test]
    fn history_exports_always_have_header() {
        let usecase = ExportUsecase::new(MemoryExportRepository::default());
        let empty: HistoryBrowser<ApproverHistoryEntry> = HistoryBrowser::new(vec![]);
        let document = usecase.approver_history_document(&empty);
        assert_eq!(document.rows, vec![vec!["ID", "種類", "件名", "金額", "操作", "日付"]]);

        let history = HistoryBrowser::new(vec![ApplicantHistoryEntry {
            id: "H-1".to_string(),
            category: Category::ExpenseClaim,
            title: "文具".to_string(),
            amount: None,
            status: "承認→登録済".to_string(),
            date: date(2025, 10, 22),
        }]);
        let document = usecase.applicant_history_document(&history);
        assert_eq!(
            document.rows[1],
            vec!["H-1", "経費精算", "文具", "—", "承認→登録済", "2025-10-22"]
        );
    }

    #[tokio::test]
    async fn export_hands_encoded_document_to_repository() {
        let usecase = ExportUsecase::new(MemoryExportRepository::default());
        let history = HistoryBrowser::new(vec![ApproverHistoryEntry {
            id: "A-1".to_string(),
            category: Category::Invoice,
            title: "請求書".to_string(),
            amount: Some(254_000),
            action: ApprovalAction::Approved,
            date: date(2025, 10, 5),
        }]);
        let document = usecase.approver_history_document(&history);

        let path = usecase.export(&document).await.unwrap();

        assert_eq!(path, PathBuf::from("approver_history.csv"));
        let saved = usecase.repository.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0]
            .1
            .ends_with("\"A-1\",\"請求書\",\"請求書\",\"254000\",\"承認\",\"2025-10-05\""));
    }
}
