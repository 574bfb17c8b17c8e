use crate::entities::{AttachmentKind, Request};

use super::amount_fmt::{format_amount, format_confidence};

pub(crate) struct RequestPrinter;

impl RequestPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// One-line inbox entry. The counterparty is left out when absent.
    pub(crate) fn print_inbox_line(&self, request: &Request, selected: bool) -> String {
        let counterparty = match request.counterparty.name() {
            Some(name) => format!("{} ・ ", name),
            None => String::new(),
        };
        format!(
            "[{}] {} {} | {}{} | 受付: {}{}",
            if selected { "x" } else { " " },
            request.category,
            request.title,
            counterparty,
            format_amount(request.amount, request.currency),
            request.received_date,
            if request.urgent { " | 急ぎ" } else { "" },
        )
    }

    pub(crate) fn print_detail(&self, request: &Request, comment: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", request.id, request.title));
        output.push_str(&format!(
            "  種類: {} / 状態: {} / 金額: {}",
            request.category,
            request.status,
            format_amount(request.amount, request.currency)
        ));
        if let Some(name) = request.counterparty.name() {
            output.push_str(&format!(" / 取引先: {}", name));
        }
        output.push_str(&format!(
            " / リスク: {} / AI確度: {}\n\n",
            request.risk.label(),
            format_confidence(request.confidence)
        ));

        let brief = &request.brief;
        for (label, value) in [
            ("誰が", format!("{}（{}）", brief.who_name, brief.who_department)),
            ("何を", brief.what.clone()),
            ("いつ", brief.when.to_string()),
            ("どこへ", brief.where_to.clone()),
            ("なぜ", brief.why.clone()),
            ("どのように", brief.how.clone()),
        ] {
            self.print_wrapped(&mut output, &format!("{}: {}", label, value));
        }
        output.push('\n');

        output.push_str("  添付:\n");
        if request.attachments.is_empty() {
            output.push_str("    (なし)\n");
        }
        for attachment in &request.attachments {
            let kind = match attachment.kind {
                AttachmentKind::Pdf => "PDF",
                AttachmentKind::Image => "画像",
            };
            output.push_str(&format!("    - {} ({})\n", attachment.name, kind));
        }

        output.push_str("  チェックリスト:\n");
        for item in &request.checklist {
            output.push_str(&format!(
                "    [{}] {}\n",
                if item.passed { "OK" } else { "NG" },
                item.description
            ));
        }

        if !comment.is_empty() {
            output.push_str("  コメント:\n");
            self.print_wrapped(&mut output, comment);
        }
        output
    }

    fn print_wrapped(&self, output: &mut String, s: &str) {
        for line in textwrap::wrap(s, 74) {
            output.push_str(&format!("    {}\n", line));
        }
    }
}
