use std::convert::TryFrom;

use fractic_server_error::ServerError;

use crate::entities::{
    Attachment, AttachmentKind, Category, ChecklistItem, Confidence, Counterparty, Request,
    RequestBrief, RequestId, RequestStatus, RiskLevel,
};

use super::{currency_model::CurrencyModel, iso_date_model::ISODateModel};

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct AttachmentModel {
    name: String,
    kind: AttachmentKind,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ChecklistItemModel {
    check: String,
    ok: bool,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RequestModel {
    id: String,
    category: Category,
    title: String,
    #[serde(default)]
    vendor: String,
    amount: i64,
    currency: CurrencyModel,
    #[serde(default = "default_status")]
    status: RequestStatus,
    who_name: String,
    who_dept: String,
    what: String,
    when: ISODateModel,
    where_to: String,
    why: String,
    how: String,
    #[serde(default)]
    attachments: Vec<AttachmentModel>,
    risk: RiskLevel,
    confidence: f64,
    #[serde(default)]
    checklist: Vec<ChecklistItemModel>,
    received_date: ISODateModel,
    #[serde(default)]
    is_urgent: bool,
}

fn default_status() -> RequestStatus {
    RequestStatus::Pending
}

impl TryFrom<RequestModel> for Request {
    type Error = ServerError;

    fn try_from(m: RequestModel) -> Result<Self, Self::Error> {
        let confidence = Confidence::new(m.confidence)?;
        Ok(Request {
            id: RequestId(m.id),
            category: m.category,
            title: m.title,
            counterparty: Counterparty::from(m.vendor),
            amount: m.amount,
            currency: m.currency.into(),
            status: m.status,
            brief: RequestBrief {
                who_name: m.who_name,
                who_department: m.who_dept,
                what: m.what,
                when: m.when.into(),
                where_to: m.where_to,
                why: m.why,
                how: m.how,
            },
            attachments: m
                .attachments
                .into_iter()
                .map(|a| Attachment {
                    name: a.name,
                    kind: a.kind,
                })
                .collect(),
            risk: m.risk,
            confidence,
            checklist: m
                .checklist
                .into_iter()
                .map(|c| ChecklistItem {
                    description: c.check,
                    passed: c.ok,
                })
                .collect(),
            received_date: m.received_date.into(),
            urgent: m.is_urgent,
        })
    }
}
