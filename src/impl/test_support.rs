use chrono::NaiveDate;
use iso_currency::Currency;

use crate::entities::{
    Category, Confidence, Counterparty, Request, RequestBrief, RequestId, RequestStatus, RiskLevel,
};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn request(id: &str, category: Category, title: &str) -> Request {
    Request {
        id: RequestId::from(id),
        category,
        title: title.to_string(),
        counterparty: Counterparty::None,
        amount: 1000,
        currency: Currency::JPY,
        status: RequestStatus::Pending,
        brief: RequestBrief {
            who_name: "テスト 太郎".to_string(),
            who_department: "経理部".to_string(),
            what: "テスト".to_string(),
            when: date(2025, 10, 1),
            where_to: "経理部長 宛".to_string(),
            why: "テスト".to_string(),
            how: "立替清算".to_string(),
        },
        attachments: Vec::new(),
        risk: RiskLevel::Low,
        confidence: Confidence(0.9),
        checklist: Vec::new(),
        received_date: date(2025, 10, 1),
        urgent: false,
    }
}

pub(crate) fn category_from_index(i: usize) -> Category {
    Category::ALL[i % Category::ALL.len()]
}
