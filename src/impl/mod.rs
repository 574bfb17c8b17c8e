// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod config_ron_datasource;
        pub(crate) mod dashboards_ron_datasource;
        pub(crate) mod history_csv_datasource;
        pub(crate) mod requests_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod currency_model;
        pub(crate) mod dashboard_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod request_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod file_export_repository_impl;
        pub(crate) mod records_repository_impl;
    }
    pub(crate) mod fixtures;
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod backoffice_records;
        pub(crate) mod config;
        pub(crate) mod csv_document;
        pub(crate) mod dashboard;
        pub(crate) mod filter;
        pub(crate) mod history;
        pub(crate) mod navigation;
        pub(crate) mod request;
        pub(crate) mod selection;
        pub(crate) mod transport;
    }
    pub(crate) mod logic {
        pub(crate) mod dashboard_metrics;
        pub(crate) mod record_filter;
        pub(crate) mod status_transition;
        pub(crate) mod transport_fare;
    }
    pub(crate) mod repositories {
        pub(crate) mod export_repository;
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod approval_usecase;
        pub(crate) mod dashboard_usecase;
        pub(crate) mod export_usecase;
        pub(crate) mod history_usecase;
        pub(crate) mod transport_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod csv_encoder;
    pub(crate) mod dashboard_printer;
    pub(crate) mod request_printer;
}

#[cfg(test)]
pub(crate) mod test_support;

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::backoffice_records::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::csv_document::*;
        pub use crate::domain::entities::dashboard::*;
        pub use crate::domain::entities::filter::*;
        pub use crate::domain::entities::history::*;
        pub use crate::domain::entities::navigation::*;
        pub use crate::domain::entities::request::*;
        pub use crate::domain::entities::selection::*;
        pub use crate::domain::entities::transport::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::approval_usecase::*;
        pub use crate::domain::usecases::dashboard_usecase::*;
        pub use crate::domain::usecases::export_usecase::*;
        pub use crate::domain::usecases::history_usecase::*;
        pub use crate::domain::usecases::transport_usecase::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::file_export_repository_impl::FileExportRepository;
        pub use crate::domain::repositories::export_repository::*;
        pub use crate::domain::repositories::records_repository::*;
    }

    pub mod fmt {
        pub use crate::presentation::amount_fmt::*;
    }
}
