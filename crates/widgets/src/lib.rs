//! JIRA widgets of the bug tracking plugin: status pie aggregation, export
//! menu, features rendering and CSV import progress.

pub mod export;
pub mod features;
pub mod i18n;
pub mod import;
pub mod jql;
pub mod priorities;
pub mod render;
pub mod status;
pub mod subscription;
