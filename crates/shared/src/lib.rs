mod builtin;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod page;

pub use catalog::TemplateCatalog;
pub use domain::{NoticeKind, TemplateIcon, TemplateId, TemplateRecord};
