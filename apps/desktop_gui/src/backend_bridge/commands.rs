//! Backend commands queued from UI to backend worker.

use shared::TemplateId;

pub enum BackendCommand {
    CopyTemplate { template_id: TemplateId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::CopyTemplate { .. } => "copy_template",
        }
    }
}
