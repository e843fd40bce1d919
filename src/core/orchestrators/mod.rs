mod format_orchestrator;

pub use format_orchestrator::{FormatMessage, FormatOrchestrator};
