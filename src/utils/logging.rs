//! Logging helpers
//!
//! Subscriber setup plus the session banner/summary lines.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::model::PageContext;
use crate::quiz::ActiveExam;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over info.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 ENEM Interativo - revisão de prova");
    info!("📄 página: {}", config.page_id);
    info!("{}", "=".repeat(60));
}

pub fn log_session_ready(ctx: &PageContext, active: &[ActiveExam]) {
    info!(
        "✅ Provas ativas ({} {} / dia {} / cor {}): {:?}",
        active.len(),
        if active.len() == 1 { "variante" } else { "variantes" },
        ctx.day,
        ctx.color,
        active.iter().map(|e| e.id.as_str()).collect::<Vec<_>>()
    );
    for exam in active {
        info!(
            "   {} [{}] {} - {} questões (caderno: {})",
            exam.id,
            exam.area,
            exam.area.name(),
            exam.entry.questions.len(),
            if exam.entry.arquivo_pdf.is_empty() {
                "-"
            } else {
                exam.entry.arquivo_pdf.as_str()
            }
        );
    }
}

pub fn log_final_stats(answered: usize, elapsed: &str) {
    info!("{}", "=".repeat(60));
    info!("📊 Sessão encerrada");
    info!("✅ Respostas registradas: {}", answered);
    info!("⏱️ Tempo de prova: {}", elapsed);
    info!("{}", "=".repeat(60));
}
