use std::fs;

use anyhow::Result;
use regex::Regex;
use tokio::io::AsyncBufReadExt;
use tracing::{error, info, warn};

use crate::api::DataLoader;
use crate::config::Config;
use crate::error::AppError;
use crate::model::PageContext;
use crate::quiz::{
    filter_active_exams, report, ActiveExam, AnswerSheet, RecordOutcome, Stopwatch,
};
use crate::utils::logging;

/// Application state for one review session
///
/// Owns every piece of mutable session state; created at startup and
/// discarded when the session ends.
pub struct App {
    config: Config,
    page: Option<PageContext>,
    active_exams: Vec<ActiveExam>,
    answers: AnswerSheet,
    stopwatch: Stopwatch,
    answer_re: Regex,
}

impl App {
    /// Initialize the session: resolve the page identity, then load and
    /// filter the exam data.
    ///
    /// A malformed page identifier or a failed load leaves the session
    /// without active variants instead of failing hard; the report
    /// command then answers with a wait message, matching the guarded
    /// behavior of the page this tool reviews.
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let page = PageContext::parse(&config.page_id);
        let mut active_exams = Vec::new();

        match &page {
            None => {
                warn!(
                    "⚠️ Identificador de página inválido, sessão segue sem dados: {}",
                    config.page_id
                );
            }
            Some(ctx) => {
                let loader = DataLoader::new(&config);
                match loader.load(&ctx.year).await {
                    Ok((mapa, bank)) => {
                        active_exams = filter_active_exams(&mapa, &bank, ctx);
                        logging::log_session_ready(ctx, &active_exams);
                    }
                    Err(e) => error!("❌ Erro ao carregar JSONs: {}", e),
                }
            }
        }

        let answer_re = Regex::new(r"^(\d{1,3})\s*[=:]?\s*([A-Ea-e])$")?;

        Ok(Self {
            config,
            page,
            active_exams,
            answers: AnswerSheet::new(),
            stopwatch: Stopwatch::new(),
            answer_re,
        })
    }

    /// Drive the command loop until EOF or `sair`.
    pub async fn run(mut self) -> Result<()> {
        // the page this mirrors starts its stopwatch on load
        self.stopwatch.start();
        print_usage();

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.dispatch(line)? {
                break;
            }
        }

        logging::log_final_stats(self.answers.len(), &self.stopwatch.formatted());
        Ok(())
    }

    /// Handle one command line; `Ok(false)` ends the session.
    fn dispatch(&mut self, line: &str) -> Result<bool> {
        match line.to_lowercase().as_str() {
            "sair" => return Ok(false),
            "relatorio" | "relatório" => self.handle_report()?,
            "inicio" | "início" | "continuar" => self.handle_timer_start(),
            "parar" => self.handle_timer_pause(),
            "reinicio" | "reinício" => self.handle_timer_reset(),
            "tempo" => println!("⏱️  {}", self.stopwatch.formatted()),
            _ => self.handle_answer_command(line),
        }
        Ok(true)
    }

    /// Parse `<numero> <letra>` (also `46B`, `46=B`); a bare number means
    /// the user confirmed without selecting an alternative.
    fn handle_answer_command(&mut self, line: &str) {
        if let Some(caps) = self.answer_re.captures(line) {
            let visible = caps[1].to_string();
            let choice = caps[2].chars().next();
            self.handle_answer(&visible, choice);
        } else if line.chars().all(|c| c.is_ascii_digit()) {
            self.handle_answer(line, None);
        } else {
            println!("Comando não reconhecido.");
            print_usage();
        }
    }

    fn handle_answer(&mut self, visible: &str, choice: Option<char>) {
        let day = match &self.page {
            Some(ctx) => ctx.day,
            None => {
                println!("Aguarde o carregamento dos dados.");
                return;
            }
        };

        match self.answers.record(day, visible, choice) {
            RecordOutcome::Saved { choice, .. } => {
                // terminal counterpart of the transient button highlight
                println!("✓ questão {} = {}", visible, choice);
            }
            RecordOutcome::NoSelection => println!("Selecione uma alternativa."),
            RecordOutcome::InvalidChoice => println!("Alternativa inválida (use A-E)."),
            RecordOutcome::OutOfRange => {
                println!("Questão {} fora do intervalo do dia {}.", visible, day)
            }
        }
    }

    fn handle_report(&self) -> Result<()> {
        if self.active_exams.is_empty() {
            println!("Aguarde o carregamento dos dados.");
            return Ok(());
        }
        let ctx = match &self.page {
            Some(ctx) => ctx,
            None => {
                println!("Aguarde o carregamento dos dados.");
                return Ok(());
            }
        };

        let report = report::generate(
            ctx,
            &self.active_exams,
            &self.answers,
            &self.config.figs_base_url,
        );

        fs::write(&self.config.report_output, &report.html)
            .map_err(|e| AppError::report_write_failed(self.config.report_output.clone(), e))?;

        info!(
            "📋 Relatório gerado: {} questões, {} acertos",
            report.row_count, report.total_correct
        );
        info!("📄 Relatório salvo em: {}", self.config.report_output);
        Ok(())
    }

    fn handle_timer_start(&mut self) {
        if self.stopwatch.start() {
            println!("⏱️  Cronômetro em andamento ({}).", self.stopwatch.formatted());
        } else {
            println!("⏱️  Cronômetro já está em andamento.");
        }
    }

    fn handle_timer_pause(&mut self) {
        if self.stopwatch.pause() {
            println!("⏱️  Cronômetro pausado em {}.", self.stopwatch.formatted());
        } else {
            println!("⏱️  Cronômetro já está pausado.");
        }
    }

    fn handle_timer_reset(&mut self) {
        self.stopwatch.reset();
        println!("⏱️  Cronômetro zerado (00:00:00).");
    }
}

fn print_usage() {
    println!("Comandos:");
    println!("  <numero> <letra>   registra a alternativa (ex.: 46 B, 01 C)");
    println!("  relatorio          gera o relatório de acertos");
    println!("  inicio | parar | continuar | reinicio   controlam o cronômetro");
    println!("  tempo              mostra o tempo decorrido");
    println!("  sair               encerra a sessão");
}
