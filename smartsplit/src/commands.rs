use crate::{bootstrap::AppConfig, cli::Commands};
use anyhow::Context;
use smartsplit_application::{LedgerError, LedgerService, LedgerStore, SettlementService};
use smartsplit_i18n as i18n;
use smartsplit_presentation::{
    LedgerPresenter, SettlementPresenter, format_precondition_error, format_validation_error,
};
use std::{fmt::Write as _, fs};

#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Output for stdout.
    Done(String),
    /// User-facing reason the command was refused; nothing was changed.
    Rejected(String),
}

/// Runs one command. Input problems become [`CommandOutcome::Rejected`];
/// storage and I/O failures are returned as errors.
pub fn execute<S: LedgerStore>(
    command: Commands,
    service: &mut LedgerService<S>,
    config: &AppConfig,
) -> anyhow::Result<CommandOutcome> {
    match command {
        Commands::AddParticipant { name } => {
            edit_outcome(service.add_participant(&name), |participant| {
                format!("+ {participant}\n")
            })
        }
        Commands::RemoveParticipant { name } => {
            edit_outcome(service.remove_participant(&name), |removal| {
                format!(
                    "{}\n",
                    i18n::participant_removed(&removal.participant, removal.removed_expenses.len())
                )
            })
        }
        Commands::AddExpense {
            payer,
            amount,
            description,
        } => edit_outcome(
            service.add_expense(&payer, &amount, &description.join(" ")),
            |expense| {
                format!(
                    "+ {}: {} ({})\n",
                    expense.description(),
                    expense.amount(),
                    expense.payer()
                )
            },
        ),
        Commands::RemoveExpense { number } => {
            // Listed numbers start at 1.
            let Some(index) = number.checked_sub(1) else {
                return Ok(CommandOutcome::Rejected(i18n::no_such_expense(number)));
            };
            edit_outcome(service.remove_expense(index), |expense| {
                format!("- {}: {}\n", expense.description(), expense.amount())
            })
        }
        Commands::List => Ok(CommandOutcome::Done(LedgerPresenter::render(
            service.ledger(),
        ))),
        Commands::Settle => {
            let result = match SettlementService::new().settle(service.ledger()) {
                Ok(result) => result,
                Err(err) => return Ok(CommandOutcome::Rejected(format_precondition_error(&err))),
            };
            let view = SettlementPresenter::render(&result, config.display);

            let mut output = String::with_capacity(256);
            let _ = writeln!(&mut output, "{}", view.summary);
            let _ = writeln!(&mut output, "[{}]", i18n::BALANCES);
            for line in &view.balance_lines {
                let _ = writeln!(&mut output, "  {line}");
            }
            let _ = writeln!(&mut output, "[{}]", i18n::TRANSFERS);
            for line in &view.transfer_lines {
                let _ = writeln!(&mut output, "  {line}");
            }
            Ok(CommandOutcome::Done(output))
        }
        Commands::Export { output } => {
            let result = match SettlementService::new().settle(service.ledger()) {
                Ok(result) => result,
                Err(err) => return Ok(CommandOutcome::Rejected(format_precondition_error(&err))),
            };
            let text = SettlementPresenter::export_text(&result, config.display);

            match output {
                Some(path) => {
                    fs::write(&path, &text)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    tracing::info!(path = %path.display(), "Settlement exported");
                    Ok(CommandOutcome::Done(String::new()))
                }
                None => Ok(CommandOutcome::Done(text)),
            }
        }
        Commands::Reset => edit_outcome(service.reset(), |()| format!("{}\n", i18n::LEDGER_RESET)),
    }
}

fn edit_outcome<T>(
    result: Result<T, LedgerError>,
    render: impl FnOnce(T) -> String,
) -> anyhow::Result<CommandOutcome> {
    match result {
        Ok(value) => Ok(CommandOutcome::Done(render(value))),
        Err(LedgerError::Validation(err)) => {
            Ok(CommandOutcome::Rejected(format_validation_error(&err)))
        }
        Err(LedgerError::Store(err)) => Err(err).context("ledger could not be saved"),
    }
}
