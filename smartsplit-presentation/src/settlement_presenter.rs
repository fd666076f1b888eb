use smartsplit_application::SettlementResult;
use smartsplit_domain::{DisplayContext, RoundedPlan, round_plan};
use smartsplit_i18n as i18n;
use std::fmt::Write as _;

pub struct SettlementPresenter;

/// Settlement rendered as display lines; every amount is already rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementView {
    pub summary: String,
    pub balance_lines: Vec<String>,
    pub transfer_lines: Vec<String>,
}

impl SettlementPresenter {
    pub fn render(result: &SettlementResult, context: DisplayContext) -> SettlementView {
        let sheet = &result.sheet;
        let summary = format!(
            "{}: {} / {}: {}",
            i18n::TOTAL,
            context.round(sheet.total),
            i18n::PER_PERSON,
            context.round(sheet.per_person),
        );

        let balance_lines = sheet
            .balances
            .iter()
            .map(|(participant, balance)| {
                let rounded = context.round(*balance);
                if balance.is_negative() {
                    format!("{participant}: {rounded} ({})", i18n::PAYS)
                } else {
                    format!("{participant}: +{rounded} ({})", i18n::RECEIVES)
                }
            })
            .collect();

        let transfer_lines = match round_plan(&result.transfers, context) {
            RoundedPlan::NoSettlementNeeded => vec![i18n::NO_SETTLEMENT_NEEDED.to_string()],
            RoundedPlan::SettledAfterRounding { .. } => {
                vec![i18n::SETTLED_AFTER_ROUNDING.to_string()]
            }
            RoundedPlan::Transfers(transfers) => transfers
                .iter()
                .map(|transfer| {
                    let amount = transfer.amount.to_string();
                    i18n::transfer_line(transfer.from.as_str(), transfer.to.as_str(), &amount)
                        .to_string()
                })
                .collect(),
        };

        SettlementView {
            summary,
            balance_lines,
            transfer_lines,
        }
    }

    /// Plain-text document with summary, balances and transfers.
    pub fn export_text(result: &SettlementResult, context: DisplayContext) -> String {
        let view = Self::render(result, context);
        let mut text = String::with_capacity(256);

        let _ = writeln!(&mut text, "{}", view.summary);
        let _ = writeln!(&mut text);
        let _ = writeln!(&mut text, "[{}]", i18n::BALANCES);
        for line in &view.balance_lines {
            let _ = writeln!(&mut text, "- {line}");
        }
        let _ = writeln!(&mut text);
        let _ = writeln!(&mut text, "[{}]", i18n::TRANSFERS);
        for line in &view.transfer_lines {
            let _ = writeln!(&mut text, "- {line}");
        }

        text
    }
}
