use smartsplit_domain::Ledger;
use smartsplit_i18n as i18n;
use std::fmt::Write as _;

pub struct LedgerPresenter;

impl LedgerPresenter {
    /// Numbered roster and expense list; numbers are the ones edit commands take.
    pub fn render(ledger: &Ledger) -> String {
        let mut reply = String::with_capacity(256);

        let _ = writeln!(&mut reply, "[{}]", i18n::PARTICIPANTS);
        if ledger.participants().is_empty() {
            let _ = writeln!(&mut reply, "{}", i18n::NO_PARTICIPANTS);
        }
        for (idx, participant) in ledger.participants().iter().enumerate() {
            let _ = writeln!(&mut reply, "{}. {participant}", idx + 1);
        }

        let _ = writeln!(&mut reply);
        let _ = writeln!(&mut reply, "[{}]", i18n::EXPENSES);
        if ledger.expenses().is_empty() {
            let _ = writeln!(&mut reply, "{}", i18n::NO_EXPENSES);
        }
        for (idx, expense) in ledger.expenses().iter().enumerate() {
            let _ = writeln!(
                &mut reply,
                "{}. {}: {} ({})",
                idx + 1,
                expense.description(),
                expense.amount(),
                expense.payer()
            );
        }

        reply
    }
}
