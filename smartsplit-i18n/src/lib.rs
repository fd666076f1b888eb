#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PARTICIPANTS: &str = "参加者";
    pub const EXPENSES: &str = "支払い";
    pub const BALANCES: &str = "収支";
    pub const TRANSFERS: &str = "精算";
    pub const TOTAL: &str = "合計金額";
    pub const PER_PERSON: &str = "一人あたり";
    pub const RECEIVES: &str = "受取";
    pub const PAYS: &str = "支払";
    pub const NO_PARTICIPANTS: &str = "参加者がいません。";
    pub const NO_EXPENSES: &str = "支払い情報がありません。";
    pub const NO_SETTLEMENT_NEEDED: &str = "精算の必要はありません。";
    pub const SETTLED_AFTER_ROUNDING: &str = "精算の必要はありません（端数は無視されました）。";
    pub const NOT_ENOUGH_PARTICIPANTS: &str = "精算するには参加者が2人以上必要です。";
    pub const EMPTY_NAME: &str = "参加者の名前を入力してください。";
    pub const DUPLICATE_PARTICIPANT: &str = "同じ名前の参加者が既に存在します。";
    pub const MISSING_PAYER: &str = "支払った人を選択してください。";
    pub const INVALID_AMOUNT: &str = "有効な金額を入力してください。";
    pub const EMPTY_DESCRIPTION: &str = "内容を入力してください。";
    pub const LEDGER_RESET: &str = "すべての入力内容をリセットしました。";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const PARTICIPANTS: &str = "Participants";
    pub const EXPENSES: &str = "Expenses";
    pub const BALANCES: &str = "Balances";
    pub const TRANSFERS: &str = "Transfers";
    pub const TOTAL: &str = "Total";
    pub const PER_PERSON: &str = "Per person";
    pub const RECEIVES: &str = "receives";
    pub const PAYS: &str = "pays";
    pub const NO_PARTICIPANTS: &str = "No participants yet.";
    pub const NO_EXPENSES: &str = "There are no expenses.";
    pub const NO_SETTLEMENT_NEEDED: &str = "No settlement needed.";
    pub const SETTLED_AFTER_ROUNDING: &str = "No settlement needed (remainders were ignored).";
    pub const NOT_ENOUGH_PARTICIPANTS: &str = "At least two participants are needed to settle.";
    pub const EMPTY_NAME: &str = "Enter a participant name.";
    pub const DUPLICATE_PARTICIPANT: &str = "A participant with the same name already exists.";
    pub const MISSING_PAYER: &str = "Select who paid.";
    pub const INVALID_AMOUNT: &str = "Enter a valid amount.";
    pub const EMPTY_DESCRIPTION: &str = "Enter a description.";
    pub const LEDGER_RESET: &str = "All participants and expenses were cleared.";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const PARTICIPANTS: &str = "Participants";
    pub const EXPENSES: &str = "Expenses";
    pub const BALANCES: &str = "Balances";
    pub const TRANSFERS: &str = "Transfers";
    pub const TOTAL: &str = "Total";
    pub const PER_PERSON: &str = "Per person";
    pub const RECEIVES: &str = "receives";
    pub const PAYS: &str = "pays";
    pub const NO_PARTICIPANTS: &str = "No participants yet.";
    pub const NO_EXPENSES: &str = "There are no expenses.";
    pub const NO_SETTLEMENT_NEEDED: &str = "No settlement needed.";
    pub const SETTLED_AFTER_ROUNDING: &str = "No settlement needed (remainders were ignored).";
    pub const NOT_ENOUGH_PARTICIPANTS: &str = "At least two participants are needed to settle.";
    pub const EMPTY_NAME: &str = "Enter a participant name.";
    pub const DUPLICATE_PARTICIPANT: &str = "A participant with the same name already exists.";
    pub const MISSING_PAYER: &str = "Select who paid.";
    pub const INVALID_AMOUNT: &str = "Enter a valid amount.";
    pub const EMPTY_DESCRIPTION: &str = "Enter a description.";
    pub const LEDGER_RESET: &str = "All participants and expenses were cleared.";
}

pub use strings::*;

pub struct TransferLine<'a> {
    from: &'a str,
    to: &'a str,
    amount: &'a str,
}

pub fn transfer_line<'a>(from: &'a str, to: &'a str, amount: &'a str) -> TransferLine<'a> {
    TransferLine { from, to, amount }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for TransferLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {} に {} 円 支払う", self.from, self.to, self.amount)
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for TransferLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

#[cfg(feature = "ja")]
pub fn unknown_participant(name: impl std::fmt::Display) -> String {
    format!("参加者 '{name}' は存在しません。")
}

#[cfg(feature = "ja")]
pub fn unknown_payer(name: impl std::fmt::Display) -> String {
    format!("'{name}' は参加者ではありません。")
}

#[cfg(feature = "ja")]
pub fn amount_too_large(max: impl std::fmt::Display) -> String {
    format!("金額は {max} 以下で入力してください。")
}

#[cfg(feature = "ja")]
pub fn no_such_participant(number: usize) -> String {
    format!("{number} 番の参加者はいません。")
}

#[cfg(feature = "ja")]
pub fn no_such_expense(number: usize) -> String {
    format!("{number} 番の支払いはありません。")
}

#[cfg(feature = "ja")]
pub fn participant_removed(name: impl std::fmt::Display, removed_expenses: usize) -> String {
    format!("{name} を削除しました（関連する支払い {removed_expenses} 件も削除）。")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_participant(name: impl std::fmt::Display) -> String {
    format!("Participant '{name}' does not exist.")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_payer(name: impl std::fmt::Display) -> String {
    format!("'{name}' is not a participant.")
}

#[cfg(not(feature = "ja"))]
pub fn amount_too_large(max: impl std::fmt::Display) -> String {
    format!("Amounts may not exceed {max}.")
}

#[cfg(not(feature = "ja"))]
pub fn no_such_participant(number: usize) -> String {
    format!("There is no participant number {number}.")
}

#[cfg(not(feature = "ja"))]
pub fn no_such_expense(number: usize) -> String {
    format!("There is no expense number {number}.")
}

#[cfg(not(feature = "ja"))]
pub fn participant_removed(name: impl std::fmt::Display, removed_expenses: usize) -> String {
    format!("Removed {name} and {removed_expenses} expense(s) they paid.")
}
