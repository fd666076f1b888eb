use smartsplit_application::ValidationError;
use smartsplit_domain::PreconditionError;
use smartsplit_i18n as i18n;

pub fn format_validation_error(error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyName => i18n::EMPTY_NAME.to_string(),
        ValidationError::DuplicateParticipant { .. } => i18n::DUPLICATE_PARTICIPANT.to_string(),
        ValidationError::UnknownParticipant { name } => i18n::unknown_participant(name),
        ValidationError::ParticipantIndexOutOfRange { number } => {
            i18n::no_such_participant(*number)
        }
        ValidationError::MissingPayer => i18n::MISSING_PAYER.to_string(),
        ValidationError::UnknownPayer { payer } => i18n::unknown_payer(payer),
        ValidationError::InvalidAmount { .. } | ValidationError::NonPositiveAmount { .. } => {
            i18n::INVALID_AMOUNT.to_string()
        }
        ValidationError::AmountTooLarge { max, .. } => i18n::amount_too_large(max),
        ValidationError::EmptyDescription => i18n::EMPTY_DESCRIPTION.to_string(),
        ValidationError::ExpenseIndexOutOfRange { number } => i18n::no_such_expense(*number),
    }
}

pub fn format_precondition_error(error: &PreconditionError) -> String {
    match error {
        PreconditionError::NotEnoughParticipants { .. } => {
            i18n::NOT_ENOUGH_PARTICIPANTS.to_string()
        }
        PreconditionError::NoExpenses => i18n::NO_EXPENSES.to_string(),
        PreconditionError::UnknownPayer { payer } => i18n::unknown_payer(payer),
    }
}
