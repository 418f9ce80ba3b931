use creator_economy_sdk::ErrorCode;
use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_sdk::instruction::InstructionError;
use solana_sdk::transaction::TransactionError;

/// How a failed submission should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Worth resending with a fresh blockhash.
    Transient,
    /// The program refused the instruction.
    Rejected(ErrorCode),
    Permanent,
}

/// Maps a transaction error onto the program's error code, if it is one.
pub fn rejection_code(err: &TransactionError) -> Option<ErrorCode> {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            ErrorCode::from_custom_code(*code)
        }
        _ => None,
    }
}

fn classify_transaction_error(err: &TransactionError) -> FailureClass {
    if let Some(code) = rejection_code(err) {
        return FailureClass::Rejected(code);
    }
    match err {
        TransactionError::BlockhashNotFound => FailureClass::Transient,
        // a rebroadcast of a transaction that already landed; the next
        // attempt reads its outcome instead of sending again
        TransactionError::AlreadyProcessed => FailureClass::Transient,
        _ => FailureClass::Permanent,
    }
}

pub fn classify_failure(err: &RpcClientError) -> FailureClass {
    if let Some(tx_err) = err.get_transaction_error() {
        return classify_transaction_error(&tx_err);
    }

    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => FailureClass::Transient,
        _ => {
            // confirmation timeouts and expired blockhashes only surface as text
            let message = err.to_string().to_lowercase();
            if message.contains("blockhash")
                || message.contains("timeout")
                || message.contains("timed out")
                || message.contains("unable to confirm")
            {
                FailureClass::Transient
            } else {
                FailureClass::Permanent
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(code: u32) -> RpcClientError {
        RpcClientError::from(TransactionError::InstructionError(
            0,
            InstructionError::Custom(code),
        ))
    }

    #[test]
    fn test_program_errors_are_rejections() {
        assert_eq!(
            classify_failure(&custom(ErrorCode::SupporterListMismatch.custom_code())),
            FailureClass::Rejected(ErrorCode::SupporterListMismatch)
        );
        assert_eq!(
            classify_failure(&custom(ErrorCode::TipTooSmall.custom_code())),
            FailureClass::Rejected(ErrorCode::TipTooSmall)
        );
    }

    #[test]
    fn test_foreign_custom_code_is_permanent() {
        // system program: insufficient funds for transfer
        assert_eq!(classify_failure(&custom(1)), FailureClass::Permanent);
    }

    #[test]
    fn test_blockhash_not_found_is_transient() {
        let err = RpcClientError::from(TransactionError::BlockhashNotFound);
        assert_eq!(classify_failure(&err), FailureClass::Transient);
    }

    #[test]
    fn test_already_processed_is_transient() {
        let err = RpcClientError::from(TransactionError::AlreadyProcessed);
        assert_eq!(classify_failure(&err), FailureClass::Transient);
    }

    #[test]
    fn test_io_error_is_transient() {
        let err = RpcClientError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ));
        assert_eq!(classify_failure(&err), FailureClass::Transient);
    }

    #[test]
    fn test_other_errors_are_permanent() {
        let err = RpcClientError::from(TransactionError::AccountNotFound);
        assert_eq!(classify_failure(&err), FailureClass::Permanent);

        let err = RpcClientError::from(ClientErrorKind::Custom("bad request".to_string()));
        assert_eq!(classify_failure(&err), FailureClass::Permanent);
    }

    #[test]
    fn test_rejection_code_ignores_other_instruction_errors() {
        let err = TransactionError::InstructionError(1, InstructionError::MissingRequiredSignature);
        assert_eq!(rejection_code(&err), None);
    }
}
