use thiserror::Error;

/// Rejections produced while validating user input. The `Display` text is
/// the diagnostic printed before the prompt is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("[ERROR] 자동차 이름으로 콤마를 입력했습니다. 다시 입력하세요.")]
    EmptyNameList,
    #[error("[ERROR] 중복된 자동차 이름이 있습니다.")]
    DuplicateName,
    #[error("[ERROR] 자동차 이름으로 빈 문자열을 사용할 수 없습니다.")]
    BlankName,
    #[error("[ERROR] 자동차 이름은 1~5 글자만 가능합니다.")]
    NameTooLong,
    #[error("[ERROR] 시도 횟수는 숫자여야 합니다.")]
    NotANumber,
    #[error("[ERROR] 시도 횟수는 1 이상이어야 합니다. 다시 입력하세요.")]
    CountTooSmall,
}

/// Failures that end the program.
#[derive(Debug, Error)]
pub enum RaceError {
    #[error("input closed while waiting for: {0}")]
    InputClosed(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize race log: {0}")]
    Log(#[from] serde_json::Error),

    #[error("RACING_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}
