use anyhow::Error;
use phonecast_config::ConfigError;
use phonecast_core::CoreError;
use phonecast_send::SendError;
use phonecast_sheet::SheetError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(sheet_err) = cause.downcast_ref::<SheetError>() {
            return ExitCode::from(sheet_exit_code(sheet_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(send_err) = cause.downcast_ref::<SendError>() {
            return ExitCode::from(send_exit_code(send_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn sheet_exit_code(err: &SheetError) -> u8 {
    match err {
        SheetError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        SheetError::SheetNotFound { .. } => EXIT_NOT_FOUND,
        SheetError::UnsupportedFormat(_) | SheetError::NoSheets(_) => EXIT_INVALID_INPUT,
        SheetError::Csv(_) | SheetError::Workbook(_) => EXIT_INVALID_INPUT,
        SheetError::Io(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidSampleLimit(_)
        | ConfigError::InvalidDelay { .. }
        | ConfigError::InvalidBaseUrl(_)
        | ConfigError::EmptyOpener
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn send_exit_code(err: &SendError) -> u8 {
    match err {
        SendError::EmptyContent | SendError::UnsupportedContent { .. } | SendError::Url(_) => {
            EXIT_INVALID_INPUT
        }
        SendError::MissingImage(_) => EXIT_NOT_FOUND,
        SendError::Command(_) | SendError::Io(_) => EXIT_FAILURE,
    }
}
