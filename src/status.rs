use crate::constants::*;

/// Decoded contents of the RESPONSE0 register.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Status(pub u8);

impl Status {
    /// The 4-bit command counter. While the error flag is set this holds the error code instead.
    pub fn counter(self) -> u8 {
        self.0 & CMD_CTR
    }

    pub fn has_error(self) -> bool {
        self.0 & CMD_ERR != 0
    }

    pub fn is_sleeping(self) -> bool {
        self.0 & SLEEP != 0
    }

    pub fn is_suspended(self) -> bool {
        self.0 & SUSPEND != 0
    }

    pub fn is_running(self) -> bool {
        self.0 & RUNNING != 0
    }

    /// Returns true when the counter moved past `initial`, including the 15 -> 0 wrap.
    pub fn completed_since(self, initial: u8) -> bool {
        let counter = self.counter();
        counter > initial || (initial == CMD_CTR && counter == 0)
    }
}

/// Error codes the device reports in RESPONSE0.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum DeviceError {
    /// 0x0: the command code is not valid.
    InvalidCommand,
    /// 0x1: parameter access to an invalid location.
    InvalidParamLocation,
    /// 0x2: ADC saturation or accumulation overflow.
    AdcOverflow,
    /// 0x3: output buffer overflow (burst mode with more than 26 bytes of output).
    BufferOverflow,
}

impl DeviceError {
    pub fn from_code(code: u8) -> Option<DeviceError> {
        match code {
            0x0 => Some(DeviceError::InvalidCommand),
            0x1 => Some(DeviceError::InvalidParamLocation),
            0x2 => Some(DeviceError::AdcOverflow),
            0x3 => Some(DeviceError::BufferOverflow),
            _ => None,
        }
    }
}

/// Outcome of `Si115x::send_command`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CommandResult {
    /// The device advanced its counter: the command completed.
    Success,
    /// The device raised its error flag while executing the command. Carries the error code.
    ExecutionError(u8),
    /// The error flag was already set, so the command was not sent. Carries the error code.
    PendingError(u8),
    /// The counter never advanced within the retry bound.
    Timeout,
}

impl CommandResult {
    /// Signed result code: `0` on success, `code + 1` for an execution error,
    /// `-(code + 1)` for a pending error and `17` on timeout.
    pub fn code(self) -> i8 {
        match self {
            CommandResult::Success => 0,
            CommandResult::ExecutionError(code) => code as i8 + 1,
            CommandResult::PendingError(code) => -(code as i8 + 1),
            CommandResult::Timeout => 17,
        }
    }

    pub fn is_success(self) -> bool {
        self == CommandResult::Success
    }

    /// The named device error, if the result carries one of the datasheet codes.
    pub fn device_error(self) -> Option<DeviceError> {
        match self {
            CommandResult::ExecutionError(code) | CommandResult::PendingError(code) => {
                DeviceError::from_code(code)
            }
            _ => None,
        }
    }
}

impl From<CommandResult> for i8 {
    fn from(result: CommandResult) -> i8 {
        result.code()
    }
}
