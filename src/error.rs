#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// A register read returned no data.
    ReadFailure,
    /// The bus rejected a write.
    WriteFailure,
    /// An argument does not fit the field it is encoded into.
    InvalidArg,
    /// The device did not reach the expected state within the poll limit.
    Timeout,
    /// The device raised its error flag during a parameter access. Carries the error code.
    ParameterRejected(u8),
}
