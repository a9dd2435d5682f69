use crate::constants::*;

/// Addresses of the device registers the driver talks to.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Registers {
    /// Register the command code is written to.
    pub command: u8,
    /// Register holding the command counter and status flags.
    pub response0: u8,
    /// Register holding the value returned by a parameter query.
    pub response1: u8,
    /// Host input register consumed by a parameter set.
    pub hostin0: u8,
    /// The four output registers: IR high, IR low, visible high, visible low.
    pub hostout: [u8; 4],
}

impl Default for Registers {
    /// Returns the Si1151 register map.
    fn default() -> Registers {
        Registers {
            command: COMMAND,
            response0: RESPONSE_0,
            response1: RESPONSE_1,
            hostin0: HOSTIN_0,
            hostout: [HOSTOUT_0, HOSTOUT_1, HOSTOUT_2, HOSTOUT_3],
        }
    }
}

/// Configuration settings for the Si115x sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// The 7-bit I2C address of the device.
    pub address: u8,
    /// The register map.
    pub registers: Registers,
    /// Number of RESPONSE0 polls a command may take before it is reported as timed out.
    pub max_retries: u32,
    /// Optional bound on the RESPONSE0 polls of a parameter access. `None` polls forever.
    pub param_poll_limit: Option<u32>,
}

impl Config {
    /// Creates a new `Config` instance with the default retry settings.
    ///
    /// # Arguments
    ///
    /// * `address` - The I2C address of the sensor.
    /// * `registers` - The register map of the sensor.
    pub fn new(address: u8, registers: Registers) -> Config {
        Config {
            address,
            registers,
            ..Config::default()
        }
    }
    /// Sets the I2C address.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
    /// Sets the register map.
    pub fn registers(mut self, registers: Registers) -> Self {
        self.registers = registers;
        self
    }
    /// Sets the number of status polls allowed per command.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
    /// Bounds the status polls of `param_set`/`param_query`.
    ///
    /// With `None` (the default) a parameter access waits until the device
    /// answers, however long that takes.
    pub fn param_poll_limit(mut self, limit: Option<u32>) -> Self {
        self.param_poll_limit = limit;
        self
    }
}

/// Provides default configuration values for the Si115x sensor.
impl Default for Config {
    /// Returns the default configuration.
    ///
    /// The default configuration uses address `0x53`, the datasheet register
    /// map, 10 000 polls per command and unbounded parameter access.
    fn default() -> Config {
        Config {
            address: DEVICE_ADDRESS,
            registers: Registers::default(),
            max_retries: MAX_RETRIES,
            param_poll_limit: None,
        }
    }
}
