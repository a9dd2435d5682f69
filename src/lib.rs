#![cfg_attr(not(test), no_std)]

use embedded_hal_async::i2c::I2c;
use log::debug;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod status;
pub use status::*;


/// Represents an Si115x ambient light sensor.
///
/// Commands are confirmed by polling RESPONSE0: the device increments a
/// 4-bit counter every time it finishes a command and raises a sticky error
/// flag when one fails. The driver keeps no copy of that state, every
/// operation reads it fresh.
///
/// Access must be sequential: two commands in flight at once would share the
/// same counter baseline.
///
/// # Type Parameters
///
/// * `I2C`: The I2C bus the sensor is attached to.
///   It must implement `embedded_hal_async::i2c::I2c`.
pub struct Si115x<I2C> {
    i2c: I2C,
    config: Config,
}

/// A single reading of the first two output channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightReading {
    /// Raw infrared channel output (HOSTOUT0 << 8 | HOSTOUT1).
    pub ir: f32,
    /// Raw visible channel output (HOSTOUT2 << 8 | HOSTOUT3).
    pub vis: f32,
}

impl<I> Si115x<I>
where
    I: I2c,
{
    /// Creates a new `Si115x` sensor instance.
    ///
    /// # Arguments
    ///
    /// * `i2c`: The bus used to reach the sensor.
    /// * `config`: The address, register map and retry settings.
    pub fn new(i2c: I, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Returns the configuration the driver was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consumes the driver and gives the bus back.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Writes `data` to the device in a single bus transaction.
    pub async fn write_data(&mut self, data: &[u8]) -> Result<(), Error> {
        self.i2c
            .write(self.config.address, data)
            .await
            .map_err(|e| {
                log::error!("I2C write of {:02X?} failed: {:?}", data, e);
                Error::WriteFailure
            })
    }

    /// Selects `register` and reads `buffer.len()` bytes starting from it.
    pub async fn read_register_burst(
        &mut self,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Error> {
        if buffer.is_empty() {
            return Err(Error::InvalidArg);
        }
        self.write_data(&[register]).await?;
        self.i2c
            .read(self.config.address, buffer)
            .await
            .map_err(|e| {
                log::error!("I2C read of register {:02X} failed: {:?}", register, e);
                Error::ReadFailure
            })
    }

    /// Reads a single byte from `register`.
    pub async fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut buffer = [0u8; 1];
        self.read_register_burst(register, &mut buffer).await?;
        Ok(buffer[0])
    }

    /// Reads and decodes RESPONSE0.
    pub async fn status(&mut self) -> Result<Status, Error> {
        self.read_register(self.config.registers.response0)
            .await
            .map(Status)
    }

    /// Reads the PART_ID register (0x51 for an Si1151).
    pub async fn part_id(&mut self) -> Result<u8, Error> {
        self.read_register(PART_ID).await
    }

    /// Sends a command and waits for the device to acknowledge it.
    ///
    /// If the error flag is already set the command is not sent and
    /// `CommandResult::PendingError` is returned, unless `force` is true.
    /// Once sent, RESPONSE0 is polled up to `Config::max_retries` times until
    /// the counter advances (success) or the error flag is raised.
    ///
    /// # Arguments
    ///
    /// * `code`: The command code (see the datasheet).
    /// * `force`: Send the command even if the device reports an error.
    ///
    /// # Returns
    ///
    /// * `Ok(CommandResult)` describing how the device answered.
    /// * `Err(Error)` if the bus failed.
    pub async fn send_command(&mut self, code: u8, force: bool) -> Result<CommandResult, Error> {
        let initial = self.status().await?;
        let initial_counter = initial.counter();

        if initial.has_error() && !force {
            log::warn!(
                "Command {:02X} not sent, device holds error {:02X}",
                code,
                initial_counter
            );
            return Ok(CommandResult::PendingError(initial_counter));
        }

        debug!("Sending command {:02X} (counter {})", code, initial_counter);
        self.write_data(&[self.config.registers.command, code])
            .await?;

        for attempt in 0..self.config.max_retries {
            let status = self.status().await?;
            if status.has_error() {
                log::warn!(
                    "Command {:02X} failed with error {:02X}",
                    code,
                    status.counter()
                );
                return Ok(CommandResult::ExecutionError(status.counter()));
            } else if status.completed_since(initial_counter) {
                debug!(
                    "Command {:02X} completed after {} polls, counter {}",
                    code,
                    attempt + 1,
                    status.counter()
                );
                return Ok(CommandResult::Success);
            }
        }

        log::warn!(
            "Command {:02X} timed out after {} polls",
            code,
            self.config.max_retries
        );
        Ok(CommandResult::Timeout)
    }

    /// Writes `value` into the parameter table at `location`.
    ///
    /// Waits until the device confirms the write. Without a
    /// `Config::param_poll_limit` this waits forever if the device never does.
    ///
    /// # Returns
    ///
    /// * `Ok(())` once the counter advanced.
    /// * `Err(Error::InvalidArg)` if `location` does not fit in 6 bits.
    /// * `Err(Error::ParameterRejected)` if the device raised its error flag.
    /// * `Err(Error::Timeout)` if the poll limit was reached.
    pub async fn param_set(&mut self, location: u8, value: u8) -> Result<(), Error> {
        let code = Self::param_code(PARAM_SET, location)?;
        debug!("Setting parameter {:02X} to {:02X}", location, value);

        let initial = self.status().await?;
        self.write_data(&[self.config.registers.hostin0, value])
            .await?;
        self.write_data(&[self.config.registers.command, code])
            .await?;
        self.wait_for_param(initial).await
    }

    /// Reads the parameter table entry at `location`.
    ///
    /// Waits for the device the same way as `param_set`, then reads the value
    /// from RESPONSE1.
    pub async fn param_query(&mut self, location: u8) -> Result<u8, Error> {
        let code = Self::param_code(PARAM_QUERY, location)?;

        let initial = self.status().await?;
        self.write_data(&[self.config.registers.command, code])
            .await?;
        self.wait_for_param(initial).await?;

        let value = self.read_register(self.config.registers.response1).await?;
        debug!("Parameter {:02X} is {:02X}", location, value);
        Ok(value)
    }

    /// Triggers a single measurement of the configured channels.
    pub async fn force_measurement(&mut self) -> Result<CommandResult, Error> {
        self.send_command(FORCE, false).await
    }

    /// Starts autonomous measurements.
    pub async fn start(&mut self) -> Result<CommandResult, Error> {
        self.send_command(START, false).await
    }

    /// Pauses autonomous measurements.
    pub async fn pause(&mut self) -> Result<CommandResult, Error> {
        self.send_command(PAUSE, false).await
    }

    /// Clears the command counter and the error flag.
    ///
    /// The counter goes back to 0 instead of advancing, so completion is
    /// detected by polling for a clean zero status, bounded by
    /// `Config::max_retries`.
    pub async fn reset_command_counter(&mut self) -> Result<(), Error> {
        debug!("Resetting command counter");
        self.write_data(&[self.config.registers.command, RESET_CMD_CTR])
            .await?;

        for _ in 0..self.config.max_retries {
            let status = self.status().await?;
            if !status.has_error() && status.counter() == 0 {
                debug!("Command counter reset");
                return Ok(());
            }
        }

        log::warn!("Command counter did not reset");
        Err(Error::Timeout)
    }

    /// Issues a software reset. The device does not acknowledge it through the counter.
    pub async fn reset(&mut self) -> Result<(), Error> {
        debug!("Software reset");
        self.write_data(&[self.config.registers.command, RESET_SW])
            .await
    }

    /// Reads the infrared and visible channels from HOSTOUT0..HOSTOUT3.
    ///
    /// Each channel is a 16-bit big-endian value.
    ///
    /// # Returns
    ///
    /// * `Ok(LightReading)` if all four registers were read.
    /// * `Err(Error::ReadFailure)` if any of them was not.
    pub async fn read_output(&mut self) -> Result<LightReading, Error> {
        let mut data = [0u8; 4];
        for (byte, register) in data.iter_mut().zip(self.config.registers.hostout) {
            *byte = self.read_register(register).await?;
        }

        let ir = u16::from_be_bytes([data[0], data[1]]) as f32;
        let vis = u16::from_be_bytes([data[2], data[3]]) as f32;

        debug!("Output {:02X?} - IR: {}, VIS: {}", data, ir, vis);
        Ok(LightReading { ir, vis })
    }

    // Tags a parameter location with a PARAM_SET/PARAM_QUERY opcode.
    fn param_code(opcode: u8, location: u8) -> Result<u8, Error> {
        if location & !PARAM_LOCATION_MASK != 0 {
            log::error!("Parameter location {:02X} out of range (0-3F)", location);
            return Err(Error::InvalidArg);
        }
        Ok(opcode | location)
    }

    // Polls RESPONSE0 until a parameter command completes.
    async fn wait_for_param(&mut self, initial: Status) -> Result<(), Error> {
        let mut polls: u32 = 0;
        loop {
            let status = self.status().await?;
            if status.has_error() {
                log::warn!("Parameter access rejected with error {:02X}", status.counter());
                return Err(Error::ParameterRejected(status.counter()));
            }
            if status.completed_since(initial.counter()) {
                return Ok(());
            }

            polls += 1;
            if let Some(limit) = self.config.param_poll_limit {
                if polls >= limit {
                    log::warn!("Parameter access timed out after {} polls", polls);
                    return Err(Error::Timeout);
                }
            }
        }
    }
}
