// DEVICE_ADDRESS is the default 7-bit I2C address of the Si1151/Si1153.
pub const DEVICE_ADDRESS: u8 = 0x53;

// PART_ID holds the part number (0x51 for the Si1151).
pub const PART_ID: u8 = 0x00;

// HOSTIN_0 is the host input register read by PARAM_SET.
pub const HOSTIN_0: u8 = 0x0A;

// COMMAND is the register the command code is written to.
pub const COMMAND: u8 = 0x0B;

// IRQ_ENABLE selects which channels raise an interrupt.
pub const IRQ_ENABLE: u8 = 0x0F;

// RESPONSE_1 holds the value returned by PARAM_QUERY.
pub const RESPONSE_1: u8 = 0x10;

// RESPONSE_0 holds the command counter and the status flags.
pub const RESPONSE_0: u8 = 0x11;

// IRQ_STATUS reports which channels have completed.
pub const IRQ_STATUS: u8 = 0x12;

// HOSTOUT_0..HOSTOUT_3 carry the first two 16-bit channel outputs, MSB first.
pub const HOSTOUT_0: u8 = 0x13;
pub const HOSTOUT_1: u8 = 0x14;
pub const HOSTOUT_2: u8 = 0x15;
pub const HOSTOUT_3: u8 = 0x16;

// RESPONSE_0 bit fields.
pub const CMD_CTR: u8 = 0x0F;
pub const CMD_ERR: u8 = 0x10;
pub const SLEEP: u8 = 0x20;
pub const SUSPEND: u8 = 0x40;
pub const RUNNING: u8 = 0x80;

// Command codes.
pub const RESET_CMD_CTR: u8 = 0x00;
pub const RESET_SW: u8 = 0x01;
pub const FORCE: u8 = 0x11;
pub const PAUSE: u8 = 0x12;
pub const START: u8 = 0x13;

// PARAM_QUERY and PARAM_SET tag a parameter location in the top two bits.
pub const PARAM_QUERY: u8 = 0b01 << 6;
pub const PARAM_SET: u8 = 0b10 << 6;

// PARAM_LOCATION_MASK covers the six bits left for the location itself.
pub const PARAM_LOCATION_MASK: u8 = 0x3F;

// MAX_RETRIES bounds the RESPONSE_0 polls of a single command.
pub const MAX_RETRIES: u32 = 10_000;

/// Parameter table locations.
pub mod param {
    pub const I2C_ADDR: u8 = 0x00;
    pub const CHAN_LIST: u8 = 0x01;
    pub const ADCCONFIG_0: u8 = 0x02;
    pub const ADCSENS_0: u8 = 0x03;
    pub const ADCPOST_0: u8 = 0x04;
    pub const MEASCONFIG_0: u8 = 0x05;
    pub const ADCCONFIG_1: u8 = 0x06;
    pub const ADCSENS_1: u8 = 0x07;
    pub const ADCPOST_1: u8 = 0x08;
    pub const MEASCONFIG_1: u8 = 0x09;
    pub const MEASRATE_H: u8 = 0x1A;
    pub const MEASRATE_L: u8 = 0x1B;
    pub const MEASCOUNT_0: u8 = 0x1C;
    pub const MEASCOUNT_1: u8 = 0x1D;
    pub const MEASCOUNT_2: u8 = 0x1E;
    pub const THRESHOLD0_H: u8 = 0x25;
    pub const THRESHOLD0_L: u8 = 0x26;
}
