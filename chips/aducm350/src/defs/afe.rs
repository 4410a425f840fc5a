// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Analog front end.

// Generated register constants for afe.

// AFE registers
/// AFE Configuration
pub const REG_AFE_AFE_CFG: u32 = 0x4008_0000;
/// Sequencer Configuration
pub const REG_AFE_AFE_SEQ_CFG: u32 = 0x4008_0004;
/// FIFOs Configuration
pub const REG_AFE_AFE_FIFO_CFG: u32 = 0x4008_0008;
/// Switch Matrix Configuration
pub const REG_AFE_AFE_SW_CFG: u32 = 0x4008_000C;
/// DAC Configuration
pub const REG_AFE_AFE_DAC_CFG: u32 = 0x4008_0010;
/// Waveform Generator Configuration
pub const REG_AFE_AFE_WG_CFG: u32 = 0x4008_0014;
/// Waveform Generator - Trapezoid DC Level 1
pub const REG_AFE_AFE_WG_DCLEVEL_1: u32 = 0x4008_0018;
/// Waveform Generator - Trapezoid DC Level 2
pub const REG_AFE_AFE_WG_DCLEVEL_2: u32 = 0x4008_001C;
/// Waveform Generator - Trapezoid Delay 1 Time
pub const REG_AFE_AFE_WG_DELAY_1: u32 = 0x4008_0020;
/// Waveform Generator - Trapezoid Slope 1 Time
pub const REG_AFE_AFE_WG_SLOPE_1: u32 = 0x4008_0024;
/// Waveform Generator - Trapezoid Delay 2 Time
pub const REG_AFE_AFE_WG_DELAY_2: u32 = 0x4008_0028;
/// Waveform Generator - Trapezoid Slope 2 Time
pub const REG_AFE_AFE_WG_SLOPE_2: u32 = 0x4008_002C;
/// Waveform Generator - Sinusoid Frequency Control Word
pub const REG_AFE_AFE_WG_FCW: u32 = 0x4008_0030;
/// Waveform Generator - Sinusoid Phase Offset
pub const REG_AFE_AFE_WG_PHASE: u32 = 0x4008_0034;
/// Waveform Generator - Sinusoid Offset
pub const REG_AFE_AFE_WG_OFFSET: u32 = 0x4008_0038;
/// Waveform Generator - Sinusoid Amplitude
pub const REG_AFE_AFE_WG_AMPLITUDE: u32 = 0x4008_003C;
/// ADC Configuration
pub const REG_AFE_AFE_ADC_CFG: u32 = 0x4008_0040;
/// Supply Rejection Filter Configuration
pub const REG_AFE_AFE_SUPPLY_LPF_CFG: u32 = 0x4008_0044;
/// Switch Matrix Full Configuration (MSB)
pub const REG_AFE_AFE_SW_FULL_CFG_MSB: u32 = 0x4008_0048;
/// Switch Matrix Full Configuration (LSB)
pub const REG_AFE_AFE_SW_FULL_CFG_LSB: u32 = 0x4008_004C;
/// Waveform Generator - DAC Code
pub const REG_AFE_AFE_WG_DAC_CODE: u32 = 0x4008_0054;
/// AFE Status
pub const REG_AFE_AFE_STATUS: u32 = 0x4008_0058;
/// Sequencer CRC Value
pub const REG_AFE_AFE_SEQ_CRC: u32 = 0x4008_0060;
/// Sequencer Command Count
pub const REG_AFE_AFE_SEQ_COUNT: u32 = 0x4008_0064;
/// Sequencer Timeout Counter
pub const REG_AFE_AFE_SEQ_TIMEOUT: u32 = 0x4008_0068;
/// Data FIFO Read
pub const REG_AFE_AFE_DATA_FIFO_READ: u32 = 0x4008_006C;
/// Command FIFO Write
pub const REG_AFE_AFE_CMD_FIFO_WRITE: u32 = 0x4008_0070;
/// ADC Raw Result
pub const REG_AFE_AFE_ADC_RESULT: u32 = 0x4008_0074;
/// DFT Result, Real Part
pub const REG_AFE_AFE_DFT_RESULT_REAL: u32 = 0x4008_0078;
/// DFT Result, Imaginary Part
pub const REG_AFE_AFE_DFT_RESULT_IMAG: u32 = 0x4008_007C;
/// Supply Rejection Filter Result
pub const REG_AFE_AFE_SUPPLY_LPF_RESULT: u32 = 0x4008_0080;
/// Temperature Sensor Result
pub const REG_AFE_AFE_TEMP_SENSOR_RESULT: u32 = 0x4008_0084;
/// Analog Capture Interrupt Enable
pub const REG_AFE_AFE_ANALOG_CAPTURE_IEN: u32 = 0x4008_008C;
/// Analog Generation Interrupt Enable
pub const REG_AFE_AFE_ANALOG_GEN_IEN: u32 = 0x4008_0090;
/// Command FIFO Interrupt Enable
pub const REG_AFE_AFE_CMD_FIFO_IEN: u32 = 0x4008_0094;
/// Data FIFO Interrupt Enable
pub const REG_AFE_AFE_DATA_FIFO_IEN: u32 = 0x4008_0098;
/// Analog Capture Interrupt
pub const REG_AFE_AFE_ANALOG_CAPTURE_INT: u32 = 0x4008_00A0;
/// Analog Generation Interrupt
pub const REG_AFE_AFE_ANALOG_GEN_INT: u32 = 0x4008_00A4;
/// Command FIFO Interrupt
pub const REG_AFE_AFE_CMD_FIFO_INT: u32 = 0x4008_00A8;
/// Data FIFO Interrupt
pub const REG_AFE_AFE_DATA_FIFO_INT: u32 = 0x4008_00AC;
/// Switch Matrix Status (MSB)
pub const REG_AFE_AFE_SW_STATUS_MSB: u32 = 0x4008_00B0;
/// Switch Matrix Status (LSB)
pub const REG_AFE_AFE_SW_STATUS_LSB: u32 = 0x4008_00B4;
/// ADC Minimum Value Check
pub const REG_AFE_AFE_ADCMIN: u32 = 0x4008_00B8;
/// ADC Maximum Value Check
pub const REG_AFE_AFE_ADCMAX: u32 = 0x4008_00BC;
/// ADC Delta Check
pub const REG_AFE_AFE_ADCDELTA: u32 = 0x4008_00C0;
/// Calibration Data Lock
pub const REG_AFE_AFE_CAL_DATA_LOCK: u32 = 0x4008_0100;
/// ADC Gain (TIA Measurement)
pub const REG_AFE_AFE_ADC_GAIN_TIA: u32 = 0x4008_0104;
/// ADC Offset (TIA Measurement)
pub const REG_AFE_AFE_ADC_OFFSET_TIA: u32 = 0x4008_0108;
/// ADC Gain (Temperature Sensor Measurement)
pub const REG_AFE_AFE_ADC_GAIN_TEMP_SENS: u32 = 0x4008_010C;
/// ADC Offset (Temperature Sensor Measurement)
pub const REG_AFE_AFE_ADC_OFFSET_TEMP_SENS: u32 = 0x4008_0110;
/// ADC Gain (Aux Channel Measurement)
pub const REG_AFE_AFE_ADC_GAIN_AUX: u32 = 0x4008_0118;
/// ADC Offset (Aux Channel Measurement)
pub const REG_AFE_AFE_ADC_OFFSET_AUX: u32 = 0x4008_011C;
/// DAC Offset With Attenuator Disabled
pub const REG_AFE_AFE_DAC_OFFSET_UNITY: u32 = 0x4008_0120;
/// DAC Offset With Attenuator Enabled
pub const REG_AFE_AFE_DAC_OFFSET_ATTEN: u32 = 0x4008_0124;
/// DAC Gain
pub const REG_AFE_AFE_DAC_GAIN: u32 = 0x4008_0128;
/// Precision Reference Trim 0
pub const REG_AFE_AFE_REF_TRIM0: u32 = 0x4008_012C;
/// Precision Reference Trim 1
pub const REG_AFE_AFE_REF_TRIM1: u32 = 0x4008_0130;
/// Analog LDO Trim
pub const REG_AFE_AFE_ALDO_TRIM: u32 = 0x4008_0134;
/// DAC Trim
pub const REG_AFE_AFE_DAC_TRIM: u32 = 0x4008_0138;
/// INAMP Trim
pub const REG_AFE_AFE_INAMP_TRIM: u32 = 0x4008_013C;
/// Excitation Buffer Trim
pub const REG_AFE_AFE_EXBUF_TRIM: u32 = 0x4008_0140;
/// Temperature Sensor Trim
pub const REG_AFE_AFE_TEMP_SENS_TRIM: u32 = 0x4008_0144;

// AFE_AFE_CFG
pub const BITP_AFE_AFE_CFG_ALDO_EN: u32 = 4;
pub const BITP_AFE_AFE_CFG_REF_EN: u32 = 5;
pub const BITP_AFE_AFE_CFG_DAC_EN: u32 = 6;
pub const BITP_AFE_AFE_CFG_ADC_EN: u32 = 7;
pub const BITP_AFE_AFE_CFG_ADC_CONV_EN: u32 = 8;
pub const BITP_AFE_AFE_CFG_BUF_EN: u32 = 9;
pub const BITP_AFE_AFE_CFG_INAMP_EN: u32 = 10;
pub const BITP_AFE_AFE_CFG_TIA_EN: u32 = 11;
pub const BITP_AFE_AFE_CFG_TEMP_SENSOR_EN: u32 = 12;
pub const BITP_AFE_AFE_CFG_TEMP_CONV_EN: u32 = 13;
pub const BITP_AFE_AFE_CFG_WAVEGEN_EN: u32 = 14;
pub const BITP_AFE_AFE_CFG_DFT_EN: u32 = 15;
pub const BITP_AFE_AFE_CFG_SUPPLY_LPF_EN: u32 = 16;
pub const BITP_AFE_AFE_CFG_VBIASBUF_EN: u32 = 17;
pub const BITP_AFE_AFE_CFG_VREFBUFILIMIT_EN: u32 = 18;
pub const BITP_AFE_AFE_CFG_ALDOILIMIT_EN: u32 = 19;
/// Analog LDO enable
pub const BITM_AFE_AFE_CFG_ALDO_EN: u32 = 0x0000_0010;
/// Reference buffer enable
pub const BITM_AFE_AFE_CFG_REF_EN: u32 = 0x0000_0020;
/// DAC enable
pub const BITM_AFE_AFE_CFG_DAC_EN: u32 = 0x0000_0040;
/// ADC power enable
pub const BITM_AFE_AFE_CFG_ADC_EN: u32 = 0x0000_0080;
/// ADC conversion start enable
pub const BITM_AFE_AFE_CFG_ADC_CONV_EN: u32 = 0x0000_0100;
/// Excitation buffer enable
pub const BITM_AFE_AFE_CFG_BUF_EN: u32 = 0x0000_0200;
/// Instrumentation amplifier enable
pub const BITM_AFE_AFE_CFG_INAMP_EN: u32 = 0x0000_0400;
/// Transimpedance amplifier enable
pub const BITM_AFE_AFE_CFG_TIA_EN: u32 = 0x0000_0800;
/// Temperature sensor enable
pub const BITM_AFE_AFE_CFG_TEMP_SENSOR_EN: u32 = 0x0000_1000;
/// Temperature conversion enable
pub const BITM_AFE_AFE_CFG_TEMP_CONV_EN: u32 = 0x0000_2000;
/// Waveform generator enable
pub const BITM_AFE_AFE_CFG_WAVEGEN_EN: u32 = 0x0000_4000;
/// DFT hardware accelerator enable
pub const BITM_AFE_AFE_CFG_DFT_EN: u32 = 0x0000_8000;
/// Supply rejection filter enable
pub const BITM_AFE_AFE_CFG_SUPPLY_LPF_EN: u32 = 0x0001_0000;
/// Bias voltage buffer enable
pub const BITM_AFE_AFE_CFG_VBIASBUF_EN: u32 = 0x0002_0000;
/// Reference buffer current limit enable
pub const BITM_AFE_AFE_CFG_VREFBUFILIMIT_EN: u32 = 0x0004_0000;
/// Analog LDO current limit enable
pub const BITM_AFE_AFE_CFG_ALDOILIMIT_EN: u32 = 0x0008_0000;

// AFE_AFE_SEQ_CFG
pub const BITP_AFE_AFE_SEQ_CFG_SEQ_EN: u32 = 0;
/// Sequencer enable
pub const BITM_AFE_AFE_SEQ_CFG_SEQ_EN: u32 = 0x0000_0001;

// AFE_AFE_FIFO_CFG
pub const BITP_AFE_AFE_FIFO_CFG_CMD_FIFO_EN: u32 = 3;
pub const BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_EN: u32 = 4;
pub const BITP_AFE_AFE_FIFO_CFG_CMD_FIFO_DMA_REQ_EN: u32 = 11;
pub const BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_DMA_REQ_EN: u32 = 12;
pub const BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL: u32 = 13;
/// Command FIFO enable
pub const BITM_AFE_AFE_FIFO_CFG_CMD_FIFO_EN: u32 = 0x0000_0008;
/// Data FIFO enable
pub const BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_EN: u32 = 0x0000_0010;
/// Command FIFO DMA request enable
pub const BITM_AFE_AFE_FIFO_CFG_CMD_FIFO_DMA_REQ_EN: u32 = 0x0000_0800;
/// Data FIFO DMA request enable
pub const BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_DMA_REQ_EN: u32 = 0x0000_1000;
/// Data FIFO source select
pub const BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL: u32 = 0x0000_6000;
/// ADC result
pub const ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_ADC: u32 = 0x0000_0000;
/// DFT result
pub const ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_DFT: u32 = 0x0000_2000;
/// Supply rejection filter result
pub const ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_LPF: u32 = 0x0000_4000;
/// Temperature result
pub const ENUM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL_TEMP: u32 = 0x0000_6000;

// AFE_AFE_SW_CFG
pub const BITP_AFE_AFE_SW_CFG_DMUX_STATE: u32 = 0;
pub const BITP_AFE_AFE_SW_CFG_PMUX_STATE: u32 = 4;
pub const BITP_AFE_AFE_SW_CFG_NMUX_STATE: u32 = 8;
pub const BITP_AFE_AFE_SW_CFG_TMUX_STATE: u32 = 12;
/// D switch matrix state
pub const BITM_AFE_AFE_SW_CFG_DMUX_STATE: u32 = 0x0000_000F;
/// P switch matrix state
pub const BITM_AFE_AFE_SW_CFG_PMUX_STATE: u32 = 0x0000_00F0;
/// N switch matrix state
pub const BITM_AFE_AFE_SW_CFG_NMUX_STATE: u32 = 0x0000_0F00;
/// T switch matrix state
pub const BITM_AFE_AFE_SW_CFG_TMUX_STATE: u32 = 0x0000_F000;

// AFE_AFE_DAC_CFG
pub const BITP_AFE_AFE_DAC_CFG_DAC_ATTEN_EN: u32 = 0;
/// DAC attenuator enable
pub const BITM_AFE_AFE_DAC_CFG_DAC_ATTEN_EN: u32 = 0x0000_0001;

// AFE_AFE_WG_CFG
pub const BITP_AFE_AFE_WG_CFG_TYPE_SEL: u32 = 1;
/// Waveform type select
pub const BITM_AFE_AFE_WG_CFG_TYPE_SEL: u32 = 0x0000_0006;
/// Direct DAC code
pub const ENUM_AFE_AFE_WG_CFG_TYPE_SEL_DIRECT: u32 = 0x0000_0000;
/// Sinusoid
pub const ENUM_AFE_AFE_WG_CFG_TYPE_SEL_SINE: u32 = 0x0000_0004;
/// Trapezoid
pub const ENUM_AFE_AFE_WG_CFG_TYPE_SEL_TRAPEZOID: u32 = 0x0000_0006;

// AFE_AFE_WG_DCLEVEL_1
pub const BITP_AFE_AFE_WG_DCLEVEL_1_TRAP_DC_LEVEL_1: u32 = 0;
/// Trapezoid DC level 1
pub const BITM_AFE_AFE_WG_DCLEVEL_1_TRAP_DC_LEVEL_1: u32 = 0x0000_0FFF;

// AFE_AFE_WG_DCLEVEL_2
pub const BITP_AFE_AFE_WG_DCLEVEL_2_TRAP_DC_LEVEL_2: u32 = 0;
/// Trapezoid DC level 2
pub const BITM_AFE_AFE_WG_DCLEVEL_2_TRAP_DC_LEVEL_2: u32 = 0x0000_0FFF;

// AFE_AFE_WG_DELAY_1
pub const BITP_AFE_AFE_WG_DELAY_1_TRAP_DELAY_1: u32 = 0;
/// Trapezoid delay 1 time
pub const BITM_AFE_AFE_WG_DELAY_1_TRAP_DELAY_1: u32 = 0x000F_FFFF;

// AFE_AFE_WG_SLOPE_1
pub const BITP_AFE_AFE_WG_SLOPE_1_TRAP_SLOPE_1: u32 = 0;
/// Trapezoid slope 1 time
pub const BITM_AFE_AFE_WG_SLOPE_1_TRAP_SLOPE_1: u32 = 0x000F_FFFF;

// AFE_AFE_WG_DELAY_2
pub const BITP_AFE_AFE_WG_DELAY_2_TRAP_DELAY_2: u32 = 0;
/// Trapezoid delay 2 time
pub const BITM_AFE_AFE_WG_DELAY_2_TRAP_DELAY_2: u32 = 0x000F_FFFF;

// AFE_AFE_WG_SLOPE_2
pub const BITP_AFE_AFE_WG_SLOPE_2_TRAP_SLOPE_2: u32 = 0;
/// Trapezoid slope 2 time
pub const BITM_AFE_AFE_WG_SLOPE_2_TRAP_SLOPE_2: u32 = 0x000F_FFFF;

// AFE_AFE_WG_FCW
pub const BITP_AFE_AFE_WG_FCW_SINE_FCW: u32 = 0;
/// Sinusoid generator frequency control word
pub const BITM_AFE_AFE_WG_FCW_SINE_FCW: u32 = 0x000F_FFFF;

// AFE_AFE_WG_PHASE
pub const BITP_AFE_AFE_WG_PHASE_SINE_OFFSET: u32 = 0;
/// Sinusoid phase offset
pub const BITM_AFE_AFE_WG_PHASE_SINE_OFFSET: u32 = 0x000F_FFFF;

// AFE_AFE_WG_OFFSET
pub const BITP_AFE_AFE_WG_OFFSET_SINE_OFFSET: u32 = 0;
/// Sinusoid offset
pub const BITM_AFE_AFE_WG_OFFSET_SINE_OFFSET: u32 = 0x0000_0FFF;

// AFE_AFE_WG_AMPLITUDE
pub const BITP_AFE_AFE_WG_AMPLITUDE_SINE_AMPLITUDE: u32 = 0;
/// Sinusoid amplitude
pub const BITM_AFE_AFE_WG_AMPLITUDE_SINE_AMPLITUDE: u32 = 0x0000_07FF;

// AFE_AFE_ADC_CFG
pub const BITP_AFE_AFE_ADC_CFG_MUX_SEL: u32 = 0;
pub const BITP_AFE_AFE_ADC_CFG_GAIN_OFFS_SEL: u32 = 5;
pub const BITP_AFE_AFE_ADC_CFG_ANEXCITESW_EN: u32 = 7;
/// ADC input mux select
pub const BITM_AFE_AFE_ADC_CFG_MUX_SEL: u32 = 0x0000_001F;
/// Gain and offset calibration selection
pub const BITM_AFE_AFE_ADC_CFG_GAIN_OFFS_SEL: u32 = 0x0000_0060;
/// Excitation switch matrix enable
pub const BITM_AFE_AFE_ADC_CFG_ANEXCITESW_EN: u32 = 0x0000_0080;

// AFE_AFE_SUPPLY_LPF_CFG
pub const BITP_AFE_AFE_SUPPLY_LPF_CFG_BYPASS_SUPPLY_LPF: u32 = 0;
/// Bypass the supply rejection filter
pub const BITM_AFE_AFE_SUPPLY_LPF_CFG_BYPASS_SUPPLY_LPF: u32 = 0x0000_0001;

// AFE_AFE_WG_DAC_CODE
pub const BITP_AFE_AFE_WG_DAC_CODE_DAC_CODE: u32 = 0;
/// DAC code in direct write mode
pub const BITM_AFE_AFE_WG_DAC_CODE_DAC_CODE: u32 = 0x0000_0FFF;

// AFE_AFE_STATUS
pub const BITP_AFE_AFE_STATUS_TEMP_SENSOR_READY: u32 = 0;
pub const BITP_AFE_AFE_STATUS_ADC_READY: u32 = 1;
/// Temperature sensor ready
pub const BITM_AFE_AFE_STATUS_TEMP_SENSOR_READY: u32 = 0x0000_0001;
/// ADC ready
pub const BITM_AFE_AFE_STATUS_ADC_READY: u32 = 0x0000_0002;

// AFE_AFE_SEQ_COUNT
pub const BITP_AFE_AFE_SEQ_COUNT_COUNT: u32 = 0;
/// Sequencer command count
pub const BITM_AFE_AFE_SEQ_COUNT_COUNT: u32 = 0x0000_FFFF;

// AFE_AFE_SEQ_TIMEOUT
pub const BITP_AFE_AFE_SEQ_TIMEOUT_TIMEOUT: u32 = 0;
/// Sequencer timeout counter
pub const BITM_AFE_AFE_SEQ_TIMEOUT_TIMEOUT: u32 = 0x3FFF_FFFF;

// AFE_AFE_ADC_RESULT
pub const BITP_AFE_AFE_ADC_RESULT_ADC_RESULT: u32 = 0;
/// ADC result
pub const BITM_AFE_AFE_ADC_RESULT_ADC_RESULT: u32 = 0x0000_FFFF;

// AFE_AFE_DFT_RESULT_REAL
pub const BITP_AFE_AFE_DFT_RESULT_REAL_DFT_RESULT_REAL: u32 = 0;
/// DFT real result
pub const BITM_AFE_AFE_DFT_RESULT_REAL_DFT_RESULT_REAL: u32 = 0xFFFF_FFFF;

// AFE_AFE_DFT_RESULT_IMAG
pub const BITP_AFE_AFE_DFT_RESULT_IMAG_DFT_RESULT_IMAG: u32 = 0;
/// DFT imaginary result
pub const BITM_AFE_AFE_DFT_RESULT_IMAG_DFT_RESULT_IMAG: u32 = 0xFFFF_FFFF;

// AFE_AFE_SUPPLY_LPF_RESULT
pub const BITP_AFE_AFE_SUPPLY_LPF_RESULT_SUPPLY_LPF_RESULT: u32 = 0;
/// Supply rejection filter result
pub const BITM_AFE_AFE_SUPPLY_LPF_RESULT_SUPPLY_LPF_RESULT: u32 = 0x0000_FFFF;

// AFE_AFE_TEMP_SENSOR_RESULT
pub const BITP_AFE_AFE_TEMP_SENSOR_RESULT_TEMP_SENSOR_RESULT: u32 = 0;
/// Temperature sensor result
pub const BITM_AFE_AFE_TEMP_SENSOR_RESULT_TEMP_SENSOR_RESULT: u32 = 0x0000_FFFF;

// AFE_AFE_ANALOG_CAPTURE_IEN
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_RESULT_READY_IEN: u32 = 0;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_DFT_RESULT_READY_IEN: u32 = 1;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_SUPPLY_LPF_RESULT_READY_IEN: u32 = 2;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_TEMP_RESULT_READY_IEN: u32 = 3;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MIN_FAIL_IEN: u32 = 4;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MAX_FAIL_IEN: u32 = 5;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_DELTA_FAIL_IEN: u32 = 6;
/// ADC result ready interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_RESULT_READY_IEN: u32 = 0x0000_0001;
/// DFT result ready interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_DFT_RESULT_READY_IEN: u32 = 0x0000_0002;
/// Supply rejection filter result ready interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_SUPPLY_LPF_RESULT_READY_IEN: u32 = 0x0000_0004;
/// Temperature result ready interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_TEMP_RESULT_READY_IEN: u32 = 0x0000_0008;
/// ADC minimum value check fail interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MIN_FAIL_IEN: u32 = 0x0000_0010;
/// ADC maximum value check fail interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MAX_FAIL_IEN: u32 = 0x0000_0020;
/// ADC delta check fail interrupt enable
pub const BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_DELTA_FAIL_IEN: u32 = 0x0000_0040;

// AFE_AFE_ANALOG_GEN_IEN
pub const BITP_AFE_AFE_ANALOG_GEN_IEN_DELAY_COMMAND_DONE_IEN: u32 = 0;
pub const BITP_AFE_AFE_ANALOG_GEN_IEN_HARDWARE_SETUP_DONE_IEN: u32 = 1;
pub const BITP_AFE_AFE_ANALOG_GEN_IEN_BREAK_SEQUENCE_ORG_IEN: u32 = 2;
pub const BITP_AFE_AFE_ANALOG_GEN_IEN_CUSTOM_INT_IEN: u32 = 3;
/// Delay command done interrupt enable
pub const BITM_AFE_AFE_ANALOG_GEN_IEN_DELAY_COMMAND_DONE_IEN: u32 = 0x0000_0001;
/// Hardware setup done interrupt enable
pub const BITM_AFE_AFE_ANALOG_GEN_IEN_HARDWARE_SETUP_DONE_IEN: u32 = 0x0000_0002;
/// Break sequence interrupt enable
pub const BITM_AFE_AFE_ANALOG_GEN_IEN_BREAK_SEQUENCE_ORG_IEN: u32 = 0x0000_0004;
/// Custom interrupt enable
pub const BITM_AFE_AFE_ANALOG_GEN_IEN_CUSTOM_INT_IEN: u32 = 0x0000_0008;

// AFE_AFE_CMD_FIFO_IEN
pub const BITP_AFE_AFE_CMD_FIFO_IEN_END_OF_SEQ_IEN: u32 = 0;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_FINISHED_IEN: u32 = 1;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_ERR_IEN: u32 = 2;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_FULL_IEN: u32 = 3;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_EMPTY_IEN: u32 = 4;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_THR_IEN: u32 = 5;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_OVF_IEN: u32 = 6;
pub const BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_UDF_IEN: u32 = 7;
/// End of sequence interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_END_OF_SEQ_IEN: u32 = 0x0000_0001;
/// Sequencer timeout command finished interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_FINISHED_IEN: u32 = 0x0000_0002;
/// Sequencer timeout error interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_ERR_IEN: u32 = 0x0000_0004;
/// Command FIFO full interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_FULL_IEN: u32 = 0x0000_0008;
/// Command FIFO empty interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_EMPTY_IEN: u32 = 0x0000_0010;
/// Command FIFO threshold interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_THR_IEN: u32 = 0x0000_0020;
/// Command FIFO overflow interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_OVF_IEN: u32 = 0x0000_0040;
/// Command FIFO underflow interrupt enable
pub const BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_UDF_IEN: u32 = 0x0000_0080;

// AFE_AFE_DATA_FIFO_IEN
pub const BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_FULL_IEN: u32 = 0;
pub const BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_EMPTY_IEN: u32 = 1;
pub const BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_THR_IEN: u32 = 2;
pub const BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_OVF_IEN: u32 = 3;
pub const BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_UDF_IEN: u32 = 4;
/// Data FIFO full interrupt enable
pub const BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_FULL_IEN: u32 = 0x0000_0001;
/// Data FIFO empty interrupt enable
pub const BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_EMPTY_IEN: u32 = 0x0000_0002;
/// Data FIFO threshold interrupt enable
pub const BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_THR_IEN: u32 = 0x0000_0004;
/// Data FIFO overflow interrupt enable
pub const BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_OVF_IEN: u32 = 0x0000_0008;
/// Data FIFO underflow interrupt enable
pub const BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_UDF_IEN: u32 = 0x0000_0010;

// AFE_AFE_ANALOG_CAPTURE_INT
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_RESULT_READY: u32 = 0;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_DFT_RESULT_READY: u32 = 1;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_SUPPLY_LPF_RESULT_READY: u32 = 2;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_TEMP_RESULT_READY: u32 = 3;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MIN_FAIL: u32 = 4;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MAX_FAIL: u32 = 5;
pub const BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_DELTA_FAIL: u32 = 6;
/// ADC result ready status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_RESULT_READY: u32 = 0x0000_0001;
/// DFT result ready status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_DFT_RESULT_READY: u32 = 0x0000_0002;
/// Supply rejection filter result ready status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_SUPPLY_LPF_RESULT_READY: u32 = 0x0000_0004;
/// Temperature result ready status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_TEMP_RESULT_READY: u32 = 0x0000_0008;
/// ADC minimum value check fail status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MIN_FAIL: u32 = 0x0000_0010;
/// ADC maximum value check fail status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MAX_FAIL: u32 = 0x0000_0020;
/// ADC delta check fail status
pub const BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_DELTA_FAIL: u32 = 0x0000_0040;

// AFE_AFE_ANALOG_GEN_INT
pub const BITP_AFE_AFE_ANALOG_GEN_INT_DELAY_COMMAND_DONE: u32 = 0;
pub const BITP_AFE_AFE_ANALOG_GEN_INT_HARDWARE_SETUP_DONE: u32 = 1;
pub const BITP_AFE_AFE_ANALOG_GEN_INT_BREAK_SEQUENCE_ORG: u32 = 2;
pub const BITP_AFE_AFE_ANALOG_GEN_INT_CUSTOM_INT: u32 = 3;
/// Delay command done status
pub const BITM_AFE_AFE_ANALOG_GEN_INT_DELAY_COMMAND_DONE: u32 = 0x0000_0001;
/// Hardware setup done status
pub const BITM_AFE_AFE_ANALOG_GEN_INT_HARDWARE_SETUP_DONE: u32 = 0x0000_0002;
/// Break sequence status
pub const BITM_AFE_AFE_ANALOG_GEN_INT_BREAK_SEQUENCE_ORG: u32 = 0x0000_0004;
/// Custom interrupt status
pub const BITM_AFE_AFE_ANALOG_GEN_INT_CUSTOM_INT: u32 = 0x0000_0008;

// AFE_AFE_CMD_FIFO_INT
pub const BITP_AFE_AFE_CMD_FIFO_INT_END_OF_SEQ: u32 = 0;
pub const BITP_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_FINISHED: u32 = 1;
pub const BITP_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_ERR: u32 = 2;
pub const BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_FULL: u32 = 3;
pub const BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_EMPTY: u32 = 4;
pub const BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_THR: u32 = 5;
pub const BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_OVF: u32 = 6;
pub const BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_UDF: u32 = 7;
/// End of sequence status
pub const BITM_AFE_AFE_CMD_FIFO_INT_END_OF_SEQ: u32 = 0x0000_0001;
/// Sequencer timeout command finished status
pub const BITM_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_FINISHED: u32 = 0x0000_0002;
/// Sequencer timeout error status
pub const BITM_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_ERR: u32 = 0x0000_0004;
/// Command FIFO full status
pub const BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_FULL: u32 = 0x0000_0008;
/// Command FIFO empty status
pub const BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_EMPTY: u32 = 0x0000_0010;
/// Command FIFO threshold status
pub const BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_THR: u32 = 0x0000_0020;
/// Command FIFO overflow status
pub const BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_OVF: u32 = 0x0000_0040;
/// Command FIFO underflow status
pub const BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_UDF: u32 = 0x0000_0080;

// AFE_AFE_DATA_FIFO_INT
pub const BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_FULL: u32 = 0;
pub const BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_EMPTY: u32 = 1;
pub const BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_THR: u32 = 2;
pub const BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_OVF: u32 = 3;
pub const BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_UDF: u32 = 4;
/// Data FIFO full status
pub const BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_FULL: u32 = 0x0000_0001;
/// Data FIFO empty status
pub const BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_EMPTY: u32 = 0x0000_0002;
/// Data FIFO threshold status
pub const BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_THR: u32 = 0x0000_0004;
/// Data FIFO overflow status
pub const BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_OVF: u32 = 0x0000_0008;
/// Data FIFO underflow status
pub const BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_UDF: u32 = 0x0000_0010;

// AFE_AFE_ADCMIN
pub const BITP_AFE_AFE_ADCMIN_ADCMIN: u32 = 0;
/// ADC minimum value threshold
pub const BITM_AFE_AFE_ADCMIN_ADCMIN: u32 = 0x0000_FFFF;

// AFE_AFE_ADCMAX
pub const BITP_AFE_AFE_ADCMAX_ADCMAX: u32 = 0;
/// ADC maximum value threshold
pub const BITM_AFE_AFE_ADCMAX_ADCMAX: u32 = 0x0000_FFFF;

// AFE_AFE_ADCDELTA
pub const BITP_AFE_AFE_ADCDELTA_ADCDELTA: u32 = 0;
/// ADC delta value threshold
pub const BITM_AFE_AFE_ADCDELTA_ADCDELTA: u32 = 0x0000_FFFF;

// AFE_AFE_CAL_DATA_LOCK
pub const BITP_AFE_AFE_CAL_DATA_LOCK_KEY: u32 = 0;
/// Calibration data lock key
pub const BITM_AFE_AFE_CAL_DATA_LOCK_KEY: u32 = 0xFFFF_FFFF;

// AFE_AFE_SW_FULL_CFG_MSB
pub const BITP_AFE_AFE_SW_FULL_CFG_MSB_VALUE: u32 = 0;
/// Switch Matrix Full Configuration (MSB)
pub const BITM_AFE_AFE_SW_FULL_CFG_MSB_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_SW_FULL_CFG_LSB
pub const BITP_AFE_AFE_SW_FULL_CFG_LSB_VALUE: u32 = 0;
/// Switch Matrix Full Configuration (LSB)
pub const BITM_AFE_AFE_SW_FULL_CFG_LSB_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_SEQ_CRC
pub const BITP_AFE_AFE_SEQ_CRC_VALUE: u32 = 0;
/// Sequencer CRC Value
pub const BITM_AFE_AFE_SEQ_CRC_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_DATA_FIFO_READ
pub const BITP_AFE_AFE_DATA_FIFO_READ_VALUE: u32 = 0;
/// Data FIFO Read
pub const BITM_AFE_AFE_DATA_FIFO_READ_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_CMD_FIFO_WRITE
pub const BITP_AFE_AFE_CMD_FIFO_WRITE_VALUE: u32 = 0;
/// Command FIFO Write
pub const BITM_AFE_AFE_CMD_FIFO_WRITE_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_SW_STATUS_MSB
pub const BITP_AFE_AFE_SW_STATUS_MSB_VALUE: u32 = 0;
/// Switch Matrix Status (MSB)
pub const BITM_AFE_AFE_SW_STATUS_MSB_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_SW_STATUS_LSB
pub const BITP_AFE_AFE_SW_STATUS_LSB_VALUE: u32 = 0;
/// Switch Matrix Status (LSB)
pub const BITM_AFE_AFE_SW_STATUS_LSB_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ADC_GAIN_TIA
pub const BITP_AFE_AFE_ADC_GAIN_TIA_VALUE: u32 = 0;
/// ADC Gain (TIA Measurement)
pub const BITM_AFE_AFE_ADC_GAIN_TIA_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ADC_OFFSET_TIA
pub const BITP_AFE_AFE_ADC_OFFSET_TIA_VALUE: u32 = 0;
/// ADC Offset (TIA Measurement)
pub const BITM_AFE_AFE_ADC_OFFSET_TIA_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ADC_GAIN_TEMP_SENS
pub const BITP_AFE_AFE_ADC_GAIN_TEMP_SENS_VALUE: u32 = 0;
/// ADC Gain (Temperature Sensor Measurement)
pub const BITM_AFE_AFE_ADC_GAIN_TEMP_SENS_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ADC_OFFSET_TEMP_SENS
pub const BITP_AFE_AFE_ADC_OFFSET_TEMP_SENS_VALUE: u32 = 0;
/// ADC Offset (Temperature Sensor Measurement)
pub const BITM_AFE_AFE_ADC_OFFSET_TEMP_SENS_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ADC_GAIN_AUX
pub const BITP_AFE_AFE_ADC_GAIN_AUX_VALUE: u32 = 0;
/// ADC Gain (Aux Channel Measurement)
pub const BITM_AFE_AFE_ADC_GAIN_AUX_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ADC_OFFSET_AUX
pub const BITP_AFE_AFE_ADC_OFFSET_AUX_VALUE: u32 = 0;
/// ADC Offset (Aux Channel Measurement)
pub const BITM_AFE_AFE_ADC_OFFSET_AUX_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_DAC_OFFSET_UNITY
pub const BITP_AFE_AFE_DAC_OFFSET_UNITY_VALUE: u32 = 0;
/// DAC Offset With Attenuator Disabled
pub const BITM_AFE_AFE_DAC_OFFSET_UNITY_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_DAC_OFFSET_ATTEN
pub const BITP_AFE_AFE_DAC_OFFSET_ATTEN_VALUE: u32 = 0;
/// DAC Offset With Attenuator Enabled
pub const BITM_AFE_AFE_DAC_OFFSET_ATTEN_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_DAC_GAIN
pub const BITP_AFE_AFE_DAC_GAIN_VALUE: u32 = 0;
/// DAC Gain
pub const BITM_AFE_AFE_DAC_GAIN_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_REF_TRIM0
pub const BITP_AFE_AFE_REF_TRIM0_VALUE: u32 = 0;
/// Precision Reference Trim 0
pub const BITM_AFE_AFE_REF_TRIM0_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_REF_TRIM1
pub const BITP_AFE_AFE_REF_TRIM1_VALUE: u32 = 0;
/// Precision Reference Trim 1
pub const BITM_AFE_AFE_REF_TRIM1_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_ALDO_TRIM
pub const BITP_AFE_AFE_ALDO_TRIM_VALUE: u32 = 0;
/// Analog LDO Trim
pub const BITM_AFE_AFE_ALDO_TRIM_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_DAC_TRIM
pub const BITP_AFE_AFE_DAC_TRIM_VALUE: u32 = 0;
/// DAC Trim
pub const BITM_AFE_AFE_DAC_TRIM_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_INAMP_TRIM
pub const BITP_AFE_AFE_INAMP_TRIM_VALUE: u32 = 0;
/// INAMP Trim
pub const BITM_AFE_AFE_INAMP_TRIM_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_EXBUF_TRIM
pub const BITP_AFE_AFE_EXBUF_TRIM_VALUE: u32 = 0;
/// Excitation Buffer Trim
pub const BITM_AFE_AFE_EXBUF_TRIM_VALUE: u32 = 0xFFFF_FFFF;

// AFE_AFE_TEMP_SENS_TRIM
pub const BITP_AFE_AFE_TEMP_SENS_TRIM_VALUE: u32 = 0;
/// Temperature Sensor Trim
pub const BITM_AFE_AFE_TEMP_SENS_TRIM_VALUE: u32 = 0xFFFF_FFFF;
