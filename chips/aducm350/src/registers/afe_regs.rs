// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for afe.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub AfeRegisters {
        /// AFE Configuration
        (0x0000 => pub afe_cfg: ReadWrite<u32, AFE_CFG::Register>),
        /// Sequencer Configuration
        (0x0004 => pub afe_seq_cfg: ReadWrite<u32, AFE_SEQ_CFG::Register>),
        /// FIFOs Configuration
        (0x0008 => pub afe_fifo_cfg: ReadWrite<u32, AFE_FIFO_CFG::Register>),
        /// Switch Matrix Configuration
        (0x000c => pub afe_sw_cfg: ReadWrite<u32, AFE_SW_CFG::Register>),
        /// DAC Configuration
        (0x0010 => pub afe_dac_cfg: ReadWrite<u32, AFE_DAC_CFG::Register>),
        /// Waveform Generator Configuration
        (0x0014 => pub afe_wg_cfg: ReadWrite<u32, AFE_WG_CFG::Register>),
        /// Waveform Generator - Trapezoid DC Level 1
        (0x0018 => pub afe_wg_dclevel_1: ReadWrite<u32, AFE_WG_DCLEVEL_1::Register>),
        /// Waveform Generator - Trapezoid DC Level 2
        (0x001c => pub afe_wg_dclevel_2: ReadWrite<u32, AFE_WG_DCLEVEL_2::Register>),
        /// Waveform Generator - Trapezoid Delay 1 Time
        (0x0020 => pub afe_wg_delay_1: ReadWrite<u32, AFE_WG_DELAY_1::Register>),
        /// Waveform Generator - Trapezoid Slope 1 Time
        (0x0024 => pub afe_wg_slope_1: ReadWrite<u32, AFE_WG_SLOPE_1::Register>),
        /// Waveform Generator - Trapezoid Delay 2 Time
        (0x0028 => pub afe_wg_delay_2: ReadWrite<u32, AFE_WG_DELAY_2::Register>),
        /// Waveform Generator - Trapezoid Slope 2 Time
        (0x002c => pub afe_wg_slope_2: ReadWrite<u32, AFE_WG_SLOPE_2::Register>),
        /// Waveform Generator - Sinusoid Frequency Control Word
        (0x0030 => pub afe_wg_fcw: ReadWrite<u32, AFE_WG_FCW::Register>),
        /// Waveform Generator - Sinusoid Phase Offset
        (0x0034 => pub afe_wg_phase: ReadWrite<u32, AFE_WG_PHASE::Register>),
        /// Waveform Generator - Sinusoid Offset
        (0x0038 => pub afe_wg_offset: ReadWrite<u32, AFE_WG_OFFSET::Register>),
        /// Waveform Generator - Sinusoid Amplitude
        (0x003c => pub afe_wg_amplitude: ReadWrite<u32, AFE_WG_AMPLITUDE::Register>),
        /// ADC Configuration
        (0x0040 => pub afe_adc_cfg: ReadWrite<u32, AFE_ADC_CFG::Register>),
        /// Supply Rejection Filter Configuration
        (0x0044 => pub afe_supply_lpf_cfg: ReadWrite<u32, AFE_SUPPLY_LPF_CFG::Register>),
        /// Switch Matrix Full Configuration (MSB)
        (0x0048 => pub afe_sw_full_cfg_msb: ReadWrite<u32>),
        /// Switch Matrix Full Configuration (LSB)
        (0x004c => pub afe_sw_full_cfg_lsb: ReadWrite<u32>),
        (0x0050 => _reserved0),
        /// Waveform Generator - DAC Code
        (0x0054 => pub afe_wg_dac_code: ReadWrite<u32, AFE_WG_DAC_CODE::Register>),
        /// AFE Status
        (0x0058 => pub afe_status: ReadOnly<u32, AFE_STATUS::Register>),
        (0x005c => _reserved1),
        /// Sequencer CRC Value
        (0x0060 => pub afe_seq_crc: ReadOnly<u32>),
        /// Sequencer Command Count
        (0x0064 => pub afe_seq_count: ReadWrite<u32, AFE_SEQ_COUNT::Register>),
        /// Sequencer Timeout Counter
        (0x0068 => pub afe_seq_timeout: ReadOnly<u32, AFE_SEQ_TIMEOUT::Register>),
        /// Data FIFO Read
        (0x006c => pub afe_data_fifo_read: ReadOnly<u32>),
        /// Command FIFO Write
        (0x0070 => pub afe_cmd_fifo_write: WriteOnly<u32>),
        /// ADC Raw Result
        (0x0074 => pub afe_adc_result: ReadWrite<u32, AFE_ADC_RESULT::Register>),
        /// DFT Result, Real Part
        (0x0078 => pub afe_dft_result_real: ReadWrite<u32, AFE_DFT_RESULT_REAL::Register>),
        /// DFT Result, Imaginary Part
        (0x007c => pub afe_dft_result_imag: ReadWrite<u32, AFE_DFT_RESULT_IMAG::Register>),
        /// Supply Rejection Filter Result
        (0x0080 => pub afe_supply_lpf_result: ReadWrite<u32, AFE_SUPPLY_LPF_RESULT::Register>),
        /// Temperature Sensor Result
        (0x0084 => pub afe_temp_sensor_result: ReadWrite<u32, AFE_TEMP_SENSOR_RESULT::Register>),
        (0x0088 => _reserved2),
        /// Analog Capture Interrupt Enable
        (0x008c => pub afe_analog_capture_ien: ReadWrite<u32, AFE_ANALOG_CAPTURE_IEN::Register>),
        /// Analog Generation Interrupt Enable
        (0x0090 => pub afe_analog_gen_ien: ReadWrite<u32, AFE_ANALOG_GEN_IEN::Register>),
        /// Command FIFO Interrupt Enable
        (0x0094 => pub afe_cmd_fifo_ien: ReadWrite<u32, AFE_CMD_FIFO_IEN::Register>),
        /// Data FIFO Interrupt Enable
        (0x0098 => pub afe_data_fifo_ien: ReadWrite<u32, AFE_DATA_FIFO_IEN::Register>),
        (0x009c => _reserved3),
        /// Analog Capture Interrupt
        (0x00a0 => pub afe_analog_capture_int: ReadWrite<u32, AFE_ANALOG_CAPTURE_INT::Register>),
        /// Analog Generation Interrupt
        (0x00a4 => pub afe_analog_gen_int: ReadWrite<u32, AFE_ANALOG_GEN_INT::Register>),
        /// Command FIFO Interrupt
        (0x00a8 => pub afe_cmd_fifo_int: ReadWrite<u32, AFE_CMD_FIFO_INT::Register>),
        /// Data FIFO Interrupt
        (0x00ac => pub afe_data_fifo_int: ReadWrite<u32, AFE_DATA_FIFO_INT::Register>),
        /// Switch Matrix Status (MSB)
        (0x00b0 => pub afe_sw_status_msb: ReadOnly<u32>),
        /// Switch Matrix Status (LSB)
        (0x00b4 => pub afe_sw_status_lsb: ReadOnly<u32>),
        /// ADC Minimum Value Check
        (0x00b8 => pub afe_adcmin: ReadWrite<u32, AFE_ADCMIN::Register>),
        /// ADC Maximum Value Check
        (0x00bc => pub afe_adcmax: ReadWrite<u32, AFE_ADCMAX::Register>),
        /// ADC Delta Check
        (0x00c0 => pub afe_adcdelta: ReadWrite<u32, AFE_ADCDELTA::Register>),
        (0x00c4 => _reserved4),
        /// Calibration Data Lock
        (0x0100 => pub afe_cal_data_lock: ReadWrite<u32, AFE_CAL_DATA_LOCK::Register>),
        /// ADC Gain (TIA Measurement)
        (0x0104 => pub afe_adc_gain_tia: ReadWrite<u32>),
        /// ADC Offset (TIA Measurement)
        (0x0108 => pub afe_adc_offset_tia: ReadWrite<u32>),
        /// ADC Gain (Temperature Sensor Measurement)
        (0x010c => pub afe_adc_gain_temp_sens: ReadWrite<u32>),
        /// ADC Offset (Temperature Sensor Measurement)
        (0x0110 => pub afe_adc_offset_temp_sens: ReadWrite<u32>),
        (0x0114 => _reserved5),
        /// ADC Gain (Aux Channel Measurement)
        (0x0118 => pub afe_adc_gain_aux: ReadWrite<u32>),
        /// ADC Offset (Aux Channel Measurement)
        (0x011c => pub afe_adc_offset_aux: ReadWrite<u32>),
        /// DAC Offset With Attenuator Disabled
        (0x0120 => pub afe_dac_offset_unity: ReadWrite<u32>),
        /// DAC Offset With Attenuator Enabled
        (0x0124 => pub afe_dac_offset_atten: ReadWrite<u32>),
        /// DAC Gain
        (0x0128 => pub afe_dac_gain: ReadWrite<u32>),
        /// Precision Reference Trim 0
        (0x012c => pub afe_ref_trim0: ReadWrite<u32>),
        /// Precision Reference Trim 1
        (0x0130 => pub afe_ref_trim1: ReadWrite<u32>),
        /// Analog LDO Trim
        (0x0134 => pub afe_aldo_trim: ReadWrite<u32>),
        /// DAC Trim
        (0x0138 => pub afe_dac_trim: ReadWrite<u32>),
        /// INAMP Trim
        (0x013c => pub afe_inamp_trim: ReadWrite<u32>),
        /// Excitation Buffer Trim
        (0x0140 => pub afe_exbuf_trim: ReadWrite<u32>),
        /// Temperature Sensor Trim
        (0x0144 => pub afe_temp_sens_trim: ReadWrite<u32>),
        (0x0148 => @END),
    }
}

register_bitfields![u32,
    pub AFE_CFG [
        ALDO_EN OFFSET(4) NUMBITS(1) [],
        REF_EN OFFSET(5) NUMBITS(1) [],
        DAC_EN OFFSET(6) NUMBITS(1) [],
        ADC_EN OFFSET(7) NUMBITS(1) [],
        ADC_CONV_EN OFFSET(8) NUMBITS(1) [],
        BUF_EN OFFSET(9) NUMBITS(1) [],
        INAMP_EN OFFSET(10) NUMBITS(1) [],
        TIA_EN OFFSET(11) NUMBITS(1) [],
        TEMP_SENSOR_EN OFFSET(12) NUMBITS(1) [],
        TEMP_CONV_EN OFFSET(13) NUMBITS(1) [],
        WAVEGEN_EN OFFSET(14) NUMBITS(1) [],
        DFT_EN OFFSET(15) NUMBITS(1) [],
        SUPPLY_LPF_EN OFFSET(16) NUMBITS(1) [],
        VBIASBUF_EN OFFSET(17) NUMBITS(1) [],
        VREFBUFILIMIT_EN OFFSET(18) NUMBITS(1) [],
        ALDOILIMIT_EN OFFSET(19) NUMBITS(1) [],
    ],
    pub AFE_SEQ_CFG [
        SEQ_EN OFFSET(0) NUMBITS(1) [],
    ],
    pub AFE_FIFO_CFG [
        CMD_FIFO_EN OFFSET(3) NUMBITS(1) [],
        DATA_FIFO_EN OFFSET(4) NUMBITS(1) [],
        CMD_FIFO_DMA_REQ_EN OFFSET(11) NUMBITS(1) [],
        DATA_FIFO_DMA_REQ_EN OFFSET(12) NUMBITS(1) [],
        DATA_FIFO_SOURCE_SEL OFFSET(13) NUMBITS(2) [
            ADC = 0,
            DFT = 1,
            LPF = 2,
            TEMP = 3,
        ],
    ],
    pub AFE_SW_CFG [
        DMUX_STATE OFFSET(0) NUMBITS(4) [],
        PMUX_STATE OFFSET(4) NUMBITS(4) [],
        NMUX_STATE OFFSET(8) NUMBITS(4) [],
        TMUX_STATE OFFSET(12) NUMBITS(4) [],
    ],
    pub AFE_DAC_CFG [
        DAC_ATTEN_EN OFFSET(0) NUMBITS(1) [],
    ],
    pub AFE_WG_CFG [
        TYPE_SEL OFFSET(1) NUMBITS(2) [
            DIRECT = 0,
            SINE = 2,
            TRAPEZOID = 3,
        ],
    ],
    pub AFE_WG_DCLEVEL_1 [
        TRAP_DC_LEVEL_1 OFFSET(0) NUMBITS(12) [],
    ],
    pub AFE_WG_DCLEVEL_2 [
        TRAP_DC_LEVEL_2 OFFSET(0) NUMBITS(12) [],
    ],
    pub AFE_WG_DELAY_1 [
        TRAP_DELAY_1 OFFSET(0) NUMBITS(20) [],
    ],
    pub AFE_WG_SLOPE_1 [
        TRAP_SLOPE_1 OFFSET(0) NUMBITS(20) [],
    ],
    pub AFE_WG_DELAY_2 [
        TRAP_DELAY_2 OFFSET(0) NUMBITS(20) [],
    ],
    pub AFE_WG_SLOPE_2 [
        TRAP_SLOPE_2 OFFSET(0) NUMBITS(20) [],
    ],
    pub AFE_WG_FCW [
        SINE_FCW OFFSET(0) NUMBITS(20) [],
    ],
    pub AFE_WG_PHASE [
        SINE_OFFSET OFFSET(0) NUMBITS(20) [],
    ],
    pub AFE_WG_OFFSET [
        SINE_OFFSET OFFSET(0) NUMBITS(12) [],
    ],
    pub AFE_WG_AMPLITUDE [
        SINE_AMPLITUDE OFFSET(0) NUMBITS(11) [],
    ],
    pub AFE_ADC_CFG [
        MUX_SEL OFFSET(0) NUMBITS(5) [],
        GAIN_OFFS_SEL OFFSET(5) NUMBITS(2) [],
        ANEXCITESW_EN OFFSET(7) NUMBITS(1) [],
    ],
    pub AFE_SUPPLY_LPF_CFG [
        BYPASS_SUPPLY_LPF OFFSET(0) NUMBITS(1) [],
    ],
    pub AFE_WG_DAC_CODE [
        DAC_CODE OFFSET(0) NUMBITS(12) [],
    ],
    pub AFE_STATUS [
        TEMP_SENSOR_READY OFFSET(0) NUMBITS(1) [],
        ADC_READY OFFSET(1) NUMBITS(1) [],
    ],
    pub AFE_SEQ_COUNT [
        COUNT OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_SEQ_TIMEOUT [
        TIMEOUT OFFSET(0) NUMBITS(30) [],
    ],
    pub AFE_ADC_RESULT [
        ADC_RESULT OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_DFT_RESULT_REAL [
        DFT_RESULT_REAL OFFSET(0) NUMBITS(32) [],
    ],
    pub AFE_DFT_RESULT_IMAG [
        DFT_RESULT_IMAG OFFSET(0) NUMBITS(32) [],
    ],
    pub AFE_SUPPLY_LPF_RESULT [
        SUPPLY_LPF_RESULT OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_TEMP_SENSOR_RESULT [
        TEMP_SENSOR_RESULT OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_ANALOG_CAPTURE_IEN [
        ADC_RESULT_READY_IEN OFFSET(0) NUMBITS(1) [],
        DFT_RESULT_READY_IEN OFFSET(1) NUMBITS(1) [],
        SUPPLY_LPF_RESULT_READY_IEN OFFSET(2) NUMBITS(1) [],
        TEMP_RESULT_READY_IEN OFFSET(3) NUMBITS(1) [],
        ADC_MIN_FAIL_IEN OFFSET(4) NUMBITS(1) [],
        ADC_MAX_FAIL_IEN OFFSET(5) NUMBITS(1) [],
        ADC_DELTA_FAIL_IEN OFFSET(6) NUMBITS(1) [],
    ],
    pub AFE_ANALOG_GEN_IEN [
        DELAY_COMMAND_DONE_IEN OFFSET(0) NUMBITS(1) [],
        HARDWARE_SETUP_DONE_IEN OFFSET(1) NUMBITS(1) [],
        BREAK_SEQUENCE_ORG_IEN OFFSET(2) NUMBITS(1) [],
        CUSTOM_INT_IEN OFFSET(3) NUMBITS(1) [],
    ],
    pub AFE_CMD_FIFO_IEN [
        END_OF_SEQ_IEN OFFSET(0) NUMBITS(1) [],
        SEQ_TIMEOUT_FINISHED_IEN OFFSET(1) NUMBITS(1) [],
        SEQ_TIMEOUT_ERR_IEN OFFSET(2) NUMBITS(1) [],
        CMD_FIFO_FULL_IEN OFFSET(3) NUMBITS(1) [],
        CMD_FIFO_EMPTY_IEN OFFSET(4) NUMBITS(1) [],
        CMD_FIFO_THR_IEN OFFSET(5) NUMBITS(1) [],
        CMD_FIFO_OVF_IEN OFFSET(6) NUMBITS(1) [],
        CMD_FIFO_UDF_IEN OFFSET(7) NUMBITS(1) [],
    ],
    pub AFE_DATA_FIFO_IEN [
        DATA_FIFO_FULL_IEN OFFSET(0) NUMBITS(1) [],
        DATA_FIFO_EMPTY_IEN OFFSET(1) NUMBITS(1) [],
        DATA_FIFO_THR_IEN OFFSET(2) NUMBITS(1) [],
        DATA_FIFO_OVF_IEN OFFSET(3) NUMBITS(1) [],
        DATA_FIFO_UDF_IEN OFFSET(4) NUMBITS(1) [],
    ],
    pub AFE_ANALOG_CAPTURE_INT [
        ADC_RESULT_READY OFFSET(0) NUMBITS(1) [],
        DFT_RESULT_READY OFFSET(1) NUMBITS(1) [],
        SUPPLY_LPF_RESULT_READY OFFSET(2) NUMBITS(1) [],
        TEMP_RESULT_READY OFFSET(3) NUMBITS(1) [],
        ADC_MIN_FAIL OFFSET(4) NUMBITS(1) [],
        ADC_MAX_FAIL OFFSET(5) NUMBITS(1) [],
        ADC_DELTA_FAIL OFFSET(6) NUMBITS(1) [],
    ],
    pub AFE_ANALOG_GEN_INT [
        DELAY_COMMAND_DONE OFFSET(0) NUMBITS(1) [],
        HARDWARE_SETUP_DONE OFFSET(1) NUMBITS(1) [],
        BREAK_SEQUENCE_ORG OFFSET(2) NUMBITS(1) [],
        CUSTOM_INT OFFSET(3) NUMBITS(1) [],
    ],
    pub AFE_CMD_FIFO_INT [
        END_OF_SEQ OFFSET(0) NUMBITS(1) [],
        SEQ_TIMEOUT_FINISHED OFFSET(1) NUMBITS(1) [],
        SEQ_TIMEOUT_ERR OFFSET(2) NUMBITS(1) [],
        CMD_FIFO_FULL OFFSET(3) NUMBITS(1) [],
        CMD_FIFO_EMPTY OFFSET(4) NUMBITS(1) [],
        CMD_FIFO_THR OFFSET(5) NUMBITS(1) [],
        CMD_FIFO_OVF OFFSET(6) NUMBITS(1) [],
        CMD_FIFO_UDF OFFSET(7) NUMBITS(1) [],
    ],
    pub AFE_DATA_FIFO_INT [
        DATA_FIFO_FULL OFFSET(0) NUMBITS(1) [],
        DATA_FIFO_EMPTY OFFSET(1) NUMBITS(1) [],
        DATA_FIFO_THR OFFSET(2) NUMBITS(1) [],
        DATA_FIFO_OVF OFFSET(3) NUMBITS(1) [],
        DATA_FIFO_UDF OFFSET(4) NUMBITS(1) [],
    ],
    pub AFE_ADCMIN [
        ADCMIN OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_ADCMAX [
        ADCMAX OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_ADCDELTA [
        ADCDELTA OFFSET(0) NUMBITS(16) [],
    ],
    pub AFE_CAL_DATA_LOCK [
        KEY OFFSET(0) NUMBITS(32) [],
    ],
];

pub const AFE_BASE: StaticRef<AfeRegisters> =
    unsafe { StaticRef::new(0x4008_0000 as *const AfeRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::*;
    use core::mem::offset_of;

    #[test]
    fn fields_match_constants() {
        assert_eq!(AFE_CFG::ALDO_EN.mask << AFE_CFG::ALDO_EN.shift, BITM_AFE_AFE_CFG_ALDO_EN);
        assert_eq!(AFE_CFG::ALDO_EN.shift as u32, BITP_AFE_AFE_CFG_ALDO_EN);
        assert_eq!(AFE_CFG::REF_EN.mask << AFE_CFG::REF_EN.shift, BITM_AFE_AFE_CFG_REF_EN);
        assert_eq!(AFE_CFG::REF_EN.shift as u32, BITP_AFE_AFE_CFG_REF_EN);
        assert_eq!(AFE_CFG::DAC_EN.mask << AFE_CFG::DAC_EN.shift, BITM_AFE_AFE_CFG_DAC_EN);
        assert_eq!(AFE_CFG::DAC_EN.shift as u32, BITP_AFE_AFE_CFG_DAC_EN);
        assert_eq!(AFE_CFG::ADC_EN.mask << AFE_CFG::ADC_EN.shift, BITM_AFE_AFE_CFG_ADC_EN);
        assert_eq!(AFE_CFG::ADC_EN.shift as u32, BITP_AFE_AFE_CFG_ADC_EN);
        assert_eq!(AFE_CFG::ADC_CONV_EN.mask << AFE_CFG::ADC_CONV_EN.shift, BITM_AFE_AFE_CFG_ADC_CONV_EN);
        assert_eq!(AFE_CFG::ADC_CONV_EN.shift as u32, BITP_AFE_AFE_CFG_ADC_CONV_EN);
        assert_eq!(AFE_CFG::BUF_EN.mask << AFE_CFG::BUF_EN.shift, BITM_AFE_AFE_CFG_BUF_EN);
        assert_eq!(AFE_CFG::BUF_EN.shift as u32, BITP_AFE_AFE_CFG_BUF_EN);
        assert_eq!(AFE_CFG::INAMP_EN.mask << AFE_CFG::INAMP_EN.shift, BITM_AFE_AFE_CFG_INAMP_EN);
        assert_eq!(AFE_CFG::INAMP_EN.shift as u32, BITP_AFE_AFE_CFG_INAMP_EN);
        assert_eq!(AFE_CFG::TIA_EN.mask << AFE_CFG::TIA_EN.shift, BITM_AFE_AFE_CFG_TIA_EN);
        assert_eq!(AFE_CFG::TIA_EN.shift as u32, BITP_AFE_AFE_CFG_TIA_EN);
        assert_eq!(AFE_CFG::TEMP_SENSOR_EN.mask << AFE_CFG::TEMP_SENSOR_EN.shift, BITM_AFE_AFE_CFG_TEMP_SENSOR_EN);
        assert_eq!(AFE_CFG::TEMP_SENSOR_EN.shift as u32, BITP_AFE_AFE_CFG_TEMP_SENSOR_EN);
        assert_eq!(AFE_CFG::TEMP_CONV_EN.mask << AFE_CFG::TEMP_CONV_EN.shift, BITM_AFE_AFE_CFG_TEMP_CONV_EN);
        assert_eq!(AFE_CFG::TEMP_CONV_EN.shift as u32, BITP_AFE_AFE_CFG_TEMP_CONV_EN);
        assert_eq!(AFE_CFG::WAVEGEN_EN.mask << AFE_CFG::WAVEGEN_EN.shift, BITM_AFE_AFE_CFG_WAVEGEN_EN);
        assert_eq!(AFE_CFG::WAVEGEN_EN.shift as u32, BITP_AFE_AFE_CFG_WAVEGEN_EN);
        assert_eq!(AFE_CFG::DFT_EN.mask << AFE_CFG::DFT_EN.shift, BITM_AFE_AFE_CFG_DFT_EN);
        assert_eq!(AFE_CFG::DFT_EN.shift as u32, BITP_AFE_AFE_CFG_DFT_EN);
        assert_eq!(AFE_CFG::SUPPLY_LPF_EN.mask << AFE_CFG::SUPPLY_LPF_EN.shift, BITM_AFE_AFE_CFG_SUPPLY_LPF_EN);
        assert_eq!(AFE_CFG::SUPPLY_LPF_EN.shift as u32, BITP_AFE_AFE_CFG_SUPPLY_LPF_EN);
        assert_eq!(AFE_CFG::VBIASBUF_EN.mask << AFE_CFG::VBIASBUF_EN.shift, BITM_AFE_AFE_CFG_VBIASBUF_EN);
        assert_eq!(AFE_CFG::VBIASBUF_EN.shift as u32, BITP_AFE_AFE_CFG_VBIASBUF_EN);
        assert_eq!(AFE_CFG::VREFBUFILIMIT_EN.mask << AFE_CFG::VREFBUFILIMIT_EN.shift, BITM_AFE_AFE_CFG_VREFBUFILIMIT_EN);
        assert_eq!(AFE_CFG::VREFBUFILIMIT_EN.shift as u32, BITP_AFE_AFE_CFG_VREFBUFILIMIT_EN);
        assert_eq!(AFE_CFG::ALDOILIMIT_EN.mask << AFE_CFG::ALDOILIMIT_EN.shift, BITM_AFE_AFE_CFG_ALDOILIMIT_EN);
        assert_eq!(AFE_CFG::ALDOILIMIT_EN.shift as u32, BITP_AFE_AFE_CFG_ALDOILIMIT_EN);
        assert_eq!(AFE_SEQ_CFG::SEQ_EN.mask << AFE_SEQ_CFG::SEQ_EN.shift, BITM_AFE_AFE_SEQ_CFG_SEQ_EN);
        assert_eq!(AFE_SEQ_CFG::SEQ_EN.shift as u32, BITP_AFE_AFE_SEQ_CFG_SEQ_EN);
        assert_eq!(AFE_FIFO_CFG::CMD_FIFO_EN.mask << AFE_FIFO_CFG::CMD_FIFO_EN.shift, BITM_AFE_AFE_FIFO_CFG_CMD_FIFO_EN);
        assert_eq!(AFE_FIFO_CFG::CMD_FIFO_EN.shift as u32, BITP_AFE_AFE_FIFO_CFG_CMD_FIFO_EN);
        assert_eq!(AFE_FIFO_CFG::DATA_FIFO_EN.mask << AFE_FIFO_CFG::DATA_FIFO_EN.shift, BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_EN);
        assert_eq!(AFE_FIFO_CFG::DATA_FIFO_EN.shift as u32, BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_EN);
        assert_eq!(AFE_FIFO_CFG::CMD_FIFO_DMA_REQ_EN.mask << AFE_FIFO_CFG::CMD_FIFO_DMA_REQ_EN.shift, BITM_AFE_AFE_FIFO_CFG_CMD_FIFO_DMA_REQ_EN);
        assert_eq!(AFE_FIFO_CFG::CMD_FIFO_DMA_REQ_EN.shift as u32, BITP_AFE_AFE_FIFO_CFG_CMD_FIFO_DMA_REQ_EN);
        assert_eq!(AFE_FIFO_CFG::DATA_FIFO_DMA_REQ_EN.mask << AFE_FIFO_CFG::DATA_FIFO_DMA_REQ_EN.shift, BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_DMA_REQ_EN);
        assert_eq!(AFE_FIFO_CFG::DATA_FIFO_DMA_REQ_EN.shift as u32, BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_DMA_REQ_EN);
        assert_eq!(AFE_FIFO_CFG::DATA_FIFO_SOURCE_SEL.mask << AFE_FIFO_CFG::DATA_FIFO_SOURCE_SEL.shift, BITM_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL);
        assert_eq!(AFE_FIFO_CFG::DATA_FIFO_SOURCE_SEL.shift as u32, BITP_AFE_AFE_FIFO_CFG_DATA_FIFO_SOURCE_SEL);
        assert_eq!(AFE_SW_CFG::DMUX_STATE.mask << AFE_SW_CFG::DMUX_STATE.shift, BITM_AFE_AFE_SW_CFG_DMUX_STATE);
        assert_eq!(AFE_SW_CFG::DMUX_STATE.shift as u32, BITP_AFE_AFE_SW_CFG_DMUX_STATE);
        assert_eq!(AFE_SW_CFG::PMUX_STATE.mask << AFE_SW_CFG::PMUX_STATE.shift, BITM_AFE_AFE_SW_CFG_PMUX_STATE);
        assert_eq!(AFE_SW_CFG::PMUX_STATE.shift as u32, BITP_AFE_AFE_SW_CFG_PMUX_STATE);
        assert_eq!(AFE_SW_CFG::NMUX_STATE.mask << AFE_SW_CFG::NMUX_STATE.shift, BITM_AFE_AFE_SW_CFG_NMUX_STATE);
        assert_eq!(AFE_SW_CFG::NMUX_STATE.shift as u32, BITP_AFE_AFE_SW_CFG_NMUX_STATE);
        assert_eq!(AFE_SW_CFG::TMUX_STATE.mask << AFE_SW_CFG::TMUX_STATE.shift, BITM_AFE_AFE_SW_CFG_TMUX_STATE);
        assert_eq!(AFE_SW_CFG::TMUX_STATE.shift as u32, BITP_AFE_AFE_SW_CFG_TMUX_STATE);
        assert_eq!(AFE_DAC_CFG::DAC_ATTEN_EN.mask << AFE_DAC_CFG::DAC_ATTEN_EN.shift, BITM_AFE_AFE_DAC_CFG_DAC_ATTEN_EN);
        assert_eq!(AFE_DAC_CFG::DAC_ATTEN_EN.shift as u32, BITP_AFE_AFE_DAC_CFG_DAC_ATTEN_EN);
        assert_eq!(AFE_WG_CFG::TYPE_SEL.mask << AFE_WG_CFG::TYPE_SEL.shift, BITM_AFE_AFE_WG_CFG_TYPE_SEL);
        assert_eq!(AFE_WG_CFG::TYPE_SEL.shift as u32, BITP_AFE_AFE_WG_CFG_TYPE_SEL);
        assert_eq!(AFE_WG_DCLEVEL_1::TRAP_DC_LEVEL_1.mask << AFE_WG_DCLEVEL_1::TRAP_DC_LEVEL_1.shift, BITM_AFE_AFE_WG_DCLEVEL_1_TRAP_DC_LEVEL_1);
        assert_eq!(AFE_WG_DCLEVEL_1::TRAP_DC_LEVEL_1.shift as u32, BITP_AFE_AFE_WG_DCLEVEL_1_TRAP_DC_LEVEL_1);
        assert_eq!(AFE_WG_DCLEVEL_2::TRAP_DC_LEVEL_2.mask << AFE_WG_DCLEVEL_2::TRAP_DC_LEVEL_2.shift, BITM_AFE_AFE_WG_DCLEVEL_2_TRAP_DC_LEVEL_2);
        assert_eq!(AFE_WG_DCLEVEL_2::TRAP_DC_LEVEL_2.shift as u32, BITP_AFE_AFE_WG_DCLEVEL_2_TRAP_DC_LEVEL_2);
        assert_eq!(AFE_WG_DELAY_1::TRAP_DELAY_1.mask << AFE_WG_DELAY_1::TRAP_DELAY_1.shift, BITM_AFE_AFE_WG_DELAY_1_TRAP_DELAY_1);
        assert_eq!(AFE_WG_DELAY_1::TRAP_DELAY_1.shift as u32, BITP_AFE_AFE_WG_DELAY_1_TRAP_DELAY_1);
        assert_eq!(AFE_WG_SLOPE_1::TRAP_SLOPE_1.mask << AFE_WG_SLOPE_1::TRAP_SLOPE_1.shift, BITM_AFE_AFE_WG_SLOPE_1_TRAP_SLOPE_1);
        assert_eq!(AFE_WG_SLOPE_1::TRAP_SLOPE_1.shift as u32, BITP_AFE_AFE_WG_SLOPE_1_TRAP_SLOPE_1);
        assert_eq!(AFE_WG_DELAY_2::TRAP_DELAY_2.mask << AFE_WG_DELAY_2::TRAP_DELAY_2.shift, BITM_AFE_AFE_WG_DELAY_2_TRAP_DELAY_2);
        assert_eq!(AFE_WG_DELAY_2::TRAP_DELAY_2.shift as u32, BITP_AFE_AFE_WG_DELAY_2_TRAP_DELAY_2);
        assert_eq!(AFE_WG_SLOPE_2::TRAP_SLOPE_2.mask << AFE_WG_SLOPE_2::TRAP_SLOPE_2.shift, BITM_AFE_AFE_WG_SLOPE_2_TRAP_SLOPE_2);
        assert_eq!(AFE_WG_SLOPE_2::TRAP_SLOPE_2.shift as u32, BITP_AFE_AFE_WG_SLOPE_2_TRAP_SLOPE_2);
        assert_eq!(AFE_WG_FCW::SINE_FCW.mask << AFE_WG_FCW::SINE_FCW.shift, BITM_AFE_AFE_WG_FCW_SINE_FCW);
        assert_eq!(AFE_WG_FCW::SINE_FCW.shift as u32, BITP_AFE_AFE_WG_FCW_SINE_FCW);
        assert_eq!(AFE_WG_PHASE::SINE_OFFSET.mask << AFE_WG_PHASE::SINE_OFFSET.shift, BITM_AFE_AFE_WG_PHASE_SINE_OFFSET);
        assert_eq!(AFE_WG_PHASE::SINE_OFFSET.shift as u32, BITP_AFE_AFE_WG_PHASE_SINE_OFFSET);
        assert_eq!(AFE_WG_OFFSET::SINE_OFFSET.mask << AFE_WG_OFFSET::SINE_OFFSET.shift, BITM_AFE_AFE_WG_OFFSET_SINE_OFFSET);
        assert_eq!(AFE_WG_OFFSET::SINE_OFFSET.shift as u32, BITP_AFE_AFE_WG_OFFSET_SINE_OFFSET);
        assert_eq!(AFE_WG_AMPLITUDE::SINE_AMPLITUDE.mask << AFE_WG_AMPLITUDE::SINE_AMPLITUDE.shift, BITM_AFE_AFE_WG_AMPLITUDE_SINE_AMPLITUDE);
        assert_eq!(AFE_WG_AMPLITUDE::SINE_AMPLITUDE.shift as u32, BITP_AFE_AFE_WG_AMPLITUDE_SINE_AMPLITUDE);
        assert_eq!(AFE_ADC_CFG::MUX_SEL.mask << AFE_ADC_CFG::MUX_SEL.shift, BITM_AFE_AFE_ADC_CFG_MUX_SEL);
        assert_eq!(AFE_ADC_CFG::MUX_SEL.shift as u32, BITP_AFE_AFE_ADC_CFG_MUX_SEL);
        assert_eq!(AFE_ADC_CFG::GAIN_OFFS_SEL.mask << AFE_ADC_CFG::GAIN_OFFS_SEL.shift, BITM_AFE_AFE_ADC_CFG_GAIN_OFFS_SEL);
        assert_eq!(AFE_ADC_CFG::GAIN_OFFS_SEL.shift as u32, BITP_AFE_AFE_ADC_CFG_GAIN_OFFS_SEL);
        assert_eq!(AFE_ADC_CFG::ANEXCITESW_EN.mask << AFE_ADC_CFG::ANEXCITESW_EN.shift, BITM_AFE_AFE_ADC_CFG_ANEXCITESW_EN);
        assert_eq!(AFE_ADC_CFG::ANEXCITESW_EN.shift as u32, BITP_AFE_AFE_ADC_CFG_ANEXCITESW_EN);
        assert_eq!(AFE_SUPPLY_LPF_CFG::BYPASS_SUPPLY_LPF.mask << AFE_SUPPLY_LPF_CFG::BYPASS_SUPPLY_LPF.shift, BITM_AFE_AFE_SUPPLY_LPF_CFG_BYPASS_SUPPLY_LPF);
        assert_eq!(AFE_SUPPLY_LPF_CFG::BYPASS_SUPPLY_LPF.shift as u32, BITP_AFE_AFE_SUPPLY_LPF_CFG_BYPASS_SUPPLY_LPF);
        assert_eq!(AFE_WG_DAC_CODE::DAC_CODE.mask << AFE_WG_DAC_CODE::DAC_CODE.shift, BITM_AFE_AFE_WG_DAC_CODE_DAC_CODE);
        assert_eq!(AFE_WG_DAC_CODE::DAC_CODE.shift as u32, BITP_AFE_AFE_WG_DAC_CODE_DAC_CODE);
        assert_eq!(AFE_STATUS::TEMP_SENSOR_READY.mask << AFE_STATUS::TEMP_SENSOR_READY.shift, BITM_AFE_AFE_STATUS_TEMP_SENSOR_READY);
        assert_eq!(AFE_STATUS::TEMP_SENSOR_READY.shift as u32, BITP_AFE_AFE_STATUS_TEMP_SENSOR_READY);
        assert_eq!(AFE_STATUS::ADC_READY.mask << AFE_STATUS::ADC_READY.shift, BITM_AFE_AFE_STATUS_ADC_READY);
        assert_eq!(AFE_STATUS::ADC_READY.shift as u32, BITP_AFE_AFE_STATUS_ADC_READY);
        assert_eq!(AFE_SEQ_COUNT::COUNT.mask << AFE_SEQ_COUNT::COUNT.shift, BITM_AFE_AFE_SEQ_COUNT_COUNT);
        assert_eq!(AFE_SEQ_COUNT::COUNT.shift as u32, BITP_AFE_AFE_SEQ_COUNT_COUNT);
        assert_eq!(AFE_SEQ_TIMEOUT::TIMEOUT.mask << AFE_SEQ_TIMEOUT::TIMEOUT.shift, BITM_AFE_AFE_SEQ_TIMEOUT_TIMEOUT);
        assert_eq!(AFE_SEQ_TIMEOUT::TIMEOUT.shift as u32, BITP_AFE_AFE_SEQ_TIMEOUT_TIMEOUT);
        assert_eq!(AFE_ADC_RESULT::ADC_RESULT.mask << AFE_ADC_RESULT::ADC_RESULT.shift, BITM_AFE_AFE_ADC_RESULT_ADC_RESULT);
        assert_eq!(AFE_ADC_RESULT::ADC_RESULT.shift as u32, BITP_AFE_AFE_ADC_RESULT_ADC_RESULT);
        assert_eq!(AFE_DFT_RESULT_REAL::DFT_RESULT_REAL.mask << AFE_DFT_RESULT_REAL::DFT_RESULT_REAL.shift, BITM_AFE_AFE_DFT_RESULT_REAL_DFT_RESULT_REAL);
        assert_eq!(AFE_DFT_RESULT_REAL::DFT_RESULT_REAL.shift as u32, BITP_AFE_AFE_DFT_RESULT_REAL_DFT_RESULT_REAL);
        assert_eq!(AFE_DFT_RESULT_IMAG::DFT_RESULT_IMAG.mask << AFE_DFT_RESULT_IMAG::DFT_RESULT_IMAG.shift, BITM_AFE_AFE_DFT_RESULT_IMAG_DFT_RESULT_IMAG);
        assert_eq!(AFE_DFT_RESULT_IMAG::DFT_RESULT_IMAG.shift as u32, BITP_AFE_AFE_DFT_RESULT_IMAG_DFT_RESULT_IMAG);
        assert_eq!(AFE_SUPPLY_LPF_RESULT::SUPPLY_LPF_RESULT.mask << AFE_SUPPLY_LPF_RESULT::SUPPLY_LPF_RESULT.shift, BITM_AFE_AFE_SUPPLY_LPF_RESULT_SUPPLY_LPF_RESULT);
        assert_eq!(AFE_SUPPLY_LPF_RESULT::SUPPLY_LPF_RESULT.shift as u32, BITP_AFE_AFE_SUPPLY_LPF_RESULT_SUPPLY_LPF_RESULT);
        assert_eq!(AFE_TEMP_SENSOR_RESULT::TEMP_SENSOR_RESULT.mask << AFE_TEMP_SENSOR_RESULT::TEMP_SENSOR_RESULT.shift, BITM_AFE_AFE_TEMP_SENSOR_RESULT_TEMP_SENSOR_RESULT);
        assert_eq!(AFE_TEMP_SENSOR_RESULT::TEMP_SENSOR_RESULT.shift as u32, BITP_AFE_AFE_TEMP_SENSOR_RESULT_TEMP_SENSOR_RESULT);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_RESULT_READY_IEN.mask << AFE_ANALOG_CAPTURE_IEN::ADC_RESULT_READY_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_RESULT_READY_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::DFT_RESULT_READY_IEN.mask << AFE_ANALOG_CAPTURE_IEN::DFT_RESULT_READY_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_DFT_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::DFT_RESULT_READY_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_DFT_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::SUPPLY_LPF_RESULT_READY_IEN.mask << AFE_ANALOG_CAPTURE_IEN::SUPPLY_LPF_RESULT_READY_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_SUPPLY_LPF_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::SUPPLY_LPF_RESULT_READY_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_SUPPLY_LPF_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::TEMP_RESULT_READY_IEN.mask << AFE_ANALOG_CAPTURE_IEN::TEMP_RESULT_READY_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_TEMP_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::TEMP_RESULT_READY_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_TEMP_RESULT_READY_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_MIN_FAIL_IEN.mask << AFE_ANALOG_CAPTURE_IEN::ADC_MIN_FAIL_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MIN_FAIL_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_MIN_FAIL_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MIN_FAIL_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_MAX_FAIL_IEN.mask << AFE_ANALOG_CAPTURE_IEN::ADC_MAX_FAIL_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MAX_FAIL_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_MAX_FAIL_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_MAX_FAIL_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_DELTA_FAIL_IEN.mask << AFE_ANALOG_CAPTURE_IEN::ADC_DELTA_FAIL_IEN.shift, BITM_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_DELTA_FAIL_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_IEN::ADC_DELTA_FAIL_IEN.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_IEN_ADC_DELTA_FAIL_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::DELAY_COMMAND_DONE_IEN.mask << AFE_ANALOG_GEN_IEN::DELAY_COMMAND_DONE_IEN.shift, BITM_AFE_AFE_ANALOG_GEN_IEN_DELAY_COMMAND_DONE_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::DELAY_COMMAND_DONE_IEN.shift as u32, BITP_AFE_AFE_ANALOG_GEN_IEN_DELAY_COMMAND_DONE_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::HARDWARE_SETUP_DONE_IEN.mask << AFE_ANALOG_GEN_IEN::HARDWARE_SETUP_DONE_IEN.shift, BITM_AFE_AFE_ANALOG_GEN_IEN_HARDWARE_SETUP_DONE_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::HARDWARE_SETUP_DONE_IEN.shift as u32, BITP_AFE_AFE_ANALOG_GEN_IEN_HARDWARE_SETUP_DONE_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::BREAK_SEQUENCE_ORG_IEN.mask << AFE_ANALOG_GEN_IEN::BREAK_SEQUENCE_ORG_IEN.shift, BITM_AFE_AFE_ANALOG_GEN_IEN_BREAK_SEQUENCE_ORG_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::BREAK_SEQUENCE_ORG_IEN.shift as u32, BITP_AFE_AFE_ANALOG_GEN_IEN_BREAK_SEQUENCE_ORG_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::CUSTOM_INT_IEN.mask << AFE_ANALOG_GEN_IEN::CUSTOM_INT_IEN.shift, BITM_AFE_AFE_ANALOG_GEN_IEN_CUSTOM_INT_IEN);
        assert_eq!(AFE_ANALOG_GEN_IEN::CUSTOM_INT_IEN.shift as u32, BITP_AFE_AFE_ANALOG_GEN_IEN_CUSTOM_INT_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::END_OF_SEQ_IEN.mask << AFE_CMD_FIFO_IEN::END_OF_SEQ_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_END_OF_SEQ_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::END_OF_SEQ_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_END_OF_SEQ_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::SEQ_TIMEOUT_FINISHED_IEN.mask << AFE_CMD_FIFO_IEN::SEQ_TIMEOUT_FINISHED_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_FINISHED_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::SEQ_TIMEOUT_FINISHED_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_FINISHED_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::SEQ_TIMEOUT_ERR_IEN.mask << AFE_CMD_FIFO_IEN::SEQ_TIMEOUT_ERR_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_ERR_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::SEQ_TIMEOUT_ERR_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_SEQ_TIMEOUT_ERR_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_FULL_IEN.mask << AFE_CMD_FIFO_IEN::CMD_FIFO_FULL_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_FULL_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_FULL_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_FULL_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_EMPTY_IEN.mask << AFE_CMD_FIFO_IEN::CMD_FIFO_EMPTY_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_EMPTY_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_EMPTY_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_EMPTY_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_THR_IEN.mask << AFE_CMD_FIFO_IEN::CMD_FIFO_THR_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_THR_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_THR_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_THR_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_OVF_IEN.mask << AFE_CMD_FIFO_IEN::CMD_FIFO_OVF_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_OVF_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_OVF_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_OVF_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_UDF_IEN.mask << AFE_CMD_FIFO_IEN::CMD_FIFO_UDF_IEN.shift, BITM_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_UDF_IEN);
        assert_eq!(AFE_CMD_FIFO_IEN::CMD_FIFO_UDF_IEN.shift as u32, BITP_AFE_AFE_CMD_FIFO_IEN_CMD_FIFO_UDF_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_FULL_IEN.mask << AFE_DATA_FIFO_IEN::DATA_FIFO_FULL_IEN.shift, BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_FULL_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_FULL_IEN.shift as u32, BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_FULL_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_EMPTY_IEN.mask << AFE_DATA_FIFO_IEN::DATA_FIFO_EMPTY_IEN.shift, BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_EMPTY_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_EMPTY_IEN.shift as u32, BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_EMPTY_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_THR_IEN.mask << AFE_DATA_FIFO_IEN::DATA_FIFO_THR_IEN.shift, BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_THR_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_THR_IEN.shift as u32, BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_THR_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_OVF_IEN.mask << AFE_DATA_FIFO_IEN::DATA_FIFO_OVF_IEN.shift, BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_OVF_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_OVF_IEN.shift as u32, BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_OVF_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_UDF_IEN.mask << AFE_DATA_FIFO_IEN::DATA_FIFO_UDF_IEN.shift, BITM_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_UDF_IEN);
        assert_eq!(AFE_DATA_FIFO_IEN::DATA_FIFO_UDF_IEN.shift as u32, BITP_AFE_AFE_DATA_FIFO_IEN_DATA_FIFO_UDF_IEN);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_RESULT_READY.mask << AFE_ANALOG_CAPTURE_INT::ADC_RESULT_READY.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_RESULT_READY.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::DFT_RESULT_READY.mask << AFE_ANALOG_CAPTURE_INT::DFT_RESULT_READY.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_DFT_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::DFT_RESULT_READY.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_DFT_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::SUPPLY_LPF_RESULT_READY.mask << AFE_ANALOG_CAPTURE_INT::SUPPLY_LPF_RESULT_READY.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_SUPPLY_LPF_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::SUPPLY_LPF_RESULT_READY.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_SUPPLY_LPF_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::TEMP_RESULT_READY.mask << AFE_ANALOG_CAPTURE_INT::TEMP_RESULT_READY.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_TEMP_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::TEMP_RESULT_READY.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_TEMP_RESULT_READY);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_MIN_FAIL.mask << AFE_ANALOG_CAPTURE_INT::ADC_MIN_FAIL.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MIN_FAIL);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_MIN_FAIL.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MIN_FAIL);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_MAX_FAIL.mask << AFE_ANALOG_CAPTURE_INT::ADC_MAX_FAIL.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MAX_FAIL);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_MAX_FAIL.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_MAX_FAIL);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_DELTA_FAIL.mask << AFE_ANALOG_CAPTURE_INT::ADC_DELTA_FAIL.shift, BITM_AFE_AFE_ANALOG_CAPTURE_INT_ADC_DELTA_FAIL);
        assert_eq!(AFE_ANALOG_CAPTURE_INT::ADC_DELTA_FAIL.shift as u32, BITP_AFE_AFE_ANALOG_CAPTURE_INT_ADC_DELTA_FAIL);
        assert_eq!(AFE_ANALOG_GEN_INT::DELAY_COMMAND_DONE.mask << AFE_ANALOG_GEN_INT::DELAY_COMMAND_DONE.shift, BITM_AFE_AFE_ANALOG_GEN_INT_DELAY_COMMAND_DONE);
        assert_eq!(AFE_ANALOG_GEN_INT::DELAY_COMMAND_DONE.shift as u32, BITP_AFE_AFE_ANALOG_GEN_INT_DELAY_COMMAND_DONE);
        assert_eq!(AFE_ANALOG_GEN_INT::HARDWARE_SETUP_DONE.mask << AFE_ANALOG_GEN_INT::HARDWARE_SETUP_DONE.shift, BITM_AFE_AFE_ANALOG_GEN_INT_HARDWARE_SETUP_DONE);
        assert_eq!(AFE_ANALOG_GEN_INT::HARDWARE_SETUP_DONE.shift as u32, BITP_AFE_AFE_ANALOG_GEN_INT_HARDWARE_SETUP_DONE);
        assert_eq!(AFE_ANALOG_GEN_INT::BREAK_SEQUENCE_ORG.mask << AFE_ANALOG_GEN_INT::BREAK_SEQUENCE_ORG.shift, BITM_AFE_AFE_ANALOG_GEN_INT_BREAK_SEQUENCE_ORG);
        assert_eq!(AFE_ANALOG_GEN_INT::BREAK_SEQUENCE_ORG.shift as u32, BITP_AFE_AFE_ANALOG_GEN_INT_BREAK_SEQUENCE_ORG);
        assert_eq!(AFE_ANALOG_GEN_INT::CUSTOM_INT.mask << AFE_ANALOG_GEN_INT::CUSTOM_INT.shift, BITM_AFE_AFE_ANALOG_GEN_INT_CUSTOM_INT);
        assert_eq!(AFE_ANALOG_GEN_INT::CUSTOM_INT.shift as u32, BITP_AFE_AFE_ANALOG_GEN_INT_CUSTOM_INT);
        assert_eq!(AFE_CMD_FIFO_INT::END_OF_SEQ.mask << AFE_CMD_FIFO_INT::END_OF_SEQ.shift, BITM_AFE_AFE_CMD_FIFO_INT_END_OF_SEQ);
        assert_eq!(AFE_CMD_FIFO_INT::END_OF_SEQ.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_END_OF_SEQ);
        assert_eq!(AFE_CMD_FIFO_INT::SEQ_TIMEOUT_FINISHED.mask << AFE_CMD_FIFO_INT::SEQ_TIMEOUT_FINISHED.shift, BITM_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_FINISHED);
        assert_eq!(AFE_CMD_FIFO_INT::SEQ_TIMEOUT_FINISHED.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_FINISHED);
        assert_eq!(AFE_CMD_FIFO_INT::SEQ_TIMEOUT_ERR.mask << AFE_CMD_FIFO_INT::SEQ_TIMEOUT_ERR.shift, BITM_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_ERR);
        assert_eq!(AFE_CMD_FIFO_INT::SEQ_TIMEOUT_ERR.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_SEQ_TIMEOUT_ERR);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_FULL.mask << AFE_CMD_FIFO_INT::CMD_FIFO_FULL.shift, BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_FULL);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_FULL.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_FULL);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_EMPTY.mask << AFE_CMD_FIFO_INT::CMD_FIFO_EMPTY.shift, BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_EMPTY);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_EMPTY.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_EMPTY);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_THR.mask << AFE_CMD_FIFO_INT::CMD_FIFO_THR.shift, BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_THR);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_THR.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_THR);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_OVF.mask << AFE_CMD_FIFO_INT::CMD_FIFO_OVF.shift, BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_OVF);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_OVF.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_OVF);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_UDF.mask << AFE_CMD_FIFO_INT::CMD_FIFO_UDF.shift, BITM_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_UDF);
        assert_eq!(AFE_CMD_FIFO_INT::CMD_FIFO_UDF.shift as u32, BITP_AFE_AFE_CMD_FIFO_INT_CMD_FIFO_UDF);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_FULL.mask << AFE_DATA_FIFO_INT::DATA_FIFO_FULL.shift, BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_FULL);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_FULL.shift as u32, BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_FULL);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_EMPTY.mask << AFE_DATA_FIFO_INT::DATA_FIFO_EMPTY.shift, BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_EMPTY);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_EMPTY.shift as u32, BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_EMPTY);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_THR.mask << AFE_DATA_FIFO_INT::DATA_FIFO_THR.shift, BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_THR);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_THR.shift as u32, BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_THR);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_OVF.mask << AFE_DATA_FIFO_INT::DATA_FIFO_OVF.shift, BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_OVF);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_OVF.shift as u32, BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_OVF);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_UDF.mask << AFE_DATA_FIFO_INT::DATA_FIFO_UDF.shift, BITM_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_UDF);
        assert_eq!(AFE_DATA_FIFO_INT::DATA_FIFO_UDF.shift as u32, BITP_AFE_AFE_DATA_FIFO_INT_DATA_FIFO_UDF);
        assert_eq!(AFE_ADCMIN::ADCMIN.mask << AFE_ADCMIN::ADCMIN.shift, BITM_AFE_AFE_ADCMIN_ADCMIN);
        assert_eq!(AFE_ADCMIN::ADCMIN.shift as u32, BITP_AFE_AFE_ADCMIN_ADCMIN);
        assert_eq!(AFE_ADCMAX::ADCMAX.mask << AFE_ADCMAX::ADCMAX.shift, BITM_AFE_AFE_ADCMAX_ADCMAX);
        assert_eq!(AFE_ADCMAX::ADCMAX.shift as u32, BITP_AFE_AFE_ADCMAX_ADCMAX);
        assert_eq!(AFE_ADCDELTA::ADCDELTA.mask << AFE_ADCDELTA::ADCDELTA.shift, BITM_AFE_AFE_ADCDELTA_ADCDELTA);
        assert_eq!(AFE_ADCDELTA::ADCDELTA.shift as u32, BITP_AFE_AFE_ADCDELTA_ADCDELTA);
        assert_eq!(AFE_CAL_DATA_LOCK::KEY.mask << AFE_CAL_DATA_LOCK::KEY.shift, BITM_AFE_AFE_CAL_DATA_LOCK_KEY);
        assert_eq!(AFE_CAL_DATA_LOCK::KEY.shift as u32, BITP_AFE_AFE_CAL_DATA_LOCK_KEY);
    }

    #[test]
    fn registers_match_addresses() {
        let afe = AFE_BASE.address();
        assert_eq!(REG_AFE_AFE_CFG as usize, afe + offset_of!(AfeRegisters, afe_cfg));
        assert_eq!(REG_AFE_AFE_SEQ_CFG as usize, afe + offset_of!(AfeRegisters, afe_seq_cfg));
        assert_eq!(REG_AFE_AFE_FIFO_CFG as usize, afe + offset_of!(AfeRegisters, afe_fifo_cfg));
        assert_eq!(REG_AFE_AFE_SW_CFG as usize, afe + offset_of!(AfeRegisters, afe_sw_cfg));
        assert_eq!(REG_AFE_AFE_DAC_CFG as usize, afe + offset_of!(AfeRegisters, afe_dac_cfg));
        assert_eq!(REG_AFE_AFE_WG_CFG as usize, afe + offset_of!(AfeRegisters, afe_wg_cfg));
        assert_eq!(
            REG_AFE_AFE_WG_DCLEVEL_1 as usize,
            afe + offset_of!(AfeRegisters, afe_wg_dclevel_1)
        );
        assert_eq!(
            REG_AFE_AFE_WG_DCLEVEL_2 as usize,
            afe + offset_of!(AfeRegisters, afe_wg_dclevel_2)
        );
        assert_eq!(REG_AFE_AFE_WG_DELAY_1 as usize, afe + offset_of!(AfeRegisters, afe_wg_delay_1));
        assert_eq!(REG_AFE_AFE_WG_SLOPE_1 as usize, afe + offset_of!(AfeRegisters, afe_wg_slope_1));
        assert_eq!(REG_AFE_AFE_WG_DELAY_2 as usize, afe + offset_of!(AfeRegisters, afe_wg_delay_2));
        assert_eq!(REG_AFE_AFE_WG_SLOPE_2 as usize, afe + offset_of!(AfeRegisters, afe_wg_slope_2));
        assert_eq!(REG_AFE_AFE_WG_FCW as usize, afe + offset_of!(AfeRegisters, afe_wg_fcw));
        assert_eq!(REG_AFE_AFE_WG_PHASE as usize, afe + offset_of!(AfeRegisters, afe_wg_phase));
        assert_eq!(REG_AFE_AFE_WG_OFFSET as usize, afe + offset_of!(AfeRegisters, afe_wg_offset));
        assert_eq!(
            REG_AFE_AFE_WG_AMPLITUDE as usize,
            afe + offset_of!(AfeRegisters, afe_wg_amplitude)
        );
        assert_eq!(REG_AFE_AFE_ADC_CFG as usize, afe + offset_of!(AfeRegisters, afe_adc_cfg));
        assert_eq!(
            REG_AFE_AFE_SUPPLY_LPF_CFG as usize,
            afe + offset_of!(AfeRegisters, afe_supply_lpf_cfg)
        );
        assert_eq!(
            REG_AFE_AFE_SW_FULL_CFG_MSB as usize,
            afe + offset_of!(AfeRegisters, afe_sw_full_cfg_msb)
        );
        assert_eq!(
            REG_AFE_AFE_SW_FULL_CFG_LSB as usize,
            afe + offset_of!(AfeRegisters, afe_sw_full_cfg_lsb)
        );
        assert_eq!(
            REG_AFE_AFE_WG_DAC_CODE as usize,
            afe + offset_of!(AfeRegisters, afe_wg_dac_code)
        );
        assert_eq!(REG_AFE_AFE_STATUS as usize, afe + offset_of!(AfeRegisters, afe_status));
        assert_eq!(REG_AFE_AFE_SEQ_CRC as usize, afe + offset_of!(AfeRegisters, afe_seq_crc));
        assert_eq!(REG_AFE_AFE_SEQ_COUNT as usize, afe + offset_of!(AfeRegisters, afe_seq_count));
        assert_eq!(
            REG_AFE_AFE_SEQ_TIMEOUT as usize,
            afe + offset_of!(AfeRegisters, afe_seq_timeout)
        );
        assert_eq!(
            REG_AFE_AFE_DATA_FIFO_READ as usize,
            afe + offset_of!(AfeRegisters, afe_data_fifo_read)
        );
        assert_eq!(
            REG_AFE_AFE_CMD_FIFO_WRITE as usize,
            afe + offset_of!(AfeRegisters, afe_cmd_fifo_write)
        );
        assert_eq!(REG_AFE_AFE_ADC_RESULT as usize, afe + offset_of!(AfeRegisters, afe_adc_result));
        assert_eq!(
            REG_AFE_AFE_DFT_RESULT_REAL as usize,
            afe + offset_of!(AfeRegisters, afe_dft_result_real)
        );
        assert_eq!(
            REG_AFE_AFE_DFT_RESULT_IMAG as usize,
            afe + offset_of!(AfeRegisters, afe_dft_result_imag)
        );
        assert_eq!(
            REG_AFE_AFE_SUPPLY_LPF_RESULT as usize,
            afe + offset_of!(AfeRegisters, afe_supply_lpf_result)
        );
        assert_eq!(
            REG_AFE_AFE_TEMP_SENSOR_RESULT as usize,
            afe + offset_of!(AfeRegisters, afe_temp_sensor_result)
        );
        assert_eq!(
            REG_AFE_AFE_ANALOG_CAPTURE_IEN as usize,
            afe + offset_of!(AfeRegisters, afe_analog_capture_ien)
        );
        assert_eq!(
            REG_AFE_AFE_ANALOG_GEN_IEN as usize,
            afe + offset_of!(AfeRegisters, afe_analog_gen_ien)
        );
        assert_eq!(
            REG_AFE_AFE_CMD_FIFO_IEN as usize,
            afe + offset_of!(AfeRegisters, afe_cmd_fifo_ien)
        );
        assert_eq!(
            REG_AFE_AFE_DATA_FIFO_IEN as usize,
            afe + offset_of!(AfeRegisters, afe_data_fifo_ien)
        );
        assert_eq!(
            REG_AFE_AFE_ANALOG_CAPTURE_INT as usize,
            afe + offset_of!(AfeRegisters, afe_analog_capture_int)
        );
        assert_eq!(
            REG_AFE_AFE_ANALOG_GEN_INT as usize,
            afe + offset_of!(AfeRegisters, afe_analog_gen_int)
        );
        assert_eq!(
            REG_AFE_AFE_CMD_FIFO_INT as usize,
            afe + offset_of!(AfeRegisters, afe_cmd_fifo_int)
        );
        assert_eq!(
            REG_AFE_AFE_DATA_FIFO_INT as usize,
            afe + offset_of!(AfeRegisters, afe_data_fifo_int)
        );
        assert_eq!(
            REG_AFE_AFE_SW_STATUS_MSB as usize,
            afe + offset_of!(AfeRegisters, afe_sw_status_msb)
        );
        assert_eq!(
            REG_AFE_AFE_SW_STATUS_LSB as usize,
            afe + offset_of!(AfeRegisters, afe_sw_status_lsb)
        );
        assert_eq!(REG_AFE_AFE_ADCMIN as usize, afe + offset_of!(AfeRegisters, afe_adcmin));
        assert_eq!(REG_AFE_AFE_ADCMAX as usize, afe + offset_of!(AfeRegisters, afe_adcmax));
        assert_eq!(REG_AFE_AFE_ADCDELTA as usize, afe + offset_of!(AfeRegisters, afe_adcdelta));
        assert_eq!(
            REG_AFE_AFE_CAL_DATA_LOCK as usize,
            afe + offset_of!(AfeRegisters, afe_cal_data_lock)
        );
        assert_eq!(
            REG_AFE_AFE_ADC_GAIN_TIA as usize,
            afe + offset_of!(AfeRegisters, afe_adc_gain_tia)
        );
        assert_eq!(
            REG_AFE_AFE_ADC_OFFSET_TIA as usize,
            afe + offset_of!(AfeRegisters, afe_adc_offset_tia)
        );
        assert_eq!(
            REG_AFE_AFE_ADC_GAIN_TEMP_SENS as usize,
            afe + offset_of!(AfeRegisters, afe_adc_gain_temp_sens)
        );
        assert_eq!(
            REG_AFE_AFE_ADC_OFFSET_TEMP_SENS as usize,
            afe + offset_of!(AfeRegisters, afe_adc_offset_temp_sens)
        );
        assert_eq!(
            REG_AFE_AFE_ADC_GAIN_AUX as usize,
            afe + offset_of!(AfeRegisters, afe_adc_gain_aux)
        );
        assert_eq!(
            REG_AFE_AFE_ADC_OFFSET_AUX as usize,
            afe + offset_of!(AfeRegisters, afe_adc_offset_aux)
        );
        assert_eq!(
            REG_AFE_AFE_DAC_OFFSET_UNITY as usize,
            afe + offset_of!(AfeRegisters, afe_dac_offset_unity)
        );
        assert_eq!(
            REG_AFE_AFE_DAC_OFFSET_ATTEN as usize,
            afe + offset_of!(AfeRegisters, afe_dac_offset_atten)
        );
        assert_eq!(REG_AFE_AFE_DAC_GAIN as usize, afe + offset_of!(AfeRegisters, afe_dac_gain));
        assert_eq!(REG_AFE_AFE_REF_TRIM0 as usize, afe + offset_of!(AfeRegisters, afe_ref_trim0));
        assert_eq!(REG_AFE_AFE_REF_TRIM1 as usize, afe + offset_of!(AfeRegisters, afe_ref_trim1));
        assert_eq!(REG_AFE_AFE_ALDO_TRIM as usize, afe + offset_of!(AfeRegisters, afe_aldo_trim));
        assert_eq!(REG_AFE_AFE_DAC_TRIM as usize, afe + offset_of!(AfeRegisters, afe_dac_trim));
        assert_eq!(REG_AFE_AFE_INAMP_TRIM as usize, afe + offset_of!(AfeRegisters, afe_inamp_trim));
        assert_eq!(REG_AFE_AFE_EXBUF_TRIM as usize, afe + offset_of!(AfeRegisters, afe_exbuf_trim));
        assert_eq!(
            REG_AFE_AFE_TEMP_SENS_TRIM as usize,
            afe + offset_of!(AfeRegisters, afe_temp_sens_trim)
        );
    }
}
