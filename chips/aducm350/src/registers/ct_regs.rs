// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

// Generated register structures for ct.

use crate::static_ref::StaticRef;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

register_structs! {
    pub CtRegisters {
        /// Power CDC control
        (0x0000 => pub ct_cdc_pwr: ReadWrite<u32, CT_CDC_PWR::Register>),
        /// CapTouch Control Configuration Register 1
        (0x0004 => pub ct_cfg1: ReadWrite<u32, CT_CFG1::Register>),
        /// CapTouch Control Configuration Register 2
        (0x0008 => pub ct_cfg2: ReadWrite<u32, CT_CFG2::Register>),
        /// AFE Control Configuration Register 3
        (0x000c => pub ct_cfg3: ReadWrite<u32, CT_CFG3::Register>),
        /// Capacitance measurement stage selection
        (0x0010 => pub ct_meas_sel: ReadWrite<u32, CT_MEAS_SEL::Register>),
        /// Baseline control settings
        (0x0014 => pub ct_baseline_ctrl: ReadWrite<u32, CT_BASELINE_CTRL::Register>),
        /// Setup of the rank-and-average filtering
        (0x0018 => pub ct_avg: ReadWrite<u32, CT_AVG::Register>),
        /// Enable calibration for measurement stages
        (0x001c => pub ct_cal_en: ReadWrite<u32, CT_CAL_EN::Register>),
        /// Touch Detection Thresholds
        (0x0020 => pub ct_touch_cfg1: ReadWrite<u32, CT_TOUCH_CFG1::Register>),
        /// Touch Detection time-out
        (0x0024 => pub ct_touch_cfg2: ReadWrite<u32, CT_TOUCH_CFG2::Register>),
        /// Release Detection Thresholds
        (0x0028 => pub ct_release_cfg1: ReadWrite<u32, CT_RELEASE_CFG1::Register>),
        /// Release Detection time-out
        (0x002c => pub ct_release_cfg2: ReadWrite<u32, CT_RELEASE_CFG2::Register>),
        /// Interrupt Enable
        (0x0030 => pub ct_ien: ReadWrite<u32, CT_IEN::Register>),
        /// Primary Interrupt Register
        (0x0034 => pub ct_int: ReadWrite<u32, CT_INT::Register>),
        /// Stage offset high interrupt status
        (0x0038 => pub ct_offs_hstat: ReadWrite<u32, CT_OFFS_HSTAT::Register>),
        /// Stage offset low interrupt status
        (0x003c => pub ct_offs_lstat: ReadWrite<u32, CT_OFFS_LSTAT::Register>),
        /// Stage proximity status
        (0x0040 => pub ct_prox_stat: ReadWrite<u32, CT_PROX_STAT::Register>),
        /// Stage fast proximity status
        (0x0044 => pub ct_fprox_stat: ReadWrite<u32, CT_FPROX_STAT::Register>),
        /// Stage touch/release status
        (0x0048 => pub ct_touch_stat: ReadWrite<u32, CT_TOUCH_STAT::Register>),
        /// Stage 0 configuration
        (0x004c => pub ct_stage0_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 1 configuration
        (0x0050 => pub ct_stage1_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 2 configuration
        (0x0054 => pub ct_stage2_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 3 configuration
        (0x0058 => pub ct_stage3_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 4 configuration
        (0x005c => pub ct_stage4_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 5 configuration
        (0x0060 => pub ct_stage5_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 6 configuration
        (0x0064 => pub ct_stage6_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 7 configuration
        (0x0068 => pub ct_stage7_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 8 configuration
        (0x006c => pub ct_stage8_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 9 configuration
        (0x0070 => pub ct_stage9_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 10 configuration
        (0x0074 => pub ct_stage10_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 11 configuration
        (0x0078 => pub ct_stage11_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 12 configuration
        (0x007c => pub ct_stage12_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 13 configuration
        (0x0080 => pub ct_stage13_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 14 configuration
        (0x0084 => pub ct_stage14_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 15 configuration
        (0x0088 => pub ct_stage15_cfg: ReadWrite<u32, CT_STAGE_CFG::Register>),
        /// Stage 0 and Stage 1 Sensor Threshold
        (0x008c => pub ct_sensor_thr_cfg0: ReadWrite<u32, CT_SENSOR_THR_CFG0::Register>),
        /// Stage 2 and Stage 3 Sensor Threshold
        (0x0090 => pub ct_sensor_thr_cfg1: ReadWrite<u32, CT_SENSOR_THR_CFG1::Register>),
        /// Stage 4 and Stage 5 Sensor Threshold
        (0x0094 => pub ct_sensor_thr_cfg2: ReadWrite<u32, CT_SENSOR_THR_CFG2::Register>),
        /// Stage 6 and Stage 7 Sensor Threshold
        (0x0098 => pub ct_sensor_thr_cfg3: ReadWrite<u32, CT_SENSOR_THR_CFG3::Register>),
        /// Stage 8 and Stage 9 Sensor Threshold
        (0x009c => pub ct_sensor_thr_cfg4: ReadWrite<u32, CT_SENSOR_THR_CFG4::Register>),
        /// Stage 10 and Stage 11 Sensor Threshold
        (0x00a0 => pub ct_sensor_thr_cfg5: ReadWrite<u32, CT_SENSOR_THR_CFG5::Register>),
        /// Stage 12 and Stage 13 Sensor Threshold
        (0x00a4 => pub ct_sensor_thr_cfg6: ReadWrite<u32, CT_SENSOR_THR_CFG6::Register>),
        /// Stage 14 and Stage 15 Sensor Threshold
        (0x00a8 => pub ct_sensor_thr_cfg7: ReadWrite<u32, CT_SENSOR_THR_CFG7::Register>),
        /// Stage 0 and Stage 1 Results
        (0x00ac => pub ct_cdc_res0: ReadOnly<u32, CT_CDC_RES0::Register>),
        /// Stage 2 and Stage 3 Results
        (0x00b0 => pub ct_cdc_res1: ReadOnly<u32, CT_CDC_RES1::Register>),
        /// Stage 4 and Stage 5 Results
        (0x00b4 => pub ct_cdc_res2: ReadOnly<u32, CT_CDC_RES2::Register>),
        /// Stage 6 and Stage 7 Results
        (0x00b8 => pub ct_cdc_res3: ReadOnly<u32, CT_CDC_RES3::Register>),
        /// Stage 8 and Stage 9 Results
        (0x00bc => pub ct_cdc_res4: ReadOnly<u32, CT_CDC_RES4::Register>),
        /// Stage 10 and Stage 11 Results
        (0x00c0 => pub ct_cdc_res5: ReadOnly<u32, CT_CDC_RES5::Register>),
        /// Stage 12 and Stage 13 Results
        (0x00c4 => pub ct_cdc_res6: ReadOnly<u32, CT_CDC_RES6::Register>),
        /// Stage 14 and Stage 15 Results
        (0x00c8 => pub ct_cdc_res7: ReadOnly<u32, CT_CDC_RES7::Register>),
        /// Stage 0 Fast Filter and Baseline Results
        (0x00cc => pub ct_baseline0: ReadOnly<u32, CT_BASELINE0::Register>),
        /// Stage 1 Fast Filter and Baseline Results
        (0x00d0 => pub ct_baseline1: ReadOnly<u32, CT_BASELINE1::Register>),
        /// Stage 2 Fast Filter and Baseline Results
        (0x00d4 => pub ct_baseline2: ReadOnly<u32, CT_BASELINE2::Register>),
        /// Stage 3 Fast Filter and Baseline Results
        (0x00d8 => pub ct_baseline3: ReadOnly<u32, CT_BASELINE3::Register>),
        /// Stage 4 Fast Filter and Baseline Results
        (0x00dc => pub ct_baseline4: ReadOnly<u32, CT_BASELINE4::Register>),
        /// Stage 5 Fast Filter and Baseline Results
        (0x00e0 => pub ct_baseline5: ReadOnly<u32, CT_BASELINE5::Register>),
        /// Stage 6 Fast Filter and Baseline Results
        (0x00e4 => pub ct_baseline6: ReadOnly<u32, CT_BASELINE6::Register>),
        /// Stage 7 Fast Filter and Baseline Results
        (0x00e8 => pub ct_baseline7: ReadOnly<u32, CT_BASELINE7::Register>),
        /// Stage 8 Fast Filter and Baseline Results
        (0x00ec => pub ct_baseline8: ReadOnly<u32, CT_BASELINE8::Register>),
        /// Stage 9 Fast Filter and Baseline Results
        (0x00f0 => pub ct_baseline9: ReadOnly<u32, CT_BASELINE9::Register>),
        /// Stage 10 Fast Filter and Baseline Results
        (0x00f4 => pub ct_baseline10: ReadOnly<u32, CT_BASELINE10::Register>),
        /// Stage 11 Fast Filter and Baseline Results
        (0x00f8 => pub ct_baseline11: ReadOnly<u32, CT_BASELINE11::Register>),
        /// Stage 12 Fast Filter and Baseline Results
        (0x00fc => pub ct_baseline12: ReadOnly<u32, CT_BASELINE12::Register>),
        /// Stage 13 Fast Filter and Baseline Results
        (0x0100 => pub ct_baseline13: ReadOnly<u32, CT_BASELINE13::Register>),
        /// Stage 14 Fast Filter and Baseline Results
        (0x0104 => pub ct_baseline14: ReadOnly<u32, CT_BASELINE14::Register>),
        /// Stage 15 Fast Filter and Baseline Results
        (0x0108 => pub ct_baseline15: ReadOnly<u32, CT_BASELINE15::Register>),
        /// Stage 0 and Stage 1 Peak-to-Peak Noise Results
        (0x010c => pub ct_pk2pk0: ReadOnly<u32, CT_PK2PK0::Register>),
        /// Stage 2 and Stage 3 Peak-to-Peak Noise Results
        (0x0110 => pub ct_pk2pk1: ReadOnly<u32, CT_PK2PK1::Register>),
        /// Stage 4 and Stage 5 Peak-to-Peak Noise Results
        (0x0114 => pub ct_pk2pk2: ReadOnly<u32, CT_PK2PK2::Register>),
        /// Stage 6 and Stage 7 Peak-to-Peak Noise Results
        (0x0118 => pub ct_pk2pk3: ReadOnly<u32, CT_PK2PK3::Register>),
        /// Stage 8 and Stage 9 Peak-to-Peak Noise Results
        (0x011c => pub ct_pk2pk4: ReadOnly<u32, CT_PK2PK4::Register>),
        /// Stage 10 and Stage 11 Peak-to-Peak Noise Results
        (0x0120 => pub ct_pk2pk5: ReadOnly<u32, CT_PK2PK5::Register>),
        /// Stage 12 and Stage 13 Peak-to-Peak Noise Results
        (0x0124 => pub ct_pk2pk6: ReadOnly<u32, CT_PK2PK6::Register>),
        /// Stage 14 and Stage 15 Peak-to-Peak Noise Results
        (0x0128 => pub ct_pk2pk7: ReadOnly<u32, CT_PK2PK7::Register>),
        (0x012c => @END),
    }
}

register_bitfields![u32,
    pub CT_CDC_PWR [
        PWR_MODE OFFSET(0) NUMBITS(1) [
            SHUTDOWN = 0,
            FULL_POWER = 1,
        ],
        SW_START_SEQ OFFSET(1) NUMBITS(1) [],
        SW_STATUS OFFSET(2) NUMBITS(1) [],
    ],
    pub CT_CFG1 [
        C2V_BIAS OFFSET(0) NUMBITS(3) [],
        PGA_BIAS OFFSET(3) NUMBITS(3) [],
        INT_BUFFER OFFSET(6) NUMBITS(2) [],
        BYPASS_GAIN OFFSET(9) NUMBITS(1) [],
        AUTOZERO_DUTY OFFSET(10) NUMBITS(3) [],
        AIN_SEL OFFSET(22) NUMBITS(2) [],
        INT_CYCLE OFFSET(24) NUMBITS(3) [],
    ],
    pub CT_CFG2 [
        PH13_DUTY OFFSET(0) NUMBITS(5) [],
        PH24_DUTY OFFSET(5) NUMBITS(8) [],
        SELF_TIMER_WAIT OFFSET(13) NUMBITS(9) [],
        C2V_HOLD_TIME OFFSET(22) NUMBITS(5) [],
        STIMER_EN OFFSET(27) NUMBITS(1) [],
        C2V_LPF OFFSET(28) NUMBITS(1) [],
    ],
    pub CT_CFG3 [
        IIR_EN OFFSET(0) NUMBITS(1) [],
        IIR_WEIGHT OFFSET(1) NUMBITS(4) [],
        DIG_CTOV_CAPTOUCH_EN OFFSET(5) NUMBITS(6) [],
        RES_SEL OFFSET(13) NUMBITS(1) [],
        PK2PK_NUM_SPLS OFFSET(14) NUMBITS(2) [],
        PK2PK_SUBSET OFFSET(16) NUMBITS(4) [],
        PK2PK_AVG_MIN OFFSET(20) NUMBITS(5) [],
        PK2PK_AVG OFFSET(25) NUMBITS(3) [],
    ],
    pub CT_MEAS_SEL [
        GND_SEL OFFSET(0) NUMBITS(16) [],
    ],
    pub CT_BASELINE_CTRL [
        CDC_COEFF OFFSET(0) NUMBITS(4) [],
        BL_COEFF OFFSET(4) NUMBITS(4) [],
        SLOW_PROX OFFSET(8) NUMBITS(8) [],
        FAST_PROX OFFSET(16) NUMBITS(8) [],
        FAST_FILTER_UPDATE OFFSET(24) NUMBITS(3) [],
        FORCE_CAL OFFSET(28) NUMBITS(1) [],
        BASELINE_CAL_DELAY OFFSET(29) NUMBITS(3) [],
    ],
    pub CT_AVG [
        AVG_MIN_GROUP1 OFFSET(0) NUMBITS(5) [],
        AVG_MIN_GROUP2 OFFSET(8) NUMBITS(5) [],
        AVG_GROUP1 OFFSET(16) NUMBITS(3) [],
        AVG_GROUP2 OFFSET(20) NUMBITS(3) [],
        AVG_OUTPUT OFFSET(24) NUMBITS(2) [],
        RANK_FILT OFFSET(28) NUMBITS(3) [],
    ],
    pub CT_CAL_EN [
        CAL_EN OFFSET(0) NUMBITS(16) [],
    ],
    pub CT_TOUCH_CFG1 [
        TCH_LOWER_THLD OFFSET(0) NUMBITS(14) [],
        TCH_UPPER_THLD OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_TOUCH_CFG2 [
        TCH_MIN_DURATION OFFSET(0) NUMBITS(10) [],
        TCH_DETECT_ENABLE OFFSET(15) NUMBITS(1) [],
        TCH_SEL_INPB OFFSET(16) NUMBITS(3) [],
        TCH_SEL_INPA OFFSET(19) NUMBITS(3) [],
        TCH_EVENT_ON_HIGH OFFSET(22) NUMBITS(1) [],
        INDIVIDUAL_THRESHOLD_EN OFFSET(23) NUMBITS(1) [],
    ],
    pub CT_RELEASE_CFG1 [
        REL_LOWER_THLD OFFSET(0) NUMBITS(14) [],
        REL_UPPER_THLD OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_RELEASE_CFG2 [
        REL_MIN_DURATION OFFSET(0) NUMBITS(10) [],
        REL_DETECT_ENABLE OFFSET(15) NUMBITS(1) [],
        REL_SEL_INPB OFFSET(16) NUMBITS(3) [],
        REL_SEL_INPA OFFSET(19) NUMBITS(3) [],
        REL_EVENT_ON_HIGH OFFSET(22) NUMBITS(1) [],
        INDIVIDUAL_THRESHOLD_EN OFFSET(23) NUMBITS(1) [],
    ],
    pub CT_IEN [
        CONV_SET_COMPLETE_IEN OFFSET(0) NUMBITS(1) [],
        STATUS_GT_THRESHOLD_IEN OFFSET(1) NUMBITS(1) [],
        PROX_DETECTED_IEN OFFSET(2) NUMBITS(1) [],
        TOUCH_DETECTED_IEN OFFSET(3) NUMBITS(1) [],
        RELEASE_DETECTED_IEN OFFSET(4) NUMBITS(1) [],
    ],
    pub CT_INT [
        CONV_SET_COMPLETE OFFSET(0) NUMBITS(1) [],
        STATUS_GT_THRESHOLD OFFSET(1) NUMBITS(1) [],
        PROX_DETECTED OFFSET(2) NUMBITS(1) [],
        TOUCH_DETECTED OFFSET(3) NUMBITS(1) [],
        RELEASE_DETECTED OFFSET(4) NUMBITS(1) [],
    ],
    pub CT_OFFS_HSTAT [
        OFFS_HSTAT OFFSET(0) NUMBITS(16) [],
    ],
    pub CT_OFFS_LSTAT [
        OFFS_LSTAT OFFSET(0) NUMBITS(16) [],
    ],
    pub CT_PROX_STAT [
        PROX_STAT OFFSET(0) NUMBITS(16) [],
    ],
    pub CT_FPROX_STAT [
        FPROX_STAT OFFSET(0) NUMBITS(16) [],
    ],
    pub CT_TOUCH_STAT [
        TCH_DETECT_STAT OFFSET(0) NUMBITS(16) [],
        REL_DETECT_STAT OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_STAGE_CFG [
        SUB_DAC OFFSET(0) NUMBITS(3) [],
        MAIN_DAC OFFSET(3) NUMBITS(7) [],
        PK2PK OFFSET(13) NUMBITS(1) [],
        EN_MAIN_DAC OFFSET(15) NUMBITS(1) [],
        C2V_IP_RANGE OFFSET(16) NUMBITS(4) [],
        PGA_GAIN OFFSET(20) NUMBITS(2) [],
        NOISE_REDUCTION_EN OFFSET(22) NUMBITS(1) [],
        PGA_BYPASS OFFSET(23) NUMBITS(1) [],
        CIN_CON_POS_CDC OFFSET(24) NUMBITS(3) [],
        CIN_CON_POS_CDC_EN OFFSET(27) NUMBITS(1) [],
    ],
    pub CT_SENSOR_THR_CFG0 [
        SENSOR_THRESHOLD0 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD1 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG1 [
        SENSOR_THRESHOLD2 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD3 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG2 [
        SENSOR_THRESHOLD4 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD5 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG3 [
        SENSOR_THRESHOLD6 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD7 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG4 [
        SENSOR_THRESHOLD8 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD9 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG5 [
        SENSOR_THRESHOLD10 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD11 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG6 [
        SENSOR_THRESHOLD12 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD13 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_SENSOR_THR_CFG7 [
        SENSOR_THRESHOLD14 OFFSET(0) NUMBITS(14) [],
        SENSOR_THRESHOLD15 OFFSET(16) NUMBITS(14) [],
    ],
    pub CT_CDC_RES0 [
        CDC_RES0 OFFSET(0) NUMBITS(16) [],
        CDC_RES1 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES1 [
        CDC_RES2 OFFSET(0) NUMBITS(16) [],
        CDC_RES3 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES2 [
        CDC_RES4 OFFSET(0) NUMBITS(16) [],
        CDC_RES5 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES3 [
        CDC_RES6 OFFSET(0) NUMBITS(16) [],
        CDC_RES7 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES4 [
        CDC_RES8 OFFSET(0) NUMBITS(16) [],
        CDC_RES9 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES5 [
        CDC_RES10 OFFSET(0) NUMBITS(16) [],
        CDC_RES11 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES6 [
        CDC_RES12 OFFSET(0) NUMBITS(16) [],
        CDC_RES13 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_CDC_RES7 [
        CDC_RES14 OFFSET(0) NUMBITS(16) [],
        CDC_RES15 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE0 [
        BASELINE0 OFFSET(0) NUMBITS(16) [],
        CDC_AVG0 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE1 [
        BASELINE1 OFFSET(0) NUMBITS(16) [],
        CDC_AVG1 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE2 [
        BASELINE2 OFFSET(0) NUMBITS(16) [],
        CDC_AVG2 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE3 [
        BASELINE3 OFFSET(0) NUMBITS(16) [],
        CDC_AVG3 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE4 [
        BASELINE4 OFFSET(0) NUMBITS(16) [],
        CDC_AVG4 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE5 [
        BASELINE5 OFFSET(0) NUMBITS(16) [],
        CDC_AVG5 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE6 [
        BASELINE6 OFFSET(0) NUMBITS(16) [],
        CDC_AVG6 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE7 [
        BASELINE7 OFFSET(0) NUMBITS(16) [],
        CDC_AVG7 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE8 [
        BASELINE8 OFFSET(0) NUMBITS(16) [],
        CDC_AVG8 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE9 [
        BASELINE9 OFFSET(0) NUMBITS(16) [],
        CDC_AVG9 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE10 [
        BASELINE10 OFFSET(0) NUMBITS(16) [],
        CDC_AVG10 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE11 [
        BASELINE11 OFFSET(0) NUMBITS(16) [],
        CDC_AVG11 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE12 [
        BASELINE12 OFFSET(0) NUMBITS(16) [],
        CDC_AVG12 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE13 [
        BASELINE13 OFFSET(0) NUMBITS(16) [],
        CDC_AVG13 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE14 [
        BASELINE14 OFFSET(0) NUMBITS(16) [],
        CDC_AVG14 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_BASELINE15 [
        BASELINE15 OFFSET(0) NUMBITS(16) [],
        CDC_AVG15 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK0 [
        PK2PK0 OFFSET(0) NUMBITS(16) [],
        PK2PK1 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK1 [
        PK2PK2 OFFSET(0) NUMBITS(16) [],
        PK2PK3 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK2 [
        PK2PK4 OFFSET(0) NUMBITS(16) [],
        PK2PK5 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK3 [
        PK2PK6 OFFSET(0) NUMBITS(16) [],
        PK2PK7 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK4 [
        PK2PK8 OFFSET(0) NUMBITS(16) [],
        PK2PK9 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK5 [
        PK2PK10 OFFSET(0) NUMBITS(16) [],
        PK2PK11 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK6 [
        PK2PK12 OFFSET(0) NUMBITS(16) [],
        PK2PK13 OFFSET(16) NUMBITS(16) [],
    ],
    pub CT_PK2PK7 [
        PK2PK14 OFFSET(0) NUMBITS(16) [],
        PK2PK15 OFFSET(16) NUMBITS(16) [],
    ],
];

pub const CT_BASE: StaticRef<CtRegisters> =
    unsafe { StaticRef::new(0x4008_4000 as *const CtRegisters) };
