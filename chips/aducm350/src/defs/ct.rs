// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! CapTouch controller.

// Generated register constants for ct.

// CT registers
/// Power CDC control
pub const REG_CT_CT_CDC_PWR: u32 = 0x4008_4000;
/// CapTouch Control Configuration Register 1
pub const REG_CT_CT_CFG1: u32 = 0x4008_4004;
/// CapTouch Control Configuration Register 2
pub const REG_CT_CT_CFG2: u32 = 0x4008_4008;
/// AFE Control Configuration Register 3
pub const REG_CT_CT_CFG3: u32 = 0x4008_400C;
/// Capacitance measurement stage selection
pub const REG_CT_CT_MEAS_SEL: u32 = 0x4008_4010;
/// Baseline control settings
pub const REG_CT_CT_BASELINE_CTRL: u32 = 0x4008_4014;
/// Setup of the rank-and-average filtering
pub const REG_CT_CT_AVG: u32 = 0x4008_4018;
/// Enable calibration for measurement stages
pub const REG_CT_CT_CAL_EN: u32 = 0x4008_401C;
/// Touch Detection Thresholds
pub const REG_CT_CT_TOUCH_CFG1: u32 = 0x4008_4020;
/// Touch Detection time-out
pub const REG_CT_CT_TOUCH_CFG2: u32 = 0x4008_4024;
/// Release Detection Thresholds
pub const REG_CT_CT_RELEASE_CFG1: u32 = 0x4008_4028;
/// Release Detection time-out
pub const REG_CT_CT_RELEASE_CFG2: u32 = 0x4008_402C;
/// Interrupt Enable
pub const REG_CT_CT_IEN: u32 = 0x4008_4030;
/// Primary Interrupt Register
pub const REG_CT_CT_INT: u32 = 0x4008_4034;
/// Stage offset high interrupt status
pub const REG_CT_CT_OFFS_HSTAT: u32 = 0x4008_4038;
/// Stage offset low interrupt status
pub const REG_CT_CT_OFFS_LSTAT: u32 = 0x4008_403C;
/// Stage proximity status
pub const REG_CT_CT_PROX_STAT: u32 = 0x4008_4040;
/// Stage fast proximity status
pub const REG_CT_CT_FPROX_STAT: u32 = 0x4008_4044;
/// Stage touch/release status
pub const REG_CT_CT_TOUCH_STAT: u32 = 0x4008_4048;
/// Stage 0 configuration
pub const REG_CT_CT_STAGE0_CFG: u32 = 0x4008_404C;
/// Stage 1 configuration
pub const REG_CT_CT_STAGE1_CFG: u32 = 0x4008_4050;
/// Stage 2 configuration
pub const REG_CT_CT_STAGE2_CFG: u32 = 0x4008_4054;
/// Stage 3 configuration
pub const REG_CT_CT_STAGE3_CFG: u32 = 0x4008_4058;
/// Stage 4 configuration
pub const REG_CT_CT_STAGE4_CFG: u32 = 0x4008_405C;
/// Stage 5 configuration
pub const REG_CT_CT_STAGE5_CFG: u32 = 0x4008_4060;
/// Stage 6 configuration
pub const REG_CT_CT_STAGE6_CFG: u32 = 0x4008_4064;
/// Stage 7 configuration
pub const REG_CT_CT_STAGE7_CFG: u32 = 0x4008_4068;
/// Stage 8 configuration
pub const REG_CT_CT_STAGE8_CFG: u32 = 0x4008_406C;
/// Stage 9 configuration
pub const REG_CT_CT_STAGE9_CFG: u32 = 0x4008_4070;
/// Stage 10 configuration
pub const REG_CT_CT_STAGE10_CFG: u32 = 0x4008_4074;
/// Stage 11 configuration
pub const REG_CT_CT_STAGE11_CFG: u32 = 0x4008_4078;
/// Stage 12 configuration
pub const REG_CT_CT_STAGE12_CFG: u32 = 0x4008_407C;
/// Stage 13 configuration
pub const REG_CT_CT_STAGE13_CFG: u32 = 0x4008_4080;
/// Stage 14 configuration
pub const REG_CT_CT_STAGE14_CFG: u32 = 0x4008_4084;
/// Stage 15 configuration
pub const REG_CT_CT_STAGE15_CFG: u32 = 0x4008_4088;
/// Stage 0 and Stage 1 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG0: u32 = 0x4008_408C;
/// Stage 2 and Stage 3 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG1: u32 = 0x4008_4090;
/// Stage 4 and Stage 5 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG2: u32 = 0x4008_4094;
/// Stage 6 and Stage 7 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG3: u32 = 0x4008_4098;
/// Stage 8 and Stage 9 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG4: u32 = 0x4008_409C;
/// Stage 10 and Stage 11 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG5: u32 = 0x4008_40A0;
/// Stage 12 and Stage 13 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG6: u32 = 0x4008_40A4;
/// Stage 14 and Stage 15 Sensor Threshold
pub const REG_CT_CT_SENSOR_THR_CFG7: u32 = 0x4008_40A8;
/// Stage 0 and Stage 1 Results
pub const REG_CT_CT_CDC_RES0: u32 = 0x4008_40AC;
/// Stage 2 and Stage 3 Results
pub const REG_CT_CT_CDC_RES1: u32 = 0x4008_40B0;
/// Stage 4 and Stage 5 Results
pub const REG_CT_CT_CDC_RES2: u32 = 0x4008_40B4;
/// Stage 6 and Stage 7 Results
pub const REG_CT_CT_CDC_RES3: u32 = 0x4008_40B8;
/// Stage 8 and Stage 9 Results
pub const REG_CT_CT_CDC_RES4: u32 = 0x4008_40BC;
/// Stage 10 and Stage 11 Results
pub const REG_CT_CT_CDC_RES5: u32 = 0x4008_40C0;
/// Stage 12 and Stage 13 Results
pub const REG_CT_CT_CDC_RES6: u32 = 0x4008_40C4;
/// Stage 14 and Stage 15 Results
pub const REG_CT_CT_CDC_RES7: u32 = 0x4008_40C8;
/// Stage 0 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE0: u32 = 0x4008_40CC;
/// Stage 1 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE1: u32 = 0x4008_40D0;
/// Stage 2 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE2: u32 = 0x4008_40D4;
/// Stage 3 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE3: u32 = 0x4008_40D8;
/// Stage 4 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE4: u32 = 0x4008_40DC;
/// Stage 5 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE5: u32 = 0x4008_40E0;
/// Stage 6 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE6: u32 = 0x4008_40E4;
/// Stage 7 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE7: u32 = 0x4008_40E8;
/// Stage 8 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE8: u32 = 0x4008_40EC;
/// Stage 9 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE9: u32 = 0x4008_40F0;
/// Stage 10 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE10: u32 = 0x4008_40F4;
/// Stage 11 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE11: u32 = 0x4008_40F8;
/// Stage 12 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE12: u32 = 0x4008_40FC;
/// Stage 13 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE13: u32 = 0x4008_4100;
/// Stage 14 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE14: u32 = 0x4008_4104;
/// Stage 15 Fast Filter and Baseline Results
pub const REG_CT_CT_BASELINE15: u32 = 0x4008_4108;
/// Stage 0 and Stage 1 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK0: u32 = 0x4008_410C;
/// Stage 2 and Stage 3 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK1: u32 = 0x4008_4110;
/// Stage 4 and Stage 5 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK2: u32 = 0x4008_4114;
/// Stage 6 and Stage 7 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK3: u32 = 0x4008_4118;
/// Stage 8 and Stage 9 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK4: u32 = 0x4008_411C;
/// Stage 10 and Stage 11 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK5: u32 = 0x4008_4120;
/// Stage 12 and Stage 13 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK6: u32 = 0x4008_4124;
/// Stage 14 and Stage 15 Peak-to-Peak Noise Results
pub const REG_CT_CT_PK2PK7: u32 = 0x4008_4128;

// CT_CT_CDC_PWR
pub const BITP_CT_CT_CDC_PWR_PWR_MODE: u32 = 0;
pub const BITP_CT_CT_CDC_PWR_SW_START_SEQ: u32 = 1;
pub const BITP_CT_CT_CDC_PWR_SW_STATUS: u32 = 2;
/// Power mode
pub const BITM_CT_CT_CDC_PWR_PWR_MODE: u32 = 0x0000_0001;
/// Software start of a conversion sequence
pub const BITM_CT_CT_CDC_PWR_SW_START_SEQ: u32 = 0x0000_0002;
/// Software sequence in progress
pub const BITM_CT_CT_CDC_PWR_SW_STATUS: u32 = 0x0000_0004;
/// Shutdown
pub const ENUM_CT_CT_CDC_PWR_PWR_MODE_SHUTDOWN: u32 = 0x0000_0000;
/// Full power
pub const ENUM_CT_CT_CDC_PWR_PWR_MODE_FULL_POWER: u32 = 0x0000_0001;

// CT_CT_CFG1
pub const BITP_CT_CT_CFG1_C2V_BIAS: u32 = 0;
pub const BITP_CT_CT_CFG1_PGA_BIAS: u32 = 3;
pub const BITP_CT_CT_CFG1_INT_BUFFER: u32 = 6;
pub const BITP_CT_CT_CFG1_BYPASS_GAIN: u32 = 9;
pub const BITP_CT_CT_CFG1_AUTOZERO_DUTY: u32 = 10;
pub const BITP_CT_CT_CFG1_AIN_SEL: u32 = 22;
pub const BITP_CT_CT_CFG1_INT_CYCLE: u32 = 24;
/// Capacitance to voltage converter bias
pub const BITM_CT_CT_CFG1_C2V_BIAS: u32 = 0x0000_0007;
/// PGA bias
pub const BITM_CT_CT_CFG1_PGA_BIAS: u32 = 0x0000_0038;
/// Integrator buffer bias
pub const BITM_CT_CT_CFG1_INT_BUFFER: u32 = 0x0000_00C0;
/// Bypass the gain stage
pub const BITM_CT_CT_CFG1_BYPASS_GAIN: u32 = 0x0000_0200;
/// Autozero duty cycle
pub const BITM_CT_CT_CFG1_AUTOZERO_DUTY: u32 = 0x0000_1C00;
/// Analog input select
pub const BITM_CT_CT_CFG1_AIN_SEL: u32 = 0x00C0_0000;
/// Integration cycles
pub const BITM_CT_CT_CFG1_INT_CYCLE: u32 = 0x0700_0000;

// CT_CT_CFG2
pub const BITP_CT_CT_CFG2_PH13_DUTY: u32 = 0;
pub const BITP_CT_CT_CFG2_PH24_DUTY: u32 = 5;
pub const BITP_CT_CT_CFG2_SELF_TIMER_WAIT: u32 = 13;
pub const BITP_CT_CT_CFG2_C2V_HOLD_TIME: u32 = 22;
pub const BITP_CT_CT_CFG2_STIMER_EN: u32 = 27;
pub const BITP_CT_CT_CFG2_C2V_LPF: u32 = 28;
/// Phase 1 and 3 duty cycle
pub const BITM_CT_CT_CFG2_PH13_DUTY: u32 = 0x0000_001F;
/// Phase 2 and 4 duty cycle
pub const BITM_CT_CT_CFG2_PH24_DUTY: u32 = 0x0000_1FE0;
/// Self timer wait time
pub const BITM_CT_CT_CFG2_SELF_TIMER_WAIT: u32 = 0x003F_E000;
/// Capacitance to voltage converter hold time
pub const BITM_CT_CT_CFG2_C2V_HOLD_TIME: u32 = 0x07C0_0000;
/// Self timer enable
pub const BITM_CT_CT_CFG2_STIMER_EN: u32 = 0x0800_0000;
/// Capacitance to voltage converter low pass filter enable
pub const BITM_CT_CT_CFG2_C2V_LPF: u32 = 0x1000_0000;

// CT_CT_CFG3
pub const BITP_CT_CT_CFG3_IIR_EN: u32 = 0;
pub const BITP_CT_CT_CFG3_IIR_WEIGHT: u32 = 1;
pub const BITP_CT_CT_CFG3_DIG_CTOV_CAPTOUCH_EN: u32 = 5;
pub const BITP_CT_CT_CFG3_RES_SEL: u32 = 13;
pub const BITP_CT_CT_CFG3_PK2PK_NUM_SPLS: u32 = 14;
pub const BITP_CT_CT_CFG3_PK2PK_SUBSET: u32 = 16;
pub const BITP_CT_CT_CFG3_PK2PK_AVG_MIN: u32 = 20;
pub const BITP_CT_CT_CFG3_PK2PK_AVG: u32 = 25;
/// IIR filter enable
pub const BITM_CT_CT_CFG3_IIR_EN: u32 = 0x0000_0001;
/// IIR filter weight
pub const BITM_CT_CT_CFG3_IIR_WEIGHT: u32 = 0x0000_001E;
/// Digital capacitance to voltage converter enable
pub const BITM_CT_CT_CFG3_DIG_CTOV_CAPTOUCH_EN: u32 = 0x0000_07E0;
/// Result select
pub const BITM_CT_CT_CFG3_RES_SEL: u32 = 0x0000_2000;
/// Peak to peak number of samples
pub const BITM_CT_CT_CFG3_PK2PK_NUM_SPLS: u32 = 0x0000_C000;
/// Peak to peak subset
pub const BITM_CT_CT_CFG3_PK2PK_SUBSET: u32 = 0x000F_0000;
/// Peak to peak minimum average
pub const BITM_CT_CT_CFG3_PK2PK_AVG_MIN: u32 = 0x01F0_0000;
/// Peak to peak average
pub const BITM_CT_CT_CFG3_PK2PK_AVG: u32 = 0x0E00_0000;

// CT_CT_MEAS_SEL
pub const BITP_CT_CT_MEAS_SEL_GND_SEL: u32 = 0;
/// Stages connected to ground
pub const BITM_CT_CT_MEAS_SEL_GND_SEL: u32 = 0x0000_FFFF;

// CT_CT_BASELINE_CTRL
pub const BITP_CT_CT_BASELINE_CTRL_CDC_COEFF: u32 = 0;
pub const BITP_CT_CT_BASELINE_CTRL_BL_COEFF: u32 = 4;
pub const BITP_CT_CT_BASELINE_CTRL_SLOW_PROX: u32 = 8;
pub const BITP_CT_CT_BASELINE_CTRL_FAST_PROX: u32 = 16;
pub const BITP_CT_CT_BASELINE_CTRL_FAST_FILTER_UPDATE: u32 = 24;
pub const BITP_CT_CT_BASELINE_CTRL_FORCE_CAL: u32 = 28;
pub const BITP_CT_CT_BASELINE_CTRL_BASELINE_CAL_DELAY: u32 = 29;
/// CDC filter coefficient
pub const BITM_CT_CT_BASELINE_CTRL_CDC_COEFF: u32 = 0x0000_000F;
/// Baseline filter coefficient
pub const BITM_CT_CT_BASELINE_CTRL_BL_COEFF: u32 = 0x0000_00F0;
/// Slow proximity threshold
pub const BITM_CT_CT_BASELINE_CTRL_SLOW_PROX: u32 = 0x0000_FF00;
/// Fast proximity threshold
pub const BITM_CT_CT_BASELINE_CTRL_FAST_PROX: u32 = 0x00FF_0000;
/// Fast filter update rate
pub const BITM_CT_CT_BASELINE_CTRL_FAST_FILTER_UPDATE: u32 = 0x0700_0000;
/// Force baseline calibration
pub const BITM_CT_CT_BASELINE_CTRL_FORCE_CAL: u32 = 0x1000_0000;
/// Baseline calibration delay
pub const BITM_CT_CT_BASELINE_CTRL_BASELINE_CAL_DELAY: u32 = 0xE000_0000;

// CT_CT_AVG
pub const BITP_CT_CT_AVG_AVG_MIN_GROUP1: u32 = 0;
pub const BITP_CT_CT_AVG_AVG_MIN_GROUP2: u32 = 8;
pub const BITP_CT_CT_AVG_AVG_GROUP1: u32 = 16;
pub const BITP_CT_CT_AVG_AVG_GROUP2: u32 = 20;
pub const BITP_CT_CT_AVG_AVG_OUTPUT: u32 = 24;
pub const BITP_CT_CT_AVG_RANK_FILT: u32 = 28;
/// Minimum average for group 1
pub const BITM_CT_CT_AVG_AVG_MIN_GROUP1: u32 = 0x0000_001F;
/// Minimum average for group 2
pub const BITM_CT_CT_AVG_AVG_MIN_GROUP2: u32 = 0x0000_1F00;
/// Samples averaged for group 1
pub const BITM_CT_CT_AVG_AVG_GROUP1: u32 = 0x0007_0000;
/// Samples averaged for group 2
pub const BITM_CT_CT_AVG_AVG_GROUP2: u32 = 0x0070_0000;
/// Output averaging
pub const BITM_CT_CT_AVG_AVG_OUTPUT: u32 = 0x0300_0000;
/// Rank filter
pub const BITM_CT_CT_AVG_RANK_FILT: u32 = 0x7000_0000;

// CT_CT_CAL_EN
pub const BITP_CT_CT_CAL_EN_CAL_EN: u32 = 0;
/// Calibration enable per stage
pub const BITM_CT_CT_CAL_EN_CAL_EN: u32 = 0x0000_FFFF;

// CT_CT_TOUCH_CFG1
pub const BITP_CT_CT_TOUCH_CFG1_TCH_LOWER_THLD: u32 = 0;
pub const BITP_CT_CT_TOUCH_CFG1_TCH_UPPER_THLD: u32 = 16;
/// Touch lower threshold
pub const BITM_CT_CT_TOUCH_CFG1_TCH_LOWER_THLD: u32 = 0x0000_3FFF;
/// Touch upper threshold
pub const BITM_CT_CT_TOUCH_CFG1_TCH_UPPER_THLD: u32 = 0x3FFF_0000;

// CT_CT_TOUCH_CFG2
pub const BITP_CT_CT_TOUCH_CFG2_TCH_MIN_DURATION: u32 = 0;
pub const BITP_CT_CT_TOUCH_CFG2_TCH_DETECT_ENABLE: u32 = 15;
pub const BITP_CT_CT_TOUCH_CFG2_TCH_SEL_INPB: u32 = 16;
pub const BITP_CT_CT_TOUCH_CFG2_TCH_SEL_INPA: u32 = 19;
pub const BITP_CT_CT_TOUCH_CFG2_TCH_EVENT_ON_HIGH: u32 = 22;
pub const BITP_CT_CT_TOUCH_CFG2_INDIVIDUAL_THRESHOLD_EN: u32 = 23;
/// Touch minimum duration
pub const BITM_CT_CT_TOUCH_CFG2_TCH_MIN_DURATION: u32 = 0x0000_03FF;
/// Touch detection enable
pub const BITM_CT_CT_TOUCH_CFG2_TCH_DETECT_ENABLE: u32 = 0x0000_8000;
/// Touch input B select
pub const BITM_CT_CT_TOUCH_CFG2_TCH_SEL_INPB: u32 = 0x0007_0000;
/// Touch input A select
pub const BITM_CT_CT_TOUCH_CFG2_TCH_SEL_INPA: u32 = 0x0038_0000;
/// Touch event on high value
pub const BITM_CT_CT_TOUCH_CFG2_TCH_EVENT_ON_HIGH: u32 = 0x0040_0000;
/// Per-sensor threshold enable
pub const BITM_CT_CT_TOUCH_CFG2_INDIVIDUAL_THRESHOLD_EN: u32 = 0x0080_0000;

// CT_CT_RELEASE_CFG1
pub const BITP_CT_CT_RELEASE_CFG1_REL_LOWER_THLD: u32 = 0;
pub const BITP_CT_CT_RELEASE_CFG1_REL_UPPER_THLD: u32 = 16;
/// Release lower threshold
pub const BITM_CT_CT_RELEASE_CFG1_REL_LOWER_THLD: u32 = 0x0000_3FFF;
/// Release upper threshold
pub const BITM_CT_CT_RELEASE_CFG1_REL_UPPER_THLD: u32 = 0x3FFF_0000;

// CT_CT_RELEASE_CFG2
pub const BITP_CT_CT_RELEASE_CFG2_REL_MIN_DURATION: u32 = 0;
pub const BITP_CT_CT_RELEASE_CFG2_REL_DETECT_ENABLE: u32 = 15;
pub const BITP_CT_CT_RELEASE_CFG2_REL_SEL_INPB: u32 = 16;
pub const BITP_CT_CT_RELEASE_CFG2_REL_SEL_INPA: u32 = 19;
pub const BITP_CT_CT_RELEASE_CFG2_REL_EVENT_ON_HIGH: u32 = 22;
pub const BITP_CT_CT_RELEASE_CFG2_INDIVIDUAL_THRESHOLD_EN: u32 = 23;
/// Release minimum duration
pub const BITM_CT_CT_RELEASE_CFG2_REL_MIN_DURATION: u32 = 0x0000_03FF;
/// Release detection enable
pub const BITM_CT_CT_RELEASE_CFG2_REL_DETECT_ENABLE: u32 = 0x0000_8000;
/// Release input B select
pub const BITM_CT_CT_RELEASE_CFG2_REL_SEL_INPB: u32 = 0x0007_0000;
/// Release input A select
pub const BITM_CT_CT_RELEASE_CFG2_REL_SEL_INPA: u32 = 0x0038_0000;
/// Release event on high value
pub const BITM_CT_CT_RELEASE_CFG2_REL_EVENT_ON_HIGH: u32 = 0x0040_0000;
/// Per-sensor threshold enable
pub const BITM_CT_CT_RELEASE_CFG2_INDIVIDUAL_THRESHOLD_EN: u32 = 0x0080_0000;

// CT_CT_IEN
pub const BITP_CT_CT_IEN_CONV_SET_COMPLETE_IEN: u32 = 0;
pub const BITP_CT_CT_IEN_STATUS_GT_THRESHOLD_IEN: u32 = 1;
pub const BITP_CT_CT_IEN_PROX_DETECTED_IEN: u32 = 2;
pub const BITP_CT_CT_IEN_TOUCH_DETECTED_IEN: u32 = 3;
pub const BITP_CT_CT_IEN_RELEASE_DETECTED_IEN: u32 = 4;
/// Conversion set complete interrupt enable
pub const BITM_CT_CT_IEN_CONV_SET_COMPLETE_IEN: u32 = 0x0000_0001;
/// Status greater than threshold interrupt enable
pub const BITM_CT_CT_IEN_STATUS_GT_THRESHOLD_IEN: u32 = 0x0000_0002;
/// Proximity detected interrupt enable
pub const BITM_CT_CT_IEN_PROX_DETECTED_IEN: u32 = 0x0000_0004;
/// Touch detected interrupt enable
pub const BITM_CT_CT_IEN_TOUCH_DETECTED_IEN: u32 = 0x0000_0008;
/// Release detected interrupt enable
pub const BITM_CT_CT_IEN_RELEASE_DETECTED_IEN: u32 = 0x0000_0010;

// CT_CT_INT
pub const BITP_CT_CT_INT_CONV_SET_COMPLETE: u32 = 0;
pub const BITP_CT_CT_INT_STATUS_GT_THRESHOLD: u32 = 1;
pub const BITP_CT_CT_INT_PROX_DETECTED: u32 = 2;
pub const BITP_CT_CT_INT_TOUCH_DETECTED: u32 = 3;
pub const BITP_CT_CT_INT_RELEASE_DETECTED: u32 = 4;
/// Conversion set complete
pub const BITM_CT_CT_INT_CONV_SET_COMPLETE: u32 = 0x0000_0001;
/// Status greater than threshold
pub const BITM_CT_CT_INT_STATUS_GT_THRESHOLD: u32 = 0x0000_0002;
/// Proximity detected
pub const BITM_CT_CT_INT_PROX_DETECTED: u32 = 0x0000_0004;
/// Touch detected
pub const BITM_CT_CT_INT_TOUCH_DETECTED: u32 = 0x0000_0008;
/// Release detected
pub const BITM_CT_CT_INT_RELEASE_DETECTED: u32 = 0x0000_0010;

// CT_CT_OFFS_HSTAT
pub const BITP_CT_CT_OFFS_HSTAT_OFFS_HSTAT: u32 = 0;
/// Offset high status per stage
pub const BITM_CT_CT_OFFS_HSTAT_OFFS_HSTAT: u32 = 0x0000_FFFF;

// CT_CT_OFFS_LSTAT
pub const BITP_CT_CT_OFFS_LSTAT_OFFS_LSTAT: u32 = 0;
/// Offset low status per stage
pub const BITM_CT_CT_OFFS_LSTAT_OFFS_LSTAT: u32 = 0x0000_FFFF;

// CT_CT_PROX_STAT
pub const BITP_CT_CT_PROX_STAT_PROX_STAT: u32 = 0;
/// Proximity status per stage
pub const BITM_CT_CT_PROX_STAT_PROX_STAT: u32 = 0x0000_FFFF;

// CT_CT_FPROX_STAT
pub const BITP_CT_CT_FPROX_STAT_FPROX_STAT: u32 = 0;
/// Fast proximity status per stage
pub const BITM_CT_CT_FPROX_STAT_FPROX_STAT: u32 = 0x0000_FFFF;

// CT_CT_TOUCH_STAT
pub const BITP_CT_CT_TOUCH_STAT_TCH_DETECT_STAT: u32 = 0;
pub const BITP_CT_CT_TOUCH_STAT_REL_DETECT_STAT: u32 = 16;
/// Touch detection status per stage
pub const BITM_CT_CT_TOUCH_STAT_TCH_DETECT_STAT: u32 = 0x0000_FFFF;
/// Release detection status per stage
pub const BITM_CT_CT_TOUCH_STAT_REL_DETECT_STAT: u32 = 0xFFFF_0000;

// CT_CT_STAGE0_CFG
pub const BITP_CT_CT_STAGE0_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE0_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE0_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE0_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE0_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE0_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE0_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE0_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE0_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE0_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE0_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE0_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE0_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE0_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE0_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE0_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE0_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE1_CFG
pub const BITP_CT_CT_STAGE1_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE1_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE1_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE1_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE1_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE1_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE1_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE1_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE1_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE1_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE1_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE1_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE1_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE1_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE1_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE1_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE1_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE2_CFG
pub const BITP_CT_CT_STAGE2_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE2_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE2_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE2_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE2_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE2_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE2_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE2_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE2_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE2_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE2_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE2_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE2_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE2_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE2_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE2_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE2_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE3_CFG
pub const BITP_CT_CT_STAGE3_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE3_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE3_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE3_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE3_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE3_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE3_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE3_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE3_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE3_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE3_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE3_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE3_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE3_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE3_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE3_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE3_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE4_CFG
pub const BITP_CT_CT_STAGE4_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE4_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE4_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE4_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE4_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE4_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE4_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE4_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE4_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE4_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE4_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE4_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE4_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE4_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE4_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE4_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE4_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE5_CFG
pub const BITP_CT_CT_STAGE5_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE5_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE5_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE5_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE5_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE5_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE5_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE5_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE5_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE5_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE5_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE5_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE5_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE5_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE5_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE5_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE5_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE6_CFG
pub const BITP_CT_CT_STAGE6_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE6_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE6_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE6_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE6_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE6_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE6_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE6_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE6_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE6_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE6_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE6_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE6_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE6_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE6_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE6_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE6_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE7_CFG
pub const BITP_CT_CT_STAGE7_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE7_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE7_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE7_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE7_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE7_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE7_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE7_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE7_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE7_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE7_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE7_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE7_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE7_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE7_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE7_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE7_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE8_CFG
pub const BITP_CT_CT_STAGE8_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE8_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE8_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE8_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE8_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE8_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE8_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE8_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE8_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE8_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE8_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE8_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE8_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE8_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE8_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE8_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE8_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE9_CFG
pub const BITP_CT_CT_STAGE9_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE9_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE9_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE9_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE9_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE9_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE9_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE9_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE9_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE9_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE9_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE9_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE9_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE9_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE9_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE9_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE9_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE10_CFG
pub const BITP_CT_CT_STAGE10_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE10_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE10_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE10_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE10_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE10_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE10_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE10_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE10_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE10_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE10_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE10_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE10_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE10_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE10_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE10_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE10_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE11_CFG
pub const BITP_CT_CT_STAGE11_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE11_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE11_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE11_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE11_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE11_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE11_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE11_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE11_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE11_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE11_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE11_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE11_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE11_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE11_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE11_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE11_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE12_CFG
pub const BITP_CT_CT_STAGE12_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE12_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE12_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE12_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE12_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE12_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE12_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE12_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE12_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE12_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE12_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE12_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE12_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE12_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE12_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE12_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE12_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE13_CFG
pub const BITP_CT_CT_STAGE13_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE13_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE13_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE13_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE13_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE13_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE13_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE13_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE13_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE13_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE13_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE13_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE13_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE13_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE13_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE13_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE13_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE14_CFG
pub const BITP_CT_CT_STAGE14_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE14_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE14_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE14_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE14_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE14_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE14_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE14_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE14_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE14_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE14_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE14_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE14_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE14_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE14_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE14_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE14_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_STAGE15_CFG
pub const BITP_CT_CT_STAGE15_CFG_SUB_DAC: u32 = 0;
pub const BITP_CT_CT_STAGE15_CFG_MAIN_DAC: u32 = 3;
pub const BITP_CT_CT_STAGE15_CFG_PK2PK: u32 = 13;
pub const BITP_CT_CT_STAGE15_CFG_EN_MAIN_DAC: u32 = 15;
pub const BITP_CT_CT_STAGE15_CFG_C2V_IP_RANGE: u32 = 16;
pub const BITP_CT_CT_STAGE15_CFG_PGA_GAIN: u32 = 20;
pub const BITP_CT_CT_STAGE15_CFG_NOISE_REDUCTION_EN: u32 = 22;
pub const BITP_CT_CT_STAGE15_CFG_PGA_BYPASS: u32 = 23;
pub const BITP_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC: u32 = 24;
pub const BITP_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC_EN: u32 = 27;
/// Sub DAC setting
pub const BITM_CT_CT_STAGE15_CFG_SUB_DAC: u32 = 0x0000_0007;
/// Main DAC setting
pub const BITM_CT_CT_STAGE15_CFG_MAIN_DAC: u32 = 0x0000_03F8;
/// Peak to peak enable
pub const BITM_CT_CT_STAGE15_CFG_PK2PK: u32 = 0x0000_2000;
/// Main DAC enable
pub const BITM_CT_CT_STAGE15_CFG_EN_MAIN_DAC: u32 = 0x0000_8000;
/// Capacitance to voltage converter input range
pub const BITM_CT_CT_STAGE15_CFG_C2V_IP_RANGE: u32 = 0x000F_0000;
/// PGA gain
pub const BITM_CT_CT_STAGE15_CFG_PGA_GAIN: u32 = 0x0030_0000;
/// Noise reduction enable
pub const BITM_CT_CT_STAGE15_CFG_NOISE_REDUCTION_EN: u32 = 0x0040_0000;
/// PGA bypass
pub const BITM_CT_CT_STAGE15_CFG_PGA_BYPASS: u32 = 0x0080_0000;
/// Positive CDC input connection
pub const BITM_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC: u32 = 0x0700_0000;
/// Positive CDC input connection enable
pub const BITM_CT_CT_STAGE15_CFG_CIN_CON_POS_CDC_EN: u32 = 0x0800_0000;

// CT_CT_SENSOR_THR_CFG0
pub const BITP_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD0: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD1: u32 = 16;
/// Threshold for sensor 0
pub const BITM_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD0: u32 = 0x0000_3FFF;
/// Threshold for sensor 1
pub const BITM_CT_CT_SENSOR_THR_CFG0_SENSOR_THRESHOLD1: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG1
pub const BITP_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD2: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD3: u32 = 16;
/// Threshold for sensor 2
pub const BITM_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD2: u32 = 0x0000_3FFF;
/// Threshold for sensor 3
pub const BITM_CT_CT_SENSOR_THR_CFG1_SENSOR_THRESHOLD3: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG2
pub const BITP_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD4: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD5: u32 = 16;
/// Threshold for sensor 4
pub const BITM_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD4: u32 = 0x0000_3FFF;
/// Threshold for sensor 5
pub const BITM_CT_CT_SENSOR_THR_CFG2_SENSOR_THRESHOLD5: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG3
pub const BITP_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD6: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD7: u32 = 16;
/// Threshold for sensor 6
pub const BITM_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD6: u32 = 0x0000_3FFF;
/// Threshold for sensor 7
pub const BITM_CT_CT_SENSOR_THR_CFG3_SENSOR_THRESHOLD7: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG4
pub const BITP_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD8: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD9: u32 = 16;
/// Threshold for sensor 8
pub const BITM_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD8: u32 = 0x0000_3FFF;
/// Threshold for sensor 9
pub const BITM_CT_CT_SENSOR_THR_CFG4_SENSOR_THRESHOLD9: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG5
pub const BITP_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD10: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD11: u32 = 16;
/// Threshold for sensor 10
pub const BITM_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD10: u32 = 0x0000_3FFF;
/// Threshold for sensor 11
pub const BITM_CT_CT_SENSOR_THR_CFG5_SENSOR_THRESHOLD11: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG6
pub const BITP_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD12: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD13: u32 = 16;
/// Threshold for sensor 12
pub const BITM_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD12: u32 = 0x0000_3FFF;
/// Threshold for sensor 13
pub const BITM_CT_CT_SENSOR_THR_CFG6_SENSOR_THRESHOLD13: u32 = 0x3FFF_0000;

// CT_CT_SENSOR_THR_CFG7
pub const BITP_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD14: u32 = 0;
pub const BITP_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD15: u32 = 16;
/// Threshold for sensor 14
pub const BITM_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD14: u32 = 0x0000_3FFF;
/// Threshold for sensor 15
pub const BITM_CT_CT_SENSOR_THR_CFG7_SENSOR_THRESHOLD15: u32 = 0x3FFF_0000;

// CT_CT_CDC_RES0
pub const BITP_CT_CT_CDC_RES0_CDC_RES0: u32 = 0;
pub const BITP_CT_CT_CDC_RES0_CDC_RES1: u32 = 16;
/// CDC result for stage 0
pub const BITM_CT_CT_CDC_RES0_CDC_RES0: u32 = 0x0000_FFFF;
/// CDC result for stage 1
pub const BITM_CT_CT_CDC_RES0_CDC_RES1: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES1
pub const BITP_CT_CT_CDC_RES1_CDC_RES2: u32 = 0;
pub const BITP_CT_CT_CDC_RES1_CDC_RES3: u32 = 16;
/// CDC result for stage 2
pub const BITM_CT_CT_CDC_RES1_CDC_RES2: u32 = 0x0000_FFFF;
/// CDC result for stage 3
pub const BITM_CT_CT_CDC_RES1_CDC_RES3: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES2
pub const BITP_CT_CT_CDC_RES2_CDC_RES4: u32 = 0;
pub const BITP_CT_CT_CDC_RES2_CDC_RES5: u32 = 16;
/// CDC result for stage 4
pub const BITM_CT_CT_CDC_RES2_CDC_RES4: u32 = 0x0000_FFFF;
/// CDC result for stage 5
pub const BITM_CT_CT_CDC_RES2_CDC_RES5: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES3
pub const BITP_CT_CT_CDC_RES3_CDC_RES6: u32 = 0;
pub const BITP_CT_CT_CDC_RES3_CDC_RES7: u32 = 16;
/// CDC result for stage 6
pub const BITM_CT_CT_CDC_RES3_CDC_RES6: u32 = 0x0000_FFFF;
/// CDC result for stage 7
pub const BITM_CT_CT_CDC_RES3_CDC_RES7: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES4
pub const BITP_CT_CT_CDC_RES4_CDC_RES8: u32 = 0;
pub const BITP_CT_CT_CDC_RES4_CDC_RES9: u32 = 16;
/// CDC result for stage 8
pub const BITM_CT_CT_CDC_RES4_CDC_RES8: u32 = 0x0000_FFFF;
/// CDC result for stage 9
pub const BITM_CT_CT_CDC_RES4_CDC_RES9: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES5
pub const BITP_CT_CT_CDC_RES5_CDC_RES10: u32 = 0;
pub const BITP_CT_CT_CDC_RES5_CDC_RES11: u32 = 16;
/// CDC result for stage 10
pub const BITM_CT_CT_CDC_RES5_CDC_RES10: u32 = 0x0000_FFFF;
/// CDC result for stage 11
pub const BITM_CT_CT_CDC_RES5_CDC_RES11: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES6
pub const BITP_CT_CT_CDC_RES6_CDC_RES12: u32 = 0;
pub const BITP_CT_CT_CDC_RES6_CDC_RES13: u32 = 16;
/// CDC result for stage 12
pub const BITM_CT_CT_CDC_RES6_CDC_RES12: u32 = 0x0000_FFFF;
/// CDC result for stage 13
pub const BITM_CT_CT_CDC_RES6_CDC_RES13: u32 = 0xFFFF_0000;

// CT_CT_CDC_RES7
pub const BITP_CT_CT_CDC_RES7_CDC_RES14: u32 = 0;
pub const BITP_CT_CT_CDC_RES7_CDC_RES15: u32 = 16;
/// CDC result for stage 14
pub const BITM_CT_CT_CDC_RES7_CDC_RES14: u32 = 0x0000_FFFF;
/// CDC result for stage 15
pub const BITM_CT_CT_CDC_RES7_CDC_RES15: u32 = 0xFFFF_0000;

// CT_CT_BASELINE0
pub const BITP_CT_CT_BASELINE0_BASELINE0: u32 = 0;
pub const BITP_CT_CT_BASELINE0_CDC_AVG0: u32 = 16;
/// Baseline value for stage 0
pub const BITM_CT_CT_BASELINE0_BASELINE0: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 0
pub const BITM_CT_CT_BASELINE0_CDC_AVG0: u32 = 0xFFFF_0000;

// CT_CT_BASELINE1
pub const BITP_CT_CT_BASELINE1_BASELINE1: u32 = 0;
pub const BITP_CT_CT_BASELINE1_CDC_AVG1: u32 = 16;
/// Baseline value for stage 1
pub const BITM_CT_CT_BASELINE1_BASELINE1: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 1
pub const BITM_CT_CT_BASELINE1_CDC_AVG1: u32 = 0xFFFF_0000;

// CT_CT_BASELINE2
pub const BITP_CT_CT_BASELINE2_BASELINE2: u32 = 0;
pub const BITP_CT_CT_BASELINE2_CDC_AVG2: u32 = 16;
/// Baseline value for stage 2
pub const BITM_CT_CT_BASELINE2_BASELINE2: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 2
pub const BITM_CT_CT_BASELINE2_CDC_AVG2: u32 = 0xFFFF_0000;

// CT_CT_BASELINE3
pub const BITP_CT_CT_BASELINE3_BASELINE3: u32 = 0;
pub const BITP_CT_CT_BASELINE3_CDC_AVG3: u32 = 16;
/// Baseline value for stage 3
pub const BITM_CT_CT_BASELINE3_BASELINE3: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 3
pub const BITM_CT_CT_BASELINE3_CDC_AVG3: u32 = 0xFFFF_0000;

// CT_CT_BASELINE4
pub const BITP_CT_CT_BASELINE4_BASELINE4: u32 = 0;
pub const BITP_CT_CT_BASELINE4_CDC_AVG4: u32 = 16;
/// Baseline value for stage 4
pub const BITM_CT_CT_BASELINE4_BASELINE4: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 4
pub const BITM_CT_CT_BASELINE4_CDC_AVG4: u32 = 0xFFFF_0000;

// CT_CT_BASELINE5
pub const BITP_CT_CT_BASELINE5_BASELINE5: u32 = 0;
pub const BITP_CT_CT_BASELINE5_CDC_AVG5: u32 = 16;
/// Baseline value for stage 5
pub const BITM_CT_CT_BASELINE5_BASELINE5: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 5
pub const BITM_CT_CT_BASELINE5_CDC_AVG5: u32 = 0xFFFF_0000;

// CT_CT_BASELINE6
pub const BITP_CT_CT_BASELINE6_BASELINE6: u32 = 0;
pub const BITP_CT_CT_BASELINE6_CDC_AVG6: u32 = 16;
/// Baseline value for stage 6
pub const BITM_CT_CT_BASELINE6_BASELINE6: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 6
pub const BITM_CT_CT_BASELINE6_CDC_AVG6: u32 = 0xFFFF_0000;

// CT_CT_BASELINE7
pub const BITP_CT_CT_BASELINE7_BASELINE7: u32 = 0;
pub const BITP_CT_CT_BASELINE7_CDC_AVG7: u32 = 16;
/// Baseline value for stage 7
pub const BITM_CT_CT_BASELINE7_BASELINE7: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 7
pub const BITM_CT_CT_BASELINE7_CDC_AVG7: u32 = 0xFFFF_0000;

// CT_CT_BASELINE8
pub const BITP_CT_CT_BASELINE8_BASELINE8: u32 = 0;
pub const BITP_CT_CT_BASELINE8_CDC_AVG8: u32 = 16;
/// Baseline value for stage 8
pub const BITM_CT_CT_BASELINE8_BASELINE8: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 8
pub const BITM_CT_CT_BASELINE8_CDC_AVG8: u32 = 0xFFFF_0000;

// CT_CT_BASELINE9
pub const BITP_CT_CT_BASELINE9_BASELINE9: u32 = 0;
pub const BITP_CT_CT_BASELINE9_CDC_AVG9: u32 = 16;
/// Baseline value for stage 9
pub const BITM_CT_CT_BASELINE9_BASELINE9: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 9
pub const BITM_CT_CT_BASELINE9_CDC_AVG9: u32 = 0xFFFF_0000;

// CT_CT_BASELINE10
pub const BITP_CT_CT_BASELINE10_BASELINE10: u32 = 0;
pub const BITP_CT_CT_BASELINE10_CDC_AVG10: u32 = 16;
/// Baseline value for stage 10
pub const BITM_CT_CT_BASELINE10_BASELINE10: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 10
pub const BITM_CT_CT_BASELINE10_CDC_AVG10: u32 = 0xFFFF_0000;

// CT_CT_BASELINE11
pub const BITP_CT_CT_BASELINE11_BASELINE11: u32 = 0;
pub const BITP_CT_CT_BASELINE11_CDC_AVG11: u32 = 16;
/// Baseline value for stage 11
pub const BITM_CT_CT_BASELINE11_BASELINE11: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 11
pub const BITM_CT_CT_BASELINE11_CDC_AVG11: u32 = 0xFFFF_0000;

// CT_CT_BASELINE12
pub const BITP_CT_CT_BASELINE12_BASELINE12: u32 = 0;
pub const BITP_CT_CT_BASELINE12_CDC_AVG12: u32 = 16;
/// Baseline value for stage 12
pub const BITM_CT_CT_BASELINE12_BASELINE12: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 12
pub const BITM_CT_CT_BASELINE12_CDC_AVG12: u32 = 0xFFFF_0000;

// CT_CT_BASELINE13
pub const BITP_CT_CT_BASELINE13_BASELINE13: u32 = 0;
pub const BITP_CT_CT_BASELINE13_CDC_AVG13: u32 = 16;
/// Baseline value for stage 13
pub const BITM_CT_CT_BASELINE13_BASELINE13: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 13
pub const BITM_CT_CT_BASELINE13_CDC_AVG13: u32 = 0xFFFF_0000;

// CT_CT_BASELINE14
pub const BITP_CT_CT_BASELINE14_BASELINE14: u32 = 0;
pub const BITP_CT_CT_BASELINE14_CDC_AVG14: u32 = 16;
/// Baseline value for stage 14
pub const BITM_CT_CT_BASELINE14_BASELINE14: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 14
pub const BITM_CT_CT_BASELINE14_CDC_AVG14: u32 = 0xFFFF_0000;

// CT_CT_BASELINE15
pub const BITP_CT_CT_BASELINE15_BASELINE15: u32 = 0;
pub const BITP_CT_CT_BASELINE15_CDC_AVG15: u32 = 16;
/// Baseline value for stage 15
pub const BITM_CT_CT_BASELINE15_BASELINE15: u32 = 0x0000_FFFF;
/// Averaged CDC value for stage 15
pub const BITM_CT_CT_BASELINE15_CDC_AVG15: u32 = 0xFFFF_0000;

// CT_CT_PK2PK0
pub const BITP_CT_CT_PK2PK0_PK2PK0: u32 = 0;
pub const BITP_CT_CT_PK2PK0_PK2PK1: u32 = 16;
/// Peak to peak value for stage 0
pub const BITM_CT_CT_PK2PK0_PK2PK0: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 1
pub const BITM_CT_CT_PK2PK0_PK2PK1: u32 = 0xFFFF_0000;

// CT_CT_PK2PK1
pub const BITP_CT_CT_PK2PK1_PK2PK2: u32 = 0;
pub const BITP_CT_CT_PK2PK1_PK2PK3: u32 = 16;
/// Peak to peak value for stage 2
pub const BITM_CT_CT_PK2PK1_PK2PK2: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 3
pub const BITM_CT_CT_PK2PK1_PK2PK3: u32 = 0xFFFF_0000;

// CT_CT_PK2PK2
pub const BITP_CT_CT_PK2PK2_PK2PK4: u32 = 0;
pub const BITP_CT_CT_PK2PK2_PK2PK5: u32 = 16;
/// Peak to peak value for stage 4
pub const BITM_CT_CT_PK2PK2_PK2PK4: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 5
pub const BITM_CT_CT_PK2PK2_PK2PK5: u32 = 0xFFFF_0000;

// CT_CT_PK2PK3
pub const BITP_CT_CT_PK2PK3_PK2PK6: u32 = 0;
pub const BITP_CT_CT_PK2PK3_PK2PK7: u32 = 16;
/// Peak to peak value for stage 6
pub const BITM_CT_CT_PK2PK3_PK2PK6: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 7
pub const BITM_CT_CT_PK2PK3_PK2PK7: u32 = 0xFFFF_0000;

// CT_CT_PK2PK4
pub const BITP_CT_CT_PK2PK4_PK2PK8: u32 = 0;
pub const BITP_CT_CT_PK2PK4_PK2PK9: u32 = 16;
/// Peak to peak value for stage 8
pub const BITM_CT_CT_PK2PK4_PK2PK8: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 9
pub const BITM_CT_CT_PK2PK4_PK2PK9: u32 = 0xFFFF_0000;

// CT_CT_PK2PK5
pub const BITP_CT_CT_PK2PK5_PK2PK10: u32 = 0;
pub const BITP_CT_CT_PK2PK5_PK2PK11: u32 = 16;
/// Peak to peak value for stage 10
pub const BITM_CT_CT_PK2PK5_PK2PK10: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 11
pub const BITM_CT_CT_PK2PK5_PK2PK11: u32 = 0xFFFF_0000;

// CT_CT_PK2PK6
pub const BITP_CT_CT_PK2PK6_PK2PK12: u32 = 0;
pub const BITP_CT_CT_PK2PK6_PK2PK13: u32 = 16;
/// Peak to peak value for stage 12
pub const BITM_CT_CT_PK2PK6_PK2PK12: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 13
pub const BITM_CT_CT_PK2PK6_PK2PK13: u32 = 0xFFFF_0000;

// CT_CT_PK2PK7
pub const BITP_CT_CT_PK2PK7_PK2PK14: u32 = 0;
pub const BITP_CT_CT_PK2PK7_PK2PK15: u32 = 16;
/// Peak to peak value for stage 14
pub const BITM_CT_CT_PK2PK7_PK2PK14: u32 = 0x0000_FFFF;
/// Peak to peak value for stage 15
pub const BITM_CT_CT_PK2PK7_PK2PK15: u32 = 0xFFFF_0000;
