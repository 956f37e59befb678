//! HID Encoding Tables
//!
//! This module contains the static dictionary that drives descriptor compilation: the item token
//! table, per-item argument tables, the unit system/base/exponent tables and the usage tables of
//! every supported usage page. All tables are immutable and may be shared freely between
//! concurrent compiles.
//!
//! Refer to the USB Device Class Definition for Human Interface Devices (HID) Version 1.11,
//! sections 6.2.2.4 through 6.2.2.8, and to the HID Usage Tables 1.2 for the table contents.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

/// Usage type bit assignments (HID 1.11 ch. 3.4). These are carried per usage entry as plain
/// data; validating items against them is out of scope for the compiler.
pub(crate) mod usage_type {
  pub const LC: u32 = 1 << 0; // Linear Control
  pub const OOC: u32 = 1 << 1; // On/Off Control
  pub const MC: u32 = 1 << 2; // Momentary Control
  pub const OSC: u32 = 1 << 3; // One Shot Control
  pub const RTC: u32 = 1 << 4; // Re-trigger Control
  pub const SEL: u32 = 1 << 5; // Selector
  pub const SV: u32 = 1 << 6; // Static Value
  pub const SF: u32 = 1 << 7; // Static Flag
  pub const DV: u32 = 1 << 8; // Dynamic Value
  pub const DF: u32 = 1 << 9; // Dynamic Flag
  pub const NARY: u32 = 1 << 10; // Named Array
  pub const CA: u32 = 1 << 11; // Application Collection
  pub const CL: u32 = 1 << 12; // Logical Collection
  pub const CP: u32 = 1 << 13; // Physical Collection
  pub const US: u32 = 1 << 14; // Usage Switch
  pub const UM: u32 = 1 << 15; // Usage Modifier
  pub const BB: u32 = 1 << 16; // Buffered Bytes
}

use usage_type::*;

/// Argument classification of an encoding entry: either a distinguished argument class or a link
/// to a child table (argument names for an item, usage table for a page, base units for a unit
/// system, exponent digits for a base unit).
#[derive(Debug, Clone, Copy)]
pub(crate) enum ArgMap {
  /// The entry takes no arguments and has no children.
  None,
  /// A single unsigned numeric argument.
  Unsigned,
  /// A single signed numeric argument.
  Signed,
  /// Flag name that clears its bit instead of setting it (Input/Output/Feature).
  Clear,
  /// Argument names resolve against the table of the active usage page.
  Usage,
  /// Takes no arguments; participates in the collection balance check.
  EndCollection,
  /// Collection type argument table.
  Collection(&'static [Encoding]),
  /// Comma-separated flag argument table (Input/Output/Feature).
  Flags(&'static [Encoding]),
  /// Delimiter argument table; the value participates in the open/close balance check.
  Delimiter(&'static [Encoding]),
  /// Unit exponent digit table; the encoded payload is a signed 4-bit field.
  Exponent(&'static [Encoding]),
  /// Unit system argument table; a match opens a nested unit description.
  UnitSystem(&'static [Encoding]),
  /// Usage page argument table; a named match becomes the active usage page.
  UsagePage(&'static [Encoding]),
  /// Plain child table (per-page usages, base units of a system, exponents of a base unit).
  Table(&'static [Encoding]),
}

impl ArgMap {
  /// Returns the child table for any table-carrying variant.
  pub(crate) fn table(&self) -> Option<&'static [Encoding]> {
    match *self {
      ArgMap::Collection(table)
      | ArgMap::Flags(table)
      | ArgMap::Delimiter(table)
      | ArgMap::Exponent(table)
      | ArgMap::UnitSystem(table)
      | ArgMap::UsagePage(table)
      | ArgMap::Table(table) => Some(table),
      _ => None,
    }
  }

  /// Returns true if an item with this argument classification may not be written without an
  /// argument list.
  pub(crate) fn requires_argument(&self) -> bool {
    match *self {
      ArgMap::Usage => true,
      other => other.table().is_some_and(|table| !table.is_empty()),
    }
  }
}

/// Single encoding dictionary entry. Index-bearing names end in `#` and span two consecutive
/// entries carrying the first and last legal index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Encoding {
  /// Token name, matched case-insensitively.
  pub name: &'static str,
  /// Encoded value (item prefix, argument bit, usage id, nibble index).
  pub value: u32,
  /// Usage type bits for usage entries, zero elsewhere.
  pub usage_types: u32,
  /// Argument classification and child table link.
  pub args: ArgMap,
}

impl Encoding {
  const fn new(name: &'static str, value: u32) -> Self {
    Encoding { name, value, usage_types: 0, args: ArgMap::None }
  }

  const fn usage(name: &'static str, value: u32, usage_types: u32) -> Self {
    Encoding { name, value, usage_types, args: ArgMap::None }
  }

  const fn clear(name: &'static str, value: u32) -> Self {
    Encoding { name, value, usage_types: 0, args: ArgMap::Clear }
  }

  const fn table(name: &'static str, value: u32, table: &'static [Encoding]) -> Self {
    Encoding { name, value, usage_types: 0, args: ArgMap::Table(table) }
  }

  const fn args(name: &'static str, value: u32, args: ArgMap) -> Self {
    Encoding { name, value, usage_types: 0, args }
  }
}

/// ReportSize item prefix; appearances are counted for the collection balance check.
pub(crate) const REPORT_SIZE_PREFIX: u32 = 0x74;

/// ReportCount item prefix; appearances are counted for the collection balance check.
pub(crate) const REPORT_COUNT_PREFIX: u32 = 0x94;

/// Item token table. Values carry the short item prefix byte with zero size bits; the payload
/// width is ORed into the low two bits by the encoder (HID 1.11 ch. 6.2.2.2).
pub(crate) const ITEMS: &[Encoding] = &[
  // Main items (HID 1.11 ch. 6.2.2.4)
  Encoding::args("Input", 0x80, ArgMap::Flags(INPUT_FLAGS)),
  Encoding::args("Output", 0x90, ArgMap::Flags(OUTPUT_FEATURE_FLAGS)),
  Encoding::args("Feature", 0xB0, ArgMap::Flags(OUTPUT_FEATURE_FLAGS)),
  Encoding::args("Collection", 0xA0, ArgMap::Collection(COLLECTION_TYPES)),
  Encoding::args("EndCollection", 0xC0, ArgMap::EndCollection),
  // Global items (HID 1.11 ch. 6.2.2.7)
  Encoding::args("UsagePage", 0x04, ArgMap::UsagePage(USAGE_PAGES)),
  Encoding::args("LogicalMinimum", 0x14, ArgMap::Signed),
  Encoding::args("LogicalMaximum", 0x24, ArgMap::Signed),
  Encoding::args("PhysicalMinimum", 0x34, ArgMap::Signed),
  Encoding::args("PhysicalMaximum", 0x44, ArgMap::Signed),
  Encoding::args("UnitExponent", 0x54, ArgMap::Exponent(UNIT_EXPONENTS)),
  Encoding::args("Unit", 0x64, ArgMap::UnitSystem(UNIT_SYSTEMS)),
  Encoding::args("ReportSize", REPORT_SIZE_PREFIX, ArgMap::Unsigned),
  Encoding::args("ReportId", 0x84, ArgMap::Unsigned),
  Encoding::args("ReportCount", REPORT_COUNT_PREFIX, ArgMap::Unsigned),
  Encoding::new("Push", 0xA4),
  Encoding::new("Pop", 0xB4),
  // Local items (HID 1.11 ch. 6.2.2.8; all local items take unsigned values)
  Encoding::args("Usage", 0x08, ArgMap::Usage),
  Encoding::args("UsageMinimum", 0x18, ArgMap::Usage),
  Encoding::args("UsageMaximum", 0x28, ArgMap::Usage),
  Encoding::args("DesignatorIndex", 0x38, ArgMap::Unsigned),
  Encoding::args("DesignatorMinimum", 0x48, ArgMap::Unsigned),
  Encoding::args("DesignatorMaximum", 0x58, ArgMap::Unsigned),
  Encoding::args("StringIndex", 0x78, ArgMap::Unsigned),
  Encoding::args("StringMinimum", 0x88, ArgMap::Unsigned),
  Encoding::args("StringMaximum", 0x98, ArgMap::Unsigned),
  Encoding::args("Delimiter", 0xA8, ArgMap::Delimiter(DELIMITER_KINDS)),
];

/// Collection item argument table (HID 1.11 ch. 6.2.2.6).
pub(crate) const COLLECTION_TYPES: &[Encoding] = &[
  Encoding::new("Physical", 0x00),
  Encoding::new("Application", 0x01),
  Encoding::new("Logical", 0x02),
  Encoding::new("Report", 0x03),
  Encoding::new("NamedArray", 0x04),
  Encoding::new("UsageSwitch", 0x05),
  Encoding::new("UsageModifier", 0x06),
];

/// Input item flag argument table (HID 1.11 ch. 6.2.2.5).
pub(crate) const INPUT_FLAGS: &[Encoding] = &[
  Encoding::clear("Data", 0x001),
  Encoding::new("Cnst", 0x001),
  Encoding::clear("Ary", 0x002),
  Encoding::new("Var", 0x002),
  Encoding::clear("Abs", 0x004),
  Encoding::new("Rel", 0x004),
  Encoding::clear("NWarp", 0x008),
  Encoding::new("Warp", 0x008),
  Encoding::clear("Lin", 0x010),
  Encoding::new("NLin", 0x010),
  Encoding::clear("Prf", 0x020),
  Encoding::new("NPrf", 0x020),
  Encoding::clear("NNull", 0x040),
  Encoding::new("Null", 0x040),
  Encoding::clear("Bit", 0x100),
  Encoding::new("Buf", 0x100),
];

/// Output/Feature item flag argument table (HID 1.11 ch. 6.2.2.5).
pub(crate) const OUTPUT_FEATURE_FLAGS: &[Encoding] = &[
  Encoding::clear("Data", 0x001),
  Encoding::new("Cnst", 0x001),
  Encoding::clear("Ary", 0x002),
  Encoding::new("Var", 0x002),
  Encoding::clear("Abs", 0x004),
  Encoding::new("Rel", 0x004),
  Encoding::clear("NWarp", 0x008),
  Encoding::new("Warp", 0x008),
  Encoding::clear("Lin", 0x010),
  Encoding::new("NLin", 0x010),
  Encoding::clear("Prf", 0x020),
  Encoding::new("NPrf", 0x020),
  Encoding::clear("NNull", 0x040),
  Encoding::new("Null", 0x040),
  Encoding::clear("NVol", 0x080),
  Encoding::new("Vol", 0x080),
  Encoding::clear("Bit", 0x100),
  Encoding::new("Buf", 0x100),
];

/// Unit exponent nibble table (HID 1.11 ch. 6.2.2.7).
pub(crate) const UNIT_EXPONENTS: &[Encoding] = &[
  Encoding::new("0", 0x0),
  Encoding::new("1", 0x1),
  Encoding::new("2", 0x2),
  Encoding::new("3", 0x3),
  Encoding::new("4", 0x4),
  Encoding::new("5", 0x5),
  Encoding::new("6", 0x6),
  Encoding::new("7", 0x7),
  Encoding::new("-8", 0x8),
  Encoding::new("-7", 0x9),
  Encoding::new("-6", 0xA),
  Encoding::new("-5", 0xB),
  Encoding::new("-4", 0xC),
  Encoding::new("-3", 0xD),
  Encoding::new("-2", 0xE),
  Encoding::new("-1", 0xF),
];

/// Base unit nibble index table (HID 1.11 ch. 6.2.2.7).
pub(crate) const BASE_UNITS: &[Encoding] = &[
  Encoding::table("Length", 1, UNIT_EXPONENTS),
  Encoding::table("Mass", 2, UNIT_EXPONENTS),
  Encoding::table("Time", 3, UNIT_EXPONENTS),
  Encoding::table("Temp", 4, UNIT_EXPONENTS),
  Encoding::table("Current", 5, UNIT_EXPONENTS),
  Encoding::table("Luminous", 6, UNIT_EXPONENTS),
];

/// Unit system table (HID 1.11 ch. 6.2.2.7).
pub(crate) const UNIT_SYSTEMS: &[Encoding] = &[
  Encoding::table("None", 0x00, BASE_UNITS),  // Length,     Mass, Time,    Temp,       Current, Luminous
  Encoding::table("SiLin", 0x01, BASE_UNITS), // Centimeter, Gram, Seconds, Kelvin,     Ampere,  Candela
  Encoding::table("SiRot", 0x02, BASE_UNITS), // Radians,    Gram, Seconds, Kelvin,     Ampere,  Candela
  Encoding::table("EngLin", 0x03, BASE_UNITS), // Inch,       Slug, Seconds, Fahrenheit, Ampere,  Candela
  Encoding::table("EngRot", 0x04, BASE_UNITS), // Degrees,    Slug, Seconds, Fahrenheit, Ampere,  Candela
];

/// Delimiter argument table (HID 1.11 ch. 6.2.2.8).
pub(crate) const DELIMITER_KINDS: &[Encoding] = &[
  Encoding::new("Close", 0x00),
  Encoding::new("Open", 0x01),
];

/// Generic Desktop usage table (HID Usage Tables 1.2 ch. 4).
pub(crate) const GENERIC_DESKTOP: &[Encoding] = &[
  Encoding::usage("Pointer", 0x01, CP),
  Encoding::usage("Mouse", 0x02, CA),
  Encoding::usage("Joystick", 0x04, CA),
  Encoding::usage("Gamepad", 0x05, CA),
  Encoding::usage("Keyboard", 0x06, CA),
  Encoding::usage("Keypad", 0x07, CA),
  Encoding::usage("MultiAxisController", 0x08, CA),
  Encoding::usage("TabletPcSystemControls", 0x09, CA),
  Encoding::usage("WaterCoolingDevice", 0x0A, CA),
  Encoding::usage("ComputerChassisDevice", 0x0B, CA),
  Encoding::usage("WirelessRadioControls", 0x0C, CA),
  Encoding::usage("PortableDeviceControl", 0x0D, CA),
  Encoding::usage("SystemMultiAxisController", 0x0E, CA),
  Encoding::usage("SpatialController", 0x0F, CA),
  Encoding::usage("AssistiveControl", 0x10, CA),
  Encoding::usage("DeviceDock", 0x11, CA),
  Encoding::usage("DockableDevice", 0x12, CA),
  Encoding::usage("X", 0x30, DV),
  Encoding::usage("Y", 0x31, DV),
  Encoding::usage("Z", 0x32, DV),
  Encoding::usage("Rx", 0x33, DV),
  Encoding::usage("Ry", 0x34, DV),
  Encoding::usage("Rz", 0x35, DV),
  Encoding::usage("Slider", 0x36, DV),
  Encoding::usage("Dial", 0x37, DV),
  Encoding::usage("Wheel", 0x38, DV),
  Encoding::usage("HatSwitch", 0x39, DV),
  Encoding::usage("CountedBuffer", 0x3A, CL),
  Encoding::usage("ByteCount", 0x3B, DV),
  Encoding::usage("MotionWakeup", 0x3C, OSC | DF),
  Encoding::usage("Start", 0x3D, OOC),
  Encoding::usage("Select", 0x3E, OOC),
  Encoding::usage("Vx", 0x40, DV),
  Encoding::usage("Vy", 0x41, DV),
  Encoding::usage("Vz", 0x42, DV),
  Encoding::usage("Vbrx", 0x43, DV),
  Encoding::usage("Vbry", 0x44, DV),
  Encoding::usage("Vbrz", 0x45, DV),
  Encoding::usage("Vno", 0x46, DV),
  Encoding::usage("FeatureNotification", 0x47, DV | DF),
  Encoding::usage("ResolutionMultiplier", 0x48, DV),
  Encoding::usage("Qx", 0x49, DV),
  Encoding::usage("Qy", 0x4A, DV),
  Encoding::usage("Qz", 0x4B, DV),
  Encoding::usage("Qw", 0x4C, DV),
  Encoding::usage("SystemControl", 0x80, CA),
  Encoding::usage("SystemPowerDown", 0x81, OSC),
  Encoding::usage("SystemSleep", 0x82, OSC),
  Encoding::usage("SystemWakeUp", 0x83, OSC),
  Encoding::usage("SystemContextMenu", 0x84, OSC),
  Encoding::usage("SystemMainMenu", 0x85, OSC),
  Encoding::usage("SystemAppMenu", 0x86, OSC),
  Encoding::usage("SystemMenuHelp", 0x87, OSC),
  Encoding::usage("SystemMenuExit", 0x88, OSC),
  Encoding::usage("SystemMenuSelect", 0x89, OSC),
  Encoding::usage("SystemMenuRight", 0x8A, RTC),
  Encoding::usage("SystemMenuLeft", 0x8B, RTC),
  Encoding::usage("SystemMenuUp", 0x8C, RTC),
  Encoding::usage("SystemMenuDown", 0x8D, RTC),
  Encoding::usage("SystemColdRestart", 0x8E, OSC),
  Encoding::usage("SystemWarmRestart", 0x8F, OSC),
  Encoding::usage("DpadUp", 0x90, OOC),
  Encoding::usage("DpadDown", 0x91, OOC),
  Encoding::usage("DpadRight", 0x92, OOC),
  Encoding::usage("DpadLeft", 0x93, OOC),
  Encoding::usage("IndexTrigger", 0x94, MC | DV),
  Encoding::usage("PalmTrigger", 0x95, MC | DV),
  Encoding::usage("Thumbstick", 0x96, CP),
  Encoding::usage("SystemFunctionShift", 0x97, MC),
  Encoding::usage("SystemFunctionShiftLock", 0x98, OOC),
  Encoding::usage("SystemFunctionShiftLockIndicator", 0x99, DV),
  Encoding::usage("SystemDismissNotification", 0x9A, OSC),
  Encoding::usage("SystemDoNotDisturb", 0x9B, OOC),
  Encoding::usage("SystemDock", 0xA0, OSC),
  Encoding::usage("SystemUndock", 0xA1, OSC),
  Encoding::usage("SystemSetup", 0xA2, OSC),
  Encoding::usage("SystemBreak", 0xA3, OSC),
  Encoding::usage("SystemDebuggerBreak", 0xA4, OSC),
  Encoding::usage("ApplicationBreak", 0xA5, OSC),
  Encoding::usage("ApplicationDebuggerBreak", 0xA6, OSC),
  Encoding::usage("SystemSpeakerMute", 0xA7, OSC),
  Encoding::usage("SystemHibernate", 0xA8, OSC),
  Encoding::usage("SystemDisplayInvert", 0xB0, OSC),
  Encoding::usage("SystemDisplayInternal", 0xB1, OSC),
  Encoding::usage("SystemDisplayExternal", 0xB2, OSC),
  Encoding::usage("SystemDisplayBoth", 0xB3, OSC),
  Encoding::usage("SystemDisplayDual", 0xB4, OSC),
  Encoding::usage("SystemDisplayToggleIntExtMode", 0xB5, OSC),
  Encoding::usage("SystemDisplaySwapPrimarySecondary", 0xB6, OSC),
  Encoding::usage("SystemDisplayToggleLcdAutoscale", 0xB7, OSC),
  Encoding::usage("SensorZone", 0xC0, CL),
  Encoding::usage("Rpm", 0xC1, DV),
  Encoding::usage("CoolantLevel", 0xC2, DV),
  Encoding::usage("CoolantCriticalLevel", 0xC3, SV),
  Encoding::usage("CoolantPump", 0xC4, US),
  Encoding::usage("ChassisEnclosure", 0xC5, CL),
  Encoding::usage("WirelessRadioButton", 0xC6, OOC),
  Encoding::usage("WirelessRadioLed", 0xC7, OOC),
  Encoding::usage("WirelessRadioSliderSwitch", 0xC8, OOC),
  Encoding::usage("SystemDisplayRotationLockButton", 0xC9, OOC),
  Encoding::usage("SystemDisplayRotationLockSliderSwitch", 0xCA, OOC),
  Encoding::usage("ControlEnable", 0xCB, DF),
  Encoding::usage("DockableDeviceUniqueId", 0xD0, DV),
  Encoding::usage("DockableDeviceVendorId", 0xD1, DV),
  Encoding::usage("DockableDevicePrimaryUsagePage", 0xD2, DV),
  Encoding::usage("DockableDevicePrimaryUsageId", 0xD3, DV),
  Encoding::usage("DockableDeviceDockingState", 0xD4, DF),
  Encoding::usage("DockableDeviceDisplayOcclusion", 0xD5, CL),
  Encoding::usage("DockableDeviceObjectType", 0xD6, DV),
];

/// Simulation Controls usage table (HID Usage Tables 1.2 ch. 5).
pub(crate) const SIMULATION_CONTROLS: &[Encoding] = &[
  Encoding::usage("FlighSimulationDevice", 0x01, CA),
  Encoding::usage("AutomobileSimulationDevice", 0x02, CA),
  Encoding::usage("TankSimulationDevice", 0x03, CA),
  Encoding::usage("SpaceshipSimulationDevice", 0x04, CA),
  Encoding::usage("SubmarineSimulationDevice", 0x05, CA),
  Encoding::usage("SailingSimulationDevice", 0x06, CA),
  Encoding::usage("MotorcycleSimiulationDevice", 0x07, CA),
  Encoding::usage("SportsSimulationDevice", 0x08, CA),
  Encoding::usage("AirplaneSimulationDevice", 0x09, CA),
  Encoding::usage("HelicopterSimulationDevice", 0x0A, CA),
  Encoding::usage("MagicCarpetSimulationDevice", 0x0B, CA),
  Encoding::usage("BicycleSimulationDevice", 0x0C, CA),
  Encoding::usage("FlightControlStick", 0x20, CA),
  Encoding::usage("FlightStick", 0x21, CA),
  Encoding::usage("CyclicControl", 0x22, CP),
  Encoding::usage("CyclicTrim", 0x23, CP),
  Encoding::usage("FlightYoke", 0x24, CA),
  Encoding::usage("TrackControl", 0x25, CP),
  Encoding::usage("Aileron", 0xB0, DV),
  Encoding::usage("AileronTrim", 0xB1, DV),
  Encoding::usage("AntiTorqueControl", 0xB2, DV),
  Encoding::usage("AutopilotEnable", 0xB3, OOC),
  Encoding::usage("ChaffRelease", 0xB4, OSC),
  Encoding::usage("CollectiveControl", 0xB5, DV),
  Encoding::usage("DiveBrake", 0xB6, DV),
  Encoding::usage("ElectronicCountermeasures", 0xB7, OOC),
  Encoding::usage("Elevator", 0xB8, DV),
  Encoding::usage("ElevatorTrim", 0xB9, DV),
  Encoding::usage("Rudder", 0xBA, DV),
  Encoding::usage("Throttle", 0xBB, DV),
  Encoding::usage("FlightCommunications", 0xBC, OOC),
  Encoding::usage("FlareRelease", 0xBD, OSC),
  Encoding::usage("LandingGear", 0xBE, OOC),
  Encoding::usage("ToeBrake", 0xBF, DV),
  Encoding::usage("Trigger", 0xC0, MC),
  Encoding::usage("WeaponsArm", 0xC1, OOC),
  Encoding::usage("WeaponsSelect", 0xC2, OSC),
  Encoding::usage("WingFlaps", 0xC3, DV),
  Encoding::usage("Accelerator", 0xC4, DV),
  Encoding::usage("Brake", 0xC5, DV),
  Encoding::usage("Clutch", 0xC6, DV),
  Encoding::usage("Shifter", 0xC7, DV),
  Encoding::usage("Steering", 0xC8, DV),
  Encoding::usage("TurretDirection", 0xC9, DV),
  Encoding::usage("BarrelElevation", 0xCA, DV),
  Encoding::usage("DivePlane", 0xCB, DV),
  Encoding::usage("Ballast", 0xCC, DV),
  Encoding::usage("BicycleCrank", 0xCD, DV),
  Encoding::usage("HandleBars", 0xCE, DV),
  Encoding::usage("FrontBrake", 0xCF, DV),
  Encoding::usage("RearBrake", 0xD0, DV),
];

/// VR Controls usage table (HID Usage Tables 1.2 ch. 6).
pub(crate) const VR_CONTROLS: &[Encoding] = &[
  Encoding::usage("Belt", 0x01, CA),
  Encoding::usage("BodySuit", 0x02, CA),
  Encoding::usage("Flexor", 0x03, CP),
  Encoding::usage("Grove", 0x04, CA),
  Encoding::usage("HeadTracker", 0x05, CP),
  Encoding::usage("HeadMountedDisplay", 0x06, CA),
  Encoding::usage("HandTracker", 0x07, CA),
  Encoding::usage("Oculometer", 0x08, CA),
  Encoding::usage("Vest", 0x09, CA),
  Encoding::usage("AnimatronicDevice", 0x0A, CA),
  Encoding::usage("StereoEnable", 0x20, OOC),
  Encoding::usage("DisplayEnable", 0x21, OOC),
];

/// Sport Controls usage table (HID Usage Tables 1.2 ch. 7).
pub(crate) const SPORT_CONTROLS: &[Encoding] = &[
  Encoding::usage("BaseballBat", 0x01, CA),
  Encoding::usage("GolfBat", 0x02, CA),
  Encoding::usage("RowingMachine", 0x03, CA),
  Encoding::usage("Treadmill", 0x04, CA),
  Encoding::usage("Oar", 0x30, DV),
  Encoding::usage("Slope", 0x31, DV),
  Encoding::usage("Rate", 0x32, DV),
  Encoding::usage("StickSpeed", 0x33, DV),
  Encoding::usage("StickFaceAngle", 0x34, DV),
  Encoding::usage("StickHeelToe", 0x35, DV),
  Encoding::usage("StickFollowThrough", 0x36, DV),
  Encoding::usage("StickTempo", 0x37, DV),
  Encoding::usage("StickType", 0x38, NARY),
  Encoding::usage("StickHeight", 0x39, DV),
  Encoding::usage("Putter", 0x50, SEL),
  Encoding::usage("Iron1", 0x51, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron2", 0x52, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron3", 0x53, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron4", 0x54, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron5", 0x55, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron6", 0x56, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron7", 0x57, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron8", 0x58, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron9", 0x59, SEL),            // changed name to avoid leading digit
  Encoding::usage("Iron10", 0x5A, SEL),           // changed name to avoid leading digit
  Encoding::usage("Iron11", 0x5B, SEL),           // changed name to avoid leading digit
  Encoding::usage("SandWedge", 0x5C, SEL),
  Encoding::usage("LoftWedge", 0x5D, SEL),
  Encoding::usage("PowerWedge", 0x5E, SEL),
  Encoding::usage("Wood1", 0x5F, SEL),            // changed name to avoid leading digit
  Encoding::usage("Wood3", 0x60, SEL),            // changed name to avoid leading digit
  Encoding::usage("Wood5", 0x61, SEL),            // changed name to avoid leading digit
  Encoding::usage("Wood7", 0x62, SEL),            // changed name to avoid leading digit
  Encoding::usage("Wood9", 0x63, SEL),            // changed name to avoid leading digit
];

/// Game Controls usage table (HID Usage Tables 1.2 ch. 8).
pub(crate) const GAME_CONTROLS: &[Encoding] = &[
  Encoding::usage("3dGameController", 0x01, CA),
  Encoding::usage("PinballDevice", 0x02, CA),
  Encoding::usage("GunDevice", 0x03, CA),
  Encoding::usage("PointOfView", 0x20, CP),
  Encoding::usage("TurnRightLeft", 0x21, DV),
  Encoding::usage("PitchForwardBackward", 0x22, DV),
  Encoding::usage("RollRightLeft", 0x23, DV),
  Encoding::usage("MoveRightLeft", 0x24, DV),
  Encoding::usage("MoveForwardBackward", 0x25, DV),
  Encoding::usage("MoveUpDown", 0x26, DV),
  Encoding::usage("LeanRightLeft", 0x27, DV),
  Encoding::usage("LeanForwardBackward", 0x28, DV),
  Encoding::usage("HeightOfPov", 0x29, DV),
  Encoding::usage("Flipper", 0x2A, MC),
  Encoding::usage("SecondaryFlipper", 0x2B, MC),
  Encoding::usage("Bump", 0x2C, MC),
  Encoding::usage("NewGame", 0x2D, OSC),
  Encoding::usage("ShootBall", 0x2E, OSC),
  Encoding::usage("Player", 0x2F, OSC),
  Encoding::usage("GunBolt", 0x30, OOC),
  Encoding::usage("GunClip", 0x31, OOC),
  Encoding::usage("GunSelector", 0x32, NARY),
  Encoding::usage("GunSingleShot", 0x33, SEL),
  Encoding::usage("GunBurst", 0x34, SEL),
  Encoding::usage("GunAutomatic", 0x35, SEL),
  Encoding::usage("GunSafety", 0x36, OOC),
  Encoding::usage("GamepadFireJump", 0x37, CL),
  Encoding::usage("GamepadTrigger", 0x39, CL),
  Encoding::usage("FormFittingGamepad", 0x3A, SF),
];

/// Generic Device Controls usage table (HID Usage Tables 1.2 ch. 9).
pub(crate) const GENERIC_DEVICE_CONTROLS: &[Encoding] = &[
  Encoding::usage("BackgroundNonuserControls", 0x06, CA),
  Encoding::usage("BatteryStrength", 0x20, DV),
  Encoding::usage("WirelessChannel", 0x21, DV),
  Encoding::usage("WirelessId", 0x22, DV),
  Encoding::usage("DiscoverWirelessControl", 0x23, OSC),
  Encoding::usage("SecurityCodeCharacterEntered", 0x24, OSC),
  Encoding::usage("SecurityCodeCharacterErased", 0x25, OSC),
  Encoding::usage("SecurityCodeCleared", 0x26, OSC),
  Encoding::usage("SequenceId", 0x27, DV),
  Encoding::usage("SequenceIdReset", 0x28, DF),
  Encoding::usage("RfSignalStrength", 0x29, DV),
  Encoding::usage("SofwareVersion", 0x2A, CL),
  Encoding::usage("ProtocolVersion", 0x2B, CL),
  Encoding::usage("HardwareVersion", 0x2C, CL),
  Encoding::usage("Major", 0x2D, SV),
  Encoding::usage("Minor", 0x2E, SV),
  Encoding::usage("Revision", 0x2F, SV),
  Encoding::usage("Handedness", 0x30, NARY),
  Encoding::usage("EitherHand", 0x31, SEL),
  Encoding::usage("LeftHand", 0x32, SEL),
  Encoding::usage("RightHand", 0x33, SEL),
  Encoding::usage("BothHands", 0x34, SEL),
  Encoding::usage("GripPoseOffset", 0x40, CP),
  Encoding::usage("PointerPoseOffset", 0x41, CP),
];

/// Keyboard/Keypad usage table (HID Usage Tables 1.2 ch. 10).
pub(crate) const KEYBOARD: &[Encoding] = &[
  Encoding::usage("NoEventIndicated", 0x00, SEL),
  Encoding::usage("KeyboardErrorRollOver", 0x01, SEL),
  Encoding::usage("KeyboardPostFail", 0x02, SEL),
  Encoding::usage("KeyboardErrorUndefined", 0x03, SEL),
  Encoding::usage("KeyboardA", 0x04, SEL),
  Encoding::usage("KeyboardB", 0x05, SEL),
  Encoding::usage("KeyboardC", 0x06, SEL),
  Encoding::usage("KeyboardD", 0x07, SEL),
  Encoding::usage("KeyboardE", 0x08, SEL),
  Encoding::usage("KeyboardF", 0x09, SEL),
  Encoding::usage("KeyboardG", 0x0A, SEL),
  Encoding::usage("KeyboardH", 0x0B, SEL),
  Encoding::usage("KeyboardI", 0x0C, SEL),
  Encoding::usage("KeyboardJ", 0x0D, SEL),
  Encoding::usage("KeyboardK", 0x0E, SEL),
  Encoding::usage("KeyboardL", 0x0F, SEL),
  Encoding::usage("KeyboardM", 0x10, SEL),
  Encoding::usage("KeyboardN", 0x11, SEL),
  Encoding::usage("KeyboardO", 0x12, SEL),
  Encoding::usage("KeyboardP", 0x13, SEL),
  Encoding::usage("KeyboardQ", 0x14, SEL),
  Encoding::usage("KeyboardR", 0x15, SEL),
  Encoding::usage("KeyboardS", 0x16, SEL),
  Encoding::usage("KeyboardT", 0x17, SEL),
  Encoding::usage("KeyboardU", 0x18, SEL),
  Encoding::usage("KeyboardV", 0x19, SEL),
  Encoding::usage("KeyboardW", 0x1A, SEL),
  Encoding::usage("KeyboardX", 0x1B, SEL),
  Encoding::usage("KeyboardY", 0x1C, SEL),
  Encoding::usage("KeyboardZ", 0x1D, SEL),
  Encoding::usage("Keyboard1", 0x1E, SEL),
  Encoding::usage("Keyboard2", 0x1F, SEL),
  Encoding::usage("Keyboard3", 0x20, SEL),
  Encoding::usage("Keyboard4", 0x21, SEL),
  Encoding::usage("Keyboard5", 0x22, SEL),
  Encoding::usage("Keyboard6", 0x23, SEL),
  Encoding::usage("Keyboard7", 0x24, SEL),
  Encoding::usage("Keyboard8", 0x25, SEL),
  Encoding::usage("Keyboard9", 0x26, SEL),
  Encoding::usage("Keyboard0", 0x27, SEL),
  Encoding::usage("KeyboardEnter", 0x28, SEL),
  Encoding::usage("KeyboardEscape", 0x29, SEL),
  Encoding::usage("KeyboardDelete", 0x2A, SEL),
  Encoding::usage("KeyboardTab", 0x2B, SEL),
  Encoding::usage("KeyboardSpacebar", 0x2C, SEL),
  Encoding::usage("KeyboardMinus", 0x2D, SEL),
  Encoding::usage("KeyboardEqual", 0x2E, SEL),
  Encoding::usage("KeyboardCurlyBracketOpen", 0x2F, SEL),
  Encoding::usage("KeyboardCurlyBracketClose", 0x30, SEL),
  Encoding::usage("KeyboardBackslash", 0x31, SEL),
  Encoding::usage("KeyboardNonUsHash", 0x32, SEL),
  Encoding::usage("KeyboardColon", 0x33, SEL),
  Encoding::usage("KeyboardApostrophe", 0x34, SEL),
  Encoding::usage("KeyboardGraveAccentAndTilde", 0x35, SEL),
  Encoding::usage("KeyboardComma", 0x36, SEL),
  Encoding::usage("KeyboardPoint", 0x37, SEL),
  Encoding::usage("KeyboardSlash", 0x38, SEL),
  Encoding::usage("KeyboardCapsLock", 0x39, SEL),
  Encoding::usage("KeyboardF1", 0x3A, SEL),
  Encoding::usage("KeyboardF2", 0x3B, SEL),
  Encoding::usage("KeyboardF3", 0x3C, SEL),
  Encoding::usage("KeyboardF4", 0x3D, SEL),
  Encoding::usage("KeyboardF5", 0x3E, SEL),
  Encoding::usage("KeyboardF6", 0x3F, SEL),
  Encoding::usage("KeyboardF7", 0x40, SEL),
  Encoding::usage("KeyboardF8", 0x41, SEL),
  Encoding::usage("KeyboardF9", 0x42, SEL),
  Encoding::usage("KeyboardF10", 0x43, SEL),
  Encoding::usage("KeyboardF11", 0x44, SEL),
  Encoding::usage("KeyboardF12", 0x45, SEL),
  Encoding::usage("KeyboardPrintScreen", 0x46, SEL),
  Encoding::usage("KeyboardScrollLock", 0x47, SEL),
  Encoding::usage("KeyboardPause", 0x48, SEL),
  Encoding::usage("KeyboardInsert", 0x49, SEL),
  Encoding::usage("KeyboardHome", 0x4A, SEL),
  Encoding::usage("KeyboardPageUp", 0x4B, SEL),
  Encoding::usage("KeyboardDeleteForward", 0x4C, SEL),
  Encoding::usage("KeyboardEnd", 0x4D, SEL),
  Encoding::usage("KeyboardPageDown", 0x4E, SEL),
  Encoding::usage("KeyboardRightArrow", 0x4F, SEL),
  Encoding::usage("KeyboardLeftArrow", 0x50, SEL),
  Encoding::usage("KeyboardDownArrow", 0x51, SEL),
  Encoding::usage("KeyboardUpArrow", 0x52, SEL),
  Encoding::usage("KeypadNumLockAndClear", 0x53, SEL),
  Encoding::usage("KeypadDivide", 0x54, SEL),
  Encoding::usage("KeypadMultiply", 0x55, SEL),
  Encoding::usage("KeypadMinus", 0x56, SEL),
  Encoding::usage("KeypadPlus", 0x57, SEL),
  Encoding::usage("KeypadEnter", 0x58, SEL),
  Encoding::usage("Keypad1", 0x59, SEL),
  Encoding::usage("Keypad2", 0x5A, SEL),
  Encoding::usage("Keypad3", 0x5B, SEL),
  Encoding::usage("Keypad4", 0x5C, SEL),
  Encoding::usage("Keypad5", 0x5D, SEL),
  Encoding::usage("Keypad6", 0x5E, SEL),
  Encoding::usage("Keypad7", 0x5F, SEL),
  Encoding::usage("Keypad8", 0x60, SEL),
  Encoding::usage("Keypad9", 0x61, SEL),
  Encoding::usage("Keypad0", 0x62, SEL),
  Encoding::usage("KeypadPoint", 0x63, SEL),
  Encoding::usage("KeyboardNonUsBackslash", 0x64, SEL),
  Encoding::usage("KeyboardApplication", 0x65, SEL),
  Encoding::usage("KeyboardPower", 0x66, SEL),
  Encoding::usage("KeyboardEqual", 0x67, SEL),
  Encoding::usage("KeyboardF13", 0x68, SEL),
  Encoding::usage("KeyboardF14", 0x69, SEL),
  Encoding::usage("KeyboardF15", 0x6A, SEL),
  Encoding::usage("KeyboardF16", 0x6B, SEL),
  Encoding::usage("KeyboardF17", 0x6C, SEL),
  Encoding::usage("KeyboardF18", 0x6D, SEL),
  Encoding::usage("KeyboardF19", 0x6E, SEL),
  Encoding::usage("KeyboardF20", 0x6F, SEL),
  Encoding::usage("KeyboardF21", 0x70, SEL),
  Encoding::usage("KeyboardF22", 0x71, SEL),
  Encoding::usage("KeyboardF23", 0x72, SEL),
  Encoding::usage("KeyboardF24", 0x73, SEL),
  Encoding::usage("KeyboardExecute", 0x74, SEL),
  Encoding::usage("KeyboardHelp", 0x75, SEL),
  Encoding::usage("KeyboardMenu", 0x76, SEL),
  Encoding::usage("KeyboardSelect", 0x77, SEL),
  Encoding::usage("KeyboardStop", 0x78, SEL),
  Encoding::usage("KeyboardAgain", 0x79, SEL),
  Encoding::usage("KeyboardUndo", 0x7A, SEL),
  Encoding::usage("KeyboardCut", 0x7B, SEL),
  Encoding::usage("KeyboardCopy", 0x7C, SEL),
  Encoding::usage("KeyboardPaste", 0x7D, SEL),
  Encoding::usage("KeyboardFind", 0x7E, SEL),
  Encoding::usage("KeyboardMute", 0x7F, SEL),
  Encoding::usage("KeyboardVolumeUp", 0x80, SEL),
  Encoding::usage("KeyboardVolumeDown", 0x81, SEL),
  Encoding::usage("KeyboardLockingCapsLock", 0x82, SEL),
  Encoding::usage("KeyboardLockingNumLock", 0x83, SEL),
  Encoding::usage("KeyboardLockingScrollLock", 0x84, SEL),
  Encoding::usage("KeypadComma", 0x85, SEL),
  Encoding::usage("KeypadEqual", 0x86, SEL),
  Encoding::usage("KeyboardInternational1", 0x87, SEL),
  Encoding::usage("KeyboardInternational2", 0x88, SEL),
  Encoding::usage("KeyboardInternational3", 0x89, SEL),
  Encoding::usage("KeyboardInternational4", 0x8A, SEL),
  Encoding::usage("KeyboardInternational5", 0x8B, SEL),
  Encoding::usage("KeyboardInternational6", 0x8C, SEL),
  Encoding::usage("KeyboardInternational7", 0x8D, SEL),
  Encoding::usage("KeyboardInternational8", 0x8E, SEL),
  Encoding::usage("KeyboardInternational9", 0x8F, SEL),
  Encoding::usage("KeyboardLang1", 0x90, SEL),
  Encoding::usage("KeyboardLang2", 0x91, SEL),
  Encoding::usage("KeyboardLang3", 0x92, SEL),
  Encoding::usage("KeyboardLang4", 0x93, SEL),
  Encoding::usage("KeyboardLang5", 0x94, SEL),
  Encoding::usage("KeyboardLang6", 0x95, SEL),
  Encoding::usage("KeyboardLang7", 0x96, SEL),
  Encoding::usage("KeyboardLang8", 0x97, SEL),
  Encoding::usage("KeyboardLang9", 0x98, SEL),
  Encoding::usage("KeyboardAlternateErase", 0x99, SEL),
  Encoding::usage("KeyboardSysReqAttention", 0x9A, SEL),
  Encoding::usage("KeyboardCancel", 0x9B, SEL),
  Encoding::usage("KeyboardClear", 0x9C, SEL),
  Encoding::usage("KeyboardPrior", 0x9D, SEL),
  Encoding::usage("KeyboardReturn", 0x9E, SEL),
  Encoding::usage("KeyboardSeparator", 0x9F, SEL),
  Encoding::usage("KeyboardOut", 0xA0, SEL),
  Encoding::usage("KeyboardOper", 0xA1, SEL),
  Encoding::usage("KeyboardClearAgain", 0xA2, SEL),
  Encoding::usage("KeyboardCrSelProps", 0xA3, SEL),
  Encoding::usage("KeyboardExSel", 0xA4, SEL),
  Encoding::usage("Keypad00", 0xB0, SEL),
  Encoding::usage("Keypad000", 0xB1, SEL),
  Encoding::usage("ThausendsSeparator", 0xB2, SEL),
  Encoding::usage("DecimalSeparator", 0xB3, SEL),
  Encoding::usage("CurrencyUnit", 0xB4, SEL),
  Encoding::usage("CurrencySubUnit", 0xB5, SEL),
  Encoding::usage("KeypadBracketOpen", 0xB6, SEL),
  Encoding::usage("KeypadBracketClose", 0xB7, SEL),
  Encoding::usage("KeypadCurlyBracketOpen", 0xB8, SEL),
  Encoding::usage("KeypadCurlyBracketClose", 0xB9, SEL),
  Encoding::usage("KeypadTab", 0xBA, SEL),
  Encoding::usage("KeypadBackspace", 0xBB, SEL),
  Encoding::usage("KeypadA", 0xBC, SEL),
  Encoding::usage("KeypadB", 0xBD, SEL),
  Encoding::usage("KeypadC", 0xBE, SEL),
  Encoding::usage("KeypadD", 0xBF, SEL),
  Encoding::usage("KeypadE", 0xC0, SEL),
  Encoding::usage("KeypadF", 0xC1, SEL),
  Encoding::usage("KeypadXor", 0xC2, SEL),
  Encoding::usage("KeypadCircumflex", 0xC3, SEL),
  Encoding::usage("KeypadPercent", 0xC4, SEL),
  Encoding::usage("KeypadLessThan", 0xC5, SEL),
  Encoding::usage("KeypadGreaterThan", 0xC6, SEL),
  Encoding::usage("KeypadAmpersand", 0xC7, SEL),
  Encoding::usage("KeypadDoubleAmpersand", 0xC8, SEL),
  Encoding::usage("KeypadVerticalBar", 0xC9, SEL),
  Encoding::usage("KeypadDoubleVerticalBar", 0xCA, SEL),
  Encoding::usage("KeypadColon", 0xCB, SEL),
  Encoding::usage("KeypadHash", 0xCC, SEL),
  Encoding::usage("KeypadSpace", 0xCD, SEL),
  Encoding::usage("KeypadAtSign", 0xCE, SEL),
  Encoding::usage("KeypadExclamationMark", 0xCF, SEL),
  Encoding::usage("KeypadMemoryStore", 0xD0, SEL),
  Encoding::usage("KeypadMemoryRecall", 0xD1, SEL),
  Encoding::usage("KeypadMemoryClear", 0xD2, SEL),
  Encoding::usage("KeypadMemoryAdd", 0xD3, SEL),
  Encoding::usage("KeypadMemorySubtract", 0xD4, SEL),
  Encoding::usage("KeypadMemoryMultiply", 0xD5, SEL),
  Encoding::usage("KeypadMemoryDivide", 0xD6, SEL),
  Encoding::usage("KeypadPlusMinus", 0xD7, SEL),
  Encoding::usage("KeypadClear", 0xD8, SEL),
  Encoding::usage("KeypadClearEntry", 0xD9, SEL),
  Encoding::usage("KeypadBinary", 0xDA, SEL),
  Encoding::usage("KeypadOctal", 0xDB, SEL),
  Encoding::usage("KeypadDecimal", 0xDC, SEL),
  Encoding::usage("KeypadHexadecimal", 0xDD, SEL),
  Encoding::usage("KeyboardLeftControl", 0xE0, DV),
  Encoding::usage("KeyboardLeftShift", 0xE1, DV),
  Encoding::usage("KeyboardLeftAlt", 0xE2, DV),
  Encoding::usage("KeyboardLeftGui", 0xE3, DV),
  Encoding::usage("KeyboardRightControl", 0xE4, DV),
  Encoding::usage("KeyboardRightShift", 0xE5, DV),
  Encoding::usage("KeyboardRightAlt", 0xE6, DV),
  Encoding::usage("KeyboardRightGui", 0xE7, DV),
];

/// LED usage table (HID Usage Tables 1.2 ch. 11).
pub(crate) const LED: &[Encoding] = &[
  Encoding::usage("NumLock", 0x01, OOC),
  Encoding::usage("CapsLock", 0x02, OOC),
  Encoding::usage("ScrollLock", 0x03, OOC),
  Encoding::usage("Compose", 0x04, OOC),
  Encoding::usage("Kana", 0x05, OOC),
  Encoding::usage("Power", 0x06, OOC),
  Encoding::usage("Shift", 0x07, OOC),
  Encoding::usage("DoNotDisturb", 0x08, OOC),
  Encoding::usage("Mute", 0x09, OOC),
  Encoding::usage("ToneEnable", 0x0A, OOC),
  Encoding::usage("HighCutFilter", 0x0B, OOC),
  Encoding::usage("LowCutFitler", 0x0C, OOC),
  Encoding::usage("EqualizerEnable", 0x0D, OOC),
  Encoding::usage("SoundFieldOn", 0x0E, OOC),
  Encoding::usage("SurroundOn", 0x0F, OOC),
  Encoding::usage("Repeat", 0x10, OOC),
  Encoding::usage("Stereo", 0x11, OOC),
  Encoding::usage("SamplingRateDetect", 0x12, OOC),
  Encoding::usage("Spinning", 0x13, OOC),
  Encoding::usage("Cav", 0x14, OOC),
  Encoding::usage("Clv", 0x15, OOC),
  Encoding::usage("RecordingFormatDetect", 0x16, OOC),
  Encoding::usage("OffHook", 0x17, OOC),
  Encoding::usage("Ring", 0x18, OOC),
  Encoding::usage("MessageWaiting", 0x19, OOC),
  Encoding::usage("DataMode", 0x1A, OOC),
  Encoding::usage("BatteryOperation", 0x1B, OOC),
  Encoding::usage("BatteryOk", 0x1C, OOC),
  Encoding::usage("BatteryLow", 0x1D, OOC),
  Encoding::usage("Speaker", 0x1E, OOC),
  Encoding::usage("HeadSet", 0x1F, OOC),
  Encoding::usage("Hold", 0x20, OOC),
  Encoding::usage("Microphone", 0x21, OOC),
  Encoding::usage("Coverage", 0x22, OOC),
  Encoding::usage("NightMode", 0x23, OOC),
  Encoding::usage("SendCalls", 0x24, OOC),
  Encoding::usage("CallPickup", 0x25, OOC),
  Encoding::usage("Conference", 0x26, OOC),
  Encoding::usage("Standby", 0x27, OOC),
  Encoding::usage("CameraOn", 0x28, OOC),
  Encoding::usage("CameraOff", 0x29, OOC),
  Encoding::usage("OnLine", 0x2A, OOC),
  Encoding::usage("OffLine", 0x2B, OOC),
  Encoding::usage("Busy", 0x2C, OOC),
  Encoding::usage("Ready", 0x2D, OOC),
  Encoding::usage("PaperOut", 0x2E, OOC),
  Encoding::usage("PaperJam", 0x2F, OOC),
  Encoding::usage("Remote", 0x30, OOC),
  Encoding::usage("Forward", 0x31, OOC),
  Encoding::usage("Reverse", 0x32, OOC),
  Encoding::usage("Stop", 0x33, OOC),
  Encoding::usage("Rewind", 0x34, OOC),
  Encoding::usage("FastForward", 0x35, OOC),
  Encoding::usage("Play", 0x36, OOC),
  Encoding::usage("Pause", 0x37, OOC),
  Encoding::usage("Record", 0x38, OOC),
  Encoding::usage("Error", 0x39, OOC),
  Encoding::usage("UsageSelectedIndicator", 0x3A, US),
  Encoding::usage("UsageInUseIndicator", 0x3B, US),
  Encoding::usage("UsageMultiModeIndicator", 0x3C, UM),
  Encoding::usage("IndicatorOn", 0x3D, SEL),
  Encoding::usage("IndicatorFlash", 0x3E, SEL),
  Encoding::usage("IndicatorSlowBlink", 0x3F, SEL),
  Encoding::usage("IndicatorFastBlink", 0x40, SEL),
  Encoding::usage("IndicatorOff", 0x41, SEL),
  Encoding::usage("FlashOnTime", 0x42, DV),
  Encoding::usage("SlowBlinkOnTime", 0x43, DV),
  Encoding::usage("SlowBlinkOffTime", 0x44, DV),
  Encoding::usage("FastBlinkOnTime", 0x45, DV),
  Encoding::usage("FastBlinkOffTime", 0x46, DV),
  Encoding::usage("UsageIndicatorColor", 0x47, UM),
  Encoding::usage("IndicatorRed", 0x48, SEL),
  Encoding::usage("IndicatorGreen", 0x49, SEL),
  Encoding::usage("IndicatorAmber", 0x4A, SEL),
  Encoding::usage("GenericIndicator", 0x4B, OOC),
  Encoding::usage("SystemSyspend", 0x4C, OOC),
  Encoding::usage("ExternalPowerConnected", 0x4D, OOC),
  Encoding::usage("IndicatorBlue", 0x4E, SEL),
  Encoding::usage("IndicatorOrange", 0x4F, SEL),
  Encoding::usage("GoodStatus", 0x50, OOC),
  Encoding::usage("WarningStatus", 0x51, OOC),
  Encoding::usage("RgbLed", 0x52, CL),
  Encoding::usage("RedLedChannel", 0x53, DV),
  Encoding::usage("BlueLedChannel", 0x54, DV),
  Encoding::usage("GreenLedChannel", 0x55, DV),
  Encoding::usage("LedIntensity", 0x56, DV),
  Encoding::usage("PlayerIndicator", 0x60, NARY),
  Encoding::usage("Player1", 0x61, SEL),
  Encoding::usage("Player2", 0x62, SEL),
  Encoding::usage("Player3", 0x63, SEL),
  Encoding::usage("Player4", 0x64, SEL),
  Encoding::usage("Player5", 0x65, SEL),
  Encoding::usage("Player6", 0x66, SEL),
  Encoding::usage("Player7", 0x67, SEL),
  Encoding::usage("Player8", 0x68, SEL),
];

/// Button usage table (HID Usage Tables 1.2 ch. 12).
pub(crate) const BUTTON: &[Encoding] = &[
  Encoding::usage("NoButtonPressed", 0x00, SEL | OOC | MC | OSC),
  Encoding::usage("Button#", 0x01, SEL | OOC | MC | OSC),        // range start
  Encoding::usage("Button#", 0xFFFF, SEL | OOC | MC | OSC),      // range end
];

/// Ordinal usage table (HID Usage Tables 1.2 ch. 13).
pub(crate) const ORDINAL: &[Encoding] = &[
  Encoding::usage("Instance#", 0x01, UM),  // range start
  Encoding::usage("Instance#", 0xFFFF, UM), // range end
];

/// Telephony Device usage table (HID Usage Tables 1.2 ch. 14).
pub(crate) const TELEPHONY_DEVICE: &[Encoding] = &[
  Encoding::usage("Phone", 0x01, CA),
  Encoding::usage("AnsweringMachine", 0x02, CA),
  Encoding::usage("MessageControls", 0x03, CL),
  Encoding::usage("Handset", 0x04, CL),
  Encoding::usage("Headset", 0x05, CL),
  Encoding::usage("TelephonyKeyPad", 0x06, NARY),
  Encoding::usage("ProgrammableButton", 0x07, NARY),
  Encoding::usage("HookSwitch", 0x20, OOC),
  Encoding::usage("Flash", 0x21, MC),
  Encoding::usage("Feature", 0x22, OSC),
  Encoding::usage("Hold", 0x23, OOC),
  Encoding::usage("Radial", 0x24, OSC),
  Encoding::usage("Transfer", 0x25, OSC),
  Encoding::usage("Drop", 0x26, OSC),
  Encoding::usage("Park", 0x27, OOC),
  Encoding::usage("ForwardCalls", 0x28, OOC),
  Encoding::usage("AlternateFunction", 0x29, MC),
  Encoding::usage("Line", 0x2A, OSC | NARY),
  Encoding::usage("SpeakerPhone", 0x2B, OOC),
  Encoding::usage("Conference", 0x2C, OOC),
  Encoding::usage("RingEnable", 0x2D, OOC),
  Encoding::usage("RingSelect", 0x2E, OSC),
  Encoding::usage("PhoneMute", 0x2F, OOC),
  Encoding::usage("CallerId", 0x30, MC),
  Encoding::usage("Send", 0x31, OOC),
  Encoding::usage("SpeedDial", 0x50, OSC),
  Encoding::usage("StoreNumber", 0x51, OSC),
  Encoding::usage("RecallNumber", 0x52, OSC),
  Encoding::usage("PhoneDirectory", 0x53, OOC),
  Encoding::usage("VoiceMail", 0x70, OOC),
  Encoding::usage("ScreenCalls", 0x71, OOC),
  Encoding::usage("DoNotDisturb", 0x72, OOC),
  Encoding::usage("Message", 0x73, OSC),
  Encoding::usage("AnswerOnOff", 0x74, OOC),
  Encoding::usage("InsideDialTone", 0x90, MC),
  Encoding::usage("OutsideDialTone", 0x91, MC),
  Encoding::usage("InsideRingTone", 0x92, MC),
  Encoding::usage("OutsideRingTone", 0x93, MC),
  Encoding::usage("PriorityRingTone", 0x94, MC),
  Encoding::usage("InsideRingback", 0x95, MC),
  Encoding::usage("PriorityRingback", 0x96, MC),
  Encoding::usage("LineBusyTone", 0x97, MC),
  Encoding::usage("ReorderTone", 0x98, MC),
  Encoding::usage("CallWaitingTone", 0x99, MC),
  Encoding::usage("ConfirmationTone1", 0x9A, MC),
  Encoding::usage("ConfirmationTone2", 0x9B, MC),
  Encoding::usage("TonesOff", 0x9C, OOC),
  Encoding::usage("OutsideRingback", 0x9D, MC),
  Encoding::usage("Ringer", 0x9E, OOC),
  Encoding::usage("PhoneKey0", 0xB0, SEL),
  Encoding::usage("PhoneKey1", 0xB1, SEL),
  Encoding::usage("PhoneKey2", 0xB2, SEL),
  Encoding::usage("PhoneKey3", 0xB3, SEL),
  Encoding::usage("PhoneKey4", 0xB4, SEL),
  Encoding::usage("PhoneKey5", 0xB5, SEL),
  Encoding::usage("PhoneKey6", 0xB6, SEL),
  Encoding::usage("PhoneKey7", 0xB7, SEL),
  Encoding::usage("PhoneKey8", 0xB8, SEL),
  Encoding::usage("PhoneKey9", 0xB9, SEL),
  Encoding::usage("PhoneKeyStar", 0xBA, SEL),
  Encoding::usage("PhoneKeyPound", 0xBB, SEL),
  Encoding::usage("PhoneKeyA", 0xBC, SEL),
  Encoding::usage("PhoneKeyB", 0xBD, SEL),
  Encoding::usage("PhoneKeyC", 0xBE, SEL),
  Encoding::usage("PhoneKeyD", 0xBF, SEL),
  Encoding::usage("PhoneCallHistoryKey", 0xC0, SEL),
  Encoding::usage("PhoneCallerIdKey", 0xC1, SEL),
  Encoding::usage("PhoneSettingsKey", 0xC2, SEL),
  Encoding::usage("HostControl", 0xF0, OOC),
  Encoding::usage("HostAvailable", 0xF1, OOC),
  Encoding::usage("HostCallActive", 0xF2, OOC),
  Encoding::usage("ActivateHandsetAudio", 0xF3, OOC),
  Encoding::usage("RingType", 0xF4, NARY),
  Encoding::usage("RediablePhoneNumber", 0xF5, OOC),
  Encoding::usage("StopRingTone", 0xF8, SEL),
  Encoding::usage("PstnRingTone", 0xF9, SEL),
  Encoding::usage("HostRingTone", 0xFA, SEL),
  Encoding::usage("AlertSoundError", 0xFB, SEL),
  Encoding::usage("AlertSoundConfirm", 0xFC, SEL),
  Encoding::usage("AlertSoundNotification", 0xFD, SEL),
  Encoding::usage("SilentRing", 0xFE, SEL),
  Encoding::usage("EmailMessageWaiting", 0x108, OOC),
  Encoding::usage("VoicemailMessageWaiting", 0x109, OOC),
  Encoding::usage("HostHold", 0x10A, OOC),
  Encoding::usage("IncomingCallHistoryCount", 0x110, DV),
  Encoding::usage("OutgoingCallHistoryCount", 0x111, DV),
  Encoding::usage("IncomingCallHistory", 0x112, CL),
  Encoding::usage("OutgoingCallHistory", 0x113, CL),
  Encoding::usage("PhoneLocale", 0x114, DV),
  Encoding::usage("PhoneTimeSecond", 0x140, DV),
  Encoding::usage("PhoneTimeMinute", 0x141, DV),
  Encoding::usage("PhoneTimeHour", 0x142, DV),
  Encoding::usage("PhoneTimeDay", 0x143, DV),
  Encoding::usage("PhoneTimeMonth", 0x144, DV),
  Encoding::usage("PhoneTimeYear", 0x145, DV),
  Encoding::usage("HandsetNickname", 0x146, DV),
  Encoding::usage("AddressBookId", 0x147, DV),
  Encoding::usage("CallDuration", 0x14A, DV),
  Encoding::usage("DualModePhone", 0x14B, CA),
];

/// Consumer usage table (HID Usage Tables 1.2 ch. 15).
pub(crate) const CONSUMER: &[Encoding] = &[
  Encoding::usage("ConsumerControl", 0x01, CA),
  Encoding::usage("NumericKeyPad", 0x02, NARY),
  Encoding::usage("ProgrammableButtons", 0x03, NARY),
  Encoding::usage("Microphone", 0x04, CA),
  Encoding::usage("Headphone", 0x05, CA),
  Encoding::usage("GraphicEqualizer", 0x06, CA),
  Encoding::usage("Plus10", 0x20, OSC),                                // changed name to avoid leading digit
  Encoding::usage("Plus100", 0x21, OSC),                               // changed name to avoid leading digit
  Encoding::usage("AmPm", 0x22, OSC),
  Encoding::usage("Power", 0x30, OOC),
  Encoding::usage("Reset", 0x31, OSC),
  Encoding::usage("Sleep", 0x32, OSC),
  Encoding::usage("SleepAfter", 0x33, OSC),
  Encoding::usage("SleepMode", 0x34, RTC),
  Encoding::usage("Illumination", 0x35, OOC),
  Encoding::usage("FunctionButtons", 0x36, NARY),
  Encoding::usage("Menu", 0x40, OOC),
  Encoding::usage("MenuPick", 0x41, OSC),
  Encoding::usage("MenuUp", 0x42, OSC),
  Encoding::usage("MenuDown", 0x43, OSC),
  Encoding::usage("MenuLeft", 0x44, OSC),
  Encoding::usage("MenuRight", 0x45, OSC),
  Encoding::usage("MenuEscape", 0x46, OSC),
  Encoding::usage("MenuValueIncrease", 0x47, OSC),
  Encoding::usage("MenuValueDecrease", 0x48, OSC),
  Encoding::usage("DataOnScreen", 0x60, OOC),
  Encoding::usage("ClosedCaption", 0x61, OOC),
  Encoding::usage("ClosedCaptionSelect", 0x62, OSC),
  Encoding::usage("VcrTv", 0x63, OOC),
  Encoding::usage("BroadcastMode", 0x64, OSC),
  Encoding::usage("Snapshot", 0x65, OSC),
  Encoding::usage("Still", 0x66, OSC),
  Encoding::usage("PictureInPictureToggle", 0x67, OSC),
  Encoding::usage("PictureInPictureSwap", 0x68, OSC),
  Encoding::usage("RedMenuButton", 0x69, MC),
  Encoding::usage("GreenMenuButton", 0x6A, MC),
  Encoding::usage("BlueMenuButton", 0x6B, MC),
  Encoding::usage("YellowMenuButton", 0x6C, MC),
  Encoding::usage("Aspect", 0x6D, OSC),
  Encoding::usage("Mode3dSelect", 0x6E, OSC),                          // changed name to avoid leading digit
  Encoding::usage("DisplayBrightnessIncrement", 0x6F, RTC),
  Encoding::usage("DisplayBrightnessDecrement", 0x70, RTC),
  Encoding::usage("DisplayBrightness", 0x71, LC),
  Encoding::usage("DisplayBacklightToggle", 0x72, OOC),
  Encoding::usage("DisplaySetBrightnessToMinimum", 0x73, OSC),
  Encoding::usage("DisplaySetBrightnessToMaximum", 0x74, OSC),
  Encoding::usage("DisplaySetAutoBrightness", 0x75, OOC),
  Encoding::usage("CameraAccessEnabled", 0x76, OOC),
  Encoding::usage("CameraAccessDisabled", 0x77, OOC),
  Encoding::usage("CameraAccessToggle", 0x78, OOC),
  Encoding::usage("KeyboardBrightnessIncrement", 0x79, OSC),
  Encoding::usage("KeyboardBrightnessDecrement", 0x7A, OSC),
  Encoding::usage("KeyboardBacklightSetLevel", 0x7B, LC),
  Encoding::usage("KeyboardBacklightOoc", 0x7C, OOC),
  Encoding::usage("KeyboardBacklightSetMinimum", 0x7D, OSC),
  Encoding::usage("KeyboardBacklightSetMaximum", 0x7E, OSC),
  Encoding::usage("KeyboardBacklightAuto", 0x7F, OOC),
  Encoding::usage("Selection", 0x80, NARY),
  Encoding::usage("AssignSelection", 0x81, OSC),
  Encoding::usage("ModeStep", 0x82, OSC),
  Encoding::usage("RecallLast", 0x83, OSC),
  Encoding::usage("EnterChannel", 0x84, OSC),
  Encoding::usage("OrderMovie", 0x85, OSC),
  Encoding::usage("Channel", 0x86, LC),
  Encoding::usage("MediaSelection", 0x87, NARY),
  Encoding::usage("MediaSelectComputer", 0x88, SEL),
  Encoding::usage("MediaSelectTv", 0x89, SEL),
  Encoding::usage("MediaSelectWww", 0x8A, SEL),
  Encoding::usage("MediaSelectDvd", 0x8B, SEL),
  Encoding::usage("MediaSelectTelephone", 0x8C, SEL),
  Encoding::usage("MediaSelectProgramGuide", 0x8D, SEL),
  Encoding::usage("MediaSelectVideoPhone", 0x8E, SEL),
  Encoding::usage("MediaSelectGames", 0x8F, SEL),
  Encoding::usage("MediaSelectMessages", 0x90, SEL),
  Encoding::usage("MediaSelectCd", 0x91, SEL),
  Encoding::usage("MediaSelectVcr", 0x92, SEL),
  Encoding::usage("MediaSelectTuner", 0x93, SEL),
  Encoding::usage("Quit", 0x94, OSC),
  Encoding::usage("Help", 0x95, OOC),
  Encoding::usage("MediaSelectTape", 0x96, SEL),
  Encoding::usage("MediaSelectCable", 0x97, SEL),
  Encoding::usage("MediaSelectSatellite", 0x98, SEL),
  Encoding::usage("MediaSelectSecurity", 0x99, SEL),
  Encoding::usage("MediaSelectHome", 0x9A, SEL),
  Encoding::usage("MediaSelectCall", 0x9B, SEL),
  Encoding::usage("ChannelIncrement", 0x9C, OSC),
  Encoding::usage("ChannelDecrement", 0x9D, OSC),
  Encoding::usage("MediaSelectSap", 0x9E, SEL),
  Encoding::usage("VcrPlus", 0xA0, OSC),
  Encoding::usage("Once", 0xA1, OSC),
  Encoding::usage("Daily", 0xA2, OSC),
  Encoding::usage("Weekly", 0xA3, OSC),
  Encoding::usage("Monthly", 0xA4, OSC),
  Encoding::usage("Play", 0xB0, OOC),
  Encoding::usage("Pause", 0xB1, OOC),
  Encoding::usage("Record", 0xB2, OOC),
  Encoding::usage("FastForward", 0xB3, OOC),
  Encoding::usage("Rewind", 0xB4, OOC),
  Encoding::usage("ScanNextTrack", 0xB5, OSC),
  Encoding::usage("ScanPreviousTrack", 0xB6, OSC),
  Encoding::usage("Stop", 0xB7, OSC),
  Encoding::usage("Eject", 0xB8, OSC),
  Encoding::usage("RandomPlay", 0xB9, OOC),
  Encoding::usage("SelectDisc", 0xBA, NARY),
  Encoding::usage("EnterDisc", 0xBB, MC),
  Encoding::usage("Repeat", 0xBC, OSC),
  Encoding::usage("Tracking", 0xBD, LC),
  Encoding::usage("TrackNormal", 0xBE, OSC),
  Encoding::usage("SlowTracking", 0xBF, LC),
  Encoding::usage("FrameForward", 0xC0, RTC),
  Encoding::usage("FrameBack", 0xC1, RTC),
  Encoding::usage("Mark", 0xC2, OSC),
  Encoding::usage("ClearMark", 0xC3, OSC),
  Encoding::usage("RepeatFromMark", 0xC4, OOC),
  Encoding::usage("ReturnToMark", 0xC5, OSC),
  Encoding::usage("SearchMarkForward", 0xC6, OSC),
  Encoding::usage("SearchMarkBackwards", 0xC7, OSC),
  Encoding::usage("CounterReset", 0xC8, OSC),
  Encoding::usage("ShowCounter", 0xC9, OSC),
  Encoding::usage("TrackingIncrement", 0xCA, RTC),
  Encoding::usage("TrackingDecrement", 0xCB, RTC),
  Encoding::usage("StopEject", 0xCC, OSC),
  Encoding::usage("PlayPause", 0xCD, OSC),
  Encoding::usage("PlaySkip", 0xCE, OSC),
  Encoding::usage("VoiceCommand", 0xCF, OSC),
  Encoding::usage("InvokeCaptureInterface", 0xD0, SEL),
  Encoding::usage("StartOrStopGameRecording", 0xD1, SEL),
  Encoding::usage("HistoricalGameCapture", 0xD2, SEL),
  Encoding::usage("CaptureGameScreenshot", 0xD3, SEL),
  Encoding::usage("ShowOrHideRecordingIndicator", 0xD4, SEL),
  Encoding::usage("StartOrStopMicrophoneCapture", 0xD5, SEL),
  Encoding::usage("StartOrStopCameraCapture", 0xD6, SEL),
  Encoding::usage("StartOrStopGameBroadcast", 0xD7, SEL),
  Encoding::usage("Volume", 0xE0, LC),
  Encoding::usage("Balance", 0xE1, LC),
  Encoding::usage("Mute", 0xE2, OOC),
  Encoding::usage("Bass", 0xE3, LC),
  Encoding::usage("Treble", 0xE4, LC),
  Encoding::usage("BassBoost", 0xE5, OOC),
  Encoding::usage("SurroundMode", 0xE6, OSC),
  Encoding::usage("Loudness", 0xE7, OOC),
  Encoding::usage("Mpx", 0xE8, OOC),
  Encoding::usage("VolumeIncrement", 0xE9, RTC),
  Encoding::usage("VolumeDecrement", 0xEA, RTC),
  Encoding::usage("SpeedSelect", 0xF0, OSC),
  Encoding::usage("PlaybackSpeed", 0xF1, NARY),
  Encoding::usage("StandardPlay", 0xF2, SEL),
  Encoding::usage("LongPlay", 0xF3, SEL),
  Encoding::usage("ExtendedPlay", 0xF4, SEL),
  Encoding::usage("Slow", 0xF5, OSC),
  Encoding::usage("FanEnable", 0x100, OOC),
  Encoding::usage("FanSpeed", 0x101, LC),
  Encoding::usage("LightEnable", 0x102, OOC),
  Encoding::usage("LightIlluminationLevel", 0x103, LC),
  Encoding::usage("ClimateControlEnable", 0x104, OOC),
  Encoding::usage("RoomTemperature", 0x105, LC),
  Encoding::usage("SecurityEnalbe", 0x106, OOC),
  Encoding::usage("FireAlarm", 0x107, OSC),
  Encoding::usage("PoliceAlarm", 0x108, OSC),
  Encoding::usage("Proximity", 0x109, LC),
  Encoding::usage("Motion", 0x10A, OSC),
  Encoding::usage("DuressAlarm", 0x10B, OSC),
  Encoding::usage("HoldupAlarm", 0x10C, OSC),
  Encoding::usage("MedicalAlarm", 0x10D, OSC),
  Encoding::usage("BalanceRight", 0x150, RTC),
  Encoding::usage("BalanceLeft", 0x151, RTC),
  Encoding::usage("BassIncrement", 0x152, RTC),
  Encoding::usage("BassDecrement", 0x153, RTC),
  Encoding::usage("TrebleIncrement", 0x154, RTC),
  Encoding::usage("TrebleDecrement", 0x155, RTC),
  Encoding::usage("SpeakerSystem", 0x160, CL),
  Encoding::usage("ChannelLeft", 0x161, CL),
  Encoding::usage("ChannelRight", 0x162, CL),
  Encoding::usage("ChannelCenter", 0x163, CL),
  Encoding::usage("ChannelFront", 0x164, CL),
  Encoding::usage("ChannelCenterFront", 0x165, CL),
  Encoding::usage("ChannelSide", 0x166, CL),
  Encoding::usage("ChannelSurround", 0x167, CL),
  Encoding::usage("ChannelLowFrequencyEnhancement", 0x168, CL),
  Encoding::usage("ChannelTop", 0x169, CL),
  Encoding::usage("ChannelUnknown", 0x16A, CL),
  Encoding::usage("SubChannel", 0x170, LC),
  Encoding::usage("SubChannelIncrement", 0x171, OSC),
  Encoding::usage("SubChannelDecrement", 0x172, OSC),
  Encoding::usage("AlternateAudioIncrement", 0x173, OSC),
  Encoding::usage("AlternateAudioDecrement", 0x174, OSC),
  Encoding::usage("ApplicationLaunchButtons", 0x180, NARY),
  Encoding::usage("AlLaunchButtonConfigurationTool", 0x181, SEL),
  Encoding::usage("AlProgrammableButtonConfiguration", 0x182, SEL),
  Encoding::usage("AlConsumerControlConfiguration", 0x183, SEL),
  Encoding::usage("AlWordProcessor", 0x184, SEL),
  Encoding::usage("AlTextEditor", 0x185, SEL),
  Encoding::usage("AlSpreadsheet", 0x186, SEL),
  Encoding::usage("AlGraphicsEditor", 0x187, SEL),
  Encoding::usage("AlPresentationApp", 0x188, SEL),
  Encoding::usage("AlDatabaseApp", 0x189, SEL),
  Encoding::usage("AlEmailReader", 0x18A, SEL),
  Encoding::usage("AlNewsreader", 0x18B, SEL),
  Encoding::usage("AlVoicemail", 0x18C, SEL),
  Encoding::usage("AlContactsAddressBook", 0x18D, SEL),
  Encoding::usage("AlCalenderSchedule", 0x18E, SEL),
  Encoding::usage("AlTaskProjectManager", 0x18F, SEL),
  Encoding::usage("AlLogJournalTimecard", 0x190, SEL),
  Encoding::usage("AlCheckbookFinance", 0x191, SEL),
  Encoding::usage("AlCalculator", 0x192, SEL),
  Encoding::usage("AlAvCapturePlayback", 0x193, SEL),
  Encoding::usage("AlLocalMachineBrowser", 0x194, SEL),
  Encoding::usage("AlLanWanBrowser", 0x195, SEL),
  Encoding::usage("AlInternetBrowser", 0x196, SEL),
  Encoding::usage("AlRemoteNetworkingIspConnect", 0x197, SEL),
  Encoding::usage("AlNetworkConference", 0x198, SEL),
  Encoding::usage("AlNetworkChat", 0x199, SEL),
  Encoding::usage("AlTelephonyDialer", 0x19A, SEL),
  Encoding::usage("AlLogon", 0x19B, SEL),
  Encoding::usage("AlLogoff", 0x19C, SEL),
  Encoding::usage("AlLogonLogoff", 0x19D, SEL),
  Encoding::usage("AlTerminalLockScreensaver", 0x19E, SEL),
  Encoding::usage("AlControlPanel", 0x19F, SEL),
  Encoding::usage("AlCommandLineProcessorRun", 0x1A0, SEL),
  Encoding::usage("AlProcessTaskManager", 0x1A1, SEL),
  Encoding::usage("AlSelectTaskApplication", 0x1A2, SEL),
  Encoding::usage("AlNextTaskApplication", 0x1A3, SEL),
  Encoding::usage("AlPreviousTaskApplication", 0x1A4, SEL),
  Encoding::usage("AlPreemptiveHaltTaskApplication", 0x1A5, SEL),
  Encoding::usage("AlIntegratedHelpCenter", 0x1A6, SEL),
  Encoding::usage("AlDocuments", 0x1A7, SEL),
  Encoding::usage("AlThesaurus", 0x1A8, SEL),
  Encoding::usage("AlDictionary", 0x1A9, SEL),
  Encoding::usage("AlDesktop", 0x1AA, SEL),
  Encoding::usage("AlSpellCheck", 0x1AB, SEL),
  Encoding::usage("AlGrammarCheck", 0x1AC, SEL),
  Encoding::usage("AlWirelessStatus", 0x1AD, SEL),
  Encoding::usage("AlKeyboardLayout", 0x1AE, SEL),
  Encoding::usage("AlVirusProtection", 0x1AF, SEL),
  Encoding::usage("AlEncryption", 0x1B0, SEL),
  Encoding::usage("AlScreenSaver", 0x1B1, SEL),
  Encoding::usage("AlAlarms", 0x1B2, SEL),
  Encoding::usage("AlClock", 0x1B3, SEL),
  Encoding::usage("AlFileBrowser", 0x1B4, SEL),
  Encoding::usage("AlPowerStatus", 0x1B5, SEL),
  Encoding::usage("AlImageBrowser", 0x1B6, SEL),
  Encoding::usage("AlAudioBrowser", 0x1B7, SEL),
  Encoding::usage("AlMovieBrowser", 0x1B8, SEL),
  Encoding::usage("AlDigitalRightsManager", 0x1B9, SEL),
  Encoding::usage("AlDigitalWallet", 0x1BA, SEL),
  Encoding::usage("AlInstantMessaging", 0x1BC, SEL),
  Encoding::usage("AlOemFeatureTipsTutorialBrowser", 0x1BD, SEL),
  Encoding::usage("AlOemHelp", 0x1BE, SEL),
  Encoding::usage("AlOnlineCommunity", 0x1BF, SEL),
  Encoding::usage("AlEntertainmentContentBrowser", 0x1C0, SEL),
  Encoding::usage("AlOnlineShoppingBrowser", 0x1C1, SEL),
  Encoding::usage("AlSmartCardInformationHelp", 0x1C2, SEL),
  Encoding::usage("AlMarketMonitorFinanceBrowser", 0x1C3, SEL),
  Encoding::usage("AlCustomizedCorporateNewsBrowser", 0x1C4, SEL),
  Encoding::usage("AlOnlineActivityBrowser", 0x1C5, SEL),
  Encoding::usage("AlResearchSearchBrowser", 0x1C6, SEL),
  Encoding::usage("AlAudioPlayer", 0x1C7, SEL),
  Encoding::usage("AlMessageStatus", 0x1C8, SEL),
  Encoding::usage("AlContactSync", 0x1C9, SEL),
  Encoding::usage("AlNavigation", 0x1CA, SEL),
  Encoding::usage("AlContextAwareDesktopAssistant", 0x1CB, SEL),
  Encoding::usage("GenericGuiApplicationControls", 0x200, NARY),
  Encoding::usage("AcNew", 0x201, SEL),
  Encoding::usage("AcOpen", 0x202, SEL),
  Encoding::usage("AcClose", 0x203, SEL),
  Encoding::usage("AcExit", 0x204, SEL),
  Encoding::usage("AcMaximize", 0x205, SEL),
  Encoding::usage("AcMinimize", 0x206, SEL),
  Encoding::usage("AcSave", 0x207, SEL),
  Encoding::usage("AcPrint", 0x208, SEL),
  Encoding::usage("AcProperties", 0x209, SEL),
  Encoding::usage("AcUndo", 0x21A, SEL),
  Encoding::usage("AcCopy", 0x21B, SEL),
  Encoding::usage("AcCut", 0x21C, SEL),
  Encoding::usage("AcPaste", 0x21D, SEL),
  Encoding::usage("AcSelectAll", 0x21E, SEL),
  Encoding::usage("AcFind", 0x21F, SEL),
  Encoding::usage("AcFindAndReplace", 0x220, SEL),
  Encoding::usage("AcSearch", 0x221, SEL),
  Encoding::usage("AcGoTo", 0x222, SEL),
  Encoding::usage("AcHome", 0x223, SEL),
  Encoding::usage("AcBack", 0x224, SEL),
  Encoding::usage("AcForward", 0x225, SEL),
  Encoding::usage("AcStop", 0x226, SEL),
  Encoding::usage("AcRefresh", 0x227, SEL),
  Encoding::usage("AcPreviousLink", 0x228, SEL),
  Encoding::usage("AcNextLink", 0x229, SEL),
  Encoding::usage("AcBookmarks", 0x22A, SEL),
  Encoding::usage("AcHistory", 0x22B, SEL),
  Encoding::usage("AcSubscriptions", 0x22C, SEL),
  Encoding::usage("AcZoomIn", 0x22D, SEL),
  Encoding::usage("AcZoomOut", 0x22E, SEL),
  Encoding::usage("AcZoom", 0x22F, LC),
  Encoding::usage("AcFullScreenView", 0x230, SEL),
  Encoding::usage("AcNormalView", 0x231, SEL),
  Encoding::usage("AcViewToggle", 0x232, SEL),
  Encoding::usage("AcScrollUp", 0x233, SEL),
  Encoding::usage("AcScrollDown", 0x234, SEL),
  Encoding::usage("AcScroll", 0x235, LC),
  Encoding::usage("AcPanLeft", 0x236, SEL),
  Encoding::usage("AcPanRight", 0x237, SEL),
  Encoding::usage("AcPan", 0x238, LC),
  Encoding::usage("AcNewWindow", 0x239, SEL),
  Encoding::usage("AcTileHorizontally", 0x23A, SEL),
  Encoding::usage("AcTileVertically", 0x23B, SEL),
  Encoding::usage("AcFormat", 0x23C, SEL),
  Encoding::usage("AcEdit", 0x23D, SEL),
  Encoding::usage("AcBold", 0x23E, SEL),
  Encoding::usage("AcItalics", 0x23F, SEL),
  Encoding::usage("AcUnderline", 0x240, SEL),
  Encoding::usage("AcStrikethrough", 0x241, SEL),
  Encoding::usage("AcSubscript", 0x242, SEL),
  Encoding::usage("AcSuperscript", 0x243, SEL),
  Encoding::usage("AcAllCaps", 0x244, SEL),
  Encoding::usage("AcRemote", 0x245, SEL),
  Encoding::usage("AcResize", 0x246, SEL),
  Encoding::usage("AcFlipHorizontal", 0x247, SEL),
  Encoding::usage("AcFlipVertical", 0x248, SEL),
  Encoding::usage("AcMirrorHorizontal", 0x249, SEL),
  Encoding::usage("AcMirrorVertical", 0x24A, SEL),
  Encoding::usage("AcFontSelect", 0x24B, SEL),
  Encoding::usage("AcFontColor", 0x24C, SEL),
  Encoding::usage("AcFontSize", 0x24D, SEL),
  Encoding::usage("AcJustifyLeft", 0x24E, SEL),
  Encoding::usage("AcJustifyCenterH", 0x24F, SEL),
  Encoding::usage("AcJustifyRight", 0x250, SEL),
  Encoding::usage("AcJustifyBlockH", 0x251, SEL),
  Encoding::usage("AcJustifyTop", 0x252, SEL),
  Encoding::usage("AcJustifyCenterV", 0x253, SEL),
  Encoding::usage("AcJustifyBottom", 0x254, SEL),
  Encoding::usage("AcJustifyBlockV", 0x255, SEL),
  Encoding::usage("AcIndentDecrease", 0x256, SEL),
  Encoding::usage("AcIndentIncrease", 0x257, SEL),
  Encoding::usage("AcNumberedList", 0x258, SEL),
  Encoding::usage("AcRestartNumbering", 0x259, SEL),
  Encoding::usage("AcBulletedList", 0x25A, SEL),
  Encoding::usage("AcPromote", 0x25B, SEL),
  Encoding::usage("AcDemote", 0x25C, SEL),
  Encoding::usage("AcYes", 0x25D, SEL),
  Encoding::usage("AcNo", 0x25E, SEL),
  Encoding::usage("AcCancel", 0x25F, SEL),
  Encoding::usage("AcCatalog", 0x260, SEL),
  Encoding::usage("AcBuyCheckout", 0x261, SEL),
  Encoding::usage("AcAddToChart", 0x262, SEL),
  Encoding::usage("AcExpand", 0x263, SEL),
  Encoding::usage("AcExpandAll", 0x264, SEL),
  Encoding::usage("AcCollapse", 0x265, SEL),
  Encoding::usage("AcCollapseAll", 0x266, SEL),
  Encoding::usage("AcPrintPreview", 0x267, SEL),
  Encoding::usage("AcPasteSpecial", 0x268, SEL),
  Encoding::usage("AcInsertMode", 0x269, SEL),
  Encoding::usage("AcDelete", 0x26A, SEL),
  Encoding::usage("AcLock", 0x26B, SEL),
  Encoding::usage("AcUnlock", 0x26C, SEL),
  Encoding::usage("AcProtect", 0x26D, SEL),
  Encoding::usage("AcUnprotect", 0x26E, SEL),
  Encoding::usage("AcAttachComment", 0x26F, SEL),
  Encoding::usage("AcDeleteComment", 0x270, SEL),
  Encoding::usage("AcViewComment", 0x271, SEL),
  Encoding::usage("AcSelectWord", 0x272, SEL),
  Encoding::usage("AcSelectSentence", 0x273, SEL),
  Encoding::usage("AcSelectPragraph", 0x274, SEL),
  Encoding::usage("AcSelectColumn", 0x275, SEL),
  Encoding::usage("AcSelectRow", 0x276, SEL),
  Encoding::usage("AcSelectTable", 0x277, SEL),
  Encoding::usage("AcSelectObject", 0x278, SEL),
  Encoding::usage("AcRedoRepeat", 0x279, SEL),
  Encoding::usage("AcSort", 0x27A, SEL),
  Encoding::usage("AcSortAscending", 0x27B, SEL),
  Encoding::usage("AcSortDescending", 0x27C, SEL),
  Encoding::usage("AcFilter", 0x27D, SEL),
  Encoding::usage("AcSetClock", 0x27E, SEL),
  Encoding::usage("AcViewClock", 0x27F, SEL),
  Encoding::usage("AcSelectTimeZone", 0x280, SEL),
  Encoding::usage("AcEditTimeZones", 0x281, SEL),
  Encoding::usage("AcSetAlarm", 0x282, SEL),
  Encoding::usage("AcClearAlarm", 0x283, SEL),
  Encoding::usage("AcSnoozeAlarm", 0x284, SEL),
  Encoding::usage("AcResetAlarm", 0x285, SEL),
  Encoding::usage("AcSynchronize", 0x286, SEL),
  Encoding::usage("AcSendReceive", 0x287, SEL),
  Encoding::usage("AcSendTo", 0x288, SEL),
  Encoding::usage("AcReply", 0x289, SEL),
  Encoding::usage("AcReplyAll", 0x28A, SEL),
  Encoding::usage("AcForwardMsg", 0x28B, SEL),
  Encoding::usage("AcSend", 0x28C, SEL),
  Encoding::usage("AcAttachFile", 0x28D, SEL),
  Encoding::usage("AcUpload", 0x28E, SEL),
  Encoding::usage("AcDownload", 0x28F, SEL),
  Encoding::usage("AcSetBoarders", 0x290, SEL),
  Encoding::usage("AcInsertRow", 0x291, SEL),
  Encoding::usage("AcInsertColumn", 0x292, SEL),
  Encoding::usage("AcInsertFile", 0x293, SEL),
  Encoding::usage("AcInsertPicture", 0x294, SEL),
  Encoding::usage("AcInsertObject", 0x295, SEL),
  Encoding::usage("AcInsertSymbol", 0x296, SEL),
  Encoding::usage("AcSaveAndClose", 0x297, SEL),
  Encoding::usage("AcRename", 0x298, SEL),
  Encoding::usage("AcMerge", 0x299, SEL),
  Encoding::usage("AcSplit", 0x29A, SEL),
  Encoding::usage("AcDistributeHorizontally", 0x29B, SEL),
  Encoding::usage("AcDistributeVertically", 0x29C, SEL),
  Encoding::usage("AcNextKeyboardLayoutSelect", 0x29D, SEL),
  Encoding::usage("AcNavigateGuidance", 0x29E, SEL),
  Encoding::usage("AcDesktopShowAllWindows", 0x29F, SEL),
  Encoding::usage("AcSoftKeyLeft", 0x2A0, SEL),
  Encoding::usage("AcSoftKeyRight", 0x2A1, SEL),
  Encoding::usage("AcDesktopShowAllApplications", 0x2A2, SEL),
  Encoding::usage("AcIdleKeepAlive", 0x2B0, SEL),
  Encoding::usage("ExtendedKeyboardAttributesCollection", 0x2C0, CL),
  Encoding::usage("KeyboardFormFactor", 0x2C1, SV),
  Encoding::usage("KeyboardKeyType", 0x2C2, SV),
  Encoding::usage("KeyboardPhysicalLayout", 0x2C3, SV),
  Encoding::usage("VendorSpecificKeyboardPhysicalLayout", 0x2C4, SV),
  Encoding::usage("KeyboardIetfLanguageTagIndex", 0x2C5, SV),
  Encoding::usage("ImplementedKeyboardInputAssistControls", 0x2C6, SV),
  Encoding::usage("KeyboardInputAssistPrevious", 0x2C7, SEL),
  Encoding::usage("KeyboardInputAssistNext", 0x2C8, SEL),
  Encoding::usage("KeyboardInputAssistPreviousGroup", 0x2C9, SEL),
  Encoding::usage("KeyboardInputAssistNextGroup", 0x2CA, SEL),
  Encoding::usage("KeyboardInputAssistAccept", 0x2CB, SEL),
  Encoding::usage("KeyboardInputAssistCancel", 0x2CC, SEL),
  Encoding::usage("PrivacyScreenToggle", 0x2D0, OOC),
  Encoding::usage("PrivacyScreenLevelDecrement", 0x2D1, RTC),
  Encoding::usage("PrivacyScreenLevelIncrement", 0x2D2, RTC),
  Encoding::usage("PrivacyScreenLevelMinimum", 0x2D3, OSC),
  Encoding::usage("PrivacyScreenLevelMaximum", 0x2D4, OSC),
  Encoding::usage("ContactEdited", 0x500, OOC),
  Encoding::usage("ContactAdded", 0x501, OOC),
  Encoding::usage("ContactRecordedActive", 0x502, OOC),
  Encoding::usage("ContactIndex", 0x503, DV),
  Encoding::usage("ContactNickname", 0x504, DV),
  Encoding::usage("ContactFirstName", 0x505, DV),
  Encoding::usage("ContactLastName", 0x506, DV),
  Encoding::usage("ContactFullName", 0x507, DV),
  Encoding::usage("ContactPhoneNumberPersonal", 0x508, DV),
  Encoding::usage("ContactPhoneNumberBusiness", 0x509, DV),
  Encoding::usage("ContactPhoneNumberMobile", 0x50A, DV),
  Encoding::usage("ContactPhoneNumberPager", 0x50B, DV),
  Encoding::usage("ContactPhoneNumberFax", 0x50C, DV),
  Encoding::usage("ContactPhoneNumberOther", 0x50D, DV),
  Encoding::usage("ContactEmailPersonal", 0x50E, DV),
  Encoding::usage("ContactEmailBusiness", 0x50F, DV),
  Encoding::usage("ContactEmailOther", 0x510, DV),
  Encoding::usage("ContactEmailMain", 0x511, DV),
  Encoding::usage("ContactSpeedDialNumber", 0x512, DV),
  Encoding::usage("ContactStatusFlag", 0x513, DV),
  Encoding::usage("ContactMisc", 0x514, DV),
];

/// Digitizers usage table (HID Usage Tables 1.2 ch. 16).
pub(crate) const DIGITIZERS: &[Encoding] = &[
  Encoding::usage("Digitizer", 0x01, CA),
  Encoding::usage("Pen", 0x02, CA),
  Encoding::usage("LightPen", 0x03, CA),
  Encoding::usage("TouchScreen", 0x04, CA),
  Encoding::usage("TouchPad", 0x05, CA),
  Encoding::usage("Whiteboard", 0x06, CA),
  Encoding::usage("CoordinateMeasuringMachine", 0x07, CA),
  Encoding::usage("Digitizer3d", 0x08, CA),                               // changed name to avoid leading digit
  Encoding::usage("StereoPlotter", 0x09, CA),
  Encoding::usage("ArticulatedArm", 0x0A, CA),
  Encoding::usage("Armature", 0x0B, CA),
  Encoding::usage("MultiplePointDigitizer", 0x0C, CA),
  Encoding::usage("FreeSpaceWand", 0x0D, CA),
  Encoding::usage("DeviceConfiguration", 0x0E, CA),
  Encoding::usage("CapacitiveHeatMapDigitizer", 0x0F, CA),
  Encoding::usage("Stylus", 0x20, CA | CL),
  Encoding::usage("Puck", 0x21, CL),
  Encoding::usage("Finger", 0x22, CL),
  Encoding::usage("DeviceSettings", 0x23, CL),
  Encoding::usage("CharacterGesture", 0x24, CL),
  Encoding::usage("TipPressure", 0x30, DV),
  Encoding::usage("BarrelPressure", 0x31, DV),
  Encoding::usage("InRange", 0x32, MC),
  Encoding::usage("Touch", 0x33, MC),
  Encoding::usage("Untouch", 0x34, OSC),
  Encoding::usage("Tap", 0x35, OSC),
  Encoding::usage("Quality", 0x36, DV),
  Encoding::usage("DataValid", 0x37, MC),
  Encoding::usage("TransducerIndex", 0x38, DV),
  Encoding::usage("TabletFunctionKeys", 0x39, CL),
  Encoding::usage("ProgramChangeKeys", 0x3A, CL),
  Encoding::usage("BatteryStrength", 0x3B, DV),
  Encoding::usage("Invert", 0x3C, MC),
  Encoding::usage("XTilt", 0x3D, DV),
  Encoding::usage("YTilt", 0x3E, DV),
  Encoding::usage("Azimuth", 0x3F, DV),
  Encoding::usage("Altitude", 0x40, DV),
  Encoding::usage("Twist", 0x41, DV),
  Encoding::usage("TipSwitch", 0x42, MC),
  Encoding::usage("SecondaryTipSwitch", 0x43, MC),
  Encoding::usage("BarrelSwitch", 0x44, MC),
  Encoding::usage("Eraser", 0x45, MC),
  Encoding::usage("TabletPick", 0x46, MC),
  Encoding::usage("TouchValid", 0x47, MC),
  Encoding::usage("Width", 0x48, DV),
  Encoding::usage("Height", 0x49, DV),
  Encoding::usage("ContactIdentifier", 0x51, DV),
  Encoding::usage("DeviceMode", 0x52, DV),
  Encoding::usage("DeviceIdentifier", 0x53, DV | SV),
  Encoding::usage("ContactCount", 0x54, DV),
  Encoding::usage("ContactCountMaximum", 0x55, SV),
  Encoding::usage("ScanTime", 0x56, DV),
  Encoding::usage("SurfaceSwitch", 0x57, DF),
  Encoding::usage("ButtonSwitch", 0x58, DF),
  Encoding::usage("PadType", 0x59, SF),
  Encoding::usage("SecondaryBarrelSwitch", 0x5A, MC),
  Encoding::usage("TransducerSerialNumber", 0x5B, SV),
  Encoding::usage("PreferredColor", 0x5C, DV),
  Encoding::usage("PreferredColorIsLocked", 0x5D, MC),
  Encoding::usage("PreferredLineWidth", 0x5E, DV),
  Encoding::usage("PreferredLineWidthIsLocked", 0x5F, MC),
  Encoding::usage("LatencyMode", 0x60, DF),
  Encoding::usage("GestureCharacterQuality", 0x61, DV),
  Encoding::usage("CharacterGestureDataLength", 0x62, DV),
  Encoding::usage("CharacterGestureData", 0x63, DV),
  Encoding::usage("GestureCharacterEncoding", 0x64, NARY),
  Encoding::usage("Utf8CharacterGestureEncoding", 0x65, SEL),
  Encoding::usage("Utf16LittleEndianCharacterGestureEncoding", 0x66, SEL),
  Encoding::usage("Utf16BigEndianCharacterGestureEncoding", 0x67, SEL),
  Encoding::usage("Utf32LittleEndianCharacterGestureEncoding", 0x68, SEL),
  Encoding::usage("Utf32BigEndianCharacterGestureEncoding", 0x69, SEL),
  Encoding::usage("CapacitiveHeatMapProtocolVendorId", 0x6A, SV),
  Encoding::usage("CapacitiveHeatMapProtocolVersion", 0x6B, SV),
  Encoding::usage("CapacitiveHeatMapFrameData", 0x6C, DV),
  Encoding::usage("GestureCharacterEnable", 0x6D, DF),
  Encoding::usage("PreferredLineStyle", 0x70, NARY),
  Encoding::usage("PreferredLineStyleIsLocked", 0x71, MC),
  Encoding::usage("Ink", 0x72, SEL),
  Encoding::usage("Pencil", 0x73, SEL),
  Encoding::usage("Highlighter", 0x74, SEL),
  Encoding::usage("ChiselMarker", 0x75, SEL),
  Encoding::usage("Brush", 0x76, SEL),
  Encoding::usage("NoPreference", 0x77, SEL),
  Encoding::usage("DigitizerDiagnostic", 0x80, CL),
  Encoding::usage("DigitizerError", 0x81, NARY),
  Encoding::usage("ErrNormalStatus", 0x82, SEL),
  Encoding::usage("ErrTransducersExceeded", 0x83, SEL),
  Encoding::usage("ErrFullTransFeaturesUnavailable", 0x84, SEL),
  Encoding::usage("ErrChargeLow", 0x85, SEL),
  Encoding::usage("TransducerSoftwareInfo", 0x90, CL),
  Encoding::usage("TransducerVendorId", 0x91, SV),
  Encoding::usage("TransducerProductId", 0x92, SV),
  Encoding::usage("DeviceSupportedProtocols", 0x93, NARY | CL),
  Encoding::usage("TransducerSupportedProtocols", 0x94, NARY | CL),
  Encoding::usage("NoProtocol", 0x95, SEL),
  Encoding::usage("WacomAesProtocol", 0x96, SEL),
  Encoding::usage("UsiProtocol", 0x97, SEL),
  Encoding::usage("MicrosoftPenProtocol", 0x98, SEL),
  Encoding::usage("SupportedReportRates", 0xA0, SV | CL),
  Encoding::usage("ReportRate", 0xA1, DV),
  Encoding::usage("TransducerConnected", 0xA2, SF),
  Encoding::usage("SwitchDisabled", 0xA3, SEL),
  Encoding::usage("SwitchUnimplemented", 0xA4, SEL),
  Encoding::usage("TransducerSwitches", 0xA5, SEL),
];

/// Haptics usage table (HID Usage Tables 1.2 ch. 17).
pub(crate) const HAPTICS: &[Encoding] = &[
  Encoding::usage("SimpleHapticController", 0x01, CA | CL),
  Encoding::usage("WaveformList", 0x10, NARY),
  Encoding::usage("DurationList", 0x11, NARY),
  Encoding::usage("AutoTrigger", 0x20, DV),
  Encoding::usage("ManualTrigger", 0x21, DV),
  Encoding::usage("AutoTriggerAssociatedControl", 0x22, SV),
  Encoding::usage("Intensity", 0x23, DV),
  Encoding::usage("RepeatCount", 0x24, DV),
  Encoding::usage("RetriggerPeriod", 0x25, DV),
  Encoding::usage("WaveformVendorPage", 0x26, SV),
  Encoding::usage("WaveformVendorId", 0x27, SV),
  Encoding::usage("WaveformCutoffTime", 0x28, SV),
  Encoding::usage("WaveformNone", 0x1001, SV),
  Encoding::usage("WaveformStop", 0x1002, SV),
  Encoding::usage("WaveformClick", 0x1003, SV),
  Encoding::usage("WaveformBuzzContinuous", 0x1004, SV),
  Encoding::usage("WaveformRumbleContinuous", 0x1005, SV),
  Encoding::usage("WaveformPress", 0x1006, SV),
  Encoding::usage("WaveformRelease", 0x1007, SV),
];

/// Physical Interface Device usage table (HID Usage Tables 1.2 ch. 18).
pub(crate) const PID: &[Encoding] = &[
  Encoding::usage("PhysicalInterfaceDevice", 0x01, CA),
  Encoding::usage("Normal", 0x20, DV),
  Encoding::usage("SetEffectReport", 0x21, CL | LC | SV),
  Encoding::usage("EffectBlockIndex", 0x22, DV),
  Encoding::usage("ParameterBlockOffset", 0x23, DV),
  Encoding::usage("RomFlag", 0x24, DV),
  Encoding::usage("EffectType", 0x25, NARY),
  Encoding::usage("EtConstantForce", 0x26, SEL),
  Encoding::usage("EtRamp", 0x27, SEL),
  Encoding::usage("EtCustomForceData", 0x28, SEL),
  Encoding::usage("EtSquare", 0x30, SEL),
  Encoding::usage("EtSine", 0x31, SEL),
  Encoding::usage("EtTriangle", 0x32, SEL),
  Encoding::usage("EtSawtoothUp", 0x33, SEL),
  Encoding::usage("EtSawtoothDown", 0x34, SEL),
  Encoding::usage("EtSpring", 0x40, SEL),
  Encoding::usage("EtDamper", 0x41, SEL),
  Encoding::usage("EtInertia", 0x42, SEL),
  Encoding::usage("EtFriction", 0x43, SEL),
  Encoding::usage("Duration", 0x50, DV),
  Encoding::usage("SamplePeriod", 0x51, DV),
  Encoding::usage("Gain", 0x52, DV),
  Encoding::usage("TriggerButton", 0x53, DV),
  Encoding::usage("TriggerRepeatInterval", 0x54, DV),
  Encoding::usage("AxesEnable", 0x55, US),
  Encoding::usage("DirectionEnable", 0x56, DF),
  Encoding::usage("Direction", 0x57, CL | DV),
  Encoding::usage("TypeSpecificBlockOffset", 0x58, CL),
  Encoding::usage("BlockType", 0x59, NARY),
  Encoding::usage("SetEnvelopeReport", 0x5A, CL | LC | SV),
  Encoding::usage("AttackLevel", 0x5B, DV),
  Encoding::usage("AttackTime", 0x5C, DV),
  Encoding::usage("FadeLevel", 0x5D, DV),
  Encoding::usage("FadeTime", 0x5E, DV),
  Encoding::usage("SetConditionReport", 0x5F, CL | LC | SV),
  Encoding::usage("CpOffset", 0x60, DV),
  Encoding::usage("PositiveCoefficient", 0x61, DV),
  Encoding::usage("NegativeCoefficient", 0x62, DV),
  Encoding::usage("PositiveSaturation", 0x63, DV),
  Encoding::usage("NegativeSaturation", 0x64, DV),
  Encoding::usage("DeadBand", 0x65, DV),
  Encoding::usage("DownloadForceSample", 0x66, CL),
  Encoding::usage("IsochCustomForceEnable", 0x67, DF),          // no clear usage type found in the standard
  Encoding::usage("CustomForceDataReport", 0x68, CL),
  Encoding::usage("CustomForceData", 0x69, DV),
  Encoding::usage("CustomForceVendorDefinedData", 0x6A, DV),
  Encoding::usage("SetCustomForceReport", 0x6B, CL | LC | SV),
  Encoding::usage("CustomForceDataOffset", 0x6C, DV),
  Encoding::usage("SampleCount", 0x6D, DV),
  Encoding::usage("SetPeriodicReport", 0x6E, CL | LC | SV),
  Encoding::usage("Offset", 0x6F, DV),
  Encoding::usage("Magnitude", 0x70, DV),
  Encoding::usage("Phase", 0x71, DV),
  Encoding::usage("Period", 0x72, DV),
  Encoding::usage("SetConstantForceReport", 0x73, CL | LC | SV),
  Encoding::usage("SetRampForceReport", 0x74, CL | LC | SV),
  Encoding::usage("RampStart", 0x75, DV),
  Encoding::usage("RampEnd", 0x76, DV),
  Encoding::usage("EffectOperationReport", 0x77, CL),
  Encoding::usage("EffectOperation", 0x78, NARY),
  Encoding::usage("OpEffectStart", 0x79, SEL),
  Encoding::usage("OpEffectStartSolo", 0x7A, SEL),
  Encoding::usage("OpEffectStop", 0x7B, SEL),
  Encoding::usage("LoopCount", 0x7C, DV),
  Encoding::usage("DeviceGainReport", 0x7D, CL),
  Encoding::usage("DeviceGain", 0x7E, DV),
  Encoding::usage("PidPoolReport", 0x7F, CL),
  Encoding::usage("RamPoolSize", 0x80, DV),
  Encoding::usage("RomPoolSize", 0x81, SV),
  Encoding::usage("RomEffectBlockCount", 0x82, SV),
  Encoding::usage("SimultaneousEffectsMax", 0x83, SV),
  Encoding::usage("PoolAlignment", 0x84, SV),
  Encoding::usage("PidPoolMoveReport", 0x85, CL),
  Encoding::usage("MoveSource", 0x86, DV),
  Encoding::usage("MoveDestination", 0x87, DV),
  Encoding::usage("MoveLength", 0x88, DV),
  Encoding::usage("PidBlockLoadReport", 0x89, CL),
  Encoding::usage("BlockLoadStatus", 0x8B, NARY),
  Encoding::usage("BlockLoadSuccess", 0x8C, SEL),
  Encoding::usage("BlockLoadFull", 0x8D, SEL),
  Encoding::usage("BlockLoadError", 0x8E, SEL),
  Encoding::usage("BlockHandle", 0x8F, DV),                     // no clear usage type found in the standard
  Encoding::usage("PidBlockFreeReport", 0x90, CL),
  Encoding::usage("TypeSpecificBlockHandle", 0x91, CL),
  Encoding::usage("PidStateReport", 0x92, CL),
  Encoding::usage("EffectPlaying", 0x94, DF),
  Encoding::usage("PidDeviceControlReport", 0x95, CL),
  Encoding::usage("PidDeviceControl", 0x96, NARY),
  Encoding::usage("DcEnableActuators", 0x97, SEL),
  Encoding::usage("DcDisableActuators", 0x98, SEL),
  Encoding::usage("DcStopAllEffects", 0x99, SEL),
  Encoding::usage("DcDeviceReset", 0x9A, SEL),
  Encoding::usage("DcDevicePause", 0x9B, SEL),
  Encoding::usage("DcDeviceContinue", 0x9C, SEL),
  Encoding::usage("DevicePaused", 0x9F, DF),
  Encoding::usage("ActuatorsEnabled", 0xA0, DF),
  Encoding::usage("SafetySwitch", 0xA4, DF),
  Encoding::usage("ActuatorOverrideSwitch", 0xA5, DF),
  Encoding::usage("ActuatorPower", 0xA6, OOC),
  Encoding::usage("StartDelay", 0xA7, DV),
  Encoding::usage("ParameterBlockSize", 0xA8, CL),
  Encoding::usage("DeviceManagedPool", 0xA9, SF),
  Encoding::usage("SharedParameterBlocks", 0xAA, SF),
  Encoding::usage("CreateNewEffectReport", 0xAB, CL),
  Encoding::usage("RamPoolAvailable", 0xAC, DV),
];

/// Unicode usage table (HID Usage Tables 1.2 ch. 19).
pub(crate) const UNICODE: &[Encoding] = &[
  Encoding::new("Ucs#", 0x0000), // range start
  Encoding::new("Ucs#", 0xFFFF), // range end
];

/// Eye and Head Trackers usage table (HID Usage Tables 1.2 ch. 19).
pub(crate) const EYE_AND_HEAD_TRACKERS: &[Encoding] = &[
  Encoding::usage("EyeTracker", 0x01, CA),
  Encoding::usage("HeadTracker", 0x02, CA),
  Encoding::usage("TrackingData", 0x10, CP),
  Encoding::usage("Capabilities", 0x11, CL),
  Encoding::usage("Configuration", 0x12, CL),
  Encoding::usage("Status", 0x13, CL),
  Encoding::usage("Control", 0x14, CL),
  Encoding::usage("SensorTimestamp", 0x20, DV),
  Encoding::usage("PositionX", 0x21, DV),
  Encoding::usage("PositionY", 0x22, DV),
  Encoding::usage("PositionZ", 0x23, DV),
  Encoding::usage("GazePoint", 0x24, CP),
  Encoding::usage("LeftEyePosition", 0x25, CP),
  Encoding::usage("RightEyePosition", 0x26, CP),
  Encoding::usage("HeadPosition", 0x27, CP),
  Encoding::usage("HeadDirectionPoint", 0x28, CP),
  Encoding::usage("RotationAboutXAxis", 0x29, DV),
  Encoding::usage("RotationAboutYAxis", 0x2A, DV),
  Encoding::usage("RotationAboutZAxis", 0x2B, DV),
  Encoding::usage("TrackerQuality", 0x100, SV),
  Encoding::usage("MinimumTrackingDistance", 0x101, SV),
  Encoding::usage("OptimumTrackingDistance", 0x102, SV),
  Encoding::usage("MaximumTrackingDistance", 0x103, SV),
  Encoding::usage("MaximumScreenPlaneWidth", 0x104, SV),
  Encoding::usage("MaximumScreenPlaneHeight", 0x105, SV),
  Encoding::usage("DisplayManufacturerId", 0x200, SV),
  Encoding::usage("DisplayProductId", 0x201, SV),
  Encoding::usage("DisplaySerialNumber", 0x202, SV),
  Encoding::usage("DisplayManufacturerDate", 0x203, SV),
  Encoding::usage("CalibratedScreenWidth", 0x204, SV),
  Encoding::usage("CalibratedScreenHeight", 0x205, SV),
  Encoding::usage("SamplingFrequency", 0x300, DV),
  Encoding::usage("ConfigurationStatus", 0x301, DV),
  Encoding::usage("DeviceModeRequest", 0x400, DV),
];

/// Auxiliary Display usage table (HID Usage Tables 1.2 ch. 20).
pub(crate) const AUXILIARY_DISPLAY: &[Encoding] = &[
  Encoding::usage("AlphanumericDisplay", 0x01, CA),
  Encoding::usage("AuxiliaryDisplay", 0x02, CA),
  Encoding::usage("DisplayAttributesReport", 0x20, CL),
  Encoding::usage("AsciiCharacterSet", 0x21, SF),
  Encoding::usage("DataReadBack", 0x22, SF),
  Encoding::usage("FontReadBack", 0x23, SF),
  Encoding::usage("DisplayControlReport", 0x24, CL),
  Encoding::usage("ClearDisplay", 0x25, DF),
  Encoding::usage("DisplayEnable", 0x26, DF),
  Encoding::usage("ScreenSaverDelay", 0x27, SV | DV),
  Encoding::usage("ScreenSaverEnable", 0x28, DF),
  Encoding::usage("VerticalScroll", 0x29, SF | DF),
  Encoding::usage("HorizontalScroll", 0x2A, SF | DF),
  Encoding::usage("CharacterReport", 0x2B, CL),
  Encoding::usage("DisplayData", 0x2C, DV),
  Encoding::usage("DisplayStatus", 0x2D, CL),
  Encoding::usage("StatNotReady", 0x2E, SEL),
  Encoding::usage("StatReady", 0x2F, SEL),
  Encoding::usage("ErrNotALoadableCharacter", 0x30, SEL),
  Encoding::usage("ErrFontDataCannotBeRead", 0x31, SEL),
  Encoding::usage("CursorPositionReport", 0x32, SEL),
  Encoding::usage("Row", 0x33, DV),
  Encoding::usage("Column", 0x34, DV),
  Encoding::usage("Rows", 0x35, SV),
  Encoding::usage("Columns", 0x36, SV),
  Encoding::usage("CursorPixelPosition", 0x37, SF),
  Encoding::usage("CursorMode", 0x38, DF),
  Encoding::usage("CursorEnable", 0x39, DF),
  Encoding::usage("CursorBlink", 0x3A, DF),
  Encoding::usage("FontReport", 0x3B, CL),
  Encoding::usage("FontData", 0x3C, BB),
  Encoding::usage("CharacterWidth", 0x3D, SV),
  Encoding::usage("CharacterHeight", 0x3E, SV),
  Encoding::usage("CharacterSpacingHorizontal", 0x3F, SV),
  Encoding::usage("CharacterSpacingVertical", 0x40, SV),
  Encoding::usage("UnicodeCharacterSet", 0x41, SF),
  Encoding::usage("Font7Segment", 0x42, SF),
  Encoding::usage("DirectMap7Segment", 0x43, SF),
  Encoding::usage("Font14Segment", 0x44, SF),
  Encoding::usage("DirectMap14Segment", 0x45, SF),
  Encoding::usage("DisplayBrightness", 0x46, DV),
  Encoding::usage("DisplayContrast", 0x47, DV),
  Encoding::usage("CharacterAttribute", 0x48, CL),
  Encoding::usage("AtributeReadback", 0x49, SF),
  Encoding::usage("AttributeData", 0x4A, DV),
  Encoding::usage("CharAttrEnhance", 0x4B, OOC),
  Encoding::usage("CharAttrUnderline", 0x4C, OOC),
  Encoding::usage("CharAttrBlink", 0x4D, OOC),
  Encoding::usage("BitmapSizeX", 0x80, SV),
  Encoding::usage("BitmapSizeY", 0x81, SV),
  Encoding::usage("MaxBlitSize", 0x82, SV),
  Encoding::usage("BitDepthFormat", 0x83, SV),
  Encoding::usage("DisplayOrientation", 0x84, DV),
  Encoding::usage("PaletteReport", 0x85, CL),
  Encoding::usage("PaletteDataSize", 0x86, SV),
  Encoding::usage("PaletteDataOffset", 0x87, SV),
  Encoding::usage("PaletteData", 0x88, BB),
  Encoding::usage("BlitReport", 0x8A, CL),
  Encoding::usage("BlitRectangleX1", 0x8B, SV),
  Encoding::usage("BlitRectangleY1", 0x8C, SV),
  Encoding::usage("BlitRectangleX2", 0x8D, SV),
  Encoding::usage("BlitRectangleY2", 0x8E, SV),
  Encoding::usage("BlitData", 0x8F, BB),
  Encoding::usage("SoftButton", 0x90, CL),
  Encoding::usage("SoftButtonId", 0x91, SV),
  Encoding::usage("SoftButtonSide", 0x92, SV),
  Encoding::usage("SoftButtonOffset1", 0x93, SV),
  Encoding::usage("SoftButtonOffset2", 0x94, SV),
  Encoding::usage("SoftButtonReport", 0x95, SV),
  Encoding::usage("SoftKeys", 0xC2, SV),
  Encoding::usage("DisplayDataExtensions", 0xCC, SF),
  Encoding::usage("CharacterMapping", 0xCF, SV),
  Encoding::usage("UnicodeEquivalent", 0xDD, SV),
  Encoding::usage("CharacterPageMapping", 0xDF, SV),
  Encoding::usage("RequestReport", 0xFF, DV),
];

/// Sensors usage table (HID Usage Tables 1.2 ch. 22).
pub(crate) const SENSORS: &[Encoding] = &[
  Encoding::usage("Sensor", 0x01, CA | CP),
  Encoding::usage("Biometric", 0x10, CA | CP),
  Encoding::usage("BiometricHumanPresence", 0x11, CA | CP),
  Encoding::usage("BiometricHumanProximity", 0x12, CA | CP),
  Encoding::usage("BiometricHumanTouch", 0x13, CA | CP),
  Encoding::usage("BiometricBloodPressure", 0x14, CA | CP),
  Encoding::usage("BiometricBodyTemperature", 0x15, CA | CP),
  Encoding::usage("BiometricHeartRate", 0x16, CA | CP),
  Encoding::usage("BiometricHeartRateVariability", 0x17, CA | CP),
  Encoding::usage("BiometricPeripheralOxygenSaturation", 0x18, CA | CP),
  Encoding::usage("BiometricRespiratoryRate", 0x19, CA | CP),
  Encoding::usage("Electrical", 0x20, CA | CP),
  Encoding::usage("ElectricalCapacitance", 0x21, CA | CP),
  Encoding::usage("ElectricalCurrent", 0x22, CA | CP),
  Encoding::usage("ElectricalPower", 0x23, CA | CP),
  Encoding::usage("ElectricalInductance", 0x24, CA | CP),
  Encoding::usage("ElectricalResistance", 0x25, CA | CP),
  Encoding::usage("ElectricalVoltage", 0x26, CA | CP),
  Encoding::usage("ElectricalPotentiometer", 0x27, CA | CP),
  Encoding::usage("ElectricalFrequency", 0x28, CA | CP),
  Encoding::usage("ElectricalPeriod", 0x29, CA | CP),
  Encoding::usage("Environmental", 0x30, CA | CP),
  Encoding::usage("EnvironmentalAtmosphericPressure", 0x31, CA | CP),
  Encoding::usage("EnvironmentalHumidity", 0x32, CA | CP),
  Encoding::usage("EnvironmentalTemperature", 0x33, CA | CP),
  Encoding::usage("EnvironmentalWindDirection", 0x34, CA | CP),
  Encoding::usage("EnvironmentalWindSpeed", 0x35, CA | CP),
  Encoding::usage("EnvironmentalAirQuality", 0x36, CA | CP),
  Encoding::usage("EnvironmentalHeatIndex", 0x37, CA | CP),
  Encoding::usage("EnvironmentalSurfaceTemperature", 0x38, CA | CP),
  Encoding::usage("EnvironmentalVolatileOrganicCompounds", 0x39, CA | CP),
  Encoding::usage("EnvironmentalObjectPresence", 0x3A, CA | CP),
  Encoding::usage("EnvironmentalObjectProximity", 0x3B, CA | CP),
  Encoding::usage("Light", 0x40, CA | CP),
  Encoding::usage("LightAmbientLight", 0x41, CA | CP),
  Encoding::usage("LightConsumerInfrared", 0x42, CA | CP),
  Encoding::usage("LightInfraredLight", 0x43, CA | CP),
  Encoding::usage("LightVisibleLight", 0x44, CA | CP),
  Encoding::usage("LightUltravioletLight", 0x45, CA | CP),
  Encoding::usage("Location", 0x50, CA | CP),
  Encoding::usage("LocationBroadcast", 0x51, CA | CP),
  Encoding::usage("LocationDeadReckoning", 0x52, CA | CP),
  Encoding::usage("LocationGps", 0x53, CA | CP),
  Encoding::usage("LocationLookup", 0x54, CA | CP),
  Encoding::usage("LocationOther", 0x55, CA | CP),
  Encoding::usage("LocationStatic", 0x56, CA | CP),
  Encoding::usage("LocationTriangulation", 0x57, CA | CP),
  Encoding::usage("Mechanical", 0x60, CA | CP),
  Encoding::usage("MechanicalBooleanSwitch", 0x61, CA | CP),
  Encoding::usage("MechanicalBooleanSwitchArray", 0x62, CA | CP),
  Encoding::usage("MechanicalMultivalueSwitch", 0x63, CA | CP),
  Encoding::usage("MechanicalForce", 0x64, CA | CP),
  Encoding::usage("MechanicalPressure", 0x65, CA | CP),
  Encoding::usage("MechanicalStrain", 0x66, CA | CP),
  Encoding::usage("MechanicalWeight", 0x67, CA | CP),
  Encoding::usage("MechanicalHapticVibrator", 0x68, CA | CP),
  Encoding::usage("MechanicalHallEffectSwitch", 0x69, CA | CP),
  Encoding::usage("Motion", 0x70, CA | CP),
  Encoding::usage("MotionAccelerometer1d", 0x71, CA | CP),
  Encoding::usage("MotionAccelerometer2d", 0x72, CA | CP),
  Encoding::usage("MotionAccelerometer3d", 0x73, CA | CP),
  Encoding::usage("MotionGyrometer1d", 0x74, CA | CP),
  Encoding::usage("MotionGyrometer2d", 0x75, CA | CP),
  Encoding::usage("MotionGyrometer3d", 0x76, CA | CP),
  Encoding::usage("MotionMotionDetector", 0x77, CA | CP),
  Encoding::usage("MotionSpeedometer", 0x78, CA | CP),
  Encoding::usage("MotionAccelerometer", 0x79, CA | CP),
  Encoding::usage("MotionGyrometer", 0x7A, CA | CP),
  Encoding::usage("MotionGraviyVector", 0x7B, CA | CP),
  Encoding::usage("MotionLinearAccelerometer", 0x7C, CA | CP),
  Encoding::usage("Orientation", 0x80, CA | CP),
  Encoding::usage("OrientationCompass1d", 0x81, CA | CP),
  Encoding::usage("OrientationCompass2d", 0x82, CA | CP),
  Encoding::usage("OrientationCompass3d", 0x83, CA | CP),
  Encoding::usage("OrientationInclinometer1d", 0x84, CA | CP),
  Encoding::usage("OrientationInclinometer2d", 0x85, CA | CP),
  Encoding::usage("OrientationInclinometer3d", 0x86, CA | CP),
  Encoding::usage("OrientationDistance1d", 0x87, CA | CP),
  Encoding::usage("OrientationDistance2d", 0x88, CA | CP),
  Encoding::usage("OrientationDistance3d", 0x89, CA | CP),
  Encoding::usage("OrientationDeviceOrientation", 0x8A, CA | CP),
  Encoding::usage("OrientationCompass", 0x8B, CA | CP),
  Encoding::usage("OrientationInclinometer", 0x8C, CA | CP),
  Encoding::usage("OrientationDistance", 0x8D, CA | CP),
  Encoding::usage("OrientationRelativeOrientation", 0x8E, CA | CP),
  Encoding::usage("OrientationSimpleOrientation", 0x8F, CA | CP),
  Encoding::usage("Scanner", 0x90, CA | CP),
  Encoding::usage("ScannerBarcode", 0x91, CA | CP),
  Encoding::usage("ScannerRfid", 0x92, CA | CP),
  Encoding::usage("ScannerNfc", 0x93, CA | CP),
  Encoding::usage("Time", 0xA0, CA | CP),
  Encoding::usage("TimeAlarmTimer", 0xA1, CA | CP),
  Encoding::usage("TimeRealTimeClock", 0xA2, CA | CP),
  Encoding::usage("PersonalActivity", 0xB0, CA | CP),
  Encoding::usage("PersonalActivityActivityDetection", 0xB1, CA | CP),
  Encoding::usage("PersonalActivityDevicePosition", 0xB2, CA | CP),
  Encoding::usage("PersonalActivityPedometer", 0xB3, CA | CP),
  Encoding::usage("PersonalActivityStepDetection", 0xB4, CA | CP),
  Encoding::usage("OrientationExtended", 0xC0, CA | CP),
  Encoding::usage("OrientationExtendedGeomagneticOrientation", 0xC1, CA | CP),
  Encoding::usage("OrientationExtendedMagnetometer", 0xC2, CA | CP),
  Encoding::usage("Gesture", 0xD0, CA | CP),
  Encoding::usage("GestureChassisFlipGesture", 0xD1, CA | CP),
  Encoding::usage("GestureHingeFoldGesture", 0xD2, CA | CP),
  Encoding::usage("Other", 0xE0, CA | CP),
  Encoding::usage("OtherCustom", 0xE1, CA | CP),
  Encoding::usage("OtherGeneric", 0xE2, CA | CP),
  Encoding::usage("OtherGenericEnumerator", 0xE3, CA | CP),
  Encoding::usage("OtherHingeAngle", 0xE4, CA | CP),
  Encoding::usage("VendorReserved1", 0xF0, CA | CP),
  Encoding::usage("VendorReserved2", 0xF1, CA | CP),
  Encoding::usage("VendorReserved3", 0xF2, CA | CP),
  Encoding::usage("VendorReserved4", 0xF3, CA | CP),
  Encoding::usage("VendorReserved5", 0xF4, CA | CP),
  Encoding::usage("VendorReserved6", 0xF5, CA | CP),
  Encoding::usage("VendorReserved7", 0xF6, CA | CP),
  Encoding::usage("VendorReserved8", 0xF7, CA | CP),
  Encoding::usage("VendorReserved9", 0xF8, CA | CP),
  Encoding::usage("VendorReserved10", 0xF9, CA | CP),
  Encoding::usage("VendorReserved11", 0xFA, CA | CP),
  Encoding::usage("VendorReserved12", 0xFB, CA | CP),
  Encoding::usage("VendorReserved13", 0xFC, CA | CP),
  Encoding::usage("VendorReserved14", 0xFD, CA | CP),
  Encoding::usage("VendorReserved15", 0xFE, CA | CP),
  Encoding::usage("VendorReserved16", 0xFF, CA | CP),
  Encoding::usage("Event", 0x200, DV),
  Encoding::usage("EventSensorState", 0x201, NARY),
  Encoding::usage("EventSensorEvent", 0x202, NARY),
  Encoding::usage("Property", 0x300, DV),
  Encoding::usage("PropertyFriendlyName", 0x301, SV),
  Encoding::usage("PropertyPersistentUniqueId", 0x302, DV),
  Encoding::usage("PropertySensorStatus", 0x303, DV),
  Encoding::usage("PropertyMinimumReportInterval", 0x304, SV),
  Encoding::usage("PropertySensorManufacturer", 0x305, SV),
  Encoding::usage("PropertySensorModel", 0x306, SV),
  Encoding::usage("PropertySensorSerialNumber", 0x307, SV),
  Encoding::usage("PropertySensorDescription", 0x308, SV),
  Encoding::usage("PropertySensorConnectionType", 0x309, NARY),
  Encoding::usage("PropertySensorDevicePath", 0x30A, DV),
  Encoding::usage("PropertyHardwareRevision", 0x30B, SV),
  Encoding::usage("PropertyFirmwareVersion", 0x30C, SV),
  Encoding::usage("PropertyReleaseDate", 0x30D, SV),
  Encoding::usage("PropertyReportInterval", 0x30E, DV),
  Encoding::usage("PropertyChangeSensitivityAbsolute", 0x30F, DV),
  Encoding::usage("PropertyChangeSensitivityPercentOfRange", 0x310, DV),
  Encoding::usage("PropertyChangeSensitivityPercentRelative", 0x311, DV),
  Encoding::usage("PropertyAccuracy", 0x312, DV),
  Encoding::usage("PropertyResolution", 0x313, DV),
  Encoding::usage("PropertyMaximum", 0x314, DV),
  Encoding::usage("PropertyMinimum", 0x315, DV),
  Encoding::usage("PropertyReportingState", 0x316, NARY),
  Encoding::usage("PropertySamplingRate", 0x317, DV),
  Encoding::usage("PropertyResponseCurve", 0x318, DV),
  Encoding::usage("PropertyPowerState", 0x319, NARY),
  Encoding::usage("PropertyMaximumFifoEvents", 0x31A, SV),
  Encoding::usage("PropertyReportLatency", 0x31B, DV),
  Encoding::usage("PropertyFlushFifoEvents", 0x31C, DF),
  Encoding::usage("PropertyMaximumPowerConsumption", 0x31D, DV),
  Encoding::usage("PropertyIsPrimary", 0x31E, DF),
  Encoding::usage("DataFieldLocation", 0x400, DV),
  Encoding::usage("DataFieldAltitudeAntennaSeaLevel", 0x402, SV),
  Encoding::usage("DataFieldDifferentialReferenceStationId", 0x403, SV),
  Encoding::usage("DataFieldAltitudeEllipsoidError", 0x404, SV),
  Encoding::usage("DataFieldAltitudeEllipsoid", 0x405, SV),
  Encoding::usage("DataFieldAltitudeSeaLevelError", 0x406, SV),
  Encoding::usage("DataFieldAltitudeSeaLevel", 0x407, SV),
  Encoding::usage("DataFieldDifferentialGpsDataAge", 0x408, SV),
  Encoding::usage("DataFieldErrorRadius", 0x409, SV),
  Encoding::usage("DataFieldFixQuality", 0x40A, NARY),
  Encoding::usage("DataFieldFixType", 0x40B, NARY),
  Encoding::usage("DataFieldGeoidalSeparation", 0x40C, SV),
  Encoding::usage("DataFieldGpsOperationMode", 0x40D, NARY),
  Encoding::usage("DataFieldGpsSelectionMode", 0x40E, NARY),
  Encoding::usage("DataFieldGpsStatus", 0x40F, NARY),
  Encoding::usage("DataFieldPositionDilutionOfPrecision", 0x410, SV),
  Encoding::usage("DataFieldHorizontalDilutionOfPrecision", 0x411, SV),
  Encoding::usage("DataFieldVerticalDilutionOfPrecision", 0x412, SV),
  Encoding::usage("DataFieldLatitude", 0x413, SV),
  Encoding::usage("DataFieldLongitude", 0x414, SV),
  Encoding::usage("DataFieldTrueHeading", 0x415, SV),
  Encoding::usage("DataFieldMagneticHeading", 0x416, SV),
  Encoding::usage("DataFieldMagneticVariation", 0x417, SV),
  Encoding::usage("DataFieldSpeed", 0x418, SV),
  Encoding::usage("DataFieldSatellitesInView", 0x419, SV),
  Encoding::usage("DataFieldSatellitesInViewAzimuth", 0x41A, SV),
  Encoding::usage("DataFieldSatellitesInViewElevation", 0x41B, SV),
  Encoding::usage("DataFieldSatellitesInViewIds", 0x41C, SV),
  Encoding::usage("DataFieldSatellitesInViewPrns", 0x41D, SV),
  Encoding::usage("DataFieldSatellitesInViewSnRatio", 0x41E, SV),
  Encoding::usage("DataFieldSatellitesUsedCount", 0x41F, SV),
  Encoding::usage("DataFieldSatellitesUsedPrns", 0x420, SV),
  Encoding::usage("DataFieldNmeaSentence", 0x421, SV),
  Encoding::usage("DataFieldAddressLine1", 0x422, SV),
  Encoding::usage("DataFieldAddressLine2", 0x423, SV),
  Encoding::usage("DataFieldCity", 0x424, SV),
  Encoding::usage("DataFieldStateOrProvince", 0x425, SV),
  Encoding::usage("DataFieldCountryOrRegion", 0x426, SV),
  Encoding::usage("DataFieldPostalCode", 0x427, SV),
  Encoding::usage("PropertyLocation", 0x42A, DV),
  Encoding::usage("PropertyLocationDesiredAccuracy", 0x42B, NARY),
  Encoding::usage("DataFieldEnvironmental", 0x430, SV),
  Encoding::usage("DataFieldAtmosphericPressure", 0x431, SV),
  Encoding::usage("DataFieldRelativeHumidity", 0x433, SV),
  Encoding::usage("DataFieldTemperature", 0x434, SV),
  Encoding::usage("DataFieldWindDirection", 0x435, SV),
  Encoding::usage("DataFieldWindSpeed", 0x436, SV),
  Encoding::usage("DataFieldAirQualityIndex", 0x437, SV),
  Encoding::usage("DataFieldEquivalentCo2", 0x438, SV),
  Encoding::usage("DataFieldVolatileOrganicCompoundConcentration", 0x439, SV),
  Encoding::usage("DataFieldObjectPresence", 0x43A, SF),
  Encoding::usage("DataFieldObjectProximityRange", 0x43B, SV),
  Encoding::usage("DataFieldObjectProximityOutOfRange", 0x43C, SF),
  Encoding::usage("PropertyEnvironmental", 0x440, SV),
  Encoding::usage("PropertyReferencePressure", 0x441, SV),
  Encoding::usage("DataFieldMotion", 0x450, DV),
  Encoding::usage("DataFieldMotionState", 0x451, SF),
  Encoding::usage("DataFieldAcceleration", 0x452, SV),
  Encoding::usage("DataFieldAccelerationAxisX", 0x453, SV),
  Encoding::usage("DataFieldAccelerationAxisY", 0x454, SV),
  Encoding::usage("DataFieldAccelerationAxisZ", 0x455, SV),
  Encoding::usage("DataFieldAngularVelocity", 0x456, SV),
  Encoding::usage("DataFieldAngularVelocityAboutXAxis", 0x457, SV),
  Encoding::usage("DataFieldAngularVelocityAboutYAxis", 0x458, SV),
  Encoding::usage("DataFieldAngularVelocityAboutZAxis", 0x459, SV),
  Encoding::usage("DataFieldAngularPosition", 0x45A, SV),
  Encoding::usage("DataFieldAngularPositionAboutXAxis", 0x45B, SV),
  Encoding::usage("DataFieldAngularPositionAboutYAxis", 0x45C, SV),
  Encoding::usage("DataFieldAngularPositionAboutZAxis", 0x45D, SV),
  Encoding::usage("DataFieldMotionSpeed", 0x45E, SV),
  Encoding::usage("DataFieldMotionIntensity", 0x45F, SV),
  Encoding::usage("DataFieldOrientation", 0x470, DV),
  Encoding::usage("DataFieldHeading", 0x471, SV),
  Encoding::usage("DataFieldHeadingXAxis", 0x472, SV),
  Encoding::usage("DataFieldHeadingYAxis", 0x473, SV),
  Encoding::usage("DataFieldHeadingZAxis", 0x474, SV),
  Encoding::usage("DataFieldHeadingCompensatedMagneticNorth", 0x475, SV),
  Encoding::usage("DataFieldHeadingCompensatedTrueNorth", 0x476, SV),
  Encoding::usage("DataFieldHeadingMagneticNorth", 0x477, SV),
  Encoding::usage("DataFieldHeadingTrueNorth", 0x478, SV),
  Encoding::usage("DataFieldDistance", 0x479, SV),
  Encoding::usage("DataFieldDistanceXAxis", 0x47A, SV),
  Encoding::usage("DataFieldDistanceYAxis", 0x47B, SV),
  Encoding::usage("DataFieldDistanceZAxis", 0x47C, SV),
  Encoding::usage("DataFieldDistanceOutOfRange", 0x47D, SF),
  Encoding::usage("DataFieldTilt", 0x47E, SV),
  Encoding::usage("DataFieldTiltXAxis", 0x47F, SV),
  Encoding::usage("DataFieldTiltYAxis", 0x480, SV),
  Encoding::usage("DataFieldTiltZAxis", 0x481, SV),
  Encoding::usage("DataFieldRotationMatrix", 0x482, SV),
  Encoding::usage("DataFieldQuaternion", 0x483, SV),
  Encoding::usage("DataFieldMagneticFlux", 0x484, SV),
  Encoding::usage("DataFieldMagneticFluxXAxis", 0x485, SV),
  Encoding::usage("DataFieldMagneticFluxYAxis", 0x486, SV),
  Encoding::usage("DataFieldMagneticFluxZAxis", 0x487, SV),
  Encoding::usage("DataFieldMagnetometerAccuracy", 0x488, NARY),
  Encoding::usage("DataFieldSimpleOrientationDirection", 0x489, NARY),
  Encoding::usage("DataFieldMechanical", 0x490, DV),
  Encoding::usage("DataFieldBooleanSwitchState", 0x491, SF),
  Encoding::usage("DataFieldBooleanSwitchArrayStates", 0x492, SV),
  Encoding::usage("DataFieldMultivalueSwitchValue", 0x493, SV),
  Encoding::usage("DataFieldField", 0x494, SV),
  Encoding::usage("DataFieldAbsolutePressure", 0x495, SV),
  Encoding::usage("DataFieldGaugePressure", 0x496, SV),
  Encoding::usage("DataFieldStrain", 0x497, SV),
  Encoding::usage("DataFieldWeight", 0x498, SV),
  Encoding::usage("PropertyMechanical", 0x4A0, DV),
  Encoding::usage("PropertyVibrationState", 0x4A1, DF),
  Encoding::usage("PropertyForwardVibrationSpeed", 0x4A2, DV),
  Encoding::usage("PropertyBackwardVibrationSpeed", 0x4A3, DV),
  Encoding::usage("DataFieldBiometric", 0x4B0, DV),
  Encoding::usage("DataFieldHumanPresence", 0x4B1, SF),
  Encoding::usage("DataFieldHumanProximityRange", 0x4B2, SV),
  Encoding::usage("DataFieldHumanProximityOutOfRange", 0x4B3, SF),
  Encoding::usage("DataFieldHumanTouchState", 0x4B4, SF),
  Encoding::usage("DataFieldBloodPressure", 0x4B5, SV),
  Encoding::usage("DataFieldBloodPressureDiastolic", 0x4B6, SV),
  Encoding::usage("DataFieldBloodPressureSystolic", 0x4B7, SV),
  Encoding::usage("DataFieldHeartRate", 0x4B8, SV),
  Encoding::usage("DataFieldRestingHeartRate", 0x4B9, SV),
  Encoding::usage("DataFieldHeartbeatInterval", 0x4BA, SV),
  Encoding::usage("DataFieldRespiratoryRate", 0x4BB, SV),
  Encoding::usage("DataFieldSpo2", 0x4BC, SV),
  Encoding::usage("DataFieldLight", 0x4D0, DV),
  Encoding::usage("DataFieldIlluminance", 0x4D1, SV),
  Encoding::usage("DataFieldColorTemperature", 0x4D2, SV),
  Encoding::usage("DataFieldChromaticity", 0x4D3, SV),
  Encoding::usage("DataFieldChromaticityX", 0x4D4, SV),
  Encoding::usage("DataFieldChromaticityY", 0x4D5, SV),
  Encoding::usage("DataFieldConsumerIrSentenceReceive", 0x4D6, SV),
  Encoding::usage("DataFieldInfraredLight", 0x4D7, SV),
  Encoding::usage("DataFieldRedLight", 0x4D8, SV),
  Encoding::usage("DataFieldGreenLight", 0x4D9, SV),
  Encoding::usage("DataFieldBlueLight", 0x4DA, SV),
  Encoding::usage("DataFieldUltravioletALight", 0x4DB, SV),
  Encoding::usage("DataFieldUltravioletBLight", 0x4DC, SV),
  Encoding::usage("DataFieldUltravioletIndex", 0x4DD, SV),
  Encoding::usage("DataFieldNearInfraredLight", 0x4DE, SV),
  Encoding::usage("PropertyLight", 0x4DF, DV),
  Encoding::usage("PropertyConsumerIrSentenceSend", 0x4E0, DV),
  Encoding::usage("PropertyAutoBrightnessPreferred", 0x4E2, DF),
  Encoding::usage("PropertyAutoColorPreferred", 0x4E3, DF),
  Encoding::usage("DataFieldScanner", 0x4F0, DV),
  Encoding::usage("DataFieldRfidTag40Bit", 0x4F1, SV),
  Encoding::usage("DataFieldNfcSentenceReceive", 0x4F2, SV),
  Encoding::usage("PropertyScanner", 0x4F8, DV),
  Encoding::usage("PropertyNfcSentenceSend", 0x4F9, SV),
  Encoding::usage("DataFieldElectrical", 0x500, SV),
  Encoding::usage("DataFieldCapacitance", 0x501, SV),
  Encoding::usage("DataFieldCurrent", 0x502, SV),
  Encoding::usage("DataFieldElectricalPower", 0x503, SV),
  Encoding::usage("DataFieldInductance", 0x504, SV),
  Encoding::usage("DataFieldResistance", 0x505, SV),
  Encoding::usage("DataFieldVoltage", 0x506, SV),
  Encoding::usage("DataFieldFrequency", 0x507, SV),
  Encoding::usage("DataFieldPeriod", 0x508, SV),
  Encoding::usage("DataFieldPercentOfRange", 0x509, SV),
  Encoding::usage("DataFieldTime", 0x520, DV),
  Encoding::usage("DataFieldYear", 0x521, SV),
  Encoding::usage("DataFieldMonth", 0x522, SV),
  Encoding::usage("DataFieldDay", 0x523, SV),
  Encoding::usage("DataFieldDayOfWeek", 0x524, NARY),
  Encoding::usage("DataFieldHour", 0x525, SV),
  Encoding::usage("DataFieldMinute", 0x526, SV),
  Encoding::usage("DataFieldSecond", 0x527, SV),
  Encoding::usage("DataFieldMillisecond", 0x528, SV),
  Encoding::usage("DataFieldTimestamp", 0x529, SV),
  Encoding::usage("DataFieldJulianDayOfYear", 0x52A, SV),
  Encoding::usage("DataFieldTimeSinceSystemBoot", 0x52B, SV),
  Encoding::usage("PropertyTime", 0x530, DV),
  Encoding::usage("PropertyTimeZoneOffsetFromUtc", 0x531, DV),
  Encoding::usage("PropertyTimeZoneName", 0x532, DV),
  Encoding::usage("PropertyDaylightSavingsTimeObserved", 0x533, DF),
  Encoding::usage("PropertyTimeTrimAdjustment", 0x534, DV),
  Encoding::usage("PropertyArmAlarm", 0x535, DF),
  Encoding::usage("DataFieldCustom", 0x540, DV),
  Encoding::usage("DataFieldCustomUsage", 0x541, SV),
  Encoding::usage("DataFieldCustomBooleanArray", 0x542, SV),
  Encoding::usage("DataFieldCustomValue", 0x543, SV),
  Encoding::usage("DataFieldCustomValue1", 0x544, SV),
  Encoding::usage("DataFieldCustomValue2", 0x545, SV),
  Encoding::usage("DataFieldCustomValue3", 0x546, SV),
  Encoding::usage("DataFieldCustomValue4", 0x547, SV),
  Encoding::usage("DataFieldCustomValue5", 0x548, SV),
  Encoding::usage("DataFieldCustomValue6", 0x549, SV),
  Encoding::usage("DataFieldCustomValue7", 0x54A, SV),
  Encoding::usage("DataFieldCustomValue8", 0x54B, SV),
  Encoding::usage("DataFieldCustomValue9", 0x54C, SV),
  Encoding::usage("DataFieldCustomValue10", 0x54D, SV),
  Encoding::usage("DataFieldCustomValue11", 0x54E, SV),
  Encoding::usage("DataFieldCustomValue12", 0x54F, SV),
  Encoding::usage("DataFieldCustomValue13", 0x550, SV),
  Encoding::usage("DataFieldCustomValue14", 0x551, SV),
  Encoding::usage("DataFieldCustomValue15", 0x552, SV),
  Encoding::usage("DataFieldCustomValue16", 0x553, SV),
  Encoding::usage("DataFieldCustomValue17", 0x554, SV),
  Encoding::usage("DataFieldCustomValue18", 0x555, SV),
  Encoding::usage("DataFieldCustomValue19", 0x556, SV),
  Encoding::usage("DataFieldCustomValue20", 0x557, SV),
  Encoding::usage("DataFieldCustomValue21", 0x558, SV),
  Encoding::usage("DataFieldCustomValue22", 0x559, SV),
  Encoding::usage("DataFieldCustomValue23", 0x55A, SV),
  Encoding::usage("DataFieldCustomValue24", 0x55B, SV),
  Encoding::usage("DataFieldCustomValue25", 0x55C, SV),
  Encoding::usage("DataFieldCustomValue26", 0x55D, SV),
  Encoding::usage("DataFieldCustomValue27", 0x55E, SV),
  Encoding::usage("DataFieldCustomValue28", 0x55F, SV),
  Encoding::usage("DataFieldGeneric", 0x560, DV),
  Encoding::usage("DataFieldGenericGuidOrPropertykey", 0x561, SV),
  Encoding::usage("DataFieldGenericCategoryGuid", 0x562, SV),
  Encoding::usage("DataFieldGenericTypeGuid", 0x563, SV),
  Encoding::usage("DataFieldGenericEventPropertykey", 0x564, SV),
  Encoding::usage("DataFieldGenericPropertyPropertykey", 0x565, SV),
  Encoding::usage("DataFieldGenericDataFieldPropertykey", 0x566, SV),
  Encoding::usage("DataFieldGenericEvent", 0x567, SV),
  Encoding::usage("DataFieldGenericProperty", 0x568, SV),
  Encoding::usage("DataFieldGenericDataField", 0x569, SV),
  Encoding::usage("DataFieldEnumeratorTableRowIndex", 0x56A, SV),
  Encoding::usage("DataFieldEnumeratorTableRowCount", 0x56B, SV),
  Encoding::usage("DataFieldGenericGuidOrPropertykeyKind", 0x56C, NARY),
  Encoding::usage("DataFieldGenericGuid", 0x56D, SV),
  Encoding::usage("DataFieldGenericPropertykey", 0x56E, SV),
  Encoding::usage("DataFieldGenericTopLevelCollectionId", 0x56F, SV),
  Encoding::usage("DataFieldGenericReportId", 0x570, SV),
  Encoding::usage("DataFieldGenericReportItemPositionIndex", 0x571, SV),
  Encoding::usage("DataFieldGenericFirmwareVartype", 0x572, NARY),
  Encoding::usage("DataFieldGenericUnitOfMessure", 0x573, NARY),
  Encoding::usage("DataFieldGenericUnitExponent", 0x574, NARY),
  Encoding::usage("DataFieldGenericReportSize", 0x575, SV),
  Encoding::usage("DataFieldGenericReportCount", 0x576, SV),
  Encoding::usage("PropertyGeneric", 0x580, DV),
  Encoding::usage("PropertyEnumeratorTableRowIndex", 0x581, DV),
  Encoding::usage("PropertyEnumeratorTableRowCount", 0x582, SV),
  Encoding::usage("DataFieldPersonalActivity", 0x590, DV),
  Encoding::usage("DataFieldActivityType", 0x591, NARY),
  Encoding::usage("DataFieldActivityState", 0x592, NARY),
  Encoding::usage("DataFieldDevicePosition", 0x593, NARY),
  Encoding::usage("DataFieldStepCount", 0x594, SV),
  Encoding::usage("DataFieldStepCountReset", 0x595, DF),
  Encoding::usage("DataFieldStepDuration", 0x596, SV),
  Encoding::usage("DataFieldStepType", 0x597, NARY),
  Encoding::usage("PropertyMinimumActivityDetectionInterval", 0x5A0, DV),
  Encoding::usage("PropertySupportedActivityTypes", 0x5A1, NARY),
  Encoding::usage("PropertySubscribedActivityTypes", 0x5A2, NARY),
  Encoding::usage("PropertySupportedStepTypes", 0x5A3, NARY),
  Encoding::usage("PropertySubscribedStepTypes", 0x5A4, NARY),
  Encoding::usage("PropertyFloorHeight", 0x5A5, DV),
  Encoding::usage("DataFieldCustomTypeId", 0x5B0, SV),
  Encoding::usage("PropertyCustom", 0x5C0, DV),
  Encoding::usage("PropertyCustomValue1", 0x5C1, DV),
  Encoding::usage("PropertyCustomValue2", 0x5C2, DV),
  Encoding::usage("PropertyCustomValue3", 0x5C3, DV),
  Encoding::usage("PropertyCustomValue4", 0x5C4, DV),
  Encoding::usage("PropertyCustomValue5", 0x5C5, DV),
  Encoding::usage("PropertyCustomValue6", 0x5C6, DV),
  Encoding::usage("PropertyCustomValue7", 0x5C7, DV),
  Encoding::usage("PropertyCustomValue8", 0x5C8, DV),
  Encoding::usage("PropertyCustomValue9", 0x5C9, DV),
  Encoding::usage("PropertyCustomValue10", 0x5CA, DV),
  Encoding::usage("PropertyCustomValue11", 0x5CB, DV),
  Encoding::usage("PropertyCustomValue12", 0x5CC, DV),
  Encoding::usage("PropertyCustomValue13", 0x5CD, DV),
  Encoding::usage("PropertyCustomValue14", 0x5CE, DV),
  Encoding::usage("PropertyCustomValue15", 0x5CF, DV),
  Encoding::usage("PropertyCustomValue16", 0x5D0, DV),
  Encoding::usage("DataFieldHinge", 0x5E0, SV | DV),
  Encoding::usage("DataFieldHingeAngle", 0x5E1, SV | DV),
  Encoding::usage("DataFieldGestureSensor", 0x5F0, DV),
  Encoding::usage("DataFieldGestureState", 0x5F1, NARY),
  Encoding::usage("DataFieldHingeFoldInitialAngle", 0x5F2, SV),
  Encoding::usage("DataFieldHingeFoldFinalAngle", 0x5F3, SV),
  Encoding::usage("DataFieldHingeFoldContributionPanel", 0x5F4, NARY),
  Encoding::usage("DataFieldHingeFoldType", 0x5F5, NARY),
  Encoding::usage("SensorStateUndefined", 0x800, SEL),
  Encoding::usage("SensorStateReady", 0x801, SEL),
  Encoding::usage("SensorStateNotAvailable", 0x802, SEL),
  Encoding::usage("SensorStateNoData", 0x803, SEL),
  Encoding::usage("SensorStateInitializing", 0x804, SEL),
  Encoding::usage("SensorStateAccessDenied", 0x805, SEL),
  Encoding::usage("SensorStateError", 0x806, SEL),
  Encoding::usage("SensorEventUnknown", 0x810, SEL),
  Encoding::usage("SensorEventStateChanged", 0x811, SEL),
  Encoding::usage("SensorEventPropertyChanged", 0x812, SEL),
  Encoding::usage("SensorEventDataUploaded", 0x813, SEL),
  Encoding::usage("SensorEventPollResponse", 0x814, SEL),
  Encoding::usage("SensorEventChangeSensitivity", 0x815, SEL),
  Encoding::usage("SensorEventRangeMaximumReached", 0x816, SEL),
  Encoding::usage("SensorEventRangeMinimumReached", 0x817, SEL),
  Encoding::usage("SensorEventHighThresholdCrossUpward", 0x818, SEL),
  Encoding::usage("SensorEventHighThresholdCrossDownward", 0x819, SEL),
  Encoding::usage("SensorEventLowThresholdCrossUpward", 0x81A, SEL),
  Encoding::usage("SensorEventLowThresholdCrossDownward", 0x81B, SEL),
  Encoding::usage("SensorEventZeroThresholdCrossUpward", 0x81C, SEL),
  Encoding::usage("SensorEventZeroThresholdCrossDownward", 0x81D, SEL),
  Encoding::usage("SensorEventPeriodExceeded", 0x81E, SEL),
  Encoding::usage("SensorEventFrequencyExceeded", 0x81F, SEL),
  Encoding::usage("SensorEventComplexTrigger", 0x820, SEL),
  Encoding::usage("ConnectionTypePcIntegrated", 0x830, SEL),
  Encoding::usage("ConnectionTypePcAttached", 0x831, SEL),
  Encoding::usage("ConnectionTypePcExternal", 0x832, SEL),
  Encoding::usage("ReportingStateReportNoEvents", 0x840, SEL),
  Encoding::usage("ReportingStateReportAllEvents", 0x841, SEL),
  Encoding::usage("ReportingStateReportThresholdEvents", 0x842, SEL),
  Encoding::usage("ReportingStateWakeOnNoEvents", 0x843, SEL),
  Encoding::usage("ReportingStateWakeOnAllEvents", 0x844, SEL),
  Encoding::usage("ReportingStateWakeOnThresholdEvents", 0x845, SEL),
  Encoding::usage("PowerStateUndefined", 0x850, SEL),
  Encoding::usage("PowerStateD0FullPower", 0x851, SEL),
  Encoding::usage("PowerStateD1LowPower", 0x852, SEL),
  Encoding::usage("PowerStateD2StandbyPowerWithWakeup", 0x853, SEL),
  Encoding::usage("PowerStateD3SleepWithWakeup", 0x854, SEL),
  Encoding::usage("PowerStateD4PowerOff", 0x855, SEL),
  Encoding::usage("FixQualityNoFix", 0x870, SEL),
  Encoding::usage("FixQualityGps", 0x871, SEL),
  Encoding::usage("FixQualityDgps", 0x872, SEL),
  Encoding::usage("FixTypeNoFix", 0x880, SEL),
  Encoding::usage("FixTypeGpsSpsModeFixValid", 0x881, SEL),
  Encoding::usage("FixTypeDgpsSpsModeFixValid", 0x882, SEL),
  Encoding::usage("FixTypeGpsPpsModeFixValid", 0x883, SEL),
  Encoding::usage("FixTypeRealTimeKinematic", 0x884, SEL),
  Encoding::usage("FixTypeFloatRtk", 0x885, SEL),
  Encoding::usage("FixTypeEstimatedDeadReckoned", 0x886, SEL),
  Encoding::usage("FixTypeManualInputMode", 0x887, SEL),
  Encoding::usage("FixTypeSimulatorMode", 0x888, SEL),
  Encoding::usage("GpsOperationModeManual", 0x890, SEL),
  Encoding::usage("GpsOperationModeAutomatic", 0x891, SEL),
  Encoding::usage("GpsSelectionModeAutonomous", 0x8A0, SEL),
  Encoding::usage("GpsSelectionModeDgps", 0x8A1, SEL),
  Encoding::usage("GpsSelectionModeEstimatedDeadReckoned", 0x8A2, SEL),
  Encoding::usage("GpsSelectionModeManualInput", 0x8A3, SEL),
  Encoding::usage("GpsSelectionModeSimulator", 0x8A4, SEL),
  Encoding::usage("GpsSelectionModeDataNotValid", 0x8A5, SEL),
  Encoding::usage("GpsStatusDataValid", 0x8B0, SEL),
  Encoding::usage("GpsStatusDataNotValid", 0x8B1, SEL),
  Encoding::usage("AccuracyDefault", 0x860, SEL),
  Encoding::usage("AccuracyHigh", 0x861, SEL),
  Encoding::usage("AccuracyMedium", 0x862, SEL),
  Encoding::usage("AccuracyLow", 0x863, SEL),
  Encoding::usage("DayOfWeekSunday", 0x8C0, SEL),
  Encoding::usage("DayOfWeekMonday", 0x8C1, SEL),
  Encoding::usage("DayOfWeekTuesday", 0x8C2, SEL),
  Encoding::usage("DayOfWeekWednesday", 0x8C3, SEL),
  Encoding::usage("DayOfWeekThursday", 0x8C4, SEL),
  Encoding::usage("DayOfWeekFriday", 0x8C5, SEL),
  Encoding::usage("DayOfWeekSaturday", 0x8C6, SEL),
  Encoding::usage("KindCategory", 0x8D0, SEL),
  Encoding::usage("KindType", 0x8D1, SEL),
  Encoding::usage("KindEvent", 0x8D2, SEL),
  Encoding::usage("KindProperty", 0x8D3, SEL),
  Encoding::usage("KindDataField", 0x8D4, SEL),
  Encoding::usage("MagnetometerAccuracyLow", 0x8E0, SEL),
  Encoding::usage("MagnetometerAccuracyMedium", 0x8E1, SEL),
  Encoding::usage("MagnetometerAccuracyHigh", 0x8E2, SEL),
  Encoding::usage("SimpleOrientationDirectionNotRotated", 0x8F0, SEL),
  Encoding::usage("SimpleOrientationDirectionRotated90DegreesCcw", 0x8F1, SEL),
  Encoding::usage("SimpleOrientationDirectionRotated180DegreesCcw", 0x8F2, SEL),
  Encoding::usage("SimpleOrientationDirectionRotated270DegreesCcw", 0x8F3, SEL),
  Encoding::usage("SimpleOrientationDirectionFaceUp", 0x8F4, SEL),
  Encoding::usage("SimpleOrientationDirectionFaceDown", 0x8F5, SEL),
  Encoding::usage("VtNull", 0x900, SEL),
  Encoding::usage("VtBool", 0x901, SEL),
  Encoding::usage("VtUi1", 0x902, SEL),
  Encoding::usage("VtI1", 0x903, SEL),
  Encoding::usage("VtUi2", 0x904, SEL),
  Encoding::usage("VtI2", 0x905, SEL),
  Encoding::usage("VtUi4", 0x906, SEL),
  Encoding::usage("VtI4", 0x907, SEL),
  Encoding::usage("VtUi8", 0x908, SEL),
  Encoding::usage("VtI8", 0x909, SEL),
  Encoding::usage("VtR4", 0x90A, SEL),
  Encoding::usage("VtR8", 0x90B, SEL),
  Encoding::usage("VtWstr", 0x90C, SEL),
  Encoding::usage("VtStr", 0x90D, SEL),
  Encoding::usage("VtClsid", 0x90E, SEL),
  Encoding::usage("VtVectorVtUi1", 0x90F, SEL),
  Encoding::usage("VtF16E0", 0x910, SEL),
  Encoding::usage("VtF16E1", 0x911, SEL),
  Encoding::usage("VtF16E2", 0x912, SEL),
  Encoding::usage("VtF16E3", 0x913, SEL),
  Encoding::usage("VtF16E4", 0x914, SEL),
  Encoding::usage("VtF16E5", 0x915, SEL),
  Encoding::usage("VtF16E6", 0x916, SEL),
  Encoding::usage("VtF16E7", 0x917, SEL),
  Encoding::usage("VtF16E8", 0x918, SEL),
  Encoding::usage("VtF16E9", 0x919, SEL),
  Encoding::usage("VtF16EA", 0x91A, SEL),
  Encoding::usage("VtF16EB", 0x91B, SEL),
  Encoding::usage("VtF16EC", 0x91C, SEL),
  Encoding::usage("VtF16ED", 0x91D, SEL),
  Encoding::usage("VtF16EE", 0x91E, SEL),
  Encoding::usage("VtF16EF", 0x91F, SEL),
  Encoding::usage("VtF32E0", 0x920, SEL),
  Encoding::usage("VtF32E1", 0x921, SEL),
  Encoding::usage("VtF32E2", 0x922, SEL),
  Encoding::usage("VtF32E3", 0x923, SEL),
  Encoding::usage("VtF32E4", 0x924, SEL),
  Encoding::usage("VtF32E5", 0x925, SEL),
  Encoding::usage("VtF32E6", 0x926, SEL),
  Encoding::usage("VtF32E7", 0x927, SEL),
  Encoding::usage("VtF32E8", 0x928, SEL),
  Encoding::usage("VtF32E9", 0x929, SEL),
  Encoding::usage("VtF32EA", 0x92A, SEL),
  Encoding::usage("VtF32EB", 0x92B, SEL),
  Encoding::usage("VtF32EC", 0x92C, SEL),
  Encoding::usage("VtF32ED", 0x92D, SEL),
  Encoding::usage("VtF32EE", 0x92E, SEL),
  Encoding::usage("VtF32EF", 0x92F, SEL),
  Encoding::usage("ActivityTypeUnknown", 0x930, SEL),
  Encoding::usage("ActivityTypeStationary", 0x931, SEL),
  Encoding::usage("ActivityTypeFidgeting", 0x932, SEL),
  Encoding::usage("ActivityTypeWalking", 0x933, SEL),
  Encoding::usage("ActivityTypeRunning", 0x934, SEL),
  Encoding::usage("ActivityTypeInVehicle", 0x935, SEL),
  Encoding::usage("ActivityTypeBiking", 0x936, SEL),
  Encoding::usage("ActivityTypeIdle", 0x937, SEL),
  Encoding::usage("UnitNotSpecified", 0x940, SEL),
  Encoding::usage("UnitLux", 0x941, SEL),
  Encoding::usage("UnitDegreesKelvin", 0x942, SEL),
  Encoding::usage("UnitDegreesCelsius", 0x943, SEL),
  Encoding::usage("UnitPascal", 0x944, SEL),
  Encoding::usage("UnitNewton", 0x945, SEL),
  Encoding::usage("UnitMetersPerSecond", 0x946, SEL),
  Encoding::usage("UnitKilogram", 0x947, SEL),
  Encoding::usage("UnitMeter", 0x948, SEL),
  Encoding::usage("UnitMetersPerSecondSquared", 0x949, SEL),                    // changed name
  Encoding::usage("UnitFarad", 0x94A, SEL),
  Encoding::usage("UnitAmpere", 0x94B, SEL),
  Encoding::usage("UnitWatt", 0x94C, SEL),
  Encoding::usage("UnitHenry", 0x94D, SEL),
  Encoding::usage("UnitOhm", 0x94E, SEL),
  Encoding::usage("UnitVolt", 0x94F, SEL),
  Encoding::usage("UnitHerz", 0x950, SEL),
  Encoding::usage("UnitBar", 0x951, SEL),
  Encoding::usage("UnitDegreesAntiClockwise", 0x952, SEL),
  Encoding::usage("UnitDegreesClockwise", 0x953, SEL),
  Encoding::usage("UnitDegrees", 0x954, SEL),
  Encoding::usage("UnitDegreesPerSecond", 0x955, SEL),
  Encoding::usage("UnitDegreesPerSecondSquared", 0x956, SEL),                   // changed name
  Encoding::usage("UnitKnot", 0x957, SEL),
  Encoding::usage("UnitPercent", 0x958, SEL),
  Encoding::usage("UnitSecond", 0x959, SEL),
  Encoding::usage("UnitMillisecond", 0x95A, SEL),
  Encoding::usage("UnitG", 0x95B, SEL),
  Encoding::usage("UnitBytes", 0x95C, SEL),
  Encoding::usage("UnitMilligauss", 0x95D, SEL),
  Encoding::usage("UnitBits", 0x95E, SEL),
  Encoding::usage("ActivityStateNoStateChange", 0x960, SEL),
  Encoding::usage("ActivityStateStartActivity", 0x961, SEL),
  Encoding::usage("ActivityStateEndActivity", 0x962, SEL),
  Encoding::usage("Exponent0", 0x970, SEL),
  Encoding::usage("Exponent1", 0x971, SEL),
  Encoding::usage("Exponent2", 0x972, SEL),
  Encoding::usage("Exponent3", 0x973, SEL),
  Encoding::usage("Exponent4", 0x974, SEL),
  Encoding::usage("Exponent5", 0x975, SEL),
  Encoding::usage("Exponent6", 0x976, SEL),
  Encoding::usage("Exponent7", 0x977, SEL),
  Encoding::usage("Exponent8", 0x978, SEL),
  Encoding::usage("Exponent9", 0x979, SEL),
  Encoding::usage("ExponentA", 0x97A, SEL),
  Encoding::usage("ExponentB", 0x97B, SEL),
  Encoding::usage("ExponentC", 0x97C, SEL),
  Encoding::usage("ExponentD", 0x97D, SEL),
  Encoding::usage("ExponentE", 0x97E, SEL),
  Encoding::usage("ExponentF", 0x97F, SEL),
  Encoding::usage("DevicePositionUnknown", 0x980, SEL),
  Encoding::usage("DevicePositionUnchanged", 0x981, SEL),
  Encoding::usage("DevicePositionOnDesk", 0x982, SEL),
  Encoding::usage("DevicePositionInHand", 0x983, SEL),
  Encoding::usage("DevicePositionMovingInBag", 0x984, SEL),
  Encoding::usage("DevicePositionStationaryInBag", 0x985, SEL),
  Encoding::usage("StepTypeUnknown", 0x990, SEL),
  Encoding::usage("StepTypeRunning", 0x991, SEL),
  Encoding::usage("StepTypeWalking", 0x992, SEL),
  Encoding::usage("GestureStateUnknown", 0x9A0, SEL),
  Encoding::usage("GestureStateStarted", 0x9A1, SEL),
  Encoding::usage("GestureStateCompleted", 0x9A2, SEL),
  Encoding::usage("GestureStateCancelled", 0x9A3, SEL),
  Encoding::usage("HingeFoldContributionPanelUnknown", 0x9B0, SEL),
  Encoding::usage("HingeFoldContributionPanelPanel1", 0x9B1, SEL),
  Encoding::usage("HingeFoldContributionPanelPanel2", 0x9B2, SEL),
  Encoding::usage("HingeFoldContributionPanelBoth", 0x9B3, SEL),
  Encoding::usage("HingeFoldTypeUnknown", 0x9B4, SEL),
  Encoding::usage("HingeFoldTypeIncreasing", 0x9B5, SEL),
  Encoding::usage("HingeFoldTypeDecreasing", 0x9B6, SEL),
  Encoding::usage("ModifierChangeSensitivityAbsolute", 0x1000, US),
  Encoding::usage("ModifierMaximum", 0x2000, US),
  Encoding::usage("ModifierMinimum", 0x3000, US),
  Encoding::usage("ModifierAccuracy", 0x4000, US),
  Encoding::usage("ModifierResolution", 0x5000, US),
  Encoding::usage("ModifierThresholdHigh", 0x6000, US),
  Encoding::usage("ModifierThresholdLow", 0x7000, US),
  Encoding::usage("ModifierCalibrationOffset", 0x8000, US),
  Encoding::usage("ModifierCalibrationMultiplier", 0x9000, US),
  Encoding::usage("ModifierReportInterval", 0xA000, US),
  Encoding::usage("ModifierFrequencyMax", 0xB000, US),
  Encoding::usage("ModifierPeriodMax", 0xC000, US),
  Encoding::usage("ModifierChangeSensitivityPercentOfRange", 0xD000, US),
  Encoding::usage("ModifierChangeSensitivityPercentRelative", 0xE000, US),
  Encoding::usage("ModifierVendorReserved", 0xF000, US),
];

/// Medical Instrument usage table (HID Usage Tables 1.2 ch. 23).
pub(crate) const MEDICAL_INSTRUMENT: &[Encoding] = &[
  Encoding::usage("MedicalUlrasound", 0x01, CA),
  Encoding::usage("VcrAcquisition", 0x20, OOC),
  Encoding::usage("FreezeThaw", 0x21, OOC),
  Encoding::usage("ClipStore", 0x22, OSC),
  Encoding::usage("Update", 0x23, OSC),
  Encoding::usage("Next", 0x24, OSC),
  Encoding::usage("Save", 0x25, OSC),
  Encoding::usage("Print", 0x26, OSC),
  Encoding::usage("MicrophoneEnable", 0x27, OSC),
  Encoding::usage("Cine", 0x40, LC),
  Encoding::usage("TransmitPower", 0x41, LC),
  Encoding::usage("Volume", 0x42, LC),
  Encoding::usage("Focus", 0x43, LC),
  Encoding::usage("Depth", 0x44, LC),
  Encoding::usage("SoftStepPrimary", 0x60, LC),
  Encoding::usage("SoftStepSecondary", 0x61, LC),
  Encoding::usage("DepthGainCompensation", 0x70, LC),
  Encoding::usage("ZoomSelect", 0x80, OSC),
  Encoding::usage("ZoomAdjust", 0x81, LC),
  Encoding::usage("SpectralDopplerModeSelect", 0x82, OSC),
  Encoding::usage("SpectralDopplerAdjust", 0x83, LC),
  Encoding::usage("ColorDopplerModeSelect", 0x84, OSC),
  Encoding::usage("ColorDopplerAdjust", 0x85, LC),
  Encoding::usage("MotionModeSelect", 0x86, OSC),
  Encoding::usage("MotionModeAdjust", 0x87, LC),
  Encoding::usage("Mode2dSelect", 0x88, OSC),             // changed name to avoid leading digit
  Encoding::usage("Mode2dAdjust", 0x89, LC),              // changed name to avoid leading digit
  Encoding::usage("SoftControlSelect", 0xA0, OSC),
  Encoding::usage("SoftControlAdjust", 0xA1, LC),
];

/// Braille Display usage table (HID Usage Tables 1.2 ch. 24).
pub(crate) const BRAILLE_DISPLAY: &[Encoding] = &[
  Encoding::usage("BrailleDisplay", 0x01, CA),
  Encoding::usage("BrailleRow", 0x02, NARY),
  Encoding::usage("Dot8BrailleCell", 0x03, DV),            // changed name to avoid leading digit
  Encoding::usage("Dot6BrailleCell", 0x04, DV),            // changed name to avoid leading digit
  Encoding::usage("NumberOfBrailleCells", 0x05, DV),
  Encoding::usage("ScreenReaderControl", 0x06, NARY),
  Encoding::usage("ScreenReaderIdentifier", 0x07, DV),
  Encoding::usage("RouterSet1", 0xFA, NARY),
  Encoding::usage("RouterSet2", 0xFB, NARY),
  Encoding::usage("RouterSet3", 0xFC, NARY),
  Encoding::usage("RouterKey", 0x100, SEL),
  Encoding::usage("RowRouterKey", 0x101, SEL),
  Encoding::usage("BrailleButtons", 0x200, NARY),
  Encoding::usage("BrailleKeyboardDot1", 0x201, SEL),
  Encoding::usage("BrailleKeyboardDot2", 0x202, SEL),
  Encoding::usage("BrailleKeyboardDot3", 0x203, SEL),
  Encoding::usage("BrailleKeyboardDot4", 0x204, SEL),
  Encoding::usage("BrailleKeyboardDot5", 0x205, SEL),
  Encoding::usage("BrailleKeyboardDot6", 0x206, SEL),
  Encoding::usage("BrailleKeyboardDot7", 0x207, SEL),
  Encoding::usage("BrailleKeyboardDot8", 0x208, SEL),
  Encoding::usage("BrailleKeyboardSpace", 0x209, SEL),
  Encoding::usage("BrailleKeyboardLeftSpace", 0x20A, SEL),
  Encoding::usage("BrailleKeyboardRightSpace", 0x20B, SEL),
  Encoding::usage("BrailleFaceConrols", 0x20C, NARY),
  Encoding::usage("BrailleLeftControls", 0x20D, NARY),
  Encoding::usage("BrailleRightControls", 0x20E, NARY),
  Encoding::usage("BrailleTopControls", 0x20F, NARY),
  Encoding::usage("BrailleJoystickCenter", 0x210, SEL),
  Encoding::usage("BrailleJoystickUp", 0x211, SEL),
  Encoding::usage("BrailleJoystickDown", 0x212, SEL),
  Encoding::usage("BrailleJoystickLeft", 0x213, SEL),
  Encoding::usage("BrailleJoystickRight", 0x214, SEL),
  Encoding::usage("BrailleDPadCenter", 0x215, SEL),
  Encoding::usage("BrailleDPadUp", 0x216, SEL),
  Encoding::usage("BrailleDPadDown", 0x217, SEL),
  Encoding::usage("BrailleDPadLeft", 0x218, SEL),
  Encoding::usage("BrailleDPadRight", 0x219, SEL),
  Encoding::usage("BraillePanLeft", 0x21A, SEL),
  Encoding::usage("BraillePanRight", 0x21B, SEL),
  Encoding::usage("BrailleRockerUp", 0x21C, SEL),
  Encoding::usage("BrailleRockerDown", 0x21D, SEL),
  Encoding::usage("BrailleRockerPress", 0x21E, SEL),
];

/// Lighting and Illumination usage table (HID Usage Tables 1.2 ch. 25).
pub(crate) const LIGHTING_AND_ILLUMINATION: &[Encoding] = &[
  Encoding::usage("LampArray", 0x01, CA),
  Encoding::usage("LampArrayAttributesReport", 0x02, CL),
  Encoding::usage("LampCount", 0x03, SV | DV),
  Encoding::usage("BoundingBoxWidthInMicrometers", 0x04, SV),
  Encoding::usage("BoundingBoxHeightInMicrometers", 0x05, SV),
  Encoding::usage("BoundingBoxDepthInMicrometers", 0x06, SV),
  Encoding::usage("LampArrayKind", 0x07, SV),
  Encoding::usage("MinUpdateIntervalInMicroseconds", 0x08, SV),
  Encoding::usage("LampAtributesRequestReport", 0x20, CL),
  Encoding::usage("LampId", 0x21, SV | DV),
  Encoding::usage("LampAtributesResponseReport", 0x22, CL),
  Encoding::usage("PositionXInMicrometers", 0x23, DV),
  Encoding::usage("PositionYInMicrometers", 0x24, DV),
  Encoding::usage("PositionZInMicrometers", 0x25, DV),
  Encoding::usage("LampPurposes", 0x26, DV),
  Encoding::usage("UpdateLatencyInMicroseconds", 0x27, DV),
  Encoding::usage("RedLevelCount", 0x28, DV),
  Encoding::usage("GreenLevelCount", 0x29, DV),
  Encoding::usage("BlueLevelCount", 0x2A, DV),
  Encoding::usage("IntensityLevelCount", 0x2B, DV),
  Encoding::usage("IsProgrammable", 0x2C, DV),
  Encoding::usage("InputBinding", 0x2D, DV),
  Encoding::usage("LampMultiUpdateReport", 0x50, CL),
  Encoding::usage("RedUpdateChannel", 0x51, DV),
  Encoding::usage("GreenUpdateChannel", 0x52, DV),
  Encoding::usage("BlueUpdateChannel", 0x53, DV),
  Encoding::usage("IntensityUpdateChannel", 0x54, DV),
  Encoding::usage("LampUpdateFlags", 0x55, DV),
  Encoding::usage("LampRangeUpdateReport", 0x60, CL),
  Encoding::usage("LampIdStart", 0x61, DV),
  Encoding::usage("LampIdEnd", 0x62, DV),
  Encoding::usage("LampArrayControlReport", 0x70, CL),
  Encoding::usage("AutonomousMode", 0x71, DV),
];

/// Monitor usage table (USB Monitor Control Class 1.0 ch. 6).
pub(crate) const MONITOR: &[Encoding] = &[
  Encoding::new("MonitorControl", 0x01),
  Encoding::new("EdidInformation", 0x02),
  Encoding::new("VdifInformation", 0x03),
  Encoding::new("VesaVersion", 0x04),
];

/// Monitor Enumerated Values usage table (USB Monitor Control Class 1.0 ch. 6).
pub(crate) const MONITOR_ENUMERATED_VALUES: &[Encoding] = &[
  Encoding::new("Enum#", 0x00), // range start
  Encoding::new("Enum#", 0x3E), // range end
];

/// VESA Virtual Controls usage table (USB Monitor Control Class 1.0 ch. 6.3).
pub(crate) const VESA_VIRTUAL_CONTROLS: &[Encoding] = &[
  // Contiguous Controls
  Encoding::new("Brightness", 0x10),
  Encoding::new("Contrast", 0x12),
  Encoding::new("RedVideoGain", 0x16),
  Encoding::new("GreenVideoGain", 0x18),
  Encoding::new("BlueVideoGain", 0x1A),
  Encoding::new("Focus", 0x1C),
  Encoding::new("HorizontalPosition", 0x20),
  Encoding::new("HorizontalSize", 0x22),
  Encoding::new("HorizontalPincushion", 0x24),
  Encoding::new("HorizontalPincushionBalance", 0x26),
  Encoding::new("HorizontalMisconvergence", 0x28),
  Encoding::new("HorizontalLinearity", 0x2A),
  Encoding::new("HorizontalLinearityBalance", 0x2C),
  Encoding::new("VerticalPosition", 0x30),
  Encoding::new("VerticalSize", 0x32),
  Encoding::new("VerticalPincushion", 0x34),
  Encoding::new("VerticalPincushionBalance", 0x36),
  Encoding::new("VerticalMisconvergence", 0x38),
  Encoding::new("VerticalLinearity", 0x3A),
  Encoding::new("VerticalLinearityBalance", 0x3C),
  Encoding::new("ParallelogramDistortionKeyBalance", 0x40),
  Encoding::new("TrapezoidalDistortionKey", 0x42),
  Encoding::new("TiltRotation", 0x44),
  Encoding::new("TopCornerDistortionControl", 0x46),
  Encoding::new("TopCornerDistortionBalance", 0x48),
  Encoding::new("BottomCornerDistortionControl", 0x4A),
  Encoding::new("BottomCornerDistortionBalance", 0x4C),
  Encoding::new("HorizontalMoire", 0x56),
  Encoding::new("VerticalMoire", 0x58),
  Encoding::new("RedVideoBlackLevel", 0x6C),
  Encoding::new("GreenVideoBlackLevel", 0x6E),
  Encoding::new("BlueVideoBlackLevel", 0x70),
  // Non-contiguous Controls (Read/Write)
  Encoding::new("InputLevelSelect", 0x5E),
  Encoding::new("InputSourceSelect", 0x60),
  Encoding::new("OnScreenDisplay", 0xCA),
  Encoding::new("StereoMode", 0xD4),
  // Non-contiguous Controls (Read-only)
  Encoding::new("AutoSizeCenter", 0xA2),
  Encoding::new("PolarityHorizontalSynchronization", 0xA4),
  Encoding::new("PolarityVerticalSynchronization", 0xA6),
  Encoding::new("SynchronizationType", 0xA8),
  Encoding::new("ScreenOrientation", 0xAA),
  Encoding::new("HorizontalFrequency", 0xAC),
  Encoding::new("VerticalFrequency", 0xAE),
  Encoding::new("Degauss", 0x01),
  Encoding::new("Settings", 0xB0),
];

/// Power Device usage table (USB Power Device Class 1.0 ch. 4.1).
pub(crate) const POWER_DEVICE: &[Encoding] = &[
  Encoding::usage("IName", 0x01, SV),
  Encoding::usage("PresentStatus", 0x02, CL),
  Encoding::usage("ChangedStatus", 0x03, CL),
  Encoding::usage("Ups", 0x04, CA),
  Encoding::usage("PowerSupply", 0x05, CA),
  Encoding::usage("BatterySystem", 0x10, CP),
  Encoding::usage("BatterySystemId", 0x11, SV),
  Encoding::usage("Battery", 0x12, CP),
  Encoding::usage("BatteryId", 0x13, SV),
  Encoding::usage("Charger", 0x14, CP),
  Encoding::usage("ChargerId", 0x15, SV),
  Encoding::usage("PowerConverer", 0x16, CP),
  Encoding::usage("PowerConvererId", 0x17, SV),
  Encoding::usage("OutletSystem", 0x18, CP),
  Encoding::usage("OutletSystemId", 0x19, SV),
  Encoding::usage("Input", 0x1A, CP),
  Encoding::usage("InputId", 0x1B, SV),
  Encoding::usage("Output", 0x1C, CP),
  Encoding::usage("OutputId", 0x1D, SV),
  Encoding::usage("Flow", 0x1E, CP),
  Encoding::usage("FlowId", 0x1F, SV),                  // changed usage type to match similar usage IDs
  Encoding::usage("Outlet", 0x20, CP),
  Encoding::usage("OutletId", 0x21, SV),
  Encoding::usage("Gang", 0x22, CL | CP),
  Encoding::usage("GangId", 0x23, SV),
  Encoding::usage("PowerSummary", 0x24, CL | CP),
  Encoding::usage("PowerSummaryId", 0x25, SV),
  Encoding::usage("Voltage", 0x30, DV),
  Encoding::usage("Current", 0x31, DV),
  Encoding::usage("Frequency", 0x32, DV),
  Encoding::usage("ApparentPower", 0x33, DV),
  Encoding::usage("ActivePower", 0x34, DV),
  Encoding::usage("PercentLoad", 0x35, DV),
  Encoding::usage("Temperature", 0x36, DV),
  Encoding::usage("Humidity", 0x37, DV),
  Encoding::usage("BadCount", 0x38, DV),
  Encoding::usage("ConfigVoltage", 0x40, SV | DV),
  Encoding::usage("ConfigCurrent", 0x41, SV | DV),
  Encoding::usage("ConfigFrequency", 0x42, SV | DV),
  Encoding::usage("ConfigApparentPower", 0x43, SV | DV),
  Encoding::usage("ConfigActivePower", 0x44, SV | DV),
  Encoding::usage("ConfigPercentLoad", 0x45, SV | DV),
  Encoding::usage("ConfigTemperature", 0x46, SV | DV),
  Encoding::usage("ConfigHumidity", 0x47, SV | DV),
  Encoding::usage("SwitchOnControl", 0x50, DV),
  Encoding::usage("SwitchOffControl", 0x51, DV),
  Encoding::usage("ToggleControl", 0x52, DV),
  Encoding::usage("LowVoltageTransfer", 0x53, DV),
  Encoding::usage("HighVoltageTransfer", 0x54, DV),
  Encoding::usage("DelayBeforeReboot", 0x55, DV),
  Encoding::usage("DelayBeforeStartup", 0x56, DV),
  Encoding::usage("DelayBeforeShutdown", 0x57, DV),
  Encoding::usage("Test", 0x58, DV),
  Encoding::usage("ModuleReset", 0x59, DV),
  Encoding::usage("AudibleAlarmControl", 0x5A, DV),
  Encoding::usage("Present", 0x60, DF),
  Encoding::usage("Good", 0x61, DF),
  Encoding::usage("InternalFailure", 0x62, DF),
  Encoding::usage("VoltageOutOfRange", 0x63, DF),
  Encoding::usage("FrequencyOutOfRange", 0x64, DF),
  Encoding::usage("Overload", 0x65, DF),
  Encoding::usage("OverCharged", 0x66, DF),
  Encoding::usage("OverTemperature", 0x67, DF),
  Encoding::usage("ShutdownRequested", 0x68, DF),
  Encoding::usage("ShutdownImminent", 0x69, DF),
  Encoding::usage("SwitchOnOff", 0x6B, DF),
  Encoding::usage("Switchable", 0x6C, DF),
  Encoding::usage("Used", 0x6D, DF),
  Encoding::usage("Boost", 0x6E, DF),
  Encoding::usage("Buck", 0x6F, DF),
  Encoding::usage("Initialized", 0x70, DF),
  Encoding::usage("Tested", 0x71, DF),
  Encoding::usage("AwaitingPower", 0x72, DF),
  Encoding::usage("CommunicationLost", 0x73, DF),
  Encoding::usage("IManufacturer", 0xFD, SV),
  Encoding::usage("IProduct", 0xFE, SV),
  Encoding::usage("ISerialNumber", 0xFF, SV),
];

/// Bar Code Scanner usage table (USB POS Usage Tables 1.02 ch. 3).
pub(crate) const BARCODE_SCANNER: &[Encoding] = &[
  Encoding::usage("BarCodeBadgeReader", 0x01, CA),
  Encoding::usage("BarCodeScanner", 0x02, CA),
  Encoding::usage("DumbBarCodeScanner", 0x03, CA),
  Encoding::usage("CordlessScannerBase", 0x04, CA),
  Encoding::usage("BarCodeScannerCradle", 0x05, CA),
  Encoding::usage("AttributeReport", 0x10, CL),
  Encoding::usage("SettingsReport", 0x11, CL),
  Encoding::usage("ScannedDataReport", 0x12, CL),
  Encoding::usage("RawScannedDataReport", 0x13, CL),
  Encoding::usage("TriggerReport", 0x14, CL),
  Encoding::usage("StatusReport", 0x15, CL),
  Encoding::usage("UpsEanControlReport", 0x16, CL),
  Encoding::usage("Ean23LabelControlReport", 0x17, CL),
  Encoding::usage("Code39ControlReport", 0x18, CL),
  Encoding::usage("Interleaved2Of5ControlReport", 0x19, CL),
  Encoding::usage("Standard2Of5ConrolReport", 0x1A, CL),
  Encoding::usage("MsiPlesseyControlReport", 0x1B, CL),
  Encoding::usage("CodabarControlReport", 0x1C, CL),
  Encoding::usage("Code128ControlReport", 0x1D, CL),
  Encoding::usage("Misc2dConrolReport", 0x1E, CL),
  Encoding::usage("Control2dReport", 0x1F, CL),                            // changed name to avoid leading digit
  Encoding::usage("AimingPoinerMode", 0x30, SF),
  Encoding::usage("BarCodePresentSensor", 0x31, SF),
  Encoding::usage("Class1aLaser", 0x32, SF),
  Encoding::usage("Class2Laser", 0x33, SF),
  Encoding::usage("HeaterPresent", 0x34, SF),
  Encoding::usage("ContactScanner", 0x35, SF),
  Encoding::usage("ElectronicArticleSurveillanceNotification", 0x36, SF),
  Encoding::usage("ConstantElectronicArticleSurveillance", 0x37, SF),
  Encoding::usage("ErrorIndication", 0x38, SF),
  Encoding::usage("FixedBeeper", 0x39, SF),
  Encoding::usage("GoodDecoderIndication", 0x3A, SF),
  Encoding::usage("HandsFreeScanning", 0x3B, SF),
  Encoding::usage("IntrinsicallySafe", 0x3C, SF),
  Encoding::usage("KlasseEinsLaser", 0x3D, SF),
  Encoding::usage("LongRangeScanner", 0x3E, SF),
  Encoding::usage("MirrorSpeedControl", 0x3F, SF),
  Encoding::usage("NotOnFileIndication", 0x40, SF),
  Encoding::usage("ProgrammableBeeper", 0x41, SF),
  Encoding::usage("Triggerless", 0x42, SF),
  Encoding::usage("Wand", 0x43, SF),
  Encoding::usage("WaterResistant", 0x44, SF),
  Encoding::usage("MultiRangeScanner", 0x45, SF),
  Encoding::usage("ProximitySensor", 0x46, SF),
  Encoding::usage("FragmentDecoder", 0x4D, DF),
  Encoding::usage("ScannerReadConfidence", 0x4E, DV),
  Encoding::usage("DataPrefix", 0x4F, NARY),
  Encoding::usage("PrefixAimi", 0x50, SEL),
  Encoding::usage("PrefixNone", 0x51, SEL),
  Encoding::usage("PrefixProprietary", 0x52, SEL),
  Encoding::usage("ActiveTime", 0x55, DV),
  Encoding::usage("AimingLaserPattern", 0x56, DF),
  Encoding::usage("BarCodePresent", 0x57, OOC),
  Encoding::usage("BeeperState", 0x58, OOC),
  Encoding::usage("LaserOnTime", 0x59, DV),
  Encoding::usage("LaserState", 0x5A, OOC),
  Encoding::usage("LockoutTime", 0x5B, DV),
  Encoding::usage("MotorState", 0x5C, OOC),
  Encoding::usage("MotorTimeout", 0x5D, DV),
  Encoding::usage("PowerOnResetScanner", 0x5E, DF),
  Encoding::usage("PreventReadOfBarcodes", 0x5F, DF),
  Encoding::usage("InitiateBarcodeRead", 0x60, DF),
  Encoding::usage("TriggerState", 0x61, OOC),
  Encoding::usage("TriggerMode", 0x62, NARY),
  Encoding::usage("TriggerModeBlinkingLaserOn", 0x63, SEL),
  Encoding::usage("TriggerModeContinuousLaserOn", 0x64, SEL),
  Encoding::usage("TriggerModeLaserOnWhilePulled", 0x65, SEL),
  Encoding::usage("TriggerModeLaserStaysOnAfterTriggerRelease", 0x66, SEL),
  Encoding::usage("CommitParametersToNvm", 0x6D, DF),
  Encoding::usage("ParameterScanning", 0x6E, DF),
  Encoding::usage("ParametersChanged", 0x6F, OOC),
  Encoding::usage("SetParameterDefaultValues", 0x70, DF),
  Encoding::usage("ScannerInCradle", 0x75, OOC),
  Encoding::usage("ScannerInRange", 0x76, OOC),
  Encoding::usage("AimDuration", 0x7A, DV),
  Encoding::usage("GoodReadLampDuration", 0x7B, DV),
  Encoding::usage("GoodReadLampIntensity", 0x7C, DV),
  Encoding::usage("GoodReadLed", 0x7D, DF),
  Encoding::usage("GoodReadToneFrequency", 0x7E, DV),
  Encoding::usage("GoodReadToneLength", 0x7F, DV),
  Encoding::usage("GoodReadToneVolume", 0x80, DV),
  Encoding::usage("NoReadMessage", 0x82, DF),
  Encoding::usage("NotOnFileVolume", 0x83, DV),
  Encoding::usage("PowerupBeep", 0x84, DF),
  Encoding::usage("SoundErrorBeep", 0x85, DF),
  Encoding::usage("SoundGoodReadBeep", 0x86, DF),
  Encoding::usage("SoundNotOnFileBeep", 0x87, DF),
  Encoding::usage("GoodReadWhenToWrite", 0x88, NARY),
  Encoding::usage("GrwtiAfterDecode", 0x89, SEL),
  Encoding::usage("GrwtiBeepLampAferTransmit", 0x8A, SEL),
  Encoding::usage("GrwtiNoBeepLampUseAtAll", 0x8B, SEL),
  Encoding::usage("BooklandEan", 0x91, DF),
  Encoding::usage("ConvertEan8To13Type", 0x92, DF),
  Encoding::usage("ConvertUpcAToEan13", 0x93, DF),
  Encoding::usage("ConvertUpcEToA", 0x94, DF),
  Encoding::usage("Ean13", 0x95, DF),
  Encoding::usage("Ean8", 0x96, DF),
  Encoding::usage("Ean99128Mandatory", 0x97, DF),
  Encoding::usage("Ean99P5128Optional", 0x98, DF),
  Encoding::usage("UpcEan", 0x9A, DF),
  Encoding::usage("UpcEanCouponCode", 0x9B, DF),
  Encoding::usage("UpcEanPeriodicals", 0x9C, DV),
  Encoding::usage("UpcA", 0x9D, DF),
  Encoding::usage("UpcAWith128Mandatory", 0x9E, DF),
  Encoding::usage("UpcAWith128Optional", 0x9F, DF),
  Encoding::usage("UpcAWithP5Optional", 0xA0, DF),
  Encoding::usage("UpcE", 0xA1, DF),
  Encoding::usage("UpcE1", 0xA2, DF),
  Encoding::usage("Periodical", 0xA9, NARY),
  Encoding::usage("PeriodicalAutoDiscriminatePlus2", 0xAA, SEL),
  Encoding::usage("PeriodicalOnlyDecodeWidthPlus2", 0xAB, SEL),
  Encoding::usage("PeriodicalIgnorePlus2", 0xAC, SEL),
  Encoding::usage("PeriodicalAutoDiscriminatePlus5", 0xAD, SEL),
  Encoding::usage("PeriodicalOnlyDecodeWidthPlus5", 0xAE, SEL),
  Encoding::usage("PeriodicalIgnorePlus5", 0xAF, SEL),
  Encoding::usage("Check", 0xB0, NARY),
  Encoding::usage("CheckDisablePrice", 0xB1, SEL),
  Encoding::usage("CheckEnable4DigitPrice", 0xB2, SEL),
  Encoding::usage("CheckEnable5DigitPrice", 0xB3, SEL),
  Encoding::usage("CheckEnableEuropean4DigitPrice", 0xB4, SEL),
  Encoding::usage("CheckEnableEuropean5DigitPrice", 0xB5, SEL),
  Encoding::usage("EanTwoLabel", 0xB7, DF),
  Encoding::usage("EanThreeLabel", 0xB8, DF),
  Encoding::usage("Ean8FlagDigit1", 0xB9, DV),
  Encoding::usage("Ean8FlagDigit2", 0xBA, DV),
  Encoding::usage("Ean8FlagDigit3", 0xBB, DV),
  Encoding::usage("Ean13FlagDigit1", 0xBC, DV),
  Encoding::usage("Ean13FlagDigit2", 0xBD, DV),
  Encoding::usage("Ean13FlagDigit3", 0xBE, DV),
  Encoding::usage("AddEan23LabelDefinition", 0xBF, DF),
  Encoding::usage("ClearAllEan23LabelDefinitions", 0xC0, DF),
  Encoding::usage("Codabar", 0xC3, DF),
  Encoding::usage("Code128", 0xC4, DF),
  Encoding::usage("Code39", 0xC7, DF),
  Encoding::usage("Code93", 0xC8, DF),
  Encoding::usage("FullAsciiConversion", 0xC9, DF),
  Encoding::usage("Interleaved2Of5", 0xCA, DF),
  Encoding::usage("ItalianPharmacyCode", 0xCB, DF),
  Encoding::usage("MsiPlessey", 0xCC, DF),
  Encoding::usage("Standard2Of5Iata", 0xCD, DF),
  Encoding::usage("Standard2Of5", 0xCE, DF),
  Encoding::usage("TransmitStartStop", 0xD3, DF),
  Encoding::usage("TriOptic", 0xD4, DF),
  Encoding::usage("UccEan128", 0xD5, DF),
  Encoding::usage("CheckDigit", 0xD6, NARY),
  Encoding::usage("CheckDigitDisable", 0xD7, SEL),
  Encoding::usage("CheckDigitEnableInerleaved2Of5Opcc", 0xD8, SEL),
  Encoding::usage("CheckDigitEnableInterleaved2Of5Uss", 0xD9, SEL),
  Encoding::usage("CheckDigitEnableStandard2Of5Opcc", 0xDA, SEL),
  Encoding::usage("CheckDigitEnableStandard2Of5Uss", 0xDB, SEL),
  Encoding::usage("CheckDigitEnableOneMsiPlessey", 0xDC, SEL),
  Encoding::usage("CheckDigitEnableTwoMsiPlessey", 0xDD, SEL),
  Encoding::usage("CheckDigitCodabarEnable", 0xDE, SEL),
  Encoding::usage("CheckDigitCode39Enable", 0xDF, SEL),
  Encoding::usage("TransmitCheckDigit", 0xF0, NARY),
  Encoding::usage("DisableCheckDigitTransmit", 0xF1, SEL),
  Encoding::usage("EnableCheckDigitTransmit", 0xF2, SEL),
  Encoding::usage("SymbologyIdentifier1", 0xFB, DV),
  Encoding::usage("SymbologyIdentifier2", 0xFC, DV),
  Encoding::usage("SymbologyIdentifier3", 0xFD, DV),
  Encoding::usage("DecodedData", 0xFE, DV),
  Encoding::usage("DecodedDataContinued", 0xFF, DF),
  Encoding::usage("BarSpaceData", 0x100, DV),
  Encoding::usage("ScannerDataAccuracy", 0x101, DV),
  Encoding::usage("RawDataPolarity", 0x102, NARY),
  Encoding::usage("PolarityInvertedBarCode", 0x103, SEL),
  Encoding::usage("PolarityNormalBarCode", 0x104, SEL),
  Encoding::usage("MinimumLengthToDecode", 0x106, DV),
  Encoding::usage("MaximumLengthToDecode", 0x107, DV),
  Encoding::usage("FirstDiscreteLengthToDecode", 0x108, DV),
  Encoding::usage("SecondDiscreteLengthToDecode", 0x109, DV),
  Encoding::usage("DataLengthMethod", 0x10A, NARY),
  Encoding::usage("DlMethodReadAny", 0x10B, SEL),
  Encoding::usage("DlMethodCheckInRange", 0x10C, SEL),
  Encoding::usage("DlMethodCheckForDiscrete", 0x10D, SEL),
  Encoding::usage("AztecCode", 0x110, DF),
  Encoding::usage("Bc412", 0x111, DF),
  Encoding::usage("ChannelCode", 0x112, DF),
  Encoding::usage("Code16", 0x113, DF),
  Encoding::usage("Code32", 0x114, DF),
  Encoding::usage("Code49", 0x115, DF),
  Encoding::usage("CodeOne", 0x116, DF),
  Encoding::usage("ColorCode", 0x117, DF),
  Encoding::usage("DataMatrix", 0x118, DF),
  Encoding::usage("MaxiCode", 0x119, DF),
  Encoding::usage("MicroPdf", 0x11A, DF),
  Encoding::usage("Pdf417", 0x11B, DF),
  Encoding::usage("PosiCode", 0x11C, DF),
  Encoding::usage("QrCode", 0x11D, DF),
  Encoding::usage("SuperCode", 0x11E, DF),
  Encoding::usage("UltraCode", 0x11F, DF),
  Encoding::usage("Usd5SlugCode", 0x120, DF),
  Encoding::usage("VeriCode", 0x121, DF),
];

/// Weighing Devices usage table (USB POS Usage Tables 1.02 ch. 4).
pub(crate) const WEIGHING_DEVICES: &[Encoding] = &[
  Encoding::usage("WeighingDevice", 0x01, CA),
  Encoding::usage("ScaleDevice", 0x20, CL),
  Encoding::usage("ScaleClass", 0x21, CL),                      // renamed according to name in ch. 4.2
  Encoding::usage("ScaleClassIMetric", 0x22, SEL),
  Encoding::usage("ScaleClassIiMetric", 0x23, SEL),
  Encoding::usage("ScaleClassIiiMetric", 0x24, SEL),
  Encoding::usage("ScaleClassIiilMetric", 0x25, SEL),
  Encoding::usage("ScaleClassIvMetric", 0x26, SEL),
  Encoding::usage("ScaleClassIiiEnglish", 0x27, SEL),
  Encoding::usage("ScaleClassIiilEnglish", 0x28, SEL),
  Encoding::usage("ScaleClassIvEnglish", 0x29, SEL),
  Encoding::usage("ScaleClassGeneric", 0x2A, SEL),
  Encoding::usage("ScaleAttributeReport", 0x30, CL),
  Encoding::usage("ScaleControlReport", 0x31, CL),
  Encoding::usage("ScaleDataReport", 0x32, CL),
  Encoding::usage("ScaleStatusReport", 0x33, CL),
  Encoding::usage("ScaleWeightLimitReport", 0x34, CL),
  Encoding::usage("ScaleStatisticsReport", 0x35, CL),
  Encoding::usage("DataWeight", 0x40, DV),
  Encoding::usage("DataScaling", 0x41, DV),                     // changed usage type to match similar usage IDs
  Encoding::usage("WeightUnit", 0x50, CL),
  Encoding::usage("WeightUnitMilligram", 0x51, SEL),
  Encoding::usage("WeightUnitGram", 0x52, SEL),
  Encoding::usage("WeightUnitKilogram", 0x53, SEL),
  Encoding::usage("WeightUnitCarats", 0x54, SEL),
  Encoding::usage("WeightUnitTaels", 0x55, SEL),
  Encoding::usage("WeightUnitGrains", 0x56, SEL),
  Encoding::usage("WeightUnitPennyweights", 0x57, SEL),
  Encoding::usage("WeightUnitMetricTon", 0x58, SEL),
  Encoding::usage("WeightUnitAvoirTon", 0x59, SEL),
  Encoding::usage("WeightUnitTroyOunce", 0x5A, SEL),
  Encoding::usage("WeightUnitOunce", 0x5B, SEL),
  Encoding::usage("WeightUnitPound", 0x5C, SEL),
  Encoding::usage("CalibrationCount", 0x60, DV),
  Encoding::usage("ReZeroCount", 0x61, DV),
  Encoding::usage("ScaleStatus", 0x70, CL),
  Encoding::usage("ScaleStatusFault", 0x71, SEL),
  Encoding::usage("ScaleStatusStableAtCenterOfZero", 0x72, SEL),
  Encoding::usage("ScaleStatusInMotion", 0x73, SEL),
  Encoding::usage("ScaleStatusWeightStable", 0x74, SEL),
  Encoding::usage("ScaleStatusUnderZero", 0x75, SEL),
  Encoding::usage("ScaleStatusOverWeightLimit", 0x76, SEL),
  Encoding::usage("ScaleStatusRequiresCalibration", 0x77, SEL),
  Encoding::usage("ScaleStatusRequiresRezeroing", 0x78, SEL),
  Encoding::usage("ZeroScale", 0x80, OOC),
  Encoding::usage("EnforcedZeroReturn", 0x81, OOC),
];

/// Magnetic Stripe Reader usage table (USB POS Usage Tables 1.02 ch. 5).
pub(crate) const MAGNETIC_STRIPE_READER: &[Encoding] = &[
  Encoding::usage("MsrDeviceReadOnly", 0x01, CA),
  Encoding::usage("Track1Length", 0x11, SF | DF | SEL),
  Encoding::usage("Track2Length", 0x12, SF | DF | SEL),
  Encoding::usage("Track3Length", 0x13, SF | DF | SEL),
  Encoding::usage("TrackJisLength", 0x14, SF | DF | SEL),
  Encoding::usage("TrackData", 0x20, SF | DF | SEL),
  Encoding::usage("Track1Data", 0x21, SF | DF | SEL),
  Encoding::usage("Track2Data", 0x22, SF | DF | SEL),
  Encoding::usage("Track3Data", 0x23, SF | DF | SEL),
  Encoding::usage("TrackJisData", 0x24, SF | DF | SEL),
];

/// Camera Control usage table (HID Usage Tables 1.2 ch. 30).
pub(crate) const CAMERA_CONTROL: &[Encoding] = &[
  Encoding::usage("CameraAutoFocus", 0x20, OSC),
  Encoding::usage("CameraShutter", 0x21, OSC),
];

/// Arcade usage table (OAAF Data Format Specification 6).
pub(crate) const ARCADE: &[Encoding] = &[
  Encoding::usage("GeneralPurposeIoCard", 0x01, CA),
  Encoding::usage("CoinDoor", 0x02, CA),
  Encoding::usage("WatchdogTimer", 0x03, CA),
  Encoding::usage("GeneralPurposeAnalogInputState", 0x30, DV),
  Encoding::usage("GeneralPurposeDigitalInputState", 0x31, DV),
  Encoding::usage("GeneralPurposeOpticalInputState", 0x32, DV),
  Encoding::usage("GeneralPurposeDigitalOutputState", 0x33, DV),
  Encoding::usage("NumberOfCoinDoors", 0x34, DV),
  Encoding::usage("CoinDrawerDropCount", 0x35, DV),
  Encoding::usage("CoinDrawerDropStart", 0x36, OOC),
  Encoding::usage("CoinDrawerDropService", 0x37, OOC),
  Encoding::usage("CoinDrawerDropTilt", 0x38, OOC),
  Encoding::usage("CoinDoorTest", 0x39, OOC),
  Encoding::usage("CoinDoorLockout", 0x40, OOC),
  Encoding::usage("WatchdogTimeout", 0x41, DV),
  Encoding::usage("WatchdogAction", 0x42, NARY),
  Encoding::usage("WatchdogReboot", 0x43, SEL),
  Encoding::usage("WatchdogRestart", 0x44, SEL),
  Encoding::usage("AlarmInput", 0x45, DV),
  Encoding::usage("CoinDoorCounter", 0x46, OOC),
  Encoding::usage("IoDirectionMapping", 0x47, DV),
  Encoding::usage("SetIoDirection", 0x48, OOC),
  Encoding::usage("ExtendedOpticalInputState", 0x49, DV),
  Encoding::usage("PinPadInputState", 0x4A, DV),
  Encoding::usage("PinPadStatus", 0x4B, DV),
  Encoding::usage("PinPadOutput", 0x4C, OOC),
  Encoding::usage("PinPadCommand", 0x4D, DV),
];

/// FIDO Alliance usage table (HID Usage Tables 1.2 ch. 32).
pub(crate) const FIDO_ALLIANCE: &[Encoding] = &[
  Encoding::usage("U2fAuthenticatorDevice", 0x01, CA),
  Encoding::usage("InputReportData", 0x20, DV),
  Encoding::usage("OutputReportData", 0x21, DV),
];

/// Usage page table (HID Usage Tables 1.2 ch. 3).
pub(crate) const USAGE_PAGES: &[Encoding] = &[
  Encoding::table("GenericDesktop", 0x01, GENERIC_DESKTOP),
  Encoding::table("SimulationControls", 0x02, SIMULATION_CONTROLS),
  Encoding::table("VrControls", 0x03, VR_CONTROLS),
  Encoding::table("SportControls", 0x04, SPORT_CONTROLS),
  Encoding::table("GameControls", 0x05, GAME_CONTROLS),
  Encoding::table("GenericDeviceControls", 0x06, GENERIC_DEVICE_CONTROLS),
  Encoding::table("Keyboard", 0x07, KEYBOARD),
  Encoding::table("Led", 0x08, LED),
  Encoding::table("Button", 0x09, BUTTON),
  Encoding::table("Ordinal", 0x0A, ORDINAL),
  Encoding::table("TelephonyDevice", 0x0B, TELEPHONY_DEVICE),
  Encoding::table("Consumer", 0x0C, CONSUMER),
  Encoding::table("Digitizers", 0x0D, DIGITIZERS),
  Encoding::table("Haptics", 0x0E, HAPTICS),
  Encoding::table("Pid", 0x0F, PID),
  Encoding::table("Unicode", 0x10, UNICODE),
  Encoding::table("EyeAndHeadTrackers", 0x12, EYE_AND_HEAD_TRACKERS),
  Encoding::table("AuxiliaryDisplay", 0x14, AUXILIARY_DISPLAY),
  Encoding::table("Sensors", 0x20, SENSORS),
  Encoding::table("MediacalInstrument", 0x40, MEDICAL_INSTRUMENT),
  Encoding::table("BrailleDisplay", 0x41, BRAILLE_DISPLAY),
  Encoding::table("LightingAndIllumination", 0x59, LIGHTING_AND_ILLUMINATION),
  Encoding::table("Monitor", 0x80, MONITOR),
  Encoding::table("MonitorEnumeratedValues", 0x81, MONITOR_ENUMERATED_VALUES), // Monitor Control Class Specification 1.0 ch. 6
  Encoding::table("VesaVirtualControls", 0x82, VESA_VIRTUAL_CONTROLS),         // Monitor Control Class Specification 1.0 ch. 6
  Encoding::table("Power", 0x84, POWER_DEVICE),
  Encoding::table("BarCodeScanner", 0x8C, BARCODE_SCANNER),
  Encoding::table("WeighingDevices", 0x8D, WEIGHING_DEVICES),
  Encoding::table("MagneticStripeReaderDevices", 0x8E, MAGNETIC_STRIPE_READER),
  Encoding::table("CameraControl", 0x90, CAMERA_CONTROL),
  Encoding::table("Arcade", 0x91, ARCADE),
  Encoding::new("GamingDevice", 0x92),
  Encoding::table("FidoAlliance", 0xF1D0, FIDO_ALLIANCE),
];

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::{ArgMap, Encoding, ITEMS};

  // Collects every table reachable from the item table, including the nested unit and usage
  // page tables.
  fn reachable_tables() -> Vec<&'static [Encoding]> {
    let mut pending = Vec::from([ITEMS]);
    let mut tables: Vec<&'static [Encoding]> = Vec::new();
    while let Some(table) = pending.pop() {
      tables.push(table);
      for entry in table {
        if let Some(child) = entry.args.table() {
          if !tables.iter().any(|seen| core::ptr::eq(*seen, child)) {
            pending.push(child);
          }
        }
      }
    }
    tables
  }

  #[test]
  fn item_prefixes_should_have_zero_size_bits() {
    for item in ITEMS {
      assert_eq!(item.value & 0x3, 0, "item {} carries size bits in its prefix", item.name);
    }
  }

  #[test]
  fn indexed_names_should_form_valid_ranges() {
    for table in reachable_tables() {
      for (index, entry) in table.iter().enumerate() {
        if let Some(hash) = entry.name.find('#') {
          if index > 0 && table[index - 1].name == entry.name {
            continue; // second entry of a pair
          }
          assert_eq!(hash, entry.name.len() - 1, "index marker must terminate {}", entry.name);
          assert!(index < 3, "indexed name {} must sit within the first three entries", entry.name);
          let next = table.get(index + 1).expect("indexed name without range end");
          assert_eq!(next.name, entry.name, "indexed name {} lacks its range end", entry.name);
          assert!(entry.value <= next.value, "empty index range for {}", entry.name);
        }
      }
    }
  }

  #[test]
  fn usage_page_values_should_fit_sixteen_bits() {
    let pages = ITEMS
      .iter()
      .find_map(|item| match item.args {
        ArgMap::UsagePage(pages) => Some(pages),
        _ => None,
      })
      .expect("missing usage page table");
    for page in pages {
      assert!(page.value <= 0xFFFF, "usage page {} exceeds 16 bits", page.name);
    }
  }

  #[test]
  fn names_should_be_plain_ascii() {
    for table in reachable_tables() {
      for entry in table {
        assert!(entry.name.is_ascii(), "non-ASCII table name {}", entry.name);
        assert!(!entry.name.is_empty(), "empty table name");
      }
    }
  }
}
