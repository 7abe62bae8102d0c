use crate::model::SpecPath;

/// Spec paths shown in a comparison, in display order
///
/// This list is the contract with the dataset's vocabulary. It is not
/// derived from the devices being compared; a category missing from it
/// never shows up in a comparison.
pub const KNOWN_SPEC_PATHS: &[&str] = &[
    "Network.Technology",
    "Network.2G bands",
    "Body.Dimensions",
    "Body.Weight",
    "Body.SIM",
    "Display.Type",
    "Display.Size",
    "Display.Resolution",
    "Platform.OS",
    "Memory.Internal",
    "Memory.Card slot",
    "Main Camera",
    "Selfie camera",
    "Sound.Loudspeaker",
    "Battery.Type",
    "Comms.WLAN",
    "Comms.Bluetooth",
    "Comms.USB",
    "Comms.Positioning",
    "Comms.NFC",
    "Features.Sensors",
    "Launch.Announced",
    "Launch.Status",
    "Misc.Colors",
];

/// [`KNOWN_SPEC_PATHS`] parsed into segments
pub fn known_spec_paths() -> Vec<SpecPath> {
    KNOWN_SPEC_PATHS.iter().map(|p| SpecPath::parse(p)).collect()
}
