use crate::model::DeviceRef;
use crate::render::{CARD_IMAGE_PLACEHOLDER, NO_RESULTS_MESSAGE, NO_SELECTION_MESSAGE};

/// Render a result list as cards, one block per device
///
/// Each card shows the title, the image (or placeholder) and the id used to
/// pin the device for comparison.
pub fn render_cards(devices: &[DeviceRef<'_>]) -> String {
    if devices.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let mut output = String::new();
    for device in devices {
        output.push_str(&format!("{}\n", device.title()));
        output.push_str(&format!(
            "  image: {}\n",
            device.device.image_or(CARD_IMAGE_PLACEHOLDER)
        ));
        output.push_str(&format!("  id: {}\n", device.id()));
    }
    output
}

/// Render the right-side candidates of a comparison, numbered from 1
pub fn render_compare_candidates(devices: &[DeviceRef<'_>]) -> String {
    if devices.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    devices
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{:>2}. {} ({})\n", i + 1, d.title(), d.id()))
        .collect()
}

/// Render the pinned left-side device of a comparison
pub fn render_pinned(pinned: Option<DeviceRef<'_>>) -> String {
    match pinned {
        None => format!("{}\n", NO_SELECTION_MESSAGE),
        Some(device) => format!(
            "{}\n  image: {}\n",
            device.title(),
            device.device.image_or(CARD_IMAGE_PLACEHOLDER)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Device;

    #[test]
    fn test_render_cards_basic() {
        let a = Device::new("Galaxy S24").with_image("https://img/s24.jpg");
        let b = Device::new("Pixel 8");
        let cards = render_cards(&[DeviceRef::new("Samsung", &a), DeviceRef::new("Google", &b)]);

        assert!(cards.contains("Samsung Galaxy S24"));
        assert!(cards.contains("image: https://img/s24.jpg"));
        assert!(cards.contains("id: Samsung_Galaxy-S24"));
        assert!(cards.contains(&format!("image: {}", CARD_IMAGE_PLACEHOLDER)));
    }

    #[test]
    fn test_render_empty_lists() {
        assert_eq!(render_cards(&[]), "No phones found\n");
        assert_eq!(render_compare_candidates(&[]), "No phones found\n");
        assert_eq!(render_pinned(None), "No phone selected\n");
    }

    #[test]
    fn test_candidates_numbered() {
        let a = Device::new("One");
        let out = render_compare_candidates(&[DeviceRef::new("Acme", &a)]);
        assert_eq!(out, " 1. Acme One (Acme_One)\n");
    }
}
