use crate::model::{DeviceRef, SpecValue};
use crate::render::{DETAIL_IMAGE_PLACEHOLDER, PLACEHOLDER_GLYPH};

/// Render a device's full specification sheet to Markdown
///
/// Generates:
/// - Title (`brand model`) as H1
/// - The image, or the detail placeholder
/// - One H2 per category that is a group, with a `key: value` bullet per
///   entry; empty values show the placeholder glyph
///
/// Categories holding a bare string are skipped.
pub fn render_device_detail(device: DeviceRef<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", device.title()));
    output.push_str(&format!(
        "![{}]({})\n\n",
        device.model_name(),
        device.device.image_or(DETAIL_IMAGE_PLACEHOLDER)
    ));

    for (category, items) in device.device.specifications.iter() {
        let Some(items) = items.as_group() else {
            continue;
        };

        output.push_str(&format!("## {}\n\n", category));
        for (key, value) in items.iter() {
            output.push_str(&format!("- **{}:** {}\n", key, detail_value(value)));
        }
        output.push('\n');
    }

    output
}

fn detail_value(value: &SpecValue) -> String {
    match value {
        SpecValue::Text(text) if text.is_empty() => PLACEHOLDER_GLYPH.to_string(),
        SpecValue::Text(text) => text.clone(),
        SpecValue::Group(group) if group.is_empty() => PLACEHOLDER_GLYPH.to_string(),
        SpecValue::Group(group) => group
            .iter()
            .map(|(k, v)| format!("{}: {}", k, detail_value(v)))
            .collect::<Vec<_>>()
            .join("; "),
    }
}
