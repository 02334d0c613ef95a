use wasm_bindgen::prelude::*;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::domain::logging::{LogComponent, get_logger};

pub const DEFAULT_EXPORT_FILENAME: &str = "chart.png";

/// `name` with a `.png` extension, falling back to the default for blank input
pub fn png_filename(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_EXPORT_FILENAME.to_string();
    }
    if name.to_ascii_lowercase().ends_with(".png") {
        name.to_string()
    } else {
        format!("{name}.png")
    }
}

/// Download the canvas contents as a PNG through a temporary anchor
pub fn export_png(canvas: &HtmlCanvasElement, filename: &str) -> Result<(), JsValue> {
    let data_url = canvas.to_data_url_with_type("image/png")?;

    let anchor = gloo::utils::document()
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("Failed to create download link"))?;
    anchor.set_href(&data_url);
    anchor.set_download(&png_filename(filename));
    anchor.click();

    get_logger().info(
        LogComponent::Infrastructure("Export"),
        &format!("💾 Exported chart ({} bytes as data URL)", data_url.len()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_gets_png_extension() {
        assert_eq!(png_filename("net-worth"), "net-worth.png");
        assert_eq!(png_filename("Chart.PNG"), "Chart.PNG");
        assert_eq!(png_filename("  "), "chart.png");
    }
}
