use anyhow::anyhow;
use spider_core::NoiseOverlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn styled_element(document: &web::Document, element_id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("missing #{element_id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{element_id} is not an HTML element: {:?}", e))
}

/// Paint a noise overlay as the element's background layer.
pub fn apply(
    document: &web::Document,
    element_id: &str,
    overlay: &NoiseOverlay,
) -> anyhow::Result<()> {
    let style = styled_element(document, element_id)?.style();
    let set = |name: &str, value: &str| {
        style
            .set_property(name, value)
            .map_err(|e| anyhow!("set {name}: {:?}", e))
    };
    set("background-image", &overlay.css_background())?;
    set("mix-blend-mode", overlay.blend_mode())?;
    set("pointer-events", "none")?;
    log::info!(
        "[noise] {} on #{} (size {}, density {})",
        overlay.filter_id,
        element_id,
        overlay.params.size,
        overlay.params.density
    );
    Ok(())
}

pub fn clear(document: &web::Document, element_id: &str) -> anyhow::Result<()> {
    let style = styled_element(document, element_id)?.style();
    for name in ["background-image", "mix-blend-mode"] {
        style
            .remove_property(name)
            .map_err(|e| anyhow!("remove {name}: {:?}", e))?;
    }
    Ok(())
}
