/// Marker in the HTML template replaced with the bundle script tag
pub(crate) const SCRIPT_MARKER: &str = "<!-- SCRIPTS -->";

/// Path the external bundler writes the bundle to, as served over HTTP
pub(crate) const BUNDLE_PATH: &str = "/dist/bundle.js";

/// Replace the script marker with a module script tag for `bundle_path`.
/// Templates without the marker pass through unchanged.
pub fn render_template(html: &str, bundle_path: &str) -> String {
    html.replace(
        SCRIPT_MARKER,
        &format!("<script type=\"module\" src=\"{}\"></script>", bundle_path),
    )
}
