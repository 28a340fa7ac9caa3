//! Main page rendering
//!
//! The page carries one random starting image plus the full styling map as
//! inline data; `/script.js` takes it from there.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::router::RequestContext;
use crate::config::AppState;
use crate::content::{self, ImageConfig, IMAGES};
use crate::http;
use crate::logger;

/// `GET /`
pub async fn serve_index(
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let initial_image = match content::select_image(&IMAGES) {
        Ok(image) => image,
        Err(e) => {
            logger::log_error(&format!("Cannot pick initial image: {e}"));
            return http::build_text_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            );
        }
    };

    let image_config =
        content::load_image_config(state.assets.as_ref(), &state.config.content.image_config_path)
            .await;

    match render_index(&initial_image, &image_config) {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render page: {e}"));
            http::build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Render the page for the given starting image and styling map
pub fn render_index(
    initial_image: &str,
    config: &ImageConfig,
) -> Result<String, serde_json::Error> {
    let style = config.style_for(initial_image);
    let image_js = script_json(&serde_json::to_string(initial_image)?);
    let config_js = script_json(&serde_json::to_string(config)?);
    let image_attr = escape_attr(initial_image);
    let img_style = escape_attr(&format!(
        "object-fit: {}; object-position: {};",
        style.object_fit, style.object_position
    ));

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="Spend time with Esquie - wholesome quotes and charming wisdom">
  <title>Mon ami!</title>
  <link rel="icon" type="image/jpeg" href="/images/esquie6.jpg">
  <link rel="stylesheet" href="/styles.css">
</head>
<body>
  <div id="background-image" class="background-image">
    <img id="esquie-image" class="esquie-image" src="/images/{image_attr}" style="{img_style}" alt="Esquie">
  </div>

  <main id="welcome-screen" class="screen active">
    <div class="overlay-container">
      <h1 id="question-text">Do you want to spend time with Esquie?</h1>
      <button id="yes-button" class="primary-button" type="button">Yes</button>
    </div>
  </main>

  <main id="content-screen" class="screen hidden">
    <div class="overlay-container">
      <p id="esquie-quote" class="quote" aria-live="polite"></p>
      <button id="yes-button-content" class="primary-button" type="button">Yes</button>
    </div>
  </main>

  <div id="error-message" class="error-message hidden">
    <div class="overlay-container">
      <span class="error-text"></span>
      <button id="error-dismiss" class="dismiss-button" type="button" aria-label="Dismiss">&times;</button>
    </div>
  </div>

  <script>
    window.INITIAL_IMAGE = {image_js};
    window.IMAGE_CONFIG = {config_js};
  </script>
  <script src="/script.js"></script>
</body>
</html>
"#
    ))
}

/// Keep JSON from closing the surrounding `<script>` element
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_image_and_config() {
        let html = render_index("esquie1.jpg", &ImageConfig::builtin()).unwrap();
        assert!(html.contains(r#"src="/images/esquie1.jpg""#));
        assert!(html.contains(r#"window.INITIAL_IMAGE = "esquie1.jpg";"#));
        assert!(html.contains(r#""esquie1.jpg":{"objectFit":"contain""#));
        assert!(html.contains("object-fit: contain;"));
        assert!(html.contains(r#"<button id="yes-button""#));
        assert!(html.contains("<title>Mon ami!</title>"));
    }

    #[test]
    fn test_unstyled_image_uses_default_style() {
        let html = render_index("esquie2.jpg", &ImageConfig::default()).unwrap();
        assert!(html.contains("window.IMAGE_CONFIG = {};"));
        assert!(html.contains("object-fit: cover; object-position: center center;"));
    }

    #[test]
    fn test_script_json_cannot_close_script() {
        assert_eq!(script_json(r#""</script>""#), r#""<\/script>""#);
        assert_eq!(escape_attr(r#"a"<b>&"#), "a&quot;&lt;b&gt;&amp;");
    }
}
