//! HTML rendering for the upload page

use crate::output::console::{PLACEHOLDER_MESSAGE, SUCCESS_MESSAGE, failure_message};
use crate::output::markdown::render_markdown;
use crate::progress::reporter::LOADING_MESSAGE;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mom_domain::{DecodedImage, ImageFormat, UploadOutcome};
use pulldown_cmark::escape::escape_html;

pub const PAGE_TITLE: &str = "Minutes of Meeting (MoM) Generator";
pub const PAGE_SUBHEADER: &str = "Upload your handwritten MoM image";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
.banner { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 1rem 0; }
.info { background: #e8f0fe; color: #0b4a8b; }
.success { background: #e6f4ea; color: #137333; }
.error { background: #fce8e6; color: #a50e0e; }
figure { margin: 1rem 0; }
figure img { max-width: 100%; }
figcaption { color: #808495; font-size: 0.9rem; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #d0d3da; padding: 0.4rem 0.6rem; text-align: left; }
#spinner { display: none; margin: 1rem 0; }
"#;

const SCRIPT: &str = r#"
document.getElementById('upload').addEventListener('submit', function () {
  document.getElementById('spinner').style.display = 'block';
});
document.getElementById('file').addEventListener('change', function () {
  if (this.files.length > 0) { this.form.requestSubmit(); }
});
"#;

/// Render the full page for an outcome
pub fn render_page(outcome: &UploadOutcome) -> String {
    let mut body = String::new();

    if let Some(preview) = outcome.preview() {
        body.push_str(&preview_figure(preview));
    }

    match outcome {
        UploadOutcome::Placeholder => {
            body.push_str(&banner("info", PLACEHOLDER_MESSAGE));
        }
        UploadOutcome::Succeeded { response, .. } => {
            body.push_str(&banner("success", SUCCESS_MESSAGE));
            body.push_str("<section id=\"result\">\n");
            body.push_str(&render_markdown(response.text()));
            body.push_str("</section>\n");
        }
        UploadOutcome::Failed { message, .. } => {
            body.push_str(&banner("error", &failure_message(message)));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<h2>{subheader}</h2>
<form id="upload" method="post" action="/" enctype="multipart/form-data">
<input type="file" id="file" name="file" accept="{accept}">
<button type="submit">Upload</button>
</form>
<div id="spinner">{loading}</div>
{body}<script>{script}</script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        subheader = PAGE_SUBHEADER,
        accept = accept_attribute(),
        loading = LOADING_MESSAGE,
        body = body,
        script = SCRIPT,
    )
}

/// `.jpg,.jpeg,.png`
fn accept_attribute() -> String {
    ImageFormat::ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

fn preview_figure(preview: &DecodedImage) -> String {
    format!(
        "<figure>\n<img src=\"data:{};base64,{}\" width=\"{}\" alt=\"Uploaded Image\">\n<figcaption>Uploaded Image</figcaption>\n</figure>\n",
        preview.mime_type(),
        STANDARD.encode(&preview.bytes),
        preview.width,
    )
}

fn banner(kind: &str, text: &str) -> String {
    format!("<div class=\"banner {}\">{}</div>\n", kind, escape(text))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = escape_html(&mut escaped, text);
    escaped
}
