//! Code extraction and markdown-to-HTML rendering for rule bodies.
use std::ops::Range;
use std::sync::LazyLock;

use markdown::{CompileOptions, Options, ParseOptions};
use regex::Regex;

use crate::error::{Result, RulesError};

/// Fence info strings whose block is lifted out as the rule's code sample.
pub const CODE_LANGUAGES: &[&str] = &["typescript", "javascript"];

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?s)```(?:{})[ \t]*\r?\n(.*?)```",
        CODE_LANGUAGES.join("|")
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Output of [`transform`]: the extracted code sample and the rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub code: Option<String>,
    pub html: String,
}

/// Trimmed contents of the first fenced block tagged with a [`CODE_LANGUAGES`] entry.
pub fn extract_code(body: &str) -> Option<String> {
    find_code_fence(body).map(|(code, _)| code)
}

/// Trimmed code and the byte range of the whole fence it came from.
fn find_code_fence(body: &str) -> Option<(String, Range<usize>)> {
    let caps = CODE_FENCE_RE.captures(body)?;
    let fence = caps.get(0)?.range();
    Some((caps[1].trim().to_string(), fence))
}

/// Render markdown to HTML. Raw HTML in the input is passed through unchanged.
pub fn render_html(body: &str) -> Result<String> {
    let options = Options {
        parse: ParseOptions::gfm(),
        compile: CompileOptions {
            allow_dangerous_html: true,
            ..CompileOptions::default()
        },
    };
    markdown::to_html_with_options(body, &options).map_err(|e| RulesError::Markdown(e.to_string()))
}

/// Extract the code sample and render the rest of the body.
///
/// The extracted fence is left out of the HTML since it is shown separately;
/// any later matching fences stay in the rendered output.
pub fn transform(body: &str) -> Result<Transformed> {
    let Some((code, fence)) = find_code_fence(body) else {
        return Ok(Transformed {
            code: None,
            html: render_html(body)?,
        });
    };

    let mut remaining = String::with_capacity(body.len());
    remaining.push_str(&body[..fence.start]);
    remaining.push_str(&body[fence.end..]);

    Ok(Transformed {
        code: Some(code),
        html: render_html(&remaining)?,
    })
}
