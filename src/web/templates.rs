use crate::domain::model::ResultsView;

const SURVEY_PAGE: &str = include_str!("../../templates/survey.html");
const RESULTS_PAGE: &str = include_str!("../../templates/results.html");

pub fn render_survey() -> &'static str {
    SURVEY_PAGE
}

pub fn render_results(view: &ResultsView) -> String {
    fill(RESULTS_PAGE, |key| match key {
        "profile" => Some(escape_html(&view.profile)),
        "advice" => Some(escape_html(&view.advice)),
        "conf" => Some(view.conf.to_string()),
        "worry" => Some(view.worry.to_string()),
        "human" => Some(view.human.to_string()),
        _ => None,
    })
}

/// Replaces `{{ key }}` placeholders in a single pass, so substituted values
/// are never scanned again. Unknown keys are left as-is.
fn fill(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        match lookup(after[..end].trim()) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
