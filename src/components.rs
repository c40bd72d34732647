use super::tabs::{Tab, TabBar};
use ammonia::clean_text;

pub trait Component {
    /// Render the component to a HTML string. By convention, the
    /// implementation should escape all string properties at render-time
    fn render(&self) -> String;
}

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; margin: 2rem; color: #1e1b4b; }
    nav { display: flex; gap: .5rem; margin: 1rem 0; }
    nav button { padding: .4rem 1rem; border: 1px solid #a5b4fc; border-radius: .25rem; background: #eef2ff; cursor: pointer; }
    nav button.active { background: #4f46e5; color: white; }
    table { border-collapse: collapse; margin-bottom: 1.5rem; min-width: 40rem; }
    th, td { text-align: left; padding: .3rem .8rem; border-bottom: 1px solid #e0e7ff; }
    form.create { display: flex; flex-wrap: wrap; gap: .5rem; align-items: end; }
    form.create label { display: flex; flex-direction: column; font-size: .8rem; }
    .error { background: #fee2e2; border: 1px solid #f87171; border-radius: .25rem; padding: 1rem; }
    .badge { font-size: .8rem; padding: .2rem .5rem; border-radius: .25rem; background: #e0e7ff; }
    .badge.down { background: #fee2e2; }
"#;

pub struct Page<'a> {
    pub title: &'a str,
    pub children: Box<dyn Component + 'a>,
}

impl Component for Page<'_> {
    fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
            <html>
                <head>
                    <meta name="viewport" content="width=device-width, initial-scale=1.0"></meta>
                    <title>{title}</title>
                    <style>{STYLE}</style>
                </head>
                <body>
                    {body_html}
                    <script src="https://unpkg.com/htmx.org@1.9.6"></script>
                </body>
            </html>
            "#,
            title = clean_text(self.title),
            body_html = self.children.render()
        )
    }
}

/// Everything outside the mount point. The mount loads the active tab as
/// soon as the page is shown.
pub struct Shell<'a> {
    pub api_base: &'a str,
    pub tab: Tab,
}
impl Component for Shell<'_> {
    fn render(&self) -> String {
        let config_form = ConfigForm {
            api_base: self.api_base,
        }
        .render();
        let tab_bar = TabBar { active: self.tab }.render();
        let slug = self.tab.slug();
        format!(
            r#"
            <header>
                <h1>Rental Office</h1>
                {config_form}
            </header>
            {tab_bar}
            <main
                id="mount"
                hx-get="/tab/{slug}"
                hx-trigger="load"
                >
                Loading...
            </main>
            "#
        )
    }
}

pub struct ConfigForm<'a> {
    pub api_base: &'a str,
}
impl Component for ConfigForm<'_> {
    fn render(&self) -> String {
        let api_base = clean_text(self.api_base);
        format!(
            r#"
            <form hx-post="/config" hx-swap="none">
                <label for="api_base">API base URL</label>
                <input
                    id="api_base"
                    name="api_base"
                    type="url"
                    size="40"
                    placeholder="https://api.example.com"
                    value="{api_base}"
                    />
                <button>Save</button>
                <span hx-get="/api-health" hx-trigger="load" hx-swap="outerHTML"></span>
            </form>
            "#
        )
    }
}

/// The only place API failures are shown to the user.
pub struct ErrorCard<'a> {
    pub message: &'a str,
}
impl Component for ErrorCard<'_> {
    fn render(&self) -> String {
        let message = clean_text(self.message);
        format!(
            r#"
            <div class="error" role="alert">
                <strong>Something went wrong</strong>
                <p>{message}</p>
            </div>
            "#
        )
    }
}

pub struct HealthBadge<'a> {
    pub problem: Option<&'a str>,
}
impl Component for HealthBadge<'_> {
    fn render(&self) -> String {
        match self.problem {
            None => r#"<span class="badge">API reachable</span>"#.to_string(),
            Some(problem) => format!(
                r#"<span class="badge down">{}</span>"#,
                clean_text(problem)
            ),
        }
    }
}

/// A table with one header row. Rows arrive pre-rendered; an empty body
/// gets a single placeholder row instead.
pub struct Table<'a> {
    pub headers: &'a [&'a str],
    pub rows: Vec<String>,
}
impl Component for Table<'_> {
    fn render(&self) -> String {
        let headers = self
            .headers
            .iter()
            .map(|h| format!("<th>{}</th>", clean_text(h)))
            .collect::<Vec<String>>()
            .join("");
        let body = if self.rows.is_empty() {
            let span = self.headers.len();
            format!(r#"<tr><td colspan="{span}"><em>Nothing here yet.</em></td></tr>"#)
        } else {
            self.rows.join("\n")
        };
        format!(
            r#"
            <table>
                <thead><tr>{headers}</tr></thead>
                <tbody>{body}</tbody>
            </table>
            "#
        )
    }
}

pub struct DeleteButton<'a> {
    /// Browser-side route, e.g. `/tenants/<id>`, already percent-encoded.
    pub href: &'a str,
    pub noun: &'a str,
}
impl Component for DeleteButton<'_> {
    fn render(&self) -> String {
        let href = clean_text(self.href);
        let noun = clean_text(self.noun);
        format!(
            r##"
            <button
                hx-delete="{href}"
                hx-target="#mount"
                hx-sync="#mount:replace"
                hx-confirm="Delete this {noun}?"
                >Delete</button>
            "##
        )
    }
}

/// `<option>`s for a `<select>`; `options` is `(value, label)`.
pub struct Options<'a> {
    pub options: Vec<(&'a str, &'a str)>,
    pub selected: Option<&'a str>,
}
impl Component for Options<'_> {
    fn render(&self) -> String {
        self.options
            .iter()
            .map(|(value, label)| {
                let selected = if Some(*value) == self.selected {
                    " selected"
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{selected}>{}</option>"#,
                    clean_text(value),
                    clean_text(label)
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Every element that swaps into the mount must also abort older in-flight
/// requests for it, otherwise a slow response can overwrite a newer panel.
#[cfg(test)]
pub fn assert_mount_requests_are_synced(html: &str) {
    let tags: Vec<&str> = html
        .split('<')
        .map(|chunk| chunk.split('>').next().unwrap_or(chunk))
        .filter(|tag| tag.contains(r##"hx-target="#mount""##))
        .collect();
    assert!(!tags.is_empty(), "nothing here targets #mount");
    for tag in tags {
        assert!(
            tag.contains(r##"hx-sync="#mount:replace""##),
            "<{tag}> targets #mount without hx-sync"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_card_escapes_the_message() {
        let html = ErrorCard {
            message: "<b>HTTP 500</b>",
        }
        .render();

        assert!(html.contains("&lt;b&gt;HTTP&#32;500&lt;&#47;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_table_has_placeholder_row() {
        let html = Table {
            headers: &["Address", "Status"],
            rows: vec![],
        }
        .render();

        assert!(html.contains(r#"colspan="2""#));
        assert!(html.contains("Nothing here yet."));
    }

    #[test]
    fn test_shell_restores_saved_base_url_and_loads_active_tab() {
        let html = Shell {
            api_base: "https://api.example.com",
            tab: Tab::Leases,
        }
        .render();

        assert!(html.contains(&format!(
            r#"value="{}""#,
            clean_text("https://api.example.com")
        )));
        assert!(html.contains(r#"hx-get="/tab/leases""#));
    }

    #[test]
    fn test_delete_button_is_synced_with_the_mount() {
        assert_mount_requests_are_synced(
            &DeleteButton {
                href: "/tenants/t1",
                noun: "tenant",
            }
            .render(),
        );
    }

    #[test]
    fn test_options_mark_the_selected_value() {
        let html = Options {
            options: vec![("a", "A"), ("b", "B")],
            selected: Some("b"),
        }
        .render();

        assert!(html.contains(r#"<option value="a">A</option>"#));
        assert!(html.contains(r#"<option value="b" selected>B</option>"#));
    }
}
