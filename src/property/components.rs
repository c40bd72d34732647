use super::models::{Property, PropertyStatus};
use crate::components::{Component, DeleteButton, Options, Table};
use ammonia::clean_text;

pub struct PropertiesView<'a> {
    pub properties: &'a [Property],
}
impl Component for PropertiesView<'_> {
    fn render(&self) -> String {
        let rows = self
            .properties
            .iter()
            .map(|p| PropertyRow { property: p }.render())
            .collect();
        let table = Table {
            headers: &["Address", "Status", "Notes", "Added", ""],
            rows,
        }
        .render();
        let form = PropertyForm {}.render();
        format!(
            r#"
            <h2>Properties</h2>
            {table}
            {form}
            "#
        )
    }
}

struct PropertyRow<'a> {
    property: &'a Property,
}
impl Component for PropertyRow<'_> {
    fn render(&self) -> String {
        let href = format!(
            "/properties/{}",
            urlencoding::encode(&self.property.property_id)
        );
        let address = clean_text(&self.property.address);
        let status = StatusSelect {
            href: &href,
            current: self.property.status,
        }
        .render();
        let notes = clean_text(self.property.notes.as_deref().unwrap_or(""));
        let created_at = clean_text(self.property.created_at.as_deref().unwrap_or(""));
        let delete = DeleteButton {
            href: &href,
            noun: "property",
        }
        .render();
        format!(
            r#"
            <tr>
                <td>{address}</td>
                <td>{status}</td>
                <td>{notes}</td>
                <td>{created_at}</td>
                <td>{delete}</td>
            </tr>
            "#
        )
    }
}

fn status_options(selected: Option<PropertyStatus>) -> String {
    Options {
        options: PropertyStatus::ALL
            .iter()
            .map(|s| (s.as_str(), s.get_display_name()))
            .collect(),
        selected: selected.map(|s| s.as_str()),
    }
    .render()
}

/// Changing the selection saves the new status straight away.
struct StatusSelect<'a> {
    href: &'a str,
    current: PropertyStatus,
}
impl Component for StatusSelect<'_> {
    fn render(&self) -> String {
        let href = clean_text(self.href);
        let options = status_options(Some(self.current));
        format!(
            r##"
            <select
                name="status"
                hx-put="{href}"
                hx-trigger="change"
                hx-target="#mount"
                hx-sync="#mount:replace"
                >{options}</select>
            "##
        )
    }
}

struct PropertyForm;
impl Component for PropertyForm {
    fn render(&self) -> String {
        let statuses = status_options(None);
        format!(
            r##"
            <form
                class="create"
                hx-post="/properties"
                hx-target="#mount"
                hx-sync="#mount:replace"
                >
                <label>Address <input name="address" type="text" required /></label>
                <label>Status
                    <select name="status">{statuses}</select>
                </label>
                <label>Notes <input name="notes" type="text" /></label>
                <button>Add property</button>
            </form>
            "##
        )
    }
}
