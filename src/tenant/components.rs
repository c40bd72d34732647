use super::models::Tenant;
use crate::components::{Component, DeleteButton, Table};
use ammonia::clean_text;

pub struct TenantsView<'a> {
    pub tenants: &'a [Tenant],
}
impl Component for TenantsView<'_> {
    fn render(&self) -> String {
        let rows = self
            .tenants
            .iter()
            .map(|t| {
                let full_name = clean_text(&t.full_name);
                let phone = clean_text(&t.phone);
                let email = clean_text(&t.email);
                let created_at = clean_text(t.created_at.as_deref().unwrap_or(""));
                let delete = DeleteButton {
                    href: &format!("/tenants/{}", urlencoding::encode(&t.tenant_id)),
                    noun: "tenant",
                }
                .render();
                format!(
                    r#"
                    <tr>
                        <td>{full_name}</td>
                        <td>{phone}</td>
                        <td>{email}</td>
                        <td>{created_at}</td>
                        <td>{delete}</td>
                    </tr>
                    "#
                )
            })
            .collect();
        let table = Table {
            headers: &["Name", "Phone", "Email", "Added", ""],
            rows,
        }
        .render();
        format!(
            r##"
            <h2>Tenants</h2>
            {table}
            <form
                class="create"
                hx-post="/tenants"
                hx-target="#mount"
                hx-sync="#mount:replace"
                >
                <label>Full name <input name="full_name" type="text" required /></label>
                <label>Phone <input name="phone" type="tel" /></label>
                <label>Email <input name="email" type="email" /></label>
                <button>Add tenant</button>
            </form>
            "##
        )
    }
}
