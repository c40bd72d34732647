use super::{
    api_ops::LeaseListing,
    models::{property_label, tenant_label},
};
use crate::components::{Component, DeleteButton, Options, Table};
use ammonia::clean_text;

pub struct LeasesView<'a> {
    pub listing: &'a LeaseListing,
}
impl Component for LeasesView<'_> {
    fn render(&self) -> String {
        let LeaseListing {
            leases,
            properties,
            tenants,
        } = self.listing;
        let rows = leases
            .iter()
            .map(|lease| {
                let property = clean_text(property_label(properties, &lease.property_id));
                let tenant = clean_text(tenant_label(tenants, &lease.tenant_id));
                let start_date = clean_text(&lease.start_date);
                let delete = if let Some(id) = &lease.lease_id {
                    DeleteButton {
                        href: &format!("/leases/{}", urlencoding::encode(id)),
                        noun: "lease",
                    }
                    .render()
                } else {
                    "".to_string()
                };
                format!(
                    r#"
                    <tr>
                        <td>{property}</td>
                        <td>{tenant}</td>
                        <td>{start_date}</td>
                        <td>{delete}</td>
                    </tr>
                    "#
                )
            })
            .collect();
        let table = Table {
            headers: &["Property", "Tenant", "Start date", ""],
            rows,
        }
        .render();
        let property_options = Options {
            options: properties
                .iter()
                .map(|p| (p.property_id.as_str(), p.address.as_str()))
                .collect(),
            selected: None,
        }
        .render();
        let tenant_options = Options {
            options: tenants
                .iter()
                .map(|t| (t.tenant_id.as_str(), t.full_name.as_str()))
                .collect(),
            selected: None,
        }
        .render();
        format!(
            r##"
            <h2>Leases</h2>
            {table}
            <form
                class="create"
                hx-post="/leases"
                hx-target="#mount"
                hx-sync="#mount:replace"
                >
                <label>Property
                    <select name="property_id">{property_options}</select>
                </label>
                <label>Tenant
                    <select name="tenant_id">{tenant_options}</select>
                </label>
                <label>Start date
                    <input name="start_date" type="text" placeholder="YYYY-MM-DD" />
                </label>
                <button>Add lease</button>
            </form>
            "##
        )
    }
}
