//! The tab controller. Which tab is active lives in the URL, never in server
//! state: `/?tab=leases` for full page loads and `/tab/leases` for the htmx
//! fragment that fills the mount point.

use super::{
    api_client::{ApiClient, ClientError},
    components::{Component, ErrorCard},
    lease::{api_ops::get_lease_listing, components::LeasesView},
    property::{api_ops::list_properties, components::PropertiesView},
    tenant::{api_ops::list_tenants, components::TenantsView},
};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Properties,
    Tenants,
    Leases,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Properties, Self::Tenants, Self::Leases];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Tenants => "tenants",
            Self::Leases => "leases",
        }
    }
    pub fn get_display_name(&self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Tenants => "Tenants",
            Self::Leases => "Leases",
        }
    }
}

pub struct TabBar {
    pub active: Tab,
}
impl Component for TabBar {
    fn render(&self) -> String {
        let buttons = Tab::ALL
            .iter()
            .map(|tab| {
                let slug = tab.slug();
                let name = tab.get_display_name();
                let class = if *tab == self.active { "active" } else { "" };
                format!(
                    r##"
                    <button
                        class="{class}"
                        hx-get="/tab/{slug}"
                        hx-target="#mount"
                        hx-sync="#mount:replace"
                        hx-push-url="/?tab={slug}"
                        >{name}</button>
                    "##
                )
            })
            .collect::<Vec<String>>()
            .join("");
        format!(r#"<nav id="tabs">{buttons}</nav>"#)
    }
}

/// The tab bar, swapped out-of-band so the highlighted tab follows every
/// refresh of the mount point.
pub struct TabBarUpdate {
    pub active: Tab,
}
impl Component for TabBarUpdate {
    fn render(&self) -> String {
        TabBar {
            active: self.active,
        }
        .render()
        .replacen(r#"<nav id="tabs">"#, r#"<nav id="tabs" hx-swap-oob="true">"#, 1)
    }
}

async fn render_tab(client: &ApiClient, tab: Tab) -> Result<String, ClientError> {
    Ok(match tab {
        Tab::Properties => {
            let properties = list_properties(client).await?;
            PropertiesView {
                properties: &properties,
            }
            .render()
        }
        Tab::Tenants => {
            let tenants = list_tenants(client).await?;
            TenantsView { tenants: &tenants }.render()
        }
        Tab::Leases => {
            let listing = get_lease_listing(client).await?;
            LeasesView { listing: &listing }.render()
        }
    })
}

/// Re-fetch everything the tab shows and render it. Any failure along the
/// way becomes a single error card in place of the tab's content.
pub async fn refresh(client: &ApiClient, tab: Tab) -> String {
    let panel = match render_tab(client, tab).await {
        Ok(html) => html,
        Err(e) => {
            tracing::info!(tab = tab.slug(), error = %e, "refresh failed");
            ErrorCard {
                message: &e.to_string(),
            }
            .render()
        }
    };
    [panel, TabBarUpdate { active: tab }.render()].join("\n")
}

/// An error card in place of the tab's content, with the tab bar kept in
/// step.
pub fn error_panel(tab: Tab, message: &str) -> String {
    [
        ErrorCard { message }.render(),
        TabBarUpdate { active: tab }.render(),
    ]
    .join("\n")
}

/// A failed write is reported through the same boundary as a failed fetch.
pub async fn refresh_after_write(
    client: &ApiClient,
    tab: Tab,
    write: Result<(), ClientError>,
) -> String {
    match write {
        Ok(()) => refresh(client, tab).await,
        Err(e) => {
            tracing::info!(tab = tab.slug(), error = %e, "write failed");
            error_panel(tab, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assert_mount_requests_are_synced;
    use crate::api_client::testing::FakeApi;
    use serde_json::json;

    #[test]
    fn test_tab_bar_marks_only_the_active_tab() {
        let html = TabBar { active: Tab::Tenants }.render();

        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        let tenants_button = html
            .split("<button")
            .find(|b| b.contains(r#"hx-get="/tab/tenants""#))
            .expect("tenants button");
        assert!(tenants_button.contains(r#"class="active""#));
    }

    #[test]
    fn test_default_tab_is_properties() {
        assert_eq!(Tab::default(), Tab::Properties);
    }

    #[tokio::test]
    async fn test_refresh_shows_error_card_on_failure() {
        let api = FakeApi::new();
        api.respond_with(400, r#"{"error":"bad address"}"#);
        let client = ApiClient::new("https://api.example.com", api);

        let html = refresh(&client, Tab::Properties).await;

        assert!(html.contains(r#"class="error""#));
        assert!(html.contains(&ammonia::clean_text("bad address")));
        assert!(!html.contains("<table>"));
    }

    #[tokio::test]
    async fn test_refresh_rejects_unknown_status() {
        let api = FakeApi::new();
        api.properties.lock().unwrap().push(json!({
            "property_id": "p1",
            "address": "Main St",
            "status": "DEMOLISHED"
        }));
        let client = ApiClient::new("https://api.example.com", api);

        let html = refresh(&client, Tab::Properties).await;

        assert!(html.contains(r#"class="error""#));
        assert!(html.contains(&ammonia::clean_text("unexpected response from /properties")));
    }

    #[tokio::test]
    async fn test_leases_tab_fetches_sequentially_in_order() {
        let api = FakeApi::new();
        let client = ApiClient::new("https://api.example.com", api.clone());

        refresh(&client, Tab::Leases).await;

        assert_eq!(
            api.urls(),
            vec![
                "GET https://api.example.com/leases",
                "GET https://api.example.com/properties",
                "GET https://api.example.com/tenants",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_config_is_reported_in_the_mount() {
        let api = FakeApi::new();
        let client = ApiClient::new("", api.clone());

        let html = refresh(&client, Tab::Tenants).await;

        assert!(html.contains(&ammonia::clean_text("API base URL is not configured")));
        assert!(api.urls().is_empty());
    }

    #[test]
    fn test_tab_buttons_are_synced_with_the_mount() {
        let html = TabBar { active: Tab::Leases }.render();

        assert_eq!(html.matches(r##"hx-target="#mount""##).count(), 3);
        assert_mount_requests_are_synced(&html);
    }

    #[tokio::test]
    async fn test_numeric_created_at_does_not_reject_the_list() {
        let api = FakeApi::new();
        api.properties.lock().unwrap().push(json!({
            "property_id": "p1",
            "address": "Main St",
            "status": "AVAILABLE",
            "created_at": 1704067200
        }));
        api.tenants.lock().unwrap().push(json!({
            "tenant_id": "t1",
            "full_name": "Ann",
            "phone": "",
            "email": "",
            "created_at": 1704067200
        }));
        let client = ApiClient::new("https://api.example.com", api);

        let properties = refresh(&client, Tab::Properties).await;
        assert!(!properties.contains(r#"class="error""#));
        assert!(properties.contains(&format!("<td>{}</td>", ammonia::clean_text("Main St"))));
        assert!(properties.contains("<td>1704067200</td>"));

        let tenants = refresh(&client, Tab::Tenants).await;
        assert!(tenants.contains("<td>Ann</td>"));
        assert!(tenants.contains("<td>1704067200</td>"));
    }
}
