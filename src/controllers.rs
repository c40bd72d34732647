use super::{
    api_client::ApiClient,
    components::{self, Component},
    config_store::{self, ApiBase},
    errors::ServerError,
    htmx,
    lease::{api_ops as lease_ops, models::NewLease},
    models::AppState,
    property::{
        api_ops as property_ops,
        models::{NewProperty, PropertyStatus, PropertyStatusUpdate},
    },
    tabs::{error_panel, refresh, refresh_after_write, Tab},
    tenant::{api_ops as tenant_ops, models::NewTenant},
};
use anyhow::Result;
use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::{HeaderMap, Method},
    response::IntoResponse,
    Form,
};
use serde::Deserialize;

fn api_client(state: &AppState, ApiBase(base): ApiBase) -> ApiClient {
    ApiClient::new(base, state.transport.clone())
}

fn full_page(api_base: &str, tab: Tab) -> String {
    components::Page {
        title: &format!("{} | Rental Office", tab.get_display_name()),
        children: Box::new(components::Shell { api_base, tab }),
    }
    .render()
}

/// A form that does not decode is reported in the mount like any other
/// failed write, and nothing is sent to the API.
fn rejected_form(tab: Tab, rejection: FormRejection) -> String {
    tracing::info!(tab = tab.slug(), error = %rejection, "form rejected");
    error_panel(tab, &rejection.to_string())
}

#[derive(Deserialize)]
pub struct RootQuery {
    tab: Option<Tab>,
}
pub async fn root(
    api_base: ApiBase,
    Query(RootQuery { tab }): Query<RootQuery>,
) -> impl IntoResponse {
    full_page(&api_base.0, tab.unwrap_or_default())
}

pub async fn pong() -> impl IntoResponse {
    "pong"
}

pub async fn get_tab(
    State(state): State<AppState>,
    api_base: ApiBase,
    Path(tab): Path<Tab>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if htmx::is_htmx_request(&headers) {
        refresh(&api_client(&state, api_base), tab).await
    } else {
        full_page(&api_base.0, tab)
    }
}

#[derive(Deserialize)]
pub struct ConfigForm {
    #[serde(default)]
    api_base: String,
}
pub async fn save_config(
    Form(ConfigForm { api_base }): Form<ConfigForm>,
) -> Result<impl IntoResponse, ServerError> {
    let headers = config_store::set(&api_base)?;
    tracing::info!(api_base = %config_store::normalize(&api_base), "saved API base URL");

    Ok((htmx::refresh(headers), ""))
}

pub async fn api_health(
    State(state): State<AppState>,
    api_base: ApiBase,
) -> impl IntoResponse {
    let client = api_client(&state, api_base);
    match client.call("/health", Method::GET, None).await {
        Ok(_) => components::HealthBadge { problem: None }.render(),
        Err(e) => components::HealthBadge {
            problem: Some(&e.to_string()),
        }
        .render(),
    }
}

#[derive(Deserialize)]
pub struct PropertyForm {
    #[serde(default)]
    address: String,
    #[serde(default)]
    status: PropertyStatus,
    #[serde(default)]
    notes: String,
}
pub async fn create_property(
    State(state): State<AppState>,
    api_base: ApiBase,
    form: Result<Form<PropertyForm>, FormRejection>,
) -> impl IntoResponse {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected_form(Tab::Properties, rejection),
    };
    let client = api_client(&state, api_base);
    let property = NewProperty {
        address: form.address.trim().to_string(),
        status: form.status,
        notes: form.notes.trim().to_string(),
    };
    let result = property_ops::create_property(&client, &property).await;

    refresh_after_write(&client, Tab::Properties, result).await
}

#[derive(Deserialize)]
pub struct StatusForm {
    status: PropertyStatus,
}
pub async fn update_property_status(
    State(state): State<AppState>,
    api_base: ApiBase,
    Path(id): Path<String>,
    form: Result<Form<StatusForm>, FormRejection>,
) -> impl IntoResponse {
    let Form(StatusForm { status }) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected_form(Tab::Properties, rejection),
    };
    let client = api_client(&state, api_base);
    let update = PropertyStatusUpdate { status };
    let result = property_ops::update_property_status(&client, &id, &update).await;

    refresh_after_write(&client, Tab::Properties, result).await
}

pub async fn delete_property(
    State(state): State<AppState>,
    api_base: ApiBase,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let client = api_client(&state, api_base);
    let result = property_ops::delete_property(&client, &id).await;

    refresh_after_write(&client, Tab::Properties, result).await
}

#[derive(Deserialize)]
pub struct TenantForm {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
}
pub async fn create_tenant(
    State(state): State<AppState>,
    api_base: ApiBase,
    form: Result<Form<TenantForm>, FormRejection>,
) -> impl IntoResponse {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected_form(Tab::Tenants, rejection),
    };
    let client = api_client(&state, api_base);
    let tenant = NewTenant {
        full_name: form.full_name.trim().to_string(),
        phone: form.phone.trim().to_string(),
        email: form.email.trim().to_string(),
    };
    let result = tenant_ops::create_tenant(&client, &tenant).await;

    refresh_after_write(&client, Tab::Tenants, result).await
}

pub async fn delete_tenant(
    State(state): State<AppState>,
    api_base: ApiBase,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let client = api_client(&state, api_base);
    let result = tenant_ops::delete_tenant(&client, &id).await;

    refresh_after_write(&client, Tab::Tenants, result).await
}

#[derive(Deserialize)]
pub struct LeaseForm {
    #[serde(default)]
    property_id: String,
    #[serde(default)]
    tenant_id: String,
    #[serde(default)]
    start_date: String,
}
pub async fn create_lease(
    State(state): State<AppState>,
    api_base: ApiBase,
    form: Result<Form<LeaseForm>, FormRejection>,
) -> impl IntoResponse {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected_form(Tab::Leases, rejection),
    };
    let client = api_client(&state, api_base);
    let lease = NewLease {
        property_id: form.property_id.trim().to_string(),
        tenant_id: form.tenant_id.trim().to_string(),
        start_date: form.start_date.trim().to_string(),
    };
    let result = lease_ops::create_lease(&client, &lease).await;

    refresh_after_write(&client, Tab::Leases, result).await
}

pub async fn delete_lease(
    State(state): State<AppState>,
    api_base: ApiBase,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let client = api_client(&state, api_base);
    let result = lease_ops::delete_lease(&client, &id).await;

    refresh_after_write(&client, Tab::Leases, result).await
}
