//! API Handlers
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use chrono::Utc;
use landkit_core::{validate_campaign, validate_internal, InternalSchema, LANDKIT_VERSION};
use landkit_out::{generate_site, map_to_view_model};
use landkit_quality::{audit, AuditSummary};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

const CAMPAIGN_FIELD: &str = "campaignData";
const SCHEMA_FIELD: &str = "internalSchemaData";

/// JSON request body; rejections become JSON error responses.
type JsonBody = Result<Json<Value>, JsonRejection>;

fn field<'a>(body: &'a Value, name: &'static str) -> Result<&'a Value, ApiError> {
    body.get(name).filter(|v| !v.is_null()).ok_or(ApiError::MissingField(name))
}

fn internal_schema(body: &Value) -> Result<InternalSchema, ApiError> {
    validate_internal(field(body, SCHEMA_FIELD)?).map_err(ApiError::invalid_schema)
}

/// The body is the campaign document itself.
pub async fn validate(payload: JsonBody) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let campaign = validate_campaign(&body).map_err(ApiError::invalid_campaign)?;
    Ok(Json(json!({ "success": true, "data": campaign })))
}

pub async fn transform(
    State(state): State<Arc<AppState>>,
    payload: JsonBody,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let campaign =
        validate_campaign(field(&body, CAMPAIGN_FIELD)?).map_err(ApiError::unprocessable_campaign)?;

    let outcome = state.engine.transform_detailed(&campaign).await;
    let findings = audit(Some(&outcome.schema));

    let metadata = outcome.schema.metadata.as_ref();
    let template = metadata
        .and_then(|m| m.template.clone())
        .unwrap_or_else(|| state.renderer.template_set().to_string());
    let campaign_name = metadata
        .and_then(|m| m.campaign_name.clone())
        .unwrap_or_else(|| outcome.schema.business.name.clone());

    info!(
        business = %outcome.schema.business.name,
        fallback = outcome.source.is_fallback(),
        findings = findings.len(),
        "transform complete"
    );

    Ok(Json(json!({
        "success": true,
        "data": outcome.schema,
        "source": outcome.source,
        "findings": findings,
        "metadata": {
            "transformedAt": Utc::now().to_rfc3339(),
            "template": template,
            "campaignName": campaign_name,
        },
    })))
}

pub async fn audit_schema(payload: JsonBody) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let schema = internal_schema(&body)?;
    let findings = audit(Some(&schema));
    let summary = AuditSummary::from_findings(&findings);
    Ok(Json(json!({ "findings": findings, "summary": summary })))
}

pub async fn view_model(payload: JsonBody) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let schema = internal_schema(&body)?;
    Ok(Json(json!({ "success": true, "data": map_to_view_model(&schema) })))
}

pub async fn preview(
    State(state): State<Arc<AppState>>,
    payload: JsonBody,
) -> Result<Html<String>, ApiError> {
    let Json(body) = payload?;
    let schema = internal_schema(&body)?;
    let html = state.renderer.render_page(&map_to_view_model(&schema))?;
    Ok(Html(html))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: JsonBody,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let schema = internal_schema(&body)?;
    let site = generate_site(&schema, &state.renderer)?;
    Ok(Json(json!({ "success": true, "data": site })))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": LANDKIT_VERSION,
        "provider": state.engine.provider_name(),
        "template": state.renderer.template_set(),
    }))
}
