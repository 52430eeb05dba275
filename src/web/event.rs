//! `POST /event` - the Pub/Sub push endpoint that triggers one
//! reconciliation pass per product-published notification.

use std::convert::Infallible;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use imgsync_app::{ProductPublished, ReconcileProductImages};
use imgsync_core::image::ProductProjection;
use imgsync_core::ports::{CatalogImageReaderPort, CatalogImageWriterPort, ImageFetcherPort};

/// Pub/Sub push envelope.
#[derive(Debug, Deserialize)]
struct PushEnvelope {
    message: Option<PushMessage>,
}

#[derive(Debug, Deserialize)]
struct PushMessage {
    data: Option<String>,
}

/// Decoded notification payload: either the full projection inline or a
/// bare product reference to resolve through the catalog reader.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventPayload {
    product_projection: Option<ProductProjection>,
    resource: Option<ResourceRef>,
}

#[derive(Debug, Deserialize)]
struct ResourceRef {
    id: String,
}

/// Event route.
pub fn route<F, W, R>(
    reconcile: Arc<ReconcileProductImages<F, W>>,
    reader: Arc<R>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone
where
    F: ImageFetcherPort + 'static,
    W: CatalogImageWriterPort + 'static,
    R: CatalogImageReaderPort + 'static,
{
    warp::path!("event")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_reconcile(reconcile))
        .and(with_reader(reader))
        .and_then(handle_event)
}

fn with_reconcile<F, W>(
    reconcile: Arc<ReconcileProductImages<F, W>>,
) -> impl Filter<Extract = (Arc<ReconcileProductImages<F, W>>,), Error = Infallible> + Clone
where
    F: ImageFetcherPort + 'static,
    W: CatalogImageWriterPort + 'static,
{
    warp::any().map(move || reconcile.clone())
}

fn with_reader<R>(
    reader: Arc<R>,
) -> impl Filter<Extract = (Arc<R>,), Error = Infallible> + Clone
where
    R: CatalogImageReaderPort + 'static,
{
    warp::any().map(move || reader.clone())
}

async fn handle_event<F, W, R>(
    envelope: PushEnvelope,
    reconcile: Arc<ReconcileProductImages<F, W>>,
    reader: Arc<R>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Rejection>
where
    F: ImageFetcherPort + 'static,
    W: CatalogImageWriterPort + 'static,
    R: CatalogImageReaderPort + 'static,
{
    let Some(message) = envelope.message else {
        return Ok(bad_request("no Pub/Sub message in request body"));
    };
    let Some(data) = message.data else {
        return Ok(bad_request("no data in Pub/Sub message"));
    };

    let decoded = match BASE64.decode(data.trim()) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("event data is not valid base64: {err}");
            return Ok(bad_request("message data is not valid base64"));
        }
    };
    let payload: EventPayload = match serde_json::from_slice(&decoded) {
        Ok(payload) => payload,
        Err(err) => {
            error!("event data is not a product notification: {err}");
            return Ok(bad_request("message data is not a product notification"));
        }
    };

    let projection = match (payload.product_projection, payload.resource) {
        (Some(projection), _) => projection,
        (None, Some(resource)) => match reader.product_projection(&resource.id).await {
            Ok(projection) => projection,
            Err(err) => {
                error!("failed to read product {}: {err}", resource.id);
                return Ok(internal_error("could not load product from catalog"));
            }
        },
        (None, None) => {
            return Ok(bad_request(
                "notification carries neither a projection nor a product reference",
            ));
        }
    };

    info!("reconciling images for product {}", projection.id);
    match reconcile.run(ProductPublished { projection }).await {
        Ok(result) => Ok(warp::reply::with_status(
            warp::reply::json(&result),
            StatusCode::OK,
        )),
        Err(err) => {
            error!("reconciliation failed: {err:#}");
            Ok(internal_error("reconciliation failed"))
        }
    }
}

fn bad_request(message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        StatusCode::BAD_REQUEST,
    )
}

fn internal_error(message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
