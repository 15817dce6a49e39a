pub mod request;
pub mod routing;
pub mod transport;

pub use request::{build_call, CallBody, FilePart, OperationRequest, OutboundCall};
pub use routing::{
    find_route, operations_for, BodyTemplate, HttpMethod, Resource, ResponseKind, Route, ROUTES,
};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};

use crate::constants::network as network_constants;
use crate::errors::DispatchError;
use crate::services::credentials::CredentialProvider;
use crate::services::logger::Logger;
use crate::utils::dispatch_errors::{unknown_operation_error, unknown_resource_error};
use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// One output record in the host tool's item format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputItem {
    pub json: Value,
}

/// Always a single-element sequence; batching over input items is the
/// host engine's concern.
pub type OperationResult = Vec<OutputItem>;

#[derive(Clone)]
pub struct Dispatcher {
    logger: Logger,
    transport: Arc<dyn HttpTransport>,
}

impl Dispatcher {
    pub fn new(logger: Logger) -> Result<Self, DispatchError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(logger, Arc::new(transport)))
    }

    pub fn with_transport(logger: Logger, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            logger: logger.child("dispatch"),
            transport,
        }
    }

    /// Convenience wrapper that pulls the API key and endpoint from a
    /// credential provider.
    pub async fn dispatch_with(
        &self,
        provider: &dyn CredentialProvider,
        resource: &str,
        operation: &str,
        parameters: Map<String, Value>,
    ) -> Result<OperationResult, DispatchError> {
        let credentials = provider.credentials()?;
        self.dispatch(&OperationRequest {
            resource: resource.to_string(),
            operation: operation.to_string(),
            parameters,
            api_endpoint: Some(credentials.api_endpoint),
            api_key: credentials.api_key,
        })
        .await
    }

    pub async fn dispatch(
        &self,
        request: &OperationRequest,
    ) -> Result<OperationResult, DispatchError> {
        let resource = Resource::parse(&request.resource).ok_or_else(|| {
            let known: Vec<&str> = Resource::ALL.iter().map(|r| r.as_str()).collect();
            unknown_resource_error(&request.resource, &known)
        })?;
        let route = find_route(resource, request.operation.trim()).ok_or_else(|| {
            unknown_operation_error(
                resource.display_name(),
                &request.operation,
                &operations_for(resource),
            )
        })?;

        let endpoint = request
            .api_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(network_constants::DEFAULT_API_ENDPOINT);

        let call = build_call(route, &request.parameters, endpoint, &request.api_key)
            .map_err(|err| err.in_context(resource.as_str(), route.operation))?;

        self.logger.debug(
            "Dispatching request",
            Some(&serde_json::json!({
                "resource": resource.as_str(),
                "operation": route.operation,
                "method": call.method.as_str(),
                "url": call.url,
            })),
        );

        let response = self
            .transport
            .execute(&call)
            .await
            .map_err(|err| {
                match err {
                    TransportError::Network(message) => DispatchError::network(format!(
                        "No response from Tess AI API: {}",
                        message
                    )),
                    TransportError::Setup(message) => DispatchError::setup(format!(
                        "Error setting up the request to Tess AI API: {}",
                        message
                    )),
                }
                .in_context(resource.as_str(), route.operation)
            })?;

        if !response.is_success() {
            return Err(self.api_error(resource, route, &response));
        }

        let json = match route.response {
            ResponseKind::Binary => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(&response.body);
                serde_json::json!({ "fileContent": encoded })
            }
            ResponseKind::Json => {
                if response.body.is_empty() {
                    Value::Null
                } else {
                    response
                        .json()
                        .unwrap_or_else(|| Value::String(response.text()))
                }
            }
        };

        Ok(vec![OutputItem { json }])
    }

    fn api_error(
        &self,
        resource: Resource,
        route: &Route,
        response: &HttpResponse,
    ) -> DispatchError {
        let body_text = response.text();
        let detail = response
            .json()
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        self.logger.warn(
            "Tess AI API error",
            Some(&serde_json::json!({
                "resource": resource.as_str(),
                "operation": route.operation,
                "status": response.status,
            })),
        );

        let message = match &detail {
            Some(detail) => format!(
                "Tess AI API error: {} - {} - {}",
                response.status, body_text, detail
            ),
            None => format!("Tess AI API error: {} - {}", response.status, body_text),
        };
        DispatchError::api(response.status, message)
            .in_context(resource.as_str(), route.operation)
    }
}
