use crate::constants::{protocols, upload};
use crate::dispatcher::routing::{BodyTemplate, HttpMethod, ResponseKind, Route};
use crate::errors::DispatchError;
use crate::services::validation::Validation;
use serde_json::{Map, Value};

/// One connector invocation as handed over by the host tool.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    pub resource: String,
    pub operation: String,
    pub parameters: Map<String, Value>,
    /// Base URL override; the default Tess endpoint is used when absent.
    pub api_endpoint: Option<String>,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub part_name: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallBody {
    Json(Value),
    Multipart(FilePart),
}

/// Fully assembled outbound request, derived deterministically from an
/// `OperationRequest` before anything touches the network.
#[derive(Debug, Clone)]
pub struct OutboundCall {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<CallBody>,
    pub binary_response: bool,
}

pub fn build_call(
    route: &Route,
    params: &Map<String, Value>,
    endpoint: &str,
    api_key: &str,
) -> Result<OutboundCall, DispatchError> {
    let validation = Validation::new();

    for name in route.required {
        match *name {
            "fileIds" => {
                validation.ensure_id_list(params.get(*name), name)?;
            }
            "webhookEvents" => {
                validation.ensure_string_array(params.get(*name), name)?;
            }
            _ => {
                validation.ensure_string(params.get(*name), name)?;
            }
        }
    }

    let url = build_url(route.path, params, endpoint, &validation)?;
    let body = build_body(route.body, params, &validation)?;

    let mut headers = vec![(
        "Authorization".to_string(),
        format!("Bearer {}", api_key),
    )];
    if matches!(body, Some(CallBody::Json(_))) {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }

    Ok(OutboundCall {
        method: route.method,
        url,
        headers,
        body,
        binary_response: route.response == ResponseKind::Binary,
    })
}

fn build_url(
    template: &str,
    params: &Map<String, Value>,
    endpoint: &str,
    validation: &Validation,
) -> Result<String, DispatchError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| DispatchError::setup("Unbalanced path template placeholder"))?;
        path.push_str(&rest[..start]);
        let name = &rest[start + 1..end];
        let value = validation.ensure_string(params.get(name), name)?;
        if value.contains(&['/', '?', '#', '%'][..]) || value.contains(char::is_whitespace) {
            return Err(DispatchError::validation(format!(
                "{} contains characters that are not allowed in a URL path",
                name
            )));
        }
        path.push_str(&value);
        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    let raw = format!("{}{}", endpoint.trim_end_matches('/'), path);
    let parsed = url::Url::parse(&raw)
        .map_err(|_| DispatchError::setup(format!("Invalid request URL: {}", raw)))?;
    if !protocols::ALLOWED_HTTP.contains(&parsed.scheme()) {
        return Err(DispatchError::setup(
            "Only http/https endpoints are supported",
        ));
    }
    Ok(raw)
}

fn build_body(
    template: BodyTemplate,
    params: &Map<String, Value>,
    validation: &Validation,
) -> Result<Option<CallBody>, DispatchError> {
    let body = match template {
        BodyTemplate::None => return Ok(None),
        BodyTemplate::ExecuteInput => {
            let input = validation.ensure_json_value(
                params.get("inputData"),
                "inputData",
                Value::Object(Default::default()),
            )?;
            CallBody::Json(input)
        }
        BodyTemplate::OpenaiMessages => {
            let messages = validation.ensure_json_value(
                params.get("openaiMessages"),
                "openaiMessages",
                Value::Array(Vec::new()),
            )?;
            CallBody::Json(serde_json::json!({ "messages": messages }))
        }
        BodyTemplate::LinkFiles => {
            let file_ids = validation.ensure_id_list(params.get("fileIds"), "fileIds")?;
            CallBody::Json(serde_json::json!({ "file_ids": file_ids }))
        }
        BodyTemplate::UnlinkFile => {
            let file_id = validation.ensure_string(params.get("fileId"), "fileId")?;
            CallBody::Json(serde_json::json!({ "file_ids": [file_id] }))
        }
        BodyTemplate::CreateWebhook => {
            let url = validation.ensure_string(params.get("webhookUrl"), "webhookUrl")?;
            let events =
                validation.ensure_string_array(params.get("webhookEvents"), "webhookEvents")?;
            CallBody::Json(serde_json::json!({ "url": url, "events": events }))
        }
        BodyTemplate::Upload => {
            let filename =
                validation.ensure_string(params.get("uploadFilename"), "uploadFilename")?;
            if validation.ensure_bool(params.get("binaryData"), false) {
                let bytes = validation.ensure_base64(params.get("fileContent"), "fileContent")?;
                CallBody::Multipart(FilePart {
                    part_name: upload::MULTIPART_PART_NAME.to_string(),
                    filename,
                    bytes,
                })
            } else {
                let content =
                    validation.ensure_string(params.get("fileContent"), "fileContent")?;
                CallBody::Json(serde_json::json!({ "name": filename, "content_b64": content }))
            }
        }
        BodyTemplate::ProcessInstructions => {
            let instructions = validation
                .ensure_optional_string(params.get("fileInstructions"), "fileInstructions")?
                .unwrap_or_default();
            CallBody::Json(serde_json::json!({ "instructions": instructions }))
        }
    };
    Ok(Some(body))
}
