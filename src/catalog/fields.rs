use crate::dispatcher::routing::Resource;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    String,
    Json,
    Boolean,
    MultiOptions,
}

/// One UI field declaration. `resources`/`operations` mirror the host
/// tool's display conditions: empty lists mean "always shown".
pub struct FieldProperty {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: FieldKind,
    pub default_value: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub resources: &'static [Resource],
    pub operations: &'static [&'static str],
    pub options: &'static [&'static str],
}

pub const WEBHOOK_EVENTS: &[&str] = &[
    "AGENT_RESPONSE_CREATED",
    "AGENT_RESPONSE_UPDATED",
    "AGENT_RESPONSE_COMPLETED",
];

pub const PROPERTIES: &[FieldProperty] = &[
    FieldProperty {
        name: "agentId",
        display_name: "Agent ID",
        kind: FieldKind::String,
        default_value: "",
        description: "ID of the Tess AI Agent",
        required: true,
        resources: &[Resource::Agent, Resource::AgentFile, Resource::AgentWebhook],
        operations: &[
            "getAgent",
            "executeAgent",
            "executeAgentStream",
            "executeOpenaiCompatible",
            "getAgentResponse",
            "listAgentFiles",
            "linkFilesToAgent",
            "deleteAgentFile",
            "listAgentWebhooks",
            "createAgentWebhook",
        ],
        options: &[],
    },
    FieldProperty {
        name: "responseId",
        display_name: "Response ID",
        kind: FieldKind::String,
        default_value: "",
        description: "ID of the Agent Response",
        required: true,
        resources: &[Resource::Agent],
        operations: &["getAgentResponse"],
        options: &[],
    },
    FieldProperty {
        name: "inputData",
        display_name: "Input Data",
        kind: FieldKind::Json,
        default_value: "{}",
        description: "Input data for the Tess AI Agent in JSON format",
        required: false,
        resources: &[Resource::Agent],
        operations: &["executeAgent", "executeAgentStream"],
        options: &[],
    },
    FieldProperty {
        name: "streamOutput",
        display_name: "Stream Output",
        kind: FieldKind::Boolean,
        default_value: "true",
        description: "Whether to stream the output (accepted but not implemented)",
        required: false,
        resources: &[Resource::Agent],
        operations: &["executeAgentStream"],
        options: &[],
    },
    FieldProperty {
        name: "openaiMessages",
        display_name: "OpenAI Messages",
        kind: FieldKind::Json,
        default_value: "[]",
        description: "Messages array in OpenAI compatible format",
        required: false,
        resources: &[Resource::Agent],
        operations: &["executeOpenaiCompatible"],
        options: &[],
    },
    FieldProperty {
        name: "fileIds",
        display_name: "File IDs",
        kind: FieldKind::String,
        default_value: "",
        description: "Comma-separated IDs of files to link to the agent",
        required: true,
        resources: &[Resource::AgentFile],
        operations: &["linkFilesToAgent"],
        options: &[],
    },
    FieldProperty {
        name: "webhookUrl",
        display_name: "Webhook URL",
        kind: FieldKind::String,
        default_value: "",
        description: "URL for the Agent Webhook",
        required: true,
        resources: &[Resource::AgentWebhook],
        operations: &["createAgentWebhook"],
        options: &[],
    },
    FieldProperty {
        name: "webhookEvents",
        display_name: "Events",
        kind: FieldKind::MultiOptions,
        default_value: "AGENT_RESPONSE_CREATED",
        description: "Events to trigger the webhook",
        required: true,
        resources: &[Resource::AgentWebhook],
        operations: &["createAgentWebhook"],
        options: WEBHOOK_EVENTS,
    },
    FieldProperty {
        name: "uploadFilename",
        display_name: "Filename",
        kind: FieldKind::String,
        default_value: "",
        description: "Filename for upload",
        required: true,
        resources: &[Resource::File],
        operations: &["uploadFile"],
        options: &[],
    },
    FieldProperty {
        name: "fileContent",
        display_name: "File Content",
        kind: FieldKind::String,
        default_value: "",
        description: "Content of the file to upload (base64 encoded)",
        required: true,
        resources: &[Resource::File],
        operations: &["uploadFile"],
        options: &[],
    },
    FieldProperty {
        name: "binaryData",
        display_name: "Binary Data",
        kind: FieldKind::Boolean,
        default_value: "false",
        description: "Whether to upload as multipart/form-data instead of JSON",
        required: false,
        resources: &[Resource::File],
        operations: &["uploadFile"],
        options: &[],
    },
    FieldProperty {
        name: "fileId",
        display_name: "File ID",
        kind: FieldKind::String,
        default_value: "",
        description: "ID of the File",
        required: true,
        resources: &[Resource::File, Resource::AgentFile],
        operations: &["getFile", "deleteFile", "processFile", "deleteAgentFile"],
        options: &[],
    },
    FieldProperty {
        name: "fileInstructions",
        display_name: "File Instructions",
        kind: FieldKind::String,
        default_value: "",
        description: "Instructions for file processing",
        required: false,
        resources: &[Resource::File],
        operations: &["processFile"],
        options: &[],
    },
    FieldProperty {
        name: "webhookId",
        display_name: "Webhook ID",
        kind: FieldKind::String,
        default_value: "",
        description: "ID of the Webhook",
        required: true,
        resources: &[Resource::Webhook],
        operations: &["deleteWebhook"],
        options: &[],
    },
    FieldProperty {
        name: "apiEndpoint",
        display_name: "API Endpoint",
        kind: FieldKind::String,
        default_value: "https://api.tess.pareto.io/api/v1",
        description: "Base URL for the Tess AI API",
        required: false,
        resources: &[],
        operations: &[],
        options: &[],
    },
];

pub fn node_properties() -> &'static [FieldProperty] {
    PROPERTIES
}

pub(crate) fn property_to_value(property: &FieldProperty) -> Value {
    let mut out = serde_json::json!({
        "name": property.name,
        "displayName": property.display_name,
        "type": property.kind,
        "default": property.default_value,
        "description": property.description,
        "required": property.required,
    });
    if let Value::Object(map) = &mut out {
        if !property.resources.is_empty() {
            let resources: Vec<&str> = property.resources.iter().map(|r| r.as_str()).collect();
            let mut show = serde_json::Map::new();
            show.insert("resource".to_string(), serde_json::json!(resources));
            if !property.operations.is_empty() {
                show.insert(
                    "operation".to_string(),
                    serde_json::json!(property.operations),
                );
            }
            map.insert(
                "displayOptions".to_string(),
                serde_json::json!({ "show": show }),
            );
        }
        if !property.options.is_empty() {
            map.insert("options".to_string(), serde_json::json!(property.options));
        }
    }
    out
}
