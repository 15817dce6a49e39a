//! Declarative node description consumed by the host automation tool.
//! Everything here is static configuration; the executable logic lives in
//! `dispatcher`.

mod fields;

pub use fields::{node_properties, FieldKind, FieldProperty, PROPERTIES, WEBHOOK_EVENTS};

use crate::dispatcher::routing::Resource;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

pub struct OperationDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub struct ResourceDescriptor {
    pub resource: Resource,
    pub default_operation: &'static str,
    pub operations: &'static [OperationDescriptor],
}

pub const RESOURCES: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        resource: Resource::Agent,
        default_operation: "listAgents",
        operations: &[
            OperationDescriptor {
                name: "listAgents",
                display_name: "List Agents",
                description: "List all Tess AI Agents",
            },
            OperationDescriptor {
                name: "getAgent",
                display_name: "Get Agent",
                description: "Get details of a specific Tess AI Agent",
            },
            OperationDescriptor {
                name: "executeAgent",
                display_name: "Execute Agent",
                description: "Execute a Tess AI Agent",
            },
            OperationDescriptor {
                name: "executeAgentStream",
                display_name: "Execute Agent Stream",
                description: "Execute a Tess AI Agent and stream responses",
            },
            OperationDescriptor {
                name: "executeOpenaiCompatible",
                display_name: "Execute OpenAI Compatible",
                description: "Execute a Tess AI Agent using OpenAI compatible format",
            },
            OperationDescriptor {
                name: "getAgentResponse",
                display_name: "Get Agent Response",
                description: "Get a specific response from an Agent execution",
            },
        ],
    },
    ResourceDescriptor {
        resource: Resource::AgentFile,
        default_operation: "listAgentFiles",
        operations: &[
            OperationDescriptor {
                name: "listAgentFiles",
                display_name: "List Agent Files",
                description: "List files linked to a Tess AI Agent",
            },
            OperationDescriptor {
                name: "linkFilesToAgent",
                display_name: "Link Files to Agent",
                description: "Link existing files to a Tess AI Agent",
            },
            OperationDescriptor {
                name: "deleteAgentFile",
                display_name: "Delete Agent File",
                description: "Unlink a file from a Tess AI Agent",
            },
        ],
    },
    ResourceDescriptor {
        resource: Resource::AgentWebhook,
        default_operation: "listAgentWebhooks",
        operations: &[
            OperationDescriptor {
                name: "listAgentWebhooks",
                display_name: "List Agent Webhooks",
                description: "List webhooks for a Tess AI Agent",
            },
            OperationDescriptor {
                name: "createAgentWebhook",
                display_name: "Create Agent Webhook",
                description: "Create a new webhook for a Tess AI Agent",
            },
        ],
    },
    ResourceDescriptor {
        resource: Resource::File,
        default_operation: "listFiles",
        operations: &[
            OperationDescriptor {
                name: "listFiles",
                display_name: "List Files",
                description: "List all files in Tess AI",
            },
            OperationDescriptor {
                name: "uploadFile",
                display_name: "Upload File",
                description: "Upload a file to Tess AI",
            },
            OperationDescriptor {
                name: "getFile",
                display_name: "Get File",
                description: "Download a file from Tess AI",
            },
            OperationDescriptor {
                name: "deleteFile",
                display_name: "Delete File",
                description: "Delete a file from Tess AI",
            },
            OperationDescriptor {
                name: "processFile",
                display_name: "Process File",
                description: "Process a file in Tess AI",
            },
        ],
    },
    ResourceDescriptor {
        resource: Resource::Webhook,
        default_operation: "listWebhooks",
        operations: &[
            OperationDescriptor {
                name: "listWebhooks",
                display_name: "List Webhooks",
                description: "List all webhooks in Tess AI",
            },
            OperationDescriptor {
                name: "deleteWebhook",
                display_name: "Delete Webhook",
                description: "Delete a webhook from Tess AI",
            },
        ],
    },
];

static RESOURCE_MAP: Lazy<HashMap<Resource, &'static ResourceDescriptor>> = Lazy::new(|| {
    RESOURCES
        .iter()
        .map(|descriptor| (descriptor.resource, descriptor))
        .collect()
});

pub fn resource_descriptor(resource: Resource) -> &'static ResourceDescriptor {
    RESOURCE_MAP
        .get(&resource)
        .expect("every resource has a catalog descriptor")
}

/// Full node description as JSON, in the shape the host tool reads.
pub fn describe_node() -> Value {
    let resources: Vec<Value> = RESOURCES
        .iter()
        .map(|descriptor| {
            let operations: Vec<Value> = descriptor
                .operations
                .iter()
                .map(|op| {
                    serde_json::json!({
                        "name": op.display_name,
                        "value": op.name,
                        "description": op.description,
                    })
                })
                .collect();
            serde_json::json!({
                "name": descriptor.resource.display_name(),
                "value": descriptor.resource.as_str(),
                "default": descriptor.default_operation,
                "operations": operations,
            })
        })
        .collect();

    let properties: Vec<Value> = PROPERTIES.iter().map(fields::property_to_value).collect();

    serde_json::json!({
        "displayName": "Tess AI",
        "name": "tessAi",
        "version": 1,
        "description": "Integrate with the Tess AI API",
        "credentials": [{ "name": "tessAiApi", "required": true }],
        "resources": resources,
        "properties": properties,
    })
}
