use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Agent,
    AgentFile,
    AgentWebhook,
    File,
    Webhook,
}

impl Resource {
    pub const ALL: &'static [Resource] = &[
        Resource::Agent,
        Resource::AgentFile,
        Resource::AgentWebhook,
        Resource::File,
        Resource::Webhook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Agent => "agent",
            Resource::AgentFile => "agentFile",
            Resource::AgentWebhook => "agentWebhook",
            Resource::File => "file",
            Resource::Webhook => "webhook",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Resource::Agent => "Agent",
            Resource::AgentFile => "Agent File",
            Resource::AgentWebhook => "Agent Webhook",
            Resource::File => "File",
            Resource::Webhook => "Webhook",
        }
    }

    pub fn parse(raw: &str) -> Option<Resource> {
        Resource::ALL
            .iter()
            .copied()
            .find(|resource| resource.as_str() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// How the request body is assembled from the parameter bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTemplate {
    None,
    /// `inputData` object sent as-is.
    ExecuteInput,
    /// `{"messages": openaiMessages}`.
    OpenaiMessages,
    /// `{"file_ids": [..]}` from the comma-separated `fileIds`.
    LinkFiles,
    /// `{"file_ids": [fileId]}` for the unlink endpoint.
    UnlinkFile,
    /// `{"url": webhookUrl, "events": webhookEvents}`.
    CreateWebhook,
    /// Multipart `file` part when `binaryData`, JSON envelope otherwise.
    Upload,
    /// `{"instructions": fileInstructions}`.
    ProcessInstructions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Json,
    /// Raw bytes, re-encoded as base64 into `{"fileContent": ..}`.
    Binary,
}

pub struct Route {
    pub resource: Resource,
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the base endpoint; `{name}` placeholders
    /// are filled from the parameter bag.
    pub path: &'static str,
    pub required: &'static [&'static str],
    pub body: BodyTemplate,
    pub response: ResponseKind,
}

pub const ROUTES: &[Route] = &[
    Route {
        resource: Resource::Agent,
        operation: "listAgents",
        method: HttpMethod::Get,
        path: "/agents",
        required: &[],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::Agent,
        operation: "getAgent",
        method: HttpMethod::Get,
        path: "/agents/{agentId}",
        required: &["agentId"],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::Agent,
        operation: "executeAgent",
        method: HttpMethod::Post,
        path: "/agents/{agentId}/execute",
        required: &["agentId"],
        body: BodyTemplate::ExecuteInput,
        response: ResponseKind::Json,
    },
    // Streaming is not implemented upstream; this behaves exactly like
    // executeAgent and ignores streamOutput.
    Route {
        resource: Resource::Agent,
        operation: "executeAgentStream",
        method: HttpMethod::Post,
        path: "/agents/{agentId}/execute",
        required: &["agentId"],
        body: BodyTemplate::ExecuteInput,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::Agent,
        operation: "executeOpenaiCompatible",
        method: HttpMethod::Post,
        path: "/agents/{agentId}/openai",
        required: &["agentId"],
        body: BodyTemplate::OpenaiMessages,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::Agent,
        operation: "getAgentResponse",
        method: HttpMethod::Get,
        path: "/agents/{agentId}/responses/{responseId}",
        required: &["agentId", "responseId"],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::AgentFile,
        operation: "listAgentFiles",
        method: HttpMethod::Get,
        path: "/agents/{agentId}/files",
        required: &["agentId"],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::AgentFile,
        operation: "linkFilesToAgent",
        method: HttpMethod::Post,
        path: "/agents/{agentId}/files/link",
        required: &["agentId", "fileIds"],
        body: BodyTemplate::LinkFiles,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::AgentFile,
        operation: "deleteAgentFile",
        method: HttpMethod::Post,
        path: "/agents/{agentId}/files/unlink",
        required: &["agentId", "fileId"],
        body: BodyTemplate::UnlinkFile,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::AgentWebhook,
        operation: "listAgentWebhooks",
        method: HttpMethod::Get,
        path: "/agents/{agentId}/webhooks",
        required: &["agentId"],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::AgentWebhook,
        operation: "createAgentWebhook",
        method: HttpMethod::Post,
        path: "/agents/{agentId}/webhooks",
        required: &["agentId", "webhookUrl", "webhookEvents"],
        body: BodyTemplate::CreateWebhook,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::File,
        operation: "listFiles",
        method: HttpMethod::Get,
        path: "/files",
        required: &[],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::File,
        operation: "uploadFile",
        method: HttpMethod::Post,
        path: "/files",
        required: &["uploadFilename", "fileContent"],
        body: BodyTemplate::Upload,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::File,
        operation: "getFile",
        method: HttpMethod::Get,
        path: "/files/{fileId}",
        required: &["fileId"],
        body: BodyTemplate::None,
        response: ResponseKind::Binary,
    },
    Route {
        resource: Resource::File,
        operation: "deleteFile",
        method: HttpMethod::Delete,
        path: "/files/{fileId}",
        required: &["fileId"],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::File,
        operation: "processFile",
        method: HttpMethod::Post,
        path: "/files/{fileId}/process",
        required: &["fileId"],
        body: BodyTemplate::ProcessInstructions,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::Webhook,
        operation: "listWebhooks",
        method: HttpMethod::Get,
        path: "/webhooks",
        required: &[],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
    Route {
        resource: Resource::Webhook,
        operation: "deleteWebhook",
        method: HttpMethod::Delete,
        path: "/webhooks/{webhookId}",
        required: &["webhookId"],
        body: BodyTemplate::None,
        response: ResponseKind::Json,
    },
];

pub fn find_route(resource: Resource, operation: &str) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|route| route.resource == resource && route.operation == operation)
}

pub fn operations_for(resource: Resource) -> Vec<&'static str> {
    ROUTES
        .iter()
        .filter(|route| route.resource == resource)
        .map(|route| route.operation)
        .collect()
}
