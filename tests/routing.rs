use serde_json::{json, Map, Value};
use tess_connector::dispatcher::{
    build_call, find_route, CallBody, HttpMethod, OutboundCall, Resource, ROUTES,
};
use tess_connector::errors::{DispatchError, DispatchErrorKind};

const ENDPOINT: &str = "https://api.test.local/api/v1";
const API_KEY: &str = "secret-key";

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("params must be an object")
}

fn call(resource: Resource, operation: &str, value: Value) -> Result<OutboundCall, DispatchError> {
    let route = find_route(resource, operation).expect("route must exist");
    build_call(route, &params(value), ENDPOINT, API_KEY)
}

fn expect_call(resource: Resource, operation: &str, value: Value) -> OutboundCall {
    call(resource, operation, value).expect("call must build")
}

fn json_body(call: &OutboundCall) -> Value {
    match call.body.as_ref().expect("body expected") {
        CallBody::Json(value) => value.clone(),
        CallBody::Multipart(_) => panic!("expected JSON body, got multipart"),
    }
}

#[test]
fn every_route_produces_expected_method_and_path() {
    let full = json!({
        "agentId": "A1",
        "responseId": "R1",
        "fileIds": "F1,F2",
        "fileId": "F9",
        "webhookUrl": "https://hooks.test.local/in",
        "webhookEvents": ["AGENT_RESPONSE_CREATED"],
        "uploadFilename": "doc.txt",
        "fileContent": "aGVsbG8=",
        "webhookId": "W1",
    });
    let expected: &[(Resource, &str, &str, &str)] = &[
        (Resource::Agent, "listAgents", "GET", "/agents"),
        (Resource::Agent, "getAgent", "GET", "/agents/A1"),
        (Resource::Agent, "executeAgent", "POST", "/agents/A1/execute"),
        (
            Resource::Agent,
            "executeAgentStream",
            "POST",
            "/agents/A1/execute",
        ),
        (
            Resource::Agent,
            "executeOpenaiCompatible",
            "POST",
            "/agents/A1/openai",
        ),
        (
            Resource::Agent,
            "getAgentResponse",
            "GET",
            "/agents/A1/responses/R1",
        ),
        (
            Resource::AgentFile,
            "listAgentFiles",
            "GET",
            "/agents/A1/files",
        ),
        (
            Resource::AgentFile,
            "linkFilesToAgent",
            "POST",
            "/agents/A1/files/link",
        ),
        (
            Resource::AgentFile,
            "deleteAgentFile",
            "POST",
            "/agents/A1/files/unlink",
        ),
        (
            Resource::AgentWebhook,
            "listAgentWebhooks",
            "GET",
            "/agents/A1/webhooks",
        ),
        (
            Resource::AgentWebhook,
            "createAgentWebhook",
            "POST",
            "/agents/A1/webhooks",
        ),
        (Resource::File, "listFiles", "GET", "/files"),
        (Resource::File, "uploadFile", "POST", "/files"),
        (Resource::File, "getFile", "GET", "/files/F9"),
        (Resource::File, "deleteFile", "DELETE", "/files/F9"),
        (Resource::File, "processFile", "POST", "/files/F9/process"),
        (Resource::Webhook, "listWebhooks", "GET", "/webhooks"),
        (Resource::Webhook, "deleteWebhook", "DELETE", "/webhooks/W1"),
    ];

    assert_eq!(
        expected.len(),
        ROUTES.len(),
        "expectation table must cover the whole routing table"
    );

    for (resource, operation, method, path) in expected {
        let built = expect_call(*resource, operation, full.clone());
        assert_eq!(
            built.method.as_str(),
            *method,
            "method mismatch for {}.{}",
            resource.as_str(),
            operation
        );
        assert_eq!(
            built.url,
            format!("{}{}", ENDPOINT, path),
            "url mismatch for {}.{}",
            resource.as_str(),
            operation
        );
    }
}

#[test]
fn every_call_carries_bearer_auth_header() {
    let built = expect_call(Resource::Agent, "listAgents", json!({}));
    assert!(built
        .headers
        .iter()
        .any(|(name, value)| name == "Authorization" && value == "Bearer secret-key"));
}

#[test]
fn trailing_slash_on_endpoint_is_normalized() {
    let route = find_route(Resource::Agent, "listAgents").unwrap();
    let built = build_call(route, &Map::new(), "https://api.test.local/api/v1/", API_KEY)
        .expect("call must build");
    assert_eq!(built.url, "https://api.test.local/api/v1/agents");
}

#[test]
fn execute_agent_sends_input_data_as_body() {
    let built = expect_call(
        Resource::Agent,
        "executeAgent",
        json!({"agentId": "A1", "inputData": {"temperature": 0.5}}),
    );
    assert_eq!(json_body(&built), json!({"temperature": 0.5}));
}

#[test]
fn execute_agent_accepts_json_encoded_string_input() {
    let built = expect_call(
        Resource::Agent,
        "executeAgent",
        json!({"agentId": "A1", "inputData": "{\"q\":\"hi\"}"}),
    );
    assert_eq!(json_body(&built), json!({"q": "hi"}));
}

#[test]
fn execute_agent_defaults_to_empty_object_body() {
    let built = expect_call(Resource::Agent, "executeAgent", json!({"agentId": "A1"}));
    assert_eq!(json_body(&built), json!({}));
}

#[test]
fn openai_compatible_wraps_messages() {
    let built = expect_call(
        Resource::Agent,
        "executeOpenaiCompatible",
        json!({"agentId": "A1", "openaiMessages": [{"role": "user", "content": "hi"}]}),
    );
    assert_eq!(
        json_body(&built),
        json!({"messages": [{"role": "user", "content": "hi"}]})
    );
}

#[test]
fn file_ids_are_split_and_trimmed() {
    let built = expect_call(
        Resource::AgentFile,
        "linkFilesToAgent",
        json!({"agentId": "A1", "fileIds": "a, b ,c"}),
    );
    assert_eq!(json_body(&built), json!({"file_ids": ["a", "b", "c"]}));
}

#[test]
fn blank_file_ids_fail_validation() {
    let err = call(
        Resource::AgentFile,
        "linkFilesToAgent",
        json!({"agentId": "A1", "fileIds": " , ,"}),
    )
    .expect_err("blank id list must fail");
    assert_eq!(err.kind, DispatchErrorKind::Validation);
    assert!(err.message.contains("fileIds"), "got: {}", err.message);
}

#[test]
fn delete_agent_file_posts_unlink_with_single_id() {
    let built = expect_call(
        Resource::AgentFile,
        "deleteAgentFile",
        json!({"agentId": "A1", "fileId": "F9"}),
    );
    assert_eq!(built.method, HttpMethod::Post);
    assert_eq!(built.url, format!("{}/agents/A1/files/unlink", ENDPOINT));
    assert_eq!(json_body(&built), json!({"file_ids": ["F9"]}));
}

#[test]
fn create_agent_webhook_body_has_url_and_events() {
    let built = expect_call(
        Resource::AgentWebhook,
        "createAgentWebhook",
        json!({
            "agentId": "A1",
            "webhookUrl": "https://hooks.test.local/in",
            "webhookEvents": ["AGENT_RESPONSE_CREATED", "AGENT_RESPONSE_COMPLETED"],
        }),
    );
    assert_eq!(
        json_body(&built),
        json!({
            "url": "https://hooks.test.local/in",
            "events": ["AGENT_RESPONSE_CREATED", "AGENT_RESPONSE_COMPLETED"],
        })
    );
}

#[test]
fn binary_upload_builds_multipart_with_decoded_bytes() {
    let built = expect_call(
        Resource::File,
        "uploadFile",
        json!({
            "uploadFilename": "x.txt",
            "fileContent": "aGVsbG8=",
            "binaryData": true,
        }),
    );
    match built.body.as_ref().expect("body expected") {
        CallBody::Multipart(part) => {
            assert_eq!(part.part_name, "file");
            assert_eq!(part.filename, "x.txt");
            assert_eq!(part.bytes, b"hello");
        }
        CallBody::Json(_) => panic!("binary upload must be multipart"),
    }
}

#[test]
fn non_binary_upload_sends_json_envelope() {
    let built = expect_call(
        Resource::File,
        "uploadFile",
        json!({"uploadFilename": "x.txt", "fileContent": "aGVsbG8="}),
    );
    assert_eq!(
        json_body(&built),
        json!({"name": "x.txt", "content_b64": "aGVsbG8="})
    );
}

#[test]
fn invalid_base64_upload_fails_before_transport() {
    let err = call(
        Resource::File,
        "uploadFile",
        json!({
            "uploadFilename": "x.txt",
            "fileContent": "not base64!!!",
            "binaryData": true,
        }),
    )
    .expect_err("invalid base64 must fail");
    assert_eq!(err.kind, DispatchErrorKind::Validation);
}

#[test]
fn process_file_defaults_to_empty_instructions() {
    let built = expect_call(Resource::File, "processFile", json!({"fileId": "F9"}));
    assert_eq!(json_body(&built), json!({"instructions": ""}));
}

#[test]
fn get_file_is_marked_binary() {
    let built = expect_call(Resource::File, "getFile", json!({"fileId": "F9"}));
    assert!(built.binary_response);
    assert!(built.body.is_none());
}

#[test]
fn path_params_with_url_characters_are_rejected() {
    let err = call(
        Resource::Agent,
        "getAgent",
        json!({"agentId": "A1/../../admin"}),
    )
    .expect_err("slash in path param must fail");
    assert_eq!(err.kind, DispatchErrorKind::Validation);
}
