use bmad_protocol::*;
use serde_json::json;

#[test]
fn test_tools_call_request_deserialization() {
    let line = r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"execute_bmad_task","arguments":{"agent":"bob","task":"Review","input":"src/"}}}"#;

    let request: JsonRpcRequest = serde_json::from_str(line).expect("Failed to parse request");

    assert_eq!(request.jsonrpc, Some(json!("2.0")));
    assert_eq!(request.id, json!(7));
    assert_eq!(request.method, Method::ToolsCall);

    let params: CallToolParams =
        serde_json::from_value(request.params.expect("params")).expect("Failed to parse params");
    assert_eq!(params.name, "execute_bmad_task");

    let args: ExecuteTaskArgs = serde_json::from_value(params.arguments)
        .expect("Failed to parse arguments");
    assert_eq!(args.agent, "bob");
    assert_eq!(args.task, "Review");
    assert_eq!(args.input, "src/");
}

#[test]
fn test_string_and_null_ids_survive_round_trip() {
    for id in [json!("req-1"), json!(null), json!(42), json!(1.5)] {
        let response = JsonRpcResponse::success(id.clone(), json!({"tools": []}));
        let line = serde_json::to_string(&response).expect("Failed to serialize response");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("Invalid JSON line");
        assert_eq!(parsed["id"], id);
        assert!(parsed.get("error").is_none());
    }
}

#[test]
fn test_tool_descriptor_uses_camel_case_input_schema() {
    let descriptor = ToolDescriptor {
        name: "get_bmad_knowledge".to_string(),
        description: "Access knowledge".to_string(),
        input_schema: InputSchema::empty()
            .with_required("knowledge_type", PropertySchema::string("Type of knowledge")),
    };

    let value = serde_json::to_value(&descriptor).expect("Failed to serialize descriptor");

    assert_eq!(
        value,
        json!({
            "name": "get_bmad_knowledge",
            "description": "Access knowledge",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "knowledge_type": {"type": "string", "description": "Type of knowledge"}
                },
                "required": ["knowledge_type"]
            }
        })
    );
}

#[test]
fn test_call_tool_result_serialization() {
    let result = CallToolResult::text("{\"ok\": true}");
    let value = serde_json::to_value(&result).expect("Failed to serialize result");

    assert_eq!(
        value,
        json!({"content": [{"type": "text", "text": "{\"ok\": true}"}]})
    );
}

#[test]
fn test_task_acknowledgement_serialization() {
    let ack = TaskAcknowledgement {
        agent: "Bob".to_string(),
        task: "Review".to_string(),
        task_file: "review.md".to_string(),
        input: json!("src/"),
        status: TaskStatus::Queued,
        message: "queued".to_string(),
        next_steps: vec!["Review task requirements".to_string()],
    };

    let value = serde_json::to_value(&ack).expect("Failed to serialize acknowledgement");

    assert_eq!(value["status"], "queued");
    assert_eq!(value["task_file"], "review.md");
    assert_eq!(value["next_steps"][0], "Review task requirements");
}

#[test]
fn test_agent_record_serialization() {
    let agent = AgentRecord {
        id: "alice_smith".to_string(),
        title: "Analyst".to_string(),
        name: "Alice Smith".to_string(),
        customize: String::new(),
        description: "D".to_string(),
        persona: "P".to_string(),
        tasks: vec![TaskRef::new("Write Stories", "stories.md")],
    };

    let json = serde_json::to_string(&agent).expect("Failed to serialize AgentRecord");
    let deserialized: AgentRecord =
        serde_json::from_str(&json).expect("Failed to deserialize AgentRecord");

    assert_eq!(deserialized, agent);
    assert_eq!(deserialized.customize, "");
}
