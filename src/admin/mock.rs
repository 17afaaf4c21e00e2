//! 测试用传输替身
//!
//! - [`MockTransport`]：按顺序回放预置响应，并记录收到的请求
//! - [`FakeBackend`]：内存版后端，覆盖 Agent 资源和诊断测试接口，用于验证调用约定的行为

use crate::admin::error::TransportError;
use crate::admin::transport::{ApiRequest, HttpMethod, Transport};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// 单测日志：只保留本 crate 的 debug
pub fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::EnvFilter;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .with_test_writer();

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new("info,fastsoy_sdk_rust=debug"))
            .with(fmt_layer)
            .try_init();
    });
}

/// 回放预置响应的传输
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, data: Value) {
        self.responses.lock().unwrap().push_back(Ok(data));
    }

    pub fn push_err(&self, err: TransportError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, req: ApiRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("没有预置响应".to_string())))
    }
}

const AGENTS: &str = "/system-manage/agents";
const DIAGNOSIS: &str = "/medical/diagnosis";

#[derive(Default)]
struct BackendState {
    next_id: i64,
    clock: i64,
    agents: BTreeMap<i64, Map<String, Value>>,
    diseases: BTreeMap<i64, (String, Option<String>)>,
    executions: HashMap<String, i64>,
}

impl BackendState {
    fn tick(&mut self) -> i64 {
        self.clock += 1_000;
        self.clock
    }
}

/// 内存版后端
pub struct FakeBackend {
    state: Mutex<BackendState>,
    calls: AtomicUsize,
}

fn not_found(what: &str) -> TransportError {
    TransportError::Status {
        status: 404,
        message: format!("{}不存在", what),
    }
}

fn body_object(req: &ApiRequest) -> Map<String, Value> {
    req.data
        .as_ref()
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    pub fn with_next_id(next_id: i64) -> Self {
        Self {
            state: Mutex::new(BackendState {
                next_id,
                clock: 1_730_000_000_000,
                ..Default::default()
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn add_disease(&self, id: i64, name: &str) {
        self.state
            .lock()
            .unwrap()
            .diseases
            .insert(id, (name.to_string(), None));
    }

    /// 收到的请求总数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn handle(&self, req: &ApiRequest) -> Result<Value, TransportError> {
        let mut state = self.state.lock().unwrap();
        let path = req.url.as_str();

        if let Some(rest) = path.strip_prefix(AGENTS) {
            return match (req.method, rest) {
                (HttpMethod::Post, "/all/") => Ok(list_agents(&state, &body_object(req))),
                (HttpMethod::Post, "") => create_agent(&mut state, body_object(req)),
                (HttpMethod::Delete, "") => batch_delete_agents(&mut state, &body_object(req)),
                (method, rest) => {
                    let id: i64 = rest
                        .trim_start_matches('/')
                        .parse()
                        .map_err(|_| not_found("接口"))?;
                    match method {
                        HttpMethod::Get => state
                            .agents
                            .get(&id)
                            .map(|a| Value::Object(a.clone()))
                            .ok_or_else(|| not_found("Agent")),
                        HttpMethod::Patch => {
                            let now = state.tick();
                            let agent = state.agents.get_mut(&id).ok_or_else(|| not_found("Agent"))?;
                            for (key, value) in body_object(req) {
                                if key != "id" {
                                    agent.insert(key, value);
                                }
                            }
                            agent.insert("updateTime".to_string(), json!(now));
                            Ok(json!({"updated_id": id}))
                        }
                        HttpMethod::Delete => state
                            .agents
                            .remove(&id)
                            .map(|_| json!({"deleted_id": id}))
                            .ok_or_else(|| not_found("Agent")),
                        _ => Err(not_found("接口")),
                    }
                }
            };
        }

        if let Some(rest) = path.strip_prefix(DIAGNOSIS) {
            return match (req.method, rest) {
                (HttpMethod::Post, "/start") => {
                    let body = body_object(req);
                    let disease_id = body.get("disease_id").and_then(Value::as_i64).unwrap_or_default();
                    // 后端在启动流程里把疾病不存在的 404 包成了 500
                    let name = state
                        .diseases
                        .get(&disease_id)
                        .map(|(name, _)| name.clone())
                        .ok_or_else(|| TransportError::Status {
                            status: 500,
                            message: "启动测试失败: 404: 疾病不存在".to_string(),
                        })?;
                    let execution_id = format!("exec-{}", state.executions.len() + 1);
                    state.executions.insert(execution_id.clone(), disease_id);
                    Ok(json!({
                        "execution_id": execution_id,
                        "disease_name": name,
                        "status": "running"
                    }))
                }
                (HttpMethod::Get, "/diseases") => Ok(Value::Array(
                    state
                        .diseases
                        .iter()
                        .map(|(id, (name, description))| {
                            json!({"id": id, "name": name, "description": description, "symptoms_count": 0})
                        })
                        .collect(),
                )),
                (HttpMethod::Patch, rest) if rest.starts_with("/diseases/") => {
                    let id: i64 = rest["/diseases/".len()..].parse().map_err(|_| not_found("疾病"))?;
                    let description = body_object(req)
                        .get("description")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    let disease = state.diseases.get_mut(&id).ok_or_else(|| not_found("疾病"))?;
                    disease.1 = description;
                    Ok(json!({"id": id}))
                }
                (HttpMethod::Get, rest) if rest.starts_with("/execution/") => {
                    let execution_id = &rest["/execution/".len()..];
                    let disease_id = *state
                        .executions
                        .get(execution_id)
                        .ok_or_else(|| not_found("执行记录"))?;
                    let name = state
                        .diseases
                        .get(&disease_id)
                        .map(|(name, _)| name.clone())
                        .unwrap_or_default();
                    Ok(json!({
                        "execution_id": execution_id,
                        "disease_id": disease_id,
                        "disease_name": name,
                        "status": "running",
                        "start_time": "2025-11-06 10:00:00",
                        "end_time": null,
                        "steps": [],
                        "conversations": [],
                        "result": null
                    }))
                }
                _ => Err(not_found("接口")),
            };
        }

        Err(not_found("接口"))
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn request(&self, req: ApiRequest) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.handle(&req)
    }
}

fn list_agents(state: &BackendState, body: &Map<String, Value>) -> Value {
    let name = body.get("name").and_then(Value::as_str);
    let agent_type = body.get("agentType");
    let status_type = body.get("statusType");
    let current = body.get("current").and_then(Value::as_u64).unwrap_or(1).max(1);
    let size = body.get("size").and_then(Value::as_u64).unwrap_or(10).max(1);

    let matched: Vec<&Map<String, Value>> = state
        .agents
        .values()
        .rev()
        .filter(|a| {
            name.map_or(true, |n| {
                a.get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|s| s.contains(n))
            })
        })
        .filter(|a| agent_type.map_or(true, |t| a.get("agentType") == Some(t)))
        .filter(|a| status_type.map_or(true, |s| a.get("statusType") == Some(s)))
        .collect();

    let records: Vec<Value> = matched
        .iter()
        .skip(((current - 1) * size) as usize)
        .take(size as usize)
        .map(|a| Value::Object((*a).clone()))
        .collect();

    json!({"records": records, "total": matched.len(), "current": current, "size": size})
}

fn create_agent(state: &mut BackendState, mut body: Map<String, Value>) -> Result<Value, TransportError> {
    let name = body.get("name").cloned().unwrap_or(Value::Null);
    if state.agents.values().any(|a| a.get("name") == Some(&name)) {
        return Err(TransportError::Business {
            code: "4090".to_string(),
            message: "Agent名称已存在".to_string(),
        });
    }
    let id = state.next_id;
    state.next_id += 1;
    let now = state.tick();

    body.insert("id".to_string(), json!(id));
    body.insert("createBy".to_string(), json!("admin"));
    body.insert("createTime".to_string(), json!(now));
    body.insert("updateTime".to_string(), json!(now));
    body.entry("version").or_insert_with(|| json!("1.0.0"));
    body.entry("statusType").or_insert_with(|| json!("1"));
    state.agents.insert(id, body);
    Ok(json!({"created_id": id}))
}

fn batch_delete_agents(state: &mut BackendState, body: &Map<String, Value>) -> Result<Value, TransportError> {
    let ids: Vec<i64> = body
        .get("ids")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(|v| v.as_str().and_then(|s| s.parse().ok()))
                .collect()
        })
        .unwrap_or_default();
    if ids.iter().any(|id| !state.agents.contains_key(id)) {
        return Err(not_found("Agent"));
    }
    let mut deleted = Vec::new();
    for id in ids {
        if state.agents.remove(&id).is_some() {
            deleted.push(id);
        }
    }
    Ok(json!({"deleted_ids": deleted}))
}
