//! 诊断测试 HTTP API
//!
//! | 操作 | 方法 | 路径 |
//! |---|---|---|
//! | start_test | POST | `/medical/diagnosis/start` |
//! | get_execution_detail | GET | `/medical/diagnosis/execution/{execution_id}` |
//! | get_diseases | GET | `/medical/diagnosis/diseases` |
//! | update_disease | PATCH | `/medical/diagnosis/diseases/{disease_id}` |

use crate::admin::client::DEFAULT_RUN_TIMEOUT;
use crate::admin::error::TransportError;
use crate::admin::medical::models::{Disease, ExecutionDetail, TestExecutionHandle};
use crate::admin::medical::types::{StartTestRequest, UpdateDiseaseRequest};
use crate::admin::resource::decode_data;
use crate::admin::transport::{ApiRequest, Transport};
use crate::admin::types::{MutationReceipt, RecordId};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const BASE_PATH: &str = "/medical/diagnosis";

/// 诊断测试访问器
#[derive(Clone)]
pub struct DiagnosisApi {
    transport: Arc<dyn Transport>,
    run_timeout: Duration,
}

impl DiagnosisApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            run_timeout: DEFAULT_RUN_TIMEOUT,
        }
    }

    /// 启动请求的超时，需覆盖整场测试的耗时
    pub fn with_run_timeout(mut self, run_timeout: Duration) -> Self {
        self.run_timeout = run_timeout;
        self
    }

    async fn call<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, TransportError> {
        debug!("[DiagnosisAPI]   {} {}", req.method, req.url);
        let data = self.transport.request(req).await?;
        decode_data(data)
    }

    /// 启动一次诊断测试，返回用于后续轮询的执行句柄
    pub async fn start_test(&self, request: &StartTestRequest) -> Result<TestExecutionHandle, TransportError> {
        info!(
            "[DiagnosisAPI] 📡 启动诊断测试，疾病ID: {}, 最大轮数: {:?}",
            request.disease_id, request.max_rounds
        );
        let req = ApiRequest::post(format!("{}/start", BASE_PATH))
            .with_json(request)?
            .with_timeout(self.run_timeout);
        let handle: TestExecutionHandle = self.call(req).await?;
        info!(
            "[DiagnosisAPI] ✅ 测试已启动，执行ID: {}, 状态: {:?}",
            handle.execution_id, handle.status
        );
        Ok(handle)
    }

    /// 读取执行的当前状态或终态
    pub async fn get_execution_detail(&self, execution_id: &str) -> Result<ExecutionDetail, TransportError> {
        info!("[DiagnosisAPI] 📡 请求执行详情，执行ID: {}", execution_id);
        self.call(ApiRequest::get(format!("{}/execution/{}", BASE_PATH, execution_id)))
            .await
    }

    /// 可选疾病列表
    pub async fn get_diseases(&self) -> Result<Vec<Disease>, TransportError> {
        info!("[DiagnosisAPI] 📡 请求疾病列表");
        let diseases: Option<Vec<Disease>> = self
            .call(ApiRequest::get(format!("{}/diseases", BASE_PATH)))
            .await?;
        Ok(diseases.unwrap_or_default())
    }

    /// 只更新疾病描述
    pub async fn update_disease(
        &self,
        disease_id: RecordId,
        request: &UpdateDiseaseRequest,
    ) -> Result<MutationReceipt, TransportError> {
        info!("[DiagnosisAPI] 📡 更新疾病描述，疾病ID: {}", disease_id);
        let req = ApiRequest::patch(format!("{}/diseases/{}", BASE_PATH, disease_id)).with_json(request)?;
        debug!("[DiagnosisAPI]   {} {}", req.method, req.url);
        let data = self.transport.request(req).await?;
        MutationReceipt::from_data(data)
    }
}
