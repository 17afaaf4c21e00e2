pub mod admin;

// 重新导出常用类型，方便外部使用
pub use admin::{
    agent::{Agent, AgentAddParams, AgentSearchParams, AgentUpdateParams},
    client::{AdminClient, ClientConfig},
    error::TransportError,
    medical::{DiagnosisApi, StartTestRequest},
    patch::Patch,
    transport::{HttpTransport, Transport},
};
