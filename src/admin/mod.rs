pub mod agent;
pub mod apis;
pub mod client;
pub mod error;
pub mod logs;
pub mod medical;
pub mod menu;
pub mod patch;
pub mod resource;
pub mod role;
pub mod transport;
pub mod types;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;

// 重新导出客户端与公共约定
pub use client::{AdminClient, ClientConfig};
pub use error::TransportError;
pub use patch::Patch;
pub use resource::{Resource, ResourceApi};
pub use transport::{ApiRequest, HttpMethod, HttpTransport, Transport};
pub use types::{
    BatchDeleteParams, CommonRecord, MutationReceipt, PageQuery, PaginatedResult, Paginated,
    RecordId, StatusType,
};
