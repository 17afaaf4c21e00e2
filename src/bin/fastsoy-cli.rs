//! FastSoyAdmin 管理后台 CLI
//!
//! 非交互式命令行，用于联调管理接口和诊断测试。结果以 JSON 打印到 stdout，日志输出到 stderr。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fastsoy_sdk_rust::admin::agent::{AgentAddParams, AgentSearchParams, AgentType, AgentUpdateParams};
use fastsoy_sdk_rust::admin::medical::{StartTestRequest, UpdateDiseaseRequest};
use fastsoy_sdk_rust::admin::menu::MenuArena;
use fastsoy_sdk_rust::admin::types::{BatchDeleteParams, PageQuery, RecordId};
use fastsoy_sdk_rust::{AdminClient, ClientConfig, Patch};
use futures_util::future::join_all;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

/// FastSoyAdmin CLI 客户端
#[derive(Parser, Debug)]
#[command(name = "fastsoy-cli")]
#[command(about = "FastSoyAdmin 管理后台 CLI - 用于调试管理接口和诊断测试", long_about = None)]
struct Args {
    /// API 基础地址
    #[arg(long, env = "FASTSOY_API_BASE_URL", default_value = "http://localhost:9999/api/v1")]
    base_url: String,

    /// 认证 token（Bearer）
    #[arg(long, env = "FASTSOY_TOKEN")]
    token: Option<String>,

    /// 请求超时（秒）
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// 启动诊断测试的超时（秒），后端跑完整场测试才返回
    #[arg(long, default_value = "600")]
    run_timeout: u64,

    /// 日志级别（默认: info,fastsoy_sdk_rust=debug）
    #[arg(long, default_value = "info,fastsoy_sdk_rust=debug")]
    log_level: String,

    /// 额外把日志追加写入该文件
    #[arg(long)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Agent 管理
    #[command(subcommand)]
    Agents(AgentCommand),
    /// 诊断测试
    #[command(subcommand)]
    Diagnosis(DiagnosisCommand),
    /// 菜单
    #[command(subcommand)]
    Menus(MenuCommand),
}

#[derive(Subcommand, Debug)]
enum AgentCommand {
    /// 分页查询
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_enum)]
        agent_type: Option<CliAgentType>,
        #[arg(long)]
        current: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// 查询详情，多个 ID 并发请求
    Detail {
        #[arg(required = true)]
        ids: Vec<RecordId>,
    },
    /// 新建
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        agent_type: CliAgentType,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        version: Option<String>,
        /// 配置 JSON
        #[arg(long)]
        config: Option<String>,
    },
    /// 局部更新，未给出的字段保持不变
    Update {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// 把描述清空为 null
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
        #[arg(long)]
        version: Option<String>,
    },
    /// 删除单条
    Delete { id: RecordId },
    /// 批量删除
    BatchDelete {
        #[arg(required = true)]
        ids: Vec<RecordId>,
    },
}

#[derive(Subcommand, Debug)]
enum DiagnosisCommand {
    /// 疾病列表
    Diseases,
    /// 启动测试；加 --wait 时轮询到结束
    Start {
        disease_id: RecordId,
        #[arg(long)]
        max_rounds: Option<u32>,
        #[arg(long)]
        wait: bool,
        /// 轮询间隔（秒）
        #[arg(long, default_value = "2")]
        interval: u64,
    },
    /// 查询执行详情
    Execution { execution_id: String },
    /// 更新疾病描述
    UpdateDisease {
        disease_id: RecordId,
        description: String,
    },
}

#[derive(Subcommand, Debug)]
enum MenuCommand {
    /// 授权勾选树
    Tree,
    /// 全量菜单的层级概览
    Outline,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAgentType {
    Business,
    Function,
}

impl From<CliAgentType> for AgentType {
    fn from(value: CliAgentType) -> Self {
        match value {
            CliAgentType::Business => AgentType::Business,
            CliAgentType::Function => AgentType::Function,
        }
    }
}

/// 初始化日志：stderr 总是输出，指定了文件时同时追加写入文件
fn init_logger(log_level: &str, log_file: Option<&str>) -> Result<()> {
    use std::fs::OpenOptions;
    use std::io;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // 优先使用环境变量 RUST_LOG
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(true);

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("无法创建日志文件 {}", path))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(path) = log_file {
        info!("[CLI] 📝 日志同时写入文件: {}", path);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_agents(client: &AdminClient, command: AgentCommand) -> Result<()> {
    let api = client.agents();
    match command {
        AgentCommand::List {
            name,
            agent_type,
            current,
            size,
        } => {
            let params = AgentSearchParams {
                name,
                agent_type: agent_type.map(Into::into),
                page: PageQuery { current, size },
                ..Default::default()
            };
            let page = api.list(Some(params)).await?;
            info!(
                "[CLI] 📋 第 {} 页，共 {} 条，本页 {} 条",
                page.current,
                page.total,
                page.records.len()
            );
            print_json(&page)
        }
        AgentCommand::Detail { ids } => {
            let results = join_all(ids.iter().map(|id| api.detail(*id))).await;
            let mut agents = Vec::new();
            for (id, result) in ids.iter().zip(results) {
                match result {
                    Ok(agent) => agents.push(agent),
                    Err(e) => warn!("[CLI] ⚠️ 获取 Agent {} 失败: {}", id, e),
                }
            }
            print_json(&agents)
        }
        AgentCommand::Create {
            name,
            agent_type,
            description,
            version,
            config,
        } => {
            let config = config
                .map(|raw| serde_json::from_str(&raw))
                .transpose()
                .context("config 不是合法的 JSON")?;
            let params = AgentAddParams {
                name,
                agent_type: agent_type.into(),
                description,
                version,
                config,
                status_type: None,
            };
            print_json(&api.create(&params).await?)
        }
        AgentCommand::Update {
            id,
            name,
            description,
            clear_description,
            version,
        } => {
            let description = if clear_description {
                Patch::Null
            } else {
                description.map_or(Patch::Absent, Patch::Value)
            };
            let params = AgentUpdateParams {
                name: name.map_or(Patch::Absent, Patch::Value),
                description,
                version: version.map_or(Patch::Absent, Patch::Value),
                ..Default::default()
            };
            print_json(&api.update(id, &params).await?)
        }
        AgentCommand::Delete { id } => print_json(&api.delete(id).await?),
        AgentCommand::BatchDelete { ids } => {
            print_json(&api.batch_delete(&BatchDeleteParams::from_ids(ids)).await?)
        }
    }
}

async fn run_diagnosis(client: &AdminClient, command: DiagnosisCommand) -> Result<()> {
    let api = client.diagnosis();
    match command {
        DiagnosisCommand::Diseases => print_json(&api.get_diseases().await?),
        DiagnosisCommand::Start {
            disease_id,
            max_rounds,
            wait,
            interval,
        } => {
            let mut request = StartTestRequest::new(disease_id);
            if let Some(rounds) = max_rounds {
                request = request.with_max_rounds(rounds);
            }
            let handle = api.start_test(&request).await?;
            if !wait {
                return print_json(&handle);
            }

            let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
            loop {
                ticker.tick().await;
                let detail = api.get_execution_detail(&handle.execution_id).await?;
                info!(
                    "[CLI] 🔄 执行 {} 状态: {:?}，已进行 {} 轮",
                    detail.execution_id,
                    detail.status,
                    detail.rounds()
                );
                if detail.is_finished() {
                    break print_json(&detail);
                }
            }
        }
        DiagnosisCommand::Execution { execution_id } => {
            print_json(&api.get_execution_detail(&execution_id).await?)
        }
        DiagnosisCommand::UpdateDisease {
            disease_id,
            description,
        } => print_json(
            &api.update_disease(disease_id, &UpdateDiseaseRequest { description })
                .await?,
        ),
    }
}

async fn run_menus(client: &AdminClient, command: MenuCommand) -> Result<()> {
    let api = client.menus();
    match command {
        MenuCommand::Tree => print_json(&api.tree().await?),
        MenuCommand::Outline => {
            let arena = api.arena().await?;
            print_outline(&arena);
            Ok(())
        }
    }
}

fn print_outline(arena: &MenuArena) {
    let mut stack: Vec<(RecordId, usize)> = arena.roots().iter().rev().map(|id| (*id, 0)).collect();
    while let Some((id, depth)) = stack.pop() {
        if let Some(node) = arena.get(id) {
            println!(
                "{}{} [{}] {}",
                "  ".repeat(depth),
                node.menu.menu_name,
                id,
                node.menu.route_path
            );
        }
        stack.extend(arena.children_of(id).iter().rev().map(|child| (*child, depth + 1)));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_level, args.log_file.as_deref())?;

    let mut config = ClientConfig::new(args.base_url, args.token);
    config.timeout = Duration::from_secs(args.timeout);
    config.run_timeout = Duration::from_secs(args.run_timeout);
    let client = AdminClient::new(config)?;

    let result = match args.command {
        Command::Agents(command) => run_agents(&client, command).await,
        Command::Diagnosis(command) => run_diagnosis(&client, command).await,
        Command::Menus(command) => run_menus(&client, command).await,
    };
    if let Err(e) = &result {
        error!("[CLI] ❌ 命令执行失败: {:#}", e);
    }
    result
}
