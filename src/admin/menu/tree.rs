//! 菜单树结构
//!
//! 后端下发的菜单是嵌套的 `children`；客户端侧统一展平成按 ID 索引的节点表，
//! 父子关系只保存 ID 引用。

use crate::admin::menu::models::Menu;
use crate::admin::types::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// 勾选树节点（菜单授权用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    pub id: RecordId,
    pub label: String,
    #[serde(rename = "pId")]
    pub p_id: RecordId,
    #[serde(default, deserialize_with = "crate::admin::types::deserialize_vec_or_null")]
    pub children: Vec<MenuTree>,
}

/// 按钮树节点（按钮授权用）
pub type ButtonTree = MenuTree;

/// 节点表中的单个菜单
#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    /// 菜单记录本身，`children` 已被取出
    pub menu: Menu,
    pub parent: Option<RecordId>,
    pub children: Vec<RecordId>,
}

/// 按 ID 索引的菜单节点表
#[derive(Debug, Clone, Default)]
pub struct MenuArena {
    nodes: HashMap<RecordId, MenuNode>,
    roots: Vec<RecordId>,
}

impl MenuArena {
    /// 从菜单列表构建节点表
    ///
    /// 同时接受嵌套列表（通过 `children` 表达层级）和扁平列表（只有 `parentId`）。
    /// 重复 ID 保留先出现的一条；`parentId` 指向不存在的菜单时视为顶层。
    pub fn from_records(records: Vec<Menu>) -> Self {
        let mut nodes: HashMap<RecordId, MenuNode> = HashMap::new();
        let mut order: Vec<RecordId> = Vec::new();
        // (菜单, 嵌套结构中的父节点)
        let mut stack: Vec<(Menu, Option<RecordId>)> =
            records.into_iter().rev().map(|m| (m, None)).collect();

        while let Some((mut menu, nested_parent)) = stack.pop() {
            let id = menu.id;
            if nodes.contains_key(&id) {
                warn!("[MenuArena] 重复的菜单ID: {}，忽略后出现的记录", id);
                continue;
            }
            let children = menu.children.take().unwrap_or_default();
            for child in children.into_iter().rev() {
                stack.push((child, Some(id)));
            }
            let parent = nested_parent.or(Some(menu.parent_id).filter(|p| *p != 0 && *p != id));
            order.push(id);
            nodes.insert(
                id,
                MenuNode {
                    menu,
                    parent,
                    children: Vec::new(),
                },
            );
        }

        let mut roots = Vec::new();
        for id in &order {
            let parent = nodes.get(id).and_then(|n| n.parent);
            match parent {
                Some(p) if nodes.contains_key(&p) && !Self::creates_cycle(&nodes, *id, p) => {
                    if let Some(parent_node) = nodes.get_mut(&p) {
                        parent_node.children.push(*id);
                    }
                }
                _ => {
                    if let Some(node) = nodes.get_mut(id) {
                        node.parent = None;
                    }
                    roots.push(*id);
                }
            }
        }

        Self { nodes, roots }
    }

    /// 把 id 挂到 parent 下是否会成环（沿 parent 链回到 id）
    fn creates_cycle(nodes: &HashMap<RecordId, MenuNode>, id: RecordId, parent: RecordId) -> bool {
        let mut cursor = Some(parent);
        let mut steps = 0usize;
        while let Some(current) = cursor {
            if current == id || steps > nodes.len() {
                return true;
            }
            cursor = nodes.get(&current).and_then(|n| n.parent);
            steps += 1;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&MenuNode> {
        self.nodes.get(&id)
    }

    pub fn roots(&self) -> &[RecordId] {
        &self.roots
    }

    pub fn parent_of(&self, id: RecordId) -> Option<RecordId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children_of(&self, id: RecordId) -> &[RecordId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// 从直接父节点到顶层的祖先链
    pub fn ancestors(&self, id: RecordId) -> Vec<RecordId> {
        let mut chain = Vec::new();
        let mut cursor = self.parent_of(id);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.parent_of(current);
        }
        chain
    }

    /// 以 id 为根的子树（含自身），深度优先
    pub fn descendants(&self, id: RecordId) -> Vec<RecordId> {
        let mut out = Vec::new();
        if !self.nodes.contains_key(&id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children_of(current).iter().rev());
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        self.nodes.values()
    }
}
