// ==========================================
// 模具车间排产系统 - 领域类型定义
// ==========================================
// 红线: 紧急等级是"等级制",优先分数是"评分制",两者并存
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单类型 (Order Type)
// ==========================================
// 判定依据: 库存型号引用是否完整 (缺失/哨兵值 => 信息不全)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    ProductionOrder,  // 生产订单,可排产
    NeedsInformation, // 信息不全,待补充型号
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::ProductionOrder => write!(f, "PRODUCTION_ORDER"),
            OrderType::NeedsInformation => write!(f, "NEEDS_INFORMATION"),
        }
    }
}

// ==========================================
// 紧急等级 (Urgency Level)
// ==========================================
// 由距交期天数派生,升序声明: 等级越"大"越紧急
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    Low,      // 正常 (>10天或无交期)
    Medium,   // 关注 (6-10天)
    High,     // 紧张 (3-5天)
    Critical, // 红线 (<=2天或已超期)
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyLevel::Low => write!(f, "LOW"),
            UrgencyLevel::Medium => write!(f, "MEDIUM"),
            UrgencyLevel::High => write!(f, "HIGH"),
            UrgencyLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl UrgencyLevel {
    /// 从字符串解析紧急等级
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Some(UrgencyLevel::Low),
            "MEDIUM" => Some(UrgencyLevel::Medium),
            "HIGH" => Some(UrgencyLevel::High),
            "CRITICAL" => Some(UrgencyLevel::Critical),
            _ => None,
        }
    }
}

// ==========================================
// 库存型号哨兵值 (Stock Model Sentinels)
// ==========================================
// 命中任一哨兵值(不区分大小写)即视为"信息不全"
pub const STOCK_MODEL_SENTINELS: [&str; 3] = ["none", "unprocessed", "universal"];

/// 判断库存型号引用是否缺失或为哨兵值
///
/// # 参数
/// - `stock_model_id`: 库存型号引用 (None/空串视为缺失)
///
/// # 返回
/// - `true`: 缺失或命中哨兵值,订单信息不全
pub fn is_sentinel_stock_model(stock_model_id: Option<&str>) -> bool {
    match stock_model_id {
        Some(id) if !id.is_empty() => {
            let lower = id.to_lowercase();
            STOCK_MODEL_SENTINELS.iter().any(|s| *s == lower)
        }
        _ => true,
    }
}
