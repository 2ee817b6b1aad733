// ==========================================
// 模具车间排产系统 - 优先级规则配置
// ==========================================
// 用途: PriorityClassifier 构造时注入,单次运行内不可变
// 红线: 无进程级单例,调用方显式构造
// ==========================================

use serde::{Deserialize, Serialize};

/// 紧急等级加成 (负值提升优先级)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UrgencyBonus {
    #[serde(default = "default_critical_bonus")]
    pub critical: f64,
    #[serde(default = "default_high_bonus")]
    pub high: f64,
    #[serde(default)]
    pub medium: f64,
    #[serde(default = "default_low_bonus")]
    pub low: f64,
}

impl Default for UrgencyBonus {
    fn default() -> Self {
        Self {
            critical: default_critical_bonus(),
            high: default_high_bonus(),
            medium: 0.0,
            low: default_low_bonus(),
        }
    }
}

fn default_critical_bonus() -> f64 {
    -10.0
}

fn default_high_bonus() -> f64 {
    -5.0
}

fn default_low_bonus() -> f64 {
    5.0
}

/// 优先级规则参数
///
/// 分数公式: score = base(order_type) + bonus(urgency_level) + due_date_weight * days_until_due
///
/// 说明:
/// - 分数越小越优先。
/// - NEEDS_INFORMATION 基准分 99,整体押后: 缺型号的订单排不了产,
///   但同层内仍按紧急程度排序。
/// - 无交期时 due_date_weight 项为 0。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityRuleConfig {
    /// 生产订单基准分
    #[serde(default = "default_production_order_base")]
    pub production_order_base: f64,

    /// 信息不全订单基准分
    #[serde(default = "default_needs_information_base")]
    pub needs_information_base: f64,

    /// 紧急等级加成
    #[serde(default)]
    pub urgency_bonus: UrgencyBonus,

    /// 距交期天数权重
    #[serde(default = "default_due_date_weight")]
    pub due_date_weight: f64,
}

impl Default for PriorityRuleConfig {
    fn default() -> Self {
        Self {
            production_order_base: default_production_order_base(),
            needs_information_base: default_needs_information_base(),
            urgency_bonus: UrgencyBonus::default(),
            due_date_weight: default_due_date_weight(),
        }
    }
}

fn default_production_order_base() -> f64 {
    50.0
}

fn default_needs_information_base() -> f64 {
    99.0
}

fn default_due_date_weight() -> f64 {
    0.1
}
