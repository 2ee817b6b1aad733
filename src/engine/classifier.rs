// ==========================================
// 模具车间排产系统 - 优先级判定引擎
// ==========================================
// 红线: 判定是订单字段在求值时刻的纯函数,同一时刻重算两次结果必须一致
// ==========================================
// 职责: 订单类型判定 + 紧急等级判定 + 优先分数计算
// 输入: Order + 基准日期
// 输出: PriorityRecord (不落库,每次运行重算)
// ==========================================

use crate::config::PriorityRuleConfig;
use crate::domain::order::{Order, PriorityRecord};
use crate::domain::types::{is_sentinel_stock_model, OrderType, UrgencyLevel};
use chrono::NaiveDate;
use serde_json::json;

// ==========================================
// PriorityClassifier - 优先级判定引擎
// ==========================================
pub struct PriorityClassifier {
    rules: PriorityRuleConfig,
}

impl PriorityClassifier {
    /// 构造函数
    ///
    /// # 参数
    /// - `rules`: 优先级规则参数 (单次运行内不可变)
    pub fn new(rules: PriorityRuleConfig) -> Self {
        Self { rules }
    }

    /// 当前生效的规则参数
    pub fn rules(&self) -> &PriorityRuleConfig {
        &self.rules
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 判定单个订单的优先级
    ///
    /// 规则:
    /// 1) order_type: 库存型号缺失/哨兵值 => NEEDS_INFORMATION,否则 PRODUCTION_ORDER
    /// 2) urgency_level: 按距交期天数分档 (无交期 => LOW)
    /// 3) priority_score = base + bonus + due_date_weight * days_until_due
    /// 4) priority_reason: 仅由两个枚举值派生的固定模板
    ///
    /// # 参数
    /// - `order`: 订单主数据 (只读)
    /// - `today`: 基准日期
    ///
    /// # 返回
    /// 优先级派生记录 (无副作用)
    pub fn classify(&self, order: &Order, today: NaiveDate) -> PriorityRecord {
        let order_type = self.determine_order_type(order.stock_model_id.as_deref());
        let days_until_due = order.due_date.map(|due| (due - today).num_days());
        let urgency_level = self.determine_urgency_level(days_until_due);
        let priority_score = self.compute_score(order_type, urgency_level, days_until_due);
        let priority_reason = Self::build_reason(order_type, urgency_level);

        PriorityRecord {
            order_id: order.order_id.clone(),
            order_type,
            urgency_level,
            priority_score,
            priority_reason,
        }
    }

    // ==========================================
    // 判定规则
    // ==========================================

    /// 判定订单类型
    ///
    /// 边界处理:
    /// - stock_model_id 为 None 或空字符串 => NEEDS_INFORMATION
    /// - 哨兵值 none/unprocessed/universal (不区分大小写) => NEEDS_INFORMATION
    pub fn determine_order_type(&self, stock_model_id: Option<&str>) -> OrderType {
        if is_sentinel_stock_model(stock_model_id) {
            OrderType::NeedsInformation
        } else {
            OrderType::ProductionOrder
        }
    }

    /// 判定紧急等级
    ///
    /// 分档 (按距交期天数):
    /// - 无交期 => LOW
    /// - days < 0 (超期) => CRITICAL
    /// - 0..=2 => CRITICAL
    /// - 3..=5 => HIGH
    /// - 6..=10 => MEDIUM
    /// - 其他 => LOW
    pub fn determine_urgency_level(&self, days_until_due: Option<i64>) -> UrgencyLevel {
        match days_until_due {
            None => UrgencyLevel::Low,
            Some(days) if days <= 2 => UrgencyLevel::Critical, // 超期与临近交期同档
            Some(days) if days <= 5 => UrgencyLevel::High,
            Some(days) if days <= 10 => UrgencyLevel::Medium,
            Some(_) => UrgencyLevel::Low,
        }
    }

    /// 计算优先分数 (越小越优先)
    fn compute_score(
        &self,
        order_type: OrderType,
        urgency_level: UrgencyLevel,
        days_until_due: Option<i64>,
    ) -> f64 {
        let base = match order_type {
            OrderType::ProductionOrder => self.rules.production_order_base,
            OrderType::NeedsInformation => self.rules.needs_information_base,
        };

        let bonus = match urgency_level {
            UrgencyLevel::Critical => self.rules.urgency_bonus.critical,
            UrgencyLevel::High => self.rules.urgency_bonus.high,
            UrgencyLevel::Medium => self.rules.urgency_bonus.medium,
            UrgencyLevel::Low => self.rules.urgency_bonus.low,
        };

        // 无交期时不计交期项
        let due_term = days_until_due
            .map(|days| self.rules.due_date_weight * days as f64)
            .unwrap_or(0.0);

        base + bonus + due_term
    }

    /// 生成优先级原因 (固定模板,仅由两个枚举值派生)
    fn build_reason(order_type: OrderType, urgency_level: UrgencyLevel) -> String {
        let type_label = match order_type {
            OrderType::ProductionOrder => "Production order (ready for scheduling)",
            OrderType::NeedsInformation => "Needs information (missing or unusable stock model)",
        };

        let urgency_label = match urgency_level {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
        };

        format!("{} - {} urgency", type_label, urgency_label)
    }

    /// 生成判定原因 (可解释性,供上层展示)
    ///
    /// # 返回
    /// JSON 格式的判定原因字符串
    pub fn generate_classify_reason(&self, order: &Order, today: NaiveDate) -> String {
        let record = self.classify(order, today);
        let days_until_due = order.due_date.map(|due| (due - today).num_days());

        json!({
            "order_id": record.order_id,
            "order_type": record.order_type.to_string(),
            "urgency_level": record.urgency_level.to_string(),
            "priority_score": record.priority_score,
            "details": {
                "today": today.to_string(),
                "due_date": order.due_date.map(|d| d.to_string()),
                "days_until_due": days_until_due,
                "stock_model_id": order.stock_model_id,
            }
        })
        .to_string()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PriorityClassifier {
    fn default() -> Self {
        Self::new(PriorityRuleConfig::default())
    }
}
