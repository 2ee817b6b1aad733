// ==========================================
// 模具车间排产系统 - 优先级排序引擎
// ==========================================
// 职责: 基于 PriorityClassifier 输出对订单全排序
// 输入: 订单列表 + 基准日期
// 输出: 全序、确定性的 (Order, PriorityRecord) 列表
// ==========================================

use crate::config::PriorityRuleConfig;
use crate::domain::order::{Order, PriorityRecord};
use crate::domain::types::{OrderType, UrgencyLevel};
use crate::engine::classifier::PriorityClassifier;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// PriorityRanker - 优先级排序引擎
// ==========================================
pub struct PriorityRanker {
    classifier: PriorityClassifier,
}

impl PriorityRanker {
    /// 构造函数
    ///
    /// # 参数
    /// - `rules`: 优先级规则参数
    pub fn new(rules: PriorityRuleConfig) -> Self {
        Self {
            classifier: PriorityClassifier::new(rules),
        }
    }

    /// 内部判定引擎
    pub fn classifier(&self) -> &PriorityClassifier {
        &self.classifier
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序订单列表
    ///
    /// 排序键 (依次比较,命中即定序):
    /// 1) priority_score 升序
    /// 2) due_date 升序 (仅当两侧均有交期)
    /// 3) order_date 升序 (仅当两侧均有下单日期)
    /// 4) order_id 字典序 (兜底,保证全序与确定性)
    ///
    /// # 参数
    /// - `orders`: 待排序订单
    /// - `today`: 基准日期
    ///
    /// # 返回
    /// 排序后的 (Order, PriorityRecord) 列表 (优先级从高到低)
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn rank(&self, orders: Vec<Order>, today: NaiveDate) -> Vec<(Order, PriorityRecord)> {
        let mut ranked: Vec<(Order, PriorityRecord)> = orders
            .into_iter()
            .map(|order| {
                let record = self.classifier.classify(&order, today);
                (order, record)
            })
            .collect();

        ranked.sort_by(|a, b| Self::compare(a, b));
        ranked
    }

    /// 比较两个订单的优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 优先于 b
    fn compare(a: &(Order, PriorityRecord), b: &(Order, PriorityRecord)) -> Ordering {
        let (order_a, record_a) = a;
        let (order_b, record_b) = b;

        // 1. 比较 priority_score (升序,越小越优先)
        match record_a.priority_score.total_cmp(&record_b.priority_score) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. 比较 due_date (升序,仅当两侧均有交期;否则交由下一键)
        if let (Some(due_a), Some(due_b)) = (order_a.due_date, order_b.due_date) {
            match due_a.cmp(&due_b) {
                Ordering::Equal => {}
                other => return other,
            }
        }

        // 3. 比较 order_date (升序,仅当两侧均有下单日期)
        if let (Some(date_a), Some(date_b)) = (order_a.order_date, order_b.order_date) {
            match date_a.cmp(&date_b) {
                Ordering::Equal => {}
                other => return other,
            }
        }

        // 4. 比较 order_id (字典序,兜底保证全序)
        order_a.order_id.cmp(&order_b.order_id)
    }

    // ==========================================
    // 投影方法 (纯函数,组内保持插入顺序)
    // ==========================================

    /// 按紧急等级分组
    ///
    /// # 返回
    /// HashMap<紧急等级, 记录列表>,组内保持输入顺序
    pub fn group_by_urgency(
        &self,
        records: Vec<(Order, PriorityRecord)>,
    ) -> HashMap<UrgencyLevel, Vec<(Order, PriorityRecord)>> {
        let mut grouped: HashMap<UrgencyLevel, Vec<(Order, PriorityRecord)>> = HashMap::new();

        for record in records {
            let level = record.1.urgency_level;
            grouped.entry(level).or_insert_with(Vec::new).push(record);
        }

        grouped
    }

    /// 按订单类型过滤
    ///
    /// # 返回
    /// 命中类型的记录列表,保持输入顺序
    pub fn filter_by_type(
        &self,
        records: Vec<(Order, PriorityRecord)>,
        order_type: OrderType,
    ) -> Vec<(Order, PriorityRecord)> {
        records
            .into_iter()
            .filter(|(_, record)| record.order_type == order_type)
            .collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PriorityRanker {
    fn default() -> Self {
        Self::new(PriorityRuleConfig::default())
    }
}
