// ==========================================
// 模具车间排产系统 - 订单领域模型
// ==========================================
// 职责: 定义订单主数据与排产派生记录
// 红线: Order 为持久层所有,引擎层只读,不得反向修改
// ==========================================

use crate::domain::types::{OrderType, UrgencyLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Order - 订单主数据
// ==========================================
// 用途: 持久层写入,引擎层只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // ===== 主键 =====
    pub order_id: String, // 订单唯一标识

    // ===== 关联引用 =====
    pub customer_id: Option<String>,    // 客户引用
    pub stock_model_id: Option<String>, // 库存型号引用 (排产准入依据)

    // ===== 生产信息 =====
    pub department: Option<String>, // 当前生产部门 (None = 未进入流程)

    // ===== 时间信息 =====
    pub due_date: Option<NaiveDate>,   // 交货期
    pub order_date: Option<NaiveDate>, // 下单日期

    // ===== 透传字段 =====
    // 引擎只读取上述封闭字段集,其余业务字段原样透传
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

// ==========================================
// PriorityRecord - 优先级派生记录
// ==========================================
// 生命周期: 单次排产运行,每次重算,不落库
// 不变量: order_type/urgency_level 是订单字段在求值时刻的纯函数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityRecord {
    pub order_id: String,           // 关联 Order
    pub order_type: OrderType,      // 订单类型
    pub urgency_level: UrgencyLevel, // 紧急等级
    pub priority_score: f64,        // 优先分数 (越小越优先)
    pub priority_reason: String,    // 优先级原因 (仅由两个枚举值派生)
}

// ==========================================
// ScheduledAssignment - 排产落位
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledAssignment {
    pub week: String,         // ISO 周标签 ("YYYY-W##")
    pub day: u32,             // 工作日编号 (1=周一..5=周五)
    pub mold_id: String,      // 占用模具
    pub employee_id: String,  // 占用员工
    pub estimated_hours: f64, // 预估工时
}

// ==========================================
// ScheduledOrder - 排产结果记录
// ==========================================
// 说明: 无可行落位的订单不出现在结果中 (正常结果,非错误)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledOrder {
    pub priority: PriorityRecord,
    pub assignment: ScheduledAssignment,
}

impl ScheduledOrder {
    /// 订单标识快捷访问
    pub fn order_id(&self) -> &str {
        &self.priority.order_id
    }
}
