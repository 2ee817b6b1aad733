// ==========================================
// 模具车间排产系统 - 产能领域模型
// ==========================================
// 红线: 产能约束优先于订单优先级
// 用途: 静态产能表,排产运行期间只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// MoldCapacity - 模具日产能
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldCapacity {
    pub mold_id: String,                     // 模具代码
    pub daily_capacity: u32,                 // 单日产能 (件)
    pub compatible_stock_models: Vec<String>, // 兼容库存型号集合
}

impl MoldCapacity {
    /// 检查模具是否兼容指定库存型号
    pub fn is_compatible_with(&self, stock_model_id: &str) -> bool {
        self.compatible_stock_models
            .iter()
            .any(|m| m == stock_model_id)
    }
}

// ==========================================
// EmployeeCapacity - 员工日产能
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCapacity {
    pub employee_id: String,     // 员工代码
    pub daily_hours: f64,        // 单日工时上限 (小时)
    pub available_days: Vec<u32>, // 可用工作日集合 (1=周一..5=周五)
}

impl EmployeeCapacity {
    /// 检查员工在指定工作日是否可用
    pub fn is_available_on(&self, day: u32) -> bool {
        self.available_days.contains(&day)
    }
}
