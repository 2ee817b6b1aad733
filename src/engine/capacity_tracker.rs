// ==========================================
// 模具车间排产系统 - 产能台账
// ==========================================
// 红线: 产能消耗只增不减,运行中途不得重置
// ==========================================
// 职责: 记录 (周, 工作日) 格内模具件数与员工工时的已消耗量
// 生命周期: 单次 generate_schedule 调用,用毕即弃
// 并发约束: 不得在并发排产请求间共享实例,每次调用各自新建
// ==========================================

use crate::domain::capacity::{EmployeeCapacity, MoldCapacity};
use std::collections::HashMap;

// ==========================================
// CapacityTracker - 产能台账
// ==========================================
pub struct CapacityTracker {
    // 静态上限 (构造时快照,不可变)
    mold_daily_capacity: HashMap<String, u32>,
    employee_daily_hours: HashMap<String, f64>,
    employee_available_days: HashMap<String, Vec<u32>>,

    // 已消耗量,键: (代码, 周标签, 工作日)
    mold_used: HashMap<(String, String, u32), u32>,
    employee_used: HashMap<(String, String, u32), f64>,
}

impl CapacityTracker {
    /// 构造函数
    ///
    /// # 参数
    /// - `molds`: 模具产能表 (静态输入)
    /// - `employees`: 员工产能表 (静态输入)
    ///
    /// # 返回
    /// 空台账 (未消耗任何产能)
    pub fn new(molds: &[MoldCapacity], employees: &[EmployeeCapacity]) -> Self {
        let mold_daily_capacity = molds
            .iter()
            .map(|m| (m.mold_id.clone(), m.daily_capacity))
            .collect();

        let employee_daily_hours = employees
            .iter()
            .map(|e| (e.employee_id.clone(), e.daily_hours))
            .collect();

        let employee_available_days = employees
            .iter()
            .map(|e| (e.employee_id.clone(), e.available_days.clone()))
            .collect();

        Self {
            mold_daily_capacity,
            employee_daily_hours,
            employee_available_days,
            mold_used: HashMap::new(),
            employee_used: HashMap::new(),
        }
    }

    // ==========================================
    // 查询方法
    // ==========================================

    /// 检查模具在指定 (周, 工作日) 格是否还有产能
    ///
    /// # 返回
    /// - `true`: 已消耗 + units_needed <= 日产能上限
    /// - `false`: 超限或模具未配置
    pub fn has_mold_capacity(&self, mold_id: &str, week: &str, day: u32, units_needed: u32) -> bool {
        let daily_capacity = match self.mold_daily_capacity.get(mold_id) {
            Some(cap) => *cap,
            None => return false, // 未配置的模具不贡献任何产能
        };

        let used = self
            .mold_used
            .get(&(mold_id.to_string(), week.to_string(), day))
            .copied()
            .unwrap_or(0);

        used + units_needed <= daily_capacity
    }

    /// 检查员工在指定 (周, 工作日) 格是否还有工时
    ///
    /// # 返回
    /// - `true`: 当日在可用工作日集合内,且已消耗 + hours_needed <= 日工时上限
    pub fn has_employee_capacity(
        &self,
        employee_id: &str,
        week: &str,
        day: u32,
        hours_needed: f64,
    ) -> bool {
        let daily_hours = match self.employee_daily_hours.get(employee_id) {
            Some(hours) => *hours,
            None => return false,
        };

        // 不在可用工作日集合内 => 无工时
        let available = self
            .employee_available_days
            .get(employee_id)
            .map(|days| days.contains(&day))
            .unwrap_or(false);
        if !available {
            return false;
        }

        let used = self
            .employee_used
            .get(&(employee_id.to_string(), week.to_string(), day))
            .copied()
            .unwrap_or(0.0);

        used + hours_needed <= daily_hours
    }

    // ==========================================
    // 提交方法
    // ==========================================
    // 约定: 每次成功落位恰好调用一次,调用方负责先查询后提交

    /// 提交模具产能消耗
    pub fn commit_mold(&mut self, mold_id: &str, week: &str, day: u32, units: u32) {
        *self
            .mold_used
            .entry((mold_id.to_string(), week.to_string(), day))
            .or_insert(0) += units;
    }

    /// 提交员工工时消耗
    pub fn commit_employee(&mut self, employee_id: &str, week: &str, day: u32, hours: f64) {
        *self
            .employee_used
            .entry((employee_id.to_string(), week.to_string(), day))
            .or_insert(0.0) += hours;
    }

    // ==========================================
    // 观测方法 (测试与风险快照用)
    // ==========================================

    /// 查询模具在指定格的已消耗件数
    pub fn mold_units_used(&self, mold_id: &str, week: &str, day: u32) -> u32 {
        self.mold_used
            .get(&(mold_id.to_string(), week.to_string(), day))
            .copied()
            .unwrap_or(0)
    }

    /// 查询员工在指定格的已消耗工时
    pub fn employee_hours_used(&self, employee_id: &str, week: &str, day: u32) -> f64 {
        self.employee_used
            .get(&(employee_id.to_string(), week.to_string(), day))
            .copied()
            .unwrap_or(0.0)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // 测试数据准备
    // ==========================================

    fn test_molds() -> Vec<MoldCapacity> {
        vec![MoldCapacity {
            mold_id: "mold-A".to_string(),
            daily_capacity: 2,
            compatible_stock_models: vec!["cf-123".to_string()],
        }]
    }

    fn test_employees() -> Vec<EmployeeCapacity> {
        vec![EmployeeCapacity {
            employee_id: "emp-1".to_string(),
            daily_hours: 8.0,
            available_days: vec![1, 2, 3],
        }]
    }

    #[test]
    fn test_mold_capacity_bounded_by_daily_limit() {
        // 模具日产能: 消耗到上限后拒绝
        let mut tracker = CapacityTracker::new(&test_molds(), &test_employees());

        assert!(tracker.has_mold_capacity("mold-A", "2026-W04", 1, 1));
        tracker.commit_mold("mold-A", "2026-W04", 1, 1);

        assert!(tracker.has_mold_capacity("mold-A", "2026-W04", 1, 1)); // 1 + 1 <= 2
        tracker.commit_mold("mold-A", "2026-W04", 1, 1);

        assert!(!tracker.has_mold_capacity("mold-A", "2026-W04", 1, 1), "满格后应拒绝");
        assert_eq!(tracker.mold_units_used("mold-A", "2026-W04", 1), 2);
    }

    #[test]
    fn test_capacity_cells_are_independent() {
        // 不同 (周, 工作日) 格互不影响
        let mut tracker = CapacityTracker::new(&test_molds(), &test_employees());

        tracker.commit_mold("mold-A", "2026-W04", 1, 2); // 填满周一
        assert!(!tracker.has_mold_capacity("mold-A", "2026-W04", 1, 1));
        assert!(tracker.has_mold_capacity("mold-A", "2026-W04", 2, 1), "周二不受影响");
        assert!(tracker.has_mold_capacity("mold-A", "2026-W05", 1, 1), "下周一不受影响");
    }

    #[test]
    fn test_employee_hours_bounded_by_daily_limit() {
        // 员工日工时: 消耗到上限后拒绝
        let mut tracker = CapacityTracker::new(&test_molds(), &test_employees());

        assert!(tracker.has_employee_capacity("emp-1", "2026-W04", 1, 5.0));
        tracker.commit_employee("emp-1", "2026-W04", 1, 5.0);

        assert!(tracker.has_employee_capacity("emp-1", "2026-W04", 1, 3.0)); // 5 + 3 <= 8
        assert!(!tracker.has_employee_capacity("emp-1", "2026-W04", 1, 3.5), "超时应拒绝");
    }

    #[test]
    fn test_employee_unavailable_day_has_no_capacity() {
        // 不在可用工作日集合内 => 无工时
        let tracker = CapacityTracker::new(&test_molds(), &test_employees());

        assert!(tracker.has_employee_capacity("emp-1", "2026-W04", 3, 1.0));
        assert!(!tracker.has_employee_capacity("emp-1", "2026-W04", 4, 1.0), "周四不可用");
        assert!(!tracker.has_employee_capacity("emp-1", "2026-W04", 5, 1.0), "周五不可用");
    }

    #[test]
    fn test_unknown_mold_or_employee_contributes_nothing() {
        // 未配置的模具/员工不贡献产能 (不校验,不报错)
        let tracker = CapacityTracker::new(&test_molds(), &test_employees());

        assert!(!tracker.has_mold_capacity("mold-X", "2026-W04", 1, 1));
        assert!(!tracker.has_employee_capacity("emp-X", "2026-W04", 1, 1.0));
    }

    #[test]
    fn test_consumption_only_grows() {
        // 消耗只增不减
        let mut tracker = CapacityTracker::new(&test_molds(), &test_employees());

        tracker.commit_employee("emp-1", "2026-W04", 2, 2.5);
        tracker.commit_employee("emp-1", "2026-W04", 2, 2.5);
        assert_eq!(tracker.employee_hours_used("emp-1", "2026-W04", 2), 5.0);
    }
}
