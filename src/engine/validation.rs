// ==========================================
// 模具车间排产系统 - 输入校验引擎
// ==========================================
// 职责: 排产前的产能表与窗口配置校验 (显式可选层)
// 说明: 分配引擎本身是全函数,不校验不报错,坏行只是永不匹配;
//       需要"坏配置大声失败"的调用方走 generate_schedule_checked
// ==========================================

use crate::config::ScheduleConfig;
use crate::domain::capacity::{EmployeeCapacity, MoldCapacity};
use crate::error::{SchedulingError, SchedulingResult};

/// 合法工作日编号范围 (1=周一..5=周五)
const VALID_WORK_DAYS: std::ops::RangeInclusive<u32> = 1..=5;

// ==========================================
// InputValidator - 输入校验引擎
// ==========================================
pub struct InputValidator {
    // 无状态引擎,不需要注入依赖
}

impl InputValidator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 校验全部输入,命中首个问题即返回
    pub fn validate_all(
        &self,
        molds: &[MoldCapacity],
        employees: &[EmployeeCapacity],
        config: &ScheduleConfig,
    ) -> SchedulingResult<()> {
        self.validate_mold_capacities(molds)?;
        self.validate_employee_capacities(employees)?;
        self.validate_schedule_config(config)?;
        Ok(())
    }

    /// 校验模具产能表
    ///
    /// 规则:
    /// 1) daily_capacity 必须大于 0 (零产能行永不匹配,属静默饿死配置)
    /// 2) compatible_stock_models 不得为空
    pub fn validate_mold_capacities(&self, molds: &[MoldCapacity]) -> SchedulingResult<()> {
        for mold in molds {
            if mold.daily_capacity == 0 {
                return Err(SchedulingError::InvalidMoldCapacity {
                    mold_id: mold.mold_id.clone(),
                    daily_capacity: mold.daily_capacity,
                });
            }
            if mold.compatible_stock_models.is_empty() {
                return Err(SchedulingError::EmptyCompatibleModels(mold.mold_id.clone()));
            }
        }
        Ok(())
    }

    /// 校验员工产能表
    ///
    /// 规则:
    /// 1) daily_hours 必须为有限正数
    /// 2) available_days 不得为空,且编号必须在 1..=5
    pub fn validate_employee_capacities(
        &self,
        employees: &[EmployeeCapacity],
    ) -> SchedulingResult<()> {
        for emp in employees {
            if !emp.daily_hours.is_finite() || emp.daily_hours <= 0.0 {
                return Err(SchedulingError::InvalidEmployeeHours {
                    employee_id: emp.employee_id.clone(),
                    daily_hours: emp.daily_hours,
                });
            }
            if emp.available_days.is_empty() {
                return Err(SchedulingError::EmptyAvailableDays(emp.employee_id.clone()));
            }
            for &day in &emp.available_days {
                if !VALID_WORK_DAYS.contains(&day) {
                    return Err(SchedulingError::InvalidAvailableDay {
                        employee_id: emp.employee_id.clone(),
                        day,
                    });
                }
            }
        }
        Ok(())
    }

    /// 校验排产窗口配置
    ///
    /// 规则:
    /// 1) work_days 不得为空,编号必须在 1..=5
    /// 2) weeks_to_schedule 必须大于 0
    pub fn validate_schedule_config(&self, config: &ScheduleConfig) -> SchedulingResult<()> {
        if config.work_days.is_empty() {
            return Err(SchedulingError::EmptyWorkDays);
        }
        for &day in &config.work_days {
            if !VALID_WORK_DAYS.contains(&day) {
                return Err(SchedulingError::InvalidWorkDay(day));
            }
        }
        if config.weeks_to_schedule == 0 {
            return Err(SchedulingError::EmptyScheduleWindow);
        }
        Ok(())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
